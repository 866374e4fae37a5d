use anyhow::Result;

use crate::cli::Cli;
use crate::commands::load;

pub fn run(cli: &Cli) -> Result<()> {
    let data = load(cli)?;
    let routes = data.atlas.routes();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&routes)?);
    } else {
        for route in &routes {
            println!("/{route}");
        }
    }
    Ok(())
}
