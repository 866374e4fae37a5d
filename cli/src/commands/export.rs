use anyhow::Result;

use crate::cli::{Cli, ExportArgs};
use crate::commands::load;

pub fn run(cli: &Cli, args: &ExportArgs) -> Result<()> {
    let data = load(cli)?;

    tracing::info!("[export] writing data pack to {}", args.output.display());
    data.write_to_dir(&args.output)?;

    if !cli.json {
        println!(
            "[export] {} deputies, {} groups, {} zones -> {}",
            data.roster.len(),
            data.roster.groups().len(),
            data.atlas.len(),
            args.output.display(),
        );
    }
    Ok(())
}
