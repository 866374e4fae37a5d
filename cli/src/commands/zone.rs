use anyhow::Result;
use augora::{filter_list, resolve, ZoneView};
use rand::{rngs::StdRng, SeedableRng};

use crate::cli::{Cli, ZoneArgs};
use crate::commands::{filter_state, load};

pub fn run(cli: &Cli, args: &ZoneArgs) -> Result<()> {
    let data = load(cli)?;
    let (roster, atlas) = (&data.roster, &data.atlas);

    let state = filter_state(roster, &args.filter)?;
    let mut rng = list_rng(args.seed);
    let filtered = filter_list(&roster.shuffled(&mut rng), roster, &state);

    let zone = resolve(atlas, args.path.as_deref().unwrap_or("0"));
    let view = ZoneView::new(atlas, zone, &filtered);

    if args.geojson {
        println!("{}", serde_json::to_string_pretty(&atlas.to_geojson(&view.displayed))?);
        return Ok(());
    }
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&view.to_json(roster))?);
        return Ok(());
    }

    let crumbs: Vec<&str> = view.breadcrumb.iter().map(|z| &*z.name).collect();
    println!("{} [{}]", view.title(), view.url());
    if !crumbs.is_empty() {
        println!("  {}", crumbs.join(" > "));
    }
    println!("  {} of {} deputies", view.deputies.len(), roster.len());

    for area in &view.displayed {
        println!(
            "  {:<12} {:<40} {:>4}  {}",
            atlas.feature_to_url(area),
            atlas.title(area),
            view.deputies_in(area).len(),
            view.fill_color(area, roster),
        );
    }

    if !view.ghosts.is_empty() {
        let ghosts: Vec<&str> = view.ghosts.iter().map(|z| &*z.name).collect();
        println!("  around: {}", ghosts.join(", "));
    }

    if view.displayed.len() <= 1 {
        for deputy in &view.deputies {
            let group = roster.group_of(deputy).map_or("-", |g| g.code.as_str());
            println!("  * {} ({}, {} ans, {})", deputy.name, deputy.gender, deputy.age, group);
        }
    }

    Ok(())
}

/// Order of the deputy list, reproducible when seeded.
fn list_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

#[cfg(test)]
mod tests {
    use augora::{Deputy, PartyGroup, Roster};

    use super::*;

    #[test]
    fn seeded_listing_is_stable() {
        let deputies: Vec<Deputy> = (1..=20)
            .map(|i| serde_json::from_value(serde_json::json!({
                "slug": format!("d{i}"), "name": format!("Deputy {i}"), "gender": "F",
                "age": 30 + i, "department": "75", "district": i,
            })).unwrap())
            .collect();
        let roster = Roster::new(deputies, Vec::<PartyGroup>::new());
        let slugs = |seed| roster.shuffled(&mut list_rng(Some(seed))).iter().map(|d| d.slug.clone()).collect::<Vec<_>>();

        assert_eq!(slugs(7), slugs(7));
        let mut sorted = slugs(7);
        sorted.sort();
        let mut expected: Vec<_> = roster.deputies().iter().map(|d| d.slug.clone()).collect();
        expected.sort();
        assert_eq!(sorted, expected);
    }
}
