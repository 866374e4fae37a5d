use anyhow::Result;
use augora::{
    activity_max, age_series, average_age, filter, gender_counts, group_counts, group_series, resolve, AgeBucket,
    Gender, ZoneView, MAX_EXACT_AGES,
};
use serde_json::{json, Value};

use crate::cli::{Cli, StatsArgs};
use crate::commands::{filter_state, load};

fn pyramid_json(buckets: &[AgeBucket]) -> Value {
    buckets.iter()
        .map(|b| json!({ "label": b.label, "total": b.total }))
        .collect()
}

pub fn run(cli: &Cli, args: &StatsArgs) -> Result<()> {
    let data = load(cli)?;
    let (roster, atlas) = (&data.roster, &data.atlas);

    let state = filter_state(roster, &args.filter)?;
    let filtered = filter(roster, &state);
    let zone = resolve(atlas, args.path.as_deref().unwrap_or("0"));
    let view = ZoneView::new(atlas, zone, &filtered);
    let list = &view.deputies;

    let series = group_series(list, roster);
    let men = age_series(list, roster, Some(Gender::Male), MAX_EXACT_AGES);
    let women = age_series(list, roster, Some(Gender::Female), MAX_EXACT_AGES);

    if cli.json {
        let summary = json!({
            "zone": view.title(),
            "deputies": list.len(),
            "groups": series,
            "average_age": average_age(list),
            "activity_max": activity_max(list),
            "pyramid": { "H": pyramid_json(&men), "F": pyramid_json(&women) },
            "filter_counts": {
                "groups": group_counts(roster, &state).iter()
                    .map(|(key, n)| (key.to_string(), json!(n)))
                    .collect::<serde_json::Map<_, _>>(),
                "genders": gender_counts(roster, &state).iter()
                    .map(|(g, n)| (g.to_string(), json!(n)))
                    .collect::<serde_json::Map<_, _>>(),
            },
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}: {} deputies", view.title(), list.len());
    for datum in &series {
        println!("  {:<10} {:>4}  {}", datum.code, datum.value, datum.label);
    }
    match average_age(list) {
        Some(age) => println!("  average age: {age}"),
        None => println!("  average age: -"),
    }
    println!("  {:>9} {:>4} {:>4}", "age", "H", "F");
    for (m, w) in men.iter().zip(&women) {
        println!("  {:>9} {:>4} {:>4}", m.label, m.total, w.total);
    }
    Ok(())
}
