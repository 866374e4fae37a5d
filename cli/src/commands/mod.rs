pub mod export;
pub mod routes;
pub mod stats;
pub mod zone;

use anyhow::{bail, ensure, Result};
use augora::{AgeRange, DataPack, FilterState, GroupKey, Roster};

use crate::cli::{Cli, FilterArgs};

pub(crate) fn load(cli: &Cli) -> Result<DataPack> {
    tracing::info!("[cli] loading data pack from {}", cli.data.display());
    DataPack::read_from_dir(&cli.data)
}

fn group_key(roster: &Roster, code: &str) -> Result<GroupKey> {
    let key = match code.trim() {
        "none" | "unaffiliated" => GroupKey::Unaffiliated,
        code => GroupKey::group(code),
    };
    if !roster.contains_key(&key) {
        let known: Vec<String> = roster.group_keys().iter().map(ToString::to_string).collect();
        bail!("[cli] Unknown group '{code}', expected one of: {}", known.join(", "));
    }
    Ok(key)
}

/// Apply command-line filters on top of the initial state.
pub(crate) fn filter_state(roster: &Roster, args: &FilterArgs) -> Result<FilterState> {
    let mut state = FilterState::new(roster);

    if let Some(keyword) = &args.keyword {
        state = state.set_keyword(keyword);
    }

    if !args.only_groups.is_empty() {
        state = state.toggle_all_groups(false);
        for code in &args.only_groups {
            let key = group_key(roster, code)?;
            if !state.includes_group(&key) {
                state = state.toggle_group(&key);
            }
        }
    }
    for code in &args.exclude_groups {
        let key = group_key(roster, code)?;
        if state.includes_group(&key) {
            state = state.toggle_group(&key);
        }
    }

    if let Some(gender) = args.gender {
        state = state.isolate_gender(gender);
    }

    if args.min_age.is_some() || args.max_age.is_some() {
        state = state.set_age_range(age_range(roster, state.age(), args)?);
    }

    Ok(state)
}

/// Requested bounds, unset ones taken from `current`, clamped to the roster's
/// ages. A range selecting no age of the roster is an error.
fn age_range(roster: &Roster, current: AgeRange, args: &FilterArgs) -> Result<AgeRange> {
    let range = AgeRange {
        min: args.min_age.unwrap_or(current.min),
        max: args.max_age.unwrap_or(current.max),
    };
    ensure!(range.min <= range.max, "[cli] Empty age range: --min-age {} is above --max-age {}", range.min, range.max);

    let Some(domain) = roster.age_domain() else { return Ok(range) };
    ensure!(
        range.min <= domain.max && domain.min <= range.max,
        "[cli] No deputy aged {range}, roster ages are {domain}"
    );
    Ok(range.clamp_to(domain))
}
