mod common;

use augora::{
    age_series, bucket_ages, count_by_gender, count_by_group, filter, filter_list, group_counts, AgeRange,
    AgeStrategy, FilterState, Gender, GroupKey, MAX_EXACT_AGES,
};

fn slugs(list: &[&augora::Deputy]) -> Vec<String> {
    list.iter().map(|d| d.slug.clone()).collect()
}

#[test]
fn groups_are_ranked_and_unaffiliated_is_last() {
    let data = common::data();
    let keys = data.roster.group_keys();
    assert_eq!(keys, [GroupKey::group("X"), GroupKey::group("Y"), GroupKey::Unaffiliated]);
    assert_eq!(FilterState::new(&data.roster).known_groups(), keys.as_slice());
}

#[test]
fn combined_filters_equal_chained_filters() {
    let data = common::data();
    let roster = &data.roster;
    let initial = FilterState::new(roster);

    let by_gender = initial.isolate_gender(Gender::Female);
    let by_keyword = initial.set_keyword("e");
    let both = by_gender.set_keyword("e");

    let chained = filter_list(&filter(roster, &by_gender), roster, &by_keyword);
    let reversed = filter_list(&filter(roster, &by_keyword), roster, &by_gender);
    assert_eq!(slugs(&chained), slugs(&filter(roster, &both)));
    assert_eq!(slugs(&reversed), slugs(&filter(roster, &both)));
}

#[test]
fn counts_ignore_their_own_dimension() {
    let data = common::data();
    let roster = &data.roster;
    let state = FilterState::new(roster)
        .isolate_group(&GroupKey::group("Y"))
        .isolate_gender(Gender::Male);

    assert_eq!(slugs(&filter(roster, &state)), ["denis-d"]);
    assert_eq!(count_by_group(roster, &state, &GroupKey::group("X")), 1);
    assert_eq!(count_by_group(roster, &state, &GroupKey::Unaffiliated), 0);
    assert_eq!(count_by_gender(roster, &state, Gender::Female), 1);
}

#[test]
fn unaffiliated_deputies_can_be_isolated_and_dismissed() {
    let data = common::data();
    let roster = &data.roster;
    let state = FilterState::new(roster).isolate_group(&GroupKey::Unaffiliated);
    assert_eq!(slugs(&filter(roster, &state)), ["eve-e"]);

    let state = FilterState::new(roster).dismiss_group(&GroupKey::Unaffiliated);
    assert_eq!(filter(roster, &state).len(), 4);
}

#[test]
fn group_counts_add_up_when_every_group_is_selected() {
    let data = common::data();
    let roster = &data.roster;
    let state = FilterState::new(roster)
        .set_age_range(AgeRange::new(35, 55))
        .toggle_gender(Gender::Male);

    let total: usize = group_counts(roster, &state).iter().map(|(_, n)| n).sum();
    assert_eq!(total, filter(roster, &state).len());
}

#[test]
fn age_range_clamps_to_the_roster() {
    let data = common::data();
    let roster = &data.roster;
    let domain = roster.age_domain().unwrap();
    assert_eq!(domain, AgeRange::new(30, 60));

    let state = FilterState::new(roster).set_age_range(AgeRange::new(18, 99).clamp_to(domain));
    assert!(state.is_initial(roster));
}

#[test]
fn reset_after_any_sequence_passes_everyone() {
    let data = common::data();
    let roster = &data.roster;
    let state = FilterState::new(roster)
        .toggle_all_groups(false)
        .toggle_group(&GroupKey::group("X"))
        .toggle_gender(Gender::Female)
        .toggle_gender(Gender::Male)
        .set_keyword("nobody")
        .set_age_range(AgeRange::single(40));
    assert!(filter(roster, &state).is_empty());
    assert_eq!(filter(roster, &state.reset(roster)).len(), roster.len());
}

#[test]
fn pyramid_halves_share_labels() {
    let data = common::data();
    let roster = &data.roster;
    let all = roster.all();

    let men = age_series(&all, roster, Some(Gender::Male), MAX_EXACT_AGES);
    let women = age_series(&all, roster, Some(Gender::Female), MAX_EXACT_AGES);
    let labels = |b: &[augora::AgeBucket]| b.iter().map(|x| x.label.clone()).collect::<Vec<_>>();
    assert_eq!(labels(&men), labels(&women));
    assert_eq!(men.iter().map(|b| b.total).sum::<usize>(), 2);
    assert_eq!(women.iter().map(|b| b.total).sum::<usize>(), 3);
}

#[test]
fn ranged_buckets_cover_every_deputy() {
    let data = common::data();
    let roster = &data.roster;
    let all = roster.all();
    for n in 1..=8 {
        let buckets = bucket_ages(&all, roster, AgeStrategy::Ranged(n));
        assert!(buckets.len() <= n);
        assert_eq!(buckets.iter().map(|b| b.total).sum::<usize>(), all.len());
        let ranges: Vec<AgeRange> = buckets.iter().map(|b| b.range().unwrap()).collect();
        assert!(ranges.windows(2).all(|w| w[0].max + 1 == w[1].min));
    }
}
