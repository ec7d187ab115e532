use std::collections::HashSet;

use ruleboard::{apply, Command, Rule, RuleSet, State};

fn rules(ids: &[u32]) -> Vec<Rule> {
    ids.iter()
        .map(|&id| {
            let mut r = Rule::draft(id);
            r.is_new = false;
            r
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Naming
// ---------------------------------------------------------------------------

#[test]
fn first_copy_is_named_base_1() {
    let mut state = State::with_rule_sets(vec![RuleSet::new(1, "A", vec![])]);
    apply(&mut state, Command::CopyRuleSet(1));
    assert_eq!(state.rule_sets[1].name, "A_(1)");
}

#[test]
fn second_copy_counts_up() {
    let mut state = State::with_rule_sets(vec![RuleSet::new(1, "A", vec![])]);
    apply(&mut state, Command::CopyRuleSet(1));
    apply(&mut state, Command::CopyRuleSet(1));
    let names: Vec<_> = state.rule_sets.iter().map(|rs| rs.name.as_str()).collect();
    assert_eq!(names, vec!["A", "A_(1)", "A_(2)"]);
}

#[test]
fn copy_skips_over_manually_named_collisions() {
    let mut state = State::with_rule_sets(vec![
        RuleSet::new(1, "Foo", vec![]),
        RuleSet::new(2, "Foo_(1)", vec![]),
    ]);
    apply(&mut state, Command::CopyRuleSet(1));
    assert_eq!(state.rule_sets[2].name, "Foo_(2)");
}

#[test]
fn copy_names_never_collide() {
    let mut state = State::with_rule_sets(vec![RuleSet::new(1, "A", vec![])]);
    for _ in 0..10 {
        apply(&mut state, Command::CopyRuleSet(1));
    }
    let names: HashSet<_> = state.rule_sets.iter().map(|rs| rs.name.clone()).collect();
    assert_eq!(names.len(), state.rule_sets.len());
}

// ---------------------------------------------------------------------------
// Id allocation
// ---------------------------------------------------------------------------

#[test]
fn copied_rule_ids_are_disjoint_from_all_existing_rules() {
    let mut state = State::with_rule_sets(vec![
        RuleSet::new(1, "A", rules(&[1, 2, 3])),
        RuleSet::new(2, "B", rules(&[1, 2])),
    ]);
    apply(&mut state, Command::CopyRuleSet(1));

    let existing: HashSet<u32> = state.rule_sets[..2]
        .iter()
        .flat_map(|rs| rs.rules.iter().map(|r| r.id))
        .collect();
    let copied: Vec<u32> = state.rule_sets[2].rules.iter().map(|r| r.id).collect();

    // Global max is 3, so the copy allocates 4, 5, 6 in original order.
    assert_eq!(copied, vec![4, 5, 6]);
    assert!(copied.iter().all(|id| !existing.contains(id)));
}

#[test]
fn copy_preserves_rule_order_and_contents() {
    let mut source_rules = rules(&[1, 2]);
    source_rules[0].measurement = "Bolus Clearance".into();
    source_rules[1].measurement = "Swallow Interval".into();

    let mut state = State::with_rule_sets(vec![RuleSet::new(1, "A", source_rules)]);
    apply(&mut state, Command::CopyRuleSet(1));

    let copy = &state.rule_sets[1];
    assert_eq!(copy.rules[0].measurement, "Bolus Clearance");
    assert_eq!(copy.rules[1].measurement, "Swallow Interval");
}

#[test]
fn copy_gets_next_rule_set_id_and_is_selected() {
    let mut state = State::with_rule_sets(vec![
        RuleSet::new(1, "A", vec![]),
        RuleSet::new(5, "B", vec![]),
    ]);
    apply(&mut state, Command::CopyRuleSet(1));
    assert_eq!(state.rule_sets[2].id, 6);
    assert_eq!(state.selected, Some(6));
}

#[test]
fn copy_of_unknown_id_is_a_no_op() {
    let mut state = State::with_rule_sets(vec![RuleSet::new(1, "A", vec![])]);
    let before = state.clone();
    apply(&mut state, Command::CopyRuleSet(99));
    assert_eq!(state, before);
}
