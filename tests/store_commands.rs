use ruleboard::{apply, Command, Comparator, Rule, RuleSet, State, Threshold, Unit};

fn single_set() -> State {
    let mut state = State::with_rule_sets(vec![RuleSet::new(1, "A", vec![])]);
    apply(&mut state, Command::SelectRuleSet(Some(1)));
    state
}

// ---------------------------------------------------------------------------
// Rule creation
// ---------------------------------------------------------------------------

#[test]
fn two_added_rules_get_ids_one_and_two() {
    let mut state = single_set();
    apply(&mut state, Command::AddRule);
    apply(&mut state, Command::AddRule);

    let rules = state.selected_rules();
    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].id, 1);
    assert_eq!(rules[1].id, 2);
    assert!(rules[0].is_new);
    assert!(rules[1].is_new);
}

#[test]
fn added_rule_is_a_presence_check_draft() {
    let mut state = single_set();
    apply(&mut state, Command::AddRule);

    let rule = &state.selected_rules()[0];
    assert_eq!(rule.comparator, Comparator::Is);
    assert_eq!(rule.compared_value, Threshold::NotPresent);
    assert_eq!(rule.measurement, "");
}

#[test]
fn add_rule_without_selection_is_a_no_op() {
    let mut state = State::with_rule_sets(vec![RuleSet::new(1, "A", vec![])]);
    apply(&mut state, Command::AddRule);
    assert!(state.rule_sets[0].rules.is_empty());
}

#[test]
fn rule_ids_reuse_nothing_after_deletion_of_lower_ids() {
    let mut state = single_set();
    apply(&mut state, Command::AddRule);
    apply(&mut state, Command::AddRule);
    apply(&mut state, Command::DeleteRule(1));
    apply(&mut state, Command::AddRule);

    // max+1 allocation: rule 2 survives, so the new rule is 3.
    let ids: Vec<_> = state.selected_rules().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

// ---------------------------------------------------------------------------
// Rule updates
// ---------------------------------------------------------------------------

#[test]
fn update_clears_is_new_and_normalizes() {
    let mut state = single_set();
    apply(&mut state, Command::AddRule);

    let mut edited = state.selected_rules()[0].clone();
    edited.measurement = "Bolus Clearance".into();
    edited.comparator = Comparator::Gte;
    edited.compared_value = Threshold::Number(20.0);
    edited.unit = Some(Unit::Seconds);
    apply(&mut state, Command::UpdateRule(edited));

    let rule = &state.selected_rules()[0];
    assert!(!rule.is_new);
    assert_eq!(rule.compared_value, Threshold::Number(20.0));
    assert_eq!(rule.unit, Some(Unit::Seconds));
}

#[test]
fn update_to_presence_check_forces_not_present_and_drops_unit() {
    let mut state = single_set();
    apply(&mut state, Command::AddRule);

    let mut edited = state.selected_rules()[0].clone();
    edited.comparator = Comparator::Gte;
    edited.compared_value = Threshold::Number(5.0);
    edited.unit = Some(Unit::Millis);
    apply(&mut state, Command::UpdateRule(edited));

    let mut back = state.selected_rules()[0].clone();
    back.comparator = Comparator::Is;
    apply(&mut state, Command::UpdateRule(back));

    let rule = &state.selected_rules()[0];
    assert_eq!(rule.compared_value, Threshold::NotPresent);
    assert_eq!(rule.unit, None);
}

#[test]
fn update_of_unknown_rule_id_changes_nothing() {
    let mut state = single_set();
    apply(&mut state, Command::AddRule);
    let before = state.clone();

    apply(&mut state, Command::UpdateRule(Rule::draft(99)));
    assert_eq!(state, before);
}

// ---------------------------------------------------------------------------
// Set-level edit session
// ---------------------------------------------------------------------------

#[test]
fn save_commits_staged_name_and_exits_edit_mode() {
    let mut state = single_set();
    apply(&mut state, Command::SetEditMode(true));
    apply(&mut state, Command::UpdateRuleSetName("Renamed".into()));
    apply(&mut state, Command::SaveRuleSetChanges);

    assert_eq!(state.rule_sets[0].name, "Renamed");
    assert!(!state.edit_mode);
    assert_eq!(state.staged_name, "");
}

#[test]
fn save_without_selection_leaves_state_unchanged() {
    let mut state = State::with_rule_sets(vec![RuleSet::new(1, "A", vec![])]);
    let before = state.clone();
    apply(&mut state, Command::SaveRuleSetChanges);
    assert_eq!(state, before);
}

#[test]
fn delete_rule_set_clears_selection_and_edit_mode() {
    let mut state = single_set();
    apply(&mut state, Command::SetEditMode(true));
    apply(&mut state, Command::DeleteRuleSet);

    assert!(state.rule_sets.is_empty());
    assert_eq!(state.selected, None);
    assert!(!state.edit_mode);
}

#[test]
fn delete_without_selection_is_a_no_op() {
    let mut state = State::with_rule_sets(vec![RuleSet::new(1, "A", vec![])]);
    apply(&mut state, Command::DeleteRuleSet);
    assert_eq!(state.rule_sets.len(), 1);
}

// ---------------------------------------------------------------------------
// Rule-set creation
// ---------------------------------------------------------------------------

#[test]
fn next_rule_set_id_is_global_max_plus_one() {
    let state = State::with_rule_sets(vec![
        RuleSet::new(3, "A", vec![]),
        RuleSet::new(7, "B", vec![]),
    ]);
    assert_eq!(state.next_rule_set_id(), 8);
    assert_eq!(State::default().next_rule_set_id(), 1);
}

#[test]
fn add_rule_set_selects_the_new_set() {
    let mut state = single_set();
    apply(
        &mut state,
        Command::AddRuleSet {
            id: 2,
            name: "New Rule Set 2".into(),
            rules: vec![],
        },
    );
    assert_eq!(state.selected, Some(2));
    assert_eq!(state.selected_rule_set().unwrap().name, "New Rule Set 2");
}
