use proptest::prelude::*;
use ruleboard::{apply, Command, Comparator, RuleSetId, State, Threshold, Unit};

// --- Fixed vocabulary ---
// Measurements and findings come from a small pool so shrunk failures stay
// readable; ids are allocated the way the editor allocates them.

const MEASUREMENTS: &[&str] = &["Bolus Clearance", "Swallow Interval", "pH Drop"];
const FINDINGS: &[&str] = &["Delayed clearance", "Rapid sequence", "No acid exposure"];

/// One user-level step. `AddRuleSet` carries no id: ids are allocated against
/// the live state when the step is applied, as the selector handler does.
#[derive(Debug, Clone)]
pub enum Step {
    Select(Option<RuleSetId>),
    AddRuleSet,
    SetEditMode(bool),
    Rename(String),
    SaveChanges,
    DeleteRuleSet,
    AddRule,
    DeleteRule(u32),
    UpdateRule {
        slot: usize,
        measurement: &'static str,
        comparator: Comparator,
        value: f64,
        unit: Option<Unit>,
        finding: &'static str,
    },
    Copy(RuleSetId),
}

/// Apply a step, resolving ids against the current state.
pub fn apply_step(state: &mut State, step: &Step) {
    match step {
        Step::Select(id) => apply(state, Command::SelectRuleSet(*id)),
        Step::AddRuleSet => {
            let id = state.next_rule_set_id();
            apply(
                state,
                Command::AddRuleSet {
                    id,
                    name: format!("New Rule Set {id}"),
                    rules: vec![],
                },
            );
        }
        Step::SetEditMode(enabled) => apply(state, Command::SetEditMode(*enabled)),
        Step::Rename(name) => apply(state, Command::UpdateRuleSetName(name.clone())),
        Step::SaveChanges => apply(state, Command::SaveRuleSetChanges),
        Step::DeleteRuleSet => apply(state, Command::DeleteRuleSet),
        Step::AddRule => apply(state, Command::AddRule),
        Step::DeleteRule(id) => apply(state, Command::DeleteRule(*id)),
        Step::UpdateRule {
            slot,
            measurement,
            comparator,
            value,
            unit,
            finding,
        } => {
            let rules = state.selected_rules();
            if rules.is_empty() {
                return;
            }
            let mut rule = rules[slot % rules.len()].clone();
            rule.measurement = (*measurement).to_owned();
            rule.comparator = *comparator;
            rule.compared_value = Threshold::Number(*value);
            rule.unit = *unit;
            rule.finding_name = (*finding).to_owned();
            apply(state, Command::UpdateRule(rule));
        }
        Step::Copy(id) => apply(state, Command::CopyRuleSet(*id)),
    }
}

pub fn arb_comparator() -> impl Strategy<Value = Comparator> {
    prop::sample::select(&Comparator::ALL[..])
}

pub fn arb_unit() -> impl Strategy<Value = Option<Unit>> {
    prop_oneof![
        Just(None),
        Just(Some(Unit::Seconds)),
        Just(Some(Unit::Millis)),
    ]
}

pub fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        2 => (0u32..8).prop_map(|id| Step::Select((id > 0).then_some(id))),
        1 => Just(Step::AddRuleSet),
        1 => any::<bool>().prop_map(Step::SetEditMode),
        1 => "[A-C]{1,4}".prop_map(Step::Rename),
        1 => Just(Step::SaveChanges),
        1 => Just(Step::DeleteRuleSet),
        3 => Just(Step::AddRule),
        1 => (1u32..12).prop_map(Step::DeleteRule),
        2 => (
            any::<usize>(),
            prop::sample::select(MEASUREMENTS),
            arb_comparator(),
            0.0f64..1000.0,
            arb_unit(),
            prop::sample::select(FINDINGS),
        )
            .prop_map(
                |(slot, measurement, comparator, value, unit, finding)| Step::UpdateRule {
                    slot,
                    measurement,
                    comparator,
                    value,
                    unit,
                    finding,
                },
            ),
        1 => (1u32..8).prop_map(Step::Copy),
    ]
}

pub fn arb_steps() -> impl Strategy<Value = Vec<Step>> {
    prop::collection::vec(arb_step(), 0..40)
}

/// Seed-sized starting state: two sets, nothing selected.
pub fn base_state() -> State {
    State::with_rule_sets(ruleboard::seed_rule_sets())
}
