//! Fixed rule sets loaded when no persisted snapshot exists.

use crate::types::{Comparator, Rule, RuleAction, RuleSet, Threshold, Unit};

fn rule(
    id: u32,
    measurement: &str,
    comparator: Comparator,
    compared_value: Threshold,
    unit: Option<Unit>,
    finding_name: &str,
    action: RuleAction,
) -> Rule {
    Rule {
        id,
        measurement: measurement.to_owned(),
        comparator,
        compared_value,
        unit,
        finding_name: finding_name.to_owned(),
        action,
        is_new: false,
    }
}

/// The initial rule-set collection for a fresh installation.
#[must_use]
pub fn seed_rule_sets() -> Vec<RuleSet> {
    vec![
        RuleSet::new(
            1,
            "Standard Criteria",
            vec![
                rule(
                    1,
                    "Bolus Clearance",
                    Comparator::Gte,
                    Threshold::Number(20.0),
                    Some(Unit::Seconds),
                    "Delayed bolus clearance",
                    RuleAction::Reflux,
                ),
                rule(
                    2,
                    "Swallow Interval",
                    Comparator::Lt,
                    Threshold::Number(500.0),
                    Some(Unit::Millis),
                    "Rapid swallow sequence",
                    RuleAction::Normal,
                ),
                rule(
                    3,
                    "pH Drop",
                    Comparator::Is,
                    Threshold::NotPresent,
                    None,
                    "No acid exposure",
                    RuleAction::Normal,
                ),
            ],
        ),
        RuleSet::new(
            2,
            "Strict Criteria",
            vec![rule(
                4,
                "Reflux Episode Duration",
                Comparator::Gte,
                Threshold::Number(12.0),
                Some(Unit::Seconds),
                "Prolonged reflux episode",
                RuleAction::Reflux,
            )],
        ),
    ]
}
