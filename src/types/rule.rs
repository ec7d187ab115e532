use std::fmt;

/// Identifier of a rule within a rule set.
pub type RuleId = u32;

/// Comparison operator applied to a measurement.
///
/// `Is` is the presence check ("is Not Present") and carries no threshold;
/// the other two compare the measured value against a numeric threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Is,
    Gte,
    Lt,
}

impl Comparator {
    /// All comparators in the order the grid offers them.
    pub const ALL: [Comparator; 3] = [Comparator::Is, Comparator::Gte, Comparator::Lt];

    /// Parse the grid's option label. Returns `None` for unknown labels.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "is" => Some(Comparator::Is),
            ">=" => Some(Comparator::Gte),
            "<" => Some(Comparator::Lt),
            _ => None,
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparator::Is => write!(f, "is"),
            Comparator::Gte => write!(f, ">="),
            Comparator::Lt => write!(f, "<"),
        }
    }
}

/// Unit attached to a numeric threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Seconds,
    Millis,
}

impl Unit {
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "s" => Some(Unit::Seconds),
            "ms" => Some(Unit::Millis),
            _ => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Seconds => write!(f, "s"),
            Unit::Millis => write!(f, "ms"),
        }
    }
}

/// Outcome a rule assigns when its condition holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleAction {
    Normal,
    Reflux,
}

impl fmt::Display for RuleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleAction::Normal => write!(f, "Normal"),
            RuleAction::Reflux => write!(f, "Reflux"),
        }
    }
}

/// The compared value of a rule.
///
/// The grid edits this as free text, so it is either the fixed `Not Present`
/// literal (presence checks), a number, or blank when the text did not parse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold {
    NotPresent,
    Number(f64),
    Blank,
}

impl Threshold {
    /// Interpret raw grid text. `"Not Present"` maps to [`Threshold::NotPresent`],
    /// parseable numbers to [`Threshold::Number`], anything else to
    /// [`Threshold::Blank`].
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed == "Not Present" {
            return Threshold::NotPresent;
        }
        match trimmed.parse::<f64>() {
            Ok(n) => Threshold::Number(n),
            Err(_) => Threshold::Blank,
        }
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Threshold::NotPresent => write!(f, "Not Present"),
            Threshold::Number(n) => write!(f, "{n}"),
            Threshold::Blank => Ok(()),
        }
    }
}

impl From<f64> for Threshold {
    fn from(v: f64) -> Self {
        Threshold::Number(v)
    }
}

/// A single conditional row of a rule set: when `measurement` satisfies
/// `comparator` against `compared_value`, report `finding_name` with `action`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub id: RuleId,
    pub measurement: String,
    pub comparator: Comparator,
    pub compared_value: Threshold,
    pub unit: Option<Unit>,
    pub finding_name: String,
    pub action: RuleAction,
    /// Set on rows created through "add new rule" and cleared on the first
    /// committed edit. Rows still carrying it are deleted outright when their
    /// edit is cancelled.
    pub is_new: bool,
}

impl Rule {
    /// The blank row appended by "add new rule", still awaiting its first commit.
    #[must_use]
    pub fn draft(id: RuleId) -> Self {
        Self {
            id,
            measurement: String::new(),
            comparator: Comparator::Is,
            compared_value: Threshold::NotPresent,
            unit: None,
            finding_name: String::new(),
            action: RuleAction::Normal,
            is_new: true,
        }
    }

    /// Enforce the comparator/value coupling: a presence check always reads
    /// `Not Present` with no unit; threshold comparators keep numbers and
    /// collapse anything non-numeric to blank.
    pub fn normalize(&mut self) {
        match self.comparator {
            Comparator::Is => {
                self.compared_value = Threshold::NotPresent;
                self.unit = None;
            }
            Comparator::Gte | Comparator::Lt => {
                if !matches!(self.compared_value, Threshold::Number(_)) {
                    self.compared_value = Threshold::Blank;
                }
            }
        }
    }

    /// The value cell as the grid renders it, unit included.
    #[must_use]
    pub fn value_label(&self) -> String {
        match (self.compared_value, self.unit) {
            (Threshold::Number(n), Some(unit)) => format!("{n} {unit}"),
            (value, _) => value.to_string(),
        }
    }
}
