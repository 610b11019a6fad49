use serde::Serialize;

/// Classification of a person's total against a track's thresholds.
///
/// Ordered by urgency, so combining two states is `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HoursState {
    Done,
    Goal,
    Normal,
    Warn,
}

impl HoursState {
    /// The more urgent of the two.
    pub fn combine(self, other: HoursState) -> HoursState {
        self.max(other)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HoursState::Done => "done",
            HoursState::Goal => "goal",
            HoursState::Normal => "normal",
            HoursState::Warn => "warn",
        }
    }
}

/// Hour thresholds of a track. `goal` and `warn` are optional bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    pub required: f64,
    pub goal: Option<f64>,
    pub warn: Option<f64>,
}

impl Thresholds {
    pub fn new(required: f64) -> Self {
        Self {
            required,
            goal: None,
            warn: None,
        }
    }

    pub fn classify(&self, total: f64) -> HoursState {
        if total >= self.required {
            return HoursState::Done;
        }
        if let Some(goal) = self.goal
            && total >= goal
        {
            return HoursState::Goal;
        }
        match self.warn {
            Some(warn) if total < warn => HoursState::Warn,
            _ => HoursState::Normal,
        }
    }
}
