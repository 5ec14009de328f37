use serde::{Deserialize, Serialize};

/// Colour family a screen uses for the counter label, chosen by sign alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    /// Value above zero.
    Positive,
    /// Value below zero.
    Negative,
    /// Exactly zero; the screen's default label colour.
    Neutral,
}

impl Accent {
    pub fn for_value(value: i64) -> Self {
        match value.signum() {
            1 => Accent::Positive,
            -1 => Accent::Negative,
            _ => Accent::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
    pub text: String,
    pub accent: Accent,
}

impl Presentation {
    pub fn of(value: i64) -> Self {
        Self {
            text: value.to_string(),
            accent: Accent::for_value(value),
        }
    }
}
