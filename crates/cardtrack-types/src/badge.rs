use serde::{Deserialize, Serialize};

pub const FALLBACK_BADGE_TEXT: &str = "Tracker";
pub const FALLBACK_BADGE_COLOR: &str = "blue";

/// A colored label shown on a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub text: String,
    /// CSS color: a named color, `#rrggbb`, or `rgb(r, g, b)`
    pub color: String,
}

impl Badge {
    pub fn new(text: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: color.into(),
        }
    }

    /// The badge shown when no configured badge resolves
    pub fn fallback() -> Self {
        Self::new(FALLBACK_BADGE_TEXT, FALLBACK_BADGE_COLOR)
    }

    pub fn is_fallback(&self) -> bool {
        self.text == FALLBACK_BADGE_TEXT && self.color == FALLBACK_BADGE_COLOR
    }
}
