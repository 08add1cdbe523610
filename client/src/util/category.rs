//! Category label → card style lookup.
//!
//! Labels are matched exactly (case-sensitive) with no normalization; any
//! label outside the known three renders with the neutral style.

#[cfg(test)]
#[path = "category_test.rs"]
mod category_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryStyle {
    Red,
    Green,
    Yellow,
    Neutral,
}

impl CategoryStyle {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Red" => Self::Red,
            "Green" => Self::Green,
            "Yellow" => Self::Yellow,
            _ => Self::Neutral,
        }
    }

    /// BEM modifier shared by the card and its marker dot.
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Neutral => "neutral",
        }
    }

    pub fn card_class(self) -> String {
        format!("finding-card finding-card--{}", self.modifier())
    }

    pub fn dot_class(self) -> String {
        format!("finding-card__dot finding-card__dot--{}", self.modifier())
    }
}
