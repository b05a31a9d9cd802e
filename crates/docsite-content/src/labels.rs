//! Localized display labels.
//!
//! The index and the latest-updates panel each have their own difficulty
//! wording: the index renders `中级`/`高级` where the panel renders
//! `中等`/`难` for canonical input. Both tables are kept as they ship.

/// Placeholder for an unknown field.
pub const UNKNOWN: &str = "未知";

/// Placeholder for a missing title in the index.
pub const NO_TITLE: &str = "无标题";

/// Placeholder for a missing description in the index.
pub const NO_DESCRIPTION: &str = "无描述";

/// Unit suffix for estimated reading time.
pub const MINUTES: &str = "分钟";

/// Marker the panel shows for a difficulty it cannot place.
pub const UNKNOWN_MARKER: &str = "unknown";

/// Tutorial difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Parse a canonical name (`beginner`, `intermediate`, `advanced`).
    pub fn from_canonical(s: &str) -> Option<Self> {
        match s {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }

    /// Parse a localized name (`初级`, `中级`, `高级`).
    pub fn from_localized(s: &str) -> Option<Self> {
        match s {
            "初级" => Some(Self::Beginner),
            "中级" => Some(Self::Intermediate),
            "高级" => Some(Self::Advanced),
            _ => None,
        }
    }

    /// Parse either form.
    pub fn parse(s: &str) -> Option<Self> {
        Self::from_canonical(s).or_else(|| Self::from_localized(s))
    }

    /// Canonical name, also used as the card's CSS class.
    pub fn canonical(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Label used in the tutorial index.
    pub fn index_label(self) -> &'static str {
        match self {
            Self::Beginner => "初级",
            Self::Intermediate => "中级",
            Self::Advanced => "高级",
        }
    }

    /// Label used on update cards for canonical input.
    pub fn widget_label(self) -> &'static str {
        match self {
            Self::Beginner => "初级",
            Self::Intermediate => "中等",
            Self::Advanced => "难",
        }
    }
}

/// Difficulty as printed in the index.
///
/// Known values are localized; anything else is passed through verbatim.
pub fn index_difficulty(raw: Option<&str>) -> &str {
    match raw {
        None => UNKNOWN,
        Some(s) => Difficulty::parse(s).map_or(s, |d| d.index_label()),
    }
}

/// Difficulty as printed on an update card.
///
/// Localized input is shown as written, canonical input goes through the
/// card table, anything else becomes [`UNKNOWN_MARKER`].
// TODO: settle on one label set and merge with `index_difficulty`.
pub fn widget_difficulty(raw: &str) -> &str {
    if Difficulty::from_localized(raw).is_some() {
        return raw;
    }
    Difficulty::from_canonical(raw).map_or(UNKNOWN_MARKER, Difficulty::widget_label)
}

/// CSS class for a difficulty tag.
pub fn difficulty_class(raw: &str) -> &'static str {
    Difficulty::parse(raw).map_or(UNKNOWN_MARKER, Difficulty::canonical)
}

/// Estimated time with the minutes suffix, added only once.
pub fn time_label(raw: Option<&str>) -> String {
    match raw {
        None => UNKNOWN.to_string(),
        Some(s) if s.contains(MINUTES) => s.to_string(),
        Some(s) => format!("{s}{MINUTES}"),
    }
}
