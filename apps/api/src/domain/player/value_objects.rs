use serde::{Deserialize, Serialize};

/// Self-reported skill level of a player
///
/// Ordinals are used for scoring and team averages:
/// `Beginner = 1`, `Casual = 2`, `Competitive = 3`, `Elite = 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Casual,
    Competitive,
    Elite,
}

impl SkillLevel {
    /// Parses a stored skill level by its exact name
    ///
    /// # Example
    /// ```
    /// use opencourt_api::domain::player::SkillLevel;
    ///
    /// assert_eq!(SkillLevel::parse("Elite"), Some(SkillLevel::Elite));
    /// assert_eq!(SkillLevel::parse("elite"), None);
    /// ```
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Beginner" => Some(SkillLevel::Beginner),
            "Casual" => Some(SkillLevel::Casual),
            "Competitive" => Some(SkillLevel::Competitive),
            "Elite" => Some(SkillLevel::Elite),
            _ => None,
        }
    }

    /// Returns the ordinal used for scoring
    pub fn value(&self) -> u8 {
        match self {
            SkillLevel::Beginner => 1,
            SkillLevel::Casual => 2,
            SkillLevel::Competitive => 3,
            SkillLevel::Elite => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Casual => "Casual",
            SkillLevel::Competitive => "Competitive",
            SkillLevel::Elite => "Elite",
        }
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position group a player is drafted from
///
/// Free-text positions are collapsed into one of these groups by
/// [`Position::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Guard,
    Forward,
    Center,
    Unknown,
}

impl Position {
    /// Order in which position buckets are drafted
    pub const DRAFT_ORDER: [Position; 4] = [
        Position::Guard,
        Position::Forward,
        Position::Center,
        Position::Unknown,
    ];

    /// Maps a free-text position to a position group
    ///
    /// Matching is case-insensitive and by substring, checked in order:
    /// guard (`guard`, `pg`, `sg`), forward (`forward`, `sf`, `pf`),
    /// then center (`center` or any `c`).
    ///
    /// # Example
    /// ```
    /// use opencourt_api::domain::player::Position;
    ///
    /// assert_eq!(Position::normalize(Some("Point Guard")), Position::Guard);
    /// assert_eq!(Position::normalize(Some("PF")), Position::Forward);
    /// assert_eq!(Position::normalize(None), Position::Unknown);
    /// ```
    pub fn normalize(position: Option<&str>) -> Self {
        let Some(position) = position else {
            return Position::Unknown;
        };
        let pos = position.to_lowercase();

        if pos.contains("guard") || pos.contains("pg") || pos.contains("sg") {
            Position::Guard
        } else if pos.contains("forward") || pos.contains("sf") || pos.contains("pf") {
            Position::Forward
        } else if pos.contains("center") || pos.contains('c') {
            // Any "c" matches here, so e.g. "Coach" lands in Center.
            Position::Center
        } else {
            Position::Unknown
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Guard => write!(f, "Guard"),
            Position::Forward => write!(f, "Forward"),
            Position::Center => write!(f, "Center"),
            Position::Unknown => write!(f, "Unknown"),
        }
    }
}
