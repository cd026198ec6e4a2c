use serde::{Deserialize, Serialize};

/// Participation stage of a player on a game roster
///
/// # Status Flow
/// ```text
/// waitlist -> joined -> checked_in
///                  └---> absent
/// ```
/// Only `checked_in` players are eligible for team balancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RosterStatus {
    /// Player has a spot on the roster
    Joined,
    /// Player is waiting for a spot to open
    Waitlist,
    /// Player is physically present at the court
    CheckedIn,
    /// Player did not show up
    Absent,
}

impl RosterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RosterStatus::Joined => "joined",
            RosterStatus::Waitlist => "waitlist",
            RosterStatus::CheckedIn => "checked_in",
            RosterStatus::Absent => "absent",
        }
    }

    /// Parses the stored status string
    ///
    /// # Example
    /// ```
    /// use opencourt_api::domain::game::value_objects::RosterStatus;
    ///
    /// assert_eq!(RosterStatus::parse("checked_in"), Some(RosterStatus::CheckedIn));
    /// assert_eq!(RosterStatus::parse("left"), None);
    /// ```
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "joined" => Some(RosterStatus::Joined),
            "waitlist" => Some(RosterStatus::Waitlist),
            "checked_in" => Some(RosterStatus::CheckedIn),
            "absent" => Some(RosterStatus::Absent),
            _ => None,
        }
    }

    pub fn is_eligible_for_teams(&self) -> bool {
        matches!(self, RosterStatus::CheckedIn)
    }
}

impl std::fmt::Display for RosterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
