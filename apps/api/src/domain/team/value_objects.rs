use serde::{Deserialize, Serialize};

/// Side of a generated matchup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub enum TeamNumber {
    One,
    Two,
}

impl TeamNumber {
    /// Numeric value stored in `team_assignments.team_number`
    pub fn as_i16(&self) -> i16 {
        match self {
            TeamNumber::One => 1,
            TeamNumber::Two => 2,
        }
    }

    /// The other side of the matchup
    pub fn opponent(&self) -> Self {
        match self {
            TeamNumber::One => TeamNumber::Two,
            TeamNumber::Two => TeamNumber::One,
        }
    }
}

impl TryFrom<i16> for TeamNumber {
    type Error = String;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(TeamNumber::One),
            2 => Ok(TeamNumber::Two),
            other => Err(format!("Invalid team number: {}", other)),
        }
    }
}

impl From<TeamNumber> for i16 {
    fn from(number: TeamNumber) -> Self {
        number.as_i16()
    }
}

impl std::fmt::Display for TeamNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_i16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_number_conversions() {
        assert_eq!(TeamNumber::try_from(1), Ok(TeamNumber::One));
        assert_eq!(TeamNumber::try_from(2), Ok(TeamNumber::Two));
        assert!(TeamNumber::try_from(3).is_err());
        assert_eq!(i16::from(TeamNumber::Two), 2);
    }

    #[test]
    fn opponent_flips_side() {
        assert_eq!(TeamNumber::One.opponent(), TeamNumber::Two);
        assert_eq!(TeamNumber::Two.opponent(), TeamNumber::One);
    }

    #[test]
    fn serializes_as_number() {
        assert_eq!(serde_json::to_string(&TeamNumber::One).unwrap(), "1");
        let parsed: TeamNumber = serde_json::from_str("2").unwrap();
        assert_eq!(parsed, TeamNumber::Two);
        assert!(serde_json::from_str::<TeamNumber>("0").is_err());
    }
}
