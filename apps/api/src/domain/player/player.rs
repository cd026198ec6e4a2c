use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::{Position, SkillLevel};

/// Reliability assumed for players without a recorded score
pub const DEFAULT_RELIABILITY_SCORE: i32 = 100;

const SKILL_WEIGHT: f64 = 0.6;
const RELIABILITY_WEIGHT: f64 = 0.3;
const HEIGHT_WEIGHT: f64 = 0.1;

/// Read-only snapshot of a player profile used for balancing
///
/// Profiles are owned by the external profile store; the balancer never
/// mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: Uuid,
    pub full_name: Option<String>,
    /// Free-text position as entered on the profile
    pub position: Option<String>,
    pub height_ft: Option<i32>,
    pub height_in: Option<i32>,
    pub skill_level: Option<SkillLevel>,
    /// 0-100, `None` when the profile has no score yet
    pub reliability_score: Option<i32>,
}

impl Player {
    /// Creates a player with only an id set
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            full_name: None,
            position: None,
            height_ft: None,
            height_in: None,
            skill_level: None,
            reliability_score: None,
        }
    }

    /// Total height in inches, missing parts count as zero
    ///
    /// Computed in `i64` so unconstrained profile columns cannot overflow.
    pub fn height_inches(&self) -> i64 {
        i64::from(self.height_ft.unwrap_or(0)) * 12 + i64::from(self.height_in.unwrap_or(0))
    }

    pub fn position_group(&self) -> Position {
        Position::normalize(self.position.as_deref())
    }

    /// Skill ordinal, 0 when unset
    pub fn skill_value(&self) -> u8 {
        self.skill_level.map(|s| s.value()).unwrap_or(0)
    }

    pub fn effective_reliability(&self) -> i32 {
        self.reliability_score.unwrap_or(DEFAULT_RELIABILITY_SCORE)
    }

    /// Height mapped from the 60-84 inch range onto 0-4, clamped
    pub fn height_factor(&self) -> f64 {
        ((self.height_inches() as f64 - 60.0) / 6.0).clamp(0.0, 4.0)
    }

    /// Weighted blend used to rank players for the draft
    ///
    /// `skill * 0.6 + (reliability / 100 * 4) * 0.3 + height_factor * 0.1`
    pub fn composite_score(&self) -> f64 {
        let skill = f64::from(self.skill_value());
        let reliability = f64::from(self.effective_reliability()) / 100.0 * 4.0;

        skill * SKILL_WEIGHT + reliability * RELIABILITY_WEIGHT + self.height_factor() * HEIGHT_WEIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(skill: Option<SkillLevel>, reliability: Option<i32>, ft: i32, inches: i32) -> Player {
        Player {
            skill_level: skill,
            reliability_score: reliability,
            height_ft: Some(ft),
            height_in: Some(inches),
            ..Player::new(Uuid::new_v4())
        }
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn height_combines_feet_and_inches() {
        let p = player(None, None, 6, 2);
        assert_eq!(p.height_inches(), 74);
    }

    #[test]
    fn missing_height_counts_as_zero() {
        let p = Player::new(Uuid::new_v4());
        assert_eq!(p.height_inches(), 0);
        assert_eq!(p.height_factor(), 0.0);
    }

    #[test]
    fn height_factor_is_clamped() {
        assert_eq!(player(None, None, 4, 0).height_factor(), 0.0);
        assert_eq!(player(None, None, 7, 6).height_factor(), 4.0);
        assert!(approx_eq(player(None, None, 5, 9).height_factor(), 1.5));
    }

    #[test]
    fn extreme_heights_clamp_without_overflow() {
        let tall = player(None, None, 200_000_000, 11);
        assert_eq!(tall.height_inches(), 2_400_000_011);
        assert_eq!(tall.height_factor(), 4.0);

        let negative = player(None, None, i32::MIN, i32::MIN);
        assert_eq!(negative.height_factor(), 0.0);

        let max = player(None, None, i32::MAX, i32::MAX);
        assert_eq!(max.height_factor(), 4.0);
    }

    #[test]
    fn reliability_defaults_to_one_hundred() {
        let p = Player::new(Uuid::new_v4());
        assert_eq!(p.effective_reliability(), 100);
    }

    #[test]
    fn explicit_zero_reliability_is_kept() {
        let p = player(None, Some(0), 5, 0);
        assert_eq!(p.effective_reliability(), 0);
    }

    #[test]
    fn composite_score_elite_tall_reliable() {
        // 4*0.6 + 4*0.3 + 3*0.1
        let a = player(Some(SkillLevel::Elite), Some(100), 6, 6);
        assert!(approx_eq(a.composite_score(), 3.9));
    }

    #[test]
    fn composite_score_casual_half_reliable() {
        // 2*0.6 + 2*0.3 + 1*0.1
        let b = player(Some(SkillLevel::Casual), Some(50), 5, 6);
        assert!(approx_eq(b.composite_score(), 1.9));
    }

    #[test]
    fn unset_skill_scores_zero_skill() {
        let p = player(None, Some(100), 5, 0);
        assert_eq!(p.skill_value(), 0);
        assert!(approx_eq(p.composite_score(), 1.2));
    }
}
