use std::collections::HashMap;

use super::team::{GeneratedTeams, Team};
use super::value_objects::TeamNumber;
use crate::domain::player::{Player, Position};

/// Splits a roster into two teams balanced by position and composite score
///
/// Players are bucketed by position group, each bucket is ranked by
/// [`Player::composite_score`] (descending, ties keep roster order) and
/// drafted with strict alternation starting at team 1. Buckets are drafted
/// in [`Position::DRAFT_ORDER`], so position spread wins over global rank.
///
/// The result only depends on the input order and attributes.
///
/// # Example
/// ```
/// use opencourt_api::domain::player::Player;
/// use opencourt_api::domain::team::balance_teams;
/// use uuid::Uuid;
///
/// let roster: Vec<Player> = (0..4).map(|_| Player::new(Uuid::new_v4())).collect();
/// let teams = balance_teams(&roster);
///
/// assert_eq!(teams.team1.len() + teams.team2.len(), 4);
/// ```
pub fn balance_teams(players: &[Player]) -> GeneratedTeams {
    let mut buckets: HashMap<Position, Vec<(f64, &Player)>> = HashMap::new();
    for player in players {
        buckets
            .entry(player.position_group())
            .or_default()
            .push((player.composite_score(), player));
    }

    let mut team1 = Vec::new();
    let mut team2 = Vec::new();

    for position in Position::DRAFT_ORDER {
        let Some(mut bucket) = buckets.remove(&position) else {
            continue;
        };
        // sort_by is stable
        bucket.sort_by(|(a, _), (b, _)| b.total_cmp(a));

        let mut pick_for = TeamNumber::One;
        for (_, player) in bucket {
            match pick_for {
                TeamNumber::One => team1.push(player.clone()),
                TeamNumber::Two => team2.push(player.clone()),
            }
            pick_for = pick_for.opponent();
        }
    }

    GeneratedTeams {
        team1: Team::new(TeamNumber::One, team1),
        team2: Team::new(TeamNumber::Two, team2),
    }
}
