//! Match scoring engine
//!
//! Games go to a target score with a win-by-two margin and no point ceiling.
//! A won game counts as a set; the loser serves the next game. The match
//! ends once a player holds `⌊best_of/2⌋ + 1` sets.

use crate::sim::state::{MatchScore, Player};

/// Result of applying one point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointOutcome {
    /// Point applied, game still running
    GameContinues,
    /// Game won; points reset, set counted, loser serves next
    GameWon(Player),
    /// Game and match won
    MatchWon(Player),
}

/// Leader has reached the target and leads by at least two
pub fn win_by_two(a: u32, b: u32, target: u32) -> bool {
    let hi = a.max(b);
    let lo = a.min(b);
    hi >= target && hi - lo >= 2
}

/// Sets needed to take the match
pub fn sets_to_win(best_of: u32) -> u32 {
    best_of / 2 + 1
}

/// Current game winner, if the game is over
pub fn game_winner(score: &MatchScore, target: u32) -> Option<Player> {
    if win_by_two(score.p1, score.p2, target) {
        Some(if score.p1 > score.p2 {
            Player::One
        } else {
            Player::Two
        })
    } else {
        None
    }
}

/// Current match winner, if the match is over
pub fn match_winner(score: &MatchScore, best_of: u32) -> Option<Player> {
    let needed = sets_to_win(best_of);
    if score.sets1 >= needed {
        Some(Player::One)
    } else if score.sets2 >= needed {
        Some(Player::Two)
    } else {
        None
    }
}

/// Apply one point for `scorer` and resolve any game/match win.
///
/// On a game win both point counters reset and serve passes to the game's
/// loser; the per-attempt serve alternation does not apply on top of that.
pub fn record_point(
    score: &mut MatchScore,
    scorer: Player,
    target: u32,
    best_of: u32,
) -> PointOutcome {
    score.add_point(scorer);

    let Some(winner) = game_winner(score, target) else {
        return PointOutcome::GameContinues;
    };

    score.add_set(winner);
    score.p1 = 0;
    score.p2 = 0;
    score.serving = winner.other();
    log::info!(
        "game won by {} (sets {}-{})",
        winner.as_str(),
        score.sets1,
        score.sets2
    );

    match match_winner(score, best_of) {
        Some(champion) => PointOutcome::MatchWon(champion),
        None => PointOutcome::GameWon(winner),
    }
}
