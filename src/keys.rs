//! Cache key conventions
//!
//! Keys are colon-delimited and hierarchical, so everything derived from one
//! player can be dropped with a single pattern invalidation. The cache itself
//! does not enforce any of this.

use std::fmt::Display;

/// Key of the global leaderboard.
pub const LEADERBOARD_GLOBAL: &str = "leaderboard:global";

/// `player:<id>`
pub fn player(id: impl Display) -> String {
    format!("player:{}", id)
}

/// `player:<id>:upgrades`
pub fn player_upgrades(id: impl Display) -> String {
    format!("player:{}:upgrades", id)
}

/// `player:<id>:staking`
pub fn player_staking(id: impl Display) -> String {
    format!("player:{}:staking", id)
}

/// `player:<id>:*`, matching every key derived from one player.
///
/// The bare `player:<id>` record is not included.
pub fn player_pattern(id: impl Display) -> String {
    format!("player:{}:*", id)
}
