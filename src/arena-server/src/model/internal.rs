use common::model::game::Scoreboard;
use rand::Rng;

use crate::service::policy::MovePolicy;

// Round limits
pub const TRAINING_MOVES_REQUIRED: u32 = 10;
pub const BATTLE_SCORE_LIMIT: u32 = 3;

// Process-wide state, built once at startup and shared with the handlers
pub struct ArenaState {
    pub policy: MovePolicy,
    pub training_moves_done: u32,
    pub training_scores: Scoreboard,
    pub battle_scores: Scoreboard,
}

impl ArenaState {
    pub fn new(rng: &mut impl Rng) -> Self {
        ArenaState {
            policy: MovePolicy::new(rng),
            training_moves_done: 0,
            training_scores: Scoreboard::default(),
            battle_scores: Scoreboard::default(),
        }
    }
}
