use serde::{Deserialize, Serialize};

use super::game::{Move, Outcome, Scoreboard, Side};

// REST messages
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PlayRequest {
    // Kept as a raw string so unknown moves surface as a 400, not a body rejection
    #[serde(rename = "move", default)]
    pub player_move: Option<String>,
}
impl From<Move> for PlayRequest {
    fn from(player_move: Move) -> Self {
        PlayRequest {
            player_move: Some(player_move.to_string()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TrainResponse {
    pub ai_move: Move,
    pub result: Outcome,
    pub message: String,
    pub training_complete: bool,
    pub training_scores: Scoreboard,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BattleResponse {
    pub ai_move: Move,
    pub result: Outcome,
    pub message: String,
    pub battle_scores: Scoreboard,
    pub final_scores: Scoreboard,
    pub game_over: bool,
    pub winner: Option<Side>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorResponse {
    pub error: String,
}
