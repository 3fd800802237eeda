use core::error;

use common::model::game::Move;
use common::model::messages::{BattleResponse, PlayRequest, TrainResponse};
use reqwest::Client;

use crate::strategy::Round;

type Result<T> = std::result::Result<T, Box<dyn error::Error>>;

pub struct ArenaClient {
    http: Client,
    base_url: String,
    history: Vec<Round>,
}

impl ArenaClient {
    pub fn new(base_url: impl ToString) -> Self {
        ArenaClient {
            http: Client::new(),
            base_url: base_url.to_string(),
            history: Vec::new(),
        }
    }

    pub fn history(&self) -> &[Round] {
        &self.history
    }

    pub async fn train(&mut self, player_move: Move) -> Result<TrainResponse> {
        let response = self
            .http
            .post(format!("{}/train", self.base_url))
            .json(&PlayRequest::from(player_move))
            .send()
            .await?
            .error_for_status()?
            .json::<TrainResponse>()
            .await?;
        self.history.push(Round {
            my_move: player_move,
            their_move: response.ai_move,
            outcome: response.result,
        });
        Ok(response)
    }

    pub async fn battle(&mut self, player_move: Move) -> Result<BattleResponse> {
        let response = self
            .http
            .post(format!("{}/battle", self.base_url))
            .json(&PlayRequest::from(player_move))
            .send()
            .await?
            .error_for_status()?
            .json::<BattleResponse>()
            .await?;
        self.history.push(Round {
            my_move: player_move,
            their_move: response.ai_move,
            outcome: response.result,
        });
        Ok(response)
    }
}
