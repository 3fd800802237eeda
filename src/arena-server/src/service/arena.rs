use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use common::model::game::{Move, Outcome};
use common::model::messages::{BattleResponse, ErrorResponse, PlayRequest, TrainResponse};
use rand::Rng;
use tokio::sync::{broadcast, oneshot, Mutex};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info};

use crate::entrypoint::ArenaConfig;
use crate::model::internal::{ArenaState, BATTLE_SCORE_LIMIT, TRAINING_MOVES_REQUIRED};
use crate::service::policy::MovePolicy;

type SharedState = Arc<Mutex<ArenaState>>;

const WIN_BANTER: [&str; 2] = ["Wow, you crushed me!", "You're unstoppable!"];
const LOSE_BANTER: [&str; 2] = ["I win this round!", "Better luck next time!"];
const DRAW_BANTER: [&str; 2] = ["Great minds think alike!", "We tied!"];

fn banter(outcome: Outcome, rng: &mut impl Rng) -> &'static str {
    let lines = match outcome {
        Outcome::Win => WIN_BANTER,
        Outcome::Lose => LOSE_BANTER,
        Outcome::Draw => DRAW_BANTER,
    };
    lines[rng.gen_range(0..lines.len())]
}

pub struct ArenaService {}

impl ArenaService {
    pub fn new() -> Self {
        ArenaService {}
    }

    pub async fn run(
        &self,
        config: ArenaConfig,
        mut shutdown_receiver: broadcast::Receiver<()>,
        ready_signal: Option<oneshot::Sender<()>>,
    ) {
        let state = Arc::new(Mutex::new(ArenaState::new(&mut rand::thread_rng())));
        let app: Router = Router::new()
            .route("/", get(Self::root))
            .route("/train", post(Self::train))
            .route("/battle", post(Self::battle))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(state);
        let listener = tokio::net::TcpListener::bind(config.rest_address.clone())
            .await
            .unwrap_or_else(|e| {
                panic!("Failed to bind to {}: {}", config.rest_address, e);
            });
        info!("Arena listening on {}", config.rest_address);
        // Signal readiness only once the listener holds the port
        if let Some(ready_signal) = ready_signal {
            ready_signal.send(()).expect("Failed to send ready signal");
        }
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown_receiver
                    .recv()
                    .await
                    .expect("Failed to receive shutdown signal");
            })
            .await
            .unwrap();
    }

    async fn root() -> &'static str {
        "rock-paper-scissors arena"
    }

    async fn train(
        State(state): State<SharedState>,
        Json(request): Json<PlayRequest>,
    ) -> Response {
        debug!("train request: {:?}", request);
        let player_move = match Self::parse_move(&request) {
            Ok(player_move) => player_move,
            Err(rejection) => return rejection,
        };
        let mut state = state.lock().await;
        let mut rng = rand::thread_rng();
        let response = Self::run_training_round(&mut state, player_move, &mut rng);
        if response.training_complete {
            info!("Training round complete: {:?}", response.training_scores);
        }
        (StatusCode::OK, Json(response)).into_response()
    }

    async fn battle(
        State(state): State<SharedState>,
        Json(request): Json<PlayRequest>,
    ) -> Response {
        debug!("battle request: {:?}", request);
        let player_move = match Self::parse_move(&request) {
            Ok(player_move) => player_move,
            Err(rejection) => return rejection,
        };
        let mut state = state.lock().await;
        let mut rng = rand::thread_rng();
        let response = Self::run_battle_round(&mut state, player_move, &mut rng);
        if response.game_over {
            info!(
                "Battle over, winner {:?}: {:?}",
                response.winner, response.final_scores
            );
        }
        (StatusCode::OK, Json(response)).into_response()
    }

    fn parse_move(request: &PlayRequest) -> Result<Move, Response> {
        let Some(raw) = request.player_move.as_deref() else {
            return Err(Self::reject("missing move field"));
        };
        raw.parse::<Move>().map_err(|e| Self::reject(e.to_string()))
    }

    fn reject(message: impl ToString) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: message.to_string(),
            }),
        )
            .into_response()
    }

    fn run_training_round(
        state: &mut ArenaState,
        player_move: Move,
        rng: &mut impl Rng,
    ) -> TrainResponse {
        let ai_move = state.policy.pick_training_move(player_move, rng);
        let outcome = player_move.against(ai_move);
        state.policy.learn(player_move, ai_move, outcome);
        state.training_scores.record(outcome);
        state.training_moves_done += 1;

        let training_complete = state.training_moves_done >= TRAINING_MOVES_REQUIRED;
        let training_scores = state.training_scores;
        if training_complete {
            // Next session starts from a clean slate
            state.training_moves_done = 0;
            state.training_scores = Default::default();
        }
        TrainResponse {
            ai_move,
            result: outcome,
            message: banter(outcome, rng).to_owned(),
            training_complete,
            training_scores,
        }
    }

    fn run_battle_round(
        state: &mut ArenaState,
        player_move: Move,
        rng: &mut impl Rng,
    ) -> BattleResponse {
        let ai_move = MovePolicy::pick_battle_move(rng);
        let outcome = player_move.against(ai_move);
        state.battle_scores.record(outcome);

        let final_scores = state.battle_scores;
        let winner = state.battle_scores.leader_at(BATTLE_SCORE_LIMIT);
        let game_over = winner.is_some();
        if game_over {
            state.battle_scores = Default::default();
        }
        BattleResponse {
            ai_move,
            result: outcome,
            message: banter(outcome, rng).to_owned(),
            battle_scores: state.battle_scores,
            final_scores,
            game_over,
            winner,
        }
    }
}

impl Default for ArenaService {
    fn default() -> Self {
        Self::new()
    }
}
