use arena_server::entrypoint::{serve, ArenaConfig};
use common::utility::create_shutdown_channel;
use tracing::Level;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_line_number(true)
        .with_file(true)
        .with_max_level(Level::DEBUG)
        .init();
    // Config
    let port = std::env::var("PORT").unwrap_or_else(|_| "5000".to_owned());
    let config = ArenaConfig {
        rest_address: format!("0.0.0.0:{}", port),
    };
    let shutdown_receiver = create_shutdown_channel().await;
    serve(config, shutdown_receiver, None).await;
}

#[cfg(test)]
mod tests {
    use arena_server::entrypoint::{ArenaConfig, ArenaServer};
    use common::model::game::{Move, Scoreboard, Side};
    use common::model::messages::{BattleResponse, ErrorResponse, TrainResponse};
    use common::utility::random_address;
    use reqwest::{Client, StatusCode};
    use serde_json::json;

    async fn start_server() -> ArenaServer {
        ArenaServer::new(ArenaConfig {
            rest_address: random_address().await,
        })
        .await
    }

    fn url(server: &ArenaServer, endpoint: &str) -> String {
        format!("http://{}/{}", server.config.rest_address, endpoint)
    }

    async fn post_move(client: &Client, url: &str, raw: &str) -> reqwest::Response {
        client
            .post(url)
            .json(&json!({ "move": raw }))
            .send()
            .await
            .expect("Request failed")
    }

    #[tokio::test]
    async fn training_completes_after_exactly_ten_moves() {
        let server = start_server().await;
        let client = Client::new();
        // Two sessions back to back: completion must reset the counters
        for _ in 0..2 {
            for i in 1..=10u32 {
                let response = post_move(&client, &url(&server, "train"), "rock").await;
                assert_eq!(response.status(), StatusCode::OK);
                let body: TrainResponse = response.json().await.expect("Bad train response");
                assert_eq!(body.training_complete, i == 10);
                assert_eq!(body.training_scores.total(), i);
                assert_eq!(body.result, Move::Rock.against(body.ai_move));
            }
        }
        server.shutdown().await;
    }

    #[tokio::test]
    async fn battle_ends_when_a_side_takes_three_wins() {
        let server = start_server().await;
        let client = Client::new();
        let mut finished = false;
        for _ in 0..200 {
            let response = post_move(&client, &url(&server, "battle"), "paper").await;
            assert_eq!(response.status(), StatusCode::OK);
            let body: BattleResponse = response.json().await.expect("Bad battle response");
            if body.game_over {
                let winner = body.winner.expect("game over without a winner");
                let winner_score = match winner {
                    Side::Player => body.final_scores.player,
                    Side::Ai => body.final_scores.ai,
                };
                assert_eq!(winner_score, 3);
                assert_eq!(body.battle_scores, Scoreboard::default());
                finished = true;
                break;
            }
            assert!(body.winner.is_none());
            assert_eq!(body.battle_scores, body.final_scores);
        }
        assert!(finished, "no side reached three wins in 200 rounds");
        server.shutdown().await;
    }

    #[tokio::test]
    async fn invalid_moves_get_400_without_touching_state() {
        let server = start_server().await;
        let client = Client::new();

        for endpoint in ["train", "battle"] {
            let response = post_move(&client, &url(&server, endpoint), "lizard").await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let body: ErrorResponse = response.json().await.expect("Bad error response");
            assert!(!body.error.is_empty());
        }
        let response = client
            .post(url(&server, "train"))
            .json(&json!({}))
            .send()
            .await
            .expect("Request failed");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // Rejected requests must not have advanced the training counter
        for i in 1..=10u32 {
            let response = post_move(&client, &url(&server, "train"), "scissors").await;
            let body: TrainResponse = response.json().await.expect("Bad train response");
            assert_eq!(body.training_complete, i == 10);
        }
        server.shutdown().await;
    }

    #[tokio::test]
    async fn root_answers_browsers_with_permissive_cors() {
        let server = start_server().await;
        let client = Client::new();
        let response = client
            .get(url(&server, ""))
            .header("Origin", "http://example.com")
            .send()
            .await
            .expect("Request failed");
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .contains_key("access-control-allow-origin"));
        server.shutdown().await;
    }
}
