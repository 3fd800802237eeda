use agent::client::ArenaClient;
use agent::strategy::{CounterLast, OnlyPaper, OnlyRock, OnlyScissors, RandomMove, Strategy};
use clap::{Parser, ValueEnum};
use tracing::{info, Level};

#[derive(Parser)]
struct Args {
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    server_url: String,
    #[arg(long, value_enum, default_value = "random")]
    strategy: StrategyKind,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyKind {
    Rock,
    Paper,
    Scissors,
    Random,
    Counter,
}

impl StrategyKind {
    fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Rock => Box::new(OnlyRock {}),
            StrategyKind::Paper => Box::new(OnlyPaper {}),
            StrategyKind::Scissors => Box::new(OnlyScissors {}),
            StrategyKind::Random => Box::new(RandomMove {}),
            StrategyKind::Counter => Box::new(CounterLast {}),
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_line_number(true)
        .with_file(true)
        .with_max_level(Level::INFO)
        .init();
    let args = Args::parse();
    let strategy = args.strategy.build();
    let mut client = ArenaClient::new(&args.server_url);

    // Train the arena for one full session
    loop {
        let my_move = strategy.make_move(client.history());
        let response = client.train(my_move).await.expect("Training request failed");
        info!(
            "train: played {}, arena played {}, {} ({})",
            my_move, response.ai_move, response.result, response.message
        );
        if response.training_complete {
            info!("Training complete: {:?}", response.training_scores);
            break;
        }
    }

    // Then battle until the arena calls the match
    loop {
        let my_move = strategy.make_move(client.history());
        let response = client.battle(my_move).await.expect("Battle request failed");
        info!(
            "battle: played {}, arena played {}, {} ({})",
            my_move, response.ai_move, response.result, response.message
        );
        if response.game_over {
            info!(
                "Match over, winner {:?}: {:?}",
                response.winner, response.final_scores
            );
            break;
        }
    }
}
