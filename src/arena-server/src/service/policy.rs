use common::model::game::{Move, Outcome};
use rand::{distributions::Uniform, Rng};

// Learning hyperparameters
const LEARNING_RATE: f64 = 0.2;
const DISCOUNT: f64 = 0.95;
const TRAINING_EXPLORATION: f64 = 0.5;
const INITIAL_WEIGHT_SPREAD: f64 = 0.1;

// 3x3 preference table over (player move, ai move), trained during the
// training round only. Battle rounds stay uniform random.
pub struct MovePolicy {
    weights: [[f64; Move::COUNT]; Move::COUNT],
}

impl MovePolicy {
    // Seed the table with small random weights so training varies between runs
    pub fn new(rng: &mut impl Rng) -> Self {
        let spread = Uniform::new(-INITIAL_WEIGHT_SPREAD, INITIAL_WEIGHT_SPREAD);
        let mut weights = [[0.0; Move::COUNT]; Move::COUNT];
        for row in weights.iter_mut() {
            for cell in row.iter_mut() {
                *cell = rng.sample(spread);
            }
        }
        MovePolicy { weights }
    }

    pub fn pick_battle_move(rng: &mut impl Rng) -> Move {
        Move::ALL[rng.gen_range(0..Move::COUNT)]
    }

    // Epsilon-greedy: explore at a fixed rate, otherwise exploit the table
    pub fn pick_training_move(&self, player_move: Move, rng: &mut impl Rng) -> Move {
        if rng.gen::<f64>() < TRAINING_EXPLORATION {
            return Self::pick_battle_move(rng);
        }
        self.best_response(player_move)
    }

    // First maximum wins on ties
    pub fn best_response(&self, player_move: Move) -> Move {
        let row = &self.weights[player_move.index()];
        let mut best = Move::ALL[0];
        let mut best_weight = row[0];
        for (candidate, &weight) in Move::ALL.into_iter().zip(row.iter()).skip(1) {
            if weight > best_weight {
                best = candidate;
                best_weight = weight;
            }
        }
        best
    }

    // Moving-average update on the played cell, with a discounted lookahead
    // over the row the ai's move indexes. Reward is from the ai's side.
    pub fn learn(&mut self, player_move: Move, ai_move: Move, outcome: Outcome) {
        let reward = match outcome {
            Outcome::Win => -1.0,
            Outcome::Lose => 1.0,
            Outcome::Draw => 0.0,
        };
        let lookahead = Self::row_max(&self.weights[ai_move.index()]);
        let cell = &mut self.weights[player_move.index()][ai_move.index()];
        *cell = (1.0 - LEARNING_RATE) * *cell + LEARNING_RATE * (reward + DISCOUNT * lookahead);
    }

    fn row_max(row: &[f64; Move::COUNT]) -> f64 {
        row.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}
