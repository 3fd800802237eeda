use common::model::game::{Move, Outcome};
use rand::Rng;

pub struct Round {
    pub my_move: Move,
    pub their_move: Move,
    pub outcome: Outcome,
}
pub trait Strategy {
    fn make_move(&self, history: &[Round]) -> Move;
}

// Trivial strategies
pub struct OnlyRock {}
impl Strategy for OnlyRock {
    fn make_move(&self, _: &[Round]) -> Move {
        Move::Rock
    }
}
pub struct OnlyPaper {}
impl Strategy for OnlyPaper {
    fn make_move(&self, _: &[Round]) -> Move {
        Move::Paper
    }
}
pub struct OnlyScissors {}
impl Strategy for OnlyScissors {
    fn make_move(&self, _: &[Round]) -> Move {
        Move::Scissors
    }
}

// Random
pub struct RandomMove {}
impl Strategy for RandomMove {
    fn make_move(&self, _: &[Round]) -> Move {
        let mut rng = rand::thread_rng();
        Move::ALL[rng.gen_range(0..Move::ALL.len())]
    }
}

// Beat whatever the arena played last
pub struct CounterLast {}
impl Strategy for CounterLast {
    fn make_move(&self, history: &[Round]) -> Move {
        match history.last() {
            Some(round) => round.their_move.counter(),
            None => Move::Rock,
        }
    }
}
