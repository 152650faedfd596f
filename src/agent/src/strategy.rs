use common::model::game::{Move, Outcome};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Round {
    pub my_move: Move,
    pub their_move: Move,
    pub outcome: Outcome,
}

pub trait Strategy: Send {
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

// Uniform over all three moves, independent of history
pub struct RandomMove {}
impl Strategy for RandomMove {
    fn make_move(&self, _: &[Round]) -> Move {
        Move::ALL[rand::rng().random_range(0..Move::ALL.len())]
    }
}

// Cycles through `moves`, indexed by history length
pub struct Scripted {
    moves: Vec<Move>,
}
impl Scripted {
    pub fn new(moves: Vec<Move>) -> Self {
        assert!(!moves.is_empty(), "A script needs at least one move");
        Scripted { moves }
    }
}
impl Strategy for Scripted {
    fn make_move(&self, history: &[Round]) -> Move {
        self.moves[history.len() % self.moves.len()]
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn round(my_move: Move) -> Round {
        Round {
            my_move,
            their_move: Move::Rock,
            outcome: Outcome::Draw,
        }
    }

    #[test]
    fn constant_strategies() {
        let history = vec![round(Move::Paper)];
        assert_eq!(OnlyRock {}.make_move(&history), Move::Rock);
        assert_eq!(OnlyPaper {}.make_move(&history), Move::Paper);
        assert_eq!(OnlyScissors {}.make_move(&[]), Move::Scissors);
    }

    #[test]
    fn scripted_cycles_with_history() {
        let script = Scripted::new(vec![Move::Rock, Move::Scissors]);
        let mut history = vec![];
        let mut played = vec![];
        for _ in 0..5 {
            let next = script.make_move(&history);
            played.push(next);
            history.push(round(next));
        }
        assert_eq!(
            played,
            vec![
                Move::Rock,
                Move::Scissors,
                Move::Rock,
                Move::Scissors,
                Move::Rock
            ]
        );
        assert_eq!(script.make_move(&[]), Move::Rock);
    }

    #[test]
    #[should_panic(expected = "at least one move")]
    fn empty_script_panics() {
        Scripted::new(vec![]);
    }

    #[test]
    fn random_move_covers_all_moves_evenly() {
        let strategy = RandomMove {};
        let mut counts: HashMap<Move, u32> = HashMap::new();
        for _ in 0..3000 {
            *counts.entry(strategy.make_move(&[])).or_default() += 1;
        }
        for value in Move::ALL {
            let count = counts.get(&value).copied().unwrap_or(0);
            // Expected 1000 each, standard deviation is about 26
            assert!((800..1200).contains(&count), "{:?} drawn {} times", value, count);
        }
    }
}
