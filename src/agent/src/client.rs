use common::model::game::{Move, Outcome};
use tracing::debug;

use crate::strategy::{Round, Strategy};

pub struct Client {
    strategy: Box<dyn Strategy>,
    history: Vec<Round>,
    last_move: Option<Move>,
}

impl Client {
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Client {
            strategy,
            history: Vec::new(),
            last_move: None,
        }
    }

    pub fn play(&mut self) -> Move {
        let next_move = self.strategy.make_move(&self.history);
        debug!("Opponent plays {} after {} rounds", next_move, self.history.len());
        self.last_move = Some(next_move);
        next_move
    }

    // `user_outcome` is from the user's side
    pub fn record(&mut self, their_move: Move, user_outcome: Outcome) {
        let Some(my_move) = self.last_move else {
            debug!("Round recorded before the opponent played, ignoring");
            return;
        };
        self.history.push(Round {
            my_move,
            their_move,
            outcome: user_outcome.reversed(),
        });
    }

    pub fn reset(&mut self) {
        self.history.clear();
        self.last_move = None;
    }

    pub fn history(&self) -> &[Round] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{OnlyPaper, Scripted};

    #[test]
    fn records_rounds_from_own_side() {
        let mut client = Client::new(Box::new(OnlyPaper {}));
        assert_eq!(client.play(), Move::Paper);
        client.record(Move::Scissors, Outcome::Win);
        assert_eq!(
            client.history(),
            &[Round {
                my_move: Move::Paper,
                their_move: Move::Scissors,
                outcome: Outcome::Loss,
            }]
        );
        assert_eq!(client.last_move(), Some(Move::Paper));
    }

    #[test]
    fn record_without_play_is_ignored() {
        let mut client = Client::new(Box::new(OnlyPaper {}));
        client.record(Move::Rock, Outcome::Loss);
        assert!(client.history().is_empty());
    }

    #[test]
    fn reset_restarts_script() {
        let mut client = Client::new(Box::new(Scripted::new(vec![Move::Rock, Move::Paper])));
        let first = client.play();
        client.record(Move::Rock, Outcome::Draw);
        assert_eq!(client.play(), Move::Paper);
        client.reset();
        assert!(client.history().is_empty());
        assert_eq!(client.last_move(), None);
        assert_eq!(client.play(), first);
    }
}
