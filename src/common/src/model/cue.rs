use serde::{Deserialize, Serialize};

use super::game::Outcome;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Click,
    Win,
    Lose,
}

impl Cue {
    pub fn asset_key(&self) -> &'static str {
        match self {
            Cue::Click => "click",
            Cue::Win => "win",
            Cue::Lose => "lose",
        }
    }

    // Draws are silent
    pub fn for_outcome(outcome: Outcome) -> Option<Cue> {
        match outcome {
            Outcome::Win => Some(Cue::Win),
            Outcome::Loss => Some(Cue::Lose),
            Outcome::Draw => None,
        }
    }
}
