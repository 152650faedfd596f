use std::str::FromStr;

use crate::error::ParseError;
use crate::model::game::{Move, Outcome, Side};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RoundResultResponse {
    pub result: Outcome,
    pub your_move: Move,
    pub other_move: Move,
    pub user_score: u8,
    pub computer_score: u8,
}

// Client types
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum ClientRequest {
    Move { value: Move },
    Reset,
    Status,
    Quit,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum ClientResponse {
    RoundResult(RoundResultResponse),
    // Sent right after the round that decided the match
    MatchResult {
        winner: Side,
        user_score: u8,
        computer_score: u8,
    },
    // Move submitted after the match was decided
    MoveRejected {
        user_score: u8,
        computer_score: u8,
    },
    MatchReset,
    Status {
        user_score: u8,
        computer_score: u8,
        rounds_played: u32,
        draws: u32,
        concluded: bool,
    },
}

impl FromStr for ClientRequest {
    type Err = ParseError;

    // Command word or the JSON form
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        if line.starts_with('{') {
            return serde_json::from_str(line).map_err(|e| ParseError::Malformed(e.to_string()));
        }
        match line.to_ascii_lowercase().as_str() {
            "reset" | "again" | "new" => Ok(ClientRequest::Reset),
            "status" | "score" => Ok(ClientRequest::Status),
            "quit" | "exit" | "q" => Ok(ClientRequest::Quit),
            word => match word.parse::<Move>() {
                Ok(value) => Ok(ClientRequest::Move { value }),
                Err(ParseError::UnknownMove(other)) => Err(ParseError::UnknownCommand(other)),
                Err(e) => Err(e),
            },
        }
    }
}
