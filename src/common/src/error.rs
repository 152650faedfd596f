use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("nothing to play, type rock, paper or scissors")]
    Empty,

    #[error("unknown move `{0}`, expected rock, paper or scissors")]
    UnknownMove(String),

    #[error("unknown command `{0}`, try rock, paper, scissors, reset, status or quit")]
    UnknownCommand(String),

    #[error("malformed request: {0}")]
    Malformed(String),
}
