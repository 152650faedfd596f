pub mod console;
pub mod error;
pub mod utility;

pub mod model {
    pub mod cue;
    pub mod game;
    pub mod match_state;
}

pub mod message {
    pub mod console;
}
