use common::model::cue::Cue;
use tracing::debug;

const BELL: &str = "\x07";

// The bell rings for wins and losses only
#[derive(Debug, Clone, Copy)]
pub struct SoundBoard {
    bell: bool,
}

impl SoundBoard {
    pub fn new(bell: bool) -> Self {
        SoundBoard { bell }
    }

    pub fn play(&self, cue: Cue) -> &'static str {
        debug!(asset = cue.asset_key(), "cue");
        match cue {
            Cue::Win | Cue::Lose if self.bell => BELL,
            _ => "",
        }
    }
}
