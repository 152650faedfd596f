use std::{sync::Arc, time::Duration};

use common::model::game::{Move, Side};
use tokio::sync::Mutex;
use tracing::debug;

use crate::model::external::Animations;

#[derive(Default)]
struct CueState {
    animations: Animations,
    // Bumped on every new cue so an older timer leaves a newer cue alone
    choice_generation: u64,
    user_generation: u64,
    computer_generation: u64,
}

// Self-clearing view flags, never the match itself
#[derive(Clone)]
pub struct CueBoard {
    state: Arc<Mutex<CueState>>,
    choice_duration: Duration,
    score_duration: Duration,
}

impl CueBoard {
    pub fn new(choice_duration: Duration, score_duration: Duration) -> Self {
        CueBoard {
            state: Arc::new(Mutex::new(CueState::default())),
            choice_duration,
            score_duration,
        }
    }

    pub async fn snapshot(&self) -> Animations {
        self.state.lock().await.animations
    }

    pub async fn flash_choice(&self, value: Move) {
        let generation = {
            let mut state = self.state.lock().await;
            state.animations.choice = Some(value);
            state.choice_generation += 1;
            state.choice_generation
        };
        let state = self.state.clone();
        let duration = self.choice_duration;
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let mut state = state.lock().await;
            if state.choice_generation == generation {
                state.animations.choice = None;
            }
        });
    }

    pub async fn flash_score(&self, side: Side) {
        debug!("Flashing {:?} score", side);
        let generation = {
            let mut state = self.state.lock().await;
            match side {
                Side::User => {
                    state.animations.user_score = true;
                    state.user_generation += 1;
                    state.user_generation
                }
                Side::Computer => {
                    state.animations.computer_score = true;
                    state.computer_generation += 1;
                    state.computer_generation
                }
            }
        };
        let state = self.state.clone();
        let duration = self.score_duration;
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let mut state = state.lock().await;
            match side {
                Side::User if state.user_generation == generation => {
                    state.animations.user_score = false;
                }
                Side::Computer if state.computer_generation == generation => {
                    state.animations.computer_score = false;
                }
                _ => {}
            }
        });
    }
}
