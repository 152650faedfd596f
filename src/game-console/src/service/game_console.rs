use async_trait::async_trait;
use common::{
    console::{ConsoleError, ConsoleHandler},
    message::console::{ClientRequest, ClientResponse},
    model::{cue::Cue, match_state::GAMES_TO_WIN},
};
use tokio::sync::{mpsc::Sender, oneshot};
use tracing::debug;

use crate::{
    model::{
        external::{describe, palette, score_line, Animations, Banner},
        internal::GameRequest,
    },
    service::{cues::CueBoard, sounds::SoundBoard},
};

pub struct GameConsole {
    cues: CueBoard,
    sounds: SoundBoard,
    color: bool,
    // Set once the match is decided; moves then get no click or animation
    locked: bool,
}

impl GameConsole {
    pub fn new(cues: CueBoard, sounds: SoundBoard, color: bool) -> Self {
        GameConsole {
            cues,
            sounds,
            color,
            locked: false,
        }
    }

    async fn forward(
        &self,
        request: ClientRequest,
        internal_sender: Sender<GameRequest>,
    ) -> Result<Vec<ClientResponse>, ConsoleError> {
        let (reply, response) = oneshot::channel();
        internal_sender
            .send(GameRequest { request, reply })
            .await
            .map_err(|_| ConsoleError::SessionClosed)?;
        response.await.map_err(|_| ConsoleError::SessionClosed)
    }
}

#[async_trait]
impl ConsoleHandler<ClientRequest, ClientResponse, GameRequest> for GameConsole {
    async fn respond_to_request(
        &mut self,
        request: ClientRequest,
        internal_sender: Sender<GameRequest>,
    ) -> Result<Vec<ClientResponse>, ConsoleError> {
        if let ClientRequest::Move { value } = request {
            if self.locked {
                debug!("Move {} while locked, no cues", value);
                return self.forward(request, internal_sender).await;
            }
            self.sounds.play(Cue::Click);
            self.cues.flash_choice(value).await;
        }

        let responses = self.forward(request, internal_sender).await?;
        for response in responses.iter() {
            match response {
                ClientResponse::RoundResult(round) => {
                    if let Some(side) = round.result.scorer() {
                        self.cues.flash_score(side).await;
                    }
                }
                ClientResponse::MatchResult { .. } => self.locked = true,
                ClientResponse::MatchReset => self.locked = false,
                _ => {}
            }
        }
        Ok(responses)
    }

    async fn render(&self, response: &ClientResponse) -> String {
        let animations = self.cues.snapshot().await;
        let sound = match response {
            ClientResponse::RoundResult(round) => {
                Cue::for_outcome(round.result).map_or("", |cue| self.sounds.play(cue))
            }
            _ => "",
        };
        let mut body = String::from(sound);
        for line in describe(response, &animations, self.color) {
            body.push_str(&line);
            body.push('\n');
        }
        body
    }

    fn close_on_request(request: &ClientRequest) -> bool {
        matches!(request, ClientRequest::Quit)
    }

    fn greeting(&self) -> String {
        let animations = Animations::default();
        format!(
            "Rock Paper Scissors, first to {} wins.\n{}\n{}\n{}\n",
            GAMES_TO_WIN,
            Banner::welcome().paint(self.color),
            score_line(0, 0, &animations),
            palette(&animations, false)
        )
    }

    fn farewell(&self) -> String {
        "Bye!\n".to_owned()
    }
}
