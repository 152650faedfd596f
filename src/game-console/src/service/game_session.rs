use agent::{client::Client, strategy::Strategy};
use common::{
    message::console::{ClientRequest, ClientResponse, RoundResultResponse},
    model::{
        game::Move,
        match_state::{play_round, reset_match, MatchState, RoundResolution},
    },
};
use tokio::sync::{broadcast, mpsc::Receiver};
use tracing::{debug, info, warn};

use crate::model::internal::GameRequest;

pub struct GameSession {
    state: MatchState,
    opponent: Client,
}

impl GameSession {
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        GameSession {
            state: MatchState::new(),
            opponent: Client::new(strategy),
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub async fn run(
        mut self,
        shutdown_receiver: &mut broadcast::Receiver<()>,
        mut from_console: Receiver<GameRequest>,
    ) {
        info!("Game session started");
        loop {
            tokio::select! {
                request = from_console.recv() => {
                    let Some(GameRequest { request, reply }) = request else {
                        debug!("Console hung up");
                        break;
                    };
                    let responses = self.update(request);
                    if reply.send(responses).is_err() {
                        warn!("Console dropped its reply channel");
                    }
                }
                _ = shutdown_receiver.recv() => {
                    // Answer whatever was already queued so no console is left waiting
                    from_console.close();
                    while let Some(GameRequest { request, reply }) = from_console.recv().await {
                        let _ = reply.send(self.update(request));
                    }
                    break;
                }
            }
        }
        info!(
            "Game session over after {} rounds",
            self.state.rounds_played()
        );
    }

    pub fn update(&mut self, request: ClientRequest) -> Vec<ClientResponse> {
        match request {
            ClientRequest::Move { value } => self.play(value),
            ClientRequest::Reset => {
                info!("Match reset");
                self.state = reset_match();
                self.opponent.reset();
                vec![ClientResponse::MatchReset]
            }
            ClientRequest::Status => vec![ClientResponse::Status {
                user_score: self.state.user_score(),
                computer_score: self.state.computer_score(),
                rounds_played: self.state.rounds_played(),
                draws: self.state.draws(),
                concluded: self.state.is_concluded(),
            }],
            ClientRequest::Quit => {
                warn!("Quit reached the game session, the console should have closed");
                vec![]
            }
        }
    }

    fn play(&mut self, user_move: Move) -> Vec<ClientResponse> {
        // Checked before play_round too, so a rejected move doesn't draw an opponent move
        if self.state.is_concluded() {
            warn!("Got a move after the match was decided");
            return vec![self.rejected()];
        }
        let computer_move = self.opponent.play();
        let RoundResolution::Played(report) = play_round(self.state, user_move, computer_move)
        else {
            return vec![self.rejected()];
        };
        self.opponent.record(user_move, report.outcome);
        self.state = report.state;
        debug!(
            "{} vs {}: {:?}, score {}-{}",
            user_move,
            computer_move,
            report.outcome,
            self.state.user_score(),
            self.state.computer_score()
        );

        let mut responses = vec![ClientResponse::RoundResult(RoundResultResponse {
            result: report.outcome,
            your_move: user_move,
            other_move: computer_move,
            user_score: self.state.user_score(),
            computer_score: self.state.computer_score(),
        })];
        if let Some(winner) = self.state.winner() {
            info!("Match decided, {:?} wins", winner);
            responses.push(ClientResponse::MatchResult {
                winner,
                user_score: self.state.user_score(),
                computer_score: self.state.computer_score(),
            });
        }
        responses
    }

    fn rejected(&self) -> ClientResponse {
        ClientResponse::MoveRejected {
            user_score: self.state.user_score(),
            computer_score: self.state.computer_score(),
        }
    }
}
