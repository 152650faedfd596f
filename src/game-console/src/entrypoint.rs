use std::time::Duration;

use agent::strategy::Strategy;
use common::console::{ConsoleError, ConsoleHandler, ConsoleReader, ConsoleWriter};
use tokio::{
    sync::{broadcast, mpsc, oneshot},
    task::JoinHandle,
};
use tracing::{error, info, warn, Level};

use crate::{
    model::internal::GameRequest,
    service::{
        cues::CueBoard, game_console::GameConsole, game_session::GameSession, sounds::SoundBoard,
    },
};

#[derive(Clone, Debug)]
pub struct ConsoleConfig {
    // How long the picked move stays highlighted
    pub choice_cue: Duration,
    // How long a score that just changed stays highlighted
    pub score_cue: Duration,
    pub color: bool,
    pub bell: bool,
    pub log_level: Level,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            choice_cue: Duration::from_millis(300),
            score_cue: Duration::from_millis(500),
            color: false,
            bell: false,
            log_level: Level::WARN,
        }
    }
}

pub fn init_logging(level: Level) {
    // Ignore error if already set
    let _ = tracing_subscriber::fmt()
        .with_line_number(true)
        .with_file(true)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn spawn_session(
    strategy: Box<dyn Strategy>,
    mut shutdown_receiver: broadcast::Receiver<()>,
) -> (mpsc::Sender<GameRequest>, JoinHandle<()>) {
    let (to_session_sender, to_session_receiver): (
        mpsc::Sender<GameRequest>,
        mpsc::Receiver<GameRequest>,
    ) = mpsc::channel(100);
    let handle = tokio::spawn(async move {
        GameSession::new(strategy)
            .run(&mut shutdown_receiver, to_session_receiver)
            .await
    });
    (to_session_sender, handle)
}

pub async fn serve(
    config: ConsoleConfig,
    strategy: Box<dyn Strategy>,
    reader: ConsoleReader,
    writer: ConsoleWriter,
    shutdown_receiver: broadcast::Receiver<()>,
    ready_signal: Option<oneshot::Sender<()>>,
) -> Result<(), ConsoleError> {
    let mut console_shutdown_receiver = shutdown_receiver.resubscribe();

    // The session owns the match; the console only renders it
    let (to_session_sender, session_handle) = spawn_session(strategy, shutdown_receiver);
    let mut console = GameConsole::new(
        CueBoard::new(config.choice_cue, config.score_cue),
        SoundBoard::new(config.bell),
        config.color,
    );

    // Signal that the game is ready
    if let Some(ready_signal) = ready_signal {
        info!("Sent ready");
        if ready_signal.send(()).is_err() {
            warn!("Nobody was waiting for the ready signal");
        }
    }

    let result = console
        .listen(reader, writer, &mut console_shutdown_receiver, to_session_sender)
        .await;
    if let Err(e) = session_handle.await {
        error!("Game session exited non-gracefully: {}", e);
    }
    result
}
