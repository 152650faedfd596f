use std::io::IsTerminal;

use agent::strategy::RandomMove;
use common::utility::create_shutdown_channel;
use game_console::entrypoint::{init_logging, serve, ConsoleConfig};
use tokio::io::BufReader;
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Config
    let config = ConsoleConfig {
        color: std::io::stdout().is_terminal(),
        ..ConsoleConfig::default()
    };
    init_logging(config.log_level);

    let shutdown_receiver = create_shutdown_channel().await;
    let result = serve(
        config,
        Box::new(RandomMove {}),
        Box::new(BufReader::new(tokio::io::stdin())),
        Box::new(tokio::io::stdout()),
        shutdown_receiver,
        None,
    )
    .await;

    let code = match result {
        Ok(()) => 0,
        Err(e) => {
            error!("Game console failed: {}", e);
            1
        }
    };
    // A pending stdin read would keep the runtime from shutting down
    std::process::exit(code)
}
