use std::{fmt::Debug, io, str::FromStr};

use async_trait::async_trait;
use thiserror::Error;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt},
    sync::{broadcast, mpsc::Sender},
};
use tracing::{debug, info};

use crate::error::ParseError;

pub type ConsoleReader = Box<dyn AsyncBufRead + Unpin + Send>;
pub type ConsoleWriter = Box<dyn AsyncWrite + Unpin + Send>;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("game session is no longer running")]
    SessionClosed,
}

#[async_trait]
pub trait ConsoleHandler<ExternalRQ, ExternalRS, InternalRQ>
where
    Self: Send + Sync + 'static,
    ExternalRQ: FromStr<Err = ParseError> + Debug + Send + 'static,
    ExternalRS: Send + Sync + 'static,
    InternalRQ: Send + 'static,
{
    async fn listen(
        &mut self,
        reader: ConsoleReader,
        mut writer: ConsoleWriter,
        shutdown_receiver: &mut broadcast::Receiver<()>,
        internal_sender: Sender<InternalRQ>,
    ) -> Result<(), ConsoleError> {
        let mut lines = reader.lines();
        writer.write_all(self.greeting().as_bytes()).await?;
        writer.flush().await?;
        info!("Console attached");
        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        debug!("Console input closed");
                        break;
                    };
                    if line.trim().is_empty() {
                        continue;
                    }
                    let request = match line.parse::<ExternalRQ>() {
                        Ok(request) => request,
                        Err(error) => {
                            debug!("Ignoring console line {:?}: {}", line, error);
                            writer.write_all(format!("{}\n", error).as_bytes()).await?;
                            writer.flush().await?;
                            continue;
                        }
                    };
                    debug!("request: {:?}", request);
                    if Self::close_on_request(&request) {
                        break;
                    }

                    let responses = match self
                        .respond_to_request(request, internal_sender.clone())
                        .await
                    {
                        Ok(responses) => responses,
                        // The session stops first on shutdown
                        Err(ConsoleError::SessionClosed) if shutdown_receiver.try_recv().is_ok() => {
                            debug!("Session closed for shutdown");
                            break;
                        }
                        Err(e) => return Err(e),
                    };
                    for response in responses.iter() {
                        let body = self.render(response).await;
                        writer.write_all(body.as_bytes()).await?;
                    }
                    writer.flush().await?;
                }
                _ = shutdown_receiver.recv() => {
                    break;
                }
            }
        }
        writer.write_all(self.farewell().as_bytes()).await?;
        writer.flush().await?;
        info!("Exited console");
        Ok(())
    }

    // Logic to handle a parsed request, returns everything to show the user
    async fn respond_to_request(
        &mut self,
        request: ExternalRQ,
        internal_sender: Sender<InternalRQ>,
    ) -> Result<Vec<ExternalRS>, ConsoleError>;

    async fn render(&self, response: &ExternalRS) -> String;

    // Criterion to close the console. By default, only end of input closes it.
    fn close_on_request(_request: &ExternalRQ) -> bool {
        false
    }

    fn greeting(&self) -> String {
        String::new()
    }

    fn farewell(&self) -> String {
        String::new()
    }
}
