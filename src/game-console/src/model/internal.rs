use common::message::console::{ClientRequest, ClientResponse};
use tokio::sync::oneshot;

// Messages
#[derive(Debug)]
pub struct GameRequest {
    pub request: ClientRequest,
    // Everything the session has to say about this request, in order
    pub reply: oneshot::Sender<Vec<ClientResponse>>,
}
