//! TaskMan API client
//!
//! Typed access to the board/task REST API, the session that holds the
//! bearer token, and the controller that merges confirmed changes into the
//! local board store.

pub mod api;
pub mod auth;
pub mod client;
pub mod controller;
pub mod error;

pub use auth::{AuthContext, FileTokenStore, MemoryTokenStore, Session, TokenStore};
pub use client::ApiClient;
pub use controller::BoardController;
pub use error::{ClientError, ClientResult};

use taskman_config::ClientConfig;

/// Build the API client and open the file-backed session described by `config`
pub async fn init(config: ClientConfig) -> ClientResult<(ApiClient, Session<FileTokenStore>)> {
    let store = FileTokenStore::new(config.session_file());
    let session = Session::open(store).await;
    let api = ApiClient::new(config)?;
    Ok((api, session))
}
