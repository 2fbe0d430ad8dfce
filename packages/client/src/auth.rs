//! Session token storage and the session guard for protected views

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

use crate::client::ApiClient;
use crate::error::{ClientError, ClientResult};

/// Where the bearer token lives between runs
#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn load(&self) -> ClientResult<Option<String>>;
    async fn save(&self, token: &str) -> ClientResult<()>;
    async fn clear(&self) -> ClientResult<()>;
}

/// Token information stored locally
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SessionFile {
    token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    saved_at: Option<DateTime<Utc>>,
}

/// Stores the token as TOML in a single file, readable only by the owner
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> ClientResult<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).await?;
        let session: SessionFile = toml::from_str(&content)
            .map_err(|e| ClientError::storage(format!("Invalid session file: {}", e)))?;

        if session.token.is_empty() {
            return Ok(None);
        }
        Ok(Some(session.token))
    }

    async fn save(&self, token: &str) -> ClientResult<()> {
        // Ensure config directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let session = SessionFile {
            token: token.to_string(),
            saved_at: Some(Utc::now()),
        };
        let content = toml::to_string_pretty(&session)
            .map_err(|e| ClientError::storage(format!("Failed to serialize session: {}", e)))?;

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o600);

        let mut file = options.open(&self.path).await?;

        // A file left by an older run keeps its mode on open
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(std::fs::Permissions::from_mode(0o600))
                .await?;
        }

        file.write_all(content.as_bytes()).await?;
        file.flush().await?;

        debug!("Saved session to {}", self.path.display());
        Ok(())
    }

    async fn clear(&self) -> ClientResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).await?;
        }
        Ok(())
    }
}

/// Keeps the token in memory only
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.token.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> ClientResult<Option<String>> {
        Ok(self.slot().clone())
    }

    async fn save(&self, token: &str) -> ClientResult<()> {
        *self.slot() = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> ClientResult<()> {
        *self.slot() = None;
        Ok(())
    }
}

/// Proof that a token was present when a protected view started.
///
/// Every request made with it carries `Authorization: Bearer <token>`.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthContext {
    token: String,
}

impl AuthContext {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthContext")
            .field("token", &"<redacted>")
            .finish()
    }
}

/// The application's session, opened once at startup and passed to whatever
/// needs authentication.
pub struct Session<S: TokenStore> {
    store: S,
    token: Option<String>,
}

impl<S: TokenStore> Session<S> {
    /// Load any stored token
    pub async fn open(store: S) -> Self {
        let token = match store.load().await {
            Ok(token) => token,
            Err(e) => {
                warn!("Could not load stored session: {}", e);
                None
            }
        };
        Self { store, token }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Session guard: a protected view calls this before anything else and
    /// bails out with `NotAuthenticated` when no token is stored.
    pub fn guard(&self) -> ClientResult<AuthContext> {
        match &self.token {
            Some(token) => Ok(AuthContext::new(token.clone())),
            None => {
                debug!("No session token, redirecting to login");
                Err(ClientError::NotAuthenticated)
            }
        }
    }

    pub async fn login(&mut self, api: &ApiClient, email: &str, password: &str) -> ClientResult<()> {
        let token = api.login(email, password).await?;
        self.store.save(&token).await?;
        self.token = Some(token);
        info!("Logged in as {}", email);
        Ok(())
    }

    /// Create the account, then log straight in with the same credentials
    pub async fn register(
        &mut self,
        api: &ApiClient,
        name: &str,
        email: &str,
        password: &str,
    ) -> ClientResult<()> {
        api.register(name, email, password).await?;
        info!("Registered {}", email);
        self.login(api, email, password)
            .await
            .map_err(|e| ClientError::LoginAfterRegister(Box::new(e)))
    }

    pub async fn logout(&mut self) -> ClientResult<()> {
        self.store.clear().await?;
        self.token = None;
        Ok(())
    }
}
