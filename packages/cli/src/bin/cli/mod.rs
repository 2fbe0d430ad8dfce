pub mod account;
pub mod boards;
pub mod tasks;
pub mod users;

use anyhow::bail;
use colored::*;
use taskman_client::{ApiClient, AuthContext, ClientError, FileTokenStore, Session};

/// Everything a command handler needs: the API and the stored session
pub struct App {
    pub api: ApiClient,
    pub session: Session<FileTokenStore>,
}

impl App {
    /// Guard for protected views. Without a token this prints the login hint
    /// and fails before any request goes out.
    pub fn require_login(&self) -> anyhow::Result<AuthContext> {
        match self.session.guard() {
            Ok(auth) => Ok(auth),
            Err(ClientError::NotAuthenticated) => {
                print_login_hint();
                bail!("Not logged in")
            }
            Err(e) => Err(e.into()),
        }
    }
}

pub fn print_login_hint() {
    println!("{}", "You are not logged in".yellow());
    println!("{}", "Use 'taskman login' or 'taskman register' to get started".dimmed());
}

/// A read view failed: log it, hint at re-login when the token was refused
pub fn report_read_error(what: &str, err: &ClientError) {
    tracing::error!("Error fetching {}: {}", what, err);
    if err.is_auth_error() {
        println!("{}", "Your session was rejected by the server".yellow());
        println!("{}", "Use 'taskman login' to sign in again".dimmed());
    }
}
