use clap::Subcommand;
use colored::*;
use taskman_cli::render::users_table;

use super::{report_read_error, App};

#[derive(Subcommand)]
pub enum UsersCommands {
    /// List all users
    List,
}

pub async fn handle_users_command(app: &App, command: UsersCommands) -> anyhow::Result<()> {
    let auth = app.require_login()?;

    match command {
        UsersCommands::List => {
            let users = match app.api.list_users(&auth).await {
                Ok(users) => users,
                Err(e) => {
                    report_read_error("users", &e);
                    Vec::new()
                }
            };

            if users.is_empty() {
                println!("{}", "No users found".yellow());
                return Ok(());
            }

            println!("{}", "👥 Users".blue().bold());
            println!();
            println!("{}", users_table(&users));
            println!("Total: {} users", users.len().to_string().cyan());
            Ok(())
        }
    }
}
