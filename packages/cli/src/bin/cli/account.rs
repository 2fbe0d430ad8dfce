use colored::*;
use inquire::{Password, PasswordDisplayMode, Text};

use super::App;

pub enum AccountCommand {
    Login {
        email: Option<String>,
        password: Option<String>,
    },
    Register {
        name: Option<String>,
        email: Option<String>,
        password: Option<String>,
    },
    Logout,
    Status,
}

pub async fn handle_account_command(app: &mut App, command: AccountCommand) -> anyhow::Result<()> {
    match command {
        AccountCommand::Login { email, password } => login(app, email, password).await,
        AccountCommand::Register {
            name,
            email,
            password,
        } => register(app, name, email, password).await,
        AccountCommand::Logout => logout(app).await,
        AccountCommand::Status => status(app).await,
    }
}

async fn login(app: &mut App, email: Option<String>, password: Option<String>) -> anyhow::Result<()> {
    println!("{}", "🔐 Log in".blue().bold());
    println!();

    let email = match email {
        Some(e) => e,
        None => Text::new("Email:").prompt()?,
    };
    let password = match password {
        Some(p) => p,
        None => Password::new("Password:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()?,
    };

    app.session.login(&app.api, &email, &password).await?;

    println!("{}", format!("✅ Logged in as {}", email).green());
    Ok(())
}

async fn register(
    app: &mut App,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    println!("{}", "➕ Create account".blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Text::new("Name:").prompt()?,
    };
    let email = match email {
        Some(e) => e,
        None => Text::new("Email:").prompt()?,
    };
    let password = match password {
        Some(p) => p,
        None => Password::new("Password:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .prompt()?,
    };

    app.session
        .register(&app.api, &name, &email, &password)
        .await?;

    println!("{}", format!("✅ Account created, logged in as {}", email).green());
    Ok(())
}

async fn logout(app: &mut App) -> anyhow::Result<()> {
    if !app.session.is_authenticated() {
        println!("{}", "Not logged in".yellow());
        return Ok(());
    }

    app.session.logout().await?;
    println!("{}", "👋 Logged out".green());
    Ok(())
}

async fn status(app: &App) -> anyhow::Result<()> {
    println!("{}", "📡 TaskMan status".blue().bold());
    println!();
    println!("{:<10} {}", "API:".bold(), app.api.config().api_url);

    let session = if app.session.is_authenticated() {
        "logged in".green()
    } else {
        "not logged in".yellow()
    };
    println!("{:<10} {}", "Session:".bold(), session);

    let reachable = match app.api.health().await {
        Ok(true) => "reachable".green(),
        Ok(false) => "unhealthy".yellow(),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            "unreachable".red()
        }
    };
    println!("{:<10} {}", "Server:".bold(), reachable);
    Ok(())
}
