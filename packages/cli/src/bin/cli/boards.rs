use clap::Subcommand;
use colored::*;
use inquire::Confirm;
use taskman_cli::render::{board_view, boards_table};
use taskman_client::BoardController;

use super::{report_read_error, App};

#[derive(Subcommand)]
pub enum BoardsCommands {
    /// Show the first board, tasks grouped by status
    List,
    /// Table of all boards with task counts
    All,
    /// Create a board
    Create {
        /// Board title
        title: String,
    },
    /// Rename a board
    Rename {
        /// Board ID
        id: u64,
        /// New title
        title: String,
    },
    /// Delete a board and its tasks
    Delete {
        /// Board ID to delete
        id: u64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn handle_boards_command(app: &App, command: BoardsCommands) -> anyhow::Result<()> {
    let controller = BoardController::new(app.api.clone(), app.require_login()?);

    match command {
        BoardsCommands::List => show_first_board(&controller).await,
        BoardsCommands::All => list_boards(&controller).await,
        BoardsCommands::Create { title } => create_board(&controller, &title).await,
        BoardsCommands::Rename { id, title } => rename_board(&controller, id, &title).await,
        BoardsCommands::Delete { id, yes } => delete_board(&controller, id, yes).await,
    }
}

fn print_no_boards() {
    println!("{}", "No boards found".yellow());
    println!(
        "{}",
        "Use 'taskman boards create <title>' to create your first board".dimmed()
    );
}

async fn show_first_board(controller: &BoardController) -> anyhow::Result<()> {
    if let Err(e) = controller.load().await {
        report_read_error("boards", &e);
    }

    let store = controller.store();
    match store.first_board() {
        Some(board) => print!("{}", board_view(board)),
        None => print_no_boards(),
    }
    Ok(())
}

async fn list_boards(controller: &BoardController) -> anyhow::Result<()> {
    if let Err(e) = controller.load().await {
        report_read_error("boards", &e);
    }

    let store = controller.store();
    if store.is_empty() {
        print_no_boards();
        return Ok(());
    }

    println!("{}", "📋 Boards".blue().bold());
    println!();
    println!("{}", boards_table(store.boards()));
    println!("Total: {} boards", store.boards().len().to_string().cyan());
    Ok(())
}

async fn create_board(controller: &BoardController, title: &str) -> anyhow::Result<()> {
    let title = title.trim();
    if title.is_empty() {
        anyhow::bail!("Board title cannot be empty");
    }

    let id = controller.create_board(title).await?;
    println!("{}", format!("✅ Board '{}' created (ID {})", title, id).green());
    Ok(())
}

async fn rename_board(controller: &BoardController, id: u64, title: &str) -> anyhow::Result<()> {
    let title = title.trim();
    if title.is_empty() {
        anyhow::bail!("Board title cannot be empty");
    }

    controller.rename_board(id, title).await?;
    println!("{}", format!("✅ Board {} renamed to '{}'", id, title).green());
    Ok(())
}

async fn delete_board(controller: &BoardController, id: u64, yes: bool) -> anyhow::Result<()> {
    if !yes {
        let confirmed = Confirm::new(&format!("Delete board {} and all of its tasks?", id))
            .with_default(false)
            .prompt()?;
        if !confirmed {
            println!("{}", "Cancelled".yellow());
            return Ok(());
        }
    }

    controller.delete_board(id).await?;
    println!("{}", format!("🗑️  Board {} deleted", id).green());
    Ok(())
}
