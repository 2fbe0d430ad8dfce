use anyhow::{anyhow, bail};
use clap::Subcommand;
use colored::*;
use inquire::{Confirm, Select, Text};
use taskman_cli::edit::{apply_edits, status_choices, target_board};
use taskman_cli::render::{status_label, task_detail, tasks_table};
use taskman_client::{AuthContext, BoardController};
use taskman_core::{NewTask, TaskStatus};

use super::{report_read_error, App};

#[derive(Subcommand)]
pub enum TasksCommands {
    /// List all your tasks
    List,
    /// Show task details
    Show {
        /// Task ID to show
        id: u64,
    },
    /// Create a task
    Create {
        /// Task title
        #[arg(short, long)]
        title: Option<String>,
        /// Task description
        #[arg(short, long)]
        description: Option<String>,
        /// todo, in-progress or done
        #[arg(short, long, default_value = "todo")]
        status: TaskStatus,
        /// Board ID (defaults to your first board)
        #[arg(short, long)]
        board: Option<u64>,
    },
    /// Edit a task; fields not given keep their current value
    Edit {
        /// Task ID to edit
        id: u64,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long)]
        status: Option<TaskStatus>,
    },
    /// Delete a task
    Delete {
        /// Task ID to delete
        id: u64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn handle_tasks_command(app: &App, command: TasksCommands) -> anyhow::Result<()> {
    let auth = app.require_login()?;

    match command {
        TasksCommands::List => list_tasks(app, &auth).await,
        TasksCommands::Show { id } => show_task(app, &auth, id).await,
        TasksCommands::Create {
            title,
            description,
            status,
            board,
        } => {
            let controller = BoardController::new(app.api.clone(), auth);
            create_task(&controller, title, description, status, board).await
        }
        TasksCommands::Edit {
            id,
            title,
            description,
            status,
        } => edit_task(app, auth, id, title, description, status).await,
        TasksCommands::Delete { id, yes } => {
            let controller = BoardController::new(app.api.clone(), auth);
            delete_task(&controller, id, yes).await
        }
    }
}

async fn list_tasks(app: &App, auth: &AuthContext) -> anyhow::Result<()> {
    let tasks = match app.api.list_tasks(auth).await {
        Ok(tasks) => tasks,
        Err(e) => {
            report_read_error("tasks", &e);
            Vec::new()
        }
    };

    if tasks.is_empty() {
        println!("{}", "No tasks found".yellow());
        println!("{}", "Use 'taskman tasks create' to add one".dimmed());
        return Ok(());
    }

    println!("{}", "📋 Tasks".blue().bold());
    println!();
    println!("{}", tasks_table(&tasks));
    println!("Total: {} tasks", tasks.len().to_string().cyan());
    Ok(())
}

async fn show_task(app: &App, auth: &AuthContext, id: u64) -> anyhow::Result<()> {
    match app.api.get_task(auth, id).await {
        Ok(task) => print!("{}", task_detail(&task)),
        Err(e) => {
            if !e.is_not_found() {
                report_read_error("task", &e);
            }
            println!("{}", format!("Task {} not found", id).yellow());
        }
    }
    Ok(())
}

async fn create_task(
    controller: &BoardController,
    title: Option<String>,
    description: Option<String>,
    status: TaskStatus,
    board: Option<u64>,
) -> anyhow::Result<()> {
    let title = match title {
        Some(t) => t,
        None => Text::new("Title:").prompt()?,
    };
    let title = title.trim().to_string();
    if title.is_empty() {
        bail!("Task title cannot be empty");
    }

    if board.is_none() {
        controller.load().await?;
    }
    let board_id = target_board(board, controller.store().boards())
        .ok_or_else(|| anyhow!("No boards yet. Create one with 'taskman boards create <title>'"))?;

    let new_task = NewTask {
        title,
        description: description.unwrap_or_default(),
        status,
        board_id,
    };
    let title = new_task.title.clone();
    let id = controller.create_task(new_task).await?;

    println!(
        "{}",
        format!("✅ Task '{}' created (ID {}) on board {}", title, id, board_id).green()
    );
    Ok(())
}

async fn edit_task(
    app: &App,
    auth: AuthContext,
    id: u64,
    title: Option<String>,
    description: Option<String>,
    status: Option<TaskStatus>,
) -> anyhow::Result<()> {
    let task = app.api.get_task(&auth, id).await?;

    let mut changes = if title.is_none() && description.is_none() && status.is_none() {
        println!("{}", format!("✏️  Edit task #{}", id).blue().bold());
        println!();

        let title = Text::new("Title:").with_default(&task.title).prompt()?;
        let description = Text::new("Description:")
            .with_default(&task.description)
            .prompt()?;

        let (choices, cursor) = status_choices(&task.status);
        let labels: Vec<String> = choices
            .iter()
            .map(|s| {
                if s.is_known() {
                    status_label(s)
                } else {
                    format!("{} (unrecognised, keep)", s)
                }
            })
            .collect();
        let picked = Select::new("Status:", labels)
            .with_starting_cursor(cursor)
            .raw_prompt()?;

        apply_edits(
            &task,
            Some(title),
            Some(description),
            choices.get(picked.index).cloned(),
        )
    } else {
        apply_edits(&task, title, description, status)
    };

    changes.title = changes.title.trim().to_string();
    if changes.title.is_empty() {
        bail!("Task title cannot be empty");
    }

    let controller = BoardController::new(app.api.clone(), auth);
    controller.update_task(id, changes).await?;

    println!("{}", format!("✅ Task {} updated", id).green());
    Ok(())
}

async fn delete_task(controller: &BoardController, id: u64, yes: bool) -> anyhow::Result<()> {
    if !yes {
        let confirmed = Confirm::new(&format!("Delete task {}?", id))
            .with_default(false)
            .prompt()?;
        if !confirmed {
            println!("{}", "Cancelled".yellow());
            return Ok(());
        }
    }

    controller.delete_task(id).await?;
    println!("{}", format!("🗑️  Task {} deleted", id).green());
    Ok(())
}
