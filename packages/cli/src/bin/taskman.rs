use clap::{Parser, Subcommand};
use colored::*;
use std::process;

mod cli;

use cli::account::AccountCommand;
use cli::boards::BoardsCommands;
use cli::tasks::TasksCommands;
use cli::users::UsersCommands;
use cli::App;
use taskman_cli::logging::init_logging;
use taskman_config::{load_dotenv, ClientConfig};

#[derive(Parser)]
#[command(name = "taskman")]
#[command(about = "TaskMan - boards and tasks from the terminal")]
#[command(version)]
struct Cli {
    /// API base URL (overrides TASKMAN_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session token
    Login {
        #[arg(short, long)]
        email: Option<String>,
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Create an account, then log in with it
    Register {
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Forget the stored session token
    Logout,
    /// Show whether you are logged in and the API is reachable
    Status,
    /// Manage boards
    #[command(subcommand)]
    Boards(BoardsCommands),
    /// Manage tasks
    #[command(subcommand)]
    Tasks(TasksCommands),
    /// List users
    #[command(subcommand)]
    Users(UsersCommands),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    load_dotenv();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(_) => {}
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = ClientConfig::from_env()?;
    if let Some(url) = cli.api_url.as_deref() {
        config = config.with_api_url(url)?;
    }

    let (api, session) = taskman_client::init(config).await?;
    let mut app = App { api, session };

    match cli.command {
        Commands::Login { email, password } => {
            cli::account::handle_account_command(&mut app, AccountCommand::Login { email, password })
                .await
        }
        Commands::Register {
            name,
            email,
            password,
        } => {
            cli::account::handle_account_command(
                &mut app,
                AccountCommand::Register {
                    name,
                    email,
                    password,
                },
            )
            .await
        }
        Commands::Logout => cli::account::handle_account_command(&mut app, AccountCommand::Logout).await,
        Commands::Status => cli::account::handle_account_command(&mut app, AccountCommand::Status).await,
        Commands::Boards(cmd) => cli::boards::handle_boards_command(&app, cmd).await,
        Commands::Tasks(cmd) => cli::tasks::handle_tasks_command(&app, cmd).await,
        Commands::Users(cmd) => cli::users::handle_users_command(&app, cmd).await,
    }
}
