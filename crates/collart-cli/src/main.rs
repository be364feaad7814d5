use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use collart_core::Experience;
use std::path::PathBuf;

mod commands;

use commands::context::AppContext;

#[derive(Parser)]
#[command(name = "collart")]
#[command(about = "Collart CLI - browse projects, specialists and conversations", long_about = None)]
struct Cli {
    /// Directory holding config.toml and settings.toml
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and remember the session
    Login {
        #[arg(long)]
        email: String,
        /// Falls back to COLLART_PASSWORD
        #[arg(long, env = "COLLART_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Show the skill catalog
    Skills,
    /// List published orders
    Orders(FeedArgs),
    /// List specialists
    Specialists(FeedArgs),
    /// Add or remove an order from favorites
    Like { order_id: String },
    /// Respond to an order
    Respond { order_id: String },
    /// Invite a specialist to one of your orders
    Invite {
        order_id: String,
        specialist_id: String,
    },
    /// List responses, invitations and sent requests
    Interactions {
        /// Show accepted and rejected instead of pending ones
        #[arg(long)]
        completed: bool,
    },
    /// Accept a response or invitation
    Accept { interaction_id: String },
    /// Reject a response or invitation
    Reject { interaction_id: String },
    /// List conversations
    Chats,
    /// Show a conversation and mark it read
    Messages { user_id: String },
    /// Send a message
    Send {
        user_id: String,
        text: String,
        /// Attach a file (repeatable)
        #[arg(long = "file")]
        files: Vec<PathBuf>,
    },
    /// Download an attachment
    Download {
        url: String,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the effective configuration
    Config,
}

/// Feed filters; repeated values of one flag are alternatives.
#[derive(Args)]
struct FeedArgs {
    #[arg(long)]
    specialty: Vec<String>,
    /// no_experience, between1And3, between3And5 or moreThan5
    #[arg(long)]
    experience: Vec<Experience>,
    #[arg(long)]
    tool: Vec<String>,
    /// Free-text search
    #[arg(short, long)]
    query: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let ctx = AppContext::bootstrap(cli.config_dir.as_deref()).await?;

    match cli.command {
        Commands::Login { email, password } => commands::auth::login(&ctx, &email, &password).await?,
        Commands::Logout => commands::auth::logout(&ctx).await?,
        Commands::Whoami => commands::auth::whoami(&ctx).await?,
        Commands::Skills => commands::feed::skills(&ctx).await?,
        Commands::Orders(args) => commands::feed::orders(&ctx, &args.into()).await?,
        Commands::Specialists(args) => commands::feed::specialists(&ctx, &args.into()).await?,
        Commands::Like { order_id } => commands::feed::like(&ctx, &order_id).await?,
        Commands::Respond { order_id } => commands::feed::respond(&ctx, &order_id).await?,
        Commands::Invite {
            order_id,
            specialist_id,
        } => commands::feed::invite(&ctx, &order_id, &specialist_id).await?,
        Commands::Interactions { completed } => {
            commands::interactions::list(&ctx, completed).await?
        }
        Commands::Accept { interaction_id } => {
            commands::interactions::accept(&ctx, &interaction_id).await?
        }
        Commands::Reject { interaction_id } => {
            commands::interactions::reject(&ctx, &interaction_id).await?
        }
        Commands::Chats => commands::chat::chats(&ctx).await?,
        Commands::Messages { user_id } => commands::chat::messages(&ctx, &user_id).await?,
        Commands::Send {
            user_id,
            text,
            files,
        } => commands::chat::send(&ctx, &user_id, &text, &files).await?,
        Commands::Download { url, output } => {
            commands::files::download(&ctx, &url, output.as_deref()).await?
        }
        Commands::Config => commands::files::show_config(&ctx)?,
    }

    Ok(())
}

impl From<FeedArgs> for commands::feed::FeedFilter {
    fn from(args: FeedArgs) -> Self {
        Self {
            specialties: args.specialty,
            experiences: args.experience,
            tools: args.tool,
            query: args.query.unwrap_or_default(),
        }
    }
}
