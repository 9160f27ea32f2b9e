//! IssueFlow terminal client: dashboard summary and activity feeds.

use clap::{Parser, Subcommand};
use flow_activity::{ActivityFeed, FeedEntry};
use flow_client::IssueFlowClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "issueflow", about = "IssueFlow activity feeds in the terminal")]
struct Cli {
    /// Backend base URL.
    #[arg(long, env = "ISSUEFLOW_API_URL", default_value = "http://localhost:3000/api")]
    api_url: String,

    /// Bearer token for the backend.
    #[arg(long, env = "ISSUEFLOW_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Stat counters and recent activity (the default).
    Dashboard,
    /// Activity feed of one project.
    Project { id: i64 },
    /// Activity feed of one issue.
    Issue { id: i64 },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    tracing::debug!(url = %cli.api_url, "using backend");
    let client = IssueFlowClient::new(cli.api_url, cli.token);

    match cli.command.unwrap_or(Command::Dashboard) {
        Command::Dashboard => {
            let summary = client.dashboard_summary().await?;
            println!("Projects: {}", summary.stats.projects);
            println!("Open issues: {}", summary.stats.open_issues);
            println!("Team members: {}", summary.stats.team_members);
            println!("Resolved this week: {}", summary.stats.resolved_this_week);
            println!();
            println!("Recent activity");
            if summary.recent_activity.is_empty() {
                println!("No recent activity");
            } else {
                for entry in summary.recent_activity.iter().map(FeedEntry::from_activity) {
                    println!("{}", entry);
                }
            }
        }
        Command::Project { id } => {
            let feed = ActivityFeed::new(client);
            print_feed(&feed.project_feed(id).await?);
        }
        Command::Issue { id } => {
            let feed = ActivityFeed::new(client);
            print_feed(&feed.issue_feed(id).await?);
        }
    }
    Ok(())
}

fn print_feed(entries: &[FeedEntry]) {
    if entries.is_empty() {
        println!("No activity yet");
    } else {
        for entry in entries {
            println!("{}", entry);
        }
    }
}
