use crate::export::{run_render, run_skills, RenderArgs, SkillsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use portfolio::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "portfolio-site",
    about = "Serve or export the single-page portfolio site",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Render the page to a file or stdout for static hosting
    Render(RenderArgs),
    /// Print the skill list shown for an audience track
    Skills(SkillsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Render(args) => run_render(args),
        Command::Skills(args) => run_skills(args),
    }
}
