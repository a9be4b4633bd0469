use clap::{Args, Parser, Subcommand};

use crate::demo::{run_demo, run_score_report, DemoArgs, ScoreArgs};
use crate::server;
use devmatch::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Developer Match Service",
    about = "Run and demonstrate the developer-to-project match service from the command line",
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
    /// Score one developer document against one project document
    Score(ScoreArgs),
    /// Run an end-to-end demo covering intake, ranking, and acceptance
    Demo(DemoArgs),
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
        Command::Score(args) => run_score_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
