use crate::demo::{run_classify, run_demo, ClassifyArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use coursepath::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Coursepath Stream Classifier",
    about = "Run the stream classification service or classify subject combinations from the command line",
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
    /// Classify a single three-subject combination and print the outcome
    Classify(ClassifyArgs),
    /// Walk a set of sample combinations through every stream for demos
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
    /// Seed the subject directory from a catalog CSV export instead of the
    /// built-in curriculum
    #[arg(long)]
    pub(crate) subjects_csv: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Classify(args) => run_classify(args),
        Command::Demo(args) => run_demo(args),
    }
}
