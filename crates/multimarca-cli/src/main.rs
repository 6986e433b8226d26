mod describe;
mod images;
mod knowledge;


use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "multimarca-cli")]
#[command(about = "Multimarca admin command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate a product description from the knowledge tables.
    Describe(describe::DescribeArgs),
    /// Inspect the builtin knowledge tables.
    Knowledge {
        #[command(subcommand)]
        command: knowledge::KnowledgeCommands,
    },
    /// Image tooling: candidate validation, URL verification, host status.
    Images {
        #[command(subcommand)]
        command: images::ImagesCommands,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Describe(args) => describe::run(&args),
        Commands::Knowledge { command } => knowledge::run(&command),
        Commands::Images { command } => images::run(command).await,
    }
}
