use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use wordwise::connector::api::{Container, ContainerConfig, Router};
use wordwise::{Commands, OutputFormat};

#[derive(Parser)]
#[command(name = "wordwise")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Answer assists offline with canned text instead of calling the endpoint
    #[arg(long, global = true)]
    mock: bool,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Container::new(ContainerConfig {
        mock_generation: cli.mock,
        format: cli.format,
    });
    let router = Router::new(&container);

    let output = router.route(cli.command).await?;
    println!("{output}");

    Ok(())
}
