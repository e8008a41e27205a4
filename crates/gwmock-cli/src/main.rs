//! CLI entry point.

use clap::{CommandFactory, Parser};

use gwmock_cli::{Cli, Commands, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve(args) => {
            gwmock_axum::start_server(args.to_config()).await?;
        }
    }

    Ok(())
}
