use smart_todo::adapters::ReqwestHttpClient;
use smart_todo::cli::{
    parse_args, run_suggest_command, version_string, CliArgs, CliCommand, Session, USAGE,
};
use smart_todo::client::SuggestionClient;
use smart_todo::config::AppConfig;

use color_eyre::Result;
use std::io;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let CliArgs { config, command } = match parse_args(std::env::args()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    match command {
        CliCommand::Version => {
            println!("{}", version_string());
            return Ok(());
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        CliCommand::Suggest { .. } | CliCommand::Interactive => {}
    }

    let config = AppConfig::load(config.as_deref())?;
    tracing::debug!(
        base_url = %config.model_server_base_url,
        workspace = %config.workspace_slug,
        stream = config.stream,
        "Configuration loaded"
    );

    let http = ReqwestHttpClient::with_connect_timeout(config.timeout())?;
    let client = SuggestionClient::new(http, config);

    let mut stdout = io::stdout();
    if let CliCommand::Suggest { task } = command {
        run_suggest_command(&client, &task, &mut stdout).await?;
    } else {
        let mut session = Session::new(client);
        session
            .run(BufReader::new(tokio::io::stdin()), &mut stdout)
            .await?;
    }

    Ok(())
}
