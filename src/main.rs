use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use cliptrans_lib::bootstrap::{self, config::default_data_dir};
use cliptrans_lib::control::run_control;
use cliptrans_lib::presentation::ConsolePresenter;
use ct_platform::ipc::PlatformCommand;
use tokio::io::BufReader;
use tracing::{error, info, warn};

const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Parser)]
#[command(name = "cliptrans", version, about = "Translate clipboard text as you copy it")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Do not watch the clipboard at startup, regardless of `isListen`
    #[arg(long)]
    no_watch: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let data_dir = default_data_dir()?;
    let config = bootstrap::resolve_config(cli.config.as_deref(), &data_dir)?;

    if let Err(err) = bootstrap::init_tracing_subscriber(&config.log_dir) {
        eprintln!("Failed to initialize tracing: {err:#}");
    }

    let app = bootstrap::wire(&config).await?;
    let controller = app.controller;
    let commands = app.commands;

    let presenter = ConsolePresenter::new(app.rules, commands.clone());
    tokio::spawn(presenter.run(controller.subscribe()));
    let platform = tokio::spawn(app.platform.start());

    if cli.no_watch {
        info!("Clipboard watch disabled for this session");
    } else if let Err(err) = controller.start().await {
        error!(error = %err, "Failed to start clipboard watch");
    }

    let stdin = BufReader::new(tokio::io::stdin());
    tokio::select! {
        result = run_control(stdin, &controller, &commands) => {
            if let Err(err) = result {
                error!(error = %err, "Control channel failed");
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted");
        }
    }

    if let Err(err) = commands.send(PlatformCommand::Shutdown).await {
        warn!(error = %err, "Platform runtime already gone");
    }
    if tokio::time::timeout(SHUTDOWN_TIMEOUT, platform).await.is_err() {
        warn!("Platform runtime did not stop in time");
    }

    Ok(())
}
