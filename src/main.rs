use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use traffic_light_mvu::{blocking_spawner, ConsolePanel, MvuRuntime, Settings, TrafficLightModel};

/// Drive the traffic light control panel from stdin.
///
/// Each input line is a click: a lamp name (stop, slow, go), an element id,
/// or an empty line to click the control panel itself.
#[derive(Parser, Debug)]
#[command(name = "traffic-light", version)]
struct Args {
    /// TOML file with layout, palette and startup script
    #[arg(long)]
    config: Option<PathBuf>,
    /// Click to replay at startup, after any configured script (repeatable)
    #[arg(long = "script", value_name = "TARGET")]
    script: Vec<String>,
    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Settings::default(),
    };
    settings.append_script(args.script);

    let logic = settings.into_logic().context("building control panel")?;
    let layout = logic.layout().clone();

    let mut runtime = MvuRuntime::new(
        TrafficLightModel::default(),
        logic,
        ConsolePanel::new(io::stdout()),
        blocking_spawner,
    );
    runtime.process_events();
    info!("control panel ready");

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        runtime.renderer().click(layout.interpret(&line));
        runtime.process_events();
    }

    Ok(())
}
