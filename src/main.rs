use clap::Parser;
use zapper::utils::{logger, validation::Validate};
use zapper::{CliConfig, Command, DeviceKind, Radio, RemoteKind, Result, ScenarioConfig, Session, Tv};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting zapper");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    match run(&config) {
        Ok(()) => {
            tracing::info!("All commands applied");
            println!("✅ Done");
        }
        Err(e) => {
            tracing::error!("Run failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

fn run(config: &CliConfig) -> Result<()> {
    if let Some(path) = &config.scenario {
        let scenario = ScenarioConfig::from_file(path)?;
        scenario.validate()?;
        tracing::info!(
            "Loaded scenario '{}' ({} device, {} remote)",
            scenario.scenario.name,
            scenario.device,
            scenario.remote
        );
        return run_plan(scenario.device, scenario.remote, &scenario.commands);
    }

    if !config.commands.is_empty() {
        return run_plan(
            config.effective_device(),
            config.effective_remote(),
            &config.commands,
        );
    }

    run_demo()
}

fn run_plan(device: DeviceKind, remote: RemoteKind, commands: &[Command]) -> Result<()> {
    match device {
        DeviceKind::Tv => Session::new(Tv::new(), remote).run(commands),
        DeviceKind::Radio => Session::new(Radio::new(), remote).run(commands),
    }
}

// The classic wiring: one TV on a basic remote, one radio on an advanced one.
fn run_demo() -> Result<()> {
    tracing::info!("No commands given, running the built-in demo");
    run_plan(DeviceKind::Tv, RemoteKind::Basic, &[Command::TogglePower])?;
    run_plan(DeviceKind::Radio, RemoteKind::Advanced, &[Command::Mute])
}
