use clap::Parser;
use complex_calc::utils::{logger, validation::Validate};
use complex_calc::{Calculator, CliConfig, TracingSink, WriterSink};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.settings().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let mut calculator = Calculator::new((TracingSink, WriterSink::stdout()));

    if let Err(e) = calculator.run_with_config(&settings) {
        tracing::error!("Calculation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    Ok(())
}
