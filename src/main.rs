use clap::Parser;
use quantum_chaos::core::summary::SummaryFormat;
use quantum_chaos::utils::{logger, validation::Validate};
use quantum_chaos::{CliConfig, QuantumError, Shell};
use std::io;

fn main() {
    let config = CliConfig::parse();

    // Logs go to stderr, so JSON logs only make sense next to a JSON report.
    match config.summary_format {
        Some(SummaryFormat::Json) => logger::init_json_logger(config.verbose),
        _ => logger::init_cli_logger(config.verbose),
    }

    tracing::info!("Starting quantum-chaos");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        exit_with("Configuration validation failed", e);
    }

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => exit_with("Could not prepare session", e),
    };

    let registry = match settings.build_registry() {
        Ok(registry) => registry,
        Err(e) => exit_with("Could not build the initial object set", e),
    };

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), registry)
        .with_title(settings.title.clone())
        .with_summary_format(settings.summary_format);

    let outcome = if settings.walkthrough {
        shell.run_walkthrough()
    } else {
        shell.run()
    };

    match outcome {
        Ok(summary) => {
            tracing::info!("✅ Session finished with {} object(s)", summary.total);
        }
        Err(e) => exit_with("Session aborted", e),
    }
}

fn exit_with(stage: &str, e: QuantumError) -> ! {
    tracing::error!(
        "❌ {}: {} (Category: {:?}, Severity: {:?})",
        stage,
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.severity().exit_code());
}
