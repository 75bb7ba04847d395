use clap::Parser;
use roster_filter::utils::{error::ErrorSeverity, logger};
use roster_filter::{run_demo, sample_roster, CliConfig};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    let criteria = match config.criteria() {
        Ok(criteria) => criteria,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let people = sample_roster();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match run_demo(&mut out, &people, &criteria) {
        Ok(summary) => {
            tracing::info!(
                "✅ Done: {} of {} people matched",
                summary.check_person_matches,
                summary.roster_size
            );
        }
        Err(e) if e.severity() == ErrorSeverity::Low => {
            tracing::debug!("Report stopped early: {}", e);
        }
        Err(e) => {
            tracing::error!(
                "❌ Report failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            let exit_code = e.exit_code();
            if exit_code > 0 {
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(exit_code);
            }
        }
    }
}
