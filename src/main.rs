use clap::Parser;
use folio::cli::commands::Cli;
use folio::cli::handlers;
use folio::logging;

fn main() {
    let cli = Cli::parse();
    let config_dir = handlers::resolve_config_dir(&cli);

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| logging::default_log_level().to_string());
    if let Err(e) = logging::init_logging(&level, &logging::log_dir_for(&config_dir)) {
        // Keep going without file logs
        eprintln!("warning: {}", e);
    }

    if let Err(e) = handlers::dispatch(cli) {
        log::error!("event=app_exit module=main status=error error={}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
