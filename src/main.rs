//! `exhandler` 바이너리 진입점.

use exhandler::interface::cli::{Cli, CliAction, run_demo};
use exhandler::interface::composition::AppComposition;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let action = match Cli::parse_action() {
        Ok(action) => action,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(2);
        }
    };

    let composition = AppComposition::default();

    match action {
        CliAction::InspectConfig => match composition.inspect_config_usecase().execute() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        },
        CliAction::Demo(options) => {
            if let Err(err) = run_demo(&composition, options) {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        }
    }
}
