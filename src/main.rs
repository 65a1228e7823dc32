use office_presence::commands::Cli;
use office_presence::libs::messages::macros::is_debug_mode;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    if is_debug_mode() {
        init_tracing();
    }

    match Cli::menu().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("office_presence=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}
