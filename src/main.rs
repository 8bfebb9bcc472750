use chorelog::commands::Cli;
use chorelog::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Structured logs only in debug mode; otherwise messages go straight to the console
    if is_debug_mode() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chorelog=debug"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).compact().try_init();
    }

    Cli::menu()
}
