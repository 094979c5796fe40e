use goku_config::GokuConfig;

use crate::cli::Commands;
use crate::commands;

/// Route a parsed command to its handler.
pub fn dispatch(command: Commands, config: &GokuConfig) -> anyhow::Result<()> {
    match command {
        Commands::Iface(args) => commands::iface::handle(&args, config),
        Commands::Version => commands::version::handle(),
    }
}
