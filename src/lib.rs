mod config;
mod cpu;
mod instruction;
mod loader;
mod sign_extend;
mod state;
mod terminal;
mod trap_vector;
mod utilities;

pub use crate::config::Config;
pub use crate::terminal::RawModeGuard;

pub(crate) use crate::sign_extend::SignExtend;
use crate::state::State;
use std::io;

/// The top-level error the CLI front end reports. Usage errors are caught by `Config::with`
/// before this type ever comes into play.
#[derive(Debug)]
pub enum RunError {
    ImageLoad { path: String, source: io::Error },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunError::ImageLoad { path, .. } => write!(f, "failed to load image: {}", path),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunError::ImageLoad { source, .. } => Some(source),
        }
    }
}

/// Loads every image in `config` and runs the fetch-decode-execute loop to completion (a clean
/// HALT). Terminal setup/teardown and SIGINT handling are the caller's responsibility (see
/// `RawModeGuard`) so this function stays free of process-lifetime concerns.
pub fn run(config: Config) -> Result<(), RunError> {
    let mut state = State::new();

    for path in &config.image_paths {
        loader::load_image(&mut state, path).map_err(|source| RunError::ImageLoad {
            path: path.clone(),
            source,
        })?;
    }

    while state.running {
        let instruction = state.fetch();
        cpu::execute(&mut state, instruction);
    }

    Ok(())
}
