// src/app/mod.rs
// Session wiring: argument validation, store opening, controller run

mod args;
mod controller;

pub use args::{DirectArgs, StartupArgs};
pub use controller::{Controller, MenuChoice};

use crate::db::OperationStore;
use crate::error::Result;
use crate::log_id::LogIdGenerator;
use crate::ui::Console;
use std::path::Path;
use tracing::{error, info};

/// Validate `args`, open the store for the chosen log directory and run a session.
///
/// An invalid argument count is reported on the console and returned before
/// `open_store` is called.
pub fn launch<C, S, G, F>(args: &[String], mut console: C, ids: G, open_store: F) -> Result<()>
where
    C: Console,
    S: OperationStore,
    G: LogIdGenerator,
    F: FnOnce(&Path) -> Result<S>,
{
    let startup = match StartupArgs::parse(args) {
        Ok(startup) => startup,
        Err(e) => {
            error!(count = args.len(), "Rejected startup arguments");
            console.show_error(&e.to_string())?;
            return Err(e);
        }
    };

    let store = open_store(&startup.log_dir)?;
    info!(log_dir = %startup.log_dir.display(), direct = startup.direct.is_some(), "Session starting");

    let mut controller = Controller::new(console, store, ids);
    controller.run(&startup)
}
