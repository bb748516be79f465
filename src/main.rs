//! Entry point for the **tasknav** daemon.
//!
//! Spawns the Unix-socket [`CommandSource`](tasknav::traits::CommandSource)
//! on a background thread and processes incoming commands on the main
//! thread.  Selection changes are reported through the log, which makes the
//! daemon usable as a headless harness for a task switcher front-end.

use tasknav::command::Command;
use tasknav::config::Config;
use tasknav::grid::TileId;
use tasknav::ipc::listener::UnixSocketListener;
use tasknav::switcher::TaskSwitcher;
use tasknav::traits::{CommandSource, SelectionView};
use log::{error, info};
use std::sync::mpsc;

/// Default socket path for the command listener.
fn default_socket_path() -> String {
    let runtime = std::env::var("XDG_RUNTIME_DIR").unwrap_or_else(|_| "/tmp".into());
    format!("{}/tasknav.sock", runtime)
}

/// Resolve the config directory (`$XDG_CONFIG_HOME/tasknav`).
fn config_dir() -> std::path::PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    std::path::PathBuf::from(base).join("tasknav")
}

/// Try to load the config from `$XDG_CONFIG_HOME/tasknav/config.json`,
/// falling back to compiled-in defaults.
fn load_config() -> Config {
    let path = config_dir().join("config.json");
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            cfg
        }
        Err(e) => {
            info!("no config file ({}), using defaults", e);
            Config::default()
        }
    }
}

//  Log-backed view

/// A [`SelectionView`] that only logs what a real view would do.
struct LogView;

#[derive(Debug, thiserror::Error)]
#[error("log view")]
struct LogViewError;

impl SelectionView for LogView {
    type Error = LogViewError;

    fn focus(&self, target: TileId) -> Result<(), LogViewError> {
        info!("focus {}", target);
        Ok(())
    }

    fn activate(&self, target: TileId) -> Result<(), LogViewError> {
        match target {
            TileId::Task(id) => info!("launch task {}", id),
            TileId::ClearAll => info!("clear all tasks"),
            TileId::AddDesk => info!("add desk"),
        }
        Ok(())
    }

    fn publish_focus_order(&self, order: &[(u32, usize)]) -> Result<(), LogViewError> {
        info!("focus order: {:?}", order);
        Ok(())
    }
}

//  Main

fn main() {
    env_logger::init();

    let config = load_config();
    let mut switcher = TaskSwitcher::new(LogView, config.navigation);

    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
    spawn_command_sources(cmd_tx);

    info!("tasknav running");
    for cmd in cmd_rx {
        if let Err(e) = switcher.handle(cmd) {
            error!("command error: {}", e);
        }
    }
    info!("all command sources closed, exiting");
}

fn spawn_command_sources(tx: mpsc::Sender<Command>) {
    let path = default_socket_path();
    std::thread::spawn(move || {
        let mut source = UnixSocketListener::new(&path);
        if let Err(e) = source.run(tx) {
            error!("socket listener error: {}", e);
        }
    });
}
