//! IPC listener that accepts commands over a Unix socket.
//!
//! A task switcher front-end (or a script, for testing) can connect to the
//! socket and send newline-delimited JSON commands.

pub mod listener;
