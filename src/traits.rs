//! Core traits that decouple tasknav from any specific UI toolkit or
//! transport mechanism.
//!
//! Every concrete backend (a real task switcher view, a Unix-socket
//! listener, a test harness, …) implements one of these traits.  The
//! [`TaskSwitcher`](crate::switcher::TaskSwitcher) only depends on these
//! abstractions.

use crate::command::Command;
use crate::grid::TileId;
use std::sync::mpsc;

/// Abstraction over the view that renders the task grid.
///
/// The view owns everything visual: drawing tiles, moving the focus ring,
/// launching tasks and running the clear all / add desk actions.  The
/// switcher only tells it *what* is selected.
pub trait SelectionView {
    /// The error type produced by this view.
    type Error: std::error::Error + Send + 'static;

    /// Move focus to `target`.
    ///
    /// For a control this focuses the button; it does **not** trigger it.
    fn focus(&self, target: TileId) -> Result<(), Self::Error>;

    /// Activate `target`: open the task, or run the control's action.
    fn activate(&self, target: TileId) -> Result<(), Self::Error>;

    /// Hand the accessibility focus order to the view.
    ///
    /// `order` lists `(task_id, column_offset)` pairs as produced by
    /// [`GridTopology::tab_order_from`](crate::grid::GridTopology::tab_order_from).
    fn publish_focus_order(&self, order: &[(u32, usize)]) -> Result<(), Self::Error>;
}

//  Command Source

/// A source of [`Command`]s.
///
/// Implementations listen on some transport (a Unix socket, an in-memory
/// channel, …) and forward parsed commands into the provided
/// [`mpsc::Sender`].
///
/// # Contract
///
/// * [`run`](CommandSource::run) **blocks** until the source is exhausted or
///   an unrecoverable error occurs.
/// * Each received command must be sent through `sink` exactly once.
/// * Implementations must be [`Send`] so they can run on a dedicated thread.
pub trait CommandSource: Send {
    /// The error type produced by this source.
    type Error: std::error::Error + Send + 'static;

    /// Start listening and forward every incoming [`Command`] into `sink`.
    ///
    /// This method blocks the calling thread.  To run multiple sources
    /// concurrently, spawn each one on its own thread.
    fn run(&mut self, sink: mpsc::Sender<Command>) -> Result<(), Self::Error>;
}
