//! **tasknav** — directional navigation for a two-row task switcher grid.
//!
//! Task tiles sit in two horizontal rows.  Around them live a handful of
//! controls that are not rows at all: an always-present *clear all* button,
//! an optional *add desk* button and up to two *large tiles* (e.g. the
//! focused task or a desktop-mode task).  Given the current selection and a
//! key press, the crate answers "what is selected next?" and "in which order
//! should assistive technology walk the tiles?".
//!
//! # Architecture
//!
//! The pure core is made of three pieces:
//!
//! * [`grid::GridTopology`] — the immutable arrangement, validated on
//!   construction.
//! * [`navigation`] — [`GridTopology::next_position`](grid::GridTopology::next_position),
//!   the resolver for up/down/left/right/tab input.
//! * [`tab_order`] — a lazy iterator over the serpentine focus order.
//!
//! Around the core, the crate is organised around two traits:
//!
//! * [`traits::SelectionView`] — abstracts the view that renders tiles and
//!   receives focus, so the controller is not coupled to any UI toolkit.
//! * [`traits::CommandSource`] — abstracts the transport that delivers
//!   user-intent (a Unix socket, a test harness, …).
//!
//! [`switcher::TaskSwitcher`] ties them together and [`ipc`] provides a
//! Unix-socket command listener.

pub mod command;
pub mod config;
pub mod grid;
pub mod ipc;
pub mod navigation;
pub mod switcher;
pub mod tab_order;
pub mod traits;
