//! Commands and types used throughout tasknav.
//!
//! This module defines the vocabulary that all components share:
//! [`Direction`] is the logical movement understood by the resolver,
//! [`NavKey`] is the physical key a user pressed, and [`Command`]
//! describes every action the [`TaskSwitcher`](crate::switcher::TaskSwitcher)
//! can perform.
//!
//! Direction and key names are parsed leniently on the wire
//! (e.g. `"left"`, `"Left"`, `"shift-tab"`, `"SHIFT_TAB"`).

use crate::grid::{Layout, TileId};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Logical navigation direction.
///
/// `Left` and `Right` both move along a sequence; which way is decided by the
/// signed `delta` passed alongside (`+1` toward clear all, `-1` toward the
/// outer edge).  `Tab` walks the serpentine focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Tab,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Tab => write!(f, "tab"),
        }
    }
}

/// Lowercase `s` and drop whitespace, `_` and `-` so that `"Shift-Tab"`,
/// `"shift_tab"` and `"ShiftTab"` compare equal.
pub(crate) fn normalize_token(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(|c| c.to_lowercase())
        .collect()
}

fn parse_direction(s: &str) -> Option<Direction> {
    match normalize_token(s).as_str() {
        "up" => Some(Direction::Up),
        "down" => Some(Direction::Down),
        "left" => Some(Direction::Left),
        "right" => Some(Direction::Right),
        "tab" => Some(Direction::Tab),
        _ => None,
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_direction(&s).ok_or_else(|| DeError::custom(format!("invalid direction: {:?}", s)))
    }
}

/// A physical navigation key.
///
/// Keys are translated into `(direction, delta)` pairs by
/// [`NavKey::to_input`], taking the layout direction into account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NavKey {
    Up,
    Down,
    Left,
    Right,
    Tab,
    ShiftTab,
}

impl fmt::Display for NavKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavKey::Up => write!(f, "up"),
            NavKey::Down => write!(f, "down"),
            NavKey::Left => write!(f, "left"),
            NavKey::Right => write!(f, "right"),
            NavKey::Tab => write!(f, "tab"),
            NavKey::ShiftTab => write!(f, "shift-tab"),
        }
    }
}

fn parse_nav_key(s: &str) -> Option<NavKey> {
    match normalize_token(s).as_str() {
        "up" => Some(NavKey::Up),
        "down" => Some(NavKey::Down),
        "left" => Some(NavKey::Left),
        "right" => Some(NavKey::Right),
        "tab" => Some(NavKey::Tab),
        "shifttab" | "backtab" => Some(NavKey::ShiftTab),
        _ => None,
    }
}

impl<'de> Deserialize<'de> for NavKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_nav_key(&s).ok_or_else(|| DeError::custom(format!("invalid key: {:?}", s)))
    }
}

impl NavKey {
    /// Translate the key into the `(direction, delta)` pair the resolver
    /// expects.
    ///
    /// Clear all sits at the left end of a left-to-right layout, so the left
    /// arrow moves toward it (`+1`).  In a right-to-left layout the arrows
    /// swap roles.  Vertical keys always carry `+1`; the resolver ignores
    /// the sign for them.
    pub fn to_input(self, right_to_left: bool) -> (Direction, i32) {
        match (self, right_to_left) {
            (NavKey::Up, _) => (Direction::Up, 1),
            (NavKey::Down, _) => (Direction::Down, 1),
            (NavKey::Left, false) | (NavKey::Right, true) => (Direction::Left, 1),
            (NavKey::Right, false) | (NavKey::Left, true) => (Direction::Right, -1),
            (NavKey::Tab, _) => (Direction::Tab, 1),
            (NavKey::ShiftTab, _) => (Direction::Tab, -1),
        }
    }
}

/// A raw resolver query: the full `(direction, delta, cycle)` triple.
///
/// `cycle` falls back to the configured default when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigateRequest {
    pub direction: Direction,
    pub delta: i32,
    #[serde(default)]
    pub cycle: Option<bool>,
}

/// Every action the task switcher can perform.
///
/// Commands are produced by [`CommandSource`](crate::traits::CommandSource)
/// implementations and consumed by the [`TaskSwitcher`](crate::switcher::TaskSwitcher).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Replace the on-screen arrangement.
    ///
    /// Sent whenever tiles are added, removed or reordered.  If the current
    /// selection no longer exists it falls back to clear all.
    SetLayout(Layout),

    /// Select a tile or control directly (e.g. after a pointer click).
    Select(TileId),

    /// A navigation key was pressed.
    Go(NavKey),

    /// Low-level navigation with an explicit direction, delta and cycle flag.
    Navigate(NavigateRequest),

    /// Activate the current selection: open the task or trigger the control.
    Activate,

    /// Compute the accessibility focus order from the current selection and
    /// publish it to the view.
    AnnounceFocusOrder { toward_start: bool },
}
