//! Task grid topology.
//!
//! The [`GridTopology`] struct describes one on-screen arrangement of the
//! task switcher: two rows of task tiles, up to two large tiles and the
//! control buttons around them.
//!
//! Every sequence follows the same index convention: index `0` is the
//! element nearest the *outer* edge (next to add desk and the large tiles),
//! and increasing indices move toward clear all.  Keeping this convention in
//! one place lets the movement rules in [`navigation`](crate::navigation) and
//! [`tab_order`](crate::tab_order) treat "toward clear all" as `+1`
//! everywhere.
//!
//! ```text
//!  [add desk] [large 0] [large 1] | top[0]    top[1]    … | [clear all]
//!                                 | bottom[0] bottom[1] … |
//! ```

use crate::command::normalize_token;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

/// Maximum number of large tiles a topology may carry.
pub const MAX_LARGE_TILES: usize = 2;

/// Identifier of anything that can hold the selection.
///
/// Task ids are opaque integers owned by the caller.  The two controls are
/// separate variants so they can never collide with a task id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileId {
    /// A task tile (row member or large tile).
    Task(u32),
    /// The "clear all" button at the inner end of the grid.
    ClearAll,
    /// The optional "add desk" button at the outer end of the grid.
    AddDesk,
}

impl TileId {
    /// The task id, or `None` for a control.
    pub fn task(self) -> Option<u32> {
        match self {
            TileId::Task(id) => Some(id),
            TileId::ClearAll | TileId::AddDesk => None,
        }
    }

    /// Whether this is one of the control buttons.
    pub fn is_control(self) -> bool {
        self.task().is_none()
    }
}

impl From<u32> for TileId {
    fn from(id: u32) -> Self {
        TileId::Task(id)
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileId::Task(id) => write!(f, "task {}", id),
            TileId::ClearAll => write!(f, "clear-all"),
            TileId::AddDesk => write!(f, "add-desk"),
        }
    }
}

/// Raw placeholder values some callers still use for the controls.
const RAW_CLEAR_ALL: i64 = -1;
const RAW_ADD_DESK: i64 = -2;

impl Serialize for TileId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            TileId::Task(id) => serializer.serialize_u32(*id),
            TileId::ClearAll => serializer.serialize_str("clear-all"),
            TileId::AddDesk => serializer.serialize_str("add-desk"),
        }
    }
}

/// Wire format: a task id number, a control name (`"clear-all"`,
/// `"add-desk"`) or one of the raw placeholders `-1` / `-2`.
impl<'de> Deserialize<'de> for TileId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Visitor;
        struct V;
        impl<'de> Visitor<'de> for V {
            type Value = TileId;
            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "task id, \"clear-all\" or \"add-desk\"")
            }
            fn visit_u64<E>(self, n: u64) -> Result<TileId, E>
            where
                E: DeError,
            {
                u32::try_from(n)
                    .map(TileId::Task)
                    .map_err(|_| DeError::custom(format!("task id {} out of range", n)))
            }
            fn visit_i64<E>(self, n: i64) -> Result<TileId, E>
            where
                E: DeError,
            {
                match n {
                    RAW_CLEAR_ALL => Ok(TileId::ClearAll),
                    RAW_ADD_DESK => Ok(TileId::AddDesk),
                    n if n >= 0 => self.visit_u64(n as u64),
                    n => Err(DeError::custom(format!("invalid tile id {}", n))),
                }
            }
            fn visit_str<E>(self, s: &str) -> Result<TileId, E>
            where
                E: DeError,
            {
                match normalize_token(s).as_str() {
                    "clearall" => Ok(TileId::ClearAll),
                    "adddesk" | "adddesktop" => Ok(TileId::AddDesk),
                    other => other
                        .parse::<u32>()
                        .map(TileId::Task)
                        .map_err(|_| DeError::custom(format!("invalid tile id: {:?}", s))),
                }
            }
        }
        deserializer.deserialize_any(V)
    }
}

/// One of the two task rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Row {
    Top,
    Bottom,
}

impl Row {
    /// The row paired with this one for vertical movement.
    pub fn other(self) -> Row {
        match self {
            Row::Top => Row::Bottom,
            Row::Bottom => Row::Top,
        }
    }
}

/// Where an identifier lives inside a [`GridTopology`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Index into one of the two rows.
    Row(Row, usize),
    /// Index into the large-tile sequence.
    Large(usize),
    ClearAll,
    AddDesk,
}

/// Errors raised when an arrangement violates the topology invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    /// The same task id appears more than once across rows and large tiles.
    #[error("task {0} appears more than once")]
    DuplicateTask(u32),
    /// More than [`MAX_LARGE_TILES`] large tiles were supplied.
    #[error("{0} large tiles given, at most {max} supported", max = MAX_LARGE_TILES)]
    TooManyLargeTiles(usize),
}

/// Immutable description of one task switcher arrangement.
///
/// Construct it with [`GridTopology::new`] (or from a [`Layout`]) whenever
/// the on-screen tiles change; it is cheap and meant to be rebuilt rather
/// than mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridTopology {
    top: Vec<u32>,
    bottom: Vec<u32>,
    large: Vec<u32>,
    add_desk: bool,
}

impl GridTopology {
    /// Build a topology, checking that every task id is unique and that at
    /// most [`MAX_LARGE_TILES`] large tiles are present.
    pub fn new(
        top: Vec<u32>,
        bottom: Vec<u32>,
        large: Vec<u32>,
        add_desk: bool,
    ) -> Result<Self, TopologyError> {
        if large.len() > MAX_LARGE_TILES {
            return Err(TopologyError::TooManyLargeTiles(large.len()));
        }
        let mut seen = HashSet::new();
        for &id in top.iter().chain(&bottom).chain(&large) {
            if !seen.insert(id) {
                return Err(TopologyError::DuplicateTask(id));
            }
        }
        Ok(Self {
            top,
            bottom,
            large,
            add_desk,
        })
    }

    //  Accessors

    /// Task ids of `row`, outer edge first.
    pub fn row(&self, row: Row) -> &[u32] {
        match row {
            Row::Top => &self.top,
            Row::Bottom => &self.bottom,
        }
    }

    /// Large tile ids, outermost first.
    pub fn large_tiles(&self) -> &[u32] {
        &self.large
    }

    /// Whether the add desk button is shown.
    pub fn has_add_desk(&self) -> bool {
        self.add_desk
    }

    /// Number of columns spanned by the two rows (the longer row's length).
    pub fn columns(&self) -> usize {
        self.top.len().max(self.bottom.len())
    }

    /// Whether both rows are empty.
    pub fn rows_empty(&self) -> bool {
        self.top.is_empty() && self.bottom.is_empty()
    }

    /// Find where `id` lives.
    ///
    /// Returns `None` for unknown task ids and for [`TileId::AddDesk`] when
    /// the topology has no add desk button.
    pub fn locate(&self, id: TileId) -> Option<Slot> {
        match id {
            TileId::ClearAll => Some(Slot::ClearAll),
            TileId::AddDesk => self.add_desk.then_some(Slot::AddDesk),
            TileId::Task(task) => {
                if let Some(i) = self.top.iter().position(|&t| t == task) {
                    Some(Slot::Row(Row::Top, i))
                } else if let Some(i) = self.bottom.iter().position(|&t| t == task) {
                    Some(Slot::Row(Row::Bottom, i))
                } else {
                    self.large.iter().position(|&t| t == task).map(Slot::Large)
                }
            }
        }
    }

    /// The identifier stored at `slot`, if the slot exists.
    pub fn tile_at(&self, slot: Slot) -> Option<TileId> {
        match slot {
            Slot::Row(row, i) => self.row(row).get(i).copied().map(TileId::Task),
            Slot::Large(i) => self.large.get(i).copied().map(TileId::Task),
            Slot::ClearAll => Some(TileId::ClearAll),
            Slot::AddDesk => self.add_desk.then_some(TileId::AddDesk),
        }
    }

    /// Whether `id` can hold the selection in this topology.
    pub fn contains(&self, id: TileId) -> bool {
        self.locate(id).is_some()
    }
}

/// Serializable form of a [`GridTopology`], as sent over the wire.
///
/// Every field is optional; an empty object describes an empty switcher
/// that only shows clear all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub top: Vec<u32>,
    pub bottom: Vec<u32>,
    pub large: Vec<u32>,
    pub add_desk: bool,
}

impl TryFrom<Layout> for GridTopology {
    type Error = TopologyError;

    fn try_from(layout: Layout) -> Result<Self, TopologyError> {
        GridTopology::new(layout.top, layout.bottom, layout.large, layout.add_desk)
    }
}

//  Tests
