//! Directional navigation across a [`GridTopology`].
//!
//! [`GridTopology::next_position`] resolves the next selection for one key
//! press.  It is a pure function of its arguments and never fails: anything
//! it cannot make sense of resolves to "stay where you are".
//!
//! # Movement rules
//!
//! * **Up / Down** toggle between the two rows at the same index.  Large
//!   tiles and controls have no vertical neighbour.
//! * **Left / Right** step along the current sequence (a row or the large
//!   tiles) by `delta`.  The sign of `delta` sets the way (`+1` toward
//!   clear all, `-1` toward the outer edge) and its magnitude sets how far.
//!   Leaving the inner end lands on clear all; leaving the outer end lands
//!   on add desk (or clear all when there is no add desk).  With
//!   `cycle == false` both ends clamp instead.
//! * **Tab** uses only the sign of `delta` and moves one cell per press
//!   along `add desk, large[0], large[1], top[0], bottom[0], top[1], …,
//!   clear all`, wrapping from clear all back to the start.
//!
//! Controls are re-entered at fixed anchors: clear all wraps outward to add
//! desk, the first large tile or the first row cell, and inward to the last
//! row cell; add desk enters at the first large tile or the first row cell.

use crate::command::Direction;
use crate::grid::{GridTopology, Row, Slot, TileId};
use log::warn;

/// Result of moving an index along a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Inside(usize),
    /// Ran off the high end, toward clear all.
    PastInner,
    /// Ran off index 0, toward the outer edge.
    PastOuter,
}

fn step(index: usize, len: usize, delta: i32) -> Step {
    let next = index as i64 + i64::from(delta);
    if next < 0 {
        Step::PastOuter
    } else if next as usize >= len {
        Step::PastInner
    } else {
        Step::Inside(next as usize)
    }
}

/// How the rows are re-entered from clear all.
///
/// Arrow keys enter the bottom row's last tile; Tab enters the last cell of
/// the serpentine order so that Tab and Shift-Tab stay inverse of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Column,
    Serpentine,
}

impl GridTopology {
    /// Resolve the selection that follows `current` for one navigation input.
    ///
    /// `delta` is signed: positive moves toward clear all (and forward in tab
    /// order), negative toward add desk and the outer edge.  A zero delta is
    /// a no-op for horizontal and tab movement.  `cycle` decides whether
    /// leaving the structure wraps through the controls (`true`) or clamps
    /// at the edge (`false`).
    ///
    /// If `current` is not part of this topology it is returned unchanged.
    pub fn next_position(
        &self,
        current: TileId,
        direction: Direction,
        delta: i32,
        cycle: bool,
    ) -> TileId {
        let Some(slot) = self.locate(current) else {
            warn!("{} is not part of the task grid, keeping selection", current);
            return current;
        };

        match (direction, slot) {
            (Direction::Up | Direction::Down, Slot::Row(row, i)) => self
                .row(row.other())
                .get(i)
                .copied()
                .map(TileId::Task)
                .unwrap_or(current),
            (Direction::Up | Direction::Down, _) => current,

            _ if delta == 0 => current,

            (Direction::Left | Direction::Right, Slot::Row(row, i)) => {
                self.step_along(self.row(row), i, delta, cycle)
            }
            (Direction::Left | Direction::Right, Slot::Large(i)) => {
                self.step_along(self.large_tiles(), i, delta, cycle)
            }
            (Direction::Tab, Slot::Large(i)) => self.tab_from_large(i, delta, cycle),
            (Direction::Tab, Slot::Row(row, i)) => self.tab_step(current, row, i, delta, cycle),

            (Direction::Left | Direction::Right, Slot::ClearAll) => {
                self.from_clear_all(delta, cycle, Entry::Column)
            }
            (Direction::Tab, Slot::ClearAll) => {
                self.from_clear_all(delta, cycle, Entry::Serpentine)
            }
            (Direction::Left | Direction::Right | Direction::Tab, Slot::AddDesk) => {
                self.from_add_desk(delta, cycle)
            }
        }
    }

    //  Sequence movement

    /// Move along `seq` (a row or the large tiles), leaving through the
    /// controls at either end.
    fn step_along(&self, seq: &[u32], index: usize, delta: i32, cycle: bool) -> TileId {
        match step(index, seq.len(), delta) {
            Step::Inside(j) => TileId::Task(seq[j]),
            Step::PastInner => self.past_inner(cycle, TileId::Task(seq[seq.len() - 1])),
            Step::PastOuter => self.past_outer(cycle, TileId::Task(seq[0])),
        }
    }

    /// One tab press from a row cell.
    fn tab_step(&self, current: TileId, row: Row, col: usize, delta: i32, cycle: bool) -> TileId {
        let forward = delta > 0;
        match self.serpentine_step(row, col, forward) {
            Some((row, col)) => TileId::Task(self.row(row)[col]),
            None if forward => self.past_inner(cycle, current),
            // The large tiles precede the rows in tab order.
            None => self
                .large_tiles()
                .last()
                .copied()
                .map(TileId::Task)
                .unwrap_or_else(|| self.past_outer(cycle, current)),
        }
    }

    /// One tab press from a large tile.  Past the inner large tile the walk
    /// continues into the rows rather than jumping to clear all.
    fn tab_from_large(&self, index: usize, delta: i32, cycle: bool) -> TileId {
        let large = self.large_tiles();
        let current = TileId::Task(large[index]);
        match step(index, large.len(), delta.signum()) {
            Step::Inside(j) => TileId::Task(large[j]),
            Step::PastInner => self
                .serpentine_first()
                .map(|(r, c)| TileId::Task(self.row(r)[c]))
                .unwrap_or_else(|| self.past_inner(cycle, current)),
            Step::PastOuter => self.past_outer(cycle, current),
        }
    }

    /// Neighbour of `(row, col)` in serpentine order, or `None` at either end.
    ///
    /// Within a column the top cell comes first when walking forward and the
    /// bottom cell comes first when walking backward.
    pub(crate) fn serpentine_step(
        &self,
        row: Row,
        col: usize,
        forward: bool,
    ) -> Option<(Row, usize)> {
        let has = |r: Row, c: usize| c < self.row(r).len();
        let (first, second) = if forward {
            (Row::Top, Row::Bottom)
        } else {
            (Row::Bottom, Row::Top)
        };
        if row == first && has(second, col) {
            return Some((second, col));
        }
        let next_col = if forward {
            col.checked_add(1)?
        } else {
            col.checked_sub(1)?
        };
        [first, second]
            .into_iter()
            .find(|&r| has(r, next_col))
            .map(|r| (r, next_col))
    }

    /// First cell of the serpentine order.
    pub(crate) fn serpentine_first(&self) -> Option<(Row, usize)> {
        [Row::Top, Row::Bottom]
            .into_iter()
            .find(|&r| !self.row(r).is_empty())
            .map(|r| (r, 0))
    }

    /// Last cell of the serpentine order.
    pub(crate) fn serpentine_last(&self) -> Option<(Row, usize)> {
        let col = self.columns().checked_sub(1)?;
        [Row::Bottom, Row::Top]
            .into_iter()
            .find(|&r| col < self.row(r).len())
            .map(|r| (r, col))
    }

    //  Leaving the structure

    fn past_inner(&self, cycle: bool, clamp: TileId) -> TileId {
        if cycle {
            TileId::ClearAll
        } else {
            clamp
        }
    }

    fn past_outer(&self, cycle: bool, clamp: TileId) -> TileId {
        match (cycle, self.has_add_desk()) {
            (false, _) => clamp,
            (true, true) => TileId::AddDesk,
            (true, false) => TileId::ClearAll,
        }
    }

    //  Entering from the controls

    fn from_clear_all(&self, delta: i32, cycle: bool, entry: Entry) -> TileId {
        if delta > 0 {
            // Past the inner end: wrap around to the outer edge.
            if !cycle {
                return TileId::ClearAll;
            }
            if self.has_add_desk() {
                return TileId::AddDesk;
            }
            self.outer_anchor().unwrap_or(TileId::ClearAll)
        } else {
            self.inner_anchor(entry)
                .or_else(|| self.has_add_desk().then_some(TileId::AddDesk))
                .unwrap_or(TileId::ClearAll)
        }
    }

    fn from_add_desk(&self, delta: i32, cycle: bool) -> TileId {
        if delta < 0 {
            if cycle {
                TileId::ClearAll
            } else {
                TileId::AddDesk
            }
        } else {
            self.outer_anchor().unwrap_or(TileId::ClearAll)
        }
    }

    /// Outermost task: the first large tile, else the first serpentine cell.
    fn outer_anchor(&self) -> Option<TileId> {
        self.large_tiles()
            .first()
            .copied()
            .or_else(|| self.serpentine_first().map(|(r, c)| self.row(r)[c]))
            .map(TileId::Task)
    }

    /// Innermost task as seen from clear all.
    fn inner_anchor(&self, entry: Entry) -> Option<TileId> {
        let row_cell = match entry {
            Entry::Column => [Row::Bottom, Row::Top]
                .into_iter()
                .find_map(|r| self.row(r).last().copied()),
            Entry::Serpentine => self.serpentine_last().map(|(r, c)| self.row(r)[c]),
        };
        row_cell
            .or_else(|| self.large_tiles().last().copied())
            .map(TileId::Task)
    }
}

//  Tests
