//! Lazy focus-traversal order across both rows.
//!
//! [`GridTopology::tab_order_from`] returns a [`TabOrder`] iterator that
//! walks the serpentine order (`top[0], bottom[0], top[1], …`) away from a
//! starting tile and yields `(task_id, column_offset)` pairs, where the
//! offset is the column distance from the starting tile.  Accessibility
//! code typically pulls items until it finds the first focusable tile, so
//! nothing is computed ahead of time.
//!
//! Controls and large tiles are never yielded.  Starting from one of them
//! walks from a virtual column: clear all sits one column past the inner
//! end, add desk and the large tiles one column before index `0`.

use crate::grid::{GridTopology, Row, Slot, TileId};
use log::warn;
use std::iter::FusedIterator;

/// Iterator over `(task_id, column_offset)` pairs in tab order.
///
/// The iterator only borrows the topology and carries its own cursor, so
/// cloning it (or calling [`GridTopology::tab_order_from`] again) replays
/// the same sequence.
#[derive(Debug, Clone)]
pub struct TabOrder<'a> {
    grid: &'a GridTopology,
    /// Column of the starting tile; may be virtual (`-1` or `columns()`).
    origin: i64,
    forward: bool,
    cursor: Cursor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    /// Outside the rows, about to enter them.
    Outside,
    At(Row, usize),
    Done,
}

impl GridTopology {
    /// Tab order starting after `start`.
    ///
    /// With `toward_start == true` the walk heads toward column `0` (the
    /// outer edge), otherwise toward clear all.  `start` itself is not
    /// yielded.  Unknown ids produce an empty sequence.
    pub fn tab_order_from(&self, start: TileId, toward_start: bool) -> TabOrder<'_> {
        let columns = self.columns() as i64;
        let (origin, cursor) = match self.locate(start) {
            Some(Slot::Row(row, col)) => (col as i64, Cursor::At(row, col)),
            Some(Slot::ClearAll) if toward_start => (columns, Cursor::Outside),
            Some(Slot::Large(_)) | Some(Slot::AddDesk) if !toward_start => (-1, Cursor::Outside),
            Some(Slot::ClearAll) => (columns, Cursor::Done),
            Some(Slot::Large(_)) | Some(Slot::AddDesk) => (-1, Cursor::Done),
            None => {
                warn!("{} is not part of the task grid, empty tab order", start);
                (0, Cursor::Done)
            }
        };
        TabOrder {
            grid: self,
            origin,
            forward: !toward_start,
            cursor,
        }
    }
}

impl Iterator for TabOrder<'_> {
    type Item = (u32, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let cell = match self.cursor {
            Cursor::Done => return None,
            Cursor::Outside if self.forward => self.grid.serpentine_first(),
            Cursor::Outside => self.grid.serpentine_last(),
            Cursor::At(row, col) => self.grid.serpentine_step(row, col, self.forward),
        };
        let Some((row, col)) = cell else {
            self.cursor = Cursor::Done;
            return None;
        };
        self.cursor = Cursor::At(row, col);
        let offset = (col as i64 - self.origin).unsigned_abs() as usize;
        Some((self.grid.row(row)[col], offset))
    }
}

impl FusedIterator for TabOrder<'_> {}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn grid() -> GridTopology {
        GridTopology::new(vec![1, 3, 5], vec![2, 4, 6], vec![100], true).unwrap()
    }

    fn order(g: &GridTopology, start: TileId, toward_start: bool) -> Vec<(u32, usize)> {
        g.tab_order_from(start, toward_start).collect()
    }

    #[test]
    fn from_top_row_toward_end() {
        let g = grid();
        assert_eq!(
            order(&g, TileId::Task(3), false),
            vec![(4, 0), (5, 1), (6, 1)]
        );
    }

    #[test]
    fn from_top_row_toward_start() {
        let g = grid();
        assert_eq!(order(&g, TileId::Task(3), true), vec![(2, 1), (1, 1)]);
    }

    #[test]
    fn from_bottom_row_toward_start() {
        let g = grid();
        assert_eq!(
            order(&g, TileId::Task(4), true),
            vec![(3, 0), (2, 1), (1, 1)]
        );
    }

    #[test]
    fn from_bottom_row_toward_end() {
        let g = grid();
        assert_eq!(order(&g, TileId::Task(4), false), vec![(5, 1), (6, 1)]);
    }

    #[test]
    fn column_order_follows_walk_direction_not_start_row() {
        let g = grid();
        assert_eq!(
            order(&g, TileId::Task(2), false),
            vec![(3, 1), (4, 1), (5, 2), (6, 2)]
        );
        assert_eq!(order(&g, TileId::Task(3), true), vec![(2, 1), (1, 1)]);
    }

    #[test]
    fn from_clear_all() {
        let g = grid();
        assert_eq!(
            order(&g, TileId::ClearAll, true),
            vec![(6, 1), (5, 1), (4, 2), (3, 2), (2, 3), (1, 3)]
        );
        assert!(order(&g, TileId::ClearAll, false).is_empty());
    }

    #[test]
    fn from_outer_controls() {
        let g = grid();
        let expected = vec![(1, 1), (2, 1), (3, 2), (4, 2), (5, 3), (6, 3)];
        assert_eq!(order(&g, TileId::AddDesk, false), expected);
        assert_eq!(order(&g, TileId::Task(100), false), expected);
        assert!(order(&g, TileId::AddDesk, true).is_empty());
    }

    #[test]
    fn unequal_rows() {
        let g = GridTopology::new(vec![1, 3, 5], vec![2], vec![], false).unwrap();
        assert_eq!(order(&g, TileId::Task(2), false), vec![(3, 1), (5, 2)]);
        assert_eq!(order(&g, TileId::Task(5), true), vec![(3, 1), (2, 2), (1, 2)]);
    }

    #[test]
    fn unknown_start_is_empty() {
        let g = grid();
        assert!(order(&g, TileId::Task(77), false).is_empty());
        let no_desk = GridTopology::new(vec![1], vec![], vec![], false).unwrap();
        assert!(order(&no_desk, TileId::AddDesk, false).is_empty());
    }

    #[test]
    fn never_yields_repeats() {
        let g = grid();
        for start in [1, 2, 3, 4, 5, 6] {
            for toward_start in [true, false] {
                let ids: Vec<u32> = g
                    .tab_order_from(TileId::Task(start), toward_start)
                    .map(|(id, _)| id)
                    .collect();
                let unique: HashSet<u32> = ids.iter().copied().collect();
                assert_eq!(ids.len(), unique.len());
                assert!(!ids.contains(&start));
                assert!(!ids.contains(&100), "large tiles are not part of tab order");
            }
        }
    }

    #[test]
    fn restartable_and_lazy() {
        let g = grid();
        let mut it = g.tab_order_from(TileId::Task(1), false);
        assert_eq!(it.next(), Some((2, 0)));
        let replay = it.clone();
        let rest: Vec<_> = it.collect();
        assert_eq!(rest, replay.collect::<Vec<_>>());
        assert_eq!(
            g.tab_order_from(TileId::Task(1), false).next(),
            Some((2, 0))
        );
    }

    #[test]
    fn fused_after_exhaustion() {
        let g = grid();
        let mut it = g.tab_order_from(TileId::Task(6), false);
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }
}
