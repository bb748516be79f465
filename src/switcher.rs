//! The controller that ties the topology, the resolver and the view
//! together.
//!
//! [`TaskSwitcher`] owns the current [`GridTopology`] and selection and
//! reacts to [`Command`]s by resolving the next selection and issuing calls
//! to the [`SelectionView`] trait.

use crate::command::{Command, Direction, NavigateRequest};
use crate::config::NavigationConfig;
use crate::grid::{GridTopology, TileId, TopologyError};
use crate::tab_order::TabOrder;
use crate::traits::SelectionView;
use log::{debug, info};

/// Possible errors from the switcher.
#[derive(Debug, thiserror::Error)]
pub enum SwitcherError {
    /// The view returned an error.
    #[error("view error: {0}")]
    View(String),
    /// A `SetLayout` command described an invalid arrangement.
    #[error("invalid layout: {0}")]
    Layout(#[from] TopologyError),
    /// A `Select` command named something that is not on screen.
    #[error("{0} is not part of the task grid")]
    UnknownTile(TileId),
}

/// Orchestrates task grid navigation and view calls.
///
/// The switcher is generic over any [`SelectionView`] implementation, making
/// it independent of the toolkit that draws the tiles.
///
/// # Typical usage
///
/// ```ignore
/// let mut switcher = TaskSwitcher::new(view, NavigationConfig::default());
/// switcher.handle(Command::SetLayout(layout))?;
/// switcher.handle(Command::Go(NavKey::Left))?;
/// ```
pub struct TaskSwitcher<V: SelectionView> {
    view: V,
    topology: GridTopology,
    selection: TileId,
    config: NavigationConfig,
}

impl<V: SelectionView> TaskSwitcher<V> {
    /// Create a new switcher with an empty grid.
    ///
    /// Until the first [`SetLayout`](Command::SetLayout) only clear all
    /// exists, so it starts out selected.
    pub fn new(view: V, config: NavigationConfig) -> Self {
        Self {
            view,
            topology: GridTopology::default(),
            selection: TileId::ClearAll,
            config,
        }
    }

    /// Replace the navigation settings.
    pub fn set_navigation_config(&mut self, config: NavigationConfig) {
        self.config = config;
    }

    /// The arrangement currently on screen.
    pub fn topology(&self) -> &GridTopology {
        &self.topology
    }

    /// The currently selected tile or control.
    pub fn selection(&self) -> TileId {
        self.selection
    }

    /// Return a shared reference to the underlying view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Accessibility focus order starting after the current selection.
    pub fn focus_order(&self, toward_start: bool) -> TabOrder<'_> {
        self.topology.tab_order_from(self.selection, toward_start)
    }

    /// Process a single [`Command`].
    ///
    /// The selection is updated before the view is called; if the view
    /// fails, the switcher keeps the new selection and reports the error.
    pub fn handle(&mut self, cmd: Command) -> Result<(), SwitcherError> {
        match cmd {
            Command::SetLayout(layout) => {
                let topology = GridTopology::try_from(layout)?;
                info!(
                    "layout: {} columns, {} large tiles, add desk {}",
                    topology.columns(),
                    topology.large_tiles().len(),
                    topology.has_add_desk()
                );
                self.topology = topology;
                if !self.topology.contains(self.selection) {
                    debug!("{} disappeared, falling back to clear all", self.selection);
                    self.select(TileId::ClearAll)?;
                }
            }

            Command::Select(target) => {
                if !self.topology.contains(target) {
                    return Err(SwitcherError::UnknownTile(target));
                }
                info!("select {}", target);
                self.select(target)?;
            }

            Command::Go(key) => {
                let (direction, delta) = key.to_input(self.config.right_to_left);
                info!("go {}", key);
                self.navigate(direction, delta, self.config.cycle)?;
            }

            Command::Navigate(NavigateRequest {
                direction,
                delta,
                cycle,
            }) => {
                let cycle = cycle.unwrap_or(self.config.cycle);
                info!("navigate {} delta={} cycle={}", direction, delta, cycle);
                self.navigate(direction, delta, cycle)?;
            }

            Command::Activate => {
                info!("activate {}", self.selection);
                self.view
                    .activate(self.selection)
                    .map_err(|e| SwitcherError::View(e.to_string()))?;
            }

            Command::AnnounceFocusOrder { toward_start } => {
                let order: Vec<(u32, usize)> = self.focus_order(toward_start).collect();
                debug!("focus order from {}: {:?}", self.selection, order);
                self.view
                    .publish_focus_order(&order)
                    .map_err(|e| SwitcherError::View(e.to_string()))?;
            }
        }
        Ok(())
    }

    /// Core logic for one navigation input.
    fn navigate(
        &mut self,
        direction: Direction,
        delta: i32,
        cycle: bool,
    ) -> Result<(), SwitcherError> {
        let next = self
            .topology
            .next_position(self.selection, direction, delta, cycle);
        if next == self.selection {
            debug!("selection stays on {}", next);
            return Ok(());
        }
        debug!("{} -> {}", self.selection, next);
        self.select(next)
    }

    fn select(&mut self, target: TileId) -> Result<(), SwitcherError> {
        self.selection = target;
        self.view
            .focus(target)
            .map_err(|e| SwitcherError::View(e.to_string()))
    }
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::NavKey;
    use crate::grid::Layout;
    use std::cell::RefCell;

    /// Record-keeping mock view.
    #[derive(Debug, Default)]
    struct RecorderView {
        focused: RefCell<Vec<TileId>>,
        activated: RefCell<Vec<TileId>>,
        orders: RefCell<Vec<Vec<(u32, usize)>>>,
        /// When set, every call fails after recording.
        broken: bool,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("recorder error")]
    struct RecorderErr;

    impl RecorderView {
        fn result(&self) -> Result<(), RecorderErr> {
            if self.broken {
                Err(RecorderErr)
            } else {
                Ok(())
            }
        }
    }

    impl SelectionView for RecorderView {
        type Error = RecorderErr;

        fn focus(&self, target: TileId) -> Result<(), RecorderErr> {
            self.focused.borrow_mut().push(target);
            self.result()
        }

        fn activate(&self, target: TileId) -> Result<(), RecorderErr> {
            self.activated.borrow_mut().push(target);
            self.result()
        }

        fn publish_focus_order(&self, order: &[(u32, usize)]) -> Result<(), RecorderErr> {
            self.orders.borrow_mut().push(order.to_vec());
            self.result()
        }
    }

    fn layout() -> Layout {
        Layout {
            top: vec![1, 3, 5],
            bottom: vec![2, 4, 6],
            large: vec![],
            add_desk: true,
        }
    }

    fn make_switcher() -> TaskSwitcher<RecorderView> {
        let mut s = TaskSwitcher::new(RecorderView::default(), NavigationConfig::default());
        s.handle(Command::SetLayout(layout())).unwrap();
        s
    }

    #[test]
    fn starts_on_clear_all() {
        let s = make_switcher();
        assert_eq!(s.selection(), TileId::ClearAll);
        assert!(s.view().focused.borrow().is_empty());
    }

    #[test]
    fn arrow_keys_move_and_focus() {
        let mut s = make_switcher();
        s.handle(Command::Go(NavKey::Right)).unwrap();
        assert_eq!(s.selection(), TileId::Task(6));
        s.handle(Command::Go(NavKey::Up)).unwrap();
        assert_eq!(s.selection(), TileId::Task(5));
        s.handle(Command::Go(NavKey::Right)).unwrap();
        assert_eq!(s.selection(), TileId::Task(3));
        assert_eq!(
            *s.view().focused.borrow(),
            vec![TileId::Task(6), TileId::Task(5), TileId::Task(3)]
        );
    }

    #[test]
    fn left_from_clear_all_wraps_to_add_desk() {
        let mut s = make_switcher();
        s.handle(Command::Go(NavKey::Left)).unwrap();
        assert_eq!(s.selection(), TileId::AddDesk);
    }

    #[test]
    fn right_to_left_layout_swaps_arrows() {
        let mut s = make_switcher();
        s.set_navigation_config(NavigationConfig {
            cycle: true,
            right_to_left: true,
        });
        s.handle(Command::Go(NavKey::Left)).unwrap();
        assert_eq!(s.selection(), TileId::Task(6));
    }

    #[test]
    fn tab_and_shift_tab() {
        let mut s = make_switcher();
        s.handle(Command::Select(TileId::Task(1))).unwrap();
        s.handle(Command::Go(NavKey::Tab)).unwrap();
        assert_eq!(s.selection(), TileId::Task(2));
        s.handle(Command::Go(NavKey::ShiftTab)).unwrap();
        s.handle(Command::Go(NavKey::ShiftTab)).unwrap();
        assert_eq!(s.selection(), TileId::AddDesk);
    }

    #[test]
    fn no_cycle_config_clamps() {
        let mut s = make_switcher();
        s.set_navigation_config(NavigationConfig {
            cycle: false,
            right_to_left: false,
        });
        s.handle(Command::Select(TileId::Task(5))).unwrap();
        s.handle(Command::Go(NavKey::Left)).unwrap();
        assert_eq!(s.selection(), TileId::Task(5));
        // Clamped presses do not refocus.
        assert_eq!(*s.view().focused.borrow(), vec![TileId::Task(5)]);
    }

    #[test]
    fn navigate_overrides_cycle() {
        let mut s = make_switcher();
        s.handle(Command::Select(TileId::Task(5))).unwrap();
        s.handle(Command::Navigate(NavigateRequest {
            direction: Direction::Left,
            delta: 1,
            cycle: Some(false),
        }))
        .unwrap();
        assert_eq!(s.selection(), TileId::Task(5));
        s.handle(Command::Navigate(NavigateRequest {
            direction: Direction::Left,
            delta: 1,
            cycle: None,
        }))
        .unwrap();
        assert_eq!(s.selection(), TileId::ClearAll);
    }

    #[test]
    fn select_unknown_tile_fails() {
        let mut s = make_switcher();
        let err = s.handle(Command::Select(TileId::Task(99))).unwrap_err();
        assert!(matches!(err, SwitcherError::UnknownTile(TileId::Task(99))));
        assert_eq!(s.selection(), TileId::ClearAll);
    }

    #[test]
    fn invalid_layout_is_rejected_and_keeps_previous() {
        let mut s = make_switcher();
        let bad = Layout {
            top: vec![1, 1],
            ..Layout::default()
        };
        let err = s.handle(Command::SetLayout(bad)).unwrap_err();
        assert!(matches!(err, SwitcherError::Layout(TopologyError::DuplicateTask(1))));
        assert_eq!(s.topology().columns(), 3);
    }

    #[test]
    fn removed_selection_falls_back_to_clear_all() {
        let mut s = make_switcher();
        s.handle(Command::Select(TileId::Task(6))).unwrap();
        s.handle(Command::SetLayout(Layout {
            top: vec![1, 3],
            bottom: vec![2],
            ..Layout::default()
        }))
        .unwrap();
        assert_eq!(s.selection(), TileId::ClearAll);
        assert_eq!(s.view().focused.borrow().last(), Some(&TileId::ClearAll));
    }

    #[test]
    fn surviving_selection_is_kept() {
        let mut s = make_switcher();
        s.handle(Command::Select(TileId::Task(3))).unwrap();
        s.handle(Command::SetLayout(Layout {
            top: vec![3],
            ..Layout::default()
        }))
        .unwrap();
        assert_eq!(s.selection(), TileId::Task(3));
    }

    #[test]
    fn activate_uses_current_selection() {
        let mut s = make_switcher();
        s.handle(Command::Go(NavKey::Left)).unwrap();
        s.handle(Command::Activate).unwrap();
        assert_eq!(*s.view().activated.borrow(), vec![TileId::AddDesk]);
    }

    #[test]
    fn announce_focus_order() {
        let mut s = make_switcher();
        s.handle(Command::Select(TileId::Task(3))).unwrap();
        s.handle(Command::AnnounceFocusOrder { toward_start: false })
            .unwrap();
        assert_eq!(
            *s.view().orders.borrow(),
            vec![vec![(4, 0), (5, 1), (6, 1)]]
        );
    }

    #[test]
    fn view_errors_propagate_after_selection_changes() {
        let view = RecorderView {
            broken: true,
            ..RecorderView::default()
        };
        let mut s = TaskSwitcher::new(view, NavigationConfig::default());
        s.handle(Command::SetLayout(layout())).unwrap();
        let err = s.handle(Command::Go(NavKey::Right)).unwrap_err();
        assert!(matches!(err, SwitcherError::View(_)));
        assert_eq!(s.selection(), TileId::Task(6));
    }

    #[test]
    fn full_command_sequence() {
        let mut s = make_switcher();
        let cmds = vec![
            Command::Go(NavKey::Right),    // 6
            Command::Go(NavKey::Right),    // 4
            Command::Go(NavKey::Up),       // 3
            Command::Go(NavKey::Tab),      // 4
            Command::Go(NavKey::Tab),      // 5
            Command::Go(NavKey::Left),     // clear all
        ];
        for cmd in cmds {
            s.handle(cmd).unwrap();
        }
        assert_eq!(s.selection(), TileId::ClearAll);
        assert_eq!(s.view().focused.borrow().len(), 6);
    }
}
