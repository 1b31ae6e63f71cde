//! Rectangle selection over the seat grid.
//!
//! A drag gesture anchors at one cell and sweeps to another; every cell of
//! the spanned rectangle joins the selection. Successive drags union into the
//! same set and nothing is ever removed.

use indexmap::IndexSet;

use crate::domain::{GridSize, SeatPosition};
use crate::error::{Result, SeatError};

/// Converts drag gestures over an R x C grid into a set of seat positions.
///
/// The selection keeps first-insertion order: row-major inside each
/// rectangle, rectangles in the order they were dragged. Seeding pairs the
/// roster with seats in exactly this order.
///
/// # Example
///
/// ```
/// use seatforge_core::{GridSelector, GridSize, SeatPosition};
///
/// let mut selector = GridSelector::new(GridSize::new(4, 4));
/// selector.begin_selection(SeatPosition::new(0, 0)).unwrap();
/// selector.extend_selection(SeatPosition::new(1, 2)).unwrap();
/// selector.end_selection();
///
/// assert_eq!(selector.len(), 6);
/// assert!(selector.contains(SeatPosition::new(1, 1)));
/// ```
#[derive(Debug, Clone)]
pub struct GridSelector {
    size: GridSize,
    anchor: Option<SeatPosition>,
    selected: IndexSet<SeatPosition>,
}

impl GridSelector {
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            anchor: None,
            selected: IndexSet::new(),
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the anchor of the drag in progress, if any.
    pub fn anchor(&self) -> Option<SeatPosition> {
        self.anchor
    }

    /// Starts a drag at `pos`. The anchor cell itself is selected.
    pub fn begin_selection(&mut self, pos: SeatPosition) -> Result<&IndexSet<SeatPosition>> {
        self.check_bounds(pos)?;
        self.anchor = Some(pos);
        self.selected.insert(pos);
        Ok(&self.selected)
    }

    /// Sweeps the active drag to `pos`, adding the spanned rectangle.
    ///
    /// Without an active drag this leaves the selection untouched.
    pub fn extend_selection(&mut self, pos: SeatPosition) -> Result<&IndexSet<SeatPosition>> {
        self.check_bounds(pos)?;
        if let Some(anchor) = self.anchor {
            self.add_rect(anchor, pos);
        }
        Ok(&self.selected)
    }

    /// Ends the active drag.
    pub fn end_selection(&mut self) {
        self.anchor = None;
    }

    /// Selects the rectangle spanned by `start` and `end` as one gesture.
    pub fn select_rect(
        &mut self,
        start: SeatPosition,
        end: SeatPosition,
    ) -> Result<&IndexSet<SeatPosition>> {
        self.check_bounds(start)?;
        self.check_bounds(end)?;
        self.add_rect(start, end);
        self.anchor = None;
        Ok(&self.selected)
    }

    pub fn selected(&self) -> &IndexSet<SeatPosition> {
        &self.selected
    }

    pub fn contains(&self, pos: SeatPosition) -> bool {
        self.selected.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    fn check_bounds(&self, pos: SeatPosition) -> Result<()> {
        if self.size.contains(pos) {
            Ok(())
        } else {
            Err(SeatError::OutOfGrid {
                position: pos,
                size: self.size,
            })
        }
    }

    fn add_rect(&mut self, start: SeatPosition, end: SeatPosition) {
        let (min_row, max_row) = (start.row.min(end.row), start.row.max(end.row));
        let (min_col, max_col) = (start.col.min(end.col), start.col.max(end.col));

        for row in min_row..=max_row {
            for col in min_col..=max_col {
                self.selected.insert(SeatPosition::new(row, col));
            }
        }
    }
}

impl Default for GridSelector {
    fn default() -> Self {
        Self::new(GridSize::default())
    }
}
