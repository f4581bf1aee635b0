//! The [`Grid`] type — a fixed-size 2D grid of [`Cell`]s with shared storage.
//!
//! A `Grid` is a *handle* on a backing buffer. Cloning a `Grid` yields another
//! handle on the **same** cells, so a search engine can hold the grid it works
//! on without owning it, and the caller still sees every change.

use std::cell::RefCell;
use std::rc::Rc;

use crate::cell::Cell;
use crate::error::GridError;
use crate::geom::Coord;

// ---------------------------------------------------------------------------
// Internal shared buffer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct GridBuffer {
    cells: Vec<Cell>,
    rows: i32,
    cols: i32,
}

impl GridBuffer {
    fn new(rows: i32, cols: i32) -> Self {
        let cells = RowMajor::new(rows, cols).map(Cell::new).collect();
        Self { cells, rows, cols }
    }

    #[inline]
    fn index(&self, p: Coord) -> Option<usize> {
        if p.row >= 0 && p.col >= 0 && p.row < self.rows && p.col < self.cols {
            Some((p.row as usize) * (self.cols as usize) + (p.col as usize))
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A `rows × cols` grid of [`Cell`]s backed by shared storage.
///
/// The grid is created once and never resized. Every cell's coordinate
/// matches its position in the grid.
#[derive(Debug, Clone)]
pub struct Grid {
    buf: Rc<RefCell<GridBuffer>>,
    rows: i32,
    cols: i32,
}

impl Grid {
    /// Create a new grid with `rows` rows and `cols` columns of free cells.
    /// Negative dimensions are treated as zero.
    pub fn new(rows: i32, cols: i32) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        Self {
            buf: Rc::new(RefCell::new(GridBuffer::new(rows, cols))),
            rows,
            cols,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `p` names a cell of this grid.
    #[inline]
    pub fn valid(&self, p: Coord) -> bool {
        p.row >= 0 && p.col >= 0 && p.row < self.rows && p.col < self.cols
    }

    /// Whether two handles share the same backing storage.
    #[inline]
    pub fn same_storage(&self, other: &Grid) -> bool {
        Rc::ptr_eq(&self.buf, &other.buf)
    }

    /// Stable row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Coord) -> Option<usize> {
        if !self.valid(p) {
            return None;
        }
        Some((p.row as usize) * (self.cols as usize) + (p.col as usize))
    }

    /// Coordinate of the row-major index `idx`. `idx` must be below
    /// [`len`](Grid::len).
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        let cols = self.cols.max(1) as usize;
        Coord::new((idx / cols) as i32, (idx % cols) as i32)
    }

    fn out_of_bounds(&self, pos: Coord) -> GridError {
        GridError::OutOfBounds {
            pos,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Read the cell at `p`.
    pub fn at(&self, p: Coord) -> Result<Cell, GridError> {
        let buf = self.buf.borrow();
        let idx = buf.index(p).ok_or_else(|| self.out_of_bounds(p))?;
        Ok(buf.cells[idx].clone())
    }

    /// Whether the cell at `p` is blocked.
    pub fn is_obstacle(&self, p: Coord) -> Result<bool, GridError> {
        let buf = self.buf.borrow();
        let idx = buf.index(p).ok_or_else(|| self.out_of_bounds(p))?;
        Ok(buf.cells[idx].obstacle)
    }

    /// Whether `p` is inside the grid and not blocked.
    pub fn is_free(&self, p: Coord) -> bool {
        let buf = self.buf.borrow();
        buf.index(p).is_some_and(|i| !buf.cells[i].obstacle)
    }

    /// Mark or unmark the cell at `p` as blocked.
    ///
    /// Neighbor lists are not updated; they must be rebuilt by the caller.
    pub fn set_obstacle(&self, p: Coord, obstacle: bool) -> Result<(), GridError> {
        let mut buf = self.buf.borrow_mut();
        let idx = buf.index(p).ok_or_else(|| self.out_of_bounds(p))?;
        buf.cells[idx].obstacle = obstacle;
        Ok(())
    }

    /// Unblock every cell.
    pub fn clear_obstacles(&self) {
        let mut buf = self.buf.borrow_mut();
        for cell in buf.cells.iter_mut() {
            cell.obstacle = false;
        }
    }

    /// Number of blocked cells.
    pub fn obstacle_count(&self) -> usize {
        self.buf.borrow().cells.iter().filter(|c| c.obstacle).count()
    }

    /// Passable neighbors of `p` as last built.
    pub fn neighbors(&self, p: Coord) -> Result<Vec<Coord>, GridError> {
        let buf = self.buf.borrow();
        let idx = buf.index(p).ok_or_else(|| self.out_of_bounds(p))?;
        Ok(buf.cells[idx].neighbors.clone())
    }

    /// Replace the neighbor list of `p`.
    pub fn set_neighbors(&self, p: Coord, neighbors: Vec<Coord>) -> Result<(), GridError> {
        let mut buf = self.buf.borrow_mut();
        let idx = buf.index(p).ok_or_else(|| self.out_of_bounds(p))?;
        buf.cells[idx].neighbors = neighbors;
        Ok(())
    }

    /// Row-major iterator over every coordinate in the grid.
    #[inline]
    pub fn positions(&self) -> RowMajor {
        RowMajor::new(self.rows, self.cols)
    }

    /// Row-major iterator over a snapshot of every cell.
    ///
    /// Call again to restart; later changes to the grid are not reflected in
    /// an iterator already created.
    pub fn iter(&self) -> GridIter {
        let buf = self.buf.borrow();
        GridIter {
            cells: buf.cells.clone(),
            pos: 0,
        }
    }
}

impl IntoIterator for &Grid {
    type Item = Cell;
    type IntoIter = GridIter;

    fn into_iter(self) -> GridIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over a snapshot of the cells of a [`Grid`], in row-major order.
pub struct GridIter {
    cells: Vec<Cell>,
    pos: usize,
}

impl Iterator for GridIter {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        let cell = self.cells.get(self.pos)?.clone();
        self.pos += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cells.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridIter {}

// ---------------------------------------------------------------------------
// RowMajor
// ---------------------------------------------------------------------------

/// Row-major iterator over the coordinates of a `rows × cols` rectangle
/// anchored at the origin.
#[derive(Clone, Debug)]
pub struct RowMajor {
    rows: i32,
    cols: i32,
    cur: Coord,
}

impl RowMajor {
    fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows,
            cols,
            cur: Coord::ZERO,
        }
    }

    #[inline]
    fn is_degenerate(&self) -> bool {
        self.rows <= 0 || self.cols <= 0
    }
}

impl Iterator for RowMajor {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if self.is_degenerate() || self.cur.row >= self.rows {
            return None;
        }
        let p = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.cols {
            self.cur.col = 0;
            self.cur.row += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.is_degenerate() || self.cur.row >= self.rows {
            return (0, Some(0));
        }
        let remaining_in_row = (self.cols - self.cur.col) as usize;
        let remaining_rows = (self.rows - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * self.cols as usize;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RowMajor {}
