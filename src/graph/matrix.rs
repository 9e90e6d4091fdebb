//! Dense square matrices backing the adjacency and weight tables.
//!
//! Both tables are allocated once at the graph's capacity. Only the
//! leading `size x size` block is meaningful; cells beyond it are reset
//! whenever a node slot is (re)claimed.

use std::ops::{Index, IndexMut};

/// A fixed-dimension square matrix stored row-major in a single buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T> {
    dim: usize,
    cells: Vec<T>,
}

impl<T: Copy> SquareMatrix<T> {
    /// Creates a `dim x dim` matrix with every cell set to `fill`.
    ///
    /// # Panics
    ///
    /// Panics if `dim * dim` overflows `usize`.
    pub fn new(dim: usize, fill: T) -> Self {
        let Some(len) = dim.checked_mul(dim) else {
            panic!("matrix dimension {} overflows", dim);
        };
        Self {
            dim,
            cells: vec![fill; len],
        }
    }

    /// Returns the allocated dimension (the graph capacity).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns a copy of cell `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.cells[row * self.dim + col]
    }

    /// Overwrites cell `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.cells[row * self.dim + col] = value;
    }

    /// Returns row `row` restricted to the first `len` columns.
    pub fn row(&self, row: usize, len: usize) -> &[T] {
        let start = row * self.dim;
        &self.cells[start..start + len]
    }

    /// Resets row and column `index` to `value` across the first `len` slots.
    ///
    /// Used when a node slot is claimed, so stale cells left behind by a
    /// previous occupant never leak into the new node.
    pub fn clear_slot(&mut self, index: usize, len: usize, value: T) {
        for i in 0..len {
            self.set(index, i, value);
            self.set(i, index, value);
        }
    }

    /// Moves row and column `last` into slot `removed`.
    ///
    /// `last` is the highest live index; after the move the caller shrinks
    /// the live size by one, which logically truncates the trailing slot.
    /// The diagonal cell is carried over so a self-loop on the moved node
    /// survives.
    pub fn swap_compact(&mut self, removed: usize, last: usize) {
        if removed == last {
            return;
        }
        for j in 0..last {
            if j == removed {
                continue;
            }
            self.set(removed, j, self.get(last, j));
            self.set(j, removed, self.get(j, last));
        }
        self.set(removed, removed, self.get(last, last));
    }
}

impl<T: Copy> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.cells[row * self.dim + col]
    }
}

impl<T: Copy> IndexMut<(usize, usize)> for SquareMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.cells[row * self.dim + col]
    }
}
