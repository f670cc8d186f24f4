// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The Dimensionally Extended 9-Intersection Model matrix.
//!
//! A 3x3 table indexed by {Interior, Boundary, Exterior} of geometry A
//! against the same of geometry B. Each cell holds the dimension of that
//! intersection: -1 (empty), 0 (point), 1 (line) or 2 (area). During
//! computation cells only ever increase (monotonic refinement via
//! [`IntersectionMatrix::set_at_least`]); once the engine finalizes the
//! matrix it is read-only.

use std::fmt;

use planar_lite_geom::geometry::{DIM_AREA, DIM_FALSE, DIM_LINE, DIM_POINT};
use planar_lite_geom::Location;

use crate::error::{Error, Result};

/// A DE-9IM matrix of intersection dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntersectionMatrix {
    cells: [[i8; 3]; 3],
}

/// Tests one matrix cell against one pattern character: `*` matches
/// anything, `T` any non-empty dimension, `F` only the empty dimension, and
/// a digit exactly that dimension.
pub fn matches_dimension(dim: i8, pattern: char) -> bool {
    match pattern {
        '*' => true,
        'T' | 't' => dim >= 0,
        'F' | 'f' => dim == DIM_FALSE,
        '0' => dim == DIM_POINT,
        '1' => dim == DIM_LINE,
        '2' => dim == DIM_AREA,
        _ => false,
    }
}

fn is_pattern_char(c: char) -> bool {
    matches!(c, '*' | 'T' | 't' | 'F' | 'f' | '0' | '1' | '2')
}

impl IntersectionMatrix {
    /// A matrix with every cell empty.
    pub fn new() -> Self {
        Self {
            cells: [[DIM_FALSE; 3]; 3],
        }
    }

    /// Parses a matrix from a 9-character dimension string over `012F`
    /// (row-major). `T` is not allowed here: a concrete matrix has concrete
    /// dimensions.
    pub fn from_string(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 9 || !chars.iter().all(|&c| matches!(c, '0' | '1' | '2' | 'F' | 'f')) {
            return Err(Error::InvalidPattern(s.to_string()));
        }
        let mut m = Self::new();
        for (i, &c) in chars.iter().enumerate() {
            m.cells[i / 3][i % 3] = match c {
                '0' => DIM_POINT,
                '1' => DIM_LINE,
                '2' => DIM_AREA,
                _ => DIM_FALSE,
            };
        }
        Ok(m)
    }

    /// The dimension of the intersection of location `a` of geometry A with
    /// location `b` of geometry B.
    pub fn get(&self, a: Location, b: Location) -> i8 {
        self.cells[a.index()][b.index()]
    }

    /// Sets one cell.
    pub fn set(&mut self, a: Location, b: Location, dim: i8) {
        self.cells[a.index()][b.index()] = dim;
    }

    /// Raises one cell to at least `dim`; never lowers it.
    pub fn set_at_least(&mut self, a: Location, b: Location, dim: i8) {
        let cell = &mut self.cells[a.index()][b.index()];
        if *cell < dim {
            *cell = dim;
        }
    }

    /// Raises a cell if both locations are known; a contribution with an
    /// unknown location is silently skipped.
    pub fn set_at_least_if_valid(
        &mut self,
        a: Option<Location>,
        b: Option<Location>,
        dim: i8,
    ) {
        if let (Some(a), Some(b)) = (a, b) {
            self.set_at_least(a, b, dim);
        }
    }

    /// Raises cells according to a 9-character pattern where digits are
    /// minimum dimensions and any other character leaves the cell alone.
    pub fn set_at_least_pattern(&mut self, pattern: &str) {
        debug_assert_eq!(pattern.len(), 9);
        for (i, c) in pattern.chars().enumerate() {
            if let Some(d) = c.to_digit(10) {
                let cell = &mut self.cells[i / 3][i % 3];
                if *cell < d as i8 {
                    *cell = d as i8;
                }
            }
        }
    }

    /// Tests the matrix against a 9-character DE-9IM pattern over `012TF*`.
    pub fn matches(&self, pattern: &str) -> Result<bool> {
        let chars: Vec<char> = pattern.chars().collect();
        if chars.len() != 9 || !chars.iter().all(|&c| is_pattern_char(c)) {
            return Err(Error::InvalidPattern(pattern.to_string()));
        }
        for (i, &c) in chars.iter().enumerate() {
            if !matches_dimension(self.cells[i / 3][i % 3], c) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// The matrix for the operands swapped: rows and columns exchanged.
    pub fn transposed(&self) -> Self {
        let mut out = Self::new();
        for r in 0..3 {
            for c in 0..3 {
                out.cells[c][r] = self.cells[r][c];
            }
        }
        out
    }

    fn cell_true(&self, r: usize, c: usize) -> bool {
        self.cells[r][c] >= 0
    }

    /// The interiors and boundaries of the two geometries share no points.
    pub fn is_disjoint(&self) -> bool {
        self.cells[0][0] == DIM_FALSE
            && self.cells[0][1] == DIM_FALSE
            && self.cells[1][0] == DIM_FALSE
            && self.cells[1][1] == DIM_FALSE
    }

    /// The geometries share at least one point.
    pub fn is_intersects(&self) -> bool {
        !self.is_disjoint()
    }

    /// The geometries touch: boundaries meet but interiors never do. Not
    /// defined for two points.
    pub fn is_touches(&self, dim_a: i8, dim_b: i8) -> bool {
        if dim_a == DIM_POINT && dim_b == DIM_POINT {
            return false;
        }
        self.cells[0][0] == DIM_FALSE
            && (self.cell_true(0, 1) || self.cell_true(1, 0) || self.cell_true(1, 1))
    }

    /// The geometries cross: interiors intersect with a lower-dimensional
    /// footprint than either input.
    pub fn is_crosses(&self, dim_a: i8, dim_b: i8) -> bool {
        match (dim_a, dim_b) {
            (DIM_POINT, DIM_LINE) | (DIM_POINT, DIM_AREA) | (DIM_LINE, DIM_AREA) => {
                self.cell_true(0, 0) && self.cell_true(0, 2)
            }
            (DIM_LINE, DIM_POINT) | (DIM_AREA, DIM_POINT) | (DIM_AREA, DIM_LINE) => {
                self.cell_true(0, 0) && self.cell_true(2, 0)
            }
            (DIM_LINE, DIM_LINE) => self.cells[0][0] == DIM_POINT,
            _ => false,
        }
    }

    /// A lies in B: interiors intersect and no part of A is exterior to B.
    pub fn is_within(&self) -> bool {
        self.cell_true(0, 0) && self.cells[0][2] == DIM_FALSE && self.cells[1][2] == DIM_FALSE
    }

    /// B lies in A.
    pub fn is_contains(&self) -> bool {
        self.cell_true(0, 0) && self.cells[2][0] == DIM_FALSE && self.cells[2][1] == DIM_FALSE
    }

    /// The geometries overlap: interiors intersect, and each has interior
    /// points the other lacks. Only defined for equal dimensions.
    pub fn is_overlaps(&self, dim_a: i8, dim_b: i8) -> bool {
        match (dim_a, dim_b) {
            (DIM_POINT, DIM_POINT) | (DIM_AREA, DIM_AREA) => {
                self.cell_true(0, 0) && self.cell_true(0, 2) && self.cell_true(2, 0)
            }
            (DIM_LINE, DIM_LINE) => {
                self.cells[0][0] == DIM_LINE && self.cell_true(0, 2) && self.cell_true(2, 0)
            }
            _ => false,
        }
    }

    /// The geometries have identical point sets.
    pub fn is_equals(&self, dim_a: i8, dim_b: i8) -> bool {
        dim_a == dim_b
            && self.cell_true(0, 0)
            && self.cells[0][2] == DIM_FALSE
            && self.cells[1][2] == DIM_FALSE
            && self.cells[2][0] == DIM_FALSE
            && self.cells[2][1] == DIM_FALSE
    }

    /// Every point of B lies in A (boundary contact allowed).
    pub fn is_covers(&self) -> bool {
        let any = self.cell_true(0, 0)
            || self.cell_true(0, 1)
            || self.cell_true(1, 0)
            || self.cell_true(1, 1);
        any && self.cells[2][0] == DIM_FALSE && self.cells[2][1] == DIM_FALSE
    }

    /// Every point of A lies in B.
    pub fn is_covered_by(&self) -> bool {
        let any = self.cell_true(0, 0)
            || self.cell_true(0, 1)
            || self.cell_true(1, 0)
            || self.cell_true(1, 1);
        any && self.cells[0][2] == DIM_FALSE && self.cells[1][2] == DIM_FALSE
    }
}

impl Default for IntersectionMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for IntersectionMatrix {
    /// Renders the row-major 9-character DE-9IM string over `012F`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for &d in row {
                let c = match d {
                    DIM_POINT => '0',
                    DIM_LINE => '1',
                    DIM_AREA => '2',
                    _ => 'F',
                };
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
