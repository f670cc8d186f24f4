// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Topological location of a point relative to a geometry.

/// Where a point lies relative to a geometry: in its interior, on its
/// boundary, or in its exterior. The "unknown" state used while labels are
/// under construction is represented as `Option<Location>::None` upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Location {
    Interior = 0,
    Boundary = 1,
    Exterior = 2,
}

impl Location {
    /// Row/column index of this location in a DE-9IM matrix.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Single-character symbol used in debug output (`i`, `b`, `e`).
    pub fn symbol(self) -> char {
        match self {
            Location::Interior => 'i',
            Location::Boundary => 'b',
            Location::Exterior => 'e',
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Location::Interior => "Interior",
            Location::Boundary => "Boundary",
            Location::Exterior => "Exterior",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_indices() {
        assert_eq!(Location::Interior.index(), 0);
        assert_eq!(Location::Boundary.index(), 1);
        assert_eq!(Location::Exterior.index(), 2);
    }

    #[test]
    fn symbols() {
        assert_eq!(Location::Interior.symbol(), 'i');
        assert_eq!(Location::Boundary.symbol(), 'b');
        assert_eq!(Location::Exterior.symbol(), 'e');
    }
}
