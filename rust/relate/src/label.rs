// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Topology labels.
//!
//! Every graph edge and node carries a [`Label`]: per input geometry (exactly
//! two in a relate operation, index 0 = "A" and 1 = "B"), the location of
//! that component relative to the geometry. Line labels record only the
//! location *on* the component; area labels additionally record the location
//! on the left and right sides of the directed edge. Labels are mutable
//! during graph construction and are only read once merged.

use planar_lite_geom::Location;

/// Position relative to a directed edge: on it, or on one of its sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    On = 0,
    Left = 1,
    Right = 2,
}

impl Position {
    /// The opposite side. `On` is its own opposite.
    pub fn opposite(self) -> Self {
        match self {
            Position::On => Position::On,
            Position::Left => Position::Right,
            Position::Right => Position::Left,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// The location of a single graph component relative to one input geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopologyLocation {
    slots: [Option<Location>; 3],
    area: bool,
}

impl TopologyLocation {
    /// A line location (On slot only), initially unknown.
    pub fn line() -> Self {
        Self {
            slots: [None; 3],
            area: false,
        }
    }

    /// An area location (On/Left/Right slots), initially unknown.
    pub fn area() -> Self {
        Self {
            slots: [None; 3],
            area: true,
        }
    }

    /// Returns `true` if this location tracks side positions.
    pub fn is_area(&self) -> bool {
        self.area
    }

    /// Returns `true` if this location tracks only the On position.
    pub fn is_line(&self) -> bool {
        !self.area
    }

    /// The location at a position, if known. Side positions of a line
    /// location are always unknown.
    pub fn get(&self, pos: Position) -> Option<Location> {
        if !self.area && pos != Position::On {
            return None;
        }
        self.slots[pos.index()]
    }

    /// Sets the location at a position. Setting a side promotes a line
    /// location to an area location.
    pub fn set(&mut self, pos: Position, loc: Location) {
        if pos != Position::On {
            self.area = true;
        }
        self.slots[pos.index()] = Some(loc);
    }

    /// Sets every tracked position to `loc`.
    pub fn set_all(&mut self, loc: Location) {
        self.slots[0] = Some(loc);
        if self.area {
            self.slots[1] = Some(loc);
            self.slots[2] = Some(loc);
        }
    }

    /// Sets every tracked position that is still unknown to `loc`.
    pub fn set_all_if_none(&mut self, loc: Location) {
        let n = if self.area { 3 } else { 1 };
        for slot in self.slots.iter_mut().take(n) {
            if slot.is_none() {
                *slot = Some(loc);
            }
        }
    }

    /// Returns `true` if no position is known.
    pub fn is_none(&self) -> bool {
        let n = if self.area { 3 } else { 1 };
        self.slots.iter().take(n).all(Option::is_none)
    }

    /// Returns `true` if at least one tracked position is unknown.
    pub fn is_any_none(&self) -> bool {
        let n = if self.area { 3 } else { 1 };
        self.slots.iter().take(n).any(Option::is_none)
    }

    /// Swaps the side locations. Used when an edge end points against its
    /// parent edge's direction.
    pub fn flip(&mut self) {
        if self.area {
            self.slots.swap(1, 2);
        }
    }

    /// Merges locations from `other`, filling only unknown slots. If `other`
    /// is an area location, this one is promoted to area first.
    pub fn merge(&mut self, other: &TopologyLocation) {
        if other.area && !self.area {
            self.area = true;
        }
        let n = if self.area { 3 } else { 1 };
        for i in 0..n {
            if self.slots[i].is_none() {
                self.slots[i] = other.slots[i];
            }
        }
    }
}

/// Per-geometry topology locations for one graph component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    elt: [TopologyLocation; 2],
}

impl Label {
    /// A label with two unknown line locations.
    pub fn new_line() -> Self {
        Self {
            elt: [TopologyLocation::line(), TopologyLocation::line()],
        }
    }

    /// A label with two unknown area locations.
    pub fn new_area() -> Self {
        Self {
            elt: [TopologyLocation::area(), TopologyLocation::area()],
        }
    }

    /// A line label with the On location of one geometry known.
    pub fn line_for(geom_index: usize, on: Location) -> Self {
        let mut label = Self::new_line();
        label.elt[geom_index].set(Position::On, on);
        label
    }

    /// An area label with all locations of one geometry known.
    pub fn area_for(geom_index: usize, on: Location, left: Location, right: Location) -> Self {
        let mut label = Self::new_area();
        label.elt[geom_index].set(Position::On, on);
        label.elt[geom_index].set(Position::Left, left);
        label.elt[geom_index].set(Position::Right, right);
        label
    }

    /// The location for a geometry at a position, if known.
    pub fn location(&self, geom_index: usize, pos: Position) -> Option<Location> {
        self.elt[geom_index].get(pos)
    }

    /// The On location for a geometry, if known.
    pub fn location_on(&self, geom_index: usize) -> Option<Location> {
        self.elt[geom_index].get(Position::On)
    }

    /// Sets the location for a geometry at a position.
    pub fn set_location(&mut self, geom_index: usize, pos: Position, loc: Location) {
        self.elt[geom_index].set(pos, loc);
    }

    /// Sets the On location for a geometry.
    pub fn set_location_on(&mut self, geom_index: usize, loc: Location) {
        self.elt[geom_index].set(Position::On, loc);
    }

    /// Sets every tracked position of one geometry.
    pub fn set_all_locations(&mut self, geom_index: usize, loc: Location) {
        self.elt[geom_index].set_all(loc);
    }

    /// Sets every still-unknown position of one geometry.
    pub fn set_all_locations_if_none(&mut self, geom_index: usize, loc: Location) {
        self.elt[geom_index].set_all_if_none(loc);
    }

    /// Swaps the side locations of both geometries.
    pub fn flip(&mut self) {
        self.elt[0].flip();
        self.elt[1].flip();
    }

    /// Merges another label into this one, filling unknown slots only;
    /// known locations are never downgraded.
    pub fn merge(&mut self, other: &Label) {
        self.elt[0].merge(&other.elt[0]);
        self.elt[1].merge(&other.elt[1]);
    }

    /// Returns `true` if either geometry's location is an area location.
    pub fn is_area(&self) -> bool {
        self.elt[0].is_area() || self.elt[1].is_area()
    }

    /// Returns `true` if the given geometry's location is an area location.
    pub fn is_area_for(&self, geom_index: usize) -> bool {
        self.elt[geom_index].is_area()
    }

    /// Returns `true` if the given geometry's location is a line location.
    pub fn is_line_for(&self, geom_index: usize) -> bool {
        self.elt[geom_index].is_line()
    }

    /// Returns `true` if nothing is known about the given geometry.
    pub fn is_none_for(&self, geom_index: usize) -> bool {
        self.elt[geom_index].is_none()
    }

    /// Returns `true` if any tracked position of the given geometry is
    /// unknown.
    pub fn is_any_none_for(&self, geom_index: usize) -> bool {
        self.elt[geom_index].is_any_none()
    }

    /// Number of geometries this label has any information for.
    pub fn geometry_count(&self) -> usize {
        self.elt.iter().filter(|e| !e.is_none()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_label_has_no_sides() {
        let label = Label::line_for(0, Location::Interior);
        assert_eq!(label.location_on(0), Some(Location::Interior));
        assert_eq!(label.location(0, Position::Left), None);
        assert!(label.is_line_for(0));
        assert_eq!(label.geometry_count(), 1);
    }

    #[test]
    fn area_label_sides() {
        let label = Label::area_for(1, Location::Boundary, Location::Interior, Location::Exterior);
        assert_eq!(label.location(1, Position::Left), Some(Location::Interior));
        assert_eq!(label.location(1, Position::Right), Some(Location::Exterior));
        assert!(label.is_area());
        assert!(label.is_none_for(0));
    }

    #[test]
    fn flip_swaps_sides() {
        let mut label =
            Label::area_for(0, Location::Boundary, Location::Interior, Location::Exterior);
        label.flip();
        assert_eq!(label.location(0, Position::Left), Some(Location::Exterior));
        assert_eq!(label.location(0, Position::Right), Some(Location::Interior));
        assert_eq!(label.location_on(0), Some(Location::Boundary));
    }

    #[test]
    fn merge_never_downgrades() {
        let mut a = Label::line_for(0, Location::Boundary);
        let b = Label::line_for(0, Location::Interior);
        a.merge(&b);
        assert_eq!(a.location_on(0), Some(Location::Boundary));
    }

    #[test]
    fn merge_fills_unknown_geometry() {
        let mut a = Label::line_for(0, Location::Interior);
        let b = Label::line_for(1, Location::Boundary);
        a.merge(&b);
        assert_eq!(a.location_on(1), Some(Location::Boundary));
        assert_eq!(a.geometry_count(), 2);
    }

    #[test]
    fn merge_promotes_line_to_area() {
        let mut a = Label::line_for(0, Location::Interior);
        let b = Label::area_for(0, Location::Boundary, Location::Interior, Location::Exterior);
        a.merge(&b);
        assert!(a.is_area_for(0));
        // On was already known and is kept.
        assert_eq!(a.location_on(0), Some(Location::Interior));
        assert_eq!(a.location(0, Position::Left), Some(Location::Interior));
    }

    #[test]
    fn set_all_if_none_respects_known() {
        let mut loc = TopologyLocation::area();
        loc.set(Position::Left, Location::Interior);
        loc.set_all_if_none(Location::Exterior);
        assert_eq!(loc.get(Position::Left), Some(Location::Interior));
        assert_eq!(loc.get(Position::On), Some(Location::Exterior));
        assert_eq!(loc.get(Position::Right), Some(Location::Exterior));
    }
}
