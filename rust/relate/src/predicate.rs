// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Named spatial predicates.
//!
//! Each predicate validates its inputs, applies the envelope rejection it
//! admits, and otherwise evaluates the full intersection matrix. All
//! predicates use the OGC boundary node rule; use [`crate::relate_with`]
//! directly for other rules.

use planar_lite_geom::Geometry;

use crate::relate::relate;
use crate::Result;

/// True if the geometries share at least one point.
pub fn intersects(a: &Geometry, b: &Geometry) -> Result<bool> {
    a.validate()?;
    b.validate()?;
    if !a.envelope().intersects(&b.envelope()) {
        return Ok(false);
    }
    Ok(relate(a, b)?.is_intersects())
}

/// True if the geometries share no points.
pub fn disjoint(a: &Geometry, b: &Geometry) -> Result<bool> {
    Ok(!intersects(a, b)?)
}

/// True if the geometries touch: they intersect, but only at their
/// boundaries. Not defined (always false) for two point geometries.
pub fn touches(a: &Geometry, b: &Geometry) -> Result<bool> {
    a.validate()?;
    b.validate()?;
    if !a.envelope().intersects(&b.envelope()) {
        return Ok(false);
    }
    Ok(relate(a, b)?.is_touches(a.dimension(), b.dimension()))
}

/// True if the geometries cross: their interiors meet in a footprint of
/// lower dimension than at least one input.
pub fn crosses(a: &Geometry, b: &Geometry) -> Result<bool> {
    a.validate()?;
    b.validate()?;
    if !a.envelope().intersects(&b.envelope()) {
        return Ok(false);
    }
    Ok(relate(a, b)?.is_crosses(a.dimension(), b.dimension()))
}

/// True if `a` lies entirely inside `b` with interior contact.
pub fn within(a: &Geometry, b: &Geometry) -> Result<bool> {
    a.validate()?;
    b.validate()?;
    if !b.envelope().contains_envelope(&a.envelope()) {
        return Ok(false);
    }
    Ok(relate(a, b)?.is_within())
}

/// True if `b` lies entirely inside `a` with interior contact.
pub fn contains(a: &Geometry, b: &Geometry) -> Result<bool> {
    a.validate()?;
    b.validate()?;
    if !a.envelope().contains_envelope(&b.envelope()) {
        return Ok(false);
    }
    Ok(relate(a, b)?.is_contains())
}

/// True if the geometries overlap: same dimension, interiors intersect, and
/// each has interior points outside the other.
pub fn overlaps(a: &Geometry, b: &Geometry) -> Result<bool> {
    a.validate()?;
    b.validate()?;
    if !a.envelope().intersects(&b.envelope()) {
        return Ok(false);
    }
    Ok(relate(a, b)?.is_overlaps(a.dimension(), b.dimension()))
}

/// True if the geometries contain exactly the same point set.
pub fn equals(a: &Geometry, b: &Geometry) -> Result<bool> {
    a.validate()?;
    b.validate()?;
    if a.dimension() != b.dimension() || a.envelope() != b.envelope() {
        return Ok(false);
    }
    Ok(relate(a, b)?.is_equals(a.dimension(), b.dimension()))
}

/// True if every point of `b` lies in `a` (boundary contact counts).
pub fn covers(a: &Geometry, b: &Geometry) -> Result<bool> {
    a.validate()?;
    b.validate()?;
    if !a.envelope().contains_envelope(&b.envelope()) {
        return Ok(false);
    }
    Ok(relate(a, b)?.is_covers())
}

/// True if every point of `a` lies in `b`.
pub fn covered_by(a: &Geometry, b: &Geometry) -> Result<bool> {
    covers(b, a)
}

/// Evaluates an arbitrary 9-character DE-9IM pattern over `012TF*`.
pub fn relate_pattern(a: &Geometry, b: &Geometry, pattern: &str) -> Result<bool> {
    a.validate()?;
    b.validate()?;
    relate(a, b)?.matches(pattern)
}
