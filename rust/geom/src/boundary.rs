// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Boundary node rules.
//!
//! A boundary node rule decides whether a shared endpoint of linear
//! geometries counts as part of the geometry's boundary, based on how many
//! line ends meet at that point. The choice affects touches/crosses semantics
//! at line endpoints; it is selected once per relate invocation and never
//! changes mid-computation.

/// Policy classifying a point where `degree` line endpoints meet as
/// boundary or interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum BoundaryNodeRule {
    /// SFS / OGC rule: the point is on the boundary iff an odd number of
    /// line ends meet there.
    #[default]
    Mod2 = 0,
    /// Every line endpoint is a boundary point, regardless of degree.
    EndPoint = 1,
    /// Boundary iff more than one line end meets at the point.
    MultivalentEndPoint = 2,
    /// Boundary iff exactly one line end meets at the point.
    MonovalentEndPoint = 3,
}

impl BoundaryNodeRule {
    /// The OGC standard rule is the mod-2 rule.
    pub const OGC: Self = Self::Mod2;

    /// Classifies a point where `degree` line endpoints coincide.
    pub fn is_in_boundary(self, degree: u32) -> bool {
        match self {
            Self::Mod2 => degree % 2 == 1,
            Self::EndPoint => degree > 0,
            Self::MultivalentEndPoint => degree > 1,
            Self::MonovalentEndPoint => degree == 1,
        }
    }

    /// Looks a rule up by its wire-level selector code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Mod2),
            1 => Some(Self::EndPoint),
            2 => Some(Self::MultivalentEndPoint),
            3 => Some(Self::MonovalentEndPoint),
            _ => None,
        }
    }
}
