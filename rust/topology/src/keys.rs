// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arc identity and directed arc references.
//!
//! Shapes refer to arcs with signed integers: `i >= 0` means "arc `i`,
//! forward" and a negative value `v` means "arc `!v` (i.e. `-(v + 1)`),
//! reversed". That encoding is only understood at the layer boundary;
//! everything inside the crate works with [`ArcRef`].

use serde::{Deserialize, Serialize};

/// Absolute identifier of an arc inside a [`TopologyStore`](crate::TopologyStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArcId(pub usize);

impl ArcId {
    /// Returns the raw index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ArcId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "arc {}", self.0)
    }
}

impl From<usize> for ArcId {
    fn from(i: usize) -> Self {
        ArcId(i)
    }
}

/// Traversal direction of an arc inside a ring or path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// First point to last point.
    Forward,
    /// Last point to first point.
    Reverse,
}

/// A directed reference to an arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArcRef {
    Forward(ArcId),
    Reverse(ArcId),
}

impl ArcRef {
    /// Decodes a signed arc reference.
    pub fn from_signed(v: i64) -> Self {
        if v >= 0 {
            ArcRef::Forward(ArcId(v as usize))
        } else {
            // !v == -(v + 1) for two's complement integers
            ArcRef::Reverse(ArcId(!v as usize))
        }
    }

    /// Encodes this reference back into the signed-integer form.
    pub fn to_signed(self) -> i64 {
        match self {
            ArcRef::Forward(id) => id.0 as i64,
            ArcRef::Reverse(id) => !(id.0 as i64),
        }
    }

    /// Returns the absolute arc id, ignoring direction.
    pub fn id(self) -> ArcId {
        match self {
            ArcRef::Forward(id) | ArcRef::Reverse(id) => id,
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            ArcRef::Forward(_) => Direction::Forward,
            ArcRef::Reverse(_) => Direction::Reverse,
        }
    }

    /// Returns the same arc traversed the other way.
    pub fn reversed(self) -> Self {
        match self {
            ArcRef::Forward(id) => ArcRef::Reverse(id),
            ArcRef::Reverse(id) => ArcRef::Forward(id),
        }
    }
}
