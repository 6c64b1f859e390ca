// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arc usage index: which rings of which shapes reference each arc.
//!
//! The index is the upward adjacency of a polygon layer (arc → rings), built
//! once per extraction call. It also keeps every ring in resolved form so
//! later passes never touch signed integers again.

use arcmesh_topology::{ArcId, ArcRef, Direction, Error as TopologyError, Layer, TopologyStore};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::error::{LinesError, Result};

/// One place where a ring references an arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    pub shape: usize,
    pub ring: usize,
    pub position: usize,
    pub direction: Direction,
}

/// Occurrence lists in discovery order, keyed by absolute arc id.
#[derive(Debug, Default)]
pub struct ArcUsageIndex {
    occurrences: FxHashMap<ArcId, SmallVec<[Occurrence; 2]>>,
    rings: Vec<Vec<Vec<ArcRef>>>,
}

impl ArcUsageIndex {
    /// Indexes every ring of `layer` against `topology`.
    ///
    /// Fails on the first reference outside the store, naming the shape and
    /// ring that hold it.
    pub fn build(layer: &Layer, topology: &TopologyStore) -> Result<Self> {
        let mut occurrences: FxHashMap<ArcId, SmallVec<[Occurrence; 2]>> = FxHashMap::default();
        let mut rings = Vec::with_capacity(layer.shapes.len());

        for (shape, parts) in layer.shapes.iter().enumerate() {
            let mut resolved_parts = Vec::with_capacity(parts.len());
            for (ring, part) in parts.iter().enumerate() {
                let mut resolved = Vec::with_capacity(part.len());
                for (position, &reference) in part.iter().enumerate() {
                    let arc = topology.resolve(reference).map_err(|e| match e {
                        TopologyError::InvalidArcReference {
                            reference,
                            arc_count,
                        } => LinesError::InvalidReference {
                            shape,
                            ring,
                            reference,
                            arc_count,
                        },
                        other => LinesError::Topology(other),
                    })?;
                    occurrences.entry(arc.id()).or_default().push(Occurrence {
                        shape,
                        ring,
                        position,
                        direction: arc.direction(),
                    });
                    resolved.push(arc);
                }
                resolved_parts.push(resolved);
            }
            rings.push(resolved_parts);
        }

        Ok(Self { occurrences, rings })
    }

    /// All occurrences of an arc, ordered by (shape, ring, position).
    pub fn occurrences_of(&self, arc: ArcId) -> &[Occurrence] {
        self.occurrences.get(&arc).map(|o| o.as_slice()).unwrap_or(&[])
    }

    /// Owning shape of each occurrence. A shape that uses the arc twice
    /// appears twice.
    pub fn shapes_of(&self, arc: ArcId) -> SmallVec<[usize; 2]> {
        self.occurrences_of(arc).iter().map(|o| o.shape).collect()
    }

    /// Resolved rings of one shape, in stored order.
    pub fn rings(&self, shape: usize) -> &[Vec<ArcRef>] {
        self.rings.get(shape).map(|r| r.as_slice()).unwrap_or(&[])
    }

    pub fn shape_count(&self) -> usize {
        self.rings.len()
    }

    /// Number of distinct arcs referenced by the layer.
    pub fn arc_count(&self) -> usize {
        self.occurrences.len()
    }

    /// Iterates over referenced arcs with their occurrences, in no
    /// particular order.
    pub fn iter(&self) -> impl Iterator<Item = (ArcId, &[Occurrence])> {
        self.occurrences.iter().map(|(&id, o)| (id, o.as_slice()))
    }

    /// Arcs with two or more occurrences.
    pub fn shared_arc_count(&self) -> usize {
        self.occurrences.values().filter(|o| o.len() >= 2).count()
    }

    /// Arcs with a single occurrence.
    pub fn outer_arc_count(&self) -> usize {
        self.occurrences.values().filter(|o| o.len() == 1).count()
    }

    /// Arcs with more than two occurrences, sorted by id.
    pub fn over_shared_arcs(&self) -> Vec<ArcId> {
        let mut ids: Vec<ArcId> = self
            .occurrences
            .iter()
            .filter(|(_, o)| o.len() > 2)
            .map(|(&id, _)| id)
            .collect();
        ids.sort_unstable();
        ids
    }
}
