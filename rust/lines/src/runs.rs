// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Run extraction: turning classified rings into boundary paths.
//!
//! Each ring is cut into maximal cyclic runs of arcs that share both a
//! classification and the pair of shapes on either side. A run may cross
//! the seam between the last and first stored positions; it is then kept
//! whole and listed starting at its first position after the seam break.
//!
//! Shared arcs are seen once from each side. An emitted set scoped to the
//! extraction pass drops the second sighting, so every arc lands in exactly
//! one path.

use arcmesh_topology::{ArcId, ArcRef};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::classify::{ArcClass, Classification};
use crate::usage::ArcUsageIndex;

/// One extracted boundary path.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryPath {
    /// Surviving arcs of the run, in ring traversal order.
    pub arcs: Vec<ArcRef>,
    pub classification: Classification,
    /// Shape the run was discovered in.
    pub shape: usize,
    /// Ring of `shape` the run was discovered in.
    pub ring: usize,
    /// Stored position of the run's first arc.
    pub start: usize,
}

impl BoundaryPath {
    /// The path as signed arc references.
    pub fn signed_arcs(&self) -> Vec<i64> {
        self.arcs.iter().map(|a| a.to_signed()).collect()
    }
}

/// Splits a cyclic key sequence into maximal runs of equal keys.
///
/// Returns `(start, len)` pairs. The first run begins at the first position
/// whose key differs from its cyclic predecessor, so a run wrapping past the
/// end is reported last with `start + len > keys.len()`. A sequence with a
/// single distinct key is one run starting at `0`.
pub fn cyclic_runs<K: PartialEq>(keys: &[K]) -> Vec<(usize, usize)> {
    let n = keys.len();
    if n == 0 {
        return Vec::new();
    }
    let Some(first) = (0..n).find(|&i| keys[i] != keys[(i + n - 1) % n]) else {
        return vec![(0, n)];
    };

    let mut runs = Vec::new();
    let mut start = first;
    let mut len = 1;
    for step in 1..n {
        let pos = (first + step) % n;
        if keys[pos] == keys[(pos + n - 1) % n] {
            len += 1;
        } else {
            runs.push((start, len));
            start = pos;
            len = 1;
        }
    }
    runs.push((start, len));
    runs
}

/// Walks the rings of an indexed layer and assembles boundary paths.
pub struct RunExtractor<'a> {
    index: &'a ArcUsageIndex,
    classes: &'a FxHashMap<ArcId, ArcClass>,
    emitted: FxHashSet<ArcId>,
}

impl<'a> RunExtractor<'a> {
    pub fn new(index: &'a ArcUsageIndex, classes: &'a FxHashMap<ArcId, ArcClass>) -> Self {
        Self {
            index,
            classes,
            emitted: FxHashSet::default(),
        }
    }

    /// Extracts all paths in discovery order: shape, then ring, then run.
    pub fn extract(mut self) -> Vec<BoundaryPath> {
        let mut paths = Vec::new();
        let mut dropped = 0usize;
        for shape in 0..self.index.shape_count() {
            for (ring_index, ring) in self.index.rings(shape).iter().enumerate() {
                let keys: Vec<Option<&ArcClass>> =
                    ring.iter().map(|a| self.classes.get(&a.id())).collect();

                for (start, len) in cyclic_runs(&keys) {
                    let arcs: Vec<ArcRef> = (start..start + len)
                        .map(|p| ring[p % ring.len()])
                        .filter(|a| self.emitted.insert(a.id()))
                        .collect();
                    if arcs.is_empty() {
                        dropped += 1;
                        continue;
                    }
                    let classification = keys[start]
                        .map(|c| c.classification.clone())
                        .unwrap_or_else(Classification::outer);
                    paths.push(BoundaryPath {
                        arcs,
                        classification,
                        shape,
                        ring: ring_index,
                        start,
                    });
                }
            }
        }
        tracing::debug!(
            paths = paths.len(),
            dropped_runs = dropped,
            emitted_arcs = self.emitted.len(),
            "Extracted boundary runs"
        );
        paths
    }
}
