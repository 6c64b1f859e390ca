// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Assembling extracted paths into a polyline layer.

use std::cmp::Reverse;

use arcmesh_topology::{AttributeTable, GeometryType, Layer, Record};

use crate::classify::Classification;
use crate::runs::BoundaryPath;

/// Output field holding the classification rank.
pub const RANK_FIELD: &str = "RANK";
/// Output field holding the classification label.
pub const TYPE_FIELD: &str = "TYPE";

/// Attribute record written for each output path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryRecord {
    pub rank: u32,
    pub label: String,
}

impl From<&Classification> for BoundaryRecord {
    fn from(c: &Classification) -> Self {
        Self {
            rank: c.rank,
            label: c.label.as_str().to_string(),
        }
    }
}

impl From<BoundaryRecord> for Record {
    fn from(r: BoundaryRecord) -> Self {
        Record::new()
            .with(RANK_FIELD, i64::from(r.rank))
            .with(TYPE_FIELD, r.label)
    }
}

/// Sorts paths by rank, highest first. Equal ranks keep discovery order.
pub fn sort_paths(paths: &mut [BoundaryPath]) {
    paths.sort_by_key(|p| Reverse(p.classification.rank));
}

/// Collects sorted paths into an output layer.
pub struct LayerBuilder<'a> {
    source: &'a Layer,
    drop_outer: bool,
    with_attributes: bool,
}

impl<'a> LayerBuilder<'a> {
    pub fn new(source: &'a Layer) -> Self {
        Self {
            source,
            drop_outer: false,
            with_attributes: false,
        }
    }

    /// Skip rank-0 paths.
    pub fn drop_outer(mut self, yes: bool) -> Self {
        self.drop_outer = yes;
        self
    }

    /// Attach a `RANK`/`TYPE` table.
    pub fn with_attributes(mut self, yes: bool) -> Self {
        self.with_attributes = yes;
        self
    }

    /// Builds a polyline layer with one single-part shape per path.
    ///
    /// `paths` must already be sorted.
    pub fn build(&self, paths: Vec<BoundaryPath>) -> Layer {
        let kept: Vec<BoundaryPath> = paths
            .into_iter()
            .filter(|p| !(self.drop_outer && p.classification.is_outer()))
            .collect();

        let data = self.with_attributes.then(|| {
            AttributeTable::new(
                kept.iter()
                    .map(|p| BoundaryRecord::from(&p.classification).into())
                    .collect(),
            )
        });
        let shapes = kept.iter().map(|p| vec![p.signed_arcs()]).collect();

        Layer {
            name: self.source.name.clone(),
            geometry_type: Some(GeometryType::Polyline),
            shapes,
            data,
        }
    }
}
