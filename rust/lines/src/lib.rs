// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Arcmesh Lines
//!
//! Boundary extraction for shared-arc polygon meshes.
//!
//! Two entry points:
//!
//! - [`innerlines`] returns the boundaries shared by two polygons.
//! - [`lines`] returns every boundary, shared and outer, with a `RANK` and
//!   `TYPE` attribute derived from an ordered list of attribute fields.
//!
//! Both run the same pipeline: index arc usage, classify each arc from the
//! polygons on either side, cut rings into cyclic runs of like arcs, emit
//! each arc once, then sort by rank.
//!
//! ```
//! use arcmesh_lines::{innerlines, lines};
//! use arcmesh_topology::{AttributeTable, GeometryType, Layer, Record, TopologyStore};
//!
//! let store = TopologyStore::from_coordinates(vec![
//!     vec![[3.0, 1.0], [1.0, 1.0], [2.0, 3.0]],
//!     vec![[2.0, 3.0], [3.0, 1.0]],
//!     vec![[2.0, 3.0], [4.0, 3.0], [3.0, 1.0]],
//! ])
//! .unwrap();
//! let layer = Layer::new(GeometryType::Polygon, vec![vec![vec![0, 1]], vec![vec![-2, 2]]])
//!     .with_data(AttributeTable::new(vec![
//!         Record::new().with("foo", "a"),
//!         Record::new().with("foo", "b"),
//!     ]));
//!
//! assert_eq!(innerlines(&layer, &store).unwrap().shapes, vec![vec![vec![1]]]);
//! assert_eq!(lines(&layer, &store, ["foo"]).unwrap().shape_count(), 3);
//! ```

pub mod builder;
pub mod classify;
pub mod error;
pub mod options;
pub mod runs;
pub mod usage;

use arcmesh_topology::{GeometryType, Layer, TopologyStore};

pub use builder::{BoundaryRecord, LayerBuilder, RANK_FIELD, TYPE_FIELD};
pub use classify::{ArcClass, BoundaryClassifier, Classification, Label, Sides};
pub use error::{LinesError, Result};
pub use options::{FieldSpec, LinesOptions};
pub use runs::{BoundaryPath, RunExtractor};
pub use usage::{ArcUsageIndex, Occurrence};

/// Extracts the boundaries shared by two polygon sides.
///
/// The result is a polyline layer without attributes, named like the input.
pub fn innerlines(layer: &Layer, topology: &TopologyStore) -> Result<Layer> {
    let paths = extract_paths(layer, topology, &[])?;
    let out = LayerBuilder::new(layer).drop_outer(true).build(paths);
    tracing::debug!(shapes = out.shape_count(), "innerlines complete");
    Ok(out)
}

/// Extracts every boundary, classified by `options` fields.
///
/// `options` may be a [`LinesOptions`], a [`FieldSpec`], or a plain list
/// of field names.
pub fn lines(
    layer: &Layer,
    topology: &TopologyStore,
    options: impl Into<LinesOptions>,
) -> Result<Layer> {
    let options = options.into();
    let paths = extract_paths(layer, topology, &options.fields)?;
    let out = LayerBuilder::new(layer).with_attributes(true).build(paths);
    tracing::debug!(shapes = out.shape_count(), "lines complete");
    Ok(out)
}

/// Runs the extraction pipeline and returns paths sorted by rank,
/// highest first, ties in discovery order.
pub fn extract_paths(
    layer: &Layer,
    topology: &TopologyStore,
    fields: &[String],
) -> Result<Vec<BoundaryPath>> {
    if layer.geometry_type != Some(GeometryType::Polygon) {
        return Err(LinesError::UnsupportedGeometry {
            found: layer.geometry_type,
        });
    }
    let classifier = BoundaryClassifier::new(layer, fields)?;

    let index = ArcUsageIndex::build(layer, topology)?;
    tracing::debug!(
        shapes = index.shape_count(),
        arcs = index.arc_count(),
        shared = index.shared_arc_count(),
        outer = index.outer_arc_count(),
        "Built arc usage index"
    );
    let over_shared = index.over_shared_arcs();
    if !over_shared.is_empty() {
        tracing::warn!(
            count = over_shared.len(),
            first = over_shared[0].index(),
            "Arcs referenced more than twice; classifying by their first two occurrences"
        );
    }

    let classes = classifier.classify_all(&index);
    let mut paths = RunExtractor::new(&index, &classes).extract();
    builder::sort_paths(&mut paths);
    Ok(paths)
}
