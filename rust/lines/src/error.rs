// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for boundary extraction.

use arcmesh_topology::GeometryType;

/// Result type alias for boundary extraction.
pub type Result<T> = std::result::Result<T, LinesError>;

/// Errors that abort an extraction call. No partial output is produced.
#[derive(Debug, thiserror::Error)]
pub enum LinesError {
    /// The input layer is not a polygon layer.
    #[error("command requires a polygon layer, found {}", geometry_name(.found))]
    UnsupportedGeometry { found: Option<GeometryType> },

    /// A classification field is missing from the attribute schema.
    #[error("unknown field: {field}")]
    UnknownField { field: String },

    /// A ring references an arc outside the topology store.
    #[error(
        "shape {shape}, ring {ring}: arc reference {reference} is out of range ({arc_count} arcs)"
    )]
    InvalidReference {
        shape: usize,
        ring: usize,
        reference: i64,
        arc_count: usize,
    },

    /// Options could not be parsed.
    #[error("invalid options: {0}")]
    Options(String),

    #[error(transparent)]
    Topology(#[from] arcmesh_topology::Error),
}

fn geometry_name(found: &Option<GeometryType>) -> &'static str {
    found.map_or("no geometry", |t| t.as_str())
}
