// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Layers: ordered shapes built from signed arc references.

use serde::{Deserialize, Serialize};

use crate::attributes::{AttributeTable, Record};
use crate::error::{Error, Result};

/// A part of a shape: a ring (for polygons) or a path (for polylines),
/// written as signed arc references.
pub type Part = Vec<i64>;

/// A shape is a list of parts. An empty shape is a null geometry.
pub type Shape = Vec<Part>;

/// Geometry type tag of a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryType {
    Polygon,
    Polyline,
    Point,
}

impl GeometryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryType::Polygon => "polygon",
            GeometryType::Polyline => "polyline",
            GeometryType::Point => "point",
        }
    }
}

impl std::fmt::Display for GeometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named collection of shapes with an optional parallel attribute table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub geometry_type: Option<GeometryType>,
    #[serde(default)]
    pub shapes: Vec<Shape>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<AttributeTable>,
}

impl Layer {
    /// Creates an unnamed layer without attributes.
    pub fn new(geometry_type: GeometryType, shapes: Vec<Shape>) -> Self {
        Self {
            name: None,
            geometry_type: Some(geometry_type),
            shapes,
            data: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_data(mut self, data: AttributeTable) -> Self {
        self.data = Some(data);
        self
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Returns the attribute record for a shape, if the layer has one.
    pub fn record(&self, shape: usize) -> Option<&Record> {
        self.data.as_ref().and_then(|d| d.record(shape))
    }

    /// Serializes the layer to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Deserializes a layer from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))
    }
}
