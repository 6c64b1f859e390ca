// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON serialization for topology stores.
//!
//! Arcs are written as arrays of `[x, y]` pairs in id order, which is the
//! shape of the `arcs` member of a TopoJSON document (before delta
//! encoding). Arc ids are positional, so a round trip preserves them.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::layer::Layer;
use crate::store::TopologyStore;

/// Serializable representation of a topology store.
#[derive(Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreSnapshot {
    pub arcs: Vec<Vec<[f64; 2]>>,
}

/// A topology store together with the layers that reference it.
#[derive(Debug, Serialize, Deserialize)]
pub struct DatasetSnapshot {
    pub arcs: StoreSnapshot,
    #[serde(default)]
    pub layers: Vec<Layer>,
}

impl TopologyStore {
    /// Serializes the store to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.to_snapshot()).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Deserializes a store from JSON produced by [`TopologyStore::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: StoreSnapshot =
            serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))?;
        Self::from_snapshot(snapshot)
    }

    pub fn to_snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            arcs: self
                .arcs
                .iter()
                .map(|a| a.points.iter().map(|p| [p.x, p.y]).collect())
                .collect(),
        }
    }

    pub fn from_snapshot(snapshot: StoreSnapshot) -> Result<Self> {
        TopologyStore::from_coordinates(snapshot.arcs)
    }
}

impl DatasetSnapshot {
    /// Parses a dataset document: `{"arcs": [...], "layers": [...]}`.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Splits the snapshot into a live store and its layers.
    pub fn into_parts(self) -> Result<(TopologyStore, Vec<Layer>)> {
        Ok((TopologyStore::from_snapshot(self.arcs)?, self.layers))
    }
}
