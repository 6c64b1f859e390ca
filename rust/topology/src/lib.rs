// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Arcmesh Topology
//!
//! Shared-arc topology for polygon datasets.
//!
//! Every boundary polyline of a dataset is stored once in a
//! [`TopologyStore`]. Polygon rings are cyclic lists of signed references
//! into that store, so two polygons that touch reference the same arc from
//! opposite directions. This is the representation TopoJSON uses, and it is
//! what makes shared-boundary queries cheap: adjacency is arc identity.
//!
//! The crate also carries the minimal layer model those queries run over:
//! [`Layer`]s of shapes plus an optional parallel [`AttributeTable`].

pub mod attributes;
pub mod error;
pub mod keys;
pub mod layer;
pub mod serialization;
pub mod store;

pub use attributes::{AttributeSource, AttributeTable, Record, Value};
pub use error::{Error, Result};
pub use keys::{ArcId, ArcRef, Direction};
pub use layer::{GeometryType, Layer, Part, Shape};
pub use serialization::{DatasetSnapshot, StoreSnapshot};
pub use store::{ArcData, TopologyStore};
