// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for topology operations.

use crate::keys::ArcId;

/// Result type alias for topology operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during topology operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A signed arc reference points outside the arc pool.
    #[error("invalid arc reference {reference}: store holds {arc_count} arcs")]
    InvalidArcReference { reference: i64, arc_count: usize },

    /// An absolute arc id is not present in the store.
    #[error("{0} not found in topology store")]
    UnknownArc(ArcId),

    /// An arc must have at least two points.
    #[error("{0} has fewer than two points")]
    DegenerateArc(ArcId),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}
