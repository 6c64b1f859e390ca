// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The shared arc pool underlying every polygon shape of a dataset.
//!
//! A [`TopologyStore`] owns each boundary polyline exactly once. Rings never
//! copy coordinates; they list signed references into the pool, so two
//! polygons that touch point at the same arc from opposite directions. The
//! store is immutable once handed to an extraction pass and is `Sync`, so
//! any number of read-only passes can share it.

use nalgebra::Point2;

use crate::error::{Error, Result};
use crate::keys::{ArcId, ArcRef};

/// Data stored for an arc: an ordered sequence of points.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcData {
    pub points: Vec<Point2<f64>>,
}

impl ArcData {
    /// First and last point in storage order.
    pub fn endpoints(&self) -> Option<(Point2<f64>, Point2<f64>)> {
        Some((*self.points.first()?, *self.points.last()?))
    }
}

/// Arena of arcs indexed by [`ArcId`].
///
/// # Example
///
/// ```
/// use arcmesh_topology::{ArcRef, ArcId, TopologyStore};
///
/// let store = TopologyStore::from_coordinates(vec![
///     vec![[3.0, 1.0], [1.0, 1.0], [2.0, 3.0]],
///     vec![[2.0, 3.0], [3.0, 1.0]],
/// ])
/// .unwrap();
///
/// assert_eq!(store.arc_count(), 2);
/// assert_eq!(store.resolve(-2).unwrap(), ArcRef::Reverse(ArcId(1)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TopologyStore {
    pub(crate) arcs: Vec<ArcData>,
}

impl TopologyStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self { arcs: Vec::new() }
    }

    /// Builds a store from plain `[x, y]` coordinate lists, one per arc.
    pub fn from_coordinates(arcs: Vec<Vec<[f64; 2]>>) -> Result<Self> {
        let mut store = Self {
            arcs: Vec::with_capacity(arcs.len()),
        };
        for coords in arcs {
            store.add_arc(coords.into_iter().map(|[x, y]| Point2::new(x, y)).collect())?;
        }
        Ok(store)
    }

    /// Appends an arc and returns its id.
    ///
    /// Returns an error if the arc has fewer than two points.
    pub fn add_arc(&mut self, points: Vec<Point2<f64>>) -> Result<ArcId> {
        let id = ArcId(self.arcs.len());
        if points.len() < 2 {
            return Err(Error::DegenerateArc(id));
        }
        self.arcs.push(ArcData { points });
        Ok(id)
    }

    /// Returns the number of arcs in the store.
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// Returns `true` if the id lies within `[0, arc_count)`.
    pub fn contains(&self, id: ArcId) -> bool {
        id.0 < self.arcs.len()
    }

    /// Returns the arc data for the given id, or `None` if not found.
    pub fn arc(&self, id: ArcId) -> Option<&ArcData> {
        self.arcs.get(id.0)
    }

    /// Returns the stored (forward) vertices of an arc.
    pub fn vertices(&self, id: ArcId) -> Result<&[Point2<f64>]> {
        self.arcs
            .get(id.0)
            .map(|a| a.points.as_slice())
            .ok_or(Error::UnknownArc(id))
    }

    /// Decodes a signed reference and checks it against the pool.
    pub fn resolve(&self, reference: i64) -> Result<ArcRef> {
        let arc = ArcRef::from_signed(reference);
        if self.contains(arc.id()) {
            Ok(arc)
        } else {
            Err(Error::InvalidArcReference {
                reference,
                arc_count: self.arcs.len(),
            })
        }
    }

    /// Returns the vertices of an arc in traversal order.
    pub fn directed_vertices(&self, arc: ArcRef) -> Result<Vec<Point2<f64>>> {
        let points = self.vertices(arc.id())?;
        Ok(match arc {
            ArcRef::Forward(_) => points.to_vec(),
            ArcRef::Reverse(_) => points.iter().rev().copied().collect(),
        })
    }

    /// Returns `(head, tail)` of an arc in traversal order.
    pub fn endpoints(&self, arc: ArcRef) -> Result<(Point2<f64>, Point2<f64>)> {
        let (first, last) = self
            .arc(arc.id())
            .and_then(ArcData::endpoints)
            .ok_or(Error::UnknownArc(arc.id()))?;
        Ok(match arc {
            ArcRef::Forward(_) => (first, last),
            ArcRef::Reverse(_) => (last, first),
        })
    }

    /// Joins a sequence of signed references into one coordinate list.
    ///
    /// The joint between consecutive arcs is emitted once when the tail of
    /// one arc coincides with the head of the next. Non-contiguous parts
    /// simply concatenate.
    pub fn path_points(&self, part: &[i64]) -> Result<Vec<Point2<f64>>> {
        let mut out: Vec<Point2<f64>> = Vec::new();
        for &reference in part {
            let points = self.directed_vertices(self.resolve(reference)?)?;
            let skip = match (out.last(), points.first()) {
                (Some(tail), Some(head)) if tail == head => 1,
                _ => 0,
            };
            out.extend(points.into_iter().skip(skip));
        }
        Ok(out)
    }

    /// Checks that references connect tail-to-head around a closed loop.
    pub fn ring_is_closed(&self, ring: &[i64]) -> Result<bool> {
        if ring.is_empty() {
            return Ok(false);
        }
        let mut ends = Vec::with_capacity(ring.len());
        for &reference in ring {
            ends.push(self.endpoints(self.resolve(reference)?)?);
        }
        let closed = (0..ends.len()).all(|i| {
            let (_, tail) = ends[i];
            let (head, _) = ends[(i + 1) % ends.len()];
            tail == head
        });
        Ok(closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::Direction;

    fn triangle_store() -> TopologyStore {
        TopologyStore::from_coordinates(vec![
            vec![[3.0, 1.0], [1.0, 1.0], [2.0, 3.0]],
            vec![[2.0, 3.0], [3.0, 1.0]],
            vec![[2.0, 3.0], [4.0, 3.0], [3.0, 1.0]],
        ])
        .unwrap()
    }

    #[test]
    fn new_store_is_empty() {
        let store = TopologyStore::new();
        assert_eq!(store.arc_count(), 0);
        assert!(!store.contains(ArcId(0)));
    }

    #[test]
    fn resolve_checks_range() {
        let store = triangle_store();
        assert_eq!(store.resolve(2).unwrap(), ArcRef::Forward(ArcId(2)));
        assert_eq!(store.resolve(-3).unwrap().direction(), Direction::Reverse);
        assert!(matches!(
            store.resolve(3),
            Err(Error::InvalidArcReference { reference: 3, arc_count: 3 })
        ));
        assert!(matches!(
            store.resolve(-4),
            Err(Error::InvalidArcReference { reference: -4, .. })
        ));
    }

    #[test]
    fn vertices_and_reverse_traversal() {
        let store = triangle_store();
        assert_eq!(store.vertices(ArcId(1)).unwrap().len(), 2);
        let rev = store.directed_vertices(ArcRef::Reverse(ArcId(0))).unwrap();
        assert_eq!(rev[0], Point2::new(2.0, 3.0));
        assert_eq!(rev[2], Point2::new(3.0, 1.0));
        assert!(matches!(store.vertices(ArcId(9)), Err(Error::UnknownArc(ArcId(9)))));
    }

    #[test]
    fn degenerate_arc_rejected() {
        let mut store = TopologyStore::new();
        assert!(matches!(
            store.add_arc(vec![Point2::new(0.0, 0.0)]),
            Err(Error::DegenerateArc(ArcId(0)))
        ));
    }

    #[test]
    fn path_points_shares_joints() {
        let store = triangle_store();
        // cab then bc
        let pts = store.path_points(&[0, 1]).unwrap();
        assert_eq!(pts.len(), 4);
        assert_eq!(pts[0], pts[3]);
    }

    #[test]
    fn rings_close() {
        let store = triangle_store();
        assert!(store.ring_is_closed(&[0, 1]).unwrap());
        assert!(store.ring_is_closed(&[-2, 2]).unwrap());
        assert!(!store.ring_is_closed(&[0, -3]).unwrap());
        assert!(!store.ring_is_closed(&[]).unwrap());
    }
}
