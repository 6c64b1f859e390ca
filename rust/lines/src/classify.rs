// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Boundary classification.
//!
//! Every arc gets a `(rank, label)` pair from the attributes of the polygons
//! on either side of it:
//!
//! | sides                         | rank           | label          |
//! |-------------------------------|----------------|----------------|
//! | one                           | `0`            | `"outer"`      |
//! | two, field `k` differs first  | `k` (1-based)  | field name     |
//! | two, no field differs         | `fields + 1`   | `"inner"`      |
//!
//! Higher rank means "more interior": arcs between polygons that agree on
//! more of the listed fields rank above arcs between polygons that differ
//! early in the list.

use arcmesh_topology::{ArcId, AttributeSource, AttributeTable, Layer, Record};
use rustc_hash::FxHashMap;

use crate::error::{LinesError, Result};
use crate::usage::ArcUsageIndex;

/// Label part of a classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Label {
    Outer,
    Inner,
    Field(String),
}

impl Label {
    pub fn as_str(&self) -> &str {
        match self {
            Label::Outer => "outer",
            Label::Inner => "inner",
            Label::Field(name) => name,
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `(rank, label)` assigned to an arc.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Classification {
    pub rank: u32,
    pub label: Label,
}

impl Classification {
    pub fn outer() -> Self {
        Self {
            rank: 0,
            label: Label::Outer,
        }
    }

    pub fn is_outer(&self) -> bool {
        self.rank == 0
    }
}

/// The shapes on either side of an arc. `second` is `None` for an arc on
/// the outer edge of the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sides {
    pub first: usize,
    pub second: Option<usize>,
}

/// Classification of one arc together with the sides it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArcClass {
    pub sides: Sides,
    pub classification: Classification,
}

/// Compares two records field by field and ranks the first difference.
///
/// A missing record or field compares equal only to another missing one.
pub fn classify_records<A: AttributeSource>(
    a: Option<&A>,
    b: Option<&A>,
    fields: &[String],
) -> Classification {
    for (i, field) in fields.iter().enumerate() {
        let va = a.and_then(|r| r.get(field));
        let vb = b.and_then(|r| r.get(field));
        let same = match (va, vb) {
            (Some(x), Some(y)) => x.same_as(y),
            (None, None) => true,
            _ => false,
        };
        if !same {
            return Classification {
                rank: i as u32 + 1,
                label: Label::Field(field.clone()),
            };
        }
    }
    Classification {
        rank: fields.len() as u32 + 1,
        label: Label::Inner,
    }
}

/// Assigns classifications from a layer's attribute table and an ordered
/// field list.
#[derive(Debug)]
pub struct BoundaryClassifier<'a> {
    table: Option<&'a AttributeTable>,
    fields: &'a [String],
}

impl<'a> BoundaryClassifier<'a> {
    /// Checks that every field exists in the layer's schema.
    pub fn new(layer: &'a Layer, fields: &'a [String]) -> Result<Self> {
        let table = layer.data.as_ref();
        if let Some(missing) = fields
            .iter()
            .find(|f| !table.is_some_and(|t| t.has_field(f)))
        {
            return Err(LinesError::UnknownField {
                field: missing.clone(),
            });
        }
        Ok(Self { table, fields })
    }

    fn record(&self, shape: usize) -> Option<&'a Record> {
        self.table.and_then(|t| t.record(shape))
    }

    /// Classifies an arc given the shapes on either side.
    pub fn classify(&self, sides: Sides) -> Classification {
        match sides.second {
            None => Classification::outer(),
            Some(second) => {
                classify_records(self.record(sides.first), self.record(second), self.fields)
            }
        }
    }

    /// Derives the two sides of an arc from its occurrences.
    ///
    /// An arc referenced more than twice is classified by its first two
    /// occurrences in (shape, ring, position) order. Returns `None` for an
    /// arc the layer never references.
    pub fn sides_of(index: &ArcUsageIndex, arc: ArcId) -> Option<Sides> {
        let occurrences = index.occurrences_of(arc);
        let first = occurrences.first()?.shape;
        Some(Sides {
            first,
            second: occurrences.get(1).map(|o| o.shape),
        })
    }

    /// Classifies every arc the layer references.
    pub fn classify_all(&self, index: &ArcUsageIndex) -> FxHashMap<ArcId, ArcClass> {
        let mut classes = FxHashMap::default();
        classes.reserve(index.arc_count());
        for (arc, _) in index.iter() {
            if let Some(sides) = Self::sides_of(index, arc) {
                classes.insert(
                    arc,
                    ArcClass {
                        sides,
                        classification: self.classify(sides),
                    },
                );
            }
        }
        tracing::debug!(
            arcs = classes.len(),
            fields = self.fields.len(),
            "Classified boundary arcs"
        );
        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcmesh_topology::{GeometryType, Record, TopologyStore};

    fn fields(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn grid_layer() -> Layer {
        Layer::new(
            GeometryType::Polygon,
            vec![
                vec![vec![0, 1, 2]],
                vec![vec![3, 4, -2]],
                vec![vec![-3, 5, 6]],
                vec![vec![-5, 7, -6]],
            ],
        )
        .with_data(AttributeTable::new(vec![
            Record::new().with("foo", "a").with("bar", 1_i64),
            Record::new().with("foo", "a").with("bar", 1_i64),
            Record::new().with("foo", "b").with("bar", 2_i64),
            Record::new().with("foo", "b").with("bar", 3_i64),
        ]))
    }

    #[test]
    fn first_differing_field_sets_rank() {
        let a = Record::new().with("foo", "a").with("bar", 1_i64);
        let b = Record::new().with("foo", "a").with("bar", 2_i64);
        let c = classify_records(Some(&a), Some(&b), &fields(&["foo", "bar"]));
        assert_eq!(c.rank, 2);
        assert_eq!(c.label, Label::Field("bar".to_string()));

        let c = classify_records(Some(&a), Some(&b), &fields(&["bar", "foo"]));
        assert_eq!(c.rank, 1);
        assert_eq!(c.label.as_str(), "bar");
    }

    #[test]
    fn matching_records_are_inner() {
        let a = Record::new().with("foo", "a");
        let c = classify_records(Some(&a), Some(&a.clone()), &fields(&["foo"]));
        assert_eq!(c, Classification { rank: 2, label: Label::Inner });

        let c = classify_records::<Record>(None, None, &[]);
        assert_eq!(c, Classification { rank: 1, label: Label::Inner });
    }

    #[test]
    fn missing_record_differs_from_present_one() {
        let a = Record::new().with("foo", "a");
        let c = classify_records(Some(&a), None, &fields(&["foo"]));
        assert_eq!(c.label, Label::Field("foo".to_string()));
    }

    #[test]
    fn outer_when_single_side() {
        let layer = grid_layer();
        let f = fields(&["foo"]);
        let classifier = BoundaryClassifier::new(&layer, &f).unwrap();
        let c = classifier.classify(Sides { first: 2, second: None });
        assert_eq!(c, Classification::outer());
        assert!(c.is_outer());
        assert_eq!(c.label.to_string(), "outer");
    }

    #[test]
    fn unknown_field_rejected() {
        let layer = grid_layer();
        let f = fields(&["foo", "qux"]);
        let err = BoundaryClassifier::new(&layer, &f).unwrap_err();
        assert!(matches!(err, LinesError::UnknownField { ref field } if field == "qux"));

        let bare = Layer::new(GeometryType::Polygon, vec![]);
        let f = fields(&["foo"]);
        assert!(BoundaryClassifier::new(&bare, &f).is_err());
        assert!(BoundaryClassifier::new(&bare, &[]).is_ok());
    }

    #[test]
    fn grid_classification_with_two_fields() {
        let layer = grid_layer();
        let store = TopologyStore::from_coordinates(vec![vec![[0.0, 0.0], [1.0, 1.0]]; 8]).unwrap();
        let index = ArcUsageIndex::build(&layer, &store).unwrap();
        let f = fields(&["foo", "bar"]);
        let classes = BoundaryClassifier::new(&layer, &f).unwrap().classify_all(&index);

        let rank = |i: usize| classes[&ArcId(i)].classification.rank;
        let label = |i: usize| classes[&ArcId(i)].classification.label.to_string();
        assert_eq!((rank(1), label(1)), (3, "inner".to_string()));
        assert_eq!((rank(2), label(2)), (1, "foo".to_string()));
        assert_eq!((rank(4), label(4)), (1, "foo".to_string()));
        assert_eq!((rank(5), label(5)), (2, "bar".to_string()));
        for outer in [0, 3, 6, 7] {
            assert_eq!(rank(outer), 0);
        }
        assert_eq!(classes[&ArcId(5)].sides, Sides { first: 2, second: Some(3) });
    }
}
