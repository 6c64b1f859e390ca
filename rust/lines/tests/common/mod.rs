// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![allow(dead_code)]

use arcmesh_topology::{AttributeTable, GeometryType, Layer, Record, TopologyStore, Value};

//      b --- d
//     / \   /
//    /   \ /
//   a --- c
//
//   cab, bc,   bdc
//   0,   1/-2, 2
pub fn triangles() -> (Layer, TopologyStore) {
    let store = TopologyStore::from_coordinates(vec![
        vec![[3.0, 1.0], [1.0, 1.0], [2.0, 3.0]],
        vec![[2.0, 3.0], [3.0, 1.0]],
        vec![[2.0, 3.0], [4.0, 3.0], [3.0, 1.0]],
    ])
    .unwrap();
    let layer = Layer::new(GeometryType::Polygon, vec![vec![vec![0, 1]], vec![vec![-2, 2]]])
        .with_name("shape")
        .with_data(AttributeTable::new(vec![
            Record::new().with("foo", "a"),
            Record::new().with("foo", "b"),
        ]));
    (layer, store)
}

//  a -- b -- c
//  |    |    |
//  d -- e -- f
//  |    |    |
//  g -- h -- i
//
// dab, be, ed, bcf, fe, eh, hgd, fih
// 0,   1,  2,  3,   4,  5,  6,   7
pub fn grid() -> (Layer, TopologyStore) {
    let store = TopologyStore::from_coordinates(vec![
        vec![[1.0, 2.0], [1.0, 3.0], [2.0, 3.0]],
        vec![[2.0, 3.0], [2.0, 2.0]],
        vec![[2.0, 2.0], [1.0, 2.0]],
        vec![[2.0, 3.0], [3.0, 3.0], [3.0, 2.0]],
        vec![[3.0, 2.0], [2.0, 2.0]],
        vec![[2.0, 2.0], [2.0, 1.0]],
        vec![[2.0, 1.0], [1.0, 1.0], [1.0, 2.0]],
        vec![[3.0, 2.0], [3.0, 1.0], [2.0, 1.0]],
    ])
    .unwrap();
    let layer = Layer::new(
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
    ]));
    (layer, store)
}

//  a -- b -- c
//  |    |    |
//  d    e    f
//  |    |    |
//  g -- h -- i
//
// dab, be, bcf, eh, hgd, fih
// 0,   1,  2,   3,  4,   5
pub const TWO_RECTANGLES: &str = r#"{
    "arcs": [
        [[1, 2], [1, 3], [2, 3]],
        [[2, 3], [2, 2]],
        [[2, 3], [3, 3], [3, 2]],
        [[2, 2], [2, 1]],
        [[2, 1], [1, 1], [1, 2]],
        [[3, 2], [3, 1], [2, 1]]
    ],
    "layers": [{
        "geometry_type": "polygon",
        "data": [{"foo": "a"}, {"foo": "b"}],
        "shapes": [[[0, 1, 3, 4]], [[2, 5, -4, -2]]]
    }]
}"#;

pub fn two_rectangles() -> (Layer, TopologyStore) {
    let snapshot = arcmesh_topology::DatasetSnapshot::from_json(TWO_RECTANGLES).unwrap();
    let (store, mut layers) = snapshot.into_parts().unwrap();
    (layers.remove(0), store)
}

/// `(RANK, TYPE)` pairs of an output layer's records.
pub fn ranks(layer: &Layer) -> Vec<(i64, String)> {
    use arcmesh_topology::AttributeSource;
    layer
        .data
        .as_ref()
        .expect("lines output carries attributes")
        .records()
        .iter()
        .map(|r| {
            let rank = r.get("RANK").and_then(Value::as_int).unwrap();
            let kind = r.get("TYPE").and_then(Value::as_str).unwrap().to_string();
            (rank, kind)
        })
        .collect()
}

pub fn expect(pairs: &[(i64, &str)]) -> Vec<(i64, String)> {
    pairs.iter().map(|&(r, t)| (r, t.to_string())).collect()
}

// arc 1 is claimed by shapes 0, 1 and 2; arc 3 is a slit walked both ways
// inside shape 0. Shapes 3 and 4 are null and empty-ring shapes.
// foo: a, b, a, (none), (none)
pub fn over_shared() -> (Layer, TopologyStore) {
    let store = TopologyStore::from_coordinates(vec![
        vec![[0.0, 0.0], [0.0, 1.0], [1.0, 1.0]],
        vec![[1.0, 1.0], [0.0, 0.0]],
        vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]],
        vec![[0.0, 0.0], [0.5, 0.5]],
    ])
    .unwrap();
    let mut data = AttributeTable::default();
    data.push(Record::new().with("foo", "a"));
    data.push(Record::new().with("foo", "b"));
    data.push(Record::new().with("foo", "a"));
    let layer = Layer::new(
        GeometryType::Polygon,
        vec![
            vec![vec![0, 1, 3, -4]],
            vec![vec![-2, 2]],
            vec![vec![1, 2]],
            vec![],
            vec![vec![]],
        ],
    )
    .with_data(data);
    (layer, store)
}
