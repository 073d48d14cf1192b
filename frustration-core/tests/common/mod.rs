use frustration_core::{GraphBuilder, IsingGraph};

/// Adds a triangle on `names` with the given couplers for the edges
/// `0-1`, `1-2` and `0-2` in that order.
pub fn add_triangle(builder: &mut GraphBuilder, names: [&str; 3], couplers: [f64; 3]) {
    let [first, second, third] = names;
    for (left, right, weight) in [
        (first, second, couplers[0]),
        (second, third, couplers[1]),
        (first, third, couplers[2]),
    ] {
        builder
            .add_coupler(left, right, weight)
            .expect("fixture couplers are valid");
    }
}

/// Triangle `0-1-2` with one antiferromagnetic coupler.
#[must_use]
pub fn frustrated_triangle() -> IsingGraph {
    let mut builder = GraphBuilder::new();
    add_triangle(&mut builder, ["0", "1", "2"], [-1.0, -1.0, 1.0]);
    builder.build()
}

/// Triangle `0-1-2` with only ferromagnetic couplers.
#[must_use]
pub fn satisfied_triangle() -> IsingGraph {
    let mut builder = GraphBuilder::new();
    add_triangle(&mut builder, ["0", "1", "2"], [-1.0, -1.0, -1.0]);
    builder.build()
}

/// Two disconnected triangles: `0-1-2` frustrated and `3-4-5` not.
#[must_use]
pub fn two_triangles() -> IsingGraph {
    let mut builder = GraphBuilder::new();
    add_triangle(&mut builder, ["0", "1", "2"], [-1.0, -1.0, 1.0]);
    add_triangle(&mut builder, ["3", "4", "5"], [-1.0, -1.0, -1.0]);
    builder.build()
}

/// A star with four leaves; it has no cycles.
#[must_use]
pub fn star() -> IsingGraph {
    let mut builder = GraphBuilder::new();
    for leaf in ["1", "2", "3", "4"] {
        builder
            .add_coupler("0", leaf, 1.0)
            .expect("fixture couplers are valid");
    }
    builder.build()
}
