use frustration_core::{Edge, IsingGraph, VertexId};


pub(crate) fn coupler(graph: &IsingGraph, left: &str, right: &str) -> f64 {
    let edge = Edge::new(VertexId::new(left), VertexId::new(right)).expect("endpoints must differ");
    graph.coupler(&edge)
}
