//! Unit tests for the graph model and its builder.

use rstest::rstest;

use super::{Edge, GraphBuilder, GraphError, VertexId};

fn edge(left: &str, right: &str) -> Edge {
    Edge::new(VertexId::new(left), VertexId::new(right)).expect("endpoints must differ")
}

#[rstest]
#[case("a", "b")]
#[case("b", "a")]
#[case("10", "9")]
fn edges_are_canonical(#[case] left: &str, #[case] right: &str) {
    let built = edge(left, right);
    assert!(built.low() < built.high());
    assert_eq!(built, edge(right, left));
}

#[test]
fn identifiers_order_bytewise() {
    // "10" < "9" byte-wise; canonical order follows the strings, not numbers.
    let built = edge("9", "10");
    assert_eq!(built.low().as_str(), "10");
    assert_eq!(built.high().as_str(), "9");
}

#[test]
fn rejects_self_loops() {
    let err = Edge::new(VertexId::new("x"), VertexId::new("x")).expect_err("self-loop must fail");
    assert_eq!(
        err,
        GraphError::SelfLoop {
            vertex: VertexId::new("x")
        }
    );
    assert_eq!(err.code().as_str(), "SELF_LOOP");
}

#[test]
fn builder_accumulates_repeated_terms() {
    let mut builder = GraphBuilder::new();
    builder
        .add_coupler("a", "b", 1.5)
        .and_then(|b| b.add_coupler("b", "a", -0.5))
        .and_then(|b| b.add_field("a", 0.25))
        .and_then(|b| b.add_field("a", 0.25))
        .expect("finite weights must be accepted");
    let graph = builder.build();

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.coupler(&edge("a", "b")), 1.0);
    assert_eq!(graph.field("a"), 0.5);
    assert_eq!(graph.field("b"), 0.0);
}

#[test]
fn coupler_registers_endpoints() {
    let mut builder = GraphBuilder::new();
    builder
        .add_coupler("u", "v", -1.0)
        .expect("finite weight must be accepted");
    builder.add_vertex("w");
    let graph = builder.build();

    assert_eq!(graph.vertex_count(), 3);
    assert!(graph.contains_vertex("u"));
    assert!(graph.contains_vertex("v"));
    assert!(graph.contains_vertex("w"));
}

#[test]
fn missing_entries_read_as_zero() {
    let graph = GraphBuilder::new().build();
    assert_eq!(graph.field("ghost"), 0.0);
    assert_eq!(graph.coupler(&edge("a", "b")), 0.0);
}

#[rstest]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
#[case(f64::NEG_INFINITY)]
fn rejects_non_finite_weights(#[case] weight: f64) {
    let mut builder = GraphBuilder::new();
    let err = builder
        .add_coupler("a", "b", weight)
        .expect_err("non-finite coupler must fail");
    assert_eq!(err.code().as_str(), "NON_FINITE_WEIGHT");
    let err = builder
        .add_field("a", weight)
        .expect_err("non-finite field must fail");
    assert!(matches!(err, GraphError::NonFiniteWeight { .. }));
}

#[test]
fn map_weights_touches_fields_and_couplers() {
    let mut builder = GraphBuilder::new();
    builder
        .add_coupler("a", "b", 2.0)
        .and_then(|b| b.add_field("a", 1.0))
        .and_then(|b| b.map_weights(|weight| weight * 3.0 + 1.0))
        .expect("mapping must succeed");
    let graph = builder.build();

    assert_eq!(graph.coupler(&edge("a", "b")), 7.0);
    assert_eq!(graph.field("a"), 4.0);
    assert_eq!(graph.field("b"), 1.0);
}

#[test]
fn qubo_to_ising_spreads_quadratic_terms() {
    let mut builder = GraphBuilder::new();
    builder
        .add_field("0", 4.0)
        .and_then(|b| b.add_coupler("0", "1", 8.0))
        .and_then(|b| b.add_coupler("1", "2", -4.0))
        .expect("finite weights must be accepted");
    builder.qubo_to_ising();
    let graph = builder.build();

    assert_eq!(graph.field("0"), 4.0);
    assert_eq!(graph.field("1"), 1.0);
    assert_eq!(graph.field("2"), -1.0);
    assert_eq!(graph.coupler(&edge("0", "1")), 2.0);
    assert_eq!(graph.coupler(&edge("1", "2")), -1.0);
}
