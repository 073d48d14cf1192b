//! Span and event coverage for the analysis pipeline.

mod common;

use frustration_core::{AnalyzerBuilder, IterationOrder};
use frustration_test_support::tracing::RecordingLayer;
use tracing::Level;

#[test]
fn analyze_records_pipeline_spans() {
    let analyzer = AnalyzerBuilder::new()
        .with_elementary_cycles(true)
        .with_iteration_order(IterationOrder::Sorted)
        .with_workers(1)
        .build()
        .expect("configuration is valid");
    let graph = common::two_triangles();

    let (report, layer) = RecordingLayer::capture(|| analyzer.analyze(&graph));
    report.expect("analysis succeeds");

    let analyze = layer.span("core.analyze").expect("core.analyze span recorded");
    assert_eq!(analyze.field("vertices"), Some("6"));
    assert_eq!(analyze.field("edges"), Some("6"));
    assert_eq!(analyze.field("elementary"), Some("true"));
    assert_eq!(analyze.field("order"), Some("Sorted"));

    for child in ["core.partition", "core.fundamental_cycles", "core.elementary_cycles"] {
        let span = layer.span(child).unwrap_or_else(|| panic!("{child} span recorded"));
        assert_eq!(span.parent.as_deref(), Some("core.analyze"), "{child}");
    }
    let partition = layer.span("core.partition").expect("core.partition span recorded");
    assert_eq!(partition.field("vertices"), Some("6"));
    assert_eq!(partition.field("edges"), Some("6"));
    let basis = layer
        .span("core.fundamental_cycles")
        .expect("core.fundamental_cycles span recorded");
    assert_eq!(basis.field("non_tree_edges"), Some("2"));

    let completed = layer.events_with_message("frustration analysis completed");
    let [event] = completed.as_slice() else {
        panic!("expected one completion event, got {completed:?}");
    };
    assert_eq!(event.level, Level::INFO);
    assert_eq!(event.field("basic_cycles"), Some("2"));
    assert_eq!(event.field("frustrated_cycles"), Some("1"));
    assert_eq!(event.field("analysed_cycles"), Some("2"));
}

#[test]
fn acyclic_graph_logs_that_no_frustration_is_possible() {
    let analyzer = AnalyzerBuilder::new().build().expect("configuration is valid");
    let graph = common::star();

    let (report, layer) = RecordingLayer::capture(|| analyzer.analyze(&graph));
    assert!(report.expect("analysis succeeds").is_acyclic());

    let events = layer.events_with_message("graph is acyclic, no frustration is possible");
    let [event] = events.as_slice() else {
        panic!("expected one acyclic event, got {events:?}");
    };
    assert_eq!(event.level, Level::INFO);
    assert_eq!(event.span.as_deref(), Some("core.analyze"));
    assert_eq!(event.field("components"), Some("1"));
    assert!(layer.span("core.elementary_cycles").is_none());
}

#[test]
fn enumeration_failures_are_recorded_on_the_span() {
    let limits = frustration_core::EnumerationLimits::unbounded()
        .with_max_cycles(std::num::NonZeroUsize::new(1).expect("non-zero cap"));
    let mut builder = frustration_core::GraphBuilder::new();
    common::add_triangle(&mut builder, ["a", "b", "c"], [1.0, 1.0, 1.0]);
    common::add_triangle(&mut builder, ["b", "c", "d"], [1.0, 1.0, 1.0]);
    let graph = builder.build();
    let analyzer = AnalyzerBuilder::new()
        .with_elementary_cycles(true)
        .with_limits(limits)
        .build()
        .expect("configuration is valid");

    let (result, layer) = RecordingLayer::capture(|| analyzer.analyze(&graph));
    let err = result.expect_err("three cycles exceed a cap of one");
    assert_eq!(err.code().as_str(), "FRUSTRATION_ENUMERATION_FAILURE");

    assert!(layer.events().iter().any(|event| {
        event.level == Level::ERROR && event.span.as_deref() == Some("core.elementary_cycles")
    }));
}
