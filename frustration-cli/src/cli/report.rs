//! Tagged text report.

use std::io::{self, Write};

use frustration_core::{AnalysisReport, FrustrationStatistics};

/// Renders `report` to `writer` as tagged lines.
///
/// `#BCS` always comes first and `#ECS` follows when elementary cycles were
/// enumerated. Vertex (`FV`/`NFV`/`#FV`), edge (`FE`/`NFE`/`#FE`) and cycle
/// (`FC`/`NFC`/`#FC`) sections follow unless the graph is acyclic.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use frustration_cli::cli::render_report;
/// # use frustration_core::{AnalyzerBuilder, GraphBuilder, IterationOrder};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mut builder = GraphBuilder::new();
/// builder
///     .add_coupler("a", "b", -1.0)?
///     .add_coupler("b", "c", -1.0)?
///     .add_coupler("a", "c", 1.0)?;
/// let analyzer = AnalyzerBuilder::new()
///     .with_iteration_order(IterationOrder::Sorted)
///     .build()?;
/// let report = analyzer.analyze(&builder.build())?;
///
/// let mut buffer = Vec::new();
/// render_report(&report, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.starts_with("#BCS 1\n"));
/// assert!(text.contains("#FC  1 / 1 = 1.000000\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_report(report: &AnalysisReport, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "#BCS {}", report.basic_cycle_count())?;
    if let Some(count) = report.elementary_cycle_count() {
        writeln!(writer, "#ECS {count}")?;
    }
    match report.statistics() {
        Some(statistics) => render_statistics(statistics, &mut writer),
        None => Ok(()),
    }
}

fn render_statistics(
    statistics: &FrustrationStatistics,
    writer: &mut impl Write,
) -> io::Result<()> {
    for (vertex, tally) in statistics.frustrated_vertices() {
        writeln!(writer, "FV   {} {} | {vertex}", tally.frustrated(), tally.margin())?;
    }
    for (vertex, tally) in statistics.unfrustrated_vertices() {
        writeln!(writer, "NFV  {} {} | {vertex}", tally.unfrustrated(), tally.margin())?;
    }
    writeln!(writer, "#FV  {}", statistics.vertex_ratio())?;

    for (edge, tally) in statistics.frustrated_edges() {
        writeln!(writer, "FE   {} {} | {edge}", tally.frustrated(), tally.margin())?;
    }
    for (edge, tally) in statistics.unfrustrated_edges() {
        writeln!(writer, "NFE  {} {} | {edge}", tally.unfrustrated(), tally.margin())?;
    }
    writeln!(writer, "#FE  {}", statistics.edge_ratio())?;

    for cycle in statistics.cycles() {
        writer.write_all(if cycle.is_frustrated() { b"FC  " } else { b"NFC " })?;
        for vertex in cycle.path().vertices() {
            write!(writer, " {vertex}")?;
        }
        writeln!(writer)?;
    }
    writeln!(writer, "#FC  {}", statistics.cycle_ratio())
}
