//! Console table rendering for stats snapshots.

use std::fmt::Write;

use dilemma_events::GenerationSnapshot;

const TOP: &str = "┌──────────────┬──────────────┬──────────────┐";
const HEADER: &str = "│  Agent Type  │  Population  │ Avg. Points  │";
const DIVIDER: &str = "├──────────────┼──────────────┼──────────────┤";
const BOTTOM: &str = "└──────────────┴──────────────┴──────────────┘";

/// Render a snapshot as a titled, box-drawn table
pub fn render_snapshot(snapshot: &GenerationSnapshot) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = writeln!(
        out,
        "---------AGENT STATS FOR GENERATION {}---------",
        snapshot.generation
    );

    if snapshot.strategies.is_empty() {
        let _ = writeln!(out, "\nNo survivors left on generation {}", snapshot.generation);
        return out;
    }

    let _ = writeln!(out, "{}", TOP);
    let _ = writeln!(out, "{}", HEADER);
    for (name, stats) in &snapshot.strategies {
        let _ = writeln!(out, "{}", DIVIDER);
        let _ = writeln!(
            out,
            "│ {:<12} │ {:>12} │ {:>12} │",
            name, stats.population, stats.average_points
        );
    }
    let _ = writeln!(out, "{}", BOTTOM);
    out
}
