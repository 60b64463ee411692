//! Output formatting module
//!
//! This module handles formatting analysis results for different output formats.

use crate::{
    Result,
    state_machine::{Analysis, GraphStats},
};
use serde_json::json;

/// Output states and diagnostics as JSON
pub fn output_json(w: &mut impl std::io::Write, analysis: &Analysis) -> Result<()> {
    let output = json!({
        "summary": {
            "total_states": analysis.states.len(),
            "total_transitions": analysis.transition_count(),
            "last_id": analysis.last_id,
        },
        "states": analysis.states,
        "diagnostics": analysis.diagnostics,
    });

    serde_json::to_writer_pretty(&mut *w, &output)?;
    writeln!(w)?; // Add trailing newline
    Ok(())
}

/// Output states and their transitions as a text listing
pub fn output_table(w: &mut impl std::io::Write, analysis: &Analysis) -> Result<()> {
    writeln!(w, "State Graph - Analysis Results")?;
    writeln!(w, "{}", "=".repeat(80))?;
    writeln!(w)?;

    writeln!(w, "Summary:")?;
    writeln!(w, "  Total States:       {}", analysis.states.len())?;
    writeln!(w, "  Total Transitions:  {}", analysis.transition_count())?;
    writeln!(w, "  Diagnostics:        {}", analysis.diagnostics.len())?;
    writeln!(w)?;

    if !analysis.states.is_empty() {
        writeln!(w, "States:")?;
        writeln!(w, "{:-<80}", "")?;
        writeln!(w, "{:>6} {:<40} {:<16} {:>8}", "Id", "Name", "Kind", "Owner")?;
        writeln!(w, "{:-<80}", "")?;

        for state in &analysis.states {
            writeln!(
                w,
                "{:>6} {:<40} {:<16} {:>8}",
                state.id,
                state.name,
                state.kind.to_string(),
                state.owner.to_string()
            )?;

            for line in state.content.lines() {
                writeln!(w, "{:>8} {}", "|", line)?;
            }

            for transition in &state.transitions {
                let target = analysis
                    .state(transition.target)
                    .map(|target| target.display_short())
                    .unwrap_or_else(|| format!("? ({})", transition.target));
                writeln!(
                    w,
                    "{:>8} {} --({})--> {}",
                    "",
                    state.name,
                    transition.display_label(),
                    target
                )?;
            }
        }
        writeln!(w)?;
    }

    if !analysis.diagnostics.is_empty() {
        writeln!(w, "Diagnostics:")?;
        for diagnostic in &analysis.diagnostics {
            writeln!(w, "  {}", diagnostic)?;
        }
        writeln!(w)?;
    }

    Ok(())
}

/// Output graph statistics
pub fn output_summary(w: &mut impl std::io::Write, stats: &GraphStats) -> Result<()> {
    writeln!(w, "Total States:       {}", stats.total_states)?;
    writeln!(w, "Total Transitions:  {}", stats.total_transitions)?;
    writeln!(w, "Composite States:   {}", stats.composite_states)?;
    writeln!(w, "Pseudostates:       {}", stats.pseudostates)?;
    writeln!(w, "Initial States:     {}", stats.initial_states)?;
    writeln!(w, "Max Depth:          {}", stats.max_depth)?;
    writeln!(w, "Has Cycles:         {}", stats.has_cycles)?;
    Ok(())
}
