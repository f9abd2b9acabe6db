//! Spreadsheet-importable report over an accumulated dataflow graph.
//!
//! The report is a flat semicolon-delimited listing. Each named group
//! prints a separator row, its own total, a blank row, one row per
//! direct child, and a run of blank rows reserved for spreadsheet
//! formulas. Nesting shows up as a prefix of two semicolons per named
//! nesting level, which spreadsheet outline features consume as
//! indentation.

use crate::analysis::AnalysisError;
use crate::dataflow::DataflowGraph;
use crate::group::{Group, GroupChild};
use std::io::Write;

/// Blank rows emitted after each group block, reserved for formula rows.
const SPACER_ROWS: usize = 15;

/// Render the report for `tree` over the totals accumulated in `graph`.
///
/// Amounts print with two decimal places. Anonymous groups print nothing
/// of their own and do not deepen the nesting; their children render as
/// if attached to the nearest named ancestor.
pub fn render<W: Write + ?Sized>(
    tree: &Group,
    graph: &DataflowGraph,
    out: &mut W,
) -> Result<(), AnalysisError> {
    render_group(tree, graph, 0, out)
}

fn render_group<W: Write + ?Sized>(
    group: &Group,
    graph: &DataflowGraph,
    depth: usize,
    out: &mut W,
) -> Result<(), AnalysisError> {
    let prefix = ";".repeat(2 * depth);

    if let Some(label) = group.label.as_deref() {
        writeln!(out, "{prefix}-----;-----")?;
        writeln!(out, "{prefix}{label};{:.2}", graph.amount(label)?)?;
        writeln!(out, "{prefix};")?;
        for child in &group.children {
            // anonymous child groups have no node to read a total from
            if let Some(child_label) = child.label() {
                writeln!(out, "{prefix}{child_label};{:.2}", graph.amount(child_label)?)?;
            }
        }
        for _ in 0..SPACER_ROWS {
            writeln!(out, "{prefix};")?;
        }
    }

    let child_depth = if group.is_anonymous() { depth } else { depth + 1 };
    for child in &group.children {
        if let GroupChild::Group(nested) = child {
            render_group(nested, graph, child_depth, out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn rendered(tree: &Group, graph: &DataflowGraph) -> String {
        let mut out = Vec::new();
        render(tree, graph, &mut out).expect("render");
        String::from_utf8(out).expect("utf8 output")
    }

    #[test]
    fn test_render_single_group() {
        let tree = Group::anonymous(vec![Group::named("A", vec!["Leaf1".into()]).into()]);
        let mut graph = DataflowGraph::build(&tree).expect("unique labels");
        graph.notify("Leaf1", dec!(-1.00)).expect("known label");

        let expected = format!(
            "-----;-----\nA;-1.00\n;\nLeaf1;-1.00\n{}",
            ";\n".repeat(SPACER_ROWS)
        );
        assert_eq!(rendered(&tree, &graph), expected);
    }

    #[test]
    fn test_render_nested_groups_indent_by_two_semicolons() {
        let tree = Group::anonymous(vec![Group::named(
            "Outer",
            vec![Group::named("Inner", vec!["Leaf1".into()]).into()],
        )
        .into()]);
        let mut graph = DataflowGraph::build(&tree).expect("unique labels");
        graph.notify("Leaf1", dec!(-2.50)).expect("known label");

        let out = rendered(&tree, &graph);
        let lines: Vec<_> = out.lines().collect();

        // outer block at depth 0
        assert_eq!(lines[0], "-----;-----");
        assert_eq!(lines[1], "Outer;-2.50");
        assert_eq!(lines[2], ";");
        assert_eq!(lines[3], "Inner;-2.50");

        // inner block starts after the outer spacer rows, at depth 1
        let inner_start = 4 + SPACER_ROWS;
        assert_eq!(lines[inner_start], ";;-----;-----");
        assert_eq!(lines[inner_start + 1], ";;Inner;-2.50");
        assert_eq!(lines[inner_start + 2], ";;");
        assert_eq!(lines[inner_start + 3], ";;Leaf1;-2.50");
        assert_eq!(lines[inner_start + 4], ";;");
    }

    #[test]
    fn test_render_anonymous_group_keeps_depth() {
        // Inner sits under an anonymous level inside Outer; it must still
        // render at depth 1, directly after Outer's block.
        let tree = Group::anonymous(vec![Group::named(
            "Outer",
            vec![Group::anonymous(vec![
                Group::named("Inner", vec!["Leaf1".into()]).into()
            ])
            .into()],
        )
        .into()]);
        let graph = DataflowGraph::build(&tree).expect("unique labels");

        let out = rendered(&tree, &graph);
        assert!(out.contains(";;Inner;0.00"));
        // the anonymous level itself never shows up as a section
        assert_eq!(out.matches("-----;-----").count(), 2);
    }

    #[test]
    fn test_render_zero_totals_print_two_decimals() {
        let tree = Group::anonymous(vec![Group::named("A", vec!["Leaf1".into()]).into()]);
        let graph = DataflowGraph::build(&tree).expect("unique labels");

        let out = rendered(&tree, &graph);
        assert!(out.contains("A;0.00"));
        assert!(out.contains("Leaf1;0.00"));
    }

    #[test]
    fn test_render_bare_anonymous_root_prints_nothing() {
        let tree = Group::anonymous(vec!["Leaf1".into()]);
        let graph = DataflowGraph::build(&tree).expect("unique labels");
        assert_eq!(rendered(&tree, &graph), "");
    }
}
