//! The named analyses and the accumulator protocol they share.
//!
//! Every analysis runs in three phases. Construction is the init phase
//! and builds the accumulator state; [`Analysis::update`] runs once per
//! parsed record, in input order; [`Analysis::finalize`] runs exactly
//! once after the last record and prints whatever summary the analysis
//! produces. The driver owns that ordering; the analyses own their
//! state.

use crate::dataflow::{DataflowError, DataflowGraph};
use crate::group::Group;
use crate::item::Item;
use crate::report;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::io::{self, Write};
use thiserror::Error;

/// Errors surfaced by an analysis while consuming records or finishing.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A record could not be routed through the dataflow graph.
    #[error(transparent)]
    Dataflow(#[from] DataflowError),
    /// Writing analysis output failed.
    #[error("failed to write analysis output")]
    Io(#[from] io::Error),
}

/// One pass over the parsed record stream.
pub trait Analysis {
    /// Consume one parsed record.
    fn update(&mut self, item: &Item, out: &mut dyn Write) -> Result<(), AnalysisError>;

    /// Finish the analysis, printing summary output. Called exactly once,
    /// after the last record.
    fn finalize(&mut self, out: &mut dyn Write) -> Result<(), AnalysisError>;
}

/// Prints every record as it arrives; keeps no state.
#[derive(Debug, Default, Clone, Copy)]
pub struct Echo;

impl Analysis for Echo {
    fn update(&mut self, item: &Item, out: &mut dyn Write) -> Result<(), AnalysisError> {
        writeln!(out, "{item}")?;
        Ok(())
    }

    fn finalize(&mut self, _out: &mut dyn Write) -> Result<(), AnalysisError> {
        Ok(())
    }
}

/// Accumulates one running total per label, printed as `label,amount`
/// lines at the end.
#[derive(Debug, Default, Clone)]
pub struct Sum {
    totals: BTreeMap<String, Decimal>,
}

impl Analysis for Sum {
    fn update(&mut self, item: &Item, _out: &mut dyn Write) -> Result<(), AnalysisError> {
        *self.totals.entry(item.label.clone()).or_default() += item.amount;
        Ok(())
    }

    fn finalize(&mut self, out: &mut dyn Write) -> Result<(), AnalysisError> {
        for (label, amount) in &self.totals {
            writeln!(out, "{label},{}", amount.normalize())?;
        }
        Ok(())
    }
}

/// Routes every record through a dataflow graph built from a group tree,
/// then renders the group report.
#[derive(Debug, Clone)]
pub struct Sort {
    tree: Group,
    graph: DataflowGraph,
}

impl Sort {
    /// Build the dataflow graph for `tree`.
    ///
    /// Fails if the tree uses a label more than once.
    pub fn new(tree: Group) -> Result<Self, DataflowError> {
        let graph = DataflowGraph::build(&tree)?;
        Ok(Self { tree, graph })
    }

    /// The graph with the totals accumulated so far.
    #[must_use]
    pub const fn graph(&self) -> &DataflowGraph {
        &self.graph
    }
}

impl Analysis for Sort {
    fn update(&mut self, item: &Item, _out: &mut dyn Write) -> Result<(), AnalysisError> {
        self.graph.notify(&item.label, item.amount)?;
        Ok(())
    }

    fn finalize(&mut self, out: &mut dyn Write) -> Result<(), AnalysisError> {
        report::render(&self.tree, &self.graph, out)
    }
}
