//! Core types for collate
//!
//! This crate provides the pieces every collate analysis is built from:
//!
//! - [`Item`] - A labelled signed amount, one per parsed input line
//! - [`Group`] - A tree of named (or anonymous) groups over leaf labels
//! - [`DataflowGraph`] - The flat label-to-node mapping derived from a
//!   group tree, through which amounts propagate upward
//! - [`Analysis`] - The accumulator protocol shared by the three
//!   analyses: [`Echo`], [`Sum`], and [`Sort`]
//! - [`report::render`] - The spreadsheet-importable group report
//!
//! # Example
//!
//! ```
//! use collate_core::{Analysis, Group, Item, Sort};
//! use rust_decimal_macros::dec;
//!
//! // An anonymous root holding one named group with one leaf.
//! let tree = Group::anonymous(vec![
//!     Group::named("A", vec!["Leaf1".into()]).into(),
//! ]);
//!
//! let mut sort = Sort::new(tree).unwrap();
//! let mut out = Vec::new();
//! sort.update(&Item::new("Leaf1", dec!(-1.00)), &mut out).unwrap();
//! sort.finalize(&mut out).unwrap();
//!
//! let rendered = String::from_utf8(out).unwrap();
//! assert!(rendered.contains("A;-1.00"));
//! assert!(rendered.contains("Leaf1;-1.00"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod analysis;
pub mod dataflow;
pub mod group;
pub mod item;
pub mod report;

pub use analysis::{Analysis, AnalysisError, Echo, Sort, Sum};
pub use dataflow::{DataflowError, DataflowGraph, Node};
pub use group::{Group, GroupChild};
pub use item::Item;

// Re-export commonly used external types
pub use rust_decimal::Decimal;
