//! Collate CLI library.
//!
//! The `collate` binary wires the pieces together: record parsing from
//! [`collate_parser`], the analyses from [`collate_core`], and the
//! [`driver`] loop that feeds one to the other in input order.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod driver;
