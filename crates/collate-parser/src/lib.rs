//! Record-line parser for collate input files.
//!
//! An input line is a record when it has the shape `[+]AMOUNT LABEL`:
//!
//! ```text
//! 1.00 Expense X
//! 2.00 Expense Y
//! +10.00 Income
//! ```
//!
//! A leading `+` marks income and keeps the amount positive; without it
//! the line is an expense and the amount is negated. The magnitude is an
//! unsigned decimal (`12`, `12.`, `12.5`). Everything after the single
//! separating space is the label, spaces and all, and it may be empty.
//! Lines of any other shape are not records; callers skip them.
//!
//! # Examples
//!
//! ```
//! use collate_parser::parse_record;
//! use rust_decimal_macros::dec;
//!
//! let item = parse_record("1.00 Coffee").unwrap();
//! assert_eq!(item.label, "Coffee");
//! assert_eq!(item.amount, dec!(-1.00));
//!
//! assert!(parse_record("# not a record").is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use collate_core::Item;
use nom::character::complete::{char, digit0, digit1};
use nom::combinator::{map_res, opt, recognize};
use nom::sequence::pair;
use nom::IResult;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Unsigned decimal magnitude: digits, optionally a dot and more digits.
/// A bare trailing dot (`12.`) is accepted.
fn magnitude(input: &str) -> IResult<&str, Decimal> {
    map_res(
        recognize(pair(digit1, opt(pair(char('.'), digit0)))),
        |s: &str| Decimal::from_str(s.trim_end_matches('.')),
    )(input)
}

fn record(input: &str) -> IResult<&str, Item> {
    let (rest, deposit) = opt(char('+'))(input)?;
    let (rest, amount) = magnitude(rest)?;
    let (label, _) = char(' ')(rest)?;
    let amount = if deposit.is_some() { amount } else { -amount };
    Ok(("", Item::new(label, amount)))
}

/// Parse one input line into an [`Item`].
///
/// Returns `None` for lines that are not records; the caller decides
/// what to do with those (collate skips them silently).
#[must_use]
pub fn parse_record(line: &str) -> Option<Item> {
    record(line).ok().map(|(_, item)| item)
}
