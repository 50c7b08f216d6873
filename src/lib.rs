//! # summa
//!
//! summa is a command-line arithmetic expression evaluator written in Rust.
//! It tokenizes, validates, and evaluates a line of space-separated operands
//! and binary operators, honoring standard operator precedence (`*` and `/`
//! before `+` and `-`).

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator::fold, tokenizer::tokenize};

/// Provides unified error types for tokenizing, validation, and evaluation.
///
/// This module defines all errors that can be raised while turning an input
/// line into a result. It standardizes error reporting and carries the
/// offending token where one exists, for user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parse, runtime).
/// - Attaches the rejected token text where applicable.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the process of expression evaluation.
///
/// This module ties together tokenizing, validation, and the precedence fold
/// to provide a complete pipeline from an input line to a numeric result.
///
/// # Responsibilities
/// - Coordinates the core phases: tokenizer, validator, and evaluator.
/// - Defines the token-level data model shared between phases.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities and helpers.
///
/// This module provides reusable helpers that are not specific to a single
/// interpretation phase, such as rendering a numeric result for display.
///
/// # Responsibilities
/// - Formats `f64` results as trimmed decimal strings.
pub mod util;

pub use error::{EvalError, ParseError, RuntimeError};

/// Evaluates one arithmetic expression and returns the numeric result.
///
/// The expression is a single line of text with operands and operators
/// separated by whitespace. Tokens must alternate between operands and
/// operators, starting and ending with an operand. Multiplication and
/// division are applied before addition and subtraction.
///
/// There is no state between calls; each call owns its own buffers and
/// releases them on every exit path.
///
/// # Errors
/// Returns an error if any token is rejected by validation, if the expression
/// is structurally incomplete, or if a division by zero occurs. No partial
/// result is produced on failure.
///
/// # Examples
/// ```
/// use summa::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
///
/// // 'x' is not a valid operand.
/// assert!(evaluate("x + 1").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let expression = tokenize(expression)?;
    let result = fold(expression)?;

    Ok(result)
}
