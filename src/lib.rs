//! # trn
//!
//! trn is a loader for the trn configuration language written in Rust.
//! It parses trn source text into a nested, strongly-structured value tree
//! with support for integers, strings, arrays, keyed tables, constant
//! expressions evaluated at load time, and references to earlier bindings,
//! then serializes the result to a structured-data format.

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
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ParseError,
    loader::{LoaderConfig, scanner, statement},
    value::Environment,
};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while loading trn
/// source text. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, offending text, and
/// source lines for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (structure, values,
///   expressions).
/// - Attaches line numbers and offending text for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the stages that turn source text into an environment.
///
/// This module ties together comment stripping, statement splitting,
/// delimiter-aware item splitting, value parsing, and constant expression
/// evaluation. Data flows strictly forward through the stages; the only
/// backward visibility is that bindings made by earlier statements are
/// available to later values and expressions.
///
/// # Responsibilities
/// - Coordinates the loader stages: scanner, statement walker, splitter,
///   value parser, and expression evaluator.
/// - Carries the loader configuration, including the nesting depth limit.
/// - Manages the flow of data and errors between stages.
pub mod loader;
/// Renders an environment or value to structured text.
///
/// This module serializes the parse result into a stable, human-readable
/// structured-data format, preserving declaration order for environments and
/// tables and losing no information along the way.
///
/// # Responsibilities
/// - Renders environments and single values to indented structured text.
/// - Preserves key order and scalar literal forms.
pub mod serializer;
/// Defines the runtime data types of the loader.
///
/// This module declares the `Value` enum representing any parsed trn datum,
/// the `Environment` mapping from variable name to value, and helper
/// conversions used by the expression evaluator.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported variants.
/// - Defines the insertion-ordered `Environment` mapping.
/// - Implements conversions and kind checks used during evaluation.
pub mod value;

/// Parses trn source text into an environment, using the default
/// configuration.
///
/// The whole input is read in one pass: comments are stripped, each logical
/// statement is parsed, and every binding is inserted in declaration order.
/// The first error aborts the parse; a partial environment is never
/// returned.
///
/// # Errors
/// Returns a [`ParseError`] if any stage rejects the input.
///
/// # Examples
/// ```
/// use trn::value::Value;
///
/// let env = trn::parse("set num = 42;\nset next = @(+ num 1);").unwrap();
/// assert_eq!(env["num"], Value::Integer(42));
/// assert_eq!(env["next"], Value::Integer(43));
///
/// // `1x` is not a valid identifier.
/// assert!(trn::parse("set 1x = 5;").is_err());
/// ```
pub fn parse(source: &str) -> Result<Environment, ParseError> {
    parse_with_config(source, &LoaderConfig::default())
}

/// Parses trn source text into an environment with an explicit
/// configuration.
///
/// Behaves like [`parse`], with the nesting depth limit taken from
/// `config`.
///
/// # Errors
/// Returns a [`ParseError`] if any stage rejects the input.
///
/// # Examples
/// ```
/// use trn::loader::LoaderConfig;
///
/// let config = LoaderConfig::new().with_max_depth(2);
/// assert!(trn::parse_with_config("set a = { { { 1 } } };", &config).is_err());
/// ```
pub fn parse_with_config(source: &str, config: &LoaderConfig) -> Result<Environment, ParseError> {
    let cleaned = scanner::strip_comments(source)?;
    statement::build_environment(&cleaned, config)
}

/// Serializes an environment to structured text.
///
/// Shorthand for [`serializer::to_text`].
///
/// # Errors
/// Returns a `serde_json::Error` if the underlying writer fails.
pub fn to_text(env: &Environment) -> Result<String, serde_json::Error> {
    serializer::to_text(env)
}
