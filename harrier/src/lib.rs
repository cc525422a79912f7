//! A parser and abstract syntax tree for the TPTP input languages.
//!
//! Six dialects are accepted inside a single problem file: THF (TH0/TH1 and
//! the non-classical NHF), TFF (TF0/TF1 and the extended TFX/NXF), FOF, TCF,
//! CNF, and TPI. Parsing produces a fully typed AST that can be inspected
//! and serialized back to TPTP-compliant text; for every node `x` produced
//! by the parser, re-parsing its `Display` output yields a tree equal to `x`
//! (metadata aside).
//!
//! The parser accepts any syntactically legal input, even ill-typed:
//! semantic analysis is out of scope, and `include` directives are recorded
//! but never resolved.
//!
//! ```
//! use harrier::parse_annotated_fof;
//!
//! let formula = parse_annotated_fof("fof(f, axiom, (p(X) & q)).".as_bytes()).unwrap();
//! assert_eq!(formula.name, "f");
//! assert_eq!(formula.to_string(), "fof(f, axiom, (p(X) & q)).");
//! ```

#![warn(clippy::branches_sharing_code)]
#![warn(clippy::cloned_instead_of_copied)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::from_iter_instead_of_collect)]
#![warn(clippy::get_unwrap)]
#![warn(clippy::implicit_clone)]
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::manual_ok_or)]
#![warn(clippy::map_unwrap_or)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::str_to_string)]
#![warn(clippy::unnested_or_patterns)]

pub mod ast;
pub mod parser;
mod utils;

pub use parser::{
    parse_annotated, parse_annotated_cnf, parse_annotated_fof, parse_annotated_tcf,
    parse_annotated_tff, parse_annotated_thf, parse_annotated_tpi, parse_cnf, parse_fof,
    parse_problem, parse_tcf, parse_tff, parse_thf, parse_tpi,
};
pub use parser::{ParserError, Position};

use std::io;
use thiserror::Error as ThisError;

pub type HarrierResult<T> = Result<T, Error>;

fn parser_error_message(e: &ParserError, position: &Option<Position>) -> String {
    match position {
        Some((line, column)) => {
            format!("parser error: {} (on line {}, column {})", e, line, column)
        }
        None => format!("parser error: {} (empty input)", e),
    }
}

/// The crate-level error type. Parse errors carry the 1-based position of
/// the offending token; a missing position means nothing was consumed (empty
/// input), which [`Error::line`] and [`Error::column`] report as `-1`.
#[derive(Debug, ThisError)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("{}", parser_error_message(.0, .1))]
    Parser(ParserError, Option<Position>),
}

impl Error {
    /// The 1-based line of the offending token, or `-1` when the input was
    /// empty or the error was not positional.
    pub fn line(&self) -> i64 {
        match self {
            Error::Parser(_, Some((line, _))) => *line as i64,
            _ => -1,
        }
    }

    /// The 1-based column of the offending token, or `-1` when the input
    /// was empty or the error was not positional.
    pub fn column(&self) -> i64 {
        match self {
            Error::Parser(_, Some((_, column))) => *column as i64,
            _ => -1,
        }
    }
}
