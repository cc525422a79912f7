//! The typed clause normal form (TCF) syntax, reusing the TFF type grammar
//! and CNF clauses.

use super::{cnf, tff};
use ahash::AHashSet;

/// A top-level TCF statement: a type declaration or a (possibly universally
/// quantified) clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `atom : type`
    Typing(String, tff::Type),
    Logical(Formula),
}

/// A TCF formula: an optional universal prefix binding typed variables,
/// followed by a clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    /// The variables bound by the `! [vars]:` prefix; empty when the clause
    /// is unquantified.
    pub variables: Vec<tff::TypedVariable>,

    pub clause: cnf::Formula,
}

impl Statement {
    pub fn symbols(&self) -> AHashSet<&str> {
        let mut set = AHashSet::new();
        match self {
            Statement::Typing(atom, typ) => {
                set.insert(atom.as_str());
                typ.collect_symbols(&mut set);
            }
            Statement::Logical(formula) => {
                for (_, typ) in &formula.variables {
                    if let Some(typ) = typ {
                        typ.collect_symbols(&mut set);
                    }
                }
                formula.clause.collect_symbols(&mut set);
            }
        }
        set
    }
}
