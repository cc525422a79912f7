//! The typed first-order (TFF) syntax, including the TFX/FOOL extensions
//! (tuples, conditionals, lets, formulas as terms) and the non-classical NXF
//! operators.
//!
//! Formulas and terms are mutually recursive: in TFX any formula can occur
//! at a term position through [`Term::Formula`], and terms reach back into
//! formulas through equalities, tuples and `$let`/`$ite` bodies.

use super::{NonclassicalConnective, Number};
use ahash::AHashSet;

/// A top-level TFF statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `atom : type`
    Typing(String, Type),
    Logical(Formula),
    /// A TFX sequent `[lhs, …] --> [rhs, …]`.
    Sequent(Vec<Term>, Vec<Term>),
}

/// A variable with an optional type ascription.
pub type TypedVariable = (String, Option<Type>);

/// A TFF formula.
#[derive(Debug, Clone, PartialEq)]
pub enum Formula {
    /// A predicate applied to zero or more terms.
    Atomic(String, Vec<Term>),

    Quantified(Quantifier, Vec<TypedVariable>, Box<Formula>),

    Unary(UnaryConnective, Box<Formula>),

    Binary(BinaryConnective, Box<Formula>, Box<Formula>),

    Equality(Term, Term),

    Inequality(Term, Term),

    /// A Boolean-typed variable at formula position (TFX only).
    Variable(String),

    /// `$ite(condition, then, else)` (TFX only).
    Conditional(Box<Formula>, Box<Term>, Box<Term>),

    /// `$let(typings, bindings, body)` (TFX only). Typings and bindings keep
    /// their written order.
    Let(Vec<(String, Type)>, Vec<(Term, Term)>, Box<Term>),

    /// `lhs := rhs` (TFX only).
    Assignment(Term, Term),

    /// `lhs == rhs` (TFX only).
    MetaIdentity(Term, Term),

    /// A non-classical operator applied to arguments (NXF).
    Nonclassical(NonclassicalConnective, Vec<Formula>),
}

/// A TFF term.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// A function applied to zero or more terms.
    Atomic(String, Vec<Term>),
    Variable(String),
    DistinctObject(String),
    Number(Number),

    /// A tuple `[a, b, …]` (TFX only).
    Tuple(Vec<Term>),

    /// A formula at term position (TFX only). The parser never wraps a plain
    /// atom this way; atoms at term positions are [`Term::Atomic`].
    Formula(Box<Formula>),
}

/// A TFF type expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// A type constructor applied to zero or more types, e.g. `$i` or
    /// `list($o)`.
    Atomic(String, Vec<Type>),

    /// A type variable (TF1).
    Variable(String),

    /// A mapping type `arg > result` or `(a * b * …) > result`; the argument
    /// product is flattened into one list.
    Mapping(Vec<Type>, Box<Type>),

    /// A quantified type `!> [vars]: body` (TF1).
    Quantified(Vec<TypedVariable>, Box<Type>),

    /// A tuple type `[t1, t2, …]` (TFX).
    Tuple(Vec<Type>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    /// `!`
    Forall,
    /// `?`
    Exists,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryConnective {
    /// `~`
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryConnective {
    /// `<=>`
    Equiv,
    /// `=>`
    Impl,
    /// `<=`
    If,
    /// `<~>`
    Niff,
    /// `~|`
    Nor,
    /// `~&`
    Nand,
    /// `|`
    Or,
    /// `&`
    And,
}

impl Statement {
    /// All function, predicate, type and distinct object symbols in the
    /// statement, including the typed atom of a `Typing`.
    pub fn symbols(&self) -> AHashSet<&str> {
        let mut set = AHashSet::new();
        match self {
            Statement::Typing(atom, typ) => {
                set.insert(atom.as_str());
                typ.collect_symbols(&mut set);
            }
            Statement::Logical(formula) => formula.collect_symbols(&mut set),
            Statement::Sequent(lhs, rhs) => {
                for term in lhs.iter().chain(rhs) {
                    term.collect_symbols(&mut set);
                }
            }
        }
        set
    }
}

fn collect_variable_symbols<'a>(variables: &'a [TypedVariable], set: &mut AHashSet<&'a str>) {
    for (_, typ) in variables {
        if let Some(typ) = typ {
            typ.collect_symbols(set);
        }
    }
}

impl Formula {
    pub fn symbols(&self) -> AHashSet<&str> {
        let mut set = AHashSet::new();
        self.collect_symbols(&mut set);
        set
    }

    fn collect_symbols<'a>(&'a self, set: &mut AHashSet<&'a str>) {
        match self {
            Formula::Atomic(predicate, args) => {
                set.insert(predicate);
                for arg in args {
                    arg.collect_symbols(set);
                }
            }
            Formula::Quantified(_, variables, body) => {
                collect_variable_symbols(variables, set);
                body.collect_symbols(set);
            }
            Formula::Unary(_, body) => body.collect_symbols(set),
            Formula::Binary(_, left, right) => {
                left.collect_symbols(set);
                right.collect_symbols(set);
            }
            Formula::Equality(left, right)
            | Formula::Inequality(left, right)
            | Formula::Assignment(left, right)
            | Formula::MetaIdentity(left, right) => {
                left.collect_symbols(set);
                right.collect_symbols(set);
            }
            Formula::Variable(_) => (),
            Formula::Conditional(condition, then, els) => {
                condition.collect_symbols(set);
                then.collect_symbols(set);
                els.collect_symbols(set);
            }
            Formula::Let(typings, bindings, body) => {
                for (atom, typ) in typings {
                    set.insert(atom.as_str());
                    typ.collect_symbols(set);
                }
                for (lhs, rhs) in bindings {
                    lhs.collect_symbols(set);
                    rhs.collect_symbols(set);
                }
                body.collect_symbols(set);
            }
            Formula::Nonclassical(_, args) => {
                for arg in args {
                    arg.collect_symbols(set);
                }
            }
        }
    }
}

impl Term {
    pub fn symbols(&self) -> AHashSet<&str> {
        let mut set = AHashSet::new();
        self.collect_symbols(&mut set);
        set
    }

    fn collect_symbols<'a>(&'a self, set: &mut AHashSet<&'a str>) {
        match self {
            Term::Atomic(function, args) => {
                set.insert(function);
                for arg in args {
                    arg.collect_symbols(set);
                }
            }
            Term::DistinctObject(name) => {
                set.insert(name);
            }
            Term::Tuple(elements) => {
                for element in elements {
                    element.collect_symbols(set);
                }
            }
            Term::Formula(formula) => formula.collect_symbols(set),
            Term::Variable(_) | Term::Number(_) => (),
        }
    }
}

impl Type {
    pub fn symbols(&self) -> AHashSet<&str> {
        let mut set = AHashSet::new();
        self.collect_symbols(&mut set);
        set
    }

    pub(crate) fn collect_symbols<'a>(&'a self, set: &mut AHashSet<&'a str>) {
        match self {
            Type::Atomic(name, args) => {
                set.insert(name);
                for arg in args {
                    arg.collect_symbols(set);
                }
            }
            Type::Variable(_) => (),
            Type::Mapping(args, result) => {
                for arg in args {
                    arg.collect_symbols(set);
                }
                result.collect_symbols(set);
            }
            Type::Quantified(variables, body) => {
                collect_variable_symbols(variables, set);
                body.collect_symbols(set);
            }
            Type::Tuple(elements) => {
                for element in elements {
                    element.collect_symbols(set);
                }
            }
        }
    }
}
