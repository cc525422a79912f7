//! The higher-order (THF) syntax, covering TH0, polymorphic TH1 and the
//! non-classical NHF extensions.
//!
//! THF does not separate terms from formulas, and TH1 cannot even separate
//! types from terms at parse time, so this module has a single [`Formula`]
//! family and [`Type`] is an alias for it. Distinguishing the three layers is
//! left to later interpretation passes.

use super::{NonclassicalConnective, Number};
use ahash::AHashSet;

/// A top-level THF statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `atom : type`
    Typing(String, Type),
    Logical(Formula),
    /// A sequent `[lhs, …] --> [rhs, …]`.
    Sequent(Vec<Formula>, Vec<Formula>),
}

/// THF types are formulas (types-as-terms, TH1).
pub type Type = Formula;

/// A variable bound by a THF quantifier, always with a type ascription.
pub type TypedVariable = (String, Type);

/// A THF formula (equivalently, term or type).
#[derive(Debug, Clone, PartialEq)]
pub enum Formula {
    /// A constant, or a function applied FOF-style to parenthesized
    /// arguments. Curried application is [`BinaryConnective::App`].
    Function(String, Vec<Formula>),

    Variable(String),

    Quantified(Quantifier, Vec<TypedVariable>, Box<Formula>),

    Unary(UnaryConnective, Box<Formula>),

    Binary(BinaryConnective, Box<Formula>, Box<Formula>),

    /// A tuple `[a, b, …]`.
    Tuple(Vec<Formula>),

    /// `$ite(condition, then, else)`.
    Conditional(Box<Formula>, Box<Formula>, Box<Formula>),

    /// `$let(typings, bindings, body)`. Typings and bindings keep their
    /// written order.
    Let(Vec<(String, Type)>, Vec<(Formula, Formula)>, Box<Formula>),

    /// A connective used as a term, e.g. `(&)` or `(=)`.
    ConnectiveTerm(Connective),

    /// A TH1 defined constant: `!!`, `??`, `@@+`, `@@-` or `@=`.
    DefinedConstant(DefinedConstant),

    DistinctObject(String),

    Number(Number),

    /// A non-classical operator applied to arguments (NHF).
    Nonclassical(NonclassicalConnective, Vec<Formula>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    /// `!`
    Forall,
    /// `?`
    Exists,
    /// `^`
    Lambda,
    /// `@+`
    Choice,
    /// `@-`
    Description,
    /// `!>`
    TypedForall,
    /// `?*`
    TypedExists,
    /// `#`
    Epsilon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryConnective {
    /// `~`
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryConnective {
    /// `=`
    Eq,
    /// `!=`
    Neq,
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
    /// `@`, curried application; left-associative.
    App,
    /// `>`, the function type constructor; right-associative.
    FunctionType,
    /// `*`, the product type constructor; left-associative.
    ProductType,
    /// `+`, the sum type constructor; left-associative.
    SumType,
    /// `:=`
    Assignment,
    /// `==`
    Identity,
}

/// Any connective, for use in [`Formula::ConnectiveTerm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    Unary(UnaryConnective),
    Binary(BinaryConnective),
}

/// The TH1 defined constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinedConstant {
    /// `!!`
    ForallComb,
    /// `??`
    ExistsComb,
    /// `@@+`
    ChoiceComb,
    /// `@@-`
    DescriptionComb,
    /// `@=`
    EqComb,
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
                for formula in lhs.iter().chain(rhs) {
                    formula.collect_symbols(&mut set);
                }
            }
        }
        set
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
            Formula::Function(name, args) => {
                set.insert(name);
                for arg in args {
                    arg.collect_symbols(set);
                }
            }
            Formula::Quantified(_, variables, body) => {
                for (_, typ) in variables {
                    typ.collect_symbols(set);
                }
                body.collect_symbols(set);
            }
            Formula::Unary(_, body) => body.collect_symbols(set),
            Formula::Binary(_, left, right) => {
                left.collect_symbols(set);
                right.collect_symbols(set);
            }
            Formula::Tuple(elements) => {
                for element in elements {
                    element.collect_symbols(set);
                }
            }
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
            Formula::DistinctObject(name) => {
                set.insert(name);
            }
            Formula::Nonclassical(_, args) => {
                for arg in args {
                    arg.collect_symbols(set);
                }
            }
            Formula::Variable(_)
            | Formula::ConnectiveTerm(_)
            | Formula::DefinedConstant(_)
            | Formula::Number(_) => (),
        }
    }
}
