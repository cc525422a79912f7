//! The abstract syntax tree for the TPTP input languages.
//!
//! A parsed problem file is represented by a [`Problem`], which holds the
//! `include` directives and annotated formulas in source order. Each dialect
//! (THF, TFF, FOF, TCF, CNF, and TPI) has its own statement, formula and term
//! families in a submodule; the types shared between dialects (names, roles,
//! numbers, annotations and comments) live here.
//!
//! All nodes are immutable after parsing, except for the [`Meta`] side map on
//! annotated formulas. Every node implements `Display`, producing text that
//! parses back to an equal tree.

pub mod cnf;
pub mod fof;
pub(crate) mod printer;
pub mod tcf;
pub mod tff;
pub mod thf;
#[cfg(test)]
mod tests;

use crate::parser::Position;
use ahash::{AHashMap, AHashSet};
use indexmap::IndexMap;
use num_bigint::BigInt;
use std::fmt;

/// A complete TPTP problem: the `include` directives and annotated formulas
/// of one input, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Problem {
    /// The `include` directives, in the order they were encountered.
    pub includes: Vec<Include>,

    /// The annotated formulas, in the order they were encountered.
    pub formulas: Vec<AnnotatedFormula>,

    /// The comments that preceded each annotated formula, keyed by the
    /// formula's name. Formulas without leading comments have no entry; when
    /// a name repeats, its latest occurrence owns the entry, and a later
    /// occurrence without leading comments clears it.
    pub formula_comments: IndexMap<String, Vec<Comment>>,
}

impl Problem {
    pub fn new() -> Self {
        Self::default()
    }

    /// The set of all function, predicate, type and distinct object symbols
    /// occurring in the problem's formulas. Variables are not included.
    pub fn symbols(&self) -> AHashSet<&str> {
        let mut set = AHashSet::new();
        for formula in &self.formulas {
            set.extend(formula.symbols());
        }
        set
    }
}

/// An `include('file'[, [name, …]]).` directive.
///
/// The parser records the directive but never resolves it; reading the
/// included file is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Include {
    /// The file name, without the surrounding single quotes.
    pub file_name: String,

    /// The names selected from the included file. Empty means everything.
    pub selection: Vec<String>,

    /// The comments that immediately preceded the directive.
    pub comments: Vec<Comment>,
}

/// A source comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub format: CommentFormat,
    pub kind: CommentKind,

    /// The comment text, without the `%`/`/*`/`*/` markers and without the
    /// `$`/`$$` kind marker.
    pub content: String,
}

/// Whether a comment was written in line (`%`) or block (`/* */`) form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentFormat {
    Line,
    Block,
}

/// The comment sub-kind: `%$`/`/*$` comments are "defined" and `%$$`/`/*$$`
/// comments are "system" comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    Normal,
    Defined,
    System,
}

/// A marker type identifying one of the six TPTP dialects. The marker ties an
/// [`Annotated`] formula to its statement type and leading keyword; TPI
/// shares FOF's statements but prints its own keyword.
pub trait Language {
    /// The keyword opening an annotated formula of this dialect.
    const KEYWORD: &'static str;

    /// The statement type carried by annotated formulas of this dialect.
    type Statement: fmt::Debug + fmt::Display + Clone + PartialEq;
}

macro_rules! languages {
    ($($(#[$attr:meta])* $name:ident: $keyword:literal => $statement:ty,)*) => {
        $(
            $(#[$attr])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub enum $name {}

            impl Language for $name {
                const KEYWORD: &'static str = $keyword;
                type Statement = $statement;
            }
        )*
    };
}

languages! {
    /// The THF dialect (higher-order, TH0/TH1, non-classical NHF).
    Thf: "thf" => thf::Statement,
    /// The TFF dialect (typed first-order, TF0/TF1, extended TFX, NXF).
    Tff: "tff" => tff::Statement,
    /// The FOF dialect (untyped first-order).
    Fof: "fof" => fof::Statement,
    /// The TCF dialect (typed clause normal form).
    Tcf: "tcf" => tcf::Statement,
    /// The CNF dialect (untyped clause normal form).
    Cnf: "cnf" => cnf::Statement,
    /// The TPI dialect (process instructions, syntactically FOF).
    Tpi: "tpi" => fof::Statement,
}

/// An annotated formula `lang(name, role, formula[, source[, info]]).`.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotated<L: Language> {
    /// The formula name: an atomic word or an integer-as-string.
    pub name: String,

    /// The formula role, e.g. `axiom` or `conjecture`.
    pub role: Role,

    /// The formula itself, in the dialect's statement type.
    pub formula: L::Statement,

    /// The optional source and useful-info annotations.
    pub annotations: Annotations,

    /// Side-band metadata. The parser records the position of the leading
    /// keyword under [`Meta::ORIGIN`]; callers may add further entries.
    /// Structural equality ignores this field entirely.
    pub meta: Meta,
}

pub type ThfAnnotated = Annotated<Thf>;
pub type TffAnnotated = Annotated<Tff>;
pub type FofAnnotated = Annotated<Fof>;
pub type TcfAnnotated = Annotated<Tcf>;
pub type CnfAnnotated = Annotated<Cnf>;
pub type TpiAnnotated = Annotated<Tpi>;

/// An annotated formula of any dialect.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotatedFormula {
    Thf(ThfAnnotated),
    Tff(TffAnnotated),
    Fof(FofAnnotated),
    Tcf(TcfAnnotated),
    Cnf(CnfAnnotated),
    Tpi(TpiAnnotated),
}

macro_rules! for_each_dialect {
    ($self:expr, $inner:ident => $body:expr) => {
        match $self {
            AnnotatedFormula::Thf($inner) => $body,
            AnnotatedFormula::Tff($inner) => $body,
            AnnotatedFormula::Fof($inner) => $body,
            AnnotatedFormula::Tcf($inner) => $body,
            AnnotatedFormula::Cnf($inner) => $body,
            AnnotatedFormula::Tpi($inner) => $body,
        }
    };
}

impl AnnotatedFormula {
    pub fn name(&self) -> &str {
        for_each_dialect!(self, a => &a.name)
    }

    pub fn role(&self) -> &Role {
        for_each_dialect!(self, a => &a.role)
    }

    pub fn annotations(&self) -> &Annotations {
        for_each_dialect!(self, a => &a.annotations)
    }

    pub fn meta(&self) -> &Meta {
        for_each_dialect!(self, a => &a.meta)
    }

    pub fn meta_mut(&mut self) -> &mut Meta {
        for_each_dialect!(self, a => &mut a.meta)
    }

    /// The symbols of the carried formula. Annotations do not contribute.
    pub fn symbols(&self) -> AHashSet<&str> {
        match self {
            AnnotatedFormula::Thf(a) => a.formula.symbols(),
            AnnotatedFormula::Tff(a) => a.formula.symbols(),
            AnnotatedFormula::Fof(a) => a.formula.symbols(),
            AnnotatedFormula::Tcf(a) => a.formula.symbols(),
            AnnotatedFormula::Cnf(a) => a.formula.symbols(),
            AnnotatedFormula::Tpi(a) => a.formula.symbols(),
        }
    }
}

/// A formula role, with an optional sub-role refinement: `axiom`,
/// `conjecture-sub(role)`, etc.
#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    pub name: String,

    /// The sub-role following a `-`, if any.
    pub subrole: Option<GeneralTerm>,
}

impl Role {
    pub fn new(name: impl Into<String>) -> Self {
        Role { name: name.into(), subrole: None }
    }
}

/// The optional annotations of an annotated formula: a source general term
/// and, optionally, a list of useful-info general terms.
pub type Annotations = Option<(GeneralTerm, Option<Vec<GeneralTerm>>)>;

/// The mutable side-band metadata of an annotated formula.
///
/// The map is deliberately excluded from structural equality: two annotated
/// formulas that differ only in metadata compare equal.
#[derive(Debug, Clone, Default)]
pub struct Meta {
    entries: AHashMap<String, MetaValue>,
}

/// A value in the [`Meta`] map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaValue {
    Position(Position),
    Text(String),
}

impl Meta {
    /// The key under which the parser records the `(line, column)` of an
    /// annotated formula's leading keyword.
    pub const ORIGIN: &'static str = "origin";

    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_origin(position: Position) -> Self {
        let mut meta = Meta::new();
        meta.insert(Self::ORIGIN, MetaValue::Position(position));
        meta
    }

    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: MetaValue) {
        self.entries.insert(key.into(), value);
    }

    /// The parser-recorded origin position, if present.
    pub fn origin(&self) -> Option<Position> {
        match self.entries.get(Self::ORIGIN)? {
            MetaValue::Position(position) => Some(*position),
            MetaValue::Text(_) => None,
        }
    }
}

impl PartialEq for Meta {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl Eq for Meta {}

/// A general term, the open-ended vocabulary of the annotation slots:
/// `general_data(:general_data)*(:general_list)?` or a bare general list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneralTerm {
    /// The colon-separated data elements, possibly empty for a bare list.
    pub data: Vec<GeneralData>,

    /// The trailing general list, if any.
    pub list: Option<Vec<GeneralTerm>>,
}

impl GeneralTerm {
    pub fn data(data: GeneralData) -> Self {
        GeneralTerm { data: vec![data], list: None }
    }
}

/// A general data element inside a [`GeneralTerm`].
#[derive(Debug, Clone, PartialEq)]
pub enum GeneralData {
    /// An atomic word or a function applied to general terms. Atoms carry an
    /// empty argument list.
    Function(String, Vec<GeneralTerm>),
    Variable(String),
    Number(Number),
    DistinctObject(String),
    Formula(FormulaData),
}

/// An embedded formula inside annotations: `$thf(…)`, `$tff(…)`, `$fof(…)`,
/// `$cnf(…)` or `$fot(…)`.
#[derive(Debug, Clone, PartialEq)]
pub enum FormulaData {
    Thf(Box<thf::Statement>),
    Tff(Box<tff::Statement>),
    Fof(Box<fof::Statement>),
    Cnf(Box<cnf::Statement>),
    Fot(Box<fof::Term>),
}

/// A TPTP number literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Number {
    Integer(BigInt),

    /// A rational `numerator/denominator`. The fraction is stored exactly as
    /// written, never reduced; the denominator is always positive.
    Rational(BigInt, BigInt),

    /// A real literal. `decimal` keeps the digits after the dot verbatim
    /// (including leading zeros) and is empty for exponent-only reals like
    /// `3E2`. An exponent of `1` means no exponent was written; the sign is
    /// kept apart so that `-0.5` survives.
    Real {
        negative: bool,
        wholes: BigInt,
        decimal: String,
        exponent: BigInt,
    },
}

/// A non-classical (modal/epistemic) operator, in short form (`[.]`, `<.>`,
/// `/.\`, optionally indexed) or long form (`{name(#index, key := value, …)}`).
#[derive(Debug, Clone, PartialEq)]
pub enum NonclassicalConnective {
    /// `[.]`, or `[#idx]` with an index.
    Box(Option<GeneralTerm>),

    /// `<.>`, or `<#idx>` with an index.
    Diamond(Option<GeneralTerm>),

    /// `/.\`, or `/#idx\` with an index.
    Cone(Option<GeneralTerm>),

    /// A long-form operator `{name(#index, key := value, …)}`.
    LongOperator {
        name: String,
        index: Option<GeneralTerm>,
        parameters: Vec<(GeneralTerm, GeneralTerm)>,
    },
}
