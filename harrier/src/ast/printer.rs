//! The serializers for the AST.
//!
//! Every node's `Display` output parses back to an equal node, so these impls
//! and the parser together form the round-trip contract. Binary formulas are
//! always parenthesized to keep the output unambiguous; whitespace follows
//! one fixed style regardless of the input's.

use super::{
    cnf, fof, tcf, tff, thf, Annotated, AnnotatedFormula, Comment, CommentFormat, CommentKind,
    FormulaData, GeneralData, GeneralTerm, Include, Language, NonclassicalConnective, Number,
    Problem, Role,
};
use crate::utils::{is_integer_word, is_plain_functor};
use ahash::AHashMap;
use num_traits::One;
use std::borrow::Cow;
use std::fmt;

/// Quotes `s` for a functor position: lower words and `$`/`$$` words are kept
/// verbatim, anything else is single-quoted with `\` and `'` escaped.
fn quote_functor(s: &str) -> Cow<str> {
    if is_plain_functor(s) {
        Cow::Borrowed(s)
    } else {
        let escaped = s.replace('\\', "\\\\").replace('\'', "\\'");
        Cow::Owned(format!("'{}'", escaped))
    }
}

/// Quotes `s` for a name position. Names may additionally be integers, which
/// are printed bare.
fn quote_name(s: &str) -> Cow<str> {
    if is_integer_word(s) {
        Cow::Borrowed(s)
    } else {
        quote_functor(s)
    }
}

fn write_separated<T: fmt::Display>(
    f: &mut fmt::Formatter,
    items: &[T],
    separator: &str,
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, "{}", separator)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

/// Writes `functor` followed by its parenthesized arguments, or just the
/// functor if there are none.
fn write_applied<T: fmt::Display>(f: &mut fmt::Formatter, functor: &str, args: &[T]) -> fmt::Result {
    write!(f, "{}", quote_functor(functor))?;
    if !args.is_empty() {
        write!(f, "(")?;
        write_separated(f, args, ", ")?;
        write!(f, ")")?;
    }
    Ok(())
}

struct TypedVar<'a, T>(&'a str, Option<&'a T>);

impl<T: fmt::Display> fmt::Display for TypedVar<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)?;
        if let Some(typ) = self.1 {
            write!(f, ": {}", typ)?;
        }
        Ok(())
    }
}

struct LetPart<'a, L, R>(&'a [(L, R)], &'a str);

impl<L: fmt::Display, R: fmt::Display> fmt::Display for LetPart<'_, L, R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let one = |f: &mut fmt::Formatter, (l, r): &(L, R)| write!(f, "{}{}{}", l, self.1, r);
        match self.0 {
            [single] => one(f, single),
            many => {
                write!(f, "[")?;
                for (i, pair) in many.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    one(f, pair)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Rational(numerator, denominator) => {
                write!(f, "{}/{}", numerator, denominator)
            }
            Number::Real { negative, wholes, decimal, exponent } => {
                if *negative {
                    write!(f, "-")?;
                }
                write!(f, "{}", wholes)?;
                if !decimal.is_empty() {
                    write!(f, ".{}", decimal)?;
                }
                // Exponent 1 stands for "not written", but exponent-only
                // reals must keep theirs or they would re-parse as integers.
                if !exponent.is_one() || decimal.is_empty() {
                    write!(f, "E{}", exponent)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let marker = match self.kind {
            CommentKind::Normal => "",
            CommentKind::Defined => "$",
            CommentKind::System => "$$",
        };
        match self.format {
            CommentFormat::Line => write!(f, "%{}{}", marker, self.content),
            CommentFormat::Block => write!(f, "/*{}{}*/", marker, self.content),
        }
    }
}

impl fmt::Display for Include {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let escaped = self.file_name.replace('\\', "\\\\").replace('\'', "\\'");
        write!(f, "include('{}'", escaped)?;
        if !self.selection.is_empty() {
            write!(f, ", [")?;
            for (i, name) in self.selection.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", quote_name(name))?;
            }
            write!(f, "]")?;
        }
        write!(f, ").")
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for include in &self.includes {
            for comment in &include.comments {
                writeln!(f, "{}", comment)?;
            }
            writeln!(f, "{}", include)?;
        }
        // Comments are keyed by name; when names repeat, the entry belongs
        // to the last occurrence and is printed there only.
        let last_occurrence: AHashMap<&str, usize> = self
            .formulas
            .iter()
            .enumerate()
            .map(|(i, formula)| (formula.name(), i))
            .collect();
        for (i, formula) in self.formulas.iter().enumerate() {
            if last_occurrence.get(formula.name()) == Some(&i) {
                if let Some(comments) = self.formula_comments.get(formula.name()) {
                    for comment in comments {
                        writeln!(f, "{}", comment)?;
                    }
                }
            }
            writeln!(f, "{}", formula)?;
        }
        Ok(())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(subrole) = &self.subrole {
            write!(f, "-{}", subrole)?;
        }
        Ok(())
    }
}

impl<L: Language> fmt::Display for Annotated<L> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}({}, {}, {}",
            L::KEYWORD,
            quote_name(&self.name),
            self.role,
            self.formula
        )?;
        if let Some((source, info)) = &self.annotations {
            write!(f, ", {}", source)?;
            if let Some(info) = info {
                write!(f, ", [")?;
                write_separated(f, info, ", ")?;
                write!(f, "]")?;
            }
        }
        write!(f, ").")
    }
}

impl fmt::Display for AnnotatedFormula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AnnotatedFormula::Thf(a) => write!(f, "{}", a),
            AnnotatedFormula::Tff(a) => write!(f, "{}", a),
            AnnotatedFormula::Fof(a) => write!(f, "{}", a),
            AnnotatedFormula::Tcf(a) => write!(f, "{}", a),
            AnnotatedFormula::Cnf(a) => write!(f, "{}", a),
            AnnotatedFormula::Tpi(a) => write!(f, "{}", a),
        }
    }
}

impl fmt::Display for GeneralTerm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_separated(f, &self.data, ":")?;
        if let Some(list) = &self.list {
            if !self.data.is_empty() {
                write!(f, ":")?;
            }
            write!(f, "[")?;
            write_separated(f, list, ", ")?;
            write!(f, "]")?;
        }
        Ok(())
    }
}

impl fmt::Display for GeneralData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GeneralData::Function(name, args) => write_applied(f, name, args),
            GeneralData::Variable(name) => write!(f, "{}", name),
            GeneralData::Number(number) => write!(f, "{}", number),
            GeneralData::DistinctObject(name) => write!(f, "{}", name),
            GeneralData::Formula(data) => write!(f, "{}", data),
        }
    }
}

impl fmt::Display for FormulaData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FormulaData::Thf(statement) => write!(f, "$thf({})", statement),
            FormulaData::Tff(statement) => write!(f, "$tff({})", statement),
            FormulaData::Fof(statement) => write!(f, "$fof({})", statement),
            FormulaData::Cnf(statement) => write!(f, "$cnf({})", statement),
            FormulaData::Fot(term) => write!(f, "$fot({})", term),
        }
    }
}

impl fmt::Display for NonclassicalConnective {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Indexed short forms are deliberately emitted in long form; the
        // parser folds those long forms back, so round trips still close.
        let (name, index, parameters): (&str, _, &[_]) = match self {
            NonclassicalConnective::Box(None) => return write!(f, "[.]"),
            NonclassicalConnective::Diamond(None) => return write!(f, "<.>"),
            NonclassicalConnective::Cone(None) => return write!(f, "/.\\"),
            NonclassicalConnective::Box(index) => ("$box", index, &[]),
            NonclassicalConnective::Diamond(index) => ("$dia", index, &[]),
            NonclassicalConnective::Cone(index) => ("$cone", index, &[]),
            NonclassicalConnective::LongOperator { name, index, parameters } => {
                (name.as_str(), index, parameters)
            }
        };
        write!(f, "{{{}", quote_functor(name))?;
        if index.is_some() || !parameters.is_empty() {
            write!(f, "(")?;
            let mut first = true;
            if let Some(index) = index {
                write!(f, "#{}", index)?;
                first = false;
            }
            for (key, value) in parameters {
                if !first {
                    write!(f, ", ")?;
                }
                write!(f, "{} := {}", key, value)?;
                first = false;
            }
            write!(f, ")")?;
        }
        write!(f, "}}")
    }
}

impl NonclassicalConnective {
    /// Whether the connective still has its short spelling on output.
    fn prints_short(&self) -> bool {
        matches!(
            self,
            NonclassicalConnective::Box(None)
                | NonclassicalConnective::Diamond(None)
                | NonclassicalConnective::Cone(None)
        )
    }
}

impl fmt::Display for thf::Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            thf::Statement::Typing(atom, typ) => write!(f, "{}: {}", quote_functor(atom), typ),
            thf::Statement::Logical(formula) => write!(f, "{}", formula),
            thf::Statement::Sequent(lhs, rhs) => {
                write!(f, "[")?;
                write_separated(f, lhs, ", ")?;
                write!(f, "] --> [")?;
                write_separated(f, rhs, ", ")?;
                write!(f, "]")
            }
        }
    }
}

impl fmt::Display for thf::Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            thf::Formula::Function(name, args) => write_applied(f, name, args),
            thf::Formula::Variable(name) => write!(f, "{}", name),
            thf::Formula::Quantified(quantifier, variables, body) => {
                write!(f, "{} [", quantifier)?;
                let vars: Vec<_> = variables
                    .iter()
                    .map(|(name, typ)| TypedVar(name, Some(typ)))
                    .collect();
                write_separated(f, &vars, ", ")?;
                write!(f, "]: {}", body)
            }
            thf::Formula::Unary(connective, body) => write!(f, "{} {}", connective, body),
            thf::Formula::Binary(connective, left, right) => {
                write!(f, "({} {} {})", left, connective, right)
            }
            thf::Formula::Tuple(elements) => {
                write!(f, "[")?;
                write_separated(f, elements, ", ")?;
                write!(f, "]")
            }
            thf::Formula::Conditional(condition, then, els) => {
                write!(f, "$ite({}, {}, {})", condition, then, els)
            }
            thf::Formula::Let(typings, bindings, body) => {
                let typings: Vec<_> = typings
                    .iter()
                    .map(|(atom, typ)| (quote_functor(atom), typ))
                    .collect();
                write!(
                    f,
                    "$let({}, {}, {})",
                    LetPart(&typings, ": "),
                    LetPart(bindings, " := "),
                    body
                )
            }
            thf::Formula::ConnectiveTerm(connective) => write!(f, "({})", connective),
            thf::Formula::DefinedConstant(constant) => write!(f, "{}", constant),
            thf::Formula::DistinctObject(name) => write!(f, "{}", name),
            thf::Formula::Number(number) => write!(f, "{}", number),
            thf::Formula::Nonclassical(connective, args) => {
                if connective.prints_short() && args.len() == 1 {
                    write!(f, "{} ({})", connective, args[0])
                } else {
                    write!(f, "{}", connective)?;
                    for arg in args {
                        write!(f, " @ {}", arg)?;
                    }
                    Ok(())
                }
            }
        }
    }
}

impl fmt::Display for thf::Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let symbol = match self {
            thf::Quantifier::Forall => "!",
            thf::Quantifier::Exists => "?",
            thf::Quantifier::Lambda => "^",
            thf::Quantifier::Choice => "@+",
            thf::Quantifier::Description => "@-",
            thf::Quantifier::TypedForall => "!>",
            thf::Quantifier::TypedExists => "?*",
            thf::Quantifier::Epsilon => "#",
        };
        write!(f, "{}", symbol)
    }
}

impl fmt::Display for thf::UnaryConnective {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "~")
    }
}

impl fmt::Display for thf::BinaryConnective {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let symbol = match self {
            thf::BinaryConnective::Eq => "=",
            thf::BinaryConnective::Neq => "!=",
            thf::BinaryConnective::Equiv => "<=>",
            thf::BinaryConnective::Impl => "=>",
            thf::BinaryConnective::If => "<=",
            thf::BinaryConnective::Niff => "<~>",
            thf::BinaryConnective::Nor => "~|",
            thf::BinaryConnective::Nand => "~&",
            thf::BinaryConnective::Or => "|",
            thf::BinaryConnective::And => "&",
            thf::BinaryConnective::App => "@",
            thf::BinaryConnective::FunctionType => ">",
            thf::BinaryConnective::ProductType => "*",
            thf::BinaryConnective::SumType => "+",
            thf::BinaryConnective::Assignment => ":=",
            thf::BinaryConnective::Identity => "==",
        };
        write!(f, "{}", symbol)
    }
}

impl fmt::Display for thf::Connective {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            thf::Connective::Unary(c) => write!(f, "{}", c),
            thf::Connective::Binary(c) => write!(f, "{}", c),
        }
    }
}

impl fmt::Display for thf::DefinedConstant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let symbol = match self {
            thf::DefinedConstant::ForallComb => "!!",
            thf::DefinedConstant::ExistsComb => "??",
            thf::DefinedConstant::ChoiceComb => "@@+",
            thf::DefinedConstant::DescriptionComb => "@@-",
            thf::DefinedConstant::EqComb => "@=",
        };
        write!(f, "{}", symbol)
    }
}

impl fmt::Display for tff::Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            tff::Statement::Typing(atom, typ) => write!(f, "{}: {}", quote_functor(atom), typ),
            tff::Statement::Logical(formula) => write!(f, "{}", formula),
            tff::Statement::Sequent(lhs, rhs) => {
                write!(f, "[")?;
                write_separated(f, lhs, ", ")?;
                write!(f, "] --> [")?;
                write_separated(f, rhs, ", ")?;
                write!(f, "]")
            }
        }
    }
}

fn write_tff_variables(f: &mut fmt::Formatter, variables: &[tff::TypedVariable]) -> fmt::Result {
    let vars: Vec<_> = variables
        .iter()
        .map(|(name, typ)| TypedVar(name, typ.as_ref()))
        .collect();
    write_separated(f, &vars, ", ")
}

impl fmt::Display for tff::Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            tff::Formula::Atomic(predicate, args) => write_applied(f, predicate, args),
            tff::Formula::Quantified(quantifier, variables, body) => {
                write!(f, "{} [", quantifier)?;
                write_tff_variables(f, variables)?;
                write!(f, "]: {}", body)
            }
            tff::Formula::Unary(connective, body) => write!(f, "{} {}", connective, body),
            tff::Formula::Binary(connective, left, right) => {
                write!(f, "({} {} {})", left, connective, right)
            }
            tff::Formula::Equality(left, right) => write!(f, "({} = {})", left, right),
            tff::Formula::Inequality(left, right) => write!(f, "({} != {})", left, right),
            tff::Formula::Variable(name) => write!(f, "{}", name),
            tff::Formula::Conditional(condition, then, els) => {
                write!(f, "$ite({}, {}, {})", condition, then, els)
            }
            tff::Formula::Let(typings, bindings, body) => {
                let typings: Vec<_> = typings
                    .iter()
                    .map(|(atom, typ)| (quote_functor(atom), typ))
                    .collect();
                write!(
                    f,
                    "$let({}, {}, {})",
                    LetPart(&typings, ": "),
                    LetPart(bindings, " := "),
                    body
                )
            }
            tff::Formula::Assignment(left, right) => write!(f, "({} := {})", left, right),
            tff::Formula::MetaIdentity(left, right) => write!(f, "({} == {})", left, right),
            tff::Formula::Nonclassical(connective, args) => {
                if connective.prints_short() && args.len() == 1 {
                    write!(f, "{} ({})", connective, args[0])
                } else {
                    write!(f, "{} @ (", connective)?;
                    write_separated(f, args, ", ")?;
                    write!(f, ")")
                }
            }
        }
    }
}

impl fmt::Display for tff::Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            tff::Term::Atomic(function, args) => write_applied(f, function, args),
            tff::Term::Variable(name) => write!(f, "{}", name),
            tff::Term::DistinctObject(name) => write!(f, "{}", name),
            tff::Term::Number(number) => write!(f, "{}", number),
            tff::Term::Tuple(elements) => {
                write!(f, "[")?;
                write_separated(f, elements, ", ")?;
                write!(f, "]")
            }
            tff::Term::Formula(formula) => write!(f, "{}", formula),
        }
    }
}

/// Writes a type in an argument position, where mapping and quantified types
/// need parentheses.
struct TypeArg<'a>(&'a tff::Type);

impl fmt::Display for TypeArg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            tff::Type::Mapping(..) | tff::Type::Quantified(..) => write!(f, "({})", self.0),
            other => write!(f, "{}", other),
        }
    }
}

impl fmt::Display for tff::Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            tff::Type::Atomic(name, args) => write_applied(f, name, args),
            tff::Type::Variable(name) => write!(f, "{}", name),
            tff::Type::Mapping(args, result) => {
                match args.as_slice() {
                    [single] => write!(f, "{}", TypeArg(single))?,
                    many => {
                        write!(f, "(")?;
                        let args: Vec<_> = many.iter().map(TypeArg).collect();
                        write_separated(f, &args, " * ")?;
                        write!(f, ")")?;
                    }
                }
                // The result of a mapping needs no parentheses: `>` is
                // right-associative.
                write!(f, " > {}", result)
            }
            tff::Type::Quantified(variables, body) => {
                write!(f, "!> [")?;
                write_tff_variables(f, variables)?;
                write!(f, "]: {}", TypeArg(body))
            }
            tff::Type::Tuple(elements) => {
                write!(f, "[")?;
                write_separated(f, elements, ", ")?;
                write!(f, "]")
            }
        }
    }
}

impl fmt::Display for tff::Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            tff::Quantifier::Forall => write!(f, "!"),
            tff::Quantifier::Exists => write!(f, "?"),
        }
    }
}

impl fmt::Display for tff::UnaryConnective {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "~")
    }
}

impl fmt::Display for tff::BinaryConnective {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let symbol = match self {
            tff::BinaryConnective::Equiv => "<=>",
            tff::BinaryConnective::Impl => "=>",
            tff::BinaryConnective::If => "<=",
            tff::BinaryConnective::Niff => "<~>",
            tff::BinaryConnective::Nor => "~|",
            tff::BinaryConnective::Nand => "~&",
            tff::BinaryConnective::Or => "|",
            tff::BinaryConnective::And => "&",
        };
        write!(f, "{}", symbol)
    }
}

impl fmt::Display for fof::Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let fof::Statement::Logical(formula) = self;
        write!(f, "{}", formula)
    }
}

impl fmt::Display for fof::Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            fof::Formula::Atomic(predicate, args) => write_applied(f, predicate, args),
            fof::Formula::Quantified(quantifier, variables, body) => {
                write!(f, "{} [", quantifier)?;
                write_separated(f, variables, ", ")?;
                write!(f, "]: {}", body)
            }
            fof::Formula::Unary(connective, body) => write!(f, "{} {}", connective, body),
            fof::Formula::Binary(connective, left, right) => {
                write!(f, "({} {} {})", left, connective, right)
            }
            fof::Formula::Equality(left, right) => write!(f, "({} = {})", left, right),
            fof::Formula::Inequality(left, right) => write!(f, "({} != {})", left, right),
        }
    }
}

impl fmt::Display for fof::Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            fof::Term::Atomic(function, args) => write_applied(f, function, args),
            fof::Term::Variable(name) => write!(f, "{}", name),
            fof::Term::DistinctObject(name) => write!(f, "{}", name),
            fof::Term::Number(number) => write!(f, "{}", number),
        }
    }
}

impl fmt::Display for fof::Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            fof::Quantifier::Forall => write!(f, "!"),
            fof::Quantifier::Exists => write!(f, "?"),
        }
    }
}

impl fmt::Display for fof::UnaryConnective {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "~")
    }
}

impl fmt::Display for fof::BinaryConnective {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let symbol = match self {
            fof::BinaryConnective::Equiv => "<=>",
            fof::BinaryConnective::Impl => "=>",
            fof::BinaryConnective::If => "<=",
            fof::BinaryConnective::Niff => "<~>",
            fof::BinaryConnective::Nor => "~|",
            fof::BinaryConnective::Nand => "~&",
            fof::BinaryConnective::Or => "|",
            fof::BinaryConnective::And => "&",
        };
        write!(f, "{}", symbol)
    }
}

impl fmt::Display for cnf::Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cnf::Statement::Logical(formula) = self;
        write!(f, "{}", formula)
    }
}

impl fmt::Display for cnf::Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_separated(f, &self.0, " | ")
    }
}

impl fmt::Display for cnf::Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            cnf::Literal::Positive(predicate, args) => write_applied(f, predicate, args),
            cnf::Literal::Negative(predicate, args) => {
                write!(f, "~ ")?;
                write_applied(f, predicate, args)
            }
            cnf::Literal::Equality(left, right) => write!(f, "{} = {}", left, right),
            cnf::Literal::Inequality(left, right) => write!(f, "{} != {}", left, right),
        }
    }
}

impl fmt::Display for cnf::Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            cnf::Term::Atomic(function, args) => write_applied(f, function, args),
            cnf::Term::Variable(name) => write!(f, "{}", name),
            cnf::Term::DistinctObject(name) => write!(f, "{}", name),
            cnf::Term::Number(number) => write!(f, "{}", number),
        }
    }
}

impl fmt::Display for tcf::Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            tcf::Statement::Typing(atom, typ) => write!(f, "{}: {}", quote_functor(atom), typ),
            tcf::Statement::Logical(formula) => write!(f, "{}", formula),
        }
    }
}

impl fmt::Display for tcf::Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.variables.is_empty() {
            write!(f, "{}", self.clause)
        } else {
            write!(f, "! [")?;
            write_tff_variables(f, &self.variables)?;
            write!(f, "]: ({})", self.clause)
        }
    }
}
