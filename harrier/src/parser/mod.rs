//! A hand-written recursive-descent parser for the TPTP input languages.
//!
//! One [`Parser`] drives one [`Lexer`] to completion. The parser keeps a
//! single growing look-ahead buffer; peeking never consumes input, and most
//! productions need no more than three tokens of look-ahead (plus
//! [`Parser::peek_past`] to see through runs of parentheses).
//!
//! Comment tokens are stashed into a pending buffer the moment they are
//! pulled from the lexer; the top-level loop attaches the buffer to the next
//! include or annotated formula, and drops whatever is left at end of input.

pub mod error;
pub mod lexer;

mod cnf;
mod fof;
mod tff;
mod thf;
#[cfg(test)]
mod tests;

pub use error::ParserError;
pub use lexer::{Lexer, Position, Token, TokenKind};

use crate::ast::{
    cnf as cnf_ast, fof as fof_ast, tcf as tcf_ast, tff as tff_ast, thf as thf_ast, Annotated,
    AnnotatedFormula, Cnf, CnfAnnotated, Comment, CommentFormat, CommentKind, Fof, FofAnnotated,
    FormulaData, GeneralData, GeneralTerm, Include, Language, Meta, NonclassicalConnective,
    Problem, Role, Tcf, TcfAnnotated, Tff, TffAnnotated, Thf, ThfAnnotated, Tpi, TpiAnnotated,
};
use crate::{Error, HarrierResult};
use num_bigint::BigInt;
use num_traits::One;
use std::collections::VecDeque;
use std::io::BufRead;

/// Parses a whole problem file: includes and annotated formulas of any
/// dialect, with leading comments attached.
pub fn parse_problem(input: impl BufRead) -> HarrierResult<Problem> {
    Parser::new(input)?.problem()
}

/// Parses a single annotated formula, dispatching on its leading keyword.
pub fn parse_annotated(input: impl BufRead) -> HarrierResult<AnnotatedFormula> {
    let mut parser = Parser::new(input)?;
    let formula = parser.annotated_formula()?;
    parser.expect_end()?;
    Ok(formula)
}

macro_rules! annotated_entry {
    ($(#[$attr:meta])* $name:ident, $method:ident, $annotated:ident) => {
        $(#[$attr])*
        pub fn $name(input: impl BufRead) -> HarrierResult<$annotated> {
            let mut parser = Parser::new(input)?;
            let formula = parser.$method()?;
            parser.expect_end()?;
            Ok(formula)
        }
    };
}

annotated_entry! {
    /// Parses a single `thf(…).` annotated formula.
    parse_annotated_thf, annotated_thf, ThfAnnotated
}
annotated_entry! {
    /// Parses a single `tff(…).` annotated formula.
    parse_annotated_tff, annotated_tff, TffAnnotated
}
annotated_entry! {
    /// Parses a single `fof(…).` annotated formula.
    parse_annotated_fof, annotated_fof, FofAnnotated
}
annotated_entry! {
    /// Parses a single `tcf(…).` annotated formula.
    parse_annotated_tcf, annotated_tcf, TcfAnnotated
}
annotated_entry! {
    /// Parses a single `cnf(…).` annotated formula.
    parse_annotated_cnf, annotated_cnf, CnfAnnotated
}
annotated_entry! {
    /// Parses a single `tpi(…).` annotated formula.
    parse_annotated_tpi, annotated_tpi, TpiAnnotated
}

/// Parses a bare THF statement (a logical formula, typing or sequent).
pub fn parse_thf(input: impl BufRead) -> HarrierResult<thf_ast::Statement> {
    let mut parser = Parser::new(input)?;
    let statement = parser.thf_statement()?;
    parser.expect_end()?;
    Ok(statement)
}

/// Parses a bare TFF statement, with the TFX extensions enabled.
pub fn parse_tff(input: impl BufRead) -> HarrierResult<tff_ast::Statement> {
    let mut parser = Parser::new(input)?;
    let statement = parser.tff_statement(true)?;
    parser.expect_end()?;
    Ok(statement)
}

/// Parses a bare FOF statement.
pub fn parse_fof(input: impl BufRead) -> HarrierResult<fof_ast::Statement> {
    let mut parser = Parser::new(input)?;
    let statement = parser.fof_statement()?;
    parser.expect_end()?;
    Ok(statement)
}

/// Parses a bare TCF statement.
pub fn parse_tcf(input: impl BufRead) -> HarrierResult<tcf_ast::Statement> {
    let mut parser = Parser::new(input)?;
    let statement = parser.tcf_statement()?;
    parser.expect_end()?;
    Ok(statement)
}

/// Parses a bare CNF clause.
pub fn parse_cnf(input: impl BufRead) -> HarrierResult<cnf_ast::Statement> {
    let mut parser = Parser::new(input)?;
    let statement = parser.cnf_statement()?;
    parser.expect_end()?;
    Ok(statement)
}

/// Parses a bare TPI statement; TPI is syntactically FOF.
pub fn parse_tpi(input: impl BufRead) -> HarrierResult<fof_ast::Statement> {
    parse_fof(input)
}

/// Reduces an associative connective chain to the left:
/// `[a, b, c]` becomes `(a ∘ b) ∘ c`.
fn fold_left<T>(operands: Vec<T>, mut combine: impl FnMut(T, T) -> T) -> T {
    let mut iter = operands.into_iter();
    let mut folded = iter.next().expect("empty operator chain");
    for operand in iter {
        folded = combine(folded, operand);
    }
    folded
}

/// Reduces an associative connective chain to the right:
/// `[a, b, c]` becomes `a ∘ (b ∘ c)`.
fn fold_right<T>(operands: Vec<T>, mut combine: impl FnMut(T, T) -> T) -> T {
    let mut iter = operands.into_iter().rev();
    let mut folded = iter.next().expect("empty operator chain");
    for operand in iter {
        folded = combine(operand, folded);
    }
    folded
}

fn comment_from_token(token: Token) -> Comment {
    let (format, kind) = match token.kind {
        TokenKind::LineComment => (CommentFormat::Line, CommentKind::Normal),
        TokenKind::DefinedLineComment => (CommentFormat::Line, CommentKind::Defined),
        TokenKind::SystemLineComment => (CommentFormat::Line, CommentKind::System),
        TokenKind::BlockComment => (CommentFormat::Block, CommentKind::Normal),
        TokenKind::DefinedBlockComment => (CommentFormat::Block, CommentKind::Defined),
        TokenKind::SystemBlockComment => (CommentFormat::Block, CommentKind::System),
        _ => unreachable!("comment_from_token called on a non-comment token"),
    };
    Comment { format, kind, content: token.payload }
}

fn parse_big_int(s: &str) -> BigInt {
    s.trim_start_matches('+')
        .parse()
        .expect("lexer produced an invalid number payload")
}

fn parse_real(payload: &str) -> crate::ast::Number {
    let negative = payload.starts_with('-');
    let unsigned = payload.trim_start_matches(['+', '-']);
    let (mantissa, exponent) = match unsigned.split_once(['E', 'e']) {
        Some((mantissa, exponent)) => (mantissa, parse_big_int(exponent)),
        None => (unsigned, BigInt::one()),
    };
    let (wholes, decimal) = match mantissa.split_once('.') {
        Some((wholes, decimal)) => (wholes, decimal.to_owned()),
        None => (mantissa, String::new()),
    };
    crate::ast::Number::Real {
        negative,
        wholes: parse_big_int(wholes),
        decimal,
        exponent,
    }
}

/// A parser for the TPTP input languages.
pub struct Parser {
    lexer: Lexer,
    lookahead: VecDeque<Token>,
    pending_comments: Vec<Comment>,
    last_position: Option<Position>,
}

impl Parser {
    /// Constructs a new `Parser`. This operation can fail if there is an IO
    /// error while reading the input.
    pub fn new(input: impl BufRead) -> HarrierResult<Self> {
        Ok(Parser {
            lexer: Lexer::new(input)?,
            lookahead: VecDeque::new(),
            pending_comments: Vec::new(),
            last_position: None,
        })
    }

    /// Ensures at least `n` tokens of look-ahead (unless the input ends
    /// first). Comment tokens never enter the buffer; they are stashed into
    /// the pending comment buffer as they are pulled from the lexer.
    fn fill(&mut self, n: usize) -> HarrierResult<()> {
        while self.lookahead.len() < n {
            match self.lexer.next_token()? {
                None => break,
                Some(token) if token.kind.is_comment() => {
                    self.pending_comments.push(comment_from_token(token));
                }
                Some(token) => self.lookahead.push_back(token),
            }
        }
        Ok(())
    }

    /// The token `i` positions ahead, or `None` at end of input. Never
    /// consumes.
    fn safe_peek(&mut self, i: usize) -> HarrierResult<Option<&Token>> {
        self.fill(i + 1)?;
        Ok(self.lookahead.get(i))
    }

    fn peek_kind(&mut self, i: usize) -> HarrierResult<Option<TokenKind>> {
        Ok(self.safe_peek(i)?.map(|token| token.kind))
    }

    /// The look-ahead index of the first token that is not of kind `skip`.
    /// Used to see through runs of `(` when disambiguating typings and
    /// sequents from formulas.
    fn peek_past(&mut self, skip: TokenKind) -> HarrierResult<usize> {
        let mut i = 0;
        while self.peek_kind(i)? == Some(skip) {
            i += 1;
        }
        Ok(i)
    }

    /// Removes and returns the front token, which must have been peeked
    /// successfully before.
    fn consume(&mut self) -> Token {
        let token = self
            .lookahead
            .pop_front()
            .expect("consume called without look-ahead");
        self.last_position = Some(token.position);
        token
    }

    /// Consumes the current token if it has the given kind.
    fn consume_if(&mut self, kind: TokenKind) -> HarrierResult<bool> {
        if self.peek_kind(0)? == Some(kind) {
            self.consume();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consumes the current token if it has the given kind, and returns an
    /// error otherwise.
    fn expect(&mut self, kind: TokenKind) -> HarrierResult<Token> {
        match self.peek_kind(0)? {
            Some(k) if k == kind => Ok(self.consume()),
            Some(_) => self.unexpected(kind.name()),
            None => self.eof(kind.name()),
        }
    }

    fn error_at<T>(&self, error: ParserError, position: Position) -> HarrierResult<T> {
        Err(Error::Parser(error, Some(position)))
    }

    /// Builds an end-of-input error at the last consumed token's position
    /// (or without a position for empty input).
    fn eof<T>(&self, expected: impl Into<String>) -> HarrierResult<T> {
        Err(Error::Parser(
            ParserError::UnexpectedEof(expected.into()),
            self.last_position,
        ))
    }

    /// Builds an "expected … but read …" error for the current token, or an
    /// end-of-input error if there is none.
    fn unexpected<T>(&mut self, expected: impl Into<String>) -> HarrierResult<T> {
        match self.safe_peek(0)? {
            Some(token) => {
                let (position, got) = (token.position, token.to_string());
                self.error_at(ParserError::UnexpectedToken { expected: expected.into(), got }, position)
            }
            None => self.eof(expected),
        }
    }

    /// The position of the current token, for error reporting on constructs
    /// that fail only after some look-ahead.
    fn peek_position(&mut self) -> HarrierResult<Option<Position>> {
        Ok(self.safe_peek(0)?.map(|token| token.position))
    }

    /// Errors unless the input is exhausted.
    fn expect_end(&mut self) -> HarrierResult<()> {
        match self.safe_peek(0)? {
            None => Ok(()),
            Some(_) => self.unexpected("end of input"),
        }
    }

    /// Parses a whole problem file.
    pub fn problem(&mut self) -> HarrierResult<Problem> {
        const DISPATCH: &str =
            "one of 'include', 'thf', 'tff', 'fof', 'tcf', 'cnf', 'tpi'";

        let mut problem = Problem::new();
        loop {
            let (kind, keyword) = match self.safe_peek(0)? {
                Some(token) => (token.kind, token.payload.clone()),
                None => break,
            };
            if kind != TokenKind::LowerWord {
                return self.unexpected(DISPATCH);
            }
            // Everything stashed up to here belongs to this construct.
            let comments = std::mem::take(&mut self.pending_comments);
            if keyword == "include" {
                let mut include = self.include()?;
                include.comments = comments;
                problem.includes.push(include);
            } else {
                let formula = self.annotated_with_keyword(&keyword, DISPATCH)?;
                // The map is keyed by name: the latest occurrence of a name
                // owns the entry, and one without leading comments clears it.
                if comments.is_empty() {
                    problem.formula_comments.shift_remove(formula.name());
                } else {
                    problem
                        .formula_comments
                        .insert(formula.name().to_owned(), comments);
                }
                problem.formulas.push(formula);
            }
        }
        Ok(problem)
    }

    /// Parses one annotated formula of any dialect, dispatching on the
    /// leading keyword.
    pub fn annotated_formula(&mut self) -> HarrierResult<AnnotatedFormula> {
        const DISPATCH: &str = "one of 'thf', 'tff', 'fof', 'tcf', 'cnf', 'tpi'";
        let keyword = match self.safe_peek(0)? {
            Some(token) if token.kind == TokenKind::LowerWord => token.payload.clone(),
            Some(_) => return self.unexpected(DISPATCH),
            None => return self.eof(DISPATCH),
        };
        self.annotated_with_keyword(&keyword, DISPATCH)
    }

    fn annotated_with_keyword(
        &mut self,
        keyword: &str,
        expected: &str,
    ) -> HarrierResult<AnnotatedFormula> {
        match keyword {
            "thf" => Ok(AnnotatedFormula::Thf(self.annotated_thf()?)),
            "tff" => Ok(AnnotatedFormula::Tff(self.annotated_tff()?)),
            "fof" => Ok(AnnotatedFormula::Fof(self.annotated_fof()?)),
            "tcf" => Ok(AnnotatedFormula::Tcf(self.annotated_tcf()?)),
            "cnf" => Ok(AnnotatedFormula::Cnf(self.annotated_cnf()?)),
            "tpi" => Ok(AnnotatedFormula::Tpi(self.annotated_tpi()?)),
            _ => self.unexpected(expected),
        }
    }

    pub fn annotated_thf(&mut self) -> HarrierResult<ThfAnnotated> {
        self.annotated::<Thf, _>(|parser| parser.thf_statement())
    }

    pub fn annotated_tff(&mut self) -> HarrierResult<TffAnnotated> {
        self.annotated::<Tff, _>(|parser| parser.tff_statement(true))
    }

    pub fn annotated_fof(&mut self) -> HarrierResult<FofAnnotated> {
        self.annotated::<Fof, _>(|parser| parser.fof_statement())
    }

    pub fn annotated_tcf(&mut self) -> HarrierResult<TcfAnnotated> {
        self.annotated::<Tcf, _>(|parser| parser.tcf_statement())
    }

    pub fn annotated_cnf(&mut self) -> HarrierResult<CnfAnnotated> {
        self.annotated::<Cnf, _>(|parser| parser.cnf_statement())
    }

    pub fn annotated_tpi(&mut self) -> HarrierResult<TpiAnnotated> {
        self.annotated::<Tpi, _>(|parser| parser.fof_statement())
    }

    /// Parses the common annotated-formula shell
    /// `keyword(name, role, formula[, source[, [info]]]).` around a
    /// dialect-specific statement parser, and records the keyword position
    /// as the formula's origin.
    fn annotated<L, F>(&mut self, parse_statement: F) -> HarrierResult<Annotated<L>>
    where
        L: Language,
        F: FnOnce(&mut Self) -> HarrierResult<L::Statement>,
    {
        let keyword = self.expect(TokenKind::LowerWord)?;
        if keyword.payload != L::KEYWORD {
            let got = keyword.to_string();
            return self.error_at(
                ParserError::UnexpectedToken { expected: format!("'{}'", L::KEYWORD), got },
                keyword.position,
            );
        }
        let origin = keyword.position;
        self.expect(TokenKind::LeftParen)?;
        let name = self.name()?;
        self.expect(TokenKind::Comma)?;
        let role = self.role()?;
        self.expect(TokenKind::Comma)?;
        let formula = parse_statement(self)?;
        let annotations = if self.consume_if(TokenKind::Comma)? {
            let source = self.general_term()?;
            let info = if self.consume_if(TokenKind::Comma)? {
                Some(self.general_list()?)
            } else {
                None
            };
            Some((source, info))
        } else {
            None
        };
        self.expect(TokenKind::RightParen)?;
        self.expect(TokenKind::Dot)?;
        Ok(Annotated {
            name,
            role,
            formula,
            annotations,
            meta: Meta::with_origin(origin),
        })
    }

    /// Parses a name: an atomic word or an integer.
    fn name(&mut self) -> HarrierResult<String> {
        match self.peek_kind(0)? {
            Some(TokenKind::LowerWord | TokenKind::SingleQuoted | TokenKind::Integer) => {
                Ok(self.consume().payload)
            }
            Some(_) => self.unexpected("a name"),
            None => self.eof("a name"),
        }
    }

    /// Parses a role, with an optional `-` sub-role refinement.
    fn role(&mut self) -> HarrierResult<Role> {
        let name = self.expect(TokenKind::LowerWord)?.payload;
        let subrole = if self.consume_if(TokenKind::Minus)? {
            Some(self.general_term()?)
        } else {
            None
        };
        Ok(Role { name, subrole })
    }

    /// Parses an `include` directive, sans leading comments.
    fn include(&mut self) -> HarrierResult<Include> {
        self.expect(TokenKind::LowerWord)?; // `include`, checked by the caller
        self.expect(TokenKind::LeftParen)?;
        let file_name = match self.peek_kind(0)? {
            // The lexer canonicalizes quoted lower words, so both kinds are
            // file names here.
            Some(TokenKind::SingleQuoted | TokenKind::LowerWord) => self.consume().payload,
            Some(_) => return self.unexpected("a file name"),
            None => return self.eof("a file name"),
        };
        let mut selection = Vec::new();
        if self.consume_if(TokenKind::Comma)? {
            self.expect(TokenKind::LeftBracket)?;
            loop {
                selection.push(self.name()?);
                if !self.consume_if(TokenKind::Comma)? {
                    break;
                }
            }
            self.expect(TokenKind::RightBracket)?;
        }
        self.expect(TokenKind::RightParen)?;
        self.expect(TokenKind::Dot)?;
        Ok(Include {
            file_name,
            selection,
            comments: Vec::new(),
        })
    }

    /// Parses a general term:
    /// `general_data (: general_data)* (: general_list)?` or a bare list.
    /// The colon is right-associative.
    pub(crate) fn general_term(&mut self) -> HarrierResult<GeneralTerm> {
        let mut data = Vec::new();
        let mut list = None;
        loop {
            if self.peek_kind(0)? == Some(TokenKind::LeftBracket) {
                list = Some(self.general_list()?);
                break;
            }
            data.push(self.general_data()?);
            if !self.consume_if(TokenKind::Colon)? {
                break;
            }
        }
        Ok(GeneralTerm { data, list })
    }

    fn general_list(&mut self) -> HarrierResult<Vec<GeneralTerm>> {
        self.expect(TokenKind::LeftBracket)?;
        let mut items = Vec::new();
        if self.peek_kind(0)? != Some(TokenKind::RightBracket) {
            loop {
                items.push(self.general_term()?);
                if !self.consume_if(TokenKind::Comma)? {
                    break;
                }
            }
        }
        self.expect(TokenKind::RightBracket)?;
        Ok(items)
    }

    fn general_data(&mut self) -> HarrierResult<GeneralData> {
        match self.peek_kind(0)? {
            Some(TokenKind::LowerWord | TokenKind::SingleQuoted) => {
                let name = self.consume().payload;
                let mut args = Vec::new();
                if self.consume_if(TokenKind::LeftParen)? {
                    loop {
                        args.push(self.general_term()?);
                        if !self.consume_if(TokenKind::Comma)? {
                            break;
                        }
                    }
                    self.expect(TokenKind::RightParen)?;
                }
                Ok(GeneralData::Function(name, args))
            }
            Some(TokenKind::UpperWord) => Ok(GeneralData::Variable(self.consume().payload)),
            Some(TokenKind::Integer | TokenKind::Rational | TokenKind::Real) => {
                Ok(GeneralData::Number(self.number()?))
            }
            Some(TokenKind::DoubleQuoted) => {
                Ok(GeneralData::DistinctObject(self.consume().payload))
            }
            Some(TokenKind::DollarWord) => {
                let token = self.consume();
                let data = match token.payload.as_str() {
                    "$thf" => {
                        self.expect(TokenKind::LeftParen)?;
                        let statement = self.thf_statement()?;
                        self.expect(TokenKind::RightParen)?;
                        FormulaData::Thf(Box::new(statement))
                    }
                    "$tff" => {
                        self.expect(TokenKind::LeftParen)?;
                        let statement = self.tff_statement(true)?;
                        self.expect(TokenKind::RightParen)?;
                        FormulaData::Tff(Box::new(statement))
                    }
                    "$fof" => {
                        self.expect(TokenKind::LeftParen)?;
                        let statement = self.fof_statement()?;
                        self.expect(TokenKind::RightParen)?;
                        FormulaData::Fof(Box::new(statement))
                    }
                    "$cnf" => {
                        self.expect(TokenKind::LeftParen)?;
                        let statement = self.cnf_statement()?;
                        self.expect(TokenKind::RightParen)?;
                        FormulaData::Cnf(Box::new(statement))
                    }
                    "$fot" => {
                        self.expect(TokenKind::LeftParen)?;
                        let term = self.fof_term()?;
                        self.expect(TokenKind::RightParen)?;
                        FormulaData::Fot(Box::new(term))
                    }
                    _ => {
                        let got = token.to_string();
                        return self.error_at(
                            ParserError::UnexpectedToken {
                                expected: "one of '$thf', '$tff', '$fof', '$cnf', '$fot'".into(),
                                got,
                            },
                            token.position,
                        );
                    }
                };
                Ok(GeneralData::Formula(data))
            }
            Some(_) => self.unexpected("a general term"),
            None => self.eof("a general term"),
        }
    }

    /// Converts the current number token into a [`crate::ast::Number`].
    fn number(&mut self) -> HarrierResult<crate::ast::Number> {
        match self.peek_kind(0)? {
            Some(TokenKind::Integer) => {
                Ok(crate::ast::Number::Integer(parse_big_int(&self.consume().payload)))
            }
            Some(TokenKind::Rational) => {
                let payload = self.consume().payload;
                let (numerator, denominator) = payload
                    .split_once('/')
                    .expect("rational token without a '/'");
                Ok(crate::ast::Number::Rational(
                    parse_big_int(numerator),
                    parse_big_int(denominator),
                ))
            }
            Some(TokenKind::Real) => Ok(parse_real(&self.consume().payload)),
            Some(_) => self.unexpected("a number"),
            None => self.eof("a number"),
        }
    }

    /// Whether (past any leading parentheses) an `atom :` typing opens here.
    fn typing_follows(&mut self) -> HarrierResult<bool> {
        let i = self.peek_past(TokenKind::LeftParen)?;
        let is_atom = matches!(
            self.peek_kind(i)?,
            Some(
                TokenKind::LowerWord
                    | TokenKind::SingleQuoted
                    | TokenKind::DollarWord
                    | TokenKind::DollarDollarWord
            )
        );
        Ok(is_atom && self.peek_kind(i + 1)? == Some(TokenKind::Colon))
    }

    /// Whether (past any leading parentheses) a `[…] -->` sequent opens
    /// here. Pure look-ahead; nothing is consumed.
    fn sequent_follows(&mut self) -> HarrierResult<bool> {
        let mut i = self.peek_past(TokenKind::LeftParen)?;
        if self.peek_kind(i)? != Some(TokenKind::LeftBracket) {
            return Ok(false);
        }
        let mut depth = 0usize;
        loop {
            match self.peek_kind(i)? {
                None => return Ok(false),
                Some(TokenKind::LeftBracket) => depth += 1,
                Some(TokenKind::RightBracket) => {
                    depth -= 1;
                    if depth == 0 {
                        i += 1;
                        break;
                    }
                }
                Some(_) => (),
            }
            i += 1;
        }
        Ok(self.peek_kind(i)? == Some(TokenKind::SequentArrow))
    }

    /// Parses the atom of a typing statement.
    fn typing_atom(&mut self) -> HarrierResult<String> {
        match self.peek_kind(0)? {
            Some(
                TokenKind::LowerWord
                | TokenKind::SingleQuoted
                | TokenKind::DollarWord
                | TokenKind::DollarDollarWord,
            ) => Ok(self.consume().payload),
            Some(_) => self.unexpected("an atom"),
            None => self.eof("an atom"),
        }
    }

    /// Parses a long-form non-classical connective
    /// `{name(#index, key := value, …)}`, with the `{` still unconsumed.
    /// `{$box(#i)}`, `{$dia(#i)}` and `{$cone(#i)}` without parameters fold
    /// back into the indexed short-form connectives they serialize.
    fn nonclassical_long_connective(&mut self) -> HarrierResult<NonclassicalConnective> {
        self.expect(TokenKind::LeftBrace)?;
        let name = self.typing_atom()?;
        let mut index = None;
        let mut parameters = Vec::new();
        if self.consume_if(TokenKind::LeftParen)? {
            if self.consume_if(TokenKind::Hash)? {
                index = Some(self.general_term()?);
                if self.consume_if(TokenKind::Comma)? {
                    self.nonclassical_parameters(&mut parameters)?;
                }
            } else {
                self.nonclassical_parameters(&mut parameters)?;
            }
            self.expect(TokenKind::RightParen)?;
        }
        self.expect(TokenKind::RightBrace)?;

        if parameters.is_empty() && index.is_some() {
            match name.as_str() {
                "$box" => return Ok(NonclassicalConnective::Box(index)),
                "$dia" => return Ok(NonclassicalConnective::Diamond(index)),
                "$cone" => return Ok(NonclassicalConnective::Cone(index)),
                _ => (),
            }
        }
        Ok(NonclassicalConnective::LongOperator { name, index, parameters })
    }

    fn nonclassical_parameters(
        &mut self,
        parameters: &mut Vec<(GeneralTerm, GeneralTerm)>,
    ) -> HarrierResult<()> {
        loop {
            let key = self.general_term()?;
            self.expect(TokenKind::Assignment)?;
            let value = self.general_term()?;
            parameters.push((key, value));
            if !self.consume_if(TokenKind::Comma)? {
                break;
            }
        }
        Ok(())
    }

    /// Parses a short-form non-classical connective (`[.]`, `<.>`, `/.\` or
    /// an indexed variant), with the opening token still unconsumed.
    fn nonclassical_short_connective(&mut self) -> HarrierResult<NonclassicalConnective> {
        let open = self.consume();
        let index = if self.consume_if(TokenKind::Hash)? {
            // Indexed short forms are not strict TPTP; they are accepted and
            // re-emitted in long form.
            log::warn!(
                "indexed short-form non-classical operator at line {}, column {}",
                open.position.0,
                open.position.1
            );
            Some(self.general_term()?)
        } else {
            self.expect(TokenKind::Dot)?;
            None
        };
        match open.kind {
            TokenKind::LeftBracket => {
                self.expect(TokenKind::RightBracket)?;
                Ok(NonclassicalConnective::Box(index))
            }
            TokenKind::LessSign => {
                self.expect(TokenKind::Arrow)?;
                Ok(NonclassicalConnective::Diamond(index))
            }
            TokenKind::Slash => {
                self.expect(TokenKind::Backslash)?;
                Ok(NonclassicalConnective::Cone(index))
            }
            _ => unreachable!("not a short-form connective opener"),
        }
    }
}
