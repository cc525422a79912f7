//! The TFF grammar, including the type grammar and the TFX extensions.
//!
//! In TFX any formula can occur at a term position, so the recursive
//! routines here parse at term level ([`tff::Term`]) and convert to
//! [`tff::Formula`] at formula positions. The `tfx` flag gates the TFX
//! productions: with it off (as TCF requires), tuples, formula variables and
//! terms at formula positions are rejected.

use super::{fold_right, Parser, ParserError, Position, TokenKind};
use crate::ast::tff;
use crate::{Error, HarrierResult};

fn nonassoc_connective(kind: TokenKind) -> Option<tff::BinaryConnective> {
    match kind {
        TokenKind::Iff => Some(tff::BinaryConnective::Equiv),
        TokenKind::Implies => Some(tff::BinaryConnective::Impl),
        TokenKind::If => Some(tff::BinaryConnective::If),
        TokenKind::Niff => Some(tff::BinaryConnective::Niff),
        TokenKind::Nor => Some(tff::BinaryConnective::Nor),
        TokenKind::Nand => Some(tff::BinaryConnective::Nand),
        _ => None,
    }
}

/// Moves a formula to term level. Plain atoms stay [`tff::Term::Atomic`];
/// everything else is wrapped, so the wrapping is canonical and round-trips.
fn as_term(formula: tff::Formula) -> tff::Term {
    match formula {
        tff::Formula::Atomic(name, args) => tff::Term::Atomic(name, args),
        other => tff::Term::Formula(Box::new(other)),
    }
}

impl Parser {
    /// Parses a TFF statement: a typing, a sequent (TFX), or a logical
    /// formula. With `tfx` disabled the parser accepts plain TF0/TF1 only.
    pub fn tff_statement(&mut self, tfx: bool) -> HarrierResult<tff::Statement> {
        if self.typing_follows()? {
            let (atom, typ) = self.tff_typing()?;
            return Ok(tff::Statement::Typing(atom, typ));
        }
        if tfx && self.sequent_follows()? {
            return self.tff_sequent();
        }
        Ok(tff::Statement::Logical(self.tff_logic_formula(tfx)?))
    }

    /// Parses `atom : type`, possibly wrapped in parentheses.
    pub(crate) fn tff_typing(&mut self) -> HarrierResult<(String, tff::Type)> {
        let mut depth = 0;
        while self.consume_if(TokenKind::LeftParen)? {
            depth += 1;
        }
        let atom = self.typing_atom()?;
        self.expect(TokenKind::Colon)?;
        let typ = self.tff_top_level_type()?;
        for _ in 0..depth {
            self.expect(TokenKind::RightParen)?;
        }
        Ok((atom, typ))
    }

    fn tff_sequent(&mut self) -> HarrierResult<tff::Statement> {
        let mut depth = 0;
        while self.consume_if(TokenKind::LeftParen)? {
            depth += 1;
        }
        let lhs = self.tff_tuple_elements()?;
        self.expect(TokenKind::SequentArrow)?;
        let rhs = self.tff_tuple_elements()?;
        for _ in 0..depth {
            self.expect(TokenKind::RightParen)?;
        }
        Ok(tff::Statement::Sequent(lhs, rhs))
    }

    /// Parses a bracketed, comma-separated (possibly empty) term list.
    fn tff_tuple_elements(&mut self) -> HarrierResult<Vec<tff::Term>> {
        self.expect(TokenKind::LeftBracket)?;
        let mut elements = Vec::new();
        if self.peek_kind(0)? != Some(TokenKind::RightBracket) {
            loop {
                elements.push(self.tff_logic_formula_or_term(true)?);
                if !self.consume_if(TokenKind::Comma)? {
                    break;
                }
            }
        }
        self.expect(TokenKind::RightBracket)?;
        Ok(elements)
    }

    pub(crate) fn tff_logic_formula(&mut self, tfx: bool) -> HarrierResult<tff::Formula> {
        let position = self.peek_position()?;
        let term = self.tff_logic_formula_or_term(tfx)?;
        self.tff_as_formula(term, tfx, position)
    }

    /// The logic-formula grammar at term level: a unit, then an optional
    /// binary structure (`|`/`&` chains, one non-associative connective, or
    /// the TFX `:=`/`==`).
    fn tff_logic_formula_or_term(&mut self, tfx: bool) -> HarrierResult<tff::Term> {
        let position = self.peek_position()?;
        let first = self.tff_unit_formula_or_term(tfx, true)?;
        let mut result = match self.peek_kind(0)? {
            Some(TokenKind::Vline) => self.tff_assoc_chain(
                first,
                TokenKind::Vline,
                tff::BinaryConnective::Or,
                tfx,
                position,
            )?,
            Some(TokenKind::Ampersand) => self.tff_assoc_chain(
                first,
                TokenKind::Ampersand,
                tff::BinaryConnective::And,
                tfx,
                position,
            )?,
            Some(kind) if nonassoc_connective(kind).is_some() => {
                let connective = nonassoc_connective(kind).unwrap();
                self.consume();
                let left = self.tff_as_formula(first, tfx, position)?;
                let right_position = self.peek_position()?;
                let right = self.tff_unit_formula_or_term(tfx, true)?;
                let right = self.tff_as_formula(right, tfx, right_position)?;
                as_term(tff::Formula::Binary(
                    connective,
                    Box::new(left),
                    Box::new(right),
                ))
            }
            Some(TokenKind::Assignment) if tfx => {
                self.consume();
                let right = self.tff_unit_formula_or_term(tfx, true)?;
                as_term(tff::Formula::Assignment(first, right))
            }
            _ => first,
        };
        if tfx && self.consume_if(TokenKind::Identity)? {
            let right = self.tff_unit_formula_or_term(tfx, true)?;
            result = as_term(tff::Formula::MetaIdentity(result, right));
        }
        Ok(result)
    }

    /// Collects a `|` or `&` chain and reduces it to the right.
    fn tff_assoc_chain(
        &mut self,
        first: tff::Term,
        kind: TokenKind,
        connective: tff::BinaryConnective,
        tfx: bool,
        position: Option<Position>,
    ) -> HarrierResult<tff::Term> {
        let mut operands = vec![self.tff_as_formula(first, tfx, position)?];
        while self.consume_if(kind)? {
            let position = self.peek_position()?;
            let operand = self.tff_unit_formula_or_term(tfx, true)?;
            operands.push(self.tff_as_formula(operand, tfx, position)?);
        }
        Ok(as_term(fold_right(operands, |l, r| {
            tff::Formula::Binary(connective, Box::new(l), Box::new(r))
        })))
    }

    /// Parses one TFF unit at term level. Equality attaches here: after an
    /// atom or term, a trailing `=`/`!=` consumes one more unit on the
    /// right.
    fn tff_unit_formula_or_term(
        &mut self,
        tfx: bool,
        accept_eq: bool,
    ) -> HarrierResult<tff::Term> {
        let Some(token) = self.safe_peek(0)? else {
            return self.eof("a formula");
        };
        let kind = token.kind;
        let mut term = match kind {
            TokenKind::Bang | TokenKind::Question => {
                as_term(self.tff_quantified_formula(tfx)?)
            }
            TokenKind::Tilde => {
                self.consume();
                let position = self.peek_position()?;
                let body = self.tff_unit_formula_or_term(tfx, true)?;
                let body = self.tff_as_formula(body, tfx, position)?;
                as_term(tff::Formula::Unary(tff::UnaryConnective::Not, Box::new(body)))
            }
            TokenKind::LeftParen => {
                self.consume();
                let inner = self.tff_logic_formula_or_term(tfx)?;
                self.expect(TokenKind::RightParen)?;
                inner
            }
            TokenKind::LeftBracket => match self.peek_kind(1)? {
                Some(TokenKind::Dot | TokenKind::Hash) => {
                    as_term(self.tff_nonclassical_short(tfx)?)
                }
                _ if tfx => tff::Term::Tuple(self.tff_tuple_elements()?),
                _ => return self.unexpected("a formula"),
            },
            TokenKind::LessSign | TokenKind::Slash
                if matches!(self.peek_kind(1)?, Some(TokenKind::Dot | TokenKind::Hash)) =>
            {
                as_term(self.tff_nonclassical_short(tfx)?)
            }
            TokenKind::LeftBrace => as_term(self.tff_nonclassical_long(tfx)?),
            TokenKind::LowerWord
            | TokenKind::SingleQuoted
            | TokenKind::DollarWord
            | TokenKind::DollarDollarWord => self.tff_atomic_term(tfx)?,
            TokenKind::UpperWord => tff::Term::Variable(self.consume().payload),
            TokenKind::DoubleQuoted => tff::Term::DistinctObject(self.consume().payload),
            TokenKind::Integer | TokenKind::Rational | TokenKind::Real => {
                tff::Term::Number(self.number()?)
            }
            _ => return self.unexpected("a formula"),
        };

        if accept_eq {
            if let Some(operator @ (TokenKind::Equals | TokenKind::NotEquals)) =
                self.peek_kind(0)?
            {
                self.consume();
                let right = self.tff_unit_formula_or_term(tfx, false)?;
                let formula = if operator == TokenKind::Equals {
                    tff::Formula::Equality(term, right)
                } else {
                    tff::Formula::Inequality(term, right)
                };
                term = as_term(formula);
            }
        }
        Ok(term)
    }

    /// Converts a parsed term to a formula. Atoms become atomic formulas;
    /// in TFX a variable becomes a formula variable; anything else is a term
    /// at a formula position and rejected.
    fn tff_as_formula(
        &self,
        term: tff::Term,
        tfx: bool,
        position: Option<Position>,
    ) -> HarrierResult<tff::Formula> {
        match term {
            tff::Term::Formula(formula) => Ok(*formula),
            tff::Term::Atomic(name, args) => Ok(tff::Formula::Atomic(name, args)),
            tff::Term::Variable(name) if tfx => Ok(tff::Formula::Variable(name)),
            _ => Err(Error::Parser(
                ParserError::ExpectedFormula,
                position.or(self.last_position),
            )),
        }
    }

    fn tff_quantified_formula(&mut self, tfx: bool) -> HarrierResult<tff::Formula> {
        let quantifier = match self.consume().kind {
            TokenKind::Bang => tff::Quantifier::Forall,
            TokenKind::Question => tff::Quantifier::Exists,
            _ => unreachable!("not a quantifier token"),
        };
        self.expect(TokenKind::LeftBracket)?;
        let variables = self.tff_typed_variables()?;
        self.expect(TokenKind::RightBracket)?;
        self.expect(TokenKind::Colon)?;
        let position = self.peek_position()?;
        let body = self.tff_unit_formula_or_term(tfx, true)?;
        let body = self.tff_as_formula(body, tfx, position)?;
        Ok(tff::Formula::Quantified(quantifier, variables, Box::new(body)))
    }

    /// Parses a non-empty `var[: type]` list (without the brackets). Also
    /// used by quantified types and TCF clause prefixes.
    pub(crate) fn tff_typed_variables(&mut self) -> HarrierResult<Vec<tff::TypedVariable>> {
        let mut variables = Vec::new();
        loop {
            let name = self.expect(TokenKind::UpperWord)?.payload;
            let typ = if self.consume_if(TokenKind::Colon)? {
                Some(self.tff_atomic_type()?)
            } else {
                None
            };
            variables.push((name, typ));
            if !self.consume_if(TokenKind::Comma)? {
                break;
            }
        }
        Ok(variables)
    }

    /// Parses an atom, a FOF-style application, or the TFX `$ite`/`$let`
    /// functional forms.
    fn tff_atomic_term(&mut self, tfx: bool) -> HarrierResult<tff::Term> {
        let name = self.consume().payload;
        if tfx && self.peek_kind(0)? == Some(TokenKind::LeftParen) {
            match name.as_str() {
                "$ite" => {
                    self.consume();
                    let condition = self.tff_logic_formula(tfx)?;
                    self.expect(TokenKind::Comma)?;
                    let then = self.tff_logic_formula_or_term(tfx)?;
                    self.expect(TokenKind::Comma)?;
                    let els = self.tff_logic_formula_or_term(tfx)?;
                    self.expect(TokenKind::RightParen)?;
                    return Ok(as_term(tff::Formula::Conditional(
                        Box::new(condition),
                        Box::new(then),
                        Box::new(els),
                    )));
                }
                "$let" => {
                    self.consume();
                    let typings = self.tff_let_typings()?;
                    self.expect(TokenKind::Comma)?;
                    let bindings = self.tff_let_bindings(tfx)?;
                    self.expect(TokenKind::Comma)?;
                    let body = self.tff_logic_formula_or_term(tfx)?;
                    self.expect(TokenKind::RightParen)?;
                    return Ok(as_term(tff::Formula::Let(
                        typings,
                        bindings,
                        Box::new(body),
                    )));
                }
                _ => (),
            }
        }
        let mut args = Vec::new();
        if self.consume_if(TokenKind::LeftParen)? {
            loop {
                args.push(self.tff_logic_formula_or_term(tfx)?);
                if !self.consume_if(TokenKind::Comma)? {
                    break;
                }
            }
            self.expect(TokenKind::RightParen)?;
        }
        Ok(tff::Term::Atomic(name, args))
    }

    fn tff_let_typings(&mut self) -> HarrierResult<Vec<(String, tff::Type)>> {
        let mut typings = Vec::new();
        if self.consume_if(TokenKind::LeftBracket)? {
            loop {
                typings.push(self.tff_let_typing()?);
                if !self.consume_if(TokenKind::Comma)? {
                    break;
                }
            }
            self.expect(TokenKind::RightBracket)?;
        } else {
            typings.push(self.tff_let_typing()?);
        }
        Ok(typings)
    }

    fn tff_let_typing(&mut self) -> HarrierResult<(String, tff::Type)> {
        let atom = self.typing_atom()?;
        self.expect(TokenKind::Colon)?;
        let typ = self.tff_top_level_type()?;
        Ok((atom, typ))
    }

    fn tff_let_bindings(&mut self, tfx: bool) -> HarrierResult<Vec<(tff::Term, tff::Term)>> {
        let mut bindings = Vec::new();
        if self.consume_if(TokenKind::LeftBracket)? {
            loop {
                bindings.push(self.tff_let_binding(tfx)?);
                if !self.consume_if(TokenKind::Comma)? {
                    break;
                }
            }
            self.expect(TokenKind::RightBracket)?;
        } else {
            bindings.push(self.tff_let_binding(tfx)?);
        }
        Ok(bindings)
    }

    fn tff_let_binding(&mut self, tfx: bool) -> HarrierResult<(tff::Term, tff::Term)> {
        let lhs = self.tff_unit_formula_or_term(tfx, false)?;
        self.expect(TokenKind::Assignment)?;
        let rhs = self.tff_logic_formula_or_term(tfx)?;
        Ok((lhs, rhs))
    }

    fn tff_nonclassical_short(&mut self, tfx: bool) -> HarrierResult<tff::Formula> {
        let connective = self.nonclassical_short_connective()?;
        let position = self.peek_position()?;
        let body = self.tff_unit_formula_or_term(tfx, false)?;
        let body = self.tff_as_formula(body, tfx, position)?;
        Ok(tff::Formula::Nonclassical(connective, vec![body]))
    }

    /// A long-form operator in TFF applies to a parenthesized argument list:
    /// `{$box} @ (p, q)`.
    fn tff_nonclassical_long(&mut self, tfx: bool) -> HarrierResult<tff::Formula> {
        let connective = self.nonclassical_long_connective()?;
        self.expect(TokenKind::At)?;
        self.expect(TokenKind::LeftParen)?;
        let mut args = Vec::new();
        loop {
            let position = self.peek_position()?;
            let arg = self.tff_logic_formula_or_term(tfx)?;
            args.push(self.tff_as_formula(arg, tfx, position)?);
            if !self.consume_if(TokenKind::Comma)? {
                break;
            }
        }
        self.expect(TokenKind::RightParen)?;
        Ok(tff::Formula::Nonclassical(connective, args))
    }

    /// Parses a top-level type: a quantified type, a mapping type with `>`
    /// reducing to the right, or a single unitary type.
    pub(crate) fn tff_top_level_type(&mut self) -> HarrierResult<tff::Type> {
        if self.peek_kind(0)? == Some(TokenKind::TypedForall) {
            return self.tff_quantified_type();
        }
        let mut members = self.tff_unitary_type_or_group()?;
        if self.consume_if(TokenKind::Arrow)? {
            let result = self.tff_top_level_type()?;
            Ok(tff::Type::Mapping(members, Box::new(result)))
        } else if members.len() == 1 {
            Ok(members.pop().unwrap())
        } else {
            // A product is only legal as the argument of a mapping.
            self.unexpected("'>'")
        }
    }

    fn tff_quantified_type(&mut self) -> HarrierResult<tff::Type> {
        self.expect(TokenKind::TypedForall)?;
        self.expect(TokenKind::LeftBracket)?;
        let variables = self.tff_typed_variables()?;
        self.expect(TokenKind::RightBracket)?;
        self.expect(TokenKind::Colon)?;
        let body = self.tff_top_level_type()?;
        Ok(tff::Type::Quantified(variables, Box::new(body)))
    }

    /// Parses either one unitary type, or a parenthesized group that may be
    /// a `*` product (the argument list of a mapping type). Parentheses
    /// nest through the recursion into [`Parser::tff_top_level_type`].
    fn tff_unitary_type_or_group(&mut self) -> HarrierResult<Vec<tff::Type>> {
        if self.consume_if(TokenKind::LeftParen)? {
            let mut members = vec![self.tff_top_level_type()?];
            while self.consume_if(TokenKind::Star)? {
                members.push(self.tff_top_level_type()?);
            }
            self.expect(TokenKind::RightParen)?;
            Ok(members)
        } else {
            Ok(vec![self.tff_atomic_type()?])
        }
    }

    /// Parses an atomic type: a (possibly applied) type constructor, a type
    /// variable, or a tuple type.
    pub(crate) fn tff_atomic_type(&mut self) -> HarrierResult<tff::Type> {
        match self.peek_kind(0)? {
            Some(
                TokenKind::LowerWord
                | TokenKind::SingleQuoted
                | TokenKind::DollarWord
                | TokenKind::DollarDollarWord,
            ) => {
                let name = self.consume().payload;
                let mut args = Vec::new();
                if self.consume_if(TokenKind::LeftParen)? {
                    loop {
                        args.push(self.tff_top_level_type()?);
                        if !self.consume_if(TokenKind::Comma)? {
                            break;
                        }
                    }
                    self.expect(TokenKind::RightParen)?;
                }
                Ok(tff::Type::Atomic(name, args))
            }
            Some(TokenKind::UpperWord) => Ok(tff::Type::Variable(self.consume().payload)),
            Some(TokenKind::LeftBracket) => {
                self.consume();
                let mut elements = Vec::new();
                if self.peek_kind(0)? != Some(TokenKind::RightBracket) {
                    loop {
                        elements.push(self.tff_top_level_type()?);
                        if !self.consume_if(TokenKind::Comma)? {
                            break;
                        }
                    }
                }
                self.expect(TokenKind::RightBracket)?;
                Ok(tff::Type::Tuple(elements))
            }
            Some(_) => self.unexpected("a type"),
            None => self.eof("a type"),
        }
    }
}
