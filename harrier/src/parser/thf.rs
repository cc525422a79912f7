//! The THF grammar.
//!
//! THF formulas are parsed in two tiers: [`Parser::thf_unit_formula`] reads
//! one unit (quantified formula, unary chain, atom, bracketed construct,
//! `$let`/`$ite`, non-classical operator, …) and optionally a trailing
//! equality, and [`Parser::thf_logic_formula`] combines units with binary
//! connectives, type constructors and the `==` meta identity.

use super::{fold_left, fold_right, Parser, ParserError, TokenKind};
use crate::ast::thf;
use crate::HarrierResult;

/// The non-associative binary connectives: they take exactly one more unit.
fn nonassoc_connective(kind: TokenKind) -> Option<thf::BinaryConnective> {
    match kind {
        TokenKind::Iff => Some(thf::BinaryConnective::Equiv),
        TokenKind::Implies => Some(thf::BinaryConnective::Impl),
        TokenKind::If => Some(thf::BinaryConnective::If),
        TokenKind::Niff => Some(thf::BinaryConnective::Niff),
        TokenKind::Nor => Some(thf::BinaryConnective::Nor),
        TokenKind::Nand => Some(thf::BinaryConnective::Nand),
        TokenKind::Assignment => Some(thf::BinaryConnective::Assignment),
        _ => None,
    }
}

/// The connectives that may be written as a parenthesized term, `(&)` etc.
fn connective_term(kind: TokenKind) -> Option<thf::Connective> {
    let binary = match kind {
        TokenKind::Tilde => return Some(thf::Connective::Unary(thf::UnaryConnective::Not)),
        TokenKind::Equals => thf::BinaryConnective::Eq,
        TokenKind::NotEquals => thf::BinaryConnective::Neq,
        TokenKind::Iff => thf::BinaryConnective::Equiv,
        TokenKind::Implies => thf::BinaryConnective::Impl,
        TokenKind::If => thf::BinaryConnective::If,
        TokenKind::Niff => thf::BinaryConnective::Niff,
        TokenKind::Nor => thf::BinaryConnective::Nor,
        TokenKind::Nand => thf::BinaryConnective::Nand,
        TokenKind::Vline => thf::BinaryConnective::Or,
        TokenKind::Ampersand => thf::BinaryConnective::And,
        TokenKind::At => thf::BinaryConnective::App,
        TokenKind::Arrow => thf::BinaryConnective::FunctionType,
        TokenKind::Star => thf::BinaryConnective::ProductType,
        TokenKind::Plus => thf::BinaryConnective::SumType,
        TokenKind::Assignment => thf::BinaryConnective::Assignment,
        TokenKind::Identity => thf::BinaryConnective::Identity,
        _ => return None,
    };
    Some(thf::Connective::Binary(binary))
}

fn binary(
    connective: thf::BinaryConnective,
    left: thf::Formula,
    right: thf::Formula,
) -> thf::Formula {
    thf::Formula::Binary(connective, Box::new(left), Box::new(right))
}

impl Parser {
    /// Parses a THF statement: a typing, a sequent, or a logical formula.
    pub fn thf_statement(&mut self) -> HarrierResult<thf::Statement> {
        if self.typing_follows()? {
            return self.thf_typing();
        }
        if self.sequent_follows()? {
            return self.thf_sequent();
        }
        Ok(thf::Statement::Logical(self.thf_logic_formula()?))
    }

    fn thf_typing(&mut self) -> HarrierResult<thf::Statement> {
        let mut depth = 0;
        while self.consume_if(TokenKind::LeftParen)? {
            depth += 1;
        }
        let atom = self.typing_atom()?;
        self.expect(TokenKind::Colon)?;
        let typ = self.thf_logic_formula()?;
        for _ in 0..depth {
            self.expect(TokenKind::RightParen)?;
        }
        Ok(thf::Statement::Typing(atom, typ))
    }

    fn thf_sequent(&mut self) -> HarrierResult<thf::Statement> {
        let mut depth = 0;
        while self.consume_if(TokenKind::LeftParen)? {
            depth += 1;
        }
        let lhs = self.thf_tuple_elements()?;
        self.expect(TokenKind::SequentArrow)?;
        let rhs = self.thf_tuple_elements()?;
        for _ in 0..depth {
            self.expect(TokenKind::RightParen)?;
        }
        Ok(thf::Statement::Sequent(lhs, rhs))
    }

    /// Parses a bracketed, comma-separated (possibly empty) formula list.
    fn thf_tuple_elements(&mut self) -> HarrierResult<Vec<thf::Formula>> {
        self.expect(TokenKind::LeftBracket)?;
        let mut elements = Vec::new();
        if self.peek_kind(0)? != Some(TokenKind::RightBracket) {
            loop {
                elements.push(self.thf_logic_formula()?);
                if !self.consume_if(TokenKind::Comma)? {
                    break;
                }
            }
        }
        self.expect(TokenKind::RightBracket)?;
        Ok(elements)
    }

    /// Parses a THF logic formula: a unit, then whatever binary structure
    /// the next operator announces, then an optional trailing `==`.
    pub(crate) fn thf_logic_formula(&mut self) -> HarrierResult<thf::Formula> {
        let (first, _) = self.thf_unit_formula(true)?;
        let first_is_quantified = matches!(first, thf::Formula::Quantified(..));
        let mut formula = match self.peek_kind(0)? {
            Some(TokenKind::Vline) => {
                self.thf_assoc_chain(first, TokenKind::Vline, thf::BinaryConnective::Or)?
            }
            Some(TokenKind::Ampersand) => {
                self.thf_assoc_chain(first, TokenKind::Ampersand, thf::BinaryConnective::And)?
            }
            Some(TokenKind::At) => {
                self.thf_assoc_chain(first, TokenKind::At, thf::BinaryConnective::App)?
            }
            Some(kind) if nonassoc_connective(kind).is_some() => {
                let connective = nonassoc_connective(kind).unwrap();
                self.consume();
                let (right, _) = self.thf_unit_formula(true)?;
                binary(connective, first, right)
            }
            // A type constructor turns a non-quantified unit into a type
            // expression.
            Some(TokenKind::Arrow) if !first_is_quantified => {
                let mut operands = vec![first];
                while self.consume_if(TokenKind::Arrow)? {
                    operands.push(self.thf_unit_formula(false)?.0);
                }
                fold_right(operands, |l, r| binary(thf::BinaryConnective::FunctionType, l, r))
            }
            Some(kind @ (TokenKind::Star | TokenKind::Plus)) if !first_is_quantified => {
                let connective = if kind == TokenKind::Star {
                    thf::BinaryConnective::ProductType
                } else {
                    thf::BinaryConnective::SumType
                };
                let mut operands = vec![first];
                while self.consume_if(kind)? {
                    operands.push(self.thf_unit_formula(false)?.0);
                }
                fold_left(operands, |l, r| binary(connective, l, r))
            }
            _ => first,
        };
        if self.consume_if(TokenKind::Identity)? {
            let (right, _) = self.thf_unit_formula(true)?;
            formula = binary(thf::BinaryConnective::Identity, formula, right);
        }
        Ok(formula)
    }

    /// Collects a chain of one associative connective. `@` reduces to the
    /// left, `|` and `&` to the right.
    fn thf_assoc_chain(
        &mut self,
        first: thf::Formula,
        kind: TokenKind,
        connective: thf::BinaryConnective,
    ) -> HarrierResult<thf::Formula> {
        let mut operands = vec![first];
        while self.consume_if(kind)? {
            operands.push(self.thf_unit_formula(true)?.0);
        }
        Ok(if connective == thf::BinaryConnective::App {
            fold_left(operands, |l, r| binary(connective, l, r))
        } else {
            fold_right(operands, |l, r| binary(connective, l, r))
        })
    }

    /// Parses one THF unit formula. When `accept_eq` is set and the unit has
    /// the shape of a unitary term, a trailing `=` or `!=` is consumed into
    /// an equality; units that are not unitary terms (quantified or unary
    /// formulas, non-classical applications) are rejected on either side of
    /// an equality.
    ///
    /// Returns the formula and whether it is feasible as an equality side.
    fn thf_unit_formula(&mut self, accept_eq: bool) -> HarrierResult<(thf::Formula, bool)> {
        let Some(token) = self.safe_peek(0)? else {
            return self.eof("a formula");
        };
        let kind = token.kind;
        let (mut formula, mut feasible) = match kind {
            TokenKind::Bang
            | TokenKind::Question
            | TokenKind::Caret
            | TokenKind::Choice
            | TokenKind::Description
            | TokenKind::TypedForall
            | TokenKind::TypedExists
            | TokenKind::Hash => (self.thf_quantified_formula()?, false),
            TokenKind::Tilde => {
                self.consume();
                let (body, _) = self.thf_unit_formula(false)?;
                let formula = thf::Formula::Unary(thf::UnaryConnective::Not, Box::new(body));
                (formula, false)
            }
            TokenKind::ForallComb
            | TokenKind::ExistsComb
            | TokenKind::ChoiceComb
            | TokenKind::DescriptionComb
            | TokenKind::EqComb => {
                let constant = match self.consume().kind {
                    TokenKind::ForallComb => thf::DefinedConstant::ForallComb,
                    TokenKind::ExistsComb => thf::DefinedConstant::ExistsComb,
                    TokenKind::ChoiceComb => thf::DefinedConstant::ChoiceComb,
                    TokenKind::DescriptionComb => thf::DefinedConstant::DescriptionComb,
                    TokenKind::EqComb => thf::DefinedConstant::EqComb,
                    _ => unreachable!(),
                };
                (thf::Formula::DefinedConstant(constant), true)
            }
            TokenKind::LowerWord
            | TokenKind::SingleQuoted
            | TokenKind::DollarWord
            | TokenKind::DollarDollarWord => (self.thf_function_formula()?, true),
            TokenKind::UpperWord => (thf::Formula::Variable(self.consume().payload), true),
            TokenKind::DoubleQuoted => {
                (thf::Formula::DistinctObject(self.consume().payload), true)
            }
            TokenKind::Integer | TokenKind::Rational | TokenKind::Real => {
                (thf::Formula::Number(self.number()?), true)
            }
            TokenKind::LeftParen => {
                self.consume();
                if let Some(connective) = self.thf_connective_term()? {
                    (thf::Formula::ConnectiveTerm(connective), true)
                } else {
                    let inner = self.thf_logic_formula()?;
                    self.expect(TokenKind::RightParen)?;
                    // Parenthesized formulas are unitary terms.
                    (inner, true)
                }
            }
            TokenKind::LeftBracket => match self.peek_kind(1)? {
                Some(TokenKind::Dot | TokenKind::Hash) => {
                    (self.thf_nonclassical_short()?, false)
                }
                _ => (self.thf_tuple()?, true),
            },
            TokenKind::LessSign | TokenKind::Slash
                if matches!(self.peek_kind(1)?, Some(TokenKind::Dot | TokenKind::Hash)) =>
            {
                (self.thf_nonclassical_short()?, false)
            }
            TokenKind::LeftBrace => (self.thf_nonclassical_long()?, false),
            _ => return self.unexpected("a formula"),
        };

        if accept_eq
            && matches!(
                self.peek_kind(0)?,
                Some(TokenKind::Equals | TokenKind::NotEquals)
            )
        {
            let operator = self.consume();
            if !feasible {
                return self.error_at(ParserError::ExpectedUnitaryTerm, operator.position);
            }
            let rhs_position = self.peek_position()?;
            let (right, right_feasible) = self.thf_unit_formula(false)?;
            if !right_feasible {
                let position = rhs_position.unwrap_or(operator.position);
                return self.error_at(ParserError::ExpectedUnitaryTerm, position);
            }
            let connective = if operator.kind == TokenKind::Equals {
                thf::BinaryConnective::Eq
            } else {
                thf::BinaryConnective::Neq
            };
            formula = binary(connective, formula, right);
            feasible = false;
        }
        Ok((formula, feasible))
    }

    fn thf_quantified_formula(&mut self) -> HarrierResult<thf::Formula> {
        let quantifier = match self.consume().kind {
            TokenKind::Bang => thf::Quantifier::Forall,
            TokenKind::Question => thf::Quantifier::Exists,
            TokenKind::Caret => thf::Quantifier::Lambda,
            TokenKind::Choice => thf::Quantifier::Choice,
            TokenKind::Description => thf::Quantifier::Description,
            TokenKind::TypedForall => thf::Quantifier::TypedForall,
            TokenKind::TypedExists => thf::Quantifier::TypedExists,
            TokenKind::Hash => thf::Quantifier::Epsilon,
            _ => unreachable!("not a quantifier token"),
        };
        self.expect(TokenKind::LeftBracket)?;
        let mut variables = Vec::new();
        loop {
            let name = self.expect(TokenKind::UpperWord)?.payload;
            self.expect(TokenKind::Colon)?;
            let typ = self.thf_logic_formula()?;
            variables.push((name, typ));
            if !self.consume_if(TokenKind::Comma)? {
                break;
            }
        }
        self.expect(TokenKind::RightBracket)?;
        self.expect(TokenKind::Colon)?;
        let (body, _) = self.thf_unit_formula(false)?;
        Ok(thf::Formula::Quantified(quantifier, variables, Box::new(body)))
    }

    /// Parses an atom: a plain or quoted functor, a `$`/`$$` word, the
    /// functional forms of `$ite` and `$let`, or a FOF-style application.
    fn thf_function_formula(&mut self) -> HarrierResult<thf::Formula> {
        let name = self.consume().payload;
        match name.as_str() {
            "$ite" if self.peek_kind(0)? == Some(TokenKind::LeftParen) => {
                self.consume();
                let condition = self.thf_logic_formula()?;
                self.expect(TokenKind::Comma)?;
                let then = self.thf_logic_formula()?;
                self.expect(TokenKind::Comma)?;
                let els = self.thf_logic_formula()?;
                self.expect(TokenKind::RightParen)?;
                return Ok(thf::Formula::Conditional(
                    Box::new(condition),
                    Box::new(then),
                    Box::new(els),
                ));
            }
            "$let" if self.peek_kind(0)? == Some(TokenKind::LeftParen) => {
                self.consume();
                let typings = self.thf_let_typings()?;
                self.expect(TokenKind::Comma)?;
                let bindings = self.thf_let_bindings()?;
                self.expect(TokenKind::Comma)?;
                let body = self.thf_logic_formula()?;
                self.expect(TokenKind::RightParen)?;
                return Ok(thf::Formula::Let(typings, bindings, Box::new(body)));
            }
            _ => (),
        }
        let mut args = Vec::new();
        if self.consume_if(TokenKind::LeftParen)? {
            loop {
                args.push(self.thf_logic_formula()?);
                if !self.consume_if(TokenKind::Comma)? {
                    break;
                }
            }
            self.expect(TokenKind::RightParen)?;
        }
        Ok(thf::Formula::Function(name, args))
    }

    /// Recognizes `(connective)` terms right after the `(` was consumed.
    fn thf_connective_term(&mut self) -> HarrierResult<Option<thf::Connective>> {
        if self.peek_kind(1)? != Some(TokenKind::RightParen) {
            return Ok(None);
        }
        let Some(connective) = self.peek_kind(0)?.and_then(connective_term) else {
            return Ok(None);
        };
        self.consume();
        self.consume();
        Ok(Some(connective))
    }

    fn thf_tuple(&mut self) -> HarrierResult<thf::Formula> {
        Ok(thf::Formula::Tuple(self.thf_tuple_elements()?))
    }

    fn thf_let_typings(&mut self) -> HarrierResult<Vec<(String, thf::Type)>> {
        let mut typings = Vec::new();
        if self.consume_if(TokenKind::LeftBracket)? {
            loop {
                typings.push(self.thf_let_typing()?);
                if !self.consume_if(TokenKind::Comma)? {
                    break;
                }
            }
            self.expect(TokenKind::RightBracket)?;
        } else {
            typings.push(self.thf_let_typing()?);
        }
        Ok(typings)
    }

    fn thf_let_typing(&mut self) -> HarrierResult<(String, thf::Type)> {
        let atom = self.typing_atom()?;
        self.expect(TokenKind::Colon)?;
        let typ = self.thf_logic_formula()?;
        Ok((atom, typ))
    }

    fn thf_let_bindings(&mut self) -> HarrierResult<Vec<(thf::Formula, thf::Formula)>> {
        let mut bindings = Vec::new();
        if self.consume_if(TokenKind::LeftBracket)? {
            loop {
                bindings.push(self.thf_let_binding()?);
                if !self.consume_if(TokenKind::Comma)? {
                    break;
                }
            }
            self.expect(TokenKind::RightBracket)?;
        } else {
            bindings.push(self.thf_let_binding()?);
        }
        Ok(bindings)
    }

    /// A binding is a logic formula that must reduce to `lhs := rhs`.
    fn thf_let_binding(&mut self) -> HarrierResult<(thf::Formula, thf::Formula)> {
        let position = self.peek_position()?;
        match self.thf_logic_formula()? {
            thf::Formula::Binary(thf::BinaryConnective::Assignment, lhs, rhs) => Ok((*lhs, *rhs)),
            _ => Err(crate::Error::Parser(
                ParserError::ExpectedLetBinding,
                position.or(self.last_position),
            )),
        }
    }

    fn thf_nonclassical_short(&mut self) -> HarrierResult<thf::Formula> {
        let connective = self.nonclassical_short_connective()?;
        let (body, _) = self.thf_unit_formula(false)?;
        Ok(thf::Formula::Nonclassical(connective, vec![body]))
    }

    /// A long-form operator is followed by its arguments as repeated `@`
    /// applications.
    fn thf_nonclassical_long(&mut self) -> HarrierResult<thf::Formula> {
        let connective = self.nonclassical_long_connective()?;
        let mut args = Vec::new();
        while self.consume_if(TokenKind::At)? {
            args.push(self.thf_unit_formula(false)?.0);
        }
        Ok(thf::Formula::Nonclassical(connective, args))
    }
}
