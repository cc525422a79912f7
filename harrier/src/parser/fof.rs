//! The FOF grammar. TPI statements are parsed with these routines too.

use super::{fold_right, Parser, TokenKind};
use crate::ast::fof;
use crate::HarrierResult;

fn nonassoc_connective(kind: TokenKind) -> Option<fof::BinaryConnective> {
    match kind {
        TokenKind::Iff => Some(fof::BinaryConnective::Equiv),
        TokenKind::Implies => Some(fof::BinaryConnective::Impl),
        TokenKind::If => Some(fof::BinaryConnective::If),
        TokenKind::Niff => Some(fof::BinaryConnective::Niff),
        TokenKind::Nor => Some(fof::BinaryConnective::Nor),
        TokenKind::Nand => Some(fof::BinaryConnective::Nand),
        _ => None,
    }
}

impl Parser {
    /// Parses a FOF statement.
    pub fn fof_statement(&mut self) -> HarrierResult<fof::Statement> {
        Ok(fof::Statement::Logical(self.fof_logic_formula()?))
    }

    pub(crate) fn fof_logic_formula(&mut self) -> HarrierResult<fof::Formula> {
        let first = self.fof_unit_formula()?;
        match self.peek_kind(0)? {
            Some(TokenKind::Vline) => {
                self.fof_assoc_chain(first, TokenKind::Vline, fof::BinaryConnective::Or)
            }
            Some(TokenKind::Ampersand) => {
                self.fof_assoc_chain(first, TokenKind::Ampersand, fof::BinaryConnective::And)
            }
            Some(kind) if nonassoc_connective(kind).is_some() => {
                let connective = nonassoc_connective(kind).unwrap();
                self.consume();
                let right = self.fof_unit_formula()?;
                Ok(fof::Formula::Binary(
                    connective,
                    Box::new(first),
                    Box::new(right),
                ))
            }
            _ => Ok(first),
        }
    }

    fn fof_assoc_chain(
        &mut self,
        first: fof::Formula,
        kind: TokenKind,
        connective: fof::BinaryConnective,
    ) -> HarrierResult<fof::Formula> {
        let mut operands = vec![first];
        while self.consume_if(kind)? {
            operands.push(self.fof_unit_formula()?);
        }
        Ok(fold_right(operands, |l, r| {
            fof::Formula::Binary(connective, Box::new(l), Box::new(r))
        }))
    }

    /// Parses one FOF unit: a quantified formula, a unary chain, a
    /// parenthesized formula, or an atom/equation. Equality attaches at term
    /// level, so `! [X]: X = a` binds the equation under the quantifier.
    fn fof_unit_formula(&mut self) -> HarrierResult<fof::Formula> {
        match self.peek_kind(0)? {
            Some(TokenKind::Bang | TokenKind::Question) => {
                let quantifier = if self.consume().kind == TokenKind::Bang {
                    fof::Quantifier::Forall
                } else {
                    fof::Quantifier::Exists
                };
                self.expect(TokenKind::LeftBracket)?;
                let mut variables = Vec::new();
                loop {
                    variables.push(self.expect(TokenKind::UpperWord)?.payload);
                    if !self.consume_if(TokenKind::Comma)? {
                        break;
                    }
                }
                self.expect(TokenKind::RightBracket)?;
                self.expect(TokenKind::Colon)?;
                let body = self.fof_unit_formula()?;
                Ok(fof::Formula::Quantified(
                    quantifier,
                    variables,
                    Box::new(body),
                ))
            }
            Some(TokenKind::Tilde) => {
                self.consume();
                let body = self.fof_unit_formula()?;
                Ok(fof::Formula::Unary(fof::UnaryConnective::Not, Box::new(body)))
            }
            Some(TokenKind::LeftParen) => {
                self.consume();
                let inner = self.fof_logic_formula()?;
                self.expect(TokenKind::RightParen)?;
                Ok(inner)
            }
            Some(
                TokenKind::LowerWord
                | TokenKind::SingleQuoted
                | TokenKind::DollarWord
                | TokenKind::DollarDollarWord
                | TokenKind::UpperWord
                | TokenKind::DoubleQuoted
                | TokenKind::Integer
                | TokenKind::Rational
                | TokenKind::Real,
            ) => {
                let term = self.fof_term()?;
                match self.peek_kind(0)? {
                    Some(TokenKind::Equals) => {
                        self.consume();
                        Ok(fof::Formula::Equality(term, self.fof_term()?))
                    }
                    Some(TokenKind::NotEquals) => {
                        self.consume();
                        Ok(fof::Formula::Inequality(term, self.fof_term()?))
                    }
                    _ => match term {
                        fof::Term::Atomic(name, args) => Ok(fof::Formula::Atomic(name, args)),
                        // A bare variable, number or distinct object is only
                        // a formula when it is one side of an equation.
                        _ => self.unexpected("'=' or '!='"),
                    },
                }
            }
            Some(_) => self.unexpected("a formula"),
            None => self.eof("a formula"),
        }
    }

    pub(crate) fn fof_term(&mut self) -> HarrierResult<fof::Term> {
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
                        args.push(self.fof_term()?);
                        if !self.consume_if(TokenKind::Comma)? {
                            break;
                        }
                    }
                    self.expect(TokenKind::RightParen)?;
                }
                Ok(fof::Term::Atomic(name, args))
            }
            Some(TokenKind::UpperWord) => Ok(fof::Term::Variable(self.consume().payload)),
            Some(TokenKind::DoubleQuoted) => {
                Ok(fof::Term::DistinctObject(self.consume().payload))
            }
            Some(TokenKind::Integer | TokenKind::Rational | TokenKind::Real) => {
                Ok(fof::Term::Number(self.number()?))
            }
            Some(_) => self.unexpected("a term"),
            None => self.eof("a term"),
        }
    }
}
