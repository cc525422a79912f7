//! The CNF clause grammar, and TCF on top of it.

use super::{Parser, TokenKind};
use crate::ast::{cnf, tcf};
use crate::HarrierResult;

impl Parser {
    /// Parses a CNF statement.
    pub fn cnf_statement(&mut self) -> HarrierResult<cnf::Statement> {
        Ok(cnf::Statement::Logical(self.cnf_formula()?))
    }

    /// Parses a clause, which may be wrapped in parentheses.
    pub(crate) fn cnf_formula(&mut self) -> HarrierResult<cnf::Formula> {
        if self.consume_if(TokenKind::LeftParen)? {
            let formula = self.cnf_disjunction()?;
            self.expect(TokenKind::RightParen)?;
            Ok(formula)
        } else {
            self.cnf_disjunction()
        }
    }

    fn cnf_disjunction(&mut self) -> HarrierResult<cnf::Formula> {
        let mut literals = vec![self.cnf_literal()?];
        while self.consume_if(TokenKind::Vline)? {
            literals.push(self.cnf_literal()?);
        }
        Ok(cnf::Formula(literals))
    }

    fn cnf_literal(&mut self) -> HarrierResult<cnf::Literal> {
        if self.consume_if(TokenKind::Tilde)? {
            let (name, args) = self.cnf_atomic()?;
            return Ok(cnf::Literal::Negative(name, args));
        }
        let term = self.cnf_term()?;
        match self.peek_kind(0)? {
            Some(TokenKind::Equals) => {
                self.consume();
                Ok(cnf::Literal::Equality(term, self.cnf_term()?))
            }
            Some(TokenKind::NotEquals) => {
                self.consume();
                Ok(cnf::Literal::Inequality(term, self.cnf_term()?))
            }
            _ => match term {
                cnf::Term::Atomic(name, args) => Ok(cnf::Literal::Positive(name, args)),
                _ => self.unexpected("'=' or '!='"),
            },
        }
    }

    fn cnf_atomic(&mut self) -> HarrierResult<(String, Vec<cnf::Term>)> {
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
                        args.push(self.cnf_term()?);
                        if !self.consume_if(TokenKind::Comma)? {
                            break;
                        }
                    }
                    self.expect(TokenKind::RightParen)?;
                }
                Ok((name, args))
            }
            Some(_) => self.unexpected("an atom"),
            None => self.eof("an atom"),
        }
    }

    fn cnf_term(&mut self) -> HarrierResult<cnf::Term> {
        match self.peek_kind(0)? {
            Some(
                TokenKind::LowerWord
                | TokenKind::SingleQuoted
                | TokenKind::DollarWord
                | TokenKind::DollarDollarWord,
            ) => {
                let (name, args) = self.cnf_atomic()?;
                Ok(cnf::Term::Atomic(name, args))
            }
            Some(TokenKind::UpperWord) => Ok(cnf::Term::Variable(self.consume().payload)),
            Some(TokenKind::DoubleQuoted) => {
                Ok(cnf::Term::DistinctObject(self.consume().payload))
            }
            Some(TokenKind::Integer | TokenKind::Rational | TokenKind::Real) => {
                Ok(cnf::Term::Number(self.number()?))
            }
            Some(_) => self.unexpected("a term"),
            None => self.eof("a term"),
        }
    }

    /// Parses a TCF statement: a TFF typing, or a clause with an optional
    /// universal prefix binding typed variables.
    pub fn tcf_statement(&mut self) -> HarrierResult<tcf::Statement> {
        if self.typing_follows()? {
            let (atom, typ) = self.tff_typing()?;
            return Ok(tcf::Statement::Typing(atom, typ));
        }
        let formula = if self.consume_if(TokenKind::Bang)? {
            self.expect(TokenKind::LeftBracket)?;
            let variables = self.tff_typed_variables()?;
            self.expect(TokenKind::RightBracket)?;
            self.expect(TokenKind::Colon)?;
            let clause = self.cnf_formula()?;
            tcf::Formula { variables, clause }
        } else {
            tcf::Formula {
                variables: Vec::new(),
                clause: self.cnf_formula()?,
            }
        };
        Ok(tcf::Statement::Logical(formula))
    }
}
