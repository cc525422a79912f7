#![cfg(test)]

use super::*;
use num_bigint::BigInt;

fn int(value: i64) -> Number {
    Number::Integer(BigInt::from(value))
}

#[test]
fn test_number_printing() {
    assert_eq!(int(42).to_string(), "42");
    assert_eq!(int(-7).to_string(), "-7");
    // Rationals are printed exactly as stored, never reduced.
    assert_eq!(
        Number::Rational(BigInt::from(2), BigInt::from(4)).to_string(),
        "2/4"
    );
    assert_eq!(
        Number::Rational(BigInt::from(-1), BigInt::from(3)).to_string(),
        "-1/3"
    );

    let real = |negative, wholes: i64, decimal: &str, exponent: i64| Number::Real {
        negative,
        wholes: BigInt::from(wholes),
        decimal: decimal.into(),
        exponent: BigInt::from(exponent),
    };
    assert_eq!(real(false, 3, "14", 1).to_string(), "3.14");
    assert_eq!(real(true, 0, "5", 1).to_string(), "-0.5");
    assert_eq!(real(false, 0, "05", 1).to_string(), "0.05");
    assert_eq!(real(false, 1, "2", -3).to_string(), "1.2E-3");
    // Exponent-only reals keep their exponent even when it is 1, so they do
    // not degrade to integers.
    assert_eq!(real(false, 2, "", 10).to_string(), "2E10");
    assert_eq!(real(false, 3, "", 1).to_string(), "3E1");
}

#[test]
fn test_functor_quoting() {
    let atom = |name: &str| fof::Term::Atomic(name.into(), vec![]);
    assert_eq!(atom("abc_1").to_string(), "abc_1");
    assert_eq!(atom("$ite").to_string(), "$ite");
    assert_eq!(atom("$$sys").to_string(), "$$sys");
    assert_eq!(atom("He said").to_string(), "'He said'");
    assert_eq!(atom("it's").to_string(), r"'it\'s'");
    assert_eq!(atom(r"back\slash").to_string(), r"'back\\slash'");
    // Distinct objects carry their own quotes.
    assert_eq!(
        fof::Term::DistinctObject("\"obj\"".into()).to_string(),
        "\"obj\""
    );
}

#[test]
fn test_binary_formulas_are_parenthesized() {
    let p = fof::Formula::Atomic("p".into(), vec![]);
    let q = fof::Formula::Atomic("q".into(), vec![]);
    let or = fof::Formula::Binary(
        fof::BinaryConnective::Or,
        Box::new(p.clone()),
        Box::new(fof::Formula::Binary(
            fof::BinaryConnective::Or,
            Box::new(q.clone()),
            Box::new(p.clone()),
        )),
    );
    assert_eq!(or.to_string(), "(p | (q | p))");
    assert_eq!(
        fof::Formula::Unary(fof::UnaryConnective::Not, Box::new(or)).to_string(),
        "~ (p | (q | p))"
    );
    assert_eq!(
        fof::Formula::Quantified(
            fof::Quantifier::Exists,
            vec!["X".into(), "Y".into()],
            Box::new(fof::Formula::Equality(
                fof::Term::Variable("X".into()),
                fof::Term::Variable("Y".into()),
            )),
        )
        .to_string(),
        "? [X, Y]: (X = Y)"
    );
}

#[test]
fn test_nonclassical_connective_printing() {
    assert_eq!(NonclassicalConnective::Box(None).to_string(), "[.]");
    assert_eq!(NonclassicalConnective::Diamond(None).to_string(), "<.>");
    assert_eq!(NonclassicalConnective::Cone(None).to_string(), "/.\\");
    let index = GeneralTerm::data(GeneralData::Number(int(2)));
    assert_eq!(
        NonclassicalConnective::Box(Some(index.clone())).to_string(),
        "{$box(#2)}"
    );
    assert_eq!(
        NonclassicalConnective::LongOperator {
            name: "$knows".into(),
            index: Some(index),
            parameters: vec![(
                GeneralTerm::data(GeneralData::Function("agent".into(), vec![])),
                GeneralTerm::data(GeneralData::Function("alice".into(), vec![])),
            )],
        }
        .to_string(),
        "{$knows(#2, agent := alice)}"
    );
}

#[test]
fn test_tff_type_printing() {
    let i = tff::Type::Atomic("$i".into(), vec![]);
    let o = tff::Type::Atomic("$o".into(), vec![]);
    assert_eq!(
        tff::Type::Mapping(vec![i.clone(), i.clone()], Box::new(o.clone())).to_string(),
        "($i * $i) > $o"
    );
    // A mapping argument needs parentheses, a mapping result does not.
    let inner = tff::Type::Mapping(vec![i.clone()], Box::new(o.clone()));
    assert_eq!(
        tff::Type::Mapping(vec![inner.clone()], Box::new(inner.clone())).to_string(),
        "($i > $o) > $i > $o"
    );
    assert_eq!(
        tff::Type::Quantified(
            vec![("A".into(), Some(tff::Type::Atomic("$tType".into(), vec![])))],
            Box::new(tff::Type::Mapping(
                vec![tff::Type::Variable("A".into())],
                Box::new(tff::Type::Variable("A".into())),
            )),
        )
        .to_string(),
        "!> [A: $tType]: (A > A)"
    );
}

#[test]
fn test_meta_equality_and_origin() {
    let mut left = Meta::with_origin((3, 7));
    let right = Meta::new();
    assert_eq!(left, right);
    assert_eq!(left.origin(), Some((3, 7)));
    assert_eq!(right.origin(), None);

    left.insert("note", MetaValue::Text("from the caller".into()));
    assert_eq!(
        left.get("note"),
        Some(&MetaValue::Text("from the caller".into()))
    );
    assert_eq!(left, right);
}

#[test]
fn test_annotated_printing() {
    let annotated = FofAnnotated {
        name: "42".into(),
        role: Role::new("axiom"),
        formula: fof::Statement::Logical(fof::Formula::Atomic("p".into(), vec![])),
        annotations: None,
        meta: Meta::new(),
    };
    // Integer names are printed bare; other non-lower-words are quoted.
    assert_eq!(annotated.to_string(), "fof(42, axiom, p).");

    let annotated = TpiAnnotated {
        name: "A name".into(),
        role: Role::new("assumption"),
        formula: fof::Statement::Logical(fof::Formula::Atomic("p".into(), vec![])),
        annotations: None,
        meta: Meta::new(),
    };
    assert_eq!(annotated.to_string(), "tpi('A name', assumption, p).");
}

#[test]
fn test_problem_printing() {
    let mut problem = Problem::new();
    problem.includes.push(Include {
        file_name: "ax.ax".into(),
        selection: vec![],
        comments: vec![Comment {
            format: CommentFormat::Line,
            kind: CommentKind::Normal,
            content: " axioms".into(),
        }],
    });
    problem
        .formulas
        .push(AnnotatedFormula::Cnf(CnfAnnotated {
            name: "c".into(),
            role: Role::new("axiom"),
            formula: cnf::Statement::Logical(cnf::Formula(vec![
                cnf::Literal::Positive("p".into(), vec![]),
                cnf::Literal::Negative("q".into(), vec![]),
            ])),
            annotations: None,
            meta: Meta::new(),
        }));
    problem.formula_comments.insert(
        "c".into(),
        vec![Comment {
            format: CommentFormat::Block,
            kind: CommentKind::Defined,
            content: " clause ".into(),
        }],
    );
    assert_eq!(
        problem.to_string(),
        "% axioms\ninclude('ax.ax').\n/*$ clause */\ncnf(c, axiom, p | ~ q).\n"
    );
}

#[test]
fn test_problem_symbols() {
    let mut problem = Problem::new();
    problem
        .formulas
        .push(AnnotatedFormula::Tff(TffAnnotated {
            name: "t".into(),
            role: Role::new("type"),
            formula: tff::Statement::Typing(
                "f".into(),
                tff::Type::Mapping(
                    vec![tff::Type::Atomic("$i".into(), vec![])],
                    Box::new(tff::Type::Atomic("$o".into(), vec![])),
                ),
            ),
            annotations: None,
            meta: Meta::new(),
        }));
    let symbols = problem.symbols();
    assert_eq!(symbols.len(), 3);
    for symbol in ["f", "$i", "$o"] {
        assert!(symbols.contains(symbol), "missing {}", symbol);
    }
}

#[test]
fn test_thf_let_printing() {
    let formula = thf::Formula::Let(
        vec![("f".into(), thf::Formula::Function("$i".into(), vec![]))],
        vec![(
            thf::Formula::Function("f".into(), vec![]),
            thf::Formula::Function("g".into(), vec![]),
        )],
        Box::new(thf::Formula::Function("h".into(), vec![])),
    );
    assert_eq!(formula.to_string(), "$let(f: $i, f := g, h)");
}
