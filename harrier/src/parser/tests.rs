//! In addition to the parser tests, this module contains some parsing
//! helpers that are useful in other modules' tests.
#![cfg(test)]

use super::*;
use crate::ast::{
    cnf, fof, tff, thf, AnnotatedFormula, CommentFormat, CommentKind, MetaValue, Number,
    NonclassicalConnective, Problem,
};

const ERROR_MESSAGE: &str = "parser error during test";

pub fn problem(input: &str) -> Problem {
    parse_problem(input.as_bytes()).expect(ERROR_MESSAGE)
}

fn thf_statement(input: &str) -> thf::Statement {
    parse_thf(input.as_bytes()).expect(ERROR_MESSAGE)
}

fn tff_statement(input: &str) -> tff::Statement {
    parse_tff(input.as_bytes()).expect(ERROR_MESSAGE)
}

fn fof_statement(input: &str) -> fof::Statement {
    parse_fof(input.as_bytes()).expect(ERROR_MESSAGE)
}

fn cnf_statement(input: &str) -> cnf::Statement {
    parse_cnf(input.as_bytes()).expect(ERROR_MESSAGE)
}

/// Parses a problem, expecting it to fail. Returns the error encountered,
/// or panics if there is none.
fn problem_err(input: &str) -> Error {
    parse_problem(input.as_bytes()).expect_err("expected a parse error")
}

/// The round-trip law: re-parsing a parsed problem's serialization yields an
/// equal problem.
fn assert_round_trip(input: &str) {
    let parsed = problem(input);
    let printed = parsed.to_string();
    let reparsed = parse_problem(printed.as_bytes())
        .unwrap_or_else(|e| panic!("round trip of {:?} failed to reparse: {}", printed, e));
    assert_eq!(parsed, reparsed, "round trip changed the AST for {:?}", printed);
}

#[test]
fn test_fof_binary_formula() {
    let input = "fof(f, axiom, (p(X) & q)).";
    let parsed = problem(input);
    let AnnotatedFormula::Fof(parsed) = &parsed.formulas[0] else {
        panic!("expected a FOF formula");
    };
    assert_eq!(parsed.name, "f");
    assert_eq!(parsed.role.name, "axiom");
    assert_eq!(
        parsed.formula,
        fof::Statement::Logical(fof::Formula::Binary(
            fof::BinaryConnective::And,
            Box::new(fof::Formula::Atomic(
                "p".into(),
                vec![fof::Term::Variable("X".into())]
            )),
            Box::new(fof::Formula::Atomic("q".into(), vec![])),
        ))
    );
    assert_eq!(parsed.annotations, None);
    // This input is already in canonical form.
    assert_eq!(parsed.to_string(), input);
}

#[test]
fn test_tff_typing() {
    assert_eq!(
        tff_statement("king_of_france : human"),
        tff::Statement::Typing(
            "king_of_france".into(),
            tff::Type::Atomic("human".into(), vec![])
        )
    );
    assert_eq!(
        tff_statement("f: ($i * $i) > $o"),
        tff::Statement::Typing(
            "f".into(),
            tff::Type::Mapping(
                vec![
                    tff::Type::Atomic("$i".into(), vec![]),
                    tff::Type::Atomic("$i".into(), vec![]),
                ],
                Box::new(tff::Type::Atomic("$o".into(), vec![])),
            )
        )
    );
    // `>` is right-associative.
    assert_eq!(
        tff_statement("g: $i > $i > $o"),
        tff::Statement::Typing(
            "g".into(),
            tff::Type::Mapping(
                vec![tff::Type::Atomic("$i".into(), vec![])],
                Box::new(tff::Type::Mapping(
                    vec![tff::Type::Atomic("$i".into(), vec![])],
                    Box::new(tff::Type::Atomic("$o".into(), vec![])),
                )),
            )
        )
    );
}

#[test]
fn test_thf_quantified_application() {
    let statement = thf_statement("![X:$i]: (p @ X)");
    assert_eq!(
        statement,
        thf::Statement::Logical(thf::Formula::Quantified(
            thf::Quantifier::Forall,
            vec![("X".into(), thf::Formula::Function("$i".into(), vec![]))],
            Box::new(thf::Formula::Binary(
                thf::BinaryConnective::App,
                Box::new(thf::Formula::Function("p".into(), vec![])),
                Box::new(thf::Formula::Variable("X".into())),
            )),
        ))
    );
}

#[test]
fn test_thf_associativity() {
    // `@` reduces to the left...
    assert_eq!(
        thf_statement("a @ b @ c"),
        thf_statement("(a @ b) @ c"),
    );
    // ...while `|`, `&` and `>` reduce to the right.
    assert_eq!(
        thf_statement("a | b | c"),
        thf_statement("a | (b | c)"),
    );
    assert_eq!(
        thf_statement("a & b & c"),
        thf_statement("a & (b & c)"),
    );
    assert_eq!(
        thf_statement("a > b > c"),
        thf_statement("a > (b > c)"),
    );
    assert_ne!(thf_statement("a @ b @ c"), thf_statement("a @ (b @ c)"));
}

#[test]
fn test_cnf_clause() {
    let statement = cnf_statement("p(X) | ~q(X,a) | r(f(b)) = s");
    let cnf::Statement::Logical(clause) = &statement;
    assert_eq!(
        clause.0,
        vec![
            cnf::Literal::Positive("p".into(), vec![cnf::Term::Variable("X".into())]),
            cnf::Literal::Negative(
                "q".into(),
                vec![
                    cnf::Term::Variable("X".into()),
                    cnf::Term::Atomic("a".into(), vec![]),
                ]
            ),
            cnf::Literal::Equality(
                cnf::Term::Atomic(
                    "r".into(),
                    vec![cnf::Term::Atomic(
                        "f".into(),
                        vec![cnf::Term::Atomic("b".into(), vec![])]
                    )]
                ),
                cnf::Term::Atomic("s".into(), vec![]),
            ),
        ]
    );
}

#[test]
fn test_comment_attachment() {
    let parsed = problem("/* hi */\nfof(x, axiom, p).");
    assert_eq!(
        parsed.formula_comments["x"],
        vec![crate::ast::Comment {
            format: CommentFormat::Block,
            kind: CommentKind::Normal,
            content: " hi ".into(),
        }]
    );

    // Contiguous leading comments all attach to the formula that follows;
    // trailing comments are dropped.
    let parsed = problem("% one\n% two\nfof(a, axiom, p).\nfof(b, axiom, q).\n% trailing");
    let comments = &parsed.formula_comments["a"];
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].content, " one");
    assert_eq!(comments[1].content, " two");
    assert!(!parsed.formula_comments.contains_key("b"));

    // Comments before an include belong to the include.
    let parsed = problem("% axioms\ninclude('axioms.ax').\nfof(a, axiom, p).");
    assert_eq!(parsed.includes[0].comments[0].content, " axioms");
    assert!(parsed.formula_comments.is_empty());
}

#[test]
fn test_duplicate_names_latest_owns_comments() {
    // A later occurrence of a repeated name without leading comments clears
    // the entry, so the earlier comments are not reattached on printing.
    let parsed = problem("% c\nfof(a, axiom, p).\nfof(a, axiom, q).");
    assert!(parsed.formula_comments.is_empty());
    assert!(!parsed.to_string().contains("% c"));
    assert_round_trip("% c\nfof(a, axiom, p).\nfof(a, axiom, q).");

    // A later occurrence with leading comments owns the entry, and the
    // serializer prints the comments before that occurrence only.
    let parsed = problem("fof(a, axiom, p).\n% c\nfof(a, axiom, q).");
    assert_eq!(parsed.formula_comments["a"].len(), 1);
    assert_eq!(
        parsed.to_string(),
        "fof(a, axiom, p).\n% c\nfof(a, axiom, q).\n"
    );
    assert_round_trip("fof(a, axiom, p).\n% c\nfof(a, axiom, q).");
}

#[test]
fn test_nonclassical_box() {
    let input = "tff(a, axiom, [.] (p)).";
    let parsed = problem(input);
    let AnnotatedFormula::Tff(parsed) = &parsed.formulas[0] else {
        panic!("expected a TFF formula");
    };
    assert_eq!(
        parsed.formula,
        tff::Statement::Logical(tff::Formula::Nonclassical(
            NonclassicalConnective::Box(None),
            vec![tff::Formula::Atomic("p".into(), vec![])],
        ))
    );
    assert_eq!(parsed.to_string(), input);
}

#[test]
fn test_nonclassical_indexed_short_form_prints_long() {
    // `[#2]` is accepted, kept structurally, and serialized in long form.
    let parsed = problem("thf(a, axiom, [#2] (p)).");
    let printed = parsed.to_string();
    assert!(printed.contains("{$box(#2)} @ p"), "got {:?}", printed);
    assert_eq!(parsed, problem(&printed));
}

#[test]
fn test_equality_requires_unitary_terms() {
    // A quantified formula on either side of `=` must be parenthesized.
    assert!(matches!(
        parse_thf("a = ^ [X: $i]: X".as_bytes()),
        Err(Error::Parser(ParserError::ExpectedUnitaryTerm, Some(_)))
    ));
    assert!(matches!(
        parse_thf("~ a = b".as_bytes()),
        Err(Error::Parser(ParserError::ExpectedUnitaryTerm, Some(_)))
    ));
    assert!(parse_thf("a = (^ [X: $i]: X)".as_bytes()).is_ok());
    assert!(parse_thf("(~ a) = b".as_bytes()).is_ok());
}

#[test]
fn test_origin_positions() {
    let parsed = problem("fof(a, axiom, p).\n  tff(b, axiom, q).");
    assert_eq!(parsed.formulas[0].meta().origin(), Some((1, 1)));
    assert_eq!(parsed.formulas[1].meta().origin(), Some((2, 3)));
}

#[test]
fn test_meta_is_ignored_by_equality() {
    let input = "fof(a, axiom, p).";
    let mut left = parse_annotated_fof(input.as_bytes()).expect(ERROR_MESSAGE);
    let right = parse_annotated_fof(input.as_bytes()).expect(ERROR_MESSAGE);
    left.meta.insert("checked_by", MetaValue::Text("someone".into()));
    assert_eq!(left, right);
}

#[test]
fn test_determinism() {
    let input = "thf(a, axiom, ! [X: $i]: (p @ X)). cnf(c, axiom, p | ~ q).";
    assert_eq!(problem(input), problem(input));
}

#[test]
fn test_symbols() {
    let statement = thf_statement("![X:$i]: (p @ X)");
    let symbols = statement.symbols();
    assert_eq!(symbols.len(), 2);
    assert!(symbols.contains("$i") && symbols.contains("p"));

    let statement = fof_statement("p(f(X), \"obj\") => q");
    let symbols = statement.symbols();
    assert_eq!(symbols.len(), 4);
    assert!(symbols.contains("p") && symbols.contains("f"));
    assert!(symbols.contains("\"obj\"") && symbols.contains("q"));

    // Typing atoms count; variables never do.
    let statement = tff_statement("f: ($i * list(A)) > $o");
    let symbols = statement.symbols();
    assert!(symbols.contains("f") && symbols.contains("list"));
    assert!(!symbols.contains("A"));
}

#[test]
fn test_includes() {
    let parsed = problem("include('Axioms/SYN000+0.ax').\ninclude('sel.ax', [a, 'b c', 42]).");
    assert_eq!(parsed.includes.len(), 2);
    assert_eq!(parsed.includes[0].file_name, "Axioms/SYN000+0.ax");
    assert!(parsed.includes[0].selection.is_empty());
    assert_eq!(parsed.includes[1].selection, vec!["a", "b c", "42"]);
    assert_round_trip("include('sel.ax', [a, 'b c', 42]).");
}

#[test]
fn test_formula_order_is_preserved() {
    let parsed = problem("fof(b, axiom, p). fof(a, axiom, q). cnf(c, axiom, r).");
    let names: Vec<_> = parsed.formulas.iter().map(AnnotatedFormula::name).collect();
    assert_eq!(names, vec!["b", "a", "c"]);
}

#[test]
fn test_annotations() {
    let input = "fof(f, axiom, p, file('x.p', f), [status(thm), 42]).";
    let parsed = problem(input);
    let AnnotatedFormula::Fof(parsed) = &parsed.formulas[0] else {
        panic!("expected a FOF formula");
    };
    let (source, info) = parsed.annotations.as_ref().expect("missing annotations");
    assert_eq!(source.to_string(), "file('x.p', f)");
    assert_eq!(info.as_ref().map(Vec::len), Some(2));
    assert_eq!(parsed.to_string(), input);
}

#[test]
fn test_subroles() {
    let input = "thf(c, conjecture-strength(0.6), p).";
    let parsed = problem(input);
    let AnnotatedFormula::Thf(parsed) = &parsed.formulas[0] else {
        panic!("expected a THF formula");
    };
    assert_eq!(parsed.role.name, "conjecture");
    assert_eq!(
        parsed.role.subrole.as_ref().map(ToString::to_string),
        Some("strength(0.6)".into())
    );
    assert_eq!(parsed.to_string(), input);
}

#[test]
fn test_numbers_round_trip() {
    assert_round_trip(
        "fof(n, axiom, p(1, -2, +3, 1/2, -2/4, 3.14, -0.5, 2E10, 1.2e-3, 0.05, 3.14E1)).",
    );
    // Unreduced rationals and negative-zero reals survive.
    let fof::Statement::Logical(fof::Formula::Atomic(_, args)) =
        fof_statement("p(-2/4, -0.5)")
    else {
        panic!("expected an atom");
    };
    assert_eq!(
        args[0],
        fof::Term::Number(Number::Rational((-2).into(), 4.into()))
    );
    assert_eq!(args[0].to_string(), "-2/4");
    assert_eq!(args[1].to_string(), "-0.5");
}

#[test]
fn test_quoted_atoms() {
    // A quoted lower word is the same atom as its unquoted spelling.
    assert_eq!(fof_statement("'p'(a)"), fof_statement("p(a)"));
    assert_round_trip("fof(q, axiom, 'He said \\'no\\''(X) = \"quote\\\"d\").");
}

#[test]
fn test_thf_round_trips() {
    for input in [
        "thf(t1, type, king: $i).",
        "thf(t2, type, (f: ($i > $o))).",
        "thf(t3, type, arr: ($i > $i) > $o).",
        "thf(a1, axiom, ! [X: $i, Y: ($i > $o)]: (Y @ X)).",
        "thf(a2, axiom, (p & q & r)).",
        "thf(a3, axiom, ((^ [X: $i]: X) = f)).",
        "thf(a4, axiom, $ite(p, q, r)).",
        "thf(a5, axiom, $let(f: $i, f := g, (h @ f))).",
        "thf(a6, axiom, $let([f: $i, g: $o], [f := a, g := $true], (h @ f @ g))).",
        "thf(a7, axiom, [.] (p)).",
        "thf(a8, axiom, {$box(#1)} @ p).",
        "thf(a9, axiom, {$fancy(#1, key := value)} @ p @ q).",
        "thf(a10, axiom, ((&) @ p @ q)).",
        "thf(a11, axiom, (!! @ (^ [X: $i]: $true))).",
        "thf(a12, axiom, ([p, q] --> [r])).",
        "thf(a13, axiom, (f @ \"obj\" @ 3.14)).",
        "thf(a14, axiom, (p ~& q)).",
        "thf(a15, axiom, ? [X: $i]: (f @ X == g)).",
        "thf(a16, axiom, /.\\ (p)).",
        "thf(a17, axiom, <#m> (p)).",
        "thf(a18, axiom, (a := b)).",
        "thf(a19, axiom, ($true <~> $false)).",
        "thf(a20, axiom, # [X: $i]: (p @ X)).",
        "thf(a21, type, prod: ($i * $i) > $o).",
    ] {
        assert_round_trip(input);
    }
}

#[test]
fn test_tff_round_trips() {
    for input in [
        "tff(t1, type, king_of_france: human).",
        "tff(t2, type, f: ($i * $i) > $o).",
        "tff(t3, type, p: !> [A: $tType]: (A > $o)).",
        "tff(t4, type, t: [$i, $o]).",
        "tff(a1, axiom, ! [X: $i, Y]: (p(X) => q)).",
        "tff(a2, axiom, ([X, f(Y)] = [a, b])).",
        "tff(a3, axiom, [p] --> [q, r]).",
        "tff(a4, axiom, ($ite(p, 1, 2) = X)).",
        "tff(a5, axiom, $let(f: $i > $i, f(X) := g(X), p(f(a)))).",
        "tff(a6, axiom, (X == $true)).",
        "tff(a7, axiom, {$knows(#alice)} @ (p, q)).",
        "tff(a8, axiom, <.> ((p | q))).",
        "tff(a9, axiom, ((! [X]: p(X)) & q)).",
        "tff(a10, axiom, (X := $ite(p, a, b))).",
        "tff(a11, axiom, ~ (p(1/3) <=> q)).",
        "tff(a12, axiom, [#2] (p)).",
    ] {
        assert_round_trip(input);
    }
}

#[test]
fn test_clausal_round_trips() {
    for input in [
        "cnf(c1, axiom, p(X) | ~ q(X, a) | r(f(b)) = s).",
        "cnf(c2, negated_conjecture, (p | ~ q)).",
        "cnf(c3, axiom, X != Y | f(X) = f(Y)).",
        "tcf(tc1, type, f: $i > $o).",
        "tcf(tc2, axiom, ! [X: $i, Y]: (p(X) | ~ q(Y))).",
        "tcf(tc3, axiom, p | q).",
        "tpi(start, assumption, ! [X]: (p(X) => q(X))).",
    ] {
        assert_round_trip(input);
    }
}

#[test]
fn test_general_term_round_trips() {
    for input in [
        "fof(g1, axiom, p, inference(rule, [status(thm)], [g0]):x:[list]).",
        "fof(g2, axiom, p, [a, B, 1, \"d\", f(X):g]).",
        "fof(g3, axiom, p, $fof(q => r)).",
        "fof(g4, axiom, p, $thf((^ [X: $i]: X))).",
        "fof(g5, axiom, p, $fot(f(a, X))).",
        "fof(g6, axiom, p, creator:'Harrier').",
    ] {
        assert_round_trip(input);
    }
}

#[test]
fn test_problem_round_trip_with_comments() {
    assert_round_trip(
        "% leading\n/* block */\ninclude('ax.ax').\n%$ defined\nfof(a, axiom, p).\ntff(b, type, c: $i).",
    );
}

#[test]
fn test_errors() {
    // Missing final dot.
    assert!(matches!(
        problem_err("fof(a, axiom, p)"),
        Error::Parser(ParserError::UnexpectedEof(_), Some(_))
    ));
    // Chains of distinct connectives must be parenthesized.
    assert!(matches!(
        problem_err("fof(a, axiom, p & q | r)."),
        Error::Parser(ParserError::UnexpectedToken { .. }, Some(_))
    ));
    // A bare variable is not a FOF formula.
    assert!(matches!(
        problem_err("fof(a, axiom, X)."),
        Error::Parser(ParserError::UnexpectedToken { .. }, Some(_))
    ));
    // Tuples are a TFX form; FOF rejects them.
    assert!(matches!(
        problem_err("fof(a, axiom, [p, q])."),
        Error::Parser(ParserError::UnexpectedToken { .. }, Some(_))
    ));
    // An unknown top-level keyword.
    assert!(matches!(
        problem_err("axiom(a, axiom, p)."),
        Error::Parser(ParserError::UnexpectedToken { .. }, Some((1, 1)))
    ));
}

#[test]
fn test_empty_input() {
    assert!(problem("").formulas.is_empty());
    assert!(problem(" \n % only a comment\n").formulas.is_empty());

    let error = parse_fof("".as_bytes()).expect_err("expected an error");
    assert!(matches!(
        error,
        Error::Parser(ParserError::UnexpectedEof(_), None)
    ));
    assert_eq!((error.line(), error.column()), (-1, -1));
}

#[test]
fn test_trailing_input_is_rejected() {
    assert!(matches!(
        parse_fof("p junk".as_bytes()),
        Err(Error::Parser(ParserError::UnexpectedToken { .. }, Some(_)))
    ));
}

#[test]
fn test_error_positions() {
    let error = problem_err("fof(a, axiom,\n  p & & q).");
    assert_eq!((error.line(), error.column()), (2, 7));
}
