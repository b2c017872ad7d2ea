use polydiff::{Sign, Term, Token, parse, parse_tokens, tokenize};

#[test]
fn parses_signed_terms_in_order() {
    let terms = parse("-3x^2 + x - 0.25").expect("parse polynomial");
    assert_eq!(
        terms,
        vec![Term::new(-3.0, 2), Term::new(1.0, 1), Term::new(-0.25, 0)]
    );
}

#[test]
fn parses_from_token_sequence() {
    let tokens = vec![
        Token::Operator(Sign::Minus),
        Token::Term(Term::new(2.0, 1)),
        Token::Operator(Sign::Plus),
        Token::Term(Term::new(1.0, 0)),
    ];
    let terms = parse_tokens(tokens).expect("parse tokens");
    assert_eq!(terms, vec![Term::new(-2.0, 1), Term::new(1.0, 0)]);
}

#[test]
fn tokenizer_is_lazy() {
    let mut tokens = tokenize("x + ?");
    assert_eq!(tokens.next(), Some(Ok(Token::Term(Term::new(1.0, 1)))));
    assert_eq!(tokens.position(), 1);
    assert_eq!(tokens.next(), Some(Ok(Token::Operator(Sign::Plus))));
    assert!(tokens.next().expect("error item").is_err());
    assert_eq!(tokens.next(), None);
}

#[test]
fn syntax_errors() {
    for input in ["", "+", "2x+", "x + + 1", "x 1", "-"] {
        let err = parse(input).expect_err(input);
        assert!(err.is_syntax(), "{input}: {err:?}");
    }
}

#[test]
fn prelude_round_trip() {
    use polydiff::prelude::{diff, pretty};

    assert_eq!(pretty("x^2 + 0x - 3").expect("pretty"), "1x^2-3");
    assert_eq!(diff("x^2").expect("diff"), "2x");
}
