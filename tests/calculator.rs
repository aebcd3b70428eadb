use reckon::{
    calculate, evaluate, parse, tokenize_line, Error, EvalError, LexError, ParseError, MAX_NESTING,
};

fn assert_evaluates(input: &str, expected: i64) {
    match calculate(input) {
        Ok(value) => assert_eq!(value, expected, "\"{input}\""),
        Err(err) => panic!("\"{input}\" failed: {err}"),
    }
}

fn assert_fails_with(input: &str, msg: &str) {
    match calculate(input) {
        Ok(value) => panic!("\"{input}\" evaluated to {value}, expected \"{msg}\""),
        Err(err) => assert_eq!(err.to_string(), msg, "\"{input}\""),
    }
}

#[test]
fn test_literals_and_signs() {
    assert_evaluates("0", 0);
    assert_evaluates("5", 5);
    assert_evaluates("   42  ", 42);
    assert_evaluates("-5", -5);
    assert_evaluates("+7", 7);
    assert_evaluates("007", 7);
    for n in [0i64, 1, 9, 10, 12345, 9223372036854775807] {
        assert_evaluates(&n.to_string(), n);
        assert_evaluates(&format!("-{n}"), -n);
        assert_evaluates(&format!("+{n}"), n);
    }
    assert_evaluates("-9223372036854775808", i64::MIN);
    assert_fails_with(
        "9223372036854775808",
        "Number literal 9223372036854775808 does not fit in a 64-bit integer",
    );
}

#[test]
fn test_basic_arithmetic() {
    assert_evaluates("5+3", 8);
    assert_evaluates("10-2", 8);
    assert_evaluates("5-10", -5);
    assert_evaluates("5*2", 10);
    assert_evaluates("20/4", 5);
    assert_evaluates("12 + 34", 46);
    assert_evaluates("2*2*2*2*2", 32);
    assert_evaluates("1+2+3+4+5", 15);
}

#[test]
fn test_precedence() {
    assert_evaluates("2+3*4", 14);
    assert_evaluates("(2+3)*4", 20);
    assert_evaluates("0-3*4+2", -10);
    assert_evaluates("2*3+4*5", 26);
    assert_evaluates("1+2*3-4/2", 5);
    assert_evaluates("2+3*4-5*(6-4)", 4);
    assert_evaluates("2*(3+4)*5", 70);
}

#[test]
fn test_left_associativity() {
    assert_evaluates("10-1-2-3", 4);
    assert_evaluates("100/5/2", 10);
    assert_evaluates("4/2*3", 6);
    assert_evaluates("2*3/4", 1);
    assert_evaluates("5*2*3*1", 30);
}

#[test]
fn test_unary_chains() {
    assert_evaluates("--5", 5);
    assert_evaluates("-+5", -5);
    assert_evaluates("- - 10", 10);
    assert_evaluates("3 + -2", 1);
    assert_evaluates("3 - -2", 5);
    assert_evaluates("3 * -2", -6);
    assert_evaluates("-3 * -2", 6);
    assert_evaluates("-(2+3)*4", -20);
    assert_evaluates("-(2+3)*-4", 20);
    assert_evaluates("+(5)", 5);
    assert_evaluates("-(+5)", -5);

    for len in 0..40 {
        let prefix: String = (0..len).map(|i| if i % 2 == 0 { '-' } else { '+' }).collect();
        let minuses = prefix.matches('-').count();
        let expected = if minuses % 2 == 0 { 5 } else { -5 };
        assert_evaluates(&format!("{prefix}5"), expected);
    }
}

#[test]
fn test_parentheses() {
    assert_evaluates("((2))", 2);
    assert_evaluates("(((((5)))))", 5);
    assert_evaluates("5 + (6 - (3 + 1))", 7);
    assert_evaluates("5+(6-(3+1))*2", 9);
    assert_evaluates("((1+2)*(3+4))", 21);
    assert_evaluates("8/(3)", 2);
}

#[test]
fn test_truncating_division() {
    assert_evaluates("8/3", 2);
    assert_evaluates("-8/3", -2);
    assert_evaluates("9/ -2", -4);
    assert_evaluates("-9/-2", 4);
    assert_evaluates("4/(2*3)", 0);
    for a in -20i64..=20 {
        for b in (-7i64..=7).filter(|b| *b != 0) {
            let expected = (a as f64 / b as f64).trunc() as i64;
            assert_evaluates(&format!("{a}/{b}"), expected);
            assert_evaluates(&format!("({a})/({b})"), expected);
        }
    }
}

#[test]
fn test_whitespace_insensitivity() {
    assert_evaluates("  6\t* 7 ", 42);
    assert_eq!(calculate("  6\t* 7 "), calculate("6*7"));
    assert_eq!(calculate("( 1 +2 ) *\t3"), calculate("(1+2)*3"));
}

#[test]
fn test_division_by_zero() {
    let tokens = tokenize_line("1/0").unwrap();
    let tree = parse(&tokens).unwrap();
    assert_eq!(evaluate(&tree), Err(EvalError::DivisionByZero));
    assert_eq!(calculate("1/0"), Err(Error::Eval(EvalError::DivisionByZero)));
    assert_fails_with("10/(5-5)", "You cannot divide by zero");
    assert_fails_with("0/0", "You cannot divide by zero");
}

#[test]
fn test_unknown_character() {
    assert!(matches!(
        tokenize_line("5&3"),
        Err(LexError::UnknownCharacter { character: '&', .. })
    ));
    assert_fails_with("5&3", "Found an unknown character, '&' at column 2");
    assert_fails_with("2^3", "Found an unknown character, '^' at column 2");
    assert_fails_with("1.5", "Found an unknown character, '.' at column 2");
}

#[test]
fn test_parenthesis_balance() {
    assert!(matches!(
        calculate("(2+3"),
        Err(Error::Parse(ParseError::MissingClosingParen { .. }))
    ));
    assert!(matches!(
        calculate("2)"),
        Err(Error::Parse(ParseError::UnexpectedToken { .. }))
    ));
    assert_fails_with(
        "((1+2)",
        "Missing closing parenthesis for '(' at column 1",
    );
}

#[test]
fn test_trailing_tokens_are_rejected() {
    assert_fails_with(
        "5 6",
        "Unexpected token type, NUMBER at column 3, expected end of input",
    );
    assert_fails_with(
        "(1)(2)",
        "Unexpected token type, LPAREN at column 4, expected end of input",
    );
}

#[test]
fn test_incomplete_input() {
    assert_eq!(calculate(""), Err(Error::Parse(ParseError::MissingOperand)));
    assert_eq!(calculate("   "), Err(Error::Parse(ParseError::MissingOperand)));
    assert_fails_with("1+", "No tokens left, expected an operand");
    assert_fails_with("1++", "No tokens left, expected an operand");
}

#[test]
fn test_first_failing_stage_wins() {
    // The lexer rejects the line before the parser sees the dangling operator.
    assert!(matches!(calculate("1+ $"), Err(Error::Lex(_))));
    // The parser rejects the line before the interpreter sees the division.
    assert!(matches!(calculate("1/0)"), Err(Error::Parse(_))));
}

#[test]
fn test_pipeline_is_repeatable() {
    for input in ["-(4+4)/3", "5 6", "1/0", "7&"] {
        assert_eq!(calculate(input), calculate(input));
    }
}

#[test]
fn test_long_lines() {
    assert_evaluates(&vec!["1"; 100_000].join("+"), 100_000);
    assert_evaluates(&vec!["1"; 100_000].join(" * "), 1);
    assert_evaluates(&format!("{}5", "-".repeat(100_000)), 5);
    assert_evaluates(&format!("{}5", "-".repeat(100_001)), -5);
    assert_evaluates(&format!("{}(2+3)", "+-".repeat(50_000)), 5);
    assert_evaluates(&format!("7{}", "--1".repeat(100_000)), 100_007);
}

#[test]
fn test_deep_parentheses_are_limited() {
    let deepest = format!("{}-3{}", "(".repeat(MAX_NESTING), ")".repeat(MAX_NESTING));
    assert_evaluates(&deepest, -3);
    let too_deep = format!("{}1{}", "(".repeat(200_000), ")".repeat(200_000));
    assert!(matches!(
        calculate(&too_deep),
        Err(Error::Parse(ParseError::TooDeeplyNested { .. }))
    ));
}
