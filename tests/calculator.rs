use infixcalc::{
    calculator::{
        equation::Equation,
        evaluator::Evaluator,
        lexer::{Lexeme, Token, tokenize, tokenize_all},
        normalizer::normalize,
        operator::OPERATORS,
        validator::{check, validate},
    },
    error::CalcError,
    evaluate,
    regression::{DEFAULT_ERROR_FACTOR, approximately_equal},
};

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(actual) => assert!(approximately_equal(expected, actual, DEFAULT_ERROR_FACTOR),
                              "{src} evaluated to {actual}, expected {expected}"),
        Err(e) => panic!("{src} failed: {e}"),
    }
}

fn assert_failure(src: &str, name: &str) {
    match evaluate(src) {
        Ok(v) => panic!("{src} evaluated to {v} but was expected to fail with {name}"),
        Err(e) => assert_eq!(e.name(), name, "{src} failed with {e}"),
    }
}

#[test]
fn precedence_and_associativity() {
    assert_value("5+2*3", 11.0);
    assert_value("5^2*3", 75.0);
    assert_value("5/2*3", 7.5);
    assert_value("1-2-3", -4.0);
    assert_value("8/4/2", 1.0);
    assert_value("(1+2)*3", 9.0);
    assert_value("2*(3+4)*5", 70.0);
}

#[test]
fn chained_exponents_are_left_associative() {
    assert_value("2^3^2", 64.0);
    assert_value("2^(3^2)", 512.0);
}

#[test]
fn signs_are_told_apart_from_operators() {
    assert_value("-1+-1", -2.0);
    assert_value("-1++1", 0.0);
    assert_value("8--7", 15.0);
    assert_value("2*-3", -6.0);
    assert_value("2^-1", 0.5);
    assert_value("8--7   +8++7", 30.0);
    assert_value("3 -2", 1.0);
}

#[test]
fn spreadsheet_glyphs() {
    assert_value("(8−−7)+(9×+1) −−3.4 − 4 ÷ 7", 26.828_571_428_571_4);
    assert_value("5÷2×3^3", 67.5);
}

#[test]
fn decimals() {
    assert_value("1.1+2.2+3.3", 6.6);
    assert_value(".5*4", 2.0);
    assert_value("3.+1", 4.0);
}

#[test]
fn division_by_zero_is_not_an_error() {
    assert_eq!(evaluate("1/0"), Ok(f64::INFINITY));
    assert_eq!(evaluate("-1/0"), Ok(f64::NEG_INFINITY));
    assert!(evaluate("0/0").unwrap().is_nan());
}

#[test]
fn validation_failures() {
    assert_failure("(1+2", "UnbalancedParentheses");
    assert_failure("1+2)", "UnbalancedParentheses");
    assert_failure("5+a", "InvalidCharacter");
    assert_failure("5%2", "InvalidCharacter");
    assert_failure("5++*3", "InvalidOperatorSequence");
    assert_failure("5**3", "InvalidOperatorSequence");
    assert_failure("(1)+-(2)", "InvalidOperatorSequence");
}

#[test]
fn validation_runs_before_evaluation() {
    let err = Equation::parse("(1+2").unwrap_err();
    assert!(err.is_validation());
    assert!(validate("( 1 + 2"));
    assert!(!validate("( 1 + 2 )"));
    assert_eq!(check("2 ^ ^ 3").unwrap_err().name(), "InvalidOperatorSequence");
}

#[test]
fn malformed_token_sequences() {
    assert_failure("*5", "InsufficientOperands");
    assert_failure("5-", "InsufficientOperands");
    assert_failure("-(1)", "InsufficientOperands");
    assert_failure("1 2", "InsufficientOperands");
    assert_failure("(1)(2)", "InsufficientOperands");
    assert_failure("", "InsufficientOperands");
    assert_failure("( )", "InsufficientOperands");
    assert_failure(")1(", "UnbalancedParentheses");
    assert_failure("1..2", "UnrecognizedToken");
    assert_failure(".", "UnrecognizedToken");
}

#[test]
fn leftover_values_are_insufficient_operands() {
    assert_eq!(evaluate("1 2 3"),
               Err(CalcError::InsufficientOperands { operator: None,
                                                     found:    3, }));
    assert_eq!(evaluate("( )"),
               Err(CalcError::InsufficientOperands { operator: None,
                                                     found:    0, }));
}

#[test]
fn balanced_equations_end_in_value_or_insufficient_operands() {
    let sources = ["1 2", "(1)(2)", "", "( )", "*5", "7+", "-(1)", "(4)-", "((3)) 4", "2 ^ (3) 1"];
    for src in sources {
        assert!(!validate(src), "{src:?} should pass validation");
        match evaluate(src) {
            Ok(_) | Err(CalcError::InsufficientOperands { .. }) => {},
            Err(e) => panic!("{src:?} failed with {}", e.name()),
        }
    }
}

#[test]
fn normalization_is_idempotent() {
    for src in ["-1+-1",
                "(8−−7)+(9×+1) −−3.4 − 4 ÷ 7",
                "8--7   +8++7",
                "  ( 1+2 )\t*3 ",
                "1*+-2",
                "5++*3",
                "(8.4 −+7.1)-(9.9× +1.0) −+3.4 + 4.6 ÷ 7.3",
                "2^-.5",
                "5+a"]
    {
        let once = normalize(src);
        assert_eq!(normalize(&once), once, "normalizing {src:?} twice");
    }
}

#[test]
fn normalized_form_evaluates_like_the_paste() {
    for src in ["(8−−7)+(9×+1)−−3.4−4÷7/2^2", "5÷(2×(3^3))", "(8+−7) + (9×-1) +−3.4 − 4 ÷ 7+2^2"] {
        assert_eq!(evaluate(&normalize(src)), evaluate(src));
    }
    assert_eq!(evaluate("6×2−4÷2"), evaluate("6*2-4/2"));
}

#[test]
fn inline_and_pretokenized_paths_agree() {
    for (src, _) in infixcalc::regression::CASES {
        let equation = Equation::parse(src).unwrap();
        assert_eq!(equation.solve(), equation.solve_tokenized(), "{src}");
    }
}

#[test]
fn tokens_keep_their_text() {
    let tokens = tokenize_all("( 9 * +1 )").unwrap();
    let texts: Vec<&str> = tokens.iter().map(|l| l.text).collect();
    assert_eq!(texts, ["(", "9", "*", "+1", ")"]);
    assert_eq!(tokens[3].token, Token::Number(1.0));
    assert_eq!(tokens[2].token, Token::Operator('*'));

    let err = tokenize("1 + 2x").find_map(Result::err).unwrap();
    assert_eq!(err, CalcError::UnrecognizedToken { token: "2x".to_string() });
}

#[test]
fn evaluator_over_a_token_list() {
    let tokens = [Lexeme { token: Token::Number(2.0),
                           text:  "2", },
                  Lexeme { token: Token::Operator('^'),
                           text:  "^", },
                  Lexeme { token: Token::Number(10.0),
                           text:  "10", }];
    assert_eq!(Evaluator::new().evaluate_tokens(&tokens), Ok(1024.0));

    let dangling = [Lexeme { token: Token::Operator('+'),
                             text:  "+", }];
    assert_eq!(Evaluator::new().evaluate_tokens(&dangling),
               Err(CalcError::InsufficientOperands { operator: Some('+'),
                                                     found:    0, }));
}

#[test]
fn operator_table() {
    for symbol in OPERATORS.symbols() {
        assert!(OPERATORS.function_of(symbol).is_ok());
        assert!(OPERATORS.precedence_of(symbol).is_ok());
    }
    let mut symbols = OPERATORS.symbols().collect::<Vec<_>>();
    symbols.sort_unstable();
    assert_eq!(symbols, ['*', '+', '-', '/', '^']);
    assert_eq!(OPERATORS.precedence_of('^'), Ok(1));
    assert_eq!(OPERATORS.precedence_of('/'), Ok(2));
    assert_eq!(OPERATORS.precedence_of('-'), Ok(3));
    assert_eq!(OPERATORS.apply('/', 1.0, 4.0), Ok(0.25));
    assert_eq!(OPERATORS.precedence_of('('),
               Err(CalcError::UnknownOperator { symbol: '(' }));
}

#[test]
fn equation_display_is_canonical() {
    let equation: Equation = "(8−−7)+(9×+1)".parse().unwrap();
    assert_eq!(equation.to_string(), "( 8 - -7 ) + ( 9 * +1 )");
    assert_eq!(equation.raw(), "(8−−7)+(9×+1)");
}
