use infixcalc::repl::{BANNER, Config, Summary, answer, run};

fn session(input: &str, config: &Config) -> (String, Summary) {
    let mut out = Vec::new();
    let summary = run(input.as_bytes(), &mut out, config).expect("in-memory I/O cannot fail");
    (String::from_utf8(out).expect("output is UTF-8"), summary)
}

fn quiet() -> Config {
    Config { prompt: String::new(),
             ..Config::default() }
}

#[test]
fn answers_each_line_until_blank() {
    let (out, summary) = session("5+2*3\n5^2*3\n\n1+1\n", &quiet());

    assert_eq!(out, format!("{BANNER}\n5 + 2 * 3 = 11\n5 ^ 2 * 3 = 75\n\n"));
    assert_eq!(summary,
               Summary { evaluated: 2,
                         failed:    0, });
}

#[test]
fn stops_at_end_of_input() {
    let (out, summary) = session("1-2-3", &quiet());

    assert!(out.contains("1 - 2 - 3 = -4\n"));
    assert_eq!(summary.evaluated, 1);
}

#[test]
fn errors_do_not_end_the_session() {
    let (out, summary) = session("5+a\n(1+2\n2*3\n", &quiet());

    assert!(out.contains("5 + a: Invalid character 'a'"));
    assert!(out.contains("( 1 + 2: Unbalanced parentheses"));
    assert!(out.contains("2 * 3 = 6\n"));
    assert_eq!(summary,
               Summary { evaluated: 1,
                         failed:    2, });
}

#[test]
fn prompt_is_repeated() {
    let config = Config { prompt: "> ".to_string(),
                          ..Config::default() };
    let (out, _) = session("1\n2\n", &config);

    assert_eq!(out.matches("> ").count(), 3);
}

#[test]
fn precision_controls_significant_digits() {
    assert_eq!(answer("1÷3", 4).unwrap(), "1 / 3 = 0.3333");
    assert_eq!(answer("1÷3", 8).unwrap(), "1 / 3 = 0.33333333");
    assert_eq!(answer("2^20", 4).unwrap(), "2 ^ 20 = 1.049e+06");
    assert_eq!(answer("1/0", 4).unwrap(), "1 / 0 = inf");
    assert!(answer("1 2", 4).is_err());
}
