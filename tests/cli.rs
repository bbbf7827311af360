use std::process::{Command, Output};

fn infixcalc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_infixcalc")).args(args)
                                                 .output()
                                                 .expect("run infixcalc")
}

fn stdout_of(args: &[&str]) -> String {
    let output = infixcalc(args);
    assert!(output.status.success(),
            "infixcalc {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr));
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn equation_argument() {
    assert_eq!(stdout_of(&["5+2*3"]), "5 + 2 * 3 = 11\n");
}

#[test]
fn equation_argument_starting_with_minus() {
    assert_eq!(stdout_of(&["-1+-1"]), "-1 + -1 = -2\n");
    assert_eq!(stdout_of(&["-1++1"]), "-1 + +1 = 0\n");
    assert_eq!(stdout_of(&["−3×2"]), "-3 * 2 = -6\n");
}

#[test]
fn flags_still_parse_before_a_negative_equation() {
    assert_eq!(stdout_of(&["-p", "8", "-1/3"]), "-1 / 3 = -0.33333333\n");
    assert_eq!(stdout_of(&["-v", "-2^2"]), "-2 ^ 2 = 4\n");
}

#[test]
fn rejected_equation_exits_with_failure() {
    let output = infixcalc(&["5+a"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid character 'a'"));
}

#[test]
fn regression_mode() {
    assert_eq!(stdout_of(&["-t"]), "All 29 regression cases passed.\n");
}
