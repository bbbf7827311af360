//! The interactive loop: one equation per line until a blank line or the end
//! of input.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::{
    calculator::{equation::Equation, normalizer::normalize},
    error::CalcResult,
    util::format::{DEFAULT_PRECISION, significant},
};

/// Printed once before the first prompt.
pub const BANNER: &str = "Press Enter to quit.";
/// Printed before every line is read.
pub const PROMPT: &str = "Enter an arithmetic equation in infix notation: ";

/// Presentation settings for the interactive loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Significant digits used when printing results.
    pub precision: usize,
    /// Text written before each line is read.
    pub prompt:    String,
}

impl Default for Config {
    fn default() -> Self {
        Self { precision: DEFAULT_PRECISION,
               prompt:    PROMPT.to_string(), }
    }
}

/// What happened during one interactive session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Lines that produced a result.
    pub evaluated: usize,
    /// Lines that were rejected or failed to evaluate.
    pub failed:    usize,
}

/// Reads equations from `reader` and writes answers to `writer`.
///
/// Each answer is `<canonical> = <result>`, or `<canonical>: <error>` when the
/// equation is rejected. Errors do not end the session; a blank line or the
/// end of input does.
///
/// # Errors
/// Only I/O errors from `reader` or `writer`.
///
/// # Example
/// ```
/// use infixcalc::repl::{Config, run};
///
/// let mut out = Vec::new();
/// let summary = run("5+2*3\n1/(2\n\n".as_bytes(), &mut out, &Config::default()).unwrap();
///
/// let out = String::from_utf8(out).unwrap();
/// assert!(out.contains("5 + 2 * 3 = 11\n"));
/// assert_eq!((summary.evaluated, summary.failed), (1, 1));
/// ```
pub fn run<R, W>(reader: R, mut writer: W, config: &Config) -> io::Result<Summary>
    where R: BufRead,
          W: Write
{
    let mut summary = Summary::default();

    writeln!(writer, "{BANNER}")?;
    write!(writer, "{}", config.prompt)?;
    writer.flush()?;

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }

        match answer(&line, config.precision) {
            Ok(answer) => {
                summary.evaluated += 1;
                writeln!(writer, "{answer}")?;
            },
            Err(e) => {
                summary.failed += 1;
                debug!("failed to evaluate {line:?}: {e:?}");
                writeln!(writer, "{}: {e}", normalize(&line))?;
            },
        }

        write!(writer, "{}", config.prompt)?;
        writer.flush()?;
    }

    writeln!(writer)?;
    Ok(summary)
}

/// Evaluates one equation and renders `<canonical> = <result>`.
///
/// # Errors
/// Any validation, tokenizer or evaluator error.
///
/// # Example
/// ```
/// use infixcalc::repl::answer;
///
/// assert_eq!(answer("(8−−7)+(9×+1) −−3.4 − 4 ÷ 7", 4).unwrap(),
///            "( 8 - -7 ) + ( 9 * +1 ) - -3.4 - 4 / 7 = 26.83");
/// ```
pub fn answer(line: &str, precision: usize) -> CalcResult<String> {
    let equation = Equation::parse(line)?;
    let value = equation.solve()?;
    Ok(format!("{equation} = {}", significant(value, precision)))
}
