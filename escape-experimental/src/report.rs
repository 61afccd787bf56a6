use escape_lib::{ComparisonError, PairError, parse_comma_separated_list, parse_comparison_expression, parse_pairs, tokenize};
use thiserror::Error;

use crate::options::Mode;

#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum RunError {
    #[error(transparent)]
    Pairs(#[from] PairError),

    #[error(transparent)]
    Comparison(#[from] ComparisonError),
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Report {
    pub lines: Vec<String>,
    pub passed: bool,
}

impl Report {
    fn passed(lines: Vec<String>) -> Self {
        Self { lines, passed: true }
    }
}

/// Runs one input through the parser selected by `mode`. Parse failures are returned as errors;
/// a comparison that parses but does not hold is a failed report.
pub fn run(mode: Mode, delimiter: &str, input: &str) -> Result<Report, RunError> {
    match mode {
        Mode::Split => Ok(Report::passed(numbered(tokenize(input, delimiter)))),
        Mode::List => Ok(Report::passed(numbered(parse_comma_separated_list(input)))),
        Mode::Pairs => {
            let mut pairs = parse_pairs(input)?.into_iter().collect::<Vec<_>>();
            pairs.sort();
            Ok(Report::passed(
                pairs.into_iter()
                    .map(|(key, value)| format!("{key} = '{value}'"))
                    .collect()
            ))
        },
        Mode::Compare { actual } => {
            let expression = parse_comparison_expression(input)?;
            if expression.evaluate(actual) {
                Ok(Report::passed(vec![format!("PASS: {actual} matches {expression}")]))
            } else {
                Ok(Report {
                    lines: vec![format!("FAIL: {}", expression.format_message("Count", actual))],
                    passed: false,
                })
            }
        },
    }
}

fn numbered(segments: Vec<String>) -> Vec<String> {
    segments.into_iter()
        .enumerate()
        .map(|(index, segment)| format!("[{index}] '{segment}'"))
        .collect()
}
