use std::{fmt::Display, str::FromStr};

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::ComparisonError;

const COMPARISON_STR: &str = r"\A(>=|<=|>|<)?([[:digit:]]+)\z";

lazy_static! {
    static ref REGEX_COMPARISON: Regex = Regex::new(COMPARISON_STR).unwrap();
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ComparisonOperator {
    Equal,
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
}

impl ComparisonOperator {
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::GreaterThan => ">",
            Self::LessThan => "<",
            Self::GreaterThanOrEqual => ">=",
            Self::LessThanOrEqual => "<=",
        }
    }

    #[inline]
    pub fn evaluate(&self, actual: u32, expected: u32) -> bool {
        match self {
            Self::Equal => actual == expected,
            Self::GreaterThan => actual > expected,
            Self::LessThan => actual < expected,
            Self::GreaterThanOrEqual => actual >= expected,
            Self::LessThanOrEqual => actual <= expected,
        }
    }

    pub fn format_message(&self, subject: &str, expected: u32, actual: u32) -> String {
        let requirement = match self {
            Self::Equal => "exactly",
            Self::GreaterThan => "greater than",
            Self::LessThan => "less than",
            Self::GreaterThanOrEqual => "at least",
            Self::LessThanOrEqual => "at most",
        };
        format!("{subject} should be {requirement} {expected}, found: {actual}")
    }

    fn from_symbol(symbol: Option<&str>) -> Option<Self> {
        match symbol {
            None | Some("") => Some(Self::Equal),
            Some(">=") => Some(Self::GreaterThanOrEqual),
            Some("<=") => Some(Self::LessThanOrEqual),
            Some(">") => Some(Self::GreaterThan),
            Some("<") => Some(Self::LessThan),
            Some(_) => None,
        }
    }
}

impl Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A count assertion such as `3`, `>=2` or `<5`. A bare number means equality.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct ComparisonExpression {
    pub operator: ComparisonOperator,
    pub value: u32,
}

impl ComparisonExpression {
    #[inline]
    pub fn new(operator: ComparisonOperator, value: u32) -> Self {
        Self { operator, value }
    }

    #[inline]
    pub fn evaluate(&self, actual: u32) -> bool {
        self.operator.evaluate(actual, self.value)
    }

    #[inline]
    pub fn format_message(&self, subject: &str, actual: u32) -> String {
        self.operator.format_message(subject, self.value, actual)
    }
}

impl Display for ComparisonExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.operator {
            ComparisonOperator::Equal => write!(f, "{}", self.value),
            operator => write!(f, "{operator}{}", self.value),
        }
    }
}

impl FromStr for ComparisonExpression {
    type Err = ComparisonError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ComparisonError::Empty);
        }

        let invalid = || ComparisonError::Invalid { input: input.to_string() };
        let captures = REGEX_COMPARISON.captures(trimmed).ok_or_else(invalid)?;

        let operator = ComparisonOperator::from_symbol(captures.get(1).map(|symbol| symbol.as_str()))
            .ok_or_else(invalid)?;
        let value = captures.get(2)
            .ok_or_else(invalid)?
            .as_str()
            .parse::<u32>()
            .map_err(|_| ComparisonError::OutOfRange { input: input.to_string() })?;

        Ok(Self { operator, value })
    }
}

/// Parses a count assertion. Absent input is rejected the same way as blank input.
pub fn parse_comparison_expression<'a>(input: impl Into<Option<&'a str>>) -> Result<ComparisonExpression, ComparisonError> {
    match input.into() {
        Some(input) => input.parse(),
        None => Err(ComparisonError::Empty),
    }
}

#[cfg(test)]
mod comparison_tests {
    use rstest::rstest;

    use crate::errors::ComparisonError;

    use super::{ComparisonExpression, ComparisonOperator, parse_comparison_expression};

    #[rstest]
    #[case("3", ComparisonOperator::Equal, 3)]
    #[case("0", ComparisonOperator::Equal, 0)]
    #[case(">=2", ComparisonOperator::GreaterThanOrEqual, 2)]
    #[case("<=10", ComparisonOperator::LessThanOrEqual, 10)]
    #[case(">1", ComparisonOperator::GreaterThan, 1)]
    #[case("<5", ComparisonOperator::LessThan, 5)]
    #[case("  >=7  ", ComparisonOperator::GreaterThanOrEqual, 7)]
    #[case("007", ComparisonOperator::Equal, 7)]
    fn parses_valid_expressions(#[case] input: &str, #[case] operator: ComparisonOperator, #[case] value: u32) {
        let expression = parse_comparison_expression(input);
        assert_eq!(expression, Ok(ComparisonExpression::new(operator, value)), "Input: '{input}'");
    }

    #[rstest]
    #[case::empty(Some(""))]
    #[case::whitespace(Some("   "))]
    #[case::absent(None)]
    fn rejects_blank_expressions(#[case] input: Option<&str>) {
        assert_eq!(parse_comparison_expression(input), Err(ComparisonError::Empty));
    }

    #[rstest]
    #[case("abc")]
    #[case("=3")]
    #[case("==3")]
    #[case(">= 3")]
    #[case("-1")]
    #[case("3.5")]
    #[case(">")]
    #[case("3>")]
    fn rejects_invalid_expressions(#[case] input: &str) {
        let error = parse_comparison_expression(input).unwrap_err();
        assert_eq!(error, ComparisonError::Invalid { input: input.to_string() });
        assert!(error.to_string().contains(input), "Message: {error}");
        assert!(error.to_string().contains("[>=|<=|>|<]<number>"), "Message: {error}");
    }

    #[test]
    fn rejects_values_out_of_range() {
        let input = "99999999999";
        assert_eq!(parse_comparison_expression(input), Err(ComparisonError::OutOfRange { input: input.to_string() }));
    }

    #[rstest]
    #[case(ComparisonOperator::Equal, 3, 3, true)]
    #[case(ComparisonOperator::Equal, 2, 3, false)]
    #[case(ComparisonOperator::GreaterThan, 4, 3, true)]
    #[case(ComparisonOperator::GreaterThan, 3, 3, false)]
    #[case(ComparisonOperator::LessThan, 2, 3, true)]
    #[case(ComparisonOperator::LessThan, 3, 3, false)]
    #[case(ComparisonOperator::GreaterThanOrEqual, 3, 3, true)]
    #[case(ComparisonOperator::GreaterThanOrEqual, 2, 3, false)]
    #[case(ComparisonOperator::LessThanOrEqual, 3, 3, true)]
    #[case(ComparisonOperator::LessThanOrEqual, 4, 3, false)]
    fn evaluates(#[case] operator: ComparisonOperator, #[case] actual: u32, #[case] expected: u32, #[case] outcome: bool) {
        assert_eq!(operator.evaluate(actual, expected), outcome, "{actual} {operator} {expected}");
        assert_eq!(ComparisonExpression::new(operator, expected).evaluate(actual), outcome);
    }

    #[rstest]
    #[case("3", "Participant count should be exactly 3, found: 2")]
    #[case(">1", "Participant count should be greater than 1, found: 2")]
    #[case("<1", "Participant count should be less than 1, found: 2")]
    #[case(">=3", "Participant count should be at least 3, found: 2")]
    #[case("<=1", "Participant count should be at most 1, found: 2")]
    fn formats_messages(#[case] input: &str, #[case] expected: &str) {
        let expression: ComparisonExpression = input.parse().unwrap();
        assert_eq!(expression.format_message("Participant count", 2), expected);
    }

    #[rstest]
    #[case("3", "3")]
    #[case(" >=2 ", ">=2")]
    #[case("<5", "<5")]
    #[case("010", "10")]
    fn displays_canonical_form(#[case] input: &str, #[case] expected: &str) {
        let expression: ComparisonExpression = input.parse().unwrap();
        assert_eq!(expression.to_string(), expected);
    }
}
