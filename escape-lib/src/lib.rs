//! Parsing for the small text grammar used by test fixtures: delimiter separated segments where a
//! backslash makes the following character literal.
//!
//! ```
//! use escape_lib::{parse_pairs, tokenize};
//!
//! assert_eq!(tokenize(r"a\,b,c", ","), ["a,b", "c"]);
//! assert_eq!(parse_pairs("role=admin").unwrap()["role"], "admin");
//! ```

pub mod constants;
pub mod errors;
pub mod parse_chars;

pub mod tokenizer;
pub mod pairs;
pub mod list;
pub mod comparison;

pub use comparison::{ComparisonExpression, ComparisonOperator, parse_comparison_expression};
pub use errors::{ComparisonError, PairError};
pub use list::parse_comma_separated_list;
pub use pairs::parse_pairs;
pub use parse_chars::{
    escaped_to_escapable::{find_first_unescaped, unescape},
    non_escaped_to_escaped::escape,
};
pub use tokenizer::{Tokens, tokenize};
