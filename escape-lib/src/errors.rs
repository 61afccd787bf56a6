use thiserror::Error;

/// Rejections from [crate::pairs::parse_pairs]. The offending segment is kept verbatim (after
/// trimming) so a failing scenario can point at the exact text.
#[derive(Error, Clone, PartialEq, Eq, Hash, Debug)]
pub enum PairError {
    #[error("malformed key=value pair: '{segment}', expected format key=value")]
    MalformedPair { segment: String },

    #[error("empty key in key=value pair: '{segment}'")]
    EmptyKey { segment: String },
}

impl PairError {
    pub fn segment(&self) -> &str {
        match self {
            Self::MalformedPair { segment } => segment,
            Self::EmptyKey { segment } => segment,
        }
    }
}

#[derive(Error, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ComparisonError {
    #[error("comparison expression cannot be empty")]
    Empty,

    #[error("invalid comparison expression: '{input}', expected format [>=|<=|>|<]<number> (e.g. '3', '>=2', '<5')")]
    Invalid { input: String },

    #[error("comparison value in '{input}' is out of range")]
    OutOfRange { input: String },
}
