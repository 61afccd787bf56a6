use escape_lib::constants::SEGMENT_DELIMITER;
use thiserror::Error;

pub const USAGE: &str = "\
Usage: escape-experimental [OPTIONS] [INPUT]...

Each INPUT, and each line piped through stdin, is parsed on its own.

Options:
  --split              split each input on the delimiter (default)
  -l, --list           parse each input as a comma separated list
  -p, --pairs          parse each input as comma separated key=value pairs
  -c, --compare <N>    parse each input as a comparison expression and test it against N
  -d, --delimiter <D>  delimiter used by --split (default ',')
  -h, --help           print this message
  --                   treat every following argument as an input

Set RUST_LOG=debug to see what the parser is doing.";

#[derive(Error, Clone, PartialEq, Eq, Hash, Debug)]
pub enum OptionsError {
    #[error("help requested")]
    HelpRequested,

    #[error("the option '{0}' requires a value")]
    MissingValue(&'static str),

    #[error("'{0}' is not a valid count for --compare")]
    InvalidCount(String),

    #[error("unknown option '{0}'")]
    UnknownOption(String),
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Mode {
    #[default]
    Split,
    List,
    Pairs,
    Compare { actual: u32 },
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Options {
    pub mode: Mode,
    pub delimiter: String,
    pub inputs: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            delimiter: SEGMENT_DELIMITER.to_string(),
            inputs: Vec::new(),
        }
    }
}

impl Options {
    /// Reads options from the program arguments, excluding the program name. When several modes
    /// are given the last one wins.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self, OptionsError> {
        let mut options = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--" => {
                    options.inputs.extend(args.by_ref());
                },
                "-h" | "--help" => return Err(OptionsError::HelpRequested),
                "--split" => options.mode = Mode::Split,
                "-l" | "--list" => options.mode = Mode::List,
                "-p" | "--pairs" => options.mode = Mode::Pairs,
                "-c" | "--compare" => {
                    let count = args.next().ok_or(OptionsError::MissingValue("--compare"))?;
                    options.mode = Mode::Compare { actual: parse_count(count)? };
                },
                "-d" | "--delimiter" => {
                    options.delimiter = args.next().ok_or(OptionsError::MissingValue("--delimiter"))?;
                },
                _ if arg.starts_with("--compare=") => {
                    let count = arg["--compare=".len()..].to_string();
                    options.mode = Mode::Compare { actual: parse_count(count)? };
                },
                _ if arg.starts_with("--delimiter=") => {
                    options.delimiter = arg["--delimiter=".len()..].to_string();
                },
                _ if arg.starts_with('-') && arg.len() > 1 => return Err(OptionsError::UnknownOption(arg)),
                _ => options.inputs.push(arg),
            }
        }

        if options.delimiter.is_empty() {
            return Err(OptionsError::MissingValue("--delimiter"));
        }

        Ok(options)
    }
}

fn parse_count(count: String) -> Result<u32, OptionsError> {
    count.trim().parse().map_err(|_| OptionsError::InvalidCount(count))
}
