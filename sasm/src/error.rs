use crate::parser::Rule;
use crate::tokens::MAX_WORD_BYTES;
use pest::error::Error as PestError;
use std::error::Error as StdError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum Error {
    /// A token longer than the word size limit.
    BadWord(String),
    /// A word in command position that is neither a mnemonic nor a
    /// directive.
    UnknownCommand(String),
    /// Label syntax error, redefinition, or an unresolvable label reference.
    BadLabel(String),
    /// Function syntax error, redefinition, or an unresolvable call target.
    BadFunction(String),
    /// Reservation syntax error, redefinition, zero size, or memory
    /// exhaustion.
    BadReserve(String),
    /// A push/pop operand that matches no addressing form, is out of range,
    /// or names an unknown reservation.
    BadArgument(String),
    Parse(PestError<Rule>),
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::BadWord(word) => write!(
                f,
                "Bad word (longer than {} bytes): \"{}\"",
                MAX_WORD_BYTES, word
            ),
            Error::UnknownCommand(word) => write!(f, "Unknown command: \"{}\"", word),
            Error::BadLabel(word) => write!(f, "Bad label: \"{}\"", word),
            Error::BadFunction(word) => write!(f, "Bad function: \"{}\"", word),
            Error::BadReserve(word) => write!(f, "Bad reserve: \"{}\"", word),
            Error::BadArgument(word) => write!(f, "Bad argument: \"{}\"", word),
            Error::Parse(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "System error: {}", err),
        }
    }
}

impl StdError for Error {}

impl From<PestError<Rule>> for Error {
    fn from(err: PestError<Rule>) -> Error {
        Error::Parse(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
