use std::convert::From;
use std::error;
use std::fmt;
use std::io;
use std::num::ParseIntError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: Option<String>,
}

#[derive(Debug)]
pub enum ErrorKind {
    OutOfSupportedRange,
    InvalidCalendarDate,
    MalformedNumericInput,
    UnknownMonth,
    UnknownCommand,
    ConfigParse,
    Presentation,
    IOError(io::Error),
}

impl Error {
    pub fn new(kind: ErrorKind, msg: &str) -> Self {
        Error {
            kind,
            message: Some(msg.to_owned()),
        }
    }

    pub fn with_msg(mut self, message: &str) -> Self {
        self.message = Some(message.to_owned());
        self
    }

    /// Short headline shown in front of the message, e.g. "Out of Range".
    pub fn title(&self) -> &'static str {
        match self.kind {
            ErrorKind::OutOfSupportedRange => "Out of Range",
            ErrorKind::InvalidCalendarDate => "Invalid Date",
            ErrorKind::MalformedNumericInput => "Invalid Input",
            ErrorKind::UnknownMonth => "Invalid Month",
            ErrorKind::UnknownCommand => "Unknown Command",
            ErrorKind::ConfigParse => "Configuration",
            ErrorKind::Presentation | ErrorKind::IOError(_) => "Error",
        }
    }

    /// The text to present to the user, falling back to the kind description.
    pub fn user_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| self.kind.as_str())
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            kind,
            message: None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(io_error: io::Error) -> Error {
        Error::from(ErrorKind::IOError(io_error))
    }
}

impl From<ParseIntError> for Error {
    fn from(parse_error: ParseIntError) -> Error {
        Error::new(
            ErrorKind::MalformedNumericInput,
            &format!("invalid number: {}", parse_error),
        )
    }
}

impl From<toml::de::Error> for Error {
    fn from(toml_error: toml::de::Error) -> Error {
        Error::new(ErrorKind::ConfigParse, &toml_error.to_string())
    }
}

impl<E: std::fmt::Debug> From<nom::Err<E>> for Error {
    fn from(error: nom::Err<E>) -> Self {
        Error::new(
            ErrorKind::UnknownCommand,
            &format!("Error while parsing: {:?}", error),
        )
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        if let ErrorKind::IOError(err) = err.kind {
            err
        } else {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                err.message.unwrap_or_else(|| "invalid input".to_owned()),
            )
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{}: {}", self.kind.as_str(), msg),
            None => write!(f, "{}", self.kind.as_str()),
        }
    }
}

impl error::Error for Error {}

impl ErrorKind {
    pub fn as_str(&self) -> String {
        match self {
            ErrorKind::OutOfSupportedRange => "year out of supported range".to_owned(),
            ErrorKind::InvalidCalendarDate => "invalid calendar date".to_owned(),
            ErrorKind::MalformedNumericInput => "malformed numeric input".to_owned(),
            ErrorKind::UnknownMonth => "unknown month".to_owned(),
            ErrorKind::UnknownCommand => "unknown command".to_owned(),
            ErrorKind::ConfigParse => "invalid configuration".to_owned(),
            ErrorKind::Presentation => "presentation failure".to_owned(),
            ErrorKind::IOError(err) => err.to_string(),
        }
    }
}
