use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    /// A checked dereference found the cursor at the end sentinel.
    pub fn end_of_sequence(operation: impl Into<String>) -> Error {
        Error(
            ErrorKind::EndOfSequence {
                operation: operation.into(),
            }
            .into(),
        )
    }

    pub fn out_of_bounds(offset: usize, len: usize) -> Error {
        Error(ErrorKind::OutOfBounds { offset, len }.into())
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("{operation}: cursor is at the end of the sequence")]
    EndOfSequence { operation: String },

    #[error("offset {offset} is out of bounds for a sequence of length {len}")]
    OutOfBounds { offset: usize, len: usize },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
