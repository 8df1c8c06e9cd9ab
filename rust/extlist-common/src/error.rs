use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

pub type StdErrorBoxed = Box<dyn std::error::Error + Send + Sync + 'static>;

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

    pub fn key_not_found(key: impl Into<String>) -> Error {
        Error(ErrorKind::KeyNotFound { key: key.into() }.into())
    }

    pub fn index_out_of_bounds(index: usize, len: usize) -> Error {
        Error(ErrorKind::IndexOutOfBounds { index, len }.into())
    }

    pub fn unknown_field(name: impl Into<String>, type_name: &'static str) -> Error {
        Error(
            ErrorKind::UnknownField {
                name: name.into(),
                type_name,
            }
            .into(),
        )
    }

    pub fn empty_list() -> Error {
        Error(ErrorKind::EmptyList.into())
    }

    pub fn construct<E>(source: E) -> Error
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error(
            ErrorKind::Construct {
                source: Box::new(source),
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("key '{key}' not found in element")]
    KeyNotFound { key: String },

    #[error("index {index} out of bounds for element of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("no field named '{name}' on '{type_name}'")]
    UnknownField {
        name: String,
        type_name: &'static str,
    },

    #[error("list is empty")]
    EmptyList,

    #[error("failed to construct instance from record: {source}")]
    Construct { source: StdErrorBoxed },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
