use thiserror::Error;

/// Which of the two inputs failed to resolve to a type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnrecognizedInput {
    First(String),
    Second(String),
    Both(String, String),
}

impl std::fmt::Display for UnrecognizedInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnrecognizedInput::First(s) => write!(f, "first type {:?}", s),
            UnrecognizedInput::Second(s) => write!(f, "second type {:?}", s),
            UnrecognizedInput::Both(a, b) => write!(f, "both types {:?} and {:?}", a, b),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("Two string arguments expected: {0}")]
    InvalidArgument(String),

    #[error("Invalid Pokemon type ({0}). Valid types are: Fire, Water, Grass")]
    UnrecognizedType(UnrecognizedInput),
}

impl MatchError {
    /// Stable name of the error kind, used on the wire
    pub fn kind(&self) -> &'static str {
        match self {
            MatchError::InvalidArgument(_) => "InvalidArgument",
            MatchError::UnrecognizedType(_) => "UnrecognizedType",
        }
    }
}
