use std::fmt::Display;

pub type Result<T> = std::result::Result<T, TreeError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    InvalidOrder { requested: usize, minimum: usize },
    OrderTooLarge { requested: usize },
    Unsupported(&'static str),
}

impl Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOrder { requested, minimum } => write!(
                f,
                "Invalid tree order {requested}: the order must be at least {minimum}"
            ),
            Self::OrderTooLarge { requested } => write!(
                f,
                "Invalid tree order {requested}: cannot be rounded up to an even order"
            ),
            Self::Unsupported(op) => write!(f, "Operation not supported: {op}"),
        }
    }
}

impl std::error::Error for TreeError {}
