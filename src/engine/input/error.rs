use thiserror::Error;

/// Errors raised by the input binding layer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown input action: {0}")]
    UnknownAction(String),

    #[error("unknown input axis: {0}")]
    UnknownAxis(String),

    #[error("no action or axis named {0}")]
    UnknownBinding(String),
}
