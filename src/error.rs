use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The net cannot be split into six equal square faces.
    #[error("malformed net: {0}")]
    MalformedNet(String),
    /// The net is well-formed but does not fold into a consistent cube.
    #[error("net does not fold into a cube: {0}")]
    Folding(String),
    #[error("bad instruction syntax: {0}")]
    InstructionSyntax(String),
}

pub type Result<T> = std::result::Result<T, Error>;
