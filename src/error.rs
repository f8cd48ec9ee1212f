use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("underflow: structure is empty")]
    Underflow,

    #[error("index {index} out of range for {len} elements")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("edge weight {weight} is not finite")]
    InvalidWeight { weight: f64 },

    #[error("{len} elements exceed the limit of {max}")]
    CapacityExceeded { len: usize, max: usize },

    #[error("vertex {vertex} is not an endpoint of the edge")]
    NotAnEndpoint { vertex: u32 },

    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

pub type Result<T> = std::result::Result<T, Error>;
