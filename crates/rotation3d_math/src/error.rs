use std::fmt::{Display, Formatter};

pub type Result<T> = std::result::Result<T, QuaternionError>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuaternionError {
    /// A quaternion declared as unit does not have a norm of 1.
    NotUnit { norm: f64 },
}

impl Display for QuaternionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            QuaternionError::NotUnit { norm } => {
                write!(f, "invalid unit quaternion: norm is {norm}")
            }
        }
    }
}

impl std::error::Error for QuaternionError {}
