use std::fmt;

/// A count parsed from one input file.
///
/// A file's count column is integer unless any raw value in it contains a
/// decimal point, in which case the whole column is floating point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
}

impl Value {
    /// Rounds to the nearest integer, halves away from zero.
    pub fn round(self) -> Self {
        match self {
            Self::Integer(_) => self,
            Self::Float(n) => Self::Integer(n.round() as i64),
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Float(n) => n,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
        }
    }
}
