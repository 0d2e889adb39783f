use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Required {
        field: &'static str,
        expected: &'static str,
    },
    NotPositive {
        field: &'static str,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { field, expected } => {
                write!(f, "{field} is required, it must be {expected}")
            }
            Self::NotPositive { field } => write!(f, "{field} must be greater than zero"),
        }
    }
}

impl std::error::Error for ValidationError {}
