use crate::serialization::SerializationError;
use std::cmp::Ordering;
use std::fmt::Display;

/// A number as it appeared on the wire. Integers keep their exact value, everything else is a float.
#[derive(Clone, Debug)]
pub enum Number {
    PositiveInt(u64),
    NegativeInt(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::PositiveInt(n) => *n as f64,
            Number::NegativeInt(n) => *n as f64,
            Number::Float(n) => *n,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::PositiveInt(n) => i64::try_from(*n).ok(),
            Number::NegativeInt(n) => Some(*n),
            Number::Float(_) => None,
        }
    }
}

impl From<&serde_json::Number> for Number {
    fn from(value: &serde_json::Number) -> Self {
        if let Some(n) = value.as_u64() {
            Number::PositiveInt(n)
        } else if let Some(n) = value.as_i64() {
            Number::NegativeInt(n)
        } else {
            // serde_json numbers are always representable as f64 without arbitrary_precision
            Number::Float(value.as_f64().unwrap_or(f64::NAN))
        }
    }
}

impl TryFrom<&Number> for serde_json::Number {
    type Error = SerializationError;

    fn try_from(value: &Number) -> Result<Self, Self::Error> {
        match value {
            Number::PositiveInt(n) => Ok(serde_json::Number::from(*n)),
            Number::NegativeInt(n) => Ok(serde_json::Number::from(*n)),
            Number::Float(n) => serde_json::Number::from_f64(*n).ok_or(SerializationError::NonFiniteNumber(*n)),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            // Integer vs Integer
            (Number::PositiveInt(a), Number::PositiveInt(b)) => a.partial_cmp(b),
            (Number::NegativeInt(a), Number::NegativeInt(b)) => a.partial_cmp(b),
            (Number::PositiveInt(a), Number::NegativeInt(b)) => (*a as i128).partial_cmp(&(*b as i128)),
            (Number::NegativeInt(a), Number::PositiveInt(b)) => (*a as i128).partial_cmp(&(*b as i128)),
            // Float vs Anything
            (Number::Float(a), Number::Float(b)) => a.partial_cmp(b),
            (Number::Float(a), b) => a.partial_cmp(&b.as_f64()),
            (a, Number::Float(b)) => a.as_f64().partial_cmp(b),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::PositiveInt(n) => write!(f, "{}", n),
            Number::NegativeInt(n) => write!(f, "{}", n),
            Number::Float(n) => write!(f, "{}", n),
        }
    }
}
