use crate::serialization::DeserializationError;
use std::collections::HashMap;
use std::fmt::Debug;

/// A closed set of values with a canonical wire string each. The ordinal of a value is its index into
/// `VALUES`, so encoding and decoding share one ordering. Implemented with `#[derive(WireEnum)]`.
pub trait EnumCodec: Copy + Eq + Debug + Sized + 'static {
    const NAME: &'static str;
    const VALUES: &'static [&'static str];
    const VARIANTS: &'static [Self];

    fn index(self) -> usize;

    /// Reverse lookup from wire string to value, built on first use and never mutated afterwards.
    fn lookup() -> &'static HashMap<&'static str, Self>;

    fn encode(self) -> &'static str {
        Self::VALUES[self.index()]
    }

    /// Exact match only, no trimming or case folding.
    fn decode(value: &str) -> Result<Self, DeserializationError> {
        Self::lookup().get(value).copied().ok_or_else(|| DeserializationError::UnknownEnumValue {
            enum_name: Self::NAME,
            value: value.to_owned(),
        })
    }

    fn encode_list(values: &[Self]) -> Vec<String> {
        values.iter().map(|value| value.encode().to_owned()).collect()
    }
}
