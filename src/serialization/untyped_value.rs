use crate::serialization::{Number, SerializationError};
use std::collections::BTreeMap;

/// Properties found on the wire that the model does not declare, kept verbatim for re-serialization.
pub type AdditionalData = BTreeMap<String, UntypedValue>;

#[derive(Clone, Debug, PartialEq)]
pub enum UntypedValue {
    Null,
    Boolean(bool),
    Number(Number),
    String(String),
    Array(Vec<UntypedValue>),
    Object(BTreeMap<String, UntypedValue>),
}

impl From<&serde_json::Value> for UntypedValue {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => UntypedValue::Null,
            serde_json::Value::Bool(value) => UntypedValue::Boolean(*value),
            serde_json::Value::Number(value) => UntypedValue::Number(value.into()),
            serde_json::Value::String(value) => UntypedValue::String(value.clone()),
            serde_json::Value::Array(values) => UntypedValue::Array(values.iter().map(UntypedValue::from).collect()),
            serde_json::Value::Object(map) => UntypedValue::Object(map.iter().map(|(k, v)| (k.clone(), v.into())).collect()),
        }
    }
}

impl TryFrom<&UntypedValue> for serde_json::Value {
    type Error = SerializationError;

    fn try_from(value: &UntypedValue) -> Result<Self, Self::Error> {
        Ok(match value {
            UntypedValue::Null => serde_json::Value::Null,
            UntypedValue::Boolean(value) => serde_json::Value::Bool(*value),
            UntypedValue::Number(value) => serde_json::Value::Number(value.try_into()?),
            UntypedValue::String(value) => serde_json::Value::String(value.clone()),
            UntypedValue::Array(values) => serde_json::Value::Array(values.iter().map(serde_json::Value::try_from).collect::<Result<_, _>>()?),
            UntypedValue::Object(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| Ok((k.clone(), serde_json::Value::try_from(v)?)))
                    .collect::<Result<_, SerializationError>>()?,
            ),
        })
    }
}
