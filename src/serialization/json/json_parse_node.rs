use crate::serialization::{DeserializationError, ParseNode, UntypedValue};
use chrono::{DateTime, FixedOffset};
use serde_json::Value;

/// Reads a borrowed `serde_json::Value`.
#[derive(Debug, Clone, Copy)]
pub struct JsonParseNode<'a> {
    value: &'a Value,
}

impl<'a> JsonParseNode<'a> {
    pub fn new(value: &'a Value) -> Self {
        JsonParseNode { value }
    }

    fn unexpected(&self, expected: &'static str) -> DeserializationError {
        DeserializationError::UnexpectedType {
            expected,
            found: kind_of(self.value),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl ParseNode for JsonParseNode<'_> {
    fn is_null(&self) -> bool {
        self.value.is_null()
    }

    fn child_node(&self, key: &str) -> Option<Box<dyn ParseNode + '_>> {
        self.value
            .get(key)
            .map(|value| Box::new(JsonParseNode::new(value)) as Box<dyn ParseNode + '_>)
    }

    fn fields(&self) -> Result<Vec<(String, Box<dyn ParseNode + '_>)>, DeserializationError> {
        match self.value {
            Value::Object(map) => Ok(map
                .iter()
                .map(|(key, value)| (key.clone(), Box::new(JsonParseNode::new(value)) as Box<dyn ParseNode + '_>))
                .collect()),
            _ => Err(self.unexpected("object")),
        }
    }

    fn elements(&self) -> Result<Option<Vec<Box<dyn ParseNode + '_>>>, DeserializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Array(values) => Ok(Some(
                values
                    .iter()
                    .map(|value| Box::new(JsonParseNode::new(value)) as Box<dyn ParseNode + '_>)
                    .collect(),
            )),
            _ => Err(self.unexpected("array")),
        }
    }

    fn string_value(&self) -> Result<Option<String>, DeserializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::String(value) => Ok(Some(value.clone())),
            _ => Err(self.unexpected("string")),
        }
    }

    fn bool_value(&self) -> Result<Option<bool>, DeserializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Bool(value) => Ok(Some(*value)),
            _ => Err(self.unexpected("boolean")),
        }
    }

    fn i32_value(&self) -> Result<Option<i32>, DeserializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(number) => {
                let value = number.as_i64().ok_or_else(|| self.unexpected("integer"))?;
                i32::try_from(value).map(Some).map_err(|_| DeserializationError::IntegerOutOfRange(value))
            }
            _ => Err(self.unexpected("integer")),
        }
    }

    fn date_time_value(&self) -> Result<Option<DateTime<FixedOffset>>, DeserializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::String(value) => DateTime::parse_from_rfc3339(value)
                .map(Some)
                .map_err(|source| DeserializationError::InvalidDateTime {
                    value: value.clone(),
                    source,
                }),
            _ => Err(self.unexpected("date time string")),
        }
    }

    fn untyped_value(&self) -> Result<UntypedValue, DeserializationError> {
        Ok(UntypedValue::from(self.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(5), Some(5))]
    #[case(json!(-2147483648), Some(i32::MIN))]
    #[case(json!(null), None)]
    fn reads_i32_values(#[case] json: Value, #[case] expected: Option<i32>) -> Result<(), DeserializationError> {
        assert_eq!(JsonParseNode::new(&json).i32_value()?, expected);
        Ok(())
    }

    #[rstest]
    #[case(json!(2147483648_i64))]
    #[case(json!(1.5))]
    #[case(json!("5"))]
    fn rejects_values_that_are_not_32_bit_integers(#[case] json: Value) {
        assert!(JsonParseNode::new(&json).i32_value().is_err());
    }

    #[test]
    fn reports_the_type_it_found() {
        let json = json!(true);
        let result = JsonParseNode::new(&json).string_value();
        assert!(matches!(
            result,
            Err(DeserializationError::UnexpectedType {
                expected: "string",
                found: "boolean"
            })
        ));
    }

    #[test]
    fn reads_rfc3339_date_times() -> Result<(), DeserializationError> {
        let json = json!("2024-03-01T08:30:00+02:00");
        let value = JsonParseNode::new(&json).date_time_value()?.expect("a date time");
        assert_eq!(value.to_rfc3339(), "2024-03-01T08:30:00+02:00");

        let json = json!("yesterday");
        assert!(matches!(
            JsonParseNode::new(&json).date_time_value(),
            Err(DeserializationError::InvalidDateTime { .. })
        ));
        Ok(())
    }

    #[test]
    fn fields_come_in_document_order() -> Result<(), DeserializationError> {
        let json = json!({ "zeta": 1, "alpha": 2, "mid": 3 });
        let keys: Vec<String> = JsonParseNode::new(&json).fields()?.into_iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        Ok(())
    }

    #[test]
    fn skips_null_elements_in_string_collections() -> Result<(), DeserializationError> {
        let json = json!(["a", null, "b"]);
        let node = JsonParseNode::new(&json);
        let values = (&node as &dyn ParseNode).collection_of_string_values()?;
        assert_eq!(values, Some(vec!["a".to_string(), "b".to_string()]));
        Ok(())
    }

    #[test]
    fn child_node_is_absent_for_missing_keys() {
        let json = json!({ "present": null });
        let node = JsonParseNode::new(&json);
        assert!(node.child_node("present").is_some_and(|child| child.is_null()));
        assert!(node.child_node("missing").is_none());
    }
}
