use crate::serialization::{AdditionalData, Serializable, SerializationError, SerializationWriter};
use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct SerializationSettings {
    #[serde(default)]
    omit_null_values: bool,
    #[serde(default)]
    pretty: bool,
}

impl SerializationSettings {
    pub fn new(omit_null_values: bool, pretty: bool) -> Self {
        SerializationSettings { omit_null_values, pretty }
    }

    /// Leave unset scalars out of the document instead of writing them as `null`.
    pub fn omit_null_values(&self) -> bool {
        self.omit_null_values
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }
}

/// Builds a JSON object in write order.
#[derive(Debug)]
pub struct JsonSerializationWriter {
    settings: SerializationSettings,
    objects: Vec<Map<String, Value>>,
}

impl JsonSerializationWriter {
    pub fn new(settings: SerializationSettings) -> Self {
        JsonSerializationWriter {
            settings,
            objects: vec![Map::new()],
        }
    }

    pub fn into_value(mut self) -> Result<Value, SerializationError> {
        match (self.objects.pop(), self.objects.is_empty()) {
            (Some(root), true) => Ok(Value::Object(root)),
            _ => Err(SerializationError::UnbalancedObject("<root>".to_string())),
        }
    }

    pub fn into_string(self) -> Result<String, SerializationError> {
        let pretty = self.settings.pretty;
        let value = self.into_value()?;
        let content = if pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(content)
    }

    fn write_value(&mut self, key: &str, value: Value) -> Result<(), SerializationError> {
        let current = self
            .objects
            .last_mut()
            .ok_or_else(|| SerializationError::UnbalancedObject(key.to_string()))?;
        current.insert(key.to_string(), value);
        Ok(())
    }

    fn write_optional(&mut self, key: &str, value: Option<Value>) -> Result<(), SerializationError> {
        match value {
            Some(value) => self.write_value(key, value),
            None if self.settings.omit_null_values => Ok(()),
            None => self.write_value(key, Value::Null),
        }
    }

    fn nested_object(&mut self, value: &dyn Serializable) -> Result<Value, SerializationError> {
        self.objects.push(Map::new());
        let result = value.serialize(self);
        let object = self
            .objects
            .pop()
            .ok_or_else(|| SerializationError::UnbalancedObject("<nested>".to_string()))?;
        result.map(|_| Value::Object(object))
    }
}

impl SerializationWriter for JsonSerializationWriter {
    fn write_string_value(&mut self, key: &str, value: Option<&str>) -> Result<(), SerializationError> {
        self.write_optional(key, value.map(|value| Value::String(value.to_string())))
    }

    fn write_bool_value(&mut self, key: &str, value: Option<bool>) -> Result<(), SerializationError> {
        self.write_optional(key, value.map(Value::Bool))
    }

    fn write_i32_value(&mut self, key: &str, value: Option<i32>) -> Result<(), SerializationError> {
        self.write_optional(key, value.map(Value::from))
    }

    fn write_date_time_value(&mut self, key: &str, value: Option<&DateTime<FixedOffset>>) -> Result<(), SerializationError> {
        self.write_optional(key, value.map(|value| Value::String(value.to_rfc3339_opts(SecondsFormat::AutoSi, true))))
    }

    fn write_object_value(&mut self, key: &str, value: &dyn Serializable) -> Result<(), SerializationError> {
        let object = self.nested_object(value)?;
        self.write_value(key, object)
    }

    fn write_collection_of_object_values(&mut self, key: &str, values: &[&dyn Serializable]) -> Result<(), SerializationError> {
        let mut array = Vec::with_capacity(values.len());
        for value in values {
            array.push(self.nested_object(*value)?);
        }
        self.write_value(key, Value::Array(array))
    }

    fn write_collection_of_string_values(&mut self, key: &str, values: &[String]) -> Result<(), SerializationError> {
        self.write_value(key, Value::Array(values.iter().cloned().map(Value::String).collect()))
    }

    fn write_additional_data(&mut self, additional_data: &AdditionalData) -> Result<(), SerializationError> {
        for (key, value) in additional_data {
            self.write_value(key, Value::try_from(value)?)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::{Number, UntypedValue};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    struct Point {
        x: Option<i32>,
        label: Option<String>,
    }

    impl Serializable for Point {
        fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
            writer.write_i32_value("x", self.x)?;
            writer.write_string_value("label", self.label.as_deref())?;
            Ok(())
        }
    }

    #[test]
    fn writes_null_for_unset_scalars_by_default() -> Result<(), SerializationError> {
        let mut writer = JsonSerializationWriter::new(SerializationSettings::default());
        writer.write_object_value("point", &Point { x: Some(3), label: None })?;

        assert_eq!(writer.into_value()?, json!({ "point": { "x": 3, "label": null } }));
        Ok(())
    }

    #[test]
    fn omits_unset_scalars_when_configured() -> Result<(), SerializationError> {
        let mut writer = JsonSerializationWriter::new(SerializationSettings::new(true, false));
        writer.write_string_value("name", None)?;
        writer.write_bool_value("enabled", Some(false))?;

        assert_eq!(writer.into_string()?, r#"{"enabled":false}"#);
        Ok(())
    }

    #[test]
    fn keeps_write_order() -> Result<(), SerializationError> {
        let mut writer = JsonSerializationWriter::new(SerializationSettings::default());
        writer.write_i32_value("b", Some(1))?;
        writer.write_i32_value("a", Some(2))?;
        let first = Point { x: Some(1), label: Some("one".to_string()) };
        let second = Point { x: Some(2), label: None };
        writer.write_collection_of_object_values("points", &[&first, &second])?;

        assert_eq!(
            writer.into_string()?,
            r#"{"b":1,"a":2,"points":[{"x":1,"label":"one"},{"x":2,"label":null}]}"#
        );
        Ok(())
    }

    #[test]
    fn writes_utc_date_times_with_z() -> Result<(), SerializationError> {
        let value = DateTime::parse_from_rfc3339("2024-03-01T08:30:00+00:00").expect("valid date time");
        let mut writer = JsonSerializationWriter::new(SerializationSettings::default());
        writer.write_date_time_value("at", Some(&value))?;

        assert_eq!(writer.into_value()?, json!({ "at": "2024-03-01T08:30:00Z" }));
        Ok(())
    }

    #[test]
    fn fails_on_non_finite_additional_data() {
        let mut additional_data = AdditionalData::new();
        additional_data.insert("ratio".to_string(), UntypedValue::Number(Number::Float(f64::NAN)));

        let mut writer = JsonSerializationWriter::new(SerializationSettings::default());
        let result = writer.write_additional_data(&additional_data);

        assert!(matches!(result, Err(SerializationError::NonFiniteNumber(_))));
    }
}
