use crate::serialization::{AdditionalData, Serializable, SerializationError, SerializationWriter};
use chrono::{DateTime, FixedOffset};

#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    String(Option<String>),
    Bool(Option<bool>),
    I32(Option<i32>),
    DateTime(Option<DateTime<FixedOffset>>),
    Object(Vec<(String, Recorded)>),
    Objects(Vec<Vec<(String, Recorded)>>),
    Strings(Vec<String>),
    AdditionalData(Vec<String>),
}

/// Records every sink call in order. Optionally fails when asked to write `fail_on`.
#[derive(Debug, Default)]
pub struct RecordingWriter {
    calls: Vec<(String, Recorded)>,
    fail_on: Option<String>,
}

impl RecordingWriter {
    pub fn new() -> Self {
        RecordingWriter::default()
    }

    pub fn failing_on(key: &str) -> Self {
        RecordingWriter {
            calls: Vec::new(),
            fail_on: Some(key.to_string()),
        }
    }

    pub fn calls(&self) -> &[(String, Recorded)] {
        &self.calls
    }

    pub fn keys(&self) -> Vec<&str> {
        self.calls.iter().map(|(key, _)| key.as_str()).collect()
    }

    pub fn get(&self, key: &str) -> Option<&Recorded> {
        self.calls.iter().find(|(k, _)| k == key).map(|(_, recorded)| recorded)
    }

    fn record(&mut self, key: &str, recorded: Recorded) -> Result<(), SerializationError> {
        if self.fail_on.as_deref() == Some(key) {
            return Err(SerializationError::Sink(format!("refusing to write '{}'", key)));
        }
        self.calls.push((key.to_string(), recorded));
        Ok(())
    }

    fn nested(&mut self, value: &dyn Serializable) -> Result<Vec<(String, Recorded)>, SerializationError> {
        let mut nested = RecordingWriter {
            calls: Vec::new(),
            fail_on: self.fail_on.clone(),
        };
        value.serialize(&mut nested)?;
        Ok(nested.calls)
    }
}

impl SerializationWriter for RecordingWriter {
    fn write_string_value(&mut self, key: &str, value: Option<&str>) -> Result<(), SerializationError> {
        self.record(key, Recorded::String(value.map(str::to_string)))
    }

    fn write_bool_value(&mut self, key: &str, value: Option<bool>) -> Result<(), SerializationError> {
        self.record(key, Recorded::Bool(value))
    }

    fn write_i32_value(&mut self, key: &str, value: Option<i32>) -> Result<(), SerializationError> {
        self.record(key, Recorded::I32(value))
    }

    fn write_date_time_value(&mut self, key: &str, value: Option<&DateTime<FixedOffset>>) -> Result<(), SerializationError> {
        self.record(key, Recorded::DateTime(value.copied()))
    }

    fn write_object_value(&mut self, key: &str, value: &dyn Serializable) -> Result<(), SerializationError> {
        let nested = self.nested(value)?;
        self.record(key, Recorded::Object(nested))
    }

    fn write_collection_of_object_values(&mut self, key: &str, values: &[&dyn Serializable]) -> Result<(), SerializationError> {
        let mut objects = Vec::with_capacity(values.len());
        for value in values {
            objects.push(self.nested(*value)?);
        }
        self.record(key, Recorded::Objects(objects))
    }

    fn write_collection_of_string_values(&mut self, key: &str, values: &[String]) -> Result<(), SerializationError> {
        self.record(key, Recorded::Strings(values.to_vec()))
    }

    fn write_additional_data(&mut self, additional_data: &AdditionalData) -> Result<(), SerializationError> {
        self.record("<additionalData>", Recorded::AdditionalData(additional_data.keys().cloned().collect()))
    }
}
