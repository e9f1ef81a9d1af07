use crate::serialization::{AdditionalData, Serializable, SerializationError};
use chrono::{DateTime, FixedOffset};

/// A sink for one structured document. Scalar writes take an `Option`, `None` is the "no value" marker
/// and the writer decides how to represent it.
pub trait SerializationWriter {
    fn write_string_value(&mut self, key: &str, value: Option<&str>) -> Result<(), SerializationError>;

    fn write_bool_value(&mut self, key: &str, value: Option<bool>) -> Result<(), SerializationError>;

    fn write_i32_value(&mut self, key: &str, value: Option<i32>) -> Result<(), SerializationError>;

    fn write_date_time_value(&mut self, key: &str, value: Option<&DateTime<FixedOffset>>) -> Result<(), SerializationError>;

    fn write_object_value(&mut self, key: &str, value: &dyn Serializable) -> Result<(), SerializationError>;

    fn write_collection_of_object_values(&mut self, key: &str, values: &[&dyn Serializable]) -> Result<(), SerializationError>;

    fn write_collection_of_string_values(&mut self, key: &str, values: &[String]) -> Result<(), SerializationError>;

    fn write_additional_data(&mut self, additional_data: &AdditionalData) -> Result<(), SerializationError>;
}
