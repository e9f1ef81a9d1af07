use crate::serialization::{
    AdditionalData, DeserializationError, FieldDeserializers, ODATA_TYPE_KEY, Parsable, ParseNode, Serializable, SerializationError,
    SerializationWriter,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyValuePair {
    additional_data: AdditionalData,
    name: Option<String>,
    odata_type: Option<String>,
    value: Option<String>,
}

impl KeyValuePair {
    pub fn new() -> Self {
        KeyValuePair::default()
    }

    pub fn from_pair(name: &str, value: &str) -> Self {
        KeyValuePair {
            name: Some(name.to_string()),
            value: Some(value.to_string()),
            ..KeyValuePair::default()
        }
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, DeserializationError> {
        Ok(KeyValuePair::new())
    }

    pub fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_additional_data(&mut self, value: AdditionalData) {
        self.additional_data = value;
    }

    pub fn set_name(&mut self, value: Option<String>) {
        self.name = value;
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }
}

impl Parsable for KeyValuePair {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res: FieldDeserializers<Self> = FieldDeserializers::new();
        res.insert("name", |m, n| {
            if let Some(value) = n.string_value()? {
                m.set_name(Some(value));
            }
            Ok(())
        });
        res.insert(ODATA_TYPE_KEY, |m, n| {
            if let Some(value) = n.string_value()? {
                m.set_odata_type(Some(value));
            }
            Ok(())
        });
        res.insert("value", |m, n| {
            if let Some(value) = n.string_value()? {
                m.set_value(Some(value));
            }
            Ok(())
        });
        res
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        Some(&mut self.additional_data)
    }
}

impl Serializable for KeyValuePair {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_string_value("name", self.name())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type())?;
        writer.write_string_value("value", self.value())?;
        writer.write_additional_data(&self.additional_data)?;
        Ok(())
    }
}
