use crate::serialization::{
    AdditionalData, DeserializationError, FieldDeserializers, ODATA_TYPE_KEY, Parsable, ParseNode, Serializable, SerializationError,
    SerializationWriter,
};

/// The root of every entity type: an identifier, the type tag and whatever the model does not declare.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entity {
    id: Option<String>,
    odata_type: Option<String>,
    additional_data: AdditionalData,
}

impl Entity {
    pub fn new() -> Self {
        Entity::default()
    }

    /// An entity pre-stamped with the type tag of a concrete variant.
    pub fn with_odata_type(odata_type: &str) -> Self {
        Entity {
            odata_type: Some(odata_type.to_string()),
            ..Entity::default()
        }
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, DeserializationError> {
        Ok(Entity::new())
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    pub fn set_id(&mut self, value: Option<String>) {
        self.id = value;
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }

    pub fn set_additional_data(&mut self, value: AdditionalData) {
        self.additional_data = value;
    }
}

impl Parsable for Entity {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res: FieldDeserializers<Self> = FieldDeserializers::new();
        res.insert("id", |m, n| {
            if let Some(value) = n.string_value()? {
                m.set_id(Some(value));
            }
            Ok(())
        });
        res.insert(ODATA_TYPE_KEY, |m, n| {
            if let Some(value) = n.string_value()? {
                m.set_odata_type(Some(value));
            }
            Ok(())
        });
        res
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        Some(&mut self.additional_data)
    }
}

impl Serializable for Entity {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_string_value("id", self.id())?;
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type())?;
        writer.write_additional_data(&self.additional_data)?;
        Ok(())
    }
}
