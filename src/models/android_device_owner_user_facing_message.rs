use crate::models::KeyValuePair;
use crate::serialization::{
    AdditionalData, DeserializationError, FieldDeserializers, ODATA_TYPE_KEY, Parsable, ParseNode, Serializable, SerializationError,
    SerializationWriter,
};

/// A message shown on the device, with optional per-locale translations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AndroidDeviceOwnerUserFacingMessage {
    additional_data: AdditionalData,
    default_message: Option<String>,
    /// Locale to message pairs, e.g. `en-US`.
    localized_messages: Option<Vec<KeyValuePair>>,
    odata_type: Option<String>,
}

impl AndroidDeviceOwnerUserFacingMessage {
    pub fn new() -> Self {
        AndroidDeviceOwnerUserFacingMessage::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, DeserializationError> {
        Ok(AndroidDeviceOwnerUserFacingMessage::new())
    }

    pub fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    pub fn default_message(&self) -> Option<&str> {
        self.default_message.as_deref()
    }

    pub fn localized_messages(&self) -> Option<&[KeyValuePair]> {
        self.localized_messages.as_deref()
    }

    pub fn odata_type(&self) -> Option<&str> {
        self.odata_type.as_deref()
    }

    pub fn set_additional_data(&mut self, value: AdditionalData) {
        self.additional_data = value;
    }

    pub fn set_default_message(&mut self, value: Option<String>) {
        self.default_message = value;
    }

    pub fn set_localized_messages(&mut self, value: Option<Vec<KeyValuePair>>) {
        self.localized_messages = value;
    }

    pub fn set_odata_type(&mut self, value: Option<String>) {
        self.odata_type = value;
    }
}

impl Parsable for AndroidDeviceOwnerUserFacingMessage {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res: FieldDeserializers<Self> = FieldDeserializers::new();
        res.insert("defaultMessage", |m, n| {
            if let Some(value) = n.string_value()? {
                m.set_default_message(Some(value));
            }
            Ok(())
        });
        res.insert("localizedMessages", |m, n| {
            if let Some(value) = n.collection_of_object_values(KeyValuePair::create_from_discriminator_value)? {
                m.set_localized_messages(Some(value));
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

impl Serializable for AndroidDeviceOwnerUserFacingMessage {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        writer.write_string_value("defaultMessage", self.default_message())?;
        if let Some(values) = &self.localized_messages {
            let values: Vec<&dyn Serializable> = values.iter().map(|value| value as &dyn Serializable).collect();
            writer.write_collection_of_object_values("localizedMessages", &values)?;
        }
        writer.write_string_value(ODATA_TYPE_KEY, self.odata_type())?;
        writer.write_additional_data(&self.additional_data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::{Number, UntypedValue};
    use crate::serialization::json::JsonParseNode;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn decodes_two_localized_messages_in_order() -> Result<(), DeserializationError> {
        let json = json!({
            "defaultMessage": "Contact IT",
            "localizedMessages": [
                { "name": "nl-NL", "value": "Neem contact op met IT" },
                { "name": "de-DE", "value": "IT kontaktieren", "priority": 2 }
            ]
        });
        let mut message = AndroidDeviceOwnerUserFacingMessage::new();
        message.deserialize_fields(&JsonParseNode::new(&json))?;

        let localized = message.localized_messages().expect("localized messages");
        assert_eq!(localized.len(), 2);
        assert_eq!(localized[0].name(), Some("nl-NL"));
        assert_eq!(localized[1].name(), Some("de-DE"));
        assert_eq!(localized[1].additional_data().get("priority"), Some(&UntypedValue::Number(Number::PositiveInt(2))));
        Ok(())
    }

    #[test]
    fn localized_messages_must_be_an_array() {
        let json = json!({ "localizedMessages": "nl-NL" });
        let mut message = AndroidDeviceOwnerUserFacingMessage::new();
        let result = message.deserialize_fields(&JsonParseNode::new(&json));

        assert!(matches!(result, Err(DeserializationError::UnexpectedType { expected: "array", found: "string" })));
    }
}
