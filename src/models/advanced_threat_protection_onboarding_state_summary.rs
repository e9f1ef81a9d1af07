use crate::models::{AdvancedThreatProtectionOnboardingDeviceSettingState, Entity};
use crate::serialization::{
    AdditionalData, DeserializationError, FieldDeserializers, Parsable, ParseNode, Serializable, SerializationError, SerializationWriter,
};

/// Onboarding summary for threat protection across the managed devices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdvancedThreatProtectionOnboardingStateSummary {
    entity: Entity,
    advanced_threat_protection_onboarding_device_setting_states: Option<Vec<AdvancedThreatProtectionOnboardingDeviceSettingState>>,
    compliant_device_count: Option<i32>,
    conflict_device_count: Option<i32>,
    error_device_count: Option<i32>,
    non_compliant_device_count: Option<i32>,
    not_applicable_device_count: Option<i32>,
    not_assigned_device_count: Option<i32>,
    remediated_device_count: Option<i32>,
    unknown_device_count: Option<i32>,
}

impl AdvancedThreatProtectionOnboardingStateSummary {
    pub fn new() -> Self {
        AdvancedThreatProtectionOnboardingStateSummary::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, DeserializationError> {
        Ok(AdvancedThreatProtectionOnboardingStateSummary::new())
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    pub fn advanced_threat_protection_onboarding_device_setting_states(&self) -> Option<&[AdvancedThreatProtectionOnboardingDeviceSettingState]> {
        self.advanced_threat_protection_onboarding_device_setting_states.as_deref()
    }

    pub fn compliant_device_count(&self) -> Option<i32> {
        self.compliant_device_count
    }

    pub fn conflict_device_count(&self) -> Option<i32> {
        self.conflict_device_count
    }

    pub fn error_device_count(&self) -> Option<i32> {
        self.error_device_count
    }

    pub fn non_compliant_device_count(&self) -> Option<i32> {
        self.non_compliant_device_count
    }

    pub fn not_applicable_device_count(&self) -> Option<i32> {
        self.not_applicable_device_count
    }

    pub fn not_assigned_device_count(&self) -> Option<i32> {
        self.not_assigned_device_count
    }

    pub fn remediated_device_count(&self) -> Option<i32> {
        self.remediated_device_count
    }

    pub fn unknown_device_count(&self) -> Option<i32> {
        self.unknown_device_count
    }

    pub fn set_advanced_threat_protection_onboarding_device_setting_states(&mut self, value: Option<Vec<AdvancedThreatProtectionOnboardingDeviceSettingState>>) {
        self.advanced_threat_protection_onboarding_device_setting_states = value;
    }

    pub fn set_compliant_device_count(&mut self, value: Option<i32>) {
        self.compliant_device_count = value;
    }

    pub fn set_conflict_device_count(&mut self, value: Option<i32>) {
        self.conflict_device_count = value;
    }

    pub fn set_error_device_count(&mut self, value: Option<i32>) {
        self.error_device_count = value;
    }

    pub fn set_non_compliant_device_count(&mut self, value: Option<i32>) {
        self.non_compliant_device_count = value;
    }

    pub fn set_not_applicable_device_count(&mut self, value: Option<i32>) {
        self.not_applicable_device_count = value;
    }

    pub fn set_not_assigned_device_count(&mut self, value: Option<i32>) {
        self.not_assigned_device_count = value;
    }

    pub fn set_remediated_device_count(&mut self, value: Option<i32>) {
        self.remediated_device_count = value;
    }

    pub fn set_unknown_device_count(&mut self, value: Option<i32>) {
        self.unknown_device_count = value;
    }
}

impl Parsable for AdvancedThreatProtectionOnboardingStateSummary {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = Entity::field_deserializers().lift(Self::entity_mut);
        res.insert("advancedThreatProtectionOnboardingDeviceSettingStates", |m, n| {
            if let Some(value) = n.collection_of_object_values(AdvancedThreatProtectionOnboardingDeviceSettingState::create_from_discriminator_value)? {
                m.set_advanced_threat_protection_onboarding_device_setting_states(Some(value));
            }
            Ok(())
        });
        res.insert("compliantDeviceCount", |m, n| {
            if let Some(value) = n.i32_value()? {
                m.set_compliant_device_count(Some(value));
            }
            Ok(())
        });
        res.insert("conflictDeviceCount", |m, n| {
            if let Some(value) = n.i32_value()? {
                m.set_conflict_device_count(Some(value));
            }
            Ok(())
        });
        res.insert("errorDeviceCount", |m, n| {
            if let Some(value) = n.i32_value()? {
                m.set_error_device_count(Some(value));
            }
            Ok(())
        });
        res.insert("nonCompliantDeviceCount", |m, n| {
            if let Some(value) = n.i32_value()? {
                m.set_non_compliant_device_count(Some(value));
            }
            Ok(())
        });
        res.insert("notApplicableDeviceCount", |m, n| {
            if let Some(value) = n.i32_value()? {
                m.set_not_applicable_device_count(Some(value));
            }
            Ok(())
        });
        res.insert("notAssignedDeviceCount", |m, n| {
            if let Some(value) = n.i32_value()? {
                m.set_not_assigned_device_count(Some(value));
            }
            Ok(())
        });
        res.insert("remediatedDeviceCount", |m, n| {
            if let Some(value) = n.i32_value()? {
                m.set_remediated_device_count(Some(value));
            }
            Ok(())
        });
        res.insert("unknownDeviceCount", |m, n| {
            if let Some(value) = n.i32_value()? {
                m.set_unknown_device_count(Some(value));
            }
            Ok(())
        });
        res
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        self.entity.additional_data_mut()
    }
}

impl Serializable for AdvancedThreatProtectionOnboardingStateSummary {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.entity.serialize(writer)?;
        if let Some(values) = &self.advanced_threat_protection_onboarding_device_setting_states {
            let values: Vec<&dyn Serializable> = values.iter().map(|value| value as &dyn Serializable).collect();
            writer.write_collection_of_object_values("advancedThreatProtectionOnboardingDeviceSettingStates", &values)?;
        }
        writer.write_i32_value("compliantDeviceCount", self.compliant_device_count)?;
        writer.write_i32_value("conflictDeviceCount", self.conflict_device_count)?;
        writer.write_i32_value("errorDeviceCount", self.error_device_count)?;
        writer.write_i32_value("nonCompliantDeviceCount", self.non_compliant_device_count)?;
        writer.write_i32_value("notApplicableDeviceCount", self.not_applicable_device_count)?;
        writer.write_i32_value("notAssignedDeviceCount", self.not_assigned_device_count)?;
        writer.write_i32_value("remediatedDeviceCount", self.remediated_device_count)?;
        writer.write_i32_value("unknownDeviceCount", self.unknown_device_count)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::json::{JsonParseNode, JsonSerializationWriter, SerializationSettings};
    use crate::serialization::test_support::{Recorded, RecordingWriter};
    use crate::models::ComplianceStatus;
    use crate::serialization::ParseNode;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_log::test;

    fn decode(json: &serde_json::Value) -> Result<AdvancedThreatProtectionOnboardingStateSummary, DeserializationError> {
        let node = JsonParseNode::new(json);
        let summary = (&node as &dyn ParseNode).object_value(AdvancedThreatProtectionOnboardingStateSummary::create_from_discriminator_value)?;
        Ok(summary.unwrap_or_default())
    }

    #[test]
    fn null_counts_stay_absent() -> Result<(), DeserializationError> {
        let summary = decode(&json!({ "compliantDeviceCount": 5, "errorDeviceCount": null }))?;

        assert_eq!(summary.compliant_device_count(), Some(5));
        assert_eq!(summary.error_device_count(), None);
        Ok(())
    }

    #[test]
    fn decodes_device_states_in_order() -> Result<(), DeserializationError> {
        let summary = decode(&json!({
            "advancedThreatProtectionOnboardingDeviceSettingStates": [
                { "id": "state-1", "deviceName": "first", "state": "compliant" },
                { "id": "state-2", "deviceName": "second", "state": "error" }
            ]
        }))?;

        let states = summary.advanced_threat_protection_onboarding_device_setting_states().expect("states");
        assert_eq!(states.len(), 2);
        assert_eq!(states[0].device_name(), Some("first"));
        assert_eq!(states[1].entity().id(), Some("state-2"));
        assert_eq!(states[1].state(), Some(ComplianceStatus::Error));
        Ok(())
    }

    #[test]
    fn a_bad_element_aborts_the_whole_decode() {
        let result = decode(&json!({
            "compliantDeviceCount": 1,
            "advancedThreatProtectionOnboardingDeviceSettingStates": [{ "platformType": "toaster" }]
        }));

        assert!(matches!(result, Err(DeserializationError::UnknownEnumValue { enum_name: "DeviceType", .. })));
    }

    #[test]
    fn writes_counts_even_when_unset() -> Result<(), SerializationError> {
        let mut summary = AdvancedThreatProtectionOnboardingStateSummary::new();
        summary.set_compliant_device_count(Some(5));

        let mut writer = RecordingWriter::new();
        summary.serialize(&mut writer)?;

        assert_eq!(writer.get("compliantDeviceCount"), Some(&Recorded::I32(Some(5))));
        assert_eq!(writer.get("errorDeviceCount"), Some(&Recorded::I32(None)));
        assert_eq!(writer.get("advancedThreatProtectionOnboardingDeviceSettingStates"), None);
        Ok(())
    }

    #[test]
    fn round_trips_with_unknown_properties() -> Result<(), Box<dyn std::error::Error>> {
        let json = json!({
            "id": "summary",
            "@odata.type": "#microsoft.graph.advancedThreatProtectionOnboardingStateSummary",
            "compliantDeviceCount": 3,
            "advancedThreatProtectionOnboardingDeviceSettingStates": [{ "id": "state-1", "platformType": "android" }],
            "lastRefreshedDateTime": "2024-01-01T00:00:00Z"
        });
        let summary = decode(&json)?;

        let mut writer = JsonSerializationWriter::new(SerializationSettings::new(true, false));
        summary.serialize(&mut writer)?;
        let written = writer.into_value()?;

        assert_eq!(written["lastRefreshedDateTime"], json!("2024-01-01T00:00:00Z"));
        assert_eq!(decode(&written)?, summary);
        Ok(())
    }
}
