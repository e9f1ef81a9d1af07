use crate::models::{ComplianceStatus, DeviceType, Entity};
use crate::serialization::{
    AdditionalData, DeserializationError, EnumCodec, FieldDeserializers, Parsable, ParseNode, Serializable, SerializationError, SerializationWriter,
};
use chrono::{DateTime, FixedOffset};

/// Onboarding state of one device for one threat protection setting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdvancedThreatProtectionOnboardingDeviceSettingState {
    entity: Entity,
    compliance_grace_period_expiration_date_time: Option<DateTime<FixedOffset>>,
    device_id: Option<String>,
    device_model: Option<String>,
    device_name: Option<String>,
    platform_type: Option<DeviceType>,
    setting: Option<String>,
    setting_name: Option<String>,
    state: Option<ComplianceStatus>,
    user_email: Option<String>,
    user_id: Option<String>,
    user_name: Option<String>,
    user_principal_name: Option<String>,
}

impl AdvancedThreatProtectionOnboardingDeviceSettingState {
    pub fn new() -> Self {
        AdvancedThreatProtectionOnboardingDeviceSettingState::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, DeserializationError> {
        Ok(AdvancedThreatProtectionOnboardingDeviceSettingState::new())
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    pub fn compliance_grace_period_expiration_date_time(&self) -> Option<&DateTime<FixedOffset>> {
        self.compliance_grace_period_expiration_date_time.as_ref()
    }

    pub fn device_id(&self) -> Option<&str> {
        self.device_id.as_deref()
    }

    pub fn device_model(&self) -> Option<&str> {
        self.device_model.as_deref()
    }

    pub fn device_name(&self) -> Option<&str> {
        self.device_name.as_deref()
    }

    pub fn platform_type(&self) -> Option<DeviceType> {
        self.platform_type
    }

    pub fn setting(&self) -> Option<&str> {
        self.setting.as_deref()
    }

    pub fn setting_name(&self) -> Option<&str> {
        self.setting_name.as_deref()
    }

    pub fn state(&self) -> Option<ComplianceStatus> {
        self.state
    }

    pub fn user_email(&self) -> Option<&str> {
        self.user_email.as_deref()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    pub fn user_principal_name(&self) -> Option<&str> {
        self.user_principal_name.as_deref()
    }

    pub fn set_compliance_grace_period_expiration_date_time(&mut self, value: Option<DateTime<FixedOffset>>) {
        self.compliance_grace_period_expiration_date_time = value;
    }

    pub fn set_device_id(&mut self, value: Option<String>) {
        self.device_id = value;
    }

    pub fn set_device_model(&mut self, value: Option<String>) {
        self.device_model = value;
    }

    pub fn set_device_name(&mut self, value: Option<String>) {
        self.device_name = value;
    }

    pub fn set_platform_type(&mut self, value: Option<DeviceType>) {
        self.platform_type = value;
    }

    pub fn set_setting(&mut self, value: Option<String>) {
        self.setting = value;
    }

    pub fn set_setting_name(&mut self, value: Option<String>) {
        self.setting_name = value;
    }

    pub fn set_state(&mut self, value: Option<ComplianceStatus>) {
        self.state = value;
    }

    pub fn set_user_email(&mut self, value: Option<String>) {
        self.user_email = value;
    }

    pub fn set_user_id(&mut self, value: Option<String>) {
        self.user_id = value;
    }

    pub fn set_user_name(&mut self, value: Option<String>) {
        self.user_name = value;
    }

    pub fn set_user_principal_name(&mut self, value: Option<String>) {
        self.user_principal_name = value;
    }
}

impl Parsable for AdvancedThreatProtectionOnboardingDeviceSettingState {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = Entity::field_deserializers().lift(Self::entity_mut);
        res.insert("complianceGracePeriodExpirationDateTime", |m, n| {
            if let Some(value) = n.date_time_value()? {
                m.set_compliance_grace_period_expiration_date_time(Some(value));
            }
            Ok(())
        });
        res.insert("deviceId", |m, n| {
            if let Some(value) = n.string_value()? {
                m.set_device_id(Some(value));
            }
            Ok(())
        });
        res.insert("deviceModel", |m, n| {
            if let Some(value) = n.string_value()? {
                m.set_device_model(Some(value));
            }
            Ok(())
        });
        res.insert("deviceName", |m, n| {
            if let Some(value) = n.string_value()? {
                m.set_device_name(Some(value));
            }
            Ok(())
        });
        res.insert("platformType", |m, n| {
            if let Some(value) = n.enum_value()? {
                m.set_platform_type(Some(value));
            }
            Ok(())
        });
        res.insert("setting", |m, n| {
            if let Some(value) = n.string_value()? {
                m.set_setting(Some(value));
            }
            Ok(())
        });
        res.insert("settingName", |m, n| {
            if let Some(value) = n.string_value()? {
                m.set_setting_name(Some(value));
            }
            Ok(())
        });
        res.insert("state", |m, n| {
            if let Some(value) = n.enum_value()? {
                m.set_state(Some(value));
            }
            Ok(())
        });
        res.insert("userEmail", |m, n| {
            if let Some(value) = n.string_value()? {
                m.set_user_email(Some(value));
            }
            Ok(())
        });
        res.insert("userId", |m, n| {
            if let Some(value) = n.string_value()? {
                m.set_user_id(Some(value));
            }
            Ok(())
        });
        res.insert("userName", |m, n| {
            if let Some(value) = n.string_value()? {
                m.set_user_name(Some(value));
            }
            Ok(())
        });
        res.insert("userPrincipalName", |m, n| {
            if let Some(value) = n.string_value()? {
                m.set_user_principal_name(Some(value));
            }
            Ok(())
        });
        res
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        self.entity.additional_data_mut()
    }
}

impl Serializable for AdvancedThreatProtectionOnboardingDeviceSettingState {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.entity.serialize(writer)?;
        writer.write_date_time_value("complianceGracePeriodExpirationDateTime", self.compliance_grace_period_expiration_date_time.as_ref())?;
        writer.write_string_value("deviceId", self.device_id())?;
        writer.write_string_value("deviceModel", self.device_model())?;
        writer.write_string_value("deviceName", self.device_name())?;
        if let Some(value) = self.platform_type {
            writer.write_string_value("platformType", Some(value.encode()))?;
        }
        writer.write_string_value("setting", self.setting())?;
        writer.write_string_value("settingName", self.setting_name())?;
        if let Some(value) = self.state {
            writer.write_string_value("state", Some(value.encode()))?;
        }
        writer.write_string_value("userEmail", self.user_email())?;
        writer.write_string_value("userId", self.user_id())?;
        writer.write_string_value("userName", self.user_name())?;
        writer.write_string_value("userPrincipalName", self.user_principal_name())?;
        Ok(())
    }
}
