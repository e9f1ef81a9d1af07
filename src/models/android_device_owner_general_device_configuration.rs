use crate::models::{
    AndroidDeviceOwnerAppAutoUpdatePolicyType, AndroidDeviceOwnerBatteryPluggedMode, AndroidDeviceOwnerPlayStoreMode,
    AndroidDeviceOwnerRequiredPasswordType, AndroidDeviceOwnerSystemUpdateInstallType, AndroidDeviceOwnerUserFacingMessage, AndroidKeyguardFeature,
    AppListItem, DeviceConfiguration, DeviceConfigurationKind,
};
use crate::serialization::{
    AdditionalData, DeserializationError, Discriminated, EnumCodec, FieldDeserializers, Parsable, ParseNode, Serializable, SerializationError,
    SerializationWriter,
};
use model_macros::register_discriminator;

/// General restrictions for Android Enterprise fully managed and dedicated devices.
#[register_discriminator(DeviceConfigurationKind)]
#[derive(Debug, Clone, PartialEq)]
pub struct AndroidDeviceOwnerGeneralDeviceConfiguration {
    device_configuration: DeviceConfiguration,
    accounts_block_modification: Option<bool>,
    apps_allow_install_from_unknown_sources: Option<bool>,
    apps_auto_update_policy: Option<AndroidDeviceOwnerAppAutoUpdatePolicyType>,
    camera_blocked: Option<bool>,
    factory_reset_device_administrator_emails: Option<Vec<String>>,
    kiosk_mode_apps: Option<Vec<AppListItem>>,
    kiosk_mode_exit_code: Option<String>,
    kiosk_mode_grid_height: Option<i32>,
    kiosk_mode_grid_width: Option<i32>,
    kiosk_mode_wifi_allowed_ssids: Option<Vec<String>>,
    /// At most 11 features.
    password_block_keyguard_features: Option<Vec<AndroidKeyguardFeature>>,
    /// Valid values 4 to 16.
    password_minimum_length: Option<i32>,
    password_required_type: Option<AndroidDeviceOwnerRequiredPasswordType>,
    play_store_mode: Option<AndroidDeviceOwnerPlayStoreMode>,
    screen_capture_blocked: Option<bool>,
    short_help_text: Option<AndroidDeviceOwnerUserFacingMessage>,
    stay_on_modes: Option<Vec<AndroidDeviceOwnerBatteryPluggedMode>>,
    storage_allow_usb: Option<bool>,
    system_update_install_type: Option<AndroidDeviceOwnerSystemUpdateInstallType>,
    vpn_always_on_package_identifier: Option<String>,
}

impl Discriminated for AndroidDeviceOwnerGeneralDeviceConfiguration {
    const ODATA_TYPE: &'static str = "#microsoft.graph.androidDeviceOwnerGeneralDeviceConfiguration";
}

impl Default for AndroidDeviceOwnerGeneralDeviceConfiguration {
    fn default() -> Self {
        AndroidDeviceOwnerGeneralDeviceConfiguration {
            device_configuration: DeviceConfiguration::with_odata_type(Self::ODATA_TYPE),
            accounts_block_modification: None,
            apps_allow_install_from_unknown_sources: None,
            apps_auto_update_policy: None,
            camera_blocked: None,
            factory_reset_device_administrator_emails: None,
            kiosk_mode_apps: None,
            kiosk_mode_exit_code: None,
            kiosk_mode_grid_height: None,
            kiosk_mode_grid_width: None,
            kiosk_mode_wifi_allowed_ssids: None,
            password_block_keyguard_features: None,
            password_minimum_length: None,
            password_required_type: None,
            play_store_mode: None,
            screen_capture_blocked: None,
            short_help_text: None,
            stay_on_modes: None,
            storage_allow_usb: None,
            system_update_install_type: None,
            vpn_always_on_package_identifier: None,
        }
    }
}

impl AndroidDeviceOwnerGeneralDeviceConfiguration {
    pub fn new() -> Self {
        AndroidDeviceOwnerGeneralDeviceConfiguration::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, DeserializationError> {
        Ok(AndroidDeviceOwnerGeneralDeviceConfiguration::new())
    }

    pub fn device_configuration(&self) -> &DeviceConfiguration {
        &self.device_configuration
    }

    pub fn device_configuration_mut(&mut self) -> &mut DeviceConfiguration {
        &mut self.device_configuration
    }

    pub fn accounts_block_modification(&self) -> Option<bool> {
        self.accounts_block_modification
    }

    pub fn apps_allow_install_from_unknown_sources(&self) -> Option<bool> {
        self.apps_allow_install_from_unknown_sources
    }

    pub fn apps_auto_update_policy(&self) -> Option<AndroidDeviceOwnerAppAutoUpdatePolicyType> {
        self.apps_auto_update_policy
    }

    pub fn camera_blocked(&self) -> Option<bool> {
        self.camera_blocked
    }

    pub fn factory_reset_device_administrator_emails(&self) -> Option<&[String]> {
        self.factory_reset_device_administrator_emails.as_deref()
    }

    pub fn kiosk_mode_apps(&self) -> Option<&[AppListItem]> {
        self.kiosk_mode_apps.as_deref()
    }

    pub fn kiosk_mode_exit_code(&self) -> Option<&str> {
        self.kiosk_mode_exit_code.as_deref()
    }

    pub fn kiosk_mode_grid_height(&self) -> Option<i32> {
        self.kiosk_mode_grid_height
    }

    pub fn kiosk_mode_grid_width(&self) -> Option<i32> {
        self.kiosk_mode_grid_width
    }

    pub fn kiosk_mode_wifi_allowed_ssids(&self) -> Option<&[String]> {
        self.kiosk_mode_wifi_allowed_ssids.as_deref()
    }

    pub fn password_block_keyguard_features(&self) -> Option<&[AndroidKeyguardFeature]> {
        self.password_block_keyguard_features.as_deref()
    }

    pub fn password_minimum_length(&self) -> Option<i32> {
        self.password_minimum_length
    }

    pub fn password_required_type(&self) -> Option<AndroidDeviceOwnerRequiredPasswordType> {
        self.password_required_type
    }

    pub fn play_store_mode(&self) -> Option<AndroidDeviceOwnerPlayStoreMode> {
        self.play_store_mode
    }

    pub fn screen_capture_blocked(&self) -> Option<bool> {
        self.screen_capture_blocked
    }

    pub fn short_help_text(&self) -> Option<&AndroidDeviceOwnerUserFacingMessage> {
        self.short_help_text.as_ref()
    }

    pub fn stay_on_modes(&self) -> Option<&[AndroidDeviceOwnerBatteryPluggedMode]> {
        self.stay_on_modes.as_deref()
    }

    pub fn storage_allow_usb(&self) -> Option<bool> {
        self.storage_allow_usb
    }

    pub fn system_update_install_type(&self) -> Option<AndroidDeviceOwnerSystemUpdateInstallType> {
        self.system_update_install_type
    }

    pub fn vpn_always_on_package_identifier(&self) -> Option<&str> {
        self.vpn_always_on_package_identifier.as_deref()
    }

    pub fn set_accounts_block_modification(&mut self, value: Option<bool>) {
        self.accounts_block_modification = value;
    }

    pub fn set_apps_allow_install_from_unknown_sources(&mut self, value: Option<bool>) {
        self.apps_allow_install_from_unknown_sources = value;
    }

    pub fn set_apps_auto_update_policy(&mut self, value: Option<AndroidDeviceOwnerAppAutoUpdatePolicyType>) {
        self.apps_auto_update_policy = value;
    }

    pub fn set_camera_blocked(&mut self, value: Option<bool>) {
        self.camera_blocked = value;
    }

    pub fn set_factory_reset_device_administrator_emails(&mut self, value: Option<Vec<String>>) {
        self.factory_reset_device_administrator_emails = value;
    }

    pub fn set_kiosk_mode_apps(&mut self, value: Option<Vec<AppListItem>>) {
        self.kiosk_mode_apps = value;
    }

    pub fn set_kiosk_mode_exit_code(&mut self, value: Option<String>) {
        self.kiosk_mode_exit_code = value;
    }

    pub fn set_kiosk_mode_grid_height(&mut self, value: Option<i32>) {
        self.kiosk_mode_grid_height = value;
    }

    pub fn set_kiosk_mode_grid_width(&mut self, value: Option<i32>) {
        self.kiosk_mode_grid_width = value;
    }

    pub fn set_kiosk_mode_wifi_allowed_ssids(&mut self, value: Option<Vec<String>>) {
        self.kiosk_mode_wifi_allowed_ssids = value;
    }

    pub fn set_password_block_keyguard_features(&mut self, value: Option<Vec<AndroidKeyguardFeature>>) {
        self.password_block_keyguard_features = value;
    }

    pub fn set_password_minimum_length(&mut self, value: Option<i32>) {
        self.password_minimum_length = value;
    }

    pub fn set_password_required_type(&mut self, value: Option<AndroidDeviceOwnerRequiredPasswordType>) {
        self.password_required_type = value;
    }

    pub fn set_play_store_mode(&mut self, value: Option<AndroidDeviceOwnerPlayStoreMode>) {
        self.play_store_mode = value;
    }

    pub fn set_screen_capture_blocked(&mut self, value: Option<bool>) {
        self.screen_capture_blocked = value;
    }

    pub fn set_short_help_text(&mut self, value: Option<AndroidDeviceOwnerUserFacingMessage>) {
        self.short_help_text = value;
    }

    pub fn set_stay_on_modes(&mut self, value: Option<Vec<AndroidDeviceOwnerBatteryPluggedMode>>) {
        self.stay_on_modes = value;
    }

    pub fn set_storage_allow_usb(&mut self, value: Option<bool>) {
        self.storage_allow_usb = value;
    }

    pub fn set_system_update_install_type(&mut self, value: Option<AndroidDeviceOwnerSystemUpdateInstallType>) {
        self.system_update_install_type = value;
    }

    pub fn set_vpn_always_on_package_identifier(&mut self, value: Option<String>) {
        self.vpn_always_on_package_identifier = value;
    }
}

impl Parsable for AndroidDeviceOwnerGeneralDeviceConfiguration {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = DeviceConfiguration::field_deserializers().lift(Self::device_configuration_mut);
        res.insert("accountsBlockModification", |m, n| {
            if let Some(value) = n.bool_value()? {
                m.set_accounts_block_modification(Some(value));
            }
            Ok(())
        });
        res.insert("appsAllowInstallFromUnknownSources", |m, n| {
            if let Some(value) = n.bool_value()? {
                m.set_apps_allow_install_from_unknown_sources(Some(value));
            }
            Ok(())
        });
        res.insert("appsAutoUpdatePolicy", |m, n| {
            if let Some(value) = n.enum_value()? {
                m.set_apps_auto_update_policy(Some(value));
            }
            Ok(())
        });
        res.insert("cameraBlocked", |m, n| {
            if let Some(value) = n.bool_value()? {
                m.set_camera_blocked(Some(value));
            }
            Ok(())
        });
        res.insert("factoryResetDeviceAdministratorEmails", |m, n| {
            if let Some(value) = n.collection_of_string_values()? {
                m.set_factory_reset_device_administrator_emails(Some(value));
            }
            Ok(())
        });
        res.insert("kioskModeApps", |m, n| {
            if let Some(value) = n.collection_of_object_values(AppListItem::create_from_discriminator_value)? {
                m.set_kiosk_mode_apps(Some(value));
            }
            Ok(())
        });
        res.insert("kioskModeExitCode", |m, n| {
            if let Some(value) = n.string_value()? {
                m.set_kiosk_mode_exit_code(Some(value));
            }
            Ok(())
        });
        res.insert("kioskModeGridHeight", |m, n| {
            if let Some(value) = n.i32_value()? {
                m.set_kiosk_mode_grid_height(Some(value));
            }
            Ok(())
        });
        res.insert("kioskModeGridWidth", |m, n| {
            if let Some(value) = n.i32_value()? {
                m.set_kiosk_mode_grid_width(Some(value));
            }
            Ok(())
        });
        res.insert("kioskModeWifiAllowedSsids", |m, n| {
            if let Some(value) = n.collection_of_string_values()? {
                m.set_kiosk_mode_wifi_allowed_ssids(Some(value));
            }
            Ok(())
        });
        res.insert("passwordBlockKeyguardFeatures", |m, n| {
            if let Some(value) = n.collection_of_enum_values()? {
                m.set_password_block_keyguard_features(Some(value));
            }
            Ok(())
        });
        res.insert("passwordMinimumLength", |m, n| {
            if let Some(value) = n.i32_value()? {
                m.set_password_minimum_length(Some(value));
            }
            Ok(())
        });
        res.insert("passwordRequiredType", |m, n| {
            if let Some(value) = n.enum_value()? {
                m.set_password_required_type(Some(value));
            }
            Ok(())
        });
        res.insert("playStoreMode", |m, n| {
            if let Some(value) = n.enum_value()? {
                m.set_play_store_mode(Some(value));
            }
            Ok(())
        });
        res.insert("screenCaptureBlocked", |m, n| {
            if let Some(value) = n.bool_value()? {
                m.set_screen_capture_blocked(Some(value));
            }
            Ok(())
        });
        res.insert("shortHelpText", |m, n| {
            if let Some(value) = n.object_value(AndroidDeviceOwnerUserFacingMessage::create_from_discriminator_value)? {
                m.set_short_help_text(Some(value));
            }
            Ok(())
        });
        res.insert("stayOnModes", |m, n| {
            if let Some(value) = n.collection_of_enum_values()? {
                m.set_stay_on_modes(Some(value));
            }
            Ok(())
        });
        res.insert("storageAllowUsb", |m, n| {
            if let Some(value) = n.bool_value()? {
                m.set_storage_allow_usb(Some(value));
            }
            Ok(())
        });
        res.insert("systemUpdateInstallType", |m, n| {
            if let Some(value) = n.enum_value()? {
                m.set_system_update_install_type(Some(value));
            }
            Ok(())
        });
        res.insert("vpnAlwaysOnPackageIdentifier", |m, n| {
            if let Some(value) = n.string_value()? {
                m.set_vpn_always_on_package_identifier(Some(value));
            }
            Ok(())
        });
        res
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        self.device_configuration.additional_data_mut()
    }
}

impl Serializable for AndroidDeviceOwnerGeneralDeviceConfiguration {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.device_configuration.serialize(writer)?;
        writer.write_bool_value("accountsBlockModification", self.accounts_block_modification)?;
        writer.write_bool_value("appsAllowInstallFromUnknownSources", self.apps_allow_install_from_unknown_sources)?;
        if let Some(value) = self.apps_auto_update_policy {
            writer.write_string_value("appsAutoUpdatePolicy", Some(value.encode()))?;
        }
        writer.write_bool_value("cameraBlocked", self.camera_blocked)?;
        if let Some(values) = &self.factory_reset_device_administrator_emails {
            writer.write_collection_of_string_values("factoryResetDeviceAdministratorEmails", values)?;
        }
        if let Some(values) = &self.kiosk_mode_apps {
            let values: Vec<&dyn Serializable> = values.iter().map(|value| value as &dyn Serializable).collect();
            writer.write_collection_of_object_values("kioskModeApps", &values)?;
        }
        writer.write_string_value("kioskModeExitCode", self.kiosk_mode_exit_code())?;
        writer.write_i32_value("kioskModeGridHeight", self.kiosk_mode_grid_height)?;
        writer.write_i32_value("kioskModeGridWidth", self.kiosk_mode_grid_width)?;
        if let Some(values) = &self.kiosk_mode_wifi_allowed_ssids {
            writer.write_collection_of_string_values("kioskModeWifiAllowedSsids", values)?;
        }
        if let Some(values) = &self.password_block_keyguard_features {
            writer.write_collection_of_string_values("passwordBlockKeyguardFeatures", &AndroidKeyguardFeature::encode_list(values))?;
        }
        writer.write_i32_value("passwordMinimumLength", self.password_minimum_length)?;
        if let Some(value) = self.password_required_type {
            writer.write_string_value("passwordRequiredType", Some(value.encode()))?;
        }
        if let Some(value) = self.play_store_mode {
            writer.write_string_value("playStoreMode", Some(value.encode()))?;
        }
        writer.write_bool_value("screenCaptureBlocked", self.screen_capture_blocked)?;
        if let Some(value) = &self.short_help_text {
            writer.write_object_value("shortHelpText", value)?;
        }
        if let Some(values) = &self.stay_on_modes {
            writer.write_collection_of_string_values("stayOnModes", &AndroidDeviceOwnerBatteryPluggedMode::encode_list(values))?;
        }
        writer.write_bool_value("storageAllowUsb", self.storage_allow_usb)?;
        if let Some(value) = self.system_update_install_type {
            writer.write_string_value("systemUpdateInstallType", Some(value.encode()))?;
        }
        writer.write_string_value("vpnAlwaysOnPackageIdentifier", self.vpn_always_on_package_identifier())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::KeyValuePair;
    use crate::serialization::json::{JsonParseNode, JsonSerializationWriter, SerializationSettings, serialize_json};
    use crate::serialization::test_support::{Recorded, RecordingWriter};
    use crate::serialization::ODATA_TYPE_KEY;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_log::test;

    fn decode_onto(configuration: &mut AndroidDeviceOwnerGeneralDeviceConfiguration, json: &serde_json::Value) -> Result<(), DeserializationError> {
        configuration.deserialize_fields(&JsonParseNode::new(json))
    }

    #[test]
    fn new_instances_carry_their_type_tag() {
        let configuration = AndroidDeviceOwnerGeneralDeviceConfiguration::new();
        assert_eq!(
            configuration.device_configuration().entity().odata_type(),
            Some("#microsoft.graph.androidDeviceOwnerGeneralDeviceConfiguration")
        );
    }

    #[test]
    fn writes_play_store_mode_as_its_wire_string() -> Result<(), SerializationError> {
        let mut configuration = AndroidDeviceOwnerGeneralDeviceConfiguration::new();
        configuration.set_play_store_mode(Some(AndroidDeviceOwnerPlayStoreMode::AllowList));

        let mut writer = RecordingWriter::new();
        configuration.serialize(&mut writer)?;

        assert_eq!(writer.get("playStoreMode"), Some(&Recorded::String(Some("allowList".to_string()))));
        Ok(())
    }

    #[test]
    fn bogus_play_store_mode_fails_and_leaves_the_field_unset() {
        let mut configuration = AndroidDeviceOwnerGeneralDeviceConfiguration::new();
        let result = decode_onto(&mut configuration, &json!({ "playStoreMode": "bogusValue" }));

        match result {
            Err(DeserializationError::UnknownEnumValue { enum_name, value }) => {
                assert_eq!(enum_name, "AndroidDeviceOwnerPlayStoreMode");
                assert_eq!(value, "bogusValue");
            }
            other => panic!("expected an unknown enum value error, found {:?}", other),
        }
        assert_eq!(configuration.play_store_mode(), None);
    }

    #[test]
    fn fields_decoded_before_an_error_are_kept() {
        let mut configuration = AndroidDeviceOwnerGeneralDeviceConfiguration::new();
        let json = json!({
            "cameraBlocked": true,
            "kioskModeExitCode": "1234",
            "stayOnModes": ["ac", "solar"],
            "storageAllowUsb": false
        });

        let result = decode_onto(&mut configuration, &json);

        assert!(matches!(
            result,
            Err(DeserializationError::UnknownEnumValue {
                enum_name: "AndroidDeviceOwnerBatteryPluggedMode",
                ..
            })
        ));
        assert_eq!(configuration.camera_blocked(), Some(true));
        assert_eq!(configuration.kiosk_mode_exit_code(), Some("1234"));
        assert_eq!(configuration.stay_on_modes(), None);
        assert_eq!(configuration.storage_allow_usb(), None);
    }

    #[test]
    fn kiosk_apps_keep_their_order() -> Result<(), DeserializationError> {
        let mut configuration = AndroidDeviceOwnerGeneralDeviceConfiguration::new();
        let json = json!({
            "kioskModeApps": [
                { "@odata.type": "#microsoft.graph.appListItem", "name": "Outlook", "appId": "com.microsoft.office.outlook" },
                null,
                { "name": "Teams", "appId": "com.microsoft.teams" }
            ]
        });
        decode_onto(&mut configuration, &json)?;

        let apps = configuration.kiosk_mode_apps().expect("kiosk apps");
        assert_eq!(apps.len(), 2);
        assert_eq!(apps[0].name(), Some("Outlook"));
        assert_eq!(apps[1].app_id(), Some("com.microsoft.teams"));
        Ok(())
    }

    #[test]
    fn tag_is_written_once_by_the_base() -> Result<(), SerializationError> {
        let configuration = AndroidDeviceOwnerGeneralDeviceConfiguration::new();

        let mut writer = RecordingWriter::new();
        configuration.serialize(&mut writer)?;

        let tags: Vec<&Recorded> = writer.calls().iter().filter(|(key, _)| key == ODATA_TYPE_KEY).map(|(_, value)| value).collect();
        assert_eq!(
            tags,
            vec![&Recorded::String(Some(AndroidDeviceOwnerGeneralDeviceConfiguration::ODATA_TYPE.to_string()))]
        );
        assert_eq!(writer.keys()[..3], ["id", "@odata.type", "<additionalData>"]);
        Ok(())
    }

    #[test]
    fn unset_enums_objects_and_lists_are_not_written() -> Result<(), SerializationError> {
        let configuration = AndroidDeviceOwnerGeneralDeviceConfiguration::new();

        let mut writer = RecordingWriter::new();
        configuration.serialize(&mut writer)?;

        for key in ["appsAutoUpdatePolicy", "kioskModeApps", "playStoreMode", "shortHelpText", "stayOnModes", "roleScopeTagIds"] {
            assert_eq!(writer.get(key), None, "{} should be skipped", key);
        }
        assert_eq!(writer.get("cameraBlocked"), Some(&Recorded::Bool(None)));
        assert_eq!(writer.get("kioskModeExitCode"), Some(&Recorded::String(None)));
        Ok(())
    }

    #[test]
    fn a_failing_write_stops_the_remaining_writes() {
        let mut configuration = AndroidDeviceOwnerGeneralDeviceConfiguration::new();
        configuration.set_camera_blocked(Some(true));
        configuration.set_storage_allow_usb(Some(true));

        let mut writer = RecordingWriter::failing_on("cameraBlocked");
        let result = configuration.serialize(&mut writer);

        assert!(matches!(result, Err(SerializationError::Sink(_))));
        assert_eq!(writer.keys().last(), Some(&"appsAllowInstallFromUnknownSources"));
        assert_eq!(writer.get("storageAllowUsb"), None);
    }

    #[test]
    fn nested_write_errors_propagate() {
        let mut message = AndroidDeviceOwnerUserFacingMessage::new();
        message.set_default_message(Some("Call the help desk".to_string()));
        let mut configuration = AndroidDeviceOwnerGeneralDeviceConfiguration::new();
        configuration.set_short_help_text(Some(message));

        let mut writer = RecordingWriter::failing_on("defaultMessage");
        let result = configuration.serialize(&mut writer);

        assert!(matches!(result, Err(SerializationError::Sink(_))));
        assert_eq!(writer.get("shortHelpText"), None);
        assert_eq!(writer.get("stayOnModes"), None);
    }

    #[test]
    fn round_trips_a_populated_profile() -> Result<(), Box<dyn std::error::Error>> {
        let mut help_text = AndroidDeviceOwnerUserFacingMessage::new();
        help_text.set_default_message(Some("Ask IT".to_string()));
        help_text.set_localized_messages(Some(vec![KeyValuePair::from_pair("nl-NL", "Vraag IT")]));

        let mut outlook = AppListItem::new();
        outlook.set_name(Some("Outlook".to_string()));
        outlook.set_app_id(Some("com.microsoft.office.outlook".to_string()));

        let mut configuration = AndroidDeviceOwnerGeneralDeviceConfiguration::new();
        configuration.device_configuration_mut().set_display_name(Some("Kiosk".to_string()));
        configuration.device_configuration_mut().set_version(Some(4));
        configuration.set_apps_auto_update_policy(Some(AndroidDeviceOwnerAppAutoUpdatePolicyType::WiFiOnly));
        configuration.set_factory_reset_device_administrator_emails(Some(vec!["admin@contoso.com".to_string()]));
        configuration.set_kiosk_mode_apps(Some(vec![outlook]));
        configuration.set_kiosk_mode_grid_height(Some(4));
        configuration.set_password_block_keyguard_features(Some(vec![AndroidKeyguardFeature::Camera, AndroidKeyguardFeature::Face]));
        configuration.set_password_required_type(Some(AndroidDeviceOwnerRequiredPasswordType::NumericComplex));
        configuration.set_play_store_mode(Some(AndroidDeviceOwnerPlayStoreMode::AllowList));
        configuration.set_short_help_text(Some(help_text));
        configuration.set_stay_on_modes(Some(vec![AndroidDeviceOwnerBatteryPluggedMode::Usb]));
        configuration.set_system_update_install_type(Some(AndroidDeviceOwnerSystemUpdateInstallType::Windowed));

        let mut writer = JsonSerializationWriter::new(SerializationSettings::default());
        configuration.serialize(&mut writer)?;
        let written = writer.into_value()?;

        assert_eq!(written["playStoreMode"], json!("allowList"));
        assert_eq!(written["passwordBlockKeyguardFeatures"], json!(["camera", "face"]));
        assert_eq!(written["cameraBlocked"], json!(null));

        let mut decoded = AndroidDeviceOwnerGeneralDeviceConfiguration::new();
        decode_onto(&mut decoded, &written)?;
        assert_eq!(decoded, configuration);
        assert_eq!(decoded.camera_blocked(), None);

        let again = serialize_json(&decoded, SerializationSettings::default())?;
        assert_eq!(serde_json::from_str::<serde_json::Value>(&again)?, written);
        Ok(())
    }
}
