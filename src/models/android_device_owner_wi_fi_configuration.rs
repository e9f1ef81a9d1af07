use crate::models::{AndroidDeviceOwnerWiFiSecurityType, DeviceConfiguration, DeviceConfigurationKind, WiFiProxySetting};
use crate::serialization::{
    AdditionalData, DeserializationError, Discriminated, EnumCodec, FieldDeserializers, Parsable, ParseNode, Serializable, SerializationError,
    SerializationWriter,
};
use model_macros::register_discriminator;

/// Wi-Fi network settings pushed to Android Enterprise fully managed devices.
#[register_discriminator(DeviceConfigurationKind)]
#[derive(Debug, Clone, PartialEq)]
pub struct AndroidDeviceOwnerWiFiConfiguration {
    device_configuration: DeviceConfiguration,
    connect_automatically: Option<bool>,
    connect_when_network_name_is_hidden: Option<bool>,
    network_name: Option<String>,
    pre_shared_key: Option<String>,
    pre_shared_key_is_set: Option<bool>,
    proxy_automatic_configuration_url: Option<String>,
    /// Semicolon separated hosts that bypass the proxy.
    proxy_exclusion_list: Option<String>,
    proxy_manual_address: Option<String>,
    proxy_manual_port: Option<i32>,
    proxy_settings: Option<WiFiProxySetting>,
    ssid: Option<String>,
    wi_fi_security_type: Option<AndroidDeviceOwnerWiFiSecurityType>,
}

impl Discriminated for AndroidDeviceOwnerWiFiConfiguration {
    const ODATA_TYPE: &'static str = "#microsoft.graph.androidDeviceOwnerWiFiConfiguration";
}

impl Default for AndroidDeviceOwnerWiFiConfiguration {
    fn default() -> Self {
        AndroidDeviceOwnerWiFiConfiguration {
            device_configuration: DeviceConfiguration::with_odata_type(Self::ODATA_TYPE),
            connect_automatically: None,
            connect_when_network_name_is_hidden: None,
            network_name: None,
            pre_shared_key: None,
            pre_shared_key_is_set: None,
            proxy_automatic_configuration_url: None,
            proxy_exclusion_list: None,
            proxy_manual_address: None,
            proxy_manual_port: None,
            proxy_settings: None,
            ssid: None,
            wi_fi_security_type: None,
        }
    }
}

impl AndroidDeviceOwnerWiFiConfiguration {
    pub fn new() -> Self {
        AndroidDeviceOwnerWiFiConfiguration::default()
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, DeserializationError> {
        Ok(AndroidDeviceOwnerWiFiConfiguration::new())
    }

    pub fn device_configuration(&self) -> &DeviceConfiguration {
        &self.device_configuration
    }

    pub fn device_configuration_mut(&mut self) -> &mut DeviceConfiguration {
        &mut self.device_configuration
    }

    pub fn connect_automatically(&self) -> Option<bool> {
        self.connect_automatically
    }

    pub fn connect_when_network_name_is_hidden(&self) -> Option<bool> {
        self.connect_when_network_name_is_hidden
    }

    pub fn network_name(&self) -> Option<&str> {
        self.network_name.as_deref()
    }

    pub fn pre_shared_key(&self) -> Option<&str> {
        self.pre_shared_key.as_deref()
    }

    pub fn pre_shared_key_is_set(&self) -> Option<bool> {
        self.pre_shared_key_is_set
    }

    pub fn proxy_automatic_configuration_url(&self) -> Option<&str> {
        self.proxy_automatic_configuration_url.as_deref()
    }

    pub fn proxy_exclusion_list(&self) -> Option<&str> {
        self.proxy_exclusion_list.as_deref()
    }

    pub fn proxy_manual_address(&self) -> Option<&str> {
        self.proxy_manual_address.as_deref()
    }

    pub fn proxy_manual_port(&self) -> Option<i32> {
        self.proxy_manual_port
    }

    pub fn proxy_settings(&self) -> Option<WiFiProxySetting> {
        self.proxy_settings
    }

    pub fn ssid(&self) -> Option<&str> {
        self.ssid.as_deref()
    }

    pub fn wi_fi_security_type(&self) -> Option<AndroidDeviceOwnerWiFiSecurityType> {
        self.wi_fi_security_type
    }

    pub fn set_connect_automatically(&mut self, value: Option<bool>) {
        self.connect_automatically = value;
    }

    pub fn set_connect_when_network_name_is_hidden(&mut self, value: Option<bool>) {
        self.connect_when_network_name_is_hidden = value;
    }

    pub fn set_network_name(&mut self, value: Option<String>) {
        self.network_name = value;
    }

    pub fn set_pre_shared_key(&mut self, value: Option<String>) {
        self.pre_shared_key = value;
    }

    pub fn set_pre_shared_key_is_set(&mut self, value: Option<bool>) {
        self.pre_shared_key_is_set = value;
    }

    pub fn set_proxy_automatic_configuration_url(&mut self, value: Option<String>) {
        self.proxy_automatic_configuration_url = value;
    }

    pub fn set_proxy_exclusion_list(&mut self, value: Option<String>) {
        self.proxy_exclusion_list = value;
    }

    pub fn set_proxy_manual_address(&mut self, value: Option<String>) {
        self.proxy_manual_address = value;
    }

    pub fn set_proxy_manual_port(&mut self, value: Option<i32>) {
        self.proxy_manual_port = value;
    }

    pub fn set_proxy_settings(&mut self, value: Option<WiFiProxySetting>) {
        self.proxy_settings = value;
    }

    pub fn set_ssid(&mut self, value: Option<String>) {
        self.ssid = value;
    }

    pub fn set_wi_fi_security_type(&mut self, value: Option<AndroidDeviceOwnerWiFiSecurityType>) {
        self.wi_fi_security_type = value;
    }
}

impl Parsable for AndroidDeviceOwnerWiFiConfiguration {
    fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = DeviceConfiguration::field_deserializers().lift(Self::device_configuration_mut);
        res.insert("connectAutomatically", |m, n| {
            if let Some(value) = n.bool_value()? {
                m.set_connect_automatically(Some(value));
            }
            Ok(())
        });
        res.insert("connectWhenNetworkNameIsHidden", |m, n| {
            if let Some(value) = n.bool_value()? {
                m.set_connect_when_network_name_is_hidden(Some(value));
            }
            Ok(())
        });
        res.insert("networkName", |m, n| {
            if let Some(value) = n.string_value()? {
                m.set_network_name(Some(value));
            }
            Ok(())
        });
        res.insert("preSharedKey", |m, n| {
            if let Some(value) = n.string_value()? {
                m.set_pre_shared_key(Some(value));
            }
            Ok(())
        });
        res.insert("preSharedKeyIsSet", |m, n| {
            if let Some(value) = n.bool_value()? {
                m.set_pre_shared_key_is_set(Some(value));
            }
            Ok(())
        });
        res.insert("proxyAutomaticConfigurationUrl", |m, n| {
            if let Some(value) = n.string_value()? {
                m.set_proxy_automatic_configuration_url(Some(value));
            }
            Ok(())
        });
        res.insert("proxyExclusionList", |m, n| {
            if let Some(value) = n.string_value()? {
                m.set_proxy_exclusion_list(Some(value));
            }
            Ok(())
        });
        res.insert("proxyManualAddress", |m, n| {
            if let Some(value) = n.string_value()? {
                m.set_proxy_manual_address(Some(value));
            }
            Ok(())
        });
        res.insert("proxyManualPort", |m, n| {
            if let Some(value) = n.i32_value()? {
                m.set_proxy_manual_port(Some(value));
            }
            Ok(())
        });
        res.insert("proxySettings", |m, n| {
            if let Some(value) = n.enum_value()? {
                m.set_proxy_settings(Some(value));
            }
            Ok(())
        });
        res.insert("ssid", |m, n| {
            if let Some(value) = n.string_value()? {
                m.set_ssid(Some(value));
            }
            Ok(())
        });
        res.insert("wiFiSecurityType", |m, n| {
            if let Some(value) = n.enum_value()? {
                m.set_wi_fi_security_type(Some(value));
            }
            Ok(())
        });
        res
    }

    fn additional_data_mut(&mut self) -> Option<&mut AdditionalData> {
        self.device_configuration.additional_data_mut()
    }
}

impl Serializable for AndroidDeviceOwnerWiFiConfiguration {
    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.device_configuration.serialize(writer)?;
        writer.write_bool_value("connectAutomatically", self.connect_automatically)?;
        writer.write_bool_value("connectWhenNetworkNameIsHidden", self.connect_when_network_name_is_hidden)?;
        writer.write_string_value("networkName", self.network_name())?;
        writer.write_string_value("preSharedKey", self.pre_shared_key())?;
        writer.write_bool_value("preSharedKeyIsSet", self.pre_shared_key_is_set)?;
        writer.write_string_value("proxyAutomaticConfigurationUrl", self.proxy_automatic_configuration_url())?;
        writer.write_string_value("proxyExclusionList", self.proxy_exclusion_list())?;
        writer.write_string_value("proxyManualAddress", self.proxy_manual_address())?;
        writer.write_i32_value("proxyManualPort", self.proxy_manual_port)?;
        if let Some(value) = self.proxy_settings {
            writer.write_string_value("proxySettings", Some(value.encode()))?;
        }
        writer.write_string_value("ssid", self.ssid())?;
        if let Some(value) = self.wi_fi_security_type {
            writer.write_string_value("wiFiSecurityType", Some(value.encode()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::json::{SerializationSettings, deserialize_json, serialize_json};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn decodes_through_the_device_configuration_slot() -> Result<(), DeserializationError> {
        let json = json!({
            "@odata.type": "#microsoft.graph.androidDeviceOwnerWiFiConfiguration",
            "id": "wifi-1",
            "ssid": "Contoso",
            "wiFiSecurityType": "wpaPersonal",
            "proxySettings": "manual",
            "proxyManualPort": 8080
        });
        let configuration = deserialize_json(json.to_string().as_bytes(), DeviceConfigurationKind::create_from_discriminator_value)?;

        let Some(DeviceConfigurationKind::AndroidDeviceOwnerWiFi(wifi)) = &configuration else {
            panic!("expected the Wi-Fi profile, found {:?}", configuration);
        };
        assert_eq!(wifi.device_configuration().entity().id(), Some("wifi-1"));
        assert_eq!(wifi.ssid(), Some("Contoso"));
        assert_eq!(wifi.wi_fi_security_type(), Some(AndroidDeviceOwnerWiFiSecurityType::WpaPersonal));
        assert_eq!(wifi.proxy_settings(), Some(WiFiProxySetting::Manual));
        assert_eq!(wifi.proxy_manual_port(), Some(8080));
        Ok(())
    }

    #[test]
    fn omitting_nulls_keeps_only_set_fields() -> Result<(), SerializationError> {
        let mut wifi = AndroidDeviceOwnerWiFiConfiguration::new();
        wifi.set_ssid(Some("Guest".to_string()));
        wifi.set_wi_fi_security_type(Some(AndroidDeviceOwnerWiFiSecurityType::Open));

        let written = serialize_json(&wifi, SerializationSettings::new(true, false))?;

        assert_eq!(
            written,
            r##"{"@odata.type":"#microsoft.graph.androidDeviceOwnerWiFiConfiguration","ssid":"Guest","wiFiSecurityType":"open"}"##
        );
        Ok(())
    }

    #[test]
    fn port_outside_the_i32_range_is_rejected() {
        let json = json!({ "proxyManualPort": 4294967296_i64 });
        let result = deserialize_json(json.to_string().as_bytes(), AndroidDeviceOwnerWiFiConfiguration::create_from_discriminator_value);

        assert!(matches!(result, Err(DeserializationError::IntegerOutOfRange(4294967296))));
    }
}
