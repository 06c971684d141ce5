// ── Proxied devices ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::schema::{Constraint, Invariant, display_parameter_value};

/// Protocol a proxied device is managed through.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum ProxyProtocol {
    #[default]
    #[serde(rename = "Z-Wave")]
    #[strum(serialize = "Z-Wave")]
    ZWave,
    #[serde(rename = "ZigBee")]
    #[strum(serialize = "ZigBee")]
    ZigBee,
    #[serde(rename = "UPnP-DM")]
    #[strum(serialize = "UPnP-DM")]
    UpnpDm,
    #[serde(rename = "ETSI-M2M")]
    #[strum(serialize = "ETSI-M2M")]
    EtsiM2m,
}

display_parameter_value!(ProxyProtocol);

const PROXY_PROTOCOLS: &[&str] = &["Z-Wave", "ZigBee", "UPnP-DM", "ETSI-M2M"];

cwmp_object! {
    /// DeviceInfo.ProxierInfo.{i} -- a device this CPE proxies for.
    pub struct ProxierInfo => "ProxierInfo" {
        manufacturer_oui: String = String::new() => "ManufacturerOUI", ReadOnly, Constraint::pattern("[0-9A-F]{6}"), with_manufacturer_oui;
        product_class: String = String::new() => "ProductClass", ReadOnly, Constraint::size(64), with_product_class;
        serial_number: String = String::new() => "SerialNumber", ReadOnly, Constraint::size(64), with_serial_number;
        proxy_protocol: ProxyProtocol = ProxyProtocol::ZWave => "ProxyProtocol", ReadOnly, Constraint::one_of(PROXY_PROTOCOLS), with_proxy_protocol;
    }
    invariants [Invariant::Unique(&["ManufacturerOUI", "ProductClass", "SerialNumber"])]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::schema::CwmpObject;

    #[test]
    fn protocol_round_trips_through_json() {
        let info = ProxierInfo::default()
            .with_manufacturer_oui("00D09E")
            .with_proxy_protocol(ProxyProtocol::EtsiM2m);
        let json = serde_json::to_string(&info).unwrap();
        assert!(json.contains(r#""ProxyProtocol":"ETSI-M2M""#));
        let back: ProxierInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, info);
    }

    #[test]
    fn oui_pattern_is_metadata_only() {
        let info = ProxierInfo::default().with_manufacturer_oui("not an oui");
        assert_eq!(info.manufacturer_oui, "not an oui");
        let param = ProxierInfo::parameter("ManufacturerOUI").unwrap();
        assert_eq!(param.constraint, Constraint::pattern("[0-9A-F]{6}"));
    }
}
