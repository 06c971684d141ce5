// ── Common types shared across the object families ──

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::schema::display_parameter_value;

/// Integer check/mark parameter left unused.
pub const UNUSED: i32 = -1;

/// Integer mark parameter whose value the device derives automatically.
pub const AUTO: i32 = -2;

pub fn is_unused(v: i32) -> bool {
    v == UNUSED
}

pub fn is_auto(v: i32) -> bool {
    v == AUTO
}

/// Operational status of a TR-104 object.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum Status {
    Up,
    Error,
    #[default]
    Disabled,
}

/// How an entry came to exist.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum Origin {
    AutoConfigured,
    #[default]
    Static,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum TransportProtocol {
    #[default]
    Udp,
    Tcp,
    Tls,
    Sctp,
}

/// Enable/Enabled/Disabled/Error status shared by TR-181 style objects.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum EnableStatus {
    #[default]
    Disabled,
    Enabled,
    #[serde(rename = "Error_Misconfigured")]
    #[strum(serialize = "Error_Misconfigured")]
    ErrorMisconfigured,
    Error,
}

display_parameter_value!(Status, Origin, TransportProtocol, EnableStatus, MacAddress);

// ── MacAddress ──────────────────────────────────────────────────────

/// MAC address, normalized to lowercase colon-separated format (aa:bb:cc:dd:ee:ff).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct MacAddress(String);

impl MacAddress {
    /// Create a normalized MAC address from any common format.
    /// Accepts colon-separated or dash-separated hex.
    pub fn new(raw: impl AsRef<str>) -> Self {
        let normalized = raw.as_ref().trim().to_lowercase().replace('-', ":");
        Self(normalized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for MacAddress {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for MacAddress {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<MacAddress> for String {
    fn from(mac: MacAddress) -> Self {
        mac.0
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MacAddress {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn mac_address_normalizes_dashes() {
        let mac = MacAddress::new("AA-BB-CC-DD-EE-FF");
        assert_eq!(mac.as_str(), "aa:bb:cc:dd:ee:ff");
    }

    #[test]
    fn mac_address_deserializes_normalized() {
        let mac: MacAddress = serde_json::from_str(r#""00-1A-2B-3C-4D-5E""#).unwrap();
        assert_eq!(mac.to_string(), "00:1a:2b:3c:4d:5e");
    }

    #[test]
    fn transport_uses_cwmp_spelling() {
        assert_eq!(TransportProtocol::Sctp.to_string(), "SCTP");
        assert_eq!("TLS".parse::<TransportProtocol>().unwrap(), TransportProtocol::Tls);
        let json = serde_json::to_string(&TransportProtocol::Udp).unwrap();
        assert_eq!(json, r#""UDP""#);
    }

    #[test]
    fn sentinels() {
        assert!(is_unused(-1));
        assert!(is_auto(-2));
        assert!(!is_unused(0));
    }

    #[test]
    fn misconfigured_status_keeps_underscore() {
        assert_eq!(EnableStatus::ErrorMisconfigured.to_string(), "Error_Misconfigured");
    }
}
