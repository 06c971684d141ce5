// ── Device location ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::schema::{Constraint, display_parameter_value};

/// Where a location fix came from.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum LocationSource {
    #[serde(rename = "GPS")]
    #[strum(serialize = "GPS")]
    Gps,
    #[serde(rename = "AGPS")]
    #[strum(serialize = "AGPS")]
    Agps,
    Manual,
    #[default]
    External,
}

/// Protocol an external source used to push the location.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum ExternalProtocol {
    /// Not set; the source was not external.
    #[default]
    #[serde(rename = "")]
    #[strum(serialize = "")]
    None,
    #[serde(rename = "CWMP")]
    #[strum(serialize = "CWMP")]
    Cwmp,
    #[serde(rename = "USP")]
    #[strum(serialize = "USP")]
    Usp,
    #[serde(rename = "OMA-DM")]
    #[strum(serialize = "OMA-DM")]
    OmaDm,
    #[serde(rename = "SNMP")]
    #[strum(serialize = "SNMP")]
    Snmp,
    #[serde(rename = "UPnP")]
    #[strum(serialize = "UPnP")]
    Upnp,
    #[serde(rename = "HELD")]
    #[strum(serialize = "HELD")]
    Held,
    Other,
}

display_parameter_value!(LocationSource, ExternalProtocol);

const SOURCES: &[&str] = &["GPS", "AGPS", "Manual", "External"];
const EXTERNAL_PROTOCOLS: &[&str] = &["", "CWMP", "USP", "OMA-DM", "SNMP", "UPnP", "HELD", "Other"];

cwmp_object! {
    /// DeviceInfo.Location.{i}
    ///
    /// `DataObject` carries the fix itself as an opaque encoded blob
    /// (e.g. a PIDF-LO document); this record does not interpret it.
    pub struct Location => "Location" {
        source: LocationSource = LocationSource::External => "Source", ReadOnly, Constraint::one_of(SOURCES), with_source;
        acquired_time: Option<DateTime<Utc>> = None => "AcquiredTime", ReadOnly, Constraint::NONE, with_acquired_time;
        /// Path or URL of the external source, empty otherwise.
        external_source: String = String::new() => "ExternalSource", ReadOnly, Constraint::NONE, with_external_source;
        external_protocol: ExternalProtocol = ExternalProtocol::None => "ExternalProtocol", ReadOnly, Constraint::one_of(EXTERNAL_PROTOCOLS), with_external_protocol;
        data_object: String = String::new() => "DataObject", ReadWrite, Constraint::size(1200), with_data_object;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::schema::flatten;

    #[test]
    fn unset_external_protocol_is_empty_string() {
        let loc = Location::default();
        assert_eq!(loc.external_protocol.to_string(), "");
        let json = serde_json::to_value(&loc).unwrap();
        assert_eq!(json["ExternalProtocol"], "");
        assert_eq!(json["Source"], "External");
    }

    #[test]
    fn acquired_time_flattens_as_rfc3339() {
        let ts: DateTime<Utc> = "2025-06-01T08:00:00Z".parse().unwrap();
        let loc = Location::default()
            .with_source(LocationSource::Gps)
            .with_acquired_time(ts);
        let values = flatten("Device.DeviceInfo.Location.1.", &loc);
        assert_eq!(values[0].value, "GPS");
        assert_eq!(values[1].path, "Device.DeviceInfo.Location.1.AcquiredTime");
        assert_eq!(values[1].value, "2025-06-01T08:00:00Z");
    }

    #[test]
    fn protocol_parses_hyphenated_name() {
        assert_eq!("OMA-DM".parse::<ExternalProtocol>().unwrap(), ExternalProtocol::OmaDm);
    }
}
