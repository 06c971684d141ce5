// ── Supported data models and vendor configuration files ──

use chrono::{DateTime, Utc};
use url::Url;
use uuid::Uuid;

use crate::schema::{Constraint, Invariant};

cwmp_object! {
    /// DeviceInfo.SupportedDataModel.{i}
    ///
    /// One entry per data model the device implements, pointing at the
    /// Device Type XML document that describes it.
    pub struct SupportedDataModel => "SupportedDataModel" {
        alias: String = String::new() => "Alias", ReadWrite, Constraint::size(64), with_alias;
        url: Option<Url> = None => "URL", ReadOnly, Constraint::size(256), with_url;
        uuid: Option<Uuid> = None => "UUID", ReadOnly, Constraint::NONE, with_uuid;
        /// e.g. `urn:broadband-forum-org:tr-181-2-14-0`
        urn: String = String::new() => "URN", ReadOnly, Constraint::size(256), with_urn;
    }
    lists {
        features: Vec<String> => "Features", ReadOnly, Constraint::NONE, with_feature;
    }
    invariants [Invariant::Unique(&["URL"])]
}

cwmp_object! {
    /// DeviceInfo.VendorConfigFile.{i}
    pub struct VendorConfigFile => "VendorConfigFile" {
        alias: String = String::new() => "Alias", ReadWrite, Constraint::size(64), with_alias;
        name: String = String::new() => "Name", ReadOnly, Constraint::size(64), with_name;
        version: String = String::new() => "Version", ReadOnly, Constraint::size(16), with_version;
        date: Option<DateTime<Utc>> = None => "Date", ReadOnly, Constraint::NONE, with_date;
        description: String = String::new() => "Description", ReadOnly, Constraint::size(256), with_description;
        use_for_backup_restore: bool = false => "UseForBackupRestore", ReadOnly, Constraint::NONE, with_use_for_backup_restore;
    }
    invariants [Invariant::Unique(&["Name"])]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::schema::flatten;

    #[test]
    fn unset_url_and_uuid_render_empty() {
        let values = flatten("", &SupportedDataModel::default());
        let url = values.iter().find(|v| v.path == "URL").unwrap();
        let uuid = values.iter().find(|v| v.path == "UUID").unwrap();
        assert_eq!(url.value, "");
        assert_eq!(uuid.value, "");
    }

    #[test]
    fn url_and_uuid_deserialize_from_strings() {
        let json = r#"{
            "URL": "https://example.com/dm/tr-181.xml",
            "UUID": "6a8f5ce4-6b5f-4a22-9d2b-0d1c6a0c7d9e",
            "URN": "urn:broadband-forum-org:tr-181-2-14-0",
            "Features": ["DNSServer", "Firewall"]
        }"#;
        let dm: SupportedDataModel = serde_json::from_str(json).unwrap();
        assert_eq!(dm.url.as_ref().unwrap().host_str(), Some("example.com"));
        assert_eq!(dm.features, ["DNSServer", "Firewall"]);
        assert!(dm.alias.is_empty());
    }

    #[test]
    fn vendor_file_builder_matches_assignment() {
        let built = VendorConfigFile::default()
            .with_name("voice.cfg")
            .with_use_for_backup_restore(true);
        let mut assigned = VendorConfigFile::default();
        assigned.name = "voice.cfg".to_owned();
        assigned.use_for_backup_restore = true;
        assert_eq!(built, assigned);
    }
}
