// ── SIP client objects ──
//
// VoiceService.{i}.SIP.Client.{i}: a SIP user agent registering with a
// network. The `Network` parameter names the SIP.Network instance the
// client uses; nothing here resolves that reference.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::model::common::{Origin, Status};
use crate::schema::{Constraint, display_parameter_value};

/// How a client registers.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum RegisterMode {
    #[default]
    #[serde(rename = "RFC3261")]
    #[strum(serialize = "RFC3261")]
    Rfc3261,
    #[serde(rename = "STATIC")]
    #[strum(serialize = "STATIC")]
    Static,
    #[serde(rename = "TISPAN")]
    #[strum(serialize = "TISPAN")]
    Tispan,
}

display_parameter_value!(RegisterMode);

cwmp_object! {
    /// SIP.Client.{i}.Contact.{i} -- one registered contact binding.
    pub struct ClientContact => "Contact" {
        enable: bool = false => "Enable", ReadWrite, Constraint::NONE, with_enable;
        status: Status = Status::Disabled => "Status", ReadOnly, Constraint::NONE, with_status;
        origin: Origin = Origin::Static => "Origin", ReadOnly, Constraint::NONE, with_origin;
        ip_address: String = String::new() => "IPAddress", ReadWrite, Constraint::size(45), with_ip_address;
        port: u32 = 0 => "Port", ReadWrite, Constraint::range(0, 65535), with_port;
        contact_uri: String = String::new() => "ContactURI", ReadWrite, Constraint::size(256), with_contact_uri;
        expire_time: Option<DateTime<Utc>> = None => "ExpireTime", ReadOnly, Constraint::NONE, with_expire_time;
        /// Seconds between OPTIONS keep-alives.
        ping_interval: u32 = 0 => "PingInterval", ReadWrite, Constraint::range(0, 65535), with_ping_interval;
        user_agent: String = String::new() => "UserAgent", ReadOnly, Constraint::size(256), with_user_agent;
    }
}

cwmp_object! {
    /// SIP.Client.{i}.EventSubscribe.{i} -- credentials for one event package.
    pub struct ClientEventSubscribe => "EventSubscribe" {
        enable: bool = false => "Enable", ReadWrite, Constraint::NONE, with_enable;
        event: String = String::new() => "Event", ReadWrite, Constraint::size(32), with_event;
        auth_user_name: String = String::new() => "AuthUserName", ReadWrite, Constraint::size(128), with_auth_user_name;
        auth_password: String = String::new() => "AuthPassword", Secret, Constraint::size(128), with_auth_password;
    }
}

cwmp_object! {
    /// SIP.Client.{i} -- a SIP user agent.
    pub struct Client => "Client" {
        enable: bool = false => "Enable", ReadWrite, Constraint::NONE, with_enable;
        /// Finish in-progress sessions but accept no new ones.
        quiescent_mode: bool = false => "QuiescentMode", ReadWrite, Constraint::NONE, with_quiescent_mode;
        status: Status = Status::Disabled => "Status", ReadOnly, Constraint::NONE, with_status;
        origin: Origin = Origin::Static => "Origin", ReadOnly, Constraint::NONE, with_origin;
        register_mode: RegisterMode = RegisterMode::Rfc3261 => "RegisterMode", ReadWrite, Constraint::one_of(&["RFC3261", "STATIC", "TISPAN"]), with_register_mode;
        auth_user_name: String = String::new() => "AuthUserName", ReadWrite, Constraint::size(128), with_auth_user_name;
        auth_password: String = String::new() => "AuthPassword", Secret, Constraint::size(128), with_auth_password;
        /// Path of the SIP.Network instance this client is associated with.
        network: String = String::new() => "Network", ReadWrite, Constraint::size(256), with_network;
        max_sessions: Option<u32> = None => "MaxSessions", ReadWrite, Constraint::min(0), with_max_sessions;
        register_uri: String = String::new() => "RegisterURI", ReadWrite, Constraint::size(389), with_register_uri;
        e164_format: bool = false => "E164Format", ReadWrite, Constraint::NONE, with_e164_format;
        t38_enable: bool = false => "T38Enable", ReadWrite, Constraint::NONE, with_t38_enable;
    }
    tables {
        contacts: Vec<ClientContact> => "Contact", with_contact;
        event_subscribes: Vec<ClientEventSubscribe> => "EventSubscribe", with_event_subscribe;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::schema::{Access, CwmpObject, flatten};

    #[test]
    fn builder_matches_assignments() {
        let built = Client::default()
            .with_enable(true)
            .with_max_sessions(5_u32)
            .with_register_uri("sip:alice@example.net");

        let mut assigned = Client::default();
        assigned.enable = true;
        assigned.max_sessions = Some(5);
        assigned.register_uri = "sip:alice@example.net".into();

        assert_eq!(built, assigned);
    }

    #[test]
    fn defaults_are_empty() {
        let client = Client::default();
        assert!(!client.enable);
        assert_eq!(client.status, Status::Disabled);
        assert_eq!(client.max_sessions, None);
        assert!(client.contacts.is_empty());
        assert!(client.event_subscribes.is_empty());
    }

    #[test]
    fn contacts_append_in_order() {
        let client = Client::default()
            .with_contact(ClientContact::default().with_port(5060_u32))
            .with_contact(ClientContact::default().with_port(5061_u32));
        let ports: Vec<u32> = client.contacts.iter().map(|c| c.port).collect();
        assert_eq!(ports, vec![5060, 5061]);
    }

    #[test]
    fn password_is_marked_secret() {
        let param = Client::parameter("AuthPassword").unwrap();
        assert_eq!(param.access, Access::Secret);
        assert_eq!(Client::parameter("Status").unwrap().access, Access::ReadOnly);
    }

    #[test]
    fn flatten_numbers_contacts_from_one() {
        let client = Client::default()
            .with_register_mode(RegisterMode::Static)
            .with_contact(ClientContact::default().with_contact_uri("sip:a@10.0.0.2"));
        let values = flatten("Client.1.", &client);

        let find = |path: &str| {
            values
                .iter()
                .find(|v| v.path == path)
                .map(|v| v.value.clone())
        };
        assert_eq!(find("Client.1.RegisterMode").as_deref(), Some("STATIC"));
        assert_eq!(find("Client.1.ContactNumberOfEntries").as_deref(), Some("1"));
        assert_eq!(
            find("Client.1.Contact.1.ContactURI").as_deref(),
            Some("sip:a@10.0.0.2")
        );
        assert_eq!(find("Client.1.MaxSessions").as_deref(), Some(""));
    }

    #[test]
    fn json_uses_cwmp_names() {
        let client = Client::default().with_enable(true).with_network("Device.Services.VoiceService.1.SIP.Network.1");
        let json = serde_json::to_value(&client).unwrap();
        assert_eq!(json["Enable"], serde_json::json!(true));
        assert_eq!(json["Network"], serde_json::json!("Device.Services.VoiceService.1.SIP.Network.1"));
        assert_eq!(json["Contact"], serde_json::json!([]));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let client: Client = serde_json::from_str(r#"{"Enable": true}"#).unwrap();
        assert!(client.enable);
        assert_eq!(client.register_mode, RegisterMode::Rfc3261);
    }
}
