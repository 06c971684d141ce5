// ── SIP registrar objects ──
//
// VoiceService.{i}.SIP.Registrar.{i}: a registrar hosted on the device,
// with the accounts allowed to register against it.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::client::ClientContact;
use crate::model::common::{Origin, Status};
use crate::schema::{Constraint, Invariant, display_parameter_value};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum CallStatus {
    #[default]
    Idle,
    Dialing,
    Delivered,
    Connected,
    Alerting,
    Disconnected,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum RegistrationStatus {
    Registered,
    #[default]
    Unregistered,
}

display_parameter_value!(CallStatus, RegistrationStatus);

cwmp_object! {
    /// SIP.Registrar.{i}.Account.{i}
    pub struct RegistrarAccount => "Account" {
        enable: bool = false => "Enable", ReadWrite, Constraint::NONE, with_enable;
        quiescent_mode: bool = false => "QuiescentMode", ReadWrite, Constraint::NONE, with_quiescent_mode;
        status: Status = Status::Disabled => "Status", ReadOnly, Constraint::NONE, with_status;
        origin: Origin = Origin::Static => "Origin", ReadOnly, Constraint::NONE, with_origin;
        call_status: CallStatus = CallStatus::Idle => "CallStatus", ReadOnly, Constraint::NONE, with_call_status;
        auth_user_name: String = String::new() => "AuthUserName", ReadWrite, Constraint::size(128), with_auth_user_name;
        auth_password: String = String::new() => "AuthPassword", Secret, Constraint::size(128), with_auth_password;
        registration_status: RegistrationStatus = RegistrationStatus::Unregistered => "RegistrationStatus", ReadOnly, Constraint::NONE, with_registration_status;
        uri: String = String::new() => "URI", ReadWrite, Constraint::size(389), with_uri;
        domain: String = String::new() => "Domain", ReadWrite, Constraint::size(256), with_domain;
        voip_profile: String = String::new() => "VoIPProfile", ReadWrite, Constraint::size(256), with_voip_profile;
    }
    lists {
        codec_list: Vec<String> => "CodecList", ReadWrite, Constraint::size(256), with_codec;
    }
    tables {
        contacts: Vec<ClientContact> => "Contact", with_contact;
    }
    invariants [Invariant::Unique(&["URI"])]
}

cwmp_object! {
    /// SIP.Registrar.{i}
    pub struct Registrar => "Registrar" {
        enable: bool = false => "Enable", ReadWrite, Constraint::NONE, with_enable;
        quiescent_mode: bool = false => "QuiescentMode", ReadWrite, Constraint::NONE, with_quiescent_mode;
        status: Status = Status::Disabled => "Status", ReadOnly, Constraint::NONE, with_status;
        origin: Origin = Origin::Static => "Origin", ReadOnly, Constraint::NONE, with_origin;
        registrar_ip_address: String = String::new() => "RegistrarIPAddress", ReadWrite, Constraint::size(45), with_registrar_ip_address;
        registrar_port: u32 = 5060 => "RegistrarPort", ReadWrite, Constraint::range(0, 65535), with_registrar_port;
        register_expires: u32 = 3600 => "RegisterExpires", ReadWrite, Constraint::min(1), with_register_expires;
        /// Seconds between OPTIONS pings to registered contacts.
        ping_interval: u32 = 0 => "PingInterval", ReadWrite, Constraint::range(0, 65535), with_ping_interval;
        organization: String = String::new() => "Organization", ReadWrite, Constraint::size(256), with_organization;
        realm: String = String::new() => "Realm", ReadWrite, Constraint::size(256), with_realm;
        voip_profile: String = String::new() => "VoIPProfile", ReadWrite, Constraint::size(256), with_voip_profile;
        contact_uri: String = String::new() => "ContactURI", ReadWrite, Constraint::size(256), with_contact_uri;
    }
    tables {
        accounts: Vec<RegistrarAccount> => "Account", with_account;
    }
    invariants [Invariant::Unique(&["RegistrarIPAddress", "RegistrarPort"])]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::schema::{CwmpObject, flatten};

    #[test]
    fn nested_tables_flatten_with_both_indices() {
        let registrar = Registrar::default().with_account(
            RegistrarAccount::default()
                .with_uri("sip:100@pbx.local")
                .with_contact(ClientContact::default().with_port(5070_u32)),
        );
        let values = flatten("Registrar.2.", &registrar);
        let port = values
            .iter()
            .find(|v| v.path == "Registrar.2.Account.1.Contact.1.Port")
            .unwrap();
        assert_eq!(port.value, "5070");
    }

    #[test]
    fn account_reuses_contact_schema() {
        let child = RegistrarAccount::children()
            .iter()
            .find(|c| c.name == "Contact")
            .unwrap();
        assert!(child.table);
        assert_eq!(child.object, ClientContact::NAME);
        assert_eq!((child.parameters)(), ClientContact::parameters());
    }
}
