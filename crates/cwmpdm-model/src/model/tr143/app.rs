// ── Queue-management application entries ──

use crate::model::common::EnableStatus;
use crate::schema::{Constraint, Invariant};

cwmp_object! {
    /// QueueManagement.App.{i} -- default handling for traffic an
    /// application-aware classifier hands over by protocol URN.
    ///
    /// Integer references use -1 for "not set"; the DSCP and Ethernet
    /// priority marks additionally accept -2 ("derive automatically").
    pub struct App => "App" {
        app_key: u32 = 0 => "AppKey", ReadOnly, Constraint::NONE, with_app_key;
        app_enable: bool = false => "AppEnable", ReadWrite, Constraint::NONE, with_app_enable;
        app_status: EnableStatus = EnableStatus::Disabled => "AppStatus", ReadOnly, Constraint::NONE, with_app_status;
        /// URN of the protocol handled by this entry.
        protocol_identifier: String = String::new() => "ProtocolIdentifier", ReadWrite, Constraint::size(256), with_protocol_identifier;
        app_name: String = String::new() => "AppName", ReadWrite, Constraint::size(64), with_app_name;
        app_default_forwarding_policy: u32 = 0 => "AppDefaultForwardingPolicy", ReadWrite, Constraint::NONE, with_app_default_forwarding_policy;
        app_default_traffic_class: i32 = -1 => "AppDefaultTrafficClass", ReadWrite, Constraint::min(-1), with_app_default_traffic_class;
        app_default_policer: i32 = -1 => "AppDefaultPolicer", ReadWrite, Constraint::min(-1), with_app_default_policer;
        app_default_queue: i32 = -1 => "AppDefaultQueue", ReadWrite, Constraint::min(-1), with_app_default_queue;
        app_default_dscp_mark: i32 = -1 => "AppDefaultDSCPMark", ReadWrite, Constraint::min(-2), with_app_default_dscp_mark;
        app_default_ethernet_priority_mark: i32 = -1 => "AppDefaultEthernetPriorityMark", ReadWrite, Constraint::min(-2), with_app_default_ethernet_priority_mark;
    }
    invariants [Invariant::Unique(&["AppKey"])]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::common::{AUTO, UNUSED};

    #[test]
    fn references_default_to_unused() {
        let app = App::default();
        assert_eq!(app.app_default_queue, UNUSED);
        assert_eq!(app.app_default_policer, UNUSED);
        assert_eq!(app.app_default_dscp_mark, UNUSED);
    }

    #[test]
    fn marks_accept_auto() {
        let app = App::default().with_app_default_dscp_mark(AUTO);
        assert_eq!(app.app_default_dscp_mark, -2);
    }
}
