// ── TR-143 / TR-098 queue management ──
//
// InternetGatewayDevice.QueueManagement. -- classifiers, application
// handlers and policers, plus the defaults applied to unclassified traffic.

pub mod app;
pub mod classification;
pub mod policer;

pub use app::App;
pub use classification::{Classification, VendorClassIdMode};
pub use policer::{MeterType, Policer};

use crate::schema::Constraint;

cwmp_object! {
    /// QueueManagement -- root of a queue-management document.
    ///
    /// The `Default*` parameters apply to traffic no classifier matched.
    pub struct QueueManagement => "QueueManagement" {
        enable: bool = false => "Enable", ReadWrite, Constraint::NONE, with_enable;
        max_queues: u32 = 0 => "MaxQueues", ReadOnly, Constraint::NONE, with_max_queues;
        max_classification_entries: u32 = 0 => "MaxClassificationEntries", ReadOnly, Constraint::NONE, with_max_classification_entries;
        max_app_entries: u32 = 0 => "MaxAppEntries", ReadOnly, Constraint::NONE, with_max_app_entries;
        max_flow_entries: u32 = 0 => "MaxFlowEntries", ReadOnly, Constraint::NONE, with_max_flow_entries;
        max_policer_entries: u32 = 0 => "MaxPolicerEntries", ReadOnly, Constraint::NONE, with_max_policer_entries;
        max_queue_entries: u32 = 0 => "MaxQueueEntries", ReadOnly, Constraint::NONE, with_max_queue_entries;
        default_forwarding_policy: u32 = 0 => "DefaultForwardingPolicy", ReadWrite, Constraint::NONE, with_default_forwarding_policy;
        default_traffic_class: i32 = -1 => "DefaultTrafficClass", ReadWrite, Constraint::min(-1), with_default_traffic_class;
        default_policer: i32 = -1 => "DefaultPolicer", ReadWrite, Constraint::min(-1), with_default_policer;
        default_queue: u32 = 0 => "DefaultQueue", ReadWrite, Constraint::NONE, with_default_queue;
        default_dscp_mark: i32 = -1 => "DefaultDSCPMark", ReadWrite, Constraint::min(-2), with_default_dscp_mark;
        default_ethernet_priority_mark: i32 = -1 => "DefaultEthernetPriorityMark", ReadWrite, Constraint::min(-2), with_default_ethernet_priority_mark;
    }
    lists {
        /// Protocol URNs the device can hand to an `App` entry.
        available_app_list: Vec<String> => "AvailableAppList", ReadOnly, Constraint::size(1024), with_available_app;
    }
    tables {
        classifications: Vec<Classification> => "Classification", with_classification;
        apps: Vec<App> => "App", with_app;
        policers: Vec<Policer> => "Policer", with_policer;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{CwmpObject, flatten};

    #[test]
    fn tables_are_counted_before_entries() {
        let qm = QueueManagement::default()
            .with_policer(Policer::default().with_policer_key(1_u32))
            .with_policer(Policer::default().with_policer_key(2_u32));
        let paths: Vec<String> = flatten("QueueManagement.", &qm)
            .into_iter()
            .map(|v| v.path)
            .filter(|p| p.starts_with("QueueManagement.Policer"))
            .take(3)
            .collect();
        assert_eq!(
            paths,
            [
                "QueueManagement.PolicerNumberOfEntries",
                "QueueManagement.Policer.1.PolicerKey",
                "QueueManagement.Policer.1.PolicerEnable",
            ]
        );
    }

    #[test]
    fn children_in_declaration_order() {
        let names: Vec<_> = QueueManagement::children().iter().map(|c| c.name).collect();
        assert_eq!(names, ["Classification", "App", "Policer"]);
        assert!(QueueManagement::children().iter().all(|c| c.table));
    }
}
