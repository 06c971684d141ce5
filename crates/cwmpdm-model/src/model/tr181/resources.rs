// ── Hardware resources: memory, processors, TCP stack ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::schema::{Constraint, display_parameter_value};

/// CPU architecture as reported in `Processor.Architecture`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Architecture {
    #[default]
    Arm,
    I386,
    M68010,
    M68k,
    Mipseb,
    Mipsel,
    Powerpc,
    Sh3eb,
    Sh3el,
    #[serde(rename = "x86_64")]
    #[strum(serialize = "x86_64")]
    Amd64,
}

/// TCP congestion-control flavour.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum TcpImplementation {
    Tahoe,
    Reno,
    #[default]
    #[serde(rename = "New Reno")]
    #[strum(serialize = "New Reno")]
    NewReno,
    Vegas,
    Cubic,
    #[serde(rename = "BBR")]
    #[strum(serialize = "BBR")]
    Bbr,
}

display_parameter_value!(Architecture, TcpImplementation);

const ARCHITECTURES: &[&str] = &[
    "arm", "i386", "m68010", "m68k", "mipseb", "mipsel", "powerpc", "sh3eb", "sh3el", "x86_64",
];
const TCP_IMPLEMENTATIONS: &[&str] = &["Tahoe", "Reno", "New Reno", "Vegas", "Cubic", "BBR"];

cwmp_object! {
    /// DeviceInfo.MemoryStatus (kibibytes).
    pub struct MemoryStatus => "MemoryStatus" {
        total: u32 = 0 => "Total", ReadOnly, Constraint::NONE, with_total;
        free: u32 = 0 => "Free", ReadOnly, Constraint::NONE, with_free;
    }
}

impl MemoryStatus {
    /// Memory in use, saturating at zero if the counters disagree.
    pub fn used(&self) -> u32 {
        self.total.saturating_sub(self.free)
    }
}

cwmp_object! {
    /// DeviceInfo.NetworkProperties
    pub struct NetworkProperties => "NetworkProperties" {
        /// Bytes.
        max_tcp_window_size: u32 = 0 => "MaxTCPWindowSize", ReadOnly, Constraint::NONE, with_max_tcp_window_size;
    }
    lists {
        tcp_implementation: Vec<TcpImplementation> => "TCPImplementation", ReadOnly, Constraint::one_of(TCP_IMPLEMENTATIONS), with_tcp_implementation;
    }
}

cwmp_object! {
    /// DeviceInfo.Processor.{i}
    pub struct Processor => "Processor" {
        alias: String = String::new() => "Alias", ReadWrite, Constraint::size(64), with_alias;
        architecture: Architecture = Architecture::Arm => "Architecture", ReadOnly, Constraint::one_of(ARCHITECTURES), with_architecture;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::schema::flatten;

    #[test]
    fn used_memory_saturates() {
        let mem = MemoryStatus::default().with_total(1024_u32).with_free(256_u32);
        assert_eq!(mem.used(), 768);
        let odd = MemoryStatus::default().with_free(10_u32);
        assert_eq!(odd.used(), 0);
    }

    #[test]
    fn architecture_names_are_lowercase() {
        assert_eq!(Architecture::Amd64.to_string(), "x86_64");
        assert_eq!(Architecture::Mipsel.to_string(), "mipsel");
        assert_eq!("powerpc".parse::<Architecture>().unwrap(), Architecture::Powerpc);
    }

    #[test]
    fn tcp_implementations_flatten_with_spaces() {
        let props = NetworkProperties::default()
            .with_tcp_implementation(TcpImplementation::NewReno)
            .with_tcp_implementation(TcpImplementation::Cubic);
        let values = flatten("", &props);
        assert_eq!(values[1].path, "TCPImplementation");
        assert_eq!(values[1].value, "New Reno,Cubic");
    }
}
