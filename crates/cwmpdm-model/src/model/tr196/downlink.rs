// ── Downlink PHY: antenna ports, PDSCH, positioning reference signal ──

use crate::schema::Constraint;

cwmp_object! {
    /// PHY.AntennaInfo
    pub struct AntennaInfo => "AntennaInfo" {
        /// Cell-specific antenna ports (36.331 antennaPortsCount).
        antenna_ports_count: u32 = 1 => "AntennaPortsCount", ReadWrite, Constraint::one_of(&["1", "2", "4"]), with_antenna_ports_count;
    }
}

cwmp_object! {
    /// PHY.PDSCH -- power allocation of the shared downlink channel.
    pub struct Pdsch => "PDSCH" {
        /// Ratio index of PDSCH EPRE in symbols with and without reference signal.
        pb: u32 = 0 => "Pb", ReadWrite, Constraint::range(0, 3), with_pb;
        /// dB offset of PDSCH EPRE to the reference signal; one of
        /// -6, -4.77, -3, -1.77, 0, 1, 2, 3 carried in its integer form.
        pa: i32 = 0 => "PA", ReadWrite, Constraint::range(-6, 3), with_pa;
    }
}

cwmp_object! {
    /// PHY.PRS -- positioning reference signal (36.355).
    pub struct Prs => "PRS" {
        num_prs_resource_blocks: u32 = 6 => "NumPRSResourceBlocks", ReadWrite, Constraint::one_of(&["6", "15", "25", "50", "75", "100"]), with_num_prs_resource_blocks;
        prs_configuration_index: u32 = 0 => "PRSConfigurationIndex", ReadWrite, Constraint::range(0, 4095), with_prs_configuration_index;
        num_consecutive_prs_subframes: u32 = 1 => "NumConsecutivePRSSubframes", ReadWrite, Constraint::one_of(&["1", "2", "4", "6"]), with_num_consecutive_prs_subframes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::CwmpObject;

    #[test]
    fn cwmp_names_are_uppercase_acronyms() {
        assert_eq!(Pdsch::NAME, "PDSCH");
        assert_eq!(Prs::NAME, "PRS");
        assert!(Pdsch::parameter("PA").is_some());
    }

    #[test]
    fn defaults() {
        assert_eq!(AntennaInfo::default().antenna_ports_count, 1);
        assert_eq!(Prs::default().num_prs_resource_blocks, 6);
    }
}
