// ── Frame structure: TDD configuration and MBSFN subframes ──

use crate::schema::Constraint;

cwmp_object! {
    /// PHY.TDDFrame -- only meaningful for TDD cells.
    pub struct TddFrame => "TDDFrame" {
        /// Uplink/downlink configuration 0..6 (36.211 table 4.2-2).
        sub_frame_assignment: u32 = 0 => "SubFrameAssignment", ReadWrite, Constraint::range(0, 6), with_sub_frame_assignment;
        special_subframe_patterns: u32 = 0 => "SpecialSubframePatterns", ReadWrite, Constraint::range(0, 8), with_special_subframe_patterns;
    }
}

cwmp_object! {
    /// PHY.MBSFN.SFConfigList.{i}
    pub struct MbsfnSfConfig => "SFConfigList" {
        enable: bool = false => "Enable", ReadWrite, Constraint::NONE, with_enable;
        sync_stratum_id: u32 = 0 => "SyncStratumID", ReadWrite, Constraint::NONE, with_sync_stratum_id;
        /// Radio frames; one of 1, 2, 4, 8, 16, 32.
        radio_frame_allocation_period: u32 = 1 => "RadioFrameAllocationPeriod", ReadWrite, Constraint::one_of(&["1", "2", "4", "8", "16", "32"]), with_radio_frame_allocation_period;
        radioframe_allocation_offset: u32 = 0 => "RadioframeAllocationOffset", ReadWrite, Constraint::range(0, 7), with_radioframe_allocation_offset;
        radio_frame_allocation_size: u32 = 1 => "RadioFrameAllocationSize", ReadWrite, Constraint::one_of(&["1", "4"]), with_radio_frame_allocation_size;
        /// Bitmap of MBSFN subframes: 6 bits for a one-frame allocation,
        /// 24 bits for four frames.
        sub_frame_allocations: u32 = 0 => "SubFrameAllocations", ReadWrite, Constraint::range(0, 0x00FF_FFFF), with_sub_frame_allocations;
    }
}

cwmp_object! {
    /// PHY.MBSFN
    pub struct Mbsfn => "MBSFN" {
        neigh_cell_config: u32 = 0 => "NeighCellConfig", ReadWrite, Constraint::range(0, 3), with_neigh_cell_config;
    }
    tables {
        sf_config_list: Vec<MbsfnSfConfig> => "SFConfigList", with_sf_config;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::schema::{CwmpObject, flatten};

    #[test]
    fn sf_config_entries_are_indexed() {
        let mbsfn = Mbsfn::default()
            .with_sf_config(MbsfnSfConfig::default().with_sync_stratum_id(1_u32))
            .with_sf_config(MbsfnSfConfig::default().with_sync_stratum_id(2_u32));
        let values = flatten("PHY.MBSFN.", &mbsfn);
        assert_eq!(values[1].path, "PHY.MBSFN.SFConfigListNumberOfEntries");
        assert_eq!(values[1].value, "2");
        let second = values
            .iter()
            .find(|v| v.path == "PHY.MBSFN.SFConfigList.2.SyncStratumID")
            .unwrap();
        assert_eq!(second.value, "2");
    }

    #[test]
    fn allocation_bitmap_bound_is_24_bits() {
        let param = MbsfnSfConfig::parameter("SubFrameAllocations").unwrap();
        assert_eq!(param.constraint.to_string(), "[0:16777215]");
    }
}
