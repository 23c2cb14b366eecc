//! GNSS and UTC time solutions (NAV-TIME*)

use bitflags::bitflags;

use crate::ubx_packets::{
    itow_decoder,
    layout::{le_bitflags, ubx_layout},
};

bitflags! {
    /// Validity of a GNSS time solution
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct NavTimeValidFlags: u8 {
        const TOW_VALID = 0x01;
        const WEEK_VALID = 0x02;
        const LEAP_VALID = 0x04;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct NavTimeGloValidFlags: u8 {
        const TOD_VALID = 0x01;
        const DATE_VALID = 0x02;
    }
}

bitflags! {
    /// Validity of NAV-TIMEUTC. The upper nibble holds the UTC standard,
    /// see [`NavTimeUtc::utc_standard`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct NavTimeUtcFlags: u8 {
        const VALID_TOW = 0x01;
        const VALID_WKN = 0x02;
        const VALID_UTC = 0x04;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct NavTimeLsFlags: u8 {
        const VALID_CURR_LS = 0x01;
        const VALID_TIME_TO_LS_EVENT = 0x02;
    }
}

le_bitflags! {
    NavTimeValidFlags: u8,
    NavTimeGloValidFlags: u8,
    NavTimeUtcFlags: u8,
    NavTimeLsFlags: u8,
}

ubx_layout! {
    /// BeiDou Time Solution
    pub struct NavTimeBds [20] {
        itow: u32 = 0,
        /// BDS time of week, s
        sow: u32 = 4,
        /// Fraction of SOW, ns
        f_sow: i32 = 8,
        week: i16 = 12,
        leap_s: i8 = 14,
        valid: NavTimeValidFlags = 15,
        t_acc: u32 = 16,
    }
}

ubx_layout! {
    /// Galileo Time Solution
    pub struct NavTimeGal [20] {
        itow: u32 = 0,
        gal_tow: u32 = 4,
        f_gal_tow: i32 = 8,
        gal_wno: i16 = 12,
        leap_s: i8 = 14,
        valid: NavTimeValidFlags = 15,
        t_acc: u32 = 16,
    }
}

ubx_layout! {
    /// GLONASS Time Solution
    pub struct NavTimeGlo [20] {
        itow: u32 = 0,
        /// GLONASS time of day, s
        tod: u32 = 4,
        f_tod: i32 = 8,
        /// Day within the four-year period
        nt: u16 = 12,
        /// Four-year interval number since 1996
        n4: u8 = 14,
        valid: NavTimeGloValidFlags = 15,
        t_acc: u32 = 16,
    }
}

ubx_layout! {
    /// GPS Time Solution
    pub struct NavTimeGps [16] {
        itow: u32 = 0,
        f_tow: i32 = 4,
        week: i16 = 8,
        leap_s: i8 = 10,
        valid: NavTimeValidFlags = 11,
        t_acc: u32 = 12,
    }
}

ubx_layout! {
    /// Leap second event information
    pub struct NavTimeLs [24] {
        itow: u32 = 0,
        version: u8 = 4,
        src_of_curr_ls: u8 = 8,
        /// Current number of leap seconds since 1980-01-06
        curr_ls: i8 = 9,
        src_of_ls_change: u8 = 10,
        ls_change: i8 = 11,
        /// s
        time_to_ls_event: i32 = 12,
        date_of_ls_gps_wn: u16 = 16,
        date_of_ls_gps_dn: u16 = 18,
        valid: NavTimeLsFlags = 23,
    }
}

ubx_layout! {
    /// UTC Time Solution
    pub struct NavTimeUtc [20] {
        itow: u32 = 0,
        t_acc: u32 = 4,
        nano: i32 = 8,
        year: u16 = 12,
        month: u8 = 14,
        day: u8 = 15,
        hour: u8 = 16,
        min: u8 = 17,
        sec: u8 = 18,
        valid: NavTimeUtcFlags = 19,
    }
}

impl NavTimeUtc {
    pub fn utc_standard(&self) -> u8 {
        self.valid.bits() >> 4
    }

    pub fn utc_standard_label(&self) -> &'static str {
        match self.utc_standard() {
            1 => "CRL",
            2 => "NIST",
            3 => "USNO",
            4 => "BIPM",
            5 => "tbd",
            6 => "SU",
            7 => "NTSC",
            _ => "n/a",
        }
    }
}

itow_decoder! {
    NavTimeBds => "UBX-NAV-TIMEBDS",
    NavTimeGal => "UBX-NAV-TIMEGAL",
    NavTimeGlo => "UBX-NAV-TIMEGLO",
    NavTimeGps => "UBX-NAV-TIMEGPS",
    NavTimeLs => "UBX-NAV-TIMELS",
    NavTimeUtc => "UBX-NAV-TIMEUTC",
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ubx_packets::PayloadDecoder;

    #[test]
    fn timegps_fields() {
        let mut payload = vec![0u8; 16];
        payload[0..4].copy_from_slice(&345_600_000u32.to_le_bytes());
        payload[8..10].copy_from_slice(&2295i16.to_le_bytes());
        payload[10] = 18;
        payload[11] = 0x07;
        let gps = NavTimeGps::decode(&payload).unwrap();
        assert_eq!(gps.itow(), Some(345_600_000));
        assert_eq!(gps.week, 2295);
        assert_eq!(gps.leap_s, 18);
        assert!(gps.valid.is_all());
    }

    #[test]
    fn timegal_valid_byte() {
        let mut payload = vec![0u8; 20];
        payload[15] = 0x03;
        payload[16..20].copy_from_slice(&7u32.to_le_bytes());
        let gal = NavTimeGal::decode(&payload).unwrap();
        assert_eq!(gal.valid, NavTimeValidFlags::TOW_VALID | NavTimeValidFlags::WEEK_VALID);
        assert_eq!(gal.t_acc, 7);
    }

    #[test]
    fn timeutc_standard() {
        let mut payload = vec![0u8; 20];
        payload[12..14].copy_from_slice(&2024u16.to_le_bytes());
        payload[19] = 0x37;
        let utc = NavTimeUtc::decode(&payload).unwrap();
        assert!(utc.valid.contains(NavTimeUtcFlags::VALID_UTC));
        assert_eq!(utc.utc_standard_label(), "USNO");
        assert!(NavTimeUtc::decode(&payload[..19]).is_err());
    }

    #[test]
    fn timels_offsets() {
        let mut payload = vec![0u8; 24];
        payload[9] = 18;
        payload[11] = (-1i8) as u8;
        payload[12..16].copy_from_slice(&86_400i32.to_le_bytes());
        payload[23] = 0x03;
        let ls = NavTimeLs::decode(&payload).unwrap();
        assert_eq!((ls.curr_ls, ls.ls_change, ls.time_to_ls_event), (18, -1, 86_400));
        assert!(ls.valid.contains(NavTimeLsFlags::VALID_CURR_LS));
    }
}
