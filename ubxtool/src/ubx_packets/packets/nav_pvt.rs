use std::fmt;

use bitflags::bitflags;

use crate::{
    error::ParserError,
    ubx_packets::{
        check_len,
        layout::{le_bitflags, round_to, ubx_layout},
        PayloadDecoder,
    },
};

/// GNSS fix type as reported by NAV-PVT, NAV-SOL and NAV-STATUS
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum GnssFixType {
    NoFix,
    DeadReckoningOnly,
    Fix2D,
    Fix3D,
    GPSPlusDeadReckoning,
    TimeOnlyFix,
    Unknown(u8),
}

impl From<u8> for GnssFixType {
    fn from(raw: u8) -> Self {
        match raw {
            0 => Self::NoFix,
            1 => Self::DeadReckoningOnly,
            2 => Self::Fix2D,
            3 => Self::Fix3D,
            4 => Self::GPSPlusDeadReckoning,
            5 => Self::TimeOnlyFix,
            other => Self::Unknown(other),
        }
    }
}

impl GnssFixType {
    /// Terse label used by the older NAV-SOL/NAV-STATUS messages
    pub fn short_label(self) -> &'static str {
        match self {
            Self::NoFix => "None",
            Self::DeadReckoningOnly => "Dead Reckoning",
            Self::Fix2D => "2D",
            Self::Fix3D => "3D",
            Self::GPSPlusDeadReckoning => "GPS+DR",
            Self::TimeOnlyFix => "Surveyed",
            Self::Unknown(_) => "Unk",
        }
    }
}

impl fmt::Display for GnssFixType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFix => f.write_str("no fix"),
            Self::DeadReckoningOnly => f.write_str("dead reckoning only"),
            Self::Fix2D => f.write_str("2D-fix"),
            Self::Fix3D => f.write_str("3D-fix"),
            Self::GPSPlusDeadReckoning => f.write_str("GNSS + dead reckoning combined"),
            Self::TimeOnlyFix => f.write_str("time only fix"),
            Self::Unknown(raw) => write!(f, "unknown fix type {}", raw),
        }
    }
}

bitflags! {
    /// Validity flags of `NavPvt`
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct NavPvtValidFlags: u8 {
        /// Valid UTC date
        const VALID_DATE = 0x01;
        /// Valid UTC time of day
        const VALID_TIME = 0x02;
        /// UTC time of day has been fully resolved (no seconds uncertainty)
        const FULLY_RESOLVED = 0x04;
        /// Valid magnetic declination
        const VALID_MAG = 0x08;
    }
}

bitflags! {
    /// Fix status flags of `NavPvt`
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct NavPvtFlags: u8 {
        /// Position and velocity valid and within DOP and accuracy masks
        const GNSS_FIX_OK = 0x01;
        /// Differential corrections were applied
        const DIFF_SOLN = 0x02;
        /// Heading of vehicle is valid
        const HEAD_VEH_VALID = 0x20;
        /// Carrier phase solution with floating ambiguities
        const CARR_SOLN_FLOAT = 0x40;
        /// Carrier phase solution with fixed ambiguities
        const CARR_SOLN_FIXED = 0x80;
    }
}

bitflags! {
    /// Additional flags of `NavPvt`
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct NavPvtFlags2: u8 {
        /// UTC date and time validity confirmation is available
        const CONFIRMED_AVAI = 0x20;
        /// UTC date validity could be confirmed
        const CONFIRMED_DATE = 0x40;
        /// UTC time of day could be confirmed
        const CONFIRMED_TIME = 0x80;
    }
}

le_bitflags! {
    NavPvtValidFlags: u8,
    NavPvtFlags: u8,
    NavPvtFlags2: u8,
}

/// Carrier phase range solution status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CarrierSolution {
    None,
    Float,
    Fixed,
}

ubx_layout! {
    /// Fields present since protocol 14
    pub struct NavPvtSolution [84] {
        /// GPS time of week of the navigation epoch, ms
        itow: u32 = 0,
        year: u16 = 4,
        month: u8 = 6,
        day: u8 = 7,
        hour: u8 = 8,
        min: u8 = 9,
        sec: u8 = 10,
        valid: NavPvtValidFlags = 11,
        /// Time accuracy estimate, ns
        t_acc: u32 = 12,
        /// Fraction of second, -1e9..1e9 ns
        nano: i32 = 16,
        fix_type: u8 = 20,
        flags: NavPvtFlags = 21,
        flags2: NavPvtFlags2 = 22,
        num_sv: u8 = 23,
        /// 1e-7 deg
        lon: i32 = 24,
        /// 1e-7 deg
        lat: i32 = 28,
        /// Height above ellipsoid, mm
        height: i32 = 32,
        /// Height above mean sea level, mm
        h_msl: i32 = 36,
        h_acc: u32 = 40,
        v_acc: u32 = 44,
        /// NED velocity, mm/s
        vel_n: i32 = 48,
        vel_e: i32 = 52,
        vel_d: i32 = 56,
        g_speed: i32 = 60,
        /// Heading of motion, 1e-5 deg
        head_mot: i32 = 64,
        s_acc: u32 = 68,
        head_acc: u32 = 72,
        /// 0.01 scale
        p_dop: u16 = 76,
        flags3: u16 = 78,
    }
}

impl NavPvtSolution {
    pub fn fix_type(&self) -> GnssFixType {
        GnssFixType::from(self.fix_type)
    }

    pub fn lon_degrees(&self) -> f64 {
        round_to(f64::from(self.lon) * 1e-7, 7)
    }

    pub fn lat_degrees(&self) -> f64 {
        round_to(f64::from(self.lat) * 1e-7, 7)
    }

    pub fn height_meters(&self) -> f64 {
        mm_to_m(f64::from(self.height))
    }

    pub fn height_msl(&self) -> f64 {
        mm_to_m(f64::from(self.h_msl))
    }

    pub fn horizontal_accuracy(&self) -> f64 {
        mm_to_m(f64::from(self.h_acc))
    }

    pub fn vertical_accuracy(&self) -> f64 {
        mm_to_m(f64::from(self.v_acc))
    }

    /// (north, east, down) in m/s
    pub fn velocity_ned(&self) -> (f64, f64, f64) {
        (
            mm_to_m(f64::from(self.vel_n)),
            mm_to_m(f64::from(self.vel_e)),
            mm_to_m(f64::from(self.vel_d)),
        )
    }

    pub fn ground_speed(&self) -> f64 {
        mm_to_m(f64::from(self.g_speed))
    }

    pub fn speed_accuracy(&self) -> f64 {
        mm_to_m(f64::from(self.s_acc))
    }

    pub fn heading_degrees(&self) -> f64 {
        round_to(f64::from(self.head_mot) * 1e-5, 5)
    }

    pub fn heading_accuracy(&self) -> f64 {
        round_to(f64::from(self.head_acc) * 1e-5, 5)
    }

    pub fn pdop(&self) -> f64 {
        round_to(f64::from(self.p_dop) * 1e-2, 2)
    }

    /// Power save mode state, bits 2..5 of `flags`
    pub fn psm_state(&self) -> u8 {
        (self.flags.bits() >> 2) & 0x07
    }

    pub fn carrier_solution(&self) -> CarrierSolution {
        if self.flags.contains(NavPvtFlags::CARR_SOLN_FIXED) {
            CarrierSolution::Fixed
        } else if self.flags.contains(NavPvtFlags::CARR_SOLN_FLOAT) {
            CarrierSolution::Float
        } else {
            CarrierSolution::None
        }
    }
}

ubx_layout! {
    /// Fields added with protocol 15
    pub struct NavPvtExtension [92] {
        /// Heading of vehicle, 1e-5 deg
        head_veh: i32 = 84,
        /// Magnetic declination, 1e-2 deg
        mag_dec: i16 = 88,
        /// Magnetic declination accuracy, 1e-2 deg
        mag_acc: u16 = 90,
    }
}

impl NavPvtExtension {
    pub fn heading_vehicle(&self) -> f64 {
        round_to(f64::from(self.head_veh) * 1e-5, 5)
    }

    pub fn magnetic_declination(&self) -> f64 {
        round_to(f64::from(self.mag_dec) * 1e-2, 2)
    }

    pub fn magnetic_declination_accuracy(&self) -> f64 {
        round_to(f64::from(self.mag_acc) * 1e-2, 2)
    }
}

/// Navigation Position Velocity Time Solution
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NavPvt {
    pub solution: NavPvtSolution,
    /// Present when the payload is at least 92 bytes long
    pub extension: Option<NavPvtExtension>,
}

impl PayloadDecoder for NavPvt {
    const NAME: &'static str = "UBX-NAV-PVT";

    fn decode(payload: &[u8]) -> Result<Self, ParserError> {
        check_len::<Self>(payload, NavPvtSolution::LEN)?;
        Ok(Self {
            solution: NavPvtSolution::read(payload, 0),
            extension: (payload.len() >= NavPvtExtension::LEN)
                .then(|| NavPvtExtension::read(payload, 0)),
        })
    }

    fn itow(&self) -> Option<u32> {
        Some(self.solution.itow)
    }
}

pub(crate) fn mm_to_m(value: f64) -> f64 {
    round_to(value * 1e-3, 3)
}

#[cfg(test)]
mod test {
    use super::*;

    fn pvt_payload(len: usize) -> Vec<u8> {
        let mut payload = vec![0u8; len];
        payload[0..4].copy_from_slice(&302_400_000u32.to_le_bytes());
        payload[4..6].copy_from_slice(&2024u16.to_le_bytes());
        payload[6..11].copy_from_slice(&[2, 29, 12, 30, 15]);
        payload[11] = 0x07;
        payload[20] = 3;
        payload[21] = 0x01 | 0x02 | 0x80 | (1 << 2);
        payload[22] = 0xe0;
        payload[23] = 17;
        payload[24..28].copy_from_slice(&(-741_234_567i32).to_le_bytes());
        payload[28..32].copy_from_slice(&407_654_321i32.to_le_bytes());
        payload[36..40].copy_from_slice(&12_345i32.to_le_bytes());
        payload[64..68].copy_from_slice(&18_012_345i32.to_le_bytes());
        payload[76..78].copy_from_slice(&123u16.to_le_bytes());
        payload
    }

    #[test]
    fn nav_pvt_protver14() {
        let pvt = NavPvt::decode(&pvt_payload(84)).unwrap();
        let sol = &pvt.solution;
        assert_eq!(pvt.itow(), Some(302_400_000));
        assert_eq!(sol.fix_type(), GnssFixType::Fix3D);
        assert_eq!(sol.fix_type().to_string(), "3D-fix");
        assert_eq!(sol.lon_degrees(), -74.1234567);
        assert_eq!(sol.lat_degrees(), 40.7654321);
        assert_eq!(sol.height_msl(), 12.345);
        assert_eq!(sol.heading_degrees(), 180.12345);
        assert_eq!(sol.pdop(), 1.23);
        assert!(sol.valid.contains(NavPvtValidFlags::VALID_DATE | NavPvtValidFlags::VALID_TIME));
        assert!(sol.flags.contains(NavPvtFlags::GNSS_FIX_OK | NavPvtFlags::DIFF_SOLN));
        assert_eq!(sol.psm_state(), 1);
        assert_eq!(sol.carrier_solution(), CarrierSolution::Fixed);
        assert!(sol.flags2.contains(NavPvtFlags2::CONFIRMED_AVAI | NavPvtFlags2::CONFIRMED_TIME));
        assert_eq!(pvt.extension, None);
    }

    #[test]
    fn nav_pvt_extension_at_84() {
        let mut payload = pvt_payload(92);
        payload[84..88].copy_from_slice(&9_000_000i32.to_le_bytes());
        payload[88..90].copy_from_slice(&(-1234i16).to_le_bytes());
        payload[90..92].copy_from_slice(&56u16.to_le_bytes());
        let ext = NavPvt::decode(&payload).unwrap().extension.unwrap();
        assert_eq!(ext.heading_vehicle(), 90.0);
        assert_eq!(ext.magnetic_declination(), -12.34);
        assert_eq!(ext.magnetic_declination_accuracy(), 0.56);
    }

    #[test]
    fn nav_pvt_short() {
        assert_eq!(
            NavPvt::decode(&[0; 83]),
            Err(ParserError::BadLength {
                packet: "UBX-NAV-PVT",
                min: 84,
                got: 83
            })
        );
    }
}
