use bitflags::bitflags;

use crate::{
    error::ParserError,
    ubx_packets::{
        check_len, itow_decoder,
        layout::{le_bitflags, read_blocks, round_to, ubx_layout},
        PayloadDecoder,
    },
};

use super::{gnss_label, nav_pvt::mm_to_m, GnssFixType};

/// Decoders for a fixed header followed by repeated blocks
macro_rules! block_decoder {
    ($($ty:ident($header:ident, $block:ident) => $name:literal),* $(,)?) => {
        $(
            impl PayloadDecoder for $ty {
                const NAME: &'static str = $name;

                fn decode(payload: &[u8]) -> Result<Self, ParserError> {
                    check_len::<Self>(payload, $header::LEN)?;
                    Ok(Self {
                        header: $header::read(payload, 0),
                        blocks: read_blocks(payload, $header::LEN, $block::LEN, |b| $block::read(b, 0)),
                    })
                }

                fn itow(&self) -> Option<u32> {
                    Some(self.header.itow)
                }
            }
        )*
    };
}

bitflags! {
    /// Fix status flags of the older NAV-SOL and NAV-STATUS messages
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct NavStatusFlags: u8 {
        /// Position and velocity valid and within DOP and accuracy masks
        const GPS_FIX_OK = 0x01;
        /// Differential corrections were applied
        const DIFF_SOLN = 0x02;
        /// Valid GPS week number
        const WKN_SET = 0x04;
        /// Valid GPS time of week
        const TOW_SET = 0x08;
    }
}

bitflags! {
    /// Per-satellite flags of NAV-SAT. The quality, health and orbit source
    /// fields are multi-bit and read through [`NavSatSv`] methods.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct NavSatSvFlags: u32 {
        const SV_USED = 0x08;
        const DIFF_CORR = 0x40;
        const SMOOTHED = 0x80;
        const EPH_AVAIL = 0x800;
        const ALM_AVAIL = 0x1000;
        const ANO_AVAIL = 0x2000;
        const AOP_AVAIL = 0x4000;
        const SBAS_CORR_USED = 0x1_0000;
        const RTCM_CORR_USED = 0x2_0000;
        const SLAS_CORR_USED = 0x4_0000;
        const SPARTN_CORR_USED = 0x8_0000;
        const PR_CORR_USED = 0x10_0000;
        const CR_CORR_USED = 0x20_0000;
        const DO_CORR_USED = 0x40_0000;
    }
}

bitflags! {
    /// SBAS services
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct SbasService: u8 {
        const RANGING = 0x01;
        const CORRECTIONS = 0x02;
        const INTEGRITY = 0x04;
        const TESTMODE = 0x08;
    }
}

bitflags! {
    /// Per-channel flags of NAV-SVINFO
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct NavSvinfoFlags: u8 {
        const SV_USED = 0x01;
        const DIFF_CORR = 0x02;
        const ORBIT_AVAIL = 0x04;
        const ORBIT_EPH = 0x08;
        const UNHEALTHY = 0x10;
        const ORBIT_ALM = 0x20;
        const ORBIT_AOP = 0x40;
        const SMOOTHED = 0x80;
    }
}

le_bitflags! {
    NavStatusFlags: u8,
    NavSatSvFlags: u32,
    SbasService: u8,
    NavSvinfoFlags: u8,
}

ubx_layout! {
    /// Clock Solution
    pub struct NavClock [20] {
        itow: u32 = 0,
        /// Clock bias, ns
        clk_b: i32 = 4,
        /// Clock drift, ns/s
        clk_d: i32 = 8,
        t_acc: u32 = 12,
        f_acc: u32 = 16,
    }
}

ubx_layout! {
    pub struct NavDgpsHeader [16] {
        itow: u32 = 0,
        /// Age of newest correction data, ms
        age: i32 = 4,
        base_id: i16 = 8,
        base_health: i16 = 10,
        num_ch: u8 = 12,
        /// 0 none, 1 PR+PRR correction
        status: u8 = 13,
    }
}

ubx_layout! {
    pub struct NavDgpsChannel [12] {
        svid: u8 = 0,
        flags: u8 = 1,
        age_c: u16 = 2,
        /// Pseudorange correction, m
        prc: f32 = 4,
        /// Pseudorange rate correction, m/s
        prrc: f32 = 8,
    }
}

/// DGPS Data used for NAV
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NavDgps {
    pub header: NavDgpsHeader,
    pub blocks: Vec<NavDgpsChannel>,
}

ubx_layout! {
    /// Dilution of precision, all values scaled by 0.01
    pub struct NavDop [18] {
        itow: u32 = 0,
        g_dop: u16 = 4,
        p_dop: u16 = 6,
        t_dop: u16 = 8,
        v_dop: u16 = 10,
        h_dop: u16 = 12,
        n_dop: u16 = 14,
        e_dop: u16 = 16,
    }
}

impl NavDop {
    /// (gDOP, pDOP, tDOP, vDOP, hDOP, nDOP, eDOP)
    pub fn scaled(&self) -> [f64; 7] {
        [
            self.g_dop, self.p_dop, self.t_dop, self.v_dop, self.h_dop, self.n_dop, self.e_dop,
        ]
        .map(|dop| round_to(f64::from(dop) * 1e-2, 2))
    }
}

ubx_layout! {
    /// End Of Epoch
    pub struct NavEoe [4] {
        itow: u32 = 0,
    }
}

ubx_layout! {
    pub struct NavGeofenceHeader [8] {
        itow: u32 = 0,
        version: u8 = 4,
        /// 0 not available, 1 active
        status: u8 = 5,
        num_fences: u8 = 6,
        comb_state: u8 = 7,
    }
}

ubx_layout! {
    pub struct NavGeofenceFence [2] {
        state: u8 = 0,
        reserved1: u8 = 1,
    }
}

/// Inside/outside label of a geofence state byte
pub fn fence_state_label(state: u8) -> &'static str {
    match state {
        1 => "Inside",
        2 => "Outside",
        _ => "Unknown",
    }
}

/// Geofencing status
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NavGeofence {
    pub header: NavGeofenceHeader,
    pub blocks: Vec<NavGeofenceFence>,
}

ubx_layout! {
    /// High Precision Position Solution in ECEF
    pub struct NavHpPosEcef [28] {
        version: u8 = 0,
        itow: u32 = 4,
        /// cm
        ecef_x: i32 = 8,
        ecef_y: i32 = 12,
        ecef_z: i32 = 16,
        /// 0.1 mm
        ecef_x_hp: i8 = 20,
        ecef_y_hp: i8 = 21,
        ecef_z_hp: i8 = 22,
        flags: u8 = 23,
        /// 0.1 mm
        p_acc: u32 = 24,
    }
}

impl NavHpPosEcef {
    /// (x, y, z) in meters, standard and high precision parts combined
    pub fn position(&self) -> (f64, f64, f64) {
        let combine = |cm: i32, hp: i8| round_to((f64::from(cm) + f64::from(hp) * 1e-2) * 1e-2, 4);
        (
            combine(self.ecef_x, self.ecef_x_hp),
            combine(self.ecef_y, self.ecef_y_hp),
            combine(self.ecef_z, self.ecef_z_hp),
        )
    }

    pub fn position_accuracy(&self) -> f64 {
        round_to(f64::from(self.p_acc) * 1e-4, 4)
    }
}

ubx_layout! {
    /// High Precision Geodetic Position Solution
    pub struct NavHpPosLlh [36] {
        version: u8 = 0,
        itow: u32 = 4,
        /// 1e-7 deg
        lon: i32 = 8,
        lat: i32 = 12,
        /// mm
        height: i32 = 16,
        h_msl: i32 = 20,
        /// 1e-9 deg
        lon_hp: i8 = 24,
        lat_hp: i8 = 25,
        /// 0.1 mm
        height_hp: i8 = 26,
        h_msl_hp: i8 = 27,
        /// 0.1 mm
        h_acc: u32 = 28,
        v_acc: u32 = 32,
    }
}

impl NavHpPosLlh {
    pub fn lon_degrees(&self) -> f64 {
        Self::precise_degrees(self.lon, self.lon_hp)
    }

    pub fn lat_degrees(&self) -> f64 {
        Self::precise_degrees(self.lat, self.lat_hp)
    }

    pub fn height_meters(&self) -> f64 {
        Self::precise_meters(self.height, self.height_hp)
    }

    pub fn height_msl(&self) -> f64 {
        Self::precise_meters(self.h_msl, self.h_msl_hp)
    }

    pub fn horizontal_accuracy(&self) -> f64 {
        round_to(f64::from(self.h_acc) * 1e-4, 4)
    }

    pub fn vertical_accuracy(&self) -> f64 {
        round_to(f64::from(self.v_acc) * 1e-4, 4)
    }

    fn precise_degrees(coarse: i32, hp: i8) -> f64 {
        round_to((f64::from(coarse) + f64::from(hp) * 1e-2) * 1e-7, 9)
    }

    fn precise_meters(coarse: i32, hp: i8) -> f64 {
        round_to((f64::from(coarse) + f64::from(hp) * 1e-1) * 1e-3, 4)
    }
}

ubx_layout! {
    /// Position Solution in ECEF, cm
    pub struct NavPosEcef [20] {
        itow: u32 = 0,
        ecef_x: i32 = 4,
        ecef_y: i32 = 8,
        ecef_z: i32 = 12,
        p_acc: u32 = 16,
    }
}

ubx_layout! {
    /// Geodetic Position Solution
    pub struct NavPosLlh [28] {
        itow: u32 = 0,
        /// 1e-7 deg
        lon: i32 = 4,
        lat: i32 = 8,
        /// mm
        height: i32 = 12,
        h_msl: i32 = 16,
        h_acc: u32 = 20,
        v_acc: u32 = 24,
    }
}

impl NavPosLlh {
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
}

ubx_layout! {
    pub struct NavSatHeader [8] {
        itow: u32 = 0,
        version: u8 = 4,
        num_svs: u8 = 5,
    }
}

ubx_layout! {
    pub struct NavSatSv [12] {
        gnss_id: u8 = 0,
        sv_id: u8 = 1,
        /// dBHz
        cno: u8 = 2,
        /// deg
        elev: i8 = 3,
        /// deg
        azim: i16 = 4,
        /// Pseudorange residual, 0.1 m
        pr_res: i16 = 6,
        flags: NavSatSvFlags = 8,
    }
}

impl NavSatSv {
    pub fn quality_ind(&self) -> u8 {
        (self.flags.bits() & 0x07) as u8
    }

    /// 0 unknown, 1 healthy, 2 unhealthy
    pub fn health(&self) -> u8 {
        ((self.flags.bits() >> 4) & 0x03) as u8
    }

    pub fn orbit_source(&self) -> u8 {
        ((self.flags.bits() >> 8) & 0x07) as u8
    }

    pub fn pr_res_meters(&self) -> f64 {
        round_to(f64::from(self.pr_res) * 0.1, 1)
    }

    pub fn label(&self) -> String {
        gnss_label(self.gnss_id, self.sv_id, 0)
    }
}

/// Satellite Information
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NavSat {
    pub header: NavSatHeader,
    pub blocks: Vec<NavSatSv>,
}

ubx_layout! {
    pub struct NavSbasHeader [12] {
        itow: u32 = 0,
        /// PRN of the GEO used
        geo: u8 = 4,
        mode: u8 = 5,
        sys: i8 = 6,
        service: SbasService = 7,
        cnt: u8 = 8,
    }
}

ubx_layout! {
    pub struct NavSbasSv [12] {
        svid: u8 = 0,
        flags: u8 = 1,
        udre: u8 = 2,
        sv_sys: u8 = 3,
        sv_service: SbasService = 4,
        reserved1: u8 = 5,
        /// Pseudorange correction, cm
        prc: i16 = 6,
        reserved2: i16 = 8,
        /// Ionosphere correction, cm
        ic: i16 = 10,
    }
}

/// SBAS Status Data
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NavSbas {
    pub header: NavSbasHeader,
    pub blocks: Vec<NavSbasSv>,
}

ubx_layout! {
    pub struct NavSigHeader [8] {
        itow: u32 = 0,
        version: u8 = 4,
        num_sigs: u8 = 5,
    }
}

ubx_layout! {
    pub struct NavSigSignal [16] {
        gnss_id: u8 = 0,
        sv_id: u8 = 1,
        sig_id: u8 = 2,
        freq_id: u8 = 3,
        /// 0.1 m
        pr_res: i16 = 4,
        cno: u8 = 6,
        quality_ind: u8 = 7,
        corr_source: u8 = 8,
        iono_model: u8 = 9,
        sig_flags: u16 = 10,
    }
}

impl NavSigSignal {
    pub fn label(&self) -> String {
        gnss_label(self.gnss_id, self.sv_id, self.sig_id)
    }
}

/// Signal Information
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NavSig {
    pub header: NavSigHeader,
    pub blocks: Vec<NavSigSignal>,
}

impl PayloadDecoder for NavSig {
    const NAME: &'static str = "UBX-NAV-SIG";

    fn decode(payload: &[u8]) -> Result<Self, ParserError> {
        check_len::<Self>(payload, NavSigHeader::LEN)?;
        let header = NavSigHeader::read(payload, 0);
        let mut blocks = read_blocks(payload, NavSigHeader::LEN, NavSigSignal::LEN, |b| {
            NavSigSignal::read(b, 0)
        });
        blocks.truncate(header.num_sigs as usize);
        Ok(Self { header, blocks })
    }

    fn itow(&self) -> Option<u32> {
        Some(self.header.itow)
    }
}

ubx_layout! {
    /// Navigation Solution Information, superseded by NAV-PVT
    pub struct NavSol [52] {
        itow: u32 = 0,
        /// ns
        f_tow: i32 = 4,
        week: i16 = 8,
        gps_fix: u8 = 10,
        flags: NavStatusFlags = 11,
        /// cm
        ecef_x: i32 = 12,
        ecef_y: i32 = 16,
        ecef_z: i32 = 20,
        p_acc: u32 = 24,
        /// cm/s
        ecef_vx: i32 = 28,
        ecef_vy: i32 = 32,
        ecef_vz: i32 = 36,
        s_acc: u32 = 40,
        /// 0.01 scale
        p_dop: u16 = 44,
        num_sv: u8 = 47,
    }
}

impl NavSol {
    pub fn fix_type(&self) -> GnssFixType {
        GnssFixType::from(self.gps_fix)
    }

    /// (x, y, z, pAcc) in meters
    pub fn position(&self) -> (f64, f64, f64, f64) {
        let m = |cm: f64| round_to(cm / 100.0, 2);
        (
            m(f64::from(self.ecef_x)),
            m(f64::from(self.ecef_y)),
            m(f64::from(self.ecef_z)),
            m(f64::from(self.p_acc)),
        )
    }

    pub fn pdop(&self) -> f64 {
        round_to(f64::from(self.p_dop) * 1e-2, 2)
    }
}

ubx_layout! {
    /// Receiver Navigation Status
    pub struct NavStatus [16] {
        itow: u32 = 0,
        gps_fix: u8 = 4,
        flags: NavStatusFlags = 5,
        fix_stat: u8 = 6,
        flags2: u8 = 7,
        /// Time to first fix, ms
        ttff: u32 = 8,
        /// Milliseconds since startup
        msss: u32 = 12,
    }
}

impl NavStatus {
    pub fn fix_type(&self) -> GnssFixType {
        GnssFixType::from(self.gps_fix)
    }
}

ubx_layout! {
    /// Survey-in data
    pub struct NavSvin [40] {
        version: u8 = 0,
        itow: u32 = 4,
        /// s
        dur: u32 = 8,
        /// cm
        mean_x: i32 = 12,
        mean_y: i32 = 16,
        mean_z: i32 = 20,
        /// 0.1 mm
        mean_x_hp: i8 = 24,
        mean_y_hp: i8 = 25,
        mean_z_hp: i8 = 26,
        /// 0.1 mm
        mean_acc: u32 = 28,
        obs: u32 = 32,
        valid: u8 = 36,
        active: u8 = 37,
    }
}

impl NavSvin {
    pub fn mean_accuracy(&self) -> f64 {
        round_to(f64::from(self.mean_acc) * 1e-4, 4)
    }
}

ubx_layout! {
    pub struct NavSvinfoHeader [8] {
        itow: u32 = 0,
        num_ch: u8 = 4,
        global_flags: u8 = 5,
    }
}

ubx_layout! {
    pub struct NavSvinfoChannel [12] {
        chn: u8 = 0,
        svid: u8 = 1,
        flags: NavSvinfoFlags = 2,
        quality: u8 = 3,
        cno: u8 = 4,
        elev: i8 = 5,
        azim: i16 = 6,
        /// cm
        pr_res: i32 = 8,
    }
}

/// Space Vehicle Information, superseded by NAV-SAT
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NavSvinfo {
    pub header: NavSvinfoHeader,
    pub blocks: Vec<NavSvinfoChannel>,
}

ubx_layout! {
    /// Velocity Solution in ECEF, cm/s
    pub struct NavVelEcef [20] {
        itow: u32 = 0,
        ecef_vx: i32 = 4,
        ecef_vy: i32 = 8,
        ecef_vz: i32 = 12,
        s_acc: u32 = 16,
    }
}

ubx_layout! {
    /// Velocity Solution in NED
    pub struct NavVelNed [36] {
        itow: u32 = 0,
        /// cm/s
        vel_n: i32 = 4,
        vel_e: i32 = 8,
        vel_d: i32 = 12,
        speed: u32 = 16,
        g_speed: u32 = 20,
        /// 1e-5 deg
        heading: i32 = 24,
        s_acc: u32 = 28,
        c_acc: u32 = 32,
    }
}

impl NavVelNed {
    /// m/s
    pub fn ground_speed(&self) -> f64 {
        round_to(f64::from(self.g_speed) * 1e-2, 2)
    }

    pub fn heading_degrees(&self) -> f64 {
        round_to(f64::from(self.heading) * 1e-5, 5)
    }
}

itow_decoder! {
    NavClock => "UBX-NAV-CLOCK",
    NavDop => "UBX-NAV-DOP",
    NavEoe => "UBX-NAV-EOE",
    NavHpPosEcef => "UBX-NAV-HPPOSECEF",
    NavHpPosLlh => "UBX-NAV-HPPOSLLH",
    NavPosEcef => "UBX-NAV-POSECEF",
    NavPosLlh => "UBX-NAV-POSLLH",
    NavSol => "UBX-NAV-SOL",
    NavStatus => "UBX-NAV-STATUS",
    NavSvin => "UBX-NAV-SVIN",
    NavVelEcef => "UBX-NAV-VELECEF",
    NavVelNed => "UBX-NAV-VELNED",
}

block_decoder! {
    NavDgps(NavDgpsHeader, NavDgpsChannel) => "UBX-NAV-DGPS",
    NavGeofence(NavGeofenceHeader, NavGeofenceFence) => "UBX-NAV-GEOFENCE",
    NavSat(NavSatHeader, NavSatSv) => "UBX-NAV-SAT",
    NavSbas(NavSbasHeader, NavSbasSv) => "UBX-NAV-SBAS",
    NavSvinfo(NavSvinfoHeader, NavSvinfoChannel) => "UBX-NAV-SVINFO",
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn nav_hpposllh_precision() {
        let mut payload = vec![0u8; 36];
        payload[4..8].copy_from_slice(&1000u32.to_le_bytes());
        payload[8..12].copy_from_slice(&(-741_234_567i32).to_le_bytes());
        payload[12..16].copy_from_slice(&407_654_321i32.to_le_bytes());
        payload[16..20].copy_from_slice(&12_345i32.to_le_bytes());
        payload[24] = 0x2d; // lonHp 45
        payload[25] = (-12i8) as u8;
        payload[26] = 7;
        payload[28..32].copy_from_slice(&145u32.to_le_bytes());
        let llh = NavHpPosLlh::decode(&payload).unwrap();
        assert_eq!(llh.itow(), Some(1000));
        assert_eq!(llh.lon_degrees(), -74.123456655);
        assert_eq!(llh.lat_degrees(), 40.765432088);
        assert_eq!(llh.height_meters(), 12.3457);
        assert_eq!(llh.horizontal_accuracy(), 0.0145);
    }

    #[test]
    fn nav_posllh_min_length() {
        assert!(NavPosLlh::decode(&[0; 27]).is_err());
        let mut payload = vec![0u8; 28];
        payload[4..8].copy_from_slice(&100_000_000i32.to_le_bytes());
        payload[24..28].copy_from_slice(&2500u32.to_le_bytes());
        let llh = NavPosLlh::decode(&payload).unwrap();
        assert_eq!(llh.lon_degrees(), 10.0);
        assert_eq!(llh.vertical_accuracy(), 2.5);
    }

    #[test]
    fn nav_hpposecef_combines_hp_part() {
        let mut payload = vec![0u8; 28];
        payload[8..12].copy_from_slice(&123_456i32.to_le_bytes());
        payload[20] = 55;
        payload[24..28].copy_from_slice(&20u32.to_le_bytes());
        let ecef = NavHpPosEcef::decode(&payload).unwrap();
        assert_eq!(ecef.position().0, 1234.5655);
        assert_eq!(ecef.position_accuracy(), 0.002);
        assert!(NavHpPosEcef::decode(&[0; 27]).is_err());
    }

    #[test]
    fn nav_dop_scaling() {
        let mut payload = vec![0u8; 18];
        for (i, dop) in [250u16, 180, 120, 150, 90, 70, 60].iter().enumerate() {
            payload[4 + 2 * i..6 + 2 * i].copy_from_slice(&dop.to_le_bytes());
        }
        let dop = NavDop::decode(&payload).unwrap();
        assert_eq!(dop.scaled(), [2.5, 1.8, 1.2, 1.5, 0.9, 0.7, 0.6]);
    }

    #[test]
    fn nav_sat_blocks() {
        let mut payload = vec![0u8; 8];
        payload[5] = 2;
        let flags: u32 = 0x07 | 0x08 | (1 << 4) | (1 << 8) | 0x800 | 0x10_0000;
        for sv in [5u8, 12] {
            let mut block = vec![0, sv, 40, 45];
            block.extend_from_slice(&120i16.to_le_bytes());
            block.extend_from_slice(&(-15i16).to_le_bytes());
            block.extend_from_slice(&flags.to_le_bytes());
            payload.extend(block);
        }
        payload.extend_from_slice(&[0; 5]);
        let sat = NavSat::decode(&payload).unwrap();
        assert_eq!(sat.blocks.len(), 2);
        let sv = &sat.blocks[1];
        assert_eq!(sv.label(), "GPS 12 L1C/A");
        assert_eq!(sv.azim, 120);
        assert_eq!(sv.pr_res_meters(), -1.5);
        assert_eq!((sv.quality_ind(), sv.health(), sv.orbit_source()), (7, 1, 1));
        assert!(sv
            .flags
            .contains(NavSatSvFlags::SV_USED | NavSatSvFlags::EPH_AVAIL | NavSatSvFlags::PR_CORR_USED));
    }

    #[test]
    fn nav_sig_honours_num_sigs() {
        let mut payload = vec![0u8; 8];
        payload[5] = 1;
        payload.extend([2, 11, 6, 0, 0, 0, 38, 7, 0, 0, 0, 0, 0, 0, 0, 0]);
        payload.extend([0u8; 16]);
        let sig = NavSig::decode(&payload).unwrap();
        assert_eq!(sig.blocks.len(), 1);
        assert_eq!(sig.blocks[0].label(), "Galileo 11 E5 bQ");
    }

    #[test]
    fn nav_geofence_walks_fences() {
        let payload = [0, 0, 0, 0, 0, 1, 3, 1, 1, 0, 2, 0, 0, 0];
        let fence = NavGeofence::decode(&payload).unwrap();
        let states: Vec<_> = fence
            .blocks
            .iter()
            .map(|f| fence_state_label(f.state))
            .collect();
        assert_eq!(states, vec!["Inside", "Outside", "Unknown"]);
    }

    #[test]
    fn nav_sol_fix() {
        let mut payload = vec![0u8; 52];
        payload[10] = 3;
        payload[11] = 0x0d;
        payload[12..16].copy_from_slice(&(-250i32).to_le_bytes());
        let sol = NavSol::decode(&payload).unwrap();
        assert_eq!(sol.fix_type().short_label(), "3D");
        assert_eq!(sol.flags, NavStatusFlags::GPS_FIX_OK | NavStatusFlags::WKN_SET | NavStatusFlags::TOW_SET);
        assert_eq!(sol.position().0, -2.5);
    }

    #[test]
    fn nav_svinfo_flags() {
        let mut payload = vec![0u8; 8];
        payload.extend([3, 17, 0x0d, 7, 44, 60, 0x2c, 0x01, 0, 0, 0, 0]);
        let info = NavSvinfo::decode(&payload).unwrap();
        let ch = &info.blocks[0];
        assert_eq!(ch.azim, 300);
        assert!(ch.flags.contains(NavSvinfoFlags::SV_USED | NavSvinfoFlags::ORBIT_AVAIL | NavSvinfoFlags::ORBIT_EPH));
    }

    #[test]
    fn nav_velned_scaling() {
        let mut payload = vec![0u8; 36];
        payload[20..24].copy_from_slice(&1234u32.to_le_bytes());
        payload[24..28].copy_from_slice(&4_500_000i32.to_le_bytes());
        let vel = NavVelNed::decode(&payload).unwrap();
        assert_eq!(vel.ground_speed(), 12.34);
        assert_eq!(vel.heading_degrees(), 45.0);
    }
}
