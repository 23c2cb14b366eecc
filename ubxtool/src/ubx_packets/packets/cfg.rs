use bitflags::bitflags;

use crate::{
    error::ParserError,
    ubx_packets::{
        check_len, class_id_label,
        layout::{le_bitflags, read_at, read_blocks, read_cstr, ubx_layout},
        PayloadDecoder,
    },
};

use super::gnss_name;

bitflags! {
    /// Antenna flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct AntFlags: u16 {
        /// Enable antenna supply voltage control signal
        const SVCS = 0x01;
        /// Enable short circuit detection
        const SCD = 0x02;
        /// Enable open circuit detection
        const OCD = 0x04;
        /// Power down antenna supply if short circuit is detected
        const PDWN_ON_SCD = 0x08;
        /// Enable automatic recovery from short state
        const RECOVERY = 0x10;
    }
}

bitflags! {
    /// Configuration sections for UBX-CFG-CFG clear/save/load masks
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct CfgMask: u32 {
        const IO_PORT = 0x01;
        const MSG_CONF = 0x02;
        const INF_MSG = 0x04;
        const NAV_CONF = 0x08;
        const RXM_CONF = 0x10;
        const SEN_CONF = 0x100;
        const RINV_CONF = 0x200;
        const ANT_CONF = 0x400;
        const LOG_CONF = 0x800;
        const FTS_CONF = 0x1000;
    }
}

bitflags! {
    /// Storage devices targeted by UBX-CFG-CFG
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct DeviceMask: u8 {
        const DEV_BBR = 0x01;
        const DEV_FLASH = 0x02;
        const DEV_EEPROM = 0x04;
        const DEV_SPI_FLASH = 0x10;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct InProtoMask: u16 {
        const UBX = 0x01;
        const NMEA = 0x02;
        const RTCM2 = 0x04;
        const RTCM3 = 0x20;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct OutProtoMask: u16 {
        const UBX = 0x01;
        const NMEA = 0x02;
        const RTCM3 = 0x20;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct PortFlags: u16 {
        /// Extended TX timeout, the port waits longer before giving up
        const EXTENDED_TX_TIMEOUT = 0x02;
    }
}

bitflags! {
    /// Time pulse flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct Tp5Flags: u32 {
        const ACTIVE = 0x01;
        const LOCK_GNSS_FREQ = 0x02;
        const LOCKED_OTHER_SET = 0x04;
        /// `freqPeriod` is a frequency, otherwise a period
        const IS_FREQ = 0x08;
        /// `pulseLenRatio` is a length, otherwise a duty cycle
        const IS_LENGTH = 0x10;
        const ALIGN_TO_TOW = 0x20;
        /// Rising edge at top of second, otherwise falling
        const POLARITY = 0x40;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct UsbFlags: u16 {
        const RE_ENUM = 0x01;
        /// Self-powered, otherwise bus-powered
        const POWER_MODE = 0x02;
    }
}

le_bitflags! {
    AntFlags: u16,
    CfgMask: u32,
    DeviceMask: u8,
    InProtoMask: u16,
    OutProtoMask: u16,
    PortFlags: u16,
    Tp5Flags: u32,
    UsbFlags: u16,
}

ubx_layout! {
    /// Antenna Control Settings
    pub struct CfgAnt [4] {
        flags: AntFlags = 0,
        /// Pin assignments packed as 3 five-bit numbers plus the reconfig bit
        pins: u16 = 2,
    }
}

impl CfgAnt {
    pub fn pin_switch(&self) -> u8 {
        (self.pins & 0x1f) as u8
    }

    pub fn pin_scd(&self) -> u8 {
        ((self.pins >> 5) & 0x1f) as u8
    }

    pub fn pin_ocd(&self) -> u8 {
        ((self.pins >> 10) & 0x1f) as u8
    }

    pub fn reconfig(&self) -> bool {
        self.pins >> 15 != 0
    }
}

impl PayloadDecoder for CfgAnt {
    const NAME: &'static str = "UBX-CFG-ANT";

    fn decode(payload: &[u8]) -> Result<Self, ParserError> {
        check_len::<Self>(payload, Self::LEN)?;
        Ok(Self::read(payload, 0))
    }
}

/// Clear, Save and Load configurations
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CfgCfg {
    pub clear_mask: CfgMask,
    pub save_mask: CfgMask,
    pub load_mask: CfgMask,
    /// Only present in the 13 byte form
    pub device_mask: Option<DeviceMask>,
}

impl PayloadDecoder for CfgCfg {
    const NAME: &'static str = "UBX-CFG-CFG";

    fn decode(payload: &[u8]) -> Result<Self, ParserError> {
        check_len::<Self>(payload, 12)?;
        Ok(Self {
            clear_mask: read_at(payload, 0),
            save_mask: read_at(payload, 4),
            load_mask: read_at(payload, 8),
            device_mask: (payload.len() > 12).then(|| read_at(payload, 12)),
        })
    }
}

ubx_layout! {
    pub struct CfgGnssHeader [4] {
        msg_ver: u8 = 0,
        num_trk_ch_hw: u8 = 1,
        num_trk_ch_use: u8 = 2,
        num_config_blocks: u8 = 3,
    }
}

ubx_layout! {
    /// Tracking configuration of one GNSS
    pub struct CfgGnssBlock [8] {
        gnss_id: u8 = 0,
        res_trk_ch: u8 = 1,
        max_trk_ch: u8 = 2,
        reserved1: u8 = 3,
        flags: u32 = 4,
    }
}

impl CfgGnssBlock {
    pub fn enabled(&self) -> bool {
        self.flags & 0x01 != 0
    }

    pub fn sig_cfg_mask(&self) -> u8 {
        (self.flags >> 16) as u8
    }

    pub fn gnss_name(&self) -> Option<&'static str> {
        gnss_name(self.gnss_id)
    }

    /// Names of the signals enabled in `sigCfgMask`
    pub fn signals(&self) -> Vec<&'static str> {
        let bits: &[(u8, &str)] = match self.gnss_id {
            0 | 1 => &[(0x01, "L1C/A"), (0x10, "L2C")],
            2 => &[(0x01, "E1"), (0x20, "E5b")],
            3 => &[(0x01, "B1I"), (0x10, "B2I")],
            4 => &[(0x01, "L1")],
            5 => &[(0x01, "L1C/A"), (0x04, "L1S"), (0x10, "L2C")],
            6 => &[(0x01, "L1"), (0x10, "L2")],
            _ => &[],
        };
        let mask = self.sig_cfg_mask();
        bits.iter()
            .filter(|(bit, _)| mask & bit != 0)
            .map(|(_, name)| *name)
            .collect()
    }
}

/// GNSS system configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CfgGnss {
    pub header: CfgGnssHeader,
    pub blocks: Vec<CfgGnssBlock>,
}

impl PayloadDecoder for CfgGnss {
    const NAME: &'static str = "UBX-CFG-GNSS";

    fn decode(payload: &[u8]) -> Result<Self, ParserError> {
        check_len::<Self>(payload, CfgGnssHeader::LEN)?;
        let header = CfgGnssHeader::read(payload, 0);
        let mut blocks = read_blocks(payload, CfgGnssHeader::LEN, CfgGnssBlock::LEN, |b| {
            CfgGnssBlock::read(b, 0)
        });
        blocks.truncate(header.num_config_blocks as usize);
        Ok(Self { header, blocks })
    }
}

/// Message rate settings
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CfgMsg {
    /// Poll the rate of one message
    RateRequest { class: u8, id: u8 },
    /// Rate on the current port
    RateSet { class: u8, id: u8, rate: u8 },
    /// Rates on all six ports
    Rates { class: u8, id: u8, rates: [u8; 6] },
}

impl CfgMsg {
    pub fn target(&self) -> String {
        let (Self::RateRequest { class, id }
        | Self::RateSet { class, id, .. }
        | Self::Rates { class, id, .. }) = self;
        class_id_label(*class, *id)
    }
}

impl PayloadDecoder for CfgMsg {
    const NAME: &'static str = "UBX-CFG-MSG";

    fn decode(payload: &[u8]) -> Result<Self, ParserError> {
        match *payload {
            [class, id] => Ok(Self::RateRequest { class, id }),
            [class, id, rate] => Ok(Self::RateSet { class, id, rate }),
            [class, id, r0, r1, r2, r3, r4, r5] => Ok(Self::Rates {
                class,
                id,
                rates: [r0, r1, r2, r3, r4, r5],
            }),
            _ => Err(ParserError::UnexpectedLength {
                packet: Self::NAME,
                got: payload.len(),
            }),
        }
    }
}

ubx_layout! {
    /// Navigation Engine Settings
    pub struct CfgNav5 [36] {
        mask: u16 = 0,
        dyn_model: u8 = 2,
        fix_mode: u8 = 3,
        /// Fixed altitude for 2D fix mode, cm
        fixed_alt: i32 = 4,
        /// Fixed altitude variance, 0.0001 m^2
        fixed_alt_var: u32 = 8,
        min_elev: i8 = 12,
        dr_limit: u8 = 13,
        /// 0.1 scale
        p_dop: u16 = 14,
        /// 0.1 scale
        t_dop: u16 = 16,
        p_acc: u16 = 18,
        t_acc: u16 = 20,
        static_hold_thresh: u8 = 22,
        dgnss_timeout: u8 = 23,
        cno_thresh_num_svs: u8 = 24,
        cno_thresh: u8 = 25,
        reserved1: u16 = 26,
        static_hold_max_dist: u16 = 28,
        utc_standard: u8 = 30,
    }
}

impl PayloadDecoder for CfgNav5 {
    const NAME: &'static str = "UBX-CFG-NAV5";

    fn decode(payload: &[u8]) -> Result<Self, ParserError> {
        check_len::<Self>(payload, Self::LEN)?;
        Ok(Self::read(payload, 0))
    }
}

ubx_layout! {
    pub struct CfgNavx5Header [20] {
        version: u16 = 0,
        mask1: u16 = 2,
        mask2: u32 = 4,
        min_svs: u8 = 10,
        max_svs: u8 = 11,
        min_cno: u8 = 12,
        ini_fix_3d: u8 = 14,
        ack_aiding: u8 = 17,
        wkn_rollover: u16 = 18,
    }
}

ubx_layout! {
    /// Fields only present in the 40 byte (protocol 18+) form
    pub struct CfgNavx5Aop [40] {
        use_ppp: u8 = 26,
        aop_cfg: u8 = 27,
        aop_orb_max_err: u16 = 30,
        use_adr: u8 = 39,
    }
}

/// Navigation Engine Expert Settings
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CfgNavx5 {
    pub header: CfgNavx5Header,
    pub aop: Option<CfgNavx5Aop>,
}

impl PayloadDecoder for CfgNavx5 {
    const NAME: &'static str = "UBX-CFG-NAVX5";

    fn decode(payload: &[u8]) -> Result<Self, ParserError> {
        check_len::<Self>(payload, CfgNavx5Header::LEN)?;
        Ok(Self {
            header: CfgNavx5Header::read(payload, 0),
            aop: (payload.len() >= CfgNavx5Aop::LEN).then(|| CfgNavx5Aop::read(payload, 0)),
        })
    }
}

ubx_layout! {
    /// Power Mode Setup
    pub struct CfgPms [8] {
        version: u8 = 0,
        power_setup_value: u8 = 1,
        /// Position update period, s
        period: u16 = 2,
        /// Time the receiver stays on, s
        on_time: u16 = 4,
    }
}

impl CfgPms {
    pub fn power_setup_label(&self) -> Option<&'static str> {
        Some(match self.power_setup_value {
            0 => "Full power",
            1 => "Balanced",
            2 => "Interval",
            3 => "Aggressive with 1Hz",
            4 => "Aggressive with 2Hz",
            5 => "Aggressive with 4Hz",
            0xff => "Invalid",
            _ => return None,
        })
    }
}

impl PayloadDecoder for CfgPms {
    const NAME: &'static str = "UBX-CFG-PMS";

    fn decode(payload: &[u8]) -> Result<Self, ParserError> {
        check_len::<Self>(payload, Self::LEN)?;
        Ok(Self::read(payload, 0))
    }
}

/// Name of a receiver port id
pub fn port_name(port_id: u8) -> Option<&'static str> {
    Some(match port_id {
        0 => "DDC",
        1 => "UART1",
        2 => "UART2",
        3 => "USB",
        4 => "SPI",
        5 => "Reserved",
        _ => return None,
    })
}

ubx_layout! {
    /// One port configuration
    pub struct CfgPrtPort [20] {
        port_id: u8 = 0,
        reserved1: u8 = 1,
        tx_ready: u16 = 2,
        /// UART mode, or the DDC slave address
        mode: u32 = 4,
        /// Zero on USB, DDC and SPI
        baud_rate: u32 = 8,
        in_proto_mask: InProtoMask = 12,
        out_proto_mask: OutProtoMask = 14,
        flags: PortFlags = 16,
        reserved2: u16 = 18,
    }
}

impl CfgPrtPort {
    pub fn port_name(&self) -> Option<&'static str> {
        port_name(self.port_id)
    }

    /// I2C slave address, DDC port only
    pub fn slave_addr(&self) -> Option<u8> {
        (self.port_id == 0).then_some(((self.mode >> 1) & 0x7f) as u8)
    }
}

/// Port Configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CfgPrt {
    /// Poll the configuration of one port
    Poll { port_id: u8 },
    Port(CfgPrtPort),
}

impl PayloadDecoder for CfgPrt {
    const NAME: &'static str = "UBX-CFG-PRT";

    fn decode(payload: &[u8]) -> Result<Self, ParserError> {
        if let [port_id] = *payload {
            return Ok(Self::Poll { port_id });
        }
        check_len::<Self>(payload, CfgPrtPort::LEN)?;
        Ok(Self::Port(CfgPrtPort::read(payload, 0)))
    }
}

ubx_layout! {
    /// Reset Receiver / Clear Backup Data Structures
    pub struct CfgRst [4] {
        nav_bbr_mask: u16 = 0,
        reset_mode: u8 = 2,
        reserved1: u8 = 3,
    }
}

impl CfgRst {
    pub fn start_label(&self) -> &'static str {
        match self.nav_bbr_mask {
            0 => "Hot Start",
            1 => "Warm Start",
            0xffff => "Cold Start",
            _ => "Other",
        }
    }

    pub fn reset_mode_label(&self) -> &'static str {
        match self.reset_mode {
            0 => "Hardware reset",
            1 => "Software reset",
            2 => "Software reset (GNSS only)",
            4 => "Hardware reset, after shutdown",
            8 => "Controlled GNSS stop",
            9 => "Controlled GNSS start",
            _ => "Other",
        }
    }
}

impl PayloadDecoder for CfgRst {
    const NAME: &'static str = "UBX-CFG-RST";

    fn decode(payload: &[u8]) -> Result<Self, ParserError> {
        check_len::<Self>(payload, Self::LEN)?;
        Ok(Self::read(payload, 0))
    }
}

ubx_layout! {
    /// SBAS Configuration
    pub struct CfgSbas [8] {
        mode: u8 = 0,
        usage: u8 = 1,
        max_sbas: u8 = 2,
        scanmode2: u8 = 3,
        scanmode1: u32 = 4,
    }
}

impl PayloadDecoder for CfgSbas {
    const NAME: &'static str = "UBX-CFG-SBAS";

    fn decode(payload: &[u8]) -> Result<Self, ParserError> {
        check_len::<Self>(payload, Self::LEN)?;
        Ok(Self::read(payload, 0))
    }
}

ubx_layout! {
    /// Time Mode Settings 2
    pub struct CfgTmode2 [28] {
        /// 0 disabled, 1 survey in, 2 fixed mode
        time_mode: u8 = 0,
        reserved1: u8 = 1,
        usage: u16 = 2,
        ecef_x_or_lat: i32 = 4,
        ecef_y_or_lon: i32 = 8,
        ecef_z_or_alt: i32 = 12,
        /// mm
        fixed_pos_acc: u32 = 16,
        /// s
        svin_min_dur: u32 = 20,
        /// mm
        svin_acc_limit: u32 = 24,
    }
}

impl PayloadDecoder for CfgTmode2 {
    const NAME: &'static str = "UBX-CFG-TMODE2";

    fn decode(payload: &[u8]) -> Result<Self, ParserError> {
        check_len::<Self>(payload, Self::LEN)?;
        Ok(Self::read(payload, 0))
    }
}

ubx_layout! {
    /// Time pulse parameters
    pub struct CfgTp5Pulse [32] {
        tp_idx: u8 = 0,
        version: u8 = 1,
        /// ns
        ant_cable_delay: i16 = 4,
        /// ns
        rf_group_delay: i16 = 6,
        freq_period: u32 = 8,
        freq_period_lock: u32 = 12,
        pulse_len_ratio: u32 = 16,
        pulse_len_ratio_lock: u32 = 20,
        /// ns
        user_config_delay: i32 = 24,
        flags: Tp5Flags = 28,
    }
}

impl CfgTp5Pulse {
    /// Time grid the pulse is aligned to
    pub fn grid_utc_gnss(&self) -> u8 {
        ((self.flags.bits() >> 7) & 0x0f) as u8
    }

    pub fn grid_label(&self) -> Option<&'static str> {
        ["UTC", "GPS", "Glonass", "BeiDou", "Galileo"]
            .get(self.grid_utc_gnss() as usize)
            .copied()
    }

    pub fn sync_mode(&self) -> u8 {
        ((self.flags.bits() >> 11) & 0x03) as u8
    }
}

/// Time Pulse Parameters
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CfgTp5 {
    /// Poll one time pulse
    Poll { tp_idx: u8 },
    Pulse(CfgTp5Pulse),
}

impl PayloadDecoder for CfgTp5 {
    const NAME: &'static str = "UBX-CFG-TP5";

    fn decode(payload: &[u8]) -> Result<Self, ParserError> {
        if let [tp_idx] = *payload {
            return Ok(Self::Poll { tp_idx });
        }
        check_len::<Self>(payload, CfgTp5Pulse::LEN)?;
        Ok(Self::Pulse(CfgTp5Pulse::read(payload, 0)))
    }
}

/// USB Configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CfgUsb {
    pub vendor_id: u16,
    pub product_id: u16,
    /// mA
    pub power_consumption: u16,
    pub flags: UsbFlags,
    pub vendor_string: String,
    pub product_string: String,
    pub serial_number: String,
}

impl PayloadDecoder for CfgUsb {
    const NAME: &'static str = "UBX-CFG-USB";

    fn decode(payload: &[u8]) -> Result<Self, ParserError> {
        check_len::<Self>(payload, 108)?;
        Ok(Self {
            vendor_id: read_at(payload, 0),
            product_id: read_at(payload, 2),
            power_consumption: read_at(payload, 8),
            flags: read_at(payload, 10),
            vendor_string: read_cstr(payload, 12..44),
            product_string: read_cstr(payload, 44..76),
            serial_number: read_cstr(payload, 76..108),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ant_pins() {
        // pinSwitch 16, pinSCD 15, pinOCD 14, reconfig
        let pins: u16 = 16 | (15 << 5) | (14 << 10) | 0x8000;
        let mut payload = vec![0x1b, 0x00];
        payload.extend_from_slice(&pins.to_le_bytes());
        let ant = CfgAnt::decode(&payload).unwrap();
        assert_eq!(
            ant.flags,
            AntFlags::SVCS | AntFlags::SCD | AntFlags::PDWN_ON_SCD | AntFlags::RECOVERY
        );
        assert_eq!(
            (ant.pin_switch(), ant.pin_scd(), ant.pin_ocd(), ant.reconfig()),
            (16, 15, 14, true)
        );
    }

    #[test]
    fn cfg_cfg_device_mask_is_optional() {
        let mut payload = vec![0u8; 12];
        payload[4] = 0x1f;
        let cfg = CfgCfg::decode(&payload).unwrap();
        assert_eq!(
            cfg.save_mask,
            CfgMask::IO_PORT | CfgMask::MSG_CONF | CfgMask::INF_MSG | CfgMask::NAV_CONF | CfgMask::RXM_CONF
        );
        assert_eq!(cfg.device_mask, None);
        payload.push(0x17);
        let cfg = CfgCfg::decode(&payload).unwrap();
        assert_eq!(
            cfg.device_mask,
            Some(DeviceMask::DEV_BBR | DeviceMask::DEV_FLASH | DeviceMask::DEV_EEPROM | DeviceMask::DEV_SPI_FLASH)
        );
        assert!(CfgCfg::decode(&payload[..11]).is_err());
    }

    #[test]
    fn cfg_gnss_blocks() {
        let payload = [
            0, 32, 32, 2, // header
            0, 8, 16, 0, 0x01, 0x00, 0x11, 0x01, // GPS L1C/A + L2C enabled
            6, 8, 14, 0, 0x00, 0x00, 0x01, 0x01, // GLONASS L1 disabled
        ];
        let gnss = CfgGnss::decode(&payload).unwrap();
        assert_eq!(gnss.blocks.len(), 2);
        assert!(gnss.blocks[0].enabled());
        assert_eq!(gnss.blocks[0].signals(), vec!["L1C/A", "L2C"]);
        assert_eq!(gnss.blocks[1].gnss_name(), Some("GLONASS"));
        assert!(!gnss.blocks[1].enabled());
        assert_eq!(gnss.blocks[1].signals(), vec!["L1"]);
    }

    #[test]
    fn cfg_msg_shapes() {
        assert_eq!(
            CfgMsg::decode(&[0x01, 0x07]).unwrap(),
            CfgMsg::RateRequest { class: 1, id: 7 }
        );
        let set = CfgMsg::decode(&[0x01, 0x07, 0x01]).unwrap();
        assert_eq!(set.target(), "Class: NAV(0x1) ID: PVT(0x7)");
        assert_eq!(
            CfgMsg::decode(&[0xf0, 0x00, 0, 1, 1, 0, 1, 0]).unwrap(),
            CfgMsg::Rates {
                class: 0xf0,
                id: 0,
                rates: [0, 1, 1, 0, 1, 0]
            }
        );
        assert_eq!(
            CfgMsg::decode(&[0; 5]),
            Err(ParserError::UnexpectedLength {
                packet: "UBX-CFG-MSG",
                got: 5
            })
        );
    }

    #[test]
    fn cfg_prt_uart() {
        let mut payload = vec![1, 0, 0, 0];
        payload.extend_from_slice(&0x08c0u32.to_le_bytes());
        payload.extend_from_slice(&9600u32.to_le_bytes());
        payload.extend_from_slice(&[0x23, 0x00, 0x03, 0x00, 0x02, 0x00, 0x00, 0x00]);
        match CfgPrt::decode(&payload).unwrap() {
            CfgPrt::Port(port) => {
                assert_eq!(port.port_name(), Some("UART1"));
                assert_eq!(port.baud_rate, 9600);
                assert_eq!(
                    port.in_proto_mask,
                    InProtoMask::UBX | InProtoMask::NMEA | InProtoMask::RTCM3
                );
                assert_eq!(port.out_proto_mask, OutProtoMask::UBX | OutProtoMask::NMEA);
                assert!(port.flags.contains(PortFlags::EXTENDED_TX_TIMEOUT));
                assert_eq!(port.slave_addr(), None);
            },
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(CfgPrt::decode(&[3]).unwrap(), CfgPrt::Poll { port_id: 3 });
        assert!(CfgPrt::decode(&[0; 19]).is_err());
    }

    #[test]
    fn cfg_rst_labels() {
        let rst = CfgRst::decode(&[0xff, 0xff, 0x02, 0x00]).unwrap();
        assert_eq!(rst.start_label(), "Cold Start");
        assert_eq!(rst.reset_mode_label(), "Software reset (GNSS only)");
    }

    #[test]
    fn cfg_tp5_flags() {
        let mut payload = vec![0u8; 32];
        let flags: u32 = 0x01 | 0x08 | 0x40 | (1 << 7) | (2 << 11);
        payload[28..32].copy_from_slice(&flags.to_le_bytes());
        payload[4..6].copy_from_slice(&50i16.to_le_bytes());
        match CfgTp5::decode(&payload).unwrap() {
            CfgTp5::Pulse(tp) => {
                assert_eq!(tp.ant_cable_delay, 50);
                assert!(tp.flags.contains(Tp5Flags::ACTIVE | Tp5Flags::IS_FREQ | Tp5Flags::POLARITY));
                assert!(!tp.flags.contains(Tp5Flags::IS_LENGTH));
                assert_eq!(tp.grid_label(), Some("GPS"));
                assert_eq!(tp.sync_mode(), 2);
            },
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(CfgTp5::decode(&[1]).unwrap(), CfgTp5::Poll { tp_idx: 1 });
    }

    #[test]
    fn cfg_usb_strings() {
        let mut payload = vec![0u8; 108];
        payload[0..2].copy_from_slice(&0x1546u16.to_le_bytes());
        payload[10] = 0x02;
        payload[12..18].copy_from_slice(b"u-blox");
        payload[44..52].copy_from_slice(b"receiver");
        let usb = CfgUsb::decode(&payload).unwrap();
        assert_eq!(usb.vendor_id, 0x1546);
        assert!(usb.flags.contains(UsbFlags::POWER_MODE));
        assert_eq!(usb.vendor_string, "u-blox");
        assert_eq!(usb.product_string, "receiver");
        assert_eq!(usb.serial_number, "");
    }

    #[test]
    fn cfg_navx5_optional_tail() {
        let mut payload = vec![0u8; 40];
        payload[10] = 3;
        payload[30..32].copy_from_slice(&100u16.to_le_bytes());
        payload[39] = 1;
        let navx5 = CfgNavx5::decode(&payload).unwrap();
        assert_eq!(navx5.header.min_svs, 3);
        let aop = navx5.aop.unwrap();
        assert_eq!(aop.aop_orb_max_err, 100);
        assert_eq!(aop.use_adr, 1);
        assert_eq!(CfgNavx5::decode(&payload[..20]).unwrap().aop, None);
    }

    #[test]
    fn cfg_pms_label() {
        let pms = CfgPms::decode(&[0, 1, 0, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(pms.power_setup_label(), Some("Balanced"));
    }
}
