//! UBX frame builder and the receiver commands built on it.
//!
//! Every function returns complete frames, ready to be written to the
//! receiver. Nothing here does I/O.

use crate::{
    config::{lookup_by_name, KeyId},
    constants::{UBX_CHECKSUM_LEN, UBX_HEADER_LEN, UBX_SYNC_CHAR_1, UBX_SYNC_CHAR_2},
    error::EncodeError,
    options::Options,
    parser::checksum::UbxChecksumCalc,
};

const CLASS_NAV: u8 = 0x01;
const CLASS_RXM: u8 = 0x02;
const CLASS_CFG: u8 = 0x06;
const CLASS_MON: u8 = 0x0a;
const CLASS_TIM: u8 = 0x0d;
const CLASS_SEC: u8 = 0x27;
const CLASS_NMEA_STD: u8 = 0xf0;

const CFG_PRT: u8 = 0x00;
const CFG_MSG: u8 = 0x01;
const CFG_RST: u8 = 0x04;
const CFG_CFG: u8 = 0x09;
const CFG_NAV5: u8 = 0x24;
const CFG_TP5: u8 = 0x31;
const CFG_TMODE2: u8 = 0x3d;
const CFG_GNSS: u8 = 0x3e;
const CFG_PMS: u8 = 0x86;
const CFG_VALSET: u8 = 0x8a;
const CFG_VALGET: u8 = 0x8b;
const CFG_VALDEL: u8 = 0x8c;
const MON_COMMS: u8 = 0x36;

/// Frame `payload` as `class`/`id`: sync chars, length, payload, checksum
pub fn build_frame(class: u8, id: u8, payload: &[u8]) -> Result<Vec<u8>, EncodeError> {
    if payload.len() > usize::from(u16::MAX) {
        return Err(EncodeError::PayloadTooLong(payload.len()));
    }
    Ok(frame(class, id, payload))
}

/// Frame for a payload whose length is known to fit
fn frame(class: u8, id: u8, payload: &[u8]) -> Vec<u8> {
    let len = (payload.len() as u16).to_le_bytes();
    let mut out = Vec::with_capacity(UBX_HEADER_LEN + payload.len() + UBX_CHECKSUM_LEN);
    out.extend_from_slice(&[UBX_SYNC_CHAR_1, UBX_SYNC_CHAR_2, class, id, len[0], len[1]]);
    out.extend_from_slice(payload);

    let mut calc = UbxChecksumCalc::new();
    calc.update(&out[2..]);
    let (ck_a, ck_b) = calc.result();
    out.push(ck_a);
    out.push(ck_b);
    out
}

/// Empty-payload request for a message
pub fn poll(class: u8, id: u8) -> Vec<u8> {
    frame(class, id, &[])
}

/// Messages that answer a plain poll, by the name used on the command line
pub const POLL_COMMANDS: &[(&str, u8, u8)] = &[
    ("CFG-ANT", CLASS_CFG, 0x13),
    ("CFG-GNSS", CLASS_CFG, CFG_GNSS),
    ("CFG-NAV5", CLASS_CFG, CFG_NAV5),
    ("CFG-NAVX5", CLASS_CFG, 0x23),
    ("CFG-PMS", CLASS_CFG, CFG_PMS),
    ("CFG-SBAS", CLASS_CFG, 0x16),
    ("CFG-TMODE2", CLASS_CFG, CFG_TMODE2),
    ("CFG-USB", CLASS_CFG, 0x1b),
    ("MON-COMMS", CLASS_MON, MON_COMMS),
    ("MON-IO", CLASS_MON, 0x02),
    ("MON-VER", CLASS_MON, 0x04),
    ("NAV-CLOCK", CLASS_NAV, 0x22),
    ("NAV-DGPS", CLASS_NAV, 0x31),
    ("NAV-DOP", CLASS_NAV, 0x04),
    ("NAV-GEOFENCE", CLASS_NAV, 0x39),
    ("NAV-HPPOSECEF", CLASS_NAV, 0x13),
    ("NAV-HPPOSLLH", CLASS_NAV, 0x14),
    ("NAV-POSECEF", CLASS_NAV, 0x01),
    ("NAV-POSLLH", CLASS_NAV, 0x02),
    ("NAV-SAT", CLASS_NAV, 0x35),
    ("NAV-SIG", CLASS_NAV, 0x43),
    ("NAV-STATUS", CLASS_NAV, 0x03),
    ("NAV-TIMEBDS", CLASS_NAV, 0x24),
    ("NAV-TIMEGAL", CLASS_NAV, 0x25),
    ("NAV-TIMEGLO", CLASS_NAV, 0x23),
    ("NAV-TIMEGPS", CLASS_NAV, 0x20),
    ("NAV-TIMELS", CLASS_NAV, 0x26),
    ("NAV-TIMEUTC", CLASS_NAV, 0x21),
    ("NAV-VELECEF", CLASS_NAV, 0x11),
    ("NAV-VELNED", CLASS_NAV, 0x12),
    ("RXM-RAWX", CLASS_RXM, 0x15),
    ("SEC-UNIQID", CLASS_SEC, 0x03),
    ("TIM-SVIN", CLASS_TIM, 0x04),
    ("TIM-TM2", CLASS_TIM, 0x03),
    ("TIM-TP", CLASS_TIM, 0x01),
];

/// Poll a message by name, with or without the "UBX-" prefix
pub fn poll_named(name: &str) -> Result<Vec<u8>, EncodeError> {
    let short = match name.get(..4) {
        Some(prefix) if prefix.eq_ignore_ascii_case("UBX-") => &name[4..],
        _ => name,
    };
    POLL_COMMANDS
        .iter()
        .find(|(cmd, _, _)| cmd.eq_ignore_ascii_case(short))
        .map(|&(_, class, id)| poll(class, id))
        .ok_or_else(|| EncodeError::UnknownPoll(name.to_string()))
}

/// UBX-CFG-MSG: set the rate of a message on the current port, or poll it
pub fn cfg_msg(class: u8, id: u8, rate: Option<u8>) -> Vec<u8> {
    match rate {
        Some(rate) => frame(CLASS_CFG, CFG_MSG, &[class, id, rate]),
        None => frame(CLASS_CFG, CFG_MSG, &[class, id]),
    }
}

/// Turn a feature on or off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Able {
    Enable,
    Disable,
}

impl Able {
    fn rate(self) -> u8 {
        match self {
            Able::Enable => 1,
            Able::Disable => 0,
        }
    }
}

/// Things `enable`/`disable` know how to switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    /// Basic navigation messages, chosen by protocol version
    Binary,
    /// Basic NMEA sentences
    Nmea,
    /// NAV-POSECEF and NAV-VELECEF
    Ecef,
    Rawx,
    /// TIM-TP time pulse message
    Tp,
    /// Survey-in through CFG-TMODE2
    SurveyIn,
    /// GPS together with QZSS
    Gps,
    Galileo,
    BeiDou,
    Glonass,
    Sbas,
}

impl Feature {
    pub const ALL: [Feature; 11] = [
        Feature::BeiDou,
        Feature::Binary,
        Feature::Ecef,
        Feature::Galileo,
        Feature::Glonass,
        Feature::Gps,
        Feature::Nmea,
        Feature::Rawx,
        Feature::Sbas,
        Feature::SurveyIn,
        Feature::Tp,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Feature::Binary => "BINARY",
            Feature::Nmea => "NMEA",
            Feature::Ecef => "ECEF",
            Feature::Rawx => "RAWX",
            Feature::Tp => "TP",
            Feature::SurveyIn => "SURVEYIN",
            Feature::Gps => "GPS",
            Feature::Galileo => "GALILEO",
            Feature::BeiDou => "BEIDOU",
            Feature::Glonass => "GLONASS",
            Feature::Sbas => "SBAS",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(name))
    }

    /// Frames that switch this feature, in the order they are to be sent
    pub fn commands(self, able: Able, options: &Options) -> Vec<Vec<u8>> {
        match self {
            Feature::Binary => able_binary(able, options.protver()),
            Feature::Nmea => [0x09, 0x00, 0x01, 0x02, 0x07, 0x03, 0x04, 0x05, 0x08]
                .iter()
                .map(|&id| cfg_msg(CLASS_NMEA_STD, id, Some(able.rate())))
                .collect(),
            Feature::Ecef => vec![
                cfg_msg(CLASS_NAV, 0x01, Some(able.rate())),
                cfg_msg(CLASS_NAV, 0x11, Some(able.rate())),
            ],
            Feature::Rawx => vec![cfg_msg(CLASS_RXM, 0x15, Some(able.rate()))],
            Feature::Tp => vec![cfg_msg(CLASS_TIM, 0x01, Some(able.rate()))],
            Feature::SurveyIn => vec![cfg_tmode2_survey_in(able)],
            Feature::Gps => vec![
                cfg_gnss_single(GnssSystem::Gps, able),
                cfg_gnss_single(GnssSystem::Qzss, able),
            ],
            Feature::Galileo => vec![cfg_gnss_single(GnssSystem::Galileo, able)],
            Feature::BeiDou => vec![cfg_gnss_single(GnssSystem::BeiDou, able)],
            Feature::Glonass => vec![cfg_gnss_single(GnssSystem::Glonass, able)],
            Feature::Sbas => vec![cfg_gnss_single(GnssSystem::Sbas, able)],
        }
    }
}

/// Rate-set sequence for the basic binary messages.
///
/// NAV-SOL gave way to NAV-PVT and NAV-SVINFO to NAV-SAT in protocol 15,
/// NAV-EOE appeared in 18, NAV-SBAS and NAV-SVINFO are gone in 27.
fn able_binary(able: Able, protver: u8) -> Vec<Vec<u8>> {
    let rate = able.rate();
    // satellite overviews are of no use more often than every 10 epochs
    let rate_slow = if rate != 0 { 10 } else { 0 };
    let mut cmds = vec![cfg_msg(CLASS_NAV, 0x04, Some(rate))];

    if protver < 15 {
        cmds.push(cfg_msg(CLASS_NAV, 0x06, Some(rate)));
    } else {
        cmds.push(cfg_msg(CLASS_NAV, 0x07, Some(rate)));
    }
    cmds.push(cfg_msg(CLASS_NAV, 0x20, Some(rate)));

    if protver < 27 {
        cmds.push(cfg_msg(CLASS_NAV, 0x32, Some(rate_slow)));
    }

    if protver < 15 {
        cmds.push(cfg_msg(CLASS_NAV, 0x30, Some(rate_slow)));
        cmds.push(cfg_msg(CLASS_NAV, 0x35, Some(0)));
    } else {
        cmds.push(cfg_msg(CLASS_NAV, 0x35, Some(rate_slow)));
        if protver < 27 {
            cmds.push(cfg_msg(CLASS_NAV, 0x30, Some(0)));
        }
    }

    if protver >= 18 {
        cmds.push(cfg_msg(CLASS_NAV, 0x61, Some(rate)));
    }
    cmds
}

/// UBX-CFG-TMODE2: survey-in for 300 s, with an accuracy limit of 50 m so
/// the duration ends it
fn cfg_tmode2_survey_in(able: Able) -> Vec<u8> {
    const SVIN_MIN_DUR_S: u32 = 300;
    const SVIN_ACC_LIMIT_MM: u32 = 50_000;

    let mut payload = [0u8; 28];
    if able == Able::Enable {
        payload[0] = 1;
    }
    payload[20..24].copy_from_slice(&SVIN_MIN_DUR_S.to_le_bytes());
    payload[24..28].copy_from_slice(&SVIN_ACC_LIMIT_MM.to_le_bytes());
    frame(CLASS_CFG, CFG_TMODE2, &payload)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GnssSystem {
    Gps,
    Sbas,
    Galileo,
    BeiDou,
    Qzss,
    Glonass,
}

impl GnssSystem {
    /// gnssId, reserved and maximum tracking channels
    fn channels(self) -> (u8, u8, u8) {
        match self {
            GnssSystem::Gps => (0, 8, 16),
            GnssSystem::Sbas => (1, 1, 3),
            GnssSystem::Galileo => (2, 4, 8),
            GnssSystem::BeiDou => (3, 2, 16),
            GnssSystem::Qzss => (5, 0, 3),
            GnssSystem::Glonass => (6, 8, 14),
        }
    }
}

/// UBX-CFG-GNSS with one configuration block
fn cfg_gnss_single(system: GnssSystem, able: Able) -> Vec<u8> {
    let (gnss_id, res_trk_ch, max_trk_ch) = system.channels();
    // QZSS gets L1SAIF on top of L1C/A
    let sig_cfg_mask = if system == GnssSystem::Qzss { 0x05 } else { 0x01 };
    let payload = [
        0,
        0,
        0xff,
        1,
        gnss_id,
        res_trk_ch,
        max_trk_ch,
        0,
        able.rate(),
        0,
        sig_cfg_mask,
        1,
    ];
    frame(CLASS_CFG, CFG_GNSS, &payload)
}

/// Enable a feature, see [`Feature::commands`]
pub fn enable(feature: Feature, options: &Options) -> Vec<Vec<u8>> {
    feature.commands(Able::Enable, options)
}

/// Disable a feature, see [`Feature::commands`]
pub fn disable(feature: Feature, options: &Options) -> Vec<Vec<u8>> {
    feature.commands(Able::Disable, options)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveClear {
    Save,
    /// Back to factory defaults
    Clear,
}

/// UBX-CFG-CFG: save the current configuration, or clear it. Both also
/// load, which spares a reboot after clearing.
pub fn cfg_cfg(action: SaveClear) -> Vec<u8> {
    // ioPort, msgConf, infMsg, navConf, rxmConf, senConf, rinvConf, antConf, logConf
    const MASK: [u8; 4] = [0x1f, 0x0f, 0, 0];
    const NONE: [u8; 4] = [0; 4];
    // devBBR, devFlash, devEEPROM, devSpiFlash
    const DEVICES: u8 = 0x17;

    let (clear, save) = match action {
        SaveClear::Save => (NONE, MASK),
        SaveClear::Clear => (MASK, NONE),
    };
    let mut payload = Vec::with_capacity(13);
    payload.extend_from_slice(&clear);
    payload.extend_from_slice(&save);
    payload.extend_from_slice(&MASK);
    payload.push(DEVICES);
    frame(CLASS_CFG, CFG_CFG, &payload)
}

/// UBX-CFG-NAV5 changing only the dynamic platform model
pub fn cfg_nav5_model(model: u8) -> Vec<u8> {
    let mut payload = [0u8; 36];
    // mask: dyn
    payload[0] = 0x01;
    payload[2] = model;
    frame(CLASS_CFG, CFG_NAV5, &payload)
}

/// UBX-CFG-PMS: set the power setup value, or poll without one.
/// Period and on-time stay zero.
pub fn cfg_pms(power_setup: Option<u8>) -> Vec<u8> {
    match power_setup {
        Some(mode) => frame(CLASS_CFG, CFG_PMS, &[0, mode, 0, 0, 0, 0, 0, 0]),
        None => poll(CLASS_CFG, CFG_PMS),
    }
}

/// UBX-CFG-PRT poll, for the current port or the one given
pub fn cfg_prt(port: Option<u8>) -> Vec<u8> {
    match port {
        Some(port) => frame(CLASS_CFG, CFG_PRT, &[port]),
        None => poll(CLASS_CFG, CFG_PRT),
    }
}

/// UBX-CFG-PRT setting a UART to `baud`, 8N1, UBX and NMEA in and out.
/// `port` defaults to UART1.
pub fn set_speed(port: Option<u8>, baud: u32) -> Result<Vec<u8>, EncodeError> {
    let port = port.unwrap_or(1);
    if !matches!(port, 1 | 2) {
        return Err(EncodeError::InvalidPort(port));
    }
    let mut payload = [0u8; 20];
    payload[0] = port;
    // mode: 8 data bits, no parity, 1 stop bit
    payload[4] = 0xc0;
    payload[5] = 0x08;
    payload[8..12].copy_from_slice(&baud.to_le_bytes());
    payload[12] = 0x03;
    payload[14] = 0x03;
    Ok(frame(CLASS_CFG, CFG_PRT, &payload))
}

/// What a UBX-CFG-RST clears from battery backed memory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetType {
    Hot,
    Warm,
    Cold,
}

impl ResetType {
    pub fn nav_bbr_mask(self) -> u16 {
        match self {
            ResetType::Hot => 0x0000,
            ResetType::Warm => 0x0001,
            ResetType::Cold => 0x0fff,
        }
    }
}

/// UBX-CFG-RST with a hardware reset, which drops a USB connection
pub fn cfg_rst(reset: ResetType) -> Vec<u8> {
    let mask = reset.nav_bbr_mask().to_le_bytes();
    frame(CLASS_CFG, CFG_RST, &[mask[0], mask[1], 0, 0])
}

/// UBX-CFG-TP5 polls for time pulse 0 and time pulse 1
pub fn cfg_tp5() -> Vec<Vec<u8>> {
    vec![poll(CLASS_CFG, CFG_TP5), frame(CLASS_CFG, CFG_TP5, &[1])]
}

/// UBX-MON-COMMS poll (protocol 27 and up)
pub fn mon_comms() -> Vec<u8> {
    poll(CLASS_MON, MON_COMMS)
}

pub const LAYER_RAM: u8 = 0x01;
pub const LAYER_BBR: u8 = 0x02;
pub const LAYER_FLASH: u8 = 0x04;

fn resolve_key(name: &str) -> Result<u32, EncodeError> {
    lookup_by_name(name)
        .map(|item| item.key)
        .ok_or_else(|| EncodeError::UnknownConfigItem(name.to_string()))
}

fn cfg_val_keys<S: AsRef<str>>(id: u8, layers: u8, names: &[S]) -> Result<Vec<u8>, EncodeError> {
    let mut payload = vec![0, layers, 0, 0];
    for name in names {
        let key = resolve_key(name.as_ref())?;
        payload.extend_from_slice(&key.to_le_bytes());
    }
    build_frame(CLASS_CFG, id, &payload)
}

/// UBX-CFG-VALDEL: delete items from the given layers. The RAM layer
/// cannot be deleted from, usual layers are BBR and flash.
pub fn cfg_valdel<S: AsRef<str>>(layers: u8, names: &[S]) -> Result<Vec<u8>, EncodeError> {
    cfg_val_keys(CFG_VALDEL, layers, names)
}

/// UBX-CFG-VALGET request for items in one layer (0 is RAM)
pub fn cfg_valget<S: AsRef<str>>(layer: u8, names: &[S]) -> Result<Vec<u8>, EncodeError> {
    cfg_val_keys(CFG_VALGET, layer, names)
}

/// UBX-CFG-VALSET from "NAME,value" pairs. Values are encoded with the
/// item's own width and type.
pub fn cfg_valset<S: AsRef<str>>(layers: u8, pairs: &[S]) -> Result<Vec<u8>, EncodeError> {
    let mut payload = vec![0, layers, 0, 0];
    for pair in pairs {
        let pair = pair.as_ref();
        let (name, value) = pair
            .split_once(',')
            .ok_or_else(|| EncodeError::MalformedConfigPair(pair.to_string()))?;
        let name = name.trim();
        let item =
            lookup_by_name(name).ok_or_else(|| EncodeError::UnknownConfigItem(name.to_string()))?;
        payload.extend_from_slice(&item.key.to_le_bytes());
        payload.extend_from_slice(&item.encode_value(value)?);
    }
    build_frame(CLASS_CFG, CFG_VALSET, &payload)
}

/// Keys as they appear in a VALGET/VALDEL payload, for logging
pub fn payload_keys(payload: &[u8]) -> Vec<KeyId> {
    payload
        .get(4..)
        .unwrap_or(&[])
        .chunks_exact(KeyId::SIZE)
        .map(|k| KeyId(u32::from_le_bytes([k[0], k[1], k[2], k[3]])))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parser::{Frame, FrameDecoder};
    use crate::ubx_packets::{Decoded, UbxMessage};

    fn payload(frame: &[u8]) -> &[u8] {
        &frame[6..frame.len() - 2]
    }

    fn ids(frames: &[Vec<u8>]) -> Vec<(u8, u8)> {
        frames.iter().map(|f| (f[6], f[7])).collect()
    }

    #[test]
    fn ack_frame() {
        assert_eq!(
            build_frame(0x05, 0x01, &[0x06, 0x01]).unwrap(),
            vec![0xb5, 0x62, 0x05, 0x01, 0x02, 0x00, 0x06, 0x01, 0x0f, 0x38]
        );
    }

    #[test]
    fn oversized_payload() {
        let big = vec![0u8; 70_000];
        assert_eq!(
            build_frame(0x06, 0x8a, &big),
            Err(EncodeError::PayloadTooLong(70_000))
        );
    }

    #[test]
    fn poll_by_name() {
        assert_eq!(poll_named("MON-VER").unwrap(), poll(0x0a, 0x04));
        assert!(poll_named("UBX-NAV-PVT").is_err());
        assert_eq!(poll_named("ubx-nav-sig").unwrap(), poll(0x01, 0x43));
        assert_eq!(poll_named("Ubx-Mon-Ver").unwrap(), poll(0x0a, 0x04));
        assert_eq!(poll_named("nav-sig").unwrap(), poll(0x01, 0x43));
        assert!(poll_named("UBX").is_err());
        assert_eq!(
            poll_named("NAV-FOO"),
            Err(EncodeError::UnknownPoll("NAV-FOO".into()))
        );
    }

    #[test]
    fn binary_policy_by_protver() {
        let old = enable(Feature::Binary, &Options::new().with_protver(14));
        assert_eq!(
            ids(&old),
            vec![
                (0x01, 0x04),
                (0x01, 0x06),
                (0x01, 0x20),
                (0x01, 0x32),
                (0x01, 0x30),
                (0x01, 0x35)
            ]
        );
        assert_eq!(payload(&old[3]), &[0x01, 0x32, 10]);
        assert_eq!(payload(&old[5]), &[0x01, 0x35, 0]);

        let m8 = enable(Feature::Binary, &Options::new().with_protver(18));
        assert_eq!(
            ids(&m8),
            vec![
                (0x01, 0x04),
                (0x01, 0x07),
                (0x01, 0x20),
                (0x01, 0x32),
                (0x01, 0x35),
                (0x01, 0x30),
                (0x01, 0x61)
            ]
        );

        let m9 = disable(Feature::Binary, &Options::new().with_protver(27));
        assert_eq!(
            ids(&m9),
            vec![(0x01, 0x04), (0x01, 0x07), (0x01, 0x20), (0x01, 0x35), (0x01, 0x61)]
        );
        assert!(m9.iter().all(|f| payload(f)[2] == 0));
    }

    #[test]
    fn gnss_blocks() {
        let gps = enable(Feature::Gps, &Options::new());
        assert_eq!(gps.len(), 2);
        assert_eq!(payload(&gps[0]), &[0, 0, 0xff, 1, 0, 8, 16, 0, 1, 0, 1, 1]);
        assert_eq!(payload(&gps[1]), &[0, 0, 0xff, 1, 5, 0, 3, 0, 1, 0, 5, 1]);
        let glo = disable(Feature::Glonass, &Options::new());
        assert_eq!(payload(&glo[0]), &[0, 0, 0xff, 1, 6, 8, 14, 0, 0, 0, 1, 1]);
    }

    #[test]
    fn survey_in() {
        let cmds = enable(Feature::SurveyIn, &Options::new());
        let p = payload(&cmds[0]);
        assert_eq!(p.len(), 28);
        assert_eq!(p[0], 1);
        assert_eq!(&p[20..24], &300u32.to_le_bytes());
        assert_eq!(&p[24..28], &50_000u32.to_le_bytes());
    }

    #[test]
    fn feature_names() {
        for f in Feature::ALL {
            assert_eq!(Feature::from_name(f.name()), Some(f));
        }
        assert_eq!(Feature::from_name("surveyin"), Some(Feature::SurveyIn));
        assert_eq!(Feature::from_name("WAAS"), None);
        assert_eq!(enable(Feature::Nmea, &Options::new()).len(), 9);
    }

    #[test]
    fn save_and_clear() {
        assert_eq!(
            payload(&cfg_cfg(SaveClear::Save)),
            &[0, 0, 0, 0, 0x1f, 0x0f, 0, 0, 0x1f, 0x0f, 0, 0, 0x17]
        );
        assert_eq!(
            payload(&cfg_cfg(SaveClear::Clear)),
            &[0x1f, 0x0f, 0, 0, 0, 0, 0, 0, 0x1f, 0x0f, 0, 0, 0x17]
        );
    }

    #[test]
    fn simple_commands() {
        assert_eq!(payload(&cfg_rst(ResetType::Cold)), &[0xff, 0x0f, 0, 0]);
        assert_eq!(payload(&cfg_rst(ResetType::Warm)), &[0x01, 0, 0, 0]);
        assert_eq!(payload(&cfg_pms(Some(1))), &[0, 1, 0, 0, 0, 0, 0, 0]);
        assert!(payload(&cfg_pms(None)).is_empty());
        assert_eq!(payload(&cfg_prt(Some(3))), &[3]);
        assert_eq!(cfg_tp5().len(), 2);
        let nav5 = cfg_nav5_model(4);
        assert_eq!(&payload(&nav5)[..3], &[1, 0, 4]);
        assert_eq!(mon_comms(), poll(0x0a, 0x36));
    }

    #[test]
    fn speed() {
        let p = set_speed(None, 115_200).unwrap();
        let p = payload(&p);
        assert_eq!(p[0], 1);
        assert_eq!(&p[8..12], &115_200u32.to_le_bytes());
        assert_eq!(set_speed(Some(3), 9600), Err(EncodeError::InvalidPort(3)));
    }

    #[test]
    fn valset_encodes_registry_widths() {
        let frame = cfg_valset(7, &["CFG-RATE-MEAS,100", "CFG-NAVSPG-DYNMODEL,4"]).unwrap();
        assert_eq!(
            payload(&frame),
            &[0, 7, 0, 0, 0x01, 0x00, 0x21, 0x30, 100, 0, 0x21, 0x00, 0x11, 0x20, 4]
        );
    }

    #[test]
    fn valset_errors() {
        assert_eq!(
            cfg_valset(7, &["CFG-NOPE,1"]),
            Err(EncodeError::UnknownConfigItem("CFG-NOPE".into()))
        );
        assert_eq!(
            cfg_valset(7, &["CFG-RATE-MEAS"]),
            Err(EncodeError::MalformedConfigPair("CFG-RATE-MEAS".into()))
        );
        assert!(matches!(
            cfg_valset(7, &["CFG-RATE-MEAS,fast"]),
            Err(EncodeError::InvalidConfigValue { .. })
        ));
    }

    #[test]
    fn valget_and_valdel() {
        let get = cfg_valget(0, &["CFG-RATE-MEAS"]).unwrap();
        assert_eq!(payload(&get), &[0, 0, 0, 0, 0x01, 0x00, 0x21, 0x30]);
        assert_eq!(payload_keys(payload(&get)), vec![KeyId(0x3021_0001)]);
        let del = cfg_valdel(LAYER_BBR | LAYER_FLASH, &["CFG-RATE-MEAS"]).unwrap();
        assert_eq!(&payload(&del)[..4], &[0, 6, 0, 0]);
    }

    #[test]
    fn built_frames_decode() {
        let decoder = FrameDecoder::default();
        let frame = cfg_msg(0x01, 0x07, Some(1));
        match decoder.decode_frame(&frame) {
            (n, Some(Frame::Ubx { frame: ubx, decoded: Decoded::Message(msg) })) => {
                assert_eq!(n, frame.len());
                assert_eq!(n, 11);
                assert_eq!(ubx.length(), 3);
                assert!(ubx.checksum_ok);
                assert_eq!(msg.type_name, "UBX-CFG-MSG");
                assert!(matches!(msg.message, UbxMessage::CfgMsg(_)));
            },
            other => panic!("{:?}", other),
        }
    }
}
