use bitflags::bitflags;

use crate::{
    error::ParserError,
    ubx_packets::{
        check_len,
        layout::{le_bitflags, read_blocks, ubx_layout},
        PayloadDecoder,
    },
};

use super::gnss_label;

bitflags! {
    /// Receiver tracking status of RXM-RAWX
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct RecStat: u8 {
        /// Leap seconds have been determined
        const LEAP_SEC = 0x01;
        /// Clock reset applied
        const CLK_RESET = 0x02;
    }
}

bitflags! {
    /// Per-measurement tracking status of RXM-RAWX
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct TrkStat: u8 {
        const PR_VALID = 0x01;
        const CP_VALID = 0x02;
        const HALF_CYC = 0x04;
        const SUB_HALF_CYC = 0x08;
    }
}

le_bitflags! {
    RecStat: u8,
    TrkStat: u8,
}

ubx_layout! {
    pub struct RxmMeasxHeader [44] {
        version: u8 = 0,
        /// ms
        gps_tow: u32 = 4,
        glo_tow: u32 = 8,
        bds_tow: u32 = 12,
        qzss_tow: u32 = 20,
        /// 2^-4 ms
        gps_tow_acc: u16 = 24,
        glo_tow_acc: u16 = 26,
        bds_tow_acc: u16 = 28,
        qzss_tow_acc: u16 = 32,
        num_sv: u8 = 34,
        flags: u8 = 35,
    }
}

ubx_layout! {
    pub struct RxmMeasxSv [24] {
        gnss_id: u8 = 0,
        sv_id: u8 = 1,
        c_no: u8 = 2,
        mpath_indic: u8 = 3,
        /// 0.04 m/s
        doppler_ms: i32 = 4,
        /// 0.2 Hz
        doppler_hz: i32 = 8,
        whole_chips: u16 = 12,
        frac_chips: u16 = 14,
        /// 2^-21 ms
        code_phase: u32 = 16,
        int_code_phase: u8 = 20,
        pseu_range_rms_err: u8 = 21,
    }
}

/// Satellite Measurements for RRLP
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RxmMeasx {
    pub header: RxmMeasxHeader,
    pub blocks: Vec<RxmMeasxSv>,
}

impl PayloadDecoder for RxmMeasx {
    const NAME: &'static str = "UBX-RXM-MEASX";

    fn decode(payload: &[u8]) -> Result<Self, ParserError> {
        check_len::<Self>(payload, RxmMeasxHeader::LEN)?;
        Ok(Self {
            header: RxmMeasxHeader::read(payload, 0),
            blocks: read_blocks(payload, RxmMeasxHeader::LEN, RxmMeasxSv::LEN, |b| {
                RxmMeasxSv::read(b, 0)
            }),
        })
    }
}

ubx_layout! {
    pub struct RxmRawHeader [8] {
        itow: i32 = 0,
        week: i16 = 4,
        num_sv: u8 = 6,
    }
}

ubx_layout! {
    pub struct RxmRawSv [24] {
        /// Carrier phase, cycles
        cp_mes: f64 = 0,
        /// Pseudorange, m
        pr_mes: f64 = 8,
        /// Doppler, Hz
        do_mes: f32 = 16,
        sv: u8 = 20,
        mes_qi: i8 = 21,
        cno: i8 = 22,
        /// Loss of lock indicator
        lli: u8 = 23,
    }
}

/// Raw Measurement Data, u-blox 6 and older
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RxmRaw {
    pub header: RxmRawHeader,
    pub blocks: Vec<RxmRawSv>,
}

impl PayloadDecoder for RxmRaw {
    const NAME: &'static str = "UBX-RXM-RAW";

    fn decode(payload: &[u8]) -> Result<Self, ParserError> {
        check_len::<Self>(payload, RxmRawHeader::LEN)?;
        Ok(Self {
            header: RxmRawHeader::read(payload, 0),
            blocks: read_blocks(payload, RxmRawHeader::LEN, RxmRawSv::LEN, |b| {
                RxmRawSv::read(b, 0)
            }),
        })
    }

    fn itow(&self) -> Option<u32> {
        u32::try_from(self.header.itow).ok()
    }
}

ubx_layout! {
    pub struct RxmRawxHeader [16] {
        /// Receiver time of week, s
        rcv_tow: f64 = 0,
        week: u16 = 8,
        leap_s: i8 = 10,
        num_meas: u8 = 11,
        rec_stat: RecStat = 12,
        /// Zero before protocol 18
        version: u8 = 13,
    }
}

ubx_layout! {
    pub struct RxmRawxMeas [32] {
        /// Pseudorange, m
        pr_mes: f64 = 0,
        /// Carrier phase, cycles
        cp_mes: f64 = 8,
        /// Doppler, Hz
        do_mes: f32 = 16,
        gnss_id: u8 = 20,
        sv_id: u8 = 21,
        sig_id: u8 = 22,
        freq_id: u8 = 23,
        /// ms
        locktime: u16 = 24,
        cno: u8 = 26,
        pr_stdev: u8 = 27,
        cp_stdev: u8 = 28,
        do_stdev: u8 = 29,
        trk_stat: TrkStat = 30,
    }
}

impl RxmRawxMeas {
    pub fn label(&self) -> String {
        gnss_label(self.gnss_id, self.sv_id, self.sig_id)
    }
}

/// Multi-GNSS Raw Measurement Data
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RxmRawx {
    pub header: RxmRawxHeader,
    pub blocks: Vec<RxmRawxMeas>,
}

impl PayloadDecoder for RxmRawx {
    const NAME: &'static str = "UBX-RXM-RAWX";

    fn decode(payload: &[u8]) -> Result<Self, ParserError> {
        check_len::<Self>(payload, RxmRawxHeader::LEN)?;
        Ok(Self {
            header: RxmRawxHeader::read(payload, 0),
            blocks: read_blocks(payload, RxmRawxHeader::LEN, RxmRawxMeas::LEN, |b| {
                RxmRawxMeas::read(b, 0)
            }),
        })
    }
}

/// Subframe Buffer: ten 30-bit navigation data words
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RxmSfrb {
    pub chn: u8,
    pub svid: u8,
    pub words: Vec<u32>,
}

impl PayloadDecoder for RxmSfrb {
    const NAME: &'static str = "UBX-RXM-SFRB";

    fn decode(payload: &[u8]) -> Result<Self, ParserError> {
        check_len::<Self>(payload, 42)?;
        Ok(Self {
            chn: payload[0],
            svid: payload[1],
            words: read_words(&payload[..42], 2),
        })
    }
}

ubx_layout! {
    pub struct RxmSfrbxHeader [8] {
        gnss_id: u8 = 0,
        sv_id: u8 = 1,
        freq_id: u8 = 3,
        num_words: u8 = 4,
        chn: u8 = 5,
        version: u8 = 6,
    }
}

/// Broadcast Navigation Data Subframe
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RxmSfrbx {
    pub header: RxmSfrbxHeader,
    pub words: Vec<u32>,
}

impl PayloadDecoder for RxmSfrbx {
    const NAME: &'static str = "UBX-RXM-SFRBX";

    fn decode(payload: &[u8]) -> Result<Self, ParserError> {
        check_len::<Self>(payload, RxmSfrbxHeader::LEN)?;
        Ok(Self {
            header: RxmSfrbxHeader::read(payload, 0),
            words: read_words(payload, RxmSfrbxHeader::LEN),
        })
    }
}

fn read_words(payload: &[u8], start: usize) -> Vec<u32> {
    read_blocks(payload, start, 4, |b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
}

ubx_layout! {
    pub struct RxmSvsiHeader [8] {
        itow: u32 = 0,
        week: i16 = 4,
        num_vis: u8 = 6,
        num_sv: u8 = 7,
    }
}

ubx_layout! {
    pub struct RxmSvsiSv [6] {
        svid: u8 = 0,
        sv_flag: u8 = 1,
        azim: i16 = 2,
        elev: i8 = 4,
        age: u8 = 5,
    }
}

/// SV Status Info
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RxmSvsi {
    pub header: RxmSvsiHeader,
    pub blocks: Vec<RxmSvsiSv>,
}

impl PayloadDecoder for RxmSvsi {
    const NAME: &'static str = "UBX-RXM-SVSI";

    fn decode(payload: &[u8]) -> Result<Self, ParserError> {
        check_len::<Self>(payload, RxmSvsiHeader::LEN)?;
        Ok(Self {
            header: RxmSvsiHeader::read(payload, 0),
            blocks: read_blocks(payload, RxmSvsiHeader::LEN, RxmSvsiSv::LEN, |b| {
                RxmSvsiSv::read(b, 0)
            }),
        })
    }

    fn itow(&self) -> Option<u32> {
        Some(self.header.itow)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rawx_measurements() {
        let mut payload = Vec::new();
        payload.extend_from_slice(&345_600.5f64.to_le_bytes());
        payload.extend_from_slice(&2295u16.to_le_bytes());
        payload.extend_from_slice(&[18, 1, 0x01, 1, 0, 0]);
        payload.extend_from_slice(&21_000_000.25f64.to_le_bytes());
        payload.extend_from_slice(&110_000_000.5f64.to_le_bytes());
        payload.extend_from_slice(&(-1234.5f32).to_le_bytes());
        payload.extend_from_slice(&[0, 7, 0, 0]);
        payload.extend_from_slice(&500u16.to_le_bytes());
        payload.extend_from_slice(&[42, 3, 2, 1, 0x07, 0]);
        let rawx = RxmRawx::decode(&payload).unwrap();
        assert_eq!(rawx.header.rcv_tow, 345_600.5);
        assert!(rawx.header.rec_stat.contains(RecStat::LEAP_SEC));
        let meas = &rawx.blocks[0];
        assert_eq!(meas.pr_mes, 21_000_000.25);
        assert_eq!(meas.do_mes, -1234.5);
        assert_eq!(meas.locktime, 500);
        assert_eq!(meas.label(), "GPS 7 L1C/A");
        assert!(meas.trk_stat.contains(TrkStat::PR_VALID | TrkStat::CP_VALID | TrkStat::HALF_CYC));
        assert_eq!(rawx.itow(), None);
    }

    #[test]
    fn sfrbx_words() {
        let mut payload = vec![0, 3, 0, 0, 2, 0, 2, 0];
        payload.extend_from_slice(&0x22c0_0e1cu32.to_le_bytes());
        payload.extend_from_slice(&0x0000_1234u32.to_le_bytes());
        payload.push(0xff);
        let sfrbx = RxmSfrbx::decode(&payload).unwrap();
        assert_eq!(sfrbx.header.sv_id, 3);
        assert_eq!(sfrbx.words, vec![0x22c0_0e1c, 0x1234]);
    }

    #[test]
    fn sfrb_needs_ten_words() {
        assert!(RxmSfrb::decode(&[0; 41]).is_err());
        let sfrb = RxmSfrb::decode(&[1; 42]).unwrap();
        assert_eq!(sfrb.words.len(), 10);
        assert_eq!(sfrb.words[0], 0x0101_0101);
    }

    #[test]
    fn raw_and_svsi_itow() {
        let mut payload = vec![0u8; 8];
        payload[0..4].copy_from_slice(&1000i32.to_le_bytes());
        assert_eq!(RxmRaw::decode(&payload).unwrap().itow(), Some(1000));
        let mut svsi = vec![0u8; 8];
        svsi.extend([12, 0x1f, 0x2c, 0x01, 45, 0x25]);
        let svsi = RxmSvsi::decode(&svsi).unwrap();
        assert_eq!(svsi.blocks[0].azim, 300);
        assert_eq!(svsi.blocks[0].elev, 45);
    }
}
