//! RTCM3 frames passed through the UBX stream "as is"

use crate::constants::{RTCM_CRC_LEN, RTCM_HEADER_SIZE};

/// CRC-24Q generator polynomial, as used by RTCM3 and Qualcomm
const CRC24Q_POLY: u32 = 0x0186_4cfb;

/// CRC-24Q over `bytes`, returned in the low 24 bits
pub fn crc24q(bytes: &[u8]) -> u32 {
    let mut crc: u32 = 0;
    for &byte in bytes {
        crc ^= u32::from(byte) << 16;
        for _ in 0..8 {
            crc <<= 1;
            if crc & 0x0100_0000 != 0 {
                crc ^= CRC24Q_POLY;
            }
        }
    }
    crc & 0x00ff_ffff
}

/// A complete RTCM3 frame: `D3`, 10-bit length, message, 24-bit CRC.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RtcmFrame {
    /// Message number, top 12 bits of the message body
    pub msg_type: u16,
    /// The whole frame, header and CRC included
    pub raw: Vec<u8>,
    pub crc_ok: bool,
}

impl RtcmFrame {
    /// Build from a complete frame, verifying its trailing CRC
    pub(crate) fn from_raw(raw: Vec<u8>) -> Self {
        let body_end = raw.len().saturating_sub(RTCM_CRC_LEN);
        let msg_type = match raw.get(RTCM_HEADER_SIZE..RTCM_HEADER_SIZE + 2) {
            Some(&[hi, lo]) if body_end >= RTCM_HEADER_SIZE + 2 => {
                (u16::from(hi) << 4) | (u16::from(lo) >> 4)
            },
            _ => 0,
        };
        let crc_ok = match raw.get(body_end..) {
            Some(&[a, b, c]) => {
                crc24q(&raw[..body_end]) == u32::from_be_bytes([0, a, b, c])
            },
            _ => false,
        };
        Self {
            msg_type,
            raw,
            crc_ok,
        }
    }

    /// Message body without header and CRC
    pub fn payload(&self) -> &[u8] {
        let end = self.raw.len().saturating_sub(RTCM_CRC_LEN);
        self.raw.get(RTCM_HEADER_SIZE..end).unwrap_or(&[])
    }

    /// Length announced in the header, CRC excluded
    pub fn length(&self) -> usize {
        self.payload().len()
    }
}
