use crate::{
    error::ParserError,
    ubx_packets::{
        check_len,
        layout::{read_blocks, read_cstr, ubx_layout},
        PayloadDecoder,
    },
};

use super::port_name;

/// Name of a protocol id in MON-COMMS
pub fn prot_id_name(prot_id: u8) -> &'static str {
    match prot_id {
        0 => "UBX",
        1 => "NMEA",
        2 => "RTCM2",
        5 => "RTCM3",
        255 => "None",
        _ => "Unk",
    }
}

/// Name of the 16-bit port id used by MON-COMMS
pub fn comms_port_name(port_id: u16) -> &'static str {
    match port_id {
        0 => "DDC",
        0x100 => "UART1",
        0x101 => "UNKa",
        0x200 => "UNKb",
        0x201 => "UART2",
        0x300 => "USB",
        0x400 => "SPI",
        _ => "UNK",
    }
}

ubx_layout! {
    pub struct MonCommsHeader [8] {
        version: u8 = 0,
        n_ports: u8 = 1,
        tx_errors: u8 = 2,
        reserved1: u8 = 3,
        prot_id0: u8 = 4,
        prot_id1: u8 = 5,
        prot_id2: u8 = 6,
        prot_id3: u8 = 7,
    }
}

impl MonCommsHeader {
    /// Protocols counted in the `msgs` columns of every port
    pub fn prot_names(&self) -> [&'static str; 4] {
        [
            prot_id_name(self.prot_id0),
            prot_id_name(self.prot_id1),
            prot_id_name(self.prot_id2),
            prot_id_name(self.prot_id3),
        ]
    }
}

ubx_layout! {
    /// Traffic counters of one port
    pub struct MonCommsPort [40] {
        port_id: u16 = 0,
        tx_pending: u16 = 2,
        tx_bytes: u32 = 4,
        tx_usage: u8 = 8,
        tx_peak_usage: u8 = 9,
        rx_pending: u16 = 10,
        rx_bytes: u32 = 12,
        rx_usage: u8 = 16,
        rx_peak_usage: u8 = 17,
        overrun_errs: u16 = 18,
        msgs0: u16 = 20,
        msgs1: u16 = 22,
        msgs2: u16 = 24,
        msgs3: u16 = 26,
        reserved2: u32 = 28,
        reserved3: u32 = 32,
        skipped: u32 = 36,
    }
}

impl MonCommsPort {
    pub fn port_name(&self) -> &'static str {
        comms_port_name(self.port_id)
    }
}

/// Communication port information
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MonComms {
    pub header: MonCommsHeader,
    pub ports: Vec<MonCommsPort>,
}

impl PayloadDecoder for MonComms {
    const NAME: &'static str = "UBX-MON-COMMS";

    fn decode(payload: &[u8]) -> Result<Self, ParserError> {
        check_len::<Self>(payload, MonCommsHeader::LEN)?;
        Ok(Self {
            header: MonCommsHeader::read(payload, 0),
            ports: read_blocks(payload, MonCommsHeader::LEN, MonCommsPort::LEN, |b| {
                MonCommsPort::read(b, 0)
            }),
        })
    }
}

ubx_layout! {
    /// I/O counters of one port, indexed like CFG-PRT port ids
    pub struct MonIoPort [20] {
        rx_bytes: u32 = 0,
        tx_bytes: u32 = 4,
        parity_errs: u16 = 8,
        framing_errs: u16 = 10,
        overrun_errs: u16 = 12,
        break_cond: u16 = 14,
        reserved: u32 = 16,
    }
}

/// I/O Subsystem Status
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MonIo {
    pub ports: Vec<MonIoPort>,
}

impl MonIo {
    /// Ports paired with their names
    pub fn named_ports(&self) -> impl Iterator<Item = (&'static str, &MonIoPort)> {
        self.ports
            .iter()
            .enumerate()
            .map(|(i, port)| (port_name(i as u8).unwrap_or("Unk"), port))
    }
}

impl PayloadDecoder for MonIo {
    const NAME: &'static str = "UBX-MON-IO";

    fn decode(payload: &[u8]) -> Result<Self, ParserError> {
        check_len::<Self>(payload, MonIoPort::LEN)?;
        Ok(Self {
            ports: read_blocks(payload, 0, MonIoPort::LEN, |b| MonIoPort::read(b, 0)),
        })
    }
}

/// Receiver/Software Version
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MonVer {
    pub software_version: String,
    pub hardware_version: String,
    /// Extended software information, e.g. "PROTVER=27.11"
    pub extensions: Vec<String>,
}

impl MonVer {
    const EXTENSION_LEN: usize = 30;

    /// Major protocol version announced in the "PROTVER" extension
    pub fn protver(&self) -> Option<u8> {
        self.extensions.iter().find_map(|ext| {
            let rest = ext.strip_prefix("PROTVER")?;
            let rest = rest.trim_start_matches(['=', ' ']);
            let major = rest.split('.').next()?;
            major.trim().parse().ok()
        })
    }
}

impl PayloadDecoder for MonVer {
    const NAME: &'static str = "UBX-MON-VER";

    fn decode(payload: &[u8]) -> Result<Self, ParserError> {
        check_len::<Self>(payload, 40)?;
        Ok(Self {
            software_version: read_cstr(payload, 0..30),
            hardware_version: read_cstr(payload, 30..40),
            extensions: read_blocks(payload, 40, Self::EXTENSION_LEN, |b| {
                read_cstr(b, 0..Self::EXTENSION_LEN)
            }),
        })
    }
}
