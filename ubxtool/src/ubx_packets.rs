use std::fmt;

use crate::error::ParserError;

pub(crate) mod dispatch;
pub(crate) mod layout;
mod packets;
mod types;

pub use dispatch::{class_id_label, lookup, type_name, ClassEntry, IdEntry, CLASSES};
pub use layout::{FieldDesc, FieldKind, LeField};
pub use packets::*;
pub use types::*;

/// Capability shared by every payload decoder
pub trait PayloadDecoder: Sized {
    /// Full message name, e.g. "UBX-NAV-PVT"
    const NAME: &'static str;

    /// Decode a non-empty payload
    fn decode(payload: &[u8]) -> Result<Self, ParserError>;

    /// GPS time of week of the navigation epoch, in milliseconds
    fn itow(&self) -> Option<u32> {
        None
    }
}

/// Entry point stored in the dispatch table
pub type DecodeFn = fn(&[u8]) -> Result<UbxMessage, ParserError>;

/// Fails with `BadLength` when `payload` is shorter than `min`
pub(crate) fn check_len<T: PayloadDecoder>(payload: &[u8], min: usize) -> Result<(), ParserError> {
    if payload.len() < min {
        Err(ParserError::BadLength {
            packet: T::NAME,
            min,
            got: payload.len(),
        })
    } else {
        Ok(())
    }
}

/// `PayloadDecoder` for messages that are a fixed layout starting with iTow
macro_rules! itow_decoder {
    ($($ty:ident => $name:literal),* $(,)?) => {
        $(
            impl $crate::ubx_packets::PayloadDecoder for $ty {
                const NAME: &'static str = $name;

                fn decode(payload: &[u8]) -> Result<Self, $crate::error::ParserError> {
                    $crate::ubx_packets::check_len::<Self>(payload, Self::LEN)?;
                    Ok(Self::read(payload, 0))
                }

                fn itow(&self) -> Option<u32> {
                    Some(self.itow)
                }
            }
        )*
    };
}
pub(crate) use itow_decoder;

macro_rules! ubx_messages {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        /// A decoded UBX payload
        #[derive(Debug, Clone, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        pub enum UbxMessage {
            /// Empty payload: the frame is a poll for this message
            PollRequest,
            $($variant($ty),)*
        }

        impl UbxMessage {
            /// GPS time of week carried by the message, if any
            pub fn itow(&self) -> Option<u32> {
                match self {
                    UbxMessage::PollRequest => None,
                    $(UbxMessage::$variant(msg) => PayloadDecoder::itow(msg),)*
                }
            }
        }

        /// One decoding function per message, referenced by the dispatch table
        #[allow(non_snake_case)]
        pub(crate) mod decode_fns {
            use super::*;

            $(
                pub(crate) fn $variant(payload: &[u8]) -> Result<UbxMessage, ParserError> {
                    if payload.is_empty() {
                        return Ok(UbxMessage::PollRequest);
                    }
                    <$ty as PayloadDecoder>::decode(payload).map(UbxMessage::$variant)
                }
            )*
        }
    };
}

ubx_messages! {
    AckAck(Ack),
    AckNak(Ack),
    CfgAnt(CfgAnt),
    CfgCfg(CfgCfg),
    CfgGnss(CfgGnss),
    CfgMsg(CfgMsg),
    CfgNav5(CfgNav5),
    CfgNavx5(CfgNavx5),
    CfgPms(CfgPms),
    CfgPrt(CfgPrt),
    CfgRst(CfgRst),
    CfgSbas(CfgSbas),
    CfgTmode2(CfgTmode2),
    CfgTp5(CfgTp5),
    CfgUsb(CfgUsb),
    CfgValdel(CfgValdel),
    CfgValget(CfgValget),
    CfgValset(CfgValset),
    InfError(InfText),
    InfWarning(InfText),
    InfNotice(InfText),
    InfTest(InfText),
    InfDebug(InfText),
    MonComms(MonComms),
    MonIo(MonIo),
    MonVer(MonVer),
    NavClock(NavClock),
    NavDgps(NavDgps),
    NavDop(NavDop),
    NavEoe(NavEoe),
    NavGeofence(NavGeofence),
    NavHpPosEcef(NavHpPosEcef),
    NavHpPosLlh(NavHpPosLlh),
    NavPosEcef(NavPosEcef),
    NavPosLlh(NavPosLlh),
    NavPvt(NavPvt),
    NavSat(NavSat),
    NavSbas(NavSbas),
    NavSig(NavSig),
    NavSol(NavSol),
    NavStatus(NavStatus),
    NavSvin(NavSvin),
    NavSvinfo(NavSvinfo),
    NavTimeBds(NavTimeBds),
    NavTimeGal(NavTimeGal),
    NavTimeGlo(NavTimeGlo),
    NavTimeGps(NavTimeGps),
    NavTimeLs(NavTimeLs),
    NavTimeUtc(NavTimeUtc),
    NavVelEcef(NavVelEcef),
    NavVelNed(NavVelNed),
    RxmMeasx(RxmMeasx),
    RxmRaw(RxmRaw),
    RxmRawx(RxmRawx),
    RxmSfrb(RxmSfrb),
    RxmSfrbx(RxmSfrbx),
    RxmSvsi(RxmSvsi),
    SecUniqid(SecUniqid),
    TimSvin(TimSvin),
    TimTm2(TimTm2),
    TimTp(TimTp),
}

/// A recognized message together with the name it was dispatched under
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DecodedMessage {
    pub class: u8,
    pub id: u8,
    pub type_name: &'static str,
    pub message: UbxMessage,
}

impl DecodedMessage {
    pub fn itow(&self) -> Option<u32> {
        self.message.itow()
    }
}

/// What is left of a frame nobody could decode
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RawFallback {
    pub class_id_label: String,
    pub length: u16,
    /// Payload bytes as comma separated hex pairs
    pub hex_payload: String,
}

impl RawFallback {
    pub fn new(class: u8, id: u8, payload: &[u8]) -> Self {
        let hex_payload = payload
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join(",");
        Self {
            class_id_label: class_id_label(class, id),
            length: payload.len() as u16,
            hex_payload,
        }
    }
}

impl fmt::Display for RawFallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, len {:#x}, raw {}",
            self.class_id_label, self.length, self.hex_payload
        )
    }
}

/// Outcome of handing a UBX frame to the dispatch table
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    Message(DecodedMessage),
    /// A decoder exists but rejected the payload
    Invalid {
        type_name: &'static str,
        error: ParserError,
    },
    Raw(RawFallback),
}

/// Look up the decoder for `class`/`id` and run it
pub fn decode_payload(class: u8, id: u8, payload: &[u8]) -> Decoded {
    match lookup(class, id) {
        Some(&IdEntry {
            name,
            decoder: Some(decoder),
            ..
        }) => match decoder(payload) {
            Ok(message) => Decoded::Message(DecodedMessage {
                class,
                id,
                type_name: name,
                message,
            }),
            Err(error) => Decoded::Invalid {
                type_name: name,
                error,
            },
        },
        _ => Decoded::Raw(RawFallback::new(class, id, payload)),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn raw_fallback_format() {
        let raw = RawFallback::new(0x01, 0x05, &[0x01, 0xab]);
        assert_eq!(
            raw.to_string(),
            "Class: NAV(0x1) ID: ATT(0x5), len 0x2, raw 01,ab"
        );
    }

    #[test]
    fn unknown_pair_falls_back_to_raw() {
        match decode_payload(0x77, 0x01, &[0xde, 0xad]) {
            Decoded::Raw(raw) => {
                assert_eq!(raw.class_id_label, "Class: 0x77 ID: 0x1");
                assert_eq!(raw.hex_payload, "de,ad");
            },
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn empty_payload_is_a_poll() {
        match decode_payload(0x01, 0x07, &[]) {
            Decoded::Message(msg) => {
                assert_eq!(msg.type_name, "UBX-NAV-PVT");
                assert_eq!(msg.message, UbxMessage::PollRequest);
            },
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn short_payload_is_bad_length() {
        assert_eq!(
            decode_payload(0x01, 0x04, &[0; 10]),
            Decoded::Invalid {
                type_name: "UBX-NAV-DOP",
                error: ParserError::BadLength {
                    packet: "UBX-NAV-DOP",
                    min: 18,
                    got: 10
                }
            }
        );
    }
}
