//! CFG-VALSET, CFG-VALGET and CFG-VALDEL: key/value configuration on
//! protocol 27 receivers.

use crate::{
    config::{lookup_by_key, CfgValue, KeyId},
    error::ParserError,
    ubx_packets::{
        check_len,
        layout::{read_at, ubx_layout},
        PayloadDecoder,
    },
};

/// Layer byte value selecting the default layer in VALGET
pub const LAYER_DEFAULT: u8 = 7;

/// "RAM BBR FLASH" style description of a layer byte
pub fn layers_label(layers: u8) -> String {
    match layers {
        LAYER_DEFAULT => "Default".to_string(),
        0 => "RAM".to_string(),
        bits if bits & 0x07 != 0 => [(0x01, "RAM"), (0x02, "BBR"), (0x04, "FLASH")]
            .iter()
            .filter(|(bit, _)| bits & bit != 0)
            .map(|(_, name)| *name)
            .collect::<Vec<_>>()
            .join(" "),
        _ => "Unk".to_string(),
    }
}

pub fn transaction_label(transaction: u8) -> &'static str {
    match transaction {
        0 => "Transactionless",
        1 => "(Re)start Transaction",
        2 => "Continue Transaction",
        3 => "Apply and end Transaction",
        _ => "Unknown",
    }
}

ubx_layout! {
    /// Four byte header shared by the VAL* messages
    pub struct CfgValHeader [4] {
        version: u8 = 0,
        layers: u8 = 1,
        /// Transaction on VALSET/VALDEL, reserved on VALGET
        transaction: u8 = 2,
        reserved: u8 = 3,
    }
}

impl CfgValHeader {
    pub fn layers_label(&self) -> String {
        layers_label(self.layers)
    }

    pub fn transaction_label(&self) -> &'static str {
        transaction_label(self.transaction)
    }
}

/// A configuration key, named through the registry
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CfgKeyEntry {
    pub key: u32,
    pub name: String,
}

impl CfgKeyEntry {
    fn new(key: u32) -> Self {
        Self {
            key,
            name: lookup_by_key(key).name.to_string(),
        }
    }
}

/// A configuration key with its value
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CfgKeyValue {
    pub key: u32,
    pub name: String,
    pub value: CfgValue,
}

fn read_keys(payload: &[u8]) -> Vec<CfgKeyEntry> {
    payload[CfgValHeader::LEN..]
        .chunks_exact(KeyId::SIZE)
        .map(|chunk| CfgKeyEntry::new(read_at(chunk, 0)))
        .collect()
}

/// Walk key/value pairs. The value width comes from the registry entry of
/// each key, so one unknown wide value cannot shift the following pairs.
/// A truncated trailing pair is dropped.
fn read_key_values(payload: &[u8]) -> Vec<CfgKeyValue> {
    let mut pairs = Vec::new();
    let mut offset = CfgValHeader::LEN;
    while offset + KeyId::SIZE <= payload.len() {
        let key: u32 = read_at(payload, offset);
        offset += KeyId::SIZE;
        let item = lookup_by_key(key);
        let Some(value) = item.decode_value(&payload[offset..]) else {
            break;
        };
        offset += item.wire_format().width;
        pairs.push(CfgKeyValue {
            key,
            name: item.name.to_string(),
            value,
        });
    }
    pairs
}

/// Delete configuration items
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CfgValdel {
    pub header: CfgValHeader,
    pub keys: Vec<CfgKeyEntry>,
}

impl PayloadDecoder for CfgValdel {
    const NAME: &'static str = "UBX-CFG-VALDEL";

    fn decode(payload: &[u8]) -> Result<Self, ParserError> {
        check_len::<Self>(payload, CfgValHeader::LEN)?;
        Ok(Self {
            header: CfgValHeader::read(payload, 0),
            keys: read_keys(payload),
        })
    }
}

/// Get configuration items. Version 0 is the poll carrying keys only,
/// version 1 the response carrying values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CfgValget {
    Request {
        header: CfgValHeader,
        keys: Vec<CfgKeyEntry>,
    },
    Response {
        header: CfgValHeader,
        values: Vec<CfgKeyValue>,
    },
}

impl CfgValget {
    /// Protocol version a receiver must speak to send this
    pub fn min_protver(&self) -> Option<u8> {
        match self {
            Self::Request { .. } => None,
            Self::Response { .. } => Some(27),
        }
    }
}

impl PayloadDecoder for CfgValget {
    const NAME: &'static str = "UBX-CFG-VALGET";

    fn decode(payload: &[u8]) -> Result<Self, ParserError> {
        check_len::<Self>(payload, CfgValHeader::LEN)?;
        let header = CfgValHeader::read(payload, 0);
        Ok(if header.version == 0 {
            Self::Request {
                header,
                keys: read_keys(payload),
            }
        } else {
            Self::Response {
                header,
                values: read_key_values(payload),
            }
        })
    }
}

/// Set configuration items
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CfgValset {
    pub header: CfgValHeader,
    pub values: Vec<CfgKeyValue>,
}

impl PayloadDecoder for CfgValset {
    const NAME: &'static str = "UBX-CFG-VALSET";

    fn decode(payload: &[u8]) -> Result<Self, ParserError> {
        check_len::<Self>(payload, CfgValHeader::LEN)?;
        Ok(Self {
            header: CfgValHeader::read(payload, 0),
            values: read_key_values(payload),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn layer_labels() {
        assert_eq!(layers_label(7), "Default");
        assert_eq!(layers_label(0), "RAM");
        assert_eq!(layers_label(1), "RAM");
        assert_eq!(layers_label(6), "BBR FLASH");
        assert_eq!(layers_label(0x80), "Unk");
        assert_eq!(transaction_label(3), "Apply and end Transaction");
    }

    #[test]
    fn valset_pairs_use_item_widths() {
        // CFG-RATE-MEAS (U2) = 1000, CFG-NAVSPG-DYNMODEL (E1) = 4
        let mut payload = vec![0, 7, 0, 0];
        payload.extend_from_slice(&0x3021_0001u32.to_le_bytes());
        payload.extend_from_slice(&1000u16.to_le_bytes());
        payload.extend_from_slice(&0x2011_0021u32.to_le_bytes());
        payload.push(4);
        let valset = CfgValset::decode(&payload).unwrap();
        assert_eq!(valset.header.layers_label(), "Default");
        assert_eq!(valset.values.len(), 2);
        assert_eq!(valset.values[0].name, "CFG-RATE-MEAS");
        assert_eq!(valset.values[0].value, CfgValue::Unsigned(1000));
        assert_eq!(valset.values[1].name, "CFG-NAVSPG-DYNMODEL");
        assert_eq!(valset.values[1].value, CfgValue::Unsigned(4));
    }

    #[test]
    fn valset_drops_truncated_value() {
        let mut payload = vec![0, 1, 0, 0];
        payload.extend_from_slice(&0x3021_0001u32.to_le_bytes());
        payload.push(0xe8);
        assert!(CfgValset::decode(&payload).unwrap().values.is_empty());
    }

    #[test]
    fn valget_request_and_response() {
        let mut payload = vec![0, 0, 0, 0];
        payload.extend_from_slice(&0x3021_0001u32.to_le_bytes());
        match CfgValget::decode(&payload).unwrap() {
            CfgValget::Request { keys, .. } => {
                assert_eq!(keys[0].name, "CFG-RATE-MEAS");
            },
            other => panic!("unexpected {:?}", other),
        }

        let mut payload = vec![1, 0, 0, 0];
        payload.extend_from_slice(&0x3021_0001u32.to_le_bytes());
        payload.extend_from_slice(&200u16.to_le_bytes());
        let valget = CfgValget::decode(&payload).unwrap();
        assert_eq!(valget.min_protver(), Some(27));
        match valget {
            CfgValget::Response { values, .. } => {
                assert_eq!(values[0].value, CfgValue::Unsigned(200));
            },
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn valdel_unknown_key_is_synthesized() {
        let mut payload = vec![0, 6, 0, 0];
        payload.extend_from_slice(&0x10fe_0001u32.to_le_bytes());
        let valdel = CfgValdel::decode(&payload).unwrap();
        assert_eq!(valdel.header.layers_label(), "BBR FLASH");
        assert_eq!(valdel.keys[0].name, "CFG-254-1");
    }

    #[test]
    fn short_header_is_bad_length() {
        assert!(CfgValdel::decode(&[0, 0]).is_err());
    }
}
