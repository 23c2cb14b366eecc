use crate::{
    error::ParserError,
    ubx_packets::{check_len, PayloadDecoder},
};

/// Unique chip ID
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SecUniqid {
    pub version: u8,
    /// Five bytes, six on version 2 (u-blox M10 and later)
    pub unique_id: Vec<u8>,
}

impl SecUniqid {
    pub fn unique_id_hex(&self) -> String {
        self.unique_id.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl PayloadDecoder for SecUniqid {
    const NAME: &'static str = "UBX-SEC-UNIQID";

    fn decode(payload: &[u8]) -> Result<Self, ParserError> {
        check_len::<Self>(payload, 9)?;
        let version = payload[0];
        let end = if version >= 2 && payload.len() >= 10 {
            10
        } else {
            9
        };
        Ok(Self {
            version,
            unique_id: payload[4..end].to_vec(),
        })
    }
}
