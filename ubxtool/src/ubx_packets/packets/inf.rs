use crate::{error::ParserError, ubx_packets::PayloadDecoder};

/// Free text carried by the UBX-INF messages
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InfText {
    pub text: String,
}

impl PayloadDecoder for InfText {
    const NAME: &'static str = "UBX-INF";

    fn decode(payload: &[u8]) -> Result<Self, ParserError> {
        Ok(Self {
            text: String::from_utf8_lossy(payload).into_owned(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn inf_text_is_lossy() {
        let inf = InfText::decode(b"ANTSTATUS=OK").unwrap();
        assert_eq!(inf.text, "ANTSTATUS=OK");
        let inf = InfText::decode(&[b'a', 0xff, b'b']).unwrap();
        assert_eq!(inf.text, "a\u{fffd}b");
    }
}
