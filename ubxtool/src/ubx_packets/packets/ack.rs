use crate::{
    error::ParserError,
    ubx_packets::{check_len, class_id_label, layout::ubx_layout, PayloadDecoder},
};

ubx_layout! {
    /// Message Acknowledged / Not-Acknowledged
    pub struct Ack [2] {
        /// Class of the acknowledged message
        class: u8 = 0,
        /// Id of the acknowledged message
        msg_id: u8 = 1,
    }
}

impl Ack {
    /// Label of the message this acknowledges
    pub fn target(&self) -> String {
        class_id_label(self.class, self.msg_id)
    }
}

impl PayloadDecoder for Ack {
    const NAME: &'static str = "UBX-ACK-ACK";

    fn decode(payload: &[u8]) -> Result<Self, ParserError> {
        check_len::<Self>(payload, Self::LEN)?;
        Ok(Self::read(payload, 0))
    }
}
