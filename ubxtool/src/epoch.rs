//! Grouping of decoded messages into navigation epochs

use crate::ubx_packets::DecodedMessage;

/// Collects messages that share a GPS time of week.
///
/// A group is closed by the first message with a different iTow. Messages
/// that carry no iTow (ACKs, MON, CFG...) stay with the group in progress.
/// Untimed messages seen before the first iTow are kept, not dropped: they
/// open the first group and are returned with it.
///
/// ```
/// use ubxtool::{epoch::EpochGrouper, ubx_packets::{decode_payload, Decoded}};
///
/// let eoe = |itow: u32| match decode_payload(0x01, 0x61, &itow.to_le_bytes()) {
///     Decoded::Message(msg) => msg,
///     other => panic!("{:?}", other),
/// };
/// let mut grouper = EpochGrouper::new();
/// assert!(grouper.push(eoe(1000)).is_none());
/// let epoch = grouper.push(eoe(2000)).unwrap();
/// assert_eq!(epoch.len(), 1);
/// assert_eq!(grouper.finish().map(|e| e.len()), Some(1));
/// ```
#[derive(Debug, Default)]
pub struct EpochGrouper {
    itow: Option<u32>,
    pending: Vec<DecodedMessage>,
}

impl EpochGrouper {
    pub fn new() -> Self {
        Self::default()
    }

    /// iTow of the group in progress
    pub fn current_itow(&self) -> Option<u32> {
        self.itow
    }

    /// Add a message, returning the previous group if this one closed it
    pub fn push(&mut self, msg: DecodedMessage) -> Option<Vec<DecodedMessage>> {
        let closed = match (self.itow, msg.itow()) {
            (Some(current), Some(itow)) if current != itow => {
                self.itow = Some(itow);
                Some(std::mem::take(&mut self.pending))
            },
            (None, Some(itow)) => {
                self.itow = Some(itow);
                None
            },
            _ => None,
        };
        self.pending.push(msg);
        closed.filter(|group| !group.is_empty())
    }

    /// Flush whatever is still pending
    pub fn finish(self) -> Option<Vec<DecodedMessage>> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ubx_packets::{decode_payload, Decoded};

    fn msg(class: u8, id: u8, payload: &[u8]) -> DecodedMessage {
        match decode_payload(class, id, payload) {
            Decoded::Message(msg) => msg,
            other => panic!("{:?}", other),
        }
    }

    fn eoe(itow: u32) -> DecodedMessage {
        msg(0x01, 0x61, &itow.to_le_bytes())
    }

    fn ack() -> DecodedMessage {
        msg(0x05, 0x01, &[0x06, 0x01])
    }

    #[test]
    fn untimed_messages_join_current_group() {
        let mut grouper = EpochGrouper::new();
        assert!(grouper.push(ack()).is_none());
        assert_eq!(grouper.current_itow(), None);
        assert!(grouper.push(eoe(500)).is_none());
        assert!(grouper.push(ack()).is_none());
        let group = grouper.push(eoe(1500)).unwrap();
        assert_eq!(group.len(), 3);
        assert_eq!(grouper.current_itow(), Some(1500));
    }

    #[test]
    fn messages_before_first_itow_are_kept() {
        let mut grouper = EpochGrouper::new();
        assert!(grouper.push(ack()).is_none());
        assert!(grouper.push(ack()).is_none());
        assert!(grouper.push(eoe(1000)).is_none());
        let first = grouper.push(eoe(2000)).unwrap();
        assert_eq!(first.len(), 3);
        assert_eq!(first[0].type_name, "UBX-ACK-ACK");
        assert_eq!(first[2].itow(), Some(1000));
    }

    #[test]
    fn untimed_only_stream_is_one_group() {
        let mut grouper = EpochGrouper::new();
        assert!(grouper.push(ack()).is_none());
        assert_eq!(grouper.finish().map(|g| g.len()), Some(1));
    }

    #[test]
    fn same_itow_stays_together() {
        let mut grouper = EpochGrouper::new();
        for _ in 0..3 {
            assert!(grouper.push(eoe(42)).is_none());
        }
        assert_eq!(grouper.finish().map(|g| g.len()), Some(3));
    }

    #[test]
    fn empty_finish() {
        assert!(EpochGrouper::new().finish().is_none());
    }
}
