pub(crate) mod checksum;
mod rtcm;

use std::fmt;

pub use rtcm::{crc24q, RtcmFrame};

use crate::{
    constants::{
        COMMENT_SYNC_CHAR, GPSD_ERROR_PREFIX, JSON_SYNC_CHAR, LINE_END_CHAR_1, LINE_END_CHAR_2,
        NMEA_SYNC_CHAR, RTCM_RESERVED_MASK, RTCM_SYNC_CHAR, UBX_CHECKSUM_LEN, UBX_HEADER_LEN,
        UBX_SYNC_CHAR_1, UBX_SYNC_CHAR_2,
    },
    options::{Options, Verbosity},
    parser::checksum::UbxChecksumCalc,
    ubx_packets::{decode_payload, Decoded},
};

/// A UBX frame as it was found on the wire
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UbxFrame {
    pub class: u8,
    pub id: u8,
    pub payload: Vec<u8>,
    /// Whether the trailing Fletcher checksum matched
    pub checksum_ok: bool,
}

impl UbxFrame {
    /// Payload length, as carried in the frame header
    pub fn length(&self) -> u16 {
        self.payload.len() as u16
    }

    /// Length of the whole frame, sync chars and checksum included
    pub fn frame_len(&self) -> usize {
        UBX_HEADER_LEN + self.payload.len() + UBX_CHECKSUM_LEN
    }
}

/// One unit recognized in the input stream
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Ubx { frame: UbxFrame, decoded: Decoded },
    /// NMEA sentence, `$` included, line terminator excluded
    Nmea(String),
    Rtcm(RtcmFrame),
    /// `#` comment line
    Comment(String),
    /// `{` line, typically gpsd JSON
    Json(String),
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frame::Ubx { frame, decoded } => match decoded {
                Decoded::Message(msg) => write!(f, "{}: {:?}", msg.type_name, msg.message),
                Decoded::Invalid { type_name, error } => write!(f, "{}: {}", type_name, error),
                Decoded::Raw(raw) => {
                    write!(f, "{}", raw)?;
                    if !frame.checksum_ok {
                        f.write_str(" (bad checksum)")?;
                    }
                    Ok(())
                },
            },
            Frame::Nmea(text) | Frame::Comment(text) | Frame::Json(text) => f.write_str(text),
            Frame::Rtcm(rtcm) => write!(
                f,
                "RTCM3 type {}, len {}{}",
                rtcm.msg_type,
                rtcm.length(),
                if rtcm.crc_ok { "" } else { " (bad CRC)" }
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Base,
    Sync2,
    Class,
    Id,
    Len1,
    Len2,
    Payload,
    Csum1,
    Csum2,
    Nmea,
    Comment,
    Json,
    Rtcm1,
    Rtcm2,
    RtcmPayload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextKind {
    Nmea,
    Comment,
    Json,
}

/// Byte-at-a-time recognizer for everything that shows up in a receiver log.
///
/// Every call to [`decode_frame`](Self::decode_frame) starts from scratch,
/// so the result depends on nothing but the bytes handed in.
#[derive(Debug, Clone, Default)]
pub struct FrameDecoder {
    options: Options,
}

impl FrameDecoder {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Scan `buf` for the next frame.
    ///
    /// Returns how many bytes were used up and the frame they held:
    /// - `(n, Some(frame))` with `n >= 1` once a frame is complete,
    /// - `(1, None)` for a line end seen between frames,
    /// - `(0, None)` when `buf` ends before a frame does; nothing may be
    ///   discarded and the call should be repeated with more data.
    pub fn decode_frame(&self, buf: &[u8]) -> (usize, Option<Frame>) {
        let mut state = State::Base;
        let mut class = 0u8;
        let mut id = 0u8;
        let mut length = 0usize;
        let mut ck_a = 0u8;
        let mut payload: Vec<u8> = Vec::new();

        for (idx, &c) in buf.iter().enumerate() {
            let consumed = idx + 1;
            if self.options.verbosity() >= Verbosity::Raw {
                log::trace!("state {:?} byte {:#04x}", state, c);
            }

            state = match state {
                State::Base => match c {
                    UBX_SYNC_CHAR_1 => State::Sync2,
                    NMEA_SYNC_CHAR => {
                        payload.push(c);
                        State::Nmea
                    },
                    JSON_SYNC_CHAR => {
                        payload.push(c);
                        State::Json
                    },
                    COMMENT_SYNC_CHAR => {
                        payload.push(c);
                        State::Comment
                    },
                    RTCM_SYNC_CHAR => {
                        payload.push(c);
                        State::Rtcm1
                    },
                    LINE_END_CHAR_1 | LINE_END_CHAR_2 => return (1, None),
                    _ => State::Base,
                },
                State::Sync2 if c == UBX_SYNC_CHAR_2 => State::Class,
                State::Sync2 => {
                    if self.options.verbosity() >= Verbosity::Raw {
                        log::trace!("no UBX sync after {:#04x}, resync", UBX_SYNC_CHAR_1);
                    }
                    State::Base
                },
                State::Class => {
                    class = c;
                    State::Id
                },
                State::Id => {
                    id = c;
                    State::Len1
                },
                State::Len1 => {
                    length = usize::from(c);
                    State::Len2
                },
                State::Len2 => {
                    length |= usize::from(c) << 8;
                    payload.reserve(length);
                    if length == 0 {
                        State::Csum1
                    } else {
                        State::Payload
                    }
                },
                State::Payload => {
                    payload.push(c);
                    if payload.len() == length {
                        State::Csum1
                    } else {
                        State::Payload
                    }
                },
                State::Csum1 => {
                    ck_a = c;
                    State::Csum2
                },
                State::Csum2 => {
                    let frame = self.finish_ubx(class, id, payload, ck_a, c);
                    return (consumed, Some(frame));
                },
                State::Nmea | State::Comment | State::Json => {
                    if c == LINE_END_CHAR_1 || c == LINE_END_CHAR_2 {
                        let kind = match state {
                            State::Nmea => TextKind::Nmea,
                            State::Json => TextKind::Json,
                            _ => TextKind::Comment,
                        };
                        return (consumed, Some(self.finish_text(kind, &payload)));
                    }
                    payload.push(c);
                    state
                },
                State::Rtcm1 => {
                    if c & RTCM_RESERVED_MASK != 0 {
                        // not a length field, so not an RTCM3 frame either
                        payload.clear();
                        State::Base
                    } else {
                        payload.push(c);
                        length = usize::from(c) << 8;
                        State::Rtcm2
                    }
                },
                State::Rtcm2 => {
                    payload.push(c);
                    length |= usize::from(c);
                    length += crate::constants::RTCM_CRC_LEN;
                    State::RtcmPayload
                },
                State::RtcmPayload => {
                    payload.push(c);
                    length -= 1;
                    if length == 0 {
                        let frame = RtcmFrame::from_raw(payload);
                        self.log_rtcm(&frame);
                        return (consumed, Some(Frame::Rtcm(frame)));
                    }
                    State::RtcmPayload
                },
            };
        }

        (0, None)
    }

    fn finish_ubx(&self, class: u8, id: u8, payload: Vec<u8>, ck_a: u8, ck_b: u8) -> Frame {
        let mut calc = UbxChecksumCalc::new();
        calc.update(&[class, id]);
        calc.update(&(payload.len() as u16).to_le_bytes());
        calc.update(&payload);
        let checksum_ok = match calc.validate_result(ck_a, ck_b) {
            Ok(()) => true,
            Err(err) => {
                log::warn!(
                    "{}: {}",
                    crate::ubx_packets::class_id_label(class, id),
                    err
                );
                false
            },
        };

        let decoded = decode_payload(class, id, &payload);
        if let Decoded::Invalid { type_name, error } = &decoded {
            if self.options.verbosity() > Verbosity::Quiet {
                log::warn!("{}: {}", type_name, error);
            }
        }

        Frame::Ubx {
            frame: UbxFrame {
                class,
                id,
                payload,
                checksum_ok,
            },
            decoded,
        }
    }

    fn finish_text(&self, kind: TextKind, bytes: &[u8]) -> Frame {
        let text = String::from_utf8_lossy(bytes).into_owned();
        match kind {
            TextKind::Nmea => {
                if self.options.verbosity() >= Verbosity::Decode {
                    log::debug!("NMEA: {}", text);
                }
                Frame::Nmea(text)
            },
            TextKind::Json if text.starts_with(GPSD_ERROR_PREFIX) => {
                log::error!("gpsd: {}", text);
                Frame::Json(text)
            },
            TextKind::Json => {
                if self.options.verbosity() >= Verbosity::Decode {
                    log::debug!("JSON: {}", text);
                }
                Frame::Json(text)
            },
            TextKind::Comment => {
                if self.options.verbosity() >= Verbosity::Decode {
                    log::debug!("comment: {}", text);
                }
                Frame::Comment(text)
            },
        }
    }

    fn log_rtcm(&self, frame: &RtcmFrame) {
        if !frame.crc_ok {
            log::warn!("RTCM3 type {}: CRC mismatch", frame.msg_type);
        } else if self.options.verbosity() >= Verbosity::Decode {
            log::debug!("RTCM3 type {}, len {}", frame.msg_type, frame.length());
        }
    }
}

/// Whether `byte` can start something [`FrameDecoder`] acts on
fn is_lead_byte(byte: u8) -> bool {
    matches!(
        byte,
        UBX_SYNC_CHAR_1
            | NMEA_SYNC_CHAR
            | JSON_SYNC_CHAR
            | COMMENT_SYNC_CHAR
            | RTCM_SYNC_CHAR
            | LINE_END_CHAR_1
            | LINE_END_CHAR_2
    )
}

/// Streaming parser: owns the buffer that unfinished frames wait in.
///
/// ```
/// use ubxtool::{parser::{Frame, Parser}, ubx_packets::{Decoded, UbxMessage}};
///
/// let mut parser = Parser::default();
/// // UBX-ACK-ACK for UBX-CFG-MSG, split across two reads
/// let bytes = [0xb5, 0x62, 0x05, 0x01, 0x02, 0x00, 0x06, 0x01, 0x0f, 0x38];
/// assert_eq!(parser.consume(&bytes[..4]).count(), 0);
/// let frames: Vec<_> = parser.consume(&bytes[4..]).collect();
/// match &frames[..] {
///     [Frame::Ubx { decoded: Decoded::Message(msg), .. }] => {
///         assert!(matches!(msg.message, UbxMessage::AckAck(_)));
///     },
///     other => panic!("{:?}", other),
/// }
/// ```
#[derive(Debug, Default)]
pub struct Parser {
    buf: Vec<u8>,
    decoder: FrameDecoder,
}

impl Parser {
    pub fn new(options: Options) -> Self {
        Self {
            buf: Vec::new(),
            decoder: FrameDecoder::new(options),
        }
    }

    pub fn is_buffer_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn buffer_len(&self) -> usize {
        self.buf.len()
    }

    pub fn options(&self) -> &Options {
        self.decoder.options()
    }

    pub fn options_mut(&mut self) -> &mut Options {
        self.decoder.options_mut()
    }

    /// Append `new_data` and iterate over the frames now complete
    pub fn consume(&mut self, new_data: &[u8]) -> FrameIter<'_> {
        self.buf.extend_from_slice(new_data);
        FrameIter { parser: self }
    }

    /// Drop leading bytes that cannot start a frame, they would be skipped anyway
    fn skip_noise(&mut self) {
        let noise = self
            .buf
            .iter()
            .position(|&b| is_lead_byte(b))
            .unwrap_or(self.buf.len());
        if noise > 0 {
            self.buf.drain(..noise);
        }
    }
}

/// Frames taken out of a [`Parser`] buffer
pub struct FrameIter<'a> {
    parser: &'a mut Parser,
}

impl Iterator for FrameIter<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        loop {
            self.parser.skip_noise();
            let (consumed, frame) = self.parser.decoder.decode_frame(&self.parser.buf);
            if consumed == 0 {
                return None;
            }
            self.parser.buf.drain(..consumed);
            if frame.is_some() {
                return frame;
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ubx_packets::UbxMessage;

    fn ubx(class: u8, id: u8, payload: &[u8]) -> Vec<u8> {
        let mut frame = vec![UBX_SYNC_CHAR_1, UBX_SYNC_CHAR_2, class, id];
        frame.extend_from_slice(&(payload.len() as u16).to_le_bytes());
        frame.extend_from_slice(payload);
        let (ck_a, ck_b) = crate::checksum(&frame[2..]);
        frame.push(ck_a);
        frame.push(ck_b);
        frame
    }

    fn decoder() -> FrameDecoder {
        FrameDecoder::default()
    }

    #[test]
    fn decodes_ack() {
        let bytes = ubx(0x05, 0x01, &[0x06, 0x01]);
        let (consumed, frame) = decoder().decode_frame(&bytes);
        assert_eq!(consumed, 10);
        match frame {
            Some(Frame::Ubx { frame, decoded }) => {
                assert!(frame.checksum_ok);
                assert_eq!(frame.length(), 2);
                assert_eq!(usize::from(frame.length()), frame.payload.len());
                assert_eq!(frame.frame_len(), consumed);
                match decoded {
                    Decoded::Message(msg) => assert_eq!(msg.type_name, "UBX-ACK-ACK"),
                    other => panic!("{:?}", other),
                }
            },
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn zero_length_is_poll() {
        let bytes = ubx(0x0a, 0x04, &[]);
        let (consumed, frame) = decoder().decode_frame(&bytes);
        assert_eq!(consumed, 8);
        match frame {
            Some(Frame::Ubx {
                decoded: Decoded::Message(msg),
                ..
            }) => {
                assert_eq!(msg.type_name, "UBX-MON-VER");
                assert_eq!(msg.message, UbxMessage::PollRequest);
            },
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn bad_checksum_still_dispatched() {
        let mut bytes = ubx(0x05, 0x00, &[0x06, 0x8a]);
        let last = bytes.len() - 1;
        bytes[last] ^= 0xff;
        match decoder().decode_frame(&bytes) {
            (10, Some(Frame::Ubx { frame, decoded })) => {
                assert!(!frame.checksum_ok);
                assert!(matches!(decoded, Decoded::Message(_)));
            },
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn incomplete_frame_needs_more() {
        let bytes = ubx(0x05, 0x01, &[0x06, 0x01]);
        for k in 0..bytes.len() {
            assert_eq!(decoder().decode_frame(&bytes[..k]), (0, None));
        }
    }

    #[test]
    fn line_end_between_frames() {
        assert_eq!(decoder().decode_frame(b"\r\n"), (1, None));
        // garbage before the line end still reports a single byte
        assert_eq!(decoder().decode_frame(b"xy\n"), (1, None));
    }

    #[test]
    fn nmea_sentence() {
        let line = b"$GPGGA,092750.000,5321.6802,N,00630.3372,W,1,8,1.03,61.7,M,55.2,M,,*76\r\n";
        let (consumed, frame) = decoder().decode_frame(line);
        assert_eq!(consumed, line.len() - 1);
        assert_eq!(
            frame,
            Some(Frame::Nmea(
                "$GPGGA,092750.000,5321.6802,N,00630.3372,W,1,8,1.03,61.7,M,55.2,M,,*76".into()
            ))
        );
    }

    #[test]
    fn comment_and_json_lines() {
        assert_eq!(
            decoder().decode_frame(b"# hello\n"),
            (8, Some(Frame::Comment("# hello".into())))
        );
        let err = br#"{"class":"ERROR","message":"no device"}"#;
        let mut line = err.to_vec();
        line.push(b'\n');
        assert_eq!(
            decoder().decode_frame(&line),
            (
                line.len(),
                Some(Frame::Json(String::from_utf8_lossy(err).into_owned()))
            )
        );
    }

    #[test]
    fn rtcm_frame() {
        let mut raw = vec![RTCM_SYNC_CHAR, 0x00, 0x02, 0x3e, 0xd0];
        let crc = crc24q(&raw).to_be_bytes();
        raw.extend_from_slice(&crc[1..]);
        let (consumed, frame) = decoder().decode_frame(&raw);
        assert_eq!(consumed, raw.len());
        match frame {
            Some(Frame::Rtcm(rtcm)) => {
                assert_eq!(rtcm.msg_type, 1005);
                assert!(rtcm.crc_ok);
                assert_eq!(rtcm.raw, raw);
            },
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn rtcm_false_lead_resyncs() {
        // 0xff after D3 has reserved bits set, the UBX frame after it is found
        let mut bytes = vec![RTCM_SYNC_CHAR, 0xff];
        bytes.extend(ubx(0x05, 0x01, &[0x06, 0x01]));
        let (consumed, frame) = decoder().decode_frame(&bytes);
        assert_eq!(consumed, bytes.len());
        assert!(matches!(frame, Some(Frame::Ubx { .. })));
    }

    #[test]
    fn broken_sync_resyncs() {
        let mut bytes = vec![UBX_SYNC_CHAR_1, 0x00];
        bytes.extend(ubx(0x05, 0x01, &[0x06, 0x01]));
        let (consumed, frame) = decoder().decode_frame(&bytes);
        assert_eq!(consumed, bytes.len());
        assert!(matches!(frame, Some(Frame::Ubx { .. })));
    }

    #[test]
    fn oversized_length_waits() {
        let mut bytes = vec![UBX_SYNC_CHAR_1, UBX_SYNC_CHAR_2, 0x01, 0x07, 0xff, 0xff];
        bytes.extend_from_slice(&[0u8; 16]);
        bytes.push(LINE_END_CHAR_1);
        assert_eq!(decoder().decode_frame(&bytes), (0, None));
    }

    #[test]
    fn unknown_message_is_raw() {
        let bytes = ubx(0x7f, 0x01, &[1, 2, 3]);
        match decoder().decode_frame(&bytes) {
            (11, Some(Frame::Ubx { decoded: Decoded::Raw(raw), .. })) => {
                assert_eq!(raw.hex_payload, "01,02,03");
                assert_eq!(raw.length, 3);
            },
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn parser_skips_noise_and_keeps_partial() {
        let mut parser = Parser::default();
        let frame = ubx(0x05, 0x01, &[0x06, 0x01]);
        let mut bytes = b"noise".to_vec();
        bytes.extend_from_slice(&frame[..5]);
        assert_eq!(parser.consume(&bytes).count(), 0);
        assert_eq!(parser.buffer_len(), 5);
        assert_eq!(parser.consume(&frame[5..]).count(), 1);
        assert!(parser.is_buffer_empty());
    }

    #[test]
    fn parser_mixed_stream() {
        let mut stream = ubx(0x05, 0x01, &[0x06, 0x01]);
        stream.extend_from_slice(b"$GPTXT,01*00\r\n");
        stream.extend(ubx(0x01, 0x61, &[0xe8, 0x03, 0, 0]));
        let mut parser = Parser::default();
        let frames: Vec<_> = parser.consume(&stream).collect();
        assert_eq!(frames.len(), 3);
        assert!(matches!(frames[1], Frame::Nmea(_)));
        match &frames[2] {
            Frame::Ubx {
                decoded: Decoded::Message(msg),
                ..
            } => assert_eq!(msg.itow(), Some(1000)),
            other => panic!("{:?}", other),
        }
        assert!(parser.is_buffer_empty());
    }
}
