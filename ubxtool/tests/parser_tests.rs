use ubxtool::{
    encoder,
    parser::{crc24q, Frame},
    ubx_packets::{Decoded, UbxMessage},
    FrameDecoder, Parser,
};

static FULL_ACK_ACK_PACK: [u8; 10] = [0xb5, 0x62, 0x5, 0x1, 0x2, 0x0, 0x6, 0x1, 0xf, 0x38];

/// (class, id) of acknowledged messages, panics on anything else
fn extract_only_ack_ack(frames: impl Iterator<Item = Frame>) -> Vec<(u8, u8)> {
    frames
        .map(|frame| match frame {
            Frame::Ubx {
                decoded: Decoded::Message(msg),
                ..
            } => match msg.message {
                UbxMessage::AckAck(ack) => (ack.class, ack.msg_id),
                other => panic!("not an ACK-ACK: {:?}", other),
            },
            other => panic!("not a UBX frame: {:?}", other),
        })
        .collect()
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn rtcm_frame(body: &[u8]) -> Vec<u8> {
    let len = body.len() as u16;
    let mut raw = vec![0xd3, ((len >> 8) & 0x03) as u8, len as u8];
    raw.extend_from_slice(body);
    raw.extend_from_slice(&crc24q(&raw).to_be_bytes()[1..]);
    raw
}

#[test]
fn test_parse_empty_buffer() {
    let mut parser = Parser::default();
    assert!(parser.is_buffer_empty());
    assert!(extract_only_ack_ack(parser.consume(&[])).is_empty());
    assert!(parser.is_buffer_empty());
}

#[test]
fn test_parse_ack_ack_byte_by_byte() {
    let mut parser = Parser::default();
    for b in FULL_ACK_ACK_PACK.iter().take(FULL_ACK_ACK_PACK.len() - 1) {
        assert!(extract_only_ack_ack(parser.consume(&[*b])).is_empty());
        assert!(!parser.is_buffer_empty());
    }
    let last_byte = FULL_ACK_ACK_PACK[FULL_ACK_ACK_PACK.len() - 1];
    assert_eq!(
        vec![(6, 1)],
        extract_only_ack_ack(parser.consume(&[last_byte]))
    );
    assert!(parser.is_buffer_empty());
}

#[test]
fn test_parse_ack_ack_in_one_go() {
    let mut parser = Parser::default();
    assert_eq!(
        vec![(6, 1)],
        extract_only_ack_ack(parser.consume(&FULL_ACK_ACK_PACK))
    );
    assert!(parser.is_buffer_empty());
}

#[test]
fn test_parse_ack_ack_parted_two_packets() {
    let mut parser = Parser::default();
    assert!(extract_only_ack_ack(parser.consume(&FULL_ACK_ACK_PACK[0..5])).is_empty());
    assert_eq!(5, parser.buffer_len());
    let mut rest_and_next = (FULL_ACK_ACK_PACK[5..]).to_vec();
    rest_and_next.extend_from_slice(&FULL_ACK_ACK_PACK);
    assert_eq!(
        vec![(6, 1), (6, 1)],
        extract_only_ack_ack(parser.consume(&rest_and_next))
    );
    assert!(parser.is_buffer_empty());
}

#[test]
fn test_parse_ack_ack_two_in_one_go() {
    let mut parser = Parser::default();
    let mut two_packets = FULL_ACK_ACK_PACK.to_vec();
    two_packets.extend_from_slice(&FULL_ACK_ACK_PACK);
    assert_eq!(
        vec![(6, 1), (6, 1)],
        extract_only_ack_ack(parser.consume(&two_packets))
    );
    assert!(parser.is_buffer_empty());
}

#[test]
fn test_parse_ack_ack_garbage_before() {
    let mut parser = Parser::default();
    let mut garbage_before = vec![0x00, 0x06, 0x01, 0x0f, 0x38];
    garbage_before.extend_from_slice(&FULL_ACK_ACK_PACK);
    assert_eq!(
        vec![(6, 1)],
        extract_only_ack_ack(parser.consume(&garbage_before)),
        "garbage before1"
    );
    assert!(parser.is_buffer_empty());

    let mut garbage_before = vec![0xb5, 0xb5, 0x62, 0x62, 0x38];
    garbage_before.extend_from_slice(&FULL_ACK_ACK_PACK);
    assert_eq!(
        vec![(6, 1)],
        extract_only_ack_ack(parser.consume(&garbage_before)),
        "garbage before2"
    );
    assert!(parser.is_buffer_empty());
}

#[test]
fn test_bad_checksum_is_still_decoded() {
    init_logger();
    let mut bad_pack = FULL_ACK_ACK_PACK;
    bad_pack[bad_pack.len() - 3] = 5;
    let mut parser = Parser::default();
    let frames: Vec<_> = parser.consume(&bad_pack).collect();
    match &frames[..] {
        [Frame::Ubx {
            frame,
            decoded: Decoded::Message(msg),
        }] => {
            assert!(!frame.checksum_ok);
            assert_eq!(frame.length(), 2);
            assert!(matches!(msg.message, UbxMessage::AckAck(ref ack) if ack.class == 6 && ack.msg_id == 5));
        },
        other => panic!("{:?}", other),
    }
}

#[test]
fn test_mixed_nmea_json_rtcm_and_ubx() {
    init_logger();
    let mut stream = Vec::new();
    stream.extend_from_slice(b"# ubxtool capture\n");
    stream.extend_from_slice(b"$GNRMC,,V,,,,,,,,,,N*4D\r\n");
    stream.extend(rtcm_frame(&[0x43, 0x20, 0x00, 0x11]));
    stream.extend_from_slice(br#"{"class":"ERROR","message":"unrecognized request"}"#);
    stream.push(b'\n');
    stream.extend_from_slice(&FULL_ACK_ACK_PACK);

    let mut parser = Parser::default();
    let frames: Vec<_> = parser.consume(&stream).collect();
    assert_eq!(frames.len(), 5, "{:?}", frames);
    assert_eq!(frames[0], Frame::Comment("# ubxtool capture".into()));
    assert_eq!(frames[1], Frame::Nmea("$GNRMC,,V,,,,,,,,,,N*4D".into()));
    match &frames[2] {
        Frame::Rtcm(rtcm) => {
            assert_eq!(rtcm.msg_type, 1074);
            assert!(rtcm.crc_ok);
        },
        other => panic!("{:?}", other),
    }
    assert!(matches!(&frames[3], Frame::Json(text) if text.contains("ERROR")));
    assert!(matches!(frames[4], Frame::Ubx { .. }));
    assert!(parser.is_buffer_empty());
}

#[test]
fn test_decode_loop_terminates() {
    let decoder = FrameDecoder::default();
    let mut buf = Vec::new();
    for _ in 0..3 {
        buf.extend_from_slice(&FULL_ACK_ACK_PACK);
    }
    let mut calls = 0;
    let mut rest = &buf[..];
    loop {
        let (consumed, frame) = decoder.decode_frame(rest);
        if consumed == 0 {
            break;
        }
        assert!(frame.is_some());
        rest = &rest[consumed..];
        calls += 1;
    }
    assert_eq!(calls, 3);
    assert!(rest.is_empty());
}

#[test]
fn test_commands_parse_back() {
    let opts = ubxtool::Options::new().with_protver(18);
    let frames = encoder::enable(encoder::Feature::Binary, &opts);
    let stream: Vec<u8> = frames.concat();
    let mut parser = Parser::default();
    let decoded: Vec<_> = parser
        .consume(&stream)
        .map(|frame| match frame {
            Frame::Ubx {
                frame,
                decoded: Decoded::Message(msg),
            } => {
                assert!(frame.checksum_ok);
                msg.type_name
            },
            other => panic!("{:?}", other),
        })
        .collect();
    assert_eq!(decoded.len(), frames.len());
    assert!(decoded.iter().all(|name| *name == "UBX-CFG-MSG"));
}

#[test]
fn test_valget_response_decodes() {
    // version 1 response from RAM: CFG-RATE-MEAS = 1000
    let payload = [0x01, 0x00, 0x00, 0x00, 0x01, 0x00, 0x21, 0x30, 0xe8, 0x03];
    let frame = encoder::build_frame(0x06, 0x8b, &payload).unwrap();
    let (consumed, frame) = FrameDecoder::default().decode_frame(&frame);
    assert_eq!(consumed, 18);
    match frame {
        Some(Frame::Ubx {
            decoded: Decoded::Message(msg),
            ..
        }) => match msg.message {
            UbxMessage::CfgValget(ubxtool::ubx_packets::CfgValget::Response { values, .. }) => {
                assert_eq!(values.len(), 1);
                assert_eq!(values[0].name, "CFG-RATE-MEAS");
                assert_eq!(values[0].value, ubxtool::config::CfgValue::Unsigned(1000));
            },
            other => panic!("{:?}", other),
        },
        other => panic!("{:?}", other),
    }
}
