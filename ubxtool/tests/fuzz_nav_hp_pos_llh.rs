//! A proptest generator for U-Blox NAV-HPPOSLLH messages.
//!
//! Frames are built byte by byte with a correct checksum, then run through
//! the parser and compared against the generated fields.

use byteorder::{LittleEndian, WriteBytesExt};
use proptest::prelude::*;
use ubxtool::{
    constants::{UBX_SYNC_CHAR_1, UBX_SYNC_CHAR_2},
    parser::Frame,
    ubx_packets::{Decoded, UbxMessage},
    Parser,
};

/// Payload of a UBX-NAV-HPPOSLLH message, 36 bytes.
#[derive(Debug, Clone)]
pub struct NavHpPosLlh {
    pub version: u8,
    pub flags: u8,
    pub itow: u32,
    pub lon: i32,
    pub lat: i32,
    pub height: i32,
    pub h_msl: i32,
    pub lon_hp: i8,
    pub lat_hp: i8,
    pub height_hp: i8,
    pub h_msl_hp: i8,
    pub h_acc: u32,
    pub v_acc: u32,
}

impl NavHpPosLlh {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut wtr = Vec::with_capacity(36);
        wtr.write_u8(self.version).unwrap();
        wtr.write_u16::<LittleEndian>(0).unwrap();
        wtr.write_u8(self.flags).unwrap();
        wtr.write_u32::<LittleEndian>(self.itow).unwrap();
        wtr.write_i32::<LittleEndian>(self.lon).unwrap();
        wtr.write_i32::<LittleEndian>(self.lat).unwrap();
        wtr.write_i32::<LittleEndian>(self.height).unwrap();
        wtr.write_i32::<LittleEndian>(self.h_msl).unwrap();
        wtr.write_i8(self.lon_hp).unwrap();
        wtr.write_i8(self.lat_hp).unwrap();
        wtr.write_i8(self.height_hp).unwrap();
        wtr.write_i8(self.h_msl_hp).unwrap();
        wtr.write_u32::<LittleEndian>(self.h_acc).unwrap();
        wtr.write_u32::<LittleEndian>(self.v_acc).unwrap();
        wtr
    }
}

pub fn nav_hpposllh_payload_strategy() -> impl Strategy<Value = NavHpPosLlh> {
    let header_and_time = (Just(0u8), any::<u8>(), any::<u32>());

    let position_data = (
        (-1800000000..=1800000000i32),
        (-900000000..=900000000i32),
        any::<i32>(),
        any::<i32>(),
    );

    let high_precision_data = ((-99..=99i8), (-99..=99i8), (-9..=9i8), (-9..=9i8));

    let accuracy_data = (any::<u32>(), any::<u32>());

    (
        header_and_time,
        position_data,
        high_precision_data,
        accuracy_data,
    )
        .prop_map(
            |(
                (version, flags, itow),
                (lon, lat, height, h_msl),
                (lon_hp, lat_hp, height_hp, h_msl_hp),
                (h_acc, v_acc),
            )| NavHpPosLlh {
                version,
                flags,
                itow,
                lon,
                lat,
                height,
                h_msl,
                lon_hp,
                lat_hp,
                height_hp,
                h_msl_hp,
                h_acc,
                v_acc,
            },
        )
}

/// Calculates the 8-bit Fletcher-16 checksum used by U-Blox.
fn calculate_checksum(data: &[u8]) -> (u8, u8) {
    let mut ck_a: u8 = 0;
    let mut ck_b: u8 = 0;
    for byte in data {
        ck_a = ck_a.wrapping_add(*byte);
        ck_b = ck_b.wrapping_add(ck_a);
    }
    (ck_a, ck_b)
}

pub fn ubx_nav_hpposllh_frame_strategy() -> impl Strategy<Value = (NavHpPosLlh, Vec<u8>)> {
    nav_hpposllh_payload_strategy().prop_map(|nav_hpposllh| {
        let payload = nav_hpposllh.to_bytes();

        let mut frame_core = Vec::with_capacity(4 + payload.len());
        frame_core.push(0x01);
        frame_core.push(0x14);
        frame_core
            .write_u16::<LittleEndian>(payload.len() as u16)
            .unwrap();
        frame_core.extend_from_slice(&payload);

        let (ck_a, ck_b) = calculate_checksum(&frame_core);

        let mut final_frame = Vec::with_capacity(8 + payload.len());
        final_frame.push(UBX_SYNC_CHAR_1);
        final_frame.push(UBX_SYNC_CHAR_2);
        final_frame.extend_from_slice(&frame_core);
        final_frame.push(ck_a);
        final_frame.push(ck_b);

        (nav_hpposllh, final_frame)
    })
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

proptest! {
    #[test]
    fn test_parser_with_generated_nav_hpposllh_frames(
        (expected, frame) in ubx_nav_hpposllh_frame_strategy()
    ) {
        let mut parser = Parser::default();
        let frames: Vec<_> = parser.consume(&frame).collect();
        prop_assert_eq!(frames.len(), 1);

        let Frame::Ubx { frame: ubx, decoded: Decoded::Message(msg) } = &frames[0] else {
            panic!("Parser failed to parse a NAV-HPPOSLLH valid packet");
        };
        prop_assert!(ubx.checksum_ok);
        let UbxMessage::NavHpPosLlh(p) = &msg.message else {
            panic!("wrong message {:?}", msg.message);
        };

        prop_assert_eq!(msg.itow(), Some(expected.itow));
        prop_assert_eq!(p.lon, expected.lon);
        prop_assert_eq!(p.lat_hp, expected.lat_hp);
        prop_assert_eq!(p.h_acc, expected.h_acc);
        prop_assert_eq!(
            p.lon_degrees(),
            round_to((f64::from(expected.lon) + f64::from(expected.lon_hp) * 1e-2) * 1e-7, 9)
        );
        prop_assert_eq!(
            p.lat_degrees(),
            round_to((f64::from(expected.lat) + f64::from(expected.lat_hp) * 1e-2) * 1e-7, 9)
        );
        prop_assert_eq!(
            p.height_meters(),
            round_to((f64::from(expected.height) + f64::from(expected.height_hp) * 1e-1) * 1e-3, 4)
        );
    }
}

#[test]
fn test_hpposllh_documented_example() {
    let sample = NavHpPosLlh {
        version: 0,
        flags: 0,
        itow: 0,
        lon: -741234567,
        lat: 0,
        height: 0,
        h_msl: 0,
        lon_hp: 23,
        lat_hp: 0,
        height_hp: 0,
        h_msl_hp: 0,
        h_acc: 0,
        v_acc: 0,
    };
    let mut parser = Parser::default();
    let payload = sample.to_bytes();
    let mut frame = vec![UBX_SYNC_CHAR_1, UBX_SYNC_CHAR_2, 0x01, 0x14, 36, 0];
    frame.extend_from_slice(&payload);
    let (ck_a, ck_b) = calculate_checksum(&frame[2..]);
    frame.push(ck_a);
    frame.push(ck_b);

    match parser.consume(&frame).next() {
        Some(Frame::Ubx {
            decoded: Decoded::Message(msg),
            ..
        }) => match msg.message {
            UbxMessage::NavHpPosLlh(p) => {
                assert_eq!(p.lon_degrees(), round_to((-741234567.0 + 23.0 * 1e-2) * 1e-7, 9));
                assert_eq!(p.lon_degrees(), -74.123456677);
            },
            other => panic!("{:?}", other),
        },
        other => panic!("{:?}", other),
    }
}
