//! # ubxtool
//!
//! Decoder and command builder for the u-blox UBX protocol, as spoken by
//! u-blox 5 through 9 GNSS receivers. The crate does no I/O: bytes read from a
//! serial port, a socket or a log file go in, frames ready to be written to
//! the receiver come out.
//!
//! Parsing
//! =======
//!
//! Receiver output mixes UBX frames with NMEA sentences and RTCM3 frames.
//! A [`Parser`] keeps the bytes of unfinished frames and hands out every
//! complete [`Frame`](parser::Frame) it finds:
//! ```
//! use ubxtool::{parser::Frame, ubx_packets::Decoded, Parser};
//!
//! let mut parser = Parser::default();
//! let my_raw_data = b"$GPTXT,01,01,02,ANTSTATUS=OK*3B\r\n"; // From your serial port
//! for frame in parser.consume(my_raw_data) {
//!     match frame {
//!         Frame::Ubx { decoded: Decoded::Message(msg), .. } => {
//!             println!("{}: {:?}", msg.type_name, msg.message);
//!         },
//!         Frame::Nmea(sentence) => assert!(sentence.starts_with("$GPTXT")),
//!         _ => {},
//!     }
//! }
//! ```
//!
//! [`FrameDecoder::decode_frame`](parser::FrameDecoder::decode_frame) is the
//! state machine underneath, usable on its own over any byte slice.
//!
//! Commands
//! ========
//!
//! The [`encoder`] module builds polls, message rate changes and
//! configuration commands. Commands that depend on the receiver generation
//! take the protocol version from [`Options`]:
//! ```
//! use ubxtool::{encoder::{self, Feature}, Options};
//!
//! let opts = Options::new().with_protver(27);
//! let frames = encoder::enable(Feature::Binary, &opts);
//! assert!(frames.iter().all(|f| f[..2] == [0xb5, 0x62]));
//!
//! let valset = encoder::cfg_valset(encoder::LAYER_RAM, &["CFG-RATE-MEAS,200"]).unwrap();
//! assert_eq!(valset.len(), 6 + 4 + 6 + 2);
//! ```

#[cfg(feature = "serde")]
extern crate serde;

pub use crate::{
    error::{DateTimeError, EncodeError, ParserError},
    options::{Options, Verbosity},
    parser::{checksum::checksum, FrameDecoder, Parser},
};

pub mod config;
pub mod constants;
pub mod encoder;
pub mod epoch;
mod error;
pub mod options;
pub mod parser;
pub mod ubx_packets;
