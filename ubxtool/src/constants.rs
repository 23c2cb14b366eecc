pub const UBX_SYNC_CHAR_1: u8 = 0xb5;
pub const UBX_SYNC_CHAR_2: u8 = 0x62;
pub(crate) const UBX_SYNC_SIZE: usize = 2;
pub(crate) const UBX_PAYLOAD_SIZE_LEN: usize = 2;
pub(crate) const UBX_CLASS_LEN: usize = 1;
pub(crate) const UBX_ID_LEN: usize = 1;
pub(crate) const UBX_HEADER_LEN: usize =
    UBX_SYNC_SIZE + UBX_PAYLOAD_SIZE_LEN + UBX_CLASS_LEN + UBX_ID_LEN;
pub(crate) const UBX_CHECKSUM_LEN: usize = 2;

pub const NMEA_SYNC_CHAR: u8 = 0x24; // '$'
pub const COMMENT_SYNC_CHAR: u8 = 0x23; // '#'
pub const JSON_SYNC_CHAR: u8 = 0x7b; // '{'
pub const LINE_END_CHAR_1: u8 = 0x0d; // '\r' (<CR>)
pub const LINE_END_CHAR_2: u8 = 0x0a; // '\n' (<LF>)

/// gpsd reports its own failures as a JSON object of class ERROR
pub(crate) const GPSD_ERROR_PREFIX: &str = r#"{"class":"ERROR""#;

pub const RTCM_SYNC_CHAR: u8 = 0xd3;
pub(crate) const RTCM_HEADER_SIZE: usize = 3; // sync char (1) + length field (2)
pub(crate) const RTCM_CRC_LEN: usize = 3;
pub(crate) const RTCM_RESERVED_MASK: u8 = 0xfc; // 6 bits reserved above the 10-bit length
