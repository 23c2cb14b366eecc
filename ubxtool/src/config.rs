//! u-blox 9 configuration item registry (CFG-VALSET/VALGET/VALDEL keys)

use std::{borrow::Cow, fmt};

use crate::error::EncodeError;

mod items;

pub use items::CFG_ITEMS;

/// 32-bit configuration key: group in bits 16..24, item in bits 0..12,
/// storage size class in bits 28..31.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageSize {
    OneBit,
    OneByte,
    TwoBytes,
    FourBytes,
    EightBytes,
    /// Size classes 0, 6 and 7 are not assigned
    Illegal(u8),
}

impl StorageSize {
    pub const fn to_usize(self) -> usize {
        match self {
            Self::OneBit | Self::OneByte | Self::Illegal(_) => 1,
            Self::TwoBytes => 2,
            Self::FourBytes => 4,
            Self::EightBytes => 8,
        }
    }
}

impl KeyId {
    pub(crate) const SIZE: usize = 4;

    pub const fn size_class(&self) -> u8 {
        ((self.0 >> 28) & 0b111) as u8
    }

    pub const fn value_size(&self) -> StorageSize {
        match self.size_class() {
            1 => StorageSize::OneBit,
            2 => StorageSize::OneByte,
            3 => StorageSize::TwoBytes,
            4 => StorageSize::FourBytes,
            5 => StorageSize::EightBytes,
            class => StorageSize::Illegal(class),
        }
    }

    pub const fn group_id(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn item_id(&self) -> u8 {
        self.0 as u8
    }
}

/// Wire type of a configuration item value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CfgType {
    E1,
    E2,
    E4,
    I1,
    I2,
    I4,
    I8,
    L,
    R4,
    R8,
    U1,
    U2,
    U4,
    U8,
    X1,
    X2,
    X4,
    X8,
    /// Placeholder for the unassigned size classes 0, 6 and 7
    Reserved(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    Unsigned,
    Signed,
    Float,
}

/// Byte width and numeric interpretation of a value on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireFormat {
    pub width: usize,
    pub kind: NumericKind,
}

impl CfgType {
    pub const fn wire_format(self) -> WireFormat {
        use NumericKind::*;
        let (width, kind) = match self {
            CfgType::E1 | CfgType::L | CfgType::U1 | CfgType::X1 => (1, Unsigned),
            CfgType::E2 | CfgType::U2 | CfgType::X2 => (2, Unsigned),
            CfgType::E4 | CfgType::U4 | CfgType::X4 => (4, Unsigned),
            CfgType::U8 | CfgType::X8 => (8, Unsigned),
            CfgType::I1 => (1, Signed),
            CfgType::I2 => (2, Signed),
            CfgType::I4 => (4, Signed),
            CfgType::I8 => (8, Signed),
            CfgType::R4 => (4, Float),
            CfgType::R8 => (8, Float),
            CfgType::Reserved(_) => (1, Unsigned),
        };
        WireFormat { width, kind }
    }

    /// Type a key of unknown name is assumed to have, from its size class
    pub const fn from_size_class(class: u8) -> Self {
        match class & 0b111 {
            1 => CfgType::L,
            2 => CfgType::U1,
            3 => CfgType::U2,
            4 => CfgType::U4,
            5 => CfgType::U8,
            other => CfgType::Reserved(other),
        }
    }
}

impl fmt::Display for CfgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CfgType::Reserved(class) => write!(f, "Z{}", class),
            other => fmt::Debug::fmt(other, f),
        }
    }
}

/// A decoded configuration value
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CfgValue {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

impl fmt::Display for CfgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CfgValue::Unsigned(v) => write!(f, "{}", v),
            CfgValue::Signed(v) => write!(f, "{}", v),
            CfgValue::Float(v) => write!(f, "{}", v),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigItem {
    pub name: Cow<'static, str>,
    pub key: u32,
    pub cfg_type: CfgType,
    pub scale: f64,
    pub unit: &'static str,
    pub description: &'static str,
}

impl ConfigItem {
    pub fn key_id(&self) -> KeyId {
        KeyId(self.key)
    }

    pub fn wire_format(&self) -> WireFormat {
        self.cfg_type.wire_format()
    }

    /// Stand-in for a key that is missing from the registry
    fn synthesize(key: u32) -> Self {
        let key_id = KeyId(key);
        Self {
            name: Cow::Owned(format!("CFG-{}-{}", key_id.group_id(), key_id.item_id())),
            key,
            cfg_type: CfgType::from_size_class(key_id.size_class()),
            scale: 1.0,
            unit: "Unk",
            description: "Unknown",
        }
    }

    /// Read a value of this item's wire width from the start of `bytes`.
    /// Returns `None` when `bytes` is too short.
    pub fn decode_value(&self, bytes: &[u8]) -> Option<CfgValue> {
        let WireFormat { width, kind } = self.wire_format();
        let raw = bytes.get(..width)?;
        let mut buf = [0u8; 8];
        buf[..width].copy_from_slice(raw);
        let unsigned = u64::from_le_bytes(buf);
        Some(match kind {
            NumericKind::Unsigned => CfgValue::Unsigned(unsigned),
            NumericKind::Signed => {
                // sign extend from `width` bytes
                let shift = 64 - 8 * width as u32;
                CfgValue::Signed(((unsigned << shift) as i64) >> shift)
            },
            NumericKind::Float => match width {
                4 => CfgValue::Float(f64::from(f32::from_bits(unsigned as u32))),
                _ => CfgValue::Float(f64::from_bits(unsigned)),
            },
        })
    }

    /// Encode a textual value the way CFG-VALSET carries it
    pub fn encode_value(&self, value: &str) -> Result<Vec<u8>, EncodeError> {
        let WireFormat { width, kind } = self.wire_format();
        let invalid = || EncodeError::InvalidConfigValue {
            name: self.name.to_string(),
            value: value.to_string(),
        };
        let value = value.trim();
        let mut bytes = match kind {
            NumericKind::Unsigned => {
                let v = parse_unsigned(value).ok_or_else(invalid)?;
                if width < 8 && v >> (8 * width) != 0 {
                    return Err(invalid());
                }
                v.to_le_bytes().to_vec()
            },
            NumericKind::Signed => {
                let v: i64 = value.parse().map_err(|_| invalid())?;
                let bits = 8 * width as u32;
                if bits < 64 && (v < -(1i64 << (bits - 1)) || v >= (1i64 << (bits - 1))) {
                    return Err(invalid());
                }
                v.to_le_bytes().to_vec()
            },
            NumericKind::Float => {
                let v: f64 = value.parse().map_err(|_| invalid())?;
                if width == 4 {
                    (v as f32).to_le_bytes().to_vec()
                } else {
                    v.to_le_bytes().to_vec()
                }
            },
        };
        bytes.truncate(width);
        Ok(bytes)
    }
}

fn parse_unsigned(value: &str) -> Option<u64> {
    match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => value.parse().ok(),
    }
}

/// Find a configuration item by its exact name
pub fn lookup_by_name(name: &str) -> Option<&'static ConfigItem> {
    CFG_ITEMS.iter().find(|item| item.name == name)
}

/// Find a configuration item by key. Never fails: unknown keys get an
/// item synthesized from the key's size class.
pub fn lookup_by_key(key: u32) -> Cow<'static, ConfigItem> {
    match CFG_ITEMS.iter().find(|item| item.key == key) {
        Some(item) => Cow::Borrowed(item),
        None => Cow::Owned(ConfigItem::synthesize(key)),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn registry_names_and_keys_are_unique() {
        let mut names: Vec<_> = CFG_ITEMS.iter().map(|i| i.name.as_ref()).collect();
        let mut keys: Vec<_> = CFG_ITEMS.iter().map(|i| i.key).collect();
        names.sort_unstable();
        names.dedup();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(names.len(), CFG_ITEMS.len());
        assert_eq!(keys.len(), CFG_ITEMS.len());
    }

    #[test]
    fn lookup_symmetry() {
        for item in CFG_ITEMS {
            assert_eq!(lookup_by_name(&item.name).map(|i| i.key), Some(item.key));
            assert_eq!(lookup_by_key(item.key).name, item.name);
        }
    }

    #[test]
    fn registry_widths_agree_with_size_class() {
        for item in CFG_ITEMS {
            assert_eq!(
                item.wire_format().width,
                item.key_id().value_size().to_usize(),
                "{}",
                item.name
            );
        }
    }

    #[test]
    fn known_item() {
        let item = lookup_by_name("CFG-GEOFENCE-FENCE1_LAT").unwrap();
        assert_eq!(item.key, 0x40240021);
        assert_eq!(item.cfg_type, CfgType::I4);
        assert_eq!(item.scale, 1e-7);
        assert_eq!(item.unit, "deg");
        assert!(lookup_by_name("CFG-NOT-THERE").is_none());
    }

    #[test]
    fn unknown_key_is_inferred() {
        let item = lookup_by_key(0x10000000);
        assert!(matches!(item, Cow::Owned(_)));
        assert_eq!(item.name, "CFG-0-0");
        assert_eq!(item.cfg_type, CfgType::L);
        assert_eq!(
            item.wire_format(),
            WireFormat {
                width: 1,
                kind: NumericKind::Unsigned
            }
        );
        assert_eq!(item.unit, "Unk");
        assert_eq!(item.description, "Unknown");

        let item = lookup_by_key(0x50fe_0102);
        assert_eq!(item.name, "CFG-254-2");
        assert_eq!(item.wire_format().width, 8);

        let item = lookup_by_key(0x70fe_0102);
        assert_eq!(item.cfg_type, CfgType::Reserved(7));
        assert_eq!(item.cfg_type.to_string(), "Z7");
        assert_eq!(item.wire_format().width, 1);
    }

    #[test]
    fn r8_is_eight_bytes() {
        assert_eq!(
            CfgType::R8.wire_format(),
            WireFormat {
                width: 8,
                kind: NumericKind::Float
            }
        );
    }

    #[test]
    fn encode_and_decode_values() {
        let rate = lookup_by_name("CFG-RATE-MEAS").unwrap();
        assert_eq!(rate.encode_value("1000").unwrap(), vec![0xe8, 0x03]);
        assert!(rate.encode_value("70000").is_err());
        assert!(rate.encode_value("fast").is_err());

        let lat = lookup_by_name("CFG-GEOFENCE-FENCE1_LAT").unwrap();
        let bytes = lat.encode_value("-2").unwrap();
        assert_eq!(bytes, vec![0xfe, 0xff, 0xff, 0xff]);
        assert_eq!(lat.decode_value(&bytes), Some(CfgValue::Signed(-2)));
        assert_eq!(lat.decode_value(&bytes[..3]), None);
    }
}
