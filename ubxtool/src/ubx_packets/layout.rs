//! Declarative little-endian payload layouts.
//!
//! Each message declares its fixed part once with [`ubx_layout!`]: field
//! name, type and byte offset. The macro generates the struct, a table of
//! [`FieldDesc`] and a reader that pulls every field through [`LeField`].
//! The table is checked at compile time against the declared length.

use num_traits::float::FloatCore;

/// Numeric interpretation of a payload field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Unsigned,
    Signed,
    Float,
}

/// One entry of a message layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDesc {
    pub name: &'static str,
    pub offset: usize,
    pub width: usize,
    pub kind: FieldKind,
}

/// A value that can be read from a little-endian byte slice
pub trait LeField: Sized + Default {
    const WIDTH: usize;
    const KIND: FieldKind;

    /// `bytes` is exactly `WIDTH` long
    fn from_le_slice(bytes: &[u8]) -> Self;
}

macro_rules! impl_le_field {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl LeField for $ty {
                const WIDTH: usize = core::mem::size_of::<$ty>();
                const KIND: FieldKind = FieldKind::$kind;

                fn from_le_slice(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; core::mem::size_of::<$ty>()];
                    raw.copy_from_slice(bytes);
                    <$ty>::from_le_bytes(raw)
                }
            }
        )*
    };
}

impl_le_field! {
    u8 => Unsigned,
    u16 => Unsigned,
    u32 => Unsigned,
    u64 => Unsigned,
    i8 => Signed,
    i16 => Signed,
    i32 => Signed,
    i64 => Signed,
    f32 => Float,
    f64 => Float,
}

/// Lets a `bitflags` type sit directly in a layout
macro_rules! le_bitflags {
    ($($flags:ty: $repr:ty),* $(,)?) => {
        $(
            impl $crate::ubx_packets::layout::LeField for $flags {
                const WIDTH: usize = core::mem::size_of::<$repr>();
                const KIND: $crate::ubx_packets::layout::FieldKind =
                    $crate::ubx_packets::layout::FieldKind::Unsigned;

                fn from_le_slice(bytes: &[u8]) -> Self {
                    Self::from_bits_retain(<$repr as $crate::ubx_packets::layout::LeField>::from_le_slice(bytes))
                }
            }

            impl Default for $flags {
                fn default() -> Self {
                    Self::empty()
                }
            }
        )*
    };
}
pub(crate) use le_bitflags;

/// Read a field at `offset`. Out of range reads yield the default value;
/// layouts are only read after the payload length was checked.
pub(crate) fn read_at<T: LeField>(buf: &[u8], offset: usize) -> T {
    buf.get(offset..offset + T::WIDTH)
        .map(T::from_le_slice)
        .unwrap_or_default()
}

/// Text up to the first NUL of a fixed-size field
pub(crate) fn read_cstr(buf: &[u8], range: core::ops::Range<usize>) -> String {
    let bytes = buf.get(range).unwrap_or_default();
    let end = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

/// Iterate the fixed-size records trailing a fixed header. An incomplete
/// last record is ignored.
pub(crate) fn read_blocks<T>(
    buf: &[u8],
    start: usize,
    size: usize,
    read: impl Fn(&[u8]) -> T,
) -> Vec<T> {
    buf.get(start..)
        .unwrap_or_default()
        .chunks_exact(size)
        .map(read)
        .collect()
}

/// Whether every field ends within `len` bytes
pub(crate) const fn fields_fit(fields: &[FieldDesc], len: usize) -> bool {
    let mut i = 0;
    while i < fields.len() {
        if fields[i].offset + fields[i].width > len {
            return false;
        }
        i += 1;
    }
    true
}

/// Round to `places` decimal digits
pub(crate) fn round_to<F: FloatCore + From<u8>>(value: F, places: i32) -> F {
    let factor = <F as From<u8>>::from(10).powi(places);
    (value * factor).round() / factor
}

macro_rules! ubx_layout {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident [$len:expr] {
            $(
                $(#[$fattr:meta])*
                $field:ident : $ty:ty = $offset:expr
            ),* $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        $vis struct $name {
            $(
                $(#[$fattr])*
                pub $field: $ty,
            )*
        }

        #[allow(dead_code)]
        impl $name {
            /// Size of the fixed layout in bytes
            pub const LEN: usize = $len;

            /// Name, offset and width of every field
            pub const FIELDS: &'static [$crate::ubx_packets::layout::FieldDesc] = &[
                $(
                    $crate::ubx_packets::layout::FieldDesc {
                        name: stringify!($field),
                        offset: $offset,
                        width: <$ty as $crate::ubx_packets::layout::LeField>::WIDTH,
                        kind: <$ty as $crate::ubx_packets::layout::LeField>::KIND,
                    },
                )*
            ];

            /// Read the layout starting at `base`
            pub(crate) fn read(buf: &[u8], base: usize) -> Self {
                Self {
                    $(
                        $field: $crate::ubx_packets::layout::read_at::<$ty>(buf, base + $offset),
                    )*
                }
            }
        }

        // `read_at` falls back to defaults, so an offset past `LEN` would go unnoticed
        const _: () = assert!(
            $crate::ubx_packets::layout::fields_fit($name::FIELDS, $name::LEN),
            concat!(stringify!($name), ": field past the end of the layout")
        );
    };
}
pub(crate) use ubx_layout;

#[cfg(test)]
mod test {
    use super::*;

    ubx_layout! {
        struct Sample [12] {
            a: u8 = 0,
            b: i16 = 2,
            c: u32 = 4,
            d: f32 = 8,
        }
    }

    #[test]
    fn layout_reads_little_endian_fields() {
        let mut buf = vec![0x7f, 0x00, 0xfe, 0xff, 0x78, 0x56, 0x34, 0x12];
        buf.extend_from_slice(&1.5f32.to_le_bytes());
        let s = Sample::read(&buf, 0);
        assert_eq!(s.a, 0x7f);
        assert_eq!(s.b, -2);
        assert_eq!(s.c, 0x1234_5678);
        assert_eq!(s.d, 1.5);
    }

    #[test]
    fn layout_descriptors() {
        assert_eq!(Sample::LEN, 12);
        assert_eq!(
            Sample::FIELDS[1],
            FieldDesc {
                name: "b",
                offset: 2,
                width: 2,
                kind: FieldKind::Signed
            }
        );
        let end = Sample::FIELDS
            .iter()
            .map(|f| f.offset + f.width)
            .max()
            .unwrap();
        assert_eq!(end, Sample::LEN);
        assert!(fields_fit(Sample::FIELDS, Sample::LEN));
        assert!(!fields_fit(Sample::FIELDS, Sample::LEN - 1));
    }

    #[test]
    fn blocks_ignore_partial_tail() {
        let buf = [0u8, 1, 2, 3, 4, 5, 6];
        let blocks = read_blocks(&buf, 1, 2, |b| b[0]);
        assert_eq!(blocks, vec![1, 3, 5]);
        assert!(read_blocks(&buf, 10, 2, |b| b[0]).is_empty());
    }

    #[test]
    fn cstr_stops_at_nul() {
        let buf = b"ROM CORE 3.01\0\0\0garbage";
        assert_eq!(read_cstr(buf, 0..16), "ROM CORE 3.01");
        assert_eq!(read_cstr(b"abc", 0..10), "");
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to(1.23456_f64, 2), 1.23);
        assert_eq!(round_to(-74.1234567_f64, 4), -74.1235);
    }
}
