use bitflags::bitflags;

use crate::{
    error::ParserError,
    ubx_packets::{
        check_len,
        layout::{le_bitflags, ubx_layout},
        PayloadDecoder,
    },
};

bitflags! {
    /// Time pulse time base flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct TimTpFlags: u8 {
        /// Time base is UTC, otherwise GNSS
        const TIME_BASE_UTC = 0x01;
        const UTC_AVAILABLE = 0x02;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct TimTm2Flags: u8 {
        /// Single measurement mode, otherwise running
        const MODE_RUNNING = 0x01;
        const RUN = 0x02;
        const NEW_FALLING_EDGE = 0x04;
        const UTC = 0x20;
        const TIME_VALID = 0x40;
        const NEW_RISING_EDGE = 0x80;
    }
}

le_bitflags! {
    TimTpFlags: u8,
    TimTm2Flags: u8,
}

ubx_layout! {
    /// Survey-in data (timing receivers)
    pub struct TimSvin [28] {
        /// s
        dur: u32 = 0,
        /// cm
        mean_x: i32 = 4,
        mean_y: i32 = 8,
        mean_z: i32 = 12,
        /// mm^2
        mean_v: u32 = 16,
        obs: u32 = 20,
        valid: u8 = 24,
        active: u8 = 25,
    }
}

ubx_layout! {
    /// Time mark data
    pub struct TimTm2 [28] {
        ch: u8 = 0,
        flags: TimTm2Flags = 1,
        count: u16 = 2,
        wn_r: u16 = 4,
        wn_f: u16 = 6,
        tow_ms_r: u32 = 8,
        tow_sub_ms_r: u32 = 12,
        tow_ms_f: u32 = 16,
        tow_sub_ms_f: u32 = 20,
        /// ns
        acc_est: u32 = 24,
    }
}

ubx_layout! {
    /// Time pulse time data
    pub struct TimTp [16] {
        tow_ms: u32 = 0,
        /// 2^-32 ms
        tow_sub_ms: u32 = 4,
        /// Quantization error, ps
        q_err: i32 = 8,
        week: u16 = 12,
        flags: TimTpFlags = 14,
        ref_info: u8 = 15,
    }
}

impl TimTp {
    pub fn time_base_label(&self) -> &'static str {
        if self.flags.contains(TimTpFlags::TIME_BASE_UTC) {
            "UTC"
        } else {
            "GNSS"
        }
    }

    pub fn raim_label(&self) -> &'static str {
        match (self.flags.bits() >> 2) & 0x03 {
            0 => "RAIM not available",
            1 => "RAIM not active",
            2 => "RAIM active",
            _ => "RAIM ??",
        }
    }
}

macro_rules! tim_decoder {
    ($($ty:ident => $name:literal),* $(,)?) => {
        $(
            impl PayloadDecoder for $ty {
                const NAME: &'static str = $name;

                fn decode(payload: &[u8]) -> Result<Self, ParserError> {
                    check_len::<Self>(payload, Self::LEN)?;
                    Ok(Self::read(payload, 0))
                }
            }
        )*
    };
}

tim_decoder! {
    TimSvin => "UBX-TIM-SVIN",
    TimTm2 => "UBX-TIM-TM2",
    TimTp => "UBX-TIM-TP",
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tim_tp_labels() {
        let mut payload = vec![0u8; 16];
        payload[8..12].copy_from_slice(&(-250i32).to_le_bytes());
        payload[12..14].copy_from_slice(&2295u16.to_le_bytes());
        payload[14] = 0x01 | 0x02 | (2 << 2);
        let tp = TimTp::decode(&payload).unwrap();
        assert_eq!(tp.q_err, -250);
        assert_eq!(tp.week, 2295);
        assert_eq!(tp.time_base_label(), "UTC");
        assert!(tp.flags.contains(TimTpFlags::UTC_AVAILABLE));
        assert_eq!(tp.raim_label(), "RAIM active");
    }

    #[test]
    fn tim_svin_and_tm2_lengths() {
        assert!(TimSvin::decode(&[0; 27]).is_err());
        let mut payload = vec![0u8; 28];
        payload[24] = 1;
        assert_eq!(TimSvin::decode(&payload).unwrap().valid, 1);
        payload[1] = 0x40 | 0x80;
        let tm2 = TimTm2::decode(&payload).unwrap();
        assert!(tm2.flags.contains(TimTm2Flags::TIME_VALID | TimTm2Flags::NEW_RISING_EDGE));
    }
}
