//! Static class/id table: labels for every known message and the decoder
//! for those we can decode.

use super::{decode_fns, DecodeFn};

#[derive(Debug, Clone, Copy)]
pub struct IdEntry {
    pub id: u8,
    pub label: &'static str,
    /// Full message name, e.g. "UBX-NAV-PVT"
    pub name: &'static str,
    pub decoder: Option<DecodeFn>,
}

#[derive(Debug, Clone, Copy)]
pub struct ClassEntry {
    pub class: u8,
    pub label: &'static str,
    pub ids: &'static [IdEntry],
}

macro_rules! id_table {
    ($class:literal: $($id:literal $label:literal $(=> $dec:ident)?),* $(,)?) => {
        &[$(
            IdEntry {
                id: $id,
                label: $label,
                name: concat!("UBX-", $class, "-", $label),
                decoder: id_table!(@decoder $($dec)?),
            },
        )*]
    };
    (@decoder) => { None };
    (@decoder $dec:ident) => { Some(decode_fns::$dec as DecodeFn) };
}

const NAV_IDS: &[IdEntry] = id_table! { "NAV":
    0x01 "POSECEF" => NavPosEcef,
    0x02 "POSLLH" => NavPosLlh,
    0x03 "STATUS" => NavStatus,
    0x04 "DOP" => NavDop,
    0x05 "ATT",
    0x06 "SOL" => NavSol,
    0x07 "PVT" => NavPvt,
    0x09 "ODO",
    0x10 "RESETODO",
    0x11 "VELECEF" => NavVelEcef,
    0x12 "VELNED" => NavVelNed,
    0x13 "HPPOSECEF" => NavHpPosEcef,
    0x14 "HPPOSLLH" => NavHpPosLlh,
    0x20 "TIMEGPS" => NavTimeGps,
    0x21 "TIMEUTC" => NavTimeUtc,
    0x22 "CLOCK" => NavClock,
    0x23 "TIMEGLO" => NavTimeGlo,
    0x24 "TIMEBDS" => NavTimeBds,
    0x25 "TIMEGAL" => NavTimeGal,
    0x26 "TIMELS" => NavTimeLs,
    0x30 "SVINFO" => NavSvinfo,
    0x31 "DGPS" => NavDgps,
    0x32 "SBAS" => NavSbas,
    0x34 "ORB",
    0x35 "SAT" => NavSat,
    0x39 "GEOFENCE" => NavGeofence,
    0x3b "SVIN" => NavSvin,
    0x3c "RELPOSNED",
    0x43 "SIG" => NavSig,
    0x60 "AOPSTATUS",
    0x61 "EOE" => NavEoe,
};

const RXM_IDS: &[IdEntry] = id_table! { "RXM":
    0x10 "RAW" => RxmRaw,
    0x11 "SFRB" => RxmSfrb,
    0x13 "SFRBX" => RxmSfrbx,
    0x14 "MEASX" => RxmMeasx,
    0x15 "RAWX" => RxmRawx,
    0x20 "SVSI" => RxmSvsi,
    0x32 "RTCM",
    0x41 "PMREQ",
    0x59 "RLM",
    0x61 "IMES",
};

const INF_IDS: &[IdEntry] = id_table! { "INF":
    0x00 "ERROR" => InfError,
    0x01 "WARNING" => InfWarning,
    0x02 "NOTICE" => InfNotice,
    0x03 "TEST" => InfTest,
    0x04 "DEBUG" => InfDebug,
};

const ACK_IDS: &[IdEntry] = id_table! { "ACK":
    0x00 "NAK" => AckNak,
    0x01 "ACK" => AckAck,
};

const CFG_IDS: &[IdEntry] = id_table! { "CFG":
    0x00 "PRT" => CfgPrt,
    0x01 "MSG" => CfgMsg,
    0x02 "INF",
    0x04 "RST" => CfgRst,
    0x06 "DAT",
    0x08 "RATE",
    0x09 "CFG" => CfgCfg,
    0x11 "RXM",
    0x13 "ANT" => CfgAnt,
    0x16 "SBAS" => CfgSbas,
    0x17 "NMEA",
    0x1b "USB" => CfgUsb,
    0x1e "ODO",
    0x23 "NAVX5" => CfgNavx5,
    0x24 "NAV5" => CfgNav5,
    0x31 "TP5" => CfgTp5,
    0x34 "RINV",
    0x39 "ITFM",
    0x3b "PM2",
    0x3d "TMODE2" => CfgTmode2,
    0x3e "GNSS" => CfgGnss,
    0x47 "LOGFILTER",
    0x53 "TXSLOT",
    0x57 "PWR",
    0x5c "HNR",
    0x60 "ESRC",
    0x61 "DOSC",
    0x62 "SMGR",
    0x69 "GEOFENCE",
    0x70 "DGNSS",
    0x71 "TMODE3",
    0x84 "FIXSEED",
    0x85 "DYNSEED",
    0x86 "PMS" => CfgPms,
    0x8a "VALSET" => CfgValset,
    0x8b "VALGET" => CfgValget,
    0x8c "VALDEL" => CfgValdel,
};

const MON_IDS: &[IdEntry] = id_table! { "MON":
    0x02 "IO" => MonIo,
    0x04 "VER" => MonVer,
    0x06 "MSGPP",
    0x07 "RXBUF",
    0x08 "TXBUF",
    0x09 "HW",
    0x0b "HW2",
    0x21 "RXR",
    0x27 "PATCH",
    0x28 "GNSS",
    0x2e "SMGR",
    0x36 "COMMS" => MonComms,
    0x37 "HW3",
    0x38 "RF",
};

const TIM_IDS: &[IdEntry] = id_table! { "TIM":
    0x01 "TP" => TimTp,
    0x03 "TM2" => TimTm2,
    0x04 "SVIN" => TimSvin,
    0x06 "VRFY",
    0x11 "DOSC",
    0x12 "TOS",
    0x13 "SMEAS",
    0x15 "VCOCAL",
    0x16 "FCHG",
    0x17 "HOC",
};

const SEC_IDS: &[IdEntry] = id_table! { "SEC":
    0x01 "SIGN",
    0x03 "UNIQID" => SecUniqid,
};

// NMEA and RTCM messages are only addressed through UBX-CFG-MSG rates
const NMEA_IDS: &[IdEntry] = id_table! { "NMEA":
    0x00 "GGA",
    0x01 "GLL",
    0x02 "GSA",
    0x03 "GSV",
    0x04 "RMC",
    0x05 "VTG",
    0x06 "GRS",
    0x07 "GST",
    0x08 "ZDA",
    0x09 "GBS",
    0x0a "DTM",
    0x0d "GNS",
    0x0f "VLW",
    0x40 "GPQ",
    0x41 "TXT",
    0x42 "GNQ",
    0x43 "GLQ",
    0x44 "GBQ",
    0x45 "GAQ",
};

const RTCM_IDS: &[IdEntry] = id_table! { "RTCM":
    0x05 "1005",
    0x4a "1074",
    0x4d "1077",
    0x54 "1084",
    0x57 "1087",
    0x61 "1097",
    0x7c "1124",
    0x7f "1127",
    0xe6 "1230",
    0xfd "4072-1",
    0xfe "4072-0",
};

/// Every UBX class we can name
pub static CLASSES: &[ClassEntry] = &[
    ClassEntry { class: 0x01, label: "NAV", ids: NAV_IDS },
    ClassEntry { class: 0x02, label: "RXM", ids: RXM_IDS },
    ClassEntry { class: 0x04, label: "INF", ids: INF_IDS },
    ClassEntry { class: 0x05, label: "ACK", ids: ACK_IDS },
    ClassEntry { class: 0x06, label: "CFG", ids: CFG_IDS },
    ClassEntry { class: 0x09, label: "UPD", ids: &[] },
    ClassEntry { class: 0x0a, label: "MON", ids: MON_IDS },
    ClassEntry { class: 0x0b, label: "ATD", ids: &[] },
    ClassEntry { class: 0x0d, label: "TIM", ids: TIM_IDS },
    ClassEntry { class: 0x10, label: "ESF", ids: &[] },
    ClassEntry { class: 0x13, label: "MGA", ids: &[] },
    ClassEntry { class: 0x21, label: "LOG", ids: &[] },
    ClassEntry { class: 0x27, label: "SEC", ids: SEC_IDS },
    ClassEntry { class: 0x28, label: "HNR", ids: &[] },
    ClassEntry { class: 0xf0, label: "NMEA", ids: NMEA_IDS },
    ClassEntry { class: 0xf5, label: "RTCM", ids: RTCM_IDS },
];

fn find_class(class: u8) -> Option<&'static ClassEntry> {
    CLASSES.iter().find(|entry| entry.class == class)
}

/// Table entry for a class/id pair
pub fn lookup(class: u8, id: u8) -> Option<&'static IdEntry> {
    find_class(class)?.ids.iter().find(|entry| entry.id == id)
}

/// "UBX-NAV-PVT" style name, if the pair is known
pub fn type_name(class: u8, id: u8) -> Option<&'static str> {
    lookup(class, id).map(|entry| entry.name)
}

/// Human readable class and id, e.g. `Class: NAV(0x1) ID: PVT(0x7)`
pub fn class_id_label(class: u8, id: u8) -> String {
    let Some(class_entry) = find_class(class) else {
        return format!("Class: {:#x} ID: {:#x}", class, id);
    };
    match class_entry.ids.iter().find(|entry| entry.id == id) {
        Some(id_entry) => format!(
            "Class: {}({:#x}) ID: {}({:#x})",
            class_entry.label, class, id_entry.label, id
        ),
        None => format!("Class: {}({:#x}) ID: {:#x}", class_entry.label, class, id),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(class_id_label(0x01, 0x07), "Class: NAV(0x1) ID: PVT(0x7)");
        assert_eq!(class_id_label(0x01, 0xee), "Class: NAV(0x1) ID: 0xee");
        assert_eq!(class_id_label(0x09, 0x01), "Class: UPD(0x9) ID: 0x1");
        assert_eq!(class_id_label(0x66, 0x00), "Class: 0x66 ID: 0x0");
        assert_eq!(class_id_label(0xf5, 0xfe), "Class: RTCM(0xf5) ID: 4072-0(0xfe)");
    }

    #[test]
    fn names() {
        assert_eq!(type_name(0x01, 0x14), Some("UBX-NAV-HPPOSLLH"));
        assert_eq!(type_name(0x27, 0x03), Some("UBX-SEC-UNIQID"));
        assert_eq!(type_name(0x06, 0xff), None);
    }

    #[test]
    fn tables_are_sorted_and_unique() {
        for window in CLASSES.windows(2) {
            assert!(window[0].class < window[1].class);
        }
        for class in CLASSES {
            for window in class.ids.windows(2) {
                assert!(window[0].id < window[1].id, "{}", window[1].name);
            }
        }
    }

    #[test]
    fn decoder_presence() {
        assert!(lookup(0x01, 0x07).unwrap().decoder.is_some());
        assert!(lookup(0x01, 0x05).unwrap().decoder.is_none());
        assert!(lookup(0xf0, 0x00).unwrap().decoder.is_none());
        let decoders = CLASSES
            .iter()
            .flat_map(|c| c.ids.iter())
            .filter(|e| e.decoder.is_some())
            .count();
        assert_eq!(decoders, 61);
    }
}
