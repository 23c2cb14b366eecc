//! GNSS system and signal identifiers shared by several messages

/// Name of a `gnssId`
pub fn gnss_name(gnss_id: u8) -> Option<&'static str> {
    Some(match gnss_id {
        0 => "GPS",
        1 => "SBAS",
        2 => "Galileo",
        3 => "BeiDou",
        4 => "IMES",
        5 => "QZSS",
        6 => "GLONASS",
        _ => return None,
    })
}

/// Name of a `sigId` within a GNSS
pub fn signal_name(gnss_id: u8, sig_id: u8) -> Option<&'static str> {
    Some(match (gnss_id, sig_id) {
        (0 | 1 | 4, 0) => "L1C/A",
        (0 | 1 | 4, 3) => "L2 CL",
        (0 | 1 | 4, 4) => "L2 CM",
        (2, 0) => "E1C",
        (2, 1) => "E1 B",
        (2, 5) => "E5 bl",
        (2, 6) => "E5 bQ",
        (3, 0) => "B1I D1",
        (3, 1) => "B1I D2",
        (3, 2) => "B2I D1",
        (3, 3) => "B2I D2",
        (5, 0) => "L1C/A",
        (5, 4) => "L2 CM",
        (5, 5) => "L2 CL",
        (6, 0) => "L1 OF",
        (6, 2) => "L2 OF",
        _ => return None,
    })
}

/// "GPS 12 L1C/A" style satellite and signal label
pub fn gnss_label(gnss_id: u8, sv_id: u8, sig_id: u8) -> String {
    match (gnss_name(gnss_id), signal_name(gnss_id, sig_id)) {
        (Some(gnss), Some(sig)) => format!("{} {} {}", gnss, sv_id, sig),
        (Some(gnss), None) => format!("{} {} {}", gnss, sv_id, sig_id),
        _ => format!("{} {} {}", gnss_id, sv_id, sig_id),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(gnss_label(0, 12, 0), "GPS 12 L1C/A");
        assert_eq!(gnss_label(2, 5, 6), "Galileo 5 E5 bQ");
        assert_eq!(gnss_label(6, 3, 1), "GLONASS 3 1");
        assert_eq!(gnss_label(9, 1, 0), "9 1 0");
    }
}
