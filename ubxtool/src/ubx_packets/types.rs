use super::packets::*;
use crate::error::DateTimeError;
use chrono::prelude::*;

/// A world position, built from NavPosLlh, NavHpPosLlh or NavPvt
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Longitude in degrees
    pub lon: f64,

    /// Latitude in degrees
    pub lat: f64,

    /// Altitude above mean sea level in meters
    pub alt: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Velocity {
    /// m/s over the ground
    pub speed: f64,

    /// Heading in degrees
    pub heading: f64,
}

impl From<&NavPosLlh> for Position {
    fn from(packet: &NavPosLlh) -> Self {
        Position {
            lon: packet.lon_degrees(),
            lat: packet.lat_degrees(),
            alt: packet.height_msl(),
        }
    }
}

impl From<&NavHpPosLlh> for Position {
    fn from(packet: &NavHpPosLlh) -> Self {
        Position {
            lon: packet.lon_degrees(),
            lat: packet.lat_degrees(),
            alt: packet.height_msl(),
        }
    }
}

impl From<&NavPvt> for Position {
    fn from(packet: &NavPvt) -> Self {
        Position {
            lon: packet.solution.lon_degrees(),
            lat: packet.solution.lat_degrees(),
            alt: packet.solution.height_msl(),
        }
    }
}

impl From<&NavVelNed> for Velocity {
    fn from(packet: &NavVelNed) -> Self {
        Velocity {
            speed: packet.ground_speed(),
            heading: packet.heading_degrees(),
        }
    }
}

impl From<&NavPvt> for Velocity {
    fn from(packet: &NavPvt) -> Self {
        Velocity {
            speed: packet.solution.ground_speed(),
            heading: packet.solution.heading_degrees(),
        }
    }
}

fn utc_datetime(
    (year, month, day): (u16, u8, u8),
    (hour, min, sec): (u8, u8, u8),
    nano: i32,
) -> Result<DateTime<Utc>, DateTimeError> {
    let date = NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
        .ok_or(DateTimeError::InvalidDate)?;
    let time = NaiveTime::from_hms_opt(u32::from(hour), u32::from(min), u32::from(sec))
        .ok_or(DateTimeError::InvalidTime)?;
    const NANOS_LIM: u32 = 1_000_000_000;
    if nano.unsigned_abs() >= NANOS_LIM {
        return Err(DateTimeError::InvalidNanoseconds);
    }

    let dt = NaiveDateTime::new(date, time) + chrono::Duration::nanoseconds(i64::from(nano));

    Ok(DateTime::from_naive_utc_and_offset(dt, Utc))
}

impl TryFrom<&NavPvt> for DateTime<Utc> {
    type Error = DateTimeError;
    fn try_from(pvt: &NavPvt) -> Result<Self, Self::Error> {
        let sol = &pvt.solution;
        utc_datetime(
            (sol.year, sol.month, sol.day),
            (sol.hour, sol.min, sol.sec),
            sol.nano,
        )
    }
}

impl TryFrom<&NavTimeUtc> for DateTime<Utc> {
    type Error = DateTimeError;
    fn try_from(utc: &NavTimeUtc) -> Result<Self, Self::Error> {
        utc_datetime(
            (utc.year, utc.month, utc.day),
            (utc.hour, utc.min, utc.sec),
            utc.nano,
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ubx_packets::PayloadDecoder;

    #[test]
    fn pvt_to_datetime() {
        let mut payload = vec![0u8; 84];
        payload[4..6].copy_from_slice(&2024u16.to_le_bytes());
        payload[6..11].copy_from_slice(&[2, 29, 12, 30, 15]);
        payload[16..20].copy_from_slice(&(-250_000_000i32).to_le_bytes());
        let pvt = NavPvt::decode(&payload).unwrap();
        let dt = DateTime::<Utc>::try_from(&pvt).unwrap();
        assert_eq!(
            dt,
            Utc.with_ymd_and_hms(2024, 2, 29, 12, 30, 14).unwrap()
                + chrono::Duration::milliseconds(750)
        );
    }

    #[test]
    fn invalid_dates_are_errors() {
        let mut payload = vec![0u8; 20];
        payload[12..14].copy_from_slice(&2023u16.to_le_bytes());
        payload[14] = 2;
        payload[15] = 29;
        let utc = NavTimeUtc::decode(&payload).unwrap();
        assert_eq!(
            DateTime::<Utc>::try_from(&utc),
            Err(DateTimeError::InvalidDate)
        );
        payload[15] = 28;
        payload[16] = 24;
        let utc = NavTimeUtc::decode(&payload).unwrap();
        assert_eq!(
            DateTime::<Utc>::try_from(&utc),
            Err(DateTimeError::InvalidTime)
        );
    }

    #[test]
    fn position_from_posllh() {
        let mut payload = vec![0u8; 28];
        payload[4..8].copy_from_slice(&(-1_225_000_000i32).to_le_bytes());
        payload[16..20].copy_from_slice(&50_500i32.to_le_bytes());
        let pos = Position::from(&NavPosLlh::decode(&payload).unwrap());
        assert_eq!(pos.lon, -122.5);
        assert_eq!(pos.alt, 50.5);
    }
}
