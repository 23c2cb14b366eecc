use std::borrow::Cow;

use super::{CfgType, ConfigItem};

macro_rules! cfg_items {
    ($($name:literal, $key:literal, $ty:ident, $scale:literal, $unit:literal, $desc:literal;)*) => {
        /// Every configuration item known to the registry
        pub static CFG_ITEMS: &[ConfigItem] = &[
            $(ConfigItem {
                name: Cow::Borrowed($name),
                key: $key,
                cfg_type: CfgType::$ty,
                scale: $scale,
                unit: $unit,
                description: $desc,
            },)*
        ];
    };
}

cfg_items! {
    // CFG-GEOFENCE
    "CFG-GEOFENCE-CONFLVL", 0x20240011, E1, 1.0, "",
        "Required confidence level for state evaluation";
    "CFG-GEOFENCE-USE_PIO", 0x10240012, L, 1.0, "",
        "Use PIO combined fence state output";
    "CFG-GEOFENCE-PINPOL", 0x20240013, E1, 1.0, "",
        "PIO pin polarity";
    "CFG-GEOFENCE-PIN", 0x20240014, U1, 1.0, "",
        "PIO pin number";
    "CFG-GEOFENCE-USE_FENCE1", 0x10240020, L, 1.0, "",
        "Use first geofence";
    "CFG-GEOFENCE-FENCE1_LAT", 0x40240021, I4, 1e-07, "deg",
        "Latitude of the first geofence circle center";
    "CFG-GEOFENCE-FENCE1_LON", 0x40240022, I4, 1e-07, "deg",
        "Longitude of the first geofence circle center";
    "CFG-GEOFENCE-FENCE1_RAD", 0x40240023, U4, 0.01, "m",
        "Radius of the first geofence circle";
    "CFG-GEOFENCE-USE_FENCE2", 0x10240030, L, 1.0, "",
        "Use second geofence";
    "CFG-GEOFENCE-FENCE2_LAT", 0x40240031, I4, 1e-07, "deg",
        "Latitude of the second geofence circle center";
    "CFG-GEOFENCE-FENCE2_LON", 0x40240032, I4, 1e-07, "deg",
        "Longitude of the second geofence circle center";
    "CFG-GEOFENCE-FENCE2_RAD", 0x40240033, U4, 0.01, "m",
        "Radius of the second geofence circle";
    "CFG-GEOFENCE-USE_FENCE3", 0x10240040, L, 1.0, "",
        "Use third geofence";
    "CFG-GEOFENCE-FENCE3_LAT", 0x40240041, I4, 1e-07, "deg",
        "Latitude of the third geofence circle center";
    "CFG-GEOFENCE-FENCE3_LON", 0x40240042, I4, 1e-07, "deg",
        "Longitude of the third geofence circle center";
    "CFG-GEOFENCE-FENCE3_RAD", 0x40240043, U4, 0.01, "m",
        "Radius of the third geofence circle";
    "CFG-GEOFENCE-USE_FENCE4", 0x10240050, L, 1.0, "",
        "Use fourth geofence";
    "CFG-GEOFENCE-FENCE4_LAT", 0x40240051, I4, 1e-07, "deg",
        "Latitude of the fourth geofence circle center";
    "CFG-GEOFENCE-FENCE4_LON", 0x40240052, I4, 1e-07, "deg",
        "Longitude of the fourth geofence circle center";
    "CFG-GEOFENCE-FENCE4_RAD", 0x40240053, U4, 0.01, "m",
        "Radius of the fourth geofence circle";

    // CFG-HW
    "CFG-HW-ANT_CFG_VOLTCTRL", 0x10a3002e, L, 1.0, "",
        "Active antenna voltage control flag";
    "CFG-HW-ANT_CFG_SHORTDET", 0x10a3002f, L, 1.0, "",
        "Short antenna detection flag";
    "CFG-HW-ANT_CFG_SHORTDET_POL", 0x10a30030, L, 1.0, "",
        "Short antenna detection polarity";
    "CFG-HW-ANT_CFG_OPENDET", 0x10a30031, L, 1.0, "",
        "Open antenna detection flag";
    "CFG-HW-ANT_CFG_OPENDET_POL", 0x10a30032, L, 1.0, "",
        "Open antenna detection polarity";
    "CFG-HW-ANT_CFG_PWRDOWN", 0x10a30033, L, 1.0, "",
        "Power down antenna flag";
    "CFG-HW-ANT_CFG_PWRDOWN_POL", 0x10a30034, L, 1.0, "",
        "Power down antenna logic polarity";
    "CFG-HW-ANT_CFG_RECOVER", 0x10a30035, L, 1.0, "",
        "Automatic recovery from short state flag";
    "CFG-HW-ANT_SUP_SWITCH_PIN", 0x20a30036, U1, 1.0, "",
        "ANT1 PIO number";
    "CFG-HW-ANT_SUP_SHORT_PIN", 0x20a30037, U1, 1.0, "",
        "ANT0 PIO number";
    "CFG-HW-ANT_SUP_OPEN_PIN", 0x20a30038, U1, 1.0, "",
        "ANT2 PIO number";

    // CFG-I2C
    "CFG-I2C-ADDRESS", 0x20510001, U1, 1.0, "",
        "I2C slave address of the receiver";
    "CFG-I2C-EXTENDEDTIMEOUT", 0x10510002, L, 1.0, "",
        "Flag to disable timeouting the interface after 1.5 s";
    "CFG-I2C-ENABLED", 0x10510003, L, 1.0, "",
        "Flag to indicate if the I2C interface should be enabled";

    // CFG-I2CINPROT
    "CFG-I2CINPROT-UBX", 0x10710001, L, 1.0, "",
        "Flag to indicate if UBX should be an input on I2C";
    "CFG-I2CINPROT-NMEA", 0x10710002, L, 1.0, "",
        "Flag to indicate if NMEA should be an input on I2C";
    "CFG-I2CINPROT-RTCM2X", 0x10710003, L, 1.0, "",
        "Flag to indicate if RTCM2X should be an input on I2C";
    "CFG-I2CINPROT-RTCM3X", 0x10710004, L, 1.0, "",
        "Flag to indicate if RTCM3X should be input on I2C";

    // CFG-I2COUTPROT
    "CFG-I2COUTPROT-UBX", 0x10720001, L, 1.0, "",
        "Flag to indicate if UBX should be an output on I2C";
    "CFG-I2COUTPROT-NMEA", 0x10720002, L, 1.0, "",
        "Flag to indicate if NMEA should be an output on I2C";
    "CFG-I2COUTPROT-RTCM3X", 0x10720004, L, 1.0, "",
        "Flag to indicate if RTCM3X should be an output on I2C";

    // CFG-INFMSG
    "CFG-INFMSG-UBX_I2C", 0x20920001, X1, 1.0, "",
        "Information message enable flags for UBX protocol on I2C";
    "CFG-INFMSG-UBX_UART1", 0x20920002, X1, 1.0, "",
        "Information message enable flags for UBX protocol on UART1";
    "CFG-INFMSG-UBX_UART2", 0x20920003, X1, 1.0, "",
        "Information message enable flags for UBX protocol on UART2";
    "CFG-INFMSG-UBX_USB", 0x20920004, X1, 1.0, "",
        "Information message enable flags for UBX protocol on USB";
    "CFG-INFMSG-UBX_SPI", 0x20920005, X1, 1.0, "",
        "Information message enable flags for UBX protocol on SPI";
    "CFG-INFMSG-NMEA_I2C", 0x20920006, X1, 1.0, "",
        "Information message enable flags for NMEA protocol on I2C";
    "CFG-INFMSG-NMEA_UART1", 0x20920007, X1, 1.0, "",
        "Information message enable flags for NMEA protocol on UART1";
    "CFG-INFMSG-NMEA_UART2", 0x20920008, X1, 1.0, "",
        "Information message enable flags for NMEA protocol on UART2";
    "CFG-INFMSG-NMEA_USB", 0x20920009, X1, 1.0, "",
        "Information message enable flags for NMEA protocol on USB";
    "CFG-INFMSG-NMEA_SPI", 0x2092000a, X1, 1.0, "",
        "Information message enable flags for NMEA protocol on SPI";

    // CFG-ITFM
    "CFG-ITFM-BBTHRESHOLD", 0x20410001, U1, 1.0, "",
        "Broadband jamming detection threshold";
    "CFG-ITFM-CWTHRESHOLD", 0x20410002, U1, 1.0, "",
        "CW jamming detection threshold";
    "CFG-ITFM-ENABLE", 0x1041000d, L, 1.0, "",
        "Enable interference detection";
    "CFG-ITFM-ANTSETTING", 0x20410010, E1, 1.0, "",
        "Antenna setting";
    "CFG-ITFM-ENABLE_AUX", 0x10410013, L, 1.0, "",
        "Set to true to scan auxiliary bands";

    // CFG-LOGFILTER
    "CFG-LOGFILTER-RECORD_ENA", 0x10de0002, L, 1.0, "",
        "Recording enabled";
    "CFG-LOGFILTER-ONCE_PER_WAKE_UP_ENA", 0x10de0003, L, 1.0, "",
        "Once per wakeup";
    "CFG-LOGFILTER-APPLY_ALL_FILTERS", 0x10de0004, L, 1.0, "",
        "Apply all filter settings";
    "CFG-LOGFILTER-MIN_INTERVAL", 0x30de0005, U2, 1.0, "s",
        "Minimum time interval between logged positions";
    "CFG-LOGFILTER-TIME_THRS", 0x30de0006, U2, 1.0, "s",
        "Time threshold";
    "CFG-LOGFILTER-SPEED_THRS", 0x30de0007, U2, 1.0, "m/s",
        "Speed threshold";
    "CFG-LOGFILTER-POSITION_THRS", 0x40de0008, U4, 1.0, "m",
        "Position threshold";

    // CFG-MOT
    "CFG-MOT-GNSSSPEED_THRS", 0x20250038, U1, 0.01, "m/s",
        "GNSS speed threshold below which platform is considered as stationary";
    "CFG-MOT-GNSSDIST_THRS", 0x3025003b, U2, 1.0, "",
        "Distance above which GNSS-based stationary motion is exit";

    // CFG-MSGOUT
    "CFG-MSGOUT-NMEA_ID_DTM_I2C", 0x209100a6, U1, 1.0, "",
        "Output rate of the NMEA-GX-DTM message on port I2C";
    "CFG-MSGOUT-NMEA_ID_DTM_SPI", 0x209100aa, U1, 1.0, "",
        "Output rate of the NMEA-GX-DTM message on port SPI";
    "CFG-MSGOUT-NMEA_ID_DTM_UART1", 0x209100a7, U1, 1.0, "",
        "Output rate of the NMEA-GX-DTM message on port UART1";
    "CFG-MSGOUT-NMEA_ID_DTM_UART2", 0x209100a8, U1, 1.0, "",
        "Output rate of the NMEA-GX-DTM message on port UART2";
    "CFG-MSGOUT-NMEA_ID_DTM_USB", 0x209100a9, U1, 1.0, "",
        "Output rate of the NMEA-GX-DTM message on port USB";
    "CFG-MSGOUT-NMEA_ID_GBS_I2C", 0x209100dd, U1, 1.0, "",
        "Output rate of the NMEA-GX-GBS message on port I2C";
    "CFG-MSGOUT-NMEA_ID_GBS_SPI", 0x209100e1, U1, 1.0, "",
        "Output rate of the NMEA-GX-GBS message on port SPI";
    "CFG-MSGOUT-NMEA_ID_GBS_UART1", 0x209100de, U1, 1.0, "",
        "Output rate of the NMEA-GX-GBS message on port UART1";
    "CFG-MSGOUT-NMEA_ID_GBS_UART2", 0x209100df, U1, 1.0, "",
        "Output rate of the NMEA-GX-GBS message on port UART2";
    "CFG-MSGOUT-NMEA_ID_GBS_USB", 0x209100e0, U1, 1.0, "",
        "Output rate of the NMEA-GX-GBS message on port USB";
    "CFG-MSGOUT-NMEA_ID_GGA_I2C", 0x209100ba, U1, 1.0, "",
        "Output rate of the NMEA-GX-GGA message on port I2C";
    "CFG-MSGOUT-NMEA_ID_GGA_SPI", 0x209100be, U1, 1.0, "",
        "Output rate of the NMEA-GX-GGA message on port SPI";
    "CFG-MSGOUT-NMEA_ID_GGA_UART1", 0x209100bb, U1, 1.0, "",
        "Output rate of the NMEA-GX-GGA message on port UART1";
    "CFG-MSGOUT-NMEA_ID_GGA_UART2", 0x209100bc, U1, 1.0, "",
        "Output rate of the NMEA-GX-GGA message on port UART2";
    "CFG-MSGOUT-NMEA_ID_GGA_USB", 0x209100bd, U1, 1.0, "",
        "Output rate of the NMEA-GX-GGA message on port USB";
    "CFG-MSGOUT-NMEA_ID_GLL_I2C", 0x209100c9, U1, 1.0, "",
        "Output rate of the NMEA-GX-GLL message on port I2C";
    "CFG-MSGOUT-NMEA_ID_GLL_SPI", 0x209100cd, U1, 1.0, "",
        "Output rate of the NMEA-GX-GLL message on port SPI";
    "CFG-MSGOUT-NMEA_ID_GLL_UART1", 0x209100ca, U1, 1.0, "",
        "Output rate of the NMEA-GX-GLL message on port UART1";
    "CFG-MSGOUT-NMEA_ID_GLL_UART2", 0x209100cb, U1, 1.0, "",
        "Output rate of the NMEA-GX-GLL message on port UART2";
    "CFG-MSGOUT-NMEA_ID_GLL_USB", 0x209100cc, U1, 1.0, "",
        "Output rate of the NMEA-GX-GLL message on port USB";
    "CFG-MSGOUT-NMEA_ID_GNS_I2C", 0x209100b5, U1, 1.0, "",
        "Output rate of the NMEA-GX-GNS message on port I2C";
    "CFG-MSGOUT-NMEA_ID_GNS_SPI", 0x209100b9, U1, 1.0, "",
        "Output rate of the NMEA-GX-GNS message on port SPI";
    "CFG-MSGOUT-NMEA_ID_GNS_UART1", 0x209100b6, U1, 1.0, "",
        "Output rate of the NMEA-GX-GNS message on port UART1";
    "CFG-MSGOUT-NMEA_ID_GNS_UART2", 0x209100b7, U1, 1.0, "",
        "Output rate of the NMEA-GX-GNS message on port UART2";
    "CFG-MSGOUT-NMEA_ID_GNS_USB", 0x209100b8, U1, 1.0, "",
        "Output rate of the NMEA-GX-GNS message on port USB";
    "CFG-MSGOUT-NMEA_ID_GRS_I2C", 0x209100ce, U1, 1.0, "",
        "Output rate of the NMEA-GX-GRS message on port I2C";
    "CFG-MSGOUT-NMEA_ID_GRS_SPI", 0x209100d2, U1, 1.0, "",
        "Output rate of the NMEA-GX-GRS message on port SPI";
    "CFG-MSGOUT-NMEA_ID_GRS_UART1", 0x209100cf, U1, 1.0, "",
        "Output rate of the NMEA-GX-GRS message on port UART1";
    "CFG-MSGOUT-NMEA_ID_GRS_UART2", 0x209100d0, U1, 1.0, "",
        "Output rate of the NMEA-GX-GRS message on port UART2";
    "CFG-MSGOUT-NMEA_ID_GRS_USB", 0x209100d1, U1, 1.0, "",
        "Output rate of the NMEA-GX-GRS message on port USB";
    "CFG-MSGOUT-NMEA_ID_GSA_I2C", 0x209100bf, U1, 1.0, "",
        "Output rate of the NMEA-GX-GSA message on port I2C";
    "CFG-MSGOUT-NMEA_ID_GSA_SPI", 0x209100c3, U1, 1.0, "",
        "Output rate of the NMEA-GX-GSA message on port SPI";
    "CFG-MSGOUT-NMEA_ID_GSA_UART1", 0x209100c0, U1, 1.0, "",
        "Output rate of the NMEA-GX-GSA message on port UART1";
    "CFG-MSGOUT-NMEA_ID_GSA_UART2", 0x209100c1, U1, 1.0, "",
        "Output rate of the NMEA-GX-GSA message on port UART2";
    "CFG-MSGOUT-NMEA_ID_GSA_USB", 0x209100c2, U1, 1.0, "",
        "Output rate of the NMEA-GX-GSA message on port USB";
    "CFG-MSGOUT-NMEA_ID_GST_I2C", 0x209100d3, U1, 1.0, "",
        "Output rate of the NMEA-GX-GST message on port I2C";
    "CFG-MSGOUT-NMEA_ID_GST_SPI", 0x209100d7, U1, 1.0, "",
        "Output rate of the NMEA-GX-GST message on port SPI";
    "CFG-MSGOUT-NMEA_ID_GST_UART1", 0x209100d4, U1, 1.0, "",
        "Output rate of the NMEA-GX-GST message on port UART1";
    "CFG-MSGOUT-NMEA_ID_GST_UART2", 0x209100d5, U1, 1.0, "",
        "Output rate of the NMEA-GX-GST message on port UART2";
    "CFG-MSGOUT-NMEA_ID_GST_USB", 0x209100d6, U1, 1.0, "",
        "Output rate of the NMEA-GX-GST message on port USB";
    "CFG-MSGOUT-NMEA_ID_GSV_I2C", 0x209100c4, U1, 1.0, "",
        "Output rate of the NMEA-GX-GSV message on port I2C";
    "CFG-MSGOUT-NMEA_ID_GSV_SPI", 0x209100c8, U1, 1.0, "",
        "Output rate of the NMEA-GX-GSV message on port SPI";
    "CFG-MSGOUT-NMEA_ID_GSV_UART1", 0x209100c5, U1, 1.0, "",
        "Output rate of the NMEA-GX-GSV message on port UART1";
    "CFG-MSGOUT-NMEA_ID_GSV_UART2", 0x209100c6, U1, 1.0, "",
        "Output rate of the NMEA-GX-GSV message on port UART";
    "CFG-MSGOUT-NMEA_ID_GSV_USB", 0x209100c7, U1, 1.0, "",
        "Output rate of the NMEA-GX-GSV message on port USB";
    "CFG-MSGOUT-NMEA_ID_RMC_I2C", 0x209100ab, U1, 1.0, "",
        "Output rate of the NMEA-GX-RMC message on port I2C";
    "CFG-MSGOUT-NMEA_ID_RMC_SPI", 0x209100af, U1, 1.0, "",
        "Output rate of the NMEA-GX-RMC message on port SPI";
    "CFG-MSGOUT-NMEA_ID_RMC_UART1", 0x209100ac, U1, 1.0, "",
        "Output rate of the NMEA-GX-RMC message on port UART1";
    "CFG-MSGOUT-NMEA_ID_RMC_UART2", 0x209100ad, U1, 1.0, "",
        "Output rate of the NMEA-GX-RMC message on port UART2";
    "CFG-MSGOUT-NMEA_ID_RMC_USB", 0x209100ae, U1, 1.0, "",
        "Output rate of the NMEA-GX-RMC message on port USB";
    "CFG-MSGOUT-NMEA_ID_VLW_I2C", 0x209100e7, U1, 1.0, "",
        "Output rate of the NMEA-GX-VLW message on port I2C";
    "CFG-MSGOUT-NMEA_ID_VLW_SPI", 0x209100eb, U1, 1.0, "",
        "Output rate of the NMEA-GX-VLW message on port SPI";
    "CFG-MSGOUT-NMEA_ID_VLW_UART1", 0x209100e8, U1, 1.0, "",
        "Output rate of the NMEA-GX-VLW message on port UART1";
    "CFG-MSGOUT-NMEA_ID_VLW_UART2", 0x209100e9, U1, 1.0, "",
        "Output rate of the NMEA-GX-VLW message on port UART2";
    "CFG-MSGOUT-NMEA_ID_VLW_USB", 0x209100ea, U1, 1.0, "",
        "Output rate of the NMEA-GX-VLW message on port USB";
    "CFG-MSGOUT-NMEA_ID_VTG_I2C", 0x209100b0, U1, 1.0, "",
        "Output rate of the NMEA-GX-VTG message on port I2C";
    "CFG-MSGOUT-NMEA_ID_VTG_SPI", 0x209100b4, U1, 1.0, "",
        "Output rate of the NMEA-GX-VTG message on port SPI";
    "CFG-MSGOUT-NMEA_ID_VTG_UART1", 0x209100b1, U1, 1.0, "",
        "Output rate of the NMEA-GX-VTG message on port UART1";
    "CFG-MSGOUT-NMEA_ID_VTG_UART2", 0x209100b2, U1, 1.0, "",
        "Output rate of the NMEA-GX-VTG message on port UART2";
    "CFG-MSGOUT-NMEA_ID_VTG_USB", 0x209100b3, U1, 1.0, "",
        "Output rate of the NMEA-GX-VTG message on port USB";
    "CFG-MSGOUT-NMEA_ID_ZDA_I2C", 0x209100d8, U1, 1.0, "",
        "Output rate of the NMEA-GX-ZDA message on port I2C";
    "CFG-MSGOUT-NMEA_ID_ZDA_SPI", 0x209100dc, U1, 1.0, "",
        "Output rate of the NMEA-GX-ZDA message on port SPI";
    "CFG-MSGOUT-NMEA_ID_ZDA_UART1", 0x209100d9, U1, 1.0, "",
        "Output rate of the NMEA-GX-ZDA message on port UART1";
    "CFG-MSGOUT-NMEA_ID_ZDA_UART2", 0x209100da, U1, 1.0, "",
        "Output rate of the NMEA-GX-ZDA message on port UART2";
    "CFG-MSGOUT-NMEA_ID_ZDA_USB", 0x209100db, U1, 1.0, "",
        "Output rate of the NMEA-GX-ZDA message on port USB";
    "CFG-MSGOUT-PUBX_ID_POLYP_I2C", 0x209100ec, U1, 1.0, "",
        "Output rate of the NMEA-GX-PUBX00 message on port I2C";
    "CFG-MSGOUT-PUBX_ID_POLYP_SPI", 0x209100f0, U1, 1.0, "",
        "Output rate of the NMEA-GX-PUBX00 message on port SPI";
    "CFG-MSGOUT-PUBX_ID_POLYP_UART1", 0x209100ed, U1, 1.0, "",
        "Output rate of the NMEA-GX-PUBX00 message on port UART1";
    "CFG-MSGOUT-PUBX_ID_POLYP_UART2", 0x209100ee, U1, 1.0, "",
        "Output rate of the NMEA-GX-PUBX00 message on port UART2";
    "CFG-MSGOUT-PUBX_ID_POLYP_USB", 0x209100ef, U1, 1.0, "",
        "Output rate of the NMEA-GX-PUBX00 message on port USB";
    "CFG-MSGOUT-PUBX_ID_POLYS_I2C", 0x209100f1, U1, 1.0, "",
        "Output rate of the NMEA-GX-PUBX03 message on port I2C";
    "CFG-MSGOUT-PUBX_ID_POLYS_SPI", 0x209100f5, U1, 1.0, "",
        "Output rate of the NMEA-GX-PUBX03 message on port SPI";
    "CFG-MSGOUT-PUBX_ID_POLYS_UART1", 0x209100f2, U1, 1.0, "",
        "Output rate of the NMEA-GX-PUBX03 message on port UART1";
    "CFG-MSGOUT-PUBX_ID_POLYS_UART2", 0x209100f3, U1, 1.0, "",
        "Output rate of the NMEA-GX-PUBX03 message on port UART2";
    "CFG-MSGOUT-PUBX_ID_POLYS_USB", 0x209100f4, U1, 1.0, "",
        "Output rate of the NMEA-GX-PUBX03 message on port USB";
    "CFG-MSGOUT-PUBX_ID_POLYT_I2C", 0x209100f6, U1, 1.0, "",
        "Output rate of the NMEA-GX-PUBX04 message on port I2C";
    "CFG-MSGOUT-PUBX_ID_POLYT_SPI", 0x209100fa, U1, 1.0, "",
        "Output rate of the NMEA-GX-PUBX04 message on port SPI";
    "CFG-MSGOUT-PUBX_ID_POLYT_UART1", 0x209100f7, U1, 1.0, "",
        "Output rate of the NMEA-GX-PUBX04 message on port UART1";
    "CFG-MSGOUT-PUBX_ID_POLYT_UART2", 0x209100f8, U1, 1.0, "",
        "Output rate of the NMEA-GX-PUBX04 message on port UART2";
    "CFG-MSGOUT-PUBX_ID_POLYT_USB", 0x209100f9, U1, 1.0, "",
        "Output rate of the NMEA-GX-PUBX04 message on port USB";
    "CFG-MSGOUT-RTCM_3X_TYPE1005_I2C", 0x209102bd, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1005 message on port I2C";
    "CFG-MSGOUT-RTCM_3X_TYPE1005_SPI", 0x209102c1, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1005 message on port SPI";
    "CFG-MSGOUT-RTCM_3X_TYPE1005_UART1", 0x209102be, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1005 message on port UART1";
    "CFG-MSGOUT-RTCM_3X_TYPE1005_UART2", 0x209102bf, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1005 message on port UART2";
    "CFG-MSGOUT-RTCM_3X_TYPE1005_USB", 0x209102c0, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1005 message on port USB";
    "CFG-MSGOUT-RTCM_3X_TYPE1074_I2C", 0x2091035e, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1074 message on port I2C";
    "CFG-MSGOUT-RTCM_3X_TYPE1074_SPI", 0x20910362, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1074 message on port SPI";
    "CFG-MSGOUT-RTCM_3X_TYPE1074_UART1", 0x2091035f, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1074 message on port UART1";
    "CFG-MSGOUT-RTCM_3X_TYPE1074_UART2", 0x20910360, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1074 message on port UART2";
    "CFG-MSGOUT-RTCM_3X_TYPE1074_USB", 0x20910361, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1074 message on port USB";
    "CFG-MSGOUT-RTCM_3X_TYPE1077_I2C", 0x209102cc, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1077 message on port I2";
    "CFG-MSGOUT-RTCM_3X_TYPE1077_SPI", 0x209102d0, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1077 message on port SPI";
    "CFG-MSGOUT-RTCM_3X_TYPE1077_UART1", 0x209102cd, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1077 message on port UART1";
    "CFG-MSGOUT-RTCM_3X_TYPE1077_UART2", 0x209102ce, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1077 message on port UART2";
    "CFG-MSGOUT-RTCM_3X_TYPE1077_USB", 0x209102cf, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1077 message on port USB";
    "CFG-MSGOUT-RTCM_3X_TYPE1087_I2C", 0x209102d1, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1087 message on port I2C";
    "CFG-MSGOUT-RTCM_3X_TYPE1084_SPI", 0x20910367, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1084 message on port SPI";
    "CFG-MSGOUT-RTCM_3X_TYPE1084_UART1", 0x20910364, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1084 message on port UART1";
    "CFG-MSGOUT-RTCM_3X_TYPE1084_UART2", 0x20910365, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1084 message on port UART2";
    "CFG-MSGOUT-RTCM_3X_TYPE1084_USB", 0x20910366, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1084 message on port USB";
    "CFG-MSGOUT-RTCM_3X_TYPE1087_SPI", 0x209102d5, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1087 message on port SPI";
    "CFG-MSGOUT-RTCM_3X_TYPE1087_UART1", 0x209102d2, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1087 message on port UART1";
    "CFG-MSGOUT-RTCM_3X_TYPE1087_UART2", 0x209102d3, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1087 message on port UART2";
    "CFG-MSGOUT-RTCM_3X_TYPE1087_USB", 0x209102d4, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1087 message on port USB";
    "CFG-MSGOUT-RTCM_3X_TYPE1094_I2C", 0x20910368, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1094 message on port I2C";
    "CFG-MSGOUT-RTCM_3X_TYPE1094_SPI", 0x2091036c, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1094 message on port SPI";
    "CFG-MSGOUT-RTCM_3X_TYPE1094_UART1", 0x20910369, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1094 message on port UART1";
    "CFG-MSGOUT-RTCM_3X_TYPE1094_UART2", 0x2091036a, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1094 message on port UART2";
    "CFG-MSGOUT-RTCM_3X_TYPE1094_USB", 0x2091036b, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1094 message on port USB";
    "CFG-MSGOUT-RTCM_3X_TYPE1097_I2C", 0x20910318, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1097 message on port I2C";
    "CFG-MSGOUT-RTCM_3X_TYPE1097_SPI", 0x2091031c, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1097 message on port SPI";
    "CFG-MSGOUT-RTCM_3X_TYPE1097_UART1", 0x20910319, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1097 message on port UART1";
    "CFG-MSGOUT-RTCM_3X_TYPE1097_UART2", 0x2091031a, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1097 message on port UART2";
    "CFG-MSGOUT-RTCM_3X_TYPE1097_USB", 0x2091031b, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1097 message on port USB";
    "CFG-MSGOUT-RTCM_3X_TYPE1124_I2C", 0x2091036d, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1124 message on port I2C";
    "CFG-MSGOUT-RTCM_3X_TYPE1124_SPI", 0x20910371, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1124 message on port SPI";
    "CFG-MSGOUT-RTCM_3X_TYPE1124_UART1", 0x2091036e, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1124 message on port UART1";
    "CFG-MSGOUT-RTCM_3X_TYPE1124_UART2", 0x2091036f, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1124 message on port UART2";
    "CFG-MSGOUT-RTCM_3X_TYPE1124_USB", 0x20910370, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1124 message on port USB";
    "CFG-MSGOUT-RTCM_3X_TYPE1127_I2C", 0x209102d6, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1127 message on port I2C";
    "CFG-MSGOUT-RTCM_3X_TYPE1127_SPI", 0x209102da, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1127 message on port SPI";
    "CFG-MSGOUT-RTCM_3X_TYPE1127_UART1", 0x209102d7, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1127 message on port UART1";
    "CFG-MSGOUT-RTCM_3X_TYPE1127_UART2", 0x209102d8, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1127 message on port UART2";
    "CFG-MSGOUT-RTCM_3X_TYPE1127_USB", 0x209102d9, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1127 message on port USB";
    "CFG-MSGOUT-RTCM_3X_TYPE1230_I2C", 0x20910303, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1230 message on port I2C";
    "CFG-MSGOUT-RTCM_3X_TYPE1230_SPI", 0x20910307, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1230 message on port SPI";
    "CFG-MSGOUT-RTCM_3X_TYPE1230_UART1", 0x20910304, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1230 message on port UART1";
    "CFG-MSGOUT-RTCM_3X_TYPE1230_UART2", 0x20910305, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1230 message on port UART2";
    "CFG-MSGOUT-RTCM_3X_TYPE1230_USB", 0x20910306, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE1230 message on port USB";
    "CFG-MSGOUT-RTCM_3X_TYPE4072_0_I2C", 0x209102fe, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE4072, sub-type 0 message on port I2C";
    "CFG-MSGOUT-RTCM_3X_TYPE4072_0_SPI", 0x20910302, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE4072, sub-type 0 message on port SPI";
    "CFG-MSGOUT-RTCM_3X_TYPE4072_0_UART1", 0x209102ff, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE4072, sub-type 0 message on port UART1";
    "CFG-MSGOUT-RTCM_3X_TYPE4072_0_UART2", 0x20910300, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE4072, sub-type 0 message on port UART2";
    "CFG-MSGOUT-RTCM_3X_TYPE4072_0_USB", 0x20910301, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE4072, sub-type 0 message on port USB";
    "CFG-MSGOUT-RTCM_3X_TYPE4072_1_I2C", 0x20910381, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE4072, sub-type 1 message on  port I2C";
    "CFG-MSGOUT-RTCM_3X_TYPE4072_1_SPI", 0x20910385, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE4072, sub-type 1 message on  port SPI";
    "CFG-MSGOUT-RTCM_3X_TYPE4072_1_UART1", 0x20910382, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE4072, sub-type 1 message on  port UART1";
    "CFG-MSGOUT-RTCM_3X_TYPE4072_1_UART2", 0x20910383, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE4072, sub-type 1 message on  port UART2";
    "CFG-MSGOUT-RTCM_3X_TYPE4072_1_USB", 0x20910384, U1, 1.0, "",
        "Output rate of the RTCM-3X-TYPE4072, sub-type 1 message on port USB";
    "CFG-MSGOUT-UBX_LOG_INFO_I2C", 0x20910259, U1, 1.0, "",
        "Output rate of the UBX-LOG-INFO message on port I2C";
    "CFG-MSGOUT-UBX_LOG_INFO_SPI", 0x2091025d, U1, 1.0, "",
        "Output rate of the UBX-LOG-INFO message on port SPI";
    "CFG-MSGOUT-UBX_LOG_INFO_UART1", 0x2091025a, U1, 1.0, "",
        "Output rate of the UBX-LOG-INFO message on port UART1";
    "CFG-MSGOUT-UBX_LOG_INFO_UART2", 0x2091025b, U1, 1.0, "",
        "Output rate of the UBX-LOG-INFO message on port UART2";
    "CFG-MSGOUT-UBX_LOG_INFO_USB", 0x2091025c, U1, 1.0, "",
        "Output rate of the UBX-LOG-INFO message on port USB";
    "CFG-MSGOUT-UBX_MON_COMMS_I2C", 0x2091034f, U1, 1.0, "",
        "Output rate of the UBX-MON-COMMS message on port I2C";
    "CFG-MSGOUT-UBX_MON_COMMS_SPI", 0x20910353, U1, 1.0, "",
        "Output rate of the UBX-MON-COMMS message on port SPI";
    "CFG-MSGOUT-UBX_MON_COMMS_UART1", 0x20910350, U1, 1.0, "",
        "Output rate of the UBX-MON-COMMS message on port UART1";
    "CFG-MSGOUT-UBX_MON_COMMS_UART2", 0x20910351, U1, 1.0, "",
        "Output rate of the UBX-MON-COMMS message on port UART2";
    "CFG-MSGOUT-UBX_MON_COMMS_USB", 0x20910352, U1, 1.0, "",
        "Output rate of the UBX-MON-COMMS message on port USB";
    "CFG-MSGOUT-UBX_MON_HW2_I2C", 0x209101b9, U1, 1.0, "",
        "Output rate of the UBX-MON-HW2 message on port I2C";
    "CFG-MSGOUT-UBX_MON_HW2_SPI", 0x209101bd, U1, 1.0, "",
        "Output rate of the UBX-MON-HW2 message on port SPI";
    "CFG-MSGOUT-UBX_MON_HW2_UART1", 0x209101ba, U1, 1.0, "",
        "Output rate of the UBX-MON-HW2 message on port UART1";
    "CFG-MSGOUT-UBX_MON_HW2_UART2", 0x209101bb, U1, 1.0, "",
        "Output rate of the UBX-MON-HW2 message on port UART2";
    "CFG-MSGOUT-UBX_MON_HW2_USB", 0x209101bc, U1, 1.0, "",
        "Output rate of the UBX-MON-HW2 message on port USB";
    "CFG-MSGOUT-UBX_MON_HW3_I2C", 0x20910354, U1, 1.0, "",
        "Output rate of the UBX-MON-HW3 message on port I2C";
    "CFG-MSGOUT-UBX_MON_HW3_SPI", 0x20910358, U1, 1.0, "",
        "Output rate of the UBX-MON-HW3 message on port SPI";
    "CFG-MSGOUT-UBX_MON_HW3_UART1", 0x20910355, U1, 1.0, "",
        "Output rate of the UBX-MON-HW3 message on port UART1";
    "CFG-MSGOUT-UBX_MON_HW3_UART2", 0x20910356, U1, 1.0, "",
        "Output rate of the UBX-MON-HW3 message on port UART2";
    "CFG-MSGOUT-UBX_MON_HW3_USB", 0x20910357, U1, 1.0, "",
        "Output rate of the UBX-MON-HW3 message on port USB";
    "CFG-MSGOUT-UBX_MON_HW_I2C", 0x209101b4, U1, 1.0, "",
        "Output rate of the UBX-MON-HW message on port I2C";
    "CFG-MSGOUT-UBX_MON_HW_SPI", 0x209101b8, U1, 1.0, "",
        "Output rate of the UBX-MON-HW message on port SPI";
    "CFG-MSGOUT-UBX_MON_HW_UART1", 0x209101b5, U1, 1.0, "",
        "Output rate of the UBX-MON-HW message on port UART1";
    "CFG-MSGOUT-UBX_MON_HW_UART2", 0x209101b6, U1, 1.0, "",
        "Output rate of the UBX-MON-HW message on port UART2";
    "CFG-MSGOUT-UBX_MON_HW_USB", 0x209101b7, U1, 1.0, "",
        "Output rate of the UBX-MON-HW message on port USB";
    "CFG-MSGOUT-UBX_MON_IO_I2C", 0x209101a5, U1, 1.0, "",
        "Output rate of the UBX-MON-IO message on port I2C";
    "CFG-MSGOUT-UBX_MON_IO_SPI", 0x209101a9, U1, 1.0, "",
        "Output rate of the UBX-MON-IO message on port SPI";
    "CFG-MSGOUT-UBX_MON_IO_UART1", 0x209101a6, U1, 1.0, "",
        "Output rate of the UBX-MON-IO message on port UART1";
    "CFG-MSGOUT-UBX_MON_IO_UART2", 0x209101a7, U1, 1.0, "",
        "Output rate of the UBX-MON-IO message on port UART2";
    "CFG-MSGOUT-UBX_MON_IO_USB", 0x209101a8, U1, 1.0, "",
        "Output rate of the UBX-MON-IO message on port USB";
    "CFG-MSGOUT-UBX_MON_MSGPP_I2C", 0x20910196, U1, 1.0, "",
        "Output rate of the UBX-MON-MSGPP message on port I2C";
    "CFG-MSGOUT-UBX_MON_MSGPP_SPI", 0x2091019a, U1, 1.0, "",
        "Output rate of the UBX-MON-MSGPP message on port SPI";
    "CFG-MSGOUT-UBX_MON_MSGPP_UART1", 0x20910197, U1, 1.0, "",
        "Output rate of the UBX-MON-MSGPP message on port UART1";
    "CFG-MSGOUT-UBX_MON_MSGPP_UART2", 0x20910198, U1, 1.0, "",
        "Output rate of the UBX-MON-MSGPP message on port UART2";
    "CFG-MSGOUT-UBX_MON_MSGPP_USB", 0x20910199, U1, 1.0, "",
        "Output rate of the UBX-MON-MSGPP message on port USB";
    "CFG-MSGOUT-UBX_MON_RF_I2C", 0x20910359, U1, 1.0, "",
        "Output rate of the UBX-MON-RF message on port I2C";
    "CFG-MSGOUT-UBX_MON_RF_SPI", 0x2091035d, U1, 1.0, "",
        "Output rate of the UBX-MON-RF message on port SPI";
    "CFG-MSGOUT-UBX_MON_RF_UART1", 0x2091035a, U1, 1.0, "",
        "Output rate of the UBX-MON-RF message on port UART1";
    "CFG-MSGOUT-UBX_MON_RF_UART2", 0x2091035b, U1, 1.0, "",
        "Output rate of the UBX-MON-RF message on port UART2";
    "CFG-MSGOUT-UBX_MON_RF_USB", 0x2091035c, U1, 1.0, "",
        "Output rate of the UBX-MON-RF message on port USB";
    "CFG-MSGOUT-UBX_MON_RXBUF_I2C", 0x209101a0, U1, 1.0, "",
        "Output rate of the UBX-MON-RXBUF message on port I2C";
    "CFG-MSGOUT-UBX_MON_RXBUF_SPI", 0x209101a4, U1, 1.0, "",
        "Output rate of the UBX-MON-RXBUF message on port SPI";
    "CFG-MSGOUT-UBX_MON_RXBUF_UART1", 0x209101a1, U1, 1.0, "",
        "Output rate of the UBX-MON-RXBUF message on port UART1";
    "CFG-MSGOUT-UBX_MON_RXBUF_UART2", 0x209101a2, U1, 1.0, "",
        "Output rate of the UBX-MON-RXBUF message on port UART2";
    "CFG-MSGOUT-UBX_MON_RXBUF_USB", 0x209101a3, U1, 1.0, "",
        "Output rate of the UBX-MON-RXBUF message on port USB";
    "CFG-MSGOUT-UBX_MON_RXR_I2C", 0x20910187, U1, 1.0, "",
        "Output rate of the UBX-MON-RXR message on port I2C";
    "CFG-MSGOUT-UBX_MON_RXR_SPI", 0x2091018b, U1, 1.0, "",
        "Output rate of the UBX-MON-RXR message on port SPI";
    "CFG-MSGOUT-UBX_MON_RXR_UART1", 0x20910188, U1, 1.0, "",
        "Output rate of the UBX-MON-RXR message on port UART1";
    "CFG-MSGOUT-UBX_MON_RXR_UART2", 0x20910189, U1, 1.0, "",
        "Output rate of the UBX-MON-RXR message on port UART2";
    "CFG-MSGOUT-UBX_MON_RXR_USB", 0x2091018a, U1, 1.0, "",
        "Output rate of the UBX-MON-RXR message on port USB";
    "CFG-MSGOUT-UBX_MON_TXBUF_I2C", 0x2091019b, U1, 1.0, "",
        "Output rate of the UBX-MON-TXBUF message on port I2C";
    "CFG-MSGOUT-UBX_MON_TXBUF_SPI", 0x2091019f, U1, 1.0, "",
        "Output rate of the UBX-MON-TXBUF message on port SPI";
    "CFG-MSGOUT-UBX_MON_TXBUF_UART1", 0x2091019c, U1, 1.0, "",
        "Output rate of the UBX-MON-TXBUF message on port UART1";
    "CFG-MSGOUT-UBX_MON_TXBUF_UART2", 0x2091019d, U1, 1.0, "",
        "Output rate of the UBX-MON-TXBUF message on port UART2";
    "CFG-MSGOUT-UBX_MON_TXBUF_USB", 0x2091019e, U1, 1.0, "",
        "Output rate of the UBX-MON-TXBUF message on port USB";
    "CFG-MSGOUT-UBX_NAV_CLOCK_I2C", 0x20910065, U1, 1.0, "",
        "Output rate of the UBX-NAV-CLOCK message on port I2C";
    "CFG-MSGOUT-UBX_NAV_CLOCK_SPI", 0x20910069, U1, 1.0, "",
        "Output rate of the UBX-NAV-CLOCK message on port SPI";
    "CFG-MSGOUT-UBX_NAV_CLOCK_UART1", 0x20910066, U1, 1.0, "",
        "Output rate of the UBX-NAV-CLOCK message on port UART1";
    "CFG-MSGOUT-UBX_NAV_CLOCK_UART2", 0x20910067, U1, 1.0, "",
        "Output rate of the UBX-NAV-CLOCK message on port UART2";
    "CFG-MSGOUT-UBX_NAV_CLOCK_USB", 0x20910068, U1, 1.0, "",
        "Output rate of the UBX-NAV- CLOCK message on port USB";
    "CFG-MSGOUT-UBX_NAV_DOP_I2C", 0x20910038, U1, 1.0, "",
        "Output rate of the UBX-NAV-DOP message on port I2C";
    "CFG-MSGOUT-UBX_NAV_DOP_SPI", 0x2091003c, U1, 1.0, "",
        "Output rate of the UBX-NAV-DOP message on port SPI";
    "CFG-MSGOUT-UBX_NAV_DOP_UART1", 0x20910039, U1, 1.0, "",
        "Output rate of the UBX-NAV-DOP message on port UART1";
    "CFG-MSGOUT-UBX_NAV_DOP_UART2", 0x2091003a, U1, 1.0, "",
        "Output rate of the UBX-NAV-DOP message on port UART2";
    "CFG-MSGOUT-UBX_NAV_DOP_USB", 0x2091003b, U1, 1.0, "",
        "Output rate of the UBX-NAV-DOP message on port USB";
    "CFG-MSGOUT-UBX_NAV_EOE_I2C", 0x2091015f, U1, 1.0, "",
        "Output rate of the UBX-NAV-EOE message on port I2C";
    "CFG-MSGOUT-UBX_NAV_EOE_SPI", 0x20910163, U1, 1.0, "",
        "Output rate of the UBX-NAV-EOE message on port SPI";
    "CFG-MSGOUT-UBX_NAV_EOE_UART1", 0x20910160, U1, 1.0, "",
        "Output rate of the UBX-NAV-EOE message on port UART1";
    "CFG-MSGOUT-UBX_NAV_EOE_UART2", 0x20910161, U1, 1.0, "",
        "Output rate of the UBX-NAV-EOE message on port UART2";
    "CFG-MSGOUT-UBX_NAV_EOE_USB", 0x20910162, U1, 1.0, "",
        "Output rate of the UBX-NAV-EOE message on port USB";
    "CFG-MSGOUT-UBX_NAV_GEOFENCE_I2C", 0x209100a1, U1, 1.0, "",
        "Output rate of the UBX-NAV-GEOFENCE message on port I2C";
    "CFG-MSGOUT-UBX_NAV_GEOFENCE_SPI", 0x209100a5, U1, 1.0, "",
        "Output rate of the UBX-NAV-GEOFENCE message on port SPI";
    "CFG-MSGOUT-UBX_NAV_GEOFENCE_UART1", 0x209100a2, U1, 1.0, "",
        "Output rate of the UBX-NAV-GEOFENCE message on port UART1";
    "CFG-MSGOUT-UBX_NAV_GEOFENCE_UART2", 0x209100a3, U1, 1.0, "",
        "Output rate of the UBX-NAV-GEOFENCE message on port UART2";
    "CFG-MSGOUT-UBX_NAV_GEOFENCE_USB", 0x209100a4, U1, 1.0, "",
        "Output rate of the UBX-NAV- GEOFENCE message on port USB";
    "CFG-MSGOUT-UBX_NAV_HPPOSECEF_I2C", 0x2091002e, U1, 1.0, "",
        "Output rate of the UBX-NAV-HPPOSECEF message on port I2C";
    "CFG-MSGOUT-UBX_NAV_HPPOSECEF_SPI", 0x20910032, U1, 1.0, "",
        "Output rate of the UBX-NAV-HPPOSECEF message on port SPI";
    "CFG-MSGOUT-UBX_NAV_HPPOSECEF_UART1", 0x2091002f, U1, 1.0, "",
        "Output rate of the UBX-NAV-HPPOSECEF message on port UART1";
    "CFG-MSGOUT-UBX_NAV_HPPOSECEF_UART2", 0x20910030, U1, 1.0, "",
        "Output rate of the UBX-NAV-HPPOSECEF message on port UART2";
    "CFG-MSGOUT-UBX_NAV_HPPOSECEF_USB", 0x20910031, U1, 1.0, "",
        "Output rate of the UBX-NAV-HPPOSECEF message on port USB";
    "CFG-MSGOUT-UBX_NAV_HPPOSLLH_I2C", 0x20910033, U1, 1.0, "",
        "Output rate of the UBX-NAV-HPPOSLLH message on port I2C";
    "CFG-MSGOUT-UBX_NAV_HPPOSLLH_SPI", 0x20910037, U1, 1.0, "",
        "Output rate of the UBX-NAV-HPPOSLLH message on port SPI";
    "CFG-MSGOUT-UBX_NAV_HPPOSLLH_UART1", 0x20910034, U1, 1.0, "",
        "Output rate of the UBX-NAV-HPPOSLLH message on port UART1";
    "CFG-MSGOUT-UBX_NAV_HPPOSLLH_UART2", 0x20910035, U1, 1.0, "",
        "Output rate of the UBX-NAV-HPPOSLLH message on port UART2";
    "CFG-MSGOUT-UBX_NAV_HPPOSLLH_USB", 0x20910036, U1, 1.0, "",
        "Output rate of the UBX-NAV-HPPOSLLH message on port USB";
    "CFG-MSGOUT-UBX_NAV_ODO_I2C", 0x2091007e, U1, 1.0, "",
        "Output rate of the UBX-NAV-ODO message on port I2C";
    "CFG-MSGOUT-UBX_NAV_ODO_SPI", 0x20910082, U1, 1.0, "",
        "Output rate of the UBX-NAV-ODO message on port SPI";
    "CFG-MSGOUT-UBX_NAV_ODO_UART1", 0x2091007f, U1, 1.0, "",
        "Output rate of the UBX-NAV-ODO message on port UART1";
    "CFG-MSGOUT-UBX_NAV_ODO_UART2", 0x20910080, U1, 1.0, "",
        "Output rate of the UBX-NAV-ODO message on port UART2";
    "CFG-MSGOUT-UBX_NAV_ODO_USB", 0x20910081, U1, 1.0, "",
        "Output rate of the UBX-NAV-ODO message on port USB";
    "CFG-MSGOUT-UBX_NAV_ORB_I2C", 0x20910010, U1, 1.0, "",
        "Output rate of the UBX-NAV-ORB message on port I2C";
    "CFG-MSGOUT-UBX_NAV_ORB_SPI", 0x20910014, U1, 1.0, "",
        "Output rate of the UBX-NAV-ORB message on port SPI";
    "CFG-MSGOUT-UBX_NAV_ORB_UART1", 0x20910011, U1, 1.0, "",
        "Output rate of the UBX-NAV-ORB message on port UART1";
    "CFG-MSGOUT-UBX_NAV_ORB_UART2", 0x20910012, U1, 1.0, "",
        "Output rate of the UBX-NAV-ORB message on port UART2";
    "CFG-MSGOUT-UBX_NAV_ORB_USB", 0x20910013, U1, 1.0, "",
        "Output rate of the UBX-NAV-ORB message on port USB";
    "CFG-MSGOUT-UBX_NAV_POSECEF_I2C", 0x20910024, U1, 1.0, "",
        "Output rate of the UBX-NAV-POSECEF message on port I2C";
    "CFG-MSGOUT-UBX_NAV_POSECEF_SPI", 0x20910028, U1, 1.0, "",
        "Output rate of the UBX-NAV-POSECEF message on port SPI";
    "CFG-MSGOUT-UBX_NAV_POSECEF_UART1", 0x20910025, U1, 1.0, "",
        "Output rate of the UBX-NAV-POSECEF message on port UART1";
    "CFG-MSGOUT-UBX_NAV_POSECEF_UART2", 0x20910026, U1, 1.0, "",
        "Output rate of the UBX-NAV-POSECEF message on port UART2";
    "CFG-MSGOUT-UBX_NAV_POSECEF_USB", 0x20910027, U1, 1.0, "",
        "Output rate of the UBX-NAV-POSECEF message on port USB";
    "CFG-MSGOUT-UBX_NAV_POSLLH_I2C", 0x20910029, U1, 1.0, "",
        "Output rate of the UBX-NAV-POSLLH message on port I2C";
    "CFG-MSGOUT-UBX_NAV_POSLLH_SPI", 0x2091002d, U1, 1.0, "",
        "Output rate of the UBX-NAV-POSLLH message on port SPI";
    "CFG-MSGOUT-UBX_NAV_POSLLH_UART1", 0x2091002a, U1, 1.0, "",
        "Output rate of the UBX-NAV-POSLLH message on port UART1";
    "CFG-MSGOUT-UBX_NAV_POSLLH_UART2", 0x2091002b, U1, 1.0, "",
        "Output rate of the UBX-NAV-POSLLH message on port UART2";
    "CFG-MSGOUT-UBX_NAV_POSLLH_USB", 0x2091002c, U1, 1.0, "",
        "Output rate of the UBX-NAV-POSLLH message on port USB";
    "CFG-MSGOUT-UBX_NAV_PVT_I2C", 0x20910006, U1, 1.0, "",
        "Output rate of the UBX-NAV-PVT message on port I2C";
    "CFG-MSGOUT-UBX_NAV_PVT_SPI", 0x2091000a, U1, 1.0, "",
        "Output rate of the UBX-NAV-PVT message on port SPI";
    "CFG-MSGOUT-UBX_NAV_PVT_UART1", 0x20910007, U1, 1.0, "",
        "Output rate of the UBX-NAV-PVT message on port UART1";
    "CFG-MSGOUT-UBX_NAV_PVT_UART2", 0x20910008, U1, 1.0, "",
        "Output rate of the UBX-NAV-PVT message on port UART2";
    "CFG-MSGOUT-UBX_NAV_PVT_USB", 0x20910009, U1, 1.0, "",
        "Output rate of the UBX-NAV-PVT message on port USB";
    "CFG-MSGOUT-UBX_NAV_RELPOSNED_I2C", 0x2091008d, U1, 1.0, "",
        "Output rate of the UBX-NAV-RELPOSNED message on port I2C";
    "CFG-MSGOUT-UBX_NAV_RELPOSNED_SPI", 0x20910091, U1, 1.0, "",
        "Output rate of the UBX-NAV-RELPOSNED message on port SPI";
    "CFG-MSGOUT-UBX_NAV_RELPOSNED_UART1", 0x2091008e, U1, 1.0, "",
        "Output rate of the UBX-NAV-RELPOSNED message on port UART1";
    "CFG-MSGOUT-UBX_NAV_RELPOSNED_UART2", 0x2091008f, U1, 1.0, "",
        "Output rate of the UBX-NAV-RELPOSNED message on port UART2";
    "CFG-MSGOUT-UBX_NAV_RELPOSNED_USB", 0x20910090, U1, 1.0, "",
        "Output rate of the UBX-NAV-RELPOSNED message on port USB";
    "CFG-MSGOUT-UBX_NAV_SAT_I2C", 0x20910015, U1, 1.0, "",
        "Output rate of the UBX-NAV-SAT message on port I2C";
    "CFG-MSGOUT-UBX_NAV_SAT_SPI", 0x20910019, U1, 1.0, "",
        "Output rate of the UBX-NAV-SAT message on port SPI";
    "CFG-MSGOUT-UBX_NAV_SAT_UART1", 0x20910016, U1, 1.0, "",
        "Output rate of the UBX-NAV-SAT message on port UART1";
    "CFG-MSGOUT-UBX_NAV_SAT_UART2", 0x20910017, U1, 1.0, "",
        "Output rate of the UBX-NAV-SAT message on port UART2";
    "CFG-MSGOUT-UBX_NAV_SAT_USB", 0x20910018, U1, 1.0, "",
        "Output rate of the UBX-NAV-SAT message on port USB";
    "CFG-MSGOUT-UBX_NAV_SBAS_I2C", 0x2091006a, U1, 1.0, "",
        "Output rate of the UBX-NAV-SBAS message on port I2C";
    "CFG-MSGOUT-UBX_NAV_SBAS_SPI", 0x2091006e, U1, 1.0, "",
        "Output rate of the UBX-NAV-SBAS message on port SPI";
    "CFG-MSGOUT-UBX_NAV_SBAS_UART1", 0x2091006b, U1, 1.0, "",
        "Output rate of the UBX-NAV-SBAS message on port UART1";
    "CFG-MSGOUT-UBX_NAV_SBAS_UART2", 0x2091006c, U1, 1.0, "",
        "Output rate of the UBX-NAV-SBAS message on port UART2";
    "CFG-MSGOUT-UBX_NAV_SBAS_USB", 0x2091006d, U1, 1.0, "",
        "Output rate of the UBX-NAV-SBAS message on port USB";
    "CFG-MSGOUT-UBX_NAV_SIG_I2C", 0x20910345, U1, 1.0, "",
        "Output rate of the UBX-NAV-SIG message on port I2C";
    "CFG-MSGOUT-UBX_NAV_SIG_SPI", 0x20910349, U1, 1.0, "",
        "Output rate of the UBX-NAV-SIG message on port SPI";
    "CFG-MSGOUT-UBX_NAV_SIG_UART1", 0x20910346, U1, 1.0, "",
        "Output rate of the UBX-NAV-SIG message on port UART1";
    "CFG-MSGOUT-UBX_NAV_SIG_UART2", 0x20910347, U1, 1.0, "",
        "Output rate of the UBX-NAV-SIG message on port UART2";
    "CFG-MSGOUT-UBX_NAV_SIG_USB", 0x20910348, U1, 1.0, "",
        "Output rate of the UBX-NAV-SIG message on port USB";
    "CFG-MSGOUT-UBX_NAV_STATUS_I2C", 0x2091001a, U1, 1.0, "",
        "Output rate of the UBX-NAV-STATUS message on port I2C";
    "CFG-MSGOUT-UBX_NAV_STATUS_SPI", 0x2091001e, U1, 1.0, "",
        "Output rate of the UBX-NAV-STATUS message on port SPI";
    "CFG-MSGOUT-UBX_NAV_STATUS_UART1", 0x2091001b, U1, 1.0, "",
        "Output rate of the UBX-NAV-STATUS message on port UART1";
    "CFG-MSGOUT-UBX_NAV_STATUS_UART2", 0x2091001c, U1, 1.0, "",
        "Output rate of the UBX-NAV-STATUS message on port UART2";
    "CFG-MSGOUT-UBX_NAV_STATUS_USB", 0x2091001d, U1, 1.0, "",
        "Output rate of the UBX-NAV-STATUS message on port USB";
    "CFG-MSGOUT-UBX_NAV_SVIN_I2C", 0x20910088, U1, 1.0, "",
        "Output rate of the UBX-NAV-SVIN message on port I2C";
    "CFG-MSGOUT-UBX_NAV_SVIN_SPI", 0x2091008c, U1, 1.0, "",
        "Output rate of the UBX-NAV-SVIN message on port SPI";
    "CFG-MSGOUT-UBX_NAV_SVIN_UART1", 0x20910089, U1, 1.0, "",
        "Output rate of the UBX-NAV-SVIN message on port UART1";
    "CFG-MSGOUT-UBX_NAV_SVIN_UART2", 0x2091008a, U1, 1.0, "",
        "Output rate of the UBX-NAV-SVIN message on port UART2";
    "CFG-MSGOUT-UBX_NAV_SVIN_USB", 0x2091008b, U1, 1.0, "",
        "Output rate of the UBX-NAV-SVIN message on port USB";
    "CFG-MSGOUT-UBX_NAV_TIMEBDS_I2C", 0x20910051, U1, 1.0, "",
        "Output rate of the UBX-NAV-TIMEBDS message on port I2C";
    "CFG-MSGOUT-UBX_NAV_TIMEBDS_SPI", 0x20910055, U1, 1.0, "",
        "Output rate of the UBX-NAV-TIMEBDS message on port SPI";
    "CFG-MSGOUT-UBX_NAV_TIMEBDS_UART1", 0x20910052, U1, 1.0, "",
        "Output rate of the UBX-NAV-TIMEBDS message on port UART1";
    "CFG-MSGOUT-UBX_NAV_TIMEBDS_UART2", 0x20910053, U1, 1.0, "",
        "Output rate of the UBX-NAV-TIMEBDS message on port UART2";
    "CFG-MSGOUT-UBX_NAV_TIMEBDS_USB", 0x20910054, U1, 1.0, "",
        "Output rate of the UBX-NAV-TIMEBDS message on port USB";
    "CFG-MSGOUT-UBX_NAV_TIMEGAL_I2C", 0x20910056, U1, 1.0, "",
        "Output rate of the UBX-NAV-TIMEGAL message on port I2C";
    "CFG-MSGOUT-UBX_NAV_TIMEGAL_SPI", 0x2091005a, U1, 1.0, "",
        "Output rate of the UBX-NAV-TIMEGAL message on port SPI";
    "CFG-MSGOUT-UBX_NAV_TIMEGAL_UART1", 0x20910057, U1, 1.0, "",
        "Output rate of the UBX-NAV-TIMEGAL message on port UART1";
    "CFG-MSGOUT-UBX_NAV_TIMEGAL_UART2", 0x20910058, U1, 1.0, "",
        "Output rate of the UBX-NAV-TIMEGAL message on port UART2";
    "CFG-MSGOUT-UBX_NAV_TIMEGAL_USB", 0x20910059, U1, 1.0, "",
        "Output rate of the UBX-NAV-TIMEGAL message on port USB";
    "CFG-MSGOUT-UBX_NAV_TIMEGLO_I2C", 0x2091004c, U1, 1.0, "",
        "Output rate of the UBX-NAV-TIMEGLO message on port I2C";
    "CFG-MSGOUT-UBX_NAV_TIMEGLO_SPI", 0x20910050, U1, 1.0, "",
        "Output rate of the UBX-NAV-TIMEGLO message on port SPI";
    "CFG-MSGOUT-UBX_NAV_TIMEGLO_UART1", 0x2091004d, U1, 1.0, "",
        "Output rate of the UBX-NAV-TIMEGLO message on port UART1";
    "CFG-MSGOUT-UBX_NAV_TIMEGLO_UART2", 0x2091004e, U1, 1.0, "",
        "Output rate of the UBX-NAV-TIMEGLO message on port UART2";
    "CFG-MSGOUT-UBX_NAV_TIMEGLO_USB", 0x2091004f, U1, 1.0, "",
        "Output rate of the UBX-NAV-TIMEGLO message on port USB";
    "CFG-MSGOUT-UBX_NAV_TIMEGPS_I2C", 0x20910047, U1, 1.0, "",
        "Output rate of the UBX-NAV-TIMEGPS message on port I2C";
    "CFG-MSGOUT-UBX_NAV_TIMEGPS_SPI", 0x2091004b, U1, 1.0, "",
        "Output rate of the UBX-NAV-TIMEGPS message on port SPI";
    "CFG-MSGOUT-UBX_NAV_TIMEGPS_UART1", 0x20910048, U1, 1.0, "",
        "Output rate of the UBX-NAV-TIMEGPS message on port UART1";
    "CFG-MSGOUT-UBX_NAV_TIMEGPS_UART2", 0x20910049, U1, 1.0, "",
        "Output rate of the UBX-NAV-TIMEGPS message on port UART2";
    "CFG-MSGOUT-UBX_NAV_TIMEGPS_USB", 0x2091004a, U1, 1.0, "",
        "Output rate of the UBX-NAV-TIMEGPS message on port USB";
    "CFG-MSGOUT-UBX_NAV_TIMELS_I2C", 0x20910060, U1, 1.0, "",
        "Output rate of the UBX-NAV-TIMELS message on port I2C";
    "CFG-MSGOUT-UBX_NAV_TIMELS_SPI", 0x20910064, U1, 1.0, "",
        "Output rate of the UBX-NAV-TIMELS message on port SPI";
    "CFG-MSGOUT-UBX_NAV_TIMELS_UART1", 0x20910061, U1, 1.0, "",
        "Output rate of the UBX-NAV-TIMELS message on port UART1";
    "CFG-MSGOUT-UBX_NAV_TIMELS_UART2", 0x20910062, U1, 1.0, "",
        "Output rate of the UBX-NAV-TIMELS message on port UART2";
    "CFG-MSGOUT-UBX_NAV_TIMELS_USB", 0x20910063, U1, 1.0, "",
        "Output rate of the UBX-NAV-TIMELS message on port USB";
    "CFG-MSGOUT-UBX_NAV_TIMEUTC_I2C", 0x2091005b, U1, 1.0, "",
        "Output rate of the UBX-NAV-TIMEUTC message on port I2C";
    "CFG-MSGOUT-UBX_NAV_TIMEUTC_SPI", 0x2091005f, U1, 1.0, "",
        "Output rate of the UBX-NAV-TIMEUTC message on port S";
    "CFG-MSGOUT-UBX_NAV_TIMEUTC_UART1", 0x2091005c, U1, 1.0, "",
        "Output rate of the UBX-NAV-TIMEUTC message on port UART1";
    "CFG-MSGOUT-UBX_NAV_TIMEUTC_UART2", 0x2091005d, U1, 1.0, "",
        "Output rate of the UBX-NAV-TIMEUTC message on port UART2";
    "CFG-MSGOUT-UBX_NAV_TIMEUTC_USB", 0x2091005e, U1, 1.0, "",
        "Output rate of the UBX-NAV- TIMEUTC message on port USB";
    "CFG-MSGOUT-UBX_NAV_VELECEF_I2C", 0x2091003d, U1, 1.0, "",
        "Output rate of the UBX-NAV-VELECEF message on port I2C";
    "CFG-MSGOUT-UBX_NAV_VELECEF_SPI", 0x20910041, U1, 1.0, "",
        "Output rate of the UBX-NAV-VELECEF message on port SPI";
    "CFG-MSGOUT-UBX_NAV_VELECEF_UART1", 0x2091003e, U1, 1.0, "",
        "Output rate of the UBX-NAV-VELECEF message on port UART1";
    "CFG-MSGOUT-UBX_NAV_VELECEF_UART2", 0x2091003f, U1, 1.0, "",
        "Output rate of the UBX-NAV-VELECEF message on port UART2";
    "CFG-MSGOUT-UBX_NAV_VELECEF_USB", 0x20910040, U1, 1.0, "",
        "Output rate of the UBX-NAV-VELECEF message on port USB";
    "CFG-MSGOUT-UBX_NAV_VELNED_I2C", 0x20910042, U1, 1.0, "",
        "Output rate of the UBX-NAV-VELNED message on port I2C";
    "CFG-MSGOUT-UBX_NAV_VELNED_SPI", 0x20910046, U1, 1.0, "",
        "Output rate of the UBX-NAV-VELNED message on port SPI";
    "CFG-MSGOUT-UBX_NAV_VELNED_UART1", 0x20910043, U1, 1.0, "",
        "Output rate of the UBX-NAV-VELNED message on port UART1";
    "CFG-MSGOUT-UBX_NAV_VELNED_UART2", 0x20910044, U1, 1.0, "",
        "Output rate of the UBX-NAV-VELNED message on port UART2";
    "CFG-MSGOUT-UBX_NAV_VELNED_USB", 0x20910045, U1, 1.0, "",
        "Output rate of the UBX-NAV-VELNED message on port USB";
    "CFG-MSGOUT-UBX_RXM_MEASX_I2C", 0x20910204, U1, 1.0, "",
        "Output rate of the UBX-RXM-MEASX message on port I2C";
    "CFG-MSGOUT-UBX_RXM_MEASX_SPI", 0x20910208, U1, 1.0, "",
        "Output rate of the UBX-RXM-MEASX message on port SPI";
    "CFG-MSGOUT-UBX_RXM_MEASX_UART1", 0x20910205, U1, 1.0, "",
        "Output rate of the UBX-RXM-MEASX message on port UART1";
    "CFG-MSGOUT-UBX_RXM_MEASX_UART2", 0x20910206, U1, 1.0, "",
        "Output rate of the UBX-RXM-MEASX message on port UART2";
    "CFG-MSGOUT-UBX_RXM_MEASX_USB", 0x20910207, U1, 1.0, "",
        "Output rate of the UBX-RXM-MEASX message on port USB";
    "CFG-MSGOUT-UBX_RXM_RAWX_I2C", 0x209102a4, U1, 1.0, "",
        "Output rate of the UBX-RXM-RAWX message on port I2C";
    "CFG-MSGOUT-UBX_RXM_RAWX_SPI", 0x209102a8, U1, 1.0, "",
        "Output rate of the UBX-RXM-RAWX message on port SPI";
    "CFG-MSGOUT-UBX_RXM_RAWX_UART1", 0x209102a5, U1, 1.0, "",
        "Output rate of the UBX-RXM-RAWX message on port UART1";
    "CFG-MSGOUT-UBX_RXM_RAWX_UART2", 0x209102a6, U1, 1.0, "",
        "Output rate of the UBX-RXM-RAWX message on port UART2";
    "CFG-MSGOUT-UBX_RXM_RAWX_USB", 0x209102a7, U1, 1.0, "",
        "Output rate of the UBX-RXM-RAWX message on port USB";
    "CFG-MSGOUT-UBX_RXM_RLM_I2C", 0x2091025e, U1, 1.0, "",
        "Output rate of the UBX-RXM-RLM message on port I2C";
    "CFG-MSGOUT-UBX_RXM_RLM_SPI", 0x20910262, U1, 1.0, "",
        "Output rate of the UBX-RXM-RLM message on port SPI";
    "CFG-MSGOUT-UBX_RXM_RLM_UART1", 0x2091025f, U1, 1.0, "",
        "Output rate of the UBX-RXM-RLM message on port UART1";
    "CFG-MSGOUT-UBX_RXM_RLM_UART2", 0x20910260, U1, 1.0, "",
        "Output rate of the UBX-RXM-RLM message on port UART2";
    "CFG-MSGOUT-UBX_RXM_RLM_USB", 0x20910261, U1, 1.0, "",
        "Output rate of the UBX-RXM-RLM message on port USB";
    "CFG-MSGOUT-UBX_RXM_RTCM_I2C", 0x20910268, U1, 1.0, "",
        "Output rate of the UBX-RXM-RTCM message on port I2C";
    "CFG-MSGOUT-UBX_RXM_RTCM_SPI", 0x2091026c, U1, 1.0, "",
        "Output rate of the UBX-RXM-RTCM message on port SPI";
    "CFG-MSGOUT-UBX_RXM_RTCM_UART1", 0x20910269, U1, 1.0, "",
        "Output rate of the UBX-RXM-RTCM message on port UART1";
    "CFG-MSGOUT-UBX_RXM_RTCM_UART2", 0x2091026a, U1, 1.0, "",
        "Output rate of the UBX-RXM-RTCM message on port UART2";
    "CFG-MSGOUT-UBX_RXM_RTCM_USB", 0x2091026b, U1, 1.0, "",
        "Output rate of the UBX-RXM-RTCM message on port USB";
    "CFG-MSGOUT-UBX_RXM_SFRBX_I2C", 0x20910231, U1, 1.0, "",
        "Output rate of the UBX-RXM-SFRBX message on port I2C";
    "CFG-MSGOUT-UBX_RXM_SFRBX_SPI", 0x20910235, U1, 1.0, "",
        "Output rate of the UBX-RXM-SFRBX message on port SPI";
    "CFG-MSGOUT-UBX_RXM_SFRBX_UART1", 0x20910232, U1, 1.0, "",
        "Output rate of the UBX-RXM-SFRBX message on port UART1";
    "CFG-MSGOUT-UBX_RXM_SFRBX_UART2", 0x20910233, U1, 1.0, "",
        "Output rate of the UBX-RXM-SFRBX message on port UART2";
    "CFG-MSGOUT-UBX_RXM_SFRBX_USB", 0x20910234, U1, 1.0, "",
        "Output rate of the UBX-RXM-SFRBX message on port USB";
    "CFG-MSGOUT-UBX_TIM_SVIN_I2C", 0x20910097, U1, 1.0, "",
        "Output rate of the UBX-TIM-SVIN message on port I2C";
    "CFG-MSGOUT-UBX_TIM_SVIN_SPI", 0x2091009b, U1, 1.0, "",
        "Output rate of the UBX-TIM-SVIN message on port SPI";
    "CFG-MSGOUT-UBX_TIM_SVIN_UART1", 0x20910098, U1, 1.0, "",
        "Output rate of the UBX-TIM-SVIN message on port UART1";
    "CFG-MSGOUT-UBX_TIM_SVIN_UART2", 0x20910099, U1, 1.0, "",
        "Output rate of the UBX-TIM-SVIN message on port UART2";
    "CFG-MSGOUT-UBX_TIM_SVIN_USB", 0x2091009a, U1, 1.0, "",
        "Output rate of the UBX-TIM-SVIN message on port USB";
    "CFG-MSGOUT-UBX_TIM_TM2_I2C", 0x20910178, U1, 1.0, "",
        "Output rate of the UBX-TIM-TM2 message on port I2C";
    "CFG-MSGOUT-UBX_TIM_TM2_SPI", 0x2091017c, U1, 1.0, "",
        "Output rate of the UBX-TIM-TM2 message on port SPI";
    "CFG-MSGOUT-UBX_TIM_TM2_UART1", 0x20910179, U1, 1.0, "",
        "Output rate of the UBX-TIM-TM2 message on port UART1";
    "CFG-MSGOUT-UBX_TIM_TM2_UART2", 0x2091017a, U1, 1.0, "",
        "Output rate of the UBX-TIM-TM2 message on port UART2";
    "CFG-MSGOUT-UBX_TIM_TM2_USB", 0x2091017b, U1, 1.0, "",
        "Output rate of the UBX-TIM-TM2 message on port USB";
    "CFG-MSGOUT-UBX_TIM_TP_I2C", 0x2091017d, U1, 1.0, "",
        "Output rate of the UBX-TIM-TP message on port I2C";
    "CFG-MSGOUT-UBX_TIM_TP_SPI", 0x20910181, U1, 1.0, "",
        "Output rate of the UBX-TIM-TP message on port SPI";
    "CFG-MSGOUT-UBX_TIM_TP_UART1", 0x2091017e, U1, 1.0, "",
        "Output rate of the UBX-TIM-TP message on port UART1";
    "CFG-MSGOUT-UBX_TIM_TP_UART2", 0x2091017f, U1, 1.0, "",
        "Output rate of the UBX-TIM-TP message on port UART2";
    "CFG-MSGOUT-UBX_TIM_TP_USB", 0x20910180, U1, 1.0, "",
        "Output rate of the UBX-TIM-TP message on port USB";
    "CFG-MSGOUT-UBX_TIM_VRFY_I2C", 0x20910092, U1, 1.0, "",
        "Output rate of the UBX-TIM-VRFY message on port I2C";
    "CFG-MSGOUT-UBX_TIM_VRFY_SPI", 0x20910096, U1, 1.0, "",
        "Output rate of the UBX-TIM-VRFY message on port SPI";
    "CFG-MSGOUT-UBX_TIM_VRFY_UART1", 0x20910093, U1, 1.0, "",
        "Output rate of the UBX-TIM-VRFY message on port UART1";
    "CFG-MSGOUT-UBX_TIM_VRFY_UART2", 0x20910094, U1, 1.0, "",
        "Output rate of the UBX-TIM-VRFY message on port UART2";
    "CFG-MSGOUT-UBX_TIM_VRFY_USB", 0x20910095, U1, 1.0, "",
        "Output rate of the UBX-TIM-VRFY message on port USB";

    // CFG-NAVHPG
    "CFG-NAVHPG-DGNSSMODE", 0x20140011, E1, 1.0, "",
        "Differential corrections mode";

    // CFG-NAVSPG
    "CFG-NAVSPG-FIXMODE", 0x20110011, E1, 1.0, "",
        "Position fix mode";
    "CFG-NAVSPG-INIFIX3D", 0x10110013, L, 1.0, "",
        "Initial fix must be a 3d fix";
    "CFG-NAVSPG-WKNROLLOVER", 0x30110017, U2, 1.0, "",
        "GPS week rollover number";
    "CFG-NAVSPG-USE_PPP", 0x10110019, L, 1.0, "",
        "Use Precise Point Positioning";
    "CFG-NAVSPG-UTCSTANDARD", 0x2011001c, E1, 1.0, "",
        "UTC standard to be used";
    "CFG-NAVSPG-DYNMODEL", 0x20110021, E1, 1.0, "",
        "Dynamic platform model";
    "CFG-NAVSPG-ACKAIDING", 0x10110025, L, 1.0, "",
        "Acknowledge assistance input messages";
    "CFG-NAVSPG-USE_USRDAT", 0x10110061, L, 1.0, "",
        "Use user geodetic datum";
    "CFG-NAVSPG-USRDAT_MAJA", 0x50110062, R8, 1.0, "m",
        "Geodetic datum semi-major axis";
    "CFG-NAVSPG-USRDAT_FLAT", 0x50110063, R8, 1.0, "",
        "Geodetic datum 1.0 / flattening";
    "CFG-NAVSPG-USRDAT_DX", 0x40110064, R4, 1.0, "m",
        "Geodetic datum X axis shift at the orgin";
    "CFG-NAVSPG-USRDAT_DY", 0x40110065, R4, 1.0, "m",
        "Geodetic datum Y axis shift at the origin";
    "CFG-NAVSPG-USRDAT_DZ", 0x40110066, R4, 1.0, "m",
        "Geodetic datum Z axis shift at the origin";
    "CFG-NAVSPG-USRDAT_ROTX", 0x40110067, R4, 1.0, "arcsec",
        "Geodetic datum rotation about the X axis";
    "CFG-NAVSPG-USRDAT_ROTY", 0x40110068, R4, 1.0, "arcsec",
        "Geodetic datum rotation about the Y axis ()";
    "CFG-NAVSPG-USRDAT_ROTZ", 0x40110069, R4, 1.0, "arcsec",
        "Geodetic datum rotation about the Z axis";
    "CFG-NAVSPG-USRDAT_SCALE", 0x4011006a, R4, 1.0, "ppm",
        "Geodetic datum scale factor";
    "CFG-NAVSPG-INFIL_MINSVS", 0x201100a1, U1, 1.0, "",
        "Minimum number of satellites for navigation";
    "CFG-NAVSPG-INFIL_MAXSVS", 0x201100a2, U1, 1.0, "",
        "Maximum number of satellites for navigation";
    "CFG-NAVSPG-INFIL_MINCNO", 0x201100a3, U1, 1.0, "dBHz",
        "Minimum satellite signal level for navigation";
    "CFG-NAVSPG-INFIL_MINELEV", 0x201100a4, I1, 1.0, "deg",
        "Minimum elevation for a GNSS satellite to be used in navigation";
    "CFG-NAVSPG-INFIL_NCNOTHRS", 0x201100aa, U1, 1.0, "",
        "Number of satellites required to have C/N0 above CFG-NAVSPG-INFIL_CNOTHRS for a fix to be attempted";
    "CFG-NAVSPG-INFIL_CNOTHRS", 0x201100ab, U1, 1.0, "",
        "C/N0 threshold for deciding whether to attempt a fix";
    "CFG-NAVSPG-OUTFIL_PDOP", 0x301100b1, U2, 0.1, "",
        "Output filter position DOP mask (threshold)";
    "CFG-NAVSPG-OUTFIL_TDOP", 0x301100b2, U2, 0.1, "",
        "Output filter time DOP mask (threshold)";
    "CFG-NAVSPG-OUTFIL_PACC", 0x301100b3, U2, 1.0, "m",
        "Output filter position accuracy mask (threshold)";
    "CFG-NAVSPG-OUTFIL_TACC", 0x301100b4, U2, 1.0, "m",
        "Output filter time accuracy mask (threshold)";
    "CFG-NAVSPG-OUTFIL_FACC", 0x301100b5, U2, 0.01, "m/s",
        "Output filter frequency accuracy mask (threshold)";
    "CFG-NAVSPG-CONSTR_ALT", 0x401100c1, I4, 0.01, "m",
        "Fixed altitude (mean sea level) for 2D fix mode";
    "CFG-NAVSPG-CONSTR_ALTVAR", 0x401100c2, U4, 0.0001, "M^2",
        "Fixed altitude variance for 2D mode";
    "CFG-NAVSPG-CONSTR_DGNSSTO", 0x201100c4, U1, 1.0, "s",
        "DGNSS timeout";

    // CFG-NMEA
    "CFG-NMEA-PROTVER", 0x20930001, E1, 1.0, "",
        "NMEA protocol version";
    "CFG-NMEA-MAXSVS", 0x20930002, E1, 1.0, "",
        "Maximum number of SVs to report per Talker ID";
    "CFG-NMEA-COMPAT", 0x10930003, L, 1.0, "",
        "Enable compatibility mode";
    "CFG-NMEA-CONSIDER", 0x10930004, L, 1.0, "",
        "Enable considering mode";
    "CFG-NMEA-LIMIT82", 0x10930005, L, 1.0, "",
        "Enable strict limit to 82 characters maximum NMEA message length";
    "CFG-NMEA-HIGHPREC", 0x10930006, L, 1.0, "",
        "Enable high precision mode";
    "CFG-NMEA-SVNUMBERING", 0x20930007, E1, 1.0, "",
        "Display configuration for SVs that have no value defined in NMEA";
    "CFG-NMEA-FILT_GPS", 0x10930011, L, 1.0, "",
        "Disable reporting of GPS satellites";
    "CFG-NMEA-FILT_SBAS", 0x10930012, L, 1.0, "",
        "Disable reporting of SBAS satellites";
    "CFG-NMEA-FILT_QZSS", 0x10930015, L, 1.0, "",
        "Disable reporting of QZSS satellites";
    "CFG-NMEA-FILT_GLO", 0x10930016, L, 1.0, "",
        "Disable reporting of GLONASS satellites";
    "CFG-NMEA-FILT_BDS", 0x10930017, L, 1.0, "",
        "Disable reporting of BeiDou satellites";
    "CFG-NMEA-OUT_INVFIX", 0x10930021, L, 1.0, "",
        "Enable position output for failed or invalid fixes";
    "CFG-NMEA-OUT_MSKFIX", 0x10930022, L, 1.0, "",
        "Enable position output for invalid fixes";
    "CFG-NMEA-OUT_INVTIME", 0x10930023, L, 1.0, "",
        "Enable time output for invalid times";
    "CFG-NMEA-OUT_INVDATE", 0x10930024, L, 1.0, "",
        "Enable date output for invalid dates";
    "CFG-NMEA-OUT_ONLYGPS", 0x10930025, L, 1.0, "",
        "Restrict output to GPS satellites only";
    "CFG-NMEA-OUT_FROZENCOG", 0x10930026, L, 1.0, "",
        "Enable course over ground output even if it is frozen";
    "CFG-NMEA-MAINTALKERID", 0x20930031, E1, 1.0, "",
        "Main Talker ID";
    "CFG-NMEA-GSVTALKERID", 0x20930032, E1, 1.0, "",
        "Talker ID for GSV NMEA messages";
    "CFG-NMEA-BDSTALKERID", 0x30930033, U2, 1.0, "",
        "BeiDou Talker ID";

    // CFG-ODO
    "CFG-ODO-USE_ODO", 0x10220001, L, 1.0, "",
        "Use odometer";
    "CFG-ODO-USE_COG", 0x10220002, L, 1.0, "",
        "Use low-speed course over ground filter";
    "CFG-ODO-OUTLPVEL", 0x10220003, L, 1.0, "",
        "Output low-pass filtered velocity";
    "CFG-ODO-OUTLPCOG", 0x10220004, L, 1.0, "",
        "Output low-pass filtered course over ground (heading)";
    "CFG-ODO-PROFILE", 0x20220005, E1, 1.0, "",
        "Odometer profile configuration";
    "CFG-ODO-COGMAXSPEED", 0x20220021, U1, 1.0, "m/s",
        "Upper speed limit for low-speed course over ground filter";
    "CFG-ODO-COGMAXPOSACC", 0x20220022, U1, 1.0, "",
        "Maximum acceptable position accuracy for computing low-speed  filtered course over ground";
    "CFG-ODO-COGLPGAIN", 0x20220032, U1, 1.0, "",
        "Course over ground low-pass filter level (at speed < 8 m/s)";
    "CFG-ODO-VELLPGAIN", 0x20220031, U1, 1.0, "",
        "Velocity low-pass filter level";

    // CFG-RATE
    "CFG-RATE-MEAS", 0x30210001, U2, 0.001, "s",
        "Nominal time between GNSS measurements";
    "CFG-RATE-NAV", 0x30210002, U2, 1.0, "",
        "Ratio of number of measurements to number of navigation solutions";
    "CFG-RATE-TIMEREF", 0x20210003, E1, 1.0, "",
        "Time system to which measurements are aligned";

    // CFG-RINV
    "CFG-RINV-DUMP", 0x10c70001, L, 1.0, "",
        "Dump data at startup";
    "CFG-RINV-BINARY", 0x10c70002, L, 1.0, "",
        "Data is binary";
    "CFG-RINV-DATA_SIZE", 0x20c70003, U1, 1.0, "",
        "Size of data";
    "CFG-RINV-CHUNK0", 0x50c70004, X8, 1.0, "",
        "Data bytes 1-8 (LSB)";
    "CFG-RINV-CHUNK1", 0x50c70005, X8, 1.0, "",
        "Data bytes 9-16";
    "CFG-RINV-CHUNK2", 0x50c70006, X8, 1.0, "",
        "Data bytes 17-24";
    "CFG-RINV-CHUNK3", 0x50c70007, X8, 1.0, "",
        "Data bytes 25-30 (MSB)";

    // CFG-SBAS
    "CFG-SBAS-USE_TESTMODE", 0x10360002, L, 1.0, "",
        "Use SBAS data when it is in test mode";
    "CFG-SBAS-USE_RANGING", 0x10360003, L, 1.0, "",
        "Use SBAS GEOs as a ranging source (for navigation)";
    "CFG-SBAS-USE_DIFFCORR", 0x10360004, L, 1.0, "",
        "Use SBAS differential corrections";
    "CFG-SBAS-USE_INTEGRITY", 0x10360005, L, 1.0, "",
        "Use SBAS integrity information";
    "CFG-SBAS-PRNSCANMASK", 0x50360006, X8, 1.0, "",
        "SBAS PRN search configuration";

    // CFG-SIGNAL
    "CFG-SIGNAL-GPS_ENA", 0x1031001f, L, 1.0, "",
        "GPS enable";
    "CFG-SIGNAL-GPS_L1CA_ENA", 0x10310001, L, 1.0, "",
        "GPS L1C/A";
    "CFG-SIGNAL-GPS_L2C_ENA", 0x10310003, L, 1.0, "",
        "GPS L2C";
    "CFG-SIGNAL-SBAS_ENA", 0x10310020, L, 1.0, "",
        "SBAS enable";
    "CFG-SIGNAL-SBAS_L1CA_ENA", 0x10310005, L, 1.0, "",
        "SBAS L1C/A";
    "CFG-SIGNAL-GAL_ENA", 0x10310021, L, 1.0, "",
        "Galileo enable";
    "CFG-SIGNAL-GAL_E1_ENA", 0x10310007, L, 1.0, "",
        "Galileo E1";
    "CFG-SIGNAL-GAL_E5B_ENA", 0x1031000a, L, 1.0, "",
        "Galileo E5b";
    "CFG-SIGNAL-BDS_ENA", 0x10310022, L, 1.0, "",
        "BeiDou Enable";
    "CFG-SIGNAL-BDS_B1_ENA", 0x1031000d, L, 1.0, "",
        "BeiDou B1I";
    "CFG-SIGNAL-BDS_B2_ENA", 0x1031000e, L, 1.0, "",
        "BeiDou B2I";
    "CFG-SIGNAL-QZSS_ENA", 0x10310024, L, 1.0, "",
        "QZSS enable";
    "CFG-SIGNAL-QZSS_L1CA_ENA", 0x10310012, L, 1.0, "",
        "QZSS L1C/A";
    "CFG-SIGNAL-QZSS_L1S_ENA", 0x10310014, L, 1.0, "",
        "QZSS L1S";
    "CFG-SIGNAL-QZSS_L2C_ENA", 0x10310015, L, 1.0, "",
        "QZSS L2C";
    "CFG-SIGNAL-GLO_ENA", 0x10310025, L, 1.0, "",
        "GLONASS enable";
    "CFG-SIGNAL-GLO_L1_ENA", 0x10310018, L, 1.0, "",
        "GLONASS L1";
    "CFG-SIGNAL-GLO_L2_ENA", 0x1031001a, L, 1.0, "",
        "GLONASS L2";

    // CFG-SPI
    "CFG-SPI-MAXFF", 0x20640001, U1, 1.0, "",
        "Number of bytes containing 0xFF to receive before switching off reception.";
    "CFG-SPI-CPOLARITY", 0x10640002, L, 1.0, "",
        "Clock polarity select";
    "CFG-SPI-CPHASE", 0x10640003, L, 1.0, "",
        "Clock phase select";
    "CFG-SPI-EXTENDEDTIMEOUT", 0x10640005, L, 1.0, "",
        "Flag to disable timeouting the interface after 1.5s";
    "CFG-SPI-ENABLED", 0x10640006, L, 1.0, "",
        "Flag to indicate if the SPI interface should be enabled";

    // CFG-SPIINPROT
    "CFG-SPIINPROT-UBX", 0x10790001, L, 1.0, "",
        "Flag to indicate if UBX should be an input protocol on SPI";
    "CFG-SPIINPROT-NMEA", 0x10790002, L, 1.0, "",
        "Flag to indicate if NMEA should be an input protocol on SPI";
    "CFG-SPIINPROT-RTCM2X", 0x10790003, L, 1.0, "",
        "Flag to indicate if RTCM2X should be an input protocol on SPI";
    "CFG-SPIINPROT-RTCM3X", 0x10790004, L, 1.0, "",
        "Flag to indicate if RTCM3X should be an input protocol on SPI";

    // CFG-SPIOUTPROT
    "CFG-SPIOUTPROT-UBX", 0x107a0001, L, 1.0, "",
        "Flag to indicate if UBX should be an output protocol on SPI";
    "CFG-SPIOUTPROT-NMEA", 0x107a0002, L, 1.0, "",
        "Flag to indicate if NMEA should be an output protocol on SPI";
    "CFG-SPIOUTPROT-RTCM3X", 0x107a0004, L, 1.0, "",
        "Flag to indicate if RTCM3X should be an output protocol on SPI";

    // CFG-TMODE
    "CFG-TMODE-MODE", 0x20030001, E1, 1.0, "",
        "Receiver mode";
    "CFG-TMODE-POS_TYPE", 0x20030002, E1, 1.0, "",
        "Determines whether the ARP position is given in ECEF or LAT/LON/HEIGHT?";
    "CFG-TMODE-ECEF_X", 0x40030003, I4, 1.0, "cm",
        "ECEF X coordinate of the ARP position.";
    "CFG-TMODE-ECEF_Y", 0x40030004, I4, 1.0, "cm",
        "ECEF Y coordinate of the ARP position.";
    "CFG-TMODE-ECEF_Z", 0x40030005, I4, 1.0, "cm",
        "ECEF Z coordinate of the ARP position.";
    "CFG-TMODE-ECEF_X_HP", 0x20030006, I1, 0.1, "mm",
        "High-precision ECEF X coordinate of the ARP position.";
    "CFG-TMODE-ECEF_Y_HP", 0x20030007, I1, 0.1, "mm",
        "High-precision ECEF Y coordinate of the ARP position.";
    "CFG-TMODE-ECEF_Z_HP", 0x20030008, I1, 0.1, "mm",
        "High-precision ECEF Z coordinate of the ARP position.";
    "CFG-TMODE-LAT", 0x40030009, I4, 1e-07, "deg",
        "Latitude of the ARP position.";
    "CFG-TMODE-LON", 0x4003000a, I4, 1e-07, "deg",
        "Longitude of the ARP position.";
    "CFG-TMODE-HEIGHT", 0x4003000b, I4, 1.0, "cm",
        "Height of the ARP position.";
    "CFG-TMODE-LAT_HP", 0x2003000c, I1, 1e-09, "deg",
        "High-precision latitude of the ARP position";
    "CFG-TMODE-LON_HP", 0x2003000d, I1, 1e-09, "deg",
        "High-precision longitude of the ARP position.";
    "CFG-TMODE-HEIGHT_HP", 0x2003000e, I1, 0.1, "mm",
        "High-precision height of the ARP position.";
    "CFG-TMODE-FIXED_POS_ACC", 0x4003000f, U4, 0.1, "mm",
        "Fixed position 3D accuracy";
    "CFG-TMODE-SVIN_MIN_DUR", 0x40030010, U4, 1.0, "s",
        "Survey-in minimum duration";
    "CFG-TMODE-SVIN_ACC_LIMIT", 0x40030011, U4, 0.1, "mm",
        "Survey-in position accuracy limit";

    // CFG-TP
    "CFG-TP-PULSE_DEF", 0x20050023, E1, 1.0, "",
        "Determines whether the time pulse is interpreted as frequency or period?";
    "CFG-TP-PULSE_LENGTH_DEF", 0x20050030, E1, 1.0, "",
        "Determines whether the time pulse length is interpreted as length[us] or pulse ratio[%]?";
    "CFG-TP-ANT_CABLEDELAY", 0x30050001, I2, 1e-09, "s",
        "Antenna cable delay";
    "CFG-TP-PERIOD_TP1", 0x40050002, U4, 1e-06, "s",
        "Time pulse period (TP1)";
    "CFG-TP-PERIOD_LOCK_TP1", 0x40050003, U4, 1e-06, "s",
        "Time pulse period when locked to GNSS time (TP1)";
    "CFG-TP-FREQ_TP1", 0x40050024, U4, 1.0, "Hz",
        "Time pulse frequency (TP1)";
    "CFG-TP-FREQ_LOCK_TP1", 0x40050025, U4, 1.0, "Hz",
        "Time pulse frequency when locked to GNSS time (TP1)";
    "CFG-TP-LEN_TP1", 0x40050004, U4, 1e-06, "s",
        "Time pulse length (TP1)";
    "CFG-TP-LEN_LOCK_TP1", 0x40050005, U4, 1e-06, "s",
        "Time pulse length when locked to GNSS time (TP1)";
    "CFG-TP-DUTY_TP1", 0x5005002a, R8, 1.0, "%",
        "Time pulse duty cycle (TP1)";
    "CFG-TP-DUTY_LOCK_TP1", 0x5005002b, R8, 1.0, "%",
        "Time pulse duty cycle when locked to GNSS time (TP1)";
    "CFG-TP-USER_DELAY_TP1", 0x40050006, I4, 1e-09, "s",
        "User configurable time pulse delay (TP1)";
    "CFG-TP-TP1_ENA", 0x10050007, L, 1.0, "",
        "Enable the first timepulse";
    "CFG-TP-SYNC_GNSS_TP1", 0x10050008, L, 1.0, "",
        "Sync time pulse to GNSS time or local clock (TP1)";
    "CFG-TP-USE_LOCKED_TP1", 0x10050009, L, 1.0, "",
        "Use locked parameters when possible (TP1)";
    "CFG-TP-ALIGN_TO_TOW_TP1", 0x1005000a, L, 1.0, "",
        "Align time pulse to top of second (TP1)";
    "CFG-TP-POL_TP1", 0x1005000b, L, 1.0, "",
        "Set time pulse polarity (TP1)";
    "CFG-TP-TIMEGRID_TP1", 0x2005000c, E1, 1.0, "",
        "Time grid to use (TP1)";
    "CFG-TP-PERIOD_TP2", 0x4005000d, U4, 1e-06, "s",
        "Time pulse period (TP2)";
    "CFG-TP-PERIOD_LOCK_TP2", 0x4005000e, U4, 1e-06, "s",
        "Time pulse period when locked to GNSS time (TP2)";
    "CFG-TP-FREQ_TP2", 0x40050026, U4, 1.0, "Hz",
        "Time pulse frequency (TP2)";
    "CFG-TP-FREQ_LOCK_TP2", 0x40050027, U4, 1.0, "Hz",
        "Time pulse frequency when locked to GNSS time (TP2)";
    "CFG-TP-LEN_TP2", 0x4005000f, U4, 1e-06, "s",
        "Time pulse length (TP2)";
    "CFG-TP-LEN_LOCK_TP2", 0x40050010, U4, 1e-06, "s",
        "Time pulse length when locked to GNSS time (TP2)";
    "CFG-TP-DUTY_TP2", 0x5005002c, R8, 1.0, "%",
        "Time pulse duty cycle (TP2)";
    "CFG-TP-DUTY_LOCK_TP2", 0x5005002d, R8, 1.0, "%",
        "Time pulse duty cycle when locked to GNSS time (TP2)";
    "CFG-TP-USER_DELAY_TP2", 0x40050011, I4, 1e-09, "s",
        "User configurable time pulse delay (TP2)";
    "CFG-TP-TP2_ENA", 0x10050012, L, 1.0, "",
        "Enable the second timepulse";
    "CFG-TP-SYNC_GNSS_TP2", 0x10050013, L, 1.0, "",
        "Sync time pulse to GNSS time or local clock (TP2)";
    "CFG-TP-USE_LOCKED_TP2", 0x10050014, L, 1.0, "",
        "Use locked parameters when possible (TP2)";
    "CFG-TP-ALIGN_TO_TOW_TP2", 0x10050015, L, 1.0, "",
        "Align time pulse to top of second (TP2)";
    "CFG-TP-POL_TP2", 0x10050016, L, 1.0, "",
        "Set time pulse polarity (TP2)";
    "CFG-TP-TIMEGRID_TP2", 0x20050017, E1, 1.0, "",
        "Time grid to use (TP2)";

    // CFG-UART1
    "CFG-UART1-BAUDRATE", 0x40520001, U4, 1.0, "",
        "The baud rate that should be configured on the UART1";
    "CFG-UART1-STOPBITS", 0x20520002, E1, 1.0, "",
        "Number of stopbits that should be used on UART1";
    "CFG-UART1-DATABITS", 0x20520003, E1, 1.0, "",
        "Number of databits that should be used on UART1";
    "CFG-UART1-PARITY", 0x20520004, E1, 1.0, "",
        "Parity mode that should be used on UART1";
    "CFG-UART1-ENABLED", 0x10520005, L, 1.0, "",
        "Flag to indicate if the UART1 should be enabled";

    // CFG-UART1INPROT
    "CFG-UART1INPROT-UBX", 0x10730001, L, 1.0, "",
        "Flag to indicate if UBX should be an input protocol on UART1";
    "CFG-UART1INPROT-NMEA", 0x10730002, L, 1.0, "",
        "Flag to indicate if NMEA should be an input protocol on UART1";
    "CFG-UART1INPROT-RTCM2X", 0x10730003, L, 1.0, "",
        "Flag to indicate if RTCM2X should be an input protocol on UART1";
    "CFG-UART1INPROT-RTCM3X", 0x10730004, L, 1.0, "",
        "Flag to indicate if RTCM3X should be an input protocol on UART1";

    // CFG-UART1OUTPROT
    "CFG-UART1OUTPROT-UBX", 0x10740001, L, 1.0, "",
        "Flag to indicate if UBX should be an output protocol on UART1";
    "CFG-UART1OUTPROT-NMEA", 0x10740002, L, 1.0, "",
        "Flag to indicate if NMEA should be an output protocol on UART1";
    "CFG-UART1OUTPROT-RTCM3X", 0x10740004, L, 1.0, "",
        "Flag to indicate if RTCM3X should be an output protocol on UART1";

    // CFG-UART2
    "CFG-UART2-BAUDRATE", 0x40530001, U4, 1.0, "",
        "The baud rate that should be configured on the UART2";
    "CFG-UART2-STOPBITS", 0x20530002, E1, 1.0, "",
        "Number of stopbits that should be used on UART2";
    "CFG-UART2-DATABITS", 0x20530003, E1, 1.0, "",
        "Number of databits that should be used on UART2";
    "CFG-UART2-PARITY", 0x20530004, E1, 1.0, "",
        "Parity mode that should be used on UART2";
    "CFG-UART2-ENABLED", 0x10530005, L, 1.0, "",
        "Flag to indicate if the UART2 should be enabled";
    "CFG-UART2-REMAP", 0x10530006, L, 1.0, "",
        "UART2 Remapping";

    // CFG-UART2INPROT
    "CFG-UART2INPROT-UBX", 0x10750001, L, 1.0, "",
        "Flag to indicate if UBX should be an input protocol on UART2";
    "CFG-UART2INPROT-NMEA", 0x10750002, L, 1.0, "",
        "Flag to indicate if NMEA should be an input protocol on UART2";
    "CFG-UART2INPROT-RTCM2X", 0x10750003, L, 1.0, "",
        "Flag to indicate if RTCM2X should be an input protocol on UART2";
    "CFG-UART2INPROT-RTCM3X", 0x10750004, L, 1.0, "",
        "Flag to indicate if RTCM3X should be an input protocol on UART2";

    // CFG-UART2OUTPROT
    "CFG-UART2OUTPROT-UBX", 0x10760001, L, 1.0, "",
        "Flag to indicate if UBX should be an output protocol on UART2";
    "CFG-UART2OUTPROT-NMEA", 0x10760002, L, 1.0, "",
        "Flag to indicate if NMEA should be an output protocol on UART2";
    "CFG-UART2OUTPROT-RTCM3X", 0x10760004, L, 1.0, "",
        "Flag to indicate if RTCM3X should be an output protocol on UART2";

    // CFG-USB
    "CFG-USB-ENABLED", 0x10650001, L, 1.0, "",
        "Flag to indicate if the USB interface should be enabled";
    "CFG-USB-SELFPOW", 0x10650002, L, 1.0, "",
        "Self-Powered device";
    "CFG-USB-VENDOR_ID", 0x3065000a, U2, 1.0, "",
        "Vendor ID";
    "CFG-USB-PRODUCT_ID", 0x3065000b, U2, 1.0, "",
        "Product ID";
    "CFG-USB-POWER", 0x3065000c, U2, 1.0, "mA",
        "Power consumption";
    "CFG-USB-VENDOR_STR0", 0x5065000d, X8, 1.0, "",
        "Vendor string characters 0-7";
    "CFG-USB-VENDOR_STR1", 0x5065000e, X8, 1.0, "",
        "Vendor string characters 8-15";
    "CFG-USB-VENDOR_STR2", 0x5065000f, X8, 1.0, "",
        "Vendor string characters 16-23";
    "CFG-USB-VENDOR_STR3", 0x50650010, X8, 1.0, "",
        "Vendor string characters 24-31";
    "CFG-USB-PRODUCT_STR0", 0x50650011, X8, 1.0, "",
        "Product string characters 0-7";
    "CFG-USB-PRODUCT_STR1", 0x50650012, X8, 1.0, "",
        "Product string characters 8-15";
    "CFG-USB-PRODUCT_STR2", 0x50650013, X8, 1.0, "",
        "Product string characters 16-23";
    "CFG-USB-PRODUCT_STR3", 0x50650014, X8, 1.0, "",
        "Product string characters 24-31";
    "CFG-USB-SERIAL_NO_STR0", 0x50650015, X8, 1.0, "",
        "Serial number string characters 0-7";
    "CFG-USB-SERIAL_NO_STR1", 0x50650016, X8, 1.0, "",
        "Serial number string characters 8-15";
    "CFG-USB-SERIAL_NO_STR2", 0x50650017, X8, 1.0, "",
        "Serial number string characters 16-23";
    "CFG-USB-SERIAL_NO_STR3", 0x50650018, X8, 1.0, "",
        "Serial number string characters 24-31";

    // CFG-USBINPROT
    "CFG-USBINPROT-UBX", 0x10770001, L, 1.0, "",
        "Flag to indicate if UBX should be an input protocol on USB";
    "CFG-USBINPROT-NMEA", 0x10770002, L, 1.0, "",
        "Flag to indicate if NMEA should be an input protocol on USB";
    "CFG-USBINPROT-RTCM2X", 0x10770003, L, 1.0, "",
        "Flag to indicate if RTCM2X should be an input protocol on USB";
    "CFG-USBINPROT-RTCM3X", 0x10770004, L, 1.0, "",
        "Flag to indicate if RTCM3X should be an input protocol on USB";

    // CFG-USBOUTPROT
    "CFG-USBOUTPROT-UBX", 0x10780001, L, 1.0, "",
        "Flag to indicate if UBX should be an output protocol on USB";
    "CFG-USBOUTPROT-NMEA", 0x10780002, L, 1.0, "",
        "Flag to indicate if NMEA should be an output protocol on USB";
    "CFG-USBOUTPROT-RTCM3X", 0x10780004, L, 1.0, "",
        "Flag to indicate if RTCM3X should be an output protocol on USB";
}
