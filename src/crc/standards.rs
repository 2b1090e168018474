//! Catalogue of published CRC standards.
//!
//! Parameters and check values follow the usual catalogue conventions: the
//! check value is the CRC of the nine ASCII bytes `"123456789"`. Standards can
//! be looked up by canonical name or by one of their common aliases, ignoring
//! case.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::config::CrcConfig;

/// A named CRC standard.
///
/// The catalogue is fixed at compile time and read-only.
///
/// # Example
///
/// ```
/// use hashrs::CrcStandard;
///
/// let standard = CrcStandard::from_name("crc-32").unwrap();
/// assert_eq!(standard, CrcStandard::Crc32IsoHdlc);
/// assert_eq!(standard.check(), 0xCBF4_3926);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CrcStandard {
    /// `CRC-3/GSM`
    Crc3Gsm,
    /// `CRC-3/ROHC`
    Crc3Rohc,
    /// `CRC-4/G-704`
    Crc4G704,
    /// `CRC-4/INTERLAKEN`
    Crc4Interlaken,
    /// `CRC-5/EPC-C1G2`
    Crc5EpcC1g2,
    /// `CRC-5/G-704`
    Crc5G704,
    /// `CRC-5/USB`
    Crc5Usb,
    /// `CRC-6/CDMA2000-A`
    Crc6Cdma2000A,
    /// `CRC-6/CDMA2000-B`
    Crc6Cdma2000B,
    /// `CRC-6/DARC`
    Crc6Darc,
    /// `CRC-6/G-704`
    Crc6G704,
    /// `CRC-6/GSM`
    Crc6Gsm,
    /// `CRC-7/MMC`
    Crc7Mmc,
    /// `CRC-7/ROHC`
    Crc7Rohc,
    /// `CRC-7/UMTS`
    Crc7Umts,
    /// `CRC-8/AUTOSAR`
    Crc8Autosar,
    /// `CRC-8/BLUETOOTH`
    Crc8Bluetooth,
    /// `CRC-8/CDMA2000`
    Crc8Cdma2000,
    /// `CRC-8/DARC`
    Crc8Darc,
    /// `CRC-8/DVB-S2`
    Crc8DvbS2,
    /// `CRC-8/GSM-A`
    Crc8GsmA,
    /// `CRC-8/GSM-B`
    Crc8GsmB,
    /// `CRC-8/I-432-1`
    Crc8I4321,
    /// `CRC-8/I-CODE`
    Crc8ICode,
    /// `CRC-8/LTE`
    Crc8Lte,
    /// `CRC-8/MAXIM-DOW`
    Crc8MaximDow,
    /// `CRC-8/MIFARE-MAD`
    Crc8MifareMad,
    /// `CRC-8/NRSC-5`
    Crc8Nrsc5,
    /// `CRC-8/OPENSAFETY`
    Crc8Opensafety,
    /// `CRC-8/ROHC`
    Crc8Rohc,
    /// `CRC-8/SAE-J1850`
    Crc8SaeJ1850,
    /// `CRC-8/SMBUS`
    Crc8Smbus,
    /// `CRC-8/TECH-3250`
    Crc8Tech3250,
    /// `CRC-8/WCDMA`
    Crc8Wcdma,
    /// `CRC-10/ATM`
    Crc10Atm,
    /// `CRC-10/CDMA2000`
    Crc10Cdma2000,
    /// `CRC-10/GSM`
    Crc10Gsm,
    /// `CRC-11/FLEXRAY`
    Crc11Flexray,
    /// `CRC-11/UMTS`
    Crc11Umts,
    /// `CRC-12/CDMA2000`
    Crc12Cdma2000,
    /// `CRC-12/DECT`
    Crc12Dect,
    /// `CRC-12/GSM`
    Crc12Gsm,
    /// `CRC-12/UMTS`
    Crc12Umts,
    /// `CRC-13/BBC`
    Crc13Bbc,
    /// `CRC-14/DARC`
    Crc14Darc,
    /// `CRC-14/GSM`
    Crc14Gsm,
    /// `CRC-15/CAN`
    Crc15Can,
    /// `CRC-15/MPT1327`
    Crc15Mpt1327,
    /// `CRC-16/ARC`
    Crc16Arc,
    /// `CRC-16/CDMA2000`
    Crc16Cdma2000,
    /// `CRC-16/CMS`
    Crc16Cms,
    /// `CRC-16/DDS-110`
    Crc16Dds110,
    /// `CRC-16/DECT-R`
    Crc16DectR,
    /// `CRC-16/DECT-X`
    Crc16DectX,
    /// `CRC-16/DNP`
    Crc16Dnp,
    /// `CRC-16/EN-13757`
    Crc16En13757,
    /// `CRC-16/GENIBUS`
    Crc16Genibus,
    /// `CRC-16/GSM`
    Crc16Gsm,
    /// `CRC-16/IBM-3740`
    Crc16Ibm3740,
    /// `CRC-16/IBM-SDLC`
    Crc16IbmSdlc,
    /// `CRC-16/ISO-IEC-14443-3-A`
    Crc16IsoIec144433A,
    /// `CRC-16/KERMIT`
    Crc16Kermit,
    /// `CRC-16/LJ1200`
    Crc16Lj1200,
    /// `CRC-16/MAXIM-DOW`
    Crc16MaximDow,
    /// `CRC-16/MCRF4XX`
    Crc16Mcrf4xx,
    /// `CRC-16/MODBUS`
    Crc16Modbus,
    /// `CRC-16/NRSC-5`
    Crc16Nrsc5,
    /// `CRC-16/OPENSAFETY-A`
    Crc16OpensafetyA,
    /// `CRC-16/OPENSAFETY-B`
    Crc16OpensafetyB,
    /// `CRC-16/PROFIBUS`
    Crc16Profibus,
    /// `CRC-16/RIELLO`
    Crc16Riello,
    /// `CRC-16/SPI-FUJITSU`
    Crc16SpiFujitsu,
    /// `CRC-16/T10-DIF`
    Crc16T10Dif,
    /// `CRC-16/TELEDISK`
    Crc16Teledisk,
    /// `CRC-16/TMS37157`
    Crc16Tms37157,
    /// `CRC-16/UMTS`
    Crc16Umts,
    /// `CRC-16/USB`
    Crc16Usb,
    /// `CRC-16/XMODEM`
    Crc16Xmodem,
    /// `CRC-17/CAN-FD`
    Crc17CanFd,
    /// `CRC-21/CAN-FD`
    Crc21CanFd,
    /// `CRC-24/BLE`
    Crc24Ble,
    /// `CRC-24/FLEXRAY-A`
    Crc24FlexrayA,
    /// `CRC-24/FLEXRAY-B`
    Crc24FlexrayB,
    /// `CRC-24/INTERLAKEN`
    Crc24Interlaken,
    /// `CRC-24/LTE-A`
    Crc24LteA,
    /// `CRC-24/LTE-B`
    Crc24LteB,
    /// `CRC-24/OPENPGP`
    Crc24Openpgp,
    /// `CRC-24/OS-9`
    Crc24Os9,
    /// `CRC-30/CDMA`
    Crc30Cdma,
    /// `CRC-31/PHILIPS`
    Crc31Philips,
    /// `CRC-32/AIXM`
    Crc32Aixm,
    /// `CRC-32/AUTOSAR`
    Crc32Autosar,
    /// `CRC-32/BASE91-D`
    Crc32Base91D,
    /// `CRC-32/BZIP2`
    Crc32Bzip2,
    /// `CRC-32/CD-ROM-EDC`
    Crc32CdRomEdc,
    /// `CRC-32/CKSUM`
    Crc32Cksum,
    /// `CRC-32/ISCSI`
    Crc32Iscsi,
    /// `CRC-32/ISO-HDLC`
    Crc32IsoHdlc,
    /// `CRC-32/JAMCRC`
    Crc32Jamcrc,
    /// `CRC-32/MEF`
    Crc32Mef,
    /// `CRC-32/MPEG-2`
    Crc32Mpeg2,
    /// `CRC-32/XFER`
    Crc32Xfer,
    /// `CRC-40/GSM`
    Crc40Gsm,
    /// `CRC-64/ECMA-182`
    Crc64Ecma182,
    /// `CRC-64/GO-ISO`
    Crc64GoIso,
    /// `CRC-64/MS`
    Crc64Ms,
    /// `CRC-64/NVME`
    Crc64Nvme,
    /// `CRC-64/REDIS`
    Crc64Redis,
    /// `CRC-64/WE`
    Crc64We,
    /// `CRC-64/XZ`
    Crc64Xz,
}

impl CrcStandard {
    /// Every catalogued standard, ordered by width.
    pub const ALL: &'static [CrcStandard] = &[
        CrcStandard::Crc3Gsm,
        CrcStandard::Crc3Rohc,
        CrcStandard::Crc4G704,
        CrcStandard::Crc4Interlaken,
        CrcStandard::Crc5EpcC1g2,
        CrcStandard::Crc5G704,
        CrcStandard::Crc5Usb,
        CrcStandard::Crc6Cdma2000A,
        CrcStandard::Crc6Cdma2000B,
        CrcStandard::Crc6Darc,
        CrcStandard::Crc6G704,
        CrcStandard::Crc6Gsm,
        CrcStandard::Crc7Mmc,
        CrcStandard::Crc7Rohc,
        CrcStandard::Crc7Umts,
        CrcStandard::Crc8Autosar,
        CrcStandard::Crc8Bluetooth,
        CrcStandard::Crc8Cdma2000,
        CrcStandard::Crc8Darc,
        CrcStandard::Crc8DvbS2,
        CrcStandard::Crc8GsmA,
        CrcStandard::Crc8GsmB,
        CrcStandard::Crc8I4321,
        CrcStandard::Crc8ICode,
        CrcStandard::Crc8Lte,
        CrcStandard::Crc8MaximDow,
        CrcStandard::Crc8MifareMad,
        CrcStandard::Crc8Nrsc5,
        CrcStandard::Crc8Opensafety,
        CrcStandard::Crc8Rohc,
        CrcStandard::Crc8SaeJ1850,
        CrcStandard::Crc8Smbus,
        CrcStandard::Crc8Tech3250,
        CrcStandard::Crc8Wcdma,
        CrcStandard::Crc10Atm,
        CrcStandard::Crc10Cdma2000,
        CrcStandard::Crc10Gsm,
        CrcStandard::Crc11Flexray,
        CrcStandard::Crc11Umts,
        CrcStandard::Crc12Cdma2000,
        CrcStandard::Crc12Dect,
        CrcStandard::Crc12Gsm,
        CrcStandard::Crc12Umts,
        CrcStandard::Crc13Bbc,
        CrcStandard::Crc14Darc,
        CrcStandard::Crc14Gsm,
        CrcStandard::Crc15Can,
        CrcStandard::Crc15Mpt1327,
        CrcStandard::Crc16Arc,
        CrcStandard::Crc16Cdma2000,
        CrcStandard::Crc16Cms,
        CrcStandard::Crc16Dds110,
        CrcStandard::Crc16DectR,
        CrcStandard::Crc16DectX,
        CrcStandard::Crc16Dnp,
        CrcStandard::Crc16En13757,
        CrcStandard::Crc16Genibus,
        CrcStandard::Crc16Gsm,
        CrcStandard::Crc16Ibm3740,
        CrcStandard::Crc16IbmSdlc,
        CrcStandard::Crc16IsoIec144433A,
        CrcStandard::Crc16Kermit,
        CrcStandard::Crc16Lj1200,
        CrcStandard::Crc16MaximDow,
        CrcStandard::Crc16Mcrf4xx,
        CrcStandard::Crc16Modbus,
        CrcStandard::Crc16Nrsc5,
        CrcStandard::Crc16OpensafetyA,
        CrcStandard::Crc16OpensafetyB,
        CrcStandard::Crc16Profibus,
        CrcStandard::Crc16Riello,
        CrcStandard::Crc16SpiFujitsu,
        CrcStandard::Crc16T10Dif,
        CrcStandard::Crc16Teledisk,
        CrcStandard::Crc16Tms37157,
        CrcStandard::Crc16Umts,
        CrcStandard::Crc16Usb,
        CrcStandard::Crc16Xmodem,
        CrcStandard::Crc17CanFd,
        CrcStandard::Crc21CanFd,
        CrcStandard::Crc24Ble,
        CrcStandard::Crc24FlexrayA,
        CrcStandard::Crc24FlexrayB,
        CrcStandard::Crc24Interlaken,
        CrcStandard::Crc24LteA,
        CrcStandard::Crc24LteB,
        CrcStandard::Crc24Openpgp,
        CrcStandard::Crc24Os9,
        CrcStandard::Crc30Cdma,
        CrcStandard::Crc31Philips,
        CrcStandard::Crc32Aixm,
        CrcStandard::Crc32Autosar,
        CrcStandard::Crc32Base91D,
        CrcStandard::Crc32Bzip2,
        CrcStandard::Crc32CdRomEdc,
        CrcStandard::Crc32Cksum,
        CrcStandard::Crc32Iscsi,
        CrcStandard::Crc32IsoHdlc,
        CrcStandard::Crc32Jamcrc,
        CrcStandard::Crc32Mef,
        CrcStandard::Crc32Mpeg2,
        CrcStandard::Crc32Xfer,
        CrcStandard::Crc40Gsm,
        CrcStandard::Crc64Ecma182,
        CrcStandard::Crc64GoIso,
        CrcStandard::Crc64Ms,
        CrcStandard::Crc64Nvme,
        CrcStandard::Crc64Redis,
        CrcStandard::Crc64We,
        CrcStandard::Crc64Xz,
    ];

    /// Returns the canonical catalogue name, e.g. `"CRC-32/ISO-HDLC"`.
    pub const fn name(self) -> &'static str {
        match self {
            CrcStandard::Crc3Gsm => "CRC-3/GSM",
            CrcStandard::Crc3Rohc => "CRC-3/ROHC",
            CrcStandard::Crc4G704 => "CRC-4/G-704",
            CrcStandard::Crc4Interlaken => "CRC-4/INTERLAKEN",
            CrcStandard::Crc5EpcC1g2 => "CRC-5/EPC-C1G2",
            CrcStandard::Crc5G704 => "CRC-5/G-704",
            CrcStandard::Crc5Usb => "CRC-5/USB",
            CrcStandard::Crc6Cdma2000A => "CRC-6/CDMA2000-A",
            CrcStandard::Crc6Cdma2000B => "CRC-6/CDMA2000-B",
            CrcStandard::Crc6Darc => "CRC-6/DARC",
            CrcStandard::Crc6G704 => "CRC-6/G-704",
            CrcStandard::Crc6Gsm => "CRC-6/GSM",
            CrcStandard::Crc7Mmc => "CRC-7/MMC",
            CrcStandard::Crc7Rohc => "CRC-7/ROHC",
            CrcStandard::Crc7Umts => "CRC-7/UMTS",
            CrcStandard::Crc8Autosar => "CRC-8/AUTOSAR",
            CrcStandard::Crc8Bluetooth => "CRC-8/BLUETOOTH",
            CrcStandard::Crc8Cdma2000 => "CRC-8/CDMA2000",
            CrcStandard::Crc8Darc => "CRC-8/DARC",
            CrcStandard::Crc8DvbS2 => "CRC-8/DVB-S2",
            CrcStandard::Crc8GsmA => "CRC-8/GSM-A",
            CrcStandard::Crc8GsmB => "CRC-8/GSM-B",
            CrcStandard::Crc8I4321 => "CRC-8/I-432-1",
            CrcStandard::Crc8ICode => "CRC-8/I-CODE",
            CrcStandard::Crc8Lte => "CRC-8/LTE",
            CrcStandard::Crc8MaximDow => "CRC-8/MAXIM-DOW",
            CrcStandard::Crc8MifareMad => "CRC-8/MIFARE-MAD",
            CrcStandard::Crc8Nrsc5 => "CRC-8/NRSC-5",
            CrcStandard::Crc8Opensafety => "CRC-8/OPENSAFETY",
            CrcStandard::Crc8Rohc => "CRC-8/ROHC",
            CrcStandard::Crc8SaeJ1850 => "CRC-8/SAE-J1850",
            CrcStandard::Crc8Smbus => "CRC-8/SMBUS",
            CrcStandard::Crc8Tech3250 => "CRC-8/TECH-3250",
            CrcStandard::Crc8Wcdma => "CRC-8/WCDMA",
            CrcStandard::Crc10Atm => "CRC-10/ATM",
            CrcStandard::Crc10Cdma2000 => "CRC-10/CDMA2000",
            CrcStandard::Crc10Gsm => "CRC-10/GSM",
            CrcStandard::Crc11Flexray => "CRC-11/FLEXRAY",
            CrcStandard::Crc11Umts => "CRC-11/UMTS",
            CrcStandard::Crc12Cdma2000 => "CRC-12/CDMA2000",
            CrcStandard::Crc12Dect => "CRC-12/DECT",
            CrcStandard::Crc12Gsm => "CRC-12/GSM",
            CrcStandard::Crc12Umts => "CRC-12/UMTS",
            CrcStandard::Crc13Bbc => "CRC-13/BBC",
            CrcStandard::Crc14Darc => "CRC-14/DARC",
            CrcStandard::Crc14Gsm => "CRC-14/GSM",
            CrcStandard::Crc15Can => "CRC-15/CAN",
            CrcStandard::Crc15Mpt1327 => "CRC-15/MPT1327",
            CrcStandard::Crc16Arc => "CRC-16/ARC",
            CrcStandard::Crc16Cdma2000 => "CRC-16/CDMA2000",
            CrcStandard::Crc16Cms => "CRC-16/CMS",
            CrcStandard::Crc16Dds110 => "CRC-16/DDS-110",
            CrcStandard::Crc16DectR => "CRC-16/DECT-R",
            CrcStandard::Crc16DectX => "CRC-16/DECT-X",
            CrcStandard::Crc16Dnp => "CRC-16/DNP",
            CrcStandard::Crc16En13757 => "CRC-16/EN-13757",
            CrcStandard::Crc16Genibus => "CRC-16/GENIBUS",
            CrcStandard::Crc16Gsm => "CRC-16/GSM",
            CrcStandard::Crc16Ibm3740 => "CRC-16/IBM-3740",
            CrcStandard::Crc16IbmSdlc => "CRC-16/IBM-SDLC",
            CrcStandard::Crc16IsoIec144433A => "CRC-16/ISO-IEC-14443-3-A",
            CrcStandard::Crc16Kermit => "CRC-16/KERMIT",
            CrcStandard::Crc16Lj1200 => "CRC-16/LJ1200",
            CrcStandard::Crc16MaximDow => "CRC-16/MAXIM-DOW",
            CrcStandard::Crc16Mcrf4xx => "CRC-16/MCRF4XX",
            CrcStandard::Crc16Modbus => "CRC-16/MODBUS",
            CrcStandard::Crc16Nrsc5 => "CRC-16/NRSC-5",
            CrcStandard::Crc16OpensafetyA => "CRC-16/OPENSAFETY-A",
            CrcStandard::Crc16OpensafetyB => "CRC-16/OPENSAFETY-B",
            CrcStandard::Crc16Profibus => "CRC-16/PROFIBUS",
            CrcStandard::Crc16Riello => "CRC-16/RIELLO",
            CrcStandard::Crc16SpiFujitsu => "CRC-16/SPI-FUJITSU",
            CrcStandard::Crc16T10Dif => "CRC-16/T10-DIF",
            CrcStandard::Crc16Teledisk => "CRC-16/TELEDISK",
            CrcStandard::Crc16Tms37157 => "CRC-16/TMS37157",
            CrcStandard::Crc16Umts => "CRC-16/UMTS",
            CrcStandard::Crc16Usb => "CRC-16/USB",
            CrcStandard::Crc16Xmodem => "CRC-16/XMODEM",
            CrcStandard::Crc17CanFd => "CRC-17/CAN-FD",
            CrcStandard::Crc21CanFd => "CRC-21/CAN-FD",
            CrcStandard::Crc24Ble => "CRC-24/BLE",
            CrcStandard::Crc24FlexrayA => "CRC-24/FLEXRAY-A",
            CrcStandard::Crc24FlexrayB => "CRC-24/FLEXRAY-B",
            CrcStandard::Crc24Interlaken => "CRC-24/INTERLAKEN",
            CrcStandard::Crc24LteA => "CRC-24/LTE-A",
            CrcStandard::Crc24LteB => "CRC-24/LTE-B",
            CrcStandard::Crc24Openpgp => "CRC-24/OPENPGP",
            CrcStandard::Crc24Os9 => "CRC-24/OS-9",
            CrcStandard::Crc30Cdma => "CRC-30/CDMA",
            CrcStandard::Crc31Philips => "CRC-31/PHILIPS",
            CrcStandard::Crc32Aixm => "CRC-32/AIXM",
            CrcStandard::Crc32Autosar => "CRC-32/AUTOSAR",
            CrcStandard::Crc32Base91D => "CRC-32/BASE91-D",
            CrcStandard::Crc32Bzip2 => "CRC-32/BZIP2",
            CrcStandard::Crc32CdRomEdc => "CRC-32/CD-ROM-EDC",
            CrcStandard::Crc32Cksum => "CRC-32/CKSUM",
            CrcStandard::Crc32Iscsi => "CRC-32/ISCSI",
            CrcStandard::Crc32IsoHdlc => "CRC-32/ISO-HDLC",
            CrcStandard::Crc32Jamcrc => "CRC-32/JAMCRC",
            CrcStandard::Crc32Mef => "CRC-32/MEF",
            CrcStandard::Crc32Mpeg2 => "CRC-32/MPEG-2",
            CrcStandard::Crc32Xfer => "CRC-32/XFER",
            CrcStandard::Crc40Gsm => "CRC-40/GSM",
            CrcStandard::Crc64Ecma182 => "CRC-64/ECMA-182",
            CrcStandard::Crc64GoIso => "CRC-64/GO-ISO",
            CrcStandard::Crc64Ms => "CRC-64/MS",
            CrcStandard::Crc64Nvme => "CRC-64/NVME",
            CrcStandard::Crc64Redis => "CRC-64/REDIS",
            CrcStandard::Crc64We => "CRC-64/WE",
            CrcStandard::Crc64Xz => "CRC-64/XZ",
        }
    }

    /// Returns the CRC parameters of this standard.
    pub const fn config(self) -> CrcConfig {
        let (bits, polynomial, initial_value, reflect_in, reflect_out, xor_out) = match self {
            CrcStandard::Crc3Gsm => (3, 0x3, 0x0, false, false, 0x7),
            CrcStandard::Crc3Rohc => (3, 0x3, 0x7, true, true, 0x0),
            CrcStandard::Crc4G704 => (4, 0x3, 0x0, true, true, 0x0),
            CrcStandard::Crc4Interlaken => (4, 0x3, 0xF, false, false, 0xF),
            CrcStandard::Crc5EpcC1g2 => (5, 0x09, 0x09, false, false, 0x00),
            CrcStandard::Crc5G704 => (5, 0x15, 0x00, true, true, 0x00),
            CrcStandard::Crc5Usb => (5, 0x05, 0x1F, true, true, 0x1F),
            CrcStandard::Crc6Cdma2000A => (6, 0x27, 0x3F, false, false, 0x00),
            CrcStandard::Crc6Cdma2000B => (6, 0x07, 0x3F, false, false, 0x00),
            CrcStandard::Crc6Darc => (6, 0x19, 0x00, true, true, 0x00),
            CrcStandard::Crc6G704 => (6, 0x03, 0x00, true, true, 0x00),
            CrcStandard::Crc6Gsm => (6, 0x2F, 0x00, false, false, 0x3F),
            CrcStandard::Crc7Mmc => (7, 0x09, 0x00, false, false, 0x00),
            CrcStandard::Crc7Rohc => (7, 0x4F, 0x7F, true, true, 0x00),
            CrcStandard::Crc7Umts => (7, 0x45, 0x00, false, false, 0x00),
            CrcStandard::Crc8Autosar => (8, 0x2F, 0xFF, false, false, 0xFF),
            CrcStandard::Crc8Bluetooth => (8, 0xA7, 0x00, true, true, 0x00),
            CrcStandard::Crc8Cdma2000 => (8, 0x9B, 0xFF, false, false, 0x00),
            CrcStandard::Crc8Darc => (8, 0x39, 0x00, true, true, 0x00),
            CrcStandard::Crc8DvbS2 => (8, 0xD5, 0x00, false, false, 0x00),
            CrcStandard::Crc8GsmA => (8, 0x1D, 0x00, false, false, 0x00),
            CrcStandard::Crc8GsmB => (8, 0x49, 0x00, false, false, 0xFF),
            CrcStandard::Crc8I4321 => (8, 0x07, 0x00, false, false, 0x55),
            CrcStandard::Crc8ICode => (8, 0x1D, 0xFD, false, false, 0x00),
            CrcStandard::Crc8Lte => (8, 0x9B, 0x00, false, false, 0x00),
            CrcStandard::Crc8MaximDow => (8, 0x31, 0x00, true, true, 0x00),
            CrcStandard::Crc8MifareMad => (8, 0x1D, 0xC7, false, false, 0x00),
            CrcStandard::Crc8Nrsc5 => (8, 0x31, 0xFF, false, false, 0x00),
            CrcStandard::Crc8Opensafety => (8, 0x2F, 0x00, false, false, 0x00),
            CrcStandard::Crc8Rohc => (8, 0x07, 0xFF, true, true, 0x00),
            CrcStandard::Crc8SaeJ1850 => (8, 0x1D, 0xFF, false, false, 0xFF),
            CrcStandard::Crc8Smbus => (8, 0x07, 0x00, false, false, 0x00),
            CrcStandard::Crc8Tech3250 => (8, 0x1D, 0xFF, true, true, 0x00),
            CrcStandard::Crc8Wcdma => (8, 0x9B, 0x00, true, true, 0x00),
            CrcStandard::Crc10Atm => (10, 0x233, 0x000, false, false, 0x000),
            CrcStandard::Crc10Cdma2000 => (10, 0x3D9, 0x3FF, false, false, 0x000),
            CrcStandard::Crc10Gsm => (10, 0x175, 0x000, false, false, 0x3FF),
            CrcStandard::Crc11Flexray => (11, 0x385, 0x01A, false, false, 0x000),
            CrcStandard::Crc11Umts => (11, 0x307, 0x000, false, false, 0x000),
            CrcStandard::Crc12Cdma2000 => (12, 0xF13, 0xFFF, false, false, 0x000),
            CrcStandard::Crc12Dect => (12, 0x80F, 0x000, false, false, 0x000),
            CrcStandard::Crc12Gsm => (12, 0xD31, 0x000, false, false, 0xFFF),
            CrcStandard::Crc12Umts => (12, 0x80F, 0x000, false, true, 0x000),
            CrcStandard::Crc13Bbc => (13, 0x1CF5, 0x0000, false, false, 0x0000),
            CrcStandard::Crc14Darc => (14, 0x0805, 0x0000, true, true, 0x0000),
            CrcStandard::Crc14Gsm => (14, 0x202D, 0x0000, false, false, 0x3FFF),
            CrcStandard::Crc15Can => (15, 0x4599, 0x0000, false, false, 0x0000),
            CrcStandard::Crc15Mpt1327 => (15, 0x6815, 0x0000, false, false, 0x0001),
            CrcStandard::Crc16Arc => (16, 0x8005, 0x0000, true, true, 0x0000),
            CrcStandard::Crc16Cdma2000 => (16, 0xC867, 0xFFFF, false, false, 0x0000),
            CrcStandard::Crc16Cms => (16, 0x8005, 0xFFFF, false, false, 0x0000),
            CrcStandard::Crc16Dds110 => (16, 0x8005, 0x800D, false, false, 0x0000),
            CrcStandard::Crc16DectR => (16, 0x0589, 0x0000, false, false, 0x0001),
            CrcStandard::Crc16DectX => (16, 0x0589, 0x0000, false, false, 0x0000),
            CrcStandard::Crc16Dnp => (16, 0x3D65, 0x0000, true, true, 0xFFFF),
            CrcStandard::Crc16En13757 => (16, 0x3D65, 0x0000, false, false, 0xFFFF),
            CrcStandard::Crc16Genibus => (16, 0x1021, 0xFFFF, false, false, 0xFFFF),
            CrcStandard::Crc16Gsm => (16, 0x1021, 0x0000, false, false, 0xFFFF),
            CrcStandard::Crc16Ibm3740 => (16, 0x1021, 0xFFFF, false, false, 0x0000),
            CrcStandard::Crc16IbmSdlc => (16, 0x1021, 0xFFFF, true, true, 0xFFFF),
            CrcStandard::Crc16IsoIec144433A => (16, 0x1021, 0xC6C6, true, true, 0x0000),
            CrcStandard::Crc16Kermit => (16, 0x1021, 0x0000, true, true, 0x0000),
            CrcStandard::Crc16Lj1200 => (16, 0x6F63, 0x0000, false, false, 0x0000),
            CrcStandard::Crc16MaximDow => (16, 0x8005, 0x0000, true, true, 0xFFFF),
            CrcStandard::Crc16Mcrf4xx => (16, 0x1021, 0xFFFF, true, true, 0x0000),
            CrcStandard::Crc16Modbus => (16, 0x8005, 0xFFFF, true, true, 0x0000),
            CrcStandard::Crc16Nrsc5 => (16, 0x080B, 0xFFFF, true, true, 0x0000),
            CrcStandard::Crc16OpensafetyA => (16, 0x5935, 0x0000, false, false, 0x0000),
            CrcStandard::Crc16OpensafetyB => (16, 0x755B, 0x0000, false, false, 0x0000),
            CrcStandard::Crc16Profibus => (16, 0x1DCF, 0xFFFF, false, false, 0xFFFF),
            CrcStandard::Crc16Riello => (16, 0x1021, 0xB2AA, true, true, 0x0000),
            CrcStandard::Crc16SpiFujitsu => (16, 0x1021, 0x1D0F, false, false, 0x0000),
            CrcStandard::Crc16T10Dif => (16, 0x8BB7, 0x0000, false, false, 0x0000),
            CrcStandard::Crc16Teledisk => (16, 0xA097, 0x0000, false, false, 0x0000),
            CrcStandard::Crc16Tms37157 => (16, 0x1021, 0x89EC, true, true, 0x0000),
            CrcStandard::Crc16Umts => (16, 0x8005, 0x0000, false, false, 0x0000),
            CrcStandard::Crc16Usb => (16, 0x8005, 0xFFFF, true, true, 0xFFFF),
            CrcStandard::Crc16Xmodem => (16, 0x1021, 0x0000, false, false, 0x0000),
            CrcStandard::Crc17CanFd => (17, 0x1_685B, 0x0_0000, false, false, 0x0_0000),
            CrcStandard::Crc21CanFd => (21, 0x10_2899, 0x00_0000, false, false, 0x00_0000),
            CrcStandard::Crc24Ble => (24, 0x00_065B, 0x55_5555, true, true, 0x00_0000),
            CrcStandard::Crc24FlexrayA => (24, 0x5D_6DCB, 0xFE_DCBA, false, false, 0x00_0000),
            CrcStandard::Crc24FlexrayB => (24, 0x5D_6DCB, 0xAB_CDEF, false, false, 0x00_0000),
            CrcStandard::Crc24Interlaken => (24, 0x32_8B63, 0xFF_FFFF, false, false, 0xFF_FFFF),
            CrcStandard::Crc24LteA => (24, 0x86_4CFB, 0x00_0000, false, false, 0x00_0000),
            CrcStandard::Crc24LteB => (24, 0x80_0063, 0x00_0000, false, false, 0x00_0000),
            CrcStandard::Crc24Openpgp => (24, 0x86_4CFB, 0xB7_04CE, false, false, 0x00_0000),
            CrcStandard::Crc24Os9 => (24, 0x80_0063, 0xFF_FFFF, false, false, 0xFF_FFFF),
            CrcStandard::Crc30Cdma => (30, 0x2030_B9C7, 0x3FFF_FFFF, false, false, 0x3FFF_FFFF),
            CrcStandard::Crc31Philips => (31, 0x04C1_1DB7, 0x7FFF_FFFF, false, false, 0x7FFF_FFFF),
            CrcStandard::Crc32Aixm => (32, 0x8141_41AB, 0x0000_0000, false, false, 0x0000_0000),
            CrcStandard::Crc32Autosar => (32, 0xF4AC_FB13, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF),
            CrcStandard::Crc32Base91D => (32, 0xA833_982B, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF),
            CrcStandard::Crc32Bzip2 => (32, 0x04C1_1DB7, 0xFFFF_FFFF, false, false, 0xFFFF_FFFF),
            CrcStandard::Crc32CdRomEdc => (32, 0x8001_801B, 0x0000_0000, true, true, 0x0000_0000),
            CrcStandard::Crc32Cksum => (32, 0x04C1_1DB7, 0x0000_0000, false, false, 0xFFFF_FFFF),
            CrcStandard::Crc32Iscsi => (32, 0x1EDC_6F41, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF),
            CrcStandard::Crc32IsoHdlc => (32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF),
            CrcStandard::Crc32Jamcrc => (32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0x0000_0000),
            CrcStandard::Crc32Mef => (32, 0x741B_8CD7, 0xFFFF_FFFF, true, true, 0x0000_0000),
            CrcStandard::Crc32Mpeg2 => (32, 0x04C1_1DB7, 0xFFFF_FFFF, false, false, 0x0000_0000),
            CrcStandard::Crc32Xfer => (32, 0x0000_00AF, 0x0000_0000, false, false, 0x0000_0000),
            CrcStandard::Crc40Gsm => (
                40,
                0x00_0482_0009,
                0x00_0000_0000,
                false,
                false,
                0xFF_FFFF_FFFF,
            ),
            CrcStandard::Crc64Ecma182 => (
                64,
                0x42F0_E1EB_A9EA_3693,
                0x0000_0000_0000_0000,
                false,
                false,
                0x0000_0000_0000_0000,
            ),
            CrcStandard::Crc64GoIso => (
                64,
                0x0000_0000_0000_001B,
                0xFFFF_FFFF_FFFF_FFFF,
                true,
                true,
                0xFFFF_FFFF_FFFF_FFFF,
            ),
            CrcStandard::Crc64Ms => (
                64,
                0x259C_84CB_A642_6349,
                0xFFFF_FFFF_FFFF_FFFF,
                true,
                true,
                0x0000_0000_0000_0000,
            ),
            CrcStandard::Crc64Nvme => (
                64,
                0xAD93_D235_94C9_3659,
                0xFFFF_FFFF_FFFF_FFFF,
                true,
                true,
                0xFFFF_FFFF_FFFF_FFFF,
            ),
            CrcStandard::Crc64Redis => (
                64,
                0xAD93_D235_94C9_35A9,
                0x0000_0000_0000_0000,
                true,
                true,
                0x0000_0000_0000_0000,
            ),
            CrcStandard::Crc64We => (
                64,
                0x42F0_E1EB_A9EA_3693,
                0xFFFF_FFFF_FFFF_FFFF,
                false,
                false,
                0xFFFF_FFFF_FFFF_FFFF,
            ),
            CrcStandard::Crc64Xz => (
                64,
                0x42F0_E1EB_A9EA_3693,
                0xFFFF_FFFF_FFFF_FFFF,
                true,
                true,
                0xFFFF_FFFF_FFFF_FFFF,
            ),
        };
        CrcConfig::new_unchecked(bits, polynomial, initial_value, reflect_in, reflect_out, xor_out)
    }

    /// Returns the published check value: the CRC of the ASCII bytes `"123456789"`.
    pub const fn check(self) -> u64 {
        match self {
            CrcStandard::Crc3Gsm => 0x4,
            CrcStandard::Crc3Rohc => 0x6,
            CrcStandard::Crc4G704 => 0x7,
            CrcStandard::Crc4Interlaken => 0xB,
            CrcStandard::Crc5EpcC1g2 => 0x00,
            CrcStandard::Crc5G704 => 0x07,
            CrcStandard::Crc5Usb => 0x19,
            CrcStandard::Crc6Cdma2000A => 0x0D,
            CrcStandard::Crc6Cdma2000B => 0x3B,
            CrcStandard::Crc6Darc => 0x26,
            CrcStandard::Crc6G704 => 0x06,
            CrcStandard::Crc6Gsm => 0x13,
            CrcStandard::Crc7Mmc => 0x75,
            CrcStandard::Crc7Rohc => 0x53,
            CrcStandard::Crc7Umts => 0x61,
            CrcStandard::Crc8Autosar => 0xDF,
            CrcStandard::Crc8Bluetooth => 0x26,
            CrcStandard::Crc8Cdma2000 => 0xDA,
            CrcStandard::Crc8Darc => 0x15,
            CrcStandard::Crc8DvbS2 => 0xBC,
            CrcStandard::Crc8GsmA => 0x37,
            CrcStandard::Crc8GsmB => 0x94,
            CrcStandard::Crc8I4321 => 0xA1,
            CrcStandard::Crc8ICode => 0x7E,
            CrcStandard::Crc8Lte => 0xEA,
            CrcStandard::Crc8MaximDow => 0xA1,
            CrcStandard::Crc8MifareMad => 0x99,
            CrcStandard::Crc8Nrsc5 => 0xF7,
            CrcStandard::Crc8Opensafety => 0x3E,
            CrcStandard::Crc8Rohc => 0xD0,
            CrcStandard::Crc8SaeJ1850 => 0x4B,
            CrcStandard::Crc8Smbus => 0xF4,
            CrcStandard::Crc8Tech3250 => 0x97,
            CrcStandard::Crc8Wcdma => 0x25,
            CrcStandard::Crc10Atm => 0x199,
            CrcStandard::Crc10Cdma2000 => 0x233,
            CrcStandard::Crc10Gsm => 0x12A,
            CrcStandard::Crc11Flexray => 0x5A3,
            CrcStandard::Crc11Umts => 0x061,
            CrcStandard::Crc12Cdma2000 => 0xD4D,
            CrcStandard::Crc12Dect => 0xF5B,
            CrcStandard::Crc12Gsm => 0xB34,
            CrcStandard::Crc12Umts => 0xDAF,
            CrcStandard::Crc13Bbc => 0x04FA,
            CrcStandard::Crc14Darc => 0x082D,
            CrcStandard::Crc14Gsm => 0x30AE,
            CrcStandard::Crc15Can => 0x059E,
            CrcStandard::Crc15Mpt1327 => 0x2566,
            CrcStandard::Crc16Arc => 0xBB3D,
            CrcStandard::Crc16Cdma2000 => 0x4C06,
            CrcStandard::Crc16Cms => 0xAEE7,
            CrcStandard::Crc16Dds110 => 0x9ECF,
            CrcStandard::Crc16DectR => 0x007E,
            CrcStandard::Crc16DectX => 0x007F,
            CrcStandard::Crc16Dnp => 0xEA82,
            CrcStandard::Crc16En13757 => 0xC2B7,
            CrcStandard::Crc16Genibus => 0xD64E,
            CrcStandard::Crc16Gsm => 0xCE3C,
            CrcStandard::Crc16Ibm3740 => 0x29B1,
            CrcStandard::Crc16IbmSdlc => 0x906E,
            CrcStandard::Crc16IsoIec144433A => 0xBF05,
            CrcStandard::Crc16Kermit => 0x2189,
            CrcStandard::Crc16Lj1200 => 0xBDF4,
            CrcStandard::Crc16MaximDow => 0x44C2,
            CrcStandard::Crc16Mcrf4xx => 0x6F91,
            CrcStandard::Crc16Modbus => 0x4B37,
            CrcStandard::Crc16Nrsc5 => 0xA066,
            CrcStandard::Crc16OpensafetyA => 0x5D38,
            CrcStandard::Crc16OpensafetyB => 0x20FE,
            CrcStandard::Crc16Profibus => 0xA819,
            CrcStandard::Crc16Riello => 0x63D0,
            CrcStandard::Crc16SpiFujitsu => 0xE5CC,
            CrcStandard::Crc16T10Dif => 0xD0DB,
            CrcStandard::Crc16Teledisk => 0x0FB3,
            CrcStandard::Crc16Tms37157 => 0x26B1,
            CrcStandard::Crc16Umts => 0xFEE8,
            CrcStandard::Crc16Usb => 0xB4C8,
            CrcStandard::Crc16Xmodem => 0x31C3,
            CrcStandard::Crc17CanFd => 0x0_4F03,
            CrcStandard::Crc21CanFd => 0x0E_D841,
            CrcStandard::Crc24Ble => 0xC2_5A56,
            CrcStandard::Crc24FlexrayA => 0x79_79BD,
            CrcStandard::Crc24FlexrayB => 0x1F_23B8,
            CrcStandard::Crc24Interlaken => 0xB4_F3E6,
            CrcStandard::Crc24LteA => 0xCD_E703,
            CrcStandard::Crc24LteB => 0x23_EF52,
            CrcStandard::Crc24Openpgp => 0x21_CF02,
            CrcStandard::Crc24Os9 => 0x20_0FA5,
            CrcStandard::Crc30Cdma => 0x04C3_4ABF,
            CrcStandard::Crc31Philips => 0x0CE9_E46C,
            CrcStandard::Crc32Aixm => 0x3010_BF7F,
            CrcStandard::Crc32Autosar => 0x1697_D06A,
            CrcStandard::Crc32Base91D => 0x8731_5576,
            CrcStandard::Crc32Bzip2 => 0xFC89_1918,
            CrcStandard::Crc32CdRomEdc => 0x6EC2_EDC4,
            CrcStandard::Crc32Cksum => 0x765E_7680,
            CrcStandard::Crc32Iscsi => 0xE306_9283,
            CrcStandard::Crc32IsoHdlc => 0xCBF4_3926,
            CrcStandard::Crc32Jamcrc => 0x340B_C6D9,
            CrcStandard::Crc32Mef => 0xD2C2_2F51,
            CrcStandard::Crc32Mpeg2 => 0x0376_E6E7,
            CrcStandard::Crc32Xfer => 0xBD0B_E338,
            CrcStandard::Crc40Gsm => 0xD4_164F_C646,
            CrcStandard::Crc64Ecma182 => 0x6C40_DF5F_0B49_7347,
            CrcStandard::Crc64GoIso => 0xB909_56C7_75A4_1001,
            CrcStandard::Crc64Ms => 0x75D4_B74F_024E_CEEA,
            CrcStandard::Crc64Nvme => 0xAE8B_1486_0A79_9888,
            CrcStandard::Crc64Redis => 0xE9C6_D914_C4B8_D9CA,
            CrcStandard::Crc64We => 0x62EC_59E3_F1A4_F00A,
            CrcStandard::Crc64Xz => 0x995D_C9BB_DF19_39FA,
        }
    }

    /// Looks a standard up by canonical name or alias.
    ///
    /// Matching ignores ASCII case, surrounding whitespace, and treats `_`
    /// like `-`.
    pub fn from_name(name: &str) -> Option<CrcStandard> {
        REGISTRY.get(&normalize(name)).copied()
    }
}

/// Common alternative names, mapped to the catalogue entry they denote.
const ALIASES: &[(&str, CrcStandard)] = &[
    ("CRC-3", CrcStandard::Crc3Gsm),
    ("CRC-4/ITU", CrcStandard::Crc4G704),
    ("CRC-5/EPC", CrcStandard::Crc5EpcC1g2),
    ("CRC-5/ITU", CrcStandard::Crc5G704),
    ("CRC-6/ITU", CrcStandard::Crc6G704),
    ("CRC-7", CrcStandard::Crc7Mmc),
    ("CRC-8", CrcStandard::Crc8Smbus),
    ("CRC-8/AES", CrcStandard::Crc8Tech3250),
    ("CRC-8/EBU", CrcStandard::Crc8Tech3250),
    ("CRC-8/ITU", CrcStandard::Crc8I4321),
    ("CRC-8/MAXIM", CrcStandard::Crc8MaximDow),
    ("DOW-CRC", CrcStandard::Crc8MaximDow),
    ("CRC-10", CrcStandard::Crc10Atm),
    ("CRC-10/I-610", CrcStandard::Crc10Atm),
    ("CRC-11", CrcStandard::Crc11Flexray),
    ("CRC-12/3GPP", CrcStandard::Crc12Umts),
    ("CRC-12/X-25", CrcStandard::Crc12Dect),
    ("CRC-15", CrcStandard::Crc15Can),
    ("CRC-16", CrcStandard::Crc16Arc),
    ("ARC", CrcStandard::Crc16Arc),
    ("CRC-16/LHA", CrcStandard::Crc16Arc),
    ("CRC-IBM", CrcStandard::Crc16Arc),
    ("CRC-16/CCITT-FALSE", CrcStandard::Crc16Ibm3740),
    ("CRC-16/AUTOSAR", CrcStandard::Crc16Ibm3740),
    ("CRC-16/CCITT", CrcStandard::Crc16Kermit),
    ("CRC-16/CCITT-TRUE", CrcStandard::Crc16Kermit),
    ("CRC-16/V-41-LSB", CrcStandard::Crc16Kermit),
    ("CRC-CCITT", CrcStandard::Crc16Kermit),
    ("KERMIT", CrcStandard::Crc16Kermit),
    ("CRC-16/X-25", CrcStandard::Crc16IbmSdlc),
    ("CRC-16/ISO-HDLC", CrcStandard::Crc16IbmSdlc),
    ("CRC-B", CrcStandard::Crc16IbmSdlc),
    ("X-25", CrcStandard::Crc16IbmSdlc),
    ("CRC-A", CrcStandard::Crc16IsoIec144433A),
    ("CRC-16/MAXIM", CrcStandard::Crc16MaximDow),
    ("MODBUS", CrcStandard::Crc16Modbus),
    ("CRC-16/AUG-CCITT", CrcStandard::Crc16SpiFujitsu),
    ("CRC-16/BUYPASS", CrcStandard::Crc16Umts),
    ("CRC-16/VERIFONE", CrcStandard::Crc16Umts),
    ("CRC-16/ACORN", CrcStandard::Crc16Xmodem),
    ("CRC-16/LTE", CrcStandard::Crc16Xmodem),
    ("CRC-16/V-41-MSB", CrcStandard::Crc16Xmodem),
    ("XMODEM", CrcStandard::Crc16Xmodem),
    ("ZMODEM", CrcStandard::Crc16Xmodem),
    ("CRC-24", CrcStandard::Crc24Openpgp),
    ("CRC-32", CrcStandard::Crc32IsoHdlc),
    ("CRC-32/ADCCP", CrcStandard::Crc32IsoHdlc),
    ("CRC-32/V-42", CrcStandard::Crc32IsoHdlc),
    ("CRC-32/XZ", CrcStandard::Crc32IsoHdlc),
    ("PKZIP", CrcStandard::Crc32IsoHdlc),
    ("CRC-32C", CrcStandard::Crc32Iscsi),
    ("CRC-32/BASE91-C", CrcStandard::Crc32Iscsi),
    ("CRC-32/CASTAGNOLI", CrcStandard::Crc32Iscsi),
    ("CRC-32/INTERLAKEN", CrcStandard::Crc32Iscsi),
    ("CRC-32D", CrcStandard::Crc32Base91D),
    ("CRC-32/AAL5", CrcStandard::Crc32Bzip2),
    ("CRC-32/DECT-B", CrcStandard::Crc32Bzip2),
    ("B-CRC-32", CrcStandard::Crc32Bzip2),
    ("CRC-32/POSIX", CrcStandard::Crc32Cksum),
    ("CKSUM", CrcStandard::Crc32Cksum),
    ("JAMCRC", CrcStandard::Crc32Jamcrc),
    ("CRC-32Q", CrcStandard::Crc32Aixm),
    ("XFER", CrcStandard::Crc32Xfer),
    ("CRC-64", CrcStandard::Crc64Ecma182),
    ("CRC-64/GO-ECMA", CrcStandard::Crc64Xz),
];

static REGISTRY: Lazy<HashMap<String, CrcStandard>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(CrcStandard::ALL.len() + ALIASES.len());
    for &standard in CrcStandard::ALL {
        map.insert(normalize(standard.name()), standard);
    }
    for &(alias, standard) in ALIASES {
        map.insert(normalize(alias), standard);
    }
    log::debug!(
        "crc registry initialized: {} standards, {} names",
        CrcStandard::ALL.len(),
        map.len()
    );
    map
});

fn normalize(name: &str) -> String {
    name.trim().to_ascii_uppercase().replace('_', "-")
}
