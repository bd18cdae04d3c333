/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use zerocopy::byteorder::big_endian::U32 as BeU32;
use zerocopy::{AsBytes, FromBytes, FromZeroes};

use super::error::DataFileError;

pub const MAGIC: [u8; 4] = *b"FOUN";
pub const HEADER_LEN: usize = 16;
pub const CRC_COVERED_LEN: usize = 12;

/// The on-disk, big-endian layout of a data file header (spec.md SS4.8).
#[derive(FromZeroes, FromBytes, AsBytes, Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub(crate) struct RawHeader {
    magic: [u8; 4],
    version: BeU32,
    num_positions: BeU32,
    crc: BeU32,
}

/// The host-endian, in-memory representation of a data file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataFileHeader {
    pub version: u32,
    pub num_positions: u32,
}

impl DataFileHeader {
    pub fn new(num_positions: u32) -> Self {
        Self { version: 1, num_positions }
    }

    /// Parses and validates a header from the first [`HEADER_LEN`] bytes
    /// of a data file.
    pub fn read(bytes: &[u8]) -> Result<Self, DataFileError> {
        if bytes.len() < HEADER_LEN {
            return Err(DataFileError::InvalidHeader);
        }
        let raw = RawHeader::read_from(&bytes[..HEADER_LEN]).ok_or(DataFileError::InvalidHeader)?;
        if raw.magic != MAGIC {
            return Err(DataFileError::InvalidMagic);
        }

        let expected_crc = crc32fast::hash(&bytes[..CRC_COVERED_LEN]);
        if u32::from(raw.crc) != expected_crc {
            return Err(DataFileError::ChecksumMismatch);
        }

        Ok(Self { version: raw.version.into(), num_positions: raw.num_positions.into() })
    }

    /// Serializes this header to its [`HEADER_LEN`]-byte on-disk form,
    /// recomputing the CRC over the first [`CRC_COVERED_LEN`] bytes.
    pub fn to_bytes(self) -> [u8; HEADER_LEN] {
        let mut raw = RawHeader {
            magic: MAGIC,
            version: self.version.into(),
            num_positions: self.num_positions.into(),
            crc: 0u32.into(),
        };
        let covered = &raw.as_bytes()[..CRC_COVERED_LEN];
        let crc = crc32fast::hash(covered);
        raw.crc = crc.into();

        let mut out = [0u8; HEADER_LEN];
        out.copy_from_slice(raw.as_bytes());
        out
    }
}

#[cfg(test)]
mod ut_header {
    use super::*;

    #[test]
    fn round_trips() {
        let header = DataFileHeader::new(3);
        let bytes = header.to_bytes();
        let back = DataFileHeader::read(&bytes).unwrap();
        assert_eq!(header, back);
    }

    #[test]
    fn rejects_bad_magic() {
        let mut bytes = DataFileHeader::new(1).to_bytes();
        bytes[0] = b'X';
        assert_eq!(DataFileHeader::read(&bytes).unwrap_err(), DataFileError::InvalidMagic);
    }

    #[test]
    fn rejects_truncated_header() {
        let bytes = [0u8; 10];
        assert_eq!(DataFileHeader::read(&bytes).unwrap_err(), DataFileError::InvalidHeader);
    }

    #[test]
    fn rejects_corrupted_crc() {
        let mut bytes = DataFileHeader::new(3).to_bytes();
        bytes[8] ^= 0xFF;
        assert_eq!(DataFileHeader::read(&bytes).unwrap_err(), DataFileError::ChecksumMismatch);
    }
}
