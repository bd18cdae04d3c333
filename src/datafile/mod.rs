/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The serialized data file format: header, relative attitude, and a run
//! of location records (spec.md SS4.8).

pub mod error;
pub mod header;
pub mod record;

pub use error::DataFileError;
pub use header::DataFileHeader;
pub use record::LocationRecord;

use std::fs::File;
use std::io::Write;
use std::path::Path;

use memmap2::Mmap;

use crate::math::rotation::Quaternion;

/// A fully parsed data file: header, relative attitude, and positions.
#[derive(Debug, Clone, PartialEq)]
pub struct DataFile {
    pub header: DataFileHeader,
    pub relative_attitude: Quaternion,
    pub positions: Vec<LocationRecord>,
}

impl DataFile {
    pub fn new(relative_attitude: Quaternion, positions: Vec<LocationRecord>) -> Self {
        let header = DataFileHeader::new(positions.len() as u32);
        Self { header, relative_attitude, positions }
    }

    /// Serializes this file to its on-disk byte layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(header::HEADER_LEN + record::QUATERNION_LEN + self.positions.len() * record::RECORD_LEN);
        out.extend_from_slice(&self.header.to_bytes());
        out.extend_from_slice(&record::quaternion_to_bytes(&self.relative_attitude));
        for position in &self.positions {
            out.extend_from_slice(&position.to_bytes());
        }
        out
    }

    /// Parses a data file from a byte buffer (e.g. a memory-mapped file).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DataFileError> {
        let header = DataFileHeader::read(bytes)?;

        let quat_start = header::HEADER_LEN;
        let quat_end = quat_start + record::QUATERNION_LEN;
        if bytes.len() < quat_end {
            return Err(DataFileError::TruncatedBody { expected: header.num_positions, found: 0 });
        }
        let relative_attitude = record::quaternion_from_bytes(&bytes[quat_start..quat_end]);

        let body = &bytes[quat_end..];
        let available_records = body.len() / record::RECORD_LEN;
        if (available_records as u32) < header.num_positions {
            return Err(DataFileError::TruncatedBody { expected: header.num_positions, found: available_records as u32 });
        }

        let positions = (0..header.num_positions as usize)
            .map(|i| {
                let start = i * record::RECORD_LEN;
                LocationRecord::from_bytes(&body[start..start + record::RECORD_LEN])
            })
            .collect();

        Ok(Self { header, relative_attitude, positions })
    }

    /// Reads a data file by memory-mapping `path`.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, std::io::Error> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        Self::from_bytes(&mmap).map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))
    }

    /// Writes this data file to `path` atomically: writes to a sibling
    /// temp file, then renames over the destination (spec.md SS7).
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), std::io::Error> {
        let path = path.as_ref();
        let temp_path = path.with_extension("tmp");
        {
            let mut file = File::create(&temp_path)?;
            file.write_all(&self.to_bytes())?;
            file.sync_all()?;
        }
        std::fs::rename(&temp_path, path)
    }
}

#[cfg(test)]
mod ut_datafile {
    use super::*;

    #[test]
    fn round_trips_through_bytes() {
        let positions = vec![LocationRecord::new(crate::math::Vec3::new(1.0, 2.0, 3.0), 10.0)];
        let file = DataFile::new(Quaternion::identity(), positions);
        let bytes = file.to_bytes();
        let back = DataFile::from_bytes(&bytes).unwrap();
        assert_eq!(file, back);
    }

    #[test]
    fn detects_truncated_body() {
        let positions = vec![LocationRecord::new(crate::math::Vec3::new(1.0, 2.0, 3.0), 10.0)];
        let file = DataFile::new(Quaternion::identity(), positions);
        let mut bytes = file.to_bytes();
        bytes.truncate(bytes.len() - 5);
        assert!(matches!(DataFile::from_bytes(&bytes), Err(DataFileError::TruncatedBody { .. })));
    }
}
