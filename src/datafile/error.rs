/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use snafu::Snafu;

/// Errors raised while reading or writing a data file (spec.md SS4.8).
#[derive(Debug, Snafu, PartialEq, Eq, Clone)]
pub enum DataFileError {
    /// The first four bytes were not `"FOUN"`.
    #[snafu(display("data file magic bytes do not match \"FOUN\""))]
    InvalidMagic,

    /// Fewer than 16 bytes were available for the header.
    #[snafu(display("data file header is truncated"))]
    InvalidHeader,

    /// The stored CRC does not match the recomputed CRC over the first 12
    /// header bytes.
    #[snafu(display("data file checksum mismatch"))]
    ChecksumMismatch,

    /// The body was shorter than `num_positions` location records.
    #[snafu(display("data file body is truncated: expected {expected} records, found {found}"))]
    TruncatedBody { expected: u32, found: u32 },
}
