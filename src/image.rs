/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::errors::FoundError;

/// A decoded raster: row-major, interleaved-channel 8-bit samples
/// (spec.md SS3). Image decoding itself is delegated to the `image`
/// crate; this wraps its output in the shape the rest of the pipeline
/// expects.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub bytes: Vec<u8>,
}

impl Image {
    pub fn new(width: u32, height: u32, channels: u8, bytes: Vec<u8>) -> Self {
        Self { width, height, channels, bytes }
    }

    /// Decodes a raster from any of the encodings the `image` crate
    /// supports (JPEG, PNG, TGA, BMP, GIF, HDR, PNM cover the
    /// JPG/PNG/TGA/BMP/GIF/HDR/PIC family named in spec.md SS7).
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, FoundError> {
        let path = path.as_ref();
        let decoded = ::image::open(path).map_err(|err| FoundError::ImageDecode {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;
        let gray = decoded.to_luma8();
        let (width, height) = (gray.width(), gray.height());
        Ok(Self { width, height, channels: 1, bytes: gray.into_raw() })
    }

    /// The sample at `(x, y)` on channel 0, the channel the threshold
    /// detector operates on.
    pub fn sample(&self, x: u32, y: u32) -> u8 {
        let idx = (y as usize * self.width as usize + x as usize) * self.channels as usize;
        self.bytes[idx]
    }

    pub fn linear_index(&self, x: u32, y: u32) -> u64 {
        y as u64 * self.width as u64 + x as u64
    }

    pub fn len_pixels(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

#[cfg(test)]
mod ut_image {
    use super::*;

    #[test]
    fn samples_channel_zero() {
        let img = Image::new(2, 2, 1, vec![10, 20, 30, 40]);
        assert_eq!(img.sample(1, 1), 40);
    }

    #[test]
    fn linear_index_is_row_major() {
        let img = Image::new(4, 3, 1, vec![0; 12]);
        assert_eq!(img.linear_index(2, 1), 6);
    }
}
