/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Limb detection: finding the space/planet transition in an image
//! (spec.md SS4.4).

pub mod components;
pub mod error;
pub mod threshold;

#[cfg(feature = "convolutional-edge")]
pub mod convolutional;

pub use components::{connected_components, Component};
pub use error::EdgeError;
pub use threshold::SimpleThresholdDetector;

#[cfg(feature = "convolutional-edge")]
pub use convolutional::{ConvolutionalDetector, Mask};
