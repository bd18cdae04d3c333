/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Two-body orbit propagation and classical orbital element conversions
//! (spec.md SS4.9).

pub mod elements;
pub mod error;
pub mod propagate;

pub use elements::{altitude_to_specific_angular_momentum, elements_to_state_vector, state_vector_to_elements, OrbitalElements};
pub use error::OrbitError;
pub use propagate::OrbitPropagator;
