/*
 * FOUND
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Error types for every subsystem, unified under [`FoundError`].

use snafu::prelude::*;
use std::io::ErrorKind as IOErrorKind;

use crate::datafile::DataFileError;
use crate::distance::DistanceError;
use crate::edge::EdgeError;
use crate::orbit::OrbitError;
use crate::pipeline::PipelineError;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum FoundError {
    #[snafu(display("{action} failed: {source}"))]
    Pipeline {
        action: &'static str,
        source: PipelineError,
    },
    #[snafu(display("edge detection failed: {source}"))]
    Edge { source: EdgeError },
    #[snafu(display("distance determination failed: {source}"))]
    Distance { source: DistanceError },
    #[snafu(display("data file error: {source}"))]
    DataFile { source: DataFileError },
    #[snafu(display("orbit propagation failed: {source}"))]
    Orbit { source: OrbitError },
    #[snafu(display("invalid argument: {what}"))]
    InvalidArgument { what: String },
    #[snafu(display("I/O failure reading/writing {path}: {source}"))]
    Io {
        path: String,
        #[snafu(source(from(std::io::Error, Box::new)))]
        source: Box<std::io::Error>,
    },
    #[snafu(display("could not decode image {path}: {reason}"))]
    ImageDecode { path: String, reason: String },
}

impl From<PipelineError> for FoundError {
    fn from(source: PipelineError) -> Self {
        FoundError::Pipeline {
            action: "pipeline execution",
            source,
        }
    }
}

impl From<EdgeError> for FoundError {
    fn from(source: EdgeError) -> Self {
        FoundError::Edge { source }
    }
}

impl From<DistanceError> for FoundError {
    fn from(source: DistanceError) -> Self {
        FoundError::Distance { source }
    }
}

impl From<DataFileError> for FoundError {
    fn from(source: DataFileError) -> Self {
        FoundError::DataFile { source }
    }
}

impl From<OrbitError> for FoundError {
    fn from(source: OrbitError) -> Self {
        FoundError::Orbit { source }
    }
}

impl From<IOErrorKind> for FoundError {
    fn from(kind: IOErrorKind) -> Self {
        FoundError::Io {
            path: String::new(),
            source: Box::new(std::io::Error::from(kind)),
        }
    }
}

pub type FoundResult<T> = Result<T, FoundError>;
