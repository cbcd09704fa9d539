// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 rastrix contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for the rasterizer data layer
//!
//! All fallible operations in this crate return [`Result<T>`], an alias for
//! `Result<T, RasterError>`.

use thiserror::Error;

/// Errors produced by framebuffer construction and image loading
///
/// Out-of-range pixel access is deliberately *not* represented here: sampling
/// outside the valid texel range is a caller-contract violation, not a
/// recoverable error (see [`crate::core::framebuffer::Framebuffer::get`]).
#[derive(Debug, Error)]
pub enum RasterError {
    /// Framebuffer constructed with a zero-sized dimension
    #[error("invalid framebuffer dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width in pixels
        width: usize,
        /// Requested height in pixels
        height: usize,
    },

    /// Image file could not be opened or decoded
    #[error("failed to load image '{path}'")]
    ImageLoad {
        /// Path of the image that failed to load
        path: String,
        /// Underlying decoder error
        #[source]
        source: image::ImageError,
    },
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, RasterError>;
