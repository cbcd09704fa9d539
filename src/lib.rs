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

//! rastrix: primitive data layer for a software 3D rasterizer
//!
//! This crate provides the storage primitives a software rasterizer builds
//! on: a packed 32-bit color with aliased channel/integer/float views, a
//! pinned pixel framebuffer that doubles as a depth buffer, and a triangle
//! geometry primitive with affine vertex transforms.
//!
//! Rasterization itself (scan conversion, clipping, shading) lives in the
//! consuming layer, as does display/presentation. Image file parsing is
//! delegated to the `image` crate.
//!
//! # Example
//!
//! ```
//! use rastrix::core::{Color, Framebuffer};
//!
//! let mut color_buffer = Framebuffer::new(320, 240)?;
//! let mut depth_buffer = Framebuffer::new(320, 240)?;
//! depth_buffer.fill(Color::DEPTH_ZERO);
//!
//! // Composite a half-transparent red pixel over the cleared background
//! let dest = color_buffer.pixel(10, 10);
//! let blended = Color::blend(dest, Color::new(255, 0, 0, 128));
//! color_buffer.set_pixel(10, 10, blended);
//! # Ok::<(), rastrix::RasterError>(())
//! ```
//!
//! # Modules
//!
//! - [`core::color`]: packed color / depth element
//! - [`core::framebuffer`]: pinned pixel store with UV sampling
//! - [`core::triangle`]: triangle primitive and vertex transforms
//! - [`core::math`]: minimal vector value types
//!
//! # Error Handling
//!
//! All fallible operations return [`core::error::Result<T>`], an alias for
//! `Result<T, RasterError>`.

pub mod core;

// Re-export commonly used types
pub use core::error::{RasterError, Result};
pub use core::{AddressMode, Color, Framebuffer, Triangle, Vec2, Vec3};
