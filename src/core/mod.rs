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

//! Core rasterizer data-layer components
//!
//! Dependency order, leaves first: [`color`] depends on nothing,
//! [`framebuffer`] depends on color, [`triangle`] (with [`math`]) stands
//! alone. An external rasterizer consumes all three.

pub mod color;
pub mod error;
pub mod framebuffer;
pub mod math;
pub mod triangle;

// Public re-exports
pub use color::Color;
pub use error::{RasterError, Result};
pub use framebuffer::{AddressMode, Framebuffer};
pub use math::{Vec2, Vec3};
pub use triangle::Triangle;
