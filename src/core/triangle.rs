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

//! Triangle geometry primitive
//!
//! A [`Triangle`] pairs three vertex positions with three texture
//! coordinates. It carries no rasterization logic of its own; an external
//! rasterizer transforms the vertices and scan-converts the result.

use std::ops::{Add, Mul};

use super::math::{Vec2, Vec3};

/// Three vertex positions with paired texture coordinates
///
/// Position-to-UV correspondence is by name: `a` pairs with `a_uv`, and so
/// on. Plain value type; copying a triangle copies all six fields.
///
/// # Examples
///
/// ```
/// use rastrix::core::{Triangle, Vec2, Vec3};
///
/// let tri = Triangle {
///     a: Vec3::new(0.0, 0.0, 0.0),
///     b: Vec3::new(1.0, 0.0, 0.0),
///     c: Vec3::new(0.0, 1.0, 0.0),
///     a_uv: Vec2::new(0.0, 0.0),
///     b_uv: Vec2::new(1.0, 0.0),
///     c_uv: Vec2::new(0.0, 1.0),
/// };
///
/// let moved = tri + Vec3::new(1.0, 0.0, 0.0);
/// assert_eq!(moved.a.x, 1.0);
/// assert_eq!(moved.a_uv, tri.a_uv);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Triangle {
    /// First vertex position
    pub a: Vec3,
    /// Second vertex position
    pub b: Vec3,
    /// Third vertex position
    pub c: Vec3,
    /// Texture coordinate paired with `a`
    pub a_uv: Vec2,
    /// Texture coordinate paired with `b`
    pub b_uv: Vec2,
    /// Texture coordinate paired with `c`
    pub c_uv: Vec2,
}

/// Translate all three vertices; UVs are copied unchanged
impl Add<Vec3> for Triangle {
    type Output = Triangle;

    fn add(mut self, offset: Vec3) -> Triangle {
        self.a = self.a + offset;
        self.b = self.b + offset;
        self.c = self.c + offset;
        self
    }
}

/// Component-wise scale of all three vertices; UVs are copied unchanged
impl Mul<Vec3> for Triangle {
    type Output = Triangle;

    fn mul(mut self, scale: Vec3) -> Triangle {
        self.a = self.a * scale;
        self.b = self.b * scale;
        self.c = self.c * scale;
        self
    }
}
