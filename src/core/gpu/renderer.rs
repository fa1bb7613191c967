// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 lumen-core contributors
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

//! Renderer abstraction
//!
//! The GPU decodes draw commands into device-independent primitives
//! and hands them to a [`Renderer`] implementation. This keeps the
//! command decoding testable and lets frontends plug in software or
//! hardware rasterizers.

use super::{Field, TextureDepth};

/// Position in VRAM, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    /// Parse a position from a GP0 parameter word
    ///
    /// - Bits 0-15: X coordinate (signed)
    /// - Bits 16-31: Y coordinate (signed)
    pub fn from_word(word: u32) -> Position {
        let x = word as i16;
        let y = (word >> 16) as i16;

        Position { x, y }
    }
}

/// 24-bit RGB color used in GPU commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Parse a color from a GP0 command word
    ///
    /// - Bits 0-7: Red
    /// - Bits 8-15: Green
    /// - Bits 16-23: Blue
    pub fn from_word(word: u32) -> Color {
        let r = word as u8;
        let g = (word >> 8) as u8;
        let b = (word >> 16) as u8;

        Color { r, g, b }
    }
}

/// Texture coordinates within the current texture page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TexCoord {
    pub x: u8,
    pub y: u8,
}

impl TexCoord {
    /// Parse texture coordinates from the low half of a GP0
    /// parameter word
    pub fn from_word(word: u32) -> TexCoord {
        let x = word as u8;
        let y = (word >> 8) as u8;

        TexCoord { x, y }
    }
}

/// A single vertex of a draw command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Vertex {
    pub position: Position,
    pub color: Color,
    pub texcoord: TexCoord,
}

/// Texture mapping parameters of a draw command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureAttrs {
    /// Texture page base X coordinate, in units of 64 pixels
    pub page_x: u8,
    /// Texture page base Y coordinate, in units of 256 lines
    pub page_y: u8,
    /// Pixel format of the texture page
    pub depth: TextureDepth,
    /// Color lookup table X coordinate, in units of 16 pixels
    pub clut_x: u16,
    /// Color lookup table Y coordinate
    pub clut_y: u16,
    /// True if the texels are modulated with the vertex colors
    pub blended: bool,
}

/// Rasterization parameters shared by a whole draw command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawAttrs {
    /// Semi-transparency mode, `None` for opaque draws
    pub semi_transparency: Option<u8>,
    /// Texture mapping setup, `None` for untextured draws
    pub texture: Option<TextureAttrs>,
    /// True if dithering is applied from 24 to 15 bits
    pub dithering: bool,
    /// Force the mask bit of every drawn pixel
    pub force_set_mask_bit: bool,
    /// Don't overwrite pixels whose mask bit is set
    pub preserve_masked_pixels: bool,
}

impl DrawAttrs {
    /// Attributes of a plain opaque untextured draw
    pub fn opaque(force_set_mask_bit: bool, preserve_masked_pixels: bool) -> DrawAttrs {
        DrawAttrs {
            semi_transparency: None,
            texture: None,
            dithering: false,
            force_set_mask_bit,
            preserve_masked_pixels,
        }
    }
}

/// Draw command sink
///
/// The GPU state machine calls into this trait as it decodes
/// commands. Implementations are expected to be dumb: all clipping
/// parameters are forwarded through the dedicated methods.
pub trait Renderer {
    /// Set the offset applied to all vertex coordinates
    fn set_draw_offset(&mut self, x: i16, y: i16);

    /// Set the clipping rectangle, both corners inclusive
    fn set_drawing_area(&mut self, left: u16, top: u16, right: u16, bottom: u16);

    /// Draw a single triangle
    fn push_triangle(&mut self, vertices: &[Vertex; 3], attrs: &DrawAttrs);

    /// Draw a quad as two triangles sharing vertices 1 and 2
    fn push_quad(&mut self, vertices: &[Vertex; 4], attrs: &DrawAttrs);

    /// Fill a VRAM rectangle with a solid color, bypassing the mask
    /// settings
    fn fill_rect(&mut self, color: Color, top_left: (u16, u16), size: (u16, u16));

    /// Start a CPU to VRAM image transfer into the given rectangle
    fn begin_image_load(&mut self, top_left: (u16, u16), size: (u16, u16));

    /// Receive a word of image data for the active transfer
    fn image_load_word(&mut self, word: u32);

    /// Finish the active CPU to VRAM transfer
    fn end_image_load(&mut self);

    /// Start a VRAM to CPU image transfer from the given rectangle
    fn image_store(&mut self, top_left: (u16, u16), size: (u16, u16));

    /// A field has been fully drawn and can be displayed
    fn present_field(&mut self, field: Field);
}
