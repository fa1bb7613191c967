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

//! GP0 draw commands
//!
//! Decodes polygon, rectangle and fill commands into renderer
//! primitives. Quads are passed along as four vertices, splitting
//! them into triangles is the renderer's job.

use super::super::renderer::{Color, DrawAttrs, Position, Renderer, TexCoord, TextureAttrs, Vertex};
use super::super::types::TextureDepth;
use super::super::Gpu;

/// Decode the texture page attributes from the upper half of a GP0
/// parameter word
fn texpage_attrs(word: u32, clut: u32, blended: bool) -> TextureAttrs {
    let page = word >> 16;

    let depth = match (page >> 7) & 3 {
        0 => TextureDepth::T4Bit,
        1 => TextureDepth::T8Bit,
        _ => TextureDepth::T15Bit,
    };

    TextureAttrs {
        page_x: (page & 0xf) as u8,
        page_y: ((page >> 4) & 1) as u8,
        depth,
        clut_x: (clut & 0x3f) as u16,
        clut_y: ((clut >> 6) & 0x1ff) as u16,
        blended,
    }
}

impl Gpu {
    fn draw_attrs(&self) -> DrawAttrs {
        DrawAttrs::opaque(self.force_set_mask_bit, self.preserve_masked_pixels)
    }

    /// GP0(0x28): Monochrome Opaque Quadrilateral
    pub(in crate::core::gpu) fn gp0_quad_mono_opaque(&mut self, renderer: &mut dyn Renderer) {
        let color = Color::from_word(self.gp0_buffer[0]);

        let mut vertices = [Vertex::default(); 4];

        for (i, vertex) in vertices.iter_mut().enumerate() {
            vertex.position = Position::from_word(self.gp0_buffer[1 + i]);
            vertex.color = color;
        }

        renderer.push_quad(&vertices, &self.draw_attrs());
    }

    /// GP0(0x2c): Textured Opaque Quadrilateral, texture blended with
    /// the command color
    pub(in crate::core::gpu) fn gp0_quad_texture_blend_opaque(
        &mut self,
        renderer: &mut dyn Renderer,
    ) {
        self.textured_quad(renderer, true);
    }

    /// GP0(0x2d): Textured Opaque Quadrilateral, raw texture
    pub(in crate::core::gpu) fn gp0_quad_texture_raw_opaque(
        &mut self,
        renderer: &mut dyn Renderer,
    ) {
        self.textured_quad(renderer, false);
    }

    fn textured_quad(&mut self, renderer: &mut dyn Renderer, blended: bool) {
        let color = Color::from_word(self.gp0_buffer[0]);

        // The color lookup table rides in the first texcoord word,
        // the texture page in the second
        let clut = self.gp0_buffer[2] >> 16;

        let texture = texpage_attrs(self.gp0_buffer[4], clut, blended);

        let mut vertices = [Vertex::default(); 4];

        for (i, vertex) in vertices.iter_mut().enumerate() {
            vertex.position = Position::from_word(self.gp0_buffer[1 + 2 * i]);
            vertex.texcoord = TexCoord::from_word(self.gp0_buffer[2 + 2 * i]);
            vertex.color = color;
        }

        let attrs = DrawAttrs {
            texture: Some(texture),
            ..self.draw_attrs()
        };

        renderer.push_quad(&vertices, &attrs);
    }

    /// GP0(0x30): Shaded Opaque Triangle
    pub(in crate::core::gpu) fn gp0_triangle_shaded_opaque(&mut self, renderer: &mut dyn Renderer) {
        let mut vertices = [Vertex::default(); 3];

        for (i, vertex) in vertices.iter_mut().enumerate() {
            vertex.color = Color::from_word(self.gp0_buffer[2 * i]);
            vertex.position = Position::from_word(self.gp0_buffer[1 + 2 * i]);
        }

        let attrs = DrawAttrs {
            dithering: self.dithering,
            ..self.draw_attrs()
        };

        renderer.push_triangle(&vertices, &attrs);
    }

    /// GP0(0x38): Shaded Opaque Quadrilateral
    pub(in crate::core::gpu) fn gp0_quad_shaded_opaque(&mut self, renderer: &mut dyn Renderer) {
        let mut vertices = [Vertex::default(); 4];

        for (i, vertex) in vertices.iter_mut().enumerate() {
            vertex.color = Color::from_word(self.gp0_buffer[2 * i]);
            vertex.position = Position::from_word(self.gp0_buffer[1 + 2 * i]);
        }

        let attrs = DrawAttrs {
            dithering: self.dithering,
            ..self.draw_attrs()
        };

        renderer.push_quad(&vertices, &attrs);
    }

    /// GP0(0x65): Textured Opaque Rectangle, raw texture
    ///
    /// Rectangles have no texture page word of their own, they use
    /// the page configured through GP0(0xe1).
    pub(in crate::core::gpu) fn gp0_rect_texture_raw_opaque(
        &mut self,
        renderer: &mut dyn Renderer,
    ) {
        let color = Color::from_word(self.gp0_buffer[0]);
        let position = Position::from_word(self.gp0_buffer[1]);

        let clut = self.gp0_buffer[2] >> 16;
        let texcoord = TexCoord::from_word(self.gp0_buffer[2]);

        let size = self.gp0_buffer[3];
        let width = (size & 0x3ff) as i16;
        let height = ((size >> 16) & 0x1ff) as i16;

        let texture = TextureAttrs {
            page_x: self.page_base_x,
            page_y: self.page_base_y,
            depth: self.texture_depth,
            clut_x: (clut & 0x3f) as u16,
            clut_y: ((clut >> 6) & 0x1ff) as u16,
            blended: false,
        };

        let (u0, u1) = if self.rectangle_texture_x_flip {
            (texcoord.x, texcoord.x.wrapping_sub(width as u8))
        } else {
            (texcoord.x, texcoord.x.wrapping_add(width as u8))
        };

        let (v0, v1) = if self.rectangle_texture_y_flip {
            (texcoord.y, texcoord.y.wrapping_sub(height as u8))
        } else {
            (texcoord.y, texcoord.y.wrapping_add(height as u8))
        };

        let corner = |dx: i16, dy: i16, u: u8, v: u8| Vertex {
            position: Position {
                x: position.x.wrapping_add(dx),
                y: position.y.wrapping_add(dy),
            },
            color,
            texcoord: TexCoord { x: u, y: v },
        };

        let vertices = [
            corner(0, 0, u0, v0),
            corner(width, 0, u1, v0),
            corner(0, height, u0, v1),
            corner(width, height, u1, v1),
        ];

        let attrs = DrawAttrs {
            texture: Some(texture),
            ..self.draw_attrs()
        };

        renderer.push_quad(&vertices, &attrs);
    }

    /// GP0(0x02): Fill Rectangle
    ///
    /// The coordinates are in absolute VRAM space, rounded to the
    /// hardware's 16 pixel horizontal granularity. The addressed
    /// pixels are clamped against the drawing area before reaching
    /// the renderer.
    pub(in crate::core::gpu) fn gp0_fill_rect(&mut self, renderer: &mut dyn Renderer) {
        let color = Color::from_word(self.gp0_buffer[0]);

        let dst = self.gp0_buffer[1];
        let size = self.gp0_buffer[2];

        let x = (dst & 0x3f0) as u16;
        let y = ((dst >> 16) & 0x1ff) as u16;

        let width = (((size & 0x3ff) + 0xf) & !0xf) as u16;
        let height = ((size >> 16) & 0x1ff) as u16;

        // Clamp against the drawing area
        let x0 = x.max(self.drawing_area_left);
        let y0 = y.max(self.drawing_area_top);
        let x1 = (x + width).min(self.drawing_area_right + 1);
        let y1 = (y + height).min(self.drawing_area_bottom + 1);

        if x0 >= x1 || y0 >= y1 {
            // Nothing left to fill
            return;
        }

        renderer.fill_rect(color, (x0, y0), (x1 - x0, y1 - y0));
    }
}
