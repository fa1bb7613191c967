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

//! GP0 draw attribute commands
//!
//! GP0(0xe1) through GP0(0xe6) configure the rasterization state:
//! texture page, texture window, drawing area, drawing offset and
//! mask bit handling.

use super::super::renderer::Renderer;
use super::super::types::TextureDepth;
use super::super::Gpu;

impl Gpu {
    /// GP0(0xe1): Draw Mode Setting
    pub(in crate::core::gpu) fn gp0_draw_mode(&mut self) {
        let value = self.gp0_buffer[0];

        self.page_base_x = (value & 0xf) as u8;
        self.page_base_y = ((value >> 4) & 1) as u8;
        self.semi_transparency = ((value >> 5) & 3) as u8;

        self.texture_depth = match (value >> 7) & 3 {
            0 => TextureDepth::T4Bit,
            1 => TextureDepth::T8Bit,
            2 => TextureDepth::T15Bit,
            n => {
                // Setting 3 is "reserved" and behaves like 15 bit on
                // the real hardware
                log::warn!("Reserved texture depth {}, using 15 bit", n);

                TextureDepth::T15Bit
            }
        };

        self.dithering = ((value >> 9) & 1) != 0;
        self.draw_to_display = ((value >> 10) & 1) != 0;
        self.texture_disable = ((value >> 11) & 1) != 0;
        self.rectangle_texture_x_flip = ((value >> 12) & 1) != 0;
        self.rectangle_texture_y_flip = ((value >> 13) & 1) != 0;
    }

    /// GP0(0xe2): Set Texture Window
    pub(in crate::core::gpu) fn gp0_texture_window(&mut self) {
        let value = self.gp0_buffer[0];

        self.texture_window_x_mask = (value & 0x1f) as u8;
        self.texture_window_y_mask = ((value >> 5) & 0x1f) as u8;
        self.texture_window_x_offset = ((value >> 10) & 0x1f) as u8;
        self.texture_window_y_offset = ((value >> 15) & 0x1f) as u8;
    }

    /// GP0(0xe3): Set Drawing Area Top Left
    pub(in crate::core::gpu) fn gp0_drawing_area_top_left(&mut self, renderer: &mut dyn Renderer) {
        let value = self.gp0_buffer[0];

        self.drawing_area_top = ((value >> 10) & 0x3ff) as u16;
        self.drawing_area_left = (value & 0x3ff) as u16;

        self.update_drawing_area(renderer);
    }

    /// GP0(0xe4): Set Drawing Area Bottom Right
    pub(in crate::core::gpu) fn gp0_drawing_area_bottom_right(
        &mut self,
        renderer: &mut dyn Renderer,
    ) {
        let value = self.gp0_buffer[0];

        self.drawing_area_bottom = ((value >> 10) & 0x3ff) as u16;
        self.drawing_area_right = (value & 0x3ff) as u16;

        self.update_drawing_area(renderer);
    }

    fn update_drawing_area(&mut self, renderer: &mut dyn Renderer) {
        renderer.set_drawing_area(
            self.drawing_area_left,
            self.drawing_area_top,
            self.drawing_area_right,
            self.drawing_area_bottom,
        );
    }

    /// GP0(0xe5): Set Drawing Offset
    pub(in crate::core::gpu) fn gp0_drawing_offset(&mut self, renderer: &mut dyn Renderer) {
        let value = self.gp0_buffer[0];

        let x = (value & 0x7ff) as u16;
        let y = ((value >> 11) & 0x7ff) as u16;

        // Values are 11 bit two's complement, sign extend through a
        // shift pair
        let x = ((x << 5) as i16) >> 5;
        let y = ((y << 5) as i16) >> 5;

        renderer.set_draw_offset(x, y);
    }

    /// GP0(0xe6): Set Mask Bit Setting
    pub(in crate::core::gpu) fn gp0_mask_bit_setting(&mut self) {
        let value = self.gp0_buffer[0];

        self.force_set_mask_bit = (value & 1) != 0;
        self.preserve_masked_pixels = (value & 2) != 0;
    }
}
