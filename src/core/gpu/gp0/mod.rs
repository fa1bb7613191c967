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

//! GP0 command port
//!
//! GP0 commands are made of one or more 32-bit words. The first word
//! gives the opcode in its 8 MSBs, the remaining parameter words are
//! accumulated in the command buffer and the handler only runs once
//! the full command has been received.

mod attributes;
mod draw;
mod transfer;

use super::renderer::Renderer;
use super::types::Gp0Mode;
use super::Gpu;

/// GP0 command handlers
///
/// Stored as plain data rather than function pointers so the GPU
/// state stays trivially serializable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate::core::gpu) enum Gp0Handler {
    Nop,
    ClearCache,
    FillRect,
    InterruptRequest,
    QuadMonoOpaque,
    QuadTextureBlendOpaque,
    QuadTextureRawOpaque,
    TriangleShadedOpaque,
    QuadShadedOpaque,
    RectTextureRawOpaque,
    ImageLoad,
    ImageStore,
    DrawMode,
    TextureWindow,
    DrawingAreaTopLeft,
    DrawingAreaBottomRight,
    DrawingOffset,
    MaskBitSetting,
}

/// Return the total length in words and the handler for the given
/// GP0 opcode
fn command_info(opcode: u32) -> (u32, Gp0Handler) {
    match opcode {
        0x00 => (1, Gp0Handler::Nop),
        0x01 => (1, Gp0Handler::ClearCache),
        0x02 => (3, Gp0Handler::FillRect),
        0x1f => (1, Gp0Handler::InterruptRequest),
        0x28 => (5, Gp0Handler::QuadMonoOpaque),
        0x2c => (9, Gp0Handler::QuadTextureBlendOpaque),
        0x2d => (9, Gp0Handler::QuadTextureRawOpaque),
        0x30 => (6, Gp0Handler::TriangleShadedOpaque),
        0x38 => (8, Gp0Handler::QuadShadedOpaque),
        0x65 => (4, Gp0Handler::RectTextureRawOpaque),
        0xa0 => (3, Gp0Handler::ImageLoad),
        0xc0 => (3, Gp0Handler::ImageStore),
        0xe1 => (1, Gp0Handler::DrawMode),
        0xe2 => (1, Gp0Handler::TextureWindow),
        0xe3 => (1, Gp0Handler::DrawingAreaTopLeft),
        0xe4 => (1, Gp0Handler::DrawingAreaBottomRight),
        0xe5 => (1, Gp0Handler::DrawingOffset),
        0xe6 => (1, Gp0Handler::MaskBitSetting),
        _ => {
            log::warn!("Unhandled GP0 command {:#04x}", opcode);

            (1, Gp0Handler::Nop)
        }
    }
}

impl Gpu {
    /// Handle a word written to the GP0 command port
    pub fn gp0(&mut self, renderer: &mut dyn Renderer, value: u32) {
        if self.gp0_words_remaining == 0 {
            // Start a new command
            let opcode = (value >> 24) & 0xff;

            let (len, handler) = command_info(opcode);

            self.gp0_words_remaining = len;
            self.gp0_handler = handler;

            self.gp0_buffer.clear();
        }

        self.gp0_words_remaining -= 1;

        match self.gp0_mode {
            Gp0Mode::Command => {
                self.gp0_buffer.push_word(value);

                if self.gp0_words_remaining == 0 {
                    // We have all the parameters, run the command
                    self.run_gp0_handler(renderer);
                }
            }
            Gp0Mode::ImageLoad => {
                renderer.image_load_word(value);

                if self.gp0_words_remaining == 0 {
                    // Load done
                    renderer.end_image_load();
                    self.gp0_mode = Gp0Mode::Command;
                }
            }
        }
    }

    fn run_gp0_handler(&mut self, renderer: &mut dyn Renderer) {
        match self.gp0_handler {
            Gp0Handler::Nop => (),
            Gp0Handler::ClearCache => self.gp0_clear_cache(),
            Gp0Handler::FillRect => self.gp0_fill_rect(renderer),
            Gp0Handler::InterruptRequest => self.gp0_interrupt_request(),
            Gp0Handler::QuadMonoOpaque => self.gp0_quad_mono_opaque(renderer),
            Gp0Handler::QuadTextureBlendOpaque => self.gp0_quad_texture_blend_opaque(renderer),
            Gp0Handler::QuadTextureRawOpaque => self.gp0_quad_texture_raw_opaque(renderer),
            Gp0Handler::TriangleShadedOpaque => self.gp0_triangle_shaded_opaque(renderer),
            Gp0Handler::QuadShadedOpaque => self.gp0_quad_shaded_opaque(renderer),
            Gp0Handler::RectTextureRawOpaque => self.gp0_rect_texture_raw_opaque(renderer),
            Gp0Handler::ImageLoad => self.gp0_image_load(renderer),
            Gp0Handler::ImageStore => self.gp0_image_store(renderer),
            Gp0Handler::DrawMode => self.gp0_draw_mode(),
            Gp0Handler::TextureWindow => self.gp0_texture_window(),
            Gp0Handler::DrawingAreaTopLeft => self.gp0_drawing_area_top_left(renderer),
            Gp0Handler::DrawingAreaBottomRight => self.gp0_drawing_area_bottom_right(renderer),
            Gp0Handler::DrawingOffset => self.gp0_drawing_offset(renderer),
            Gp0Handler::MaskBitSetting => self.gp0_mask_bit_setting(),
        }
    }

    /// GP0(0x01): Clear Cache
    fn gp0_clear_cache(&mut self) {
        // The texture cache is not emulated
        log::trace!("GP0 clear cache");
    }

    /// GP0(0x1f): Interrupt Request
    ///
    /// Raises the GPU interrupt line. It remains asserted until
    /// acknowledged through GP1(0x02).
    fn gp0_interrupt_request(&mut self) {
        self.gp0_interrupt = true;
    }
}
