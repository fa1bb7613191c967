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

//! GP0 VRAM transfer commands
//!
//! Implements the CPU to VRAM and VRAM to CPU transfer setup. The
//! pixel data itself flows through the renderer.

use super::super::renderer::Renderer;
use super::super::types::Gp0Mode;
use super::super::Gpu;

/// Decode a transfer rectangle parameter pair. A size field of 0
/// means the maximum dimension (1024 or 512).
fn transfer_rect(coords: u32, size: u32) -> ((u16, u16), (u16, u16)) {
    let x = (coords & 0x3ff) as u16;
    let y = ((coords >> 16) & 0x1ff) as u16;

    let width = (((size & 0xffff).wrapping_sub(1) & 0x3ff) + 1) as u16;
    let height = (((size >> 16).wrapping_sub(1) & 0x1ff) + 1) as u16;

    ((x, y), (width, height))
}

impl Gpu {
    /// GP0(0xa0): Image Load (CPU to VRAM)
    ///
    /// - Word 0: Command
    /// - Word 1: Destination coordinates (X in bits 0-9, Y in bits 16-24)
    /// - Word 2: Size (width in bits 0-15, height in bits 16-31)
    ///
    /// Subsequent GP0 writes carry two 16-bit pixels per word.
    pub(in crate::core::gpu) fn gp0_image_load(&mut self, renderer: &mut dyn Renderer) {
        let (top_left, size) = transfer_rect(self.gp0_buffer[1], self.gp0_buffer[2]);

        let (width, height) = size;

        // Round up to an even number of pixels, the last halfword of
        // an odd-sized transfer is padding
        let imgsize = ((width as u32) * (height as u32) + 1) & !1;

        // The data is received two pixels per word
        self.gp0_words_remaining = imgsize / 2;

        if self.gp0_words_remaining == 0 {
            log::warn!("Empty GP0 image load");
            return;
        }

        renderer.begin_image_load(top_left, size);

        self.gp0_mode = Gp0Mode::ImageLoad;
    }

    /// GP0(0xc0): Image Store (VRAM to CPU)
    ///
    /// The pixels are meant to be streamed back through the GPUREAD
    /// register.
    pub(in crate::core::gpu) fn gp0_image_store(&mut self, renderer: &mut dyn Renderer) {
        let (top_left, size) = transfer_rect(self.gp0_buffer[1], self.gp0_buffer[2]);

        renderer.image_store(top_left, size);

        // TODO: latch the read-back pixels into the GPUREAD register
        log::warn!("GPUREAD streaming of image store data is not implemented");
    }
}
