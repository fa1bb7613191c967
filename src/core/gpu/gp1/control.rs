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

//! GP1 control commands
//!
//! Implements GPU reset, interrupt acknowledge and DMA setup.

use super::super::super::interrupt::InterruptState;
use super::super::super::timekeeper::TimeKeeper;
use super::super::super::timer::Timers;
use super::super::renderer::Renderer;
use super::super::types::{
    DisplayDepth, DmaDirection, Field, Gp0Mode, HorizontalRes, TextureDepth, VerticalRes,
};
use super::super::Gpu;

impl Gpu {
    /// GP1(0x00): Soft Reset
    ///
    /// Restores every register to its power-on default. VRAM contents
    /// and the video beam position are untouched, the GPUREAD latch
    /// keeps its value as well.
    pub(in crate::core::gpu) fn gp1_reset(
        &mut self,
        time_keeper: &mut TimeKeeper,
        timers: &mut Timers,
        irq_state: &mut InterruptState,
        renderer: &mut dyn Renderer,
    ) {
        self.page_base_x = 0;
        self.page_base_y = 0;
        self.semi_transparency = 0;
        self.texture_depth = TextureDepth::T4Bit;
        self.texture_window_x_mask = 0;
        self.texture_window_y_mask = 0;
        self.texture_window_x_offset = 0;
        self.texture_window_y_offset = 0;
        self.dithering = false;
        self.draw_to_display = false;
        self.force_set_mask_bit = false;
        self.preserve_masked_pixels = false;
        self.rectangle_texture_x_flip = false;
        self.rectangle_texture_y_flip = false;
        self.texture_disable = false;

        // Close any in-flight image transfer before reconfiguring the
        // renderer
        self.gp1_reset_command_buffer(renderer);
        self.gp1_acknowledge_irq();

        self.drawing_area_left = 0;
        self.drawing_area_top = 0;
        self.drawing_area_right = 0;
        self.drawing_area_bottom = 0;
        renderer.set_drawing_area(0, 0, 0, 0);
        renderer.set_draw_offset(0, 0);

        self.hres = HorizontalRes::from_fields(0, 0);
        self.vres = VerticalRes::Y240Lines;
        self.field = Field::Top;
        self.display_depth = DisplayDepth::D15Bits;
        self.interlaced = false;
        self.display_disabled = true;
        self.display_vram_x_start = 0;
        self.display_vram_y_start = 0;
        self.display_horiz_start = 0x200;
        self.display_horiz_end = 0xc00;
        self.display_line_start = 0x10;
        self.display_line_end = 0x100;

        self.dma_direction = DmaDirection::Off;

        // The video mode may have changed, reschedule the next sync
        // and refresh the timer clock sources
        self.sync(time_keeper, irq_state, renderer);
        timers.video_timings_changed(self);

        log::debug!("GPU reset");
    }

    /// GP1(0x01): Reset Command Buffer
    ///
    /// Clears the GP0 pipeline and cancels any ongoing image load. The
    /// renderer's active transfer is closed so it doesn't swallow
    /// subsequent commands as pixel data.
    pub(in crate::core::gpu) fn gp1_reset_command_buffer(&mut self, renderer: &mut dyn Renderer) {
        if self.gp0_mode == Gp0Mode::ImageLoad {
            renderer.end_image_load();
        }

        self.gp0_buffer.clear();
        self.gp0_words_remaining = 0;
        self.gp0_mode = Gp0Mode::Command;
    }

    /// GP1(0x02): Acknowledge GPU Interrupt
    pub(in crate::core::gpu) fn gp1_acknowledge_irq(&mut self) {
        self.gp0_interrupt = false;
    }

    /// GP1(0x04): DMA Direction
    ///
    /// # Arguments
    ///
    /// * `value` - Bits 0-1: direction (0=Off, 1=FIFO, 2=CPUtoGP0,
    ///   3=GPUREADtoCPU)
    pub(in crate::core::gpu) fn gp1_dma_direction(&mut self, value: u32, timers: &mut Timers) {
        self.dma_direction = match value & 3 {
            0 => DmaDirection::Off,
            1 => DmaDirection::Fifo,
            2 => DmaDirection::CpuToGp0,
            3 => DmaDirection::VRamToCpu,
            _ => unreachable!(),
        };

        // Timer 0 can use the dotclock as source, keep its cache
        // coherent with the new setup
        timers.video_timings_changed(self);
    }
}
