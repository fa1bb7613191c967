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

//! GP1 control port
//!
//! GP1 commands are always a single word and take effect immediately.

mod control;
mod display;

use super::super::interrupt::InterruptState;
use super::super::timekeeper::TimeKeeper;
use super::super::timer::Timers;
use super::renderer::Renderer;
use super::Gpu;

impl Gpu {
    /// Handle a word written to the GP1 control port
    pub fn gp1(
        &mut self,
        value: u32,
        time_keeper: &mut TimeKeeper,
        timers: &mut Timers,
        irq_state: &mut InterruptState,
        renderer: &mut dyn Renderer,
    ) {
        let opcode = (value >> 24) & 0xff;

        match opcode {
            0x00 => self.gp1_reset(time_keeper, timers, irq_state, renderer),
            0x01 => self.gp1_reset_command_buffer(renderer),
            0x02 => self.gp1_acknowledge_irq(),
            0x03 => self.gp1_display_enable(value),
            0x04 => self.gp1_dma_direction(value, timers),
            0x05 => self.gp1_display_vram_start(value),
            0x06 => self.gp1_display_horizontal_range(value),
            0x07 => self.gp1_display_vertical_range(value, time_keeper, irq_state, renderer),
            0x08 => self.gp1_display_mode(value, time_keeper, timers, irq_state, renderer),
            _ => log::warn!("Unhandled GP1 command {:#010x}", value),
        }
    }
}
