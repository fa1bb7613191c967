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

//! GP1 display configuration commands
//!
//! Implements display settings including resolution, display area
//! and video mode.

use super::super::super::interrupt::InterruptState;
use super::super::super::timekeeper::TimeKeeper;
use super::super::super::timer::Timers;
use super::super::renderer::Renderer;
use super::super::types::{DisplayDepth, Field, HorizontalRes, VMode, VerticalRes};
use super::super::Gpu;

impl Gpu {
    /// GP1(0x03): Display Enable
    ///
    /// # Arguments
    ///
    /// * `value` - Bit 0: 0=Enable, 1=Disable (inverted logic)
    pub(in crate::core::gpu) fn gp1_display_enable(&mut self, value: u32) {
        self.display_disabled = (value & 1) != 0;

        log::debug!(
            "Display {}",
            if self.display_disabled {
                "disabled"
            } else {
                "enabled"
            }
        );
    }

    /// GP1(0x05): Start of Display Area in VRAM
    ///
    /// # Arguments
    ///
    /// * `value` - Bits 0-9: X coordinate (halfword aligned),
    ///   Bits 10-18: Y coordinate
    pub(in crate::core::gpu) fn gp1_display_vram_start(&mut self, value: u32) {
        // The LSB is ignored, the start column is aligned to a pixel
        // pair
        self.display_vram_x_start = (value & 0x3fe) as u16;
        self.display_vram_y_start = ((value >> 10) & 0x1ff) as u16;
    }

    /// GP1(0x06): Horizontal Display Range
    ///
    /// Start and end of the displayed region, in GPU clock ticks
    /// relative to HSYNC.
    ///
    /// # Arguments
    ///
    /// * `value` - Bits 0-11: start, Bits 12-23: end
    pub(in crate::core::gpu) fn gp1_display_horizontal_range(&mut self, value: u32) {
        self.display_horiz_start = (value & 0xfff) as u16;
        self.display_horiz_end = ((value >> 12) & 0xfff) as u16;
    }

    /// GP1(0x07): Vertical Display Range
    ///
    /// First and last displayed line relative to VSYNC. Lines outside
    /// this range are the vertical blanking period.
    ///
    /// # Arguments
    ///
    /// * `value` - Bits 0-9: start line, Bits 10-19: end line
    pub(in crate::core::gpu) fn gp1_display_vertical_range(
        &mut self,
        value: u32,
        time_keeper: &mut TimeKeeper,
        irq_state: &mut InterruptState,
        renderer: &mut dyn Renderer,
    ) {
        self.display_line_start = (value & 0x3ff) as u16;
        self.display_line_end = ((value >> 10) & 0x3ff) as u16;

        // The vblank boundaries moved, the predicted sync date is
        // stale
        self.sync(time_keeper, irq_state, renderer);
    }

    /// GP1(0x08): Display Mode
    ///
    /// # Arguments
    ///
    /// * `value` - Display mode configuration bits:
    ///   - Bits 0-1: Horizontal resolution 1
    ///   - Bit 2: Vertical resolution (0=240, 1=480)
    ///   - Bit 3: Video mode (0=NTSC, 1=PAL)
    ///   - Bit 4: Color depth (0=15bit, 1=24bit)
    ///   - Bit 5: Interlace (0=Off, 1=On)
    ///   - Bit 6: Horizontal resolution 2
    ///   - Bit 7: Reverse flag
    pub(in crate::core::gpu) fn gp1_display_mode(
        &mut self,
        value: u32,
        time_keeper: &mut TimeKeeper,
        timers: &mut Timers,
        irq_state: &mut InterruptState,
        renderer: &mut dyn Renderer,
    ) {
        let hr1 = (value & 3) as u8;
        let hr2 = ((value >> 6) & 1) as u8;

        self.hres = HorizontalRes::from_fields(hr1, hr2);

        self.interlaced = (value & 0x20) != 0;

        // 480 lines are only achievable with an interlaced signal
        self.vres = if (value & 0x4) != 0 && self.interlaced {
            VerticalRes::Y480Lines
        } else {
            VerticalRes::Y240Lines
        };

        self.vmode = if (value & 0x8) != 0 {
            VMode::Pal
        } else {
            VMode::Ntsc
        };

        self.display_depth = if (value & 0x10) != 0 {
            DisplayDepth::D24Bits
        } else {
            DisplayDepth::D15Bits
        };

        if (value & 0x80) != 0 {
            log::warn!("Unsupported reverse flag in display mode");
        }

        if !self.interlaced {
            // A progressive signal only ever outputs the top field
            self.field = Field::Top;
        }

        // The frame layout changed, recompute the sync predictions
        // and the timer clock sources
        self.sync(time_keeper, irq_state, renderer);
        timers.video_timings_changed(self);

        log::debug!(
            "Display mode: {:?} {:?} {:?} interlaced={}",
            self.hres,
            self.vres,
            self.vmode,
            self.interlaced
        );
    }
}
