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

//! GPU video timings
//!
//! The GPU runs off its own clock (53.69MHz NTSC, 53.22MHz PAL)
//! while the rest of the system counts CPU cycles at 33.87MHz. The
//! conversion is done in 16.16 fixed point and the fractional GPU
//! tick remainder is carried in `gpu_clock_phase` across calls, so
//! the beam position never drifts no matter how the CPU cycles are
//! sliced.
//!
//! # References
//!
//! - [PSX-SPX: GPU Timings](http://problemkaputt.de/psx-spx.htm#gputimings)

use super::super::interrupt::{Interrupt, InterruptState};
use super::super::timekeeper::{Cycles, FracCycles, Peripheral, TimeKeeper};
use super::renderer::Renderer;
use super::types::{Field, HardwareType, VMode};
use super::Gpu;

/// CPU clock frequency in Hz
const CPU_FREQ_HZ: f64 = 33_868_500.0;
/// GPU clock frequency for NTSC consoles in Hz
const GPU_FREQ_NTSC_HZ: f64 = 53_690_000.0;
/// GPU clock frequency for PAL consoles in Hz
const GPU_FREQ_PAL_HZ: f64 = 53_222_000.0;

impl Gpu {
    /// Ratio of the GPU clock to the CPU clock, around 1.59
    fn gpu_to_cpu_clock_ratio(&self) -> FracCycles {
        let gpu_freq = match self.hardware {
            HardwareType::Ntsc => GPU_FREQ_NTSC_HZ,
            HardwareType::Pal => GPU_FREQ_PAL_HZ,
        };

        FracCycles::from_f64(gpu_freq / CPU_FREQ_HZ)
    }

    /// GPU ticks per line and lines per frame for the configured
    /// video mode. The tick counts are not integers in reality, the
    /// error is well under a line per frame.
    pub(in crate::core::gpu) fn vmode_timings(&self) -> (u16, u16) {
        match self.vmode {
            VMode::Ntsc => (3412, 263),
            VMode::Pal => (3404, 314),
        }
    }

    /// Bring the beam position up to date with the time keeper,
    /// firing the VBLANK interrupt and presenting finished fields on
    /// the way.
    pub fn sync(
        &mut self,
        time_keeper: &mut TimeKeeper,
        irq_state: &mut InterruptState,
        renderer: &mut dyn Renderer,
    ) {
        let delta = time_keeper.sync(Peripheral::Gpu);

        // Convert the CPU cycle delta to GPU ticks, carrying the
        // fractional remainder from the previous sync
        let delta = self.gpu_clock_phase as Cycles
            + delta * self.gpu_to_cpu_clock_ratio().get_fp();

        self.gpu_clock_phase = delta as u16;

        // Whole GPU ticks elapsed
        let delta = delta >> FracCycles::FRAC_BITS;

        let (ticks_per_line, lines_per_frame) = self.vmode_timings();
        let ticks_per_line = ticks_per_line as Cycles;
        let lines_per_frame = lines_per_frame as Cycles;

        let line_tick = self.display_line_tick as Cycles + delta;
        let line = self.display_line as Cycles + line_tick / ticks_per_line;

        self.display_line_tick = (line_tick % ticks_per_line) as u16;

        if line >= lines_per_frame {
            // New frame
            if self.interlaced {
                // Interlaced output alternates fields every frame
                let nframes = line / lines_per_frame;

                self.field = if (nframes + self.field as Cycles) & 1 != 0 {
                    Field::Top
                } else {
                    Field::Bottom
                };
            }

            self.display_line = (line % lines_per_frame) as u16;
        } else {
            self.display_line = line as u16;
        }

        let vblank_interrupt = self.in_vblank();

        if !self.vblank_interrupt && vblank_interrupt {
            // Rising edge of the blanking period: the field is
            // complete
            irq_state.assert(Interrupt::VBLANK);
            renderer.present_field(self.field);
        }

        self.vblank_interrupt = vblank_interrupt;

        if self.gp0_interrupt {
            // Level triggered, reasserted until acknowledged through
            // GP1(0x02)
            irq_state.assert(Interrupt::GPU);
        }

        self.predict_next_sync(time_keeper);
    }

    /// Register the date of the next vblank boundary with the time
    /// keeper
    fn predict_next_sync(&self, time_keeper: &mut TimeKeeper) {
        let (ticks_per_line, lines_per_frame) = self.vmode_timings();
        let ticks_per_line = ticks_per_line as Cycles;
        let lines_per_frame = lines_per_frame as Cycles;

        let cur_line = self.display_line as Cycles;
        let line_start = self.display_line_start as Cycles;
        let line_end = self.display_line_end as Cycles;

        // Ticks to the start of the next line
        let mut delta = ticks_per_line - self.display_line_tick as Cycles;

        // Line where the vblank state will change next
        let next_line = if cur_line < line_start {
            line_start
        } else if cur_line < line_end {
            line_end
        } else {
            // Next frame's start of display
            lines_per_frame + line_start
        };

        delta += (next_line - cur_line - 1) * ticks_per_line;

        // Convert the GPU tick count to CPU cycles, rounding up so
        // the event is never synced a cycle too early
        let delta = (delta << FracCycles::FRAC_BITS) - self.gpu_clock_phase as Cycles;

        let ratio = self.gpu_to_cpu_clock_ratio().get_fp();

        let delta = (delta + ratio - 1) / ratio;

        time_keeper.set_next_sync_delta(Peripheral::Gpu, delta);
    }

    /// True if the beam is in the vertical blanking period
    pub fn in_vblank(&self) -> bool {
        self.display_line < self.display_line_start || self.display_line >= self.display_line_end
    }

    /// VRAM line currently being displayed, drives bit 31 of GPUSTAT
    pub(in crate::core::gpu) fn displayed_vram_line(&self) -> u16 {
        let offset = if self.interlaced {
            // In interlaced mode each output line covers two VRAM
            // lines, one per field
            self.display_line * 2 + self.field as u16
        } else {
            self.display_line
        };

        // The VRAM wraps around 512 lines
        (self.display_vram_y_start + offset) & 0x1ff
    }

    /// Period of the dotclock in CPU cycles, depends on the
    /// configured horizontal resolution
    pub fn dotclock_period(&self) -> FracCycles {
        let divider = self.hres.dotclock_divider();

        let period = FracCycles::from_cycles(divider as Cycles);

        period.divide(self.gpu_to_cpu_clock_ratio())
    }

    /// Current phase of the dotclock in CPU cycles, for the timers'
    /// synchronization modes
    pub fn dotclock_phase(&self) -> FracCycles {
        let divider = self.hres.dotclock_divider() as Cycles;

        let tick = self.display_line_tick as Cycles % divider;

        let phase =
            FracCycles::from_cycles(tick).add(FracCycles::from_fp(self.gpu_clock_phase as Cycles));

        phase.divide(self.gpu_to_cpu_clock_ratio())
    }

    /// Period of the hsync signal in CPU cycles
    pub fn hsync_period(&self) -> FracCycles {
        let (ticks_per_line, _) = self.vmode_timings();

        let line = FracCycles::from_cycles(ticks_per_line as Cycles);

        line.divide(self.gpu_to_cpu_clock_ratio())
    }

    /// Current phase of the hsync signal in CPU cycles
    pub fn hsync_phase(&self) -> FracCycles {
        let phase = FracCycles::from_cycles(self.display_line_tick as Cycles)
            .add(FracCycles::from_fp(self.gpu_clock_phase as Cycles));

        phase.divide(self.gpu_to_cpu_clock_ratio())
    }
}
