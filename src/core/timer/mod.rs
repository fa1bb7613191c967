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

//! PSX timer clock sources
//!
//! Timer 0 can count the GPU pixel clock and timer 1 the horizontal
//! sync, so the timers keep a cached copy of the GPU clock periods.
//! The GPU notifies the timers whenever a GP1 command changes the
//! video timings.
//!
//! ## References
//!
//! - [PSX-SPX: Timers](http://problemkaputt.de/psx-spx.htm#timers)

use super::gpu::Gpu;
use super::timekeeper::FracCycles;

/// Timer state holding the GPU-derived clock sources
#[derive(Debug, Clone, Copy)]
pub struct Timers {
    /// Period of the GPU dotclock, in CPU clock cycles
    dotclock: FracCycles,
    /// Period of a full video line, in CPU clock cycles
    hsync: FracCycles,
}

impl Timers {
    pub fn new() -> Timers {
        Timers {
            dotclock: FracCycles::from_cycles(1),
            hsync: FracCycles::from_cycles(1),
        }
    }

    /// Refresh the cached clock periods. Called by the GPU whenever a
    /// GP1 command changes the video mode, resolution or DMA setup.
    pub fn video_timings_changed(&mut self, gpu: &Gpu) {
        self.dotclock = gpu.dotclock_period();
        self.hsync = gpu.hsync_period();
    }

    pub fn dotclock(&self) -> FracCycles {
        self.dotclock
    }

    pub fn hsync(&self) -> FracCycles {
        self.hsync
    }
}

impl Default for Timers {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gpu::{Gpu, HardwareType};

    #[test]
    fn test_timings_follow_gpu() {
        let gpu = Gpu::new(HardwareType::Ntsc);
        let mut timers = Timers::new();

        timers.video_timings_changed(&gpu);

        assert_eq!(timers.dotclock(), gpu.dotclock_period());
        assert_eq!(timers.hsync(), gpu.hsync_period());

        // An NTSC line lasts 3412 GPU ticks, a bit over 2152 CPU
        // cycles
        assert_eq!(timers.hsync().ceil(), 2153);
    }
}
