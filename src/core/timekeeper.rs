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

//! Cycle accounting and peripheral synchronization
//!
//! All durations are counted in CPU clock cycles (33.8685MHz). Each
//! peripheral keeps a time sheet recording when it was last brought up
//! to date and when it next needs attention, so the main loop only has
//! to poll a single deadline.

/// Number of CPU clock cycles. The CPU runs at 33.8685MHz so this
/// wraps after roughly 17 millennia, no overflow handling needed.
pub type Cycles = u64;

/// Fixed point representation of a cycle counter, used to keep track
/// of fractional cycles without drifting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FracCycles(Cycles);

impl FracCycles {
    /// Number of fractional bits
    pub const FRAC_BITS: u64 = 16;

    /// Create a fixed point value from a whole number of cycles
    pub fn from_cycles(val: Cycles) -> FracCycles {
        FracCycles(val << Self::FRAC_BITS)
    }

    /// Create a fixed point value from a raw fixed point representation
    pub fn from_fp(val: Cycles) -> FracCycles {
        FracCycles(val)
    }

    /// Create a fixed point value from a float, rounding towards zero
    pub fn from_f64(val: f64) -> FracCycles {
        let precision = (1u64 << Self::FRAC_BITS) as f64;

        FracCycles((val * precision) as Cycles)
    }

    /// Return the raw fixed point representation
    pub fn get_fp(self) -> Cycles {
        self.0
    }

    /// Return the smallest whole number of cycles greater than or
    /// equal to this value
    pub fn ceil(self) -> Cycles {
        let shift = Self::FRAC_BITS;

        let align = (1 << shift) - 1;

        (self.0 + align) >> shift
    }

    pub fn add(self, val: FracCycles) -> FracCycles {
        FracCycles(self.0 + val.0)
    }

    pub fn multiply(self, mul: FracCycles) -> FracCycles {
        let v = self.0 * mul.0;

        // The shift compensates for the product carrying twice the
        // fractional bits
        FracCycles(v >> Self::FRAC_BITS)
    }

    pub fn divide(self, denominator: FracCycles) -> FracCycles {
        // Pre-shift the numerator so the result keeps its fractional
        // bits after the division
        let numerator = self.0 << Self::FRAC_BITS;

        FracCycles(numerator / denominator.0)
    }
}

/// Peripherals that can request synchronization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Peripheral {
    /// Graphics Processing Unit
    Gpu,
    /// Timer/counter channels
    Timers,
}

impl Peripheral {
    fn index(self) -> usize {
        match self {
            Peripheral::Gpu => 0,
            Peripheral::Timers => 1,
        }
    }
}

const PERIPHERAL_COUNT: usize = 2;

/// Synchronization state of a single peripheral
#[derive(Debug, Clone, Copy)]
struct TimeSheet {
    /// Date of the last peripheral synchronization
    last_sync: Cycles,
    /// Date of the next event the peripheral needs to react to
    next_sync: Cycles,
}

impl TimeSheet {
    fn new() -> TimeSheet {
        TimeSheet {
            last_sync: 0,
            // Force a synchronization on the first run
            next_sync: 0,
        }
    }

    /// Advance `last_sync` to `now` and return the number of elapsed
    /// cycles since the previous synchronization
    fn sync(&mut self, now: Cycles) -> Cycles {
        let delta = now - self.last_sync;

        self.last_sync = now;

        delta
    }

    fn needs_sync(&self, now: Cycles) -> bool {
        self.next_sync <= now
    }
}

/// Central clock source keeping track of the current date and of each
/// peripheral's synchronization deadline.
#[derive(Debug, Clone)]
pub struct TimeKeeper {
    /// Counter keeping track of the current date, in CPU clock cycles
    now: Cycles,
    /// Date of the next event requiring peripheral synchronization
    next_sync: Cycles,
    /// Time sheets for all peripherals
    timesheets: [TimeSheet; PERIPHERAL_COUNT],
}

impl TimeKeeper {
    pub fn new() -> TimeKeeper {
        TimeKeeper {
            now: 0,
            next_sync: 0,
            timesheets: [TimeSheet::new(); PERIPHERAL_COUNT],
        }
    }

    /// Advance the current date by `cycles`
    pub fn tick(&mut self, cycles: Cycles) {
        self.now += cycles;
    }

    /// Current date in CPU clock cycles
    pub fn now(&self) -> Cycles {
        self.now
    }

    /// Synchronize the peripheral's time sheet with the current date
    /// and return the number of CPU cycles elapsed since the last
    /// synchronization.
    pub fn sync(&mut self, who: Peripheral) -> Cycles {
        self.timesheets[who.index()].sync(self.now)
    }

    /// Register the date of the next event `who` must handle, given as
    /// a delta from the current date.
    pub fn set_next_sync_delta(&mut self, who: Peripheral, delta: Cycles) {
        self.timesheets[who.index()].next_sync = self.now + delta;

        // Recompute the global deadline
        self.next_sync = self
            .timesheets
            .iter()
            .map(|t| t.next_sync)
            .min()
            .unwrap_or(self.now);
    }

    /// True if at least one peripheral has reached its deadline
    pub fn sync_pending(&self) -> bool {
        self.next_sync <= self.now
    }

    /// True if the given peripheral has reached its deadline
    pub fn needs_sync(&self, who: Peripheral) -> bool {
        self.timesheets[who.index()].needs_sync(self.now)
    }

    /// Deadline registered for the given peripheral
    pub fn next_sync(&self, who: Peripheral) -> Cycles {
        self.timesheets[who.index()].next_sync
    }
}

impl Default for TimeKeeper {
    fn default() -> Self {
        Self::new()
    }
}
