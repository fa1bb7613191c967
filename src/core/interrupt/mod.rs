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

//! PSX Interrupt Controller Implementation
//!
//! The interrupt controller collects interrupt requests from the
//! hardware components and signals the CPU when an unmasked request
//! is pending.
//!
//! ## Registers
//!
//! - **I_STAT** (0x1F801070): Interrupt status register (R/W)
//!   - Reading returns the current interrupt flags
//!   - Writing 0 to a bit acknowledges that interrupt (clears the bit)
//!   - Writing 1 to a bit has no effect
//!
//! - **I_MASK** (0x1F801074): Interrupt mask register (R/W)
//!   - 1 = interrupt enabled, 0 = interrupt masked
//!
//! ## References
//!
//! - [PSX-SPX: Interrupt Control](http://problemkaputt.de/psx-spx.htm#interruptcontrol)

use bitflags::bitflags;

bitflags! {
    /// Interrupt source bits as laid out in I_STAT and I_MASK
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Interrupt: u16 {
        /// Vertical blank interrupt (bit 0)
        const VBLANK = 1 << 0;
        /// GPU interrupt, requested through GP0(0x1f) (bit 1)
        const GPU = 1 << 1;
        /// CD-ROM controller interrupt (bit 2)
        const CDROM = 1 << 2;
        /// DMA transfer complete interrupt (bit 3)
        const DMA = 1 << 3;
        /// Timer 0 interrupt (bit 4)
        const TIMER0 = 1 << 4;
        /// Timer 1 interrupt (bit 5)
        const TIMER1 = 1 << 5;
        /// Timer 2 interrupt (bit 6)
        const TIMER2 = 1 << 6;
        /// Controller/memory card interrupt (bit 7)
        const CONTROLLER = 1 << 7;
        /// Serial I/O interrupt (bit 8)
        const SIO = 1 << 8;
        /// Sound processing unit interrupt (bit 9)
        const SPU = 1 << 9;
        /// Lightpen/IRQ10 (PIO) interrupt (bit 10)
        const LIGHTPEN = 1 << 10;
    }
}

/// PlayStation interrupt controller state
///
/// # Example
///
/// ```
/// use lumen_core::core::interrupt::{Interrupt, InterruptState};
///
/// let mut irq_state = InterruptState::new();
///
/// irq_state.assert(Interrupt::VBLANK);
/// irq_state.write_mask(Interrupt::VBLANK.bits() as u32);
/// assert!(irq_state.pending());
///
/// // Writing 0 to a status bit acknowledges it
/// irq_state.write_status(0);
/// assert!(!irq_state.pending());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct InterruptState {
    /// I_STAT: asserted interrupt lines
    status: Interrupt,
    /// I_MASK: enabled interrupt lines
    mask: Interrupt,
}

impl InterruptState {
    pub fn new() -> InterruptState {
        InterruptState {
            status: Interrupt::empty(),
            mask: Interrupt::empty(),
        }
    }

    /// Assert an interrupt line. The bit remains set until the CPU
    /// acknowledges it through I_STAT.
    pub fn assert(&mut self, which: Interrupt) {
        self.status |= which;
    }

    /// I_STAT read
    pub fn read_status(&self) -> u32 {
        self.status.bits() as u32
    }

    /// I_STAT write: bits written as 0 are acknowledged, bits written
    /// as 1 are left untouched
    pub fn write_status(&mut self, value: u32) {
        self.status &= Interrupt::from_bits_truncate(value as u16);
    }

    /// I_MASK read
    pub fn read_mask(&self) -> u32 {
        self.mask.bits() as u32
    }

    /// I_MASK write
    pub fn write_mask(&mut self, value: u32) {
        self.mask = Interrupt::from_bits_truncate(value as u16);
    }

    /// True if an unmasked interrupt is asserted
    pub fn pending(&self) -> bool {
        !(self.status & self.mask).is_empty()
    }

    /// True if the given line is currently asserted, masked or not
    pub fn asserted(&self, which: Interrupt) -> bool {
        self.status.contains(which)
    }
}

impl Default for InterruptState {
    fn default() -> Self {
        Self::new()
    }
}
