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

//! GPU (Graphics Processing Unit) implementation
//!
//! This module implements the Sony CXD8561Q GPU used in the
//! PlayStation console:
//! - GP0 (drawing) and GP1 (control) command ports
//! - GPUSTAT status register
//! - Video timings (hsync/vsync, interlacing, dotclock generation)
//!
//! Draw commands are decoded into device-independent primitives and
//! forwarded to a [`Renderer`] implementation, the GPU itself never
//! touches pixels.
//!
//! # References
//!
//! - [PSX-SPX: GPU](http://problemkaputt.de/psx-spx.htm#gpu)
//! - [PSX-SPX: GPU Rendering](http://problemkaputt.de/psx-spx.htm#gpurenderstatecommands)

// Module declarations
mod gp0;
mod gp1;
mod renderer;
#[cfg(test)]
mod tests;
mod timing;
mod types;

use super::error::{GpuError, Result};
use super::interrupt::InterruptState;
use super::timekeeper::TimeKeeper;
use super::timer::Timers;

use gp0::Gp0Handler;

// Public re-exports
pub use renderer::{Color, DrawAttrs, Position, Renderer, TexCoord, TextureAttrs, Vertex};
pub use types::*;

/// Width of a GPU register access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessWidth {
    Byte = 1,
    HalfWord = 2,
    Word = 4,
}

/// GPU state representing the CXD8561 graphics processor
///
/// # Examples
///
/// ```
/// use lumen_core::core::gpu::{Gpu, HardwareType};
///
/// let gpu = Gpu::new(HardwareType::Ntsc);
///
/// // GPUSTAT power-on value
/// assert_eq!(gpu.status(), 0x1c80_2000);
/// ```
pub struct Gpu {
    /// Texture page base X coordinate (4 bits, 64 byte increment)
    page_base_x: u8,
    /// Texture page base Y coordinate (1 bit, 256 line increment)
    page_base_y: u8,
    /// Semi-transparency mode
    semi_transparency: u8,
    /// Texture page color depth
    texture_depth: TextureDepth,
    /// Texture window X mask (8 pixel steps)
    texture_window_x_mask: u8,
    /// Texture window Y mask (8 pixel steps)
    texture_window_y_mask: u8,
    /// Texture window X offset (8 pixel steps)
    texture_window_x_offset: u8,
    /// Texture window Y offset (8 pixel steps)
    texture_window_y_offset: u8,
    /// Enable dithering from 24 to 15 bits RGB
    dithering: bool,
    /// Allow drawing to the display area
    draw_to_display: bool,
    /// Force "mask" bit of the pixel to 1 when writing to VRAM
    force_set_mask_bit: bool,
    /// Don't draw to pixels which have the "mask" bit set
    preserve_masked_pixels: bool,
    /// Mirror textured rectangles along the X axis
    rectangle_texture_x_flip: bool,
    /// Mirror textured rectangles along the Y axis
    rectangle_texture_y_flip: bool,
    /// When true all textures are disabled
    texture_disable: bool,
    /// Video output horizontal resolution
    hres: HorizontalRes,
    /// Video output vertical resolution
    vres: VerticalRes,
    /// Video mode
    vmode: VMode,
    /// Currently displayed field. For progressive output this is
    /// always Top.
    field: Field,
    /// Display depth. The GPU itself always draws 15 bit RGB, 24 bit
    /// output must use external assets (pre-rendered textures, MDEC,
    /// etc...)
    display_depth: DisplayDepth,
    /// Output interlaced video signal instead of progressive
    interlaced: bool,
    /// Disable the display
    display_disabled: bool,
    /// First column of the display area in VRAM
    display_vram_x_start: u16,
    /// First line of the display area in VRAM
    display_vram_y_start: u16,
    /// Display output horizontal start relative to HSYNC
    display_horiz_start: u16,
    /// Display output horizontal end relative to HSYNC
    display_horiz_end: u16,
    /// Display output first line relative to VSYNC
    display_line_start: u16,
    /// Display output last line relative to VSYNC
    display_line_end: u16,
    /// Left-most column of the drawing area
    drawing_area_left: u16,
    /// Top-most line of the drawing area
    drawing_area_top: u16,
    /// Right-most column of the drawing area
    drawing_area_right: u16,
    /// Bottom-most line of the drawing area
    drawing_area_bottom: u16,
    /// DMA request direction
    dma_direction: DmaDirection,
    /// Buffer containing the current GP0 command
    gp0_buffer: CommandBuffer,
    /// Remaining words for the current GP0 command
    gp0_words_remaining: u32,
    /// Handler function for the current GP0 command
    gp0_handler: Gp0Handler,
    /// Current mode of the GP0 register
    gp0_mode: Gp0Mode,
    /// True when the GP0 interrupt has been requested
    gp0_interrupt: bool,
    /// True when the VBLANK interrupt is high
    vblank_interrupt: bool,
    /// Next word returned by the GPUREAD register
    read_word: u32,
    /// Fractional GPU cycle remainder resulting from the CPU clock to
    /// GPU clock conversion. Effectively the phase of the GPU clock
    /// in 1/0x10000th of GPU clock cycles.
    gpu_clock_phase: u16,
    /// Currently displayed video output line
    display_line: u16,
    /// Current GPU clock tick for the current line
    display_line_tick: u16,
    /// Video standard of the console
    hardware: HardwareType,
}

impl Gpu {
    pub fn new(hardware: HardwareType) -> Gpu {
        let vmode = match hardware {
            HardwareType::Ntsc => VMode::Ntsc,
            HardwareType::Pal => VMode::Pal,
        };

        Gpu {
            page_base_x: 0,
            page_base_y: 0,
            semi_transparency: 0,
            texture_depth: TextureDepth::T4Bit,
            texture_window_x_mask: 0,
            texture_window_y_mask: 0,
            texture_window_x_offset: 0,
            texture_window_y_offset: 0,
            dithering: false,
            draw_to_display: false,
            force_set_mask_bit: false,
            preserve_masked_pixels: false,
            rectangle_texture_x_flip: false,
            rectangle_texture_y_flip: false,
            texture_disable: false,
            hres: HorizontalRes::from_fields(0, 0),
            vres: VerticalRes::Y240Lines,
            vmode,
            field: Field::Top,
            display_depth: DisplayDepth::D15Bits,
            interlaced: false,
            display_disabled: true,
            display_vram_x_start: 0,
            display_vram_y_start: 0,
            display_horiz_start: 0x200,
            display_horiz_end: 0xc00,
            display_line_start: 0x10,
            display_line_end: 0x100,
            drawing_area_left: 0,
            drawing_area_top: 0,
            drawing_area_right: 0,
            drawing_area_bottom: 0,
            dma_direction: DmaDirection::Off,
            gp0_buffer: CommandBuffer::new(),
            gp0_words_remaining: 0,
            gp0_handler: Gp0Handler::Nop,
            gp0_mode: Gp0Mode::Command,
            gp0_interrupt: false,
            vblank_interrupt: false,
            read_word: 0,
            gpu_clock_phase: 0,
            display_line: 0,
            display_line_tick: 0,
            hardware,
        }
    }

    /// Value of the GPUSTAT status register
    pub fn status(&self) -> u32 {
        let mut r = 0u32;

        r |= self.page_base_x as u32;
        r |= (self.page_base_y as u32) << 4;
        r |= (self.semi_transparency as u32) << 5;
        r |= (self.texture_depth as u32) << 7;
        r |= (self.dithering as u32) << 9;
        r |= (self.draw_to_display as u32) << 10;
        r |= (self.force_set_mask_bit as u32) << 11;
        r |= (self.preserve_masked_pixels as u32) << 12;
        r |= (self.field as u32) << 13;
        // Bit 14: not supported
        r |= (self.texture_disable as u32) << 15;
        r |= self.hres.into_status();
        r |= (self.vres as u32) << 19;
        r |= (self.vmode as u32) << 20;
        r |= (self.display_depth as u32) << 21;
        r |= (self.interlaced as u32) << 22;
        r |= (self.display_disabled as u32) << 23;
        r |= (self.gp0_interrupt as u32) << 24;

        // For now we pretend that the GPU is always ready:
        // Ready to receive command
        r |= 1 << 26;
        // Ready to send VRAM to CPU
        r |= 1 << 27;
        // Ready to receive DMA block
        r |= 1 << 28;

        r |= (self.dma_direction as u32) << 29;

        // Bit 31 is 1 if the currently displayed VRAM line is odd
        r |= ((self.displayed_vram_line() & 1) as u32) << 31;

        // Notify the DMA that it can write to GP0 or read from
        // GPUREAD, depending on the requested direction
        let dma_request = match self.dma_direction {
            // Always 0
            DmaDirection::Off => 0,
            // Should be 0 when the FIFO is full, 1 otherwise
            DmaDirection::Fifo => 1,
            // Should be the same as status bit 28
            DmaDirection::CpuToGp0 => (r >> 28) & 1,
            // Should be the same as status bit 27
            DmaDirection::VRamToCpu => (r >> 27) & 1,
        };

        r |= dma_request << 25;

        r
    }

    /// Value of the GPUREAD register
    pub fn read(&self) -> u32 {
        // TODO: stream VRAM reads and GP1(0x10) info responses
        // through this register
        self.read_word
    }

    /// Handle a read from one of the memory-mapped GPU registers
    ///
    /// # Arguments
    ///
    /// * `offset` - Register offset: 0 for GPUREAD, 4 for GPUSTAT
    pub fn load(
        &mut self,
        time_keeper: &mut TimeKeeper,
        irq_state: &mut InterruptState,
        renderer: &mut dyn Renderer,
        width: AccessWidth,
        offset: u32,
    ) -> Result<u32> {
        if width != AccessWidth::Word {
            return Err(GpuError::UnsupportedAccessWidth {
                offset,
                width: width as u8,
            }
            .into());
        }

        // Bit 31 of GPUSTAT depends on the current video line, bring
        // the timing state up to date first
        self.sync(time_keeper, irq_state, renderer);

        match offset {
            0 => Ok(self.read()),
            4 => Ok(self.status()),
            _ => Err(GpuError::UnhandledRegister { offset }.into()),
        }
    }

    /// Handle a write to one of the memory-mapped GPU registers
    ///
    /// # Arguments
    ///
    /// * `offset` - Register offset: 0 for GP0, 4 for GP1
    #[allow(clippy::too_many_arguments)]
    pub fn store(
        &mut self,
        time_keeper: &mut TimeKeeper,
        timers: &mut Timers,
        irq_state: &mut InterruptState,
        renderer: &mut dyn Renderer,
        width: AccessWidth,
        offset: u32,
        value: u32,
    ) -> Result<()> {
        if width != AccessWidth::Word {
            return Err(GpuError::UnsupportedAccessWidth {
                offset,
                width: width as u8,
            }
            .into());
        }

        self.sync(time_keeper, irq_state, renderer);

        match offset {
            0 => {
                self.gp0(renderer, value);
                Ok(())
            }
            4 => {
                self.gp1(value, time_keeper, timers, irq_state, renderer);
                Ok(())
            }
            _ => Err(GpuError::UnhandledRegister { offset }.into()),
        }
    }
}
