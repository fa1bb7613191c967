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

//! GPU type definitions
//!
//! This module contains the register-level types used by the GPU:
//! video modes, resolutions, DMA setup and the GP0 command buffer.

use std::ops::Index;

/// Console video standard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardwareType {
    /// NTSC console (60Hz, 480 lines)
    Ntsc,
    /// PAL console (50Hz, 576 lines)
    Pal,
}

/// Depth of the pixel values in a texture page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureDepth {
    /// 4 bits per pixel, paletted
    T4Bit = 0,
    /// 8 bits per pixel, paletted
    T8Bit = 1,
    /// 15 bits per pixel, direct color
    T15Bit = 2,
}

/// Interlaced output splits each frame in two fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Bottom field (even lines)
    Bottom = 0,
    /// Top field (odd lines)
    Top = 1,
}

/// Video output vertical resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalRes {
    /// 240 lines
    Y240Lines = 0,
    /// 480 lines, only available in interlaced output
    Y480Lines = 1,
}

/// Video modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VMode {
    /// NTSC: 480i60Hz
    Ntsc = 0,
    /// PAL: 576i50Hz
    Pal = 1,
}

/// Display area color depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayDepth {
    /// 15 bits per pixel
    D15Bits = 0,
    /// 24 bits per pixel
    D24Bits = 1,
}

/// Requested DMA direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DmaDirection {
    Off = 0,
    Fifo = 1,
    CpuToGp0 = 2,
    VRamToCpu = 3,
}

/// Video output horizontal resolution
///
/// Stores the raw 3-bit field made of `hr1` (2 bits) and `hr2`
/// (1 bit) as configured through GP1(0x08).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HorizontalRes(u8);

impl HorizontalRes {
    /// Create a new HorizontalRes instance from the 2 bit field `hr1`
    /// and the one bit field `hr2`
    pub fn from_fields(hr1: u8, hr2: u8) -> HorizontalRes {
        let hr = (hr2 & 1) | ((hr1 & 3) << 1);

        HorizontalRes(hr)
    }

    /// Retrieve value of bits [18:16] of the status register
    pub fn into_status(self) -> u32 {
        let HorizontalRes(hr) = self;

        (hr as u32) << 16
    }

    /// Return the divider used to generate the dotclock from the GPU
    /// clock
    pub fn dotclock_divider(self) -> u8 {
        let HorizontalRes(hr) = self;

        let hr1 = (hr >> 1) & 0x3;
        let hr2 = hr & 1;

        // `hr2` takes precedence over `hr1`
        if hr2 != 0 {
            // HRes ~368pixels
            7
        } else {
            match hr1 {
                // Hres 256pixels
                0 => 10,
                // Hres 320pixels
                1 => 8,
                // Hres 512pixels
                2 => 5,
                // Hres 640pixels
                3 => 4,
                _ => unreachable!(),
            }
        }
    }
}

/// Buffer holding a multi-word fixed-length GP0 command while its
/// parameters are being received
#[derive(Debug, Clone, Copy)]
pub struct CommandBuffer {
    /// Command buffer: the longest possible command is GP0(0x3e)
    /// which takes 12 parameters
    buffer: [u32; 12],
    /// Number of words queued in the buffer
    len: u8,
}

impl CommandBuffer {
    pub fn new() -> CommandBuffer {
        CommandBuffer {
            buffer: [0; 12],
            len: 0,
        }
    }

    /// Clear the command buffer
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Append a word to the buffer. Words pushed once the buffer is
    /// full are silently dropped, the overflow is the caller's bug
    /// and the hardware has no meaningful behavior to emulate here.
    pub fn push_word(&mut self, word: u32) {
        if (self.len as usize) < self.buffer.len() {
            self.buffer[self.len as usize] = word;
            self.len += 1;
        }
    }

    pub fn len(&self) -> u8 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for CommandBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for CommandBuffer {
    type Output = u32;

    fn index(&self, index: usize) -> &u32 {
        if index >= self.len as usize {
            panic!(
                "Command buffer index out of range: {} ({})",
                index, self.len
            );
        }

        &self.buffer[index]
    }
}

/// Possible states for the GP0 port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gp0Mode {
    /// Default mode: handling commands
    Command,
    /// Loading an image into VRAM
    ImageLoad,
}
