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

//! PlayStation 1 GPU emulation core library
//!
//! This library provides the graphics side of a PlayStation 1 emulator:
//! the GP0/GP1 command ports, the video timing engine (hsync/vsync,
//! interlacing, dotclock) and the GTE fixed point divider.
//!
//! # Example
//!
//! ```
//! use lumen_core::core::gpu::{Gpu, HardwareType};
//! use lumen_core::core::{InterruptState, TimeKeeper};
//!
//! let mut gpu = Gpu::new(HardwareType::Ntsc);
//! let mut time_keeper = TimeKeeper::new();
//! let mut irq_state = InterruptState::new();
//!
//! // Power-on GPUSTAT value
//! assert_eq!(gpu.status(), 0x1c80_2000);
//! # let _ = (&mut time_keeper, &mut irq_state);
//! ```

pub mod core;
