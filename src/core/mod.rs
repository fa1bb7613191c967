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

//! Core emulation components
//!
//! This module contains the hardware emulation components:
//! - GPU (command ports, rasterization commands, video timings)
//! - GTE divider (fixed point reciprocal division)
//! - Interrupt controller state
//! - Timer clock source cache
//! - Time keeper (cycle accounting and synchronization)

pub mod error;
pub mod gpu;
pub mod gte;
pub mod interrupt;
pub mod timekeeper;
pub mod timer;

// Re-export commonly used types
pub use error::{EmulatorError, GpuError, Result};
pub use gpu::Gpu;
pub use interrupt::InterruptState;
pub use timekeeper::TimeKeeper;
pub use timer::Timers;
