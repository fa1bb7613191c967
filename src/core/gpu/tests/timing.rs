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

//! GPU timing tests
//!
//! The expected cycle counts below are derived from the NTSC video
//! timings: 3412 GPU ticks per line, 263 lines per frame and a GPU to
//! CPU clock ratio of 0x195d2/0x10000.

use super::super::super::interrupt::Interrupt;
use super::super::super::timekeeper::Peripheral;
use super::super::Field;
use super::TestBench;

#[test]
fn test_power_on_beam_is_in_vblank() {
    let mut bench = TestBench::new();

    // Line 0 is before the display start (line 16)
    assert!(bench.gpu.in_vblank());

    bench.sync();

    // Entering vblank asserts the interrupt and presents the field
    assert!(bench.irq_state.asserted(Interrupt::VBLANK));
    assert_eq!(bench.renderer.presented_fields(), 1);
}

#[test]
fn test_vblank_fires_once_per_frame() {
    let mut bench = TestBench::new();

    bench.sync();
    bench.irq_state.write_status(0);

    // Next sync lands on the start of the display, line 16
    bench.time_keeper.tick(34438);
    bench.sync();

    assert_eq!(bench.gpu.display_line, 16);
    assert!(!bench.gpu.in_vblank());
    assert!(!bench.irq_state.asserted(Interrupt::VBLANK));
    assert_eq!(bench.renderer.presented_fields(), 1);

    // Then on the end of the display, line 256
    bench.time_keeper.tick(516_567);
    bench.sync();

    assert_eq!(bench.gpu.display_line, 256);
    assert!(bench.gpu.in_vblank());
    assert!(bench.irq_state.asserted(Interrupt::VBLANK));
    assert_eq!(bench.renderer.presented_fields(), 2);
}

#[test]
fn test_sync_prediction_is_exact() {
    let mut bench = TestBench::new();

    bench.sync();

    let predicted = bench.time_keeper.next_sync(Peripheral::Gpu);
    assert_eq!(predicted, 34438);

    // One cycle early the beam is still on line 15
    bench.time_keeper.tick(predicted - 1);
    bench.sync();

    assert_eq!(bench.gpu.display_line, 15);
    assert!(bench.gpu.in_vblank());

    // The predicted date itself crosses the boundary
    bench.time_keeper.tick(1);
    bench.sync();

    assert_eq!(bench.gpu.display_line, 16);
    assert!(!bench.gpu.in_vblank());
}

#[test]
fn test_clock_phase_does_not_drift() {
    // Slicing the same wall clock duration into many small syncs
    // must land on the same beam position as a single big one
    let mut sliced = TestBench::new();
    let mut whole = TestBench::new();

    for _ in 0..1000 {
        sliced.time_keeper.tick(77);
        sliced.sync();
    }

    whole.time_keeper.tick(77 * 1000);
    whole.sync();

    assert_eq!(sliced.gpu.display_line, whole.gpu.display_line);
    assert_eq!(sliced.gpu.display_line_tick, whole.gpu.display_line_tick);
    assert_eq!(sliced.gpu.gpu_clock_phase, whole.gpu.gpu_clock_phase);
}

#[test]
fn test_interlaced_field_alternates() {
    let mut bench = TestBench::new();

    // 240 lines interlaced NTSC
    bench.gp1(0x0800_0020);
    bench.sync();

    assert_eq!(bench.gpu.field, Field::Top);

    // A bit more than one frame
    bench.time_keeper.tick(566_135);
    bench.sync();
    assert_eq!(bench.gpu.field, Field::Bottom);

    bench.time_keeper.tick(566_135);
    bench.sync();
    assert_eq!(bench.gpu.field, Field::Top);
}

#[test]
fn test_gp0_interrupt_reasserted_on_sync() {
    let mut bench = TestBench::new();

    bench.gp0(0x1f00_0000);
    bench.sync();

    assert!(bench.irq_state.asserted(Interrupt::GPU));

    // Acknowledging I_STAT alone does not help while the GPU keeps
    // its line high
    bench.irq_state.write_status(0);
    bench.sync();
    assert!(bench.irq_state.asserted(Interrupt::GPU));

    // GP1(0x02) drops the line for good
    bench.gp1(0x0200_0000);
    bench.irq_state.write_status(0);
    bench.sync();
    assert!(!bench.irq_state.asserted(Interrupt::GPU));
}

#[test]
fn test_dotclock_period_follows_resolution() {
    let mut bench = TestBench::new();

    // 256 pixels: divider 10, around 6.3 CPU cycles
    assert_eq!(bench.gpu.dotclock_period().ceil(), 7);

    // 640 pixels: divider 4
    bench.gp1(0x0800_0003);
    assert_eq!(bench.gpu.dotclock_period().ceil(), 3);

    // 368 pixels: divider 7
    bench.gp1(0x0800_0040);
    assert_eq!(bench.gpu.dotclock_period().ceil(), 5);
}

#[test]
fn test_hsync_period() {
    let mut bench = TestBench::new();

    // 3412 GPU ticks per NTSC line, a bit over 2152 CPU cycles
    assert_eq!(bench.gpu.hsync_period().ceil(), 2153);

    // PAL lines are slightly shorter in GPU ticks
    bench.gp1(0x0800_0008);
    assert_eq!(bench.gpu.vmode_timings(), (3404, 314));
}

#[test]
fn test_displayed_vram_line_interlace() {
    let mut bench = TestBench::new();

    bench.gpu.display_vram_y_start = 100;
    bench.gpu.display_line = 10;

    assert_eq!(bench.gpu.displayed_vram_line(), 110);

    bench.gpu.interlaced = true;
    bench.gpu.field = Field::Top;

    // Interlaced output skips every other VRAM line
    assert_eq!(bench.gpu.displayed_vram_line(), 121);

    bench.gpu.field = Field::Bottom;
    assert_eq!(bench.gpu.displayed_vram_line(), 120);
}

#[test]
fn test_vram_line_wraps_at_512() {
    let mut bench = TestBench::new();

    bench.gpu.display_vram_y_start = 500;
    bench.gpu.display_line = 20;

    assert_eq!(bench.gpu.displayed_vram_line(), 8);
}
