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

//! GPU module tests
//!
//! Tests are organized into the following modules:
//! - `basic`: Power-on state, status register, soft reset
//! - `gp0_commands`: GP0 command accumulation and decoding
//! - `gp1_commands`: GP1 control commands
//! - `timing`: Video timings, vblank interrupt, sync prediction

mod gp0_commands;
mod timing;

use super::super::interrupt::InterruptState;
use super::super::timekeeper::TimeKeeper;
use super::super::timer::Timers;
use super::{AccessWidth, Color, DrawAttrs, Field, Gpu, HardwareType, Renderer, Vertex};

/// Everything the GPU pushed to the renderer, in order
#[derive(Debug, Clone, PartialEq)]
pub enum RendererCall {
    SetDrawOffset(i16, i16),
    SetDrawingArea(u16, u16, u16, u16),
    PushTriangle([Vertex; 3], DrawAttrs),
    PushQuad([Vertex; 4], DrawAttrs),
    FillRect(Color, (u16, u16), (u16, u16)),
    BeginImageLoad((u16, u16), (u16, u16)),
    ImageLoadWord(u32),
    EndImageLoad,
    ImageStore((u16, u16), (u16, u16)),
    PresentField(Field),
}

/// Renderer implementation recording every call for inspection
#[derive(Default)]
pub struct RecordingRenderer {
    pub calls: Vec<RendererCall>,
}

impl RecordingRenderer {
    fn count(&self, pred: impl Fn(&RendererCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    pub fn presented_fields(&self) -> usize {
        self.count(|c| matches!(c, RendererCall::PresentField(_)))
    }

    pub fn quads(&self) -> usize {
        self.count(|c| matches!(c, RendererCall::PushQuad(..)))
    }

    pub fn triangles(&self) -> usize {
        self.count(|c| matches!(c, RendererCall::PushTriangle(..)))
    }
}

impl Renderer for RecordingRenderer {
    fn set_draw_offset(&mut self, x: i16, y: i16) {
        self.calls.push(RendererCall::SetDrawOffset(x, y));
    }

    fn set_drawing_area(&mut self, left: u16, top: u16, right: u16, bottom: u16) {
        self.calls
            .push(RendererCall::SetDrawingArea(left, top, right, bottom));
    }

    fn push_triangle(&mut self, vertices: &[Vertex; 3], attrs: &DrawAttrs) {
        self.calls.push(RendererCall::PushTriangle(*vertices, *attrs));
    }

    fn push_quad(&mut self, vertices: &[Vertex; 4], attrs: &DrawAttrs) {
        self.calls.push(RendererCall::PushQuad(*vertices, *attrs));
    }

    fn fill_rect(&mut self, color: Color, top_left: (u16, u16), size: (u16, u16)) {
        self.calls.push(RendererCall::FillRect(color, top_left, size));
    }

    fn begin_image_load(&mut self, top_left: (u16, u16), size: (u16, u16)) {
        self.calls.push(RendererCall::BeginImageLoad(top_left, size));
    }

    fn image_load_word(&mut self, word: u32) {
        self.calls.push(RendererCall::ImageLoadWord(word));
    }

    fn end_image_load(&mut self) {
        self.calls.push(RendererCall::EndImageLoad);
    }

    fn image_store(&mut self, top_left: (u16, u16), size: (u16, u16)) {
        self.calls.push(RendererCall::ImageStore(top_left, size));
    }

    fn present_field(&mut self, field: Field) {
        self.calls.push(RendererCall::PresentField(field));
    }
}

/// GPU plus all of its collaborators, wired up for tests
pub struct TestBench {
    pub gpu: Gpu,
    pub time_keeper: TimeKeeper,
    pub timers: Timers,
    pub irq_state: InterruptState,
    pub renderer: RecordingRenderer,
}

impl TestBench {
    pub fn new() -> TestBench {
        TestBench::with_hardware(HardwareType::Ntsc)
    }

    pub fn with_hardware(hardware: HardwareType) -> TestBench {
        TestBench {
            gpu: Gpu::new(hardware),
            time_keeper: TimeKeeper::new(),
            timers: Timers::new(),
            irq_state: InterruptState::new(),
            renderer: RecordingRenderer::default(),
        }
    }

    pub fn gp0(&mut self, value: u32) {
        self.gpu.gp0(&mut self.renderer, value);
    }

    pub fn gp1(&mut self, value: u32) {
        self.gpu.gp1(
            value,
            &mut self.time_keeper,
            &mut self.timers,
            &mut self.irq_state,
            &mut self.renderer,
        );
    }

    pub fn sync(&mut self) {
        self.gpu
            .sync(&mut self.time_keeper, &mut self.irq_state, &mut self.renderer);
    }

    pub fn status(&mut self) -> u32 {
        self.gpu.status()
    }

    /// Read a memory-mapped register through the bus interface
    pub fn load(&mut self, offset: u32) -> u32 {
        self.gpu
            .load(
                &mut self.time_keeper,
                &mut self.irq_state,
                &mut self.renderer,
                AccessWidth::Word,
                offset,
            )
            .unwrap()
    }
}
