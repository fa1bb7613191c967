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

//! GP0 command decoding tests

use super::super::{Color, Gp0Mode, Position, TextureDepth};
use super::{RendererCall, TestBench};

#[test]
fn test_nop_is_immediate() {
    let mut bench = TestBench::new();

    bench.gp0(0x0000_0000);

    assert_eq!(bench.gpu.gp0_words_remaining, 0);
    assert!(bench.renderer.calls.is_empty());
}

#[test]
fn test_unknown_opcode_is_noop() {
    let mut bench = TestBench::new();

    bench.gp0(0xff00_0000);

    assert_eq!(bench.gpu.gp0_words_remaining, 0);
    assert!(bench.renderer.calls.is_empty());
}

#[test]
fn test_quad_accumulates_five_words() {
    let mut bench = TestBench::new();

    bench.gp0(0x2800_ff00); // green quad
    bench.gp0(0x0000_0000);
    bench.gp0(0x0000_0064);
    bench.gp0(0x0064_0064);

    // Four words in, nothing drawn yet
    assert_eq!(bench.renderer.quads(), 0);

    bench.gp0(0x0064_0000);

    // Fifth word completes the command, drawn exactly once
    assert_eq!(bench.renderer.quads(), 1);
    assert_eq!(bench.gpu.gp0_words_remaining, 0);
}

#[test]
fn test_quad_mono_decoding() {
    let mut bench = TestBench::new();

    bench.gp0(0x2800_00ff); // red
    bench.gp0(0x0014_000a); // (10, 20)
    bench.gp0(0x0014_0064); // (100, 20)
    bench.gp0(0x00c8_000a); // (10, 200)
    bench.gp0(0x00c8_0064); // (100, 200)

    let call = &bench.renderer.calls[0];

    match call {
        RendererCall::PushQuad(vertices, attrs) => {
            assert_eq!(vertices[0].position, Position { x: 10, y: 20 });
            assert_eq!(vertices[3].position, Position { x: 100, y: 200 });

            for vertex in vertices {
                assert_eq!(vertex.color, Color { r: 0xff, g: 0, b: 0 });
            }

            assert!(attrs.texture.is_none());
            assert!(attrs.semi_transparency.is_none());
        }
        other => panic!("unexpected renderer call: {:?}", other),
    }
}

#[test]
fn test_shaded_triangle_decoding() {
    let mut bench = TestBench::new();

    bench.gp0(0x3000_00ff); // red
    bench.gp0(0x0000_0000);
    bench.gp0(0x0000_ff00); // green
    bench.gp0(0x0000_0040);
    bench.gp0(0x00ff_0000); // blue
    bench.gp0(0x0040_0020);

    assert_eq!(bench.renderer.triangles(), 1);

    match &bench.renderer.calls[0] {
        RendererCall::PushTriangle(vertices, _) => {
            assert_eq!(vertices[0].color, Color { r: 0xff, g: 0, b: 0 });
            assert_eq!(vertices[1].color, Color { r: 0, g: 0xff, b: 0 });
            assert_eq!(vertices[2].color, Color { r: 0, g: 0, b: 0xff });
            assert_eq!(vertices[2].position, Position { x: 0x20, y: 0x40 });
        }
        other => panic!("unexpected renderer call: {:?}", other),
    }
}

#[test]
fn test_shaded_quad_uses_dithering() {
    let mut bench = TestBench::new();

    // Enable dithering through the draw mode
    bench.gp0(0xe100_0200);

    bench.gp0(0x3800_00ff);
    for _ in 0..7 {
        bench.gp0(0x0000_0000);
    }

    match &bench.renderer.calls[0] {
        RendererCall::PushQuad(_, attrs) => assert!(attrs.dithering),
        other => panic!("unexpected renderer call: {:?}", other),
    }
}

#[test]
fn test_textured_quad_decoding() {
    let mut bench = TestBench::new();

    bench.gp0(0x2c80_8080);
    bench.gp0(0x0000_0000); // position 1
    // clut at x=0x20, y=0x1ff; texcoord (0, 0)
    bench.gp0(0x7fe0_0000);
    bench.gp0(0x0000_0040); // position 2
    // texture page x=5, y=1, 8 bit depth
    bench.gp0(0x0095_0000);
    bench.gp0(0x0040_0000); // position 3
    bench.gp0(0x0000_0000);
    bench.gp0(0x0040_0040); // position 4
    bench.gp0(0x0000_0000);

    match &bench.renderer.calls[0] {
        RendererCall::PushQuad(_, attrs) => {
            let texture = attrs.texture.unwrap();

            assert_eq!(texture.page_x, 5);
            assert_eq!(texture.page_y, 1);
            assert_eq!(texture.depth, TextureDepth::T8Bit);
            assert_eq!(texture.clut_x, 0x20);
            assert_eq!(texture.clut_y, 0x1ff);
            assert!(texture.blended);
        }
        other => panic!("unexpected renderer call: {:?}", other),
    }
}

#[test]
fn test_raw_textured_quad_not_blended() {
    let mut bench = TestBench::new();

    bench.gp0(0x2d00_0000);
    for _ in 0..8 {
        bench.gp0(0x0000_0000);
    }

    match &bench.renderer.calls[0] {
        RendererCall::PushQuad(_, attrs) => {
            assert!(!attrs.texture.unwrap().blended);
        }
        other => panic!("unexpected renderer call: {:?}", other),
    }
}

#[test]
fn test_draw_mode_updates_status() {
    let mut bench = TestBench::new();

    // page_x=2, page_y=1, semi=1, 8 bit textures, dithering
    bench.gp0(0xe100_02b2);

    let status = bench.status();

    assert_eq!(status & 0xf, 2);
    assert_eq!((status >> 4) & 1, 1);
    assert_eq!((status >> 5) & 3, 1);
    assert_eq!((status >> 7) & 3, 1);
    assert_eq!((status >> 9) & 1, 1);
}

#[test]
fn test_drawing_offset_sign_extension() {
    let mut bench = TestBench::new();

    // x = -1 (0x7ff), y = 16
    bench.gp0(0xe500_0000 | 0x7ff | (16 << 11));

    assert_eq!(
        bench.renderer.calls[0],
        RendererCall::SetDrawOffset(-1, 16)
    );
}

#[test]
fn test_drawing_area_forwarded() {
    let mut bench = TestBench::new();

    bench.gp0(0xe300_0000 | 16 | (32 << 10));
    bench.gp0(0xe400_0000 | 639 | (479 << 10));

    assert_eq!(
        bench.renderer.calls[1],
        RendererCall::SetDrawingArea(16, 32, 639, 479)
    );
}

#[test]
fn test_fill_rect_clamped_to_drawing_area() {
    let mut bench = TestBench::new();

    bench.gp0(0xe300_0000 | 32 | (16 << 10)); // top left (32, 16)
    bench.gp0(0xe400_0000 | 255 | (127 << 10)); // bottom right (255, 127)

    // Fill (0, 0) 128x64, clamps to (32, 16)..(128, 64)
    bench.gp0(0x0200_00ff);
    bench.gp0(0x0000_0000);
    bench.gp0(0x0040_0080);

    let fill = bench
        .renderer
        .calls
        .iter()
        .find(|c| matches!(c, RendererCall::FillRect(..)))
        .unwrap();

    assert_eq!(
        *fill,
        RendererCall::FillRect(Color { r: 0xff, g: 0, b: 0 }, (32, 16), (96, 48))
    );
}

#[test]
fn test_fill_rect_outside_drawing_area_is_dropped() {
    let mut bench = TestBench::new();

    bench.gp0(0xe300_0000 | 512 | (256 << 10));
    bench.gp0(0xe400_0000 | 1023 | (511 << 10));

    // Entirely left of the drawing area
    bench.gp0(0x0200_0000);
    bench.gp0(0x0000_0000);
    bench.gp0(0x0010_0010);

    assert!(!bench
        .renderer
        .calls
        .iter()
        .any(|c| matches!(c, RendererCall::FillRect(..))));
}

#[test]
fn test_fill_rect_rounding() {
    let mut bench = TestBench::new();

    bench.gp0(0xe300_0000); // (0, 0)
    bench.gp0(0xe400_0000 | 1023 | (511 << 10));

    // x is truncated to 16 pixels, width is rounded up
    bench.gp0(0x0200_0000);
    bench.gp0(0x0000_0017); // x = 0x17 -> 0x10
    bench.gp0(0x0008_0011); // width 0x11 -> 0x20, height 8

    assert_eq!(
        bench.renderer.calls.last().unwrap(),
        &RendererCall::FillRect(Color::default(), (0x10, 0), (0x20, 8))
    );
}

#[test]
fn test_image_load_word_count() {
    let mut bench = TestBench::new();

    // 4x2 transfer: 8 pixels, 4 words
    bench.gp0(0xa000_0000);
    bench.gp0(0x0014_000a);
    bench.gp0(0x0002_0004);

    assert_eq!(bench.gpu.gp0_mode, Gp0Mode::ImageLoad);
    assert_eq!(
        bench.renderer.calls[0],
        RendererCall::BeginImageLoad((10, 20), (4, 2))
    );

    for i in 0..4 {
        bench.gp0(0x1111_0000 + i);
    }

    assert_eq!(bench.gpu.gp0_mode, Gp0Mode::Command);
    assert_eq!(bench.renderer.calls.last().unwrap(), &RendererCall::EndImageLoad);

    let words = bench
        .renderer
        .calls
        .iter()
        .filter(|c| matches!(c, RendererCall::ImageLoadWord(_)))
        .count();

    assert_eq!(words, 4);
}

#[test]
fn test_image_load_odd_pixel_count_rounds_up() {
    let mut bench = TestBench::new();

    // 3x1 transfer: 3 pixels round up to 2 words
    bench.gp0(0xa000_0000);
    bench.gp0(0x0000_0000);
    bench.gp0(0x0001_0003);

    assert_eq!(bench.gpu.gp0_words_remaining, 2);

    bench.gp0(0xaaaa_bbbb);
    bench.gp0(0xcccc_dddd);

    assert_eq!(bench.gpu.gp0_mode, Gp0Mode::Command);
}

#[test]
fn test_image_store_forwarded() {
    let mut bench = TestBench::new();

    bench.gp0(0xc000_0000);
    bench.gp0(0x0064_0032);
    bench.gp0(0x0001_0004);

    assert_eq!(
        bench.renderer.calls[0],
        RendererCall::ImageStore((50, 100), (4, 1))
    );
}

#[test]
fn test_interrupt_request_sets_status_bit() {
    let mut bench = TestBench::new();

    assert_eq!(bench.status() & (1 << 24), 0);

    bench.gp0(0x1f00_0000);

    assert_ne!(bench.status() & (1 << 24), 0);

    // GP1(0x02) acknowledges it
    bench.gp1(0x0200_0000);

    assert_eq!(bench.status() & (1 << 24), 0);
}
