//! Benchmark fixtures for the Keel ownership primitives.
//!
//! Provides deterministic workloads shaped like a small game frame:
//!
//! - [`Sprite`]: an OAM-style entry, small and `Copy`
//! - [`sprite_table`]: a full table of sprites in a [`FixedArray`]
//! - [`sprite_handles`]: the same sprites, each owned by a [`UniqueHandle`]

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use keel_array::FixedArray;
use keel_handle::{make_unique, UniqueHandle};

/// Number of hardware sprite slots modelled by the fixtures.
pub const SPRITE_SLOTS: usize = 128;

/// A hardware sprite attribute entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sprite {
    /// Horizontal position in pixels.
    pub x: i16,
    /// Vertical position in pixels.
    pub y: i16,
    /// Tile index into sprite VRAM.
    pub tile: u16,
}

impl Sprite {
    /// Deterministic sprite for slot `i`.
    pub fn for_slot(i: usize) -> Self {
        let i = i as u16;
        Self {
            x: (i.wrapping_mul(37) % 240) as i16,
            y: (i.wrapping_mul(53) % 160) as i16,
            tile: i % 64,
        }
    }
}

/// A full sprite table, one sprite per slot.
pub fn sprite_table() -> FixedArray<Sprite, SPRITE_SLOTS> {
    FixedArray::from_fn(Sprite::for_slot)
}

/// One heap-owned sprite per slot.
pub fn sprite_handles(count: usize) -> Vec<UniqueHandle<Sprite>> {
    (0..count).map(|i| make_unique(Sprite::for_slot(i))).collect()
}
