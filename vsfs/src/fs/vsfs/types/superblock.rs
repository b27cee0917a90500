// SPDX-License-Identifier: MIT
//! VSFS superblock structure

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::fs::vsfs::constant::*;

/// VSFS superblock (12 bytes, stored at block 1).
///
/// Three little-endian integers; together with the fixed geometry constants
/// they determine the location and size of every other region.
#[derive(Debug, Clone, Copy, IntoBytes, FromBytes, KnownLayout, Immutable)]
#[repr(C)]
pub struct Superblock {
    /// Total image size in blocks
    pub size: u32,
    /// Number of data blocks
    pub nblocks: u32,
    /// Number of inodes
    pub ninodes: u32,
}

impl Superblock {
    /// Byte offset of the superblock record inside the image.
    pub const fn offset() -> u64 {
        SUPERBLOCK_NUMBER as u64 * BLOCK_SIZE as u64
    }
}

const _: () = assert!(core::mem::size_of::<Superblock>() == 12);
