// SPDX-License-Identifier: MIT

use crate::core::errors::FsResult;
use crate::fs::vsfs::{constant::*, types::Superblock};
use vsio::{VsIO, VsIOStructExt};

/// Derived layout of a VSFS image.
///
/// Built from the three superblock integers; every region start and size
/// follows from them plus the fixed geometry constants. Block 0 is the boot
/// block, block 1 the superblock, then the inode table, the bitmap, and the
/// data region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VsfsMeta {
    /// Total image size in blocks
    pub size: u32,
    /// Number of data blocks claimed by the superblock
    pub nblocks: u32,
    /// Number of inodes
    pub ninodes: u32,
    /// First block of the inode table
    pub inode_table_start: u32,
    /// Blocks occupied by the inode table
    pub inode_table_blocks: u32,
    /// First block of the free bitmap
    pub bitmap_start: u32,
    /// Blocks occupied by the free bitmap
    pub bitmap_blocks: u32,
    /// First block of the data region
    pub first_data_block: u32,
}

impl VsfsMeta {
    pub fn new(size: u32, nblocks: u32, ninodes: u32) -> Self {
        let inode_table_start = INODE_TABLE_START;
        let inode_table_blocks = ninodes.div_ceil(INODES_PER_BLOCK);
        let bitmap_start = inode_table_start + inode_table_blocks;
        let bitmap_blocks = size.div_ceil(BITS_PER_BLOCK);
        let first_data_block = bitmap_start + bitmap_blocks;

        Self {
            size,
            nblocks,
            ninodes,
            inode_table_start,
            inode_table_blocks,
            bitmap_start,
            bitmap_blocks,
            first_data_block,
        }
    }

    /// Read the superblock from an image and derive the layout.
    pub fn from_io<IO: VsIO + ?Sized>(io: &mut IO) -> FsResult<Self> {
        let sb: Superblock = io.read_struct(Superblock::offset())?;
        Ok(Self::new(sb.size, sb.nblocks, sb.ninodes))
    }

    pub fn superblock(&self) -> Superblock {
        Superblock {
            size: self.size,
            nblocks: self.nblocks,
            ninodes: self.ninodes,
        }
    }

    /// Byte offset of block `addr`.
    pub fn block_offset(&self, addr: u32) -> u64 {
        addr as u64 * BLOCK_SIZE as u64
    }

    /// Byte offset of inode record `inum`.
    pub fn inode_offset(&self, inum: u32) -> u64 {
        self.block_offset(self.inode_table_start) + inum as u64 * INODE_SIZE as u64
    }

    /// Byte offset of the bitmap byte holding the bit for block `addr`.
    pub fn bitmap_byte_offset(&self, addr: u32) -> u64 {
        self.block_offset(self.bitmap_start) + (addr / 8) as u64
    }

    /// Whether `addr` falls inside the data region.
    pub fn addr_in_data(&self, addr: u32) -> bool {
        addr >= self.first_data_block && addr < self.size
    }
}
