// SPDX-License-Identifier: MIT

use crate::core::errors::{FsResolverError, FsResolverResult};
use crate::ensure;
use crate::fs::vsfs::{constant::*, meta::VsfsMeta, types::*};
use vsio::{VsIO, VsIOExt, VsIOStructExt};

/// Typed, range-checked accessors over a VSFS image.
///
/// Every read goes through the layout in [`VsfsMeta`] and the bounds checks
/// of the underlying `VsIO`, so a malformed superblock turns into an error
/// from the accessor that first trips over it.
pub struct VsfsResolver<'a, IO: VsIO + ?Sized> {
    io: &'a mut IO,
    meta: &'a VsfsMeta,
}

impl<'a, IO: VsIO + ?Sized> VsfsResolver<'a, IO> {
    pub fn new(io: &'a mut IO, meta: &'a VsfsMeta) -> Self {
        Self { io, meta }
    }

    /// Read inode record `inum`.
    pub fn inode(&mut self, inum: u32) -> FsResolverResult<Dinode> {
        ensure!(
            inum < self.meta.ninodes,
            FsResolverError::Invalid("inode index out of range")
        );
        Ok(self.io.read_struct(self.meta.inode_offset(inum))?)
    }

    /// Read the raw bytes of block `addr`.
    pub fn read_block(&mut self, addr: u32, buf: &mut [u8; BLOCK_SIZE]) -> FsResolverResult<()> {
        ensure!(
            addr < self.meta.size,
            FsResolverError::Invalid("block address out of range")
        );
        Ok(self.io.read_at(self.meta.block_offset(addr), buf)?)
    }

    /// Test the bitmap bit for block `addr` (LSB-first within each byte).
    pub fn bit_used(&mut self, addr: u32) -> FsResolverResult<bool> {
        ensure!(
            addr < self.meta.size,
            FsResolverError::Invalid("block address out of range")
        );
        let mut byte = [0u8; 1];
        self.io
            .read_at(self.meta.bitmap_byte_offset(addr), &mut byte)?;
        Ok(byte[0] & (1 << (addr % 8)) != 0)
    }

    /// Read block `addr` as an indirect pointer block.
    pub fn indirect(&mut self, addr: u32) -> FsResolverResult<[u32; NINDIRECT]> {
        ensure!(
            addr < self.meta.size,
            FsResolverError::Invalid("block address out of range")
        );
        Ok(self.io.read_struct(self.meta.block_offset(addr))?)
    }

    /// Read block `addr` as a directory entry block.
    pub fn dirents(&mut self, addr: u32) -> FsResolverResult<[Dirent; DIRENTS_PER_BLOCK]> {
        ensure!(
            addr < self.meta.size,
            FsResolverError::Invalid("block address out of range")
        );
        Ok(self.io.read_struct(self.meta.block_offset(addr))?)
    }

    /// Overwrite inode record `inum`.
    pub fn write_inode(&mut self, inum: u32, ino: &Dinode) -> FsResolverResult<()> {
        ensure!(
            inum < self.meta.ninodes,
            FsResolverError::Invalid("inode index out of range")
        );
        Ok(self.io.write_struct(self.meta.inode_offset(inum), ino)?)
    }

    /// Overwrite directory entry `slot` of block `addr`.
    pub fn write_dirent(&mut self, addr: u32, slot: usize, de: &Dirent) -> FsResolverResult<()> {
        ensure!(
            addr < self.meta.size,
            FsResolverError::Invalid("block address out of range")
        );
        ensure!(
            slot < DIRENTS_PER_BLOCK,
            FsResolverError::Invalid("directory slot out of range")
        );
        let offset = self.meta.block_offset(addr) + (slot * DIRENT_SIZE) as u64;
        Ok(self.io.write_struct(offset, de)?)
    }

    /// Zero the contents of block `addr`.
    pub fn zero_block(&mut self, addr: u32) -> FsResolverResult<()> {
        ensure!(
            addr < self.meta.size,
            FsResolverError::Invalid("block address out of range")
        );
        Ok(self.io.zero_fill(self.meta.block_offset(addr), BLOCK_SIZE)?)
    }

    /// Set or clear the bitmap bit for block `addr`.
    pub fn set_bit(&mut self, addr: u32, used: bool) -> FsResolverResult<()> {
        ensure!(
            addr < self.meta.size,
            FsResolverError::Invalid("block address out of range")
        );
        let offset = self.meta.bitmap_byte_offset(addr);
        let mut buf = [0u8; 1];
        self.io.read_at(offset, &mut buf)?;
        if used {
            buf[0] |= 1 << (addr % 8);
        } else {
            buf[0] &= !(1 << (addr % 8));
        }
        Ok(self.io.write_at(offset, &buf)?)
    }
}
