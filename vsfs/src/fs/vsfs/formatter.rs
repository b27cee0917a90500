// SPDX-License-Identifier: MIT

use crate::core::errors::{FsFormatterError, FsFormatterResult};
use crate::ensure;
use crate::fs::vsfs::{constant::*, meta::VsfsMeta, resolver::VsfsResolver, types::*};
use vsio::{VsIO, VsIOExt, VsIOStructExt};

/// Writes an empty but valid VSFS image.
///
/// Lays down the superblock, a zeroed inode table and bitmap, and the root
/// directory (inode 1 with one data block holding "." and ".."). The
/// metadata region and the root block are marked used in the bitmap.
pub struct VsfsFormatter;

impl VsfsFormatter {
    pub fn format<IO: VsIO + ?Sized>(io: &mut IO, meta: &VsfsMeta) -> FsFormatterResult<()> {
        ensure!(
            meta.size > meta.first_data_block,
            FsFormatterError::Invalid("image too small for any data block")
        );
        ensure!(
            meta.ninodes > ROOT_INO,
            FsFormatterError::Invalid("image too small for the root inode")
        );

        // boot block, superblock, inode table, bitmap
        io.zero_fill(0, meta.first_data_block as usize * BLOCK_SIZE)?;
        io.write_struct(Superblock::offset(), &meta.superblock())?;

        let root_block = meta.first_data_block;
        io.zero_fill(meta.block_offset(root_block), BLOCK_SIZE)?;

        let mut root = Dinode::empty();
        root.typ = InodeType::Directory.raw();
        root.nlink = 2;
        root.size = (2 * DIRENT_SIZE) as u32;
        root.addrs[0] = root_block;

        let mut resolver = VsfsResolver::new(io, meta);
        resolver.write_inode(ROOT_INO, &root)?;
        resolver.write_dirent(root_block, 0, &Dirent::new(ROOT_INO as u16, "."))?;
        resolver.write_dirent(root_block, 1, &Dirent::new(ROOT_INO as u16, ".."))?;

        for addr in 0..=root_block {
            resolver.set_bit(addr, true)?;
        }

        Ok(())
    }
}
