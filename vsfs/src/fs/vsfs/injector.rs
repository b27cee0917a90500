// SPDX-License-Identifier: MIT

use crate::core::errors::{FsInjectorError, FsInjectorResult};
use crate::ensure;
use crate::fs::vsfs::{constant::*, meta::VsfsMeta, resolver::VsfsResolver, types::*};
use vsio::{VsIO, VsIOStructExt};

/// Adds filesystem objects to a formatted VSFS image.
///
/// Allocation is first-fit: inodes from the table, data blocks from the
/// bitmap. Link counts, directory entries, sizes, and the bitmap are kept
/// consistent, so an injected tree always passes the checker.
pub struct VsfsInjector<'a, IO: VsIO + ?Sized> {
    io: &'a mut IO,
    meta: VsfsMeta,
}

impl<'a, IO: VsIO + ?Sized> VsfsInjector<'a, IO> {
    pub fn new(io: &'a mut IO, meta: &VsfsMeta) -> Self {
        Self { io, meta: *meta }
    }

    /// Claim the first free inode and stamp its type.
    pub fn alloc_inode(&mut self, typ: InodeType) -> FsInjectorResult<u32> {
        let meta = self.meta;
        let mut r = VsfsResolver::new(&mut *self.io, &meta);
        for inum in (ROOT_INO + 1)..meta.ninodes {
            if r.inode(inum)?.is_free() {
                let mut ino = Dinode::empty();
                ino.typ = typ.raw();
                r.write_inode(inum, &ino)?;
                return Ok(inum);
            }
        }
        Err(FsInjectorError::OutOfInodes)
    }

    /// Claim the first free data block, mark it used, and zero it.
    pub fn alloc_block(&mut self) -> FsInjectorResult<u32> {
        let meta = self.meta;
        let mut r = VsfsResolver::new(&mut *self.io, &meta);
        for addr in meta.first_data_block..meta.size {
            if !r.bit_used(addr)? {
                r.set_bit(addr, true)?;
                r.zero_block(addr)?;
                return Ok(addr);
            }
        }
        Err(FsInjectorError::OutOfBlocks)
    }

    /// Append an entry to a directory, allocating a fresh block if every
    /// existing slot is taken. Does not touch the target's link count.
    pub fn add_dirent(&mut self, dir: u32, name: &str, target: u32) -> FsInjectorResult<()> {
        ensure!(
            !name.is_empty() && name.len() <= DIRSIZ,
            FsInjectorError::Invalid("bad entry name")
        );
        ensure!(
            target <= u16::MAX as u32,
            FsInjectorError::Invalid("inode number does not fit a directory entry")
        );

        let meta = self.meta;

        // free slot in an already-allocated block?
        {
            let mut r = VsfsResolver::new(&mut *self.io, &meta);
            let mut ino = r.inode(dir)?;
            ensure!(
                ino.itype() == Some(InodeType::Directory),
                FsInjectorError::Invalid("not a directory")
            );
            for bi in 0..NDIRECT {
                let addr = ino.addrs[bi];
                if addr == 0 {
                    continue;
                }
                let entries = r.dirents(addr)?;
                if let Some(slot) = entries.iter().position(|e| e.is_empty()) {
                    r.write_dirent(addr, slot, &Dirent::new(target as u16, name))?;
                    let end = ((bi * DIRENTS_PER_BLOCK + slot + 1) * DIRENT_SIZE) as u32;
                    if ino.size < end {
                        ino.size = end;
                        r.write_inode(dir, &ino)?;
                    }
                    return Ok(());
                }
            }
        }

        // all blocks full: extend the directory by one block
        let block = self.alloc_block()?;
        let mut r = VsfsResolver::new(&mut *self.io, &meta);
        let mut ino = r.inode(dir)?;
        let bi = ino
            .direct()
            .iter()
            .position(|&a| a == 0)
            .ok_or(FsInjectorError::Invalid("directory is full"))?;
        ino.addrs[bi] = block;
        ino.size = ((bi * DIRENTS_PER_BLOCK + 1) * DIRENT_SIZE) as u32;
        r.write_inode(dir, &ino)?;
        r.write_dirent(block, 0, &Dirent::new(target as u16, name))?;
        Ok(())
    }

    /// Create a file under `parent` with the given contents.
    ///
    /// Spills into an indirect block once the direct slots are exhausted.
    pub fn create_file(&mut self, parent: u32, name: &str, data: &[u8]) -> FsInjectorResult<u32> {
        let nblocks = data.len().div_ceil(BLOCK_SIZE);
        ensure!(
            nblocks <= NDIRECT + NINDIRECT,
            FsInjectorError::Invalid("file does not fit the address array")
        );

        let inum = self.alloc_inode(InodeType::File)?;
        let meta = self.meta;

        let mut ino = Dinode::empty();
        ino.typ = InodeType::File.raw();
        ino.nlink = 1;
        ino.size = data.len() as u32;

        let mut ind_entries = [0u32; NINDIRECT];
        for i in 0..nblocks {
            // the pointer block is claimed before the first spilled data block
            if i == NDIRECT {
                ino.addrs[NDIRECT] = self.alloc_block()?;
            }
            let addr = self.alloc_block()?;
            let chunk = &data[i * BLOCK_SIZE..data.len().min((i + 1) * BLOCK_SIZE)];
            self.io.write_at(meta.block_offset(addr), chunk)?;
            if i < NDIRECT {
                ino.addrs[i] = addr;
            } else {
                ind_entries[i - NDIRECT] = addr;
            }
        }
        if ino.addrs[NDIRECT] != 0 {
            self.io
                .write_struct(meta.block_offset(ino.addrs[NDIRECT]), &ind_entries)?;
        }

        VsfsResolver::new(&mut *self.io, &meta).write_inode(inum, &ino)?;
        self.add_dirent(parent, name, inum)?;
        Ok(inum)
    }

    /// Create a subdirectory under `parent`.
    pub fn create_dir(&mut self, parent: u32, name: &str) -> FsInjectorResult<u32> {
        let inum = self.alloc_inode(InodeType::Directory)?;
        let block = self.alloc_block()?;
        let meta = self.meta;

        let mut ino = Dinode::empty();
        ino.typ = InodeType::Directory.raw();
        ino.nlink = 2;
        ino.size = (2 * DIRENT_SIZE) as u32;
        ino.addrs[0] = block;

        let mut r = VsfsResolver::new(&mut *self.io, &meta);
        r.write_inode(inum, &ino)?;
        r.write_dirent(block, 0, &Dirent::new(inum as u16, "."))?;
        r.write_dirent(block, 1, &Dirent::new(parent as u16, ".."))?;

        self.add_dirent(parent, name, inum)?;
        Ok(inum)
    }

    /// Create a device node under `parent`.
    pub fn create_device(
        &mut self,
        parent: u32,
        name: &str,
        major: i16,
        minor: i16,
    ) -> FsInjectorResult<u32> {
        let inum = self.alloc_inode(InodeType::Device)?;
        let meta = self.meta;

        let mut ino = Dinode::empty();
        ino.typ = InodeType::Device.raw();
        ino.major = major;
        ino.minor = minor;
        ino.nlink = 1;

        VsfsResolver::new(&mut *self.io, &meta).write_inode(inum, &ino)?;
        self.add_dirent(parent, name, inum)?;
        Ok(inum)
    }

    /// Add an extra hard link to an existing inode.
    pub fn link(&mut self, parent: u32, name: &str, target: u32) -> FsInjectorResult<()> {
        self.add_dirent(parent, name, target)?;
        let meta = self.meta;
        let mut r = VsfsResolver::new(&mut *self.io, &meta);
        let mut ino = r.inode(target)?;
        ino.nlink += 1;
        r.write_inode(target, &ino)?;
        Ok(())
    }
}
