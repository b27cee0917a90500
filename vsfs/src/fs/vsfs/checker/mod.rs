// SPDX-License-Identifier: MIT

mod walker;

pub use walker::VsfsWalker;

use crate::core::checker::{CoreVerifyOptions, FsChecker, VerifyReport};
use crate::core::errors::{FsCheckerError, FsCheckerResult};
use crate::ensure;
use crate::fs::vsfs::{
    constant::*, meta::VsfsMeta, resolver::VsfsResolver, types::*, violation::Violation,
};
use vsio::VsIO;

/// Consistency checker for a VSFS image.
///
/// Three phases, in order: per-inode local validation, the whole-image
/// block-usage audit, then the directory tree walk with its link audit.
/// The first violation anywhere ends the run (fail-fast is the default),
/// so a report never carries more than one error finding.
pub struct VsfsChecker<'a, IO: VsIO + ?Sized> {
    io: &'a mut IO,
    meta: &'a VsfsMeta,
}

impl<'a, IO: VsIO + ?Sized> VsfsChecker<'a, IO> {
    pub fn new(io: &'a mut IO, meta: &'a VsfsMeta) -> Self {
        Self { io, meta }
    }

    /// Reject geometries that point past the end of the image before any
    /// aggregate gets sized from them.
    fn probe_geometry(&mut self) -> FsCheckerResult<()> {
        let meta = self.meta;
        ensure!(
            meta.ninodes > ROOT_INO,
            FsCheckerError::Invalid("superblock leaves no room for the root inode")
        );
        ensure!(
            meta.first_data_block < meta.size,
            FsCheckerError::Invalid("superblock leaves no data region")
        );
        let mut r = VsfsResolver::new(&mut *self.io, meta);
        let mut block = [0u8; BLOCK_SIZE];
        r.read_block(meta.size - 1, &mut block)?;
        let _ = r.inode(meta.ninodes - 1)?;
        Ok(())
    }

    /// Local validation of one inode (type, address ranges, root and
    /// directory shape, bitmap agreement).
    fn check_inode(&mut self, inum: u32) -> FsCheckerResult<Option<Violation>> {
        let meta = self.meta;
        let mut r = VsfsResolver::new(&mut *self.io, meta);
        let ino = r.inode(inum)?;

        let Some(itype) = ino.itype() else {
            return Ok(Some(Violation::BadInode));
        };
        if itype == InodeType::Free {
            return Ok(None);
        }

        for &addr in ino.direct() {
            if addr != 0 && !meta.addr_in_data(addr) {
                return Ok(Some(Violation::BadDirectAddress));
            }
        }
        let ind = ino.indirect();
        let mut ind_entries = None;
        if ind != 0 {
            if !meta.addr_in_data(ind) {
                return Ok(Some(Violation::BadIndirectAddress));
            }
            // the pointer block's own address is validated above, so its
            // slots can be dereferenced and validated individually
            let entries = r.indirect(ind)?;
            for &addr in entries.iter() {
                if addr != 0 && !meta.addr_in_data(addr) {
                    return Ok(Some(Violation::BadDirectAddress));
                }
            }
            ind_entries = Some(entries);
        }

        if inum == ROOT_INO {
            if itype != InodeType::Directory || ino.addrs[0] == 0 {
                return Ok(Some(Violation::BadRootDirectory));
            }
            let entries = r.dirents(ino.addrs[0])?;
            if entries[1].inum as u32 != ROOT_INO {
                return Ok(Some(Violation::BadRootDirectory));
            }
        }

        if itype == InodeType::Directory {
            // a directory in use must have its first data block; "." and
            // ".." live in its first two slots
            if ino.addrs[0] == 0 {
                return Ok(Some(Violation::DirNotProperlyFormatted));
            }
            let entries = r.dirents(ino.addrs[0])?;
            if !entries[0].name_is(".")
                || entries[0].inum as u32 != inum
                || !entries[1].name_is("..")
            {
                return Ok(Some(Violation::DirNotProperlyFormatted));
            }
        }

        for &addr in ino.direct() {
            if addr != 0 && !r.bit_used(addr)? {
                return Ok(Some(Violation::AddressMarkedFree));
            }
        }
        if ind != 0 {
            if !r.bit_used(ind)? {
                return Ok(Some(Violation::AddressMarkedFree));
            }
            if let Some(entries) = ind_entries {
                for &addr in entries.iter() {
                    if addr != 0 && !r.bit_used(addr)? {
                        return Ok(Some(Violation::AddressMarkedFree));
                    }
                }
            }
        }

        Ok(None)
    }

    /// One pass over all in-use inodes accumulating per-block direct and
    /// indirect usage, then the bitmap and single-ownership cross-checks.
    fn audit_usage(&mut self) -> FsCheckerResult<Option<Violation>> {
        let meta = self.meta;
        let total = meta.size as usize;
        let mut direct_uses = vec![0u32; total];
        let mut indirect_uses = vec![0u32; total];

        let mut r = VsfsResolver::new(&mut *self.io, meta);
        for inum in 0..meta.ninodes {
            let ino = r.inode(inum)?;
            if ino.is_free() {
                continue;
            }
            for &addr in ino.direct() {
                if addr != 0 && (addr as usize) < total {
                    direct_uses[addr as usize] += 1;
                }
            }
            let ind = ino.indirect();
            if ind != 0 && (ind as usize) < total {
                // the pointer block itself is an indirect use; the slots
                // inside it address data and count as direct uses
                indirect_uses[ind as usize] += 1;
                let entries = r.indirect(ind)?;
                for &addr in entries.iter() {
                    if addr != 0 && (addr as usize) < total {
                        direct_uses[addr as usize] += 1;
                    }
                }
            }
        }

        for addr in meta.first_data_block..meta.size {
            if r.bit_used(addr)?
                && direct_uses[addr as usize] + indirect_uses[addr as usize] == 0
            {
                return Ok(Some(Violation::BitmapMarksUnused));
            }
        }

        for addr in meta.first_data_block..meta.size {
            if direct_uses[addr as usize] > 1 {
                return Ok(Some(Violation::DirectAddressReused));
            }
            if indirect_uses[addr as usize] > 1 {
                return Ok(Some(Violation::IndirectAddressReused));
            }
        }

        Ok(None)
    }

    /// Post-walk audit of reference counts against inode state.
    fn audit_links(&mut self, counts: &[u32]) -> FsCheckerResult<Option<Violation>> {
        let meta = self.meta;
        let mut r = VsfsResolver::new(&mut *self.io, meta);
        for inum in (ROOT_INO + 1)..meta.ninodes {
            let ino = r.inode(inum)?;
            let cnt = counts[inum as usize];

            if !ino.is_free() && cnt == 0 {
                return Ok(Some(Violation::InodeNotInDirectory));
            }
            if ino.is_free() && cnt > 0 {
                return Ok(Some(Violation::FreeInodeInDirectory));
            }
            if ino.itype() == Some(InodeType::File) && ino.nlink as i64 != cnt as i64 {
                return Ok(Some(Violation::BadFileRefCount));
            }
            if ino.itype() == Some(InodeType::Directory) && cnt > 1 {
                return Ok(Some(Violation::DirectoryAppearsTwice));
            }
        }
        Ok(None)
    }
}

impl<'a, IO: VsIO + ?Sized> FsChecker for VsfsChecker<'a, IO> {
    type Options = CoreVerifyOptions;

    fn check_inodes(
        &mut self,
        _opt: &Self::Options,
        rep: &mut VerifyReport,
    ) -> FsCheckerResult<()> {
        self.probe_geometry()?;
        for inum in 0..self.meta.ninodes {
            if let Some(v) = self.check_inode(inum)? {
                rep.push(v.into());
                return Ok(());
            }
        }
        Ok(())
    }

    fn check_usage(&mut self, _opt: &Self::Options, rep: &mut VerifyReport) -> FsCheckerResult<()> {
        self.probe_geometry()?;
        if let Some(v) = self.audit_usage()? {
            rep.push(v.into());
        }
        Ok(())
    }

    fn check_tree(&mut self, _opt: &Self::Options, rep: &mut VerifyReport) -> FsCheckerResult<()> {
        self.probe_geometry()?;
        let counts = {
            let mut walker = VsfsWalker::new(&mut *self.io, self.meta);
            walker.walk(rep)?;
            walker.into_ref_counts()
        };
        if rep.has_error() {
            return Ok(());
        }
        if let Some(v) = self.audit_links(&counts)? {
            rep.push(v.into());
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "mem", feature = "std"))]
mod tests {
    use super::*;
    use crate::fs::vsfs::formatter::VsfsFormatter;
    use crate::fs::vsfs::injector::VsfsInjector;
    use vsio::prelude::*;

    fn fresh_image(size: u32, ninodes: u32) -> (Vec<u8>, VsfsMeta) {
        let probe = VsfsMeta::new(size, 0, ninodes);
        let meta = VsfsMeta::new(size, size - probe.first_data_block, ninodes);
        let mut buf = vec![0u8; size as usize * BLOCK_SIZE];
        let mut io = MemVsIO::new(&mut buf);
        VsfsFormatter::format(&mut io, &meta).unwrap();
        (buf, meta)
    }

    fn populate(buf: &mut [u8], meta: &VsfsMeta) -> (u32, u32, u32) {
        let mut io = MemVsIO::new(buf);
        let mut inj = VsfsInjector::new(&mut io, meta);
        let dir = inj.create_dir(ROOT_INO, "etc").unwrap();
        let file = inj.create_file(dir, "motd", b"hello, world\n").unwrap();
        let dev = inj.create_device(ROOT_INO, "console", 1, 1).unwrap();
        (dir, file, dev)
    }

    fn first_error(buf: &mut [u8]) -> Result<Option<String>, FsCheckerError> {
        let mut io = MemVsIO::new(buf);
        let meta = VsfsMeta::from_io(&mut io).map_err(|_| FsCheckerError::Other("bad meta"))?;
        let mut checker = VsfsChecker::new(&mut io, &meta);
        let rep = checker.check_all()?;
        Ok(rep.first_error().map(str::to_owned))
    }

    fn assert_violation(buf: &mut [u8], v: Violation) {
        assert_eq!(first_error(buf).unwrap().as_deref(), Some(v.msg()));
    }

    #[test]
    fn test_fresh_image_passes() {
        let (mut buf, _) = fresh_image(128, 32);
        assert_eq!(first_error(&mut buf).unwrap(), None);
    }

    #[test]
    fn test_populated_image_passes() {
        let (mut buf, meta) = fresh_image(256, 64);
        populate(&mut buf, &meta);

        {
            let mut io = MemVsIO::new(&mut buf);
            let mut inj = VsfsInjector::new(&mut io, &meta);
            let f = inj
                .create_file(ROOT_INO, "big", &vec![7u8; (NDIRECT + 2) * BLOCK_SIZE])
                .unwrap();
            inj.link(ROOT_INO, "big2", f).unwrap();
        }

        assert_eq!(first_error(&mut buf).unwrap(), None);
    }

    #[test]
    fn test_idempotent() {
        let (mut buf, meta) = fresh_image(256, 64);
        populate(&mut buf, &meta);

        let first = first_error(&mut buf).unwrap();
        let second = first_error(&mut buf).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, None);
    }

    #[test]
    fn test_bad_inode_type() {
        let (mut buf, meta) = fresh_image(128, 32);
        // inode 5: illegal tag 7
        let off = meta.inode_offset(5) as usize;
        buf[off] = 7;
        assert_violation(&mut buf, Violation::BadInode);
    }

    #[test]
    fn test_bad_direct_address_low() {
        let (mut buf, meta) = fresh_image(128, 32);
        let (_, file, _) = populate(&mut buf, &meta);
        // addrs[0] of the file pointed below the data region
        let off = meta.inode_offset(file) as usize + 12;
        buf[off..off + 4].copy_from_slice(&1u32.to_le_bytes());
        assert_violation(&mut buf, Violation::BadDirectAddress);
    }

    #[test]
    fn test_bad_direct_address_high() {
        let (mut buf, meta) = fresh_image(128, 32);
        let (_, file, _) = populate(&mut buf, &meta);
        let off = meta.inode_offset(file) as usize + 12;
        buf[off..off + 4].copy_from_slice(&meta.size.to_le_bytes());
        assert_violation(&mut buf, Violation::BadDirectAddress);
    }

    #[test]
    fn test_bad_indirect_address() {
        let (mut buf, meta) = fresh_image(128, 32);
        let (_, file, _) = populate(&mut buf, &meta);
        // the indirect slot is addrs[NDIRECT]
        let off = meta.inode_offset(file) as usize + 12 + NDIRECT * 4;
        buf[off..off + 4].copy_from_slice(&2u32.to_le_bytes());
        assert_violation(&mut buf, Violation::BadIndirectAddress);
    }

    #[test]
    fn test_bad_address_inside_indirect_block() {
        let (mut buf, meta) = fresh_image(256, 32);
        {
            let mut io = MemVsIO::new(&mut buf);
            let mut inj = VsfsInjector::new(&mut io, &meta);
            inj.create_file(ROOT_INO, "big", &vec![1u8; (NDIRECT + 2) * BLOCK_SIZE])
                .unwrap();
        }
        let ind = {
            let mut io = MemVsIO::new(&mut buf);
            let mut r = VsfsResolver::new(&mut io, &meta);
            r.inode(2).unwrap().indirect()
        };
        // first slot of the pointer block aimed at the superblock
        let off = meta.block_offset(ind) as usize;
        buf[off..off + 4].copy_from_slice(&1u32.to_le_bytes());
        assert_violation(&mut buf, Violation::BadDirectAddress);
    }

    #[test]
    fn test_root_not_a_directory() {
        let (mut buf, meta) = fresh_image(128, 32);
        let off = meta.inode_offset(ROOT_INO) as usize;
        buf[off..off + 2].copy_from_slice(&2i16.to_le_bytes());
        assert_violation(&mut buf, Violation::BadRootDirectory);
    }

    #[test]
    fn test_root_dotdot_elsewhere() {
        let (mut buf, meta) = fresh_image(128, 32);
        // ".." of the root must name inode 1
        let off = meta.block_offset(meta.first_data_block) as usize + DIRENT_SIZE;
        buf[off..off + 2].copy_from_slice(&2u16.to_le_bytes());
        assert_violation(&mut buf, Violation::BadRootDirectory);
    }

    #[test]
    fn test_directory_dot_name_broken() {
        let (mut buf, meta) = fresh_image(128, 32);
        let (dir, _, _) = populate(&mut buf, &meta);
        let block = {
            let mut io = MemVsIO::new(&mut buf);
            let mut r = VsfsResolver::new(&mut io, &meta);
            r.inode(dir).unwrap().addrs[0]
        };
        let off = meta.block_offset(block) as usize + 2;
        buf[off] = b'x';
        assert_violation(&mut buf, Violation::DirNotProperlyFormatted);
    }

    #[test]
    fn test_directory_dot_self_broken() {
        let (mut buf, meta) = fresh_image(128, 32);
        let (dir, _, _) = populate(&mut buf, &meta);
        let block = {
            let mut io = MemVsIO::new(&mut buf);
            let mut r = VsfsResolver::new(&mut io, &meta);
            r.inode(dir).unwrap().addrs[0]
        };
        // "." must name the directory's own inode
        let off = meta.block_offset(block) as usize;
        buf[off..off + 2].copy_from_slice(&(ROOT_INO as u16).to_le_bytes());
        assert_violation(&mut buf, Violation::DirNotProperlyFormatted);
    }

    #[test]
    fn test_directory_dotdot_name_broken() {
        let (mut buf, meta) = fresh_image(128, 32);
        let (dir, _, _) = populate(&mut buf, &meta);
        let block = {
            let mut io = MemVsIO::new(&mut buf);
            let mut r = VsfsResolver::new(&mut io, &meta);
            r.inode(dir).unwrap().addrs[0]
        };
        let off = meta.block_offset(block) as usize + DIRENT_SIZE + 2;
        buf[off..off + 2].copy_from_slice(b"xx");
        assert_violation(&mut buf, Violation::DirNotProperlyFormatted);
    }

    #[test]
    fn test_directory_without_first_block() {
        let (mut buf, meta) = fresh_image(128, 32);
        let (dir, _, _) = populate(&mut buf, &meta);
        // wipe the whole address array; the orphaned blocks stay marked,
        // but the local phase reports the shape problem first
        let off = meta.inode_offset(dir) as usize + 12;
        buf[off..off + 4 * (NDIRECT + 1)].fill(0);
        assert_violation(&mut buf, Violation::DirNotProperlyFormatted);
    }

    #[test]
    fn test_used_address_marked_free() {
        let (mut buf, meta) = fresh_image(128, 32);
        let (_, file, _) = populate(&mut buf, &meta);
        let addr = {
            let mut io = MemVsIO::new(&mut buf);
            let mut r = VsfsResolver::new(&mut io, &meta);
            r.inode(file).unwrap().addrs[0]
        };
        let off = meta.bitmap_byte_offset(addr) as usize;
        buf[off] &= !(1 << (addr % 8));
        assert_violation(&mut buf, Violation::AddressMarkedFree);
    }

    #[test]
    fn test_bitmap_marks_unreferenced_block() {
        let (mut buf, meta) = fresh_image(128, 32);
        populate(&mut buf, &meta);
        let addr = meta.size - 2;
        let off = meta.bitmap_byte_offset(addr) as usize;
        buf[off] |= 1 << (addr % 8);
        assert_violation(&mut buf, Violation::BitmapMarksUnused);
    }

    #[test]
    fn test_direct_address_shared() {
        let (mut buf, meta) = fresh_image(128, 32);
        let (a, b) = {
            let mut io = MemVsIO::new(&mut buf);
            let mut inj = VsfsInjector::new(&mut io, &meta);
            let a = inj.create_file(ROOT_INO, "one", b"aaaa").unwrap();
            let b = inj.create_file(ROOT_INO, "two", b"bbbb").unwrap();
            (a, b)
        };
        let (block_a, block_b) = {
            let mut io = MemVsIO::new(&mut buf);
            let mut r = VsfsResolver::new(&mut io, &meta);
            (r.inode(a).unwrap().addrs[0], r.inode(b).unwrap().addrs[0])
        };
        // point "two" at "one"'s block and release its own so only the
        // shared-ownership rule can fire
        let off = meta.inode_offset(b) as usize + 12;
        buf[off..off + 4].copy_from_slice(&block_a.to_le_bytes());
        let bm = meta.bitmap_byte_offset(block_b) as usize;
        buf[bm] &= !(1 << (block_b % 8));
        assert_violation(&mut buf, Violation::DirectAddressReused);
    }

    #[test]
    fn test_indirect_address_shared() {
        let (mut buf, meta) = fresh_image(512, 32);
        let (big, small) = {
            let mut io = MemVsIO::new(&mut buf);
            let mut inj = VsfsInjector::new(&mut io, &meta);
            let big = inj
                .create_file(ROOT_INO, "big", &vec![9u8; (NDIRECT + 2) * BLOCK_SIZE])
                .unwrap();
            let small = inj.create_file(ROOT_INO, "small", b"s").unwrap();
            (big, small)
        };
        let ind = {
            let mut io = MemVsIO::new(&mut buf);
            let mut r = VsfsResolver::new(&mut io, &meta);
            r.inode(big).unwrap().indirect()
        };
        // "small" claims the same pointer block
        let off = meta.inode_offset(small) as usize + 12 + NDIRECT * 4;
        buf[off..off + 4].copy_from_slice(&ind.to_le_bytes());
        assert_violation(&mut buf, Violation::IndirectAddressReused);
    }

    #[test]
    fn test_unreachable_inode() {
        let (mut buf, meta) = fresh_image(128, 32);
        {
            let mut io = MemVsIO::new(&mut buf);
            let mut inj = VsfsInjector::new(&mut io, &meta);
            inj.alloc_inode(InodeType::File).unwrap();
        }
        assert_violation(&mut buf, Violation::InodeNotInDirectory);
    }

    #[test]
    fn test_entry_to_free_inode() {
        let (mut buf, meta) = fresh_image(128, 32);
        let file = {
            let mut io = MemVsIO::new(&mut buf);
            let mut inj = VsfsInjector::new(&mut io, &meta);
            inj.create_file(ROOT_INO, "ghost", b"").unwrap()
        };
        // free the inode but leave the entry in place
        let off = meta.inode_offset(file) as usize;
        buf[off..off + 2].copy_from_slice(&0i16.to_le_bytes());
        assert_violation(&mut buf, Violation::FreeInodeInDirectory);
    }

    #[test]
    fn test_bad_file_refcount() {
        let (mut buf, meta) = fresh_image(128, 32);
        let (_, file, _) = populate(&mut buf, &meta);
        // claim a second link that no directory carries
        let off = meta.inode_offset(file) as usize + 6;
        buf[off..off + 2].copy_from_slice(&2i16.to_le_bytes());
        assert_violation(&mut buf, Violation::BadFileRefCount);
    }

    #[test]
    fn test_extra_link_without_nlink() {
        let (mut buf, meta) = fresh_image(128, 32);
        let file = {
            let mut io = MemVsIO::new(&mut buf);
            let mut inj = VsfsInjector::new(&mut io, &meta);
            let f = inj.create_file(ROOT_INO, "f", b"x").unwrap();
            inj.link(ROOT_INO, "g", f).unwrap();
            f
        };
        let off = meta.inode_offset(file) as usize + 6;
        buf[off..off + 2].copy_from_slice(&1i16.to_le_bytes());
        assert_violation(&mut buf, Violation::BadFileRefCount);
    }

    #[test]
    fn test_directory_entered_twice() {
        let (mut buf, meta) = fresh_image(128, 32);
        let (dir, _, _) = populate(&mut buf, &meta);
        {
            let mut io = MemVsIO::new(&mut buf);
            let mut inj = VsfsInjector::new(&mut io, &meta);
            inj.add_dirent(ROOT_INO, "again", dir).unwrap();
        }
        assert_violation(&mut buf, Violation::DirectoryAppearsTwice);
    }

    #[test]
    fn test_entry_back_to_root_is_a_loop() {
        let (mut buf, meta) = fresh_image(128, 32);
        let (dir, _, _) = populate(&mut buf, &meta);
        {
            let mut io = MemVsIO::new(&mut buf);
            let mut inj = VsfsInjector::new(&mut io, &meta);
            inj.add_dirent(dir, "up", ROOT_INO).unwrap();
        }
        assert_violation(&mut buf, Violation::DirectoryLoop);
    }

    #[test]
    fn test_two_directory_cycle() {
        let (mut buf, meta) = fresh_image(128, 32);
        {
            let mut io = MemVsIO::new(&mut buf);
            let mut inj = VsfsInjector::new(&mut io, &meta);
            let d1 = inj.create_dir(ROOT_INO, "a").unwrap();
            let d2 = inj.create_dir(d1, "b").unwrap();
            inj.add_dirent(d2, "back", d1).unwrap();
        }
        // the cycle target is counted twice, never descended into twice
        assert_violation(&mut buf, Violation::DirectoryAppearsTwice);
    }

    #[test]
    fn test_entry_inode_out_of_range() {
        let (mut buf, meta) = fresh_image(128, 32);
        // hand-write an entry whose target cannot exist
        let off = meta.block_offset(meta.first_data_block) as usize + 2 * DIRENT_SIZE;
        buf[off..off + 2].copy_from_slice(&(meta.ninodes as u16 + 5).to_le_bytes());
        buf[off + 2] = b'z';
        assert!(first_error(&mut buf).is_err());
    }

    #[test]
    fn test_truncated_image_is_an_error_not_a_panic() {
        let (buf, _) = fresh_image(128, 32);
        let mut short = buf[..64 * BLOCK_SIZE].to_vec();
        assert!(first_error(&mut short).is_err());
    }

    #[test]
    fn test_bitmap_usage_round_trip() {
        // pseudo-random trees: exactly the referenced blocks are marked,
        // so the bitmap agreement rules hold by construction
        let mut seed = 0x2545_F491u32;
        let mut next = move || {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            seed
        };

        for _ in 0..4 {
            let (mut buf, meta) = fresh_image(512, 64);
            {
                let mut io = MemVsIO::new(&mut buf);
                let mut inj = VsfsInjector::new(&mut io, &meta);
                let mut dirs = vec![ROOT_INO];
                for i in 0..12 {
                    let parent = dirs[(next() as usize) % dirs.len()];
                    match next() % 3 {
                        0 => {
                            let d = inj.create_dir(parent, &format!("d{i}")).unwrap();
                            dirs.push(d);
                        }
                        1 => {
                            let len = (next() as usize) % (3 * BLOCK_SIZE);
                            let data = vec![i as u8; len];
                            inj.create_file(parent, &format!("f{i}"), &data).unwrap();
                        }
                        _ => {
                            let len = NDIRECT * BLOCK_SIZE + (next() as usize) % BLOCK_SIZE;
                            let data = vec![i as u8; len];
                            inj.create_file(parent, &format!("g{i}"), &data).unwrap();
                        }
                    }
                }
            }
            assert_eq!(first_error(&mut buf).unwrap(), None);
        }
    }
}
