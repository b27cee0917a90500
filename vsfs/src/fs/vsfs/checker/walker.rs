// SPDX-License-Identifier: MIT

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::vec::Vec;

use crate::core::checker::VerifyReport;
use crate::core::errors::{FsCheckerError, FsCheckerResult};
use crate::ensure;
use crate::fs::vsfs::{constant::*, meta::VsfsMeta, resolver::VsfsResolver, types::*, violation::Violation};
use vsio::VsIO;

/// Depth-first walk of the directory tree, counting directory-entry
/// references per inode.
///
/// The walk starts at the root, which is seeded with one reference (it is
/// the traversal's anchor, not reached via an entry); inode 0 is never
/// counted. Directories are descended into exactly once: a repeat
/// encounter still bumps the target's count (the post-pass reports the
/// duplicate) but does not recurse, so a corrupted cyclic image can never
/// produce an unbounded walk. An entry leading back to the root, or a
/// chain deeper than [`MAX_WALK_DEPTH`], is reported as a loop outright.
pub struct VsfsWalker<'a, IO: VsIO + ?Sized> {
    io: &'a mut IO,
    meta: &'a VsfsMeta,
    ref_counts: Vec<u32>,
    visited: Vec<bool>,
}

impl<'a, IO: VsIO + ?Sized> VsfsWalker<'a, IO> {
    pub fn new(io: &'a mut IO, meta: &'a VsfsMeta) -> Self {
        let n = meta.ninodes as usize;
        Self {
            io,
            meta,
            ref_counts: vec![0u32; n],
            visited: vec![false; n],
        }
    }

    /// Run the traversal; loop findings land in `rep`.
    pub fn walk(&mut self, rep: &mut VerifyReport) -> FsCheckerResult<()> {
        self.ref_counts[ROOT_INO as usize] = 1;
        self.visited[ROOT_INO as usize] = true;

        let mut stack = vec![(ROOT_INO, 0usize)];

        while let Some((dir, depth)) = stack.pop() {
            if depth > MAX_WALK_DEPTH {
                rep.push(Violation::DirectoryLoop.into());
                return Ok(());
            }

            let dino = VsfsResolver::new(&mut *self.io, self.meta).inode(dir)?;
            if dino.itype() != Some(InodeType::Directory) {
                continue;
            }

            let mut blocks: Vec<u32> = dino.direct().iter().copied().filter(|&a| a != 0).collect();
            let ind = dino.indirect();
            if ind != 0 {
                let entries = VsfsResolver::new(&mut *self.io, self.meta).indirect(ind)?;
                blocks.extend(entries.iter().copied().filter(|&a| a != 0));
            }

            for addr in blocks {
                let entries = VsfsResolver::new(&mut *self.io, self.meta).dirents(addr)?;
                for de in entries.iter() {
                    if de.is_empty() || de.name_is(".") || de.name_is("..") {
                        continue;
                    }
                    let target = de.inum as u32;
                    ensure!(
                        target < self.meta.ninodes,
                        FsCheckerError::Invalid("directory entry references inode out of range")
                    );
                    self.ref_counts[target as usize] += 1;

                    let tino = VsfsResolver::new(&mut *self.io, self.meta).inode(target)?;
                    if tino.itype() == Some(InodeType::Directory) {
                        if target == ROOT_INO {
                            rep.push(Violation::DirectoryLoop.into());
                            return Ok(());
                        }
                        if !self.visited[target as usize] {
                            self.visited[target as usize] = true;
                            stack.push((target, depth + 1));
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Reference counts indexed by inode number.
    pub fn into_ref_counts(self) -> Vec<u32> {
        self.ref_counts
    }
}
