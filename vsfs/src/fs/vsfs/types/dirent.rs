// SPDX-License-Identifier: MIT
//! VSFS directory entry structure

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::fs::vsfs::constant::*;

/// VSFS directory entry (16 bytes).
///
/// `inum == 0` marks an empty slot; `name` is NUL-padded.
#[derive(Debug, Clone, Copy, IntoBytes, FromBytes, KnownLayout, Immutable)]
#[repr(C)]
pub struct Dirent {
    /// Inode number of the entry target
    pub inum: u16,
    /// Entry name, NUL-padded
    pub name: [u8; DIRSIZ],
}

impl Dirent {
    pub fn new(inum: u16, name: &str) -> Self {
        let mut buf = [0u8; DIRSIZ];
        let bytes = name.as_bytes();
        let len = bytes.len().min(DIRSIZ);
        buf[..len].copy_from_slice(&bytes[..len]);
        Self { inum, name: buf }
    }

    pub fn empty() -> Self {
        Self {
            inum: 0,
            name: [0u8; DIRSIZ],
        }
    }

    /// Check if this is an empty/unused slot.
    pub fn is_empty(&self) -> bool {
        self.inum == 0
    }

    /// Entry name without the NUL padding.
    pub fn name_bytes(&self) -> &[u8] {
        let end = self
            .name
            .iter()
            .position(|&c| c == 0)
            .unwrap_or(self.name.len());
        &self.name[..end]
    }

    /// Compare the entry name against `s` without allocating.
    pub fn name_is(&self, s: &str) -> bool {
        self.name_bytes() == s.as_bytes()
    }
}

const _: () = assert!(core::mem::size_of::<Dirent>() == DIRENT_SIZE);
