// SPDX-License-Identifier: MIT
//! VSFS on-disk inode structure

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::fs::vsfs::constant::*;

/// Legal inode type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InodeType {
    Free = 0,
    Directory = 1,
    File = 2,
    Device = 3,
}

impl InodeType {
    /// Decode the on-disk tag; `None` for anything outside the legal range.
    pub fn from_raw(raw: i16) -> Option<Self> {
        match raw {
            0 => Some(InodeType::Free),
            1 => Some(InodeType::Directory),
            2 => Some(InodeType::File),
            3 => Some(InodeType::Device),
            _ => None,
        }
    }

    pub fn raw(self) -> i16 {
        self as i16
    }
}

/// VSFS on-disk inode (64 bytes).
///
/// `addrs` holds `NDIRECT` direct block addresses followed by one indirect
/// address; 0 marks an unused slot throughout.
#[derive(Debug, Clone, Copy, IntoBytes, FromBytes, KnownLayout, Immutable)]
#[repr(C)]
pub struct Dinode {
    /// Type tag (see [`InodeType`])
    pub typ: i16,
    /// Major device number (Device type only)
    pub major: i16,
    /// Minor device number (Device type only)
    pub minor: i16,
    /// Number of directory entries referring to this inode
    pub nlink: i16,
    /// Size in bytes
    pub size: u32,
    /// Direct addresses plus one trailing indirect address
    pub addrs: [u32; NDIRECT + 1],
}

impl Dinode {
    pub fn empty() -> Self {
        Self {
            typ: InodeType::Free.raw(),
            major: 0,
            minor: 0,
            nlink: 0,
            size: 0,
            addrs: [0; NDIRECT + 1],
        }
    }

    pub fn itype(&self) -> Option<InodeType> {
        InodeType::from_raw(self.typ)
    }

    pub fn is_free(&self) -> bool {
        self.typ == InodeType::Free.raw()
    }

    /// The indirect address slot.
    pub fn indirect(&self) -> u32 {
        self.addrs[NDIRECT]
    }

    /// The direct address slots.
    pub fn direct(&self) -> &[u32] {
        &self.addrs[..NDIRECT]
    }
}

const _: () = assert!(core::mem::size_of::<Dinode>() == INODE_SIZE);
