// SPDX-License-Identifier: MIT
//! Structural rule violations and their fixed diagnostics

use core::fmt;

/// One variant per structural rule a VSFS image can break.
///
/// Each carries a stable short code (for report filtering) and the fixed
/// one-line diagnostic the checker emits for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Illegal inode type tag
    BadInode,
    /// Direct address outside the data region
    BadDirectAddress,
    /// Indirect address outside the data region
    BadIndirectAddress,
    /// Inode 1 is not a well-formed root directory
    BadRootDirectory,
    /// Directory missing its "." / ".." shape
    DirNotProperlyFormatted,
    /// Address used by an inode but free in the bitmap
    AddressMarkedFree,
    /// Bitmap claims a block is used but nothing references it
    BitmapMarksUnused,
    /// A block used as a direct address by more than one holder
    DirectAddressReused,
    /// A block used as an indirect address by more than one holder
    IndirectAddressReused,
    /// In-use inode unreachable from the root directory
    InodeNotInDirectory,
    /// Directory entry referencing a free inode
    FreeInodeInDirectory,
    /// File link count disagrees with its directory references
    BadFileRefCount,
    /// Directory referenced by more than one entry
    DirectoryAppearsTwice,
    /// Directory tree contains a cycle
    DirectoryLoop,
}

impl Violation {
    pub fn code(&self) -> &'static str {
        match self {
            Violation::BadInode => "INO.TYPE",
            Violation::BadDirectAddress => "INO.DIRECT",
            Violation::BadIndirectAddress => "INO.INDIRECT",
            Violation::BadRootDirectory => "ROOT.SHAPE",
            Violation::DirNotProperlyFormatted => "DIR.FORMAT",
            Violation::AddressMarkedFree => "BMP.FREE",
            Violation::BitmapMarksUnused => "BMP.ORPHAN",
            Violation::DirectAddressReused => "BLK.DIRECT",
            Violation::IndirectAddressReused => "BLK.INDIRECT",
            Violation::InodeNotInDirectory => "REF.MISSING",
            Violation::FreeInodeInDirectory => "REF.FREE",
            Violation::BadFileRefCount => "REF.NLINK",
            Violation::DirectoryAppearsTwice => "REF.DUPDIR",
            Violation::DirectoryLoop => "WALK.LOOP",
        }
    }

    pub fn msg(&self) -> &'static str {
        match self {
            Violation::BadInode => "bad inode.",
            Violation::BadDirectAddress => "bad direct address in inode.",
            Violation::BadIndirectAddress => "bad indirect address in inode.",
            Violation::BadRootDirectory => "root directory does not exist.",
            Violation::DirNotProperlyFormatted => "directory not properly formatted.",
            Violation::AddressMarkedFree => "address used by inode but marked free in bitmap.",
            Violation::BitmapMarksUnused => "bitmap marks block in use but it is not in use.",
            Violation::DirectAddressReused => "direct address used more than once.",
            Violation::IndirectAddressReused => "indirect address used more than once.",
            Violation::InodeNotInDirectory => "inode marked use but not found in directory.",
            Violation::FreeInodeInDirectory => "inode referred to in directory but marked free.",
            Violation::BadFileRefCount => "bad reference count for file.",
            Violation::DirectoryAppearsTwice => "directory appears more than once in file system.",
            Violation::DirectoryLoop => "loop detected in directory tree.",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.msg())
    }
}

#[cfg(feature = "alloc")]
impl From<Violation> for crate::core::checker::Finding {
    fn from(v: Violation) -> Self {
        crate::core::checker::Finding::err(v.code(), v.msg())
    }
}
