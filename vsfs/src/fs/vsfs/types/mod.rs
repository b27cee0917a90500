// SPDX-License-Identifier: MIT

mod dirent;
mod inode;
mod superblock;

pub use dirent::Dirent;
pub use inode::{Dinode, InodeType};
pub use superblock::Superblock;
