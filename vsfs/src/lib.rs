// SPDX-License-Identifier: MIT
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
#[macro_use]
extern crate alloc;

// Core Modules
pub mod core;
pub mod fs;

// Reusable checker framework
#[cfg(feature = "alloc")]
pub use crate::core::checker::{Finding, FsChecker, Severity, VerifyReport};
pub use crate::core::errors::*;

/// VSFS filesystem implementation.
///
/// See [`vsfs::VsfsMeta`], [`vsfs::VsfsChecker`], and [`vsfs::VsfsInjector`].
pub mod vsfs {
    pub use super::fs::vsfs::prelude;
    pub use super::fs::vsfs::prelude::*;
}
