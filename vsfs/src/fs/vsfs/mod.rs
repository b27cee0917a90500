// SPDX-License-Identifier: MIT
#[cfg(feature = "alloc")]
pub mod checker;
pub mod constant;
pub mod formatter;
pub mod injector;
pub mod meta;
pub mod resolver;
pub mod types;
pub mod violation;

// Public Interface
pub mod traits {
    #[cfg(feature = "alloc")]
    pub use super::checker::{VsfsChecker, VsfsWalker};
    pub use super::formatter::VsfsFormatter;
    pub use super::injector::VsfsInjector;
    pub use super::meta::VsfsMeta;
    pub use super::resolver::VsfsResolver;
}

pub mod prelude {
    pub use super::constant::*;
    pub use super::traits::*;
    pub use super::types::{Dinode, Dirent, InodeType, Superblock};
    pub use super::violation::Violation;
    #[cfg(feature = "alloc")]
    pub use crate::core::checker::{
        CoreVerifyOptions, Finding, FsChecker, ReportDisplayOpts, Severity, VerifierOptionsLike,
        VerifyPhases, VerifyReport,
    };
    pub use crate::core::errors::*;
    pub use vsio::prelude::*;
}
