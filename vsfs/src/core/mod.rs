// SPDX-License-Identifier: MIT

// === Sub-modules ===
#[cfg(feature = "alloc")]
pub mod checker;
pub mod errors;
mod macros;

// === Error types ===
pub use errors::*;
