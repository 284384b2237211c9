//! Internal utilities for agonyl-rs modules.

#![deny(future_incompatible)]
#![deny(nonstandard_style)]
#![deny(rust_2018_idioms)]
#![deny(unsafe_code)]
#![warn(unused)]
#![allow(missing_docs)]

mod names;
mod read;
mod slots;
#[cfg(feature = "strings")]
mod strings;

pub use names::*;
pub use read::*;
pub use slots::*;
#[cfg(feature = "strings")]
pub use strings::*;
