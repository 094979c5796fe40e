//! # goku-core
//!
//! Data model shared by the goku crates.
//!
//! A [`StructContract`](entities::StructContract) is the single output of a
//! metadata extraction run: the package a struct lives in, the imports its
//! method signatures need, its generic parameters, and every method bound
//! to it. It is built once by `goku-parser` and read by `goku-gen`, which may
//! render it any number of times with different options.

pub mod entities;
pub mod enums;

pub use entities::{ImportRef, MethodInfo, StructContract, TypeInfo, basename};
pub use enums::{MethodVisibility, ReceiverKind};
