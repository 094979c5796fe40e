//! # goku-parser
//!
//! ast-grep-based Go source aggregation and struct contract extraction.
//!
//! A [`SourceUnit`] collects the files of one Go package. [`extract`] walks
//! them for a target struct and produces a [`goku_core::StructContract`]:
//! - type expressions are lowered into [`TypeExpr`] and rendered by [`render`]
//! - every package qualifier a rendered type touches must resolve to an import,
//!   otherwise the whole extraction fails with [`ParserError::ImportResolution`]

pub mod error;
pub mod extractor;
pub mod imports;
pub mod parser;
pub mod render;
pub mod source;
pub mod type_expr;

pub use error::ParserError;
pub use extractor::extract;
pub use imports::ImportTable;
pub use parser::{AstTree, parse_go};
pub use render::{Rendered, render};
pub use source::{SourceFile, SourceUnit};
pub use type_expr::{ChanDir, TypeExpr};
