//! CLI command implementations.
//!
//! Each command is in its own submodule with an options struct and an
//! `execute_*` entry point.

pub mod build;
pub mod extract;
pub mod layouts;
pub mod package;

pub use build::{execute_build, BuildOptions};
pub use extract::{execute_extract, ExtractOptions};
pub use layouts::{execute_layouts, LayoutsOptions};
pub use package::{execute_package, PackageOptions};
