//! CLI subcommands.

pub mod dialects;
pub mod support;
pub mod translate;
