//! # wisata-rs
//!
//! Workspace facade over [`wisata_core`]. The page logic lives in
//! `crates/wisata-core`; the browser bindings in `crates/wisata-wasm`.
//! This crate only re-exports the core so the demos can say
//! `use wisata_rs::prelude::*`.

pub use wisata_core::*;
