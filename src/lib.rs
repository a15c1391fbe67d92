//! Workspace placeholder crate.
//!
//! This crate exists to expose shared feature flags that map to the
//! individual workspace crates (e.g., `core-catalog`, `provider-youtube`,
//! `bridge-reqwest`). Host applications can depend on `joyable-catalog` and
//! enable the documented features without needing to wire each crate
//! individually.
