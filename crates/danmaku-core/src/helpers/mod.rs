// crates/danmaku-core/src/helpers/mod.rs
//
// Small shared utilities with no engine state of their own.

pub mod search;
pub mod time;
