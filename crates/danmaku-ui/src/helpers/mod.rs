// crates/danmaku-ui/src/helpers/mod.rs
//
// UI-crate utilities with no panel of their own.

pub mod color;
pub mod log;
pub mod measure;
