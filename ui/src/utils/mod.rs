//! Cross-cutting utilities.
//!
//! - **console_macros**: WASM-compatible logging macros for browser console
//!   output, used by the component layer.

pub mod console_macros;
