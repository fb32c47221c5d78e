//! Request middleware.
//!
//! Purpose: request lifecycle concerns that sit outside any one handler,
//! currently trace-id assignment.

pub mod trace;

pub use trace::Trace;
