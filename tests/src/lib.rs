//! End-to-end checks that drive the parser, allocator and report together.

pub mod planning;
