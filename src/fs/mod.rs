//! Filesystem helpers for writing the caption document.

pub mod atomic;

pub use atomic::atomic_write_file;
