//! End-to-end tests for the ov-vfs-stream adapter.
