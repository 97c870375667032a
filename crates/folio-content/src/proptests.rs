//! Property-based tests for header parsing and rendering.
