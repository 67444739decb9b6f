//! # Entity Graph Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Shared entity models
//! └── integration/      # Cross-crate flows
//!     ├── fixture_planning.rs
//!     └── listener_assembly.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p graph-tests
//!
//! # Benchmarks
//! cargo bench -p graph-tests
//! ```

pub mod fixtures;
