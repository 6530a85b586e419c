//! Integration tests for Layer 0: Foundation
//!
//! Tests for item identifiers and the error taxonomy.

mod ids;
