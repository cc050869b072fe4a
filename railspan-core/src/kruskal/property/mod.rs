//! Property-based tests for the lazy Kruskal iterator.
//!
//! Checks the iterator against a sequential oracle, validates structural
//! invariants of the produced forest (acyclicity, edge count, connectivity,
//! weight ordering) and confirms that repeated runs are identical across
//! graph topologies with varied weight distributions.

mod oracle;
mod strategies;
mod structural;
mod types;
