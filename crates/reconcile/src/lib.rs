//! # Reconcile
//!
//! Incremental reconciliation for nested collections.
//!
//! A declarative host usually diffs whole resources. When a resource holds a
//! collection whose members map to separate remote calls (roles in a role
//! collection, users in an assignment), the update handler has to work out
//! which members to add and which to remove itself. This crate provides the
//! primitive for that.
//!
//! ## Core Concepts
//!
//! - **difference**: elements of one slice with no match in another, under a
//!   caller-supplied equality predicate
//! - **Delta**: `desired \ current` to add and `current \ desired` to remove
//! - **same_key**: predicate comparing a projection of each element
//!
//! No ordering, hashing or `PartialEq` is required of the element type; the
//! predicate alone defines equality.
//!
//! ## Example
//!
//! ```
//! use reconcile::{Delta, same_key};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Role { name: String, description: String }
//!
//! let role = |name: &str, description: &str| Role {
//!     name: name.into(),
//!     description: description.into(),
//! };
//!
//! let desired = vec![role("Admin", ""), role("Viewer", "read only")];
//! let current = vec![role("Viewer", "old text"), role("Auditor", "")];
//!
//! let delta = Delta::compute(&desired, &current, same_key(|r: &Role| r.name.clone()));
//! assert_eq!(delta.to_add, vec![role("Admin", "")]);
//! assert_eq!(delta.to_remove, vec![role("Auditor", "")]);
//! ```

pub mod delta;
pub mod diff;

// Re-export main types at crate root
pub use delta::{Delta, DeltaSummary};
pub use diff::{contains, difference, same_key};
