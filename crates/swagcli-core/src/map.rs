//! Map type used by the resource and profile models.
//!
//! The concrete type depends on the `preserve_order` feature:
//! - When `preserve_order` is enabled: `IndexMap` (operations and commands keep the order in
//!   which the swagger and catalog documents list them)
//! - When disabled (default): `BTreeMap` (sorted by key)
//!
//! Ordering is observable: it decides which `patch` sibling is consulted during the PUT/PATCH
//! reconciliation and the order of equally ranked operation group candidates.

cfg_if::cfg_if! {
    if #[cfg(feature = "preserve_order")] {
        pub use indexmap::IndexMap as Map;
    } else {
        pub use std::collections::BTreeMap as Map;
    }
}
