//! Trap Stock Screen
//!
//! Flags financially unhealthy issuers before they are scored. Every rule is
//! evaluated independently and a missing metric never triggers a rule.

pub mod models;
pub mod screen;

pub use models::{format_thousands, TrapReason, TrapStockCheckResult};
pub use screen::{check_trap_stock, TrapStockScreen};
