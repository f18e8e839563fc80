//! Fixed storage keys.
//!
//! These are wire constants: changing one orphans previously persisted
//! state.

/// Durable cart record: the ordered line array.
pub const CART_KEY: &str = "mini_cart_v2";

/// Session-scoped in-flight order record.
pub const ORDER_KEY: &str = "mini_last_order_v2";

/// Durable bounded click log.
pub const CLICK_LOG_KEY: &str = "acdl_click_log";
