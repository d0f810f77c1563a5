//! VPS order items.
//!
//! This module provides:
//! - The item and option payloads a cart lists for a VPS plan
//! - Price lookup by duration and pricing mode, with a fallback to the
//!   first offered configuration
//! - Mandatory option selection and option family listing
//!
//! Creating carts and adding items to them needs an authenticated session
//! and is not done here.

mod item;
mod option;

// Re-export public API
pub use item::{ItemInfo, ItemInfos, ItemPrice, Price, PriceConfig, Promotion};
pub use option::{ItemOption, ItemOptions};
