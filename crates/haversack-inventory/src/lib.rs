//! Haversack slot inventory bounded context.
//!
//! A fixed grid of item slots plus a trailing action bar. The `domain`
//! module holds the slot container and the `Inventory` aggregate that is the
//! single authority over it; `application` loads, mutates and persists
//! inventories and fans committed events out to observers.

pub mod application;
pub mod domain;
