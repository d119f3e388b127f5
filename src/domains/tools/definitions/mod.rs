//! Tool definitions module.
//!
//! One file per ShipStation endpoint group. Each group exposes a
//! `descriptors()` function returning its tools in registration order.

pub mod carriers;
pub mod common;
pub mod customers;
pub mod fulfillments;
pub mod orders;
pub mod products;
pub mod shipments;
pub mod stores;
pub mod warehouses;
pub mod webhooks;

use super::ToolDescriptor;

/// Every tool descriptor, grouped by endpoint family in a fixed order.
pub fn all_descriptors() -> Vec<ToolDescriptor> {
    [
        orders::descriptors(),
        shipments::descriptors(),
        carriers::descriptors(),
        warehouses::descriptors(),
        products::descriptors(),
        customers::descriptors(),
        stores::descriptors(),
        webhooks::descriptors(),
        fulfillments::descriptors(),
    ]
    .into_iter()
    .flatten()
    .collect()
}
