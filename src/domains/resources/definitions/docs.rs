//! ShipStation API documentation resource.
//!
//! A fixed, ordered table of Markdown sections, one per endpoint group. The
//! whole table is served at `shipstation://docs`; a single section at
//! `shipstation://docs/{section}`.

use super::ResourceDefinition;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};

/// Documentation resource listing every endpoint group.
pub struct DocsResource;

impl ResourceDefinition for DocsResource {
    const URI: &'static str = "shipstation://docs";
    const NAME: &'static str = "documentation";
    const DESCRIPTION: &'static str = "ShipStation API reference, one section per endpoint group";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::Documentation(None))
    }
}

/// URI prefix of the per-section template.
pub const SECTION_URI_PREFIX: &str = "shipstation://docs/";

/// Section key that selects the full document.
const ALL_SECTIONS: &str = "all";

const SECTIONS: &[(&str, &str)] = &[
    ("overview", OVERVIEW),
    ("orders", ORDERS),
    ("shipments", SHIPMENTS),
    ("carriers", CARRIERS),
    ("warehouses", WAREHOUSES),
    ("products", PRODUCTS),
    ("customers", CUSTOMERS),
    ("stores", STORES),
    ("webhooks", WEBHOOKS),
    ("fulfillments", FULFILLMENTS),
];

/// Section keys in table order.
pub fn section_keys() -> impl Iterator<Item = &'static str> {
    SECTIONS.iter().map(|(key, _)| *key)
}

/// Render the requested section.
///
/// `None` or `"all"` yields every section joined by a blank line. An unknown
/// key yields a message naming the valid keys instead of an error.
pub fn render(section: Option<&str>) -> String {
    match section {
        None | Some(ALL_SECTIONS) => SECTIONS
            .iter()
            .map(|(_, text)| *text)
            .collect::<Vec<_>>()
            .join("\n\n"),
        Some(key) => match SECTIONS.iter().find(|(k, _)| *k == key) {
            Some((_, text)) => (*text).to_string(),
            None => format!(
                "Documentation for \"{}\" not found. Available sections: {}",
                key,
                section_keys().collect::<Vec<_>>().join(", ")
            ),
        },
    }
}

const OVERVIEW: &str = "# ShipStation API Overview

The ShipStation API is a RESTful JSON API.

Base URL: https://ssapi.shipstation.com/

## Authentication

Requests use HTTP Basic authentication with the API Key as the username and the API Secret as the password.

## Rate Limiting

The API allows 40 requests per minute. Requests over the limit receive a 429 Too Many Requests response.";

const ORDERS: &str = "# ShipStation Orders API

Orders are the core of ShipStation. These endpoints create, read, update and delete orders.

## Endpoints

- GET /orders - List orders
- GET /orders/{orderId} - Get order details
- POST /orders/createorder - Create or update an order
- POST /orders/markasshipped - Mark an order as shipped
- DELETE /orders/{orderId} - Delete an order
- POST /orders/addtag - Add a tag to an order
- POST /orders/removetag - Remove a tag from an order
- POST /orders/restorefromhold - Restore an order from on-hold status
- POST /orders/holduntil - Hold an order until a specified date";

const SHIPMENTS: &str = "# ShipStation Shipments API

Shipments are packages that have been processed through ShipStation.

## Endpoints

- GET /shipments - List shipments
- GET /shipments/{shipmentId} - Get shipment details
- POST /shipments/createlabel - Create a shipping label
- POST /shipments/voidlabel - Void a shipping label";

const CARRIERS: &str = "# ShipStation Carriers API

Carriers are shipping providers such as USPS, UPS and FedEx.

## Endpoints

- GET /carriers - List carriers
- GET /carriers/listpackages - List packages for a carrier
- GET /carriers/listservices - List services for a carrier";

const WAREHOUSES: &str = "# ShipStation Warehouses API

Warehouses are the physical locations orders ship from.

## Endpoints

- GET /warehouses - List warehouses
- POST /warehouses - Create a warehouse
- GET /warehouses/{warehouseId} - Get warehouse details
- PUT /warehouses/{warehouseId} - Update a warehouse
- DELETE /warehouses/{warehouseId} - Delete a warehouse";

const PRODUCTS: &str = "# ShipStation Products API

Products are the items you sell.

## Endpoints

- GET /products - List products
- POST /products - Create a product
- GET /products/{productId} - Get product details
- PUT /products/{productId} - Update a product
- DELETE /products/{productId} - Delete a product";

const CUSTOMERS: &str = "# ShipStation Customers API

Customers are the people who have placed orders.

## Endpoints

- GET /customers - List customers
- GET /customers/{customerId} - Get customer details";

const STORES: &str = "# ShipStation Stores API

Stores are the sales channels connected to ShipStation.

## Endpoints

- GET /stores - List stores
- GET /stores/{storeId} - Get store details
- GET /stores/marketplaces - List marketplaces
- POST /stores/refreshstore - Refresh store data
- POST /stores/deactivate - Deactivate a store
- POST /stores/reactivate - Reactivate a store";

const WEBHOOKS: &str = "# ShipStation Webhooks API

Webhooks deliver notifications when events occur in ShipStation.

## Endpoints

- GET /webhooks - List webhooks
- POST /webhooks/subscribe - Subscribe to a webhook
- DELETE /webhooks/{webhookId} - Unsubscribe from a webhook";

const FULFILLMENTS: &str = "# ShipStation Fulfillments API

Fulfillments are orders handled by third-party fulfillment services.

## Endpoints

- GET /fulfillments - List fulfillments
- POST /fulfillments/createorder - Create a fulfillment order";
