//! Typed views over Gateway response bodies.
//!
//! The Gateway does not promise a schema, so these wrappers keep the decoded
//! JSON intact and expose accessors for the handful of fields the SDK's own
//! flows need. Anything else is reachable through [`field`](Order::field) or
//! the raw value.

use serde_json::Value;

macro_rules! value_wrapper {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name(Value);

        impl $name {
            /// Wraps a decoded response body.
            #[must_use]
            pub fn new(value: Value) -> Self {
                Self(value)
            }

            /// Borrow of the underlying JSON value.
            #[must_use]
            pub fn as_value(&self) -> &Value {
                &self.0
            }

            /// Consumes the wrapper, returning the JSON value.
            #[must_use]
            pub fn into_inner(self) -> Value {
                self.0
            }

            /// An arbitrary top-level field.
            #[must_use]
            pub fn field(&self, name: &str) -> Option<&Value> {
                self.0.get(name)
            }

            fn str_field(&self, name: &str) -> Option<&str> {
                self.0.get(name).and_then(Value::as_str)
            }
        }

        impl From<Value> for $name {
            fn from(value: Value) -> Self {
                Self::new(value)
            }
        }
    };
}

value_wrapper! {
    /// An order as returned by the Gateway.
    Order
}

impl Order {
    /// Order identifier.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.str_field("id")
    }

    /// Current order status (`pending`, `paid`, ...).
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.str_field("status")
    }

    /// Caller-supplied external identifier.
    #[must_use]
    pub fn external_id(&self) -> Option<&str> {
        self.str_field("external_id")
    }

    /// Absolute URL to execute a payment for this order at a
    /// method-specific endpoint. Feed it to
    /// [`execute_payment`](crate::GatewayClient::execute_payment).
    #[must_use]
    pub fn payment_url(&self) -> Option<&str> {
        self.str_field("payment_url")
    }

    /// Order amount in minor units.
    #[must_use]
    pub fn amount(&self) -> Option<i64> {
        self.0.get("amount").and_then(Value::as_i64)
    }

    /// ISO 4217 currency code.
    #[must_use]
    pub fn currency(&self) -> Option<&str> {
        self.str_field("currency")
    }
}

value_wrapper! {
    /// A client (customer) record.
    ClientRecord
}

impl ClientRecord {
    /// Client identifier.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.str_field("id")
    }

    /// Client email address.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.str_field("email")
    }

    /// Client display name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }
}

value_wrapper! {
    /// A product in the Gateway catalog.
    Product
}

impl Product {
    /// Product identifier.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.str_field("id")
    }

    /// Product name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    /// Product price in minor units.
    #[must_use]
    pub fn price(&self) -> Option<i64> {
        self.0.get("price").and_then(Value::as_i64)
    }
}

value_wrapper! {
    /// A paginated listing: `results` plus a total `count`.
    Collection
}

impl Collection {
    /// Items on the current page.
    #[must_use]
    pub fn results(&self) -> &[Value] {
        self.0
            .get("results")
            .and_then(Value::as_array)
            .map_or(&[], Vec::as_slice)
    }

    /// Total number of items across all pages.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.0.get("count").and_then(Value::as_u64).unwrap_or_default()
    }

    /// Whether the listing has no items at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Absolute URL of the next page, when there is one. Feed it back to
    /// [`get`](crate::GatewayClient::get) as the endpoint.
    #[must_use]
    pub fn next(&self) -> Option<&str> {
        self.str_field("next")
    }

    /// Absolute URL of the previous page, when there is one.
    #[must_use]
    pub fn previous(&self) -> Option<&str> {
        self.str_field("previous")
    }
}
