//! The component inventory.
//!
//! A fixed list of third-party components built at compile time. The list is
//! never mutated, so it is shared by `&'static` reference with every request
//! handler.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// One third-party software component tracked in the inventory.
///
/// Field values are free text. `version` looks like a semantic version and
/// `license` like an SPDX identifier, but neither is validated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Component {
    /// Package name (e.g., "openssl")
    pub name: Cow<'static, str>,
    /// Package version (e.g., "3.0.8")
    pub version: Cow<'static, str>,
    /// License identifier (e.g., "Apache-2.0")
    pub license: Cow<'static, str>,
    /// Organization or group supplying the package
    pub supplier: Cow<'static, str>,
}

impl Component {
    /// Create a component from static strings.
    pub const fn new(
        name: &'static str,
        version: &'static str,
        license: &'static str,
        supplier: &'static str,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            version: Cow::Borrowed(version),
            license: Cow::Borrowed(license),
            supplier: Cow::Borrowed(supplier),
        }
    }
}

/// Components served by `GET /components`, in response order.
pub static COMPONENTS: &[Component] = &[
    Component::new("openssl", "3.0.8", "Apache-2.0", "OpenSSL Foundation"),
    Component::new("curl", "8.4.0", "MIT", "curl contributors"),
    Component::new("zlib", "1.3.1", "Zlib", "zlib authors"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_order() {
        let names: Vec<&str> = COMPONENTS.iter().map(|c| c.name.as_ref()).collect();
        assert_eq!(names, ["openssl", "curl", "zlib"]);
    }

    #[test]
    fn test_inventory_fields() {
        assert_eq!(
            COMPONENTS[0],
            Component::new("openssl", "3.0.8", "Apache-2.0", "OpenSSL Foundation")
        );
        assert_eq!(
            COMPONENTS[1],
            Component::new("curl", "8.4.0", "MIT", "curl contributors")
        );
        assert_eq!(
            COMPONENTS[2],
            Component::new("zlib", "1.3.1", "Zlib", "zlib authors")
        );
    }

    #[test]
    fn test_serialized_field_names() {
        let value = serde_json::to_value(&COMPONENTS[1]).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "curl",
                "version": "8.4.0",
                "license": "MIT",
                "supplier": "curl contributors",
            })
        );
    }
}
