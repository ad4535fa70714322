//! Endpoint catalog
//!
//! Static documentation for every route the server exposes: a summary, a
//! longer description, the accepted parameters with their defaults and an
//! example response. The shell serves this as a JSON index and prints it from
//! the CLI; nothing here performs I/O.

use serde::Serialize;

/// Route paths, shared by the catalog entries and the router
pub mod paths {
    /// Catalog index; every name operation route lives under it
    pub const INDEX: &str = "/streams";
    pub const MAP: &str = "/streams/map";
    pub const FILTER: &str = "/streams/filter";
    pub const PREDICATE: &str = "/streams/predicate";
    pub const SUPPLIER: &str = "/streams/supplier";
    pub const CONSUMER: &str = "/streams/consumer";
    pub const UNARY: &str = "/streams/unary";
    pub const BINARY: &str = "/streams/binary";
}

/// Top-level description of the API
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ApiInfo {
    pub title: &'static str,
    pub version: &'static str,
    pub description: &'static str,
}

/// HTTP method of a catalog entry
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }

    /// Parse an uppercase HTTP method name; `None` for methods no route uses
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "GET" => Some(Method::Get),
            "POST" => Some(Method::Post),
            _ => None,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Where a parameter is read from
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    Query,
    Body,
}

/// A single request parameter
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub location: ParamLocation,
    #[serde(rename = "type")]
    pub param_type: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<&'static str>,
    pub example: &'static str,
}

/// Documentation for one route
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub params: &'static [Param],
    pub content_type: &'static str,
    pub example_response: &'static str,
}

/// Catalog document served by the index route
#[derive(Debug, Serialize, Clone)]
pub struct CatalogOutput {
    pub info: ApiInfo,
    pub endpoints: Vec<Endpoint>,
}

const JSON: &str = "application/json";
const TEXT: &str = "text/plain";

static ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: Method::Get,
        path: paths::MAP,
        summary: "Map names to uppercase",
        description: "Transforms every name in the internal list to uppercase.",
        params: &[],
        content_type: JSON,
        example_response: r#"["EMMA","WILLIAM","JAMES","SOPHIA","LUCAS","SCARLETT","ELIZABETH","JOHN"]"#,
    },
    Endpoint {
        method: Method::Get,
        path: paths::FILTER,
        summary: "Filter names by starting letter",
        description: "Returns the names that start with the given letter, case-sensitive.",
        params: &[Param {
            name: "letter",
            location: ParamLocation::Query,
            param_type: "string",
            description: "The starting letter to filter names by",
            default: Some("A"),
            example: "S",
        }],
        content_type: JSON,
        example_response: r#"["Sophia","Scarlett"]"#,
    },
    Endpoint {
        method: Method::Get,
        path: paths::PREDICATE,
        summary: "Filter names by length",
        description: "Returns the names whose length is strictly greater than the given value.",
        params: &[Param {
            name: "length",
            location: ParamLocation::Query,
            param_type: "integer",
            description: "Names must be longer than this many characters",
            default: Some("5"),
            example: "5",
        }],
        content_type: JSON,
        example_response: r#"["William","Sophia","Scarlett","Elizabeth"]"#,
    },
    Endpoint {
        method: Method::Get,
        path: paths::SUPPLIER,
        summary: "Generate a UUID",
        description: "Generates a new random identifier on every call.",
        params: &[],
        content_type: TEXT,
        example_response: "550e8400-e29b-41d4-a716-446655440000",
    },
    Endpoint {
        method: Method::Get,
        path: paths::CONSUMER,
        summary: "Consume and format names",
        description: "Feeds each name to a consumer that prepends 'Name: ' and collects the result.",
        params: &[],
        content_type: JSON,
        example_response: r#"["Name: Emma","Name: William","Name: James"]"#,
    },
    Endpoint {
        method: Method::Get,
        path: paths::UNARY,
        summary: "Double a number",
        description: "Applies a unary operator that multiplies the value by 2.",
        params: &[Param {
            name: "value",
            location: ParamLocation::Query,
            param_type: "integer",
            description: "Value to double",
            default: Some("10"),
            example: "10",
        }],
        content_type: JSON,
        example_response: "20",
    },
    Endpoint {
        method: Method::Post,
        path: paths::BINARY,
        summary: "Sum a list of integers",
        description: "Reduces the posted integers with a binary sum operator, starting from 0.",
        params: &[Param {
            name: "numbers",
            location: ParamLocation::Body,
            param_type: "array<integer>",
            description: "List of integers to be summed",
            default: None,
            example: "[5, 3, 7]",
        }],
        content_type: JSON,
        example_response: "15",
    },
];

/// API title, version and description
pub fn api_info() -> ApiInfo {
    ApiInfo {
        title: "Streams POC API",
        version: env!("CARGO_PKG_VERSION"),
        description: "A small API demonstrating map, filter, reduce and other functional idioms",
    }
}

/// Every documented route, in registration order
pub fn endpoints() -> &'static [Endpoint] {
    ENDPOINTS
}

/// Look up the documentation of a route
pub fn find(method: Method, path: &str) -> Option<&'static Endpoint> {
    ENDPOINTS
        .iter()
        .find(|endpoint| endpoint.method == method && endpoint.path == path)
}

/// Build the document served by the index route
pub fn catalog() -> CatalogOutput {
    CatalogOutput {
        info: api_info(),
        endpoints: ENDPOINTS.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_in_route_order() {
        let paths: Vec<&str> = endpoints().iter().map(|e| e.path).collect();
        assert_eq!(
            paths,
            vec![
                "/streams/map",
                "/streams/filter",
                "/streams/predicate",
                "/streams/supplier",
                "/streams/consumer",
                "/streams/unary",
                "/streams/binary",
            ]
        );
    }

    #[test]
    fn test_every_path_under_base() {
        assert!(endpoints()
            .iter()
            .all(|e| e.path.starts_with(&format!("{}/", paths::INDEX))));
    }

    #[test]
    fn test_method_parse() {
        assert_eq!(Method::parse("GET"), Some(Method::Get));
        assert_eq!(Method::parse("POST"), Some(Method::Post));
        assert_eq!(Method::parse("get"), None);
        assert_eq!(Method::parse("DELETE"), None);

        for method in [Method::Get, Method::Post] {
            assert_eq!(Method::parse(method.as_str()), Some(method));
        }
    }

    #[test]
    fn test_find_matches_method_and_path() {
        let binary = find(Method::Post, "/streams/binary").unwrap();
        assert_eq!(binary.example_response, "15");

        assert!(find(Method::Get, "/streams/binary").is_none());
        assert!(find(Method::Get, "/streams/unknown").is_none());
    }

    #[test]
    fn test_query_defaults() {
        let default_of = |path: &str| find(Method::Get, path).unwrap().params[0].default;

        assert_eq!(default_of("/streams/filter"), Some("A"));
        assert_eq!(default_of("/streams/predicate"), Some("5"));
        assert_eq!(default_of("/streams/unary"), Some("10"));
    }

    #[test]
    fn test_supplier_is_plain_text() {
        let supplier = find(Method::Get, "/streams/supplier").unwrap();
        assert_eq!(supplier.content_type, "text/plain");
        assert!(crate::names::is_canonical_identifier(
            supplier.example_response
        ));
    }

    #[test]
    fn test_examples_are_valid_json() {
        for endpoint in endpoints().iter().filter(|e| e.content_type == JSON) {
            let parsed: Result<serde_json::Value, _> =
                serde_json::from_str(endpoint.example_response);
            assert!(parsed.is_ok(), "bad example for {}", endpoint.path);
        }
    }

    #[test]
    fn test_catalog_serialization() {
        let value = serde_json::to_value(catalog()).unwrap();

        assert_eq!(value["info"]["title"], "Streams POC API");
        assert_eq!(value["endpoints"].as_array().unwrap().len(), 7);
        assert_eq!(value["endpoints"][6]["method"], "POST");
        assert_eq!(value["endpoints"][6]["params"][0]["location"], "body");
        assert_eq!(value["endpoints"][6]["params"][0]["type"], "array<integer>");
        assert!(value["endpoints"][6]["params"][0].get("default").is_none());
    }
}
