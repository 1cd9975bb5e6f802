use hyper::Method;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Endpoint {
    pub method: Method,
    pub path: &'static str,
}

/// Fixed-order request catalog; never mutated during a run. The
/// `/nonexistent` entry is a deliberate 404 probe.
pub static CATALOG: &[Endpoint] = &[
    Endpoint { method: Method::GET, path: "/api/users" },
    Endpoint { method: Method::GET, path: "/api/users/123" },
    Endpoint { method: Method::GET, path: "/api/users/456" },
    Endpoint { method: Method::GET, path: "/api/users/789" },
    Endpoint { method: Method::GET, path: "/api/v1/products" },
    Endpoint { method: Method::GET, path: "/api/v1/products/abc-123" },
    Endpoint { method: Method::GET, path: "/api/v2/products" },
    Endpoint { method: Method::GET, path: "/api/v2/products/def-456" },
    Endpoint { method: Method::GET, path: "/api/users/123/orders" },
    Endpoint { method: Method::GET, path: "/api/users/456/orders/789" },
    Endpoint { method: Method::GET, path: "/api/orders/550e8400-e29b-41d4-a716-446655440000" },
    Endpoint { method: Method::GET, path: "/health" },
    Endpoint { method: Method::GET, path: "/health/ready" },
    Endpoint { method: Method::GET, path: "/admin/dashboard" },
    Endpoint { method: Method::GET, path: "/nonexistent" },
    Endpoint { method: Method::POST, path: "/api/users" },
    Endpoint { method: Method::PUT, path: "/api/users/123" },
    Endpoint { method: Method::DELETE, path: "/api/users/123" },
];

/// Uniform independent draw; repeats are expected.
#[must_use]
pub fn select(entries: &'static [Endpoint]) -> &'static Endpoint {
    let idx = rand::thread_rng().gen_range(0..entries.len());
    &entries[idx]
}
