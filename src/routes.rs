//! Static route table and path matching for the navigation guard.
//! Routes are immutable descriptors fixed at startup; `/login` and `/signup`
//! are public regardless of their per-route flag.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDef {
    pub path: &'static str,
    pub name: &'static str,
    pub requires_auth: bool,
}

pub const ROUTES: &[RouteDef] = &[
    RouteDef { path: "/", name: "Home", requires_auth: false },
    RouteDef { path: "/login", name: "Login", requires_auth: false },
    RouteDef { path: "/signup", name: "Signup", requires_auth: false },
    RouteDef { path: "/create-product", name: "CreateProduct", requires_auth: true },
    RouteDef { path: "/products", name: "Products", requires_auth: true },
    RouteDef { path: "/product/:id", name: "ProductDetail", requires_auth: true },
    RouteDef { path: "/profile", name: "Profile", requires_auth: true },
    RouteDef { path: "/roles", name: "Roles", requires_auth: true },
];

/// Hardcoded allow-list checked before any route flag.
pub const PUBLIC_PATHS: &[&str] = &["/login", "/signup"];

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Segment-wise match; a `:`-prefixed pattern segment matches any non-empty
/// concrete segment. Trailing slashes are insignificant.
fn path_matches(pattern: &str, path: &str) -> bool {
    let mut pat = segments(pattern);
    let mut got = segments(path);
    loop {
        match (pat.next(), got.next()) {
            (None, None) => return true,
            (Some(p), Some(g)) => {
                if !p.starts_with(':') && p != g {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

/// Find the route descriptor matched by a concrete path, if any.
pub fn find_route(path: &str) -> Option<&'static RouteDef> {
    ROUTES.iter().find(|r| path_matches(r.path, path))
}

pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.iter().any(|p| path_matches(p, path))
}

/// Whether the matched chain for `path` carries an auth requirement.
/// Unmatched paths carry none and are therefore not gated.
pub fn requires_auth(path: &str) -> bool {
    find_route(path).map(|r| r.requires_auth).unwrap_or(false)
}
