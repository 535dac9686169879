// Route table: four fixed clean-URL paths, each backed by a view document
// that is loaded on first navigation.

pub mod handlers;
pub mod loader;
pub mod registry;

use serde::Serialize;

pub use loader::{DirViewLoader, EmbeddedViewLoader, ViewLoader};
pub use registry::ViewRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Home,
    Tips,
    Templates,
    About,
}

impl View {
    /// File stem of the view document.
    pub fn slug(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Tips => "tips",
            View::Templates => "templates",
            View::About => "about",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            View::Home => 0,
            View::Tips => 1,
            View::Templates => 2,
            View::About => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDef {
    pub name: &'static str,
    pub path: &'static str,
    pub view: View,
}

const ROUTES: &[RouteDef] = &[
    RouteDef {
        name: "Home",
        path: "/",
        view: View::Home,
    },
    RouteDef {
        name: "Tips",
        path: "/tips",
        view: View::Tips,
    },
    RouteDef {
        name: "Templates",
        path: "/templates",
        view: View::Templates,
    },
    RouteDef {
        name: "About",
        path: "/about",
        view: View::About,
    },
];

/// Normalizes a deployment prefix to `/` or `/segment[/segment…]` with no
/// trailing slash.
pub fn normalize_base_path(base: &str) -> String {
    let trimmed = base.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}")
    }
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    base: String,
}

impl RouteTable {
    pub fn new(base: &str) -> Self {
        Self {
            base: normalize_base_path(base),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn routes(&self) -> &'static [RouteDef] {
        ROUTES
    }

    /// Value for the views' `<base href>`, so their relative links stay
    /// under the prefix whatever URL the view was reached through.
    pub fn base_href(&self) -> String {
        if self.base == "/" {
            "/".to_string()
        } else {
            format!("{}/", self.base)
        }
    }

    /// Full request path for `route`, including the base prefix.
    pub fn href(&self, route: &RouteDef) -> String {
        if self.base == "/" {
            route.path.to_string()
        } else if route.path == "/" {
            format!("{}/", self.base)
        } else {
            format!("{}{}", self.base, route.path)
        }
    }

    /// Maps a request path to its route. Paths outside the base prefix and
    /// paths with no declared route resolve to `None`.
    pub fn resolve(&self, path: &str) -> Option<&'static RouteDef> {
        let rest = if self.base == "/" {
            path
        } else {
            let rest = path.strip_prefix(self.base.as_str())?;
            if !rest.is_empty() && !rest.starts_with('/') {
                return None;
            }
            rest
        };

        let rest = match rest {
            "" => "/",
            r if r.len() > 1 => r.strip_suffix('/').unwrap_or(r),
            r => r,
        };

        ROUTES.iter().find(|route| route.path == rest)
    }
}
