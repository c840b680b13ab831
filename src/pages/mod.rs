use serde::{Deserialize, Serialize};

pub mod home;
pub mod not_found;

pub use home::HomePage;
pub use not_found::NotFoundPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Home,
    NotFound,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Home, Page::NotFound];

    pub fn route(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::NotFound => "not-found",
        }
    }

    /// Unknown routes resolve to [`Page::NotFound`].
    pub fn from_route(route: &str) -> Self {
        match route {
            "home" | "" | "/" | "index" => Page::Home,
            _ => Page::NotFound,
        }
    }

    /// Output file the host writes this page to.
    pub fn file_name(&self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::NotFound => "404.html",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_resolve_back() {
        for page in Page::ALL {
            assert_eq!(Page::from_route(page.route()), page);
        }
    }

    #[test]
    fn unknown_route_is_not_found() {
        assert_eq!(Page::from_route("orders"), Page::NotFound);
        assert_eq!(Page::from_route("/"), Page::Home);
    }

    #[test]
    fn file_names_are_distinct() {
        assert_ne!(Page::Home.file_name(), Page::NotFound.file_name());
    }
}
