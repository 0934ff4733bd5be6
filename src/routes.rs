//! Route table
//!
//! Maps URL paths to screens. Shared by the front-end router and the bundle
//! host, which uses it to decide between a 200 and a 404 fallback.

use std::fmt;

/// A screen reachable by URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Dashboard,
    Chats,
    Finn,
    Experts,
    Crowdfunding,
    Blog,
}

impl Route {
    pub const ALL: [Route; 8] = [
        Route::Home,
        Route::Login,
        Route::Dashboard,
        Route::Chats,
        Route::Finn,
        Route::Experts,
        Route::Crowdfunding,
        Route::Blog,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
            Route::Chats => "/chats",
            Route::Finn => "/finn",
            Route::Experts => "/experts",
            Route::Crowdfunding => "/crowdfunding",
            Route::Blog => "/blog",
        }
    }

    /// Resolve a request path. A single trailing slash is ignored; unknown
    /// paths return `None` and render the not-found screen.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = match path {
            "" | "/" => "/",
            p => p.strip_suffix('/').unwrap_or(p),
        };
        Route::ALL.into_iter().find(|r| r.path() == trimmed)
    }

    /// Screens rendered inside the header and nav frame
    pub fn in_shell(&self) -> bool {
        !matches!(self, Route::Login)
    }

    /// Label shown in the navigation bar, if the route is listed there
    pub fn nav_label(&self) -> Option<&'static str> {
        match self {
            Route::Home => Some("Home"),
            Route::Dashboard => Some("My Oasis"),
            Route::Chats => Some("Chats"),
            Route::Finn => Some("FINN AI"),
            Route::Experts => Some("Experts"),
            Route::Crowdfunding => Some("Support"),
            Route::Blog => Some("Stories"),
            Route::Login => None,
        }
    }

    pub fn nav_icon(&self) -> &'static str {
        match self {
            Route::Home => "🏠",
            Route::Dashboard => "🌿",
            Route::Chats => "💬",
            Route::Finn => "🐬",
            Route::Experts => "🩺",
            Route::Crowdfunding => "💚",
            Route::Blog => "📝",
            Route::Login => "🔑",
        }
    }

    /// Nav entries in display order
    pub fn nav() -> impl Iterator<Item = (Route, &'static str)> {
        Route::ALL
            .into_iter()
            .filter_map(|r| r.nav_label().map(|label| (r, label)))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_path_round_trips() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        assert_eq!(Route::from_path("/experts/"), Some(Route::Experts));
        assert_eq!(Route::from_path(""), Some(Route::Home));
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(Route::from_path("/nope"), None);
        assert_eq!(Route::from_path("/experts/1"), None);
        assert_eq!(Route::from_path("/Experts"), None);
    }

    #[test]
    fn test_nav_lists_every_shell_route() {
        let nav: Vec<Route> = Route::nav().map(|(r, _)| r).collect();
        let shell: Vec<Route> = Route::ALL.into_iter().filter(|r| r.in_shell()).collect();
        assert_eq!(nav, shell);
        assert!(!Route::Login.in_shell());
    }
}
