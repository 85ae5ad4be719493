//! The closed set of pages the site can display.
//!
//! DESIGN
//! ======
//! A `Route` is both the in-memory page identifier and the wire value written
//! to the address fragment. Parsing is exact: anything outside the set is an
//! `UnknownRoute`, which the fragment boundary discards.

use std::fmt;
use std::str::FromStr;

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// One of the six static pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Home,
    About,
    Board,
    Actions,
    Meetings,
    Contact,
}

/// A fragment value that does not name a page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route: {0:?}")]
pub struct UnknownRoute(pub String);

impl Route {
    /// Every route, in navigation order.
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::About,
        Route::Board,
        Route::Actions,
        Route::Meetings,
        Route::Contact,
    ];

    /// Value written to (and read from) the address fragment.
    pub fn fragment(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::About => "about",
            Route::Board => "board",
            Route::Actions => "actions",
            Route::Meetings => "meetings",
            Route::Contact => "contact",
        }
    }

    /// Label shown in navigation controls.
    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Accueil",
            Route::About => "A propos",
            Route::Board => "Le bureau",
            Route::Actions => "Nos actions",
            Route::Meetings => "Nos rencontres",
            Route::Contact => "Contact",
        }
    }

    /// `#`-prefixed link target for anchors.
    pub fn href(self) -> String {
        format!("#{}", self.fragment())
    }

    /// Parse a raw fragment, tolerating a single leading `#`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownRoute`] when the value is not exactly one of the
    /// route fragments.
    pub fn from_fragment(raw: &str) -> Result<Route, UnknownRoute> {
        raw.strip_prefix('#').unwrap_or(raw).parse()
    }
}

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::ALL
            .into_iter()
            .find(|route| route.fragment() == s)
            .ok_or_else(|| UnknownRoute(s.to_owned()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fragment())
    }
}
