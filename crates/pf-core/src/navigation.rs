//! Site routes and the navigation bar state.
//!
//! 站点路由与导航栏状态。

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    #[default]
    Home,
    About,
    Projects,
    Experience,
    Contact,
}

impl Route {
    /// Navigation bar order.
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::About,
        Route::Projects,
        Route::Experience,
        Route::Contact,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Projects => "/projects",
            Route::Experience => "/experience",
            Route::Contact => "/contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Projects => "Projects",
            Route::Experience => "Experience",
            Route::Contact => "Contact",
        }
    }

    /// Exact path match; a trailing slash is tolerated.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        Route::ALL.into_iter().find(|route| route.path() == normalized)
    }

    /// Path or bare name, e.g. `/about`, `about`, `About`.
    pub fn parse_loose(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::from_path(input).or_else(|| {
            Route::ALL
                .into_iter()
                .find(|route| route.label().eq_ignore_ascii_case(input))
        })
    }
}

/// Navigation bar state: active route and mobile menu.
///
/// 导航栏状态：当前路由与移动端菜单。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    current: Route,
    menu_open: bool,
}

impl Navigator {
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            menu_open: false,
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn is_active(&self, route: Route) -> bool {
        self.current == route
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Switch route and close the menu.
    ///
    /// Returns `true` when the route changed, i.e. the old page unmounts.
    pub fn navigate(&mut self, route: Route) -> bool {
        self.menu_open = false;
        if self.current == route {
            return false;
        }
        self.current = route;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/projects/"), Some(Route::Projects));
        assert_eq!(Route::from_path("/blog"), None);
    }

    #[test]
    fn parse_loose_accepts_labels() {
        assert_eq!(Route::parse_loose("experience"), Some(Route::Experience));
        assert_eq!(Route::parse_loose("/contact"), Some(Route::Contact));
        assert_eq!(Route::parse_loose("home"), Some(Route::Home));
        assert_eq!(Route::parse_loose("nowhere"), None);
    }

    #[test]
    fn navigate_reports_change_and_closes_menu() {
        let mut nav = Navigator::default();
        nav.toggle_menu();
        assert!(nav.menu_open());

        assert!(nav.navigate(Route::Projects));
        assert!(!nav.menu_open());
        assert!(nav.is_active(Route::Projects));

        assert!(!nav.navigate(Route::Projects));
    }
}
