use std::fmt;

/// Pages reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    News,
    Poems,
    About,
}

impl Route {
    /// Tab order of the navigation bar
    pub const ALL: [Route; 4] = [Route::Home, Route::News, Route::Poems, Route::About];

    /// Resolve a path. Only exact matches are accepted.
    pub fn from_path(path: &str) -> Option<Route> {
        match path {
            "/" => Some(Route::Home),
            "/news" => Some(Route::News),
            "/poems" => Some(Route::Poems),
            "/about" => Some(Route::About),
            _ => None,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::News => "/news",
            Route::Poems => "/poems",
            Route::About => "/about",
        }
    }

    /// Label shown on the navigation tab
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::News => "News",
            Route::Poems => "Poems",
            Route::About => "About",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Route::Home => 0,
            Route::News => 1,
            Route::Poems => 2,
            Route::About => 3,
        }
    }

    pub fn next(&self) -> Route {
        Route::ALL[(self.index() + 1) % Route::ALL.len()]
    }

    pub fn previous(&self) -> Route {
        Route::ALL[(self.index() + Route::ALL.len() - 1) % Route::ALL.len()]
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
