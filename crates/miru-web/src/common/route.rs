use dominator::routing;
use futures_signals::signal::{Signal, SignalExt};
use miru_types::session::Phase;
use wasm_bindgen::UnwrapThrowExt;
use web_sys::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Signup,
    AnimeList,
    AnimeDetail(i64),
    CharacterDetail(i64),
    Profile,
    Favorites,
    Search,
    NotFound,
}

impl Route {
    pub fn signal() -> impl Signal<Item = Self> {
        routing::url()
            .signal_ref(|url| Url::new(url).unwrap_throw())
            .map(|url| Self::parse(&url.pathname()))
    }

    pub fn parse(pathname: &str) -> Self {
        let mut paths = pathname.split('/').collect::<Vec<_>>();
        paths.retain(|path| !path.is_empty());

        match paths.as_slice() {
            [] => Route::Home,
            ["login"] => Route::Login,
            ["signup"] => Route::Signup,
            ["anime"] => Route::AnimeList,
            ["anime", id] => {
                if let Ok(id) = id.parse() {
                    Route::AnimeDetail(id)
                } else {
                    Route::NotFound
                }
            }
            ["characters", id] => {
                if let Ok(id) = id.parse() {
                    Route::CharacterDetail(id)
                } else {
                    Route::NotFound
                }
            }
            ["profile"] => Route::Profile,
            ["favorites"] => Route::Favorites,
            ["search"] => Route::Search,
            _ => Route::NotFound,
        }
    }

    pub fn url(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::AnimeList => "/anime".to_string(),
            Route::AnimeDetail(id) => format!("/anime/{id}"),
            Route::CharacterDetail(id) => format!("/characters/{id}"),
            Route::Profile => "/profile".to_string(),
            Route::Favorites => "/favorites".to_string(),
            Route::Search => "/search".to_string(),
            Route::NotFound => "/notfound".to_string(),
        }
    }

    /// Views that require a signed-in user.
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Profile | Route::Favorites | Route::Search)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    /// A token exists but the identity is still resolving; neither render
    /// the protected view nor bounce a session that may turn out valid.
    Wait,
    RedirectToLogin,
}

pub fn guard(route: Route, phase: Phase) -> GuardOutcome {
    if !route.is_protected() {
        return GuardOutcome::Render;
    }

    match phase {
        Phase::Anonymous => GuardOutcome::RedirectToLogin,
        Phase::PendingUser => GuardOutcome::Wait,
        Phase::Authenticated => GuardOutcome::Render,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/signup"), Route::Signup);
        assert_eq!(Route::parse("/anime"), Route::AnimeList);
        assert_eq!(Route::parse("/anime/42"), Route::AnimeDetail(42));
        assert_eq!(Route::parse("/anime/42/"), Route::AnimeDetail(42));
        assert_eq!(Route::parse("/characters/7"), Route::CharacterDetail(7));
        assert_eq!(Route::parse("/favorites"), Route::Favorites);
        assert_eq!(Route::parse("/anime/naruto"), Route::NotFound);
        assert_eq!(Route::parse("/no/such/page"), Route::NotFound);
    }

    #[test]
    fn test_url_parse_round_trip() {
        let routes = [
            Route::Home,
            Route::Login,
            Route::Signup,
            Route::AnimeList,
            Route::AnimeDetail(42),
            Route::CharacterDetail(7),
            Route::Profile,
            Route::Favorites,
            Route::Search,
        ];

        for route in routes {
            assert_eq!(Route::parse(&route.url()), route);
        }
    }

    #[test]
    fn test_guard_redirects_anonymous_visitors() {
        for route in [Route::Profile, Route::Favorites, Route::Search] {
            assert!(route.is_protected());
            assert_eq!(guard(route, Phase::Anonymous), GuardOutcome::RedirectToLogin);
            assert_eq!(guard(route, Phase::PendingUser), GuardOutcome::Wait);
            assert_eq!(guard(route, Phase::Authenticated), GuardOutcome::Render);
        }
    }

    #[test]
    fn test_guard_leaves_public_views_alone() {
        for route in [Route::Home, Route::Login, Route::AnimeDetail(1)] {
            assert_eq!(guard(route, Phase::Anonymous), GuardOutcome::Render);
        }
    }
}
