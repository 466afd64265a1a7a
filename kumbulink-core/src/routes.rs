//! Client-side route table and session guard.

/// Pages reachable by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Offers,
    Login,
    Register,
    CreateOffer,
    OfferDetail(u64),
    NotFound,
}

impl Route {
    /// Matches `path` against the table, after stripping `base_path`.
    pub fn parse(path: &str, base_path: &str) -> Route {
        let base = base_path.trim_end_matches('/');
        // The base only matches on a segment boundary.
        let relative = match path.strip_prefix(base) {
            Some(rest)
                if !base.is_empty() && (rest.is_empty() || rest.starts_with(['/', '?', '#'])) =>
            {
                rest
            }
            _ => path,
        };

        // Ignore query string and fragment.
        let relative = relative
            .split(|c| c == '?' || c == '#')
            .next()
            .unwrap_or_default();

        let segments: Vec<&str> = relative.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] | ["home"] => Route::Offers,
            ["login"] => Route::Login,
            ["registrar"] => Route::Register,
            ["criar-anuncio"] => Route::CreateOffer,
            ["anuncio", id] => id.parse().map(Route::OfferDetail).unwrap_or(Route::NotFound),
            _ => Route::NotFound,
        }
    }

    /// Path relative to the application base.
    pub fn path(&self) -> String {
        match self {
            Route::Offers => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/registrar".to_string(),
            Route::CreateOffer => "/criar-anuncio".to_string(),
            Route::OfferDetail(id) => format!("/anuncio/{}", id),
            Route::NotFound => "/404".to_string(),
        }
    }

    pub fn full_path(&self, base_path: &str) -> String {
        let base = base_path.trim_end_matches('/');
        match self {
            Route::Offers => format!("{}/", base),
            other => format!("{}{}", base, other.path()),
        }
    }

    pub fn requires_session(&self) -> bool {
        matches!(
            self,
            Route::Offers | Route::CreateOffer | Route::OfferDetail(_)
        )
    }
}

/// Authentication state injected at the application root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn from_token(token: Option<String>) -> Self {
        Self {
            token: token
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Applies the session guard: protected routes fall back to the login page.
pub fn resolve(route: Route, session: &Session) -> Route {
    if route.requires_session() && !session.is_authenticated() {
        log::info!("Route {:?} requires a session - redirecting to login", route);
        Route::Login
    } else {
        route
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "/Kumbulink";

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/Kumbulink/", BASE), Route::Offers);
        assert_eq!(Route::parse("/Kumbulink", BASE), Route::Offers);
        assert_eq!(Route::parse("/Kumbulink/home", BASE), Route::Offers);
        assert_eq!(Route::parse("/Kumbulink/login", BASE), Route::Login);
        assert_eq!(Route::parse("/Kumbulink/registrar/", BASE), Route::Register);
        assert_eq!(Route::parse("/Kumbulink/criar-anuncio", BASE), Route::CreateOffer);
        assert_eq!(Route::parse("/Kumbulink/anuncio/42", BASE), Route::OfferDetail(42));
        assert_eq!(Route::parse("/Kumbulink/anuncio/42?ref=home", BASE), Route::OfferDetail(42));
    }

    #[test]
    fn test_parse_unknown_paths() {
        assert_eq!(Route::parse("/Kumbulink/anuncio/abc", BASE), Route::NotFound);
        assert_eq!(Route::parse("/Kumbulink/anuncio", BASE), Route::NotFound);
        assert_eq!(Route::parse("/Kumbulink/register", BASE), Route::NotFound);
    }

    #[test]
    fn test_base_must_end_on_segment_boundary() {
        assert_eq!(Route::parse("/Kumbulinklogin", BASE), Route::NotFound);
        assert_eq!(Route::parse("/Kumbulink-home", BASE), Route::NotFound);
        assert_eq!(Route::parse("/Kumbulink?ref=mail", BASE), Route::Offers);
    }

    #[test]
    fn test_parse_without_base() {
        assert_eq!(Route::parse("/login", ""), Route::Login);
        assert_eq!(Route::parse("/login", BASE), Route::Login);
    }

    #[test]
    fn test_paths_round_trip_through_parse() {
        for route in [
            Route::Offers,
            Route::Login,
            Route::Register,
            Route::CreateOffer,
            Route::OfferDetail(7),
        ] {
            assert_eq!(Route::parse(&route.full_path(BASE), BASE), route);
        }
    }

    #[test]
    fn test_guard_redirects_anonymous_session() {
        let anonymous = Session::anonymous();
        assert_eq!(resolve(Route::Offers, &anonymous), Route::Login);
        assert_eq!(resolve(Route::CreateOffer, &anonymous), Route::Login);
        assert_eq!(resolve(Route::OfferDetail(3), &anonymous), Route::Login);
        assert_eq!(resolve(Route::Register, &anonymous), Route::Register);
        assert_eq!(resolve(Route::Login, &anonymous), Route::Login);
    }

    #[test]
    fn test_guard_admits_session_with_token() {
        let session = Session::from_token(Some("abc.def".to_string()));
        assert!(session.is_authenticated());
        assert_eq!(resolve(Route::Offers, &session), Route::Offers);
        assert_eq!(resolve(Route::OfferDetail(3), &session), Route::OfferDetail(3));
    }

    #[test]
    fn test_blank_token_is_anonymous() {
        assert!(!Session::from_token(Some("   ".to_string())).is_authenticated());
        assert!(!Session::from_token(None).is_authenticated());
    }
}
