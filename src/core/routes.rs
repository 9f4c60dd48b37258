//! Browser routes exposed by the navigation shell

/// Top-level pages reachable from the router
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Generate,
    GenerateById(String),
    Preview,
    MyGeneration,
    Login,
    Signup,
    ForgotPassword,
}

impl AppRoute {
    pub fn path(&self) -> String {
        match self {
            AppRoute::Home => "/".to_string(),
            AppRoute::Generate => "/generate".to_string(),
            AppRoute::GenerateById(id) => format!("/generate/{}", id),
            AppRoute::Preview => "/preview".to_string(),
            AppRoute::MyGeneration => "/my-generation".to_string(),
            AppRoute::Login => "/login".to_string(),
            AppRoute::Signup => "/signup".to_string(),
            AppRoute::ForgotPassword => "/forgot-password".to_string(),
        }
    }

    /// Resolve a pathname to a route. Trailing slashes, query strings and
    /// fragments are ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = normalize_path(path);
        let route = match path {
            "/" => AppRoute::Home,
            "/generate" => AppRoute::Generate,
            "/preview" => AppRoute::Preview,
            "/my-generation" => AppRoute::MyGeneration,
            "/login" => AppRoute::Login,
            "/signup" => AppRoute::Signup,
            "/forgot-password" => AppRoute::ForgotPassword,
            other => {
                let id = other.strip_prefix("/generate/")?;
                if id.is_empty() || id.contains('/') {
                    return None;
                }
                AppRoute::GenerateById(id.to_string())
            }
        };
        Some(route)
    }

    /// Whether this page is one of the authentication screens
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            AppRoute::Login | AppRoute::Signup | AppRoute::ForgotPassword
        )
    }
}

fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Whether the navbar and footer should be rendered around `path`.
///
/// Auth screens carry their own layout. Unknown paths keep the chrome so the
/// 404 page has navigation.
pub fn shows_chrome(path: &str) -> bool {
    AppRoute::from_path(path).is_none_or(|route| !route.is_auth())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_routes_hide_chrome() {
        assert!(!shows_chrome("/login"));
        assert!(!shows_chrome("/signup"));
        assert!(!shows_chrome("/forgot-password"));
        assert!(!shows_chrome("/login/"));
        assert!(!shows_chrome("/signup?plan=pro"));
    }

    #[test]
    fn test_other_routes_show_chrome() {
        assert!(shows_chrome("/"));
        assert!(shows_chrome("/generate"));
        assert!(shows_chrome("/generate/abc123"));
        assert!(shows_chrome("/preview"));
        assert!(shows_chrome("/my-generation"));
        assert!(shows_chrome("/does-not-exist"));
        assert!(shows_chrome("/login-help"));
    }

    #[test]
    fn test_from_path() {
        assert_eq!(AppRoute::from_path("/"), Some(AppRoute::Home));
        assert_eq!(AppRoute::from_path(""), Some(AppRoute::Home));
        assert_eq!(AppRoute::from_path("/#pricing"), Some(AppRoute::Home));
        assert_eq!(
            AppRoute::from_path("/generate/xyz"),
            Some(AppRoute::GenerateById("xyz".to_string()))
        );
        assert_eq!(AppRoute::from_path("/generate/"), Some(AppRoute::Generate));
        assert_eq!(AppRoute::from_path("/generate/a/b"), None);
        assert_eq!(AppRoute::from_path("/unknown"), None);
    }

    #[test]
    fn test_path_matches_from_path() {
        let routes = [
            AppRoute::Home,
            AppRoute::Generate,
            AppRoute::GenerateById("42".to_string()),
            AppRoute::Preview,
            AppRoute::MyGeneration,
            AppRoute::Login,
            AppRoute::Signup,
            AppRoute::ForgotPassword,
        ];
        for route in routes {
            assert_eq!(AppRoute::from_path(&route.path()), Some(route.clone()));
            assert_eq!(route.is_auth(), !shows_chrome(&route.path()));
        }
    }

    #[test]
    fn test_nav_link_targets_resolve() {
        use crate::core::content::NAV_LINKS;

        for link in NAV_LINKS {
            assert_eq!(AppRoute::from_path(link.href), Some(AppRoute::Home));
        }
    }

    #[test]
    fn test_auth_routes() {
        assert!(AppRoute::Login.is_auth());
        assert!(AppRoute::Signup.is_auth());
        assert!(AppRoute::ForgotPassword.is_auth());
        assert!(!AppRoute::Home.is_auth());
        assert!(!AppRoute::GenerateById("x".to_string()).is_auth());
    }
}
