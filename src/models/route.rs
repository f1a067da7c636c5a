//! Hash-based routing.

/// Application routes. URL format: `#/`, `#/faq`, `#/titles`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// Todo dashboard: #/ or empty hash
    Home,
    /// Frequently asked questions: #/faq
    Faq,
    /// Plain list of every todo title: #/titles
    Titles,
    /// Anything else
    NotFound { path: String },
}

impl Route {
    /// Parse URL hash into Route
    pub fn from_hash(hash: &str) -> Self {
        let path = hash
            .trim_start_matches('#')
            .trim_start_matches('/')
            .trim_end_matches('/');

        match path {
            "" => Self::Home,
            "faq" => Self::Faq,
            "titles" => Self::Titles,
            other => Self::NotFound {
                path: other.to_string(),
            },
        }
    }

    /// Convert Route to URL hash
    pub fn to_hash(&self) -> String {
        match self {
            Self::Home => "#/".to_string(),
            Self::Faq => "#/faq".to_string(),
            Self::Titles => "#/titles".to_string(),
            Self::NotFound { path } => format!("#/{}", path),
        }
    }

    /// Label used in the navigation bar.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Faq => "Faq",
            Self::Titles => "Titles",
            Self::NotFound { .. } => "Not found",
        }
    }

    /// Get current route from browser URL
    pub fn current() -> Self {
        Self::from_hash(&crate::utils::dom::get_hash())
    }
}
