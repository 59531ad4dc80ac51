use std::fmt;

/// A page of the estimator shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    NewEstimate,
    Points,
    NotFound(String),
}

/// A titled card that introduces a form on its page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub title: &'static str,
    pub description: &'static str,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        match path.trim().trim_end_matches('/') {
            "" => Self::Landing,
            "/new" => Self::NewEstimate,
            "/points" => Self::Points,
            other => Self::NotFound(other.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Landing => "/",
            Self::NewEstimate => "/new",
            Self::Points => "/points",
            Self::NotFound(path) => path,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Landing => "Landing Page",
            Self::NewEstimate => "New Estimate",
            Self::Points => "Points",
            Self::NotFound(_) => "Not Found",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Landing => "First page when you visit.",
            Self::NewEstimate => "Create a system point count estimation",
            Self::Points => "Create a list of points and generate bacnet objects",
            Self::NotFound(_) => "The page you are looking for does not exist.",
        }
    }

    pub fn tile(&self) -> Option<Tile> {
        match self {
            Self::NewEstimate => Some(Tile {
                title: "Enter Systems and Points",
                description: "Use this form to enter the systems and points.",
            }),
            Self::Points => Some(Tile {
                title: "Points Form",
                description: "Fill out the form to create a list of points.",
            }),
            Self::Landing | Self::NotFound(_) => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn known_paths() {
        assert_eq!(Route::parse("/"), Route::Landing);
        assert_eq!(Route::parse(""), Route::Landing);
        assert_eq!(Route::parse("/new"), Route::NewEstimate);
        assert_eq!(Route::parse("/points/"), Route::Points);
    }

    #[test]
    fn anything_else_is_not_found() {
        let route = Route::parse("/reports");

        assert_eq!(route, Route::NotFound("/reports".to_string()));
        assert_eq!(route.path(), "/reports");
        assert_eq!(route.tile(), None);
    }

    #[test]
    fn form_pages_have_tiles() {
        assert_eq!(
            Route::NewEstimate.tile().map(|t| t.title),
            Some("Enter Systems and Points")
        );
        assert_eq!(
            Route::Points.tile().map(|t| t.title),
            Some("Points Form")
        );
        assert_eq!(Route::Landing.tile(), None);
    }
}
