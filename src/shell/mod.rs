//! Navigation between the application's screens

use std::fmt;
use std::str::FromStr;

use crate::error::{RegistryError, Result};

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Register,
    Users,
}

impl Route {
    pub const ALL: [Self; 3] = [Self::Home, Self::Register, Self::Users];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Register => "/register",
            Self::Users => "/users",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Register => "Register user",
            Self::Users => "View All Users",
        }
    }

    /// Resolve an exact path; a single trailing slash is tolerated
    pub fn from_path(path: &str) -> Result<Self> {
        let trimmed = path.trim();
        let normalized = match trimmed.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => trimmed,
        };
        Self::ALL
            .into_iter()
            .find(|route| route.path() == normalized)
            .ok_or_else(|| RegistryError::UnknownRoute(path.to_string()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_path(s)
    }
}

/// Navigation actions offered on the home screen
pub const HOME_ACTIONS: [Route; 2] = [Route::Register, Route::Users];

/// Text of the home screen
#[must_use]
pub fn render_home() -> String {
    HOME_ACTIONS
        .iter()
        .map(|route| format!("  {:<16} person-registry open {}", route.title(), route.path()))
        .fold(String::from("Person registry\n\n"), |mut out, line| {
            out.push_str(&line);
            out.push('\n');
            out
        })
}
