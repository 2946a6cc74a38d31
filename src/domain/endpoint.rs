//! Backend login endpoint computation.
//!
//! The backend is deployed once per stage and each deployment lives under a
//! stage-prefixed path:
//!
//! ```text
//! https://auth.example.com/prod/oauth/login
//! https://auth.example.com/dev/oauth/login
//! https://auth.example.com/oauth/login        (no stage marker)
//! ```
//!
//! The stage comes from the configured flag when present, otherwise from the
//! first segment of the page path the user loaded.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use url::Url;

/// Default login path appended after the stage prefix.
pub const DEFAULT_LOGIN_PATH: &str = "/oauth/login";

/// Backend deployment stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Prod,
    Dev,
    Test,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Prod, Stage::Dev, Stage::Test];

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Prod => "prod",
            Stage::Dev => "dev",
            Stage::Test => "test",
        }
    }

    /// Detects a stage marker in the first segment of a URL path.
    ///
    /// ```text
    /// /dev/oauth/authorize  -> Some(Dev)
    /// /oauth/authorize      -> None
    /// ```
    pub fn from_path(path: &str) -> Option<Self> {
        path.split('/')
            .find(|segment| !segment.is_empty())
            .and_then(|segment| segment.parse().ok())
    }

    /// Picks the configured stage, falling back to the marker in `page_path`.
    pub fn resolve(configured: Option<Stage>, page_path: &str) -> Option<Self> {
        configured.or_else(|| Self::from_path(page_path))
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown stage '{0}', expected one of: prod, dev, test")]
pub struct ParseStageError(String);

impl FromStr for Stage {
    type Err = ParseStageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prod" => Ok(Stage::Prod),
            "dev" => Ok(Stage::Dev),
            "test" => Ok(Stage::Test),
            other => Err(ParseStageError(other.to_string())),
        }
    }
}

/// Builds the backend login URL.
///
/// # Arguments
///
/// - `base_url` - backend origin, optionally with a path prefix
/// - `stage` - stage prefix, or `None` for the bare path
/// - `login_path` - path of the login operation, e.g. `/oauth/login`
///
/// # Errors
///
/// Returns [`url::ParseError`] if the combined URL is not valid.
pub fn login_endpoint(
    base_url: &str,
    stage: Option<Stage>,
    login_path: &str,
) -> Result<Url, url::ParseError> {
    let base = base_url.trim_end_matches('/');
    let path = login_path.trim_start_matches('/');

    let url = match stage {
        Some(stage) => format!("{}/{}/{}", base, stage, path),
        None => format!("{}/{}", base, path),
    };

    Url::parse(&url)
}
