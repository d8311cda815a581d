use std::{fmt::Display, path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};

/// where the static route dataset lives. http(s) locations are fetched with a GET,
/// anything else is read from the local filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RouteSource {
    Url(String),
    File(PathBuf),
}

impl FromStr for RouteSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(String::from("route dataset location cannot be empty"));
        }
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Ok(RouteSource::Url(trimmed.to_string()))
        } else {
            Ok(RouteSource::File(PathBuf::from(trimmed)))
        }
    }
}

impl TryFrom<String> for RouteSource {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RouteSource> for String {
    fn from(value: RouteSource) -> Self {
        value.to_string()
    }
}

impl Display for RouteSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteSource::Url(url) => write!(f, "{url}"),
            RouteSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
