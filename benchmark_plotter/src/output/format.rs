//!
//! Output chart format.
//!

use std::path::Path;

///
/// Output chart format.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Scalable vector graphics.
    #[default]
    Svg,
    /// Portable network graphics.
    Png,
}

impl Format {
    ///
    /// Returns all supported formats.
    ///
    pub fn all() -> [Self; 2] {
        [Self::Svg, Self::Png]
    }

    ///
    /// Returns the format named by the path extension, if it is supported.
    ///
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|extension| extension.to_str())
            .and_then(|extension| extension.parse().ok())
    }
}

impl std::str::FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            string => anyhow::bail!(
                "Unknown chart format `{string}`. Supported formats: {}",
                Self::all()
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Svg => write!(f, "svg"),
            Format::Png => write!(f, "png"),
        }
    }
}
