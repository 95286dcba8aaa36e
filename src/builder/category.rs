//! Asset categories produced by a build.

use std::fmt;
use std::str::FromStr;

use crate::core::BuildError;

/// One output bucket of the build.
///
/// Each category is aggregated independently over the resolved graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetCategory {
    /// Scripts and templates, wrapped as registered modules
    Scripts,
    /// Stylesheets
    Styles,
    /// Images
    Images,
    /// Fonts
    Fonts,
    /// Miscellaneous files
    Files,
}

impl AssetCategory {
    /// Every category in output order.
    pub const ALL: [AssetCategory; 5] = [
        AssetCategory::Scripts,
        AssetCategory::Styles,
        AssetCategory::Images,
        AssetCategory::Fonts,
        AssetCategory::Files,
    ];

    /// Manifest key and display name of the category.
    pub const fn as_str(self) -> &'static str {
        match self {
            AssetCategory::Scripts => "scripts",
            AssetCategory::Styles => "styles",
            AssetCategory::Images => "images",
            AssetCategory::Fonts => "fonts",
            AssetCategory::Files => "files",
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetCategory {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssetCategory::ALL.into_iter().find(|category| category.as_str() == s).ok_or_else(|| {
            BuildError::UnknownCategory {
                name: s.to_string(),
            }
        })
    }
}
