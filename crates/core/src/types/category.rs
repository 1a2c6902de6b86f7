//! Product categories and the browse filter over them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Merchandising category a saree belongs to.
///
/// Categories are a closed set; the admin form offers them as a select, so
/// there is no free-text tag to validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Bridal,
    Silk,
    Casual,
    Designer,
    Festive,
}

impl Category {
    /// Every category, in the order the storefront shows its tiles.
    pub const ALL: [Self; 5] = [
        Self::Bridal,
        Self::Silk,
        Self::Casual,
        Self::Designer,
        Self::Festive,
    ];

    /// The tag used in filters and serialized data.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bridal => "bridal",
            Self::Silk => "silk",
            Self::Casual => "casual",
            Self::Designer => "designer",
            Self::Festive => "festive",
        }
    }

    /// Display label for the category tiles.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bridal => "Bridal",
            Self::Silk => "Silk Sarees",
            Self::Casual => "Casual Wear",
            Self::Designer => "Designer",
            Self::Festive => "Festive",
        }
    }

    /// Tile icon glyph.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Bridal => "💍",
            Self::Silk => "✨",
            Self::Casual => "🌸",
            Self::Designer => "🎨",
            Self::Festive => "🎉",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bridal" => Ok(Self::Bridal),
            "silk" => Ok(Self::Silk),
            "casual" => Ok(Self::Casual),
            "designer" => Ok(Self::Designer),
            "festive" => Ok(Self::Festive),
            _ => Err(format!(
                "unknown category: {s}. Valid categories: bridal, silk, casual, designer, festive"
            )),
        }
    }
}

/// Category axis of the browse filter: everything, or exactly one category.
///
/// Defaults to [`CategoryFilter::All`], matching the storefront's initial
/// state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Whether a product with the given category passes this filter.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => only == category,
        }
    }

    /// The tag used in filters and serialized data ("all" or a category tag).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
        }
    }

    /// Display label ("All Sarees" or the category label).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Sarees",
            Self::Only(category) => category.label(),
        }
    }

    /// Tile icon glyph.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::All => "👗",
            Self::Only(category) => category.icon(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.as_str().to_owned()
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
