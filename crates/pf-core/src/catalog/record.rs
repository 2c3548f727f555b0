use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse project classification.
///
/// 项目分类。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Fullstack,
    Frontend,
    Backend,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Fullstack, Category::Frontend, Category::Backend];

    pub fn id(&self) -> &'static str {
        match self {
            Category::Fullstack => "fullstack",
            Category::Frontend => "frontend",
            Category::Backend => "backend",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

/// Category selector of the projects page: one of the three categories or `all`.
///
/// 分类筛选器：三个分类之一，或 `all`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Fullstack,
    Frontend,
    Backend,
}

impl CategoryFilter {
    /// Display order of the category buttons.
    pub const ALL: [CategoryFilter; 4] = [
        CategoryFilter::All,
        CategoryFilter::Fullstack,
        CategoryFilter::Frontend,
        CategoryFilter::Backend,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Fullstack => "fullstack",
            CategoryFilter::Frontend => "frontend",
            CategoryFilter::Backend => "backend",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Projects",
            CategoryFilter::Fullstack => "Full Stack",
            CategoryFilter::Frontend => "Frontend",
            CategoryFilter::Backend => "Backend",
        }
    }

    /// `all` matches every category; otherwise the category must be equal.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Fullstack => category == Category::Fullstack,
            CategoryFilter::Frontend => category == Category::Frontend,
            CategoryFilter::Backend => category == Category::Backend,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        match category {
            Category::Fullstack => CategoryFilter::Fullstack,
            Category::Frontend => CategoryFilter::Frontend,
            Category::Backend => CategoryFilter::Backend,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CategoryFilter::All),
            "fullstack" => Ok(CategoryFilter::Fullstack),
            "frontend" => Ok(CategoryFilter::Frontend),
            "backend" => Ok(CategoryFilter::Backend),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A single portfolio project.
///
/// `tech` keeps insertion order; it is the render order of the badges.
/// `live` / `github` only control which links a card shows and never take part
/// in filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,

    /// Short descriptive type, e.g. "Full Stack LMS"
    #[serde(rename = "type")]
    pub kind: String,

    pub description: String,

    pub tech: Vec<String>,

    #[serde(default)]
    pub live: Option<String>,

    #[serde(default)]
    pub github: Option<String>,

    /// Emoji shown on the card header
    #[serde(default)]
    pub icon: Option<String>,

    pub category: Category,

    /// Display priority only; not used for filtering
    #[serde(default)]
    pub featured: bool,
}
