// src/domain/filters.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the search keyword is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    Bookmark,
    Tag,
}

impl SearchMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Bookmark => Self::Tag,
            Self::Tag => Self::Bookmark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bookmark => "bookmark",
            Self::Tag => "tag",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOption {
    Created,
    Updated,
    Pinned,
    Popular,
}

impl SortOption {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Pinned => "pinned first",
            Self::Popular => "popular",
        }
    }
}

/// Default total order used when the caller has no preference of its own.
pub const SORT_CYCLE: &[SortOption] = &[
    SortOption::Created,
    SortOption::Updated,
    SortOption::Pinned,
    SortOption::Popular,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityFilter {
    All,
    Public,
    Private,
}

impl VisibilityFilter {
    /// Fixed closed cycle: all -> public -> private -> all.
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Public,
            Self::Public => Self::Private,
            Self::Private => Self::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Public => "public only",
            Self::Private => "private only",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Card,
    List,
    Minimal,
    Title,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::List => "list",
            Self::Minimal => "minimal",
            Self::Title => "title",
        }
    }
}

/// Default total order used when the caller has no preference of its own.
pub const VIEW_CYCLE: &[ViewMode] = &[
    ViewMode::Card,
    ViewMode::List,
    ViewMode::Minimal,
    ViewMode::Title,
];

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for VisibilityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Advances `current` one step along `order`, wrapping at the end.
///
/// Every cycling toggle goes through here so the stepping logic exists once,
/// no matter which presentation branch invokes it. A value not present in
/// `order` restarts the cycle at the first element.
pub fn cycle_next<T: Copy + PartialEq>(current: T, order: &[T]) -> T {
    debug_assert!(!order.is_empty());
    match order.iter().position(|v| *v == current) {
        Some(idx) => order[(idx + 1) % order.len()],
        None => order[0],
    }
}
