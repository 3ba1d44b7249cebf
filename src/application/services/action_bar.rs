// src/application/services/action_bar.rs
use std::collections::HashSet;

use crate::domain::filters::{cycle_next, SearchMode, SortOption, ViewMode, VisibilityFilter};

/// Transient filter/view state behind the list view's top action bar.
///
/// Everything here is synchronous and side-effect free; the parent list view
/// consumes the resulting state as its filter intent. Every toggle is an
/// atomic total-order cycle, there are no intermediate values. The orderings
/// for sort and view mode belong to the caller and are passed in; the
/// visibility cycle is fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionBarState {
    pub search_mode: SearchMode,
    pub search_keyword: String,
    pub sort_by: SortOption,
    pub visibility: VisibilityFilter,
    pub view_mode: ViewMode,
    pub batch_mode: bool,
    pub selected_ids: HashSet<String>,
}

impl Default for ActionBarState {
    fn default() -> Self {
        Self {
            search_mode: SearchMode::Bookmark,
            search_keyword: String::new(),
            sort_by: SortOption::Created,
            visibility: VisibilityFilter::All,
            view_mode: ViewMode::Card,
            batch_mode: false,
            selected_ids: HashSet::new(),
        }
    }
}

impl ActionBarState {
    pub fn new(sort_by: SortOption, visibility: VisibilityFilter, view_mode: ViewMode) -> Self {
        Self {
            sort_by,
            visibility,
            view_mode,
            ..Self::default()
        }
    }

    /// Flips between bookmark and tag search. The keyword is kept.
    pub fn toggle_search_mode(&mut self) {
        self.search_mode = self.search_mode.toggled();
    }

    pub fn set_search_keyword<S: Into<String>>(&mut self, keyword: S) {
        self.search_keyword = keyword.into();
    }

    /// Advances the sort option along the caller-supplied total order.
    pub fn cycle_sort(&mut self, order: &[SortOption]) {
        self.sort_by = cycle_next(self.sort_by, order);
    }

    /// Advances visibility along the fixed cycle all -> public -> private.
    pub fn cycle_visibility(&mut self) {
        self.visibility = self.visibility.next();
    }

    /// Advances the view mode along the caller-supplied total order.
    pub fn cycle_view_mode(&mut self, order: &[ViewMode]) {
        self.view_mode = cycle_next(self.view_mode, order);
    }

    /// Flips batch mode. Leaving batch mode clears the selection as part of
    /// the same step, so a stale selection can never survive the mode change.
    pub fn toggle_batch_mode(&mut self) {
        self.batch_mode = !self.batch_mode;
        if !self.batch_mode {
            self.selected_ids.clear();
        }
    }

    /// Adds or removes an id from the batch selection. Outside batch mode the
    /// selection is inert and the call is ignored.
    pub fn toggle_selected(&mut self, id: &str) {
        if !self.batch_mode {
            return;
        }
        if !self.selected_ids.remove(id) {
            self.selected_ids.insert(id.to_string());
        }
    }
}
