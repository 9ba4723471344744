// 🔎 List Controller - region filter, search and sort over the store
//
// The view state is one owned value. The visible rows are recomputed from scratch on every
// render: the list is small and the store never changes, so there is nothing to cache.

use crate::recipient::{Recipient, Region};
use std::cmp::Ordering;
use tracing::debug;

// ============================================================================
// SORTING
// ============================================================================

/// Display fields a visitor can sort by. The registration number is not one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    FullName,
    Region,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::FullName => "name",
            SortField::Region => "region",
        }
    }

    /// Lexicographic order of the field's text.
    fn compare(&self, a: &Recipient, b: &Recipient) -> Ordering {
        match self {
            SortField::FullName => a.full_name.cmp(&b.full_name),
            SortField::Region => a.region.as_str().cmp(b.region.as_str()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn ascending(field: SortField) -> Self {
        SortSpec {
            field,
            direction: SortDirection::Ascending,
        }
    }

    fn compare(&self, a: &Recipient, b: &Recipient) -> Ordering {
        let ordering = self.field.compare(a, b);
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

// ============================================================================
// VIEW STATE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Landing screen, no region chosen yet
    RegionPicker,
    Table(Region),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    region: Option<Region>,
    search_term: String,
    sort: Option<SortSpec>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(&self) -> Option<Region> {
        self.region
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    pub fn screen(&self) -> Screen {
        match self.region {
            Some(region) => Screen::Table(region),
            None => Screen::RegionPicker,
        }
    }

    /// Enter the table view for `region`. Search and sort are left as they are.
    pub fn select_region(&mut self, region: Region) {
        debug!(region = region.as_str(), "region selected");
        self.region = Some(region);
    }

    /// Return to the picker: clears region and search term, keeps the sort spec.
    pub fn back_to_picker(&mut self) {
        debug!("back to region picker");
        self.region = None;
        self.search_term.clear();
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        debug!(len = self.search_term.chars().count(), "search term changed");
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_term.push(c);
    }

    pub fn pop_search_char(&mut self) {
        self.search_term.pop();
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
    }

    /// Same field flips direction, a different field starts ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        let next = match self.sort {
            Some(current) if current.field == field => SortSpec {
                field,
                direction: current.direction.flipped(),
            },
            _ => SortSpec::ascending(field),
        };
        debug!(field = field.as_str(), direction = ?next.direction, "sort toggled");
        self.sort = Some(next);
    }

    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        self.sort = sort;
    }
}

// ============================================================================
// DERIVATION
// ============================================================================

/// Visible rows for `state`, in display order. Row N on screen is element N-1.
///
/// The input slice is never reordered; sorting happens on a fresh vector of references.
pub fn visible_recipients<'a>(recipients: &'a [Recipient], state: &ViewState) -> Vec<&'a Recipient> {
    let lower_term = state.search_term.to_lowercase();

    let mut rows: Vec<&Recipient> = recipients
        .iter()
        .filter(|r| state.region.map_or(true, |region| r.region == region))
        .filter(|r| lower_term.is_empty() || r.matches_search(&lower_term))
        .collect();

    if let Some(sort) = state.sort {
        rows.sort_by(|a, b| sort.compare(a, b));
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipient::RegistrationNumber;

    fn recipient(id: u32, name: &str, region: Region) -> Recipient {
        let kk = format!("35271234{:08}", id);
        Recipient::new(id, RegistrationNumber::parse(&kk).unwrap(), name, region)
    }

    fn sample() -> Vec<Recipient> {
        vec![
            recipient(1, "Siti Aminah", Region::Komis),
            recipient(2, "Moh. Hasan", Region::Komis),
            recipient(3, "Abdul Rahman", Region::Komis),
            recipient(4, "Nur Hayati", Region::Totongan),
            recipient(5, "Zainab", Region::Duko),
            recipient(6, "Hosniyah", Region::Duko),
            recipient(7, "Matrawi", Region::Malakah),
        ]
    }

    fn names(rows: &[&Recipient]) -> Vec<String> {
        rows.iter().map(|r| r.full_name.clone()).collect()
    }

    #[test]
    fn test_initial_state_is_region_picker() {
        let state = ViewState::new();
        assert_eq!(state.screen(), Screen::RegionPicker);
        assert_eq!(state.search_term(), "");
        assert!(state.sort().is_none());
    }

    #[test]
    fn test_no_filter_returns_everything_in_store_order() {
        let data = sample();
        let rows = visible_recipients(&data, &ViewState::new());
        let ids: Vec<u32> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_region_filter_keeps_only_that_region() {
        let data = sample();
        let mut state = ViewState::new();
        state.select_region(Region::Duko);

        assert_eq!(state.screen(), Screen::Table(Region::Duko));
        let rows = visible_recipients(&data, &state);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.region == Region::Duko));
    }

    #[test]
    fn test_region_filters_partition_the_store() {
        let data = sample();
        let total: usize = Region::ALL
            .iter()
            .map(|&region| {
                let mut state = ViewState::new();
                state.select_region(region);
                visible_recipients(&data, &state).len()
            })
            .sum();
        assert_eq!(total, data.len());
    }

    #[test]
    fn test_search_is_case_insensitive_substring_on_name() {
        let data = sample();
        let mut state = ViewState::new();
        state.set_search_term("AMIN");
        assert_eq!(names(&visible_recipients(&data, &state)), vec!["Siti Aminah"]);

        state.set_search_term("hay");
        assert_eq!(names(&visible_recipients(&data, &state)), vec!["Nur Hayati"]);
    }

    #[test]
    fn test_search_matches_region_label() {
        let data = sample();
        let mut state = ViewState::new();
        state.set_search_term("malakah");
        assert_eq!(names(&visible_recipients(&data, &state)), vec!["Matrawi"]);

        // Every label carries the "DSN." prefix
        state.set_search_term("dsn.");
        assert_eq!(visible_recipients(&data, &state).len(), data.len());
    }

    #[test]
    fn test_search_without_match_is_empty() {
        let data = sample();
        let mut state = ViewState::new();
        state.select_region(Region::Komis);
        state.set_search_term("xyz");
        assert!(visible_recipients(&data, &state).is_empty());
    }

    #[test]
    fn test_search_combines_with_region_filter() {
        let data = sample();
        let mut state = ViewState::new();
        state.select_region(Region::Komis);
        state.set_search_term("h");

        let rows = visible_recipients(&data, &state);
        assert_eq!(names(&rows), vec!["Siti Aminah", "Moh. Hasan", "Abdul Rahman"]);

        state.set_search_term("zainab");
        assert!(visible_recipients(&data, &state).is_empty());
    }

    #[test]
    fn test_search_never_matches_registration_number() {
        let data = sample();
        let mut state = ViewState::new();
        state.set_search_term("3527");
        assert!(visible_recipients(&data, &state).is_empty());
    }

    #[test]
    fn test_sort_by_name_then_toggle_reverses() {
        let data = sample();
        let mut state = ViewState::new();

        state.toggle_sort(SortField::FullName);
        assert_eq!(state.sort(), Some(SortSpec::ascending(SortField::FullName)));
        let ascending = names(&visible_recipients(&data, &state));
        assert_eq!(
            ascending,
            vec!["Abdul Rahman", "Hosniyah", "Matrawi", "Moh. Hasan", "Nur Hayati", "Siti Aminah", "Zainab"]
        );

        state.toggle_sort(SortField::FullName);
        assert_eq!(state.sort().unwrap().direction, SortDirection::Descending);
        let mut descending = names(&visible_recipients(&data, &state));
        descending.reverse();
        assert_eq!(descending, ascending);

        state.toggle_sort(SortField::FullName);
        assert_eq!(state.sort().unwrap().direction, SortDirection::Ascending);
    }

    #[test]
    fn test_sort_on_different_field_resets_to_ascending() {
        let mut state = ViewState::new();
        state.toggle_sort(SortField::FullName);
        state.toggle_sort(SortField::FullName);
        assert_eq!(state.sort().unwrap().direction, SortDirection::Descending);

        state.toggle_sort(SortField::Region);
        assert_eq!(state.sort(), Some(SortSpec::ascending(SortField::Region)));
    }

    #[test]
    fn test_sort_by_region_is_lexicographic_and_stable() {
        let data = sample();
        let mut state = ViewState::new();
        state.toggle_sort(SortField::Region);

        let ids: Vec<u32> = visible_recipients(&data, &state).iter().map(|r| r.id).collect();
        // DUKO < KOMIS < MALAKAH < TOTONGAN; ties keep store order
        assert_eq!(ids, vec![5, 6, 1, 2, 3, 7, 4]);
    }

    #[test]
    fn test_sort_does_not_reorder_store() {
        let data = sample();
        let mut state = ViewState::new();
        state.toggle_sort(SortField::FullName);
        let _ = visible_recipients(&data, &state);

        let ids: Vec<u32> = data.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_back_to_picker_clears_search_but_keeps_sort() {
        let data = sample();
        let mut state = ViewState::new();
        state.select_region(Region::Komis);
        state.set_search_term("siti");
        state.toggle_sort(SortField::FullName);

        state.back_to_picker();
        assert_eq!(state.screen(), Screen::RegionPicker);
        assert_eq!(state.search_term(), "");
        assert_eq!(state.sort(), Some(SortSpec::ascending(SortField::FullName)));

        state.select_region(Region::Komis);
        assert_eq!(state.search_term(), "");
        assert_eq!(
            names(&visible_recipients(&data, &state)),
            vec!["Abdul Rahman", "Moh. Hasan", "Siti Aminah"]
        );
    }

    #[test]
    fn test_search_editing() {
        let mut state = ViewState::new();
        state.push_search_char('s');
        state.push_search_char('i');
        assert_eq!(state.search_term(), "si");
        state.pop_search_char();
        assert_eq!(state.search_term(), "s");
        state.clear_search();
        assert_eq!(state.search_term(), "");
        state.pop_search_char();
        assert_eq!(state.search_term(), "");
    }
}
