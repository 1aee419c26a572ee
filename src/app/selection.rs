//! Selection set and the "select first N" form

use std::collections::HashSet;

use crate::error::SelectError;
use crate::models::ArtworkRecord;

/// Records the user has marked, in selection order, unique by id.
///
/// Nothing here knows about pages: navigating away keeps the set intact.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionSet {
    records: Vec<ArtworkRecord>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    pub fn records(&self) -> &[ArtworkRecord] {
        &self.records
    }

    /// Replace the whole set. Later duplicates of an id are dropped.
    pub fn replace(&mut self, new_set: Vec<ArtworkRecord>) {
        let mut seen = HashSet::with_capacity(new_set.len());
        self.records = new_set.into_iter().filter(|r| seen.insert(r.id)).collect();
    }

    /// The set with `record` added, or removed if already present
    pub fn toggled(&self, record: &ArtworkRecord) -> Vec<ArtworkRecord> {
        if self.contains(record.id) {
            self.records
                .iter()
                .filter(|r| r.id != record.id)
                .cloned()
                .collect()
        } else {
            let mut next = self.records.clone();
            next.push(record.clone());
            next
        }
    }

    /// The set plus every row of `page`
    pub fn with_page(&self, page: &[ArtworkRecord]) -> Vec<ArtworkRecord> {
        let mut next = self.records.clone();
        next.extend(page.iter().filter(|r| !self.contains(r.id)).cloned());
        next
    }

    /// The set minus every row of `page`
    pub fn without_page(&self, page: &[ArtworkRecord]) -> Vec<ArtworkRecord> {
        self.records
            .iter()
            .filter(|r| !page.iter().any(|p| p.id == r.id))
            .cloned()
            .collect()
    }

    /// True when the page is non-empty and every row on it is selected
    pub fn covers_page(&self, page: &[ArtworkRecord]) -> bool {
        !page.is_empty() && page.iter().all(|r| self.contains(r.id))
    }
}

/// Parse the count typed into the form. Empty input is "unset".
pub fn parse_pending_count(input: &str) -> Result<usize, SelectError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SelectError::Empty);
    }
    trimmed
        .parse::<usize>()
        .map_err(|_| SelectError::NotANumber(trimmed.to_string()))
}

/// First `min(n, rows.len())` rows, in page order
pub fn first_n(rows: &[ArtworkRecord], n: usize) -> Vec<ArtworkRecord> {
    rows.iter().take(n).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(ids: impl IntoIterator<Item = u64>) -> Vec<ArtworkRecord> {
        ids.into_iter().map(ArtworkRecord::new).collect()
    }

    fn ids(records: &[ArtworkRecord]) -> Vec<u64> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_replace_dedups_by_id() {
        let mut set = SelectionSet::new();
        set.replace(rows([3, 1, 3, 2, 1]));
        assert_eq!(ids(set.records()), vec![3, 1, 2]);
    }

    #[test]
    fn test_toggle_add_and_remove() {
        let mut set = SelectionSet::new();
        let r = ArtworkRecord::new(9);
        set.replace(set.toggled(&r));
        assert!(set.contains(9));
        set.replace(set.toggled(&r));
        assert!(set.is_empty());
    }

    #[test]
    fn test_page_select_and_clear_keep_other_pages() {
        let mut set = SelectionSet::new();
        set.replace(rows([100]));
        let page = rows(1..=4);

        set.replace(set.with_page(&page));
        assert_eq!(ids(set.records()), vec![100, 1, 2, 3, 4]);
        assert!(set.covers_page(&page));

        set.replace(set.without_page(&page));
        assert_eq!(ids(set.records()), vec![100]);
        assert!(!set.covers_page(&page));
    }

    #[test]
    fn test_first_n_sizes() {
        let page = rows(1..=12);
        for n in 0..20 {
            assert_eq!(first_n(&page, n).len(), n.min(12));
        }
        assert_eq!(ids(&first_n(&page, 3)), vec![1, 2, 3]);
        assert!(first_n(&[], 5).is_empty());
    }

    #[test]
    fn test_parse_pending_count() {
        assert_eq!(parse_pending_count("5"), Ok(5));
        assert_eq!(parse_pending_count(" 0 "), Ok(0));
        assert_eq!(parse_pending_count(""), Err(SelectError::Empty));
        assert_eq!(
            parse_pending_count("abc"),
            Err(SelectError::NotANumber("abc".into()))
        );
        assert!(parse_pending_count("99999999999999999999999999").is_err());
    }
}
