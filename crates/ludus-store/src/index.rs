//! Inverted index from surface form to entry ids

use std::collections::BTreeMap;

use ludus_domain::EntryId;

/// Map from lowercase surface form to the entries that produce it
///
/// Forms are kept sorted so two builds of the same input serialize
/// identically. Each id list keeps construction order and never holds the
/// same id twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MorphIndex {
    forms: BTreeMap<String, Vec<EntryId>>,
}

/// Index key for a surface form or a user's search term
pub fn normalize_form(form: &str) -> String {
    form.trim().to_lowercase()
}

impl MorphIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `id` produces `form`
    ///
    /// Returns `false` if the pair was already indexed or the form is blank.
    pub fn insert(&mut self, form: &str, id: EntryId) -> bool {
        let key = normalize_form(form);
        if key.is_empty() {
            return false;
        }

        let ids = self.forms.entry(key).or_default();
        if ids.contains(&id) {
            return false;
        }
        ids.push(id);
        true
    }

    /// Index every form produced by one entry
    pub fn insert_forms<'a, I>(&mut self, id: EntryId, forms: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        forms
            .into_iter()
            .filter(|form| self.insert(form, id))
            .count()
    }

    /// Remove `id` from the list for `form`, dropping the form once its list is empty
    pub fn remove(&mut self, form: &str, id: EntryId) -> bool {
        let key = normalize_form(form);
        let Some(ids) = self.forms.get_mut(&key) else {
            return false;
        };

        let before = ids.len();
        ids.retain(|existing| *existing != id);
        let removed = ids.len() != before;

        if ids.is_empty() {
            self.forms.remove(&key);
        }
        removed
    }

    /// Remove `id` from every listed form
    pub fn remove_forms<'a, I>(&mut self, id: EntryId, forms: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        forms
            .into_iter()
            .filter(|form| self.remove(form, id))
            .count()
    }

    /// Entries that produce the term, in construction order
    pub fn get(&self, term: &str) -> &[EntryId] {
        self.forms
            .get(&normalize_form(term))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the term is indexed
    pub fn contains(&self, term: &str) -> bool {
        self.forms.contains_key(&normalize_form(term))
    }

    /// Number of distinct forms
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    /// Whether the index is empty
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Number of (form, id) pairs
    pub fn postings(&self) -> usize {
        self.forms.values().map(Vec::len).sum()
    }

    /// Forms and their ids, in sorted form order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[EntryId])> {
        self.forms
            .iter()
            .map(|(form, ids)| (form.as_str(), ids.as_slice()))
    }

    /// Every form that lists `id`
    pub fn forms_of(&self, id: EntryId) -> Vec<&str> {
        self.iter()
            .filter(|(_, ids)| ids.contains(&id))
            .map(|(form, _)| form)
            .collect()
    }
}

impl FromIterator<(String, Vec<EntryId>)> for MorphIndex {
    fn from_iter<T: IntoIterator<Item = (String, Vec<EntryId>)>>(iter: T) -> Self {
        let mut index = Self::new();
        for (form, ids) in iter {
            for id in ids {
                index.insert(&form, id);
            }
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: u32) -> EntryId {
        EntryId::new(value)
    }

    #[test]
    fn test_insert_normalizes_case() {
        let mut index = MorphIndex::new();
        assert!(index.insert("Aqua", id(0)));
        assert_eq!(index.get("aqua"), &[id(0)]);
        assert_eq!(index.get(" AQUA "), &[id(0)]);
    }

    #[test]
    fn test_same_entry_never_listed_twice() {
        let mut index = MorphIndex::new();
        assert!(index.insert("est", id(1)));
        assert!(!index.insert("EST", id(1)));
        assert_eq!(index.get("est").len(), 1);
    }

    #[test]
    fn test_shared_form_keeps_construction_order() {
        let mut index = MorphIndex::new();
        index.insert("est", id(4));
        index.insert("est", id(2));
        assert_eq!(index.get("est"), &[id(4), id(2)]);
        assert_eq!(index.postings(), 2);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_remove_drops_empty_form() {
        let mut index = MorphIndex::new();
        index.insert("amo", id(0));
        index.insert("amo", id(1));

        assert!(index.remove("amo", id(0)));
        assert_eq!(index.get("amo"), &[id(1)]);

        assert!(index.remove("amo", id(1)));
        assert!(!index.contains("amo"));
        assert!(index.is_empty());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut index = MorphIndex::new();
        index.insert("amo", id(0));
        assert!(!index.remove("amas", id(0)));
        assert!(!index.remove("amo", id(9)));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_blank_form_ignored() {
        let mut index = MorphIndex::new();
        assert!(!index.insert("  ", id(0)));
        assert!(index.is_empty());
    }

    #[test]
    fn test_forms_of() {
        let mut index = MorphIndex::new();
        index.insert_forms(id(3), ["aqua", "aquae"]);
        index.insert("aquam", id(4));
        assert_eq!(index.forms_of(id(3)), vec!["aqua", "aquae"]);
    }
}
