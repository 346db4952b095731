use indexmap::IndexMap;

use super::Series;

/// A named set of series shown or hidden together.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesGroup {
    pub name: String,
    /// Render index, assigned by [`BarData`](crate::bar_data::BarData) while the group is visible.
    pub index: usize,
    pub series: Vec<Series>,
}

impl SeriesGroup {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            index: 0,
            series: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.series.iter().map(|s| s.entries.len()).sum()
    }
}

/// All known groups keyed by name, iterated in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupRegistry {
    groups: IndexMap<String, SeriesGroup>,
}

impl GroupRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a group, replacing (in place) any group with the same name.
    pub fn insert(&mut self, group: SeriesGroup) -> Option<SeriesGroup> {
        self.groups.insert(group.name.clone(), group)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SeriesGroup> {
        self.groups.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut SeriesGroup> {
        self.groups.get_mut(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SeriesGroup> {
        self.groups.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut SeriesGroup> {
        self.groups.values_mut()
    }
}

impl FromIterator<SeriesGroup> for GroupRegistry {
    fn from_iter<I: IntoIterator<Item = SeriesGroup>>(iter: I) -> Self {
        let mut registry = Self::new();
        for group in iter {
            registry.insert(group);
        }
        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
