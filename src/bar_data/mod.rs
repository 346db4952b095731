//! Visibility state of the bar chart's groups.
//!
//! [`BarData`] owns the registry of all known groups and tracks which of them
//! are shown. Every change to the visible set recomputes the render index of
//! each visible group and then notifies listeners, synchronously and in
//! registration order.

mod legend;

use std::collections::{HashMap, HashSet};
use std::fmt;

use indexmap::IndexSet;
use log::{debug, trace};

use crate::group::{GroupRegistry, SeriesGroup};

pub(crate) use legend::LegendRow;
pub use legend::{LegendEntry, series_legend};

/// Callback run after every change to the visible set.
pub type Listener = Box<dyn FnMut()>;

/// Construction values carried for the caller and never interpreted here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BarDataOptions {
    pub initial_selection: Option<String>,
    pub flag: bool,
}

pub struct BarData {
    registry: GroupRegistry,
    order: IndexSet<String>,
    visible: HashSet<String>,
    listeners: Vec<Listener>,
    options: BarDataOptions,
}

impl BarData {
    /// Build the visibility state.
    ///
    /// Every registry group starts visible unless `default_hidden` maps it to
    /// `true`. Repeated names in `order` count at their first position.
    #[must_use]
    pub fn new(
        registry: GroupRegistry,
        default_hidden: &HashMap<String, bool>,
        order: impl IntoIterator<Item = String>,
        options: BarDataOptions,
    ) -> Self {
        let visible = registry
            .names()
            .filter(|name| !default_hidden.get(*name).copied().unwrap_or(false))
            .map(String::from)
            .collect();

        let mut data = Self {
            registry,
            order: order.into_iter().collect(),
            visible,
            listeners: Vec::new(),
            options,
        };
        data.update_indexes();
        data
    }

    /// Show a group. Unknown or already visible names are ignored.
    pub fn add_group(&mut self, name: &str) {
        if !self.registry.contains(name) {
            trace!("Ignoring add of unknown group '{name}'");
            return;
        }
        if !self.visible.insert(name.to_string()) {
            trace!("Group '{name}' is already visible");
            return;
        }
        debug!("Showing group '{name}'");
        self.update_indexes();
        self.notify();
    }

    /// Hide a group. Unknown or already hidden names are ignored.
    pub fn remove_group(&mut self, name: &str) {
        if !self.registry.contains(name) {
            trace!("Ignoring remove of unknown group '{name}'");
            return;
        }
        if !self.visible.remove(name) {
            trace!("Group '{name}' is already hidden");
            return;
        }
        debug!("Hiding group '{name}'");
        self.update_indexes();
        self.notify();
    }

    /// Subscribe to visibility changes. The listener is not called now.
    pub fn register_listener(&mut self, listener: impl FnMut() + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Visible groups in registry order, each with its current index.
    #[must_use]
    pub fn data(&self) -> Vec<&SeriesGroup> {
        self.registry
            .iter()
            .filter(|group| self.visible.contains(&group.name))
            .collect()
    }

    /// Value to color legend of a group; empty for unknown groups.
    #[must_use]
    pub fn legend(&self, group_name: &str) -> Vec<LegendEntry> {
        self.registry
            .get(group_name)
            .map(|group| group.series.iter().flat_map(series_legend).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_visible(&self, name: &str) -> bool {
        self.visible.contains(name)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub const fn registry(&self) -> &GroupRegistry {
        &self.registry
    }

    #[must_use]
    pub const fn order(&self) -> &IndexSet<String> {
        &self.order
    }

    #[must_use]
    pub const fn options(&self) -> &BarDataOptions {
        &self.options
    }

    /// Visible names, highest priority first.
    ///
    /// Names in `order` come first, in that order. Visible groups missing
    /// from `order` follow in registry order.
    fn ranked_visible(&self) -> Vec<String> {
        let ordered = self
            .order
            .iter()
            .filter(|name| self.visible.contains(*name));
        let unordered = self
            .registry
            .names()
            .filter(|name| self.visible.contains(*name) && !self.order.contains(*name));
        ordered
            .map(String::as_str)
            .chain(unordered)
            .map(String::from)
            .collect()
    }

    fn update_indexes(&mut self) {
        let ranked = self.ranked_visible();
        let count = ranked.len();
        for (rank, name) in ranked.iter().enumerate() {
            if let Some(group) = self.registry.get_mut(name) {
                group.index = count - 1 - rank;
            }
        }
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener();
        }
    }
}

impl fmt::Debug for BarData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BarData")
            .field("registry", &self.registry)
            .field("order", &self.order)
            .field("visible", &self.visible)
            .field("listeners", &self.listeners.len())
            .field("options", &self.options)
            .finish()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
