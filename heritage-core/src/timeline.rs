//! Timeline carousel: the year table, active-item bookkeeping, keyboard
//! navigation and the scroll math used when an item is activated.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::HeritageError;

/// Description used when a year has no entry in the table.
pub const FALLBACK_DESCRIPTION: &str = "Informação não disponível.";

/// Static mapping from four-digit year to descriptive text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct TimelineData {
    entries: BTreeMap<String, String>,
}

impl TimelineData {
    /// Build a table, rejecting keys that are not years and blank texts.
    pub fn new(entries: BTreeMap<String, String>) -> Result<Self, HeritageError> {
        for (year, text) in &entries {
            if !is_four_digit_year(year) {
                return Err(HeritageError::InvalidYear(year.clone()));
            }
            if text.trim().is_empty() {
                return Err(HeritageError::EmptyEntry(year.clone()));
            }
        }
        Ok(Self { entries })
    }

    pub fn get(&self, year: &str) -> Option<&str> {
        self.entries.get(year).map(String::as_str)
    }

    /// Text for `year`, or [`FALLBACK_DESCRIPTION`] when the year is unknown.
    pub fn describe(&self, year: &str) -> &str {
        self.get(year).unwrap_or(FALLBACK_DESCRIPTION)
    }

    /// Years in ascending order.
    pub fn years(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn is_four_digit_year(value: &str) -> bool {
    value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit())
}

/// One selectable year marker, as read from the item's data attributes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineItem {
    pub year: String,
    pub title: Option<String>,
}

impl TimelineItem {
    pub fn new(year: impl Into<String>, title: Option<String>) -> Self {
        Self {
            year: year.into(),
            title: title.filter(|t| !t.is_empty()),
        }
    }

    /// Display label, falling back to `Ano <year>`.
    pub fn display_title(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => format!("Ano {}", self.year),
        }
    }
}

/// What the detail panel shows for the active item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PanelContent {
    pub title: String,
    pub description: String,
}

impl PanelContent {
    pub fn for_item(item: &TimelineItem, data: &TimelineData) -> Self {
        Self {
            title: format!("{} — {}", item.year, item.display_title()),
            description: data.describe(&item.year).to_string(),
        }
    }
}

/// Keys the timeline track reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Next,
    Previous,
    First,
    Last,
    Activate,
}

impl NavKey {
    /// Map a `KeyboardEvent.key` value; unhandled keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" | "ArrowDown" => Some(Self::Next),
            "ArrowLeft" | "ArrowUp" => Some(Self::Previous),
            "Home" => Some(Self::First),
            "End" => Some(Self::Last),
            "Enter" | " " => Some(Self::Activate),
            _ => None,
        }
    }

    /// Whether handling this key moves focus to another item.
    pub fn moves_focus(self) -> bool {
        !matches!(self, Self::Activate)
    }
}

/// Ordered items plus the index of the active one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineState {
    items: Vec<TimelineItem>,
    active: Option<usize>,
}

impl TimelineState {
    /// `None` when there are no items; the controller then stays detached.
    pub fn new(items: Vec<TimelineItem>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self {
            items,
            active: None,
        })
    }

    pub fn items(&self) -> &[TimelineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Make `index` the single active item and return the panel content for it.
    ///
    /// Out-of-range indices are ignored and leave the state untouched.
    pub fn activate(&mut self, index: usize, data: &TimelineData) -> Option<PanelContent> {
        let item = self.items.get(index)?;
        let panel = PanelContent::for_item(item, data);
        self.active = Some(index);
        Some(panel)
    }

    /// Target of a key press given the focused item, if any.
    ///
    /// `None` when focus is not on a tracked item: the key is left to the
    /// browser and nothing is activated.
    pub fn key_target(&self, focused: Option<usize>, key: NavKey) -> Option<usize> {
        let focused = focused.filter(|idx| *idx < self.items.len())?;
        Some(self.target_for(focused, key))
    }

    /// Index focus should land on after `key` is pressed on item `focused`.
    pub fn target_for(&self, focused: usize, key: NavKey) -> usize {
        let last = self.items.len().saturating_sub(1);
        let focused = focused.min(last);
        match key {
            NavKey::Next => (focused + 1).min(last),
            NavKey::Previous => focused.saturating_sub(1),
            NavKey::First => 0,
            NavKey::Last => last,
            NavKey::Activate => focused,
        }
    }
}

/// Layout measurements needed to center an item in the scrolling track.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrackMetrics {
    /// `offsetLeft` of the item inside the track.
    pub item_offset_left: f64,
    pub item_width: f64,
    /// Visible width of the track (bounding rect).
    pub track_width: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

/// Horizontal scroll offset that centers the item, clamped to the scrollable range.
pub fn centered_scroll_left(metrics: TrackMetrics) -> f64 {
    let target =
        metrics.item_offset_left - metrics.track_width / 2.0 + metrics.item_width / 2.0;
    let max_scroll = (metrics.scroll_width - metrics.client_width).max(0.0);
    if target.is_nan() {
        return 0.0;
    }
    target.clamp(0.0, max_scroll)
}

/// Vertical scroll position that keeps `main` clear of a fixed nav bar, if a
/// correction is needed.
pub fn nav_alignment_target(scroll_y: f64, nav_height: f64, main_top: f64) -> Option<f64> {
    if scroll_y + nav_height > main_top {
        Some(main_top - nav_height)
    } else {
        None
    }
}
