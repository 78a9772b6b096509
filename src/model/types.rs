use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::defaults::{default_list_name, default_quantity};

/// The full state of the application.
///
/// Serialized with the same field names and shape the stored snapshots have
/// always used: `activeList` is `-1` when no list is active.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    #[serde(default)]
    pub shopping_lists: Vec<ShoppingList>,
    #[serde(default, with = "active_index")]
    pub active_list: Option<usize>,
}

impl State {
    /// The active list, if `active_list` points at an existing list.
    pub fn active(&self) -> Option<&ShoppingList> {
        self.active_list.and_then(|idx| self.shopping_lists.get(idx))
    }

    pub fn active_mut(&mut self) -> Option<&mut ShoppingList> {
        match self.active_list {
            Some(idx) => self.shopping_lists.get_mut(idx),
            None => None,
        }
    }
}

/// A named shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingList {
    #[serde(default = "default_list_name")]
    pub name: String,
    #[serde(default)]
    pub items: Vec<ShoppingListItem>,
}

impl ShoppingList {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn with_items(name: impl Into<String>, items: Vec<ShoppingListItem>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }
}

impl Default for ShoppingList {
    fn default() -> Self {
        Self::new(default_list_name())
    }
}

/// A single entry of a shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_quantity", deserialize_with = "positive_quantity::deserialize")]
    pub quantity: u32,
    #[serde(default)]
    pub checked: bool,
}

impl ShoppingListItem {
    /// Build an item. A zero quantity is raised to 1.
    pub fn new(name: impl Into<String>, quantity: u32, checked: bool) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.max(1),
            checked,
        }
    }
}

/// User preferences, persisted separately from the lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,
}

/// Visual theme of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Theme {
    /// All variants, in the order the settings dialog lists them.
    pub fn all() -> &'static [Theme] {
        &[
            Self::Dark,
            Self::Light,
            Self::Winter,
            Self::Spring,
            Self::Summer,
            Self::Autumn,
        ]
    }

    /// Stable key used in stored settings and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Winter => "winter",
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
            Self::Winter => "Winter",
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Autumn => "Autumn",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|theme| theme.as_str() == wanted)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::all().iter().map(Theme::as_str).collect();
                format!("unknown theme '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

/// `Option<usize>` <-> `-1 | index`.
///
/// Any negative stored value reads back as `None`.
mod active_index {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<usize>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(idx) => serializer.serialize_u64(*idx as u64),
            None => serializer.serialize_i64(-1),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<usize>, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        Ok(usize::try_from(raw).ok())
    }
}

/// Stored quantities below 1 read back as 1.
mod positive_quantity {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        Ok(u32::deserialize(deserializer)?.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_state_serializes_with_minus_one() {
        let json = serde_json::to_string(&State::default()).unwrap();
        assert_eq!(json, r#"{"shoppingLists":[],"activeList":-1}"#);
    }

    #[test]
    fn stored_zero_quantity_reads_as_one() {
        let raw = r#"{"shoppingLists":[{"name":"X","items":[{"name":"Milk","quantity":0},{"name":"Eggs"}]}],"activeList":0}"#;
        let state: State = serde_json::from_str(raw).unwrap();
        let items = &state.shopping_lists[0].items;
        assert_eq!(items[0].quantity, 1);
        assert_eq!(items[1].quantity, 1);
    }

    #[test]
    fn stored_snapshot_parses() {
        let raw = r#"{"shoppingLists":[{"name":"X","items":[{"name":"Milk","quantity":2,"checked":true}]}],"activeList":0}"#;
        let state: State = serde_json::from_str(raw).unwrap();
        assert_eq!(state.active_list, Some(0));
        assert_eq!(state.shopping_lists[0].items[0], ShoppingListItem::new("Milk", 2, true));
    }

    #[test]
    fn negative_active_list_reads_as_none() {
        let state: State = serde_json::from_str(r#"{"shoppingLists":[],"activeList":-7}"#).unwrap();
        assert_eq!(state.active_list, None);
    }

    #[test]
    fn missing_item_fields_take_defaults() {
        let item: ShoppingListItem = serde_json::from_str(r#"{"name":"Tea"}"#).unwrap();
        assert_eq!(item.quantity, 1);
        assert!(!item.checked);
    }

    #[test]
    fn active_ignores_dangling_index() {
        let state = State {
            shopping_lists: vec![ShoppingList::new("A")],
            active_list: Some(3),
        };
        assert!(state.active().is_none());
    }

    #[test]
    fn zero_quantity_is_raised_to_one() {
        assert_eq!(ShoppingListItem::new("Salt", 0, false).quantity, 1);
    }

    #[test]
    fn theme_round_trips_through_str() {
        for theme in Theme::all() {
            assert_eq!(theme.as_str().parse::<Theme>().unwrap(), *theme);
        }
        assert!("neon".parse::<Theme>().is_err());
    }

    #[test]
    fn settings_serialize_lowercase() {
        let settings = Settings {
            theme: Theme::Autumn,
        };
        assert_eq!(serde_json::to_string(&settings).unwrap(), r#"{"theme":"autumn"}"#);
    }
}
