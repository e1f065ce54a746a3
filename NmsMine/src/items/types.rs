//! Item record types
//!
//! These are the persisted shape of the item database; the serde names are
//! the JSON keys consumers rely on.

use serde::{Deserialize, Deserializer, Serialize};

/// Price curve of a tradeable item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemCost {
    pub space_station_markup: f64,
    pub low_price_mod: f64,
    pub high_price_mod: f64,
    pub buy_base_markup: f64,
    pub buy_markup_mod: f64,
}

/// One ingredient needed to craft an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemRequirement {
    pub id: String,
    pub quantity: i64,
}

/// A stat modified by a technology.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemStatBonus {
    #[serde(rename = "type")]
    pub stat_type: String,
    pub bonus: i64,
    pub level: i64,
}

/// Base-building placement and material rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemBuildingInfo {
    pub buildable_on_base: bool,
    pub buildable_on_freighter: bool,
    pub buildable_on_planet: bool,
    pub complexity_cost: i64,
    pub group: String,
    pub can_change_color: bool,
    pub can_change_material: bool,
}

/// RGBA color on a 0-1 scale, as stored in the data tables.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ItemColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl ItemColor {
    /// `#rrggbb` encoding. Alpha is not encoded.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

/// Scale a 0-1 channel to 0-255, truncating. Out-of-range input saturates.
fn channel(value: f64) -> u8 {
    (value * 255.0) as u8
}

/// A product, substance or technology.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub name_lower: String,
    pub symbol: String,
    pub subtitle: String,
    pub description: String,
    pub teach: bool,
    pub hint: String,
    pub base_value: f64,
    pub level: i64,
    /// Canonical icon id, also the atlas key.
    pub icon: String,
    pub color: String,
    pub world_color: String,
    pub chargeable: bool,
    pub charge_amount: i64,
    pub substance_category: String,
    pub product_category: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub charge_by: Vec<String>,
    pub build_fully_charged: bool,
    pub upgrade: bool,
    pub core: bool,
    pub technology_category: String,
    pub technology_rarity: String,
    pub value: i64,
    pub base_stat: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub stat_bonuses: Vec<ItemStatBonus>,
    pub required_tech: String,
    pub required_level: i64,
    pub upgrade_color: String,
    pub link_color: String,
    pub reward_group: String,
    pub rarity: String,
    pub legality: String,
    pub consumable: bool,
    pub charge_value: i64,
    #[serde(deserialize_with = "null_as_empty")]
    pub requirements: Vec<ItemRequirement>,
    pub cost: ItemCost,
    pub required_rank: i64,
    pub dispensing_race: String,
    pub tech_shop_rarity: String,
    pub specific_charge_only: bool,
    pub normalised_value_on_world: f64,
    pub normalised_value_off_world: f64,
    pub wiki_enabled: bool,
    pub is_craftable: bool,
    pub economy_influence_multiplier: f64,
    /// Present only for buildable objects.
    pub building_info: Option<ItemBuildingInfo>,
}

impl Item {
    /// Whether the item carries base-building metadata.
    pub fn is_building(&self) -> bool {
        self.building_info.is_some()
    }
}

/// Older exports wrote empty lists as `null`.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
