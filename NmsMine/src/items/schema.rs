//! Field schemas
//!
//! A schema maps exml field names to a [`FieldRule`]: how to convert the
//! property node and which field of the record it lands in. One interpreter
//! ([`Schema::apply`]) walks a record's children and dispatches through the
//! table, so adding a field is one table line.
//!
//! Nested composites (cost, color, requirements, stat bonuses) are themselves
//! described by schemas over their own record types.

use super::convert;
use super::types::{
    Item, ItemBuildingInfo, ItemColor, ItemCost, ItemRequirement, ItemStatBonus,
};
use crate::formats::exml::PropertyNode;
use crate::localization::StringTable;
use std::collections::HashMap;
use std::fmt;

/// Mutable access to one field of a record.
pub type Accessor<T, V> = fn(&mut T) -> &mut V;

/// Where a localized field finds its string-table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    /// The node's own value.
    Scalar,
    /// The node's first child.
    Indirect,
}

/// Conversion rule for one field.
pub enum FieldRule<T> {
    Scalar(Accessor<T, String>),
    Indirect(Accessor<T, String>),
    IndirectList(Accessor<T, Vec<String>>),
    Bool(Accessor<T, bool>),
    Int(Accessor<T, i64>),
    Float(Accessor<T, f64>),
    Localized(KeySource, Accessor<T, String>),
    IconPath(Accessor<T, String>),
    Color(Accessor<T, String>),
    Cost(Accessor<T, ItemCost>),
    Requirements(Accessor<T, Vec<ItemRequirement>>),
    StatBonuses(Accessor<T, Vec<ItemStatBonus>>),
}

impl<T> FieldRule<T> {
    /// Short rule name, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldRule::Scalar(_) => "scalar",
            FieldRule::Indirect(_) => "indirect",
            FieldRule::IndirectList(_) => "indirect-list",
            FieldRule::Bool(_) => "bool",
            FieldRule::Int(_) => "int",
            FieldRule::Float(_) => "float",
            FieldRule::Localized(KeySource::Scalar, _) => "localized",
            FieldRule::Localized(KeySource::Indirect, _) => "localized-indirect",
            FieldRule::IconPath(_) => "icon-path",
            FieldRule::Color(_) => "color",
            FieldRule::Cost(_) => "cost",
            FieldRule::Requirements(_) => "requirement-list",
            FieldRule::StatBonuses(_) => "stat-bonus-list",
        }
    }

    /// Convert `node` and store it in `target`.
    pub fn apply(&self, node: &PropertyNode, strings: &StringTable, target: &mut T) {
        match self {
            FieldRule::Scalar(field) => *field(target) = convert::scalar(node).to_string(),
            FieldRule::Indirect(field) => *field(target) = convert::indirect(node).to_string(),
            FieldRule::IndirectList(field) => *field(target) = convert::indirect_list(node),
            FieldRule::Bool(field) => *field(target) = convert::boolean(node),
            FieldRule::Int(field) => *field(target) = convert::integer(node),
            FieldRule::Float(field) => *field(target) = convert::float(node),
            FieldRule::Localized(source, field) => {
                let key = match source {
                    KeySource::Scalar => convert::scalar(node),
                    KeySource::Indirect => convert::indirect(node),
                };
                *field(target) = strings.lookup(key).to_string();
            }
            FieldRule::IconPath(field) => *field(target) = convert::icon_path(node),
            FieldRule::Color(field) => {
                *field(target) = COLOR_SCHEMA.extract(node, strings).to_hex();
            }
            FieldRule::Cost(field) => *field(target) = COST_SCHEMA.extract(node, strings),
            FieldRule::Requirements(field) => {
                *field(target) = REQUIREMENT_SCHEMA.extract_each(node, strings);
            }
            FieldRule::StatBonuses(field) => {
                *field(target) = STAT_BONUS_SCHEMA.extract_each(node, strings);
            }
        }
    }
}

impl<T> fmt::Debug for FieldRule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

/// Field-name to rule table for one record type.
pub struct Schema<T> {
    rules: HashMap<&'static str, FieldRule<T>>,
}

impl<T> Schema<T> {
    /// Build a schema from `(exml name, rule)` pairs.
    pub fn new(rules: impl IntoIterator<Item = (&'static str, FieldRule<T>)>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// The rule for an exml field name.
    pub fn rule(&self, name: &str) -> Option<&FieldRule<T>> {
        self.rules.get(name)
    }

    /// Number of recognized field names.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the schema recognizes no fields.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Apply every recognized child of `node` to `target`.
    ///
    /// Unrecognized children are skipped. When a field appears more than once
    /// the last occurrence wins.
    pub fn apply(&self, node: &PropertyNode, strings: &StringTable, target: &mut T) {
        for child in &node.children {
            match self.rule(&child.name) {
                Some(rule) => rule.apply(child, strings, target),
                None => tracing::trace!("Skipping unknown field {:?}", child.name),
            }
        }
    }
}

impl<T: Default> Schema<T> {
    /// Build a fresh record from `node`.
    pub fn extract(&self, node: &PropertyNode, strings: &StringTable) -> T {
        let mut target = T::default();
        self.apply(node, strings, &mut target);
        target
    }

    /// Build one record per child of `node`.
    pub fn extract_each(&self, node: &PropertyNode, strings: &StringTable) -> Vec<T> {
        node.children
            .iter()
            .map(|child| self.extract(child, strings))
            .collect()
    }
}

impl<T> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.rules.iter()).finish()
    }
}

/// A base-building table object before it is attached to its item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildingObject {
    pub id: String,
    pub info: ItemBuildingInfo,
}

type ItemRule = FieldRule<Item>;
type CostRule = FieldRule<ItemCost>;
type ColorRule = FieldRule<ItemColor>;
type RequirementRule = FieldRule<ItemRequirement>;
type StatBonusRule = FieldRule<ItemStatBonus>;
type BuildingRule = FieldRule<BuildingObject>;

lazy_static::lazy_static! {
    /// Schema for product, substance and technology table entries.
    pub static ref ITEM_SCHEMA: Schema<Item> = Schema::new([
        // Identity
        ("ID", ItemRule::Scalar(|i| &mut i.id)),
        ("Id", ItemRule::Scalar(|i| &mut i.id)),
        // Display strings
        ("Name", ItemRule::Localized(KeySource::Scalar, |i| &mut i.name)),
        ("NameLower", ItemRule::Localized(KeySource::Scalar, |i| &mut i.name_lower)),
        ("Symbol", ItemRule::Localized(KeySource::Scalar, |i| &mut i.symbol)),
        ("Subtitle", ItemRule::Localized(KeySource::Indirect, |i| &mut i.subtitle)),
        ("Description", ItemRule::Localized(KeySource::Indirect, |i| &mut i.description)),
        ("Hint", ItemRule::Localized(KeySource::Scalar, |i| &mut i.hint)),
        // Flags
        ("Teach", ItemRule::Bool(|i| &mut i.teach)),
        ("Chargeable", ItemRule::Bool(|i| &mut i.chargeable)),
        ("BuildFullyCharged", ItemRule::Bool(|i| &mut i.build_fully_charged)),
        ("Upgrade", ItemRule::Bool(|i| &mut i.upgrade)),
        ("Core", ItemRule::Bool(|i| &mut i.core)),
        ("Consumable", ItemRule::Bool(|i| &mut i.consumable)),
        ("SpecificChargeOnly", ItemRule::Bool(|i| &mut i.specific_charge_only)),
        ("WikiEanabled", ItemRule::Bool(|i| &mut i.wiki_enabled)),
        ("IsCraftable", ItemRule::Bool(|i| &mut i.is_craftable)),
        // Numbers
        ("BaseValue", ItemRule::Float(|i| &mut i.base_value)),
        ("NormalisedValueOnWorld", ItemRule::Float(|i| &mut i.normalised_value_on_world)),
        ("NormalisedValueOffWorld", ItemRule::Float(|i| &mut i.normalised_value_off_world)),
        ("EconomyInfluenceMultiplier", ItemRule::Float(|i| &mut i.economy_influence_multiplier)),
        ("Level", ItemRule::Int(|i| &mut i.level)),
        ("ChargeAmount", ItemRule::Int(|i| &mut i.charge_amount)),
        ("Value", ItemRule::Int(|i| &mut i.value)),
        ("RequiredLevel", ItemRule::Int(|i| &mut i.required_level)),
        ("ChargeValue", ItemRule::Int(|i| &mut i.charge_value)),
        ("RequiredRank", ItemRule::Int(|i| &mut i.required_rank)),
        // Artwork
        ("Icon", ItemRule::IconPath(|i| &mut i.icon)),
        ("Colour", ItemRule::Color(|i| &mut i.color)),
        ("WorldColour", ItemRule::Color(|i| &mut i.world_color)),
        ("UpgradeColour", ItemRule::Color(|i| &mut i.upgrade_color)),
        ("LinkColour", ItemRule::Color(|i| &mut i.link_color)),
        // Enum-like references
        ("SubstanceCategory", ItemRule::Indirect(|i| &mut i.substance_category)),
        ("Category", ItemRule::Indirect(|i| &mut i.product_category)),
        ("TechnologyCategory", ItemRule::Indirect(|i| &mut i.technology_category)),
        ("TechnologyRarity", ItemRule::Indirect(|i| &mut i.technology_rarity)),
        ("BaseStat", ItemRule::Indirect(|i| &mut i.base_stat)),
        ("Rarity", ItemRule::Indirect(|i| &mut i.rarity)),
        ("Legality", ItemRule::Indirect(|i| &mut i.legality)),
        ("DispensingRace", ItemRule::Indirect(|i| &mut i.dispensing_race)),
        ("TechShopRarity", ItemRule::Indirect(|i| &mut i.tech_shop_rarity)),
        ("ChargeBy", ItemRule::IndirectList(|i| &mut i.charge_by)),
        // Plain ids
        ("RequiredTech", ItemRule::Scalar(|i| &mut i.required_tech)),
        ("RewardGroup", ItemRule::Scalar(|i| &mut i.reward_group)),
        // Composites
        ("StatBonuses", ItemRule::StatBonuses(|i| &mut i.stat_bonuses)),
        ("Requirements", ItemRule::Requirements(|i| &mut i.requirements)),
        ("Cost", ItemRule::Cost(|i| &mut i.cost)),
    ]);

    /// Schema for the `Cost` block.
    pub static ref COST_SCHEMA: Schema<ItemCost> = Schema::new([
        ("SpaceStationMarkup", CostRule::Float(|c| &mut c.space_station_markup)),
        ("LowPriceMod", CostRule::Float(|c| &mut c.low_price_mod)),
        ("HighPriceMod", CostRule::Float(|c| &mut c.high_price_mod)),
        ("BuyBaseMarkup", CostRule::Float(|c| &mut c.buy_base_markup)),
        ("BuyMarkupMod", CostRule::Float(|c| &mut c.buy_markup_mod)),
    ]);

    /// Schema for `Colour` style blocks.
    pub static ref COLOR_SCHEMA: Schema<ItemColor> = Schema::new([
        ("R", ColorRule::Float(|c| &mut c.r)),
        ("G", ColorRule::Float(|c| &mut c.g)),
        ("B", ColorRule::Float(|c| &mut c.b)),
        ("A", ColorRule::Float(|c| &mut c.a)),
    ]);

    /// Schema for one entry of a `Requirements` list.
    pub static ref REQUIREMENT_SCHEMA: Schema<ItemRequirement> = Schema::new([
        ("ID", RequirementRule::Scalar(|r| &mut r.id)),
        ("Amount", RequirementRule::Int(|r| &mut r.quantity)),
    ]);

    /// Schema for one entry of a `StatBonuses` list.
    pub static ref STAT_BONUS_SCHEMA: Schema<ItemStatBonus> = Schema::new([
        ("StatsTypes", StatBonusRule::Indirect(|b| &mut b.stat_type)),
        ("Bonus", StatBonusRule::Int(|b| &mut b.bonus)),
        ("Level", StatBonusRule::Int(|b| &mut b.level)),
    ]);

    /// Schema for entries of the base-building table's `Objects` list.
    pub static ref BUILDING_SCHEMA: Schema<BuildingObject> = Schema::new([
        ("ID", BuildingRule::Scalar(|o| &mut o.id)),
        ("BuildableOnBase", BuildingRule::Bool(|o| &mut o.info.buildable_on_base)),
        ("BuildableOnFreighter", BuildingRule::Bool(|o| &mut o.info.buildable_on_freighter)),
        ("BuildableOnPlanet", BuildingRule::Bool(|o| &mut o.info.buildable_on_planet)),
        ("ComplexityCost", BuildingRule::Int(|o| &mut o.info.complexity_cost)),
        ("Group", BuildingRule::Scalar(|o| &mut o.info.group)),
        ("CanChangeColour", BuildingRule::Bool(|o| &mut o.info.can_change_color)),
        ("CanChangeMaterial", BuildingRule::Bool(|o| &mut o.info.can_change_material)),
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color_block(name: &str, r: &str, g: &str, b: &str, a: &str) -> PropertyNode {
        PropertyNode::with_value(name, "Colour.xml")
            .child_node(PropertyNode::with_value("R", r))
            .child_node(PropertyNode::with_value("G", g))
            .child_node(PropertyNode::with_value("B", b))
            .child_node(PropertyNode::with_value("A", a))
    }

    #[test]
    fn test_item_schema_covers_every_field_name() {
        assert_eq!(ITEM_SCHEMA.len(), 47);
        assert_eq!(ITEM_SCHEMA.rule("Category").map(FieldRule::kind), Some("indirect"));
        assert_eq!(
            ITEM_SCHEMA.rule("Description").map(FieldRule::kind),
            Some("localized-indirect")
        );
        assert!(ITEM_SCHEMA.rule("TradingCategory").is_none());
    }

    #[test]
    fn test_color_rule() {
        let strings = StringTable::new();
        let color = COLOR_SCHEMA.extract(&color_block("Colour", "1.0", "0.0", "0.0", "1.0"), &strings);
        assert_eq!(color.to_hex(), "#ff0000");

        let mut item = Item::default();
        ITEM_SCHEMA.rule("WorldColour").unwrap().apply(
            &color_block("WorldColour", "0", "1", "0.2", "0.5"),
            &strings,
            &mut item,
        );
        assert_eq!(item.world_color, "#00ff33");
    }

    #[test]
    fn test_cost_ignores_unknown_fields() {
        let node = PropertyNode::with_value("Cost", "GcItemPriceModifiers.xml")
            .child_node(PropertyNode::with_value("SpaceStationMarkup", "0.1"))
            .child_node(PropertyNode::with_value("LowPriceMod", "-0.1"))
            .child_node(PropertyNode::with_value("HighPriceMod", "0.2"))
            .child_node(PropertyNode::with_value("BuyBaseMarkup", "0.25"))
            .child_node(PropertyNode::with_value("BuyMarkupMod", "2"))
            .child_node(PropertyNode::with_value("SellMarkupMod", "9"));

        let cost = COST_SCHEMA.extract(&node, &StringTable::new());
        assert_eq!(
            cost,
            ItemCost {
                space_station_markup: 0.1,
                low_price_mod: -0.1,
                high_price_mod: 0.2,
                buy_base_markup: 0.25,
                buy_markup_mod: 2.0,
            }
        );
    }

    #[test]
    fn test_requirement_list() {
        let node = PropertyNode::new("Requirements")
            .child_node(
                PropertyNode::with_value("", "GcTechnologyRequirement.xml")
                    .child_node(PropertyNode::with_value("ID", "FUEL1"))
                    .child_node(PropertyNode::with_value("Amount", "50")),
            )
            .child_node(
                PropertyNode::with_value("", "GcTechnologyRequirement.xml")
                    .child_node(PropertyNode::with_value("ID", "LAND1"))
                    .child_node(PropertyNode::with_value("Amount", "lots")),
            );

        let reqs = REQUIREMENT_SCHEMA.extract_each(&node, &StringTable::new());
        assert_eq!(
            reqs,
            vec![
                ItemRequirement { id: "FUEL1".to_string(), quantity: 50 },
                ItemRequirement { id: "LAND1".to_string(), quantity: 0 },
            ]
        );
    }

    #[test]
    fn test_stat_bonus_list() {
        let node = PropertyNode::new("StatBonuses").child_node(
            PropertyNode::with_value("", "GcStatsBonus.xml")
                .child_node(
                    PropertyNode::with_value("Stat", "GcStatsTypes.xml")
                        .child_node(PropertyNode::with_value("StatsType", "Suit_Armour_Health")),
                )
                .child_node(PropertyNode::with_value("Bonus", "20"))
                .child_node(PropertyNode::with_value("Level", "1")),
        );
        // "Stat" is not the recognized name; only StatsTypes is read
        let bonuses = STAT_BONUS_SCHEMA.extract_each(&node, &StringTable::new());
        assert_eq!(bonuses.len(), 1);
        assert_eq!(bonuses[0].stat_type, "");
        assert_eq!(bonuses[0].bonus, 20);
        assert_eq!(bonuses[0].level, 1);
    }

    #[test]
    fn test_localized_rule() {
        let strings: StringTable = [("S1", "Explosive")].into_iter().collect();
        let mut item = Item::default();

        let subtitle = PropertyNode::with_value("Subtitle", "VariableSizeString.xml")
            .child_node(PropertyNode::with_value("Value", "S1"));
        ITEM_SCHEMA.rule("Subtitle").unwrap().apply(&subtitle, &strings, &mut item);
        assert_eq!(item.subtitle, "Explosive");

        let name = PropertyNode::with_value("Name", "S9");
        ITEM_SCHEMA.rule("Name").unwrap().apply(&name, &strings, &mut item);
        assert_eq!(item.name, "");
    }
}
