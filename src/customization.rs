//! Item Customization Model
//!
//! Spice level, portion size and paid extras for one menu item, plus the
//! detail-view state machine that owns the selection.

use std::collections::BTreeSet;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::MenuItem;

/// Surcharge for a large portion (3.00)
pub const LARGE_SURCHARGE: Decimal = Decimal::from_parts(300, 0, 0, false, 2);

/// Optional paid add-on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extra {
    pub id: &'static str,
    pub name: &'static str,
    pub price: Decimal,
}

/// Client-known extras catalog
pub const AVAILABLE_EXTRAS: &[Extra] = &[
    Extra {
        id: "parmesan",
        name: "Extra Parmesan",
        price: Decimal::from_parts(200, 0, 0, false, 2),
    },
    Extra {
        id: "avocado",
        name: "Avocado",
        price: Decimal::from_parts(300, 0, 0, false, 2),
    },
    Extra {
        id: "croutons",
        name: "Extra Croutons",
        price: Decimal::from_parts(100, 0, 0, false, 2),
    },
];

/// Spice level options (level, label)
pub const SPICE_LEVELS: &[(u8, &str)] = &[
    (0, "Low"),
    (1, "Med"),
    (2, "Hot"),
    (3, "Extra Hot"),
];

/// Heat level, always within 0..=3
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct SpiceLevel(u8);

impl SpiceLevel {
    pub const MAX: u8 = 3;

    /// Out-of-range API values are capped rather than rejected
    pub fn clamped(level: u8) -> Self {
        Self(level.min(Self::MAX))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    #[default]
    Regular,
    Large,
}

impl Size {
    pub const ALL: [Size; 2] = [Size::Regular, Size::Large];

    pub fn label(self) -> &'static str {
        match self {
            Size::Regular => "Regular",
            Size::Large => "Large",
        }
    }

    pub fn surcharge(self) -> Decimal {
        match self {
            Size::Regular => Decimal::ZERO,
            Size::Large => LARGE_SURCHARGE,
        }
    }
}

pub fn find_extra<'a>(catalog: &'a [Extra], id: &str) -> Option<&'a Extra> {
    catalog.iter().find(|extra| extra.id == id)
}

/// User-chosen modifiers for one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomizationSelection {
    pub item_id: String,
    pub spice_level: SpiceLevel,
    pub size: Size,
    pub extras: BTreeSet<String>,
}

impl CustomizationSelection {
    /// Defaults for `item`: its own spice level, regular size, no extras
    pub fn for_item(item: &MenuItem) -> Self {
        Self {
            item_id: item.id.clone(),
            spice_level: SpiceLevel::clamped(item.spicy_level),
            size: Size::Regular,
            extras: BTreeSet::new(),
        }
    }

    pub fn set_spice_level(&mut self, level: SpiceLevel) {
        self.spice_level = level;
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Add the extra if absent, remove it if present. Unknown ids are ignored.
    pub fn toggle_extra(&mut self, extra_id: &str) -> bool {
        if find_extra(AVAILABLE_EXTRAS, extra_id).is_none() {
            tracing::warn!("[ITEM] Ignoring unknown extra {:?}", extra_id);
            return false;
        }
        if !self.extras.remove(extra_id) {
            self.extras.insert(extra_id.to_string());
        }
        true
    }

    pub fn has_extra(&self, extra_id: &str) -> bool {
        self.extras.contains(extra_id)
    }

    /// Line total against an explicit catalog; ids not in it add nothing
    pub fn total_with(&self, base_price: Decimal, catalog: &[Extra]) -> Decimal {
        let extras: Decimal = self
            .extras
            .iter()
            .filter_map(|id| find_extra(catalog, id))
            .map(|extra| extra.price)
            .sum();
        base_price + self.size.surcharge() + extras
    }

    pub fn total(&self, base_price: Decimal) -> Decimal {
        self.total_with(base_price, AVAILABLE_EXTRAS)
    }
}

/// Two-decimal display string, e.g. `18.00`. Half cents round up.
pub fn format_price(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// Price with currency sign, e.g. `$12.99`
pub fn price_label(amount: Decimal) -> String {
    format!("${}", format_price(amount))
}

/// Detail modal: closed, or open on a fixed item snapshot with its selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailView {
    #[default]
    Closed,
    Open {
        item: MenuItem,
        selection: CustomizationSelection,
    },
}

impl DetailView {
    /// Open (or switch to) `item`; the selection always starts fresh
    pub fn open(&mut self, item: MenuItem) {
        let selection = CustomizationSelection::for_item(&item);
        *self = DetailView::Open { item, selection };
    }

    /// Close and discard the selection
    pub fn close(&mut self) {
        *self = DetailView::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DetailView::Open { .. })
    }

    pub fn item(&self) -> Option<&MenuItem> {
        match self {
            DetailView::Open { item, .. } => Some(item),
            DetailView::Closed => None,
        }
    }

    pub fn selection(&self) -> Option<&CustomizationSelection> {
        match self {
            DetailView::Open { selection, .. } => Some(selection),
            DetailView::Closed => None,
        }
    }

    /// Edit the selection; no-op while closed
    pub fn update_selection(&mut self, f: impl FnOnce(&mut CustomizationSelection)) {
        if let DetailView::Open { selection, .. } = self {
            f(selection);
        }
    }

    /// Formatted total for the open item
    pub fn total_label(&self) -> Option<String> {
        match self {
            DetailView::Open { item, selection } => Some(format_price(selection.total(item.price))),
            DetailView::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str, price: Decimal, spicy_level: u8) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            description: String::new(),
            price,
            category: "mains".to_string(),
            image: String::new(),
            dietary: vec![],
            popular: false,
            spicy_level,
            preparation_time: 12,
        }
    }

    #[test]
    fn test_defaults_come_from_item() {
        let item = make_item("1", Decimal::new(1000, 2), 2);
        let selection = CustomizationSelection::for_item(&item);
        assert_eq!(selection.item_id, "1");
        assert_eq!(selection.spice_level.get(), 2);
        assert_eq!(selection.size, Size::Regular);
        assert!(selection.extras.is_empty());
    }

    #[test]
    fn test_out_of_range_spice_is_clamped() {
        let item = make_item("1", Decimal::ONE, 9);
        assert_eq!(CustomizationSelection::for_item(&item).spice_level.get(), 3);
    }

    #[test]
    fn test_large_with_two_extras_totals_eighteen() {
        let item = make_item("1", Decimal::new(1000, 2), 0);
        let mut selection = CustomizationSelection::for_item(&item);
        selection.set_size(Size::Large);
        selection.toggle_extra("parmesan");
        selection.toggle_extra("avocado");
        assert_eq!(format_price(selection.total(item.price)), "18.00");
    }

    #[test]
    fn test_toggle_twice_restores_set() {
        let item = make_item("1", Decimal::new(800, 2), 0);
        let mut selection = CustomizationSelection::for_item(&item);
        selection.toggle_extra("croutons");
        let before = selection.extras.clone();

        assert!(selection.toggle_extra("avocado"));
        assert!(selection.toggle_extra("avocado"));
        assert_eq!(selection.extras, before);
    }

    #[test]
    fn test_unknown_extra_rejected_and_priced_at_zero() {
        let item = make_item("1", Decimal::new(500, 2), 0);
        let mut selection = CustomizationSelection::for_item(&item);
        assert!(!selection.toggle_extra("truffle"));
        assert!(selection.extras.is_empty());

        // An id missing from the catalog contributes nothing
        selection.toggle_extra("parmesan");
        selection.toggle_extra("avocado");
        let partial_catalog = &AVAILABLE_EXTRAS[..1];
        assert_eq!(selection.total_with(item.price, partial_catalog), Decimal::new(700, 2));
    }

    #[test]
    fn test_total_is_monotone_in_extras_and_size() {
        let item = make_item("1", Decimal::new(1250, 2), 1);
        let mut selection = CustomizationSelection::for_item(&item);
        let mut last = selection.total(item.price);
        for extra in AVAILABLE_EXTRAS {
            selection.toggle_extra(extra.id);
            let next = selection.total(item.price);
            assert!(next >= last);
            last = next;
        }
        selection.set_size(Size::Large);
        assert!(selection.total(item.price) >= last);
    }

    #[test]
    fn test_format_price_rounds_to_cents() {
        assert_eq!(format_price(Decimal::new(10, 0)), "10.00");
        assert_eq!(format_price(Decimal::new(12999, 3)), "13.00");
    }

    #[test]
    fn test_price_label_has_currency_sign() {
        assert_eq!(price_label(Decimal::new(1299, 2)), "$12.99");
        assert_eq!(price_label(Decimal::new(8, 0)), "$8.00");
    }

    #[test]
    fn test_format_price_half_cent_rounds_up() {
        assert_eq!(format_price(Decimal::new(10125, 3)), "10.13");
        assert_eq!(format_price(Decimal::new(10135, 3)), "10.14");
    }

    #[test]
    fn test_switching_items_resets_selection() {
        let a = make_item("a", Decimal::new(900, 2), 3);
        let b = make_item("b", Decimal::new(700, 2), 1);
        let mut view = DetailView::default();

        view.open(a);
        view.update_selection(|s| {
            s.set_size(Size::Large);
            s.set_spice_level(SpiceLevel::clamped(0));
            s.toggle_extra("parmesan");
        });

        view.open(b.clone());
        assert_eq!(view.selection(), Some(&CustomizationSelection::for_item(&b)));
        assert_eq!(view.total_label().as_deref(), Some("7.00"));
    }

    #[test]
    fn test_close_discards_selection() {
        let a = make_item("a", Decimal::new(900, 2), 0);
        let mut view = DetailView::default();
        view.open(a.clone());
        view.update_selection(|s| {
            s.toggle_extra("avocado");
        });
        view.close();
        assert!(!view.is_open());
        assert_eq!(view.selection(), None);

        view.update_selection(|s| s.set_size(Size::Large));
        assert_eq!(view, DetailView::Closed);

        view.open(a.clone());
        assert_eq!(view.selection(), Some(&CustomizationSelection::for_item(&a)));
    }
}
