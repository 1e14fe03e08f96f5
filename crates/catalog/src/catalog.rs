use serde::{Deserialize, Serialize};

use rasoi_core::{DomainError, DomainResult};

/// A menu item. Identity is the `code`; two items with the same code are the
/// same catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    code: String,
    name: String,
    price: f64,
}

impl Item {
    /// Build a validated item: non-empty code and name, non-negative price.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        price: f64,
    ) -> DomainResult<Self> {
        let code = code.into();
        let name = name.into();
        if code.trim().is_empty() {
            return Err(DomainError::validation("item code must not be empty"));
        }
        if name.trim().is_empty() {
            return Err(DomainError::validation("item name must not be empty"));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(DomainError::validation(format!(
                "item price must be a non-negative amount, got {price}"
            )));
        }
        Ok(Self { code, name, price })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

/// Catalog of menu items.
///
/// Owns all `Item` values exclusively. Codes are unique; insertion order is
/// preserved for listing. The backing store grows dynamically, so adding
/// items never overruns a fixed buffer.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog seeded with the default menu.
    pub fn with_defaults() -> Self {
        let defaults = [
            ("BRY01", "Biryani", 180.00),
            ("DSA02", "Dosa", 60.00),
            ("PNE03", "Paneer Butter Masala", 200.00),
            ("CHT04", "Chai", 20.00),
            ("SAM05", "Samosa", 15.00),
            ("IDY06", "Idly", 40.00),
            ("VDA07", "Vada Pav", 30.00),
            ("THL08", "Thali", 250.00),
            ("PRA09", "Paratha", 70.00),
            ("GLB10", "Gulab Jamun", 50.00),
        ];
        let items = defaults
            .into_iter()
            .map(|(code, name, price)| Item {
                code: code.to_string(),
                name: name.to_string(),
                price,
            })
            .collect();
        Self { items }
    }

    /// Linear scan by code.
    pub fn find_by_code(&self, code: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.code == code)
    }

    /// Append an item, rejecting duplicate codes. The catalog is unchanged
    /// on failure.
    pub fn add(&mut self, item: Item) -> DomainResult<()> {
        if self.find_by_code(&item.code).is_some() {
            return Err(DomainError::duplicate_code(item.code));
        }
        self.items.push(item);
        Ok(())
    }

    /// Replace name and price in place, preserving code and position.
    pub fn update(
        &mut self,
        code: &str,
        name: impl Into<String>,
        price: f64,
    ) -> DomainResult<()> {
        let updated = Item::new(code, name, price)?;
        let slot = self
            .items
            .iter_mut()
            .find(|item| item.code == code)
            .ok_or_else(|| DomainError::not_found(code))?;
        *slot = updated;
        Ok(())
    }

    /// Remove the entry with `code`, preserving the relative order of the
    /// remaining entries. Returns the removed item.
    pub fn delete(&mut self, code: &str) -> DomainResult<Item> {
        let pos = self
            .items
            .iter()
            .position(|item| item.code == code)
            .ok_or_else(|| DomainError::not_found(code))?;
        Ok(self.items.remove(pos))
    }

    /// All items, in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_item(code: &str, price: f64) -> Item {
        Item::new(code, format!("{code} name"), price).unwrap()
    }

    #[test]
    fn defaults_seed_ten_items_in_menu_order() {
        let catalog = Catalog::with_defaults();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.items()[0].code(), "BRY01");
        assert_eq!(catalog.items()[9].code(), "GLB10");

        let biryani = catalog.find_by_code("BRY01").unwrap();
        assert_eq!(biryani.name(), "Biryani");
        assert_eq!(biryani.price(), 180.00);
    }

    #[test]
    fn add_then_find_round_trips() {
        let mut catalog = Catalog::new();
        let item = test_item("KFP11", 120.0);
        catalog.add(item.clone()).unwrap();
        assert_eq!(catalog.find_by_code("KFP11"), Some(&item));
    }

    #[test]
    fn add_rejects_duplicate_code_and_leaves_catalog_unchanged() {
        let mut catalog = Catalog::with_defaults();
        let before = catalog.items().to_vec();

        let err = catalog.add(test_item("BRY01", 999.0)).unwrap_err();
        assert_eq!(err, DomainError::DuplicateCode("BRY01".to_string()));
        assert_eq!(catalog.items(), before.as_slice());
    }

    #[test]
    fn update_replaces_name_and_price_in_place() {
        let mut catalog = Catalog::with_defaults();
        catalog.update("CHT04", "Masala Chai", 25.0).unwrap();

        let chai = catalog.find_by_code("CHT04").unwrap();
        assert_eq!(chai.name(), "Masala Chai");
        assert_eq!(chai.price(), 25.0);
        // Position is preserved.
        assert_eq!(catalog.items()[3].code(), "CHT04");
    }

    #[test]
    fn update_unknown_code_fails() {
        let mut catalog = Catalog::with_defaults();
        let err = catalog.update("NOPE", "Nothing", 1.0).unwrap_err();
        assert_eq!(err, DomainError::NotFound("NOPE".to_string()));
    }

    #[test]
    fn delete_removes_exactly_one_and_preserves_relative_order() {
        let mut catalog = Catalog::with_defaults();
        let removed = catalog.delete("PNE03").unwrap();
        assert_eq!(removed.code(), "PNE03");
        assert_eq!(catalog.len(), 9);

        let codes: Vec<&str> = catalog.items().iter().map(Item::code).collect();
        assert_eq!(
            codes,
            vec![
                "BRY01", "DSA02", "CHT04", "SAM05", "IDY06", "VDA07", "THL08",
                "PRA09", "GLB10"
            ]
        );
    }

    #[test]
    fn repeated_delete_of_same_code_fails() {
        let mut catalog = Catalog::with_defaults();
        catalog.delete("SAM05").unwrap();
        let err = catalog.delete("SAM05").unwrap_err();
        assert_eq!(err, DomainError::NotFound("SAM05".to_string()));
    }

    #[test]
    fn item_validation_rejects_bad_input() {
        assert!(Item::new("", "Chai", 20.0).is_err());
        assert!(Item::new("CHT04", "  ", 20.0).is_err());
        assert!(Item::new("CHT04", "Chai", -1.0).is_err());
        assert!(Item::new("CHT04", "Chai", f64::NAN).is_err());
    }
}
