//! Shopping Cart
//!
//! One restaurant per cart. Identical customizations of the same menu item
//! share a line; everything else gets its own line with a fresh id.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::MenuItem;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("the cart already holds items from another restaurant")]
    DifferentRestaurant { bound: u32, requested: u32 },
}

/// Choices made in the customization dialog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customization {
    pub excluded_ingredients: Vec<String>,
    pub notes: String,
}

impl Customization {
    fn same_as(&self, other: &Customization) -> bool {
        self.notes == other.notes && sorted(&self.excluded_ingredients) == sorted(&other.excluded_ingredients)
    }
}

fn sorted(items: &[String]) -> Vec<&str> {
    let mut out: Vec<&str> = items.iter().map(String::as_str).collect();
    out.sort_unstable();
    out
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub line_id: Uuid,
    pub item: MenuItem,
    pub quantity: u32,
    pub customization: Customization,
}

impl CartLine {
    pub fn subtotal(&self) -> Decimal {
        self.item.price * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub lines: Vec<CartLine>,
    pub restaurant_id: Option<u32>,
}

impl Cart {
    /// Adds one unit, merging into an identical line when there is one.
    pub fn add_item(
        &mut self,
        item: MenuItem,
        restaurant_id: u32,
        customization: Customization,
    ) -> Result<Uuid, CartError> {
        if let Some(bound) = self.restaurant_id {
            if bound != restaurant_id && !self.lines.is_empty() {
                return Err(CartError::DifferentRestaurant {
                    bound,
                    requested: restaurant_id,
                });
            }
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.item.id == item.id && l.customization.same_as(&customization))
        {
            line.quantity += 1;
            return Ok(line.line_id);
        }

        let line_id = Uuid::new_v4();
        self.lines.push(CartLine {
            line_id,
            item,
            quantity: 1,
            customization,
        });
        self.restaurant_id = Some(restaurant_id);
        Ok(line_id)
    }

    pub fn remove_item(&mut self, line_id: Uuid) {
        self.lines.retain(|l| l.line_id != line_id);
        if self.lines.is_empty() {
            self.restaurant_id = None;
        }
    }

    /// Sets a line's quantity; zero or below removes it.
    pub fn update_quantity(&mut self, line_id: Uuid, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(line_id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.lines.iter_mut().find(|l| l.line_id == line_id) {
            line.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.restaurant_id = None;
    }

    pub fn total_price(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, restaurant_id: u32, price: i64) -> MenuItem {
        MenuItem {
            id,
            restaurant_id,
            name: format!("Item {id}"),
            description: None,
            price: Decimal::from(price),
            is_available: true,
            images: Vec::new(),
            removable_ingredients: vec!["onion".into(), "garlic".into()],
        }
    }

    fn excluding(items: &[&str], notes: &str) -> Customization {
        Customization {
            excluded_ingredients: items.iter().map(|s| s.to_string()).collect(),
            notes: notes.to_string(),
        }
    }

    #[test]
    fn test_rejects_second_restaurant() {
        let mut cart = Cart::default();
        cart.add_item(make_item(1, 10, 100), 10, Customization::default()).unwrap();
        let before = cart.clone();

        let err = cart
            .add_item(make_item(2, 20, 50), 20, Customization::default())
            .unwrap_err();

        assert_eq!(err, CartError::DifferentRestaurant { bound: 10, requested: 20 });
        assert_eq!(cart, before);
    }

    #[test]
    fn test_identical_customization_merges() {
        let mut cart = Cart::default();
        let a = cart.add_item(make_item(1, 10, 100), 10, excluding(&["onion", "garlic"], "")).unwrap();
        let b = cart.add_item(make_item(1, 10, 100), 10, excluding(&["garlic", "onion"], "")).unwrap();
        let c = cart.add_item(make_item(1, 10, 100), 10, excluding(&["garlic"], "")).unwrap();
        let d = cart.add_item(make_item(1, 10, 100), 10, excluding(&["garlic"], "extra hot")).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(c, d);
        assert_eq!(cart.lines.len(), 3);
        assert_eq!(cart.lines[0].quantity, 2);
    }

    #[test]
    fn test_totals_and_removal() {
        let mut cart = Cart::default();
        let first = cart.add_item(make_item(1, 10, 100), 10, Customization::default()).unwrap();
        cart.add_item(make_item(1, 10, 100), 10, Customization::default()).unwrap();
        let second = cart.add_item(make_item(2, 10, 50), 10, Customization::default()).unwrap();

        assert_eq!(cart.total_price(), Decimal::from(250));
        assert_eq!(cart.total_items(), 3);

        cart.update_quantity(first, 0);
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.total_price(), Decimal::from(50));
        assert_eq!(cart.restaurant_id, Some(10));

        cart.remove_item(second);
        assert!(cart.is_empty());
        assert_eq!(cart.restaurant_id, None);
    }

    #[test]
    fn test_new_restaurant_after_emptying() {
        let mut cart = Cart::default();
        let line = cart.add_item(make_item(1, 10, 100), 10, Customization::default()).unwrap();
        cart.update_quantity(line, -1);
        assert!(cart.add_item(make_item(2, 20, 30), 20, Customization::default()).is_ok());
        assert_eq!(cart.restaurant_id, Some(20));
    }

    #[test]
    fn test_decimal_prices_sum_exactly() {
        let mut cart = Cart::default();
        let mut item = make_item(1, 10, 0);
        item.price = Decimal::new(10, 2);
        let line = cart.add_item(item, 10, Customization::default()).unwrap();
        cart.update_quantity(line, 3);
        assert_eq!(cart.total_price(), Decimal::new(30, 2));
    }
}
