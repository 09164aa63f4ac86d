//! Order Endpoints

use bearer_client::{ApiRequest, ClientError};
use serde::{Deserialize, Serialize};

use super::ApiClient;
use crate::cart::Cart;
use crate::models::{Location, Order, PaymentMethod, Rating, UserAddress};
use crate::validation::RatingForm;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutItem {
    pub menu_item_id: u32,
    pub quantity: u32,
    pub excluded_ingredients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body of `POST /orders`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutRequest {
    pub restaurant_id: u32,
    pub items: Vec<CheckoutItem>,
    pub delivery_address: String,
    pub delivery_location: Location,
    pub payment_method: PaymentMethod,
}

impl CheckoutRequest {
    /// `None` for an empty cart.
    pub fn from_cart(cart: &Cart, address: &UserAddress, payment_method: PaymentMethod) -> Option<Self> {
        let restaurant_id = cart.restaurant_id?;
        if cart.is_empty() {
            return None;
        }
        let items = cart
            .lines
            .iter()
            .map(|line| {
                let notes = line.customization.notes.trim();
                CheckoutItem {
                    menu_item_id: line.item.id,
                    quantity: line.quantity,
                    excluded_ingredients: line.customization.excluded_ingredients.clone(),
                    notes: (!notes.is_empty()).then(|| notes.to_string()),
                }
            })
            .collect();
        Some(Self {
            restaurant_id,
            items,
            delivery_address: address.delivery_text(),
            delivery_location: address.location,
            payment_method,
        })
    }
}

#[derive(Deserialize)]
struct OrderCreated {
    order: Order,
}

#[derive(Deserialize)]
struct RatingCreated {
    rating: Rating,
}

pub async fn create_order(api: &ApiClient, checkout: &CheckoutRequest) -> Result<Order, ClientError> {
    let created: OrderCreated = api.fetch(ApiRequest::post("/orders/").json(checkout)?).await?;
    Ok(created.order)
}

pub async fn list_orders(api: &ApiClient) -> Result<Vec<Order>, ClientError> {
    api.fetch(ApiRequest::get("/orders/")).await
}

pub async fn get_order(api: &ApiClient, id: u32) -> Result<Order, ClientError> {
    api.fetch(ApiRequest::get(format!("/orders/{id}"))).await
}

pub async fn rate_order(api: &ApiClient, id: u32, form: &RatingForm) -> Result<Rating, ClientError> {
    let created: RatingCreated = api
        .fetch(ApiRequest::post(format!("/orders/{id}/rate")).json(form)?)
        .await?;
    Ok(created.rating)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Customization;
    use crate::models::MenuItem;
    use rust_decimal::Decimal;

    fn item(id: u32) -> MenuItem {
        MenuItem {
            id,
            restaurant_id: 7,
            name: format!("item {id}"),
            description: None,
            price: Decimal::new(1500, 2),
            is_available: true,
            images: vec![],
            removable_ingredients: vec!["onion".into()],
        }
    }

    fn address() -> UserAddress {
        UserAddress {
            id: 1,
            user_id: Some(3),
            name: "Home".into(),
            address_line: Some("Mezzeh, building 4".into()),
            location: Location { latitude: 33.5, longitude: 36.25 },
            is_default: true,
        }
    }

    #[test]
    fn test_checkout_from_cart() {
        let mut cart = Cart::default();
        cart.add_item(
            item(1),
            7,
            Customization {
                excluded_ingredients: vec!["onion".into()],
                notes: "  ".into(),
            },
        )
        .unwrap();
        cart.add_item(
            item(2),
            7,
            Customization {
                excluded_ingredients: vec![],
                notes: "extra sauce".into(),
            },
        )
        .unwrap();

        let checkout = CheckoutRequest::from_cart(&cart, &address(), PaymentMethod::CashOnDelivery).unwrap();
        assert_eq!(checkout.restaurant_id, 7);
        assert_eq!(checkout.items.len(), 2);
        assert_eq!(checkout.items[0].notes, None);
        assert_eq!(checkout.items[1].notes.as_deref(), Some("extra sauce"));

        let body = serde_json::to_value(&checkout).unwrap();
        assert_eq!(body["payment_method"], "cash_on_delivery");
        assert_eq!(body["delivery_location"]["latitude"], 33.5);
    }

    #[test]
    fn test_checkout_empty_cart() {
        assert!(CheckoutRequest::from_cart(&Cart::default(), &address(), PaymentMethod::DigitalPayment).is_none());
    }
}
