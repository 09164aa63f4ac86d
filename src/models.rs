//! Frontend Models
//!
//! Data structures matching backend entities.

use chrono::{DateTime, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Point on the map, as the backend serializes it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Customer,
    RestaurantAdmin,
    RestaurantManager,
    Manager,
    Admin,
    #[serde(other)]
    Other,
}

impl Role {
    pub const PORTAL: &'static [Role] = &[Role::RestaurantManager, Role::RestaurantAdmin];
    pub const ADMIN: &'static [Role] = &[Role::Manager, Role::Admin];

    /// Roles an admin may assign from the users screen.
    pub const ASSIGNABLE: &'static [Role] = &[
        Role::Customer,
        Role::RestaurantAdmin,
        Role::RestaurantManager,
        Role::Manager,
        Role::Admin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::RestaurantAdmin => "restaurant_admin",
            Role::RestaurantManager => "restaurant_manager",
            Role::Manager => "manager",
            Role::Admin => "admin",
            Role::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Customer => "Customer",
            Role::RestaurantAdmin => "Restaurant admin",
            Role::RestaurantManager => "Restaurant manager",
            Role::Manager => "Manager",
            Role::Admin => "Admin",
            Role::Other => "Unknown",
        }
    }

    pub fn parse(raw: &str) -> Option<Role> {
        Self::ASSIGNABLE.iter().copied().find(|r| r.as_str() == raw)
    }

    pub fn is_portal(&self) -> bool {
        Self::PORTAL.contains(self)
    }

    pub fn is_admin(&self) -> bool {
        Self::ADMIN.contains(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    pub role: Role,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_banned: bool,
    #[serde(default)]
    pub oauth_provider: Option<String>,
    #[serde(default)]
    pub phone_number_verified: bool,
    #[serde(default)]
    pub associated_restaurant_id: Option<u32>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| self.email.clone())
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestaurantStatus {
    Active,
    Suspended,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub address: String,
    pub status: RestaurantStatus,
    #[serde(default)]
    pub location: Option<Location>,
    /// GeoJSON polygon.
    #[serde(default)]
    pub delivery_area: Option<serde_json::Value>,
    #[serde(default)]
    pub manager_id: Option<u32>,
    #[serde(default)]
    pub menu_items: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub restaurant_id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub removable_ingredients: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
    Cancelled,
    #[serde(other)]
    Other,
}

impl OrderStatus {
    /// Statuses staff can move an order to.
    pub const ALL: &'static [OrderStatus] = &[
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out_for_delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Other => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::OutForDelivery => "Out for delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Other => "Unknown",
        }
    }

    pub fn parse(raw: &str) -> Option<OrderStatus> {
        Self::ALL.iter().copied().find(|s| s.as_str() == raw)
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "status pending",
            OrderStatus::Preparing => "status preparing",
            OrderStatus::OutForDelivery => "status delivering",
            OrderStatus::Delivered => "status delivered",
            OrderStatus::Cancelled => "status cancelled",
            OrderStatus::Other => "status",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: u32,
    pub menu_item_id: u32,
    #[serde(default)]
    pub name: Option<String>,
    pub quantity: u32,
    pub price_at_order: Decimal,
    #[serde(default)]
    pub excluded_ingredients: Option<Vec<String>>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub menu_item_image_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CashOnDelivery,
    DigitalPayment,
    #[serde(other)]
    Other,
}

impl PaymentMethod {
    pub const CHOICES: &'static [PaymentMethod] =
        &[PaymentMethod::CashOnDelivery, PaymentMethod::DigitalPayment];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "cash_on_delivery",
            PaymentMethod::DigitalPayment => "digital_payment",
            PaymentMethod::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "Cash on delivery",
            PaymentMethod::DigitalPayment => "Digital payment",
            PaymentMethod::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: u32,
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    pub status: String,
    #[serde(default)]
    pub transaction_id: Option<String>,
}

impl Payment {
    pub fn status_label(&self) -> &str {
        match self.status.as_str() {
            "pending" => "Awaiting payment",
            "completed" | "paid" => "Paid",
            "failed" => "Failed",
            "refunded" => "Refunded",
            other => other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub id: u32,
    pub restaurant_rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub user_id: u32,
    #[serde(default)]
    pub customer_details: Option<CustomerDetails>,
    pub restaurant_id: u32,
    #[serde(default)]
    pub restaurant_name: Option<String>,
    pub status: OrderStatus,
    pub total_price: Decimal,
    #[serde(default)]
    pub delivery_address: Option<String>,
    #[serde(default)]
    pub delivery_location: Option<Location>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
    #[serde(default)]
    pub payment: Option<Payment>,
    #[serde(default)]
    pub rating: Option<Rating>,
}

impl Order {
    /// Creation time; `None` when absent or unparseable.
    pub fn created_at_ts(&self) -> Option<NaiveDateTime> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }

    pub fn can_be_rated(&self) -> bool {
        self.status == OrderStatus::Delivered && self.rating.is_none()
    }
}

/// Parses naive ISO-8601 (`2024-05-01T12:30:00.123456`) or RFC 3339.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_utc()))
}

/// Price with two decimals and the currency suffix.
pub fn format_price(amount: Decimal) -> String {
    format!("{:.2} SYP", amount)
}

/// Short human form of a server timestamp.
pub fn format_timestamp(raw: Option<&str>) -> String {
    match raw.and_then(parse_timestamp) {
        Some(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
        None => raw.unwrap_or("-").to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAddress {
    pub id: u32,
    #[serde(default)]
    pub user_id: Option<u32>,
    pub name: String,
    #[serde(default)]
    pub address_line: Option<String>,
    pub location: Location,
    #[serde(default)]
    pub is_default: bool,
}

impl UserAddress {
    /// Text sent as the order's delivery address.
    pub fn delivery_text(&self) -> String {
        match self.address_line.as_deref().map(str::trim) {
            Some(line) if !line.is_empty() => format!("{} - {}", self.name, line),
            _ => self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantApplication {
    pub id: u32,
    pub user_id: u32,
    #[serde(default)]
    pub user_name: Option<String>,
    pub restaurant_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: String,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    pub location_lat: f64,
    pub location_lon: f64,
    #[serde(default)]
    pub delivery_area_geojson: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesPoint {
    pub date: String,
    pub sales: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodInfo {
    pub period: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantStats {
    pub total_sales: f64,
    pub total_orders: u32,
    pub average_order_value: f64,
    #[serde(default)]
    pub sales_over_time: Vec<SalesPoint>,
    pub period_info: PeriodInfo,
}

/// One page of a paginated admin listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: u32,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_pages: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_enum_values_fall_back() {
        let user: User = serde_json::from_str(
            r#"{"id":1,"email":"a@b.c","phone_number":"0999","role":"courier","phone_number_verified":true}"#,
        )
        .unwrap();
        assert_eq!(user.role, Role::Other);

        let status: OrderStatus = serde_json::from_str(r#""refunded""#).unwrap();
        assert_eq!(status, OrderStatus::Other);
    }

    #[test]
    fn test_prices_decode_from_strings() {
        let item: MenuItem = serde_json::from_str(
            r#"{"id":3,"restaurant_id":1,"name":"Shawarma","price":"12.50","is_available":true}"#,
        )
        .unwrap();
        assert_eq!(item.price, Decimal::new(1250, 2));
        assert!(item.removable_ingredients.is_empty());
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert!(parse_timestamp("2024-05-01T12:30:00.123456").is_some());
        assert!(parse_timestamp("2024-05-01T12:30:00").is_some());
        assert!(parse_timestamp("2024-05-01T12:30:00+03:00").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn test_role_sets() {
        assert!(Role::RestaurantAdmin.is_portal());
        assert!(!Role::Customer.is_portal());
        assert!(Role::Manager.is_admin());
        assert_eq!(Role::parse("restaurant_manager"), Some(Role::RestaurantManager));
        assert_eq!(Role::parse("other"), None);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Decimal::new(2500, 1)), "250.00 SYP");
        assert_eq!(format_price(Decimal::new(1999, 2)), "19.99 SYP");
    }
}
