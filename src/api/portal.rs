//! Restaurant Portal Endpoints
//!
//! Incoming orders, menu management, settings, team and statistics for the
//! restaurant the signed-in staff member belongs to.

use bearer_client::{ApiRequest, ClientError, Multipart};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::users::Upload;
use super::{Ack, ApiClient};
use crate::models::{Location, Order, OrderStatus, Restaurant, RestaurantStats, User};
use crate::validation::MenuItemForm;

// ========================
// Orders
// ========================

pub async fn portal_orders(api: &ApiClient) -> Result<Vec<Order>, ClientError> {
    api.fetch(ApiRequest::get("/portal/orders")).await
}

pub async fn update_order_status(
    api: &ApiClient,
    order_id: u32,
    status: OrderStatus,
) -> Result<(), ClientError> {
    let request = ApiRequest::put(format!("/portal/orders/{order_id}/status"))
        .json(&json!({ "status": status.as_str() }))?;
    api.execute(request).await
}

// ========================
// Menu
// ========================

/// Menu item form plus image changes, encoded as multipart.
#[derive(Debug, Clone)]
pub struct MenuItemUpload {
    pub form: MenuItemForm,
    pub new_images: Vec<Upload>,
    /// URLs of existing images to drop.
    pub delete_images: Vec<String>,
}

impl MenuItemUpload {
    pub fn to_multipart(&self) -> Multipart {
        let form = &self.form;
        let price = form
            .parsed_price()
            .map(|p| p.to_string())
            .unwrap_or_else(|| form.price.trim().to_string());
        let mut multipart = Multipart::new()
            .text("name", form.name.trim())
            .text("description", form.description.trim())
            .text("price", price)
            .text("is_available", form.is_available.to_string())
            .text("removable_ingredients", form.ingredient_list().join(","));
        for image in &self.new_images {
            multipart = multipart.file(
                "images",
                image.file_name.clone(),
                image.mime.clone(),
                image.bytes.clone(),
            );
        }
        for url in &self.delete_images {
            multipart = multipart.text("delete_images", url.clone());
        }
        multipart
    }
}

pub async fn create_menu_item(api: &ApiClient, upload: &MenuItemUpload) -> Result<Ack, ClientError> {
    api.fetch(ApiRequest::post("/portal/menu").multipart(upload.to_multipart()))
        .await
}

pub async fn update_menu_item(
    api: &ApiClient,
    item_id: u32,
    upload: &MenuItemUpload,
) -> Result<Ack, ClientError> {
    let request = ApiRequest::put(format!("/portal/menu/{item_id}")).multipart(upload.to_multipart());
    api.fetch(request).await
}

pub async fn delete_menu_item(api: &ApiClient, item_id: u32) -> Result<(), ClientError> {
    api.execute(ApiRequest::delete(format!("/portal/menu/{item_id}"))).await
}

// ========================
// Settings
// ========================

#[derive(Debug, Clone, Serialize)]
pub struct SettingsArgs {
    pub name: String,
    pub description: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Polygon vertices; the server closes the ring.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_area: Option<Vec<Location>>,
}

#[derive(Deserialize)]
struct SettingsSaved {
    restaurant: Restaurant,
}

pub async fn update_settings(api: &ApiClient, args: &SettingsArgs) -> Result<Restaurant, ClientError> {
    let saved: SettingsSaved = api.fetch(ApiRequest::put("/portal/settings").json(args)?).await?;
    Ok(saved.restaurant)
}

// ========================
// Team
// ========================

pub async fn team_members(api: &ApiClient) -> Result<Vec<User>, ClientError> {
    api.fetch(ApiRequest::get("/portal/team")).await
}

pub async fn remove_team_member(api: &ApiClient, user_id: u32) -> Result<(), ClientError> {
    api.execute(ApiRequest::delete(format!("/portal/team/{user_id}"))).await
}

/// Makes `user_id` an admin of the manager's restaurant.
pub async fn add_team_member(api: &ApiClient, restaurant_id: u32, user_id: u32) -> Result<Ack, ClientError> {
    let request = ApiRequest::post(format!("/admin/restaurants/{restaurant_id}/add_admin"))
        .json(&json!({ "user_id": user_id }))?;
    api.fetch(request).await
}

// ========================
// Statistics
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsPeriod {
    Daily,
    Weekly,
    Monthly,
    Custom { start: NaiveDate, end: NaiveDate },
}

impl StatsPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatsPeriod::Daily => "daily",
            StatsPeriod::Weekly => "weekly",
            StatsPeriod::Monthly => "monthly",
            StatsPeriod::Custom { .. } => "custom",
        }
    }

    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("period", self.as_str().to_string())];
        if let StatsPeriod::Custom { start, end } = self {
            params.push(("start_date", start.format("%Y-%m-%d").to_string()));
            params.push(("end_date", end.format("%Y-%m-%d").to_string()));
        }
        params
    }
}

pub async fn statistics(api: &ApiClient, period: StatsPeriod) -> Result<RestaurantStats, ClientError> {
    let request = period
        .to_params()
        .into_iter()
        .fold(ApiRequest::get("/portal/statistics"), |req, (k, v)| req.query(k, v));
    api.fetch(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use bearer_client::PartValue;

    #[test]
    fn test_custom_period_params() {
        let period = StatsPeriod::Custom {
            start: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        };
        assert_eq!(
            period.to_params(),
            vec![
                ("period", "custom".to_string()),
                ("start_date", "2024-03-01".to_string()),
                ("end_date", "2024-03-31".to_string()),
            ]
        );
        assert_eq!(StatsPeriod::Weekly.to_params(), vec![("period", "weekly".to_string())]);
    }

    #[test]
    fn test_menu_upload_multipart() {
        let upload = MenuItemUpload {
            form: MenuItemForm {
                name: "Shawarma".into(),
                description: "Chicken wrap".into(),
                price: "12.50".into(),
                is_available: false,
                removable_ingredients: "garlic, pickles ,".into(),
            },
            new_images: vec![Upload {
                file_name: "wrap.jpg".into(),
                mime: None,
                bytes: vec![1, 2, 3],
            }],
            delete_images: vec!["http://localhost:5000/static/uploads/old.jpg".into()],
        };
        let form = upload.to_multipart();
        let text = |name: &str| {
            form.parts().iter().find(|p| p.name == name).map(|p| p.value.clone())
        };
        assert_eq!(text("price"), Some(PartValue::Text("12.50".into())));
        assert_eq!(text("is_available"), Some(PartValue::Text("false".into())));
        assert_eq!(
            text("removable_ingredients"),
            Some(PartValue::Text("garlic,pickles".into()))
        );
        assert!(form.parts().iter().any(|p| p.name == "images"));
        assert!(form.parts().iter().any(|p| p.name == "delete_images"));
    }
}
