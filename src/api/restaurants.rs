//! Restaurant Endpoints

use bearer_client::{ApiRequest, ClientError};

use super::ApiClient;
use crate::models::{Location, MenuItem, Restaurant};

/// Restaurants delivering to `near`, or all active ones.
pub async fn list_restaurants(
    api: &ApiClient,
    near: Option<Location>,
) -> Result<Vec<Restaurant>, ClientError> {
    let mut request = ApiRequest::get("/restaurants/");
    if let Some(loc) = near {
        request = request.query("lat", loc.latitude).query("lon", loc.longitude);
    }
    api.fetch(request).await
}

pub async fn get_restaurant(api: &ApiClient, id: u32) -> Result<Restaurant, ClientError> {
    api.fetch(ApiRequest::get(format!("/restaurants/{id}"))).await
}

pub async fn get_menu(api: &ApiClient, restaurant_id: u32) -> Result<Vec<MenuItem>, ClientError> {
    api.fetch(ApiRequest::get(format!("/restaurants/{restaurant_id}/menu")))
        .await
}
