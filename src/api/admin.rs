//! Site Administration Endpoints

use bearer_client::{ApiRequest, ClientError};
use serde_json::json;

use super::{fetch_page, Ack, ApiClient};
use crate::models::{Page, Restaurant, RestaurantApplication, Role, User};
use crate::pagination::ListQuery;

fn with_params(mut request: ApiRequest, params: Vec<(String, String)>) -> ApiRequest {
    request.query.extend(params);
    request
}

// ========================
// Users
// ========================

/// Users page; the list filter is a role.
pub async fn admin_users(api: &ApiClient, query: &ListQuery) -> Result<Page<User>, ClientError> {
    let request = with_params(ApiRequest::get("/admin/users"), query.to_params("role"));
    fetch_page(api, request, "users").await
}

/// Users whose e-mail or phone contains `q`.
pub async fn search_users(api: &ApiClient, q: &str) -> Result<Vec<User>, ClientError> {
    api.fetch(ApiRequest::get("/admin/users/search").query("q", q.trim()))
        .await
}

pub async fn change_role(api: &ApiClient, user_id: u32, role: Role) -> Result<Ack, ClientError> {
    let request = ApiRequest::put(format!("/admin/users/{user_id}/role"))
        .json(&json!({ "new_role": role.as_str() }))?;
    api.fetch(request).await
}

pub async fn set_banned(api: &ApiClient, user_id: u32, banned: bool) -> Result<Ack, ClientError> {
    let action = if banned { "ban" } else { "unban" };
    api.fetch(ApiRequest::post(format!("/admin/users/{user_id}/{action}")))
        .await
}

// ========================
// Restaurants
// ========================

/// The server matches the search term against restaurant names.
fn restaurant_params(query: &ListQuery) -> Vec<(String, String)> {
    query
        .to_params("status")
        .into_iter()
        .map(|(k, v)| if k == "search" { ("name".to_string(), v) } else { (k, v) })
        .collect()
}

pub async fn admin_restaurants(api: &ApiClient, query: &ListQuery) -> Result<Page<Restaurant>, ClientError> {
    let request = with_params(ApiRequest::get("/admin/restaurants"), restaurant_params(query));
    fetch_page(api, request, "restaurants").await
}

pub async fn suspend_restaurant(api: &ApiClient, id: u32) -> Result<Ack, ClientError> {
    api.fetch(ApiRequest::delete(format!("/admin/restaurants/{id}"))).await
}

pub async fn unsuspend_restaurant(api: &ApiClient, id: u32) -> Result<Ack, ClientError> {
    api.fetch(ApiRequest::post(format!("/admin/restaurants/{id}/unsuspend")))
        .await
}

pub async fn force_delete_restaurant(api: &ApiClient, id: u32) -> Result<Ack, ClientError> {
    api.fetch(ApiRequest::post(format!("/admin/restaurants/{id}/force-delete")))
        .await
}

// ========================
// Applications
// ========================

pub async fn applications(
    api: &ApiClient,
    query: &ListQuery,
) -> Result<Page<RestaurantApplication>, ClientError> {
    let request = with_params(
        ApiRequest::get("/admin/restaurant_applications"),
        query.to_params("status"),
    );
    fetch_page(api, request, "applications").await
}

pub async fn review_application(api: &ApiClient, id: u32, approve: bool) -> Result<Ack, ClientError> {
    let action = if approve { "approve" } else { "reject" };
    api.fetch(ApiRequest::put(format!("/admin/restaurant_applications/{id}/{action}")))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restaurant_search_sent_as_name() {
        let mut query = ListQuery::new(10);
        query.set_search("falafel");
        query.set_filter("suspended");
        let params = restaurant_params(&query);
        assert!(params.contains(&("name".to_string(), "falafel".to_string())));
        assert!(params.contains(&("status".to_string(), "suspended".to_string())));
        assert!(!params.iter().any(|(k, _)| k == "search"));
    }
}
