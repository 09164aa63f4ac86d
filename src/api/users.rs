//! User Endpoints
//!
//! Profile, addresses and the restaurant application.

use bearer_client::{ApiRequest, ClientError, Multipart};
use serde::{Deserialize, Serialize};

use super::{Ack, ApiClient};
use crate::models::{Location, User, UserAddress};

// ========================
// Argument Structs
// ========================

/// File picked in the browser, already read into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub file_name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddressArgs {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line: Option<String>,
    pub location: Location,
}

#[derive(Debug, Clone)]
pub struct ApplicationArgs {
    pub restaurant_name: String,
    pub description: String,
    pub address: String,
    pub location: Location,
    /// GeoJSON polygon.
    pub delivery_area: Option<serde_json::Value>,
    pub logo: Option<Upload>,
}

impl ApplicationArgs {
    pub fn to_multipart(&self) -> Multipart {
        let mut form = Multipart::new()
            .text("restaurant_name", self.restaurant_name.trim())
            .text("description", self.description.trim())
            .text("address", self.address.trim())
            .text("location_lat", self.location.latitude.to_string())
            .text("location_lon", self.location.longitude.to_string());
        if let Some(area) = &self.delivery_area {
            form = form.text("delivery_area_geojson", area.to_string());
        }
        if let Some(logo) = &self.logo {
            form = form.file("logo", logo.file_name.clone(), logo.mime.clone(), logo.bytes.clone());
        }
        form
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReVerification {
    #[serde(default)]
    pub email: bool,
    #[serde(default)]
    pub phone: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub re_verification_needed: ReVerification,
    pub user: User,
}

#[derive(Deserialize)]
struct UserEnvelope {
    user: User,
}

// ========================
// Profile
// ========================

pub async fn get_me(api: &ApiClient) -> Result<User, ClientError> {
    let envelope: UserEnvelope = api.fetch(ApiRequest::get("/users/me")).await?;
    Ok(envelope.user)
}

/// Sends changed profile fields and/or a new avatar.
pub async fn update_me(
    api: &ApiClient,
    fields: &[(&'static str, String)],
    avatar: Option<&Upload>,
) -> Result<ProfileUpdate, ClientError> {
    let mut form = Multipart::new();
    for (name, value) in fields {
        form = form.text(name, value.clone());
    }
    if let Some(file) = avatar {
        form = form.file("profile_image", file.file_name.clone(), file.mime.clone(), file.bytes.clone());
    }
    api.fetch(ApiRequest::put("/users/me").multipart(form)).await
}

pub async fn change_password(
    api: &ApiClient,
    old_password: &str,
    new_password: &str,
) -> Result<ProfileUpdate, ClientError> {
    let form = Multipart::new()
        .text("old_password", old_password)
        .text("new_password", new_password);
    api.fetch(ApiRequest::put("/users/me").multipart(form)).await
}

// ========================
// Addresses
// ========================

pub async fn list_addresses(api: &ApiClient) -> Result<Vec<UserAddress>, ClientError> {
    api.fetch(ApiRequest::get("/users/me/addresses")).await
}

/// `None` when the user has no default address.
pub async fn default_address(api: &ApiClient) -> Result<Option<UserAddress>, ClientError> {
    match api.fetch(ApiRequest::get("/users/me/addresses/default")).await {
        Ok(address) => Ok(Some(address)),
        Err(e) if e.status() == Some(404) => Ok(None),
        Err(e) => Err(e),
    }
}

pub async fn create_address(api: &ApiClient, args: &AddressArgs) -> Result<Ack, ClientError> {
    api.fetch(ApiRequest::post("/users/me/addresses").json(args)?).await
}

pub async fn update_address(api: &ApiClient, id: u32, args: &AddressArgs) -> Result<Ack, ClientError> {
    api.fetch(ApiRequest::put(format!("/users/me/addresses/{id}")).json(args)?)
        .await
}

pub async fn delete_address(api: &ApiClient, id: u32) -> Result<(), ClientError> {
    api.execute(ApiRequest::delete(format!("/users/me/addresses/{id}"))).await
}

pub async fn set_default_address(api: &ApiClient, id: u32) -> Result<(), ClientError> {
    api.execute(ApiRequest::post(format!("/users/me/addresses/{id}/set-default")))
        .await
}

// ========================
// Restaurant application
// ========================

pub async fn apply_restaurant(api: &ApiClient, args: &ApplicationArgs) -> Result<Ack, ClientError> {
    let request = ApiRequest::post("/users/apply_restaurant_manager").multipart(args.to_multipart());
    api.fetch(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use bearer_client::PartValue;

    #[test]
    fn test_application_multipart_fields() {
        let args = ApplicationArgs {
            restaurant_name: " Naranj ".into(),
            description: "Levantine kitchen".into(),
            address: "Bab Sharqi".into(),
            location: Location { latitude: 33.51, longitude: 36.31 },
            delivery_area: None,
            logo: Some(Upload {
                file_name: "logo.png".into(),
                mime: Some("image/png".into()),
                bytes: vec![0x89, 0x50],
            }),
        };
        let form = args.to_multipart();
        let names: Vec<_> = form.parts().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            ["restaurant_name", "description", "address", "location_lat", "location_lon", "logo"]
        );
        assert_eq!(form.parts()[0].value, PartValue::Text("Naranj".into()));
    }
}
