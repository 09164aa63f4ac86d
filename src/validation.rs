//! Form Validation
//!
//! Client-side checks run before submission. Each form returns its problems
//! keyed by field name so the page can show them next to the inputs.

use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::User;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn require(&mut self, field: &'static str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.add(field, message);
        }
    }

    fn min_len(&mut self, field: &'static str, value: &str, min: usize, message: &str) {
        if value.chars().count() < min {
            self.add(field, message);
        }
    }

    fn email(&mut self, field: &'static str, value: &str) {
        if !is_valid_email(value) {
            self.add(field, "Enter a valid e-mail address");
        }
    }

    fn phone(&mut self, field: &'static str, value: &str) {
        let digits = value.chars().filter(char::is_ascii_digit).count();
        if value.trim().chars().count() < 10 || digits < 9 {
            self.add(field, "Enter a valid phone number");
        }
    }

    fn matches(&mut self, field: &'static str, a: &str, b: &str) {
        if a != b {
            self.add(field, "Passwords do not match");
        }
    }
}

pub trait Validate {
    fn validate(&self) -> FieldErrors;
}

/// Structural e-mail check: `local@domain.tld`, no whitespace.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

// ========================
// Auth forms
// ========================

#[derive(Debug, Clone, Default, Serialize)]
pub struct LoginForm {
    pub identifier: String,
    pub password: String,
}

impl Validate for LoginForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("identifier", &self.identifier, "E-mail or phone number is required");
        errors.min_len("password", &self.password, 6, "Password must be at least 6 characters");
        errors
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    #[serde(skip)]
    pub confirm_password: String,
}

impl Validate for RegisterForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, "Name is required");
        errors.email("email", &self.email);
        errors.phone("phone_number", &self.phone_number);
        errors.min_len("password", &self.password, 8, "Password must be at least 8 characters");
        errors.matches("confirm_password", &self.password, &self.confirm_password);
        errors
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl Validate for ForgotPasswordForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.email("email", &self.email);
        errors
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct VerifyEmailForm {
    pub email: String,
    pub code: String,
}

impl Validate for VerifyEmailForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.email("email", &self.email);
        errors.require("code", &self.code, "Verification code is required");
        errors
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ResetPasswordForm {
    pub email: String,
    pub code: String,
    pub new_password: String,
    #[serde(skip)]
    pub confirm_password: String,
}

impl Validate for ResetPasswordForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.email("email", &self.email);
        errors.require("code", &self.code, "Reset code is required");
        errors.min_len("new_password", &self.new_password, 8, "Password must be at least 8 characters");
        errors.matches("confirm_password", &self.new_password, &self.confirm_password);
        errors
    }
}

pub const OTP_LEN: usize = 6;

#[derive(Debug, Clone, Default)]
pub struct OtpForm {
    pub otp: String,
}

impl Validate for OtpForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.otp.chars().count() != OTP_LEN {
            errors.add("otp", "The code has 6 digits");
        } else if !self.otp.chars().all(|c| c.is_ascii_digit()) {
            errors.add("otp", "The code may only contain digits");
        }
        errors
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ChangePasswordForm {
    pub old_password: String,
    pub new_password: String,
    #[serde(skip)]
    pub confirm_password: String,
}

impl Validate for ChangePasswordForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("old_password", &self.old_password, "Current password is required");
        errors.min_len("new_password", &self.new_password, 8, "Password must be at least 8 characters");
        errors.matches("confirm_password", &self.new_password, &self.confirm_password);
        errors
    }
}

// ========================
// Profile
// ========================

#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone().unwrap_or_default(),
            email: user.email.clone(),
            phone_number: user.phone_number.clone(),
        }
    }

    /// Only the fields that differ from the stored profile.
    pub fn changes(&self, user: &User) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if self.name.trim() != user.name.as_deref().unwrap_or_default() {
            out.push(("name", self.name.trim().to_string()));
        }
        // OAuth accounts cannot change their e-mail
        if user.oauth_provider.is_none() && self.email.trim() != user.email {
            out.push(("email", self.email.trim().to_string()));
        }
        if self.phone_number.trim() != user.phone_number {
            out.push(("phone_number", self.phone_number.trim().to_string()));
        }
        out
    }
}

impl Validate for ProfileForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, "Name is required");
        errors.email("email", &self.email);
        errors.phone("phone_number", &self.phone_number);
        errors
    }
}

// ========================
// Addresses / applications / ratings
// ========================

#[derive(Debug, Clone, Default)]
pub struct AddressForm {
    pub name: String,
    pub address_line: String,
}

impl Validate for AddressForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, "Give the address a name (Home, Work...)");
        errors
    }
}

#[derive(Debug, Clone, Default)]
pub struct ApplyRestaurantForm {
    pub restaurant_name: String,
    pub description: String,
    pub address: String,
}

impl Validate for ApplyRestaurantForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("restaurant_name", &self.restaurant_name, "Restaurant name is required");
        errors.min_len(
            "description",
            self.description.trim(),
            10,
            "Description must be at least 10 characters",
        );
        errors.require("address", &self.address, "Address is required");
        errors
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RatingForm {
    pub restaurant_rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Validate for RatingForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if !(1..=5).contains(&self.restaurant_rating) {
            errors.add("restaurant_rating", "Pick a rating from 1 to 5");
        }
        errors
    }
}

// ========================
// Portal forms
// ========================

#[derive(Debug, Clone)]
pub struct MenuItemForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub is_available: bool,
    /// Comma-separated.
    pub removable_ingredients: String,
}

impl Default for MenuItemForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            is_available: true,
            removable_ingredients: String::new(),
        }
    }
}

impl MenuItemForm {
    pub fn parsed_price(&self) -> Option<Decimal> {
        Decimal::from_str(self.price.trim()).ok()
    }

    pub fn ingredient_list(&self) -> Vec<String> {
        self.removable_ingredients
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Validate for MenuItemForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, "Item name is required");
        match self.parsed_price() {
            Some(price) if price >= Decimal::ZERO => {}
            _ => errors.add("price", "Price must be a positive number"),
        }
        errors
    }
}

#[derive(Debug, Clone, Default)]
pub struct SettingsForm {
    pub name: String,
    pub description: String,
    pub address: String,
}

impl Validate for SettingsForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("name", &self.name, "Restaurant name is required");
        errors.require("address", &self.address, "Address is required");
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("rama@example.com"));
        assert!(is_valid_email(" a.b@mail.co.uk "));
        assert!(!is_valid_email("rama@localhost"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ra ma@example.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn test_register_form() {
        let mut form = RegisterForm {
            name: "Rama".into(),
            email: "rama@example.com".into(),
            phone_number: "0933123456".into(),
            password: "secret123".into(),
            confirm_password: "secret123".into(),
        };
        assert!(form.validate().is_empty());

        form.confirm_password = "secret124".into();
        form.phone_number = "09".into();
        let errors = form.validate();
        assert!(errors.get("confirm_password").is_some());
        assert!(errors.get("phone_number").is_some());
        assert!(errors.get("email").is_none());

        let body = serde_json::to_value(&form).unwrap();
        assert!(body.get("confirm_password").is_none());
    }

    #[test]
    fn test_otp_form() {
        assert!(OtpForm { otp: "123456".into() }.validate().is_empty());
        assert!(OtpForm { otp: "12345".into() }.validate().get("otp").is_some());
        assert_eq!(
            OtpForm { otp: "12a456".into() }.validate().get("otp"),
            Some("The code may only contain digits")
        );
    }

    #[test]
    fn test_menu_item_form() {
        let form = MenuItemForm {
            name: "Fatteh".into(),
            price: "12.5".into(),
            removable_ingredients: " pine nuts, ,garlic ".into(),
            ..Default::default()
        };
        assert!(form.validate().is_empty());
        assert_eq!(form.ingredient_list(), vec!["pine nuts", "garlic"]);

        let form = MenuItemForm {
            name: "Fatteh".into(),
            price: "-1".into(),
            ..Default::default()
        };
        assert!(form.validate().get("price").is_some());
    }

    #[test]
    fn test_profile_changes_only_diff() {
        let user = User {
            id: 1,
            phone_number: "0933123456".into(),
            email: "rama@example.com".into(),
            name: Some("Rama".into()),
            profile_image_url: None,
            role: Role::Customer,
            is_active: true,
            is_banned: false,
            oauth_provider: None,
            phone_number_verified: true,
            associated_restaurant_id: None,
            created_at: None,
        };
        let mut form = ProfileForm::from_user(&user);
        assert!(form.changes(&user).is_empty());

        form.phone_number = "0944000000".into();
        assert_eq!(form.changes(&user), vec![("phone_number", "0944000000".to_string())]);

        let oauth = User { oauth_provider: Some("github".into()), ..user.clone() };
        form.email = "new@example.com".into();
        assert!(form.changes(&oauth).iter().all(|(field, _)| *field != "email"));
        assert!(form.changes(&user).iter().any(|(field, _)| *field == "email"));
    }

    #[test]
    fn test_rating_bounds() {
        assert!(RatingForm { restaurant_rating: 0, comment: None }.validate().get("restaurant_rating").is_some());
        assert!(RatingForm { restaurant_rating: 5, comment: None }.validate().is_empty());
    }
}
