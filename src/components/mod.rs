//! UI Components
//!
//! Reusable Leptos components.

mod address_bar;
mod app_layout;
mod cart_panel;
mod confirm_modal;
mod delete_confirm_button;
mod field;
mod file_picker;
mod image_slider;
mod item_customization;
mod location_picker;
mod menu_item_card;
mod modal;
mod navbar;
mod new_order_modal;
mod order_card;
mod pager;
mod protected;
mod restaurant_card;
mod sales_chart;
mod social_logins;
mod toast_host;

pub use address_bar::{reload_addresses, select_address, AddressBar};
pub use app_layout::AppLayout;
pub use cart_panel::CartPanel;
pub use confirm_modal::ConfirmModal;
pub use delete_confirm_button::DeleteConfirmButton;
pub use field::{field_error, Field, TextArea};
pub use file_picker::{data_url, FilePicker};
pub use image_slider::ImageSlider;
pub use item_customization::ItemCustomization;
pub use location_picker::LocationPicker;
pub use menu_item_card::MenuItemCard;
pub use modal::Modal;
pub use navbar::Navbar;
pub use new_order_modal::NewOrderModal;
pub use order_card::OrderCard;
pub use pager::Pager;
pub use protected::Protected;
pub use restaurant_card::RestaurantCard;
pub use sales_chart::SalesChart;
pub use social_logins::SocialLogins;
pub use toast_host::ToastHost;
