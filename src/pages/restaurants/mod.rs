//! Restaurant browsing: the list for the selected address and a single
//! restaurant's menu with the cart beside it.

mod detail;
mod list;

pub use detail::RestaurantDetailPage;
pub use list::RestaurantsPage;
