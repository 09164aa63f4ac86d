//! Account screens: profile, password, address book and the restaurant
//! partner application.

mod addresses;
mod apply_restaurant;
mod change_password;
mod profile;

pub use addresses::AddressesPage;
pub use apply_restaurant::ApplyRestaurantPage;
pub use change_password::ChangePasswordPage;
pub use profile::ProfilePage;
