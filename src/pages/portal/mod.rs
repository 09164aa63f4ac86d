//! Restaurant Portal
//!
//! Screens for restaurant staff: live orders, menu, settings, team and
//! statistics of the restaurant the signed-in user belongs to.

mod dashboard;
mod menu;
mod orders;
mod settings;
mod statistics;
mod team;

pub use dashboard::PortalDashboardPage;
pub use menu::ManageMenuPage;
pub use orders::PortalOrdersPage;
pub use settings::RestaurantSettingsPage;
pub use statistics::StatisticsPage;
pub use team::TeamPage;

use leptos::prelude::*;

use crate::store::{AppStateStoreFields, AppStore};

/// Restaurant the signed-in staff member works for.
fn staff_restaurant_id(store: AppStore) -> Option<u32> {
    store
        .session()
        .with_untracked(|s| s.user.as_ref().and_then(|u| u.associated_restaurant_id))
}
