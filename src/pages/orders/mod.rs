//! Customer order history and order detail.

mod detail;
mod list;

pub use detail::OrderDetailPage;
pub use list::OrdersPage;
