//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use bearer_client::{TokenPair, TokenStore};

use crate::address_book::AddressBook;
use crate::cart::Cart;
use crate::models::User;
use crate::order_queue::OrderQueue;
use crate::persist::{self, KeyValue};
use crate::session::Session;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Tokens and signed-in user (persisted)
    pub session: Session,
    /// Shopping cart (persisted)
    pub cart: Cart,
    /// Saved addresses and the selected one
    pub addresses: AddressBook,
    /// Pending orders waiting for the staff alert
    pub order_queue: OrderQueue,
    /// E-mail handed from login/register to the verification screen
    pub email_for_verification: Option<String>,
}

impl AppState {
    /// Initial state with the persisted slices restored.
    pub fn restore(storage: &impl KeyValue) -> Self {
        Self {
            session: persist::load(storage, persist::AUTH_KEY).unwrap_or_default(),
            cart: persist::load(storage, persist::CART_KEY).unwrap_or_default(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_login(store: &AppStore, tokens: TokenPair, user: User) {
    store.session().write().login(tokens, user);
}

/// Local sign-out: session, addresses and pending alerts are dropped.
pub fn store_logout(store: &AppStore) {
    store.session().write().logout();
    store.addresses().write().clear();
    *store.order_queue().write() = OrderQueue::new();
}

pub fn store_update_user(store: &AppStore, user: User) {
    store.session().write().update_user(user);
}

// ========================
// Token bridge for the HTTP client
// ========================

/// Lets the HTTP client read and rotate tokens held in the store.
pub struct StoreTokens {
    store: AppStore,
}

impl StoreTokens {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }
}

impl TokenStore for StoreTokens {
    fn access_token(&self) -> Option<String> {
        self.store.session().with_untracked(|s| s.access_token.clone())
    }

    fn refresh_token(&self) -> Option<String> {
        self.store.session().with_untracked(|s| s.refresh_token.clone())
    }

    fn store_tokens(&self, tokens: TokenPair) {
        self.store.session().write().set_tokens(tokens);
    }

    fn expire(&self) {
        log::warn!("[AUTH] session expired, signing out");
        store_logout(&self.store);
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(crate::guard::LOGIN_PATH);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Customization;
    use crate::models::MenuItem;
    use crate::persist::{save, MemoryStorage, AUTH_KEY, CART_KEY};
    use rust_decimal::Decimal;

    #[test]
    fn test_restore_persisted_slices() {
        let storage = MemoryStorage::default();
        let mut cart = Cart::default();
        cart.add_item(
            MenuItem {
                id: 1,
                restaurant_id: 2,
                name: "Kibbeh".into(),
                description: None,
                price: Decimal::from(5),
                is_available: true,
                images: Vec::new(),
                removable_ingredients: Vec::new(),
            },
            2,
            Customization::default(),
        )
        .unwrap();
        let session = Session {
            access_token: Some("a".into()),
            refresh_token: Some("r".into()),
            user: None,
            is_authenticated: false,
        };
        save(&storage, CART_KEY, &cart);
        save(&storage, AUTH_KEY, &session);

        let state = AppState::restore(&storage);
        assert_eq!(state.cart, cart);
        assert_eq!(state.session, session);
        assert!(state.email_for_verification.is_none());
    }

    #[test]
    fn test_restore_without_storage() {
        let state = AppState::restore(&MemoryStorage::default());
        assert_eq!(state.session, Session::default());
        assert!(state.cart.is_empty());
    }
}
