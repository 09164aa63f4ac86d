//! Address Book
//!
//! Saved addresses plus the one currently used for search and checkout.

use crate::models::UserAddress;

#[derive(Debug, Clone, PartialEq)]
pub struct AddressBook {
    pub addresses: Vec<UserAddress>,
    pub selected: Option<UserAddress>,
    pub is_loading: bool,
}

impl Default for AddressBook {
    fn default() -> Self {
        Self {
            addresses: Vec::new(),
            selected: None,
            is_loading: true,
        }
    }
}

impl AddressBook {
    /// Replaces the list, keeping the selection in step with it.
    pub fn set_addresses(&mut self, addresses: Vec<UserAddress>) {
        if let Some(selected) = &self.selected {
            self.selected = addresses.iter().find(|a| a.id == selected.id).cloned();
        }
        self.addresses = addresses;
    }

    /// Selection after the default-address lookup: the server default, or
    /// the first saved address when no default exists.
    pub fn apply_default(&mut self, default: Option<UserAddress>, all: Option<Vec<UserAddress>>) {
        self.selected = default.or_else(|| all.and_then(|list| list.into_iter().next()));
        self.is_loading = false;
    }

    /// Optimistically selects `id`; returns the address when it is known.
    pub fn select(&mut self, id: u32) -> Option<UserAddress> {
        let address = self.addresses.iter().find(|a| a.id == id).cloned()?;
        self.selected = Some(address.clone());
        Some(address)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;

    fn make_address(id: u32, is_default: bool) -> UserAddress {
        UserAddress {
            id,
            user_id: Some(1),
            name: format!("Address {id}"),
            address_line: None,
            location: Location { latitude: 33.5, longitude: 36.3 },
            is_default,
        }
    }

    #[test]
    fn test_default_falls_back_to_first() {
        let mut book = AddressBook::default();
        book.apply_default(None, Some(vec![make_address(4, false), make_address(5, false)]));
        assert_eq!(book.selected.map(|a| a.id), Some(4));
        assert!(!book.is_loading);

        let mut book = AddressBook::default();
        book.apply_default(Some(make_address(9, true)), None);
        assert_eq!(book.selected.map(|a| a.id), Some(9));

        let mut book = AddressBook::default();
        book.apply_default(None, Some(Vec::new()));
        assert!(book.selected.is_none());
    }

    #[test]
    fn test_select_unknown_is_noop() {
        let mut book = AddressBook::default();
        book.set_addresses(vec![make_address(1, true), make_address(2, false)]);
        assert!(book.select(3).is_none());
        assert!(book.selected.is_none());
        assert_eq!(book.select(2).map(|a| a.id), Some(2));
        assert_eq!(book.selected.as_ref().map(|a| a.id), Some(2));
    }

    #[test]
    fn test_deleted_selection_is_dropped() {
        let mut book = AddressBook::default();
        book.set_addresses(vec![make_address(1, true), make_address(2, false)]);
        book.select(2);
        book.set_addresses(vec![make_address(1, true)]);
        assert!(book.selected.is_none());
    }
}
