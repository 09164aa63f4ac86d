//! Incoming Order Queue
//!
//! Pending orders waiting to be shown to restaurant staff, one at a time.
//! An order id is never held twice across the queue and the open alert.

use std::collections::{HashSet, VecDeque};

use crate::models::Order;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderQueue {
    queue: VecDeque<Order>,
    current: Option<Order>,
    modal_open: bool,
}

impl OrderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Order> {
        self.current.as_ref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// Orders queued behind the open alert.
    pub fn waiting(&self) -> usize {
        self.queue.len()
    }

    /// Enqueues unseen orders, oldest first, then tries to surface one.
    ///
    /// Returns the order that became current, if any.
    pub fn ingest(&mut self, orders: Vec<Order>) -> Option<Order> {
        let mut known: HashSet<u32> = self.queue.iter().map(|o| o.id).collect();
        if let Some(current) = &self.current {
            known.insert(current.id);
        }

        let fresh: Vec<Order> = orders.into_iter().filter(|o| known.insert(o.id)).collect();
        if fresh.is_empty() {
            return None;
        }

        self.queue.extend(fresh);
        // Stable: equal timestamps keep arrival order, unparseable ones go last
        self.queue
            .make_contiguous()
            .sort_by_key(|o| {
                let ts = o.created_at_ts();
                (ts.is_none(), ts)
            });

        self.advance().cloned()
    }

    /// Opens the alert for the oldest queued order unless one is showing.
    pub fn advance(&mut self) -> Option<&Order> {
        if self.modal_open {
            return None;
        }
        let next = self.queue.pop_front()?;
        self.current = Some(next);
        self.modal_open = true;
        self.current.as_ref()
    }

    /// Closes the alert. The caller runs [`settle`](Self::settle) after the
    /// settle delay.
    pub fn resolve(&mut self) -> Option<Order> {
        self.modal_open = false;
        self.current.take()
    }

    /// Follow-up to `resolve`: surfaces the next queued order, if any.
    ///
    /// Returns the order that became current so the chime plays once for it.
    pub fn settle(&mut self) -> Option<Order> {
        self.advance().cloned()
    }

    #[cfg(test)]
    fn ids(&self) -> Vec<u32> {
        self.current
            .iter()
            .chain(self.queue.iter())
            .map(|o| o.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderStatus;
    use rust_decimal::Decimal;

    fn make_order(id: u32, created_at: &str) -> Order {
        Order {
            id,
            user_id: 1,
            customer_details: None,
            restaurant_id: 3,
            restaurant_name: Some("Bab Touma Grill".into()),
            status: OrderStatus::Pending,
            total_price: Decimal::from(10),
            delivery_address: None,
            delivery_location: None,
            created_at: Some(created_at.to_string()),
            order_items: Vec::new(),
            payment: None,
            rating: None,
        }
    }

    fn has_no_duplicates(queue: &OrderQueue) -> bool {
        let ids = queue.ids();
        let unique: HashSet<_> = ids.iter().collect();
        unique.len() == ids.len()
    }

    #[test]
    fn test_ingest_surfaces_oldest() {
        let mut queue = OrderQueue::new();
        let shown = queue.ingest(vec![
            make_order(2, "2024-05-01T12:05:00"),
            make_order(1, "2024-05-01T12:00:00"),
        ]);

        assert_eq!(shown.map(|o| o.id), Some(1));
        assert!(queue.is_modal_open());
        assert_eq!(queue.waiting(), 1);
    }

    #[test]
    fn test_repeated_polls_never_duplicate() {
        let mut queue = OrderQueue::new();
        let batch = vec![
            make_order(1, "2024-05-01T12:00:00"),
            make_order(2, "2024-05-01T12:01:00"),
            make_order(2, "2024-05-01T12:01:00"),
        ];

        assert!(queue.ingest(batch.clone()).is_some());
        assert!(has_no_duplicates(&queue));
        assert!(queue.ingest(batch.clone()).is_none());
        assert!(queue.ingest(vec![make_order(3, "2024-05-01T12:02:00")]).is_none());
        assert!(has_no_duplicates(&queue));
        assert_eq!(queue.ids(), vec![1, 2, 3]);
    }

    #[test]
    fn test_advance_is_noop_while_open() {
        let mut queue = OrderQueue::new();
        queue.ingest(vec![
            make_order(1, "2024-05-01T12:00:00"),
            make_order(2, "2024-05-01T12:01:00"),
        ]);

        assert!(queue.advance().is_none());
        assert_eq!(queue.current().map(|o| o.id), Some(1));

        let closed = queue.resolve();
        assert_eq!(closed.map(|o| o.id), Some(1));
        assert!(!queue.is_modal_open());
        assert!(queue.current().is_none());

        assert_eq!(queue.advance().map(|o| o.id), Some(2));
        assert!(queue.advance().is_none());
    }

    #[test]
    fn test_equal_and_bad_timestamps() {
        let mut queue = OrderQueue::new();
        queue.ingest(vec![
            make_order(5, "garbage"),
            make_order(3, "2024-05-01T12:00:00"),
            make_order(4, "2024-05-01T12:00:00"),
            make_order(1, "2024-05-01T09:00:00+00:00"),
        ]);

        assert_eq!(queue.ids(), vec![1, 3, 4, 5]);
    }

    #[test]
    fn test_settle_surfaces_exactly_one() {
        let mut queue = OrderQueue::new();
        queue.ingest(vec![
            make_order(1, "2024-05-01T12:00:00"),
            make_order(2, "2024-05-01T12:01:00"),
            make_order(3, "2024-05-01T12:02:00"),
        ]);
        // Before the alert is handled nothing else surfaces
        assert!(queue.settle().is_none());

        queue.resolve();
        assert_eq!(queue.settle().map(|o| o.id), Some(2));
        assert_eq!(queue.current().map(|o| o.id), Some(2));
        assert!(queue.is_modal_open());
        assert_eq!(queue.waiting(), 1);
        // A second timer firing must not stack another order
        assert!(queue.settle().is_none());
        assert!(has_no_duplicates(&queue));

        queue.resolve();
        assert_eq!(queue.settle().map(|o| o.id), Some(3));
        queue.resolve();
        assert!(queue.settle().is_none());
        assert!(!queue.is_modal_open());
        assert!(queue.current().is_none());
    }

    #[test]
    fn test_current_not_requeued_after_resolve_and_poll() {
        let mut queue = OrderQueue::new();
        queue.ingest(vec![make_order(1, "2024-05-01T12:00:00")]);
        // Still pending on the server while the alert is open
        assert!(queue.ingest(vec![make_order(1, "2024-05-01T12:00:00")]).is_none());
        assert_eq!(queue.waiting(), 0);
    }
}
