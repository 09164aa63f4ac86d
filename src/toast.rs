//! Transient notifications.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast success",
            ToastKind::Error => "toast error",
            ToastKind::Info => "toast info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, newest last. Older ones are dropped past `MAX_VISIBLE`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toasts {
    next_id: u32,
    items: Vec<Toast>,
}

const MAX_VISIBLE: usize = 4;

impl Toasts {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u32 {
        self.next_id += 1;
        self.items.push(Toast {
            id: self.next_id,
            kind,
            message: message.into(),
        });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        self.next_id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut toasts = Toasts::default();
        let a = toasts.push(ToastKind::Success, "Saved");
        let b = toasts.push(ToastKind::Error, "Failed");
        assert_ne!(a, b);
        toasts.dismiss(a);
        assert_eq!(toasts.items().len(), 1);
        assert_eq!(toasts.items()[0].message, "Failed");
    }

    #[test]
    fn test_oldest_dropped_when_full() {
        let mut toasts = Toasts::default();
        for i in 0..6 {
            toasts.push(ToastKind::Info, format!("n{i}"));
        }
        let messages: Vec<_> = toasts.items().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["n2", "n3", "n4", "n5"]);
    }
}
