//! Toast notifications.
//!
//! Every failed action goes through [`report_error`]: it is logged with
//! `tracing` and shown as an error toast. Successful mutations get a short
//! success toast.

use std::time::Duration;

use dioxus::prelude::*;
use records::SourceError;

use crate::Icon;
use crate::icons::FaXmark;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Notifications {
    entries: Vec<Notice>,
    next_id: u64,
}

impl Notifications {
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.entries.push(Notice {
            id: self.next_id,
            level,
            message: message.into(),
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|n| n.id != id);
    }

    pub fn entries(&self) -> &[Notice] {
        &self.entries
    }
}

pub fn use_notifications() -> Signal<Notifications> {
    use_context::<Signal<Notifications>>()
}

pub fn notify(notices: &mut Signal<Notifications>, level: NoticeLevel, message: impl Into<String>) {
    notices.write().push(level, message);
}

/// Log a failed action and show it to the user.
pub fn report_error(notices: &mut Signal<Notifications>, action: &str, err: &SourceError) {
    tracing::error!(error = %err, "{action}");
    notify(notices, NoticeLevel::Error, format!("{action}: {err}"));
}

/// Provides the notification context and renders the toast stack.
#[component]
pub fn NotificationProvider(
    /// Seconds before a toast disappears; 0 keeps it until closed.
    #[props(default = 5)]
    dismiss_after_secs: u32,
    children: Element,
) -> Element {
    use_context_provider(|| Signal::new(Notifications::default()));

    rsx! {
        {children}
        ToastStack { dismiss_after_secs }
    }
}

#[component]
fn ToastStack(dismiss_after_secs: u32) -> Element {
    let notices = use_notifications();
    let entries = notices.read().entries().to_vec();

    rsx! {
        div {
            class: "toast-stack",
            role: "status",
            for notice in entries {
                Toast { key: "{notice.id}", notice: notice.clone(), dismiss_after_secs }
            }
        }
    }
}

#[component]
fn Toast(notice: Notice, dismiss_after_secs: u32) -> Element {
    let mut notices = use_notifications();
    let id = notice.id;

    use_future(move || async move {
        if dismiss_after_secs == 0 {
            return;
        }
        sleep(Duration::from_secs(u64::from(dismiss_after_secs))).await;
        notices.write().dismiss(id);
    });

    rsx! {
        div {
            class: match notice.level {
                NoticeLevel::Success => "toast toast--success",
                NoticeLevel::Error => "toast toast--error",
            },
            span { class: "toast-message", "{notice.message}" }
            button {
                class: "toast-close",
                title: "Dismiss",
                onclick: move |_| notices.write().dismiss(id),
                Icon { icon: FaXmark, width: 12, height: 12 }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut n = Notifications::default();
        let a = n.push(NoticeLevel::Error, "first");
        let b = n.push(NoticeLevel::Success, "second");
        assert!(b > a);
        assert_eq!(n.entries().len(), 2);
    }

    #[test]
    fn test_dismiss_removes_only_that_notice() {
        let mut n = Notifications::default();
        let a = n.push(NoticeLevel::Error, "first");
        n.push(NoticeLevel::Error, "second");
        n.dismiss(a);
        assert_eq!(n.entries().len(), 1);
        assert_eq!(n.entries()[0].message, "second");

        n.dismiss(999);
        assert_eq!(n.entries().len(), 1);
    }
}
