//! トースト通知

use gloo::timers::callback::Timeout;
use hypernym_bench_common::{Notification, Notifier};
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// 通知を一定時間表示するトーストの置き場
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
    lifetime_ms: u32,
}

impl Toaster {
    pub fn new(lifetime_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
            lifetime_ms,
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Notifier for Toaster {
    fn notify(&mut self, notification: Notification) {
        log::debug!("toast: {}", notification.title);
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|toasts| toasts.push(Toast { id, notification }));

        let toaster = *self;
        Timeout::new(self.lifetime_ms, move || toaster.dismiss(id)).forget();
    }
}

#[component]
pub fn ToastViewport(toaster: Toaster) -> impl IntoView {
    view! {
        <div class="toast-viewport">
            <For
                each=move || toaster.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = if toast.notification.is_destructive() {
                        "toast toast-destructive"
                    } else {
                        "toast"
                    };
                    view! {
                        <div class=class role="status">
                            <div class="toast-body">
                                <p class="toast-title">{toast.notification.title}</p>
                                <p class="toast-description">{toast.notification.description}</p>
                            </div>
                            <button class="toast-close" on:click=move |_| toaster.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
