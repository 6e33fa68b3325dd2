//! Transient success/error notifications layered over every page.

use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays up before it removes itself.
const DISMISS_AFTER_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    id: u32,
    kind: ToastKind,
    message: String,
}

/// Handle for raising toasts from any page, handed out through context.
#[derive(Clone)]
pub struct Toasts {
    active: RwSignal<Vec<Toast>>,
    serial: RwSignal<u32>,
}

impl Toasts {
    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    fn show(&self, kind: ToastKind, message: String) {
        let id = self.serial.get_untracked();
        self.serial.set(id + 1);
        self.active.update(|list| list.push(Toast { id, kind, message }));

        let active = self.active;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
            active.update(|list| list.retain(|toast| toast.id != id));
        });
    }

    fn dismiss(&self, id: u32) {
        self.active.update(|list| list.retain(|toast| toast.id != id));
    }
}

/// Access the toast handle.
///
/// Panics outside a [`ToastContainer`] subtree.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().expect("Toasts not found in context")
}

/// Provides the toast context and stacks active toasts in a corner overlay.
/// Mount once, at the root.
#[component]
pub fn ToastContainer(children: Children) -> impl IntoView {
    let toasts = Toasts {
        active: RwSignal::new(Vec::new()),
        serial: RwSignal::new(0),
    };
    provide_context(toasts.clone());

    let active = toasts.active;
    view! {
        {children()}
        <div class="toast-container">
            {move || {
                active
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let handle = toasts.clone();
                        let class = match toast.kind {
                            ToastKind::Success => "toast toast-success",
                            ToastKind::Error => "toast toast-error",
                        };
                        view! {
                            <div class=class>
                                <button class="toast-dismiss" on:click=move |_| handle.dismiss(id)>
                                    "\u{00D7}"
                                </button>
                                {toast.message}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
