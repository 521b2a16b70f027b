//! Transient toast notifications.
//!
//! Pages never touch the toast list directly. They receive a [`Notifier`]
//! prop and call [`Notifier::success`] or [`Notifier::error`]; the
//! application root owns the list and renders it through [`ToastHost`].

use std::fmt;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::prelude::*;

/// How long a toast stays on screen before dismissing itself.
const DISMISS_AFTER_MS: u32 = 4_000;

/// Oldest toasts are dropped once more than this many are visible.
const MAX_VISIBLE: usize = 5;

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A single notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: Uuid,
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Cloneable sink handed to pages as a prop.
#[derive(Clone, PartialEq)]
pub struct Notifier {
    sink: Callback<Notice>,
}

impl Notifier {
    pub fn new(sink: Callback<Notice>) -> Self {
        Self { sink }
    }

    /// Forward a prebuilt notice.
    pub fn notify(&self, notice: Notice) {
        self.sink.emit(notice);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(Notice::success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(Notice::error(message));
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Notifier")
    }
}

/// The visible toasts, newest last.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Notices {
    pub items: Vec<Notice>,
}

pub enum NoticesAction {
    Push(Notice),
    Dismiss(Uuid),
}

impl Reducible for Notices {
    type Action = NoticesAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut items = self.items.clone();
        match action {
            NoticesAction::Push(notice) => {
                items.push(notice);
                if items.len() > MAX_VISIBLE {
                    let excess = items.len() - MAX_VISIBLE;
                    items.drain(..excess);
                }
            }
            NoticesAction::Dismiss(id) => items.retain(|notice| notice.id != id),
        }
        Rc::new(Self { items })
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    pub notices: Vec<Notice>,
    pub on_dismiss: Callback<Uuid>,
}

/// Fixed-position stack rendering every visible toast.
#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    html! {
        <div class="toast-stack">
            { for props.notices.iter().map(|notice| html! {
                <ToastItem
                    key={notice.id.to_string()}
                    notice={notice.clone()}
                    on_dismiss={props.on_dismiss.clone()}
                />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    notice: Notice,
    on_dismiss: Callback<Uuid>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.notice.id;

    // Arm the auto-dismiss timer on mount; dropping the handle cancels it
    // if the toast is removed early.
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(id, move |_| {
            let timer = Timeout::new(DISMISS_AFTER_MS, move || on_dismiss.emit(id));
            move || drop(timer)
        });
    }

    let class = match props.notice.kind {
        NoticeKind::Success => "toast-item toast-success",
        NoticeKind::Error => "toast-item toast-error",
    };
    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div {class} role="status" {onclick}>
            { props.notice.message.clone() }
        </div>
    }
}
