use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

pub const TOAST_DURATION_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Destructive,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
}

#[derive(Debug, PartialEq)]
pub enum ToastAction {
    Push {
        title: String,
        description: String,
        kind: ToastKind,
    },
    Dismiss(u32),
}

impl ToastAction {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        ToastAction::Push {
            title: title.into(),
            description: description.into(),
            kind: ToastKind::Success,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        ToastAction::Push {
            title: title.into(),
            description: description.into(),
            kind: ToastKind::Destructive,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u32,
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push {
                title,
                description,
                kind,
            } => {
                next.toasts.push(Toast {
                    id: next.next_id,
                    title,
                    description,
                    kind,
                });
                next.next_id = next.next_id.wrapping_add(1);
            }
            ToastAction::Dismiss(id) => next.toasts.retain(|t| t.id != id),
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(TOAST_DURATION_MS, move || on_dismiss.emit(id));
                move || drop(timeout)
            },
            id,
        );
    }

    let close = {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let class = match props.toast.kind {
        ToastKind::Success => "toast",
        ToastKind::Destructive => "toast destructive",
    };

    html! {
        <div class={class} role="status">
            <div class="toast-body">
                <strong>{ &props.toast.title }</strong>
                <p>{ &props.toast.description }</p>
            </div>
            <button class="toast-close" onclick={close}>{"×"}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub queue: ToastQueue,
    pub on_dismiss: Callback<u32>,
}

/// Stack of transient notifications, each removing itself after five seconds.
#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    html! {
        <div class="toaster">
            { for props.queue.toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={props.on_dismiss.clone()} />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_then_dismiss() {
        let queue = Rc::new(ToastQueue::default());
        let queue = queue.reduce(ToastAction::error("Form Error", "Please fill in all required fields"));
        let queue = queue.reduce(ToastAction::success("Message Sent", "Thanks"));
        assert_eq!(queue.toasts.len(), 2);
        assert_eq!(queue.toasts[0].kind, ToastKind::Destructive);
        assert_ne!(queue.toasts[0].id, queue.toasts[1].id);

        let first = queue.toasts[0].id;
        let queue = queue.reduce(ToastAction::Dismiss(first));
        assert_eq!(queue.toasts.len(), 1);
        assert_eq!(queue.toasts[0].title, "Message Sent");
    }

    #[test]
    fn dismissing_unknown_id_is_harmless() {
        let queue = Rc::new(ToastQueue::default()).reduce(ToastAction::Dismiss(7));
        assert!(queue.toasts.is_empty());
    }
}
