use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

const TOAST_DISMISS_MS: u32 = 4000;

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One transient notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
}

impl Toast {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            text: text.into(),
        }
    }
}

/// Context handle pages use to surface notifications.
pub type ToastBus = Callback<Toast>;

enum ToastAction {
    Push(u32, Toast),
    Dismiss(u32),
}

#[derive(Default, PartialEq)]
struct ToastList {
    toasts: Vec<(u32, Toast)>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let toasts = match action {
            ToastAction::Push(id, toast) => {
                let mut toasts = self.toasts.clone();
                toasts.push((id, toast));
                toasts
            }
            ToastAction::Dismiss(id) => self
                .toasts
                .iter()
                .filter(|(toast_id, _)| *toast_id != id)
                .cloned()
                .collect(),
        };
        Rc::new(Self { toasts })
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    pub children: Children,
}

/// Owns the toast list, provides the [`ToastBus`] context and renders the
/// stacked notifications; each toast dismisses itself after a few seconds.
#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    let list = use_reducer(ToastList::default);
    let counter = use_mut_ref(|| 0u32);

    let push = {
        let list = list.clone();
        Callback::from(move |toast: Toast| {
            let id = {
                let mut counter = counter.borrow_mut();
                *counter = counter.wrapping_add(1);
                *counter
            };
            list.dispatch(ToastAction::Push(id, toast));
            let list = list.clone();
            Timeout::new(TOAST_DISMISS_MS, move || {
                list.dispatch(ToastAction::Dismiss(id));
            })
            .forget();
        })
    };

    html! {
        <ContextProvider<ToastBus> context={push}>
            {props.children.clone()}
            <div class="toast toast-end z-50">
                { for list.toasts.iter().map(|(id, toast)| {
                    let class = match toast.kind {
                        ToastKind::Success => "alert alert-success",
                        ToastKind::Error => "alert alert-error",
                    };
                    html! {
                        <div key={*id} class={class}>
                            <span>{toast.text.clone()}</span>
                        </div>
                    }
                }) }
            </div>
        </ContextProvider<ToastBus>>
    }
}

/// Fetch the toast bus; falls back to a no-op callback outside a
/// [`ToastHost`].
#[hook]
pub fn use_toast() -> ToastBus {
    use_context::<ToastBus>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_constructors_tag_the_kind() {
        let success = Toast::success("posted");
        assert_eq!(success.kind, ToastKind::Success);
        assert_eq!(success.text, "posted");

        let error = Toast::error("failed");
        assert_eq!(error.kind, ToastKind::Error);
    }

    #[test]
    fn dismiss_removes_only_the_matching_toast() {
        let list = Rc::new(ToastList::default());
        let list = list.reduce(ToastAction::Push(1, Toast::error("one")));
        let list = list.reduce(ToastAction::Push(2, Toast::success("two")));
        assert_eq!(list.toasts.len(), 2);

        let list = list.reduce(ToastAction::Dismiss(1));
        assert_eq!(list.toasts.len(), 1);
        assert_eq!(list.toasts[0].0, 2);
    }
}
