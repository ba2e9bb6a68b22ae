use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_selector;

use crate::api::JobDashClient;
use crate::components::toast::{Toast, use_toast};
use crate::models::session::SessionState;
use crate::routes::MainRoute;
use crate::store::session::SessionStore;

#[function_component(UserDropdown)]
pub fn user_dropdown() -> Html {
    let navigator = use_navigator().unwrap();
    let toast = use_toast();
    let session = use_selector(|state: &SessionState| state.clone());
    let store = use_context::<SessionStore>();

    let Some(store) = store else {
        return html! {};
    };
    if !session.is_authenticated() {
        return html! {};
    }

    let full_name = session.full_name();
    let initials = session.initials();
    let email = session
        .personal_data
        .as_ref()
        .map(|data| data.email.clone())
        .unwrap_or_default();

    let logout_button = {
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            let navigator = navigator.clone();
            let toast = toast.clone();
            let store = store.clone();
            spawn_local(async move {
                let client = JobDashClient::shared();
                match store.logout(&client).await {
                    Ok(()) => navigator.push(&MainRoute::Login),
                    Err(err) => toast.emit(Toast::error(format!("Logout failed: {err}"))),
                }
            });
        });
        html! {
            <li><a {onclick}>{"Log out"}</a></li>
        }
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle avatar placeholder">
                <div class="bg-neutral text-neutral-content w-10 rounded-full">
                    <span>{initials}</span>
                </div>
            </div>
            <ul tabIndex={0} class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                <li class="px-2 py-1 text-left">
                    <div class="text-sm font-semibold text-base-content">{full_name}</div>
                    <div class="text-xs text-base-content/70">{email}</div>
                </li>
                <div class="divider my-0"></div>
                {logout_button}
            </ul>
        </div>
    }
}
