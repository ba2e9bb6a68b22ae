use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

use crate::components::toast::ToastHost;
use crate::models::session::SessionState;
use crate::routes::{MainRoute, switch};
use crate::store::session::SessionStore;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[function_component(App)]
pub fn app() -> Html {
    let (_session, dispatch) = use_store::<SessionState>();

    // Build the session store once; restoring any persisted session happens
    // inside `SessionStore::new`, before the routed consumers render.
    let session_store = use_memo((), {
        let dispatch = dispatch.clone();
        move |_| SessionStore::new(dispatch)
    });

    html! {
        <ContextProvider<SessionStore> context={(*session_store).clone()}>
            <ToastHost>
                <BrowserRouter>
                    <Switch<MainRoute> render={switch} />
                </BrowserRouter>
            </ToastHost>
        </ContextProvider<SessionStore>>
    }
}
