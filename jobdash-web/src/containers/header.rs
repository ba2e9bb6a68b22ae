use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

use crate::components::header_nav_item::HeaderNavItem;
use crate::components::user_dropdown::UserDropdown;
use crate::models::session::SessionState;
use crate::routes::MainRoute;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let session = use_selector(|state: &SessionState| state.clone());
    let nav_routes = MainRoute::header_routes(session.is_admin());

    html! {
        <nav class="navbar justify-between bg-base-300">
            <a class="btn btn-ghost text-lg">
                <Link<MainRoute> to={MainRoute::Dashboard} classes="text-lg">
                    {"JobDash"}
                </Link<MainRoute>>
            </a>
            <ul class="menu menu-horizontal">
                { for nav_routes.iter().map(|route| html! {
                    <HeaderNavItem
                        current_route={props.current_route.clone()}
                        route={route.clone()}
                    />
                }) }
            </ul>
            <div class="flex items-center gap-2">
                {
                    if session.is_authenticated() {
                        html! { <UserDropdown /> }
                    } else {
                        html! {
                            <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary btn-sm">
                                {"Sign in"}
                            </Link<MainRoute>>
                        }
                    }
                }
            </div>
        </nav>
    }
}
