use strum::{EnumIter, IntoEnumIterator};
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

use crate::containers::layout::Layout;
use crate::models::session::SessionState;
use crate::pages::{DashboardPage, ErrorPage, LoginPage, PostJobPage};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes.
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Dashboard,
    #[at("/login")]
    Login,
    #[at("/jobs/post")]
    PostJob,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Label shown in the header navigation.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::PostJob => "Post a job",
            Self::Login => "Sign in",
            Self::NotFound => "Not found",
        }
    }

    /// Routes that appear in the header for the given role.
    pub fn header_routes(is_admin: bool) -> Vec<Self> {
        Self::iter()
            .filter(|route| match route {
                Self::Dashboard => true,
                Self::PostJob => is_admin,
                Self::Login | Self::NotFound => false,
            })
            .collect()
    }
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let session = use_selector(|state: &SessionState| state.clone());
    let is_authenticated = session.is_authenticated();
    let is_admin = session.is_admin();

    match props.route.clone() {
        MainRoute::Login => {
            if is_authenticated {
                html! { <Redirect<MainRoute> to={MainRoute::Dashboard} /> }
            } else {
                html! { <LoginPage /> }
            }
        }
        MainRoute::Dashboard => {
            if !is_authenticated {
                return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
            }
            html! {
                <Layout current_route={MainRoute::Dashboard}>
                    <DashboardPage />
                </Layout>
            }
        }
        MainRoute::PostJob => {
            if !is_authenticated {
                return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
            }
            if !is_admin {
                return html! { <Redirect<MainRoute> to={MainRoute::Dashboard} /> };
            }
            html! {
                <Layout current_route={MainRoute::PostJob}>
                    <PostJobPage />
                </Layout>
            }
        }
        MainRoute::NotFound => {
            if !is_authenticated {
                return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
            }
            html! {
                <Layout current_route={MainRoute::NotFound}>
                    <ErrorPage />
                </Layout>
            }
        }
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log(std::format!("Switching to route: {route:?}").as_str());
    html! { <MainRouteView {route} /> }
}
