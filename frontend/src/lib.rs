pub mod api;
pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::pages::{admin_panel::AdminPanel, public_game::PublicGame};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
   #[at("/")] PublicGame,
   #[at("/secret-admin-control")] AdminPanel,
   #[not_found]
   #[at("/404")] NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
   match route {
       Route::PublicGame => html! { <PublicGame /> },
       Route::AdminPanel => html! { <AdminPanel /> },
       Route::NotFound => html! { <Redirect<Route> to={Route::PublicGame} /> },
   }
}
