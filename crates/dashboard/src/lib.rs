use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub mod api;
mod components;
pub mod config;
mod pages;
pub mod session;

use pages::{Dashboard, Login, NotFound};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=Dashboard/>
                    <Route path=path!("login") view=Login/>
                </Routes>
            </main>
        </Router>
    }
}
