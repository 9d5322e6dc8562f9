//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{login::LoginPage, main_activity::MainActivityPage, signup::SignupPage};
use crate::state::session::load_bootstrap;
use crate::state::ui::UiState;

/// Root application component.
///
/// Reads the page bootstrap once, provides it (and its `UiConfig`) as
/// context, and routes to the screen the server rendered.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = load_bootstrap();
    provide_context(session.config.clone());
    provide_context(session);
    provide_context(RwSignal::new(UiState::default()));

    view! {
        <Title text="Diagnosis Chat"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=MainActivityPage/>
                <Route path=StaticSegment("main_activity") view=MainActivityPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
            </Routes>
        </Router>
    }
}
