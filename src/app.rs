//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::product::ProductPage;
use crate::state::viewer::ViewerUiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared viewer state context and sets up client-side
/// routing. Catalog browsing, cart, and checkout live in other surfaces;
/// this shell only carries the product-detail route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let viewer = RwSignal::new(ViewerUiState::default());
    provide_context(viewer);

    view! {
        <Stylesheet id="leptos" href="/pkg/vitrine.css"/>
        <Title text="Vitrine"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ProductPage/>
            </Routes>
        </Router>
    }
}
