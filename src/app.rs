use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::core::shows_chrome;
use crate::ui::pages::{
    ForgotPasswordPage, GenerateByIdPage, GeneratePage, HomePage, LoginPage, MyGenerationPage,
    NotFoundPage, PreviewPage, SignupPage,
};
use crate::ui::{Footer, LegalModal, Navbar, RevealScript, provide_legal_context};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" type="image/svg+xml" href="/icons/logo.svg"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Single legal modal shared by the signup form and the footer
    provide_legal_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/thumbly.css"/>

        <Title text="thumbly"/>

        <Router>
            <SiteShell/>
        </Router>

        <LegalModal/>
        <RevealScript/>
    }
}

/// Navbar, routed page and footer. Auth screens render without the chrome.
#[component]
fn SiteShell() -> impl IntoView {
    let pathname = use_location().pathname;
    let chrome = Memo::new(move |_| pathname.with(|path| shows_chrome(path)));

    view! {
        <Show when=move || chrome.get()>
            <Navbar/>
        </Show>

        <main class="min-h-screen">
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/generate") view=GeneratePage/>
                <Route path=path!("/generate/:id") view=GenerateByIdPage/>
                <Route path=path!("/preview") view=PreviewPage/>
                <Route path=path!("/my-generation") view=MyGenerationPage/>
                <Route path=path!("/login") view=LoginPage/>
                <Route path=path!("/signup") view=SignupPage/>
                <Route path=path!("/forgot-password") view=ForgotPasswordPage/>
            </Routes>
        </main>

        <Show when=move || chrome.get()>
            <Footer/>
        </Show>
    }
}
