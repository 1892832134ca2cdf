//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};

use crate::components::toaster::{ToastHandle, Toaster};
use crate::config::ContactConfig;
use crate::pages::contact::ContactPage;
use crate::state::toast::ToastState;

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
/// Provides the page config (stock defaults unless `config` is given) and the
/// toast service, then mounts the contact page.
#[component]
pub fn App(#[prop(optional)] config: Option<ContactConfig>) -> impl IntoView {
    provide_meta_context();

    let config = config.unwrap_or_default();
    let toasts = ToastHandle::new(RwSignal::new(ToastState::default()), config.toast_duration_ms);

    provide_context(config);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/contact-page.css"/>
        <Toaster/>
        <ContactPage/>
    }
}
