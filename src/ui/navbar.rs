//! Top navigation bar with mobile menu

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::core::routes::AppRoute;
use crate::core::{NAV_LINKS, NavLink};
use crate::ui::icon::{Icon, icons};

/// Whether `link` points at the page currently shown
pub fn is_active(link: &NavLink, pathname: &str, hash: &str) -> bool {
    match link.href.split_once('#') {
        Some((path, anchor)) => {
            let path = if path.is_empty() { "/" } else { path };
            path == pathname && hash.trim_start_matches('#') == anchor
        }
        None if link.href == "/" => pathname == "/" && hash.is_empty(),
        None => pathname == link.href || pathname.starts_with(&format!("{}/", link.href)),
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;
    let hash = location.hash;
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    // Close the mobile menu whenever the route changes
    Effect::new(move |_| {
        pathname.track();
        set_mobile_menu_open.set(false);
    });

    let link_class = move |link: &'static NavLink| {
        move || {
            let active = pathname.with(|path| hash.with(|hash| is_active(link, path, hash)));
            if active { "nav-link nav-link-active" } else { "nav-link" }
        }
    };

    let nav_item = move |link: &'static NavLink, mobile: bool| {
        let close = move |_: leptos::ev::MouseEvent| {
            if mobile {
                set_mobile_menu_open.set(false);
            }
        };
        if link.is_anchor() {
            view! {
                <a href=link.href class=link_class(link) on:click=close>{link.label}</a>
            }
            .into_any()
        } else {
            view! {
                <A href=link.href attr:class=link_class(link) on:click=close>{link.label}</A>
            }
            .into_any()
        }
    };

    view! {
        <header class="navbar">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <A href=AppRoute::Home.path() attr:class="flex items-center gap-2 hover:opacity-80 transition-opacity">
                        <Icon name=icons::LOGO class="w-8 h-8" />
                        <span class="text-xl font-bold">"thumbly"</span>
                    </A>

                    // Desktop navigation
                    <nav class="hidden md:flex items-center gap-6" aria-label="Main">
                        {NAV_LINKS.iter().map(|link| nav_item(link, false)).collect_view()}
                    </nav>

                    <div class="hidden md:flex items-center gap-3">
                        <A href=AppRoute::Login.path() attr:class="btn-ghost">"Log in"</A>
                        <A href=AppRoute::Signup.path() attr:class="btn-primary">"Get Started"</A>
                    </div>

                    // Mobile menu button
                    <button
                        class="md:hidden p-2 rounded-lg hover:bg-surface transition-colors"
                        on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                        aria-label="Toggle menu"
                        aria-expanded=move || mobile_menu_open.get().to_string()
                    >
                        {move || {
                            if mobile_menu_open.get() {
                                view! { <Icon name=icons::X class="w-6 h-6" /> }.into_any()
                            } else {
                                view! { <Icon name=icons::MENU class="w-6 h-6" /> }.into_any()
                            }
                        }}
                    </button>
                </div>

                // Mobile menu
                <div
                    class="md:hidden overflow-hidden transition-all duration-300"
                    class:max-h-0=move || !mobile_menu_open.get()
                    class:max-h-96=move || mobile_menu_open.get()
                >
                    <nav class="flex flex-col gap-1 py-4 border-t border-subtle" aria-label="Mobile">
                        {NAV_LINKS.iter().map(|link| nav_item(link, true)).collect_view()}
                        <div class="flex flex-col gap-2 pt-3">
                            <A href=AppRoute::Login.path() attr:class="btn-ghost text-center">"Log in"</A>
                            <A href=AppRoute::Signup.path() attr:class="btn-primary text-center">"Get Started"</A>
                        </div>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOME: NavLink = NavLink { label: "Home", href: "/" };
    const PRICING: NavLink = NavLink { label: "Pricing", href: "/#pricing" };
    const GENERATE: NavLink = NavLink { label: "Generate", href: "/generate" };

    #[test]
    fn test_home_active_only_without_hash() {
        assert!(is_active(&HOME, "/", ""));
        assert!(!is_active(&HOME, "/", "#pricing"));
        assert!(!is_active(&HOME, "/generate", ""));
    }

    #[test]
    fn test_anchor_links() {
        assert!(is_active(&PRICING, "/", "#pricing"));
        assert!(!is_active(&PRICING, "/", "#contact"));
        assert!(!is_active(&PRICING, "/generate", "#pricing"));
    }

    #[test]
    fn test_route_links_match_children() {
        assert!(is_active(&GENERATE, "/generate", ""));
        assert!(is_active(&GENERATE, "/generate/abc", ""));
        assert!(!is_active(&GENERATE, "/generated", ""));
    }
}
