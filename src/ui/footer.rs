use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::{AppRoute, LegalDoc, NAV_LINKS};
use crate::ui::icon::{Icon, icons};
use crate::ui::legal::LegalLink;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8 mb-8">
                    // Brand
                    <div class="md:col-span-2">
                        <div class="flex items-center gap-2 mb-4">
                            <Icon name=icons::LOGO class="w-8 h-8" />
                            <span class="text-xl font-bold">"thumbly"</span>
                        </div>
                        <p class="text-sm text-muted max-w-md">
                            "AI thumbnails that get clicks. Describe your video, pick a style, and publish in minutes."
                        </p>
                    </div>

                    <div>
                        <h4 class="font-semibold mb-4">"Explore"</h4>
                        <ul class="space-y-2">
                            {NAV_LINKS.iter().map(|link| view! {
                                <li>
                                    <a href=link.href class="footer-link">{link.label}</a>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="font-semibold mb-4">"Account"</h4>
                        <ul class="space-y-2">
                            <li><A href=AppRoute::Login.path() attr:class="footer-link">"Log in"</A></li>
                            <li><A href=AppRoute::Signup.path() attr:class="footer-link">"Sign up"</A></li>
                            <li><A href=AppRoute::MyGeneration.path() attr:class="footer-link">"My Generations"</A></li>
                        </ul>
                    </div>
                </div>

                // Bottom bar
                <div class="pt-8 border-t border-subtle flex flex-col sm:flex-row items-center justify-between gap-4">
                    <span class="text-sm text-muted">"© 2025 thumbly. All rights reserved."</span>
                    <div class="flex items-center gap-6 text-sm">
                        <LegalLink doc=LegalDoc::Terms class="footer-link" />
                        <LegalLink doc=LegalDoc::Privacy class="footer-link" />
                    </div>
                </div>
            </div>
        </footer>
    }
}
