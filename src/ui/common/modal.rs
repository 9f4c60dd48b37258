use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use leptos::wasm_bindgen::JsCast;

/// Overlay dialog with a title bar and scrollable body.
///
/// Closes on Escape, on the close button, and on a click on the backdrop.
#[component]
pub fn BaseModal(
    /// Modal title
    #[prop(into)]
    title: Signal<String>,
    /// Whether modal is open
    #[prop(into)]
    is_open: Signal<bool>,
    /// Callback to close modal
    on_close: Callback<()>,
    /// Modal content
    children: ChildrenFn,
    /// Maximum width class
    #[prop(default = "max-w-2xl")]
    max_width: &'static str,
) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                on_close.run(());
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    let on_backdrop_click = move |e: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            let on_backdrop = e
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                .is_some_and(|element| element.class_list().contains("modal-backdrop"));
            if on_backdrop {
                on_close.run(());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = e;
        }
    };

    view! {
        <Show when=move || is_open.get()>
            <div
                class="modal-backdrop"
                role="dialog"
                aria-modal="true"
                on:click=on_backdrop_click
            >
                <div class=format!("modal-panel w-full {}", max_width)>
                    <div class="modal-header">
                        <h3 class="text-lg font-semibold">{move || title.get()}</h3>
                        <button
                            class="btn-icon"
                            on:click=move |_| on_close.run(())
                            aria-label="Close"
                        >
                            <Icon name=icons::X class="w-5 h-5"/>
                        </button>
                    </div>
                    <div class="modal-body">
                        {children()}
                    </div>
                </div>
            </div>
        </Show>
    }
}
