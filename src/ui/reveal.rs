//! Scroll-triggered entrance animations
//!
//! Elements wrapped in [`Reveal`] start hidden and get the `visible` class the
//! first time they scroll into view. The observer script is mounted once by
//! `App` and also picks up elements added by client-side navigation.

use leptos::prelude::*;

/// Entrance direction for a revealed block
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RevealFrom {
    #[default]
    Below,
    Left,
    Right,
    /// Fade and scale in place
    Center,
}

impl RevealFrom {
    pub fn class(&self) -> &'static str {
        match self {
            RevealFrom::Below => "reveal reveal-up",
            RevealFrom::Left => "reveal reveal-left",
            RevealFrom::Right => "reveal reveal-right",
            RevealFrom::Center => "reveal reveal-zoom",
        }
    }
}

/// Wraps children in a block that animates in on scroll
#[component]
pub fn Reveal(
    #[prop(optional)]
    from: RevealFrom,
    /// Delay before the transition starts
    #[prop(default = 0)]
    delay_ms: u32,
    /// Extra classes for the wrapper
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=format!("{} {}", from.class(), class)
            style=format!("transition-delay: {}ms;", delay_ms)
        >
            {children()}
        </div>
    }
}

/// Stagger delay for the `index`-th item of a grid
pub fn stagger_delay(index: usize) -> u32 {
    const STEP_MS: u32 = 100;
    const MAX_MS: u32 = 600;
    (index as u32).saturating_mul(STEP_MS).min(MAX_MS)
}

/// Run `then` the first time `element` intersects the viewport.
///
/// Falls back to running immediately when the browser has no
/// IntersectionObserver.
#[cfg(feature = "hydrate")]
pub fn on_first_visible(element: &web_sys::Element, then: impl FnOnce() + 'static) {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{IntersectionObserver, IntersectionObserverEntry};

    let pending: Rc<RefCell<Option<Box<dyn FnOnce()>>>> =
        Rc::new(RefCell::new(Some(Box::new(then))));

    let on_intersect = {
        let pending = Rc::clone(&pending);
        Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let visible = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<IntersectionObserverEntry>()
                        .is_intersecting()
                });
                if !visible {
                    return;
                }
                observer.disconnect();
                if let Some(then) = pending.borrow_mut().take() {
                    then();
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
    };

    match IntersectionObserver::new(on_intersect.as_ref().unchecked_ref()) {
        Ok(observer) => {
            observer.observe(element);
            // Leak the callback to keep it alive for the observer
            on_intersect.forget();
        }
        Err(err) => {
            leptos::logging::warn!("IntersectionObserver unavailable: {:?}", err);
            if let Some(then) = pending.borrow_mut().take() {
                then();
            }
        }
    }
}

/// IntersectionObserver wiring for `.reveal` elements
#[component]
pub fn RevealScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                const observer = new IntersectionObserver((entries) => {
                    entries.forEach(entry => {
                        if (entry.isIntersecting) {
                            entry.target.classList.add('visible');
                            observer.unobserve(entry.target);
                        }
                    });
                }, {
                    threshold: 0.1,
                    rootMargin: '0px 0px -50px 0px'
                });

                function observeAll(root) {
                    root.querySelectorAll('.reveal:not(.visible)').forEach(el => observer.observe(el));
                }

                function init() {
                    observeAll(document);
                    new MutationObserver(() => observeAll(document))
                        .observe(document.body, { childList: true, subtree: true });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', init);
                } else {
                    init();
                }
            })();
            "#
        </script>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes() {
        assert_eq!(RevealFrom::default().class(), "reveal reveal-up");
        assert!(RevealFrom::Center.class().contains("reveal-zoom"));
    }

    #[test]
    fn test_stagger_delay_is_capped() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(2), 200);
        assert_eq!(stagger_delay(20), 600);
    }
}
