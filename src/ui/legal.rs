//! Legal text modal
//!
//! One modal instance lives at the app root. Any component can open it with
//! [`LegalContext::open`].

use leptos::prelude::*;

use crate::core::LegalDoc;
use crate::ui::common::BaseModal;
use crate::ui::markdown::Markdown;

/// Which legal document is shown, if any
#[derive(Clone, Copy)]
pub struct LegalContext {
    pub open_doc: RwSignal<Option<LegalDoc>>,
}

impl LegalContext {
    pub fn open(&self, doc: LegalDoc) {
        self.open_doc.set(Some(doc));
    }

    pub fn close(&self) {
        self.open_doc.set(None);
    }
}

/// Provide the legal modal context to the application
pub fn provide_legal_context() -> LegalContext {
    let ctx = LegalContext {
        open_doc: RwSignal::new(None),
    };
    provide_context(ctx);
    ctx
}

/// Use the legal modal context from anywhere in the component tree
pub fn use_legal_context() -> LegalContext {
    use_context::<LegalContext>().expect("LegalContext should be provided")
}

/// The modal itself, mounted once by `App`
#[component]
pub fn LegalModal() -> impl IntoView {
    let legal = use_legal_context();

    let title = Signal::derive(move || {
        legal
            .open_doc
            .get()
            .map(|doc| doc.title().to_string())
            .unwrap_or_default()
    });

    view! {
        <BaseModal
            title=title
            is_open=Signal::derive(move || legal.open_doc.get().is_some())
            on_close=Callback::new(move |_| legal.close())
        >
            {move || legal.open_doc.get().map(|doc| view! { <Markdown content=doc.body() /> })}
            <div class="flex justify-end pt-4 mt-4 divider-top">
                <button class="btn-primary" on:click=move |_| legal.close()>
                    "I understand"
                </button>
            </div>
        </BaseModal>
    }
}

/// Inline link that opens a legal document
#[component]
pub fn LegalLink(doc: LegalDoc, #[prop(default = "link-accent")] class: &'static str) -> impl IntoView {
    let legal = use_legal_context();

    view! {
        <button type="button" class=class on:click=move |_| legal.open(doc)>
            {doc.title()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_close() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = provide_legal_context();
            assert!(ctx.open_doc.get_untracked().is_none());

            ctx.open(LegalDoc::Privacy);
            assert_eq!(ctx.open_doc.get_untracked(), Some(LegalDoc::Privacy));
            assert_eq!(use_legal_context().open_doc.get_untracked(), Some(LegalDoc::Privacy));

            ctx.close();
            assert!(ctx.open_doc.get_untracked().is_none());
        });
    }
}
