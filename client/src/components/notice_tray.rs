//! Transient notice stack pinned to the top-right corner.

use leptos::prelude::*;

use crate::state::notice::NoticeState;

/// Renders queued notices; clicking one dismisses it early.
#[component]
pub fn NoticeTray() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notice-tray" role="status" aria-live="polite">
            <For
                each=move || notices.get().items
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <button
                            class=notice.kind.css_class()
                            on:click=move |_| notices.update(|n| n.dismiss(id))
                        >
                            {notice.text}
                        </button>
                    }
                }
            />
        </div>
    }
}
