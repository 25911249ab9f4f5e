use crate::components::settings_panel::SettingsPanel;
use crate::core::article::article_style;
use crate::core::store::ReaderStore;
use crate::i18n::{Label, TranslationBundle};
use folio_settings::SettingsState;
use preferences::{load_catalog, load_locale};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_store};

mod preferences;

#[function_component(ReaderApp)]
pub(crate) fn reader_app() -> Html {
    let bundle = use_memo(|_| TranslationBundle::new(load_locale()), ());
    let (store, dispatch) = use_store::<ReaderStore>();
    let on_apply = Callback::from(move |settings: SettingsState| {
        dispatch.reduce_mut(move |store| store.commit(settings));
    });

    html! {
        <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
            <div class="reader-shell">
                <SettingsPanel
                    current_settings={store.committed.clone()}
                    catalog={store.catalog.clone()}
                    on_apply={on_apply}
                />
                <main class="reader-main" style={article_style(&store.committed)}>
                    <article class="reader-article">
                        <h1 class="reader-title">{bundle.label(Label::ArticleTitle)}</h1>
                        <p class="reader-body">{bundle.label(Label::ArticleBody)}</p>
                    </article>
                </main>
            </div>
        </ContextProvider<TranslationBundle>>
    }
}

/// Mount the reader into `#root` (or `<body>` when absent).
pub fn run_app() {
    console_error_panic_hook::set_once();
    Dispatch::<ReaderStore>::new().set(ReaderStore::with_catalog(load_catalog()));
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<ReaderApp>::with_root(root).render();
    } else {
        yew::Renderer::<ReaderApp>::new().render();
    }
}
