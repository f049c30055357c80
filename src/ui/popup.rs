/// Popup UI for the eBay UK filters extension

use crate::filters::{FILTERS, FilterDefinition};
use crate::host::ChromeHost;
use crate::reconciler::{self, PopupView};
use crate::storage::FilterSettings;
use crate::ui::components::FilterToggle;
use log::error;
use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
enum PopupState {
    Loading,
    NotEbay,
    Active,
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(|| PopupState::Loading);
    let settings = use_state(FilterSettings::cleared);
    let pending = use_state(|| None::<&'static str>); // id of the filter being applied

    // Load saved filters on mount
    {
        let state = state.clone();
        let settings = settings.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match reconciler::open_popup(&ChromeHost).await {
                    Ok(PopupView::Active(saved)) => {
                        settings.set(saved);
                        state.set(PopupState::Active);
                    }
                    Ok(PopupView::NotApplicable) => {
                        state.set(PopupState::NotEbay);
                    }
                    Err(e) => {
                        error!("Error initializing popup: {}", e);
                        state.set(PopupState::NotEbay);
                    }
                }
            });
            || ()
        });
    }

    // Checkbox change handler
    let on_toggle = {
        let settings = settings.clone();
        let pending = pending.clone();

        Callback::from(move |(filter, enabled): (&'static FilterDefinition, bool)| {
            let settings = settings.clone();
            let pending = pending.clone();
            let previous = (*settings).clone();

            settings.set(previous.clone().with(filter.storage_key, enabled));
            pending.set(Some(filter.id));

            spawn_local(async move {
                match reconciler::on_toggle(&ChromeHost, filter, enabled).await {
                    Ok(outcome) => {
                        settings.set(outcome.settings);
                    }
                    Err(e) => {
                        error!("Error toggling {}: {}", filter.param, e);
                        settings.set(reconciler::settings_after_failure(&ChromeHost, previous).await);
                    }
                }
                // Navigation usually closes the popup before this runs
                pending.set(None);
            });
        })
    };

    // Clear all handler
    let on_clear_all = {
        let settings = settings.clone();
        let pending = pending.clone();

        Callback::from(move |_: MouseEvent| {
            let settings = settings.clone();
            let pending = pending.clone();
            let previous = (*settings).clone();

            settings.set(FilterSettings::cleared());
            pending.set(Some("clear-all"));

            spawn_local(async move {
                match reconciler::on_clear_all(&ChromeHost).await {
                    Ok(outcome) => {
                        settings.set(outcome.settings);
                    }
                    Err(e) => {
                        error!("Error clearing filters: {}", e);
                        settings.set(reconciler::settings_after_failure(&ChromeHost, previous).await);
                    }
                }
                pending.set(None);
            });
        })
    };

    let is_busy = pending.is_some();

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"eBay UK Filters"}</h1>

            {match &*state {
                PopupState::Loading => html! {
                    <div class="loading-text-center">
                        <Spinner />
                    </div>
                },
                PopupState::NotEbay => html! {
                    <div id="not-ebay-message">
                        <Alert r#type={AlertType::Info} title={"Not on eBay UK"} inline={true}>
                            {"Open an eBay UK search to use these filters."}
                        </Alert>
                    </div>
                },
                PopupState::Active => html! {
                    <>
                        <div id="filters-container" class="flex-column-gap">
                            {for FILTERS.iter().map(|filter| html! {
                                <FilterToggle
                                    key={filter.id}
                                    filter={filter}
                                    checked={settings.is_enabled(filter.storage_key)}
                                    loading={*pending == Some(filter.id)}
                                    disabled={is_busy}
                                    on_change={on_toggle.clone()}
                                />
                            })}
                        </div>
                        <div class="footer">
                            <Button
                                onclick={on_clear_all}
                                disabled={is_busy}
                                variant={ButtonVariant::Secondary}
                                block={true}
                            >
                                {"Clear all"}
                            </Button>
                        </div>
                    </>
                },
            }}
        </div>
    }
}
