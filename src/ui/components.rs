/// Reusable UI components

use crate::filters::FilterDefinition;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterToggleProps {
    pub filter: &'static FilterDefinition,
    pub checked: bool,
    /// A change for this filter is in flight
    #[prop_or(false)]
    pub loading: bool,
    #[prop_or(false)]
    pub disabled: bool,
    pub on_change: Callback<(&'static FilterDefinition, bool)>,
}

/// One checkbox row per filter
#[function_component(FilterToggle)]
pub fn filter_toggle(props: &FilterToggleProps) -> Html {
    let onchange = {
        let filter = props.filter;
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((filter, input.checked()));
        })
    };

    html! {
        <label class={classes!("filter-row", props.loading.then_some("loading"))}>
            <span class="filter-label">{props.filter.label}</span>
            <span class="filter-param">{props.filter.query_segment()}</span>
            <input
                type="checkbox"
                id={props.filter.id}
                class="filter-toggle"
                checked={props.checked}
                disabled={props.disabled || props.loading}
                {onchange}
            />
        </label>
    }
}
