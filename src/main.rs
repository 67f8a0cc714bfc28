//! Main module for the Synq time converter using Yew.
//! Wires the conversion form state to the view components.

use yew::prelude::*;

mod components;
mod config;
mod hooks;

use components::{ResultPanel, UnitPicker, ValueInput};
use config::*;
use hooks::use_conversion_form;

/// Primary application component: value field, both unit pickers and the result.
#[function_component(Main)]
fn main_component() -> Html {
    let form = use_conversion_form(DEFAULT_INPUT, DEFAULT_SOURCE_UNIT, DEFAULT_TARGET_UNIT);

    html! {
        <div class="container">
            <h1>{ APP_TITLE }</h1>

            <ValueInput
                text={AttrValue::from(form.text.clone())}
                oninput={form.on_text_input.clone()}
            />

            <section class="form-section">
                <h2 class="section-header">{ UNITS_SECTION_TITLE }</h2>
                <UnitPicker
                    label={SOURCE_PICKER_LABEL}
                    selected={form.source}
                    onselect={form.on_source_select.clone()}
                />
                <UnitPicker
                    label={TARGET_PICKER_LABEL}
                    selected={form.target}
                    onselect={form.on_target_select.clone()}
                />
            </section>

            <ResultPanel value={form.result} unit={form.target} />
        </div>
    }
}

#[function_component]
pub fn App() -> Html {
    html! { <Main /> }
}

/// Entry point: installs the panic hook and starts the Yew renderer.
fn main() {
    console_error_panic_hook::set_once();
    log::info!("Starting {}", APP_TITLE);
    yew::Renderer::<App>::new().render();
}
