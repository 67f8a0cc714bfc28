//! Pure Yew view components for the Synq UI.
//!
//! These render from props only; all state lives in the conversion form hook.

use crate::config::{
    DONE_LABEL, INPUT_PLACEHOLDER, INPUT_SECTION_TITLE, RESULT_TITLE, VALUE_INPUT_ID,
};
use synq::{format_result, Unit};
use web_sys::HtmlElement;
use yew::prelude::*;

/// Text field for the value to convert, with a "Done" button that drops focus.
#[derive(Properties, PartialEq)]
pub struct ValueInputProps {
    pub text: AttrValue,
    pub oninput: Callback<InputEvent>,
}

#[function_component(ValueInput)]
pub fn value_input(props: &ValueInputProps) -> Html {
    let input_ref = use_node_ref();

    let on_done = {
        let input_ref = input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = input_ref.cast::<HtmlElement>() {
                let _ = input.blur();
            }
        })
    };

    html! {
        <section class="form-section">
            <h2 class="section-header">{ INPUT_SECTION_TITLE }</h2>
            <div class="input-with-action">
                <input
                    type="text"
                    id={VALUE_INPUT_ID}
                    inputmode="decimal"
                    autocomplete="off"
                    placeholder={INPUT_PLACEHOLDER}
                    value={props.text.clone()}
                    oninput={props.oninput.clone()}
                    ref={input_ref}
                />
                <button class="btn-secondary small" onclick={on_done}>{ DONE_LABEL }</button>
            </div>
        </section>
    }
}

/// Segmented control listing every unit; the selected one is highlighted.
#[derive(Properties, PartialEq)]
pub struct UnitPickerProps {
    pub label: AttrValue,
    pub selected: Unit,
    pub onselect: Callback<Unit>,
}

#[function_component(UnitPicker)]
pub fn unit_picker(props: &UnitPickerProps) -> Html {
    html! {
        <div class="form-group">
            <label class="picker-label">{ props.label.clone() }</label>
            <div class="segmented" role="radiogroup">
                { Unit::ALL.iter().map(|&unit| {
                    let selected = unit == props.selected;
                    let onclick = props.onselect.reform(move |_: MouseEvent| unit);
                    html! {
                        <button
                            key={unit.index()}
                            type="button"
                            role="radio"
                            aria-checked={selected.to_string()}
                            class={classes!("segment", selected.then_some("selected"))}
                            {onclick}
                        >
                            { unit.label() }
                        </button>
                    }
                }).collect::<Html>() }
            </div>
        </div>
    }
}

/// Converted value in large type, followed by the target unit's label.
#[derive(Properties, PartialEq)]
pub struct ResultPanelProps {
    pub value: f64,
    pub unit: Unit,
}

#[function_component(ResultPanel)]
pub fn result_panel(props: &ResultPanelProps) -> Html {
    html! {
        <section class="form-section result">
            <h3 class="result-title">{ RESULT_TITLE }</h3>
            <div class="result-value">{ format_result(props.value) }</div>
            <div class="result-unit">{ props.unit.label() }</div>
        </section>
    }
}
