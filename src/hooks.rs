use synq::{convert, Unit};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Form state for one conversion: the three inputs plus the derived result.
#[derive(Clone)]
pub struct ConversionForm {
    /// Raw text of the value field, exactly as typed.
    pub text: String,
    pub source: Unit,
    pub target: Unit,
    /// `convert(text, source, target)`, recomputed on every render.
    pub result: f64,
    /// Callback for the text input's `oninput` event.
    pub on_text_input: Callback<InputEvent>,
    pub on_source_select: Callback<Unit>,
    pub on_target_select: Callback<Unit>,
}

/// Custom hook holding the converter's local state.
///
/// Only the three inputs are stored; the result is derived from them on each
/// render, so there is nothing to keep in sync.
#[hook]
pub fn use_conversion_form(
    initial_text: &'static str,
    initial_source: Unit,
    initial_target: Unit,
) -> ConversionForm {
    let text_handle: UseStateHandle<String> = use_state(|| initial_text.to_string());
    let source_handle: UseStateHandle<Unit> = use_state(|| initial_source);
    let target_handle: UseStateHandle<Unit> = use_state(|| initial_target);

    let on_text_input = {
        let text_setter = text_handle.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            text_setter.set(input.value());
        })
    };

    let on_source_select = {
        let source_setter = source_handle.clone();
        Callback::from(move |unit: Unit| {
            log::debug!("Source unit changed to {}", unit);
            source_setter.set(unit);
        })
    };

    let on_target_select = {
        let target_setter = target_handle.clone();
        Callback::from(move |unit: Unit| {
            log::debug!("Target unit changed to {}", unit);
            target_setter.set(unit);
        })
    };

    let result = convert(&text_handle, *source_handle, *target_handle);

    ConversionForm {
        text: (*text_handle).clone(),
        source: *source_handle,
        target: *target_handle,
        result,
        on_text_input,
        on_source_select,
        on_target_select,
    }
}
