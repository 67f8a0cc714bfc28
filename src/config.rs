//! Application-level configuration constants.

use synq::Unit;

// Window
pub const APP_TITLE: &str = "Synq";

// Default values for the form
pub const DEFAULT_INPUT: &str = "";
pub const DEFAULT_SOURCE_UNIT: Unit = Unit::Seconds;
pub const DEFAULT_TARGET_UNIT: Unit = Unit::Seconds;

// Labels
pub const INPUT_SECTION_TITLE: &str = "Value to Convert";
pub const INPUT_PLACEHOLDER: &str = "Enter a number";
pub const UNITS_SECTION_TITLE: &str = "Select Units";
pub const SOURCE_PICKER_LABEL: &str = "Convert From:";
pub const TARGET_PICKER_LABEL: &str = "Convert To:";
pub const RESULT_TITLE: &str = "Result";
pub const DONE_LABEL: &str = "Done";

// DOM ids
pub const VALUE_INPUT_ID: &str = "value_to_convert";
