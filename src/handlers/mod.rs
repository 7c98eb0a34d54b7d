// Handlers module

pub mod generate;

pub use generate::{generate_api_handler, generate_form_handler, EMPTY_INPUT_REPLY};
