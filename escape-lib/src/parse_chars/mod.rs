pub mod char_token;
pub mod escaped_to_escapable;
pub mod non_escaped_to_escaped;
