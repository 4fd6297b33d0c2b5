pub mod debug_console;
pub mod results;
pub mod search_bar;
pub mod status_bar;
