// ABOUTME: Built-in tools module - provider-native capability tools.
// ABOUTME: These tools mutate the request rather than run locally.

mod google_search;

pub use google_search::GoogleSearchTool;
