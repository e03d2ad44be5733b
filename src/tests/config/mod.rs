//! Tests for configuration loading and plugin settings lookup

#[path = "defaults.rs"]
mod defaults;

#[path = "loading.rs"]
mod loading;

#[path = "test_utils.rs"]
mod test_utils;
