//! Integration test suite modules

mod config_loading;
mod keyboard_flow;
mod removal_flow;
mod store_api;
