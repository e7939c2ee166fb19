//! Integration tests for the server-side pieces: the settings store and
//! the Azure DevOps request construction.

#[cfg(test)]
mod common;

#[cfg(test)]
mod settings_store_tests;

#[cfg(test)]
mod work_item_payload_tests;
