//! Browser-stored preferences for the dashboard shell.

use crate::core::cell_menu::OpenStatePolicy;
use crate::core::errors::PreferenceError;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use serde::Serialize;

pub(crate) const LOCALE_KEY: &str = "cellboard.locale";
pub(crate) const OPEN_POLICY_KEY: &str = "cellboard.cell_menu.open_policy";
pub(crate) const EDIT_MODE_KEY: &str = "cellboard.edit_mode";

pub(crate) fn load_locale() -> LocaleCode {
    if let Ok(value) = LocalStorage::get::<String>(LOCALE_KEY) {
        return value.parse().unwrap_or_else(|err: PreferenceError| {
            log_preference_error(&err);
            DEFAULT_LOCALE
        });
    }
    window()
        .navigator()
        .language()
        .and_then(|tag| LocaleCode::from_lang_tag(&tag))
        .unwrap_or(DEFAULT_LOCALE)
}

pub(crate) fn load_open_policy() -> OpenStatePolicy {
    match LocalStorage::get::<String>(OPEN_POLICY_KEY) {
        Ok(value) => value.parse().unwrap_or_else(|err: PreferenceError| {
            log_preference_error(&err);
            OpenStatePolicy::default()
        }),
        Err(_) => OpenStatePolicy::default(),
    }
}

pub(crate) fn load_edit_mode() -> bool {
    LocalStorage::get::<bool>(EDIT_MODE_KEY).unwrap_or(true)
}

pub(crate) fn persist_edit_mode(enabled: bool) {
    set_storage(EDIT_MODE_KEY, enabled);
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn log_preference_error(err: &PreferenceError) {
    console::error!("ignoring stored preference", err.to_string());
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
