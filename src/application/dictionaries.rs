use once_cell::sync::Lazy;
use serde_json::Value;

use crate::application::language::UserLanguage;

static RAW_FR: &str = include_str!("../../dictionaries/fr.json");
static RAW_EN: &str = include_str!("../../dictionaries/en.json");

static DICT_FR: Lazy<Value> =
    Lazy::new(|| serde_json::from_str(RAW_FR).expect("failed to parse fr dictionary json"));
static DICT_EN: Lazy<Value> =
    Lazy::new(|| serde_json::from_str(RAW_EN).expect("failed to parse en dictionary json"));

fn dictionary(lang: UserLanguage) -> &'static Value {
    match lang {
        UserLanguage::Fr => &*DICT_FR,
        UserLanguage::En => &*DICT_EN,
    }
}

pub fn dictionary_json(lang: UserLanguage) -> Value {
    dictionary(lang).clone()
}

/// Looks up a dotted path such as `waitlist.success`. Unknown paths come back
/// verbatim so a missing key is visible on the page instead of blank.
pub fn t(lang: UserLanguage, path: &str) -> String {
    let mut cursor = dictionary(lang);
    for segment in path.split('.') {
        if let Some(v) = cursor.get(segment) {
            cursor = v;
        } else {
            return path.to_string();
        }
    }
    cursor.as_str().unwrap_or(path).to_string()
}

pub fn success_message(lang: UserLanguage) -> String {
    t(lang, "waitlist.success")
}

pub fn duplicate_message(lang: UserLanguage) -> String {
    t(lang, "waitlist.duplicate")
}

pub fn generic_error_message(lang: UserLanguage) -> String {
    t(lang, "waitlist.genericError")
}
