//! Emoticon dictionary: the built-in set and the user merge.
//!
//! A dictionary maps a canonical identifier (`"happy"`, `"wink"`, ...) to an
//! [`EmoticonDef`] listing the symbols a human would type for it. Identifiers
//! are kept in insertion order; that order decides the order of siblings in
//! the trie and the order reported by `EmoticonsParser::get_emoticons`.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Identifier -> definition, in insertion order.
pub type Dictionary = IndexMap<String, EmoticonDef>;

/// One dictionary entry.
///
/// `emos` may be absent or empty: the emoticon is then only reachable through
/// its bracketed name, e.g. `(thumbsup)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmoticonDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emos: Option<Vec<String>>,
}

impl EmoticonDef {
    pub fn new<I, S>(emos: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { emos: Some(emos.into_iter().map(Into::into).collect()) }
    }

    /// An entry with no symbols, reachable by name only.
    pub fn named_only() -> Self {
        Self { emos: None }
    }

    /// Symbol variants, empty when none were configured.
    pub fn symbols(&self) -> &[String] {
        self.emos.as_deref().unwrap_or(&[])
    }
}

const BUILTIN: &[(&str, &[&str])] = &[
    ("happy", &[":)", ":-)", ":]", ":-]"]),
    ("LOL", &[":D", ":-D"]),
    ("puzzled", &[":/", ":-/"]),
    ("sad", &[":(", ":-("]),
    ("angry", &[":[", ":-["]),
    ("annoyed", &[]),
    ("proud", &[]),
    ("heartbroken", &["</3"]),
    ("curious", &[]),
    ("thumbsup", &[]),
    ("loveyou", &["<3"]),
    ("marryme", &[]),
    ("shocked", &[":-O", ":O"]),
    ("surprised", &[":o", ":-o"]),
    ("wink", &[";)", ";-)"]),
];

static DEFAULT_EMOTICONS: Lazy<Dictionary> = Lazy::new(|| {
    BUILTIN
        .iter()
        .map(|(id, emos)| {
            let def = if emos.is_empty() { EmoticonDef::named_only() } else { EmoticonDef::new(emos.iter().copied()) };
            (id.to_string(), def)
        })
        .collect()
});

/// The built-in dictionary.
pub fn default_emoticons() -> &'static Dictionary {
    &DEFAULT_EMOTICONS
}

/// Fill the built-in dictionary with user entries.
///
/// Only top-level identifiers are merged, and only missing ones: a user
/// identifier that already exists in the defaults is ignored, new identifiers
/// are appended in the order given.
pub fn merge_with_defaults(user: &Dictionary) -> Dictionary {
    let mut merged = default_emoticons().clone();
    for (id, def) in user {
        merged.entry(id.clone()).or_insert_with(|| def.clone());
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_hold_fifteen_identifiers_in_order() {
        let defaults = default_emoticons();
        assert_eq!(defaults.len(), 15);
        assert_eq!(defaults.get_index(0).map(|(k, _)| k.as_str()), Some("happy"));
        assert_eq!(defaults.get_index(14).map(|(k, _)| k.as_str()), Some("wink"));
        assert!(defaults["thumbsup"].symbols().is_empty());
        assert_eq!(defaults["heartbroken"].symbols(), ["</3"]);
    }

    #[test]
    fn user_entries_are_appended() {
        let mut user = Dictionary::new();
        user.insert("zzz".into(), EmoticonDef::new([":~"]));

        let merged = merge_with_defaults(&user);
        assert_eq!(merged.len(), 16);
        assert_eq!(merged.get_index(15).map(|(k, _)| k.as_str()), Some("zzz"));
    }

    #[test]
    fn default_entry_wins_on_collision() {
        let mut user = Dictionary::new();
        user.insert("happy".into(), EmoticonDef::new(["^_^"]));
        user.insert("zzz".into(), EmoticonDef::new([":~"]));

        let merged = merge_with_defaults(&user);
        assert_eq!(merged.len(), 16);
        assert_eq!(merged.get_index_of("happy"), Some(0));
        assert_eq!(merged["happy"].symbols(), [":)", ":-)", ":]", ":-]"]);
        assert_eq!(merged["zzz"].symbols(), [":~"]);
    }
}
