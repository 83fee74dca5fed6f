//! Emoticon parsing.
//!
//! `emoparse` finds emoticons in free-form text, either symbolic (`:)`,
//! `;-)`, `</3`) or named (`(wink)`), and replaces them with markup built from
//! a template. Matching is a single left-to-right pass over a prefix tree
//! built from the emoticon dictionary; see `engine` for the moving parts.
//!
//! ```
//! use emoparse::{Config, EmoticonDef, EmoticonsParser};
//!
//! let mut config = Config { emoticon_html: Some("<{EMOTICON}/>".into()), ..Config::default() };
//! config.emoticons.insert("zzz".into(), EmoticonDef::new([":~"]));
//!
//! let parser = EmoticonsParser::new(config);
//! assert_eq!(parser.parse_text("night :~"), "night <zzz/>");
//! assert_eq!(parser.parse_text("(wink)"), "<wink/>");
//! ```

#[macro_use]
mod macros;
mod api;
mod config;
mod dictionary;
mod engine;
mod input;


pub use api::{EmoticonsParser, ParseDetails, ParseResultVerbose};
pub use config::{Config, ConfigError, DEFAULT_EMOTICON_HTML, PLACEHOLDER};
pub use dictionary::{Dictionary, EmoticonDef, default_emoticons};
pub use engine::{EmoticonMatch, Format, TreeStyle, mirror};
pub use input::{CaretInput, TextBuffer};
