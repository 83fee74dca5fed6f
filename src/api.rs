use crate::config::Config;
use crate::dictionary::{Dictionary, merge_with_defaults};
use crate::engine::{self, EmoticonMatch, Format, Renderer, ScanMetrics, TreeStyle, Trie};
use crate::input::{self, CaretInput};
use std::time::{Duration, Instant};

/// Emoticon parser: a built trie plus the settings used to render matches.
///
/// The trie is built once in [`EmoticonsParser::new`] and never mutated
/// afterwards, so one parser can be shared freely between threads.
///
/// # Example
/// ```
/// use emoparse::{Config, EmoticonsParser};
///
/// let config = Config { emoticon_html: Some("<{EMOTICON}/>".into()), ..Config::default() };
/// let parser = EmoticonsParser::new(config);
/// assert_eq!(parser.parse_text("test :)"), "test <happy/>");
/// ```
#[derive(Debug, Clone)]
pub struct EmoticonsParser {
    debug: bool,
    renderer: Renderer,
    emoticons: Dictionary,
    trie: Trie,
}

impl Default for EmoticonsParser {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Details returned by [`EmoticonsParser::parse_verbose`].
#[derive(Debug, Clone)]
pub struct ParseDetails {
    pub total: Duration,
    pub decode: Duration,
    pub scan: Duration,
    pub chars_scanned: usize,
    pub trie_nodes: usize,
    pub matches: Vec<EmoticonMatch>,
}

/// Result from [`EmoticonsParser::parse_verbose`].
#[derive(Debug, Clone)]
pub struct ParseResultVerbose {
    pub input: String,
    pub text: String,
    pub details: ParseDetails,
}

impl EmoticonsParser {
    /// Build a parser. User emoticons fill in identifiers missing from the built-in set.
    pub fn new(config: Config) -> Self {
        let renderer = Renderer::new(config.template());
        let emoticons = merge_with_defaults(&config.emoticons);
        let trie = Trie::build(&emoticons, engine::mirror);

        if config.debug {
            log::info!("printing parser tree:\n{}", engine::render_tree(&trie, TreeStyle::Unicode));
        }

        Self { debug: config.debug, renderer, emoticons, trie }
    }

    /// Replace every recognized emoticon in `text` with its HTML rendering.
    pub fn parse_text(&self, text: &str) -> String {
        self.parse_text_as(text, Format::Html)
    }

    /// Like [`parse_text`](Self::parse_text) with an explicit output format.
    pub fn parse_text_as(&self, text: &str, format: Format) -> String {
        self.run(text, format).0
    }

    /// Parse with HTML output and return matches and timings as well.
    pub fn parse_verbose(&self, text: &str) -> ParseResultVerbose {
        self.parse_verbose_as(text, Format::Html)
    }

    pub fn parse_verbose_as(&self, text: &str, format: Format) -> ParseResultVerbose {
        let (out, matches, metrics) = self.run(text, format);
        let details = ParseDetails {
            total: metrics.total,
            decode: metrics.decode,
            scan: metrics.scan,
            chars_scanned: metrics.chars_scanned,
            trie_nodes: self.trie.len(),
            matches,
        };
        ParseResultVerbose { input: text.to_string(), text: out, details }
    }

    fn run(&self, text: &str, format: Format) -> (String, Vec<EmoticonMatch>, ScanMetrics) {
        if text.is_empty() {
            return (String::new(), Vec::new(), ScanMetrics::default());
        }
        let started = Instant::now();
        let decoded = engine::decode_angle_entities(text);
        let decode = started.elapsed();

        let scanned = engine::scan(&self.trie, &decoded, |id| self.renderer.render(id, format));
        let metrics = ScanMetrics { total: started.elapsed(), decode, ..scanned.metrics };
        (scanned.text, scanned.matches, metrics)
    }

    /// Render one identifier the way a match would be rendered.
    pub fn render_emoticon(&self, id: &str, format: Format) -> String {
        self.renderer.render(id, format)
    }

    /// The effective (merged) dictionary.
    pub fn get_emoticons(&self) -> &Dictionary {
        &self.emoticons
    }

    /// The text a person would type for `id`: its first symbol, else `(id)`.
    pub fn typed_text(&self, id: &str) -> Option<String> {
        let def = self.emoticons.get(id)?;
        Some(match def.symbols().first() {
            Some(symbol) => symbol.clone(),
            None => self.renderer.render(id, Format::Text),
        })
    }

    /// Identifier an exact literal resolves to, e.g. `"(-:"` -> `"happy"`.
    pub fn identify(&self, literal: &str) -> Option<&str> {
        self.trie.lookup(literal).map(|t| t.id.as_str())
    }

    /// Insert the typed form of `id` at the caret of `input`.
    ///
    /// Unknown identifiers leave the input untouched.
    pub fn insert_emoticon<I: CaretInput + ?Sized>(&self, id: &str, input: &mut I) {
        match self.typed_text(id) {
            Some(text) => input::insert_at_caret(input, &text),
            None => log::debug!("insert_emoticon: unknown emoticon '{id}'"),
        }
    }

    /// The trie as a tree diagram.
    pub fn tree(&self, style: TreeStyle) -> String {
        engine::render_tree(&self.trie, style)
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn template(&self) -> &str {
        self.renderer.template()
    }
}
