use emoparse::ParseResultVerbose;

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(res: &ParseResultVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    let details = &res.details;
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Parsing: {:?}", res.input), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Matches ━━━", ansi::GRAY));
    if details.matches.is_empty() {
        println!("{}", palette.dim("  No emoticons matched"));
        println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
        println!("  • The symbol is glued to the next character (needs whitespace after it)");
        println!("  • The symbol is glued to the previous word");
        println!("  • The identifier is not in the dictionary (names are case-sensitive)");
    } else {
        for (idx, m) in details.matches.iter().enumerate() {
            println!(
                "  {} {} {} {} {}",
                palette.paint(format!("[{}]", idx), ansi::GRAY),
                palette.bold(palette.paint(&m.id, ansi::GREEN)),
                palette.dim("│"),
                palette.paint(&m.literal, ansi::BLUE),
                palette.paint(format!("chars {}..{}", m.start, m.end), ansi::YELLOW),
            );
        }
    }

    println!("\n{}", palette.paint("━━━ Output ━━━", ansi::GRAY));
    println!("{}", res.text);

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Decode: {}  │  Scan: {}  │  {} chars, {} trie nodes",
        palette.paint(format!("{:?}", details.total), ansi::GREEN),
        palette.dim(format!("{:?}", details.decode)),
        palette.paint(format!("{:?}", details.scan), ansi::CYAN),
        details.chars_scanned,
        details.trie_nodes,
    );
    println!();
}
