mod debug_report;

use emoparse::{Config, EmoticonsParser, Format, TreeStyle};
use std::io::{self, IsTerminal, Read};

fn main() {
    let cli = match parse_args() {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let mut config = match &cli.config_path {
        Some(path) => match Config::from_path(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(2);
            }
        },
        None => Config::default(),
    };
    if cli.template.is_some() {
        config.emoticon_html = cli.template.clone();
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_log_filter(&config))).init();

    let parser = EmoticonsParser::new(config);

    if cli.tree {
        let style = if cli.ascii { TreeStyle::Ascii } else { TreeStyle::Unicode };
        print!("{}", parser.tree(style));
        if cli.input.is_none() {
            return;
        }
    }

    let input = match cli.input {
        Some(value) => value,
        None => match read_stdin_input() {
            Ok(value) => value,
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        },
    };

    if cli.verbose {
        let res = parser.parse_verbose_as(&input, cli.format);
        debug_report::print_run(&res, cli.color);
    } else {
        println!("{}", parser.parse_text_as(&input, cli.format));
    }
}

/// `debug: true` in the config shows the trie diagram, which is logged at `info`.
fn default_log_filter(config: &Config) -> &'static str {
    if config.debug { "info" } else { "warn" }
}

struct Cli {
    input: Option<String>,
    config_path: Option<String>,
    template: Option<String>,
    format: Format,
    tree: bool,
    ascii: bool,
    verbose: bool,
    color: bool,
}

fn parse_args() -> Result<Cli, String> {
    let mut cli = Cli {
        input: None,
        config_path: None,
        template: None,
        format: Format::Html,
        tree: false,
        ascii: false,
        verbose: false,
        color: io::stdout().is_terminal(),
    };
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("emoparse {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => cli.color = true,
            "--no-color" => cli.color = false,
            "--tree" => cli.tree = true,
            "--ascii" => cli.ascii = true,
            "-v" | "--verbose" => cli.verbose = true,
            "-c" | "--config" => {
                let value = args.next().ok_or_else(|| "error: --config expects a value".to_string())?;
                cli.config_path = Some(value);
            }
            "--template" => {
                let value = args.next().ok_or_else(|| "error: --template expects a value".to_string())?;
                cli.template = Some(value);
            }
            "--format" => {
                let value = args.next().ok_or_else(|| "error: --format expects a value".to_string())?;
                cli.format = parse_format(&value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                set_input(&mut cli, rest)?;
                break;
            }
            _ if arg.starts_with("--config=") => {
                cli.config_path = Some(arg.trim_start_matches("--config=").to_string());
            }
            _ if arg.starts_with("--template=") => {
                cli.template = Some(arg.trim_start_matches("--template=").to_string());
            }
            _ if arg.starts_with("--format=") => {
                cli.format = parse_format(arg.trim_start_matches("--format="))?;
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                set_input(&mut cli, rest)?;
                break;
            }
        }
    }

    Ok(cli)
}

fn set_input(cli: &mut Cli, value: String) -> Result<(), String> {
    if value.trim().is_empty() {
        return Ok(());
    }
    if cli.input.is_some() {
        return Err("error: input provided multiple times".to_string());
    }
    cli.input = Some(value);
    Ok(())
}

fn parse_format(value: &str) -> Result<Format, String> {
    value.parse::<Format>().map_err(|err| format!("error: {err}"))
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "emoparse {version}

Replace emoticons such as :) or (wink) with markup.

Usage:
  emoparse [OPTIONS] [--] <text...>
  echo 'hello :)' | emoparse [OPTIONS]

Options:
  -c, --config <file>        JSON config with debug, emoticon_html and emoticons.
  --template <html>          Markup template; {{EMOTICON}} is replaced by the id.
  --format <html|txt>        Output format. Default: html
  --tree                     Print the emoticon trie.
  --ascii                    Draw the trie with ASCII connectors.
  -v, --verbose              Print matches and timings.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Set RUST_LOG=debug (or trace) to log trie construction and matches.

Exit codes:
  0  Success.
  1  Failed to read input.
  2  Invalid arguments or config.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_config_raises_log_filter_to_info() {
        let debug = Config { debug: true, ..Config::default() };
        assert_eq!(default_log_filter(&debug), "info");
        assert_eq!(default_log_filter(&Config::default()), "warn");
    }
}
