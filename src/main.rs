//! The `foldmark` binary.

use foldmark::{DocumentOptions, ExtensionOptions, Options, ParseOptions, RenderOptions};

use std::boxed::Box;
use std::env;
use std::error::Error;
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

const EXIT_READ_CONFIG: i32 = 2;
const EXIT_PARSE_CONFIG: i32 = 3;

#[derive(Debug, Parser)]
#[command(about, author, version)]
#[command(
    after_help = "By default, foldmark will attempt to read command-line options from a config file specified by --config-file.  This behaviour can be disabled by passing --config-file none.  It is not an error if the file does not exist."
)]
struct Cli {
    /// Markdown file(s) to convert; or standard input if none passed
    #[arg(value_name = "FILE")]
    files: Option<Vec<PathBuf>>,

    /// Path to config file containing command-line arguments, or 'none'
    #[arg(short, long, value_name = "PATH", default_value = get_default_config_path())]
    config_file: String,

    /// Write output to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Wrap the fragment in a complete HTML page
    #[arg(short, long)]
    standalone: bool,

    /// Page title used with --standalone
    #[arg(long, value_name = "TITLE", default_value = "Converted Markdown")]
    title: String,

    /// Page language used with --standalone
    #[arg(long, value_name = "LANG", default_value = "en")]
    lang: String,

    /// Leave {placeholder} tokens alone in the standalone page
    #[arg(long)]
    no_placeholders: bool,

    /// Spaces of indentation per open heading section
    #[arg(long, value_name = "N", default_value_t = 2)]
    indent: usize,

    /// Leading whitespace characters per list nesting level
    #[arg(long, value_name = "N", default_value_t = 2)]
    list_indent: usize,

    /// Render heading sections expanded
    #[arg(long)]
    open: bool,

    /// Color for @@text@@ spans that name none
    #[arg(long, value_name = "COLOR", default_value = "#f00")]
    text_color: String,

    /// Background for %%text%% spans that name none
    #[arg(long, value_name = "COLOR", default_value = "#FFA500")]
    highlight_color: String,

    /// Disable an extension
    #[arg(short, long = "disable", value_name = "EXTENSION", value_enum)]
    disabled: Vec<Extension>,

    /// Log more; repeat for more detail
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Extension {
    Alerts,
    Table,
    Strikethrough,
    Underline,
    ColoredText,
    Highlight,
}

fn get_default_config_path() -> String {
    #[cfg(all(not(windows), not(target_arch = "wasm32")))]
    {
        if let Ok(xdg_dirs) = xdg::BaseDirectories::with_prefix("foldmark") {
            if let Ok(path) = xdg_dirs.place_config_file("config") {
                if let Some(path_str) = path.to_str() {
                    return path_str.into();
                }
            }
        }
    }

    "foldmark.config".into()
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut cli = Cli::parse();

    if cli.config_file != "none" {
        let config = match fs::read_to_string(&cli.config_file) {
            Ok(config) => Some(config),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                eprintln!(
                    "failed to read config file {}: {}",
                    cli.config_file, err
                );
                process::exit(EXIT_READ_CONFIG);
            }
        };

        if let Some(config) = config {
            let mut args = match shell_words::split(&config) {
                Ok(args) => args,
                Err(err) => {
                    eprintln!("failed to parse config file {}: {}", cli.config_file, err);
                    process::exit(EXIT_PARSE_CONFIG);
                }
            };
            let mut actual = env::args();
            if let Some(binary) = actual.next() {
                args.insert(0, binary);
            }
            args.extend(actual);
            cli = Cli::parse_from(args);
        }
    }

    init_logging(cli.verbose);

    let extension = ExtensionOptions {
        alerts: !cli.disabled.contains(&Extension::Alerts),
        table: !cli.disabled.contains(&Extension::Table),
        strikethrough: !cli.disabled.contains(&Extension::Strikethrough),
        underline: !cli.disabled.contains(&Extension::Underline),
        colored_text: !cli.disabled.contains(&Extension::ColoredText),
        highlight: !cli.disabled.contains(&Extension::Highlight),
    };

    let parse = ParseOptions {
        list_indent_width: cli.list_indent,
    };

    let render = RenderOptions {
        indent: cli.indent,
        open_sections: cli.open,
        default_text_color: cli.text_color,
        default_highlight_color: cli.highlight_color,
    };

    let options = Options {
        extension,
        parse,
        render,
    };

    let mut s: Vec<u8> = Vec::with_capacity(2048);

    match cli.files {
        None => {
            io::stdin().read_to_end(&mut s)?;
        }
        Some(ref paths) => {
            for path in paths {
                log::info!("reading {}", path.display());
                match fs::read(path) {
                    Ok(mut contents) => s.append(&mut contents),
                    Err(err) => {
                        return Err(format!("failed to read {}: {}", path.display(), err).into());
                    }
                }
            }
        }
    };

    let md = String::from_utf8(s)?;

    let document_options = cli.standalone.then(|| DocumentOptions {
        title: cli.title.clone(),
        lang: cli.lang.clone(),
        placeholders: !cli.no_placeholders,
    });

    let mut bw: Box<dyn Write> = match cli.output {
        Some(ref path) => {
            log::info!("writing {}", path.display());
            Box::new(BufWriter::new(fs::File::create(path)?))
        }
        None => Box::new(BufWriter::new(io::stdout())),
    };

    let html = match document_options {
        None => {
            let mut html = foldmark::markdown_to_html(&md, &options);
            html.push('\n');
            html
        }
        Some(document_options) => foldmark::markdown_to_document(&md, &options, &document_options),
    };
    bw.write_all(html.as_bytes())?;
    bw.flush()?;

    Ok(())
}
