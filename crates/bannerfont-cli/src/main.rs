use std::{
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use bannerfont::{
    render::validate_text, Config, ErrorKind, FontLibrary, RenderError, RenderOptions,
    FIRST_CHAR, LAST_CHAR,
};
use clap::{Parser, Subcommand};
use log::{debug, error};

use crate::console::render_to_console;
mod console;

const DEFAULT_CONFIG: &str = "bannerfont.toml";

#[derive(Parser)]
#[command(name = "bannerfont", about = "Render text as ASCII art banners")]
struct Cli {
    /// Config file (defaults to ./bannerfont.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Directory holding the banner fonts
    #[arg(long, global = true)]
    font_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Render text with a banner
    Render {
        #[arg(short, long)]
        banner: Option<String>,
        /// Text to render; read from stdin when omitted
        #[arg(short, long)]
        text: Option<String>,
        /// 256-color foreground index
        #[arg(long)]
        fg: Option<u8>,
        /// Fail on glyph rows missing from the banner
        #[arg(long)]
        strict: bool,
    },
    /// List available banners
    List,
    /// Inspect banner metadata
    Inspect {
        #[arg(short, long)]
        banner: String,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            let invalid_input = e
                .downcast_ref::<RenderError>()
                .is_some_and(|e| e.kind() == ErrorKind::InvalidInput);
            if invalid_input {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Ok(Config::load(path)?),
        None if Path::new(DEFAULT_CONFIG).is_file() => {
            Ok(Config::load(Path::new(DEFAULT_CONFIG))?)
        }
        None => Ok(Config::default()),
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(dir) = cli.font_dir {
        config.font_dir = dir;
    }
    let library = FontLibrary::from_config(&config);
    debug!("using banners from {}", library.dir().display());

    match cli.command {
        Cmd::Render {
            banner,
            text,
            fg,
            strict,
        } => {
            let text = match text {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    io::stdin()
                        .read_to_string(&mut buf)
                        .context("reading text from stdin")?;
                    buf
                }
            };
            let banner = banner.unwrap_or_else(|| config.default_banner.clone());
            validate_text(&text).map_err(RenderError::from)?;
            let font = library.load(&banner)?;
            let options = if strict {
                RenderOptions::strict()
            } else {
                library.options().clone()
            };
            let out = render_to_console(&font, &text, &options, fg)?;
            if out.ends_with('\n') {
                print!("{out}");
            } else {
                println!("{out}");
            }
        }
        Cmd::List => {
            for name in library.list()? {
                println!("{name}");
            }
        }
        Cmd::Inspect { banner } => {
            let font = library.load(&banner)?;
            println!("Banner: {}", font.name());
            println!("  Header: {:?}", font.header().unwrap_or_default());
            println!("  Lines: {}", font.line_count());
            println!("  Defined characters: {}", font.glyph_count());
            let widest = (FIRST_CHAR..=LAST_CHAR)
                .filter_map(char::from_u32)
                .filter_map(|ch| font.glyph(ch))
                .map(|glyph| glyph.width())
                .max()
                .unwrap_or(0);
            println!("  Widest glyph: {widest}");
            let missing = font.missing_chars();
            if !missing.is_empty() {
                let list: String = missing.iter().collect();
                println!("  Missing: {list:?}");
            }
        }
    }
    Ok(())
}
