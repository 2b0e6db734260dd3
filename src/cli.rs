//! Command-line surface.
//!
//! Exactly one input source must be given: inline text (`--word`) or a
//! file path (`--file`). The constraint is enforced declaratively, so
//! clap reports both/neither as a usage error before any work happens.

use std::path::{Path, PathBuf};

use clap::{ArgGroup, Parser};

#[derive(Parser, Debug)]
#[command(name = "kumo")]
#[command(version)]
#[command(about = "Generate a word-cloud image from Japanese text")]
#[command(group(ArgGroup::new("source").required(true).args(["word", "file"])))]
pub struct Cli {
    /// Input text given directly on the command line
    #[arg(short, long)]
    pub word: Option<String>,

    /// Input text file (UTF-8, ISO-2022-JP, Shift_JIS, or EUC-JP)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Output image path
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Font file used to draw words; must cover Japanese glyphs
    #[arg(long, default_value = "fonts/default.ttf")]
    pub font: PathBuf,

    /// How many ranked words to print before rendering
    #[arg(long, default_value_t = 20)]
    pub top: usize,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// The one input source resolved from the flag pair.
#[derive(Debug, PartialEq, Eq)]
pub enum InputSource<'a> {
    Inline(&'a str),
    File(&'a Path),
}

impl Cli {
    pub fn source(&self) -> InputSource<'_> {
        match (&self.word, &self.file) {
            (Some(word), None) => InputSource::Inline(word),
            (None, Some(path)) => InputSource::File(path),
            _ => unreachable!("the clap group admits exactly one input source"),
        }
    }
}
