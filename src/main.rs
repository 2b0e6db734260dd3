use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use kumo::analyze::{self, FrequencyMap};
use kumo::cli::{Cli, InputSource};
use kumo::cloud;
use kumo::input;
use kumo::morpheme;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let text = match cli.source() {
        InputSource::Inline(word) => word.to_string(),
        InputSource::File(path) => input::read_to_utf8(path)?,
    };

    let morphemes = morpheme::tokenize(&text)?;
    let frequencies = analyze::extract(&morphemes);
    print_summary(&frequencies, cli.top);

    let font = cloud::load_font(&cli.font)?;
    let config = cloud::CloudConfig::for_vocabulary(frequencies.len());
    let image = cloud::render(&frequencies, &config, &font)?;
    cloud::save_png(&image, &cli.output)?;

    info!(path = %cli.output.display(), "word cloud written");
    println!("word cloud written to {}", cli.output.display());
    Ok(())
}

fn print_summary(frequencies: &FrequencyMap, limit: usize) {
    let ranked = analyze::top_words(frequencies, limit);

    println!("=== top {} words by frequency ===", ranked.len());
    for (rank, (word, count)) in ranked.iter().enumerate() {
        println!("{}. {}: {}", rank + 1, word, count);
    }
    println!("{} distinct words in total", frequencies.len());
}
