use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wiktionary_word::{
    output, parse, segment, PageSource, TranslationLanguages, WiktionaryClient, WiktionaryOptions,
};

/// Individually selectable extraction categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Category {
    EtymologyText,
    EtymologyLinks,
    Ipa,
    Pronunciations,
    Parts,
    PartAttributes,
    ExtendedForms,
    Meanings,
    Translations,
    Synonyms,
    Antonyms,
    Anagrams,
    AlternativeForms,
}

#[derive(Parser)]
#[command(name = "wiktionary-word")]
#[command(about = "Extract a structured lexical entry for one word from Wiktionary")]
struct Args {
    /// The word to look up (prefix reconstructed roots with '*')
    #[arg(default_value = "red")]
    word: String,

    /// Language code of the word (e.g. en, fr, enm, ine-pro)
    #[arg(default_value = "en")]
    lang: String,

    /// Categories to extract (default: all)
    #[arg(long, value_enum, value_delimiter = ',')]
    sections: Vec<Category>,

    /// Keep only translations into these language codes (default: all)
    #[arg(long, value_delimiter = ',')]
    translation_languages: Vec<String>,

    /// Directory for the JSON output
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Also dump the raw wikitext next to the JSON
    #[arg(long)]
    dump_wikitext: bool,

    /// Minimal output
    #[arg(short, long)]
    quiet: bool,
}

fn build_options(args: &Args) -> WiktionaryOptions {
    let mut options = if args.sections.is_empty() {
        WiktionaryOptions::all()
    } else {
        let mut options = WiktionaryOptions::none();
        for category in &args.sections {
            match category {
                Category::EtymologyText => options.etymology_text = true,
                Category::EtymologyLinks => options.etymology_links = true,
                Category::Ipa => options.ipa = true,
                Category::Pronunciations => options.pronunciations = true,
                Category::Parts => options.parts = true,
                Category::PartAttributes => options.part_attributes = true,
                Category::ExtendedForms => options.extended_forms = true,
                Category::Meanings => options.meanings = true,
                Category::Translations => options.translations = true,
                Category::Synonyms => options.synonyms = true,
                Category::Antonyms => options.antonyms = true,
                Category::Anagrams => options.anagrams = true,
                Category::AlternativeForms => options.alternative_forms = true,
            }
        }
        options
    };
    if !args.translation_languages.is_empty() {
        options.translation_languages =
            TranslationLanguages::only(args.translation_languages.iter().cloned());
    }
    options
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let options = build_options(&args);
    let client = WiktionaryClient::new();

    let wikitext = client
        .fetch_wikitext(&args.word, &args.lang)
        .with_context(|| format!("fetching '{}' ({})", args.word, args.lang))?;
    let sections = segment::process_wikitext(&wikitext);
    let language_sections =
        segment::extract_language_sections(&args.word, &args.lang, &sections)?;
    let lw = parse::parse_sections(&args.word, &args.lang, language_sections, &client, &options);

    let json_path = output::write_json(&lw, &args.out_dir)
        .with_context(|| format!("writing JSON to {}", args.out_dir.display()))?;
    if args.dump_wikitext {
        output::write_wikitext(&args.word, &args.lang, &wikitext, &args.out_dir)?;
    }

    if !args.quiet {
        println!("{} ({}): {}", lw.word, lw.language_name, lw.meaning);
        println!(
            "{} etymologies, {} parts of speech -> {}",
            lw.etymologies.len(),
            lw.etymologies.iter().map(|e| e.parts.len()).sum::<usize>(),
            json_path.display()
        );
    }
    Ok(())
}
