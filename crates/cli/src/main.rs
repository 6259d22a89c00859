#![deny(warnings)]

use anyhow::Context;
use clap::{Parser, Subcommand};
use easyaid_core::assistant::Assistant;
use easyaid_core::config::{
    resolve_app_config, AppConfig, LanguageCode, ProcessEnv, ENV_LANGUAGE, ENV_TRANSLATE_DELAY_MS,
};
use easyaid_core::emotion::classify;
use easyaid_core::translate::{
    detect_language, supported_languages, DictionaryTranslator, Localizer,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "easyaid")]
#[command(about = "Mood detection and phrase localization for the multilingual assistant")]
struct Args {
    /// Session language used when no explicit target is given.
    #[arg(long, global = true, env = ENV_LANGUAGE)]
    language: Option<String>,

    #[arg(long, global = true, env = ENV_TRANSLATE_DELAY_MS)]
    translate_delay_ms: Option<u64>,

    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify the emotion expressed in a message.
    Classify { text: String },
    /// Translate text word by word.
    Translate {
        text: String,
        #[arg(long)]
        to: Option<String>,
    },
    /// List supported languages.
    Languages,
    /// Guess the language of a text from its script.
    Detect { text: String },
    /// Produce a mood-aware, localized assistant reply. Without REPLY the
    /// assistant picks one from the message's topic.
    Reply {
        user_text: String,
        reply: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let cfg = build_config(&args)?;
    tracing::debug!(
        language = %cfg.language,
        translate_delay_ms = cfg.translate_delay.millis,
        "config loaded"
    );

    run(args.command, &cfg, args.json).await
}

async fn run(command: Command, cfg: &AppConfig, json: bool) -> anyhow::Result<()> {
    match command {
        Command::Classify { text } => {
            let result = classify(&text);
            if json {
                print_json(&result)?;
            } else {
                println!(
                    "{} intensity={:.2} theme={} ({})",
                    result.category.as_str(),
                    result.intensity,
                    result.color_theme.as_str(),
                    result.color_theme.hex()
                );
            }
        }
        Command::Translate { text, to } => {
            let target = to.map(LanguageCode::new).transpose()?;
            let localizer = Localizer::with_language(
                DictionaryTranslator::new(cfg.translate_delay),
                cfg.language.clone(),
            );
            let translated = localizer.localize(text, target).await;
            if json {
                print_json(&serde_json::json!({ "text": translated }))?;
            } else {
                println!("{translated}");
            }
        }
        Command::Languages => {
            if json {
                print_json(&supported_languages())?;
            } else {
                for entry in supported_languages() {
                    println!("{}\t{}\t{}", entry.code, entry.name, entry.native_name);
                }
            }
        }
        Command::Detect { text } => {
            let code = detect_language(&text);
            if json {
                print_json(&serde_json::json!({ "code": code }))?;
            } else {
                println!("{code}");
            }
        }
        Command::Reply { user_text, reply } => {
            let mut assistant = Assistant::from_app(cfg);
            let out = match reply {
                Some(reply) => assistant.respond(&user_text, &reply).await,
                None => assistant.respond_to(&user_text).await,
            };
            if json {
                print_json(&out)?;
            } else {
                println!("[{}] {}", out.mood.category.as_str(), out.text);
            }
        }
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render JSON")?;
    println!("{rendered}");
    Ok(())
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(
            level
                .parse()
                .with_context(|| format!("invalid --log-level: {level}"))?,
        )
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn build_config(args: &Args) -> anyhow::Result<AppConfig> {
    resolve_app_config(args.language.clone(), args.translate_delay_ms, &ProcessEnv)
        .context("invalid configuration")
}
