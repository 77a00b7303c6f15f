use deckwright::config::DeckConfig;
use deckwright::deck::build_course_deck;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn run() -> deckwright::Result<(PathBuf, usize)> {
    let config = DeckConfig::from_env()?;
    let pres = build_course_deck(&config)?;
    pres.save(&config.output_path)?;
    Ok((config.output_path, pres.slide_count()))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok((path, slides)) => {
            println!("✅ 簡報已儲存到：{}", path.display());
            println!("📊 共 {} 頁", slides);
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!("❌ {}", err);
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("   caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        },
    }
}
