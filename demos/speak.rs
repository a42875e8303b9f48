//! Speaks a text file with CeVIO, optionally applying a cast configuration first.
//!
//! ```text
//! cargo run --example speak -- --mode ccs --config cast.json sample_text.txt
//! cargo run --example speak -- --sample-mood sample_text.txt
//! ```

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[cfg_attr(not(windows), allow(dead_code))]
struct Args {
    /// CeVIO product to drive: AI or CCS.
    #[arg(long, default_value = "AI")]
    mode: String,
    /// JSON file with the cast and its parameters.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Apply the sample mood (made for さとうささら) before speaking.
    #[arg(long)]
    sample_mood: bool,
    /// Send a short lead-in before the text so that its beginning is not swallowed.
    #[arg(long)]
    lead_in: bool,
    /// Text file to speak.
    text: PathBuf,
}

#[cfg(windows)]
fn main() -> anyhow::Result<()> {
    use cevio_lite::{config, EngineSession, Mode};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let mode: Mode = args.mode.parse()?;
    let text = std::fs::read_to_string(&args.text)?;

    // Initialize COM.
    cevio_lite::initialize()?;

    // Attach to CeVIO, starting it if needed, and make sure some cast is selected.
    let mut session = EngineSession::connect(mode)?;
    session.set_lead_in(args.lead_in);
    session.select_default_cast()?;

    if let Some(path) = &args.config {
        let report = config::apply(&mut session, path)?;
        for warning in &report.warnings {
            eprintln!("warning: {warning}");
        }
    }

    if args.sample_mood {
        let report = session.apply_sample_mood()?;
        for warning in &report.warnings {
            eprintln!("warning: {warning}");
        }
    }

    println!("{}", session.talk_params()?);
    println!("{}", session.cast_params()?);

    // Speak the whole file, one segment at a time.
    let count = session.speak(&text)?;
    println!("spoke {count} segment(s)");

    // We don't need COM anymore. Clean up and free the resources.
    cevio_lite::finalize();
    Ok(())
}

#[cfg(not(windows))]
fn main() {
    let _ = Args::parse();
    eprintln!("CeVIO is only available on Windows");
}
