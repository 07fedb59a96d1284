use std::fs::File;
use std::sync::Arc;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use aurora::api::{RestBackend, TutorBackend};
use aurora::core::config;
use aurora::core::highlight::{HighlightRange, compute_highlight_ranges};
use aurora::core::state::App;

#[derive(Parser)]
#[command(name = "aurora", about = "Companion CLI for the Aurora tutoring backend")]
struct Args {
    /// Lesson to open a tutoring session for
    #[arg(short, long)]
    lesson: String,

    /// Opening message to send to the tutor
    #[arg(short, long, default_value = "Let's get started.")]
    message: String,

    /// Override the backend base URL
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to aurora.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("aurora.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config = config::load_config()?;
    let resolved = config::resolve(&config, args.base_url.as_deref());

    let backend = Arc::new(RestBackend::new(
        resolved.base_url.clone(),
        resolved.api_token.clone(),
        resolved.learner_id.clone(),
    )?);
    log::info!(
        "Aurora starting up with {} backend at {}",
        backend.name(),
        resolved.base_url
    );
    let mut app = App::new(backend.clone());

    let session = backend.start_session(&args.lesson).await?;
    println!("session {} · status {:?}", session.session_id, session.status);
    let session_id = session.session_id.clone();
    app.session = Some(session);

    let turn = backend.send_message(&session_id, &args.message).await?;
    app.apply_turn(turn);

    let state = app.display_state();
    if let Some(turn) = &app.latest_turn {
        if state.show_narration {
            let hints: Vec<&str> = turn.summary.as_deref().into_iter().collect();
            let ranges = compute_highlight_ranges(&turn.narration, &hints, &resolved.highlight);
            println!("\n{}", render_with_markers(&turn.narration, &ranges));
        }
        if state.show_question
            && let Some(check) = &turn.comprehension_check
        {
            println!("\n? {}", check.question());
        }
        if state.show_checkpoint {
            match &turn.checkpoint {
                Some(cp) => println!("\n[checkpoint] {}", cp.instructions),
                None => println!("\n[checkpoint] The tutor is waiting on your submission."),
            }
        }
        if state.show_suggestions {
            for cue in app.visible_suggestions() {
                println!("  • {}", cue);
            }
        }
    }

    Ok(())
}

/// Wraps each highlighted span in `»`/`«` markers for terminal output.
/// Overlapping spans keep the earlier one.
fn render_with_markers(text: &str, ranges: &[HighlightRange]) -> String {
    let mut sorted: Vec<&HighlightRange> = ranges.iter().collect();
    sorted.sort_by_key(|r| r.start);

    let mut out = String::with_capacity(text.len() + ranges.len() * 4);
    let mut cursor = 0;
    for range in sorted {
        if range.start < cursor {
            continue;
        }
        out.push_str(&text[cursor..range.start]);
        out.push('»');
        out.push_str(&text[range.start..range.end]);
        out.push('«');
        cursor = range.end;
    }
    out.push_str(&text[cursor..]);
    out
}
