//! Terminal round driver.
//!
//! DESIGN
//! ======
//! A single task `select!`s over a tick interval and stdin lines. Each tick
//! feeds the real elapsed time into the shell, moves the scripted pen one
//! step and prints whatever the shell emitted. When a round finishes the
//! driver lifts the pen, prints an ASCII preview and a JSON summary line.
//!
//! The driver ends on `/quit` or when stdin closes. Input is read as raw
//! bytes and decoded lossily, so any line that is not a command is chat.

#[cfg(test)]
#[path = "driver_test.rs"]
mod driver_test;

use std::borrow::Cow;
use std::time::Duration;

use game::round::{RoundStatus, format_clock};
use game::shell::ShellEvent;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{info, warn};

use crate::error::AppError;
use crate::services::command::{self, Command};
use crate::services::preview;
use crate::state::{AppState, RoundSummary};

const BANNER: &str = "Type /join to start a round, /quit to leave.";

/// Run until `/quit` or end of input. Returns the summaries of finished rounds.
///
/// # Errors
///
/// Fails on stdin/stdout IO errors, raster failures, or JSON encoding.
pub async fn run<R, W>(
    state: &mut AppState,
    mut input: R,
    out: &mut W,
    tick: Duration,
) -> Result<Vec<RoundSummary>, AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut interval = tokio::time::interval(tick);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut last = Instant::now();
    let mut summaries = Vec::new();
    let mut buf = Vec::new();

    write_line(out, BANNER).await?;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let now = Instant::now();
                let elapsed = millis(now.duration_since(last));
                last = now;

                let events = state.shell.advance(elapsed);
                state.step_pen()?;
                for event in &events {
                    if let Some(text) = describe(event) {
                        write_line(out, &text).await?;
                    }
                    if matches!(event, ShellEvent::Won { .. } | ShellEvent::Lost { .. }) {
                        if let Some(summary) = finish_round(state, out).await? {
                            summaries.push(summary);
                        }
                    }
                }
            }
            read = input.read_until(b'\n', &mut buf) => {
                let closed = read? == 0;
                if !buf.is_empty() {
                    let line = decode_line(&buf);
                    buf.clear();
                    if !handle_line(state, &line, out).await? {
                        break;
                    }
                }
                if closed {
                    info!("input closed");
                    break;
                }
            }
        }
    }

    out.flush().await?;
    Ok(summaries)
}

/// Parse and apply one line. Returns `false` on `/quit`.
async fn handle_line<W>(state: &mut AppState, line: &str, out: &mut W) -> Result<bool, AppError>
where
    W: AsyncWrite + Unpin,
{
    match command::parse(line) {
        Ok(Command::Quit) => return Ok(false),
        Ok(cmd) => handle_command(state, cmd, out).await?,
        Err(e) => {
            warn!(error = %e, "rejected input line");
            write_line(out, &format!("error: {e}")).await?;
        }
    }
    Ok(true)
}

/// Decode a raw input line. Invalid UTF-8 is replaced rather than rejected,
/// so a stray byte never ends the session.
fn decode_line(raw: &[u8]) -> String {
    let text = String::from_utf8_lossy(raw);
    if matches!(text, Cow::Owned(_)) {
        warn!(len = raw.len(), "input line was not valid UTF-8");
    }
    text.trim_end_matches(['\n', '\r']).to_string()
}

async fn handle_command<W>(state: &mut AppState, cmd: Command, out: &mut W) -> Result<(), AppError>
where
    W: AsyncWrite + Unpin,
{
    match cmd {
        Command::Join => {
            if state.shell.status() == RoundStatus::Playing {
                write_line(out, "A round is already running.").await?;
                return Ok(());
            }
            let id = state.start_round()?;
            if let Some(round) = state.shell.round() {
                let text = format!(
                    "Round {id}: draw \"{}\" ({}) [{}]",
                    round.word(),
                    round.masked_word(),
                    format_clock(round.remaining_secs())
                );
                write_line(out, &text).await?;
            }
            if let Some(entry) = state.shell.feed().latest() {
                write_line(out, &format!("{}: {}", entry.sender, entry.text)).await?;
            }
        }
        Command::Tool(tool) => {
            let s = state.select_tool(tool)?;
            write_line(out, &format!("tool: {:?}, width {}", s.tool, s.width)).await?;
        }
        Command::Color(color) => {
            let s = state.pick_color(color)?;
            write_line(out, &format!("color: {}, tool {:?}", s.color, s.tool)).await?;
        }
        Command::Width(width) => {
            let s = state.pick_width(width)?;
            write_line(out, &format!("width: {}, tool {:?}", s.width, s.tool)).await?;
        }
        Command::Chat(text) => {
            if let Some(entry) = state.shell.submit_chat(&text) {
                write_line(out, &format!("{}: {}", entry.sender, entry.text)).await?;
            }
        }
        Command::Quit => {}
    }
    Ok(())
}

async fn finish_round<W>(state: &mut AppState, out: &mut W) -> Result<Option<RoundSummary>, AppError>
where
    W: AsyncWrite + Unpin,
{
    state.lift_pen()?;
    let step = preview::step_for_dpr(state.engine.surface.viewport().effective_dpr());
    if let Some(raster) = state.raster() {
        write_line(out, &preview::render(raster, step)).await?;
    }
    let Some(summary) = state.summary() else {
        return Ok(None);
    };
    write_line(out, &scoreboard(&summary)).await?;
    write_line(out, &serde_json::to_string(&summary)?).await?;
    info!(round = %summary.round, status = ?summary.status, strokes = summary.strokes, "round summary written");
    Ok(Some(summary))
}

/// One output line for a shell event. Ticks print every five seconds and
/// for the last five.
#[must_use]
pub fn describe(event: &ShellEvent) -> Option<String> {
    match event {
        ShellEvent::Tick { remaining_secs, .. } => {
            (*remaining_secs <= 5 || remaining_secs % 5 == 0).then(|| format!("[{}]", format_clock(*remaining_secs)))
        }
        ShellEvent::Guess(entry) if entry.correct => Some(format!("{}: {} (correct!)", entry.sender, entry.text)),
        ShellEvent::Guess(entry) => Some(format!("{}: {}", entry.sender, entry.text)),
        ShellEvent::Won { word, by, .. } => Some(format!("{by} guessed the word \"{word}\"!")),
        ShellEvent::Lost { word, .. } => Some(format!("Time's up! The word was \"{word}\".")),
    }
}

/// `Scores: You 1250, Player 3 700, ...`
fn scoreboard(summary: &RoundSummary) -> String {
    let entries: Vec<String> = summary.scores.iter().map(|p| format!("{} {}", p.name, p.score)).collect();
    format!("Scores: {}", entries.join(", "))
}

fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

async fn write_line<W>(out: &mut W, line: &str) -> Result<(), AppError>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(line.as_bytes()).await?;
    out.write_all(b"\n").await?;
    Ok(())
}
