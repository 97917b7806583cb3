use anyhow::{Context, Result};
use chrono::NaiveTime;
use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

pub const SUBTITLE_FILE_NAME: &str = "temp.srt";

const TIMESTAMP_FORMAT: &str = "%H:%M:%S,%3f";

#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleCue {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub text: &'static str,
}

impl SubtitleCue {
    fn new(start_ms: u32, end_ms: u32, text: &'static str) -> Self {
        Self {
            start: at_millis(start_ms),
            end: at_millis(end_ms),
            text,
        }
    }
}

fn at_millis(ms: u32) -> NaiveTime {
    NaiveTime::MIN + chrono::Duration::milliseconds(ms as i64)
}

pub fn cues() -> Vec<SubtitleCue> {
    vec![
        SubtitleCue::new(0, 1_500, "Hello, subtitles!"),
        SubtitleCue::new(1_600, 3_000, "Short test clip."),
    ]
}

pub fn render_srt(cues: &[SubtitleCue]) -> String {
    cues.iter()
        .enumerate()
        .map(|(i, cue)| {
            format!(
                "{}\n{} --> {}\n{}\n",
                i + 1,
                cue.start.format(TIMESTAMP_FORMAT),
                cue.end.format(TIMESTAMP_FORMAT),
                cue.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes the fixed captions into `dir` and returns the file path.
pub fn write_subtitles(dir: &Path) -> Result<PathBuf> {
    let path = dir.join(SUBTITLE_FILE_NAME);
    let mut f = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    write!(f, "{}", render_srt(&cues()))?;
    log::debug!("wrote subtitles to {}", path.display());
    Ok(path)
}
