use crate::ffmpeg::{file_input, lavfi_input, metadata};
use anyhow::{Context, Result};
use std::path::Path;

pub mod subtitles;

/// Length of every generated clip, in seconds.
pub const DURATION_SECS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixture {
    ColorPattern,
    Bars,
    SineTone,
    Subtitled,
}

impl Fixture {
    /// Generation order.
    pub const ALL: [Fixture; 4] = [
        Fixture::ColorPattern,
        Fixture::Bars,
        Fixture::SineTone,
        Fixture::Subtitled,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            Fixture::ColorPattern => "test_color_720p_h264_aac.mp4",
            Fixture::Bars => "test_bars_480p_h265_aac.mkv",
            Fixture::SineTone => "test_audio_sine_aac.m4a",
            Fixture::Subtitled => "test_with_subs_h264_aac.mp4",
        }
    }

    pub fn needs_subtitles(&self) -> bool {
        matches!(self, Fixture::Subtitled)
    }

    /// ffmpeg arguments producing this fixture at `out`.
    /// `subtitles` is required by [`Fixture::Subtitled`] and ignored otherwise.
    pub fn args(&self, out: &Path, subtitles: Option<&Path>) -> Result<Vec<String>> {
        let args = match self {
            Fixture::ColorPattern => color_pattern_args(out),
            Fixture::Bars => bars_args(out),
            Fixture::SineTone => sine_tone_args(out),
            Fixture::Subtitled => {
                let subtitles = subtitles
                    .with_context(|| format!("{} needs a subtitle file", self.file_name()))?;
                subtitled_args(out, subtitles)
            }
        };
        Ok(args)
    }
}

fn sine(frequency: u32) -> String {
    format!("sine=frequency={}:duration={}", frequency, DURATION_SECS)
}

fn duration() -> Vec<String> {
    vec!["-t".to_string(), DURATION_SECS.to_string()]
}

fn flags(pairs: &[(&str, &str)]) -> Vec<String> {
    pairs
        .iter()
        .flat_map(|(flag, value)| [flag.to_string(), value.to_string()])
        .collect()
}

fn color_pattern_args(out: &Path) -> Vec<String> {
    vec![
        lavfi_input("testsrc=size=1280x720:rate=30"),
        lavfi_input(&sine(1000)),
        duration(),
        flags(&[("-map_metadata", "-1")]),
        metadata("title", "Color Pattern"),
        metadata("artist", "Transcoderr"),
        flags(&[
            ("-c:v", "libx264"),
            ("-pix_fmt", "yuv420p"),
            ("-c:a", "aac"),
            ("-movflags", "use_metadata_tags"),
        ]),
        vec![out.display().to_string()],
    ]
    .concat()
}

fn bars_args(out: &Path) -> Vec<String> {
    vec![
        lavfi_input("smptebars=size=640x480:rate=25"),
        lavfi_input(&sine(500)),
        duration(),
        flags(&[("-c:v", "libx265"), ("-c:a", "aac"), ("-b:a", "160k")]),
        vec![out.display().to_string()],
    ]
    .concat()
}

fn sine_tone_args(out: &Path) -> Vec<String> {
    vec![
        lavfi_input(&sine(440)),
        flags(&[("-c:a", "aac"), ("-b:a", "192k")]),
        vec![out.display().to_string()],
    ]
    .concat()
}

fn subtitled_args(out: &Path, subtitles: &Path) -> Vec<String> {
    vec![
        lavfi_input("testsrc=size=854x480:rate=30"),
        lavfi_input(&sine(800)),
        file_input(subtitles),
        duration(),
        flags(&[
            ("-c:v", "libx264"),
            ("-c:a", "aac"),
            ("-vf", "format=yuv420p"),
            ("-map", "0:v:0"),
            ("-map", "1:a:0"),
            ("-map", "2:0"),
            ("-c:s", "mov_text"),
        ]),
        flags(&[("-metadata:s:s:0", "language=eng")]),
        vec![out.display().to_string()],
    ]
    .concat()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn value_after<'a>(args: &'a [String], flag: &str) -> Vec<&'a str> {
        args.windows(2)
            .filter(|w| w[0] == flag)
            .map(|w| w[1].as_str())
            .collect()
    }

    #[test]
    fn test_every_fixture_writes_to_out_last() {
        let out = PathBuf::from("/tmp/out/file");
        let srt = PathBuf::from("/tmp/out/_tmp/temp.srt");
        for fixture in Fixture::ALL {
            let args = fixture.args(&out, Some(&srt)).unwrap();
            assert_eq!(args.last().map(String::as_str), Some("/tmp/out/file"));
        }
    }

    #[test]
    fn test_file_names_are_distinct() {
        let mut names = Fixture::ALL.map(|f| f.file_name()).to_vec();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_color_pattern() {
        let args = Fixture::ColorPattern.args(Path::new("a.mp4"), None).unwrap();
        assert_eq!(
            value_after(&args, "-i"),
            vec!["testsrc=size=1280x720:rate=30", "sine=frequency=1000:duration=3"]
        );
        assert_eq!(value_after(&args, "-map_metadata"), vec!["-1"]);
        assert_eq!(
            value_after(&args, "-metadata"),
            vec!["title=Color Pattern", "artist=Transcoderr"]
        );
        assert_eq!(value_after(&args, "-c:v"), vec!["libx264"]);
        assert_eq!(value_after(&args, "-c:a"), vec!["aac"]);
        assert_eq!(value_after(&args, "-t"), vec!["3"]);
    }

    #[test]
    fn test_bars() {
        let args = Fixture::Bars.args(Path::new("b.mkv"), None).unwrap();
        assert_eq!(
            value_after(&args, "-i"),
            vec!["smptebars=size=640x480:rate=25", "sine=frequency=500:duration=3"]
        );
        assert_eq!(value_after(&args, "-c:v"), vec!["libx265"]);
        assert_eq!(value_after(&args, "-b:a"), vec!["160k"]);
        assert_eq!(value_after(&args, "-t"), vec!["3"]);
    }

    #[test]
    fn test_sine_tone_is_audio_only() {
        let args = Fixture::SineTone.args(Path::new("c.m4a"), None).unwrap();
        assert_eq!(value_after(&args, "-i"), vec!["sine=frequency=440:duration=3"]);
        assert!(value_after(&args, "-c:v").is_empty());
        assert_eq!(value_after(&args, "-b:a"), vec!["192k"]);
    }

    #[test]
    fn test_subtitled_maps_three_inputs() {
        let srt = PathBuf::from("scratch/temp.srt");
        let args = Fixture::Subtitled.args(Path::new("d.mp4"), Some(&srt)).unwrap();
        assert_eq!(
            value_after(&args, "-i"),
            vec![
                "testsrc=size=854x480:rate=30",
                "sine=frequency=800:duration=3",
                "scratch/temp.srt"
            ]
        );
        assert_eq!(value_after(&args, "-map"), vec!["0:v:0", "1:a:0", "2:0"]);
        assert_eq!(value_after(&args, "-c:s"), vec!["mov_text"]);
        assert_eq!(value_after(&args, "-metadata:s:s:0"), vec!["language=eng"]);
    }

    #[test]
    fn test_subtitled_without_subtitle_file_is_an_error() {
        let err = Fixture::Subtitled.args(Path::new("d.mp4"), None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "test_with_subs_h264_aac.mp4 needs a subtitle file"
        );
    }

    #[test]
    fn test_only_subtitled_needs_subtitles() {
        let needing = Fixture::ALL
            .into_iter()
            .filter(Fixture::needs_subtitles)
            .collect::<Vec<_>>();
        assert_eq!(needing, vec![Fixture::Subtitled]);
    }
}
