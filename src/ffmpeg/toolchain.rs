use anyhow::{bail, Result};
use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

pub const FFMPEG: &str = "ffmpeg";
pub const FFPROBE: &str = "ffprobe";

/// Resolved locations of the external media tools.
#[derive(Debug, Clone)]
pub struct Toolchain {
    pub ffmpeg: PathBuf,
    pub ffprobe: PathBuf,
}

impl Toolchain {
    /// Looks up `ffmpeg` and `ffprobe` on `PATH`.
    pub fn locate() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::locate_in(std::env::var_os("PATH").as_deref(), &cwd)
    }

    pub fn locate_in(search_path: Option<&OsStr>, cwd: &Path) -> Result<Self> {
        Self::from_lookups(
            which::which_in(FFMPEG, search_path, cwd).ok(),
            which::which_in(FFPROBE, search_path, cwd).ok(),
        )
    }

    fn from_lookups(ffmpeg: Option<PathBuf>, ffprobe: Option<PathBuf>) -> Result<Self> {
        match (ffmpeg, ffprobe) {
            (Some(ffmpeg), Some(ffprobe)) => Ok(Self { ffmpeg, ffprobe }),
            (ffmpeg, ffprobe) => {
                let missing = [(FFMPEG, ffmpeg), (FFPROBE, ffprobe)]
                    .into_iter()
                    .filter(|(_, found)| found.is_none())
                    .map(|(name, _)| name)
                    .collect::<Vec<_>>();
                bail!("{} not found on PATH", missing.join(" and "))
            }
        }
    }
}
