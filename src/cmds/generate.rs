use crate::{
    ffmpeg::{toolchain::Toolchain, Ffmpeg},
    fixtures::{subtitles::write_subtitles, Fixture},
};
use anyhow::{Context, Result};
use comfy_table::Table;
use kdam::BarExt;
use std::path::{Path, PathBuf};

const SCRATCH_DIR_NAME: &str = "_tmp";

#[derive(Debug, clap::Parser)]
#[command(about = "Generate small test media files with ffmpeg")]
pub struct GenerateArgs {
    /// Output directory [default: <crate root>/testdata]
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,
    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn default_out_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

/// Scratch space under the output directory, removed on drop.
#[derive(Debug)]
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn create(out_dir: &Path) -> Result<Self> {
        let path = out_dir.join(SCRATCH_DIR_NAME);
        std::fs::create_dir_all(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        if let Ok(entries) = std::fs::read_dir(&self.path) {
            for entry in entries.flatten() {
                let _ = std::fs::remove_file(entry.path());
            }
        }
        if let Err(e) = std::fs::remove_dir(&self.path) {
            log::debug!("could not remove {}: {}", self.path.display(), e);
        }
    }
}

fn generate_fixture(
    ffmpeg: &Ffmpeg,
    fixture: Fixture,
    out_dir: &Path,
    scratch: &ScratchDir,
) -> Result<PathBuf> {
    let out = out_dir.join(fixture.file_name());
    let subtitles = if fixture.needs_subtitles() {
        Some(write_subtitles(scratch.path())?)
    } else {
        None
    };
    ffmpeg.run(&fixture.args(&out, subtitles.as_deref())?)?;
    Ok(out)
}

fn summary_table(outputs: &[PathBuf]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["file", "size"]);
    for out in outputs.iter() {
        let size = std::fs::metadata(out)
            .map(|m| format!("{} B", m.len()))
            .unwrap_or_else(|_| "---".to_string());
        let name = out
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        table.add_row(vec![name, size]);
    }
    table
}

pub fn generate(args: &GenerateArgs) -> Result<()> {
    let tools = Toolchain::locate().map_err(|e| {
        log::error!("{}", e);
        log::error!("Install ffmpeg (macOS: brew install ffmpeg) and rerun.");
        e
    })?;
    log::debug!(
        "using {} and {}",
        tools.ffmpeg.display(),
        tools.ffprobe.display()
    );
    let ffmpeg = Ffmpeg::new(&tools.ffmpeg);

    let out_dir = args.out_dir.clone().unwrap_or_else(default_out_dir);
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;
    let scratch = ScratchDir::create(&out_dir)?;

    let mut pb = kdam::tqdm!(total = Fixture::ALL.len());
    let mut outputs = vec![];
    for fixture in Fixture::ALL {
        let out = generate_fixture(&ffmpeg, fixture, &out_dir, &scratch)
            .with_context(|| format!("failed to generate {}", fixture.file_name()))?;
        outputs.push(out);
        pb.update(1)?;
    }
    drop(scratch);

    println!("{}", summary_table(&outputs));
    println!("\nGenerated test media in: {}", out_dir.display());
    Ok(())
}
