use anyhow::{bail, Result};
use std::{
    path::{Path, PathBuf},
    process::Command,
};

pub mod toolchain;

/// Runs `ffmpeg` synchronously with a fixed preamble in front of every argument list.
#[derive(Debug, Clone)]
pub struct Ffmpeg {
    program: PathBuf,
}

impl Ffmpeg {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn command_line(&self, args: &[String]) -> Vec<String> {
        vec![
            vec![
                "-hide_banner".to_string(),
                "-y".to_string(),
                "-loglevel".to_string(),
                "warning".to_string(),
            ],
            args.to_vec(),
        ]
        .concat()
    }

    pub fn run(&self, args: &[String]) -> Result<()> {
        let args = self.command_line(args);
        log::info!("$ {} {}", self.program.display(), args.join(" "));
        let status = Command::new(&self.program).args(&args).status()?;
        if !status.success() {
            bail!("{} exited with {}", self.program.display(), status);
        }
        Ok(())
    }
}

/// `-f lavfi -i <graph>`: a source synthesized by ffmpeg itself.
pub fn lavfi_input(graph: &str) -> Vec<String> {
    vec![
        "-f".to_string(),
        "lavfi".to_string(),
        "-i".to_string(),
        graph.to_string(),
    ]
}

pub fn file_input(path: &Path) -> Vec<String> {
    vec!["-i".to_string(), path.display().to_string()]
}

pub fn metadata(key: &str, value: &str) -> Vec<String> {
    vec!["-metadata".to_string(), format!("{}={}", key, value)]
}
