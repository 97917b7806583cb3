use anyhow::Result;

mod cmds;
mod ffmpeg;
mod fixtures;

fn main() -> Result<()> {
    cmds::handle_commands()
}
