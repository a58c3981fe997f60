use std::{
    env::var,
    path::PathBuf,
    process::{Command, exit},
};

use anyhow::{Result, anyhow};

pub fn run_command_in_repository(command: &str, args: &[&str]) -> Result<()> {
    let mut process = Command::new(command)
        .args(args)
        .current_dir(repository_dir()?)
        .spawn()?;

    let exit_status = process.wait()?;
    if !exit_status.success() {
        exit(exit_status.code().unwrap_or(1));
    }
    Ok(())
}

pub fn repository_dir() -> Result<PathBuf> {
    let manifest_dir = PathBuf::from(var("CARGO_MANIFEST_DIR")?);
    let repository = manifest_dir
        .parent()
        .ok_or_else(|| anyhow!("xtask should live in the workspace"))?;
    Ok(repository.to_owned())
}
