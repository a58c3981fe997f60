use std::fs::{copy, create_dir_all};

use anyhow::Result;
use wdr_common::config::ConfigStore;
use wdr_core::{CONFIG_FILENAME, model::config::ReminderConfig};

use crate::util::{repository_dir, run_command_in_repository};

const BINARY_NAME: &str = "water-reminder";
const DEV_CONFIG_PATH: &str = "data/config.json";

pub fn init_config() -> Result<()> {
    let data_dir = repository_dir()?.join("data");
    create_dir_all(&data_dir)?;

    let store = ConfigStore::new(data_dir.join(CONFIG_FILENAME));
    if store.path().exists() {
        // 既存のファイルが壊れていれば気付けるようにする
        store.load_strict()?;
        println!("{} already exists", store.path().display());
        return Ok(());
    }
    store.try_save(&ReminderConfig::default())?;
    println!("wrote {}", store.path().display());
    Ok(())
}

pub fn dist() -> Result<()> {
    run_command_in_repository("cargo", &["build", "--release", "--bin", BINARY_NAME])?;

    let repository = repository_dir()?;
    let dist_dir = repository.join("dist");
    create_dir_all(&dist_dir)?;

    let binary_filename = format!("{BINARY_NAME}{}", std::env::consts::EXE_SUFFIX);
    copy(
        repository.join("target").join("release").join(&binary_filename),
        dist_dir.join(&binary_filename),
    )?;

    ConfigStore::new(dist_dir.join(CONFIG_FILENAME)).try_save(&ReminderConfig::default())?;
    println!("packaged into {}", dist_dir.display());
    Ok(())
}

pub fn development() -> Result<()> {
    init_config()?;
    run_command_in_repository(
        "cargo",
        &["run", "--bin", BINARY_NAME, "--", "-c", DEV_CONFIG_PATH],
    )?;
    Ok(())
}
