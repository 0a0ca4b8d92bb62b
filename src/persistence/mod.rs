use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    Deserialize,
    Serialize,
};
use tracing::{
    info,
    warn,
};

use crate::core::VerbDeckError;

const APP_NAME: &str = "verbdeck";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), VerbDeckError> {
    save_json_to(data, &get_data_file_path(filename))
}

pub fn save_json_to<T: Serialize>(data: &T, file_path: &Path) -> Result<(), VerbDeckError> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(file_path, json)?;
    info!(path = %file_path.display(), "data saved");
    Ok(())
}

pub fn load_json_from<T: for<'de> Deserialize<'de> + Default>(
    file_path: &Path,
) -> Result<T, VerbDeckError> {
    if !file_path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(file_path)?;
    let data: T = serde_json::from_str(&json)?;
    info!(path = %file_path.display(), "data loaded");
    Ok(data)
}

pub fn load_json_or_default<T: for<'de> Deserialize<'de> + Default>(filename: &str) -> T {
    let file_path = get_data_file_path(filename);
    match load_json_from::<T>(&file_path) {
        Ok(data) => data,
        Err(e) => {
            warn!(file = filename, error = %e, "failed to load, using defaults");
            T::default()
        }
    }
}
