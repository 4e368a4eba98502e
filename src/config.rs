// src/config.rs

use directories::ProjectDirs;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

fn default_output() -> String {
  "trigonal_distortion.txt".to_string()
}

fn default_true() -> bool {
  true
}

// --- Main Config Struct ---

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
  /// Report path used when no positional argument is given
  #[serde(default = "default_output")]
  pub default_output: String,

  /// Echo the report to stdout in addition to writing the file
  #[serde(default = "default_true")]
  pub echo_report: bool,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      default_output: default_output(),
      echo_report: true,
    }
  }
}

impl Config {
  /// Loads config from the standard OS location (e.g. ~/.config/odist/settings.json),
  /// falling back to defaults when the file is absent or malformed.
  pub fn load() -> Self {
    let path = Self::get_path();
    if path.exists() {
      match File::open(&path) {
        Ok(file) => {
          let reader = BufReader::new(file);
          match serde_json::from_reader(reader) {
            Ok(cfg) => {
              debug!("Config loaded from {:?}", path);
              cfg
            }
            Err(e) => {
              warn!("Error parsing config ({}). Using defaults.", e);
              Self::default()
            }
          }
        }
        Err(e) => {
          warn!("Error opening config ({}). Using defaults.", e);
          Self::default()
        }
      }
    } else {
      debug!("No config found. Writing defaults to {:?}", path);
      let cfg = Self::default();
      if let Err(e) = cfg.save() {
        warn!("Could not write default config: {}", e);
      }
      cfg
    }
  }

  /// Saves config to the standard OS location
  pub fn save(&self) -> std::io::Result<()> {
    let path = Self::get_path();
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }

    let file = File::create(&path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, self)
      .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    debug!("Config saved to {:?}", path);
    Ok(())
  }

  fn get_path() -> PathBuf {
    if let Some(proj) = ProjectDirs::from("com", "example", "odist") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}
