#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::path;
use std::time;

use anyhow::bail;
use anyhow::Result;
use clap::ArgMatches;
use clap::Command;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use tokio::fs;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ConfigFile,
    Executable,
    LogFile,
    LogLevel,
    TickRate,
}

pub struct Config {}

fn app_dir(base: Option<path::PathBuf>) -> path::PathBuf {
    return base.unwrap_or_else(|| return path::PathBuf::from(".")).join("elmos");
}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        let res = match key {
            ConfigKey::Executable => "elmos".to_string(),
            ConfigKey::LogLevel => "info".to_string(),
            ConfigKey::TickRate => "120".to_string(),

            // Special
            ConfigKey::ConfigFile => app_dir(dirs::config_dir())
                .join("console.toml")
                .to_string_lossy()
                .to_string(),
            ConfigKey::LogFile => app_dir(dirs::cache_dir())
                .join("console.log")
                .to_string_lossy()
                .to_string(),
        };

        return res;
    }

    /// Spinner tick interval, falling back to the default when unset.
    pub fn tick_rate() -> time::Duration {
        let millis = Config::get(ConfigKey::TickRate)
            .parse::<u64>()
            .unwrap_or(120);
        return time::Duration::from_millis(millis.max(1));
    }

    pub async fn load(cmd: Command, clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key))
        }

        let mut config_file = Config::default(ConfigKey::ConfigFile);
        for matches in clap_arg_matches.as_slice() {
            if let Ok(Some(arg_config_file)) =
                matches.try_get_one::<String>(&ConfigKey::ConfigFile.to_string())
            {
                config_file = arg_config_file.to_string();
            }
        }

        let config_path = path::PathBuf::from(&config_file);
        if config_path.exists() {
            let toml_str = fs::read_to_string(&config_path).await?;
            let doc = toml_str.parse::<toml_edit::Document>()?;

            for key in ConfigKey::iter() {
                let val = match doc.get(&key.to_string()) {
                    Some(val) => val,
                    None => continue,
                };

                // Use clap value parsers to do validation.
                let mut possible_values = vec![];
                if let Some(arg) = cmd
                    .get_arguments()
                    .find(|e| return e.get_long() == Some(key.to_string().as_str()))
                {
                    possible_values = arg
                        .get_possible_values()
                        .iter()
                        .map(|e| return e.get_name().to_string())
                        .collect::<Vec<String>>();
                }

                if let Some(val_int) = val.as_integer() {
                    Config::set(key, &val_int.to_string());
                } else if let Some(val_str) = val.as_str() {
                    if val_str.is_empty() {
                        continue;
                    }
                    if !possible_values.is_empty()
                        && !possible_values.contains(&val_str.to_string())
                    {
                        bail!(format!(
                            "{config_file} has an invalid value for key '{key}': {val_str}\nPossible values are: {}",
                            possible_values.join(", ")
                        ));
                    }
                    Config::set(key, val_str);
                } else {
                    bail!(format!("{config_file} has an unsupported value for key '{key}'"));
                }
            }
        }

        for key in ConfigKey::iter() {
            for matches in clap_arg_matches.as_slice() {
                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    Config::set(key, val)
                }
            }
        }

        let tick_rate = Config::get(ConfigKey::TickRate);
        if !matches!(tick_rate.parse::<u64>(), Ok(millis) if millis > 0) {
            bail!(format!(
                "{config_file} has an invalid value for key '{}': {tick_rate}",
                ConfigKey::TickRate
            ));
        }

        if Config::get(ConfigKey::Executable).trim().is_empty() {
            bail!(format!(
                "{config_file} has an empty value for key '{}'",
                ConfigKey::Executable
            ));
        }

        tracing::debug!(
            config_file = config_file,
            executable = Config::get(ConfigKey::Executable),
            log_file = Config::get(ConfigKey::LogFile),
            log_level = Config::get(ConfigKey::LogLevel),
            tick_rate = tick_rate,
            "config"
        );

        return Ok(());
    }

    pub fn serialize_default(cmd: Command) -> String {
        let toml_str = ConfigKey::iter()
            .filter_map(|key| {
                if key == ConfigKey::ConfigFile {
                    return None;
                }

                let arg = cmd
                    .get_arguments()
                    .find(|e| return e.get_long() == Some(key.to_string().as_str()))?;

                let mut description = arg
                    .get_help()
                    .map(|e| return e.to_string())
                    .unwrap_or_default();

                description = description
                    .split("[default:")
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();

                if !arg.get_possible_values().is_empty() {
                    let possible_values = arg
                        .get_possible_values()
                        .iter()
                        .map(|e| return e.get_name().to_string())
                        .collect::<Vec<_>>()
                        .join(", ");
                    description = format!("{description} [possible values: {possible_values}]");
                }

                let mut val = Config::default(key);
                if val.is_empty() {
                    val = format!("# {key} = \"\"");
                } else if val.parse::<i64>().is_ok() {
                    val = format!("{key} = {val}");
                } else {
                    val = format!("{key} = \"{}\"", val.replace('\\', "\\\\"));
                }

                return Some(format!("# {description}\n{val}"));
            })
            .collect::<Vec<String>>()
            .join("\n\n");

        return toml_str;
    }
}
