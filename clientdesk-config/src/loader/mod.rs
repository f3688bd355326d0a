pub mod error;

use once_cell::sync::Lazy;
use std::{fs, path::PathBuf};
use tracing::debug;

use clientdesk_core::{
    persistence::StorageKeys,
    query::{ClientTab, SortField},
};

use self::error::ConfigLoadError;
use super::{
    models::{
        Config, ConfigMetadata, RecordsConfig, StorageBackend, StorageConfig, TableConfig,
        sources::{EnvConfig, FileConfig},
    },
    validation::{self, ConfigWarnings},
};

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("clientdesk.toml"),
        PathBuf::from("config/clientdesk.toml"),
    ]
});

#[derive(Debug, Default, Clone)]
struct LoaderOptions {
    config_path: Option<PathBuf>,
    env_file: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: LoaderOptions,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path)
                .map(|_| true)
                .or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?,
            None => dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                dotenvy::Error::Io(_) => Ok(false),
                _ => Err(err),
            })?,
        };

        let env_config = EnvConfig::gather();
        let (file_config, config_path) = self.load_file_config(&env_config)?;

        let (config, warnings) = compose_config(
            file_config,
            env_config,
            ConfigMetadata {
                config_path,
                env_file_loaded,
            },
        )?;

        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env_config: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let mut source = ConfigPathSource::default();

        if let Some(explicit) = &self.options.config_path {
            source.explicit = Some(explicit.clone());
        } else if let Some(from_env) = &env_config.config_path {
            source.env = Some(from_env.clone());
        }

        if source.is_empty() {
            source.default = DEFAULT_CONFIG_LOCATIONS
                .iter()
                .find(|candidate| candidate.exists())
                .cloned();
        }

        let Some((path, provenance)) = source.resolved_path() else {
            return Ok((None, None));
        };

        if !path.exists() {
            if provenance.is_explicit() {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            return Ok((None, None));
        }

        let contents = fs::read_to_string(&path).map_err(|err| ConfigLoadError::Io {
            path: path.clone(),
            source: err,
        })?;
        let file_config: FileConfig =
            toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
                path: path.clone(),
                source: err,
            })?;

        debug!("Loaded configuration from {}", path.display());
        Ok((Some(file_config), Some(path)))
    }
}

/// Merge file and environment values over the defaults and validate the
/// result. Environment values win over file values.
pub fn compose_config(
    file_config: Option<FileConfig>,
    env: EnvConfig,
    metadata: ConfigMetadata,
) -> Result<(Config, ConfigWarnings), ConfigLoadError> {
    let mut warnings = ConfigWarnings::default();

    if metadata.config_path.is_none() {
        warnings.push_with_hint(
            "No clientdesk.toml detected; using environment variables and defaults",
            "Create clientdesk.toml or pass --config to customise storage and the table",
        );
    }

    let FileConfig {
        storage: file_storage,
        records: file_records,
        table: file_table,
    } = file_config.unwrap_or_default();

    let backend = match env.storage_backend.or(file_storage.backend) {
        Some(raw) => raw
            .parse::<StorageBackend>()
            .map_err(|reason| ConfigLoadError::InvalidValue {
                setting: "storage.backend",
                value: raw.clone(),
                reason,
            })?,
        None => StorageBackend::default(),
    };

    let defaults = StorageKeys::default();
    let file_keys = file_storage.keys;
    let storage = StorageConfig {
        backend,
        path: env
            .storage_path
            .or(file_storage.path)
            .unwrap_or_else(|| StorageConfig::default().path),
        keys: StorageKeys {
            rule_set: file_keys.rule_set.unwrap_or(defaults.rule_set),
            sorted_records: file_keys.sorted_records.unwrap_or(defaults.sorted_records),
            legacy_rule_set: file_keys
                .legacy_rule_set
                .unwrap_or(defaults.legacy_rule_set),
        },
    };

    let records = RecordsConfig {
        source: env.records_path.or(file_records.source),
    };

    let default_tab = match env.default_tab.or(file_table.default_tab) {
        Some(raw) => raw
            .parse::<ClientTab>()
            .map_err(|err| ConfigLoadError::InvalidValue {
                setting: "table.default_tab",
                value: raw.clone(),
                reason: err.to_string(),
            })?,
        None => ClientTab::default(),
    };

    let offered_fields = match env.offered_fields.or(file_table.offered_fields) {
        Some(raw) => resolve_fields(&raw, &mut warnings)?,
        None => SortField::DEFAULT_OFFERED.to_vec(),
    };

    let config = Config {
        storage,
        records,
        table: TableConfig {
            default_tab,
            offered_fields,
        },
        metadata,
    };

    warnings.extend(validation::check_config(&config)?);
    Ok((config, warnings))
}

fn resolve_fields(
    raw: &[String],
    warnings: &mut ConfigWarnings,
) -> Result<Vec<SortField>, ConfigLoadError> {
    let mut fields = Vec::with_capacity(raw.len());
    for value in raw {
        let field = SortField::resolve(value).ok_or_else(|| ConfigLoadError::UnknownSortField {
            setting: "table.offered_fields",
            value: value.clone(),
        })?;
        if fields.contains(&field) {
            warnings.push(format!(
                "table.offered_fields lists '{}' more than once",
                field.key()
            ));
            continue;
        }
        fields.push(field);
    }
    Ok(fields)
}

#[derive(Debug, Default)]
struct ConfigPathSource {
    explicit: Option<PathBuf>,
    env: Option<PathBuf>,
    default: Option<PathBuf>,
}

impl ConfigPathSource {
    fn is_empty(&self) -> bool {
        self.explicit.is_none() && self.env.is_none() && self.default.is_none()
    }

    fn resolved_path(&self) -> Option<(PathBuf, ConfigPathProvenance)> {
        if let Some(path) = &self.explicit {
            return Some((path.clone(), ConfigPathProvenance::Explicit));
        }
        if let Some(path) = &self.env {
            return Some((path.clone(), ConfigPathProvenance::Env));
        }
        if let Some(path) = &self.default {
            return Some((path.clone(), ConfigPathProvenance::Default));
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigPathProvenance {
    Explicit,
    Env,
    Default,
}

impl ConfigPathProvenance {
    fn is_explicit(self) -> bool {
        matches!(
            self,
            ConfigPathProvenance::Explicit | ConfigPathProvenance::Env
        )
    }
}
