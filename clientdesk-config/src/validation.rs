use super::loader::error::ConfigLoadError;
use super::models::{Config, StorageBackend};

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(&mut self, message: S, hint: H) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConfigWarning> {
        self.items.iter()
    }
}

/// Reject configurations the table cannot run with and collect warnings for
/// the ones that merely look wrong.
pub fn check_config(config: &Config) -> Result<ConfigWarnings, ConfigLoadError> {
    let mut warnings = ConfigWarnings::default();
    let keys = &config.storage.keys;

    for (setting, value) in [
        ("storage.keys.rule_set", &keys.rule_set),
        ("storage.keys.sorted_records", &keys.sorted_records),
        ("storage.keys.legacy_rule_set", &keys.legacy_rule_set),
    ] {
        if value.trim().is_empty() {
            return Err(ConfigLoadError::InvalidValue {
                setting,
                value: value.clone(),
                reason: "storage keys must not be empty".into(),
            });
        }
    }

    if keys.rule_set == keys.sorted_records {
        return Err(ConfigLoadError::InvalidValue {
            setting: "storage.keys.sorted_records",
            value: keys.sorted_records.clone(),
            reason: "must differ from storage.keys.rule_set".into(),
        });
    }

    if keys.legacy_rule_set == keys.sorted_records {
        return Err(ConfigLoadError::InvalidValue {
            setting: "storage.keys.legacy_rule_set",
            value: keys.legacy_rule_set.clone(),
            reason: "must differ from storage.keys.sorted_records".into(),
        });
    }

    if config.storage.backend == StorageBackend::Memory {
        warnings.push_with_hint(
            "Memory storage selected; applied sorts are lost when the process exits",
            "Set storage.backend = \"file\" or CLIENTDESK_STORAGE_BACKEND=file to keep them",
        );
    }

    if config.table.offered_fields.is_empty() {
        warnings.push_with_hint(
            "table.offered_fields is empty; the sort panel has nothing to add",
            "List field keys such as \"name\" or \"createdAt\"",
        );
    }

    if let Some(source) = &config.records.source
        && !source.exists()
    {
        warnings.push(format!(
            "Record source {} does not exist yet",
            source.display()
        ));
    }

    Ok(warnings)
}
