use super::diagnostics::Reporter;
use super::global::GlobalArgs;
use base_pack::{Dictionary, DictionaryRegistry};
use std::path::PathBuf;

/// Input limit when neither the flag nor the settings give one.
const DEFAULT_MAX_SIZE: usize = 100 * 1024 * 1024;

/// Loads the registry, applying settings overrides and `--config`.
pub fn load_registry(
    global: &GlobalArgs,
    reporter: &Reporter,
) -> Result<DictionaryRegistry, Box<dyn std::error::Error>> {
    let explicit = global
        .config
        .as_deref()
        .map(|path| PathBuf::from(shellexpand::tilde(path).as_ref()));

    let (config, warnings) = DictionaryRegistry::load_with_overrides(explicit.as_deref())?;
    for warning in &warnings {
        reporter.warn(warning);
    }

    Ok(config)
}

/// Builds the named dictionary, or the configured default.
pub fn create_dictionary(
    config: &DictionaryRegistry,
    name: Option<&str>,
) -> Result<Dictionary, Box<dyn std::error::Error>> {
    let name = name.unwrap_or_else(|| config.default_dictionary());
    config.build(name)
}

/// Effective input limit in bytes; 0 means unlimited.
pub fn max_size(global: &GlobalArgs, config: &DictionaryRegistry) -> usize {
    global
        .max_size
        .or(config.settings.max_size)
        .unwrap_or(DEFAULT_MAX_SIZE)
}
