//! Parameter files.
//!
//! Both formats are validated on load and before save, so a file on disk
//! always describes a computable parameter set.

use crate::error::ConfigResult;
use crate::params::InputParameters;
use std::path::Path;

pub fn load_yaml(path: &Path) -> ConfigResult<InputParameters> {
    let content = std::fs::read_to_string(path)?;
    let params: InputParameters = serde_yaml::from_str(&content)?;
    params.validate()?;
    tracing::debug!(path = %path.display(), "loaded parameters");
    Ok(params)
}

pub fn save_yaml(path: &Path, params: &InputParameters) -> ConfigResult<()> {
    params.validate()?;
    let content = serde_yaml::to_string(params)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ConfigResult<InputParameters> {
    let content = std::fs::read_to_string(path)?;
    let params: InputParameters = serde_json::from_str(&content)?;
    params.validate()?;
    tracing::debug!(path = %path.display(), "loaded parameters");
    Ok(params)
}

pub fn save_json(path: &Path, params: &InputParameters) -> ConfigResult<()> {
    params.validate()?;
    let content = serde_json::to_string_pretty(params)?;
    std::fs::write(path, content)?;
    Ok(())
}
