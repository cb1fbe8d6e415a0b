//! Attack roster loading

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Container for the attack name list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackRoster {
    pub attacks: Vec<String>,
}

/// Parse an attack roster from a TOML string
pub fn parse_attack_roster(content: &str) -> Result<Vec<String>, ConfigError> {
    let roster: AttackRoster = super::parse_toml(content)?;
    let names: Vec<String> = roster
        .attacks
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();

    if names.is_empty() {
        return Err(ConfigError::ValidationError(
            "attack roster is empty".to_string(),
        ));
    }
    Ok(names)
}

/// Get the built-in attack roster
pub fn default_attack_names() -> Vec<String> {
    let toml = include_str!("../../config/attacks.toml");
    parse_attack_roster(toml).unwrap_or_else(|err| {
        tracing::warn!("built-in attack roster failed to load: {err}");
        vec!["Straight Jab".to_string()]
    })
}
