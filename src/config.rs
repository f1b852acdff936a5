use serde::{Deserialize, Serialize};

/// Tunable detector inputs. Severity weights, tier boundaries, and
/// decision thresholds are part of the engine's scoring contract and are
/// deliberately not configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// IP prefixes treated as high-risk origins. Matched as plain string
    /// prefixes against the guest IP.
    pub high_risk_ip_prefixes: Vec<String>,
    /// Email domains of disposable-address providers.
    pub disposable_email_domains: Vec<String>,
    /// Regex patterns that mark an automated or spoofed device
    /// fingerprint. Compiled once when the engine is built.
    pub device_marker_patterns: Vec<String>,
    /// Fingerprints shorter than this are considered degenerate.
    pub min_fingerprint_length: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            // TODO: swap the private/loopback ranges for a proxy/VPN
            // reputation feed. These prefixes reproduce the list this
            // engine inherited; they never appear as client addresses on
            // the public internet.
            high_risk_ip_prefixes: vec![
                "10.0.".to_string(),
                "192.168.".to_string(),
                "172.16.".to_string(),
                "127.0.".to_string(),
            ],
            disposable_email_domains: vec![
                "mailinator.com".to_string(),
                "guerrillamail.com".to_string(),
                "10minutemail.com".to_string(),
                "tempmail.com".to_string(),
                "throwaway.email".to_string(),
                "yopmail.com".to_string(),
                "trashmail.com".to_string(),
                "getnada.com".to_string(),
            ],
            device_marker_patterns: vec![
                "emulator".to_string(),
                "headless".to_string(),
                "selenium".to_string(),
                "bot".to_string(),
            ],
            min_fingerprint_length: 10,
        }
    }
}

impl EngineConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: EngineConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn to_file(&self, path: &str) -> anyhow::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_carries_documented_lists() {
        let config = EngineConfig::default();
        assert!(config.high_risk_ip_prefixes.contains(&"10.0.".to_string()));
        assert!(config.high_risk_ip_prefixes.contains(&"192.168.".to_string()));
        assert!(config
            .disposable_email_domains
            .contains(&"mailinator.com".to_string()));
        assert_eq!(config.min_fingerprint_length, 10);
    }

    #[test]
    fn yaml_round_trip() {
        let config = EngineConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: EngineConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.high_risk_ip_prefixes, config.high_risk_ip_prefixes);
        assert_eq!(back.device_marker_patterns, config.device_marker_patterns);
    }

    #[test]
    fn partial_yaml_falls_back_to_defaults() {
        let yaml = "high_risk_ip_prefixes:\n  - \"203.0.113.\"\n";
        let config: EngineConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.high_risk_ip_prefixes, vec!["203.0.113.".to_string()]);
        // Unspecified fields keep their defaults.
        assert_eq!(config.min_fingerprint_length, 10);
        assert!(!config.disposable_email_domains.is_empty());
    }
}
