use serde::{Deserialize, Serialize};

// Configuration abstracts runtime options for the catalog service.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub(crate) struct Configuration {
    pub bind_address: String,
    pub provider_base_url: String,
    pub provider_timeout_secs: u64,
    pub seed_sample_data: bool,
}

impl Configuration {
    pub fn new(provider_base_url: &str) -> Self {
        Configuration {
            bind_address: "0.0.0.0:8080".to_string(),
            provider_base_url: provider_base_url.to_string(),
            provider_timeout_secs: 10,
            seed_sample_data: true,
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new("https://openlibrary.org")
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::default();
        assert_eq!("https://openlibrary.org", config.provider_base_url.as_str());
        assert_eq!("0.0.0.0:8080", config.bind_address.as_str());
        assert_eq!(10, config.provider_timeout_secs);
        assert!(config.seed_sample_data);
    }
}
