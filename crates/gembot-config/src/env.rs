//! Environment-sourced credentials and `.env` loading.

use std::path::Path;

use crate::schema::BotConfig;

/// API key variables, checked in order.
pub const API_KEY_VARS: [&str; 2] = ["GOOGLE_API_KEY", "GEMINI_API_KEY"];
pub const EMAIL_ADDRESS_VAR: &str = "EMAIL_ADDRESS";
pub const EMAIL_PASSWORD_VAR: &str = "EMAIL_PASSWORD";

/// Parse `KEY=VALUE` lines, skipping blanks and `#` comments. Surrounding
/// quotes on the value are stripped.
pub fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            let value = value.trim().trim_matches('"').trim_matches('\'');
            pairs.push((key.to_string(), value.to_string()));
        }
    }
    pairs
}

/// Load variables from a `.env` file into the process environment.
/// Variables that are already set win. Returns how many were set.
pub fn load_dotenv(path: &Path) -> usize {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return 0;
    };

    let mut count = 0;
    for (key, value) in parse_dotenv(&contents) {
        if std::env::var(&key).is_err() {
            std::env::set_var(&key, value);
            count += 1;
        }
    }
    count
}

/// Fill credential fields from `lookup`. Empty values count as unset.
pub fn apply_env(config: &mut BotConfig, lookup: impl Fn(&str) -> Option<String>) {
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(key) = API_KEY_VARS.iter().find_map(|&var| get(var)) {
        config.gemini.api_key = Some(key);
    }
    if let Some(sender) = get(EMAIL_ADDRESS_VAR) {
        config.smtp.sender = Some(sender);
    }
    if let Some(password) = get(EMAIL_PASSWORD_VAR) {
        config.smtp.password = Some(password);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn parse_dotenv_handles_comments_and_quotes() {
        let pairs = parse_dotenv(
            "# credentials\n\nGOOGLE_API_KEY=\"AIza123\"\nEMAIL_ADDRESS='bot@example.com'\nexport EMAIL_PASSWORD = pw\nnot a pair\n=orphan\n",
        );
        assert_eq!(
            pairs,
            vec![
                ("GOOGLE_API_KEY".to_string(), "AIza123".to_string()),
                ("EMAIL_ADDRESS".to_string(), "bot@example.com".to_string()),
                ("EMAIL_PASSWORD".to_string(), "pw".to_string()),
            ]
        );
    }

    #[test]
    fn load_dotenv_missing_file_sets_nothing() {
        assert_eq!(load_dotenv(Path::new("/tmp/gembot_no_such_dotenv")), 0);
    }

    #[test]
    fn load_dotenv_does_not_override_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(
            &path,
            "GEMBOT_TEST_DOTENV_NEW=from-file\nGEMBOT_TEST_DOTENV_SET=from-file\n",
        )
        .unwrap();
        std::env::set_var("GEMBOT_TEST_DOTENV_SET", "from-env");

        assert_eq!(load_dotenv(&path), 1);
        assert_eq!(std::env::var("GEMBOT_TEST_DOTENV_NEW").unwrap(), "from-file");
        assert_eq!(std::env::var("GEMBOT_TEST_DOTENV_SET").unwrap(), "from-env");
    }

    #[test]
    fn apply_env_fills_credentials() {
        let mut config = BotConfig::default();
        apply_env(
            &mut config,
            lookup_from(&[
                ("GOOGLE_API_KEY", "AIza-google"),
                ("EMAIL_ADDRESS", "bot@example.com"),
                ("EMAIL_PASSWORD", "app-password"),
            ]),
        );
        assert_eq!(config.gemini.api_key.as_deref(), Some("AIza-google"));
        assert_eq!(config.smtp.sender.as_deref(), Some("bot@example.com"));
        assert_eq!(config.smtp.password.as_deref(), Some("app-password"));
    }

    #[test]
    fn apply_env_falls_back_to_gemini_key() {
        let mut config = BotConfig::default();
        apply_env(
            &mut config,
            lookup_from(&[("GOOGLE_API_KEY", ""), ("GEMINI_API_KEY", "AIza-gemini")]),
        );
        assert_eq!(config.gemini.api_key.as_deref(), Some("AIza-gemini"));
    }

    #[test]
    fn apply_env_leaves_missing_unset() {
        let mut config = BotConfig::default();
        apply_env(&mut config, lookup_from(&[]));
        assert!(config.gemini.api_key.is_none());
        assert!(config.smtp.credentials().is_none());
    }
}
