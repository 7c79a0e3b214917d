//! Read-only extraction of the connection settings from a server config.

use std::fmt::Write;

use serde::Serialize;

use crate::line::{ConfigLine, classify, split_key_value, strip_trailing_comment};
use crate::section::{Section, SectionTracker};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MongodSettings {
    pub port: Option<String>,
    pub bind_ip: Option<String>,
    pub certificate_key_file: Option<String>,
    pub db_path: Option<String>,
    /// `systemLog.path`.
    pub log_path: Option<String>,
    #[serde(rename = "tlsUseSystemCA")]
    pub tls_use_system_ca: Option<String>,
}

impl MongodSettings {
    /// Extract settings; the first occurrence of each key wins.
    #[must_use]
    pub fn extract(lines: &[ConfigLine]) -> Self {
        let mut settings = Self::default();
        let mut tracker = SectionTracker::new();

        for line in lines {
            let cleaned = ConfigLine::new(strip_trailing_comment(&line.text), line.ending);
            let class = classify(&cleaned);
            tracker.advance(&class);

            let Some((key, value)) = split_key_value(class.trimmed) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }

            let slot = match key {
                "port" => &mut settings.port,
                "bindIp" => &mut settings.bind_ip,
                "certificateKeyFile" => &mut settings.certificate_key_file,
                "dbPath" => &mut settings.db_path,
                "tlsUseSystemCA" => &mut settings.tls_use_system_ca,
                "path" if tracker.context().is_active(Section::SystemLog) => {
                    &mut settings.log_path
                }
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.to_string());
            }
        }

        settings
    }

    #[must_use]
    pub fn extract_str(source: &str) -> Self {
        Self::extract(&ConfigLine::parse_all(source))
    }

    /// Required keys that were not found.
    #[must_use]
    pub fn missing_required(&self) -> Vec<&'static str> {
        [
            ("bindIp", &self.bind_ip),
            ("port", &self.port),
            ("certificateKeyFile", &self.certificate_key_file),
            ("dbPath", &self.db_path),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(key, _)| key)
        .collect()
    }

    #[must_use]
    pub fn format_text(&self) -> String {
        let mut output = String::new();
        for (key, value) in [
            ("port", &self.port),
            ("bindIp", &self.bind_ip),
            ("certificateKeyFile", &self.certificate_key_file),
            ("dbPath", &self.db_path),
            ("systemLog.path", &self.log_path),
            ("tlsUseSystemCA", &self.tls_use_system_ca),
        ] {
            let _ = writeln!(
                output,
                "{key:<20} {}",
                value.as_deref().unwrap_or("<not set>")
            );
        }
        output
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
