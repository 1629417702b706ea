use serde::Deserialize;

/// Output-preference configuration. Scoring constants are deliberately not
/// configurable; the formula is fixed in the engine.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<OutputFormatPref>,
    pub color: Option<ColorMode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormatPref {
    Text,
    Json,
    Md,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl CliConfig {
    /// Key-by-key overlay: `local` wins wherever it sets a value.
    pub fn overlay(global: CliConfig, local: CliConfig) -> CliConfig {
        CliConfig {
            output: OutputConfig {
                format: local.output.format.or(global.output.format),
                color: local.output.color.or(global.output.color),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let toml_str = r#"
[output]
format = "json"
"#;
        let cfg: CliConfig = toml::from_str(toml_str).expect("minimal config should parse");
        assert_eq!(cfg.output.format, Some(OutputFormatPref::Json));
        assert_eq!(cfg.output.color, None);
    }

    #[test]
    fn parse_rejects_unknown_keys() {
        let toml_str = r#"
[output]
format = "json"

[scoring]
base = 800
"#;
        assert!(toml::from_str::<CliConfig>(toml_str).is_err());
    }

    #[test]
    fn overlay_prefers_local_values() {
        let global: CliConfig = toml::from_str(
            r#"
[output]
format = "md"
color = "never"
"#,
        )
        .expect("global config should parse");
        let local: CliConfig = toml::from_str(
            r#"
[output]
format = "json"
"#,
        )
        .expect("local config should parse");

        let merged = CliConfig::overlay(global, local);
        assert_eq!(merged.output.format, Some(OutputFormatPref::Json));
        assert_eq!(merged.output.color, Some(ColorMode::Never));
    }
}
