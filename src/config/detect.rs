use crate::HorizonParams;
use serde::Deserialize;
use std::path::PathBuf;

/// Configuration of the `horizon_demo` tool.
#[derive(Clone, Debug, Deserialize)]
pub struct HorizonToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub params: HorizonParams,
    #[serde(default)]
    pub output: DetectOutputConfig,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct DetectOutputConfig {
    pub format: OutputFormat,
    /// Where to write the JSON document; stdout when absent.
    pub json_out: Option<PathBuf>,
    /// Write the full diagnostics report instead of the compact result.
    pub include_diagnostics: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Both,
}

impl OutputFormat {
    pub fn includes_text(self) -> bool {
        matches!(self, OutputFormat::Text | OutputFormat::Both)
    }

    pub fn includes_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SampleRange;

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg: HorizonToolConfig = serde_json::from_str(r#"{ "input": "sky.png" }"#).unwrap();
        assert_eq!(cfg.input, PathBuf::from("sky.png"));
        assert_eq!(cfg.params, HorizonParams::default());
        assert_eq!(cfg.output.format, OutputFormat::Text);
        assert!(cfg.output.json_out.is_none());
    }

    #[test]
    fn nested_overrides_are_applied() {
        let cfg: HorizonToolConfig = serde_json::from_str(
            r#"{
                "input": "sky.png",
                "params": { "fine": { "reduction": 0.5 }, "coarse": { "distances": [10, 91, 10] } },
                "output": { "format": "both", "json_out": "out/result.json", "include_diagnostics": true }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.params.fine.reduction, 0.5);
        assert_eq!(cfg.params.fine.buffer_half_width, 3.0);
        assert_eq!(cfg.params.coarse.distances, SampleRange::new(10, 91, 10));
        assert!(cfg.output.format.includes_text() && cfg.output.format.includes_json());
        assert!(cfg.output.include_diagnostics);
    }
}
