//! SARIF (Static Analysis Results Interchange Format) formatter.
//!
//! SARIF is a standard format for static analysis tool output,
//! supported by GitHub, VS Code, and other tools.

use super::Formatter;
use anyhow::Result;
use klint_core::{RunResult, Severity};
use serde::Serialize;
use std::collections::HashSet;
use std::io::Write;

/// SARIF 2.1.0 rendering of the run result.
pub struct SarifFormatter;

impl Formatter for SarifFormatter {
    fn render(&self, result: &RunResult, out: &mut dyn Write) -> Result<()> {
        let output = SarifOutput::from(result);
        serde_json::to_writer_pretty(&mut *out, &output)?;
        writeln!(out)?;
        Ok(())
    }
}

#[derive(Serialize)]
struct SarifOutput {
    #[serde(rename = "$schema")]
    schema: String,
    version: String,
    runs: Vec<SarifRun>,
}

#[derive(Serialize)]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Serialize)]
struct SarifDriver {
    name: String,
    version: String,
    #[serde(rename = "informationUri")]
    information_uri: String,
    rules: Vec<SarifRule>,
}

#[derive(Serialize)]
struct SarifRule {
    id: String,
    name: String,
    #[serde(rename = "shortDescription")]
    short_description: SarifMessage,
    #[serde(rename = "defaultConfiguration")]
    default_configuration: SarifConfiguration,
}

#[derive(Serialize)]
struct SarifConfiguration {
    level: String,
}

#[derive(Serialize)]
struct SarifResult {
    #[serde(rename = "ruleId")]
    rule_id: String,
    level: String,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
}

#[derive(Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Serialize)]
struct SarifLocation {
    #[serde(rename = "physicalLocation")]
    physical_location: SarifPhysicalLocation,
}

#[derive(Serialize)]
struct SarifPhysicalLocation {
    #[serde(rename = "artifactLocation")]
    artifact_location: SarifArtifactLocation,
}

#[derive(Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

impl From<&RunResult> for SarifOutput {
    fn from(result: &RunResult) -> Self {
        let mut rules: Vec<SarifRule> = Vec::new();
        let mut seen_rules = HashSet::new();

        for report in &result.reports {
            if seen_rules.insert(report.check.clone()) {
                rules.push(SarifRule {
                    id: report.check.clone(),
                    name: report.check.clone(),
                    short_description: SarifMessage {
                        text: report.message.clone(),
                    },
                    default_configuration: SarifConfiguration {
                        level: severity_to_sarif_level(report.severity),
                    },
                });
            }
        }

        let results: Vec<SarifResult> = result
            .reports
            .iter()
            .map(|r| SarifResult {
                rule_id: r.check.clone(),
                level: severity_to_sarif_level(r.severity),
                message: SarifMessage {
                    text: format!(
                        "{} ({}/{}): {}",
                        r.check, r.object.kind, r.object.name, r.message
                    ),
                },
                locations: vec![SarifLocation {
                    physical_location: SarifPhysicalLocation {
                        artifact_location: SarifArtifactLocation {
                            uri: r.object.file_path.display().to_string(),
                        },
                    },
                }],
            })
            .collect();

        Self {
            schema: "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json".to_string(),
            version: "2.1.0".to_string(),
            runs: vec![SarifRun {
                tool: SarifTool {
                    driver: SarifDriver {
                        name: "klint".to_string(),
                        version: result.summary.klint_version.clone(),
                        information_uri: "https://github.com/klint-dev/klint".to_string(),
                        rules,
                    },
                },
                results,
            }],
        }
    }
}

fn severity_to_sarif_level(severity: Severity) -> String {
    match severity {
        Severity::Error => "error".to_string(),
        Severity::Warning => "warning".to_string(),
        Severity::Info => "note".to_string(),
    }
}
