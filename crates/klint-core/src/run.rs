//! The lint execution engine.

use crate::context::LintContext;
use crate::registry::CheckRegistry;
use crate::types::{ObjectRef, Report, RunResult, Summary};
use thiserror::Error;
use tracing::debug;

/// Engine errors. Any of these aborts the run with no partial result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RunError {
    /// An enabled check name is absent from the registry. The resolver
    /// validates names up front, so hitting this means the caller built
    /// an inconsistent registry/enabled pair.
    #[error("enabled check not found in registry: {0}")]
    CheckNotFound(String),
}

/// Runs every enabled check against every valid object in the contexts.
///
/// Reports inherit severity and remediation from the check spec unless
/// the diagnostic carries its own remediation. Objects annotated with
/// the ignore pragma for a check skip that check only. The returned
/// reports are sorted by (file path, object name, check name).
///
/// # Errors
///
/// Returns [`RunError::CheckNotFound`] when `enabled_checks` names a
/// check the registry does not contain.
pub fn run(
    contexts: &[LintContext],
    registry: &CheckRegistry,
    enabled_checks: &[String],
) -> Result<RunResult, RunError> {
    let mut reports = Vec::new();
    let mut objects_analyzed = 0;

    for name in enabled_checks {
        let check = registry
            .get(name)
            .ok_or_else(|| RunError::CheckNotFound(name.clone()))?;

        for ctx in contexts {
            for object in ctx.objects() {
                if !check.spec.scope.object_kinds.matches(object.kind()) {
                    continue;
                }
                if object.is_check_ignored(name) {
                    debug!(
                        "check {} ignored on object {} via annotation",
                        name,
                        object.name()
                    );
                    continue;
                }

                for diagnostic in (check.func)(object) {
                    let remediation = diagnostic
                        .remediation
                        .unwrap_or_else(|| check.spec.remediation.clone());
                    reports.push(Report {
                        object: ObjectRef {
                            file_path: object.metadata().file_path.clone(),
                            name: object.name().to_string(),
                            kind: object.kind_name().to_string(),
                            namespace: object.namespace().map(String::from),
                        },
                        check: name.clone(),
                        severity: check.spec.severity,
                        message: diagnostic.message,
                        remediation,
                    });
                }
            }
        }
    }

    for ctx in contexts {
        objects_analyzed += ctx.objects().len();
    }

    reports.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

    Ok(RunResult {
        reports,
        summary: Summary {
            klint_version: env!("CARGO_PKG_VERSION").to_string(),
            objects_analyzed,
            checks_run: enabled_checks.len(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{CheckScope, CheckSpec};
    use crate::object::{KubeObject, ObjectMetadata};
    use crate::registry::CheckOrigin;
    use crate::types::{Diagnostic, Severity};

    fn object(file: &str, yaml: &str) -> KubeObject {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml).unwrap();
        KubeObject::from_value(value, ObjectMetadata::from_file(file)).unwrap()
    }

    fn context_with(objects: Vec<KubeObject>) -> LintContext {
        let mut ctx = LintContext::new();
        for obj in objects {
            ctx.add_object(obj);
        }
        ctx
    }

    fn always_fires(message: &str) -> crate::check::CheckFunc {
        let message = message.to_string();
        Box::new(move |_| vec![Diagnostic::new(message.clone())])
    }

    const DEPLOYMENT: &str = "apiVersion: apps/v1\nkind: Deployment\nmetadata:\n  name: web\n  namespace: prod\n";
    const SERVICE: &str = "apiVersion: v1\nkind: Service\nmetadata:\n  name: svc\n";

    #[test]
    fn reports_carry_object_and_check_metadata() {
        let mut registry = CheckRegistry::new();
        registry
            .register(
                CheckSpec::new("fires", "always fires", "do the thing", "test")
                    .with_severity(Severity::Error),
                always_fires("found a problem"),
                CheckOrigin::Builtin { default: true },
            )
            .unwrap();

        let contexts = vec![context_with(vec![object("web.yaml", DEPLOYMENT)])];
        let result = run(&contexts, &registry, &["fires".to_string()]).unwrap();

        assert_eq!(result.reports.len(), 1);
        let report = &result.reports[0];
        assert_eq!(report.check, "fires");
        assert_eq!(report.severity, Severity::Error);
        assert_eq!(report.message, "found a problem");
        assert_eq!(report.remediation, "do the thing");
        assert_eq!(report.object.name, "web");
        assert_eq!(report.object.kind, "Deployment");
        assert_eq!(report.object.namespace.as_deref(), Some("prod"));
        assert_eq!(result.summary.objects_analyzed, 1);
        assert_eq!(result.summary.checks_run, 1);
    }

    #[test]
    fn scope_filters_non_matching_kinds() {
        let mut registry = CheckRegistry::new();
        registry
            .register(
                CheckSpec::new("workloads-only", "", "", "test"),
                always_fires("x"),
                CheckOrigin::Builtin { default: true },
            )
            .unwrap();

        let contexts = vec![context_with(vec![
            object("a.yaml", DEPLOYMENT),
            object("b.yaml", SERVICE),
        ])];
        let result = run(&contexts, &registry, &["workloads-only".to_string()]).unwrap();

        assert_eq!(result.reports.len(), 1);
        assert_eq!(result.reports[0].object.kind, "Deployment");
        // Non-matching objects still count as analyzed
        assert_eq!(result.summary.objects_analyzed, 2);
    }

    #[test]
    fn ignore_annotation_suppresses_only_the_named_check() {
        let annotated = "apiVersion: apps/v1\nkind: Deployment\nmetadata:\n  name: web\n  annotations:\n    ignore-check.klint.io/quiet: \"known\"\n";

        let mut registry = CheckRegistry::new();
        for name in ["quiet", "loud"] {
            registry
                .register(
                    CheckSpec::new(name, "", "", "test"),
                    always_fires("x"),
                    CheckOrigin::Builtin { default: true },
                )
                .unwrap();
        }

        let contexts = vec![context_with(vec![object("a.yaml", annotated)])];
        let result = run(
            &contexts,
            &registry,
            &["loud".to_string(), "quiet".to_string()],
        )
        .unwrap();

        assert_eq!(result.reports.len(), 1);
        assert_eq!(result.reports[0].check, "loud");
    }

    #[test]
    fn diagnostic_remediation_overrides_spec_remediation() {
        let mut registry = CheckRegistry::new();
        registry
            .register(
                CheckSpec::new("override", "", "spec-level advice", "test"),
                Box::new(|_| vec![Diagnostic::with_remediation("msg", "specific advice")]),
                CheckOrigin::Custom,
            )
            .unwrap();

        let contexts = vec![context_with(vec![object("a.yaml", DEPLOYMENT)])];
        let result = run(&contexts, &registry, &["override".to_string()]).unwrap();
        assert_eq!(result.reports[0].remediation, "specific advice");
    }

    #[test]
    fn reports_are_sorted_across_contexts_and_checks() {
        let mut registry = CheckRegistry::new();
        for name in ["zz-check", "aa-check"] {
            registry
                .register(
                    CheckSpec::new(name, "", "", "test").with_scope(CheckScope::new(&["Any"])),
                    always_fires("x"),
                    CheckOrigin::Builtin { default: true },
                )
                .unwrap();
        }

        let contexts = vec![
            context_with(vec![object("b.yaml", DEPLOYMENT)]),
            context_with(vec![object("a.yaml", SERVICE)]),
        ];
        let result = run(
            &contexts,
            &registry,
            &["zz-check".to_string(), "aa-check".to_string()],
        )
        .unwrap();

        let keys: Vec<(String, String)> = result
            .reports
            .iter()
            .map(|r| {
                (
                    r.object.file_path.display().to_string(),
                    r.check.clone(),
                )
            })
            .collect();
        assert_eq!(
            keys,
            vec![
                ("a.yaml".to_string(), "aa-check".to_string()),
                ("a.yaml".to_string(), "zz-check".to_string()),
                ("b.yaml".to_string(), "aa-check".to_string()),
                ("b.yaml".to_string(), "zz-check".to_string()),
            ]
        );
    }

    #[test]
    fn unknown_enabled_check_is_an_engine_error() {
        let registry = CheckRegistry::new();
        let err = run(&[], &registry, &["ghost".to_string()]).unwrap_err();
        assert_eq!(err, RunError::CheckNotFound("ghost".to_string()));
    }

    #[test]
    fn no_objects_yields_empty_result_with_summary() {
        let mut registry = CheckRegistry::new();
        registry
            .register(
                CheckSpec::new("fires", "", "", "test"),
                always_fires("x"),
                CheckOrigin::Builtin { default: true },
            )
            .unwrap();

        let result = run(
            &[LintContext::new()],
            &registry,
            &["fires".to_string()],
        )
        .unwrap();
        assert!(!result.has_reports());
        assert_eq!(result.summary.objects_analyzed, 0);
        assert_eq!(result.summary.checks_run, 1);
    }
}
