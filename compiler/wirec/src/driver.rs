//! Projection runs.
//!
//! One run projects every site of a loaded model for each selected consumer.
//! Consumers run in parallel with one engine each; the declaration and
//! definition tables and the interner are shared read-only. Diagnostics are
//! merged into the caller's queue in consumer order so output is stable.

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use serde::Serialize;
use wire_diagnostic::{Diagnostic, DiagnosticQueue};
use wire_ir::{DeclSite, SharedInterner};
use wire_types::{DateFormat, Projector, ProjectorConfig, SchemaType, TypeDefinitionId};

use crate::model::LoadedModel;
use crate::target::Target;

/// Settings shared by every consumer of a run.
#[derive(Copy, Clone, Debug)]
pub struct RunOptions {
    pub memoize: bool,
    pub dates: DateFormat,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            memoize: true,
            dates: DateFormat::Millis,
        }
    }
}

/// One projected site.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Entry {
    pub label: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Everything one consumer produced.
#[derive(Clone, Debug, Serialize)]
pub struct TargetReport {
    pub target: &'static str,
    pub entries: Vec<Entry>,
    /// Definitions reachable from the projected sites, in discovery order.
    pub definitions: Vec<String>,
    #[serde(skip)]
    pub diagnostics: Vec<Diagnostic>,
}

/// Project the model for every target, feeding diagnostics to `queue`.
#[tracing::instrument(level = "debug", skip(model, interner, queue))]
pub fn run(
    model: &LoadedModel,
    interner: &SharedInterner,
    targets: &[Target],
    options: RunOptions,
    queue: &mut DiagnosticQueue,
) -> Vec<TargetReport> {
    let mut reports: Vec<TargetReport> = targets
        .par_iter()
        .map(|&target| project_target(model, interner, target, options))
        .collect();

    for report in &mut reports {
        for diagnostic in report.diagnostics.drain(..) {
            queue.add(diagnostic);
        }
    }
    reports
}

/// Sites of a run: the model's own sites, then every definition property.
fn sites(model: &LoadedModel) -> impl Iterator<Item = &DeclSite> {
    model.sites.iter().chain(
        model
            .definitions
            .iter()
            .flat_map(|definition| definition.properties.iter()),
    )
}

#[tracing::instrument(level = "debug", skip(model, interner, options), fields(target = target.as_str()))]
fn project_target(
    model: &LoadedModel,
    interner: &SharedInterner,
    target: Target,
    options: RunOptions,
) -> TargetReport {
    let config = ProjectorConfig {
        memoize: options.memoize,
        honor_format_overrides: target.is_json_facing(),
        ..ProjectorConfig::default()
    };
    let mut projector = Projector::new(
        &model.decls,
        &model.definitions,
        target.registry(interner.clone(), options.dates),
        interner.clone(),
    )
    .with_config(config);
    let renderer = target.renderer(model.conversions(target.as_str()));

    let mut entries = Vec::new();
    let mut diagnostics = Vec::new();
    let mut roots = Vec::new();

    for site in sites(model) {
        let label = interner.lookup(site.label);
        let schema = projector.project_site(site);
        let error = match &schema {
            SchemaType::Unresolvable(unresolvable) => {
                diagnostics.push(unresolvable.to_diagnostic(Some(label)));
                Some(unresolvable.reason.clone())
            }
            resolved => {
                roots.extend(resolved.referenced_definitions());
                None
            }
        };
        entries.push(Entry {
            label: label.to_owned(),
            name: renderer.render(&schema, &model.definitions, interner),
            error,
        });
    }

    let definitions = reachable(&mut projector, &roots)
        .into_iter()
        .filter_map(|id| model.definitions.get(id))
        .map(|definition| {
            let schema = if definition.is_enum() {
                SchemaType::EnumType(definition.id)
            } else {
                SchemaType::ClassType(definition.id)
            };
            renderer.render(&schema, &model.definitions, interner)
        })
        .collect();

    diagnostics.extend(projector.take_warnings());
    tracing::debug!(
        entries = entries.len(),
        diagnostics = diagnostics.len(),
        cached = projector.cache_len(),
        "target projected"
    );
    TargetReport {
        target: target.as_str(),
        entries,
        definitions,
        diagnostics,
    }
}

/// Union of the definitions reachable from each root, first discovery wins.
fn reachable(projector: &mut Projector<'_>, roots: &[TypeDefinitionId]) -> Vec<TypeDefinitionId> {
    let mut seen = FxHashSet::default();
    let mut order = Vec::new();
    for &root in roots {
        if seen.contains(&root) {
            continue;
        }
        for id in projector.reachable_definitions(root) {
            if seen.insert(id) {
                order.push(id);
            }
        }
    }
    order
}

/// Plain-text report: one `label: name` line per site.
pub fn render_text(reports: &[TargetReport]) -> String {
    let mut out = String::new();
    let headed = reports.len() > 1;
    for report in reports {
        if headed {
            out.push_str(&format!("== {} ==\n", report.target));
        }
        for entry in &report.entries {
            out.push_str(&format!("{}: {}\n", entry.label, entry.name));
        }
    }
    out
}
