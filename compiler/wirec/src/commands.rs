//! Command implementations.

use std::process::ExitCode;

use wire_diagnostic::{DiagnosticConfig, DiagnosticQueue};
use wire_ir::SharedInterner;

use crate::cli::{OutputFormat, ProjectArgs};
use crate::driver::{render_text, run, RunOptions};
use crate::logging::init_tracing;
use crate::model::Model;

/// `wirec project`: exit status 1 when loading fails or any error was emitted.
pub fn project(args: &ProjectArgs) -> ExitCode {
    init_tracing(args.verbose);

    let interner = SharedInterner::new();
    let loaded = match Model::load(&args.model).and_then(|model| model.build(&interner)) {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: args.error_limit,
        ..DiagnosticConfig::default()
    });
    let options = RunOptions {
        memoize: !args.no_cache,
        dates: args.dates,
    };
    let reports = run(&loaded, &interner, &args.target.targets(), options, &mut queue);

    match args.format {
        OutputFormat::Text => print!("{}", render_text(&reports)),
        OutputFormat::Json => match serde_json::to_string_pretty(&reports) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: cannot encode report: {err}");
                return ExitCode::FAILURE;
            }
        },
    }

    let failed = queue.has_errors();
    for diagnostic in queue.flush() {
        eprintln!("{diagnostic}");
    }
    if failed.is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
