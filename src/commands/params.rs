//! `btpkit params` - marshal a request document

use anyhow::{Context as AnyhowContext, Result};
use cliparams::Params;

use crate::Context;
use crate::cli::ParamsArgs;
use crate::config;
use crate::ui;

pub fn run(ctx: &Context, args: &ParamsArgs) -> Result<()> {
    let document = config::load_document(&args.file)?;

    log::debug!(
        "Marshalling {} request from {}",
        args.kind,
        args.file.display()
    );

    let params = args.kind.marshal(document).with_context(|| {
        format!(
            "Could not build {} parameters from {}",
            args.kind,
            args.file.display()
        )
    })?;

    log::info!("{} parameter(s) for '{}'", params.len(), args.kind.command());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&params)?);
        return Ok(());
    }

    if !ctx.quiet {
        ui::header(args.kind.command());
    }
    print_params(&params);

    Ok(())
}

/// Print a parameter map as aligned key-value pairs
pub fn print_params(params: &Params) {
    if params.is_empty() {
        ui::dim("(no parameters)");
        return;
    }

    let width = params.keys().map(String::len).max().unwrap_or(0);
    for (key, value) in params {
        ui::kv(&format!("{key:<width$}"), value);
    }
}
