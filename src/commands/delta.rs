//! `btpkit delta` - plan role additions and removals for a role collection
//!
//! The declarative host only sees that a role collection changed. The remote
//! side adds and removes roles one call at a time, so the update has to be
//! broken down into those calls here.

use anyhow::{Context as AnyhowContext, Result, bail};
use cliparams::Params;
use reconcile::Delta;
use std::path::Path;

use crate::Context;
use crate::cli::DeltaArgs;
use crate::config;
use crate::requests::{RoleCollectionState, RoleReference, same_role};
use crate::ui;

/// Role changes for one role collection, with the parameters of each call
#[derive(Debug)]
pub struct RolePlan {
    pub delta: Delta<RoleReference>,
    pub add: Vec<Params>,
    pub remove: Vec<Params>,
}

/// Compute the role delta and marshal one parameter map per call
pub fn plan(
    desired: &RoleCollectionState,
    current: &RoleCollectionState,
    subaccount: &str,
    role_collection: &str,
) -> Result<RolePlan> {
    let delta = Delta::compute(&desired.roles, &current.roles, same_role);

    let to_params = |roles: &[RoleReference]| -> Result<Vec<Params>> {
        roles
            .iter()
            .map(|role| {
                let bound = role.clone().in_collection(subaccount, role_collection);
                cliparams::to_params(&bound)
                    .with_context(|| format!("Could not build parameters for role '{}'", role.name))
            })
            .collect()
    };

    Ok(RolePlan {
        add: to_params(&delta.to_add)?,
        remove: to_params(&delta.to_remove)?,
        delta,
    })
}

pub fn run(ctx: &Context, args: &DeltaArgs) -> Result<()> {
    let desired = load_state(&args.desired)?;
    let current = load_state(&args.current)?;

    let role_collection = args
        .role_collection
        .clone()
        .unwrap_or_else(|| desired.name.clone());
    let subaccount = args
        .subaccount
        .clone()
        .unwrap_or_else(|| desired.subaccount_id.clone());

    if role_collection.is_empty() {
        bail!("No role collection name given. Use --role-collection or set 'name'");
    }

    log::debug!(
        "Comparing {} desired and {} current role(s) of '{}'",
        desired.roles.len(),
        current.roles.len(),
        role_collection
    );

    let plan = plan(&desired, &current, &subaccount, &role_collection)?;
    let summary = plan.delta.summary();

    log::info!(
        "{} role(s) to add, {} to remove",
        summary.additions,
        summary.removals
    );

    if args.json {
        let output = serde_json::json!({
            "role_collection": role_collection,
            "summary": summary,
            "add": plan.add,
            "remove": plan.remove,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if !ctx.quiet {
        ui::header(&format!("Role collection: {role_collection}"));
    }

    if !summary.has_changes() {
        ui::success("Roles are up to date");
        return Ok(());
    }

    for (role, params) in plan.delta.to_add.iter().zip(&plan.add) {
        ui::added(&describe(role));
        if ctx.verbose > 0 {
            super::params::print_params(params);
        }
    }
    for (role, params) in plan.delta.to_remove.iter().zip(&plan.remove) {
        ui::removed(&describe(role));
        if ctx.verbose > 0 {
            super::params::print_params(params);
        }
    }

    println!();
    ui::dim(&format!(
        "{} to add, {} to remove",
        summary.additions, summary.removals
    ));

    Ok(())
}

fn load_state(path: &Path) -> Result<RoleCollectionState> {
    let state: Option<RoleCollectionState> = config::load_record(path)?;
    Ok(state.unwrap_or_default())
}

fn describe(role: &RoleReference) -> String {
    format!(
        "{} ({} / {})",
        role.name, role.role_template_app_id, role.role_template_name
    )
}
