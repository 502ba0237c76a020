//! `btpkit check` - validate every request kind's parameter table up front

use anyhow::{Result, bail};

use crate::Context;
use crate::requests::RequestKind;
use crate::ui;

pub fn run(ctx: &Context) -> Result<()> {
    if !ctx.quiet {
        ui::header("Parameter tables");
    }

    let mut failed = 0;
    for kind in RequestKind::all() {
        match kind.validate() {
            Ok(()) => {
                log::debug!("{kind}: table ok");
                if !ctx.quiet {
                    ui::success(&format!("{kind} ({})", kind.command()));
                }
            }
            Err(e) => {
                failed += 1;
                ui::error(&format!("{kind}: {e}"));
            }
        }
    }

    if failed > 0 {
        bail!("{failed} request kind(s) have unsupported fields");
    }

    if !ctx.quiet {
        ui::dim(&format!(
            "{} request kinds checked",
            RequestKind::all().len()
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_passes() {
        let ctx = Context {
            verbose: 0,
            quiet: true,
        };
        assert!(run(&ctx).is_ok());
    }
}
