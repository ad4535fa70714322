use crate::cli::LintArgs;
use color_eyre::eyre::{eyre, Result};
use duct::cmd;

// ---------------------------------------------------------------------------
// Pure planning
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Fmt,
    Clippy,
    Test,
}

const PIPELINE: [Step; 3] = [Step::Fmt, Step::Clippy, Step::Test];

impl Step {
    fn skipped(self, args: &LintArgs) -> bool {
        match self {
            Step::Fmt => args.no_fmt,
            Step::Clippy => args.no_clippy,
            Step::Test => args.no_test,
        }
    }

    /// Arguments passed to `cargo` for this step.
    fn cargo_args(self, fix: bool) -> Vec<&'static str> {
        match (self, fix) {
            (Step::Fmt, true) => vec!["fmt", "--all"],
            (Step::Fmt, false) => vec!["fmt", "--all", "--check"],
            (Step::Clippy, _) => vec![
                "clippy",
                "--workspace",
                "--all-targets",
                "--",
                "-D",
                "warnings",
            ],
            (Step::Test, _) => vec!["test", "--workspace"],
        }
    }
}

/// The cargo invocations to run, in order.
fn plan(args: &LintArgs) -> Vec<Vec<&'static str>> {
    PIPELINE
        .iter()
        .filter(|step| !step.skipped(args))
        .map(|step| step.cargo_args(args.fix))
        .collect()
}

fn display_name(cargo_args: &[&str]) -> String {
    format!("cargo {}", cargo_args.join(" "))
}

// ---------------------------------------------------------------------------
// Execution
// ---------------------------------------------------------------------------

pub fn run(args: &LintArgs) -> Result<()> {
    for cargo_args in plan(args) {
        let name = display_name(&cargo_args);
        println!("[run] {name}");

        let output = cmd("cargo", &cargo_args)
            .stderr_to_stdout()
            .stdout_capture()
            .unchecked()
            .run()?;
        let text = String::from_utf8_lossy(&output.stdout);

        if !output.status.success() {
            print!("{text}");
            return Err(eyre!("lint failed at: {name}"));
        }

        if args.verbose {
            print!("{text}");
        }
    }

    println!("lint passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_runs_every_step_by_default() {
        let plan = plan(&LintArgs::default());
        let names: Vec<String> = plan.iter().map(|args| display_name(args)).collect();

        assert_eq!(
            names,
            vec![
                "cargo fmt --all --check",
                "cargo clippy --workspace --all-targets -- -D warnings",
                "cargo test --workspace",
            ]
        );
    }

    #[test]
    fn test_plan_respects_skip_flags() {
        let args = LintArgs {
            no_fmt: true,
            no_test: true,
            ..LintArgs::default()
        };
        let plan = plan(&args);

        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0][0], "clippy");
    }

    #[test]
    fn test_fix_drops_fmt_check() {
        let args = LintArgs {
            fix: true,
            ..LintArgs::default()
        };
        assert_eq!(plan(&args)[0], vec!["fmt", "--all"]);
    }
}
