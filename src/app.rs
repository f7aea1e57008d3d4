use std::io::{self, Write};

use anyhow::Context;

use crate::cli::Cli;
use crate::core::{CancelFlag, ErrorPolicy, ExclusionRules, WalkOptions, render_tree};
use crate::fs::RealFileSystem;
use crate::models::ExclusionRuleSet;
use crate::output::{self, SystemClipboard};
use crate::prefs::{self, PreferenceStore};

/// Load preferences, apply command-line edits, walk, and print.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let prefs_path = cli
        .prefs_file
        .clone()
        .unwrap_or_else(prefs::default_prefs_path);
    let store = PreferenceStore::new(prefs_path);
    log::debug!("preferences file: {}", store.path().display());
    let mut rules = store.load_or_default();

    if cli.view_exclusions {
        return write_stdout(&format_exclusions(&rules));
    }

    apply_cli_edits(&cli, &mut rules);

    if cli.save
        && let Err(err) = store.save(&rules)
    {
        eprintln!("printdirtree: {err}. Changes might not be saved.");
    }

    let matcher = ExclusionRules::compile(&rules)?;

    let cancel = CancelFlag::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let options = WalkOptions {
        dirs_only: cli.dirs_only,
        show_contents: cli.show_contents,
        max_depth: cli.max_depth,
        max_entries: cli.max_entries,
        on_error: if cli.fail_fast {
            ErrorPolicy::Abort
        } else {
            ErrorPolicy::Skip
        },
        cancel: Some(cancel),
    };

    let result = render_tree(&RealFileSystem, &cli.dir, &matcher, &options).await?;
    if !result.failures.is_empty() {
        log::warn!(
            "{} unreadable director{} marked in the tree",
            result.failures.len(),
            if result.failures.len() == 1 { "y" } else { "ies" }
        );
    }

    let text = output::compose_output(&result);

    if cli.copy_to_clipboard {
        output::copy_to_clipboard(&mut SystemClipboard, &text);
    }

    write_stdout(&text)
}

/// Exclusions given on the command line are added before include-backs are removed.
fn apply_cli_edits(cli: &Cli, rules: &mut ExclusionRuleSet) {
    rules.exclude_dirs(cli.exclude_dir.iter().cloned());
    rules.exclude_files(cli.exclude_file.iter().cloned());
    rules.include_dirs(&cli.include_dir);
    rules.include_files(&cli.include_file);
}

fn format_exclusions(rules: &ExclusionRuleSet) -> String {
    let mut out = String::from("Currently excluded directories:\n");
    for dir in &rules.exclude_dirs {
        out.push_str(&format!("  - {dir}\n"));
    }
    out.push_str("\nCurrently excluded files:\n");
    for file in &rules.exclude_files {
        out.push_str(&format!("  - {file}\n"));
    }
    out
}

fn write_stdout(text: &str) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .context("failed to write to stdout")?;
    stdout.flush().context("failed to write to stdout")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn exclusions_listing_is_sorted() {
        let mut rules = ExclusionRuleSet::empty();
        rules.exclude_dirs(["venv", ".git"]);
        rules.exclude_files(["LICENSE"]);
        assert_eq!(
            format_exclusions(&rules),
            concat!(
                "Currently excluded directories:\n",
                "  - .git\n",
                "  - venv\n",
                "\n",
                "Currently excluded files:\n",
                "  - LICENSE\n",
            )
        );
    }

    #[test]
    fn include_back_wins_over_exclude_in_same_run() {
        let cli = Cli::parse_from([
            "printdirtree",
            "--exclude-dir",
            "build",
            "target",
            "--include-dir",
            "build",
            ".git",
            "--exclude-file",
            "*.log",
            "--include-file",
            "LICENSE",
        ]);
        let mut rules = ExclusionRuleSet::default();
        apply_cli_edits(&cli, &mut rules);

        assert!(rules.exclude_dirs.contains("target"));
        assert!(!rules.exclude_dirs.contains("build"));
        assert!(!rules.exclude_dirs.contains(".git"));
        assert_eq!(rules.exclude_files.iter().collect::<Vec<_>>(), vec!["*.log"]);
    }
}
