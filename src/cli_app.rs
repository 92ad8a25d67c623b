//! Top-level CLI definition and dispatch.

use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell as CompletionShell, generate};
use colored::{Colorize, control};
use serde_json::json;

use infraction_copy::codes::inappropriate::InappropriateReason;
use infraction_copy::codes::reason::InfractionReason;
use infraction_copy::codes::subreason::TaggingSubreason;
use infraction_copy::copy::{ReasonCopy, ResolveOptions, resolve_copy_with};
use infraction_copy::core::config::Config;
use infraction_copy::core::errors::{CopyError, Result};
use infraction_copy::lint::lint_tables;

/// Merchant infraction copy: resolve, list, and lint the reason-code tables.
#[derive(Debug, Parser)]
#[command(
    name = "icopy",
    author,
    version,
    about = "Merchant infraction copy resolver",
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Override config file path.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Force JSON output mode.
    #[arg(long, global = true)]
    json: bool,
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Resolve the effective copy for an infraction.
    Resolve(ResolveArgs),
    /// List known codes with their display titles.
    List(ListArgs),
    /// Lint the static copy tables.
    Lint,
    /// Print the effective configuration as TOML.
    Config(ConfigArgs),
    /// Generate shell completions.
    Completions(CompletionsArgs),
}

#[derive(Debug, Clone, Args)]
struct ResolveArgs {
    /// Primary infraction reason code (e.g. PRODUCT_IS_INAPPROPRIATE).
    #[arg(value_name = "REASON")]
    reason: String,
    /// Inappropriate-content category code.
    #[arg(long, value_name = "CODE")]
    category: Option<String>,
    /// Tagging sub-reason code.
    #[arg(long, value_name = "CODE")]
    subreason: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CodeFamily {
    Reasons,
    Categories,
    Subreasons,
}

#[derive(Debug, Clone, Args)]
struct ListArgs {
    /// Which code family to list.
    #[arg(value_enum)]
    family: CodeFamily,
    /// Restrict sub-reasons to one parent category.
    #[arg(long, value_name = "CODE")]
    parent: Option<String>,
    /// Include retired reason codes.
    #[arg(long)]
    deprecated: bool,
}

#[derive(Debug, Clone, Args)]
struct ConfigArgs {
    /// Print built-in defaults instead of the loaded file.
    #[arg(long)]
    defaults: bool,
}

#[derive(Debug, Clone, Args)]
struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum)]
    shell: CompletionShell,
}

/// Parse arguments, load config, and dispatch.
pub fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    if cli.no_color || !config.output.color {
        control::set_override(false);
    }
    let json = cli.json || config.output.json;

    match &cli.command {
        Command::Resolve(args) => run_resolve(args, &config, json),
        Command::List(args) => run_list(args, json),
        Command::Lint => run_lint(&config, json),
        Command::Config(args) => run_config(args, &config),
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "icopy", &mut io::stdout());
            Ok(())
        }
    }
}

fn run_resolve(args: &ResolveArgs, config: &Config, json: bool) -> Result<()> {
    let reason = InfractionReason::from_str(&args.reason)?;
    let category = args
        .category
        .as_deref()
        .map(InappropriateReason::from_str)
        .transpose()?;
    let subreason = args
        .subreason
        .as_deref()
        .map(TaggingSubreason::from_str)
        .transpose()?;

    let options = ResolveOptions::from(&config.resolver);
    let copy = resolve_copy_with(reason, category, subreason, &options);

    if json {
        let payload = json!({
            "reason": reason,
            "category": category,
            "subreason": subreason,
            "deprecated": reason.is_deprecated(),
            "copy": copy,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print_copy(reason, &copy);
    }
    Ok(())
}

fn print_copy(reason: InfractionReason, copy: &ReasonCopy) {
    println!("{}", copy.title.bold());
    if reason.is_deprecated() {
        println!("{}", "(retired code)".yellow());
    }
    println!();
    println!("{}", copy.body);
    if let Some(policy) = &copy.policy {
        println!();
        println!("{} {policy}", "Policy:".cyan());
    }
    if let Some(faq) = &copy.faq {
        println!("{} {faq}", "FAQ:".cyan());
    }
}

fn run_list(args: &ListArgs, json: bool) -> Result<()> {
    match args.family {
        CodeFamily::Reasons => {
            let rows: Vec<_> = InfractionReason::ALL
                .iter()
                .filter(|r| args.deprecated || !r.is_deprecated())
                .map(|r| (r.as_str(), r.copy().title))
                .collect();
            print_rows(&rows, json)
        }
        CodeFamily::Categories => {
            let rows: Vec<_> = InappropriateReason::ALL
                .iter()
                .map(|c| (c.as_str(), c.overlay().title.unwrap_or_default()))
                .collect();
            print_rows(&rows, json)
        }
        CodeFamily::Subreasons => {
            let parent = args
                .parent
                .as_deref()
                .map(InappropriateReason::from_str)
                .transpose()?;
            if json {
                let rows: Vec<_> = TaggingSubreason::ALL
                    .iter()
                    .filter(|s| parent.is_none_or(|p| s.parent() == p))
                    .map(|s| {
                        json!({
                            "code": s.as_str(),
                            "parent": s.parent().as_str(),
                            "title": s.overlay().title,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for sub in TaggingSubreason::ALL {
                    if parent.is_none_or(|p| sub.parent() == p) {
                        println!(
                            "{}  {}  {}",
                            sub.as_str().bold(),
                            format!("[{}]", sub.parent()).dimmed(),
                            sub.overlay().title.unwrap_or_default()
                        );
                    }
                }
            }
            Ok(())
        }
    }
}

fn print_rows(rows: &[(&str, String)], json: bool) -> Result<()> {
    if json {
        let payload: Vec<_> = rows
            .iter()
            .map(|(code, title)| json!({ "code": code, "title": title }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        for (code, title) in rows {
            println!("{}  {title}", code.bold());
        }
    }
    Ok(())
}

fn run_lint(config: &Config, json: bool) -> Result<()> {
    let report = lint_tables();
    if json {
        let payload = json!({
            "errors": report.errors,
            "notes": report.notes,
            "clean": report.is_clean(config.lint.fail_on_notes),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        for error in &report.errors {
            println!("{} {error}", "error:".red().bold());
        }
        for note in &report.notes {
            println!("{} {note}", "note:".yellow());
        }
        if report.is_clean(config.lint.fail_on_notes) {
            println!(
                "copy tables clean ({} errors, {} notes)",
                report.errors.len(),
                report.notes.len()
            );
        }
    }
    if report.is_clean(config.lint.fail_on_notes) {
        Ok(())
    } else {
        Err(CopyError::LintFailed {
            errors: report.errors.len(),
        })
    }
}

fn run_config(args: &ConfigArgs, config: &Config) -> Result<()> {
    let rendered = if args.defaults {
        Config::default().to_toml()?
    } else {
        config.to_toml()?
    };
    print!("{rendered}");
    Ok(())
}
