//! Velador CLI: selector-discipline checks for UI test code
//!
//! ## Usage
//!
//! ```bash
//! velador check                      # Check the current directory
//! velador check tests/ --format json
//! velador check --attribute data-testid
//! velador explain                    # Explain the selector-hook rule
//! ```

use clap::Parser;
use std::process::ExitCode;
use velador::{
    CheckArgs, CheckOutputFormat, Cli, CliConfig, CliResult, Commands, DiagnosticPrinter,
    ExplainArgs, Verbosity,
};
use velar::{render_report_json, ScanReport, SelectorLinter, DATA_SELENIUM, RULE_SELECTOR_HOOK};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);
    init_tracing(config.verbosity);

    match cli.command {
        Commands::Check(args) => run_check(&config, &args),
        Commands::Explain(args) => run_explain(&args),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else {
        match cli.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    };

    CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(cli.color.into())
}

fn init_tracing(verbosity: Verbosity) {
    if !verbosity.is_debug() {
        return;
    }
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_check(config: &CliConfig, args: &CheckArgs) -> CliResult<()> {
    tracing::debug!(
        paths = args.paths.len(),
        attribute = %args.attribute,
        "starting selector check"
    );
    let linter = SelectorLinter::new().with_attribute(&args.attribute);
    let mut report = ScanReport::default();

    for path in &args.paths {
        let partial = linter.lint_path(path)?;
        let stop = args.fail_fast && partial.has_violations();
        report.merge(partial);
        if stop {
            break;
        }
    }

    match args.format {
        CheckOutputFormat::Text => {
            let printer =
                DiagnosticPrinter::new(config.color.should_color(), config.verbosity.is_quiet());
            printer.report(&report);
        }
        CheckOutputFormat::Json => {
            let json = render_report_json(&report)
                .map_err(|e| velador::CliError::report_generation(e.to_string()))?;
            println!("{json}");
        }
    }

    if report.has_violations() {
        Err(velador::CliError::check_failed(format!(
            "{} forbidden selector(s) found",
            report.violation_count()
        )))
    } else {
        Ok(())
    }
}

fn run_explain(args: &ExplainArgs) -> CliResult<()> {
    if args.rule != RULE_SELECTOR_HOOK {
        return Err(velador::CliError::invalid_argument(format!(
            "unknown rule: {} (known rules: {RULE_SELECTOR_HOOK})",
            args.rule
        )));
    }

    println!("{RULE_SELECTOR_HOOK}: element lookups must use the {DATA_SELENIUM} test hook");
    println!();
    println!("Selectors that depend on page structure (tags, classes, ids, combinators)");
    println!("break whenever markup or styling changes. Element lookups must instead use");
    println!("a single attribute selector on the dedicated {DATA_SELENIUM} attribute, so");
    println!("UI tests stay decoupled from structure.");
    println!();
    println!("Permitted:");
    println!("  driver.find_element(By::css(\"[{DATA_SELENIUM}='hotel-item']\"))");
    println!("  driver.find_elements_by_css_selector(\"[{DATA_SELENIUM}=hotel-item]\")");
    println!();
    println!("Forbidden:");
    println!("  driver.find_element(By::css(\".login-button\"))      // class selector");
    println!("  driver.find_element(By::css(\"#main\"))              // id selector");
    println!("  driver.find_element(By::css(\"form button\"))        // combinator");
    println!("  driver.find_element(By::css(\"div[{DATA_SELENIUM}=x]\")) // compound");

    Ok(())
}
