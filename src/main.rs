use anyhow::Context;
use clap::Parser;
use coercion_check::core::batch::{evaluate, render_call, BatchReport};
use coercion_check::utils::{logger, validation::Validate};
use coercion_check::{BatchRunner, CaseFile, CheckError, CheckKind, CliConfig, Command, InputValue};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(config.verbose, config.log_json);
    tracing::debug!("CLI config: {:?}", config);

    match run(config.command) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::debug!("run failed: {:?}", e);
            eprintln!("❌ {:#}", e);
            let code = e
                .downcast_ref::<CheckError>()
                .map(CheckError::exit_code)
                .unwrap_or(1);
            std::process::exit(code);
        }
    }
}

fn run(command: Command) -> anyhow::Result<i32> {
    match command {
        Command::Name { value, explain } => {
            let value = parse_arg("value", &value)?;
            single_check(CheckKind::Name, vec![value], explain);
            Ok(0)
        }
        Command::Hours {
            attended,
            length,
            explain,
        } => {
            let attended = parse_arg("attended", &attended)?;
            let length = parse_arg("length", &length)?;
            single_check(CheckKind::Hours, vec![attended, length], explain);
            Ok(0)
        }
        Command::Batch { file, json } => {
            let case_file = match &file {
                Some(path) => {
                    tracing::info!("📁 Loading cases from: {}", path);
                    CaseFile::from_file(path)
                        .with_context(|| format!("failed to load case file '{}'", path))?
                }
                None => CaseFile::builtin().context("bundled case file is invalid")?,
            };
            case_file.validate().context("case file validation failed")?;

            let report = BatchRunner::new().run(&case_file);
            print_report(&report, json)?;
            Ok(if report.all_passed() { 0 } else { 2 })
        }
    }
}

fn parse_arg(name: &str, literal: &str) -> anyhow::Result<InputValue> {
    InputValue::from_literal(literal)
        .with_context(|| format!("{} is not a JSON literal or `undefined`: {}", name, literal))
}

// A rejected value is still a successful run; the answer goes to stdout.
fn single_check(check: CheckKind, args: Vec<InputValue>, explain: bool) {
    let result = evaluate(check, &args);
    tracing::debug!("{} -> {:?}", render_call(check, &args), result);

    println!("{}", result.is_ok());
    if explain {
        if let Err(rejection) = result {
            println!("reason: {}", rejection);
        }
    }
}

fn print_report(report: &BatchReport, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    for outcome in &report.outcomes {
        let mark = if outcome.matched() { "✅" } else { "❌" };
        println!(
            "{} {} -> {}",
            mark,
            render_call(outcome.check, &outcome.args),
            outcome.actual
        );
    }
    println!(
        "\n{}: {} passed, {} failed",
        report.suite,
        report.passed(),
        report.failed()
    );
    Ok(())
}
