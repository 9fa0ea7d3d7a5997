use crate::config::case_file::{CaseConfig, CaseFile, CheckKind};
use crate::core::validators::{check_hours, check_name, Rejection};
use crate::domain::model::InputValue;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CaseOutcome {
    pub index: usize,
    pub check: CheckKind,
    pub args: Vec<InputValue>,
    pub expected: bool,
    pub actual: bool,
    pub reason: Option<String>,
}

impl CaseOutcome {
    pub fn matched(&self) -> bool {
        self.expected == self.actual
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub suite: String,
    pub outcomes: Vec<CaseOutcome>,
}

impl BatchReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.matched()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    pub fn mismatches(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.outcomes.iter().filter(|o| !o.matched())
    }
}

#[derive(Debug, Default)]
pub struct BatchRunner;

impl BatchRunner {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self, case_file: &CaseFile) -> BatchReport {
        tracing::info!(
            "Running suite '{}' ({} cases)",
            case_file.suite.name,
            case_file.cases.len()
        );

        let outcomes: Vec<CaseOutcome> = case_file
            .cases
            .iter()
            .enumerate()
            .map(|(index, case)| self.run_case(index, case))
            .collect();

        let report = BatchReport {
            suite: case_file.suite.name.clone(),
            outcomes,
        };

        tracing::info!(
            "Suite '{}' finished: {} passed, {} failed",
            report.suite,
            report.passed(),
            report.failed()
        );
        report
    }

    fn run_case(&self, index: usize, case: &CaseConfig) -> CaseOutcome {
        let result = evaluate(case.check, &case.args);
        let actual = result.is_ok();
        // 未指定預期值時視為預期通過
        let expected = case.expected.unwrap_or(true);

        let outcome = CaseOutcome {
            index,
            check: case.check,
            args: case.args.clone(),
            expected,
            actual,
            reason: result.err().map(|r| r.to_string()),
        };

        let rendered = render_call(case.check, &case.args);
        if outcome.matched() {
            tracing::debug!("case {}: {} -> {}", index, rendered, actual);
        } else {
            tracing::warn!(
                "case {}: {} -> {} (expected {}){}",
                index,
                rendered,
                actual,
                expected,
                outcome
                    .reason
                    .as_ref()
                    .map(|r| format!(": {}", r))
                    .unwrap_or_default()
            );
        }
        outcome
    }
}

static UNDEFINED: InputValue = InputValue::Undefined;

/// Runs one check. Missing arguments are treated as `undefined`.
pub fn evaluate(check: CheckKind, args: &[InputValue]) -> Result<(), Rejection> {
    let arg = |i: usize| args.get(i).unwrap_or(&UNDEFINED);
    match check {
        CheckKind::Name => check_name(arg(0)),
        CheckKind::Hours => check_hours(arg(0), arg(1)),
    }
}

pub fn render_call(check: CheckKind, args: &[InputValue]) -> String {
    let rendered: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    format!("{}({})", check, rendered.join(", "))
}
