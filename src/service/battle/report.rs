use crate::model::battle::{AssignmentResult, ReconciliationSummary};

/// Folds assignment outcomes and unresolved names into the final summary.
///
/// Skipped names are the failed assignments followed by the unresolved names.
pub fn summarize(assignment: &AssignmentResult, unresolved: &[String]) -> ReconciliationSummary {
    let skipped_names = assignment
        .failed_names()
        .into_iter()
        .chain(unresolved.iter().cloned())
        .collect();

    ReconciliationSummary {
        applied_names: assignment.applied.clone(),
        skipped_names,
    }
}
