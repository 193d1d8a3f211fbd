//! Exit codes and user-facing error text for tcsort

use tcsort_common::SortError;

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when an input or reference table is unusable
pub const EXIT_INVALID_INPUT: i32 = 65;

/// The first [`SortError`] in the error chain, if any
pub fn sort_error(err: &anyhow::Error) -> Option<&SortError> {
    err.chain().find_map(|e| e.downcast_ref::<SortError>())
}

/// Process exit status for a finished run
pub fn exit_status(result: &anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => exit_code(e),
    }
}

pub fn exit_code(err: &anyhow::Error) -> i32 {
    match sort_error(err) {
        Some(e) if e.is_invalid_input() => EXIT_INVALID_INPUT,
        _ => EXIT_GENERAL_ERROR,
    }
}

/// Message shown to the user on failure
pub fn user_message(err: &anyhow::Error) -> String {
    match sort_error(err) {
        Some(SortError::MissingColumn { table, column }) if table == "Input" => format!(
            "Invalid Input File - The input file does not contain the '{}' column.",
            column
        ),
        Some(SortError::MissingColumn { table, column }) => format!(
            "Invalid {} File - The file does not contain the '{}' column.",
            table, column
        ),
        _ => format!("Error: {:#}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_missing_column_through_context() {
        let err = Err::<(), _>(SortError::missing_column("Input", "Test Steps"))
            .context("Failed to read cases.xlsx")
            .unwrap_err();
        assert_eq!(exit_code(&err), EXIT_INVALID_INPUT);
        assert_eq!(
            user_message(&err),
            "Invalid Input File - The input file does not contain the 'Test Steps' column."
        );
    }

    #[test]
    fn test_exit_status_for_success_and_failure() {
        assert_eq!(exit_status(&Ok(())), EXIT_SUCCESS);
        let invalid: anyhow::Result<()> = Err(SortError::missing_column("Input", "Test Type").into());
        assert_eq!(exit_status(&invalid), EXIT_INVALID_INPUT);
    }

    #[test]
    fn test_other_errors_are_general() {
        let err = anyhow::anyhow!("disk full");
        assert_eq!(exit_code(&err), EXIT_GENERAL_ERROR);
        assert_eq!(user_message(&err), "Error: disk full");
    }
}
