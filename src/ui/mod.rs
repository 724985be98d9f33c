//! Terminal UI components (spinner, colors, prompt handling).

use anyhow::Result;
use inquire::InquireError;

mod spinner;
mod theme;

pub use spinner::Spinner;
pub use theme::Style;

/// Check if the inquire error is a user cancellation/interruption.
const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Check whether an error chain bottoms out in a prompt cancellation.
pub fn is_cancellation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<InquireError>()
        .is_some_and(is_prompt_cancelled)
}

/// Runs an interactive flow, treating prompt cancellation (Ctrl+C or Escape)
/// as a clean exit rather than an error.
pub fn handle_prompt_cancellation<F>(f: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    match f() {
        Ok(()) => Ok(()),
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(is_prompt_cancelled) =>
        {
            println!();
            Ok(())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancellation_is_swallowed() {
        let result = handle_prompt_cancellation(|| Err(InquireError::OperationCanceled.into()));
        assert!(result.is_ok());

        let result = handle_prompt_cancellation(|| Err(InquireError::OperationInterrupted.into()));
        assert!(result.is_ok());
    }

    #[test]
    fn test_other_errors_propagate() {
        let result = handle_prompt_cancellation(|| Err(anyhow::anyhow!("service unreachable")));
        let Err(err) = result else {
            panic!("expected an error");
        };
        assert!(err.to_string().contains("service unreachable"));
    }

    #[test]
    fn test_success_passes_through() {
        assert!(handle_prompt_cancellation(|| Ok(())).is_ok());
    }
}
