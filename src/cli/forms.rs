//! Input forms that turn command arguments (or prompts) into entry submissions.

use crate::cli::core::{CommandError, ShellContext};
use crate::cli::io as cli_io;
use crate::currency::parse_amount;
use crate::domain::EntryKind;

/// Raw label/amount pair collected for a new entry, not yet validated.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryFormData {
    pub label: String,
    pub amount: f64,
}

/// Splits `args` into label and amount: the last token is the amount and
/// any preceding tokens form the label, so `income Side gig 200` works
/// without quoting.
pub fn split_entry_args<'a>(args: &[&'a str]) -> (Option<String>, Option<&'a str>) {
    match args {
        [] => (None, None),
        [label] => (Some((*label).to_string()), None),
        [label @ .., amount] => (Some(label.join(" ")), Some(*amount)),
    }
}

/// Collects an entry from `args`, prompting for missing parts interactively.
pub fn collect_entry(
    context: &ShellContext,
    kind: EntryKind,
    args: &[&str],
) -> Result<EntryFormData, CommandError> {
    let noun = kind.to_string().to_lowercase();
    let (label, amount) = split_entry_args(args);

    if !context.is_interactive() && amount.is_none() {
        return Err(CommandError::InvalidArguments(format!(
            "usage: {} <label> <amount>",
            noun
        )));
    }

    let label = match label {
        Some(label) => label,
        None => cli_io::prompt_text(
            context.prompt_theme(),
            &format!("Enter the type of {}", noun),
        )?,
    };
    let raw_amount = match amount {
        Some(amount) => amount.to_string(),
        None => cli_io::prompt_text(
            context.prompt_theme(),
            &format!("Enter the amount of {}", noun),
        )?,
    };
    let amount = parse_amount(&raw_amount)
        .map_err(|err| CommandError::validation(format!("{} not added", kind), err))?;

    Ok(EntryFormData { label, amount })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::core::CliMode;
    use crate::config::Config;
    use crate::errors::ValidationError;

    fn script_context() -> ShellContext {
        ShellContext::with_config(CliMode::Script, Config::default(), None)
    }

    #[test]
    fn split_joins_multi_word_labels() {
        assert_eq!(
            split_entry_args(&["Side", "gig", "200"]),
            (Some("Side gig".to_string()), Some("200"))
        );
        assert_eq!(split_entry_args(&["Rent"]), (Some("Rent".to_string()), None));
        assert_eq!(split_entry_args(&[]), (None, None));
    }

    #[test]
    fn script_mode_requires_both_arguments() {
        let err = collect_entry(&script_context(), EntryKind::Income, &["Salary"]).unwrap_err();
        assert!(matches!(err, CommandError::InvalidArguments(message) if message.contains("usage: income")));
    }

    #[test]
    fn unparsable_amount_is_a_validation_error() {
        let err =
            collect_entry(&script_context(), EntryKind::Expense, &["Rent", "lots"]).unwrap_err();
        match err {
            CommandError::Validation { context, source } => {
                assert_eq!(context, "Expense not added");
                assert_eq!(source, ValidationError::UnparsableAmount("lots".into()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn double_negative_amount_is_not_flipped_positive() {
        let err =
            collect_entry(&script_context(), EntryKind::Income, &["Refund", "--40"]).unwrap_err();
        assert!(matches!(
            err,
            CommandError::Validation {
                source: ValidationError::UnparsableAmount(_),
                ..
            }
        ));
    }

    #[test]
    fn collects_label_and_amount() {
        let form =
            collect_entry(&script_context(), EntryKind::Expense, &["Rent", "$1,000"]).unwrap();
        assert_eq!(
            form,
            EntryFormData {
                label: "Rent".into(),
                amount: 1000.0
            }
        );
    }
}
