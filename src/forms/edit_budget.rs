//! Edit-budget form
//!
//! Budgets are entered as whole currency units: after trimming, the input
//! must consist of ASCII digits only. No sign, no decimal point, no exponent.

use crate::error::ValidationError;
use crate::models::Money;
use crate::store::{Action, Dispatch};

/// Parse a budget entry, trimming surrounding whitespace
pub fn parse_budget(input: &str) -> Result<Money, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidBudget);
    }
    trimmed
        .parse::<i64>()
        .ok()
        .and_then(Money::checked_from_units)
        .ok_or(ValidationError::InvalidBudget)
}

/// State of the edit-budget form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBudgetForm {
    pub input: String,
    pub error: Option<ValidationError>,
}

impl EditBudgetForm {
    /// A form pre-filled with the current budget
    pub fn new(current: Money) -> Self {
        let input = if current.cents_part() == 0 {
            current.units().to_string()
        } else {
            format!("{}.{:02}", current.units(), current.cents_part())
        };
        Self { input, error: None }
    }

    /// Replace the whole input
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
        self.error = None;
    }

    pub fn push(&mut self, c: char) {
        self.input.push(c);
        self.error = None;
    }

    pub fn backspace(&mut self) {
        self.input.pop();
        self.error = None;
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.error = None;
    }

    /// Validate and, on success, dispatch the new budget
    ///
    /// The input text is kept either way.
    pub fn submit<D: Dispatch + ?Sized>(
        &mut self,
        dispatcher: &mut D,
    ) -> Result<Money, ValidationError> {
        match parse_budget(&self.input) {
            Ok(budget) => {
                tracing::info!(budget = %budget, "setting budget");
                dispatcher.dispatch(Action::SetBudget(budget));
                self.error = None;
                Ok(budget)
            }
            Err(err) => {
                tracing::debug!(input = %self.input, "budget input rejected");
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;

    #[test]
    fn test_parse_budget_accepts_digits() {
        assert_eq!(parse_budget("1500"), Ok(Money::from_cents(150_000)));
        assert_eq!(parse_budget("  42 "), Ok(Money::from_cents(4200)));
        assert_eq!(parse_budget("0"), Ok(Money::zero()));
        assert_eq!(parse_budget("007"), Ok(Money::from_cents(700)));
    }

    #[test]
    fn test_parse_budget_rejects_everything_else() {
        let inputs = [
            "",
            "   ",
            "abc",
            "-5",
            "+5",
            "10.5",
            "1e3",
            "1 000",
            "$100",
            "99999999999999999999",
        ];
        for input in inputs {
            assert_eq!(
                parse_budget(input),
                Err(ValidationError::InvalidBudget),
                "accepted {:?}",
                input
            );
        }
    }

    #[test]
    fn test_new_prefills_current_budget() {
        assert_eq!(EditBudgetForm::new(Money::from_cents(200_000)).input, "2000");
        assert_eq!(EditBudgetForm::new(Money::from_cents(1050)).input, "10.50");
    }

    #[test]
    fn test_invalid_submission_keeps_input() {
        let mut store = Store::default();
        let mut form = EditBudgetForm::new(store.state().budget);
        form.set_input("abc");

        let err = form.submit(&mut store).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid budget amount. Please enter a valid number."
        );
        assert_eq!(form.input, "abc");
        assert_eq!(form.error, Some(ValidationError::InvalidBudget));
        assert_eq!(store.state().budget, Money::from_cents(200_000));
        assert_eq!(store.applied(), 0);
    }

    #[test]
    fn test_valid_submission_sets_budget() {
        let mut store = Store::default();
        let mut form = EditBudgetForm::new(store.state().budget);
        form.set_input("1500");

        let budget = form.submit(&mut store).unwrap();

        assert_eq!(budget, Money::from_cents(150_000));
        assert_eq!(store.state().budget, budget);
        assert_eq!(store.state().expenses.len(), 3);
        assert!(form.error.is_none());
    }

    #[test]
    fn test_editing_clears_error() {
        let mut form = EditBudgetForm::new(Money::zero());
        form.set_input("x");
        let _ = form.submit(&mut Vec::<Action>::new());
        assert!(form.error.is_some());

        form.backspace();
        assert!(form.error.is_none());
        assert_eq!(form.input, "");

        form.push('9');
        assert_eq!(form.input, "9");
    }
}
