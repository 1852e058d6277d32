//! Add-expense form
//!
//! Holds the raw field values while the user edits them, validates every
//! field at once on submit, and dispatches `ADD_EXPENSE` only when all of
//! them pass.

use chrono::{Local, NaiveDate};

use crate::error::ValidationError;
use crate::models::{Category, Expense, ExpenseId, Money};
use crate::store::{Action, Dispatch};

/// Accepted date input format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Per-field validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub category: Option<ValidationError>,
    pub cost: Option<ValidationError>,
    pub date: Option<ValidationError>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.cost.is_none() && self.date.is_none()
    }

    /// All messages in field order
    pub fn messages(&self) -> Vec<String> {
        [&self.category, &self.cost, &self.date]
            .into_iter()
            .flatten()
            .map(ToString::to_string)
            .collect()
    }
}

/// A fully validated submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub category: Category,
    pub cost: Money,
    pub date: NaiveDate,
}

impl ExpenseDraft {
    /// Turn the draft into an expense with a freshly generated id
    pub fn into_expense(self) -> Expense {
        Expense::new(self.category, self.cost, self.date)
    }
}

/// Raw field values of the add-expense form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddExpenseForm {
    pub category: String,
    pub cost: String,
    pub date: String,
    pub errors: FormErrors,
}

impl Default for AddExpenseForm {
    fn default() -> Self {
        Self::new()
    }
}

impl AddExpenseForm {
    /// An empty form: first category selected, no cost, today's date
    pub fn new() -> Self {
        Self {
            category: Category::default().label().to_string(),
            cost: String::new(),
            date: format_date(today()),
            errors: FormErrors::default(),
        }
    }

    /// The selected category, if the field holds a valid one
    pub fn selected_category(&self) -> Option<Category> {
        self.category.parse().ok()
    }

    pub fn select_category(&mut self, category: Category) {
        self.category = category.label().to_string();
        self.errors.category = None;
    }

    /// Check every field and collect all failures
    pub fn validate(&self) -> Result<ExpenseDraft, FormErrors> {
        let category = validate_category(&self.category);
        let cost = validate_cost(&self.cost);
        let date = validate_date(&self.date);

        match (category, cost, date) {
            (Ok(category), Ok(cost), Ok(date)) => Ok(ExpenseDraft {
                category,
                cost,
                date,
            }),
            (category, cost, date) => Err(FormErrors {
                category: category.err(),
                cost: cost.err(),
                date: date.err(),
            }),
        }
    }

    /// Validate and, on success, dispatch the new expense
    ///
    /// On failure nothing is dispatched, the errors are kept on the form, and
    /// the field values are left as they were. On success the cost is cleared
    /// and the date reset to today; the category stays selected.
    pub fn submit<D: Dispatch + ?Sized>(
        &mut self,
        dispatcher: &mut D,
    ) -> Result<ExpenseId, FormErrors> {
        match self.validate() {
            Ok(draft) => {
                let expense = draft.into_expense();
                let id = expense.id;
                tracing::info!(
                    category = %expense.category,
                    cost = %expense.cost,
                    "recording expense"
                );
                dispatcher.dispatch(Action::AddExpense(expense));

                self.cost.clear();
                self.date = format_date(today());
                self.errors = FormErrors::default();
                Ok(id)
            }
            Err(errors) => {
                tracing::debug!(errors = ?errors.messages(), "expense form rejected");
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }
}

fn validate_category(input: &str) -> Result<Category, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    trimmed
        .parse()
        .map_err(|_| ValidationError::UnknownCategory(trimmed.to_string()))
}

fn validate_cost(input: &str) -> Result<Money, ValidationError> {
    let cost = Money::parse(input).map_err(|_| ValidationError::InvalidCost)?;
    if cost.is_negative() {
        return Err(ValidationError::NegativeCost);
    }
    Ok(cost)
}

fn validate_date(input: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyDate);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
