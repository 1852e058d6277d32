//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Budget data lives in the [`Store`]; everything else here is screen state.

use crate::config::Settings;
use crate::forms::{AddExpenseForm, EditBudgetForm};
use crate::models::{Expense, ExpenseId};
use crate::store::{Action, Dispatch, Store};

/// Which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Home,
    Overview,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddTransaction,
    EditBudget,
    Help,
}

/// Focused field of the add-transaction dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Category,
    Cost,
    Date,
}

impl ExpenseField {
    pub fn next(self) -> Self {
        match self {
            Self::Category => Self::Cost,
            Self::Cost => Self::Date,
            Self::Date => Self::Category,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Category => Self::Date,
            Self::Cost => Self::Category,
            Self::Date => Self::Cost,
        }
    }
}

/// Main application state
pub struct App<'a> {
    /// The budget store
    pub store: Store,

    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected row in the expense list
    pub selected_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Add-transaction form
    pub expense_form: AddExpenseForm,

    /// Focused field in the add-transaction form
    pub expense_field: ExpenseField,

    /// Edit-budget form
    pub budget_form: EditBudgetForm,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(store: Store, settings: &'a Settings) -> Self {
        let budget_form = EditBudgetForm::new(store.state().budget);
        Self {
            store,
            settings,
            should_quit: false,
            active_view: ActiveView::default(),
            active_dialog: ActiveDialog::default(),
            selected_index: 0,
            status_message: None,
            expense_form: AddExpenseForm::new(),
            expense_field: ExpenseField::default(),
            budget_form,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch to a different view
    pub fn switch_view(&mut self, view: ActiveView) {
        tracing::debug!(?view, "switching view");
        self.active_view = view;
    }

    /// Open a dialog, resetting its form
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match dialog {
            ActiveDialog::AddTransaction => {
                self.expense_form = AddExpenseForm::new();
                self.expense_field = ExpenseField::Category;
            }
            ActiveDialog::EditBudget => {
                self.budget_form = EditBudgetForm::new(self.store.state().budget);
            }
            ActiveDialog::Help | ActiveDialog::None => {}
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Number of expenses in the current state
    pub fn expense_count(&self) -> usize {
        self.store.state().expenses.len()
    }

    /// The expense under the selection cursor
    pub fn selected_expense(&self) -> Option<&Expense> {
        self.store.state().expenses.get(self.selected_index)
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.expense_count() {
            self.selected_index += 1;
        }
    }

    /// Keep the selection inside the expense list
    fn clamp_selection(&mut self) {
        let count = self.expense_count();
        if self.selected_index >= count {
            self.selected_index = count.saturating_sub(1);
        }
    }

    /// Delete the selected expense
    pub fn delete_selected(&mut self) -> Option<ExpenseId> {
        let expense = self.selected_expense()?.clone();
        self.dispatch(Action::DeleteExpense(expense.id));
        self.clamp_selection();
        let message = format!("Deleted {} {}", expense.category, self.format_cost(&expense));
        self.set_status(message);
        Some(expense.id)
    }

    /// Submit the add-transaction form; returns home on success
    pub fn submit_expense(&mut self) -> bool {
        let mut form = std::mem::take(&mut self.expense_form);
        let result = form.submit(self);
        self.expense_form = form;

        match result {
            Ok(_) => {
                self.selected_index = self.expense_count().saturating_sub(1);
                self.close_dialog();
                self.switch_view(ActiveView::Home);
                self.set_status("Expense added");
                true
            }
            Err(_) => false,
        }
    }

    /// Submit the edit-budget form; returns home on success
    pub fn submit_budget(&mut self) -> bool {
        let mut form = std::mem::take(&mut self.budget_form);
        let result = form.submit(self);
        self.budget_form = form;

        match result {
            Ok(budget) => {
                self.close_dialog();
                self.switch_view(ActiveView::Home);
                let message = format!("Budget set to {}", self.settings.format_money(budget));
                self.set_status(message);
                true
            }
            Err(_) => false,
        }
    }

    fn format_cost(&self, expense: &Expense) -> String {
        self.settings.format_money(expense.cost)
    }
}

impl Dispatch for App<'_> {
    fn dispatch(&mut self, action: Action) {
        self.store.dispatch(action);
    }
}
