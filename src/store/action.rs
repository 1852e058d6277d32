//! Actions accepted by the store
//!
//! Inside the process an action is a plain enum. At the boundary (action
//! files replayed by the `summary` command) it is a tagged record:
//!
//! ```json
//! { "type": "ADD_EXPENSE", "payload": { "category": "Travel", "cost": 50 } }
//! { "type": "DELETE_EXPENSE", "payload": "550e8400-e29b-41d4-a716-446655440000" }
//! { "type": "SET_BUDGET", "payload": 1500 }
//! ```
//!
//! Amounts on the wire are decimal currency units. Unknown `type` tags decode
//! to [`Action::Unrecognized`], which the reducer ignores.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{Category, Expense, ExpenseId, Money};

pub const ADD_EXPENSE: &str = "ADD_EXPENSE";
pub const DELETE_EXPENSE: &str = "DELETE_EXPENSE";
pub const SET_BUDGET: &str = "SET_BUDGET";

/// A state transition request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append an expense
    AddExpense(Expense),
    /// Remove the expense with this id, if present
    DeleteExpense(ExpenseId),
    /// Replace the budget
    SetBudget(Money),
    /// Any other tag; carried only so it can be reported
    Unrecognized(String),
}

impl Action {
    /// The wire tag of this action
    pub fn kind(&self) -> &str {
        match self {
            Self::AddExpense(_) => ADD_EXPENSE,
            Self::DeleteExpense(_) => DELETE_EXPENSE,
            Self::SetBudget(_) => SET_BUDGET,
            Self::Unrecognized(tag) => tag,
        }
    }

    /// Whether the reducer will act on this action
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    /// Decode a single JSON action record
    pub fn from_json(input: &str) -> PlannerResult<Self> {
        let record: ActionRecord = serde_json::from_str(input)?;
        Self::try_from(record)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddExpense(expense) => write!(f, "{} {}", ADD_EXPENSE, expense),
            Self::DeleteExpense(id) => write!(f, "{} {}", DELETE_EXPENSE, id),
            Self::SetBudget(amount) => write!(f, "{} {}", SET_BUDGET, amount),
            Self::Unrecognized(tag) => write!(f, "{} (unrecognized)", tag),
        }
    }
}

/// The tagged record form of an action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub payload: serde_json::Value,
}

/// Payload of an `ADD_EXPENSE` record
///
/// The id is optional on the wire; a fresh one is generated when absent.
#[derive(Debug, Deserialize)]
struct ExpensePayload {
    #[serde(default)]
    id: Option<ExpenseId>,
    category: Category,
    cost: f64,
    #[serde(default)]
    date: Option<NaiveDate>,
}

impl TryFrom<ActionRecord> for Action {
    type Error = PlannerError;

    fn try_from(record: ActionRecord) -> Result<Self, Self::Error> {
        let kind = record.kind;
        let invalid = |reason: String| PlannerError::invalid_action(kind.clone(), reason);

        match kind.as_str() {
            ADD_EXPENSE => {
                let payload: ExpensePayload =
                    serde_json::from_value(record.payload).map_err(|e| invalid(e.to_string()))?;
                let cost = Money::from_decimal(payload.cost)
                    .ok_or_else(|| invalid("cost is out of range".into()))?;
                if cost.is_negative() {
                    return Err(invalid("cost cannot be negative".into()));
                }
                Ok(Self::AddExpense(Expense {
                    id: payload.id.unwrap_or_default(),
                    category: payload.category,
                    cost,
                    date: payload.date,
                }))
            }
            DELETE_EXPENSE => {
                let id: ExpenseId =
                    serde_json::from_value(record.payload).map_err(|e| invalid(e.to_string()))?;
                Ok(Self::DeleteExpense(id))
            }
            SET_BUDGET => {
                let value = record
                    .payload
                    .as_f64()
                    .ok_or_else(|| invalid("payload must be a number".into()))?;
                let budget = Money::from_decimal(value)
                    .ok_or_else(|| invalid("budget is out of range".into()))?;
                if budget.is_negative() {
                    return Err(invalid("budget cannot be negative".into()));
                }
                Ok(Self::SetBudget(budget))
            }
            _ => Ok(Self::Unrecognized(kind.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_add_expense() {
        let action = Action::from_json(
            r#"{"type":"ADD_EXPENSE","payload":{"category":"Travel","cost":50,"date":"2025-03-14"}}"#,
        )
        .unwrap();

        match action {
            Action::AddExpense(expense) => {
                assert_eq!(expense.category, Category::Travel);
                assert_eq!(expense.cost, Money::from_cents(5000));
                assert_eq!(expense.date, NaiveDate::from_ymd_opt(2025, 3, 14));
            }
            other => panic!("expected AddExpense, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_add_expense_keeps_fractional_cost_and_id() {
        let action = Action::from_json(
            r#"{"type":"ADD_EXPENSE","payload":{"id":"550e8400-e29b-41d4-a716-446655440000","category":"Transport","cost":5.3}}"#,
        )
        .unwrap();

        let Action::AddExpense(expense) = action else {
            panic!("expected AddExpense");
        };
        assert_eq!(expense.cost, Money::from_cents(530));
        assert_eq!(
            expense.id,
            ExpenseId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap()
        );
        assert_eq!(expense.date, None);
    }

    #[test]
    fn test_decode_delete_and_set_budget() {
        let delete = Action::from_json(
            r#"{"type":"DELETE_EXPENSE","payload":"550e8400-e29b-41d4-a716-446655440000"}"#,
        )
        .unwrap();
        assert_eq!(delete.kind(), DELETE_EXPENSE);

        let budget = Action::from_json(r#"{"type":"SET_BUDGET","payload":1500}"#).unwrap();
        assert_eq!(budget, Action::SetBudget(Money::from_cents(150_000)));
    }

    #[test]
    fn test_unknown_tag_is_unrecognized_not_error() {
        let action = Action::from_json(r#"{"type":"RESET_ALL","payload":{"x":1}}"#).unwrap();
        assert_eq!(action, Action::Unrecognized("RESET_ALL".into()));
        assert!(!action.is_recognized());

        let bare = Action::from_json(r#"{"type":"NOOP"}"#).unwrap();
        assert_eq!(bare.kind(), "NOOP");
    }

    #[test]
    fn test_malformed_payloads_are_errors() {
        let cases = [
            r#"{"type":"SET_BUDGET","payload":"abc"}"#,
            r#"{"type":"SET_BUDGET","payload":-10}"#,
            r#"{"type":"ADD_EXPENSE","payload":{"category":"Rent","cost":5}}"#,
            r#"{"type":"ADD_EXPENSE","payload":{"category":"Food","cost":-5}}"#,
            r#"{"type":"DELETE_EXPENSE","payload":42}"#,
        ];
        for case in cases {
            let err = Action::from_json(case).unwrap_err();
            assert!(matches!(err, PlannerError::Action { .. }), "{}: {:?}", case, err);
        }
    }

    #[test]
    fn test_missing_type_is_json_error() {
        let err = Action::from_json(r#"{"payload":1}"#).unwrap_err();
        assert!(matches!(err, PlannerError::Json(_)));
    }
}
