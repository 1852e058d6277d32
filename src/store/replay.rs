//! Replaying recorded actions
//!
//! An action file holds one JSON action record per line. Blank lines and
//! lines starting with `#` are skipped.

use std::io::BufRead;

use super::{Action, Dispatch};
use crate::error::{PlannerError, PlannerResult};

/// Decode every action in `reader` and dispatch it in order
///
/// Decoding stops at the first bad line; actions before it have already
/// been dispatched. Returns the number of actions dispatched.
pub fn replay<R, D>(reader: R, dispatcher: &mut D) -> PlannerResult<usize>
where
    R: BufRead,
    D: Dispatch + ?Sized,
{
    let mut count = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let action = Action::from_json(trimmed).map_err(|e| PlannerError::Replay {
            line: index + 1,
            source: Box::new(e),
        })?;

        tracing::debug!(line = index + 1, action = %action, "replaying action");
        dispatcher.dispatch(action);
        count += 1;
    }

    Ok(count)
}
