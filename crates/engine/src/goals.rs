//! The module contains the representation of a savings goal.
use rust_decimal::Decimal;

use crate::{EngineError, Money, ResultEngine, util::normalize_required_text};

/// Amount added to a goal by every deposit.
pub const DEPOSIT_STEP: Money = Money::new(Decimal::ONE_HUNDRED);

/// A named savings target.
///
/// `saved` starts at zero and only grows through [`Goal::deposit`], which
/// clamps it at `target`. The invariant `0 <= saved <= target` holds for the
/// whole lifetime of the goal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target: Money,
    pub saved: Money,
}

/// Input for creating a goal. Both fields are required.
#[derive(Clone, Debug, Default)]
pub struct GoalCmd {
    pub name: Option<String>,
    pub target: Option<Money>,
}

impl Goal {
    pub(crate) fn new(id: String, cmd: GoalCmd) -> ResultEngine<Self> {
        let name = normalize_required_text(cmd.name.as_deref(), "name")?;
        let target = cmd
            .target
            .ok_or_else(|| EngineError::Validation("target is required".to_string()))?;
        if !target.is_positive() {
            return Err(EngineError::Validation("target must be > 0".to_string()));
        }

        Ok(Self {
            id,
            name,
            target,
            saved: Money::ZERO,
        })
    }

    /// Adds `amount` to `saved`, never going past `target`.
    pub(crate) fn deposit(&mut self, amount: Money) {
        self.saved = self
            .saved
            .checked_add(amount)
            .map_or(self.target, |saved| saved.min(self.target));
    }

    /// Returns `true` once `saved` has reached `target`.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.saved >= self.target
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn laptop() -> Goal {
        Goal::new(
            "0000beef".to_string(),
            GoalCmd {
                name: Some("Laptop".to_string()),
                target: Some(Money::new(dec!(500))),
            },
        )
        .unwrap()
    }

    #[test]
    fn new_goal_starts_empty() {
        let goal = laptop();
        assert_eq!(goal.saved, Money::ZERO);
        assert!(!goal.is_complete());
    }

    #[test]
    fn deposit_clamps_at_target() {
        let mut goal = laptop();
        let mut previous = goal.saved;
        for _ in 0..7 {
            goal.deposit(DEPOSIT_STEP);
            assert!(goal.saved >= previous);
            assert!(goal.saved <= goal.target);
            previous = goal.saved;
        }
        assert_eq!(goal.saved, goal.target);
        assert!(goal.is_complete());
    }

    #[test]
    fn deposit_on_uneven_target_stops_at_target() {
        let mut goal = laptop();
        goal.target = Money::new(dec!(150.505));
        goal.deposit(DEPOSIT_STEP);
        goal.deposit(DEPOSIT_STEP);
        assert_eq!(goal.saved, Money::new(dec!(150.505)));
    }

    #[test]
    fn rejects_missing_or_non_positive_target() {
        let missing = Goal::new(
            "0000beef".to_string(),
            GoalCmd {
                name: Some("Bike".to_string()),
                target: None,
            },
        );
        assert_eq!(
            missing,
            Err(EngineError::Validation("target is required".to_string()))
        );

        let zero = Goal::new(
            "0000beef".to_string(),
            GoalCmd {
                name: Some("Bike".to_string()),
                target: Some(Money::ZERO),
            },
        );
        assert!(zero.is_err());
    }
}
