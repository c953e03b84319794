use crate::{DEPOSIT_STEP, Engine, EngineError, Goal, GoalCmd, ResultEngine, util::short_id};

impl Engine {
    /// Returns every goal in creation order.
    pub async fn goals(&self) -> Vec<Goal> {
        self.store.lock().await.goals.clone()
    }

    pub async fn add_goal(&self, cmd: GoalCmd) -> ResultEngine<Goal> {
        let mut store = self.store.lock().await;
        let id = short_id(|candidate| store.goals.iter().any(|goal| goal.id == candidate));
        let goal = Goal::new(id, cmd)?;
        store.goals.push(goal.clone());

        tracing::info!(id = %goal.id, name = %goal.name, target = %goal.target, "goal created");
        Ok(goal)
    }

    /// Adds [`DEPOSIT_STEP`] to the goal, clamped at its target.
    ///
    /// Fails with [`EngineError::NotFound`] for an unknown id; nothing is
    /// modified in that case.
    pub async fn deposit(&self, goal_id: &str) -> ResultEngine<Goal> {
        let mut store = self.store.lock().await;
        let Some(goal) = store.goals.iter_mut().find(|goal| goal.id == goal_id) else {
            tracing::warn!(id = goal_id, "deposit on unknown goal");
            return Err(EngineError::NotFound("Goal".to_string()));
        };
        goal.deposit(DEPOSIT_STEP);

        tracing::info!(
            id = %goal.id,
            saved = %goal.saved,
            complete = goal.is_complete(),
            "goal deposit"
        );
        Ok(goal.clone())
    }

    /// Removes the goal with `goal_id`, if any.
    ///
    /// Deleting an unknown id is not an error; the return value tells whether
    /// a goal was actually removed.
    pub async fn delete_goal(&self, goal_id: &str) -> bool {
        let mut store = self.store.lock().await;
        let before = store.goals.len();
        store.goals.retain(|goal| goal.id != goal_id);
        let removed = store.goals.len() != before;

        tracing::info!(id = goal_id, removed, "goal deleted");
        removed
    }
}
