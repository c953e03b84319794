use crate::{Budgets, Engine};

impl Engine {
    /// Returns the current category caps.
    pub async fn budgets(&self) -> Budgets {
        self.store.lock().await.budgets.clone()
    }

    /// Merges `updates` into the caps and returns the resulting mapping.
    pub async fn update_budgets(&self, updates: Budgets) -> Budgets {
        let mut store = self.store.lock().await;
        let changed = updates.len();
        store.budgets.merge(updates);

        tracing::info!(changed, total = store.budgets.len(), "budgets updated");
        store.budgets.clone()
    }
}
