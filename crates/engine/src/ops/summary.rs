use crate::{Engine, Summary};

impl Engine {
    /// Recomputes income, expense and balance over all transactions.
    pub async fn summary(&self) -> Summary {
        let store = self.store.lock().await;
        Summary::from_transactions(self.currency, &store.transactions)
    }
}
