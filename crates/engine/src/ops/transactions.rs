use crate::{Engine, ResultEngine, Transaction, TransactionCmd, util::short_id};

impl Engine {
    /// Returns every transaction in creation order.
    pub async fn transactions(&self) -> Vec<Transaction> {
        self.store.lock().await.transactions.clone()
    }

    /// Validates `cmd`, fills the defaults and appends the new transaction.
    ///
    /// On a validation error the store is left untouched.
    pub async fn add_transaction(&self, cmd: TransactionCmd) -> ResultEngine<Transaction> {
        let mut store = self.store.lock().await;
        let id = short_id(|candidate| store.transactions.iter().any(|tx| tx.id == candidate));
        let tx = Transaction::new(id, cmd, (self.today)())?;
        store.transactions.push(tx.clone());

        tracing::info!(
            id = %tx.id,
            kind = tx.kind.as_str(),
            amount = %tx.amount,
            category = %tx.category,
            "transaction recorded"
        );
        Ok(tx)
    }
}
