use std::rc::Rc;

use crate::model::{default_expenses, BudgetState, Expense, DEFAULT_INCOME};
use crate::storage::KeyValueStore;

pub const INCOME_KEY: &str = "tangki_gaji_income";
pub const EXPENSES_KEY: &str = "tangki_gaji_expenses";

// Storage failures are logged and swallowed; the in-memory state wins.
#[derive(Clone)]
pub struct BudgetPersistence {
    store: Rc<dyn KeyValueStore>,
}

impl PartialEq for BudgetPersistence {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

impl BudgetPersistence {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        BudgetPersistence { store }
    }

    // Each key falls back to its own default.
    pub fn load(&self) -> BudgetState {
        let income = self
            .read(INCOME_KEY)
            .and_then(|raw| match raw.trim().parse::<f64>() {
                Ok(value) if value.is_finite() => Some(value),
                _ => {
                    log::warn!("ignoring unparsable income {:?}", raw);
                    None
                }
            })
            .unwrap_or(DEFAULT_INCOME);

        let expenses = self
            .read(EXPENSES_KEY)
            .and_then(|raw| match serde_json::from_str::<Vec<Expense>>(&raw) {
                Ok(list) => Some(list),
                Err(err) => {
                    log::warn!("ignoring corrupt expense list: {}", err);
                    None
                }
            })
            .unwrap_or_else(default_expenses);

        BudgetState { income, expenses }
    }

    pub fn save(&self, state: &BudgetState) {
        self.write(INCOME_KEY, &state.income.to_string());
        match serde_json::to_string(&state.expenses) {
            Ok(raw) => self.write(EXPENSES_KEY, &raw),
            Err(err) => log::warn!("could not serialize expenses: {}", err),
        }
    }

    pub fn clear(&self) {
        for key in [INCOME_KEY, EXPENSES_KEY] {
            if let Err(err) = self.store.remove(key) {
                log::warn!("{:#}", err);
            }
        }
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("{:#}", err);
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(err) = self.store.set(key, value) {
            log::warn!("{:#}", err);
        }
    }
}
