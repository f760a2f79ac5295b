use std::rc::Rc;

use chrono::Utc;
use yew::functional::Reducible;

use crate::model::BudgetState;
use crate::persistence::BudgetPersistence;
use crate::summary::TankSummary;

#[derive(Clone, Debug, PartialEq)]
pub enum TankAction {
    SetIncome(String),
    AddExpense { name: String, amount: String },
    TogglePatch(i64),
    DeleteExpense(i64),
    /// Dispatch only after the user confirmed; the store does not ask again.
    Reset,
}

/// Budget state plus the persistence it is mirrored to. Every action is
/// applied and persisted before the reducer returns.
#[derive(Clone, PartialEq)]
pub struct TankStore {
    state: BudgetState,
    persistence: BudgetPersistence,
}

impl TankStore {
    pub fn load(persistence: BudgetPersistence) -> Self {
        let state = persistence.load();
        log::info!(
            "loaded budget: income {}, {} expenses",
            state.income,
            state.expenses.len()
        );
        TankStore { state, persistence }
    }

    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    pub fn summary(&self) -> TankSummary {
        TankSummary::of(&self.state)
    }

    /// Returns false when the action left the state untouched.
    pub fn apply(&mut self, action: TankAction, now_millis: i64) -> bool {
        let changed = match action {
            TankAction::SetIncome(text) => {
                self.state.set_income(&text);
                log::info!("income set to {}", self.state.income);
                true
            }
            TankAction::AddExpense { name, amount } => {
                match self.state.add_expense(&name, &amount, now_millis) {
                    Some(id) => {
                        log::info!("added expense {} ({})", id, name.trim());
                        true
                    }
                    None => {
                        log::debug!("rejected expense {:?} / {:?}", name, amount);
                        false
                    }
                }
            }
            TankAction::TogglePatch(id) => {
                let found = self.state.toggle_patch(id);
                if !found {
                    log::debug!("toggle: no expense {}", id);
                }
                found
            }
            TankAction::DeleteExpense(id) => {
                let found = self.state.delete_expense(id);
                if found {
                    log::info!("deleted expense {}", id);
                } else {
                    log::debug!("delete: no expense {}", id);
                }
                found
            }
            TankAction::Reset => {
                self.state = BudgetState::cleared();
                // Keys are removed, not rewritten with the cleared state, so a
                // reload right after a reset shows the seed expenses again.
                self.persistence.clear();
                log::info!("budget reset to factory defaults");
                return true;
            }
        };

        if changed {
            self.persistence.save(&self.state);
        }
        changed
    }
}

impl Reducible for TankStore {
    type Action = TankAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action, Utc::now().timestamp_millis()) {
            Rc::new(next)
        } else {
            self
        }
    }
}
