use serde::{Deserialize, Serialize};

pub const DEFAULT_INCOME: f64 = 5_000_000.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: i64,
    pub name: String,
    pub amount: f64,
    pub is_patched: bool,
}

impl Expense {
    fn new(id: i64, name: &str, amount: f64, is_patched: bool) -> Self {
        Expense {
            id,
            name: name.to_string(),
            amount,
            is_patched,
        }
    }
}

pub fn default_expenses() -> Vec<Expense> {
    vec![
        Expense::new(1, "Motorbike Installment", 800_000.0, false),
        Expense::new(2, "Trendy Coffee", 400_000.0, false),
        Expense::new(3, "Netflix & Chill", 180_000.0, true),
    ]
}

// Blank, malformed and non-finite input is rejected.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

pub fn is_valid_entry(name: &str, amount_text: &str) -> bool {
    !name.trim().is_empty() && parse_number(amount_text).is_some()
}

#[derive(Clone, Debug, PartialEq)]
pub struct BudgetState {
    pub income: f64,
    pub expenses: Vec<Expense>,
}

impl Default for BudgetState {
    fn default() -> Self {
        BudgetState {
            income: DEFAULT_INCOME,
            expenses: default_expenses(),
        }
    }
}

impl BudgetState {
    pub fn cleared() -> Self {
        BudgetState {
            income: DEFAULT_INCOME,
            expenses: vec![],
        }
    }

    /// `now_millis` seeds the id; it is bumped past the largest id in use
    /// when the clock would collide with an existing entry.
    pub fn add_expense(&mut self, name: &str, amount_text: &str, now_millis: i64) -> Option<i64> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let amount = parse_number(amount_text)?;

        let id = self.next_id(now_millis);
        self.expenses.push(Expense::new(id, name, amount, false));
        Some(id)
    }

    fn next_id(&self, now_millis: i64) -> i64 {
        match self.expenses.iter().map(|e| e.id).max() {
            Some(max_id) if now_millis <= max_id => max_id
                .checked_add(1)
                .unwrap_or_else(|| self.lowest_free_id()),
            _ => now_millis,
        }
    }

    fn lowest_free_id(&self) -> i64 {
        (1..i64::MAX)
            .find(|id| !self.expenses.iter().any(|e| e.id == *id))
            .unwrap_or(0)
    }

    pub fn toggle_patch(&mut self, id: i64) -> bool {
        match self.expenses.iter_mut().find(|e| e.id == id) {
            Some(expense) => {
                expense.is_patched = !expense.is_patched;
                true
            }
            None => false,
        }
    }

    pub fn delete_expense(&mut self, id: i64) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        self.expenses.len() != before
    }

    pub fn set_income(&mut self, text: &str) {
        self.income = parse_number(text).unwrap_or(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_state() -> BudgetState {
        BudgetState::cleared()
    }

    fn find(state: &BudgetState, id: i64) -> &Expense {
        state.expenses.iter().find(|e| e.id == id).unwrap()
    }

    #[test]
    fn default_state_has_seed_expenses() {
        let state = BudgetState::default();
        assert_eq!(state.income, 5_000_000.0);
        assert_eq!(state.expenses.len(), 3);
        assert!(state.expenses[2].is_patched);
        assert!(!state.expenses[0].is_patched);
    }

    #[test]
    fn parse_number_accepts_decimal_text() {
        assert_eq!(parse_number("2500"), Some(2500.0));
        assert_eq!(parse_number("  12.5 "), Some(12.5));
        assert_eq!(parse_number("-40"), Some(-40.0));
    }

    #[test]
    fn parse_number_rejects_garbage() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn add_expense_appends_unpatched_entry() {
        let mut state = empty_state();
        let id = state.add_expense("Rent", "2000000", 1_700_000_000_000);

        assert_eq!(id, Some(1_700_000_000_000));
        assert_eq!(
            state.expenses,
            vec![Expense {
                id: 1_700_000_000_000,
                name: "Rent".to_string(),
                amount: 2_000_000.0,
                is_patched: false,
            }]
        );
    }

    #[test]
    fn entry_validation_matches_add_expense() {
        assert!(is_valid_entry("Rent", "100"));
        assert!(!is_valid_entry(" ", "100"));
        assert!(!is_valid_entry("Rent", "1e400"));
    }

    #[test]
    fn add_expense_trims_name() {
        let mut state = empty_state();
        state.add_expense("  Gym  ", "150000", 10);
        assert_eq!(state.expenses[0].name, "Gym");
    }

    #[test]
    fn add_expense_rejects_blank_name_or_bad_amount() {
        let mut state = empty_state();
        assert_eq!(state.add_expense("", "100", 10), None);
        assert_eq!(state.add_expense("   ", "100", 11), None);
        assert_eq!(state.add_expense("Snacks", "", 12), None);
        assert_eq!(state.add_expense("Snacks", "lots", 13), None);
        assert!(state.expenses.is_empty());
    }

    #[test]
    fn ids_stay_unique_within_one_millisecond() {
        let mut state = empty_state();
        let a = state.add_expense("A", "1", 500).unwrap();
        let b = state.add_expense("B", "1", 500).unwrap();
        let c = state.add_expense("C", "1", 499).unwrap();

        assert_eq!((a, b, c), (500, 501, 502));
    }

    #[test]
    fn seed_ids_do_not_collide_with_small_clock_values() {
        let mut state = BudgetState::default();
        let id = state.add_expense("Parking", "5000", 2).unwrap();
        assert_eq!(id, 4);
    }

    #[test]
    fn id_after_largest_possible_id_reuses_a_free_slot() {
        let mut state = empty_state();
        state.expenses.push(Expense::new(i64::MAX, "Legacy", 10.0, false));

        let first = state.add_expense("Fuel", "1", 5).unwrap();
        assert_eq!(first, 1);

        let second = state.add_expense("Parking", "1", 5).unwrap();
        assert_eq!(second, 2);
        assert_eq!(state.expenses.len(), 3);
    }

    #[test]
    fn toggle_patch_flips_flag() {
        let mut state = BudgetState::default();
        assert!(state.toggle_patch(1));
        assert!(find(&state, 1).is_patched);
        assert!(state.toggle_patch(1));
        assert!(!find(&state, 1).is_patched);
    }

    #[test]
    fn toggle_and_delete_ignore_unknown_ids() {
        let mut state = BudgetState::default();
        let before = state.clone();
        assert!(!state.toggle_patch(99));
        assert!(!state.delete_expense(99));
        assert_eq!(state, before);
    }

    #[test]
    fn add_then_delete_restores_list() {
        let mut state = BudgetState::default();
        let before = state.expenses.clone();

        let id = state.add_expense("Streaming", "99000", 1_000).unwrap();
        assert!(state.delete_expense(id));

        assert_eq!(state.expenses, before);
    }

    #[test]
    fn delete_keeps_order_of_the_rest() {
        let mut state = BudgetState::default();
        state.delete_expense(2);
        let ids: Vec<i64> = state.expenses.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn set_income_falls_back_to_zero() {
        let mut state = empty_state();
        state.set_income("7500000");
        assert_eq!(state.income, 7_500_000.0);

        state.set_income("");
        assert_eq!(state.income, 0.0);

        state.set_income("seven");
        assert_eq!(state.income, 0.0);
    }
}
