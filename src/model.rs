use serde::{Deserialize, Serialize};

/// A server-owned expense record as cached in the current snapshot.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub date: String,
}

/// The editable field set of an expense, used for both the creation form
/// and per-row edit drafts. Never carries an id; the server assigns those.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub date: String,
}

impl Default for ExpenseDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: String::new(),
            amount: 0.0,
            date: today(),
        }
    }
}

impl From<&Expense> for ExpenseDraft {
    fn from(expense: &Expense) -> Self {
        Self {
            title: expense.title.clone(),
            description: expense.description.clone(),
            category: expense.category.clone(),
            amount: expense.amount,
            date: truncate_date(&expense.date),
        }
    }
}

pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Reduces an ISO date string to its `YYYY-MM-DD` prefix for date inputs.
pub fn truncate_date(raw: &str) -> String {
    raw.chars().take(10).collect()
}

/// Filter options for the current snapshot: the "All" sentinel followed by
/// the distinct categories in first-seen order.
pub fn derive_categories(expenses: &[Expense]) -> Vec<String> {
    let mut categories = vec!["All".to_string()];
    for expense in expenses {
        if !categories[1..].iter().any(|c| *c == expense.category) {
            categories.push(expense.category.clone());
        }
    }
    categories
}

pub fn filter_expenses(expenses: &[Expense], filter: &str) -> Vec<Expense> {
    if filter == "All" {
        expenses.to_vec()
    } else {
        expenses
            .iter()
            .filter(|e| e.category == filter)
            .cloned()
            .collect()
    }
}

/// Tracks which row, if any, is being edited and its uncommitted draft.
/// Starting an edit on another row replaces the pending draft outright, so
/// a single row is editable at a time and stale drafts cannot leak between
/// rows. Commit success/failure handling stays with the caller: only an
/// explicit `cancel` (or a fresh `start`) drops the draft.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct RowEditor {
    editing: Option<(i64, ExpenseDraft)>,
}

impl RowEditor {
    pub fn start(&mut self, expense: &Expense) {
        self.editing = Some((expense.id, ExpenseDraft::from(expense)));
    }

    pub fn cancel(&mut self) {
        self.editing = None;
    }

    pub fn editing_id(&self) -> Option<i64> {
        self.editing.as_ref().map(|(id, _)| *id)
    }

    pub fn is_editing(&self, id: i64) -> bool {
        self.editing_id() == Some(id)
    }

    pub fn draft(&self) -> Option<&ExpenseDraft> {
        self.editing.as_ref().map(|(_, draft)| draft)
    }

    /// The pending edit as an owned pair, ready to submit.
    pub fn pending(&self) -> Option<(i64, ExpenseDraft)> {
        self.editing.clone()
    }

    pub fn update_draft(&mut self, apply: impl FnOnce(&mut ExpenseDraft)) {
        if let Some((_, draft)) = self.editing.as_mut() {
            apply(draft);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: i64, title: &str, category: &str, amount: f64, date: &str) -> Expense {
        Expense {
            id,
            title: title.to_string(),
            description: format!("{title} expense"),
            category: category.to_string(),
            amount,
            date: date.to_string(),
        }
    }

    #[test]
    fn categories_start_with_all_sentinel() {
        let expenses = [expense(1, "Coffee", "Food", 5.0, "2024-01-01")];
        assert_eq!(derive_categories(&expenses), vec!["All", "Food"]);
    }

    #[test]
    fn categories_keep_first_seen_order_without_duplicates() {
        let expenses = [
            expense(1, "Coffee", "Food", 5.0, "2024-01-01"),
            expense(2, "Train", "Travel", 12.0, "2024-01-02"),
            expense(3, "Lunch", "Food", 9.0, "2024-01-03"),
            expense(4, "Hotel", "Travel", 80.0, "2024-01-04"),
        ];
        assert_eq!(derive_categories(&expenses), vec!["All", "Food", "Travel"]);
    }

    #[test]
    fn categories_of_empty_snapshot_is_just_all() {
        assert_eq!(derive_categories(&[]), vec!["All"]);
    }

    #[test]
    fn filter_all_returns_full_snapshot() {
        let expenses = [
            expense(1, "Coffee", "Food", 5.0, "2024-01-01"),
            expense(2, "Train", "Travel", 12.0, "2024-01-02"),
        ];
        assert_eq!(filter_expenses(&expenses, "All"), expenses.to_vec());
    }

    #[test]
    fn filter_restricts_to_matching_category() {
        let expenses = [expense(1, "Coffee", "Food", 5.0, "2024-01-01")];
        let food = filter_expenses(&expenses, "Food");
        assert_eq!(food.len(), 1);
        assert_eq!(food[0].id, 1);
        assert!(filter_expenses(&expenses, "Travel").is_empty());
    }

    #[test]
    fn start_edit_seeds_draft_from_row() {
        let row = expense(1, "Coffee", "Food", 5.0, "2024-01-01T00:00:00Z");
        let mut editor = RowEditor::default();
        editor.start(&row);

        assert!(editor.is_editing(1));
        let draft = editor.draft().unwrap();
        assert_eq!(draft.title, "Coffee");
        assert_eq!(draft.amount, 5.0);
        assert_eq!(draft.date, "2024-01-01");
    }

    #[test]
    fn mutating_draft_leaves_source_row_untouched() {
        let row = expense(1, "Coffee", "Food", 5.0, "2024-01-01");
        let mut editor = RowEditor::default();
        editor.start(&row);
        editor.update_draft(|d| d.amount = 10.0);

        assert_eq!(row.amount, 5.0);
        assert_eq!(editor.draft().unwrap().amount, 10.0);
    }

    #[test]
    fn starting_another_row_silently_drops_previous_draft() {
        let a = expense(1, "Coffee", "Food", 5.0, "2024-01-01");
        let b = expense(2, "Train", "Travel", 12.0, "2024-01-02");
        let mut editor = RowEditor::default();

        editor.start(&a);
        editor.update_draft(|d| d.title = "Espresso".to_string());
        editor.start(&b);

        assert!(!editor.is_editing(1));
        assert!(editor.is_editing(2));
        assert_eq!(editor.draft().unwrap().title, "Train");
    }

    #[test]
    fn cancel_discards_the_draft() {
        let row = expense(1, "Coffee", "Food", 5.0, "2024-01-01");
        let mut editor = RowEditor::default();
        editor.start(&row);
        editor.cancel();

        assert_eq!(editor.editing_id(), None);
        assert!(editor.draft().is_none());
        assert!(editor.pending().is_none());
    }

    #[test]
    fn draft_survives_until_explicitly_cancelled() {
        // A failed save never touches the editor, so the pending pair must
        // stay intact across repeated reads.
        let row = expense(1, "Coffee", "Food", 5.0, "2024-01-01");
        let mut editor = RowEditor::default();
        editor.start(&row);
        editor.update_draft(|d| d.amount = 10.0);

        let (id, draft) = editor.pending().unwrap();
        assert_eq!(id, 1);
        assert_eq!(draft.amount, 10.0);
        assert_eq!(editor.pending().unwrap().1.amount, 10.0);
    }

    #[test]
    fn truncate_date_drops_time_component() {
        assert_eq!(truncate_date("2024-01-01T15:04:05Z"), "2024-01-01");
        assert_eq!(truncate_date("2024-01-01"), "2024-01-01");
        assert_eq!(truncate_date(""), "");
    }

    #[test]
    fn default_draft_is_empty_except_for_the_date() {
        let draft = ExpenseDraft::default();
        assert!(draft.title.is_empty());
        assert!(draft.description.is_empty());
        assert!(draft.category.is_empty());
        assert_eq!(draft.amount, 0.0);
        assert_eq!(draft.date.len(), 10);
    }
}
