use std::fmt;

use gloo_net::http::Request;
use serde::Deserialize;

use crate::model::{Expense, ExpenseDraft};

const API_BASE_URL: &str = "http://localhost:5000";

/// One pie-chart datum from `/expenses/categories`.
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct CategoryTotal {
    pub name: String,
    pub value: f64,
}

/// One bar-chart datum from `/expenses/week` or `/expenses/month`.
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct PeriodTotal {
    pub name: String,
    pub total: f64,
}

#[derive(Debug)]
pub enum ApiError {
    /// The server answered with a non-success status.
    Status(u16),
    /// The request never completed or the body could not be decoded.
    Network(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Status(code) => write!(f, "server responded with status {code}"),
            ApiError::Network(msg) => write!(f, "request failed: {msg}"),
        }
    }
}

// The list endpoint wraps the records twice; either layer may be missing
// or null, in which case the snapshot is simply empty.
#[derive(Deserialize)]
struct ExpenseListEnvelope {
    data: Option<ExpenseListPage>,
}

#[derive(Deserialize)]
struct ExpenseListPage {
    data: Option<Vec<Expense>>,
}

#[derive(Deserialize)]
struct CategoryTotalsEnvelope {
    data: Option<Vec<CategoryTotal>>,
}

#[derive(Deserialize)]
struct PeriodTotalsEnvelope {
    data: Option<Vec<PeriodTotal>>,
}

fn expenses_url() -> String {
    format!("{API_BASE_URL}/api/v1/expenses")
}

fn expense_url(id: i64) -> String {
    format!("{API_BASE_URL}/api/v1/expenses/{id}")
}

fn aggregate_url(kind: &str) -> String {
    format!("{API_BASE_URL}/api/v1/expenses/{kind}")
}

fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

pub async fn fetch_expenses(authorization: &str) -> Result<Vec<Expense>, ApiError> {
    let resp = Request::get(&expenses_url())
        .header("Authorization", authorization)
        .send()
        .await
        .map_err(network)?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    let envelope: ExpenseListEnvelope = resp.json().await.map_err(network)?;
    Ok(envelope.data.and_then(|page| page.data).unwrap_or_default())
}

pub async fn create_expense(authorization: &str, draft: &ExpenseDraft) -> Result<(), ApiError> {
    let resp = Request::post(&expenses_url())
        .header("Authorization", authorization)
        .json(draft)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(())
}

pub async fn update_expense(
    authorization: &str,
    id: i64,
    draft: &ExpenseDraft,
) -> Result<(), ApiError> {
    let resp = Request::put(&expense_url(id))
        .header("Authorization", authorization)
        .json(draft)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(())
}

pub async fn delete_expense(authorization: &str, id: i64) -> Result<(), ApiError> {
    let resp = Request::delete(&expense_url(id))
        .header("Authorization", authorization)
        .send()
        .await
        .map_err(network)?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(())
}

pub async fn fetch_category_totals(authorization: &str) -> Result<Vec<CategoryTotal>, ApiError> {
    let resp = Request::get(&aggregate_url("categories"))
        .header("Authorization", authorization)
        .send()
        .await
        .map_err(network)?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    let envelope: CategoryTotalsEnvelope = resp.json().await.map_err(network)?;
    Ok(envelope.data.unwrap_or_default())
}

pub async fn fetch_monthly_totals(authorization: &str) -> Result<Vec<PeriodTotal>, ApiError> {
    fetch_period_totals(authorization, "month").await
}

pub async fn fetch_weekly_totals(authorization: &str) -> Result<Vec<PeriodTotal>, ApiError> {
    fetch_period_totals(authorization, "week").await
}

async fn fetch_period_totals(
    authorization: &str,
    kind: &str,
) -> Result<Vec<PeriodTotal>, ApiError> {
    let resp = Request::get(&aggregate_url(kind))
        .header("Authorization", authorization)
        .send()
        .await
        .map_err(network)?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    let envelope: PeriodTotalsEnvelope = resp.json().await.map_err(network)?;
    Ok(envelope.data.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_envelope_unwraps_nested_data() {
        let body = r#"{"data":{"data":[
            {"id":1,"title":"Coffee","description":"Morning","category":"Food","amount":5,"date":"2024-01-01T00:00:00Z"}
        ]}}"#;
        let envelope: ExpenseListEnvelope = serde_json::from_str(body).unwrap();
        let expenses = envelope.data.and_then(|p| p.data).unwrap_or_default();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].id, 1);
        assert_eq!(expenses[0].category, "Food");
    }

    #[test]
    fn list_envelope_tolerates_null_layers() {
        for body in [r#"{"data":null}"#, r#"{"data":{"data":null}}"#] {
            let envelope: ExpenseListEnvelope = serde_json::from_str(body).unwrap();
            assert!(envelope.data.and_then(|p| p.data).unwrap_or_default().is_empty());
        }
    }

    #[test]
    fn aggregate_envelopes_match_the_wire_shapes() {
        let categories: CategoryTotalsEnvelope =
            serde_json::from_str(r#"{"data":[{"name":"Food","value":17.5}]}"#).unwrap();
        let categories = categories.data.unwrap_or_default();
        assert_eq!(categories[0].name, "Food");
        assert_eq!(categories[0].value, 17.5);

        let weeks: PeriodTotalsEnvelope =
            serde_json::from_str(r#"{"data":[{"name":"2024-W01","total":42.0}]}"#).unwrap();
        let weeks = weeks.data.unwrap_or_default();
        assert_eq!(weeks[0].name, "2024-W01");
        assert_eq!(weeks[0].total, 42.0);
    }

    #[test]
    fn draft_serializes_without_an_id() {
        let draft = ExpenseDraft {
            title: "Coffee".to_string(),
            description: "Morning".to_string(),
            category: "Food".to_string(),
            amount: 5.0,
            date: "2024-01-01".to_string(),
        };
        let value = serde_json::to_value(&draft).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.get("id").is_none());
        assert_eq!(object["title"], "Coffee");
        assert_eq!(object["date"], "2024-01-01");
    }

    #[test]
    fn urls_target_the_versioned_api() {
        assert_eq!(expenses_url(), "http://localhost:5000/api/v1/expenses");
        assert_eq!(expense_url(7), "http://localhost:5000/api/v1/expenses/7");
        assert_eq!(
            aggregate_url("week"),
            "http://localhost:5000/api/v1/expenses/week"
        );
    }
}
