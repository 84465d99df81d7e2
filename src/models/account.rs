// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Account information models exposed by the provider seam.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A single balance of an account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccountBalance {
    /// Decimal amount as a string, e.g. "1234.56".
    pub amount: String,
    /// ISO-4217 currency code.
    pub currency: String,
    /// Balance type, e.g. "closingBooked" or "interimAvailable".
    pub balance_type: String,
}

/// A payment account of the authorized user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub iban: String,
    pub currency: String,
    pub balances: Vec<AccountBalance>,
    /// "enabled" or "deleted".
    pub status: String,
}

/// A card account of the authorized user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CardAccount {
    pub id: String,
    pub name: String,
    /// Masked card number, e.g. "525412******3241".
    pub masked_pan: String,
    pub currency: String,
    pub balances: Vec<AccountBalance>,
    pub status: String,
}

/// A booked transaction on a payment account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Transaction {
    pub id: String,
    pub account_id: String,
    /// Signed decimal amount as a string.
    pub amount: String,
    pub currency: String,
    /// "booked" or "pending".
    pub status: String,
    pub booking_date: NaiveDate,
    pub value_date: NaiveDate,
    pub remittance_information: String,
}

/// A booked transaction on a card account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CardTransaction {
    pub id: String,
    pub account_id: String,
    pub amount: String,
    pub currency: String,
    pub status: String,
    pub booking_date: NaiveDate,
    pub value_date: NaiveDate,
    pub masked_pan: String,
    pub details: String,
}

// ============================================================================
// API Query and Response Types
// ============================================================================

/// Optional date-range filter for transaction listings.
#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
pub struct TransactionsQuery {
    /// Include transactions booked on or after this date.
    pub from_date: Option<NaiveDate>,
    /// Include transactions booked on or before this date.
    pub to_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AccountsResponse {
    pub data: Vec<Account>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TransactionsResponse {
    pub data: Vec<Transaction>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CardAccountsResponse {
    pub data: Vec<CardAccount>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CardTransactionsResponse {
    pub data: Vec<CardTransaction>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_serializes_dates_as_iso() {
        let tx = Transaction {
            id: "t1".to_string(),
            account_id: "a1".to_string(),
            amount: "-12.40".to_string(),
            currency: "EUR".to_string(),
            status: "booked".to_string(),
            booking_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            value_date: NaiveDate::from_ymd_opt(2026, 1, 16).unwrap(),
            remittance_information: "Groceries".to_string(),
        };
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["booking_date"], "2026-01-15");
        assert_eq!(json["value_date"], "2026-01-16");
    }

    #[test]
    fn test_transactions_query_deserializes_optional_dates() {
        let query: TransactionsQuery =
            serde_json::from_str(r#"{"from_date":"2026-01-01"}"#).unwrap();
        assert_eq!(query.from_date, NaiveDate::from_ymd_opt(2026, 1, 1));
        assert_eq!(query.to_date, None);
    }
}
