// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Provider seam between the connector and the bank-side core.
//!
//! The connector owns no account data. Everything account-shaped is fetched
//! through the [`Provider`] trait; [`DemoProvider`] is a seeded in-memory
//! implementation used for development and tests.

use crate::models::account::{Account, AccountBalance, CardAccount, CardTransaction, Transaction};
use crate::services::auth_middleware::ApiError;
use chrono::NaiveDate;

/// Bank-side provider interface.
pub trait Provider: Send + Sync {
    /// Authorization types this provider supports for token creation.
    fn authorization_types(&self) -> Vec<String>;

    /// Resolve the user a successful authorization of the given type grants
    /// access to. The interactive authorization flow itself happens outside
    /// the connector.
    fn authorize_user(&self, authorization_type: &str) -> Result<String, ApiError>;

    fn accounts_of_user(&self, user_id: &str) -> Result<Vec<Account>, ApiError>;

    fn transactions_of_account(
        &self,
        user_id: &str,
        account_id: &str,
        from_date: Option<NaiveDate>,
        to_date: Option<NaiveDate>,
    ) -> Result<Vec<Transaction>, ApiError>;

    fn card_accounts_of_user(&self, user_id: &str) -> Result<Vec<CardAccount>, ApiError>;

    fn transactions_of_card_account(
        &self,
        user_id: &str,
        account_id: &str,
        from_date: Option<NaiveDate>,
        to_date: Option<NaiveDate>,
    ) -> Result<Vec<CardTransaction>, ApiError>;
}

/// Keep transactions whose booking date falls inside the optional range.
fn in_range(booking_date: NaiveDate, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    from.is_none_or(|f| booking_date >= f) && to.is_none_or(|t| booking_date <= t)
}

fn user_not_found() -> ApiError {
    ApiError::not_found("UserNotFound", "User not found")
}

fn account_not_found() -> ApiError {
    ApiError::not_found("AccountNotFound", "Account not found")
}

// ---------------------------------------------------------------------------
// Demo provider
// ---------------------------------------------------------------------------

/// Seeded in-memory provider with one user, two payment accounts, and one
/// card account.
pub struct DemoProvider {
    user_id: String,
    accounts: Vec<Account>,
    transactions: Vec<Transaction>,
    card_accounts: Vec<CardAccount>,
    card_transactions: Vec<CardTransaction>,
}

impl DemoProvider {
    pub const SUPPORTED_AUTHORIZATION_TYPES: [&'static str; 2] = ["oauth", "login_password"];

    pub fn seeded() -> Self {
        Self {
            user_id: "1".to_string(),
            accounts: Self::seed_accounts(),
            transactions: Self::seed_transactions(),
            card_accounts: Self::seed_card_accounts(),
            card_transactions: Self::seed_card_transactions(),
        }
    }

    fn seed_accounts() -> Vec<Account> {
        vec![
            Account {
                id: "101".to_string(),
                name: "Main Account".to_string(),
                iban: "DE89370400440532013000".to_string(),
                currency: "EUR".to_string(),
                balances: vec![AccountBalance {
                    amount: "2714.55".to_string(),
                    currency: "EUR".to_string(),
                    balance_type: "closingBooked".to_string(),
                }],
                status: "enabled".to_string(),
            },
            Account {
                id: "102".to_string(),
                name: "Savings".to_string(),
                iban: "DE75512108001245126199".to_string(),
                currency: "USD".to_string(),
                balances: vec![AccountBalance {
                    amount: "10500.00".to_string(),
                    currency: "USD".to_string(),
                    balance_type: "interimAvailable".to_string(),
                }],
                status: "enabled".to_string(),
            },
        ]
    }

    fn seed_transactions() -> Vec<Transaction> {
        vec![
            Transaction {
                id: "t-1001".to_string(),
                account_id: "101".to_string(),
                amount: "-42.10".to_string(),
                currency: "EUR".to_string(),
                status: "booked".to_string(),
                booking_date: date(2026, 1, 5),
                value_date: date(2026, 1, 5),
                remittance_information: "Grocery store".to_string(),
            },
            Transaction {
                id: "t-1002".to_string(),
                account_id: "101".to_string(),
                amount: "1500.00".to_string(),
                currency: "EUR".to_string(),
                status: "booked".to_string(),
                booking_date: date(2026, 2, 1),
                value_date: date(2026, 2, 2),
                remittance_information: "Salary".to_string(),
            },
            Transaction {
                id: "t-2001".to_string(),
                account_id: "102".to_string(),
                amount: "-200.00".to_string(),
                currency: "USD".to_string(),
                status: "booked".to_string(),
                booking_date: date(2026, 2, 10),
                value_date: date(2026, 2, 10),
                remittance_information: "Transfer to main".to_string(),
            },
        ]
    }

    fn seed_card_accounts() -> Vec<CardAccount> {
        vec![CardAccount {
            id: "301".to_string(),
            name: "Credit Card".to_string(),
            masked_pan: "525412******3241".to_string(),
            currency: "EUR".to_string(),
            balances: vec![AccountBalance {
                amount: "-320.99".to_string(),
                currency: "EUR".to_string(),
                balance_type: "interimBooked".to_string(),
            }],
            status: "enabled".to_string(),
        }]
    }

    fn seed_card_transactions() -> Vec<CardTransaction> {
        vec![
            CardTransaction {
                id: "ct-3001".to_string(),
                account_id: "301".to_string(),
                amount: "-89.99".to_string(),
                currency: "EUR".to_string(),
                status: "booked".to_string(),
                booking_date: date(2026, 1, 20),
                value_date: date(2026, 1, 21),
                masked_pan: "525412******3241".to_string(),
                details: "Online purchase".to_string(),
            },
            CardTransaction {
                id: "ct-3002".to_string(),
                account_id: "301".to_string(),
                amount: "-231.00".to_string(),
                currency: "EUR".to_string(),
                status: "booked".to_string(),
                booking_date: date(2026, 2, 14),
                value_date: date(2026, 2, 14),
                masked_pan: "525412******3241".to_string(),
                details: "Hotel booking".to_string(),
            },
        ]
    }

    fn check_user(&self, user_id: &str) -> Result<(), ApiError> {
        if user_id == self.user_id {
            Ok(())
        } else {
            Err(user_not_found())
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Seed constants are always valid calendar dates.
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

impl Provider for DemoProvider {
    fn authorization_types(&self) -> Vec<String> {
        Self::SUPPORTED_AUTHORIZATION_TYPES
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn authorize_user(&self, authorization_type: &str) -> Result<String, ApiError> {
        if !self
            .authorization_types()
            .iter()
            .any(|t| t == authorization_type)
        {
            return Err(ApiError::bad_request(
                "InvalidAuthorizationType",
                format!("Unsupported authorization type: {authorization_type}"),
            ));
        }
        Ok(self.user_id.clone())
    }

    fn accounts_of_user(&self, user_id: &str) -> Result<Vec<Account>, ApiError> {
        self.check_user(user_id)?;
        Ok(self.accounts.clone())
    }

    fn transactions_of_account(
        &self,
        user_id: &str,
        account_id: &str,
        from_date: Option<NaiveDate>,
        to_date: Option<NaiveDate>,
    ) -> Result<Vec<Transaction>, ApiError> {
        self.check_user(user_id)?;
        if !self.accounts.iter().any(|a| a.id == account_id) {
            return Err(account_not_found());
        }
        Ok(self
            .transactions
            .iter()
            .filter(|t| t.account_id == account_id && in_range(t.booking_date, from_date, to_date))
            .cloned()
            .collect())
    }

    fn card_accounts_of_user(&self, user_id: &str) -> Result<Vec<CardAccount>, ApiError> {
        self.check_user(user_id)?;
        Ok(self.card_accounts.clone())
    }

    fn transactions_of_card_account(
        &self,
        user_id: &str,
        account_id: &str,
        from_date: Option<NaiveDate>,
        to_date: Option<NaiveDate>,
    ) -> Result<Vec<CardTransaction>, ApiError> {
        self.check_user(user_id)?;
        if !self.card_accounts.iter().any(|a| a.id == account_id) {
            return Err(account_not_found());
        }
        Ok(self
            .card_transactions
            .iter()
            .filter(|t| t.account_id == account_id && in_range(t.booking_date, from_date, to_date))
            .cloned()
            .collect())
    }
}
