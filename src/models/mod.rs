// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

pub mod account;
pub mod error_report;
pub mod session;
pub mod token;
pub mod version;
