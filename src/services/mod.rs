// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

pub mod auth;
pub mod auth_middleware;
pub mod callbacks;
pub mod config;
pub mod logging;
pub mod provider;
pub mod store;
pub mod tokens;
