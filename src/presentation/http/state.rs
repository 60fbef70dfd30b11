// src/presentation/http/state.rs
use crate::{application::services::ApplicationServices, domain::account::AccountId};
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub admin: AdminAccess,
}

/// Credentials for the management routes. Without a token they reject every
/// request.
#[derive(Clone, Debug, Default)]
pub struct AdminAccess {
    pub token: Option<String>,
    pub account_id: Option<AccountId>,
}
