use crate::domain::account::{
    entity::{Account, NewAccount},
    value_objects::AccountId,
};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn insert(&self, account: NewAccount) -> DomainResult<Account>;

    async fn find_by_id(&self, id: AccountId) -> DomainResult<Option<Account>>;

    /// Removes the account. Posts keep existing with their author references cleared.
    async fn delete(&self, id: AccountId) -> DomainResult<()>;
}
