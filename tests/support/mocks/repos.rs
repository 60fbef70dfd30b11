// tests/support/mocks/repos.rs
use async_trait::async_trait;
use blog_core::domain::{
    account::{Account, AccountId, AccountRepository, NewAccount},
    errors::{DomainError, DomainResult},
    post::{Post, PostFilter, PostId, PostReadRepository},
    slug::Slug,
};
use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

/* -------------------------------- PostReadRepository -------------------------------- */

/// 公開判定を `PostFilter::matches` に委ねるインメモリ読み取りリポジトリ。
/// 呼び出し回数を記録する。
#[derive(Default)]
pub struct InMemoryPostRepo {
    posts: Mutex<Vec<Post>>,
    count_calls: AtomicUsize,
    list_calls: AtomicUsize,
}

impl InMemoryPostRepo {
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: Mutex::new(posts),
            ..Self::default()
        }
    }

    /// count/list の合計呼び出し回数
    pub fn query_calls(&self) -> usize {
        self.count_calls.load(Ordering::SeqCst) + self.list_calls.load(Ordering::SeqCst)
    }

    fn matching(&self, filter: &PostFilter) -> Vec<Post> {
        let mut posts: Vec<Post> = self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|post| filter.matches(post))
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.id.0.cmp(&a.id.0));
        posts
    }
}

#[async_trait]
impl PostReadRepository for InMemoryPostRepo {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|post| post.id == id)
            .cloned())
    }

    async fn find_published_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|post| post.is_published && post.slug == *slug)
            .cloned())
    }

    async fn count_published(&self, filter: &PostFilter) -> DomainResult<u64> {
        self.count_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.matching(filter).len() as u64)
    }

    async fn list_published(
        &self,
        filter: &PostFilter,
        limit: u32,
        offset: u64,
    ) -> DomainResult<Vec<Post>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .matching(filter)
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }
}

/* -------------------------------- AccountRepository -------------------------------- */

#[derive(Default)]
pub struct InMemoryAccountRepo {
    accounts: Mutex<Vec<Account>>,
}

impl InMemoryAccountRepo {
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        Self {
            accounts: Mutex::new(accounts),
        }
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepo {
    async fn insert(&self, _account: NewAccount) -> DomainResult<Account> {
        Err(DomainError::Persistence("not implemented".into()))
    }

    async fn find_by_id(&self, id: AccountId) -> DomainResult<Option<Account>> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|account| account.id == id)
            .cloned())
    }

    async fn delete(&self, id: AccountId) -> DomainResult<()> {
        self.accounts.lock().unwrap().retain(|account| account.id != id);
        Ok(())
    }
}
