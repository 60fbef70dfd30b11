// tests/sqlite_repositories.rs
use blog_core::application::commands::content::{
    CreateCategoryCommand, CreatePostCommand, CreateTagCommand, UpdatePostCommand,
};
use blog_core::application::services::ApplicationServices;
use blog_core::domain::{
    account::{AccountId, AccountRepository},
    post::{PostFilter, PostId, PostReadRepository},
    slug::Slug,
};
use blog_core::infrastructure::repositories::{SqliteAccountRepository, SqlitePostReadRepository};

mod support;

async fn seed_post(
    services: &ApplicationServices,
    author: Option<AccountId>,
    command: CreatePostCommand,
) -> i64 {
    services
        .content_commands
        .create_post(author, command)
        .await
        .expect("create post")
        .id
}

fn draft_or_published(title: &str, excerpt: &str, published: bool) -> CreatePostCommand {
    CreatePostCommand::builder()
        .title(title)
        .excerpt(excerpt)
        .content("Texto")
        .published(published)
        .build()
        .unwrap()
}

/// 公開記事だけが ID 降順で返り、件数も一致する
#[tokio::test]
async fn published_listing_filters_and_orders() {
    let pool = support::memory_pool().await;
    let services = support::sqlite_services(&pool);
    let repo = SqlitePostReadRepository::new(pool.clone());

    let first = seed_post(&services, None, draft_or_published("Um", "a", true)).await;
    seed_post(&services, None, draft_or_published("Dois", "b", false)).await;
    let third = seed_post(&services, None, draft_or_published("Três", "c", true)).await;

    assert_eq!(repo.count_published(&PostFilter::All).await.unwrap(), 2);
    let posts = repo.list_published(&PostFilter::All, 9, 0).await.unwrap();
    let ids: Vec<i64> = posts.iter().map(|post| post.id.0).collect();
    assert_eq!(ids, vec![third, first]);

    let offset = repo.list_published(&PostFilter::All, 1, 1).await.unwrap();
    assert_eq!(offset.len(), 1);
    assert_eq!(offset[0].id.0, first);
}

#[tokio::test]
async fn search_matches_case_insensitively() {
    let pool = support::memory_pool().await;
    let services = support::sqlite_services(&pool);
    let repo = SqlitePostReadRepository::new(pool.clone());

    let hit = seed_post(&services, None, draft_or_published("Nada", "Category theory", true)).await;
    seed_post(&services, None, draft_or_published("Outro", "sem relação", true)).await;
    seed_post(&services, None, draft_or_published("Cat draft", "x", false)).await;

    let filter = PostFilter::Search("cat".into());
    let posts = repo.list_published(&filter, 9, 0).await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id.0, hit);
}

/// 非 ASCII の大文字小文字もインメモリの判定と同じく無視される（更新後も追従する）
#[tokio::test]
async fn search_folds_non_ascii_case() {
    let pool = support::memory_pool().await;
    let services = support::sqlite_services(&pool);
    let repo = SqlitePostReadRepository::new(pool.clone());

    let hit = seed_post(
        &services,
        None,
        draft_or_published("PROGRAMAÇÃO EM RUST", "x", true),
    )
    .await;
    let renamed = seed_post(&services, None, draft_or_published("Outro", "y", true)).await;

    let filter = PostFilter::Search("programação".into());
    let posts = repo.list_published(&filter, 9, 0).await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id.0, hit);
    assert!(filter.matches(&posts[0]));

    services
        .content_commands
        .update_post(
            None,
            UpdatePostCommand {
                id: renamed,
                title: Some("ÁRVORES DE DECISÃO".into()),
                ..UpdatePostCommand::default()
            },
        )
        .await
        .expect("update post");

    let filter = PostFilter::Search("árvores de decisão".into());
    assert_eq!(repo.count_published(&filter).await.unwrap(), 1);
    let posts = repo.list_published(&filter, 9, 0).await.unwrap();
    assert_eq!(posts[0].id.0, renamed);

    assert_eq!(
        repo.count_published(&PostFilter::Search("outro".into()))
            .await
            .unwrap(),
        0
    );
}

/// LIKE のワイルドカードはリテラルとして扱われる
#[tokio::test]
async fn search_escapes_like_wildcards() {
    let pool = support::memory_pool().await;
    let services = support::sqlite_services(&pool);
    let repo = SqlitePostReadRepository::new(pool.clone());

    let hit = seed_post(&services, None, draft_or_published("Desconto de 50%", "x", true)).await;
    seed_post(&services, None, draft_or_published("Desconto de 500", "x", true)).await;
    seed_post(&services, None, draft_or_published("snake_case", "x", true)).await;

    let posts = repo
        .list_published(&PostFilter::Search("0%".into()), 9, 0)
        .await
        .unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id.0, hit);

    assert_eq!(
        repo.count_published(&PostFilter::Search("e_c".into()))
            .await
            .unwrap(),
        1
    );
}

#[tokio::test]
async fn taxonomy_filters_and_tag_hydration() {
    let pool = support::memory_pool().await;
    let services = support::sqlite_services(&pool);
    let repo = SqlitePostReadRepository::new(pool.clone());

    let category = services
        .content_commands
        .create_category(CreateCategoryCommand {
            name: "Viagem".into(),
            slug: Some("viagem".into()),
        })
        .await
        .unwrap();
    let praia = services
        .content_commands
        .create_tag(CreateTagCommand {
            name: "Praia".into(),
            slug: Some("praia".into()),
        })
        .await
        .unwrap();
    let serra = services
        .content_commands
        .create_tag(CreateTagCommand {
            name: "Serra".into(),
            slug: Some("serra".into()),
        })
        .await
        .unwrap();

    let tagged = seed_post(
        &services,
        None,
        CreatePostCommand::builder()
            .title("Litoral")
            .excerpt("x")
            .content("y")
            .published(true)
            .category(category.id)
            .tag(serra.id)
            .tag(praia.id)
            .build()
            .unwrap(),
    )
    .await;
    seed_post(&services, None, draft_or_published("Sem categoria", "x", true)).await;

    let by_category = repo
        .list_published(&PostFilter::CategorySlug("viagem".into()), 9, 0)
        .await
        .unwrap();
    assert_eq!(by_category.len(), 1);
    assert_eq!(by_category[0].id.0, tagged);
    assert_eq!(
        by_category[0].category.as_ref().map(|c| c.name.as_str()),
        Some("Viagem")
    );

    let by_tag = repo
        .list_published(&PostFilter::TagSlug("serra".into()), 9, 0)
        .await
        .unwrap();
    assert_eq!(by_tag.len(), 1);
    let names: Vec<_> = by_tag[0].tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Praia", "Serra"]);

    let found = repo
        .find_published_by_slug(&by_tag[0].slug)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, PostId(tagged));
}

/// アカウント削除後も記事は残り、作成者は NULL になる
#[tokio::test]
async fn deleting_account_clears_post_authorship() {
    let pool = support::memory_pool().await;
    let services = support::sqlite_services(&pool);
    let accounts = SqliteAccountRepository::new(pool.clone());
    let repo = SqlitePostReadRepository::new(pool.clone());

    let author = support::insert_account(&pool, "ana", "Ana", "Souza").await;
    let id = seed_post(&services, Some(author.id), draft_or_published("Órfão", "x", true)).await;
    assert_eq!(
        repo.count_published(&PostFilter::Author(author.id))
            .await
            .unwrap(),
        1
    );

    accounts.delete(author.id).await.unwrap();

    let post = repo.find_by_id(PostId(id)).await.unwrap().unwrap();
    assert!(post.created_by.is_none());
    assert!(accounts.find_by_id(author.id).await.unwrap().is_none());
}

#[tokio::test]
async fn unknown_slug_is_none() {
    let pool = support::memory_pool().await;
    let repo = SqlitePostReadRepository::new(pool.clone());

    let slug = Slug::new("nao-existe").unwrap();
    assert!(repo.find_published_by_slug(&slug).await.unwrap().is_none());
    assert!(repo.find_by_id(PostId(1)).await.unwrap().is_none());
}
