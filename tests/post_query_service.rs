// tests/post_query_service.rs
use blog_core::application::{
    dto::PageRequest,
    error::ApplicationError,
    queries::posts::{
        GetPostBySlugQuery, INDEX_TITLE, ListPostsByAuthorQuery, ListPostsByCategoryQuery,
        ListPostsByTagQuery, ListPublishedPostsQuery, PostQueryService, SearchOutcome,
        SearchPostsQuery,
    },
};
use std::sync::Arc;

mod support;

use support::{InMemoryAccountRepo, InMemoryPostRepo, PostBuilder, account, published_posts};

fn service_with(posts: InMemoryPostRepo) -> (PostQueryService, Arc<InMemoryPostRepo>) {
    let posts = Arc::new(posts);
    let accounts = Arc::new(InMemoryAccountRepo::with_accounts(vec![
        account(1, "ana", "Ana", "Souza"),
        account(2, "bia", "", ""),
    ]));
    (PostQueryService::new(posts.clone(), accounts), posts)
}

fn ids(listing: &blog_core::application::dto::PostListingDto) -> Vec<i64> {
    listing.items.iter().map(|post| post.id).collect()
}

/// 公開記事のみ、新しい順に 9 件ずつ返すことを確認する
#[tokio::test]
async fn index_lists_published_posts_newest_first() {
    let mut posts = published_posts(20);
    posts.push(PostBuilder::new(21).draft().build());
    let (service, _) = service_with(InMemoryPostRepo::with_posts(posts));

    let listing = service
        .list_published(ListPublishedPostsQuery {
            page: PageRequest::first(),
        })
        .await
        .unwrap();

    assert_eq!(listing.title, INDEX_TITLE);
    assert_eq!(ids(&listing), (12..=20).rev().collect::<Vec<_>>());
    assert_eq!(listing.page.count, 20);
    assert_eq!(listing.page.num_pages, 3);
    assert!(listing.page.has_next);
    assert!(!listing.page.has_previous);
}

/// 範囲外・不正なページ番号は最寄りの有効ページに丸められる
#[tokio::test]
async fn page_numbers_are_clamped_into_range() {
    let (service, _) = service_with(InMemoryPostRepo::with_posts(published_posts(20)));

    for (raw, expected) in [
        (Some("999"), 3),
        (Some("abc"), 1),
        (Some("0"), 1),
        (Some("-4"), 1),
        (Some(" 2 "), 2),
        (None, 1),
    ] {
        let listing = service
            .list_published(ListPublishedPostsQuery {
                page: PageRequest::parse(raw),
            })
            .await
            .unwrap();
        assert_eq!(listing.page.number, expected, "page {raw:?}");
    }

    let last = service
        .list_published(ListPublishedPostsQuery {
            page: PageRequest::number(3),
        })
        .await
        .unwrap();
    assert_eq!(ids(&last), vec![2, 1]);
}

#[tokio::test]
async fn empty_store_yields_single_empty_page() {
    let (service, _) = service_with(InMemoryPostRepo::default());

    let listing = service
        .list_published(ListPublishedPostsQuery {
            page: PageRequest::number(5),
        })
        .await
        .unwrap();

    assert!(listing.items.is_empty());
    assert_eq!(listing.page.number, 1);
    assert_eq!(listing.page.num_pages, 1);
}

/// 著者一覧はフルネーム、なければユーザー名でラベル付けされる
#[tokio::test]
async fn author_listing_is_labelled_with_display_name() {
    let posts = vec![
        PostBuilder::new(1).author(1).build(),
        PostBuilder::new(2).author(2).build(),
        PostBuilder::new(3).author(1).draft().build(),
        PostBuilder::new(4).author(1).build(),
    ];
    let (service, _) = service_with(InMemoryPostRepo::with_posts(posts));

    let listing = service
        .list_by_author(ListPostsByAuthorQuery {
            author_id: 1,
            page: PageRequest::first(),
        })
        .await
        .unwrap();
    assert_eq!(listing.title, "Posts de Ana Souza");
    assert_eq!(ids(&listing), vec![4, 1]);

    let listing = service
        .list_by_author(ListPostsByAuthorQuery {
            author_id: 2,
            page: PageRequest::first(),
        })
        .await
        .unwrap();
    assert_eq!(listing.title, "Posts de bia");
}

#[tokio::test]
async fn author_without_posts_gets_empty_listing() {
    let (service, _) = service_with(InMemoryPostRepo::with_posts(published_posts(3)));

    let listing = service
        .list_by_author(ListPostsByAuthorQuery {
            author_id: 2,
            page: PageRequest::first(),
        })
        .await
        .unwrap();

    assert!(listing.items.is_empty());
    assert_eq!(listing.page.count, 0);
}

#[tokio::test]
async fn unknown_or_invalid_author_is_not_found() {
    let (service, _) = service_with(InMemoryPostRepo::default());

    for author_id in [99, 0, -1] {
        let err = service
            .list_by_author(ListPostsByAuthorQuery {
                author_id,
                page: PageRequest::first(),
            })
            .await
            .unwrap_err();
        assert!(err.is_not_found(), "author {author_id}: {err:?}");
    }
}

#[tokio::test]
async fn category_listing_uses_category_name() {
    let posts = vec![
        PostBuilder::new(1).category(1, "Tecnologia", "tecnologia").build(),
        PostBuilder::new(2).category(2, "Viagem", "viagem").build(),
        PostBuilder::new(3).category(1, "Tecnologia", "tecnologia").build(),
    ];
    let (service, _) = service_with(InMemoryPostRepo::with_posts(posts));

    let listing = service
        .list_by_category(ListPostsByCategoryQuery {
            slug: "tecnologia".into(),
            page: PageRequest::first(),
        })
        .await
        .unwrap();

    assert_eq!(listing.title, "Tecnologia - Categoria");
    assert_eq!(ids(&listing), vec![3, 1]);
}

/// 公開記事のないカテゴリは未知のカテゴリと同じく NotFound
#[tokio::test]
async fn category_with_only_drafts_is_not_found() {
    let posts = vec![
        PostBuilder::new(1)
            .category(1, "Rascunhos", "rascunhos")
            .draft()
            .build(),
    ];
    let (service, _) = service_with(InMemoryPostRepo::with_posts(posts));

    for slug in ["rascunhos", "inexistente"] {
        let err = service
            .list_by_category(ListPostsByCategoryQuery {
                slug: slug.into(),
                page: PageRequest::first(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound(_)), "{slug}");
    }
}

/// タグ一覧のラベルは先頭記事の最初のタグ名になる
#[tokio::test]
async fn tag_listing_label_comes_from_first_posts_first_tag() {
    let posts = vec![
        PostBuilder::new(1).tag(2, "Web", "web").build(),
        PostBuilder::new(2)
            .tag(2, "Web", "web")
            .tag(1, "Rust", "rust")
            .build(),
    ];
    let (service, _) = service_with(InMemoryPostRepo::with_posts(posts));

    let listing = service
        .list_by_tag(ListPostsByTagQuery {
            slug: "web".into(),
            page: PageRequest::first(),
        })
        .await
        .unwrap();

    assert_eq!(listing.title, "Rust - Tag");
    assert_eq!(ids(&listing), vec![2, 1]);
}

#[tokio::test]
async fn unknown_tag_is_not_found() {
    let (service, _) = service_with(InMemoryPostRepo::with_posts(published_posts(2)));

    let err = service
        .list_by_tag(ListPostsByTagQuery {
            slug: "nada".into(),
            page: PageRequest::first(),
        })
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

/// 空の検索語はリポジトリに触れずにリダイレクトを返す
#[tokio::test]
async fn blank_search_redirects_without_querying() {
    let (service, repo) = service_with(InMemoryPostRepo::with_posts(published_posts(3)));

    for text in [None, Some(String::new()), Some("   ".to_string())] {
        let outcome = service.search(SearchPostsQuery { text }).await.unwrap();
        assert!(matches!(outcome, SearchOutcome::RedirectToIndex));
    }
    assert_eq!(repo.query_calls(), 0);
}

#[tokio::test]
async fn search_is_case_insensitive_across_fields() {
    let posts = vec![
        PostBuilder::new(1).title("Receita de bolo").build(),
        PostBuilder::new(2).excerpt("Category theory for cooks").build(),
        PostBuilder::new(3).content("A CAT walked in").build(),
        PostBuilder::new(4).title("Cats").draft().build(),
    ];
    let (service, _) = service_with(InMemoryPostRepo::with_posts(posts));

    let outcome = service
        .search(SearchPostsQuery {
            text: Some("cat".into()),
        })
        .await
        .unwrap();

    let SearchOutcome::Results(listing) = outcome else {
        panic!("expected results");
    };
    assert_eq!(listing.title, "cat - Busca");
    assert_eq!(ids(&listing), vec![3, 2]);
}

/// 検索結果は 1 ページ分に制限され、ラベルは 30 文字で切られる
#[tokio::test]
async fn search_results_are_capped_and_label_truncated() {
    let posts = (1..=12)
        .map(|id| PostBuilder::new(id).content("alpha beta gamma").build())
        .collect();
    let (service, _) = service_with(InMemoryPostRepo::with_posts(posts));

    let outcome = service
        .search(SearchPostsQuery {
            text: Some("  beta gamma  ".into()),
        })
        .await
        .unwrap();
    let SearchOutcome::Results(listing) = outcome else {
        panic!("expected results");
    };
    assert_eq!(listing.title, "beta gamma - Busca");
    assert_eq!(listing.items.len(), 9);
    assert_eq!(listing.items[0].id, 12);
    assert_eq!(listing.page.num_pages, 1);
    assert!(!listing.page.has_next);

    let long = "abcdefghijklmnopqrstuvwxyz0123456789";
    let SearchOutcome::Results(listing) = service
        .search(SearchPostsQuery {
            text: Some(long.into()),
        })
        .await
        .unwrap()
    else {
        panic!("expected results");
    };
    assert_eq!(listing.title, "abcdefghijklmnopqrstuvwxyz0123 - Busca");
}

#[tokio::test]
async fn post_detail_hides_drafts() {
    let posts = vec![
        PostBuilder::new(1).slug("publicado").build(),
        PostBuilder::new(2).slug("rascunho").draft().build(),
    ];
    let (service, _) = service_with(InMemoryPostRepo::with_posts(posts));

    let post = service
        .get_post_by_slug(GetPostBySlugQuery {
            slug: "publicado".into(),
        })
        .await
        .unwrap();
    assert_eq!(post.id, 1);

    for slug in ["rascunho", "nao-existe", "not a slug!"] {
        let err = service
            .get_post_by_slug(GetPostBySlugQuery { slug: slug.into() })
            .await
            .unwrap_err();
        assert!(err.is_not_found(), "{slug}");
    }
}
