// tests/article_service_unit.rs
use std::sync::Arc;

mod support;

use agora_core::application::commands::articles::{
    ArticleCommandService, SaveArticleCommand, SaveCommentCommand,
};
use agora_core::application::error::ApplicationError;
use agora_core::application::queries::articles::{ArticleQueryService, ListArticlesQuery};
use agora_core::domain::article::Article;
use agora_core::domain::category::Category;
use agora_core::domain::user::{Role, User};
use support::mocks::{
    InMemoryArticleRepo, InMemoryCommentRepo, InMemoryLikeRepo, InMemoryUserRepo, actor_for,
    fixed_clock, sample_article, sample_comment, sample_user,
};

struct Fixture {
    commands: ArticleCommandService,
    queries: ArticleQueryService,
    articles: Arc<InMemoryArticleRepo>,
    comments: Arc<InMemoryCommentRepo>,
}

fn fixture(articles: Vec<Article>, users: Vec<User>) -> Fixture {
    fixture_with_comments(articles, users, Vec::new())
}

fn fixture_with_comments(
    articles: Vec<Article>,
    users: Vec<User>,
    comments: Vec<agora_core::domain::article::Comment>,
) -> Fixture {
    let article_repo = Arc::new(InMemoryArticleRepo::new(articles));
    let comment_repo = Arc::new(InMemoryCommentRepo::new(comments));
    let like_repo = Arc::new(InMemoryLikeRepo::new());
    let user_repo = Arc::new(InMemoryUserRepo::new(users));

    let commands = ArticleCommandService::new(
        article_repo.clone(),
        article_repo.clone(),
        comment_repo.clone(),
        like_repo.clone(),
        user_repo.clone(),
        fixed_clock(),
    );
    let queries = ArticleQueryService::new(
        article_repo.clone(),
        comment_repo.clone(),
        like_repo,
        user_repo,
    );

    Fixture {
        commands,
        queries,
        articles: article_repo,
        comments: comment_repo,
    }
}

#[tokio::test]
async fn toggle_like_flips_and_restores() {
    let owner = sample_user(1, "alice", Role::User);
    let fx = fixture(
        vec![sample_article(1, 1, Category::Chat, "first")],
        vec![owner.clone()],
    );
    let actor = actor_for(&owner, "sid-1");

    let after_first = fx.commands.toggle_like(&actor, 1).await.unwrap();
    assert!(after_first.liked);
    assert_eq!(after_first.like_count, 1);

    let after_second = fx.commands.toggle_like(&actor, 1).await.unwrap();
    assert!(!after_second.liked);
    assert_eq!(after_second.like_count, 0);
}

#[tokio::test]
async fn double_like_leaves_a_single_row() {
    let user = sample_user(1, "alice", Role::User);
    let fx = fixture(
        vec![sample_article(1, 1, Category::Chat, "first")],
        vec![user.clone()],
    );
    let actor = actor_for(&user, "sid-1");

    fx.commands.like(&actor, 1).await.unwrap();
    fx.commands.like(&actor, 1).await.unwrap();
    assert!(fx.commands.has_user_liked(&actor, 1).await.unwrap());

    fx.commands.unlike(&actor, 1).await.unwrap();
    assert!(!fx.commands.has_user_liked(&actor, 1).await.unwrap());
}

#[tokio::test]
async fn unlike_without_a_like_is_not_found() {
    let user = sample_user(1, "alice", Role::User);
    let fx = fixture(
        vec![sample_article(1, 1, Category::Chat, "first")],
        vec![user.clone()],
    );
    let actor = actor_for(&user, "sid-1");

    let err = fx.commands.unlike(&actor, 1).await.unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn category_filter_narrows_and_all_matches_everything() {
    let fx = fixture(
        vec![
            sample_article(1, 1, Category::Chat, "article a"),
            sample_article(2, 1, Category::Study, "article b"),
        ],
        vec![sample_user(1, "alice", Role::User)],
    );

    let chat = fx
        .queries
        .list(ListArticlesQuery {
            page: 1,
            category: "CHAT".into(),
            search: None,
        })
        .await
        .unwrap();
    assert_eq!(chat.items.len(), 1);
    assert_eq!(chat.items[0].id, 1);

    let study = fx
        .queries
        .list(ListArticlesQuery {
            page: 1,
            category: "STUDY".into(),
            search: None,
        })
        .await
        .unwrap();
    assert_eq!(study.items.len(), 1);
    assert_eq!(study.items[0].id, 2);

    let all = fx
        .queries
        .list(ListArticlesQuery {
            page: 1,
            category: "ALL".into(),
            search: None,
        })
        .await
        .unwrap();
    assert_eq!(all.items.len(), 2);
    // Newest first.
    assert_eq!(all.items[0].id, 2);
    assert_eq!(all.items[1].id, 1);
}

#[tokio::test]
async fn search_matcher_scans_title_and_content() {
    let fx = fixture(
        vec![
            sample_article(1, 1, Category::Chat, "rust tips"),
            sample_article(2, 1, Category::Chat, "gardening"),
        ],
        vec![sample_user(1, "alice", Role::User)],
    );

    let found = fx
        .queries
        .list(ListArticlesQuery {
            page: 1,
            category: "ALL".into(),
            search: Some("RUST".into()),
        })
        .await
        .unwrap();
    assert_eq!(found.items.len(), 1);
    assert_eq!(found.items[0].id, 1);
    assert_eq!(found.total_items, 1);
}

#[tokio::test]
async fn page_beyond_the_end_is_invalid() {
    let fx = fixture(
        vec![sample_article(1, 1, Category::Chat, "only one")],
        vec![sample_user(1, "alice", Role::User)],
    );

    let err = fx
        .queries
        .list(ListArticlesQuery {
            page: 2,
            category: "ALL".into(),
            search: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::InvalidPage));

    // An empty board still serves its first page.
    let empty_fx = fixture(Vec::new(), vec![sample_user(1, "alice", Role::User)]);
    let empty = empty_fx
        .queries
        .list(ListArticlesQuery {
            page: 1,
            category: "ALL".into(),
            search: None,
        })
        .await
        .unwrap();
    assert!(empty.items.is_empty());
    assert_eq!(empty.total_pages, 0);
}

#[tokio::test]
async fn editing_is_owner_only_even_for_admins() {
    let owner = sample_user(1, "alice", Role::User);
    let admin = sample_user(2, "boss", Role::Admin);
    let fx = fixture(
        vec![sample_article(1, 1, Category::Chat, "original")],
        vec![owner.clone(), admin.clone()],
    );

    let command = SaveArticleCommand {
        id: Some(1),
        category: "CHAT".into(),
        title: "rewritten".into(),
        content: "rewritten body".into(),
        author: None,
    };
    let err = fx
        .commands
        .save(&actor_for(&admin, "sid-admin"), command)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let owner_edit = SaveArticleCommand {
        id: Some(1),
        category: "STUDY".into(),
        title: "rewritten".into(),
        content: "rewritten body".into(),
        author: None,
    };
    let saved = fx
        .commands
        .save(&actor_for(&owner, "sid-owner"), owner_edit)
        .await
        .unwrap();
    assert_eq!(saved.category, Category::Study);
    assert_eq!(saved.title, "rewritten");
}

#[tokio::test]
async fn deleting_is_open_to_owner_and_admin() {
    let owner = sample_user(1, "alice", Role::User);
    let stranger = sample_user(2, "bob", Role::User);
    let admin = sample_user(3, "boss", Role::Admin);
    let fx = fixture(
        vec![
            sample_article(1, 1, Category::Chat, "first"),
            sample_article(2, 1, Category::Chat, "second"),
        ],
        vec![owner.clone(), stranger.clone(), admin.clone()],
    );

    let err = fx
        .commands
        .delete(&actor_for(&stranger, "sid-bob"), 1)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    fx.commands
        .delete(&actor_for(&admin, "sid-admin"), 1)
        .await
        .unwrap();
    fx.commands
        .delete(&actor_for(&owner, "sid-alice"), 2)
        .await
        .unwrap();
    assert!(fx.articles.hit_of(1).is_none());
    assert!(fx.articles.hit_of(2).is_none());
}

#[tokio::test]
async fn only_admins_may_author_for_someone_else() {
    let alice = sample_user(1, "alice", Role::User);
    let admin = sample_user(2, "boss", Role::Admin);
    let fx = fixture(Vec::new(), vec![alice.clone(), admin.clone()]);

    let err = fx
        .commands
        .save(
            &actor_for(&alice, "sid-alice"),
            SaveArticleCommand {
                id: None,
                category: "CHAT".into(),
                title: "ghostwritten".into(),
                content: "body".into(),
                author: Some("boss".into()),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    let saved = fx
        .commands
        .save(
            &actor_for(&admin, "sid-admin"),
            SaveArticleCommand {
                id: None,
                category: "NOTICE".into(),
                title: "announcement".into(),
                content: "body".into(),
                author: Some("alice".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(saved.author_id, 1);
}

#[tokio::test]
async fn hit_counter_increments_unconditionally() {
    let fx = fixture(
        vec![sample_article(1, 1, Category::Chat, "first")],
        vec![sample_user(1, "alice", Role::User)],
    );

    fx.commands.increase_hit(1).await.unwrap();
    fx.commands.increase_hit(1).await.unwrap();
    assert_eq!(fx.articles.hit_of(1), Some(2));
}

#[tokio::test]
async fn comment_ownership_check_is_tri_state() {
    let alice = sample_user(1, "alice", Role::User);
    let bob = sample_user(2, "bob", Role::User);
    let fx = fixture_with_comments(
        vec![sample_article(1, 1, Category::Chat, "first")],
        vec![alice.clone(), bob.clone()],
        vec![sample_comment(1, 1, 1, "alice's comment")],
    );
    let alice_actor = actor_for(&alice, "sid-alice");
    let bob_actor = actor_for(&bob, "sid-bob");

    assert!(
        fx.commands
            .check_comment_ownership(&alice_actor, 1, 1)
            .await
            .unwrap()
    );
    assert!(
        !fx.commands
            .check_comment_ownership(&alice_actor, 1, 99)
            .await
            .unwrap()
    );
    let err = fx
        .commands
        .check_comment_ownership(&bob_actor, 1, 1)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn comment_edit_requires_ownership_and_delete_admits_admins() {
    let alice = sample_user(1, "alice", Role::User);
    let bob = sample_user(2, "bob", Role::User);
    let admin = sample_user(3, "boss", Role::Admin);
    let fx = fixture_with_comments(
        vec![sample_article(1, 1, Category::Chat, "first")],
        vec![alice.clone(), bob.clone(), admin.clone()],
        vec![
            sample_comment(1, 1, 1, "alice's comment"),
            sample_comment(2, 1, 1, "another"),
        ],
    );

    let err = fx
        .commands
        .save_comment(
            &actor_for(&bob, "sid-bob"),
            1,
            SaveCommentCommand {
                id: Some(1),
                content: "hijacked".into(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    fx.commands
        .save_comment(
            &actor_for(&alice, "sid-alice"),
            1,
            SaveCommentCommand {
                id: Some(1),
                content: "edited".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(fx.comments.content_of(1).as_deref(), Some("edited"));

    let err = fx
        .commands
        .delete_comment(&actor_for(&bob, "sid-bob"), 1, 2)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    fx.commands
        .delete_comment(&actor_for(&admin, "sid-admin"), 1, 2)
        .await
        .unwrap();
    assert!(!fx.comments.contains(2));
}

#[tokio::test]
async fn detail_carries_comments_and_viewer_like_state() {
    let alice = sample_user(1, "alice", Role::User);
    let fx = fixture_with_comments(
        vec![sample_article(1, 1, Category::Chat, "first")],
        vec![alice.clone()],
        vec![sample_comment(1, 1, 1, "hello")],
    );
    let actor = actor_for(&alice, "sid-alice");

    fx.commands.toggle_like(&actor, 1).await.unwrap();

    let detail = fx.queries.get(Some(&actor), 1).await.unwrap();
    assert_eq!(detail.like_count, 1);
    assert!(detail.liked_by_viewer);
    assert_eq!(detail.comments.len(), 1);

    let anonymous = fx.queries.get(None, 1).await.unwrap();
    assert!(!anonymous.liked_by_viewer);

    let err = fx.queries.get(None, 99).await.unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}
