// src/infrastructure/repositories/postgres_article.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::error::map_sqlx;
use crate::domain::{
    article::{
        Article, ArticleContent, ArticleId, ArticleReadRepository, ArticleTitle, ArticleUpdate,
        ArticleWriteRepository, NewArticle,
    },
    category::CategoryFilter,
    errors::{DomainError, DomainResult},
    user::UserId,
};

const ARTICLE_COLUMNS: &str = "id, title, content, category, hit, author_id, created_at";

pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    category: String,
    hit: i64,
    author_id: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            content: ArticleContent::new(row.content)?,
            category: row.category.parse()?,
            hit: row.hit,
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
        })
    }
}

/// Appends the shared WHERE clause of the listing and its count query.
fn push_listing_conditions(
    builder: &mut QueryBuilder<'_, Postgres>,
    filter: CategoryFilter,
    search: Option<&str>,
) {
    let mut first = true;
    if let CategoryFilter::Only(category) = filter {
        builder.push(" WHERE category = ");
        builder.push_bind(category.as_str());
        first = false;
    }
    if let Some(term) = search {
        builder.push(if first { " WHERE " } else { " AND " });
        let pattern = format!("%{term}%");
        builder.push("(title ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR content ILIKE ");
        builder.push_bind(pattern);
        builder.push(")");
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.map(TryInto::try_into).transpose()
    }

    async fn list_page(
        &self,
        filter: CategoryFilter,
        search: Option<&str>,
        offset: u64,
        limit: u32,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let mut query = QueryBuilder::<Postgres>::new(format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles"
        ));
        push_listing_conditions(&mut query, filter, search);
        query.push(" ORDER BY id DESC LIMIT ");
        query.push_bind(i64::from(limit));
        query.push(" OFFSET ");
        query.push_bind(offset as i64);

        let rows: Vec<ArticleRow> = query
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut count_query = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM articles");
        push_listing_conditions(&mut count_query, filter, search);
        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let articles = rows
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((articles, total as u64))
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let sql = format!(
            "INSERT INTO articles (title, content, category, author_id, created_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(article.title.as_str())
            .bind(article.content.as_str())
            .bind(article.category.as_str())
            .bind(i64::from(article.author_id))
            .bind(article.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.try_into()
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let sql = format!(
            "UPDATE articles SET category = $2, title = $3, content = $4 \
             WHERE id = $1 \
             RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(update.id))
            .bind(update.category.as_str())
            .bind(update.title.as_str())
            .bind(update.content.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.try_into()
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn increase_hit(&self, id: ArticleId) -> DomainResult<()> {
        sqlx::query("UPDATE articles SET hit = hit + 1 WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}
