// src/application/queries/articles/list.rs
use super::{ArticleQueryService, service::ARTICLES_PER_PAGE};
use crate::{
    application::{
        dto::{ArticleSummaryDto, Page},
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::CategoryFilter,
};

pub struct ListArticlesQuery {
    /// 1-based page number straight from the query string.
    pub page: u32,
    /// `"ALL"` or a concrete category name.
    pub category: String,
    pub search: Option<String>,
}

impl ArticleQueryService {
    /// Newest-first page of summaries, optionally narrowed by category
    /// and a text matcher. Asking past the end of a non-empty listing is
    /// an [`ApplicationError::InvalidPage`].
    pub async fn list(&self, query: ListArticlesQuery) -> ApplicationResult<Page<ArticleSummaryDto>> {
        let filter = CategoryFilter::parse(&query.category)?;
        if query.page == 0 {
            return Err(ApplicationError::InvalidPage);
        }

        let search = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());
        let offset = u64::from(query.page - 1) * u64::from(ARTICLES_PER_PAGE);

        let (articles, total) = self
            .read_repo
            .list_page(filter, search, offset, ARTICLES_PER_PAGE)
            .await?;

        let page = Page::new(
            articles.into_iter().map(Into::into).collect(),
            query.page,
            ARTICLES_PER_PAGE,
            total,
        );

        if query.page > page.total_pages && page.total_pages != 0 {
            return Err(ApplicationError::InvalidPage);
        }

        Ok(page)
    }
}
