// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleTitle};
use crate::domain::category::Category;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub category: Category,
    pub hit: i64,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Article {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub category: Category,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// An edit replaces exactly category, title and content; everything else
/// (hit count, author, timestamps) is untouched.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub category: Category,
    pub title: ArticleTitle,
    pub content: ArticleContent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ownership_compares_author_ids() {
        let article = Article {
            id: ArticleId::new(1).unwrap(),
            title: ArticleTitle::new("title").unwrap(),
            content: ArticleContent::new("content").unwrap(),
            category: Category::Chat,
            hit: 0,
            author_id: UserId::new(7).unwrap(),
            created_at: Utc::now(),
        };
        assert!(article.is_owned_by(UserId::new(7).unwrap()));
        assert!(!article.is_owned_by(UserId::new(8).unwrap()));
    }
}
