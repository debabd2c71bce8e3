// tests/support/mocks.rs
//! In-memory doubles for driving the application services without a
//! database.
#![allow(dead_code)]

use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use agora_core::application::dto::{AuthenticatedUser, SessionClaims};
use agora_core::application::error::{ApplicationError, ApplicationResult};
use agora_core::application::ports::{security::PasswordHasher, time::Clock};
use agora_core::domain::article::{
    Article, ArticleContent, ArticleId, ArticleReadRepository, ArticleTitle, ArticleUpdate,
    ArticleWriteRepository, Comment, CommentContent, CommentId, CommentRepository,
    CommentWithMeta, LikeRepository, NewArticle, NewComment,
};
use agora_core::domain::category::{Category, CategoryFilter};
use agora_core::domain::errors::{DomainError, DomainResult};
use agora_core::domain::question::{
    NewQuestion, Question, QuestionId, QuestionRepository, QuestionUpdate,
};
use agora_core::domain::user::{
    Email, NewUser, Nickname, PasswordHash, Phone, Role, User, UserId, UserRepository, UserUpdate,
    Username,
};

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn fixed_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock(fixed_now()))
}

/// Stores `plain:{password}` instead of a real hash so tests can assert
/// against it without running Argon2.
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("plain:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("plain:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("password mismatch"))
        }
    }
}

pub fn sample_user(id: i64, username: &str, role: Role) -> User {
    User {
        id: UserId::new(id).unwrap(),
        username: Username::new(username).unwrap(),
        password_hash: PasswordHash::new("plain:secret-pass").unwrap(),
        nickname: Nickname::new(format!("{username}-nick")).unwrap(),
        name: username.to_string(),
        email: Email::new(format!("{username}@example.com")).unwrap(),
        phone: Phone::new(format!("010-1234-{id:04}")).unwrap(),
        category: Category::Chat,
        role,
        point: 0,
        accumulated_point: 0,
        suspended: false,
        created_at: fixed_now(),
    }
}

pub fn actor_for(user: &User, session_id: &str) -> AuthenticatedUser {
    AuthenticatedUser {
        session_id: session_id.to_string(),
        claims: SessionClaims::for_user(user, fixed_now()),
    }
}

pub fn sample_article(id: i64, author_id: i64, category: Category, title: &str) -> Article {
    Article {
        id: ArticleId::new(id).unwrap(),
        title: ArticleTitle::new(title).unwrap(),
        content: ArticleContent::new(format!("{title} body")).unwrap(),
        category,
        hit: 0,
        author_id: UserId::new(author_id).unwrap(),
        created_at: fixed_now(),
    }
}

pub struct InMemoryUserRepo {
    users: Mutex<BTreeMap<i64, User>>,
}

impl InMemoryUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users.into_iter().map(|u| (i64::from(u.id), u)).collect()),
        }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.users.lock().unwrap().contains_key(&id)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        let id = users.keys().max().copied().unwrap_or(0) + 1;
        let user = User {
            id: UserId::new(id)?,
            username: new_user.username,
            password_hash: new_user.password_hash,
            nickname: new_user.nickname,
            name: new_user.name,
            email: new_user.email,
            phone: new_user.phone,
            category: new_user.category,
            role: new_user.role,
            point: 0,
            accumulated_point: 0,
            suspended: false,
            created_at: new_user.created_at,
        };
        users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.username.as_str() == username.as_str())
            .cloned())
    }

    async fn count_by_username(&self, username: &str) -> DomainResult<u64> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .filter(|u| u.username.as_str() == username)
            .count() as u64)
    }

    async fn count_by_email(&self, email: &str) -> DomainResult<u64> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .filter(|u| u.email.as_str() == email)
            .count() as u64)
    }

    async fn count_by_phone(&self, phone: &str) -> DomainResult<u64> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .filter(|u| u.phone.as_str() == phone)
            .count() as u64)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        if let Some(password_hash) = update.password_hash {
            user.password_hash = password_hash;
        }
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(nickname) = update.nickname {
            user.nickname = nickname;
        }
        if let Some(category) = update.category {
            user.category = category;
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        self.users.lock().unwrap().remove(&i64::from(id));
        Ok(())
    }
}

pub struct InMemoryArticleRepo {
    articles: Mutex<BTreeMap<i64, Article>>,
}

impl InMemoryArticleRepo {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles: Mutex::new(articles.into_iter().map(|a| (i64::from(a.id), a)).collect()),
        }
    }

    pub fn hit_of(&self, id: i64) -> Option<i64> {
        self.articles.lock().unwrap().get(&id).map(|a| a.hit)
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.articles.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn list_page(
        &self,
        filter: CategoryFilter,
        search: Option<&str>,
        offset: u64,
        limit: u32,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let articles = self.articles.lock().unwrap();
        let mut matched: Vec<Article> = articles
            .values()
            .filter(|a| filter.matches(a.category))
            .filter(|a| {
                search.is_none_or(|term| {
                    let term = term.to_lowercase();
                    a.title.as_str().to_lowercase().contains(&term)
                        || a.content.as_str().to_lowercase().contains(&term)
                })
            })
            .cloned()
            .collect();
        matched.sort_by_key(|a| std::cmp::Reverse(i64::from(a.id)));

        let total = matched.len() as u64;
        let page = matched
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        let id = articles.keys().max().copied().unwrap_or(0) + 1;
        let article = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            content: article.content,
            category: article.category,
            hit: 0,
            author_id: article.author_id,
            created_at: article.created_at,
        };
        articles.insert(id, article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.category = update.category;
        article.title = update.title;
        article.content = update.content;
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.articles.lock().unwrap().remove(&i64::from(id));
        Ok(())
    }

    async fn increase_hit(&self, id: ArticleId) -> DomainResult<()> {
        if let Some(article) = self.articles.lock().unwrap().get_mut(&i64::from(id)) {
            article.hit += 1;
        }
        Ok(())
    }
}

pub struct InMemoryCommentRepo {
    comments: Mutex<BTreeMap<i64, Comment>>,
}

impl InMemoryCommentRepo {
    pub fn new(comments: Vec<Comment>) -> Self {
        Self {
            comments: Mutex::new(comments.into_iter().map(|c| (i64::from(c.id), c)).collect()),
        }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.comments.lock().unwrap().contains_key(&id)
    }

    pub fn content_of(&self, id: i64) -> Option<String> {
        self.comments
            .lock()
            .unwrap()
            .get(&id)
            .map(|c| c.content.as_str().to_string())
    }
}

pub fn sample_comment(id: i64, article_id: i64, author_id: i64, content: &str) -> Comment {
    Comment {
        id: CommentId::new(id).unwrap(),
        article_id: ArticleId::new(article_id).unwrap(),
        author_id: UserId::new(author_id).unwrap(),
        content: CommentContent::new(content).unwrap(),
        created_at: fixed_now(),
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepo {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut comments = self.comments.lock().unwrap();
        let id = comments.keys().max().copied().unwrap_or(0) + 1;
        let comment = Comment {
            id: CommentId::new(id)?,
            article_id: comment.article_id,
            author_id: comment.author_id,
            content: comment.content,
            created_at: comment.created_at,
        };
        comments.insert(id, comment.clone());
        Ok(comment)
    }

    async fn find(
        &self,
        article_id: ArticleId,
        comment_id: CommentId,
    ) -> DomainResult<Option<Comment>> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .get(&i64::from(comment_id))
            .filter(|c| c.article_id == article_id)
            .cloned())
    }

    async fn update_content(
        &self,
        comment_id: CommentId,
        content: CommentContent,
    ) -> DomainResult<Comment> {
        let mut comments = self.comments.lock().unwrap();
        let comment = comments
            .get_mut(&i64::from(comment_id))
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;
        comment.content = content;
        Ok(comment.clone())
    }

    async fn delete(&self, comment_id: CommentId) -> DomainResult<()> {
        self.comments.lock().unwrap().remove(&i64::from(comment_id));
        Ok(())
    }

    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<CommentWithMeta>> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .values()
            .filter(|c| c.article_id == article_id)
            .cloned()
            .map(|comment| CommentWithMeta {
                comment,
                author_nickname: String::new(),
                like_count: 0,
            })
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryLikeRepo {
    article_likes: Mutex<HashSet<(i64, i64)>>,
    comment_likes: Mutex<HashSet<(i64, i64)>>,
}

impl InMemoryLikeRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LikeRepository for InMemoryLikeRepo {
    async fn article_like_exists(
        &self,
        user_id: UserId,
        article_id: ArticleId,
    ) -> DomainResult<bool> {
        Ok(self
            .article_likes
            .lock()
            .unwrap()
            .contains(&(user_id.into(), article_id.into())))
    }

    async fn insert_article_like(
        &self,
        user_id: UserId,
        article_id: ArticleId,
    ) -> DomainResult<()> {
        self.article_likes
            .lock()
            .unwrap()
            .insert((user_id.into(), article_id.into()));
        Ok(())
    }

    async fn delete_article_like(
        &self,
        user_id: UserId,
        article_id: ArticleId,
    ) -> DomainResult<bool> {
        Ok(self
            .article_likes
            .lock()
            .unwrap()
            .remove(&(user_id.into(), article_id.into())))
    }

    async fn article_like_count(&self, article_id: ArticleId) -> DomainResult<u64> {
        let target = i64::from(article_id);
        Ok(self
            .article_likes
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, a)| *a == target)
            .count() as u64)
    }

    async fn comment_like_exists(
        &self,
        user_id: UserId,
        comment_id: CommentId,
    ) -> DomainResult<bool> {
        Ok(self
            .comment_likes
            .lock()
            .unwrap()
            .contains(&(user_id.into(), comment_id.into())))
    }

    async fn insert_comment_like(
        &self,
        user_id: UserId,
        comment_id: CommentId,
    ) -> DomainResult<()> {
        self.comment_likes
            .lock()
            .unwrap()
            .insert((user_id.into(), comment_id.into()));
        Ok(())
    }

    async fn delete_comment_like(
        &self,
        user_id: UserId,
        comment_id: CommentId,
    ) -> DomainResult<bool> {
        Ok(self
            .comment_likes
            .lock()
            .unwrap()
            .remove(&(user_id.into(), comment_id.into())))
    }

    async fn comment_like_count(&self, comment_id: CommentId) -> DomainResult<u64> {
        let target = i64::from(comment_id);
        Ok(self
            .comment_likes
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, c)| *c == target)
            .count() as u64)
    }
}

pub struct InMemoryQuestionRepo {
    questions: Mutex<BTreeMap<i64, Question>>,
}

impl InMemoryQuestionRepo {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions: Mutex::new(
                questions
                    .into_iter()
                    .map(|q| (i64::from(q.id), q))
                    .collect(),
            ),
        }
    }

    pub fn contains(&self, id: i64) -> bool {
        self.questions.lock().unwrap().contains_key(&id)
    }
}

pub fn sample_question(id: i64, author_id: i64, subject: &str) -> Question {
    Question {
        id: QuestionId::new(id).unwrap(),
        subject: subject.to_string(),
        content: format!("{subject} body"),
        point: 10,
        category: Category::Question,
        author_id: UserId::new(author_id).unwrap(),
        created_at: fixed_now(),
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepo {
    async fn insert(&self, question: NewQuestion) -> DomainResult<Question> {
        let mut questions = self.questions.lock().unwrap();
        let id = questions.keys().max().copied().unwrap_or(0) + 1;
        let question = Question {
            id: QuestionId::new(id)?,
            subject: question.subject,
            content: question.content,
            point: question.point,
            category: question.category,
            author_id: question.author_id,
            created_at: question.created_at,
        };
        questions.insert(id, question.clone());
        Ok(question)
    }

    async fn find_by_id(&self, id: QuestionId) -> DomainResult<Option<Question>> {
        Ok(self.questions.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn list_page(&self, offset: u64, limit: u32) -> DomainResult<(Vec<Question>, u64)> {
        let questions = self.questions.lock().unwrap();
        let mut all: Vec<Question> = questions.values().cloned().collect();
        all.sort_by_key(|q| std::cmp::Reverse(i64::from(q.id)));

        let total = all.len() as u64;
        let page = all
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn update(&self, update: QuestionUpdate) -> DomainResult<Question> {
        let mut questions = self.questions.lock().unwrap();
        let question = questions
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("question not found".into()))?;
        question.subject = update.subject;
        question.content = update.content;
        question.category = update.category;
        Ok(question.clone())
    }

    async fn delete(&self, id: QuestionId) -> DomainResult<()> {
        self.questions.lock().unwrap().remove(&i64::from(id));
        Ok(())
    }
}
