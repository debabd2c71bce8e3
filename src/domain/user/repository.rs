use crate::domain::errors::DomainResult;
use crate::domain::user::entity::{NewUser, User, UserUpdate};
use crate::domain::user::value_objects::{UserId, Username};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;
    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;
    /// Count-based uniqueness probes used by registration validation.
    async fn count_by_username(&self, username: &str) -> DomainResult<u64>;
    async fn count_by_email(&self, email: &str) -> DomainResult<u64>;
    async fn count_by_phone(&self, phone: &str) -> DomainResult<u64>;
    async fn update(&self, update: UserUpdate) -> DomainResult<User>;
    async fn delete(&self, id: UserId) -> DomainResult<()>;
}
