use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{NewUser, User};
use super::repository::UserRepository;
use crate::errors::ServiceError;

/// Customer or contractor operations over one repository.
pub struct UserService<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn get_all(&self) -> Result<Vec<User>, ServiceError> { self.repo.get_all().await }

    /// Look up one user of this service's kind.
    ///
    /// # Examples
    /// ```
    /// use service::user::{repository::mock::MockUserRepository, NewUser, UserService};
    /// use models::enums::UserKind;
    /// use std::sync::Arc;
    /// let svc = UserService::new(Arc::new(MockUserRepository::new(UserKind::Customer)));
    /// let jane = tokio_test::block_on(svc.create(NewUser { name: "Jane Smith".into() })).unwrap();
    /// assert_eq!(tokio_test::block_on(svc.get_by_id(jane.id)).unwrap().name, "Jane Smith");
    /// let err = tokio_test::block_on(svc.get_by_id(99)).unwrap_err();
    /// assert_eq!(err.to_string(), "User with ID 99 not found.");
    /// ```
    pub async fn get_by_id(&self, id: i32) -> Result<User, ServiceError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| ServiceError::not_found("User", id))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, ServiceError> { self.repo.exists(id).await }

    pub async fn get_by_name(&self, name: &str) -> Result<Vec<User>, ServiceError> { self.repo.get_by_name(name).await }

    pub async fn find_by_exact_name(&self, name: &str) -> Result<Option<User>, ServiceError> {
        self.repo.find_by_exact_name(name).await
    }

    #[instrument(skip(self, record), fields(kind = %self.repo.kind()))]
    pub async fn create(&self, record: NewUser) -> Result<User, ServiceError> {
        let user = self.repo.add(record).await?;
        info!(user_id = user.id, "user_created");
        Ok(user)
    }

    #[instrument(skip(self, record), fields(kind = %self.repo.kind()))]
    pub async fn update(&self, id: i32, record: NewUser) -> Result<User, ServiceError> {
        let user = self.repo.update(id, record).await?.ok_or_else(|| ServiceError::not_found("User", id))?;
        info!(user_id = id, "user_updated");
        Ok(user)
    }

    #[instrument(skip(self), fields(kind = %self.repo.kind()))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.repo.delete(id).await?;
        info!(user_id = id, "user_deleted");
        Ok(())
    }
}
