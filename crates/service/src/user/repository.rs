use async_trait::async_trait;
use models::enums::UserKind;
use models::user;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Select, Set,
};

use super::domain::{NewUser, User};
use crate::errors::ServiceError;
use crate::repository::Repository;

/// User storage; every implementation is bound to one `UserKind`.
#[async_trait]
pub trait UserRepository: Repository<Entity = User, Record = NewUser> {
    fn kind(&self) -> UserKind;
    /// Case-insensitive substring match.
    async fn get_by_name(&self, name: &str) -> Result<Vec<User>, ServiceError>;
    async fn find_by_exact_name(&self, name: &str) -> Result<Option<User>, ServiceError>;
}

/// SeaORM-backed repository; queries never see rows of the other subtype.
pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
    pub kind: UserKind,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection, kind: UserKind) -> Self { Self { db, kind } }

    fn scoped(&self) -> Select<user::Entity> {
        user::Entity::find().filter(user::Column::Discriminator.eq(self.kind))
    }
}

#[async_trait]
impl Repository for SeaOrmUserRepository {
    type Entity = User;
    type Record = NewUser;

    async fn get_by_id(&self, id: i32) -> Result<Option<User>, ServiceError> {
        Ok(self.scoped().filter(user::Column::Id.eq(id)).one(&self.db).await?.map(User::from))
    }

    async fn get_all(&self) -> Result<Vec<User>, ServiceError> {
        let rows = self.scoped().order_by_asc(user::Column::Id).all(&self.db).await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn add(&self, record: NewUser) -> Result<User, ServiceError> {
        let am = user::ActiveModel {
            name: Set(record.name),
            discriminator: Set(self.kind),
            ..Default::default()
        };
        Ok(am.insert(&self.db).await?.into())
    }

    async fn update(&self, id: i32, record: NewUser) -> Result<Option<User>, ServiceError> {
        let res = user::Entity::update_many()
            .col_expr(user::Column::Name, Expr::value(record.name.clone()))
            .filter(user::Column::Id.eq(id))
            .filter(user::Column::Discriminator.eq(self.kind))
            .exec(&self.db)
            .await?;
        if res.rows_affected == 0 {
            return Ok(None);
        }
        Ok(Some(User { id, name: record.name, kind: self.kind }))
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let res = user::Entity::delete_many()
            .filter(user::Column::Id.eq(id))
            .filter(user::Column::Discriminator.eq(self.kind))
            .exec(&self.db)
            .await?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found("User", id));
        }
        Ok(())
    }

    async fn exists(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(self.scoped().filter(user::Column::Id.eq(id)).count(&self.db).await? > 0)
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    fn kind(&self) -> UserKind { self.kind }

    async fn get_by_name(&self, name: &str) -> Result<Vec<User>, ServiceError> {
        let pattern = format!("%{}%", name.to_lowercase());
        let rows = self
            .scoped()
            .filter(Expr::expr(Func::lower(Expr::col(user::Column::Name))).like(pattern))
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_exact_name(&self, name: &str) -> Result<Option<User>, ServiceError> {
        Ok(self.scoped().filter(user::Column::Name.eq(name)).one(&self.db).await?.map(User::from))
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use crate::repository::mock::MemoryTable;

    pub struct MockUserRepository {
        kind: UserKind,
        rows: MemoryTable<User>,
    }

    impl MockUserRepository {
        pub fn new(kind: UserKind) -> Self { Self { kind, rows: MemoryTable::default() } }
    }

    #[async_trait]
    impl Repository for MockUserRepository {
        type Entity = User;
        type Record = NewUser;

        async fn get_by_id(&self, id: i32) -> Result<Option<User>, ServiceError> { Ok(self.rows.get(id)) }

        async fn get_all(&self) -> Result<Vec<User>, ServiceError> { Ok(self.rows.all()) }

        async fn add(&self, record: NewUser) -> Result<User, ServiceError> {
            let kind = self.kind;
            Ok(self.rows.insert_with(|id| User { id, name: record.name, kind }))
        }

        async fn update(&self, id: i32, record: NewUser) -> Result<Option<User>, ServiceError> {
            let kind = self.kind;
            Ok(self.rows.replace_with(id, |id| User { id, name: record.name, kind }))
        }

        async fn delete(&self, id: i32) -> Result<(), ServiceError> {
            if self.rows.remove(id) { Ok(()) } else { Err(ServiceError::not_found("User", id)) }
        }

        async fn exists(&self, id: i32) -> Result<bool, ServiceError> { Ok(self.rows.contains(id)) }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        fn kind(&self) -> UserKind { self.kind }

        async fn get_by_name(&self, name: &str) -> Result<Vec<User>, ServiceError> {
            let needle = name.to_lowercase();
            Ok(self.rows.filter(|u| u.name.to_lowercase().contains(&needle)))
        }

        async fn find_by_exact_name(&self, name: &str) -> Result<Option<User>, ServiceError> {
            Ok(self.rows.filter(|u| u.name == name).into_iter().next())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn missing_id_is_none_not_error() -> anyhow::Result<()> {
        let repo = SeaOrmUserRepository::new(get_db().await?, UserKind::Customer);
        assert!(repo.get_by_id(999).await?.is_none());
        assert!(!repo.exists(999).await?);
        Ok(())
    }

    #[tokio::test]
    async fn subtypes_do_not_see_each_other() -> anyhow::Result<()> {
        let db = get_db().await?;
        let customers = SeaOrmUserRepository::new(db.clone(), UserKind::Customer);
        let contractors = SeaOrmUserRepository::new(db, UserKind::Contractor);

        let jane = customers.add(NewUser { name: "Jane Smith".into() }).await?;
        let john = contractors.add(NewUser { name: "John's Landscaping".into() }).await?;
        assert!(jane.id > 0 && john.id > jane.id);

        assert!(contractors.get_by_id(jane.id).await?.is_none());
        assert_eq!(customers.get_all().await?, vec![jane.clone()]);
        assert!(matches!(contractors.delete(jane.id).await, Err(ServiceError::NotFound(_))));
        assert!(customers.update(john.id, NewUser { name: "x".into() }).await?.is_none());
        assert_eq!(contractors.get_by_id(john.id).await?.map(|u| u.name), Some("John's Landscaping".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn update_and_delete_round_trip() -> anyhow::Result<()> {
        let repo = SeaOrmUserRepository::new(get_db().await?, UserKind::Contractor);
        let created = repo.add(NewUser { name: "Green Thumb".into() }).await?;

        let updated = repo.update(created.id, NewUser { name: "Green Thumb LLC".into() }).await?.expect("row");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Green Thumb LLC");
        assert_eq!(updated.kind, UserKind::Contractor);

        repo.delete(created.id).await?;
        assert!(repo.get_by_id(created.id).await?.is_none());
        assert!(matches!(repo.delete(created.id).await, Err(ServiceError::NotFound(m)) if m == format!("User with ID {} not found.", created.id)));
        Ok(())
    }

    #[tokio::test]
    async fn name_lookups() -> anyhow::Result<()> {
        let repo = SeaOrmUserRepository::new(get_db().await?, UserKind::Customer);
        repo.add(NewUser { name: "Jane Smith".into() }).await?;
        repo.add(NewUser { name: "Bob Smithers".into() }).await?;
        repo.add(NewUser { name: "Carol".into() }).await?;

        assert_eq!(repo.get_by_name("SMITH").await?.len(), 2);
        assert_eq!(repo.find_by_exact_name("Carol").await?.map(|u| u.name), Some("Carol".to_string()));
        assert!(repo.find_by_exact_name("carol").await?.is_none());
        Ok(())
    }
}
