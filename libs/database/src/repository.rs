use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait,
};
use uuid::Uuid;

use crate::common::DatabaseResult;

/// Marker for entities whose primary key accepts a [`Uuid`].
///
/// Blanket-implemented for every entity with a UUID-typed primary key,
/// so domain crates never implement it by hand.
pub trait UuidEntity: EntityTrait
where
    <Self::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
{
}

impl<E> UuidEntity for E
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
{
}

/// Generic CRUD layer over a SeaORM entity
///
/// Wraps a [`DatabaseConnection`] and provides the operations every
/// Postgres repository needs: insert, fetch by id, fetch all, update and
/// delete by id. Domain repositories embed one of these and add their
/// own query methods on top via [`BaseRepository::db`].
///
/// # Example
/// ```ignore
/// pub struct PgProductRepository {
///     base: BaseRepository<entity::Entity>,
/// }
///
/// impl PgProductRepository {
///     pub fn new(db: DatabaseConnection) -> Self {
///         Self {
///             base: BaseRepository::new(db),
///         }
///     }
/// }
/// ```
pub struct BaseRepository<E>
where
    E: EntityTrait,
{
    db: DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<E> BaseRepository<E>
where
    E: EntityTrait,
{
    /// Create a new repository over the given connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Access the underlying connection for custom queries
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Insert an active model and return the stored row
    pub async fn insert<A>(&self, model: A) -> DatabaseResult<E::Model>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        Ok(model.insert(&self.db).await?)
    }

    /// Update an active model and return the stored row
    pub async fn update<A>(&self, model: A) -> DatabaseResult<E::Model>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        Ok(model.update(&self.db).await?)
    }

    /// Fetch every row of the entity
    pub async fn find_all(&self) -> DatabaseResult<Vec<E::Model>> {
        Ok(E::find().all(&self.db).await?)
    }
}

impl<E> BaseRepository<E>
where
    E: UuidEntity,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
{
    /// Fetch a single row by its UUID primary key
    pub async fn find_by_id(&self, id: Uuid) -> DatabaseResult<Option<E::Model>> {
        Ok(E::find_by_id(id).one(&self.db).await?)
    }

    /// Delete a row by its UUID primary key, returning the affected row count
    pub async fn delete_by_id(&self, id: Uuid) -> DatabaseResult<u64> {
        let result = E::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
