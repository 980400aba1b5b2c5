use sea_orm::{entity::prelude::*, QueryOrder, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::errors;

/// A persisted greeting. `id` is assigned by the database on insert and never changes.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "greeting")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Text")]
    pub message: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a new row; the id column is left to the sequence.
pub async fn create(db: &DatabaseConnection, message: &str) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        message: Set(message.to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn find(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// All rows in insertion (id) order.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}
