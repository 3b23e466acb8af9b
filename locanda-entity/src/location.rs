use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

// The `locations` table is owned externally; this entity mirrors its
// schema so rows can be read with named columns instead of by index.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "locations")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(skip_deserializing)]
    pub id: i32,

    /// Display name of the restaurant location
    pub name: String,

    /// Street address
    pub address: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for locanda_types::Location {
    fn from(model: Model) -> Self {
        locanda_types::Location {
            id: model.id,
            name: model.name,
            address: model.address,
        }
    }
}

