use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

/// Column width of `comment.id`.
pub const MAX_ID_LEN: usize = 64;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "comment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub document: Json,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_id(id: &str) -> Result<(), errors::ModelError> {
    if id.trim().is_empty() {
        return Err(errors::ModelError::Validation("id required".into()));
    }
    if id.len() > MAX_ID_LEN {
        return Err(errors::ModelError::Validation(format!("id longer than {MAX_ID_LEN} bytes")));
    }
    Ok(())
}

/// Normalize a document for storage: must be an object; an embedded `id` is dropped.
pub fn normalize_document(document: Json) -> Result<Json, errors::ModelError> {
    match document {
        Json::Object(mut map) => {
            map.remove("id");
            Ok(Json::Object(map))
        }
        _ => Err(errors::ModelError::Validation("document must be a JSON object".into())),
    }
}

/// Insert one comment document.
pub async fn create(db: &DatabaseConnection, id: &str, document: Json) -> Result<Model, errors::ModelError> {
    validate_id(id)?;
    let document = normalize_document(document)?;
    let am = ActiveModel {
        id: Set(id.to_string()),
        document: Set(document),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
