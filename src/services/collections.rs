//! Collection lifecycle: create with validators, drop, dump, users.

use futures_util::TryStreamExt;
use mongodb::{
    Database, IndexModel,
    bson::{Document, doc},
    options::IndexOptions,
};

use crate::error::SeedError;
use crate::schemas::{self, ALL_COLLECTIONS};

/// Role granted to users created by [`create_user`].
pub const USER_ROLE: &str = "userAdminAnyDatabase";

/// Creates `name` with its validator and unique index.
///
/// Returns `false` when the collection already exists; it is left untouched.
pub async fn create_collection(db: &Database, name: &str) -> Result<bool, SeedError> {
    if !schemas::is_known_collection(name) {
        return Err(SeedError::UnknownCollection(name.to_string()));
    }

    let existing = db.list_collection_names().await?;
    if existing.iter().any(|c| c == name) {
        tracing::warn!(collection = name, "Collection already exists, skipping");
        return Ok(false);
    }

    tracing::info!(collection = name, "Creating collection");
    match schemas::validator_for(name) {
        Some(validator) => db.create_collection(name).validator(validator).await?,
        None => db.create_collection(name).await?,
    }

    if let Some(keys) = schemas::unique_index_for(name) {
        let index = IndexModel::builder()
            .keys(keys)
            .options(IndexOptions::builder().unique(true).build())
            .build();
        let created = db.collection::<Document>(name).create_index(index).await?;
        tracing::debug!(collection = name, index = %created.index_name, "Created unique index");
    }

    Ok(true)
}

/// Creates every known collection; returns how many were new.
pub async fn create_all_collections(db: &Database) -> Result<usize, SeedError> {
    let mut created = 0;
    for name in ALL_COLLECTIONS {
        if create_collection(db, name).await? {
            created += 1;
        }
    }
    Ok(created)
}

pub async fn drop_collection(db: &Database, name: &str) -> Result<(), SeedError> {
    tracing::info!(collection = name, "Dropping collection");
    db.collection::<Document>(name).drop().await?;
    Ok(())
}

pub async fn drop_database(db: &Database) -> Result<(), SeedError> {
    tracing::info!(db = db.name(), "Dropping database");
    db.drop().await?;
    Ok(())
}

/// Every document of `name`, unfiltered.
pub async fn query_collection(db: &Database, name: &str) -> Result<Vec<Document>, SeedError> {
    find_documents(db, name, doc! {}).await
}

pub async fn find_documents(
    db: &Database,
    name: &str,
    filter: Document,
) -> Result<Vec<Document>, SeedError> {
    let cursor = db.collection::<Document>(name).find(filter).await?;
    let documents: Vec<Document> = cursor.try_collect().await?;
    tracing::debug!(collection = name, count = documents.len(), "Query complete");
    Ok(documents)
}

pub fn create_user_command(user: &str, password: &str) -> Document {
    doc! {
        "createUser": user,
        "pwd": password,
        "roles": [ { "role": USER_ROLE, "db": "admin" } ],
    }
}

pub async fn create_user(db: &Database, user: &str, password: &str) -> Result<(), SeedError> {
    tracing::info!(user, db = db.name(), "Creating database user");
    db.run_command(create_user_command(user, password)).await?;
    Ok(())
}

/// Relaxed extended JSON, for printing documents.
pub fn to_json(document: Document) -> serde_json::Value {
    mongodb::bson::Bson::Document(document).into_relaxed_extjson()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_command() {
        let command = create_user_command("admin", "secret");
        assert_eq!(command.get_str("createUser").unwrap(), "admin");
        assert_eq!(command.get_str("pwd").unwrap(), "secret");

        let roles = command.get_array("roles").unwrap();
        let role = roles[0].as_document().unwrap();
        assert_eq!(role.get_str("role").unwrap(), USER_ROLE);
        assert_eq!(role.get_str("db").unwrap(), "admin");
    }

    #[test]
    fn test_to_json() {
        let json = to_json(doc! { "key": "schema_version", "value": 2_i64 });
        assert_eq!(json["key"], "schema_version");
        assert_eq!(json["value"], 2);
    }
}
