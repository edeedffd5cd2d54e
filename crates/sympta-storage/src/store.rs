use aws_sdk_s3::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;

use sympta_core::models::answer::RawAnswerRecord;
use sympta_core::models::score::ScoreRecord;
use sympta_core::s3_keys;
use sympta_core::store::{ResponseStore, StoreError};

use crate::error::StorageError;
use crate::objects;

/// Response store backed by one S3 bucket.
pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Build a store from the ambient AWS environment (default credential
    /// chain and region).
    pub async fn from_env(bucket: impl Into<String>) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(Client::new(&config), bucket)
    }

    async fn put_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let body = serde_json::to_vec_pretty(value)?;
        objects::put_object(
            &self.client,
            &self.bucket,
            key,
            body,
            Some("application/json"),
        )
        .await
    }

    async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<T, StorageError> {
        let body = objects::get_object(&self.client, &self.bucket, key).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl ResponseStore for S3Store {
    async fn append_raw_answer(&self, record: &RawAnswerRecord) -> Result<(), StoreError> {
        let key = s3_keys::raw_answer(record.respondent_id, record.id);
        self.put_json(&key, record).await.map_err(into_store_error)
    }

    async fn append_score_record(&self, record: &ScoreRecord) -> Result<(), StoreError> {
        let key = s3_keys::score_record(record.respondent_id, record.id);
        self.put_json(&key, record).await.map_err(into_store_error)
    }

    async fn query_score_records(
        &self,
        respondent_id: i64,
        limit: usize,
    ) -> Result<Vec<ScoreRecord>, StoreError> {
        let prefix = s3_keys::score_record_prefix(respondent_id);
        let keys = objects::list_objects(&self.client, &self.bucket, &prefix)
            .await
            .map_err(into_store_error)?;

        info!(respondent_id, objects = keys.len(), "loading score history");

        let mut records: Vec<ScoreRecord> = Vec::with_capacity(keys.len());
        for key in &keys {
            records.push(self.get_json(key).await.map_err(into_store_error)?);
        }

        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records.truncate(limit);
        Ok(records)
    }
}

fn into_store_error(err: StorageError) -> StoreError {
    match err {
        StorageError::NotFound { key } => StoreError::NotFound(key),
        StorageError::Serialization(e) => StoreError::Serialization(e),
        other => StoreError::Backend(other.to_string()),
    }
}
