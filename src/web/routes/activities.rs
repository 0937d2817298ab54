use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::Activity;
use crate::store::ActivityDirectory;
use crate::web::error::ApiError;

/// Full directory listing, serialized as a JSON object keyed by activity
/// name. Keys come out in seed order, which a plain map type would not give.
pub struct ActivityListing(Vec<(String, Activity)>);

impl Serialize for ActivityListing {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, activity) in &self.0 {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

#[derive(Serialize)]
pub struct ConfirmationMessage {
    pub message: String,
}

pub async fn activities_handler(
    State(directory): State<Arc<ActivityDirectory>>,
) -> Json<ActivityListing> {
    Json(ActivityListing(directory.snapshot()))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(directory): State<Arc<ActivityDirectory>>,
) -> Result<Json<ConfirmationMessage>, ApiError> {
    if let Err(e) = directory.signup(&activity_name, &query.email) {
        warn!("Signup rejected for {}: {}", activity_name, e);
        return Err(e.into());
    }

    Ok(Json(ConfirmationMessage {
        message: format!("Signed up {} for {}", query.email, activity_name),
    }))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(directory): State<Arc<ActivityDirectory>>,
) -> Result<Json<ConfirmationMessage>, ApiError> {
    if let Err(e) = directory.unregister(&activity_name, &query.email) {
        warn!("Unregister rejected for {}: {}", activity_name, e);
        return Err(e.into());
    }

    Ok(Json(ConfirmationMessage {
        message: format!("Unregistered {} from {}", query.email, activity_name),
    }))
}
