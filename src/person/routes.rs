use crate::api_error::ApiError;
use crate::person::{decode, NewUser, StorageError, UserStore};
use crate::response::{send_json, JsonResponse};
use actix_web::error::PayloadError;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use futures::StreamExt;

/// Lookups always target this record; no request input selects another.
const LOOKUP_USER_ID: i64 = 1;

async fn create(
    payload: web::Payload,
    store: web::Data<dyn UserStore>,
) -> Result<HttpResponse, ApiError> {
    let body = read_payload(payload).await.map_err(|e| {
        warn!("Failed to read person payload: {}", e);
        ApiError::bad_request("Invalid JSON message")
    })?;

    let request = decode(&body).map_err(|e| {
        warn!("Rejected person payload: {}", e);
        ApiError::bad_request("Invalid JSON message")
    })?;

    let candidate = NewUser::from(request.person);

    let user = blocking(store, move |store| store.create_user(candidate))
        .await
        .map_err(|e| {
            error!("Error creating user: {}", e);
            ApiError::internal("Error creating user")
        })?;

    info!("Created user {}", user.id);

    Ok(send_json(
        StatusCode::OK,
        &JsonResponse::new("success", "Data successfully received"),
    ))
}

async fn find(store: web::Data<dyn UserStore>) -> Result<HttpResponse, ApiError> {
    let user = blocking(store, |store| store.get_user_by_id(LOOKUP_USER_ID))
        .await
        .map_err(|e| {
            error!("Error getting user {}: {}", LOOKUP_USER_ID, e);
            ApiError::internal("Error getting user by ID")
        })?;

    Ok(send_json(StatusCode::OK, &user))
}

/// Collects the whole request body. No size limit is applied.
async fn read_payload(mut payload: web::Payload) -> Result<web::BytesMut, PayloadError> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        body.extend_from_slice(&chunk?);
    }

    Ok(body)
}

/// Runs a store call on the blocking thread pool.
async fn blocking<T, F>(store: web::Data<dyn UserStore>, op: F) -> Result<T, StorageError>
where
    F: FnOnce(&dyn UserStore) -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    let store = store.into_inner();

    web::block(move || op(store.as_ref())).await?
}

/// Other methods on `/person` get the resource's default 405 response.
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/person")
            .route(web::post().to(create))
            .route(web::get().to(find)),
    );
}
