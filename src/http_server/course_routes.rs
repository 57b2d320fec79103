//! Course HTTP Routes
//!
//! CRUD and search endpoints over the course catalog. Each handler
//! validates its input, takes the store lock for as short as possible,
//! and returns either a success payload or one classified [`ApiError`].

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::catalog::{CatalogError, Course, CourseStore};

use super::errors::{ApiError, ApiResult};
use super::request::{coerce_price, CoursePayload, SearchQuery};

// ==================
// Shared State
// ==================

/// Catalog state shared across handlers.
///
/// The `RwLock` is the mutual exclusion the multi-threaded runtime
/// requires: writers (create/update/delete) are serialized, readers may
/// overlap. No lock is held across an await point.
pub struct CatalogState {
    store: RwLock<CourseStore>,
    random_pick: bool,
}

impl CatalogState {
    /// Wrap an existing store
    pub fn new(store: CourseStore, random_pick: bool) -> Self {
        Self {
            store: RwLock::new(store),
            random_pick,
        }
    }

    /// State holding the stock catalog
    pub fn seeded(random_pick: bool) -> Self {
        Self::new(CourseStore::seeded(), random_pick)
    }
}

fn read_store(state: &CatalogState) -> ApiResult<RwLockReadGuard<'_, CourseStore>> {
    state
        .store
        .read()
        .map_err(|_| ApiError::Internal("catalog lock poisoned".to_string()))
}

fn write_store(state: &CatalogState) -> ApiResult<RwLockWriteGuard<'_, CourseStore>> {
    state
        .store
        .write()
        .map_err(|_| ApiError::Internal("catalog lock poisoned".to_string()))
}

// ==================
// Course Routes
// ==================

/// Create course routes
pub fn course_routes(state: Arc<CatalogState>) -> Router {
    Router::new()
        .route("/courses", get(list_courses_handler))
        .route("/course", get(featured_course_handler))
        .route("/course", post(create_course_handler))
        .route("/course/{id}", get(get_course_handler))
        .route("/course/{id}", put(update_course_handler))
        .route("/course/{id}", delete(delete_course_handler))
        .route("/search", get(search_course_handler))
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

fn require_course_id(id: &str) -> ApiResult<()> {
    if id.trim().is_empty() {
        return Err(ApiError::MissingCourseId);
    }
    Ok(())
}

fn parse_body(payload: Result<Json<CoursePayload>, JsonRejection>) -> ApiResult<Course> {
    let Json(payload) = payload.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;
    payload.into_course()
}

// ==================
// Handlers
// ==================

/// `GET /courses`: the full catalog in insertion order
async fn list_courses_handler(
    State(state): State<Arc<CatalogState>>,
) -> ApiResult<Json<Vec<Course>>> {
    let store = read_store(&state)?;
    Ok(Json(store.all().to_vec()))
}

/// `GET /course`: the first course, or a uniformly random one when the
/// server runs with `random_pick` enabled
async fn featured_course_handler(
    State(state): State<Arc<CatalogState>>,
) -> ApiResult<Json<Course>> {
    let store = read_store(&state)?;

    let course = if state.random_pick {
        store.random_pick()?
    } else {
        store.first()?
    };

    Ok(Json(course.clone()))
}

/// `GET /course/{id}`
async fn get_course_handler(
    State(state): State<Arc<CatalogState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Course>> {
    require_course_id(&id)?;

    let store = read_store(&state)?;
    let course = store.find_by_id(&id).ok_or(ApiError::NotFound)?;

    Ok(Json(course.clone()))
}

/// `POST /course`: create; responds with the resulting full catalog
async fn create_course_handler(
    State(state): State<Arc<CatalogState>>,
    payload: Result<Json<CoursePayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Vec<Course>>)> {
    let course = parse_body(payload)?;

    let mut store = write_store(&state)?;

    if store.find_by_id(&course.id).is_some() {
        return Err(CatalogError::DuplicateId(course.id).into());
    }

    store.insert(course);

    Ok((StatusCode::CREATED, Json(store.all().to_vec())))
}

/// `PUT /course/{id}`: full replace; responds with the resulting full
/// catalog
async fn update_course_handler(
    State(state): State<Arc<CatalogState>>,
    Path(id): Path<String>,
    payload: Result<Json<CoursePayload>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Vec<Course>>)> {
    require_course_id(&id)?;
    let course = parse_body(payload)?;

    let mut store = write_store(&state)?;
    let pos = store.position_of(&id).ok_or(ApiError::NotFound)?;

    // A body id differing from the path id must not collide with a
    // third record, or the one-record-per-id invariant breaks.
    if course.id != id && store.find_by_id(&course.id).is_some() {
        return Err(CatalogError::DuplicateId(course.id).into());
    }

    store.replace_at(pos, course);

    Ok((StatusCode::CREATED, Json(store.all().to_vec())))
}

/// `DELETE /course/{id}`: responds with the resulting full catalog
async fn delete_course_handler(
    State(state): State<Arc<CatalogState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<Course>>> {
    require_course_id(&id)?;

    let mut store = write_store(&state)?;
    let pos = store.position_of(&id).ok_or(ApiError::NotFound)?;
    store.remove_at(pos);

    Ok(Json(store.all().to_vec()))
}

/// `GET /search?course=&price=`: exact match on both fields
async fn search_course_handler(
    State(state): State<Arc<CatalogState>>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<Course>> {
    let (name, raw_price) = match (query.course, query.price) {
        (Some(name), Some(price)) if !name.trim().is_empty() && !price.trim().is_empty() => {
            (name, price)
        }
        _ => return Err(ApiError::MissingSearchParams),
    };

    let price = coerce_price(&serde_json::Value::String(raw_price))?;

    let store = read_store(&state)?;
    let course = store.find_match(&name, price).ok_or(ApiError::NotFound)?;

    Ok(Json(course.clone()))
}
