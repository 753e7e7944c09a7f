use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    data::{lot::LotRepository, reservation::ReservationRepository, user::UserRepository},
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{
        api::MessageDto,
        lot::{CreateLotParams, LotDto, UpdateLotParams},
        reservation::ReservationDto,
        user::{Role, UserDto},
    },
    service::lot::LotService,
    state::AppState,
};

#[derive(Deserialize)]
pub struct CreateLotDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub pin_code: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub number_of_spots: Option<i32>,
}

#[derive(Deserialize, Default)]
pub struct UpdateLotDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub pin_code: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub number_of_spots: Option<i32>,
}

fn require_field<T>(value: Option<T>, name: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::BadRequest(format!("{} is required", name)))
}

/// GET /api/admin/parkinglots
pub async fn list_lots(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let lots: Vec<LotDto> = LotRepository::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(|lot| lot.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(lots)))
}

/// POST /api/admin/parkinglots
pub async fn create_lot(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateLotDto>,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = CreateLotParams {
        name: require_field(dto.name, "name")?,
        address: dto.address,
        pin_code: dto.pin_code,
        price: require_field(dto.price, "price")?,
        number_of_spots: require_field(dto.number_of_spots, "number_of_spots")?,
    };

    let lot = LotService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(lot.into_dto())))
}

/// PUT /api/admin/parkinglots/{lot_id}
pub async fn update_lot(
    State(state): State<AppState>,
    session: Session,
    Path(lot_id): Path<i32>,
    Json(dto): Json<UpdateLotDto>,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let lot = LotService::new(&state.db)
        .update(
            lot_id,
            UpdateLotParams {
                name: dto.name,
                address: dto.address,
                pin_code: dto.pin_code,
                price: dto.price,
                number_of_spots: dto.number_of_spots,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(lot.into_dto())))
}

/// DELETE /api/admin/parkinglots/{lot_id}
pub async fn delete_lot(
    State(state): State<AppState>,
    session: Session,
    Path(lot_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    LotService::new(&state.db).delete(lot_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Deleted successfully".to_string(),
        }),
    ))
}

/// GET /api/admin/parkinglots/{lot_id}/spots
///
/// Per-spot occupancy detail; occupied spots carry the vehicle and user of
/// the active reservation.
pub async fn lot_spots(
    State(state): State<AppState>,
    session: Session,
    Path(lot_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let spots = LotService::new(&state.db).spots_detail(lot_id).await?;

    Ok((StatusCode::OK, Json(spots)))
}

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users: Vec<UserDto> = UserRepository::new(&state.db)
        .get_all_with_role(Role::User)
        .await?
        .into_iter()
        .map(|user| user.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(users)))
}

/// GET /api/admin/reservations
pub async fn list_reservations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let reservations: Vec<ReservationDto> = ReservationRepository::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(|r| r.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(reservations)))
}
