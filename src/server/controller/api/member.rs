use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ResultDto},
        member::{
            CreateMemberDto, CreateMemberResponseDto, MemberDto, UpdateMemberDto,
            UpdateMemberResponseDto,
        },
    },
    server::{
        error::AppError,
        model::member::{CreateMemberParam, Member, UpdateMemberParam},
        service::member::MemberService,
        state::AppState,
    },
};

pub static MEMBER_TAG: &str = "member";

/// Registers a member bound directly from the full member model.
#[utoipa::path(
    post,
    path = "/api/v1/members",
    tag = MEMBER_TAG,
    request_body = Member,
    responses(
        (status = 200, description = "Member registered", body = CreateMemberResponseDto),
        (status = 400, description = "Member name is blank", body = ErrorDto),
        (status = 409, description = "Member name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_member_v1(
    State(state): State<AppState>,
    Json(member): Json<Member>,
) -> Result<impl IntoResponse, AppError> {
    let id = MemberService::new(&state.db)
        .join(CreateMemberParam::from_member(member))
        .await?;

    Ok((StatusCode::OK, Json(CreateMemberResponseDto { id })))
}

/// Registers a member from a request DTO.
#[utoipa::path(
    post,
    path = "/api/v2/members",
    tag = MEMBER_TAG,
    request_body = CreateMemberDto,
    responses(
        (status = 200, description = "Member registered", body = CreateMemberResponseDto),
        (status = 400, description = "Member name is blank", body = ErrorDto),
        (status = 409, description = "Member name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_member_v2(
    State(state): State<AppState>,
    Json(payload): Json<CreateMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = MemberService::new(&state.db)
        .join(CreateMemberParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(CreateMemberResponseDto { id })))
}

#[utoipa::path(
    patch,
    path = "/api/v2/members/{id}",
    tag = MEMBER_TAG,
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    request_body = UpdateMemberDto,
    responses(
        (status = 200, description = "Member renamed", body = UpdateMemberResponseDto),
        (status = 400, description = "Member name is blank", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 409, description = "Member name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_member_v2(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = MemberService::new(&state.db)
        .update(UpdateMemberParam {
            id,
            name: payload.name,
        })
        .await?;

    Ok((StatusCode::OK, Json(member.into_update_response_dto())))
}

/// Lists members as the full member model.
#[utoipa::path(
    get,
    path = "/api/v1/members",
    tag = MEMBER_TAG,
    responses(
        (status = 200, description = "All members", body = Vec<Member>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn members_v1(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let members = MemberService::new(&state.db).find_members().await?;

    Ok((StatusCode::OK, Json(members)))
}

/// Lists member names wrapped with a count.
#[utoipa::path(
    get,
    path = "/api/v2/members",
    tag = MEMBER_TAG,
    responses(
        (status = 200, description = "All members", body = ResultDto<Vec<MemberDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn members_v2(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let members: Vec<MemberDto> = MemberService::new(&state.db)
        .find_members()
        .await?
        .into_iter()
        .map(|member| member.into_dto())
        .collect();

    Ok((
        StatusCode::OK,
        Json(ResultDto {
            count: members.len(),
            data: members,
        }),
    ))
}
