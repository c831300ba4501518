use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AcademyDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub image: String,
    pub players: Vec<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AcademyListDto {
    pub academies: Vec<AcademyDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SignupDto {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Path of the already uploaded academy image.
    pub image: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokenDto {
    pub academy_id: i32,
    pub email: String,
    pub token: String,
}
