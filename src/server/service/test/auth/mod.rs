use crate::{
    model::academy::{LoginDto, SignupDto},
    server::{
        data::academy::AcademyRepository,
        error::{auth::AuthError, AppError},
        model::auth::{LoginParam, SignupParam},
        service::auth::{token::TokenService, AuthService},
    },
};
use test_utils::builder::TestBuilder;

mod login;
mod signup;

/// Lowest cost bcrypt accepts, keeps hashing fast in tests.
const TEST_COST: u32 = 4;

fn token_service() -> TokenService {
    TokenService::new("test-secret", chrono::Duration::hours(1))
}

fn signup_param(email: &str, password: &str) -> SignupParam {
    SignupParam::from_dto(SignupDto {
        name: "Grenoble Foot Academy".to_string(),
        email: email.to_string(),
        password: password.to_string(),
        image: "images/academy.png".to_string(),
    })
    .unwrap()
}

fn login_param(email: &str, password: &str) -> LoginParam {
    LoginParam::from_dto(LoginDto {
        email: email.to_string(),
        password: password.to_string(),
    })
}
