use chrono::{Duration, Utc};
use test_utils::{
    builder::TestBuilder,
    factory::{self, user::UserFactory},
};

use crate::server::{
    data::{invite::InviteRepository, nickname::NicknameRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::result::{
        NICK_TAKEN, NO_INVITE, PASSWORDS_DIFFER, PASSWORD_TOO_SHORT, USER_NOT_FOUND,
    },
    service::auth::{hash_password, AuthService, RegisterParams},
};

mod login;
mod register;

fn registration(email: &str, nick: &str, password: &str) -> RegisterParams {
    RegisterParams {
        email: email.to_string(),
        nick: nick.to_string(),
        password: password.to_string(),
        confirm_password: password.to_string(),
        bio: None,
    }
}
