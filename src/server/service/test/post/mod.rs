use crate::server::{
    error::{auth::AuthError, AppError},
    model::{
        post::{CreatePostParams, CreateVoteParams, UpdatePostParams},
        result::{ALREADY_VOTED, EMPTY_POST, INVALID_URL_TIP, OWN_POST_VOTE},
        user::LoggedInUser,
    },
    service::post::PostService,
};
use entity::vote::VoteType;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_user_posts;
mod update;

fn new_post(user_id: &str, message: &str) -> CreatePostParams {
    CreatePostParams {
        message: message.to_string(),
        created_by_user_id: user_id.to_string(),
        parent_post_id: None,
        url_tip_href: None,
        lineup_id: None,
    }
}
