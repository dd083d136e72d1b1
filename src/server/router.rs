use axum::{extract::DefaultBodyLimit, routing::get, Router};
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth,
        chronicle::{self, CHRONICLE_TAG},
        invite::{self, INVITE_TAG},
        page,
        personal_message::{self, PM_TAG},
        poll::{self, POLL_TAG},
        post::{self, POST_TAG},
        region::{self, REGION_TAG},
        squad::{self, SQUAD_TAG},
        user::{self, USER_TAG},
    },
    state::AppState,
};

/// Request body cap, leaving room for multipart framing around a maximum size avatar.
const BODY_LIMIT_BYTES: usize = 6 * 1024 * 1024;

struct SessionCookie;

impl Modify for SessionCookie {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "diffen",
                "Session cookie issued by POST /auth/login.",
            ))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SessionCookie),
    info(title = "Diffen API", description = "Json api consumed by the Diffen forum client."),
    security(("SessionCookie" = [])),
    tags(
        (name = USER_TAG, description = "Profiles, roles and forum filters"),
        (name = INVITE_TAG, description = "Registration invites"),
        (name = PM_TAG, description = "Personal messages"),
        (name = POST_TAG, description = "Forum posts, votes and url tips"),
        (name = SQUAD_TAG, description = "Players, lineups, games and titles"),
        (name = POLL_TAG, description = "Polls"),
        (name = CHRONICLE_TAG, description = "Chronicles"),
        (name = REGION_TAG, description = "Regions"),
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (api_router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        // Users
        .routes(routes!(user::get_users))
        .routes(routes!(user::get_roles))
        .routes(routes!(user::get_users_in_role))
        .routes(routes!(user::get_user))
        .routes(routes!(user::get_user_posts))
        .routes(routes!(user::get_saved_posts))
        .routes(routes!(user::add_favorite_player))
        .routes(routes!(user::remove_favorite_player))
        .routes(routes!(user::seclude))
        .routes(routes!(user::reset_password))
        .routes(routes!(user::add_nick))
        .routes(routes!(user::update_bio))
        .routes(routes!(user::update_region))
        .routes(routes!(user::upload_avatar))
        .routes(routes!(user::set_roles))
        .routes(routes!(user::update_filter))
        // Invites
        .routes(routes!(invite::get_invites))
        .routes(routes!(invite::invite_exists))
        .routes(routes!(invite::create_invite))
        // Personal messages
        .routes(routes!(personal_message::get_conversation))
        .routes(routes!(personal_message::get_conversation_partners))
        .routes(routes!(personal_message::create_personal_message))
        // Posts
        .routes(routes!(post::get_forum_page))
        .routes(routes!(post::filter_forum_page))
        .routes(routes!(post::get_tips))
        .routes(routes!(post::get_post))
        .routes(routes!(post::create_post))
        .routes(routes!(post::update_post))
        .routes(routes!(post::delete_post))
        .routes(routes!(post::scissor_post))
        .routes(routes!(post::save_post))
        .routes(routes!(post::click_tip))
        .routes(routes!(post::vote))
        // Squad
        .routes(routes!(squad::get_players))
        .routes(routes!(squad::get_player))
        .routes(routes!(squad::create_player))
        .routes(routes!(squad::update_player))
        .routes(routes!(squad::get_positions))
        .routes(routes!(squad::get_formations))
        .routes(routes!(squad::get_lineup))
        .routes(routes!(squad::get_lineup_by_post))
        .routes(routes!(squad::get_user_lineups))
        .routes(routes!(squad::create_lineup))
        .routes(routes!(squad::get_games))
        .routes(routes!(squad::create_game))
        .routes(routes!(squad::get_titles))
        .routes(routes!(squad::create_title))
        // Polls
        .routes(routes!(poll::get_polls))
        .routes(routes!(poll::get_poll))
        .routes(routes!(poll::create_poll))
        .routes(routes!(poll::vote_in_poll))
        // Chronicles
        .routes(routes!(chronicle::get_chronicles))
        .routes(routes!(chronicle::get_chronicle))
        .routes(routes!(chronicle::create_chronicle))
        .routes(routes!(chronicle::update_chronicle))
        // Regions
        .routes(routes!(region::get_regions))
        .routes(routes!(region::create_region))
        .split_for_parts();

    Router::new()
        .merge(api_router)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .route("/auth/login", get(auth::login_page).post(auth::login))
        .route("/auth/register", get(auth::register_page).post(auth::register))
        .route("/auth/logout", get(auth::logout))
        .route("/", get(page::forum))
        .route("/forum/page/{page_number}", get(page::forum_page))
        .route("/forum/post/{post_id}", get(page::forum_post))
        .route("/profil/{user_id}", get(page::profile))
        .route("/trupp", get(page::squad))
        .route("/omrostning", get(page::polls))
        .route("/omrostning/{slug}", get(page::poll))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
}
