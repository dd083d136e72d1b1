//! Forum post business logic.
//!
//! Listings are paged in the store: the service counts the matching rows,
//! derives the page window and fetches only that window. A post is written
//! together with its optional url tip and lineup link, and each of those is
//! reported as its own entry in the result list.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        post::PostRepository, squad::lineup::LineupRepository, url_tip::UrlTipRepository,
        vote::VoteRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        filter::Filter,
        post::{
            CreatePostParams, CreateVoteParams, Post, PostPage, PostRecord, UpdatePostParams,
            UrlTip,
        },
        result::{
            ActionResult, ALREADY_VOTED, CONNECT_LINEUP, CREATE_POST, CREATE_URL_TIP,
            CREATE_VOTE, DELETE_POST, EMPTY_POST, INVALID_URL_TIP, LINEUP_NOT_FOUND,
            OWN_POST_VOTE, PARENT_NOT_FOUND, POST_NOT_FOUND, SAVE_POST, SCISSOR_POST,
            TIP_NOT_FOUND, UPDATE_POST,
        },
        user::LoggedInUser,
    },
    util::paging::{number_of_pages, page_window},
};

/// Page size of the post listings on a profile.
pub const USER_POSTS_PAGE_SIZE: u64 = 5;

pub struct PostService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> PostService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// One forum page for `filter`, sized by the filter's `posts_per_page`.
    ///
    /// Pages outside `1..=number_of_pages` come back empty with the totals set.
    pub async fn get_forum_page(
        &self,
        viewer_id: Option<&str>,
        filter: &Filter,
        page_id: u64,
    ) -> Result<PostPage, AppError> {
        let post_repo = PostRepository::new(self.db);
        let page_size = filter.posts_per_page;

        let total = post_repo.count_filtered(filter).await?;
        let posts = match page_window(total, page_size, page_id) {
            Some(window) => {
                post_repo
                    .get_page(filter, window.offset, window.limit)
                    .await?
            }
            None => Vec::new(),
        };

        self.into_page(posts, viewer_id, page_id, total, page_size)
            .await
    }

    /// Posts written by `user_id`, five per page.
    pub async fn get_user_posts(
        &self,
        viewer_id: Option<&str>,
        user_id: &str,
        page_id: u64,
    ) -> Result<PostPage, AppError> {
        let post_repo = PostRepository::new(self.db);

        let total = post_repo.count_by_user(user_id).await?;
        let posts = match page_window(total, USER_POSTS_PAGE_SIZE, page_id) {
            Some(window) => {
                post_repo
                    .get_by_user(user_id, window.offset, window.limit)
                    .await?
            }
            None => Vec::new(),
        };

        self.into_page(posts, viewer_id, page_id, total, USER_POSTS_PAGE_SIZE)
            .await
    }

    /// Posts `user_id` has saved, five per page.
    pub async fn get_saved_posts(
        &self,
        viewer_id: Option<&str>,
        user_id: &str,
        page_id: u64,
    ) -> Result<PostPage, AppError> {
        let post_repo = PostRepository::new(self.db);

        let total = post_repo.count_saved_by_user(user_id).await?;
        let posts = match page_window(total, USER_POSTS_PAGE_SIZE, page_id) {
            Some(window) => {
                post_repo
                    .get_saved_by_user(user_id, window.offset, window.limit)
                    .await?
            }
            None => Vec::new(),
        };

        self.into_page(posts, viewer_id, page_id, total, USER_POSTS_PAGE_SIZE)
            .await
    }

    pub async fn get_post(&self, viewer_id: Option<&str>, post_id: i32) -> Result<Post, AppError> {
        let post_repo = PostRepository::new(self.db);

        let Some(post) = post_repo.get_by_id(post_id).await? else {
            return Err(AppError::NotFound(POST_NOT_FOUND.to_string()));
        };

        post_repo
            .with_relations(vec![post])
            .await?
            .into_iter()
            .next()
            .map(|relations| Post::from_with_relations(relations, viewer_id))
            .ok_or_else(|| AppError::NotFound(POST_NOT_FOUND.to_string()))
    }

    /// Creates a post with its url tip and lineup link when given.
    ///
    /// Everything is validated first and the rows are written in one
    /// transaction, so a rejected request leaves no partial post behind.
    ///
    /// # Returns
    /// - `Ok(results)` - One entry for the post plus one per attached tip or lineup
    /// - `Err(AppError::BadRequest)` - Empty message, malformed tip, unknown
    ///   parent post or lineup
    pub async fn create(&self, params: CreatePostParams) -> Result<Vec<ActionResult>, AppError> {
        if params.message.trim().is_empty() {
            return Err(AppError::BadRequest(EMPTY_POST.to_string()));
        }
        if let Some(href) = params.url_tip_href.as_deref() {
            validate_tip_href(href)?;
        }

        let post_repo = PostRepository::new(self.db);
        if let Some(parent_id) = params.parent_post_id {
            if post_repo.get_by_id(parent_id).await?.is_none() {
                return Err(AppError::BadRequest(PARENT_NOT_FOUND.to_string()));
            }
        }
        if let Some(lineup_id) = params.lineup_id {
            self.require_lineup(lineup_id).await?;
        }

        post_repo.create(&params).await?;
        let mut results = vec![ActionResult::from_outcome(true, CREATE_POST)];
        if params.url_tip_href.is_some() {
            results.push(ActionResult::from_outcome(true, CREATE_URL_TIP));
        }
        if params.lineup_id.is_some() {
            results.push(ActionResult::from_outcome(true, CONNECT_LINEUP));
        }

        Ok(results)
    }

    /// Edits a post. Only its author or an Admin may do so.
    ///
    /// The tip and lineup follow the request: a value replaces the current one,
    /// `None` removes it.
    ///
    /// # Returns
    /// - `Ok(results)` - Post, tip and lineup outcomes
    /// - `Err(AppError::NotFound)` - No such post
    /// - `Err(AuthError::AccessDenied)` - Editor is neither author nor Admin
    /// - `Err(AppError::BadRequest)` - Empty message, malformed tip, unknown lineup
    pub async fn update(
        &self,
        editor: &LoggedInUser,
        params: UpdatePostParams,
    ) -> Result<Vec<ActionResult>, AppError> {
        let post_repo = PostRepository::new(self.db);

        let Some(post) = post_repo.get_by_id(params.id).await? else {
            return Err(AppError::NotFound(POST_NOT_FOUND.to_string()));
        };

        if !editor.is_self_or_admin(&post.created_by_user_id) {
            return Err(AuthError::AccessDenied(
                editor.id().to_string(),
                format!("User attempted to edit post {} written by someone else", post.id),
            )
            .into());
        }

        if params.message.trim().is_empty() {
            return Err(AppError::BadRequest(EMPTY_POST.to_string()));
        }
        if let Some(href) = params.url_tip_href.as_deref() {
            validate_tip_href(href)?;
        }
        if let Some(lineup_id) = params.lineup_id {
            self.require_lineup(lineup_id).await?;
        }

        let updated = post_repo.update(&params).await?;
        let mut results = vec![ActionResult::from_outcome(updated, UPDATE_POST)];
        if updated && params.url_tip_href.is_some() {
            results.push(ActionResult::from_outcome(true, CREATE_URL_TIP));
        }
        if updated && params.lineup_id.is_some() {
            results.push(ActionResult::from_outcome(true, CONNECT_LINEUP));
        }

        Ok(results)
    }

    /// Deletes a post with its votes, tips, lineup links and markers.
    pub async fn delete(&self, post_id: i32) -> Result<Vec<ActionResult>, AppError> {
        let deleted = PostRepository::new(self.db).delete(post_id).await?;
        if !deleted {
            return Err(AppError::NotFound(POST_NOT_FOUND.to_string()));
        }

        tracing::info!("Post {} deleted", post_id);

        Ok(vec![ActionResult::from_outcome(true, DELETE_POST)])
    }

    /// Hides a post from every listing. Scissoring twice is a no-op.
    pub async fn scissor(
        &self,
        post_id: i32,
        scissored_by_user_id: &str,
    ) -> Result<Vec<ActionResult>, AppError> {
        let post_repo = PostRepository::new(self.db);
        self.require_post(&post_repo, post_id).await?;

        if !post_repo.is_scissored(post_id).await? {
            post_repo.scissor(post_id, scissored_by_user_id).await?;
            tracing::info!("Post {} scissored by {}", post_id, scissored_by_user_id);
        }

        Ok(vec![ActionResult::from_outcome(true, SCISSOR_POST)])
    }

    /// Bookmarks a post for `user_id`. Saving twice is a no-op.
    pub async fn save(&self, post_id: i32, user_id: &str) -> Result<Vec<ActionResult>, AppError> {
        let post_repo = PostRepository::new(self.db);
        self.require_post(&post_repo, post_id).await?;

        if !post_repo.is_saved_by_user(post_id, user_id).await? {
            post_repo.save_for_user(post_id, user_id).await?;
        }

        Ok(vec![ActionResult::from_outcome(true, SAVE_POST)])
    }

    /// Registers a vote.
    ///
    /// # Returns
    /// - `Ok(results)` - Vote stored
    /// - `Err(AppError::NotFound)` - No such post
    /// - `Err(AppError::BadRequest)` - Voting on one's own post, or a second vote
    pub async fn vote(&self, params: CreateVoteParams) -> Result<Vec<ActionResult>, AppError> {
        let post_repo = PostRepository::new(self.db);
        let post = self.require_post(&post_repo, params.post_id).await?;

        if post.created_by_user_id == params.created_by_user_id {
            return Err(AppError::BadRequest(OWN_POST_VOTE.to_string()));
        }

        let vote_repo = VoteRepository::new(self.db);
        if vote_repo
            .user_has_voted(params.post_id, &params.created_by_user_id)
            .await?
        {
            return Err(AppError::BadRequest(ALREADY_VOTED.to_string()));
        }

        vote_repo.create(params).await?;

        Ok(vec![ActionResult::from_outcome(true, CREATE_VOTE)])
    }

    /// Counts a click on the tip of `post_id`.
    pub async fn click_tip(&self, post_id: i32) -> Result<(), AppError> {
        if !UrlTipRepository::new(self.db)
            .increment_clicks(post_id)
            .await?
        {
            return Err(AppError::NotFound(TIP_NOT_FOUND.to_string()));
        }

        Ok(())
    }

    /// Every tip, most clicked first.
    pub async fn get_tips(&self) -> Result<Vec<UrlTip>, AppError> {
        Ok(UrlTipRepository::new(self.db).get_all().await?)
    }

    async fn into_page(
        &self,
        posts: Vec<PostRecord>,
        viewer_id: Option<&str>,
        page_id: u64,
        total: u64,
        page_size: u64,
    ) -> Result<PostPage, AppError> {
        let posts = PostRepository::new(self.db)
            .with_relations(posts)
            .await?
            .into_iter()
            .map(|relations| Post::from_with_relations(relations, viewer_id))
            .collect();

        Ok(PostPage {
            posts,
            current_page: page_id,
            number_of_pages: number_of_pages(total, page_size),
            total,
        })
    }

    async fn require_post(
        &self,
        post_repo: &PostRepository<'_>,
        post_id: i32,
    ) -> Result<PostRecord, AppError> {
        post_repo
            .get_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(POST_NOT_FOUND.to_string()))
    }

    async fn require_lineup(&self, lineup_id: i32) -> Result<(), AppError> {
        if LineupRepository::new(self.db)
            .get_by_id(lineup_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(LINEUP_NOT_FOUND.to_string()));
        }
        Ok(())
    }
}

/// Tips must be absolute http or https urls.
fn validate_tip_href(href: &str) -> Result<(), AppError> {
    match url::Url::parse(href) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.host().is_some() => Ok(()),
        _ => Err(AppError::BadRequest(INVALID_URL_TIP.to_string())),
    }
}
