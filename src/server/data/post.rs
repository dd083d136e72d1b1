//! Post data repository for database operations.
//!
//! This module provides the `PostRepository` for forum posts and the rows that
//! hang off them: scissor markers, saves and, when loading, votes, url tips,
//! lineup links and the reply chain. Listings keep scissored posts out with a
//! subquery so the statement stays the same size however many posts are hidden.

use std::collections::{HashMap, HashSet};

use chrono::{Days, NaiveDate, Utc};
use entity::user_filter::StartingEleven;
use sea_orm::{
    sea_query::{Expr, Query},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    DatabaseTransaction, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
    TransactionTrait,
};

use crate::server::{
    data::user::UserRepository,
    model::{
        filter::Filter,
        post::{
            CastVote, CreatePostParams, ParentPostWithAuthor, PostRecord, PostWithRelations,
            UpdatePostParams, UrlTip,
        },
        user::UserSummary,
    },
};

/// Upper bound on how far a reply chain is followed.
const MAX_PARENT_DEPTH: usize = 50;

/// Repository providing database operations for forum posts.
pub struct PostRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostRepository<'a> {
    /// Creates a new PostRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PostRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// One page of the forum, newest first, with scissored posts left out.
    ///
    /// # Arguments
    /// - `filter` - Author, date and lineup restrictions
    /// - `offset` - Number of matching posts to skip
    /// - `limit` - Maximum number of posts to return
    ///
    /// # Returns
    /// - `Ok(Vec<PostRecord>)` - The posts of the window
    /// - `Err(DbErr)` - Database error
    pub async fn get_page(
        &self,
        filter: &Filter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<PostRecord>, DbErr> {
        let posts = self
            .filtered(filter)
            .order_by_desc(entity::post::Column::Created)
            .order_by_desc(entity::post::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(posts.into_iter().map(PostRecord::from_entity).collect())
    }

    /// Number of posts `get_page` can return for `filter` across all pages.
    pub async fn count_filtered(&self, filter: &Filter) -> Result<u64, DbErr> {
        self.filtered(filter).count(self.db).await
    }

    /// Posts written by `user_id`, newest first, scissored ones left out.
    ///
    /// # Arguments
    /// - `user_id` - Author of the posts
    /// - `offset` - Number of posts to skip
    /// - `limit` - Maximum number of posts to return
    ///
    /// # Returns
    /// - `Ok(Vec<PostRecord>)` - The posts of the window
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_user(
        &self,
        user_id: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<PostRecord>, DbErr> {
        let posts = self
            .by_user(user_id)
            .order_by_desc(entity::post::Column::Created)
            .order_by_desc(entity::post::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(posts.into_iter().map(PostRecord::from_entity).collect())
    }

    pub async fn count_by_user(&self, user_id: &str) -> Result<u64, DbErr> {
        self.by_user(user_id).count(self.db).await
    }

    /// Posts `user_id` has saved, most recently saved first.
    ///
    /// # Arguments
    /// - `user_id` - User who saved the posts
    /// - `offset` - Number of saves to skip
    /// - `limit` - Maximum number of posts to return
    ///
    /// # Returns
    /// - `Ok(Vec<PostRecord>)` - Saved posts in save order
    /// - `Err(DbErr)` - Database error
    pub async fn get_saved_by_user(
        &self,
        user_id: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<PostRecord>, DbErr> {
        let post_ids: Vec<i32> = entity::prelude::SavedPost::find()
            .filter(entity::saved_post::Column::SavedByUserId.eq(user_id))
            .order_by_desc(entity::saved_post::Column::Created)
            .order_by_desc(entity::saved_post::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(|s| s.post_id)
            .collect();

        if post_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut posts: HashMap<i32, entity::post::Model> = entity::prelude::Post::find()
            .filter(entity::post::Column::Id.is_in(post_ids.clone()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        Ok(post_ids
            .into_iter()
            .filter_map(|id| posts.remove(&id))
            .map(PostRecord::from_entity)
            .collect())
    }

    pub async fn count_saved_by_user(&self, user_id: &str) -> Result<u64, DbErr> {
        entity::prelude::SavedPost::find()
            .filter(entity::saved_post::Column::SavedByUserId.eq(user_id))
            .count(self.db)
            .await
    }

    /// Finds a post by id, scissored or not.
    ///
    /// # Returns
    /// - `Ok(Some(PostRecord))` - Post found
    /// - `Ok(None)` - No post with that id
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_id(&self, post_id: i32) -> Result<Option<PostRecord>, DbErr> {
        let post = entity::prelude::Post::find_by_id(post_id).one(self.db).await?;

        Ok(post.map(PostRecord::from_entity))
    }

    /// Inserts a post together with its url tip and lineup link.
    ///
    /// All rows are written in one transaction, so a failed tip or link
    /// insert leaves no post behind.
    ///
    /// # Arguments
    /// - `params` - Message, author, optional reply target, tip and lineup
    ///
    /// # Returns
    /// - `Ok(PostRecord)` - The created post
    /// - `Err(DbErr)` - Insert failed; nothing was written
    pub async fn create(&self, params: &CreatePostParams) -> Result<PostRecord, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let post = entity::post::ActiveModel {
            message: ActiveValue::Set(params.message.clone()),
            created_by_user_id: ActiveValue::Set(params.created_by_user_id.clone()),
            parent_post_id: ActiveValue::Set(params.parent_post_id),
            created: ActiveValue::Set(now),
            updated: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        if let Some(href) = params.url_tip_href.as_deref() {
            insert_url_tip(&txn, post.id, href).await?;
        }
        if let Some(lineup_id) = params.lineup_id {
            insert_lineup_link(&txn, post.id, lineup_id).await?;
        }

        txn.commit().await?;

        Ok(PostRecord::from_entity(post))
    }

    /// Replaces the message, url tip and lineup link of a post and stamps `updated`.
    ///
    /// An existing tip keeps its clicks when only the href changes. A `None`
    /// tip or lineup removes the current one.
    ///
    /// # Arguments
    /// - `params` - Post id with the new message, tip and lineup
    ///
    /// # Returns
    /// - `Ok(true)` - Post updated
    /// - `Ok(false)` - No post with that id; nothing written
    /// - `Err(DbErr)` - Database error; nothing written
    pub async fn update(&self, params: &UpdatePostParams) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let result = entity::prelude::Post::update_many()
            .filter(entity::post::Column::Id.eq(params.id))
            .col_expr(entity::post::Column::Message, Expr::value(params.message.clone()))
            .col_expr(entity::post::Column::Updated, Expr::value(Some(Utc::now())))
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(false);
        }

        match params.url_tip_href.as_deref() {
            Some(href) => {
                let current = entity::prelude::UrlTip::find()
                    .filter(entity::url_tip::Column::PostId.eq(params.id))
                    .order_by_desc(entity::url_tip::Column::Created)
                    .order_by_desc(entity::url_tip::Column::Id)
                    .one(&txn)
                    .await?;

                match current {
                    Some(tip) => {
                        entity::prelude::UrlTip::update_many()
                            .filter(entity::url_tip::Column::Id.eq(tip.id))
                            .col_expr(entity::url_tip::Column::Href, Expr::value(href))
                            .exec(&txn)
                            .await?;
                    }
                    None => insert_url_tip(&txn, params.id, href).await?,
                }
            }
            None => {
                entity::prelude::UrlTip::delete_many()
                    .filter(entity::url_tip::Column::PostId.eq(params.id))
                    .exec(&txn)
                    .await?;
            }
        }

        entity::prelude::PostLineup::delete_many()
            .filter(entity::post_lineup::Column::PostId.eq(params.id))
            .exec(&txn)
            .await?;
        if let Some(lineup_id) = params.lineup_id {
            insert_lineup_link(&txn, params.id, lineup_id).await?;
        }

        txn.commit().await?;

        Ok(true)
    }

    /// Deletes a post and every row hanging off it in one transaction.
    ///
    /// Replies to the post are kept and lose their parent link.
    ///
    /// # Returns
    /// - `Ok(true)` - Post deleted
    /// - `Ok(false)` - No post with that id
    /// - `Err(DbErr)` - Database error; nothing was deleted
    pub async fn delete(&self, post_id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Vote::delete_many()
            .filter(entity::vote::Column::PostId.eq(post_id))
            .exec(&txn)
            .await?;
        entity::prelude::UrlTip::delete_many()
            .filter(entity::url_tip::Column::PostId.eq(post_id))
            .exec(&txn)
            .await?;
        entity::prelude::PostLineup::delete_many()
            .filter(entity::post_lineup::Column::PostId.eq(post_id))
            .exec(&txn)
            .await?;
        entity::prelude::ScissoredPost::delete_many()
            .filter(entity::scissored_post::Column::PostId.eq(post_id))
            .exec(&txn)
            .await?;
        entity::prelude::SavedPost::delete_many()
            .filter(entity::saved_post::Column::PostId.eq(post_id))
            .exec(&txn)
            .await?;
        entity::prelude::Post::update_many()
            .filter(entity::post::Column::ParentPostId.eq(post_id))
            .col_expr(
                entity::post::Column::ParentPostId,
                Expr::value(Option::<i32>::None),
            )
            .exec(&txn)
            .await?;

        let result = entity::prelude::Post::delete_by_id(post_id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Marks a post as scissored by `scissored_by_user_id`.
    ///
    /// # Arguments
    /// - `post_id` - Post to hide
    /// - `scissored_by_user_id` - Moderator doing it
    ///
    /// # Returns
    /// - `Ok(())` - Marker stored
    /// - `Err(DbErr)` - Insert failed, e.g. an unknown post
    pub async fn scissor(&self, post_id: i32, scissored_by_user_id: &str) -> Result<(), DbErr> {
        entity::scissored_post::ActiveModel {
            post_id: ActiveValue::Set(post_id),
            scissored_by_user_id: ActiveValue::Set(scissored_by_user_id.to_string()),
            created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    pub async fn is_scissored(&self, post_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ScissoredPost::find()
            .filter(entity::scissored_post::Column::PostId.eq(post_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Bookmarks a post for `user_id`.
    ///
    /// # Returns
    /// - `Ok(())` - Save stored
    /// - `Err(DbErr)` - Insert failed
    pub async fn save_for_user(&self, post_id: i32, user_id: &str) -> Result<(), DbErr> {
        entity::saved_post::ActiveModel {
            post_id: ActiveValue::Set(post_id),
            saved_by_user_id: ActiveValue::Set(user_id.to_string()),
            created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    pub async fn is_saved_by_user(&self, post_id: i32, user_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::SavedPost::find()
            .filter(entity::saved_post::Column::PostId.eq(post_id))
            .filter(entity::saved_post::Column::SavedByUserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Loads everything the forum shows for `posts`, keeping their order.
    ///
    /// Authors, voters, url tips, lineup links, scissor markers and the full
    /// reply chain are fetched with one query per kind rather than per post.
    ///
    /// # Arguments
    /// - `posts` - Posts to enrich, in display order
    ///
    /// # Returns
    /// - `Ok(Vec<PostWithRelations>)` - One entry per post, same order
    /// - `Err(DbErr)` - Database error
    pub async fn with_relations(
        &self,
        posts: Vec<PostRecord>,
    ) -> Result<Vec<PostWithRelations>, DbErr> {
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let post_ids: Vec<i32> = posts.iter().map(|p| p.id).collect();

        let parents = self.load_parent_chains(&posts).await?;

        let votes = entity::prelude::Vote::find()
            .filter(entity::vote::Column::PostId.is_in(post_ids.clone()))
            .order_by_desc(entity::vote::Column::Created)
            .all(self.db)
            .await?;

        let mut tips: HashMap<i32, UrlTip> = HashMap::new();
        for tip in entity::prelude::UrlTip::find()
            .filter(entity::url_tip::Column::PostId.is_in(post_ids.clone()))
            .order_by_asc(entity::url_tip::Column::Created)
            .order_by_asc(entity::url_tip::Column::Id)
            .all(self.db)
            .await?
        {
            tips.insert(tip.post_id, UrlTip::from_entity(tip));
        }

        let mut lineups: HashMap<i32, i32> = HashMap::new();
        for link in entity::prelude::PostLineup::find()
            .filter(entity::post_lineup::Column::PostId.is_in(post_ids.clone()))
            .order_by_asc(entity::post_lineup::Column::Id)
            .all(self.db)
            .await?
        {
            lineups.insert(link.post_id, link.lineup_id);
        }

        let scissored: HashSet<i32> = entity::prelude::ScissoredPost::find()
            .filter(entity::scissored_post::Column::PostId.is_in(post_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|s| s.post_id)
            .collect();

        let mut user_ids: HashSet<String> = posts
            .iter()
            .map(|p| p.created_by_user_id.clone())
            .collect();
        user_ids.extend(votes.iter().map(|v| v.created_by_user_id.clone()));
        user_ids.extend(parents.values().map(|p| p.created_by_user_id.clone()));
        let user_ids: Vec<String> = user_ids.into_iter().collect();

        let authors = UserRepository::new(self.db)
            .get_summaries(&user_ids)
            .await?;

        let mut votes_by_post: HashMap<i32, Vec<CastVote>> = HashMap::new();
        for vote in votes {
            let by_nick = authors
                .get(&vote.created_by_user_id)
                .and_then(|a| a.nick.clone());
            votes_by_post.entry(vote.post_id).or_default().push(CastVote {
                vote_type: vote.vote_type,
                created_by_user_id: vote.created_by_user_id,
                by_nick,
            });
        }

        Ok(posts
            .into_iter()
            .map(|post| PostWithRelations {
                author: authors.get(&post.created_by_user_id).cloned(),
                votes: votes_by_post.remove(&post.id).unwrap_or_default(),
                url_tip: tips.remove(&post.id),
                lineup_id: lineups.get(&post.id).copied(),
                is_scissored: scissored.contains(&post.id),
                parent: post
                    .parent_post_id
                    .and_then(|id| build_parent(id, &parents, &authors, 0)),
                post,
            })
            .collect())
    }

    fn filtered(&self, filter: &Filter) -> Select<entity::post::Entity> {
        let mut query = self.except_scissored();

        let excluded = filter.excluded_user_ids();
        if !excluded.is_empty() {
            query = query.filter(entity::post::Column::CreatedByUserId.is_not_in(excluded));
        }

        let included = filter.included_user_ids();
        if !included.is_empty() {
            query = query.filter(entity::post::Column::CreatedByUserId.is_in(included));
        }

        if let Some(from) = filter.from_date.and_then(start_of_day) {
            query = query.filter(entity::post::Column::Created.gte(from));
        }

        if let Some(to) = filter
            .to_date
            .and_then(|d| d.checked_add_days(Days::new(1)))
            .and_then(start_of_day)
        {
            query = query.filter(entity::post::Column::Created.lt(to));
        }

        let with_lineup = Query::select()
            .column(entity::post_lineup::Column::PostId)
            .from(entity::prelude::PostLineup)
            .to_owned();

        match filter.starting_eleven {
            StartingEleven::All => query,
            StartingEleven::With => query.filter(entity::post::Column::Id.in_subquery(with_lineup)),
            StartingEleven::Without => {
                query.filter(entity::post::Column::Id.not_in_subquery(with_lineup))
            }
        }
    }

    fn by_user(&self, user_id: &str) -> Select<entity::post::Entity> {
        self.except_scissored()
            .filter(entity::post::Column::CreatedByUserId.eq(user_id))
    }

    fn except_scissored(&self) -> Select<entity::post::Entity> {
        let scissored = Query::select()
            .column(entity::scissored_post::Column::PostId)
            .from(entity::prelude::ScissoredPost)
            .to_owned();

        entity::prelude::Post::find().filter(entity::post::Column::Id.not_in_subquery(scissored))
    }

    /// Every ancestor of `posts`, keyed by id.
    async fn load_parent_chains(
        &self,
        posts: &[PostRecord],
    ) -> Result<HashMap<i32, PostRecord>, DbErr> {
        let mut parents: HashMap<i32, PostRecord> = HashMap::new();
        let mut pending: Vec<i32> = posts.iter().filter_map(|p| p.parent_post_id).collect();

        for _ in 0..MAX_PARENT_DEPTH {
            pending.retain(|id| !parents.contains_key(id));
            pending.sort_unstable();
            pending.dedup();
            if pending.is_empty() {
                break;
            }

            let found = entity::prelude::Post::find()
                .filter(entity::post::Column::Id.is_in(pending.clone()))
                .all(self.db)
                .await?;

            pending = found.iter().filter_map(|p| p.parent_post_id).collect();
            parents.extend(
                found
                    .into_iter()
                    .map(|p| (p.id, PostRecord::from_entity(p))),
            );
        }

        Ok(parents)
    }
}

fn start_of_day(date: NaiveDate) -> Option<chrono::DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc())
}

fn build_parent(
    id: i32,
    parents: &HashMap<i32, PostRecord>,
    authors: &HashMap<String, UserSummary>,
    depth: usize,
) -> Option<ParentPostWithAuthor> {
    if depth >= MAX_PARENT_DEPTH {
        return None;
    }

    let post = parents.get(&id)?.clone();
    let parent = post
        .parent_post_id
        .filter(|parent_id| *parent_id != id)
        .and_then(|parent_id| build_parent(parent_id, parents, authors, depth + 1))
        .map(Box::new);

    Some(ParentPostWithAuthor {
        author: authors.get(&post.created_by_user_id).cloned(),
        post,
        parent,
    })
}

async fn insert_url_tip(txn: &DatabaseTransaction, post_id: i32, href: &str) -> Result<(), DbErr> {
    entity::url_tip::ActiveModel {
        post_id: ActiveValue::Set(post_id),
        href: ActiveValue::Set(href.to_string()),
        clicks: ActiveValue::Set(0),
        created: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    Ok(())
}

async fn insert_lineup_link(
    txn: &DatabaseTransaction,
    post_id: i32,
    lineup_id: i32,
) -> Result<(), DbErr> {
    entity::post_lineup::ActiveModel {
        post_id: ActiveValue::Set(post_id),
        lineup_id: ActiveValue::Set(lineup_id),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    Ok(())
}
