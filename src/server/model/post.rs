//! Forum post domain models.
//!
//! `PostWithRelations` is what the repository loads in one batch; `Post` is the
//! view of it for one viewer, with vote eligibility decided and the author
//! resolved to a summary.

use chrono::{DateTime, Utc};
use entity::vote::VoteType;

use crate::{
    model::forum::{
        CreatePostDto, ParentPostDto, PostDto, PostPageDto, UpdatePostDto, UrlTipDto, VoteDto,
        VoteTypeDto,
    },
    server::{
        model::user::UserSummary,
        util::{
            since::{since, since_opt},
            url_tip::rewrite_href,
        },
    },
};

const ANONYMOUS: &str = "anonymous";

/// A single post row.
#[derive(Debug, Clone, PartialEq)]
pub struct PostRecord {
    pub id: i32,
    pub message: String,
    pub created_by_user_id: String,
    pub parent_post_id: Option<i32>,
    pub created: DateTime<Utc>,
    pub updated: Option<DateTime<Utc>>,
}

impl PostRecord {
    pub fn from_entity(entity: entity::post::Model) -> Self {
        Self {
            id: entity.id,
            message: entity.message,
            created_by_user_id: entity.created_by_user_id,
            parent_post_id: entity.parent_post_id,
            created: entity.created,
            updated: entity.updated,
        }
    }
}

/// A vote as stored, with the voter's current nickname.
#[derive(Debug, Clone, PartialEq)]
pub struct CastVote {
    pub vote_type: VoteType,
    pub created_by_user_id: String,
    pub by_nick: Option<String>,
}

/// A reply target with its own author and reply target.
#[derive(Debug, Clone)]
pub struct ParentPostWithAuthor {
    pub post: PostRecord,
    pub author: Option<UserSummary>,
    pub parent: Option<Box<ParentPostWithAuthor>>,
}

/// A post with every related row the forum needs to render it.
#[derive(Debug, Clone)]
pub struct PostWithRelations {
    pub post: PostRecord,
    pub author: Option<UserSummary>,
    pub votes: Vec<CastVote>,
    /// Most recent url tip.
    pub url_tip: Option<UrlTip>,
    /// Most recently linked lineup.
    pub lineup_id: Option<i32>,
    pub is_scissored: bool,
    pub parent: Option<ParentPostWithAuthor>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vote {
    pub vote_type: VoteType,
    pub by_nick: String,
}

impl Vote {
    pub fn into_dto(self) -> VoteDto {
        VoteDto {
            vote_type: vote_type_dto(self.vote_type),
            by_nick_name: self.by_nick,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParentPost {
    pub id: i32,
    pub message: String,
    pub author: UserSummary,
    pub created: DateTime<Utc>,
    pub parent: Option<Box<ParentPost>>,
}

impl ParentPost {
    fn from_with_author(parent: ParentPostWithAuthor) -> Self {
        Self {
            author: author_summary(&parent.post, parent.author),
            id: parent.post.id,
            message: parent.post.message,
            created: parent.post.created,
            parent: parent
                .parent
                .map(|p| Box::new(ParentPost::from_with_author(*p))),
        }
    }

    fn into_dto(self, now: DateTime<Utc>) -> ParentPostDto {
        ParentPostDto {
            id: self.id,
            message: self.message,
            user: self.author.into_dto(),
            since: since(self.created, now),
            parent: self.parent.map(|p| Box::new(p.into_dto(now))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Post {
    pub id: i32,
    pub message: String,
    pub author: UserSummary,
    pub url_tip_href: Option<String>,
    pub votes: Vec<Vote>,
    pub parent: Option<ParentPost>,
    pub lineup_id: Option<i32>,
    pub created: DateTime<Utc>,
    pub updated: Option<DateTime<Utc>>,
    pub is_scissored: bool,
    pub logged_in_user_can_vote: bool,
}

impl Post {
    /// Builds the post as seen by `viewer_id`.
    ///
    /// The viewer may vote unless they are anonymous, wrote the post, or
    /// already voted on it.
    pub fn from_with_relations(relations: PostWithRelations, viewer_id: Option<&str>) -> Self {
        let logged_in_user_can_vote = match viewer_id {
            Some(viewer) => {
                relations.post.created_by_user_id != viewer
                    && !relations
                        .votes
                        .iter()
                        .any(|vote| vote.created_by_user_id == viewer)
            }
            None => false,
        };

        Self {
            author: author_summary(&relations.post, relations.author),
            id: relations.post.id,
            message: relations.post.message,
            url_tip_href: relations.url_tip.map(|tip| tip.href),
            votes: relations
                .votes
                .into_iter()
                .map(|vote| Vote {
                    vote_type: vote.vote_type,
                    by_nick: vote.by_nick.unwrap_or_else(|| ANONYMOUS.to_string()),
                })
                .collect(),
            parent: relations.parent.map(ParentPost::from_with_author),
            lineup_id: relations.lineup_id,
            created: relations.post.created,
            updated: relations.post.updated,
            is_scissored: relations.is_scissored,
            logged_in_user_can_vote,
        }
    }

    pub fn into_dto(self) -> PostDto {
        let now = Utc::now();
        PostDto {
            id: self.id,
            message: self.message,
            user: self.author.into_dto(),
            url_tip_href: rewrite_href(self.url_tip_href.as_deref()),
            votes: self.votes.into_iter().map(Vote::into_dto).collect(),
            parent_post: self.parent.map(|p| p.into_dto(now)),
            lineup_id: self.lineup_id,
            since: since(self.created, now),
            updated: since_opt(self.updated, now),
            is_scissored: self.is_scissored,
            logged_in_user_can_vote: self.logged_in_user_can_vote,
        }
    }
}

/// One page of posts.
#[derive(Debug, Clone)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub current_page: u64,
    pub number_of_pages: u64,
    pub total: u64,
}

impl PostPage {
    pub fn into_dto(self) -> PostPageDto {
        PostPageDto {
            data: self.posts.into_iter().map(Post::into_dto).collect(),
            current_page: self.current_page,
            number_of_pages: self.number_of_pages,
            total: self.total,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePostParams {
    pub message: String,
    pub created_by_user_id: String,
    pub parent_post_id: Option<i32>,
    pub url_tip_href: Option<String>,
    pub lineup_id: Option<i32>,
}

impl CreatePostParams {
    pub fn from_dto(created_by_user_id: String, dto: CreatePostDto) -> Self {
        Self {
            message: dto.message.trim().to_string(),
            created_by_user_id,
            parent_post_id: dto.parent_post_id,
            url_tip_href: non_blank(dto.url_tip_href),
            lineup_id: dto.lineup_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdatePostParams {
    pub id: i32,
    pub message: String,
    pub url_tip_href: Option<String>,
    pub lineup_id: Option<i32>,
}

impl UpdatePostParams {
    pub fn from_dto(dto: UpdatePostDto) -> Self {
        Self {
            id: dto.id,
            message: dto.message.trim().to_string(),
            url_tip_href: non_blank(dto.url_tip_href),
            lineup_id: dto.lineup_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateVoteParams {
    pub vote_type: VoteType,
    pub post_id: i32,
    pub created_by_user_id: String,
}

impl CreateVoteParams {
    pub fn new(vote_type: VoteTypeDto, post_id: i32, created_by_user_id: String) -> Self {
        Self {
            vote_type: match vote_type {
                VoteTypeDto::Up => VoteType::Up,
                VoteTypeDto::Down => VoteType::Down,
            },
            post_id,
            created_by_user_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UrlTip {
    pub id: i32,
    pub post_id: i32,
    pub href: String,
    pub clicks: i32,
    pub created: DateTime<Utc>,
}

impl UrlTip {
    pub fn from_entity(entity: entity::url_tip::Model) -> Self {
        Self {
            id: entity.id,
            post_id: entity.post_id,
            href: entity.href,
            clicks: entity.clicks,
            created: entity.created,
        }
    }

    pub fn into_dto(self) -> UrlTipDto {
        UrlTipDto {
            id: self.id,
            post_id: self.post_id,
            href: rewrite_href(Some(&self.href)).unwrap_or(self.href),
            clicks: self.clicks,
            since: since(self.created, Utc::now()),
        }
    }
}

fn author_summary(post: &PostRecord, author: Option<UserSummary>) -> UserSummary {
    author.unwrap_or_else(|| UserSummary::unknown(&post.created_by_user_id))
}

fn vote_type_dto(vote_type: VoteType) -> VoteTypeDto {
    match vote_type {
        VoteType::Up => VoteTypeDto::Up,
        VoteType::Down => VoteTypeDto::Down,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
