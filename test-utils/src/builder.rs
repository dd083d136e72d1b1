use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Tables are created in the order they are added. SQLite only checks foreign
/// keys on insert, so referenced tables just need to be present before rows are
/// written.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_user_tables()
///     .with_table(Invite)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds a table created from the entity definition.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Users with nicknames, roles, regions and forum filters.
    ///
    /// Enough for account and nickname writes. A full profile also reads
    /// favorite players and post counts, so use `with_forum_tables` for that.
    pub fn with_user_tables(self) -> Self {
        self.with_table(Region)
            .with_table(User)
            .with_table(Nickname)
            .with_table(Role)
            .with_table(UserRole)
            .with_table(UserFilter)
    }

    /// Players, positions, formations, lineups, games and titles.
    ///
    /// Lineups and favorite players reference users, so add the user tables
    /// too before inserting those rows.
    pub fn with_squad_tables(self) -> Self {
        self.with_table(Player)
            .with_table(Position)
            .with_table(PlayerPosition)
            .with_table(Formation)
            .with_table(Lineup)
            .with_table(LineupPlayer)
            .with_table(FavoritePlayer)
            .with_table(Game)
            .with_table(PlayerEvent)
            .with_table(Title)
    }

    /// Everything a forum post touches: users, squad, posts and their
    /// votes, tips, lineup links, saves and scissor markers.
    pub fn with_forum_tables(self) -> Self {
        self.with_user_tables()
            .with_squad_tables()
            .with_table(Post)
            .with_table(Vote)
            .with_table(UrlTip)
            .with_table(ScissoredPost)
            .with_table(SavedPost)
            .with_table(PostLineup)
    }

    /// Full schema.
    pub fn with_all_tables(self) -> Self {
        self.with_forum_tables()
            .with_table(PersonalMessage)
            .with_table(Invite)
            .with_table(Poll)
            .with_table(PollAlternative)
            .with_table(PollVote)
            .with_table(Chronicle)
    }

    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
