//! Forum filter data repository.
//!
//! Each user has at most one stored filter. User ids are kept as comma
//! separated lists; loading resolves them back to nicknames for the form.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::{
    data::nickname::NicknameRepository, model::filter::Filter, util::parse::parse_id_list,
};

pub struct FilterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FilterRepository<'a> {
    /// Creates a new FilterRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `FilterRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// The stored filter of `user_id` with every referenced user's current nick.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the filter
    ///
    /// # Returns
    /// - `Ok(Some(Filter))` - Stored filter
    /// - `Ok(None)` - The user has not saved a filter
    /// - `Err(DbErr)` - Database error
    pub async fn get_by_user(&self, user_id: &str) -> Result<Option<Filter>, DbErr> {
        let Some(stored) = self.find(user_id).await? else {
            return Ok(None);
        };

        let mut ids = parse_id_list(&stored.excluded_user_ids);
        ids.extend(parse_id_list(&stored.included_user_ids));
        let nicks = NicknameRepository::new(self.db)
            .current_for_users(&ids)
            .await?;

        Ok(Some(Filter::from_entity(stored, &nicks)))
    }

    /// Stores a first filter for `user_id`.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the filter
    /// - `filter` - Validated filter values
    ///
    /// # Returns
    /// - `Ok(())` - Filter stored
    /// - `Err(DbErr)` - Insert failed, or `posts_per_page` does not fit the column
    pub async fn create(&self, user_id: &str, filter: &Filter) -> Result<(), DbErr> {
        entity::user_filter::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            posts_per_page: ActiveValue::Set(posts_per_page_column(filter)?),
            excluded_user_ids: ActiveValue::Set(filter.excluded_user_id_list()),
            included_user_ids: ActiveValue::Set(filter.included_user_id_list()),
            from_date: ActiveValue::Set(filter.from_date),
            to_date: ActiveValue::Set(filter.to_date),
            starting_eleven: ActiveValue::Set(filter.starting_eleven),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Overwrites the stored filter of `user_id`.
    ///
    /// # Returns
    /// - `Ok(true)` - Filter updated
    /// - `Ok(false)` - The user has no stored filter yet
    /// - `Err(DbErr)` - Database error, or `posts_per_page` does not fit the column
    pub async fn update(&self, user_id: &str, filter: &Filter) -> Result<bool, DbErr> {
        let Some(existing) = self.find(user_id).await? else {
            return Ok(false);
        };

        let mut active: entity::user_filter::ActiveModel = existing.into();
        active.posts_per_page = ActiveValue::Set(posts_per_page_column(filter)?);
        active.excluded_user_ids = ActiveValue::Set(filter.excluded_user_id_list());
        active.included_user_ids = ActiveValue::Set(filter.included_user_id_list());
        active.from_date = ActiveValue::Set(filter.from_date);
        active.to_date = ActiveValue::Set(filter.to_date);
        active.starting_eleven = ActiveValue::Set(filter.starting_eleven);
        active.update(self.db).await?;

        Ok(true)
    }

    async fn find(&self, user_id: &str) -> Result<Option<entity::user_filter::Model>, DbErr> {
        entity::prelude::UserFilter::find()
            .filter(entity::user_filter::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }
}

fn posts_per_page_column(filter: &Filter) -> Result<i32, DbErr> {
    i32::try_from(filter.posts_per_page).map_err(|_| {
        DbErr::Custom(format!(
            "posts_per_page {} does not fit the user_filter column",
            filter.posts_per_page
        ))
    })
}
