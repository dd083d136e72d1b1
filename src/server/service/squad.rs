//! Squad roster business logic: players, lineups, games and titles.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        favorite_player::FavoritePlayerRepository,
        squad::{
            formation::FormationRepository, game::GameRepository, lineup::LineupRepository,
            player::PlayerRepository, position::PositionRepository, title::TitleRepository,
        },
    },
    error::AppError,
    model::{
        result::{
            ActionResult, CREATE_GAME, CREATE_PLAYER, CREATE_TITLE, EMPTY_NAME,
            FORMATION_NOT_FOUND, INVALID_POSITION, LINEUP_NOT_FOUND, PLAYER_NOT_FOUND, UPDATE_PLAYER,
        },
        squad::{
            CreateGameParams, CreateLineupParams, CreatePlayerParams, CreateTitleParams,
            Formation, Game, Lineup, Player, Position, Title, UpdatePlayerParams,
        },
    },
};

pub struct SquadService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> SquadService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Players not sold, by last name.
    pub async fn get_players(&self) -> Result<Vec<Player>, AppError> {
        Ok(PlayerRepository::new(self.db).get_active().await?)
    }

    pub async fn get_player(&self, player_id: i32) -> Result<Player, AppError> {
        PlayerRepository::new(self.db)
            .get_by_id(player_id)
            .await?
            .ok_or_else(|| AppError::NotFound(PLAYER_NOT_FOUND.to_string()))
    }

    pub async fn create_player(
        &self,
        params: CreatePlayerParams,
    ) -> Result<Vec<ActionResult>, AppError> {
        if params.first_name.is_empty() || params.last_name.is_empty() {
            return Err(AppError::BadRequest(EMPTY_NAME.to_string()));
        }

        let player = PlayerRepository::new(self.db).create(params).await?;
        tracing::info!("Player {} {} created", player.first_name, player.last_name);

        Ok(vec![ActionResult::from_outcome(true, CREATE_PLAYER)])
    }

    /// Updates a player and replaces its positions.
    ///
    /// Marking a player as sold also removes it as favorite player for every
    /// user.
    ///
    /// # Returns
    /// - `Ok(results)` - Player updated
    /// - `Err(AppError::NotFound)` - No such player
    /// - `Err(AppError::BadRequest)` - Empty name
    pub async fn update_player(
        &self,
        params: UpdatePlayerParams,
    ) -> Result<Vec<ActionResult>, AppError> {
        if params.first_name.is_empty() || params.last_name.is_empty() {
            return Err(AppError::BadRequest(EMPTY_NAME.to_string()));
        }

        if !PlayerRepository::new(self.db).update(&params).await? {
            return Err(AppError::NotFound(PLAYER_NOT_FOUND.to_string()));
        }

        if params.is_sold {
            let removed = FavoritePlayerRepository::new(self.db)
                .delete_by_player(params.id)
                .await?;
            if removed > 0 {
                tracing::info!(
                    "Player {} sold, removed from {} favorite lists",
                    params.id,
                    removed
                );
            }
        }

        Ok(vec![ActionResult::from_outcome(true, UPDATE_PLAYER)])
    }

    pub async fn get_positions(&self) -> Result<Vec<Position>, AppError> {
        Ok(PositionRepository::new(self.db).get_all().await?)
    }

    pub async fn get_formations(&self) -> Result<Vec<Formation>, AppError> {
        Ok(FormationRepository::new(self.db).get_all().await?)
    }

    pub async fn get_lineup(&self, lineup_id: i32) -> Result<Lineup, AppError> {
        LineupRepository::new(self.db)
            .get_by_id(lineup_id)
            .await?
            .ok_or_else(|| AppError::NotFound(LINEUP_NOT_FOUND.to_string()))
    }

    /// The lineup most recently attached to `post_id`.
    pub async fn get_lineup_by_post(&self, post_id: i32) -> Result<Lineup, AppError> {
        LineupRepository::new(self.db)
            .get_by_post(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(LINEUP_NOT_FOUND.to_string()))
    }

    pub async fn get_user_lineups(&self, user_id: &str) -> Result<Vec<Lineup>, AppError> {
        Ok(LineupRepository::new(self.db).get_by_user(user_id).await?)
    }

    /// Saves a lineup and returns its id.
    ///
    /// # Returns
    /// - `Ok(id)` - Id of the new lineup
    /// - `Err(AppError::BadRequest)` - Unknown formation, player or position
    pub async fn create_lineup(&self, params: CreateLineupParams) -> Result<i32, AppError> {
        if FormationRepository::new(self.db)
            .get_by_id(params.formation_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(FORMATION_NOT_FOUND.to_string()));
        }

        let player_repo = PlayerRepository::new(self.db);
        for (player_id, _) in &params.players {
            if player_repo.get_by_id(*player_id).await?.is_none() {
                return Err(AppError::BadRequest(PLAYER_NOT_FOUND.to_string()));
            }
        }

        let position_ids: Vec<i32> = params.players.iter().map(|(_, p)| *p).collect();
        if !PositionRepository::new(self.db)
            .all_exist(&position_ids)
            .await?
        {
            return Err(AppError::BadRequest(INVALID_POSITION.to_string()));
        }

        Ok(LineupRepository::new(self.db).create(params).await?)
    }

    pub async fn get_games(&self) -> Result<Vec<Game>, AppError> {
        Ok(GameRepository::new(self.db).get_all().await?)
    }

    pub async fn create_game(
        &self,
        params: CreateGameParams,
    ) -> Result<Vec<ActionResult>, AppError> {
        let player_repo = PlayerRepository::new(self.db);
        for event in &params.events {
            if player_repo.get_by_id(event.player_id).await?.is_none() {
                return Err(AppError::BadRequest(PLAYER_NOT_FOUND.to_string()));
            }
        }

        GameRepository::new(self.db).create(params).await?;

        Ok(vec![ActionResult::from_outcome(true, CREATE_GAME)])
    }

    pub async fn get_titles(&self) -> Result<Vec<Title>, AppError> {
        Ok(TitleRepository::new(self.db).get_all().await?)
    }

    pub async fn create_title(
        &self,
        params: CreateTitleParams,
    ) -> Result<Vec<ActionResult>, AppError> {
        TitleRepository::new(self.db).create(params).await?;

        Ok(vec![ActionResult::from_outcome(true, CREATE_TITLE)])
    }
}
