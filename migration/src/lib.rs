pub use sea_orm_migration::prelude::*;

mod m20260901_000001_create_region_table;
mod m20260901_000002_create_user_table;
mod m20260901_000003_create_nickname_table;
mod m20260901_000004_create_role_table;
mod m20260901_000005_create_user_role_table;
mod m20260901_000006_create_post_table;
mod m20260901_000007_create_vote_table;
mod m20260901_000008_create_url_tip_table;
mod m20260901_000009_create_scissored_post_table;
mod m20260901_000010_create_saved_post_table;
mod m20260901_000011_create_personal_message_table;
mod m20260901_000012_create_invite_table;
mod m20260901_000013_create_user_filter_table;
mod m20260901_000014_create_player_table;
mod m20260901_000015_create_position_table;
mod m20260901_000016_create_player_position_table;
mod m20260901_000017_create_formation_table;
mod m20260901_000018_create_lineup_table;
mod m20260901_000019_create_lineup_player_table;
mod m20260901_000020_create_post_lineup_table;
mod m20260901_000021_create_favorite_player_table;
mod m20260901_000022_create_game_table;
mod m20260901_000023_create_player_event_table;
mod m20260901_000024_create_title_table;
mod m20260901_000025_create_poll_table;
mod m20260901_000026_create_poll_alternative_table;
mod m20260901_000027_create_poll_vote_table;
mod m20260901_000028_create_chronicle_table;
mod m20260901_000029_seed_lookup_data;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260901_000001_create_region_table::Migration),
            Box::new(m20260901_000002_create_user_table::Migration),
            Box::new(m20260901_000003_create_nickname_table::Migration),
            Box::new(m20260901_000004_create_role_table::Migration),
            Box::new(m20260901_000005_create_user_role_table::Migration),
            Box::new(m20260901_000006_create_post_table::Migration),
            Box::new(m20260901_000007_create_vote_table::Migration),
            Box::new(m20260901_000008_create_url_tip_table::Migration),
            Box::new(m20260901_000009_create_scissored_post_table::Migration),
            Box::new(m20260901_000010_create_saved_post_table::Migration),
            Box::new(m20260901_000011_create_personal_message_table::Migration),
            Box::new(m20260901_000012_create_invite_table::Migration),
            Box::new(m20260901_000013_create_user_filter_table::Migration),
            Box::new(m20260901_000014_create_player_table::Migration),
            Box::new(m20260901_000015_create_position_table::Migration),
            Box::new(m20260901_000016_create_player_position_table::Migration),
            Box::new(m20260901_000017_create_formation_table::Migration),
            Box::new(m20260901_000018_create_lineup_table::Migration),
            Box::new(m20260901_000019_create_lineup_player_table::Migration),
            Box::new(m20260901_000020_create_post_lineup_table::Migration),
            Box::new(m20260901_000021_create_favorite_player_table::Migration),
            Box::new(m20260901_000022_create_game_table::Migration),
            Box::new(m20260901_000023_create_player_event_table::Migration),
            Box::new(m20260901_000024_create_title_table::Migration),
            Box::new(m20260901_000025_create_poll_table::Migration),
            Box::new(m20260901_000026_create_poll_alternative_table::Migration),
            Box::new(m20260901_000027_create_poll_vote_table::Migration),
            Box::new(m20260901_000028_create_chronicle_table::Migration),
            Box::new(m20260901_000029_seed_lookup_data::Migration),
        ]
    }
}
