pub use super::chronicle::Entity as Chronicle;
pub use super::favorite_player::Entity as FavoritePlayer;
pub use super::formation::Entity as Formation;
pub use super::game::Entity as Game;
pub use super::invite::Entity as Invite;
pub use super::lineup::Entity as Lineup;
pub use super::lineup_player::Entity as LineupPlayer;
pub use super::nickname::Entity as Nickname;
pub use super::personal_message::Entity as PersonalMessage;
pub use super::player::Entity as Player;
pub use super::player_event::Entity as PlayerEvent;
pub use super::player_position::Entity as PlayerPosition;
pub use super::poll::Entity as Poll;
pub use super::poll_alternative::Entity as PollAlternative;
pub use super::poll_vote::Entity as PollVote;
pub use super::position::Entity as Position;
pub use super::post::Entity as Post;
pub use super::post_lineup::Entity as PostLineup;
pub use super::region::Entity as Region;
pub use super::role::Entity as Role;
pub use super::saved_post::Entity as SavedPost;
pub use super::scissored_post::Entity as ScissoredPost;
pub use super::title::Entity as Title;
pub use super::url_tip::Entity as UrlTip;
pub use super::user::Entity as User;
pub use super::user_filter::Entity as UserFilter;
pub use super::user_role::Entity as UserRole;
pub use super::vote::Entity as Vote;
