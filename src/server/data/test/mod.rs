mod favorite_player;
mod filter;
mod invite;
mod nickname;
mod personal_message;
mod post;
mod role;
mod squad;
mod url_tip;
mod user;
mod vote;
