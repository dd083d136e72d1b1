mod auth;
mod chronicle;
mod invite;
mod personal_message;
mod poll;
mod post;
mod squad;
mod upload;
mod user;
