use crate::server::data::url_tip::UrlTipRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod increment_clicks;
