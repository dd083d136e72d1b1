//! Small pure helpers shared by the service and model layers.

pub mod formation;
pub mod paging;
pub mod parse;
pub mod since;
pub mod slug;
pub mod url_tip;
