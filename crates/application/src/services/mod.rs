//! Application services

mod page_session;
mod post_page_service;

pub use page_session::PostPageSession;
pub use post_page_service::{PostPageService, PostPageState, RECENT_POSTS_LIMIT};
