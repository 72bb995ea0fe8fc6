// Natural-language candidate search.
// Query interpretation and matching are pure and synchronous; the handlers are
// the only async layer and own no session state.

pub mod handlers;
pub mod matcher;
pub mod response;
pub mod signals;
