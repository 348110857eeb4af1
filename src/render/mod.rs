pub(crate) mod compose;
pub(crate) mod encode;
pub(crate) mod executor;
pub(crate) mod pipeline;
