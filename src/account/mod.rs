pub(crate) mod snapshot;
pub(crate) mod source;
