pub(crate) mod fetcher;
pub(crate) mod task;
