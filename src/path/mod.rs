pub(crate) mod default;
pub(crate) mod extract;
pub(crate) mod resolve;
