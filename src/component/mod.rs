pub(crate) mod props;
pub(crate) mod widget;
