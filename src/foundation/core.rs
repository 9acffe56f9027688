pub(crate) use kurbo::BezPath;
