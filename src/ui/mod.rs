pub mod assets;
pub mod bagging_view;
pub mod ensemble_view;
