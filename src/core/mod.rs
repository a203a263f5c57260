//! Framework-independent logic: the jury-theorem math and the bagging
//! animation state machine. Nothing in here knows about egui.

pub mod animation;
pub mod easing;
pub mod ensemble;
pub mod layout;
pub mod points;
pub mod stage;
