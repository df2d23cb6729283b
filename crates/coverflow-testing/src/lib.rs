//! Testing utilities and harness for the coverflow pager container

pub mod headless_pager;
pub mod recorders;
pub mod robot;
pub mod robot_assertions;

pub use headless_pager::HeadlessPager;
pub use recorders::{ClickRecorder, InvalidationCounter};
pub use robot::TouchRobot;

pub mod prelude {
    pub use crate::headless_pager::HeadlessPager;
    pub use crate::recorders::{ClickRecorder, InvalidationCounter};
    pub use crate::robot::TouchRobot;
    pub use crate::robot_assertions;
}
