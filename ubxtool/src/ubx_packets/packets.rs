mod ack;
mod cfg;
mod cfg_val;
mod gnss;
mod inf;
mod mon;
mod nav;
mod nav_pvt;
mod nav_time;
mod rxm;
mod sec;
mod tim;

pub use ack::*;
pub use cfg::*;
pub use cfg_val::*;
pub use gnss::*;
pub use inf::*;
pub use mon::*;
pub use nav::*;
pub use nav_pvt::*;
pub use nav_time::*;
pub use rxm::*;
pub use sec::*;
pub use tim::*;
