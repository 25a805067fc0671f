pub mod announcement;
pub mod identity;
pub mod nav_item;
pub mod notice;
pub mod preferences;
pub mod redirect_target;
pub mod role;
pub mod route;
pub mod route_class;
pub mod session;
pub mod theme;
