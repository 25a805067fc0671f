mod announcement;
mod identity;
mod role;
mod route;
mod session;
mod theme;
