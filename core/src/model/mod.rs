pub mod genre;
pub mod actor;
pub mod movie;
pub mod movie_genre;
pub mod movie_actor;
pub mod cinema_hall;
pub mod movie_session;
pub mod user;
pub mod session;
pub mod order;
pub mod ticket;
