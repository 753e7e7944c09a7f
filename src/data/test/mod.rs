mod lot;
mod reservation;
mod user;
