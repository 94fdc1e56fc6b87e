mod match_player;
mod matches;
mod player;
mod team;
mod user;
