pub use super::match_player::Entity as MatchPlayer;
pub use super::matches::Entity as Matches;
pub use super::player::Entity as Player;
pub use super::team::Entity as Team;
pub use super::user::Entity as User;
