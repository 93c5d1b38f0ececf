pub mod battleground;
pub mod invitation;
pub mod mission;
pub mod pagination;
pub mod score;
pub mod social;
pub mod team;
pub mod user;

pub use battleground::*;
pub use invitation::*;
pub use mission::*;
pub use pagination::*;
pub use score::*;
pub use social::*;
pub use team::*;
pub use user::*;
