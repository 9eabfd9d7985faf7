pub mod climate;
pub mod commodity;
pub mod news;
pub mod price;
pub mod profile;
pub mod seasonal;

pub use climate::*;
pub use commodity::*;
pub use news::*;
pub use price::*;
pub use profile::*;
pub use seasonal::*;
