pub mod averages;
pub mod entry;
pub mod history;
pub mod lifetime;
pub mod rounds;
pub mod scorecard;
pub mod template;

pub use averages::*;
pub use entry::*;
pub use history::*;
pub use lifetime::*;
pub use rounds::*;
pub use scorecard::*;
pub use template::*;
