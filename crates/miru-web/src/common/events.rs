pub use dominator::events::*;
