//! Asset domain entities.

pub mod model;
pub mod visibility;

pub use model::AssetRecord;
pub use visibility::AssetVisibility;
