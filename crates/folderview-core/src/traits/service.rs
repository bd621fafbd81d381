//! Service marker trait.

/// Marker trait for business logic services.
///
/// Services in `folderview-service` implement this so the API state can
/// hold them behind `Arc` and share them across handler tasks.
pub trait Service: Send + Sync + 'static {}
