//! Connectivity client trait

/// Trait for the companion data-layer client
///
/// Connection results come back as [`crate::state::DataLayerEvent`]s.
pub trait DataLayer {
    /// Begin connecting; completion is reported asynchronously
    fn connect(&mut self);

    /// Drop the connection
    fn disconnect(&mut self);

    /// Check if the client is connected
    fn is_connected(&self) -> bool;

    /// Attach the data-changed listener
    fn add_listener(&mut self);

    /// Detach the data-changed listener
    fn remove_listener(&mut self);
}
