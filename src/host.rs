//! Calls into an embedding runtime.
//!
//! When cfgpatch runs inside a host application, the host exposes a small
//! set of property, port and table operations. Only the call shape matters
//! here: every getter returns an optional value and every setter reports
//! success. [`DetachedHost`] stands in when no runtime is attached.

/// Operations offered by an embedding runtime.
pub trait HostApi {
    fn get_property_value(&self, entity: &str, property: &str) -> Option<String>;

    fn set_property_value(&mut self, entity: &str, property: &str, value: &str) -> bool;

    fn get_port_data(&self, port: &str) -> Option<String>;

    fn set_port_data(&mut self, port: &str, data: &str) -> bool;

    fn get_port_meta_data(&self, port: &str) -> Option<String>;

    fn set_port_meta_data(&mut self, port: &str, meta: &str) -> bool;

    fn get_table_cell_value(&self, file: &str, row: usize, column: usize) -> Option<String>;

    /// Persist pending changes for one entity.
    fn flush(&mut self, entity: &str) -> bool;

    /// Persist pending changes for the whole session.
    fn flush_all(&mut self) -> bool;
}

/// Host used when no runtime is embedded.
///
/// Reads yield `None`, writes yield `false`. Every call is traced so a
/// caller can see which operations would have reached the runtime.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedHost;

impl DetachedHost {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl HostApi for DetachedHost {
    fn get_property_value(&self, entity: &str, property: &str) -> Option<String> {
        tracing::trace!(entity, property, "get_property_value on detached host");
        None
    }

    fn set_property_value(&mut self, entity: &str, property: &str, value: &str) -> bool {
        tracing::trace!(entity, property, value, "set_property_value on detached host");
        false
    }

    fn get_port_data(&self, port: &str) -> Option<String> {
        tracing::trace!(port, "get_port_data on detached host");
        None
    }

    fn set_port_data(&mut self, port: &str, data: &str) -> bool {
        tracing::trace!(port, data, "set_port_data on detached host");
        false
    }

    fn get_port_meta_data(&self, port: &str) -> Option<String> {
        tracing::trace!(port, "get_port_meta_data on detached host");
        None
    }

    fn set_port_meta_data(&mut self, port: &str, meta: &str) -> bool {
        tracing::trace!(port, meta, "set_port_meta_data on detached host");
        false
    }

    fn get_table_cell_value(&self, file: &str, row: usize, column: usize) -> Option<String> {
        tracing::trace!(file, row, column, "get_table_cell_value on detached host");
        None
    }

    fn flush(&mut self, entity: &str) -> bool {
        tracing::trace!(entity, "flush on detached host");
        false
    }

    fn flush_all(&mut self) -> bool {
        tracing::trace!("flush_all on detached host");
        false
    }
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
