//! Foreign-object handles passed through the dispatcher unchanged.
//!
//! `Directory.GetParent`, `Regex.Match`, and the registry collaborator all
//! hand back platform objects the dispatcher does not interpret. `Opaque`
//! carries them by `Any` so the dispatcher itself stays free of any
//! dependency on what those objects actually are.

use std::any::Any;
use std::sync::Arc;

#[derive(Clone)]
pub struct Opaque {
    /// Short, stable name for the kind of handle (used in error messages
    /// and the reflection-fallback log's `ObjectInstanceType` field).
    pub kind: &'static str,
    pub payload: Arc<dyn Any + Send + Sync>,
}

impl Opaque {
    pub fn new(kind: &'static str, payload: impl Any + Send + Sync) -> Self {
        Self {
            kind,
            payload: Arc::new(payload),
        }
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }
}

impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && Arc::ptr_eq(&self.payload, &other.payload)
    }
}

impl std::fmt::Debug for Opaque {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Opaque({})", self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn downcast_round_trips() {
        let o = Opaque::new("TestHandle", 42i32);
        assert_eq!(o.downcast_ref::<i32>(), Some(&42));
        assert_eq!(o.downcast_ref::<String>(), None);
    }

    #[test]
    fn equality_is_pointer_identity() {
        let a = Opaque::new("TestHandle", 1i32);
        let b = a.clone();
        let c = Opaque::new("TestHandle", 1i32);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
