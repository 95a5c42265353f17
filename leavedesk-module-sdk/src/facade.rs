//! Named state facades exposed by a module.

use std::any::Any;

/// A named handle presentation code can look up on a descriptor.
///
/// Facades are shared (`Arc`) and must be usable from any thread. Concrete
/// types are recovered with `<dyn StateFacade>::downcast_ref`.
pub trait StateFacade: Send + Sync + 'static {
    /// Registry name, unique within a descriptor (e.g. `hr-leave`).
    fn name(&self) -> &str;

    /// Clears any facade-local state. Stateless facades keep the no-op.
    fn reset(&self) {}

    fn as_any(&self) -> &dyn Any;
}

impl dyn StateFacade {
    pub fn downcast_ref<T: StateFacade>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}
