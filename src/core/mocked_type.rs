//! Descriptor of the type a mock stands in for.

use std::any::TypeId;
use std::fmt;

/// Runtime descriptor of a mocked type, passed to listeners on mock creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MockedType {
    name: &'static str,
    id: TypeId,
}

impl MockedType {
    /// Describe `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            name: std::any::type_name::<T>(),
            id: TypeId::of::<T>(),
        }
    }

    /// Type name as reported by `std::any::type_name`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get the `TypeId` of the mocked type.
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Check whether this descriptor names `T`.
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl fmt::Display for MockedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
